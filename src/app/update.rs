// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Handlers mutate state through [`UpdateContext`] and return the follow-up
//! [`Task`]. File dialogs and file reads only ever run inside tasks; their
//! results come back as messages.

use super::loads::{LoadQueue, LoadTicket};
use super::Message;
use crate::gallery::{self, SelectedFile};
use crate::ui::gallery as gallery_ui;
use crate::ui::page;
use iced::Task;
use std::path::PathBuf;

/// Mutable application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery_ui::State,
    pub loads: &'a mut LoadQueue,
    /// Title for the native file dialog, already localized.
    pub dialog_title: String,
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match page::update(ctx.gallery, message) {
        page::Event::OpenFileDialog => open_file_dialog(ctx.dialog_title.clone()),
        page::Event::None => Task::none(),
    }
}

/// Opens the multi-select picker, limited to readable image formats.
pub fn open_file_dialog(title: String) -> Task<Message> {
    Task::perform(
        async move {
            let extensions = gallery::file::supported_extensions();
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter("Images", extensions.as_slice())
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
                .unwrap_or_default()
        },
        Message::OpenFileDialogResult,
    )
}

/// A cancelled dialog yields no paths and changes nothing.
pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    paths: Vec<PathBuf>,
) -> Task<Message> {
    if paths.is_empty() {
        tracing::debug!("file dialog closed without a selection");
        return Task::none();
    }
    load_files(ctx.loads, paths)
}

/// Reads the files in the background. Failures are logged and skipped.
///
/// Requests may finish in any order; results are applied in the order the
/// requests were issued.
pub fn load_files(loads: &mut LoadQueue, paths: Vec<PathBuf>) -> Task<Message> {
    let ticket = loads.issue();
    tracing::debug!(ticket, count = paths.len(), "loading files");
    Task::perform(gallery::file::load_all(paths), move |files| {
        Message::FilesLoaded { ticket, files }
    })
}

pub fn handle_files_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: LoadTicket,
    files: Vec<SelectedFile>,
) -> Task<Message> {
    for batch in ctx.loads.complete(ticket, files) {
        let added = ctx.gallery.add_files(batch);
        tracing::info!(added, total = ctx.gallery.gallery().len(), "images added");
    }
    Task::none()
}

/// Releases every display handle, then exits.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.gallery.teardown();
    let ledger = ctx.gallery.gallery().ledger();
    tracing::info!(
        created = ledger.created(),
        released = ledger.released(),
        "gallery torn down"
    );
    iced::exit()
}
