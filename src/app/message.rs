// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::loads::LoadTicket;
use crate::gallery::SelectedFile;
use crate::ui::page;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Page messages (including the
/// embedded gallery's) are forwarded; the rest come from async tasks and
/// window events.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    /// Paths chosen in the file dialog. Empty when the dialog was cancelled.
    OpenFileDialogResult(Vec<PathBuf>),
    /// Files read from disk for the request holding `ticket`.
    FilesLoaded {
        ticket: LoadTicket,
        files: Vec<SelectedFile>,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Images to add to the gallery on startup.
    pub files: Vec<PathBuf>,
}
