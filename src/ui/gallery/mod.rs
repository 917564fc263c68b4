// SPDX-License-Identifier: MPL-2.0
//! Image gallery widget: upload control, thumbnail grid and modal viewer.
//!
//! The component owns a [`Gallery`] and turns its messages into gallery
//! operations. Anything that needs the outside world (opening the native
//! file dialog) is returned as an [`Effect`] for the application to perform.

mod empty_state;
mod grid;
mod modal;
mod upload;

use crate::app::config::GalleryConfig;
use crate::gallery::{Gallery, RecordId, SelectedFile};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};
use std::fmt;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the gallery widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// The upload control was pressed.
    OpenPicker,
    /// A thumbnail was clicked.
    ViewRequested(RecordId),
    /// A thumbnail's remove badge was pressed.
    RemoveRequested(RecordId),
    /// The viewer's delete action: remove the shown image, then close.
    DeleteViewed,
    CloseViewer,
}

/// Side effects the application performs on behalf of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenFileDialog,
}

/// Gallery widget state.
pub struct State {
    gallery: Gallery,
    columns: u32,
    thumbnail_size: f32,
    advisory_mb: u32,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("gallery", &self.gallery)
            .field("columns", &self.columns)
            .field("thumbnail_size", &self.thumbnail_size)
            .finish()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(&GalleryConfig::default())
    }
}

impl State {
    #[must_use]
    pub fn new(config: &GalleryConfig) -> Self {
        Self::with_gallery(Gallery::new(), config)
    }

    /// Wraps an existing gallery, typically one sharing a test ledger.
    #[must_use]
    pub fn with_gallery(gallery: Gallery, config: &GalleryConfig) -> Self {
        Self {
            gallery,
            columns: config.effective_columns(),
            thumbnail_size: config.effective_thumbnail_size(),
            advisory_mb: config.effective_advisory_max_file_mb(),
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::OpenPicker => return Effect::OpenFileDialog,
            Message::ViewRequested(id) => {
                self.gallery.view(&id);
            }
            Message::RemoveRequested(id) => {
                self.gallery.remove(&id);
            }
            Message::DeleteViewed => {
                let viewed = self.gallery.viewed().map(|record| record.id().clone());
                if let Some(id) = viewed {
                    self.gallery.remove(&id);
                }
                self.gallery.close_viewer();
            }
            Message::CloseViewer => self.gallery.close_viewer(),
        }
        Effect::None
    }

    /// Selects freshly loaded files. Returns how many records were added.
    pub fn add_files(&mut self, files: Vec<SelectedFile>) -> usize {
        self.gallery.select(files)
    }

    pub fn teardown(&mut self) {
        self.gallery.teardown();
    }

    /// Renders the gallery card. The viewer is rendered separately by
    /// [`State::modal_view`] so the application can layer it over the page.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let title = Text::new(i18n.tr("gallery-title")).size(typography::TITLE_MD);

        let heading = Text::new(i18n.tr("gallery-your-images"))
            .size(typography::TITLE_SM)
            .color(palette::GRAY_600);

        let images: Element<'a, Message> = if self.gallery.is_empty() {
            empty_state::view(i18n)
        } else {
            grid::view(self.gallery.records(), self.columns, self.thumbnail_size)
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .push(title)
            .push(upload::view(i18n, self.advisory_mb))
            .push(heading)
            .push(images);

        Container::new(
            Container::new(content)
                .padding(spacing::LG)
                .max_width(sizing::GALLERY_MAX_WIDTH)
                .style(styles::container::card),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
    }

    /// The modal viewer, if an image is being viewed.
    pub fn modal_view<'a>(&'a self, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
        self.gallery
            .viewed()
            .map(|record| modal::view(ctx.i18n, record))
    }
}
