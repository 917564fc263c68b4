// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page scrolls as a whole; the gallery's viewer, when open, is stacked
//! on top of it and covers the window.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::{gallery, page};
use iced::widget::{Scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Scrollable::new(page::view(page::ViewContext {
        i18n: ctx.i18n,
        gallery: ctx.gallery,
    }))
    .width(Length::Fill)
    .height(Length::Fill);

    let content: Element<'_, Message> = Element::from(content).map(Message::Page);

    match ctx
        .gallery
        .modal_view(gallery::ViewContext { i18n: ctx.i18n })
    {
        Some(modal) => Stack::new()
            .push(content)
            .push(modal.map(|message| Message::Page(page::Message::Gallery(message))))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => content,
    }
}
