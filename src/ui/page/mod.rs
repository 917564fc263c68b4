// SPDX-License-Identifier: MPL-2.0
//! Landing page: static sections around the embedded gallery widget.
//!
//! Sections, top to bottom: hero, gallery, features, stakeholders, global
//! impact, footer. Only the hero's calls to action and the gallery produce
//! messages.

mod features;
mod footer;
mod hero;
mod impact;
mod stakeholders;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::styles;
use iced::widget::{container, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
}

/// Messages emitted by the page.
#[derive(Debug, Clone)]
pub enum Message {
    GetStarted,
    LearnMore,
    Gallery(gallery::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenFileDialog,
}

/// Applies a page message. Gallery messages go to the embedded widget.
pub fn update(gallery: &mut gallery::State, message: Message) -> Event {
    match message {
        Message::GetStarted => Event::OpenFileDialog,
        Message::LearnMore => {
            tracing::info!("learn more requested");
            Event::None
        }
        Message::Gallery(message) => match gallery.update(message) {
            gallery::Effect::OpenFileDialog => Event::OpenFileDialog,
            gallery::Effect::None => Event::None,
        },
    }
}

/// Render the whole page as one column. Scrolling is left to the caller.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let gallery_heading = Text::new(i18n.tr("gallery-section-title"))
        .size(typography::TITLE_LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let gallery_section = Column::new()
        .spacing(spacing::XL)
        .push(gallery_heading)
        .push(
            ctx.gallery
                .view(gallery::ViewContext { i18n })
                .map(Message::Gallery),
        );

    Column::new()
        .width(Length::Fill)
        .push(section(hero::view(i18n), styles::container::section_accent))
        .push(section(gallery_section, styles::container::section))
        .push(section(features::view(i18n), styles::container::section))
        .push(section(
            stakeholders::view(i18n),
            styles::container::section_accent,
        ))
        .push(section(impact::view(i18n), styles::container::section))
        .push(footer::view(i18n))
        .into()
}

/// Full-width band with the content centered and capped in width.
fn section<'a>(
    content: impl Into<Element<'a, Message>>,
    style: fn(&Theme) -> container::Style,
) -> Element<'a, Message> {
    Container::new(
        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .width(Length::Fill)
    .padding([spacing::SECTION, spacing::LG])
    .align_x(alignment::Horizontal::Center)
    .style(style)
    .into()
}

/// Section heading shared by the card sections.
fn heading<'a>(i18n: &I18n, key: &str) -> Text<'a> {
    Text::new(i18n.tr(key))
        .size(typography::TITLE_LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
}
