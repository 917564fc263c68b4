// SPDX-License-Identifier: MPL-2.0
//! Hero banner with the two calls to action.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment, Element, Length};

pub(super) const KEYS: [&str; 5] = [
    "hero-title",
    "hero-tagline",
    "hero-subtitle",
    "hero-get-started",
    "hero-learn-more",
];

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("hero-title"))
        .size(typography::DISPLAY)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let tagline = Text::new(i18n.tr("hero-tagline"))
        .size(typography::DISPLAY)
        .color(palette::PRIMARY_600)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let subtitle = Text::new(i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .color(palette::GRAY_600)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let get_started = button(Text::new(i18n.tr("hero-get-started")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary)
        .on_press(Message::GetStarted);

    let learn_more = button(Text::new(i18n.tr("hero-learn-more")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::outline)
        .on_press(Message::LearnMore);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(get_started)
        .push(learn_more);

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(Column::new().push(title).push(tagline))
        .push(subtitle)
        .push(actions)
        .into()
}
