// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown instead of the grid while no image is selected.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let icon = Text::new("🖼")
        .size(sizing::ICON_XL)
        .color(palette::GRAY_400);

    let message = Text::new(i18n.tr("gallery-empty"))
        .size(typography::BODY)
        .color(palette::GRAY_500);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(icon)
            .push(message),
    )
    .width(Length::Fill)
    .padding(spacing::XXL)
    .align_x(alignment::Horizontal::Center)
    .into()
}
