// SPDX-License-Identifier: MPL-2.0
//! Upload control: a large clickable zone that opens the file picker.
//! Files can also be dropped anywhere on the window.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view(i18n: &I18n, advisory_mb: u32) -> Element<'_, Message> {
    let icon = Text::new("⇪")
        .size(sizing::ICON_LG)
        .color(palette::PRIMARY_500);

    let prompt = Row::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr("gallery-upload-prompt"))
                .size(typography::BODY)
                .color(palette::PRIMARY_600),
        )
        .push(Text::new(i18n.tr("gallery-upload-drop")).size(typography::BODY));

    // Advisory only; nothing enforces the size.
    let size = advisory_mb.to_string();
    let hint = Text::new(i18n.tr_with_args("gallery-upload-hint", &[("size", size.as_str())]))
        .size(typography::CAPTION)
        .color(palette::GRAY_500);

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(prompt)
        .push(hint);

    button(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
    .style(styles::button::drop_zone)
    .on_press(Message::OpenPicker)
    .into()
}
