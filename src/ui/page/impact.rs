// SPDX-License-Identifier: MPL-2.0
//! Global impact blurb.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Text};
use iced::Element;

pub(super) const KEYS: [&str; 3] = ["impact-title", "impact-body", "impact-tagline"];

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let [title, body, tagline] = KEYS;

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr(title)).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr(body))
                .size(typography::BODY_LG)
                .color(palette::GRAY_600),
        )
        .push(
            Text::new(format!("🌱 {}", i18n.tr(tagline)))
                .size(typography::BODY)
                .color(palette::PRIMARY_600),
        )
        .into()
}
