// SPDX-License-Identifier: MPL-2.0
//! Feature grid: four tinted cards in one row.

use super::{heading, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub(super) const TITLE_KEY: &str = "features-title";

/// Icon glyph, title key and description key of each card.
pub(super) const CARDS: &[(&str, &str, &str)] = &[
    (
        "👥",
        "feature-network-title",
        "feature-network-description",
    ),
    (
        "💡",
        "feature-innovation-title",
        "feature-innovation-description",
    ),
    ("🌍", "feature-reach-title", "feature-reach-description"),
    (
        "📚",
        "feature-knowledge-title",
        "feature-knowledge-description",
    ),
];

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let cards = CARDS
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, (icon, title, description)| {
            row.push(card(i18n, icon, title, description))
        });

    Column::new()
        .spacing(spacing::XXL)
        .push(heading(i18n, TITLE_KEY))
        .push(cards)
        .into()
}

fn card<'a>(i18n: &I18n, icon: &'a str, title: &str, description: &str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(icon).size(sizing::ICON_LG))
        .push(Text::new(i18n.tr(title)).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr(description))
                .size(typography::BODY)
                .color(palette::GRAY_600),
        );

    Container::new(content)
        .width(Length::FillPortion(1))
        .padding(spacing::LG)
        .style(styles::container::card_accent)
        .into()
}
