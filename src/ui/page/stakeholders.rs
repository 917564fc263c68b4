// SPDX-License-Identifier: MPL-2.0
//! "Who benefits" cards for startups, investors and incubators.

use super::{heading, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub(super) const TITLE_KEY: &str = "stakeholders-title";

pub(super) const CARDS: &[(&str, &str, &str)] = &[
    (
        "🚀",
        "stakeholder-startups-title",
        "stakeholder-startups-description",
    ),
    (
        "📈",
        "stakeholder-investors-title",
        "stakeholder-investors-description",
    ),
    (
        "🏢",
        "stakeholder-incubators-title",
        "stakeholder-incubators-description",
    ),
];

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let cards = CARDS
        .iter()
        .fold(Row::new().spacing(spacing::XL), |row, (icon, title, description)| {
            let content = Column::new()
                .spacing(spacing::SM)
                .push(
                    Text::new(*icon)
                        .size(sizing::ICON_XL)
                        .color(palette::PRIMARY_600),
                )
                .push(Text::new(i18n.tr(title)).size(typography::TITLE_MD))
                .push(
                    Text::new(i18n.tr(description))
                        .size(typography::BODY)
                        .color(palette::GRAY_600),
                );

            row.push(
                Container::new(content)
                    .width(Length::FillPortion(1))
                    .padding(spacing::XL)
                    .style(styles::container::card),
            )
        });

    Column::new()
        .spacing(spacing::XXL)
        .push(heading(i18n, TITLE_KEY))
        .push(cards)
        .into()
}
