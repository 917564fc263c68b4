// SPDX-License-Identifier: MPL-2.0
//! Footer with four link columns and the copyright line. Links are plain
//! labels; they do not navigate anywhere.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::{rule, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub(super) const COPYRIGHT_KEY: &str = "footer-copyright";

/// Column heading key and its link keys.
pub(super) const COLUMNS: [(&str, [&str; 4]); 4] = [
    (
        "footer-about",
        [
            "footer-about-mission",
            "footer-about-team",
            "footer-about-careers",
            "footer-about-contact",
        ],
    ),
    (
        "footer-resources",
        [
            "footer-resources-documentation",
            "footer-resources-guidelines",
            "footer-resources-stories",
            "footer-resources-blog",
        ],
    ),
    (
        "footer-community",
        [
            "footer-community-events",
            "footer-community-forums",
            "footer-community-newsletter",
            "footer-community-social",
        ],
    ),
    (
        "footer-legal",
        [
            "footer-legal-privacy",
            "footer-legal-terms",
            "footer-legal-cookies",
            "footer-legal-disclaimer",
        ],
    ),
];

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let columns = COLUMNS
        .iter()
        .fold(Row::new().spacing(spacing::XL), |row, (title, links)| {
            let column = links.iter().fold(
                Column::new()
                    .spacing(spacing::XS)
                    .push(Text::new(i18n.tr(title)).size(typography::TITLE_SM)),
                |column, link| {
                    column.push(
                        Text::new(i18n.tr(link))
                            .size(typography::BODY)
                            .color(palette::GRAY_400),
                    )
                },
            );
            row.push(Container::new(column).width(Length::FillPortion(1)))
        });

    let year = chrono::Local::now().year().to_string();
    let copyright = Text::new(i18n.tr_with_args(COPYRIGHT_KEY, &[("year", year.as_str())]))
        .size(typography::BODY)
        .color(palette::GRAY_400)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let content = Column::new()
        .spacing(spacing::XL)
        .push(columns)
        .push(rule::horizontal(1))
        .push(copyright);

    Container::new(
        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .width(Length::Fill)
    .padding([spacing::XXL, spacing::LG])
    .align_x(alignment::Horizontal::Center)
    .style(styles::container::footer)
    .into()
}
