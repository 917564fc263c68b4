// SPDX-License-Identifier: MPL-2.0
//! Modal viewer for a single image.
//!
//! Shows the enlarged image with its name, size and media type. Clicking the
//! dimmed backdrop or the close button closes it; the delete button removes
//! the image and closes the viewer.

use super::Message;
use crate::gallery::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, image, mouse_area, opaque, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(i18n: &'a I18n, record: &'a ImageRecord) -> Element<'a, Message> {
    let file = record.file();

    let close = button(Text::new("×").size(typography::TITLE_MD))
        .style(styles::button::ghost)
        .on_press(Message::CloseViewer);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(file.name.clone()).size(typography::TITLE_SM))
                .width(Length::Fill),
        )
        .push(close);

    let picture = image(record.handle().image().clone())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_IMAGE_MAX_HEIGHT))
        .content_fit(ContentFit::Contain);

    let size = file.size_label();
    let details = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr_with_args("gallery-modal-size", &[("size", size.as_str())]))
                .size(typography::BODY)
                .color(palette::GRAY_600),
        )
        .push(
            Text::new(i18n.tr_with_args(
                "gallery-modal-type",
                &[("type", file.mime_type.as_str())],
            ))
            .size(typography::BODY)
            .color(palette::GRAY_600),
        );

    let delete = button(Text::new(i18n.tr("gallery-delete")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::danger)
        .on_press(Message::DeleteViewed);

    let footer = Container::new(
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(Container::new(details).width(Length::Fill))
            .push(delete),
    )
    .padding(spacing::MD)
    .style(styles::container::modal_footer);

    let dialog = Container::new(
        Column::new()
            .push(Container::new(header).padding([spacing::SM, spacing::MD]))
            .push(Container::new(picture).padding(spacing::MD))
            .push(footer),
    )
    .max_width(sizing::MODAL_MAX_WIDTH)
    .style(styles::container::modal);

    // The inner `opaque` keeps clicks on the dialog from reaching the backdrop.
    opaque(
        mouse_area(
            center(opaque(dialog))
                .padding(spacing::LG)
                .style(styles::container::backdrop),
        )
        .on_press(Message::CloseViewer),
    )
}
