// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid.
//!
//! Rows of square thumbnails, each with a round remove badge in its top-right
//! corner. Clicking a thumbnail opens it in the viewer.

use super::Message;
use crate::gallery::ImageRecord;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, Column, Container, Row, Stack, Text};
use iced::{alignment, mouse, ContentFit, Element, Length};

pub fn view(records: &[ImageRecord], columns: u32, thumbnail_size: f32) -> Element<'_, Message> {
    let per_row = columns.max(1) as usize;

    records
        .chunks(per_row)
        .fold(Column::new().spacing(spacing::MD), |grid, chunk| {
            let row = chunk
                .iter()
                .fold(Row::new().spacing(spacing::MD), |row, record| {
                    row.push(thumbnail(record, thumbnail_size))
                });
            grid.push(row)
        })
        .into()
}

fn thumbnail(record: &ImageRecord, size: f32) -> Element<'_, Message> {
    let picture = image(record.handle().image().clone())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .content_fit(ContentFit::Cover);

    let clickable = mouse_area(Container::new(picture).style(styles::container::thumbnail))
        .on_press(Message::ViewRequested(record.id().clone()))
        .interaction(mouse::Interaction::Pointer);

    let remove = button(Text::new("×").size(typography::BODY))
        .padding([0.0, spacing::XS])
        .style(styles::button::remove_badge)
        .on_press(Message::RemoveRequested(record.id().clone()));

    let badge = Container::new(remove)
        .width(Length::Fixed(size))
        .padding(spacing::XXS)
        .align_x(alignment::Horizontal::Right);

    Stack::new().push(clickable).push(badge).into()
}
