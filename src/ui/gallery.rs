// SPDX-License-Identifier: MPL-2.0
//! Gallery grid: one tile per photo, in series order.
//!
//! Tiles are the only interaction: pressing one asks the page shell to open
//! the lightbox at that index. The grid renders nothing for an empty series,
//! which is what keeps the lightbox unreachable when there are no photos.

use crate::content::Photo;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, Column, Row, Space, Text};
use iced::{ContentFit, Element, Length};

/// Number of tiles per grid row in the wide layout.
pub const GRID_COLUMNS: usize = 4;

/// Messages emitted by the gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A tile was activated; open the lightbox at this index.
    OpenPhoto(usize),
}

/// Renders the photo grid.
pub fn view(photos: &[Photo]) -> Element<'_, Message> {
    let mut grid = Column::new().spacing(spacing::MD).width(Length::Fill);

    for (row_index, chunk) in photos.chunks(GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);

        for (column, photo) in chunk.iter().enumerate() {
            row = row.push(tile(photo, row_index * GRID_COLUMNS + column));
        }

        // Pad trailing rows so the remaining tiles keep the 4-column width.
        for _ in chunk.len()..GRID_COLUMNS {
            row = row.push(Space::new().width(Length::Fill).height(Length::Shrink));
        }

        grid = grid.push(row);
    }

    grid.into()
}

fn tile(photo: &Photo, index: usize) -> Element<'_, Message> {
    let thumbnail = Image::new(photo.bitmap.handle.clone())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PHOTO_TILE))
        .content_fit(ContentFit::Cover);

    let caption = Text::new(photo.title).size(typography::SIZE_MD);

    let card = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(thumbnail)
        .push(caption);

    button(card)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::tile)
        .on_press(Message::OpenPhoto(index))
        .into()
}
