// SPDX-License-Identifier: MPL-2.0
//! Game section body: demo poster with caption, plus the sprite grid.

use crate::content::{GameWork, Sprite};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment::Horizontal, ContentFit, Element, Length};

const SPRITE_COLUMNS: usize = 2;

pub fn view<'a, Message: 'a>(game: &'a GameWork, sprites: &'a [Sprite]) -> Element<'a, Message> {
    let poster = Image::new(game.poster.handle.clone())
        .width(Length::Fixed(sizing::POSTER_WIDTH))
        .content_fit(ContentFit::Contain);

    let showcase = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(2))
        .push(poster)
        .push(section::muted_text(
            game.caption.to_string(),
            typography::SIZE_SM,
        ));

    Row::new()
        .spacing(spacing::MD)
        .push(showcase)
        .push(sprite_grid(sprites).width(Length::FillPortion(1)))
        .into()
}

fn sprite_grid<'a, Message: 'a>(sprites: &'a [Sprite]) -> Column<'a, Message> {
    let mut grid = Column::new().spacing(spacing::SM);

    for chunk in sprites.chunks(SPRITE_COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM);
        for sprite in chunk {
            row = row.push(sprite_card(sprite));
        }
        grid = grid.push(row);
    }

    grid
}

fn sprite_card<'a, Message: 'a>(sprite: &'a Sprite) -> Element<'a, Message> {
    let canvas = Container::new(
        Image::new(sprite.bitmap.handle.clone())
            .height(Length::Fixed(sizing::SPRITE_PREVIEW))
            .content_fit(ContentFit::Contain),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::XS)
    .style(styles::container::sprite_canvas);

    let mut card = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(canvas)
        .push(Text::new(sprite.title).size(typography::SIZE_SM));

    if let Some(description) = sprite.description {
        card = card.push(section::muted_text(
            description.to_string(),
            typography::SIZE_SM,
        ));
    }

    card.into()
}
