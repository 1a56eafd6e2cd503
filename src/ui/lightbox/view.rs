// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay rendering.
//!
//! The overlay is a stack of layers over the page: a dimmed backdrop that
//! closes on press and swallows wheel input, the centered figure (photo +
//! caption) that consumes its own presses, and the labelled controls. Layer
//! order is what implements the "press on the image must not close" rule:
//! the figure's mouse area captures before the backdrop can see the press.

use super::state::Message;
use crate::content::{Bitmap, Photo};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette::WHITE, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, mouse_area, tooltip, Column, Container, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The active series; never empty while the overlay is open.
    pub photos: &'a [Photo],
    /// Open photo index, kept in `[0, N)` by the state machine.
    pub index: usize,
}

/// Render the open overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let photo = &ctx.photos[ctx.index];

    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed)
    .on_scroll(|_delta| Message::ScrollBlocked);

    let figure = mouse_area(figure(photo, ctx.index, ctx.photos.len()))
        .on_press(Message::FigurePressed);

    let stage = Container::new(figure)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::XL);

    let previous_zone = Container::new(control(
        icons::chevron_left(),
        ctx.i18n.tr("lightbox-previous"),
        Message::PreviousRequested,
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Left)
    .align_y(Vertical::Center)
    .padding(spacing::MD);

    let next_zone = Container::new(control(
        icons::chevron_right(),
        ctx.i18n.tr("lightbox-next"),
        Message::NextRequested,
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Center)
    .padding(spacing::MD);

    let close_zone = Container::new(control(
        icons::cross(),
        ctx.i18n.tr("lightbox-close"),
        Message::CloseRequested,
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Top)
    .padding(spacing::MD);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(stage)
        .push(previous_zone)
        .push(next_zone)
        .push(close_zone)
        .into()
}

/// One labelled round overlay control.
fn control<'a>(
    icon: iced::widget::svg::Svg<'static>,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    let glyph = icons::sized(icon, sizing::ICON_MD).style(styles::overlay::icon(WHITE));

    let control = button(glyph)
        .padding(spacing::XS)
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(message);

    tooltip(
        control,
        Text::new(label).size(typography::SIZE_SM),
        tooltip::Position::Bottom,
    )
    .style(styles::container::tooltip)
    .gap(spacing::XXS)
    .into()
}

/// The enlarged photo with its caption card.
fn figure<'a>(photo: &'a Photo, index: usize, total: usize) -> Element<'a, Message> {
    let (width, height) = stage_size(&photo.bitmap);

    let image = Image::new(photo.bitmap.handle.clone())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .content_fit(ContentFit::Contain);

    let mut caption = Column::new().spacing(spacing::XXS).push(
        Text::new(photo.title)
            .size(typography::SIZE_LG)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
    );

    // Omitted entirely when the photo has no description.
    if let Some(description) = photo.description {
        caption = caption.push(
            Text::new(description)
                .size(typography::SIZE_MD)
                .style(styles::text::overlay_muted),
        );
    }

    caption = caption.push(
        Text::new(format!("{} / {}", index + 1, total))
            .size(typography::SIZE_SM)
            .style(styles::text::overlay_muted),
    );

    let caption_card = Container::new(caption)
        .width(Length::Fixed(width))
        .padding(spacing::SM)
        .style(styles::overlay::caption_panel);

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(image)
        .push(caption_card)
        .into()
}

/// Scales the photo down to fit the stage box, never upscaling.
fn stage_size(bitmap: &Bitmap) -> (f32, f32) {
    let width = bitmap.width.max(1) as f32;
    let height = bitmap.height.max(1) as f32;

    let scale = (sizing::LIGHTBOX_MAX_WIDTH / width)
        .min(sizing::LIGHTBOX_MAX_HEIGHT / height)
        .min(1.0);

    (width * scale, height * scale)
}
