// SPDX-License-Identifier: MPL-2.0
//! Section renderer: a titled card wrapping arbitrary section content.
//!
//! Stateless by design. Every page section (about, photography, game,
//! baking) goes through this one container so the cards stay visually
//! consistent.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{rule, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Renders a titled card around `content`.
///
/// The optional icon sits left of the title.
pub fn view<'a, Message: 'a>(
    title: String,
    icon: Option<Svg<'static>>,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut header = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    if let Some(icon) = icon {
        header = header.push(icons::sized(icon, sizing::ICON_SM));
    }

    header = header.push(
        Text::new(title)
            .size(typography::TITLE_SM)
            .font(iced::Font {
                weight: iced::font::Weight::Semibold,
                ..iced::Font::DEFAULT
            }),
    );

    let body = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(header)
        .push(rule::horizontal(1))
        .push(content);

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

/// Convenience for the secondary text blocks most sections carry.
pub fn muted_text<'a, Message: 'a>(contents: String, size: f32) -> Element<'a, Message> {
    Text::new(contents)
        .size(size)
        .style(styles::text::muted)
        .into()
}
