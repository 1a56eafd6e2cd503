// SPDX-License-Identifier: MPL-2.0
//! Header bar: brand mark, author identity, section links, theme toggle.
//!
//! The bar is stateless; section links ask the page shell to snap the page
//! scrollable to an anchor, and the theme toggle cycles the persisted theme
//! mode.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// The four page sections reachable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    About,
    Photography,
    Game,
    Baking,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Photography,
        SectionId::Game,
        SectionId::Baking,
    ];

    /// Localization key for the nav link label.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            SectionId::About => "nav-about",
            SectionId::Photography => "nav-photography",
            SectionId::Game => "nav-game",
            SectionId::Baking => "nav-baking",
        }
    }

    /// Vertical anchor of the section as a fraction of the page scroll
    /// range.
    #[must_use]
    pub fn anchor(self) -> f32 {
        match self {
            SectionId::About => 0.0,
            SectionId::Photography => 0.18,
            SectionId::Game => 0.62,
            SectionId::Baking => 1.0,
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub name: &'a str,
    pub role: &'a str,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    JumpTo(SectionId),
    CycleTheme,
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let initial = ctx.name.chars().next().unwrap_or('?');

    let mark = Container::new(Text::new(initial.to_string()).size(typography::SIZE_MD))
        .width(Length::Fixed(sizing::BRAND_MARK))
        .height(Length::Fixed(sizing::BRAND_MARK))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::brand_mark);

    let identity = Column::new()
        .push(Text::new(ctx.name).size(typography::SIZE_LG))
        .push(
            Text::new(ctx.role)
                .size(typography::SIZE_SM)
                .style(styles::text::muted),
        );

    let brand = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(mark)
        .push(identity);

    let mut links = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    for section in SectionId::ALL {
        links = links.push(
            button(Text::new(ctx.i18n.tr(section.nav_key())).size(typography::SIZE_MD))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::nav_link)
                .on_press(Message::JumpTo(section)),
        );
    }

    let theme_toggle = button(
        Text::new(ctx.i18n.tr(ctx.theme_mode.label_key())).size(typography::SIZE_SM),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::nav_link)
    .on_press(Message::CycleTheme);

    let inner = Row::new()
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(links)
        .push(Space::new().width(Length::Fixed(spacing::MD)).height(Length::Shrink))
        .push(theme_toggle);

    let centered = Container::new(inner.width(Length::Fixed(sizing::CONTENT_WIDTH)))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::XS, spacing::MD]);

    Container::new(centered)
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}
