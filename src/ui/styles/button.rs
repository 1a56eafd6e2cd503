// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::BLACK, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for header navigation links: quiet text that gains a pill
/// background on hover.
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(scheme.surface_secondary))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: scheme.text_primary,
        border: Border {
            radius: radius::PILL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for gallery photo tiles: a bordered card that lifts on hover.
pub fn tile(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);

    let (border_color, tile_shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (scheme.brand_primary, shadow::MD),
        _ => (scheme.line, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: scheme.text_primary,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: tile_shadow,
        snap: true,
    }
}

/// Style for overlay controls (close, navigation arrows).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::PILL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}
