// SPDX-License-Identifier: MPL-2.0
//! Text color helpers shared by the section bodies.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

/// Secondary text (bios, captions, blurbs).
pub fn muted(theme: &Theme) -> text::Style {
    let scheme = ColorScheme::for_theme(theme);

    text::Style {
        color: Some(scheme.text_secondary),
    }
}

/// Secondary text on the dark overlay caption panel.
pub fn overlay_muted(theme: &Theme) -> text::Style {
    let scheme = ColorScheme::for_theme(theme);

    text::Style {
        color: Some(scheme.overlay_text_secondary),
    }
}
