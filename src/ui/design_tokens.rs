// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens following the W3C Design Tokens standard.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.06, 0.06, 0.07);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.32);
    pub const GRAY_500: Color = Color::from_rgb(0.37, 0.39, 0.41);
    pub const GRAY_200: Color = Color::from_rgb(0.82, 0.84, 0.86);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.91, 0.92);
    pub const GRAY_050: Color = Color::from_rgb(0.98, 0.98, 0.98);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.75;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Surface background for semi-transparent panels.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Icon sizes.
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    /// Square brand mark in the header.
    pub const BRAND_MARK: f32 = 32.0;

    /// Profile headshot edge length.
    pub const AVATAR: f32 = 112.0;

    /// Gallery thumbnail edge length (tiles are square, like the source
    /// photographs).
    pub const PHOTO_TILE: f32 = 180.0;

    /// Sprite preview height.
    pub const SPRITE_PREVIEW: f32 = 96.0;

    /// Baking showcase image width.
    pub const BAKING_IMAGE: f32 = 220.0;

    /// Game poster width.
    pub const POSTER_WIDTH: f32 = 420.0;

    /// Maximum lightbox stage box; the open photo is scaled to fit inside
    /// while keeping its aspect ratio.
    pub const LIGHTBOX_MAX_WIDTH: f32 = 960.0;
    pub const LIGHTBOX_MAX_HEIGHT: f32 = 560.0;

    /// Width of the page content column.
    pub const CONTENT_WIDTH: f32 = 1080.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const SIZE_SM: f32 = 12.0;
    pub const SIZE_MD: f32 = 14.0;
    pub const SIZE_LG: f32 = 16.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_LG: f32 = 24.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 14.0;
    /// Fully rounded (pill buttons, circular controls).
    pub const PILL: f32 = 999.0;
}

// ============================================================================
// Shadow
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
        offset: Vector::new(0.0, 1.0),
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        offset: Vector::new(0.0, 8.0),
        blur_radius: 20.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_ratios() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn overlay_opacities_are_ordered() {
        assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
        assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
        assert!(opacity::OVERLAY_STRONG < opacity::OVERLAY_PRESSED);
    }

    #[test]
    fn grays_get_darker_with_bigger_numbers() {
        assert!(palette::GRAY_900.r < palette::GRAY_700.r);
        assert!(palette::GRAY_700.r < palette::GRAY_200.r);
    }
}
