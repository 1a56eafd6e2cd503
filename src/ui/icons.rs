// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. Rendering goes through `iced::widget::svg` so the
//! glyphs can be tinted per theme with [`crate::ui::styles::overlay::icon`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_lightbox`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(cross, "cross.svg", "Cross icon: diagonal X strokes.");
define_icon!(
    chevron_left,
    "chevron-left.svg",
    "Chevron icon pointing left."
);
define_icon!(
    chevron_right,
    "chevron-right.svg",
    "Chevron icon pointing right."
);
define_icon!(camera, "camera.svg", "Camera icon: body with lens circle.");
define_icon!(gamepad, "gamepad.svg", "Gamepad icon: pad with two buttons.");
define_icon!(cookie, "cookie.svg", "Cookie icon: disc with chips.");

/// Applies a square size to an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
