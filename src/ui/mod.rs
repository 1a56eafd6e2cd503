// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`lightbox`] - Fullscreen photo overlay with keyboard navigation (the
//!   only stateful component)
//! - [`gallery`] - Photo thumbnail grid that opens the lightbox
//! - [`navbar`] - Header bar with brand, section links, and theme toggle
//! - [`section`] - Titled card container used by every page section
//! - [`profile`], [`game`], [`baking`] - Static section bodies
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod baking;
pub mod design_tokens;
pub mod gallery;
pub mod game;
pub mod icons;
pub mod lightbox;
pub mod navbar;
pub mod profile;
pub mod section;
pub mod styles;
pub mod theming;
