// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a single-page personal portfolio viewer built with the Iced GUI framework.
//!
//! It renders a profile, a photo series with a lightbox overlay, a game-project
//! showcase, sprites, and a baking showcase as one scrollable page, and
//! demonstrates internationalization with Fluent, user preference management,
//! and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
