// SPDX-License-Identifier: MPL-2.0
//! Fullscreen photo overlay with wraparound navigation.
//!
//! This is the only stateful component of the page. The state machine is
//! `Closed | Open { index }`; navigation keeps the index in range with
//! modulo arithmetic, never clamping. While open, the page shell routes raw
//! keyboard events here (Escape closes, the arrow keys navigate) and the
//! overlay's backdrop layer swallows pointer and wheel input so the page
//! underneath cannot scroll. Both effects disappear with the overlay on
//! every exit path, because subscription and widget tree are rebuilt from
//! the state each frame.

mod state;
mod view;

pub use state::{Event, Message, State};
pub use view::{view, ViewContext};

#[cfg(test)]
mod tests;
