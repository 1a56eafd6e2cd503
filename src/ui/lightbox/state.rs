// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine.

use iced::keyboard;

/// Overlay state: closed, or open on a photo of the active series.
///
/// Invariant: a non-closed state always holds an index within `[0, N)` for
/// the series it was opened over. `open_at` refuses out-of-range indices and
/// empty series, and navigation wraps with modulo arithmetic, so there is no
/// invalid-index path to handle anywhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Messages consumed by [`State::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button activation.
    CloseRequested,
    /// A press that landed on the backdrop itself (not the figure).
    BackdropPressed,
    /// A press on the figure; consumed so it never reaches the backdrop.
    FigurePressed,
    /// Wheel input captured by the overlay while the page scroll is locked.
    ScrollBlocked,
    /// Next button activation.
    NextRequested,
    /// Previous button activation.
    PreviousRequested,
    /// Raw runtime event routed here by the page shell while open.
    RawEvent(iced::Event),
}

/// State transitions reported back to the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Opened { index: usize },
    Navigated { index: usize },
    Closed,
}

impl State {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, State::Open { .. })
    }

    /// The open photo index, if any.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        match *self {
            State::Open { index } => Some(index),
            State::Closed => None,
        }
    }

    /// Opens the overlay at `index`.
    ///
    /// A no-op for an empty series or an out-of-range index, which keeps the
    /// `Open` state unreachable when there is nothing to show.
    pub fn open_at(&mut self, index: usize, series_len: usize) -> Event {
        if index >= series_len {
            return Event::None;
        }

        *self = State::Open { index };
        Event::Opened { index }
    }

    /// Processes a message against the series of length `series_len`.
    pub fn update(&mut self, message: Message, series_len: usize) -> Event {
        match message {
            Message::CloseRequested | Message::BackdropPressed => self.close(),
            Message::FigurePressed | Message::ScrollBlocked => Event::None,
            Message::NextRequested => self.next(series_len),
            Message::PreviousRequested => self.previous(series_len),
            Message::RawEvent(event) => self.handle_raw_event(&event, series_len),
        }
    }

    fn close(&mut self) -> Event {
        match *self {
            State::Open { .. } => {
                *self = State::Closed;
                Event::Closed
            }
            State::Closed => Event::None,
        }
    }

    fn next(&mut self, series_len: usize) -> Event {
        match *self {
            State::Open { index } if series_len > 0 => {
                let index = (index + 1) % series_len;
                *self = State::Open { index };
                Event::Navigated { index }
            }
            _ => Event::None,
        }
    }

    fn previous(&mut self, series_len: usize) -> Event {
        match *self {
            State::Open { index } if series_len > 0 => {
                let index = (index + series_len - 1) % series_len;
                *self = State::Open { index };
                Event::Navigated { index }
            }
            _ => Event::None,
        }
    }

    /// Translates Escape/ArrowLeft/ArrowRight into close/prev/next.
    fn handle_raw_event(&mut self, event: &iced::Event, series_len: usize) -> Event {
        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => self.close(),
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => self.next(series_len),
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => self.previous(series_len),
            _ => Event::None,
        }
    }
}
