// SPDX-License-Identifier: MPL-2.0

use super::state::{Event, Message, State};
use iced::keyboard;

const SERIES_LEN: usize = 8;

fn key_pressed(named: keyboard::key::Named) -> iced::Event {
    let code = match named {
        keyboard::key::Named::Escape => keyboard::key::Code::Escape,
        keyboard::key::Named::ArrowLeft => keyboard::key::Code::ArrowLeft,
        keyboard::key::Named::ArrowRight => keyboard::key::Code::ArrowRight,
        _ => keyboard::key::Code::Space,
    };

    iced::Event::Keyboard(keyboard::Event::KeyPressed {
        key: keyboard::Key::Named(named),
        modified_key: keyboard::Key::Named(named),
        physical_key: keyboard::key::Physical::Code(code),
        location: keyboard::Location::Standard,
        modifiers: keyboard::Modifiers::default(),
        text: None,
        repeat: false,
    })
}

fn open_state(index: usize) -> State {
    let mut state = State::default();
    assert_eq!(
        state.open_at(index, SERIES_LEN),
        Event::Opened { index },
        "precondition: opening must succeed"
    );
    state
}

#[test]
fn initial_state_is_closed() {
    let state = State::default();
    assert!(!state.is_open());
    assert_eq!(state.open_index(), None);
}

#[test]
fn open_at_valid_index_opens() {
    let state = open_state(3);
    assert!(state.is_open());
    assert_eq!(state.open_index(), Some(3));
}

#[test]
fn open_at_out_of_range_is_a_no_op() {
    let mut state = State::default();
    assert_eq!(state.open_at(SERIES_LEN, SERIES_LEN), Event::None);
    assert!(!state.is_open());
}

#[test]
fn open_at_on_empty_series_is_disabled() {
    let mut state = State::default();
    assert_eq!(state.open_at(0, 0), Event::None);
    assert!(!state.is_open());
}

#[test]
fn next_wraps_from_last_to_first() {
    let mut state = open_state(SERIES_LEN - 1);
    let event = state.update(Message::NextRequested, SERIES_LEN);
    assert_eq!(event, Event::Navigated { index: 0 });
    assert_eq!(state.open_index(), Some(0));
}

#[test]
fn previous_wraps_from_first_to_last() {
    let mut state = open_state(0);
    let event = state.update(Message::PreviousRequested, SERIES_LEN);
    assert_eq!(event, Event::Navigated { index: SERIES_LEN - 1 });
    assert_eq!(state.open_index(), Some(SERIES_LEN - 1));
}

#[test]
fn next_called_series_len_times_returns_to_start() {
    for len in 1..=SERIES_LEN {
        for start in 0..len {
            let mut state = State::default();
            state.open_at(start, len);
            for _ in 0..len {
                state.update(Message::NextRequested, len);
            }
            assert_eq!(state.open_index(), Some(start), "cycle of next over {len}");
        }
    }
}

#[test]
fn previous_called_series_len_times_returns_to_start() {
    for len in 1..=SERIES_LEN {
        for start in 0..len {
            let mut state = State::default();
            state.open_at(start, len);
            for _ in 0..len {
                state.update(Message::PreviousRequested, len);
            }
            assert_eq!(
                state.open_index(),
                Some(start),
                "cycle of previous over {len}"
            );
        }
    }
}

#[test]
fn next_then_previous_is_identity() {
    for start in 0..SERIES_LEN {
        let mut state = open_state(start);
        state.update(Message::NextRequested, SERIES_LEN);
        state.update(Message::PreviousRequested, SERIES_LEN);
        assert_eq!(state.open_index(), Some(start));

        state.update(Message::PreviousRequested, SERIES_LEN);
        state.update(Message::NextRequested, SERIES_LEN);
        assert_eq!(state.open_index(), Some(start));
    }
}

#[test]
fn close_button_closes() {
    let mut state = open_state(2);
    assert_eq!(state.update(Message::CloseRequested, SERIES_LEN), Event::Closed);
    assert!(!state.is_open());
}

#[test]
fn backdrop_press_closes() {
    let mut state = open_state(3);
    assert_eq!(
        state.update(Message::BackdropPressed, SERIES_LEN),
        Event::Closed
    );
    assert!(!state.is_open());
}

#[test]
fn figure_press_does_not_close() {
    let mut state = open_state(3);
    assert_eq!(state.update(Message::FigurePressed, SERIES_LEN), Event::None);
    assert_eq!(state.open_index(), Some(3));
}

#[test]
fn blocked_scroll_does_not_change_state() {
    let mut state = open_state(5);
    assert_eq!(state.update(Message::ScrollBlocked, SERIES_LEN), Event::None);
    assert_eq!(state.open_index(), Some(5));
}

#[test]
fn escape_key_closes() {
    let mut state = open_state(4);
    let event = state.update(
        Message::RawEvent(key_pressed(keyboard::key::Named::Escape)),
        SERIES_LEN,
    );
    assert_eq!(event, Event::Closed);
    assert!(!state.is_open());
}

#[test]
fn arrow_left_from_first_wraps_to_last_then_rights_walk_forward() {
    // Series of 8, open at 0, ArrowLeft wraps to 7; two ArrowRights then
    // land on 0 and 1.
    let mut state = open_state(0);

    state.update(
        Message::RawEvent(key_pressed(keyboard::key::Named::ArrowLeft)),
        SERIES_LEN,
    );
    assert_eq!(state.open_index(), Some(7));

    state.update(
        Message::RawEvent(key_pressed(keyboard::key::Named::ArrowRight)),
        SERIES_LEN,
    );
    assert_eq!(state.open_index(), Some(0));

    state.update(
        Message::RawEvent(key_pressed(keyboard::key::Named::ArrowRight)),
        SERIES_LEN,
    );
    assert_eq!(state.open_index(), Some(1));
}

#[test]
fn unrelated_keys_are_ignored() {
    let mut state = open_state(2);
    let event = state.update(
        Message::RawEvent(key_pressed(keyboard::key::Named::Space)),
        SERIES_LEN,
    );
    assert_eq!(event, Event::None);
    assert_eq!(state.open_index(), Some(2));
}

#[test]
fn messages_while_closed_are_no_ops() {
    let mut state = State::default();

    assert_eq!(state.update(Message::NextRequested, SERIES_LEN), Event::None);
    assert_eq!(
        state.update(Message::PreviousRequested, SERIES_LEN),
        Event::None
    );
    assert_eq!(state.update(Message::CloseRequested, SERIES_LEN), Event::None);
    assert_eq!(
        state.update(
            Message::RawEvent(key_pressed(keyboard::key::Named::ArrowRight)),
            SERIES_LEN
        ),
        Event::None
    );
    assert!(!state.is_open());
}
