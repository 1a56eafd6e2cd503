// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for lightbox navigation.
//!
//! Measures the pure state machine: opening the overlay and cycling through
//! a full series with wraparound in both directions.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::ui::lightbox::{Message, State};
use std::hint::black_box;

const SERIES_LEN: usize = 8;

fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    group.bench_function("next_full_cycle", |b| {
        b.iter(|| {
            let mut state = State::default();
            state.open_at(0, SERIES_LEN);
            for _ in 0..SERIES_LEN {
                state.update(Message::NextRequested, SERIES_LEN);
            }
            black_box(&state);
        });
    });

    group.bench_function("previous_full_cycle", |b| {
        b.iter(|| {
            let mut state = State::default();
            state.open_at(0, SERIES_LEN);
            for _ in 0..SERIES_LEN {
                state.update(Message::PreviousRequested, SERIES_LEN);
            }
            black_box(&state);
        });
    });

    group.finish();
}

fn bench_open_close(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    group.bench_function("open_then_close", |b| {
        b.iter(|| {
            let mut state = State::default();
            state.open_at(black_box(3), SERIES_LEN);
            state.update(Message::CloseRequested, SERIES_LEN);
            black_box(&state);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_full_cycle, bench_open_close);
criterion_main!(benches);
