// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attira_deck::CardDeck;
use attira_reveal::{InputSource, RevealConfig, RevealControl};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1_280.0, 720.0);

/// A touch drag that wobbles vertically while travelling right.
fn touch_path(samples: usize) -> Vec<Point> {
    (0..samples)
        .map(|i| {
            let t = i as f64;
            Point::new(640.0 + t * 0.5, 360.0 + (t * 0.37).sin() * 3.0)
        })
        .collect()
}

fn bench_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("attira_reveal");
    group.sample_size(50);

    for samples in [64_usize, 1_024] {
        let path = touch_path(samples);

        group.bench_function(format!("immediate_moves(n={samples})"), |b| {
            b.iter_batched(
                || RevealControl::new(RevealConfig::handle_only(50.0)),
                |mut reveal| {
                    reveal.on_gesture_start(InputSource::Touch, path[0], VIEWPORT, 0);
                    for &p in &path[1..] {
                        black_box(reveal.on_gesture_move(p, VIEWPORT));
                    }
                    reveal.on_gesture_end()
                },
                BatchSize::SmallInput,
            );
        });

        // Eight input events per frame, as on a 480Hz digitizer at 60fps.
        group.bench_function(format!("coalesced_moves(n={samples})"), |b| {
            b.iter_batched(
                || RevealControl::new(RevealConfig::handle_only(50.0)),
                |mut reveal| {
                    reveal.on_gesture_start(InputSource::Touch, path[0], VIEWPORT, 0);
                    for chunk in path[1..].chunks(8) {
                        for &p in chunk {
                            black_box(reveal.queue_gesture_move(p, VIEWPORT));
                        }
                        black_box(reveal.on_animation_frame());
                    }
                    reveal.on_gesture_end()
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("deck_swipe(n={samples})"), |b| {
            b.iter_batched(
                CardDeck::default,
                |mut deck| {
                    deck.begin_swipe(path[0], 360.0);
                    for &p in &path[1..] {
                        black_box(deck.update_swipe(p));
                    }
                    deck.end_swipe()
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reveal);
criterion_main!(benches);
