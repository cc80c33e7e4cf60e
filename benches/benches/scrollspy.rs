// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::Range;

use attira_scrollspy::ScrollSpy;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

/// `n` sections of 600px, every fourth one a top-level section.
fn page(n: usize) -> (ScrollSpy<u32>, Vec<(u32, Range<f64>)>) {
    let mut spy = ScrollSpy::new();
    let mut extents = Vec::with_capacity(n);
    let mut parent = 0;
    for i in 0..n as u32 {
        if i % 4 == 0 {
            parent = i;
            spy.observe(i, None);
        } else {
            spy.observe(i, Some(parent));
        }
        let top = f64::from(i) * 600.0;
        extents.push((i, top..top + 600.0));
    }
    (spy, extents)
}

fn bench_scrollspy(c: &mut Criterion) {
    let mut group = c.benchmark_group("attira_scrollspy");
    group.sample_size(50);

    for n in [16_usize, 256] {
        let (spy, extents) = page(n);
        let page_height = n as f64 * 600.0;

        group.bench_function(format!("scroll_through(n={n})"), |b| {
            b.iter_batched(
                || spy.clone(),
                |mut spy| {
                    let mut top = 0.0;
                    while top < page_height {
                        black_box(spy.observe_layout(
                            top,
                            900.0,
                            extents.iter().map(|(id, r)| (id, r.clone())),
                        ));
                        top += 120.0;
                    }
                    spy
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("branch_queries(n={n})"), |b| {
            let mut spy = spy.clone();
            spy.apply_entry(&(n as u32 - 1), true);
            b.iter(|| {
                let mut lit = 0;
                for (id, _) in &extents {
                    if spy.is_branch_active(id) {
                        lit += 1;
                    }
                }
                black_box(lit)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scrollspy);
criterion_main!(benches);
