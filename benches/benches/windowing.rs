// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use understory_windowing::{
    GridGeometry, IndexKey, ListGeometry, RealizedKeys, ScrollCoalescer, WindowedList,
};

fn bench_list_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowing/list_window");
    let geometry = ListGeometry::new(24.0_f64, 800.0).unwrap();

    // Hypothesis: the window is O(1) in the collection length.
    for len in [1_000usize, 100_000, 10_000_000] {
        let max = geometry.max_scroll_offset(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut scroll = 0.0;
            b.iter(|| {
                scroll = if scroll >= max { 0.0 } else { scroll + 37.5 };
                black_box(geometry.window(black_box(len), scroll))
            });
        });
    }

    group.finish();
}

fn bench_grid_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowing/grid_cells");

    // Cost should follow the realized cell count, not the collection length.
    for (viewport, len) in [(400.0, 1_000_000usize), (1_600.0, 1_000_000), (1_600.0, 1_000)] {
        let geometry =
            GridGeometry::new(Size::new(100.0, 100.0), 64, Size::new(viewport, viewport))
                .unwrap();
        let window = geometry.window(len, Vec2::new(1_000.0, 5_000.0));
        group.throughput(Throughput::Elements(window.cells().count() as u64));
        group.bench_with_input(
            BenchmarkId::new(format!("viewport_{viewport}"), len),
            &len,
            |b, &len| {
                b.iter(|| {
                    let window = geometry.window(len, black_box(Vec2::new(1_000.0, 5_000.0)));
                    black_box(window.cells().map(|cell| cell.index).sum::<usize>())
                });
            },
        );
    }

    group.finish();
}

fn bench_coalesced_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowing/scroll_burst");

    for burst in [1usize, 16, 256] {
        group.throughput(Throughput::Elements(burst as u64));
        group.bench_with_input(BenchmarkId::from_parameter(burst), &burst, |b, &burst| {
            let mut scroll = ScrollCoalescer::new(0.0_f64);
            let mut frames = understory_windowing::Immediate;
            b.iter(|| {
                for step in 0..burst {
                    black_box(scroll.notify(step as f64, &mut frames));
                }
            });
        });
    }

    group.finish();
}

fn bench_render_and_diff(c: &mut Criterion) {
    let records: Vec<u64> = (0..100_000).collect();
    let geometry = ListGeometry::new(24.0_f64, 800.0).unwrap();

    c.bench_function("windowing/render_and_diff", |b| {
        let mut list = WindowedList::new(geometry, records.len(), understory_windowing::Immediate);
        let mut keys = RealizedKeys::new();
        let mut scroll = 0.0;
        b.iter(|| {
            scroll = if scroll >= 2_000_000.0 { 0.0 } else { scroll + 12.0 };
            list.on_scroll(scroll);
            let rendered = list.render(&records, &IndexKey, |record, _| record.wrapping_mul(3));
            black_box(keys.update(rendered.iter().map(|item| item.key)))
        });
    });
}

criterion_group!(
    benches,
    bench_list_window,
    bench_grid_cells,
    bench_coalesced_burst,
    bench_render_and_diff
);
criterion_main!(benches);
