// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for list and grid windowing.
//!
//! For any valid geometry and scroll position:
//!
//! 1. Windows stay in bounds: `start <= end <= len`.
//! 2. Every item intersecting the viewport is realized.
//! 3. Scrolling forward never moves either bound backwards.
//! 4. Windowing is deterministic.
//! 5. Overscan never realizes more than `2 * overscan` extra items.
//! 6. Grid cells always have a linear index below `len`.

use kurbo::{Size, Vec2};
use proptest::prelude::*;
use understory_windowing::{GridGeometry, ListGeometry, compute_window};

// ── Helpers ─────────────────────────────────────────────────────────────

fn list_geometry() -> impl Strategy<Value = ListGeometry<f64>> {
    (1_u32..=200, 1_u32..=2000, 0_usize..=10).prop_map(|(item, viewport, overscan)| {
        ListGeometry::new(f64::from(item), f64::from(viewport))
            .expect("positive extents")
            .with_overscan(overscan)
    })
}

fn grid_geometry() -> impl Strategy<Value = GridGeometry> {
    (
        1_u32..=200,
        1_u32..=200,
        1_usize..=20,
        1_u32..=1000,
        1_u32..=1000,
        0_usize..=4,
    )
        .prop_map(|(w, h, columns, vw, vh, overscan)| {
            GridGeometry::new(
                Size::new(f64::from(w), f64::from(h)),
                columns,
                Size::new(f64::from(vw), f64::from(vh)),
            )
            .expect("positive extents")
            .with_overscan(overscan)
        })
}

// ── Lists ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn list_window_stays_in_bounds(
        geometry in list_geometry(),
        len in 0_usize..5000,
        scroll in -1000.0_f64..1_000_000.0,
    ) {
        let window = geometry.window(len, scroll);
        prop_assert!(window.start <= window.end);
        prop_assert!(window.end <= len);
    }

    #[test]
    fn list_window_covers_every_visible_item(
        geometry in list_geometry(),
        len in 1_usize..5000,
        scroll in 0.0_f64..500_000.0,
    ) {
        let window = geometry.window(len, scroll);
        let item = geometry.item_extent();
        let bottom = scroll + geometry.viewport_extent();
        for index in 0..len {
            let leading = index as f64 * item;
            let trailing = leading + item;
            if leading < bottom && trailing > scroll {
                prop_assert!(
                    window.contains(index),
                    "visible index {index} outside {:?}",
                    window.range()
                );
            }
        }
    }

    #[test]
    fn list_window_is_monotonic_in_scroll(
        geometry in list_geometry(),
        len in 0_usize..5000,
        scroll in 0.0_f64..200_000.0,
        delta in 0.0_f64..50_000.0,
    ) {
        let before = geometry.window(len, scroll);
        let after = geometry.window(len, scroll + delta);
        prop_assert!(after.start >= before.start);
        prop_assert!(after.end >= before.end);
    }

    #[test]
    fn infinite_scroll_is_past_every_finite_scroll(
        geometry in list_geometry(),
        len in 0_usize..5000,
        scroll in 0.0_f64..1.0e12,
    ) {
        let finite = geometry.window(len, scroll);
        let infinite = geometry.window(len, f64::INFINITY);
        prop_assert!(infinite.start >= finite.start);
        prop_assert!(infinite.end >= finite.end);
        prop_assert_eq!(infinite.range(), len..len);
    }

    #[test]
    fn list_window_is_deterministic(
        geometry in list_geometry(),
        len in 0_usize..5000,
        scroll in 0.0_f64..200_000.0,
    ) {
        prop_assert_eq!(geometry.window(len, scroll), geometry.window(len, scroll));
    }

    #[test]
    fn overscan_is_bounded(
        geometry in list_geometry(),
        len in 0_usize..5000,
        scroll in 0.0_f64..200_000.0,
    ) {
        let tight = geometry.with_overscan(0).window(len, scroll);
        let wide = geometry.window(len, scroll);
        prop_assert!(wide.start <= tight.start);
        prop_assert!(wide.end >= tight.end);
        prop_assert!(wide.len() <= tight.len() + 2 * geometry.overscan());
    }

    #[test]
    fn window_offset_and_extent_follow_item_extent(
        geometry in list_geometry(),
        len in 0_usize..5000,
        scroll in 0.0_f64..200_000.0,
    ) {
        let window = geometry.window(len, scroll);
        prop_assert_eq!(window.offset, window.start as f64 * geometry.item_extent());
        prop_assert_eq!(window.total_extent, len as f64 * geometry.item_extent());
    }

    #[test]
    fn clamped_scroll_realizes_the_tail(
        geometry in list_geometry(),
        len in 1_usize..5000,
        scroll in 0.0_f64..10_000_000.0,
    ) {
        let clamped = geometry.clamp_scroll_offset(len, scroll);
        let window = geometry.window(len, clamped);
        prop_assert!(!window.is_empty());
    }
}

// ── Grids ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn grid_cells_are_in_bounds_and_consistent(
        geometry in grid_geometry(),
        len in 0_usize..2000,
        x in -100.0_f64..20_000.0,
        y in -100.0_f64..200_000.0,
    ) {
        let window = geometry.window(len, Vec2::new(x, y));
        prop_assert!(window.rows.start <= window.rows.end);
        prop_assert!(window.rows.end <= geometry.total_rows(len));
        prop_assert!(window.columns.end <= geometry.columns());
        for cell in window.cells() {
            prop_assert!(cell.index < len);
            prop_assert_eq!(cell.index, cell.row * geometry.columns() + cell.column);
            prop_assert!(window.rows.contains(&cell.row));
            prop_assert!(window.columns.contains(&cell.column));
        }
    }

    #[test]
    fn grid_cells_cover_every_visible_index(
        geometry in grid_geometry(),
        len in 1_usize..2000,
        x in 0.0_f64..5_000.0,
        y in 0.0_f64..50_000.0,
    ) {
        let window = geometry.window(len, Vec2::new(x, y));
        let item = geometry.item_size();
        let viewport = geometry.viewport();
        let realized: Vec<usize> = window.cells().map(|cell| cell.index).collect();
        for index in 0..len {
            let rect = geometry.cell_rect(geometry.cell(index));
            let visible = rect.x0 < x + viewport.width
                && rect.x0 + item.width > x
                && rect.y0 < y + viewport.height
                && rect.y0 + item.height > y;
            if visible {
                prop_assert!(realized.contains(&index), "visible cell {index} not realized");
            }
        }
    }

    #[test]
    fn grid_cells_match_contains(
        geometry in grid_geometry(),
        len in 0_usize..500,
        y in 0.0_f64..20_000.0,
    ) {
        let window = geometry.window(len, Vec2::new(0.0, y));
        let realized: Vec<usize> = window.cells().map(|cell| cell.index).collect();
        for index in 0..len {
            prop_assert_eq!(realized.contains(&index), window.contains(index));
        }
    }
}

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn scenario_top_of_long_list() {
    let window = compute_window(1000, 50.0_f64, 500.0, 0.0, 3).unwrap();
    assert_eq!((window.start, window.end), (0, 13));
}

#[test]
fn scenario_middle_of_long_list() {
    let window = compute_window(1000, 50.0_f64, 500.0, 2500.0, 3).unwrap();
    assert_eq!((window.start, window.end), (47, 63));
}

#[test]
fn scenario_list_shorter_than_viewport() {
    let window = compute_window(5, 50.0_f64, 500.0, 0.0, 3).unwrap();
    assert_eq!((window.start, window.end), (0, 5));
}

#[test]
fn infinite_scroll_clamps_to_the_end() {
    let geometry = ListGeometry::new(50.0_f64, 500.0).unwrap();
    let far = geometry.window(1000, 1.0e12);
    let infinite = geometry.window(1000, f64::INFINITY);
    assert_eq!(far.range(), 1000..1000);
    assert_eq!(infinite.range(), 1000..1000);
    assert_eq!(infinite.offset, 50_000.0);

    let grid = GridGeometry::new(Size::new(100.0, 100.0), 10, Size::new(300.0, 300.0)).unwrap();
    let window = grid.window(97, Vec2::new(f64::INFINITY, f64::INFINITY));
    assert_eq!(window.rows, 10..10);
    assert_eq!(window.columns, 10..10);
    assert_eq!(window.cells().count(), 0);
}

#[test]
fn scenario_partial_grid() {
    let window = understory_windowing::compute_grid_window(
        97,
        Size::new(100.0, 100.0),
        10,
        Size::new(300.0, 300.0),
        Vec2::ZERO,
        1,
    )
    .unwrap();
    assert_eq!(window.rows, 0..4);
    assert_eq!(window.columns, 0..4);
    assert!(window.cells().all(|cell| cell.index < 97));

    // The same grid scrolled to the bottom row omits indices 97..100.
    let geometry = GridGeometry::new(Size::new(100.0, 100.0), 10, Size::new(300.0, 300.0))
        .unwrap()
        .with_overscan(1);
    let bottom = geometry.window(97, geometry.max_scroll(97));
    let last_row: Vec<usize> = bottom
        .cells()
        .filter(|cell| cell.row == 9)
        .map(|cell| cell.index)
        .collect();
    assert_eq!(last_row, [96]);
    assert_eq!(bottom.columns, 6..10);
}
