// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-dimensional windowing over a row-major grid of uniform cells.
//!
//! Rows and columns are windowed independently with the same per-axis
//! arithmetic as lists, so the cost of a recomputation is proportional to the
//! realized cells rather than to the collection.

use core::iter::FusedIterator;
use core::ops::Range;

use kurbo::{Point, Rect, Size, Vec2};

use crate::config::{ConfigError, GridGeometry};
use crate::window::{ScrollAlign, align_offset, axis_range};

/// One realized grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Linear index into the collection, `row * columns + column`.
    pub index: usize,
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub column: usize,
}

/// The realized portion of a grid.
///
/// Row and column ranges are half-open. Cells in their cross product whose
/// linear index falls past the collection (the tail of a partial last row)
/// are skipped by [`GridWindow::cells`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridWindow {
    /// Realized rows.
    pub rows: Range<usize>,
    /// Realized columns.
    pub columns: Range<usize>,
    /// Content-space position of the top-left realized cell.
    pub offset: Vec2,
    /// Size of the whole grid content.
    pub content_size: Size,
    len: usize,
    column_count: usize,
}

impl GridWindow {
    /// A window realizing nothing.
    #[must_use]
    pub fn empty(column_count: usize) -> Self {
        Self {
            rows: 0..0,
            columns: 0..0,
            offset: Vec2::ZERO,
            content_size: Size::ZERO,
            len: 0,
            column_count,
        }
    }

    /// Returns `true` if no cell is realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells().next().is_none()
    }

    /// Iterates realized cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> Cells {
        Cells {
            row: self.rows.start,
            column: self.columns.start,
            rows: self.rows.clone(),
            columns: self.columns.clone(),
            len: self.len,
            column_count: self.column_count,
        }
    }

    /// Returns `true` if `index` is a realized cell.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.len || self.column_count == 0 {
            return false;
        }
        self.rows.contains(&(index / self.column_count))
            && self.columns.contains(&(index % self.column_count))
    }
}

/// Iterator over the realized cells of a [`GridWindow`].
#[derive(Clone, Debug)]
pub struct Cells {
    row: usize,
    column: usize,
    rows: Range<usize>,
    columns: Range<usize>,
    len: usize,
    column_count: usize,
}

impl Iterator for Cells {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.columns.is_empty() {
            return None;
        }
        while self.row < self.rows.end {
            if self.column < self.columns.end {
                let index = self.row * self.column_count + self.column;
                if index < self.len {
                    let cell = GridCell {
                        index,
                        row: self.row,
                        column: self.column,
                    };
                    self.column += 1;
                    return Some(cell);
                }
            }
            // Only the last row can be partial, so an out-of-range index ends
            // the row and every row after it.
            if self.column < self.columns.end {
                self.row = self.rows.end;
                break;
            }
            self.row += 1;
            self.column = self.columns.start;
        }
        None
    }
}

impl FusedIterator for Cells {}

impl GridGeometry {
    /// Number of rows needed for `len` cells.
    #[must_use]
    pub fn total_rows(&self, len: usize) -> usize {
        len.div_ceil(self.columns())
    }

    /// Size of the content for `len` cells.
    ///
    /// Width always spans every column, so horizontal scrolling reaches the
    /// last column even when the last row is partial.
    #[must_use]
    pub fn content_size(&self, len: usize) -> Size {
        if len == 0 {
            return Size::ZERO;
        }
        let item = self.item_size();
        Size::new(
            to_f64(self.columns()) * item.width,
            to_f64(self.total_rows(len)) * item.height,
        )
    }

    /// Computes the realized window of a `len`-cell grid at `scroll`.
    ///
    /// `scroll.x` is the horizontal (left) offset and `scroll.y` the vertical
    /// (top) offset. Rows are windowed over `total_rows(len)` and columns over
    /// `columns()`, each with the list arithmetic.
    #[must_use]
    pub fn window(&self, len: usize, scroll: Vec2) -> GridWindow {
        if len == 0 {
            return GridWindow::empty(self.columns());
        }
        let item = self.item_size();
        let viewport = self.viewport();
        let rows = axis_range(
            self.total_rows(len),
            item.height,
            viewport.height,
            scroll.y,
            self.overscan(),
        );
        let columns = axis_range(
            self.columns(),
            item.width,
            viewport.width,
            scroll.x,
            self.overscan(),
        );
        GridWindow {
            offset: Vec2::new(
                to_f64(columns.start) * item.width,
                to_f64(rows.start) * item.height,
            ),
            rows,
            columns,
            content_size: self.content_size(len),
            len,
            column_count: self.columns(),
        }
    }

    /// The cell holding linear `index`.
    #[must_use]
    pub fn cell(&self, index: usize) -> GridCell {
        GridCell {
            index,
            row: index / self.columns(),
            column: index % self.columns(),
        }
    }

    /// Content-space rectangle of `cell`.
    #[must_use]
    pub fn cell_rect(&self, cell: GridCell) -> Rect {
        let item = self.item_size();
        let origin = Point::new(
            to_f64(cell.column) * item.width,
            to_f64(cell.row) * item.height,
        );
        Rect::from_origin_size(origin, item)
    }

    /// Largest scroll position that still fills the viewport on each axis.
    #[must_use]
    pub fn max_scroll(&self, len: usize) -> Vec2 {
        let content = self.content_size(len);
        let viewport = self.viewport();
        Vec2::new(
            (content.width - viewport.width).max(0.0),
            (content.height - viewport.height).max(0.0),
        )
    }

    /// Vertical scroll offset that brings `row` into view.
    ///
    /// Behaves like [`ListGeometry::scroll_offset_for_index`] applied to rows.
    ///
    /// [`ListGeometry::scroll_offset_for_index`]: crate::ListGeometry::scroll_offset_for_index
    #[must_use]
    pub fn scroll_top_for_row(
        &self,
        len: usize,
        row: usize,
        align: ScrollAlign,
        current: f64,
    ) -> f64 {
        let item = self.item_size().height;
        let viewport = self.viewport().height;
        align_offset(self.total_rows(len), item, viewport, row, align, current)
    }

    /// Horizontal scroll offset that brings `column` into view.
    ///
    /// Columns past the last one target the last column. The result is
    /// clamped to [`max_scroll`](Self::max_scroll).
    #[must_use]
    pub fn scroll_left_for_column(&self, column: usize, align: ScrollAlign, current: f64) -> f64 {
        let item = self.item_size().width;
        let viewport = self.viewport().width;
        align_offset(self.columns(), item, viewport, column, align, current)
    }
}

/// Computes the grid window for a validated configuration.
///
/// Fails with [`ConfigError`] rather than windowing unusable geometry.
pub fn compute_grid_window(
    len: usize,
    item_size: Size,
    columns: usize,
    viewport: Size,
    scroll: Vec2,
    overscan: usize,
) -> Result<GridWindow, ConfigError> {
    let geometry = GridGeometry::new(item_size, columns, viewport)?.with_overscan(overscan);
    Ok(geometry.window(len, scroll))
}

fn to_f64(value: usize) -> f64 {
    value as f64
}
