// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windowing controller driven by scroll and resize notifications.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Rect, Size, Vec2};

use crate::config::{ConfigError, GridGeometry, ListGeometry};
use crate::frame::{FrameScheduler, Immediate, ScrollCoalescer};
use crate::grid::{GridCell, GridWindow};
use crate::keyed::ItemKey;
use crate::scalar::Scalar;
use crate::window::ListWindow;

/// Geometry that can window a collection.
///
/// Implemented by [`ListGeometry`] and [`GridGeometry`].
pub trait Layout {
    /// Scroll position type.
    type Offset: Copy + Debug + PartialEq;
    /// Computed window type.
    type Window: Clone + Debug;

    /// Computes the window for `len` items at `offset`.
    fn compute(&self, len: usize, offset: Self::Offset) -> Self::Window;

    /// Scroll position before the first notification.
    fn origin() -> Self::Offset;
}

impl<S: Scalar> Layout for ListGeometry<S> {
    type Offset = S;
    type Window = ListWindow<S>;

    fn compute(&self, len: usize, offset: S) -> ListWindow<S> {
        self.window(len, offset)
    }

    fn origin() -> S {
        S::zero()
    }
}

impl Layout for GridGeometry {
    type Offset = Vec2;
    type Window = GridWindow;

    fn compute(&self, len: usize, offset: Vec2) -> GridWindow {
        self.window(len, offset)
    }

    fn origin() -> Vec2 {
        Vec2::ZERO
    }
}

/// Controller for a one-dimensional list.
pub type WindowedList<S, F = Immediate> = Windowed<ListGeometry<S>, F>;

/// Controller for a grid.
pub type WindowedGrid<F = Immediate> = Windowed<GridGeometry, F>;

/// Owns the windowing state of one list or grid instance.
///
/// The controller computes a window on construction ("mount"), after every
/// coalesced scroll notification, and synchronously after any geometry or
/// length change. Each recomputation bumps [`revision`](Self::revision).
/// After [`teardown`](Self::teardown) it produces no further windows.
#[derive(Debug)]
pub struct Windowed<L: Layout, F: FrameScheduler = Immediate> {
    layout: L,
    len: usize,
    scroll: ScrollCoalescer<L::Offset, F::Token>,
    scheduler: F,
    window: L::Window,
    revision: u64,
}

impl<L: Layout, F: FrameScheduler> Windowed<L, F> {
    /// Creates a controller for `len` items and computes the initial window.
    pub fn new(layout: L, len: usize, scheduler: F) -> Self {
        let origin = L::origin();
        let window = layout.compute(len, origin);
        Self {
            layout,
            len,
            scroll: ScrollCoalescer::new(origin),
            scheduler,
            window,
            revision: 1,
        }
    }

    /// Current geometry.
    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Number of items in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Most recent window.
    #[must_use]
    pub fn window(&self) -> &L::Window {
        &self.window
    }

    /// Latest scroll position, including one not yet applied by a frame.
    #[must_use]
    pub fn scroll_offset(&self) -> L::Offset {
        self.scroll.latest()
    }

    /// Number of windows computed so far, starting at `1` for the initial one.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` while a frame is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.scroll.is_pending()
    }

    /// Returns `true` after [`teardown`](Self::teardown).
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.scroll.is_torn_down()
    }

    /// Shared access to the scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    /// Exclusive access to the scheduler, for hosts that pump frames.
    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    /// Handles a scroll notification.
    ///
    /// Returns the new window when it was recomputed synchronously (no frame
    /// primitive); otherwise `None` until [`on_frame`](Self::on_frame).
    pub fn on_scroll(&mut self, offset: L::Offset) -> Option<&L::Window> {
        let offset = self.scroll.notify(offset, &mut self.scheduler)?;
        Some(self.recompute(offset))
    }

    /// Handles the frame callback for `token`, recomputing with the latest
    /// offset. Stale tokens and callbacks after teardown return `None`.
    pub fn on_frame(&mut self, token: F::Token) -> Option<&L::Window> {
        let offset = self.scroll.on_frame(token)?;
        Some(self.recompute(offset))
    }

    /// Replaces the geometry and recomputes immediately.
    pub fn set_layout(&mut self, layout: L) -> Option<&L::Window> {
        self.layout = layout;
        self.refresh()
    }

    /// Changes the collection length and recomputes immediately.
    pub fn set_len(&mut self, len: usize) -> Option<&L::Window> {
        self.len = len;
        self.refresh()
    }

    /// Recomputes immediately with the latest offset, cancelling any
    /// outstanding frame. Returns `None` after teardown.
    pub fn refresh(&mut self) -> Option<&L::Window> {
        if !self.scroll.flush(&mut self.scheduler) {
            return None;
        }
        let offset = self.scroll.latest();
        Some(self.recompute(offset))
    }

    /// Cancels any outstanding frame and stops producing windows.
    pub fn teardown(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            revision = self.revision,
            pending = self.scroll.is_pending(),
            "tearing down windowed view"
        );
        self.scroll.teardown(&mut self.scheduler);
    }

    fn recompute(&mut self, offset: L::Offset) -> &L::Window {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "window_recompute",
            len = self.len,
            revision = self.revision + 1,
            offset = ?offset
        )
        .entered();

        self.window = self.layout.compute(self.len, offset);
        self.revision += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(window = ?self.window, "window recomputed");

        &self.window
    }
}

/// A record rendered by [`WindowedList::render`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem<K, R, S> {
    /// Render identity from the key function.
    pub key: K,
    /// Index of the record in the collection.
    pub index: usize,
    /// Content-space offset of the item's leading edge.
    pub offset: S,
    /// Whatever the render callback produced.
    pub unit: R,
}

impl<S: Scalar, F: FrameScheduler> Windowed<ListGeometry<S>, F> {
    /// Resizes the viewport and recomputes immediately.
    ///
    /// An invalid extent is rejected and leaves the controller unchanged.
    pub fn set_viewport(
        &mut self,
        viewport_extent: S,
    ) -> Result<Option<&ListWindow<S>>, ConfigError> {
        self.layout.set_viewport_extent(viewport_extent)?;
        Ok(self.refresh())
    }

    /// Changes the item extent and recomputes immediately.
    pub fn set_item_extent(
        &mut self,
        item_extent: S,
    ) -> Result<Option<&ListWindow<S>>, ConfigError> {
        self.layout.set_item_extent(item_extent)?;
        Ok(self.refresh())
    }

    /// Realized records paired with their indices.
    ///
    /// Indices past the end of `records` are skipped, so a host whose slice
    /// shrank before [`set_len`](Self::set_len) never sees a bad index.
    pub fn visible<'a, T>(&self, records: &'a [T]) -> impl Iterator<Item = (usize, &'a T)> {
        let range = if self.is_torn_down() {
            0..0
        } else {
            self.window.range()
        };
        range.filter_map(move |index| records.get(index).map(|record| (index, record)))
    }

    /// Renders every realized record.
    ///
    /// `render` runs once per realized record, in index order. Returns an
    /// empty vector after teardown.
    pub fn render<T, K, R>(
        &self,
        records: &[T],
        key: &K,
        mut render: impl FnMut(&T, usize) -> R,
    ) -> Vec<RenderedItem<K::Key, R, S>>
    where
        K: ItemKey<T>,
    {
        self.visible(records)
            .map(|(index, record)| RenderedItem {
                key: key.key(record, index),
                index,
                offset: self.layout.item_offset(index),
                unit: render(record, index),
            })
            .collect()
    }
}

/// A record rendered by [`WindowedGrid::render`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedCell<K, R> {
    /// Render identity from the key function.
    pub key: K,
    /// Grid position and linear index of the record.
    pub cell: GridCell,
    /// Content-space rectangle of the cell.
    pub rect: Rect,
    /// Whatever the render callback produced.
    pub unit: R,
}

impl<F: FrameScheduler> Windowed<GridGeometry, F> {
    /// Resizes the viewport and recomputes immediately.
    ///
    /// An invalid size is rejected and leaves the controller unchanged.
    pub fn set_viewport(&mut self, viewport: Size) -> Result<Option<&GridWindow>, ConfigError> {
        self.layout.set_viewport(viewport)?;
        Ok(self.refresh())
    }

    /// Realized records paired with their cells.
    ///
    /// Cells past the end of `records` are skipped.
    pub fn visible<'a, T>(
        &self,
        records: &'a [T],
    ) -> impl Iterator<Item = (GridCell, &'a T)> {
        let cells = if self.is_torn_down() {
            GridWindow::empty(self.layout.columns()).cells()
        } else {
            self.window.cells()
        };
        cells.filter_map(move |cell| records.get(cell.index).map(|record| (cell, record)))
    }

    /// Renders every realized cell in row-major order.
    ///
    /// Returns an empty vector after teardown.
    pub fn render<T, K, R>(
        &self,
        records: &[T],
        key: &K,
        mut render: impl FnMut(&T, usize) -> R,
    ) -> Vec<RenderedCell<K::Key, R>>
    where
        K: ItemKey<T>,
    {
        self.visible(records)
            .map(|(cell, record)| RenderedCell {
                key: key.key(record, cell.index),
                cell,
                rect: self.layout.cell_rect(cell),
                unit: render(record, cell.index),
            })
            .collect()
    }
}
