// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-dimensional windowing over a strip of uniformly sized items.

use core::ops::Range;

use crate::config::{ConfigError, ListGeometry};
use crate::scalar::Scalar;

/// The realized portion of a list: indices `start..end` plus positioning.
///
/// `offset` is where item `start` sits in content space, so a host can
/// translate the realized block and have every item land at its true
/// position. `total_extent` sizes the spacer that makes the scroll container
/// report the full content length.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ListWindow<S: Scalar> {
    /// First realized index (inclusive).
    pub start: usize,
    /// One past the last realized index.
    pub end: usize,
    /// Content-space offset of item `start`.
    pub offset: S,
    /// Extent of the whole collection.
    pub total_extent: S,
}

impl<S: Scalar> ListWindow<S> {
    /// A window realizing nothing, for an empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            start: 0,
            end: 0,
            offset: S::zero(),
            total_extent: S::zero(),
        }
    }

    /// Realized indices as a range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of realized items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if nothing is realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `index` is realized.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// Realized range along one axis of `count` uniformly sized items.
///
/// Scroll offsets are sanitized first, so the result always satisfies
/// `start <= end <= count`, even when the offset lies beyond the content.
pub(crate) fn axis_range<S: Scalar>(
    count: usize,
    item_extent: S,
    viewport_extent: S,
    scroll_offset: S,
    overscan: usize,
) -> Range<usize> {
    let scroll = scroll_offset.sanitize_offset();
    let first = (scroll / item_extent).floor_index();
    let last = ((scroll + viewport_extent) / item_extent).ceil_index();
    let start = first.saturating_sub(overscan).min(count);
    let end = last.saturating_add(overscan).min(count).max(start);
    start..end
}

/// Scroll offset along one axis that brings `index` into view, clamped to
/// the scrollable range of `count` items.
pub(crate) fn align_offset<S: Scalar>(
    count: usize,
    item_extent: S,
    viewport_extent: S,
    index: usize,
    align: ScrollAlign,
    current: S,
) -> S {
    if count == 0 {
        return S::zero();
    }
    let leading = S::from_usize(index.min(count - 1)) * item_extent;
    let trailing = leading + item_extent;
    let two = S::from_usize(2);
    let target = match align {
        ScrollAlign::Start => leading,
        ScrollAlign::End => trailing - viewport_extent,
        ScrollAlign::Center => leading + item_extent / two - viewport_extent / two,
        ScrollAlign::Nearest => {
            let current = current.sanitize_offset();
            if leading < current {
                leading
            } else if trailing > current + viewport_extent {
                trailing - viewport_extent
            } else {
                current
            }
        }
    };
    let total = S::from_usize(count) * item_extent;
    let max = if total > viewport_extent {
        total - viewport_extent
    } else {
        S::zero()
    };
    let target = target.sanitize_offset();
    if target > max { max } else { target }
}

/// Computes the list window for a validated configuration.
///
/// Fails with [`ConfigError`] for non-positive or non-finite extents instead
/// of producing a window from them. See [`ListGeometry::window`] for the
/// arithmetic.
pub fn compute_window<S: Scalar>(
    len: usize,
    item_extent: S,
    viewport_extent: S,
    scroll_offset: S,
    overscan: usize,
) -> Result<ListWindow<S>, ConfigError> {
    let geometry = ListGeometry::new(item_extent, viewport_extent)?.with_overscan(overscan);
    Ok(geometry.window(len, scroll_offset))
}

/// How [`ListGeometry::scroll_offset_for_index`] positions the target item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollAlign {
    /// Align the item's leading edge with the viewport's leading edge.
    Start,
    /// Center the item in the viewport.
    Center,
    /// Align the item's trailing edge with the viewport's trailing edge.
    End,
    /// Scroll the minimum distance that makes the item fully visible.
    #[default]
    Nearest,
}

impl<S: Scalar> ListGeometry<S> {
    /// Computes the realized window of a `len`-item list at `scroll_offset`.
    ///
    /// - `start = clamp(floor(scroll / item) - overscan, 0, len)`
    /// - `end = clamp(ceil((scroll + viewport) / item) + overscan, 0, len)`
    /// - `offset = start * item`, `total_extent = len * item`
    ///
    /// Negative or NaN offsets count as `0`. Offsets past the content,
    /// including positive infinity, yield an empty window at `len`.
    #[must_use]
    pub fn window(&self, len: usize, scroll_offset: S) -> ListWindow<S> {
        if len == 0 {
            return ListWindow::empty();
        }
        let range = axis_range(
            len,
            self.item_extent(),
            self.viewport_extent(),
            scroll_offset,
            self.overscan(),
        );
        ListWindow {
            start: range.start,
            end: range.end,
            offset: self.item_offset(range.start),
            total_extent: self.total_extent(len),
        }
    }

    /// Content-space offset of the leading edge of `index`.
    #[must_use]
    pub fn item_offset(&self, index: usize) -> S {
        S::from_usize(index) * self.item_extent()
    }

    /// Extent of `len` items.
    #[must_use]
    pub fn total_extent(&self, len: usize) -> S {
        S::from_usize(len) * self.item_extent()
    }

    /// Largest scroll offset that still fills the viewport, or `0` when the
    /// content fits.
    #[must_use]
    pub fn max_scroll_offset(&self, len: usize) -> S {
        let total = self.total_extent(len);
        if total > self.viewport_extent() {
            total - self.viewport_extent()
        } else {
            S::zero()
        }
    }

    /// Clamps `scroll_offset` into `0..=max_scroll_offset(len)`.
    #[must_use]
    pub fn clamp_scroll_offset(&self, len: usize, scroll_offset: S) -> S {
        let scroll = scroll_offset.sanitize_offset();
        let max = self.max_scroll_offset(len);
        if scroll > max { max } else { scroll }
    }

    /// Scroll offset that brings `index` into view.
    ///
    /// `current` matters only for [`ScrollAlign::Nearest`], which keeps it
    /// when the item is already fully visible. Indices past the end target
    /// the last item; the result is clamped like
    /// [`clamp_scroll_offset`](Self::clamp_scroll_offset).
    #[must_use]
    pub fn scroll_offset_for_index(
        &self,
        len: usize,
        index: usize,
        align: ScrollAlign,
        current: S,
    ) -> S {
        align_offset(
            len,
            self.item_extent(),
            self.viewport_extent(),
            index,
            align,
            current,
        )
    }
}
