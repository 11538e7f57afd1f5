// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_windowing --heading-base-level=0

//! Understory Windowing: list and grid windowing for virtualized views.
//!
//! Given `len` uniformly sized records and a viewport, this crate computes the
//! smallest contiguous window of records a host must materialize, plus the
//! offsets that place them and the total content extent that sizes the
//! scroll spacer. Everything else (owning records, building views, painting)
//! stays with the host.
//!
//! The pieces are:
//!
//! - [`ListGeometry`] / [`GridGeometry`]: validated item, viewport, and
//!   overscan configuration. Invalid geometry is a [`ConfigError`] at
//!   construction; a window is never computed from it.
//! - [`compute_window`] / [`compute_grid_window`]: the pure windowing
//!   functions, returning [`ListWindow`] and [`GridWindow`].
//! - [`ScrollCoalescer`] and [`FrameScheduler`]: per-frame coalescing of
//!   scroll notifications, so a burst of events costs one recomputation.
//! - [`Windowed`] ([`WindowedList`], [`WindowedGrid`]): a controller owning
//!   geometry, scroll state, and the latest window, with a render helper that
//!   calls back only for realized records.
//! - [`ItemKey`] and [`RealizedKeys`]: render identity for hosts that reuse
//!   view instances across windows.
//! - [`should_virtualize`]: whether a collection is long enough to bother.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_windowing::{Immediate, IndexKey, ListGeometry, WindowedList};
//!
//! let records: Vec<u32> = (0..1000).collect();
//!
//! // 50px rows in a 500px viewport, with the default overscan of 3.
//! let geometry = ListGeometry::new(50.0_f64, 500.0)?;
//! let mut list = WindowedList::new(geometry, records.len(), Immediate);
//!
//! // Scroll to row 50. `Immediate` has no frame clock, so this recomputes now.
//! let window = *list.on_scroll(2500.0).expect("immediate recomputation");
//! assert_eq!(window.range(), 47..63);
//! assert_eq!(window.offset, 2350.0);
//! assert_eq!(window.total_extent, 50_000.0);
//!
//! let rendered = list.render(&records, &IndexKey, |record, _index| record * 2);
//! assert_eq!(rendered.len(), 16);
//! # Ok::<(), understory_windowing::ConfigError>(())
//! ```
//!
//! All extents and offsets share one caller-chosen unit (typically logical
//! pixels). Item sizes are uniform per axis; variable sizes are not supported.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod frame;
mod grid;
mod keyed;
mod scalar;
mod threshold;
mod window;
mod windowed;

pub use config::{
    Axis, ConfigError, DEFAULT_OVERSCAN, GridGeometry, ListGeometry, WindowOptions,
};
pub use frame::{FrameScheduler, Immediate, ScrollCoalescer, ScrollPhase};
pub use grid::{Cells, GridCell, GridWindow, compute_grid_window};
pub use keyed::{IndexKey, ItemKey, KeyDiff, RealizedKeys};
pub use scalar::Scalar;
pub use threshold::{DEFAULT_VIRTUALIZE_THRESHOLD, should_virtualize};
pub use window::{ListWindow, ScrollAlign, compute_window};
pub use windowed::{
    Layout, RenderedCell, RenderedItem, Windowed, WindowedGrid, WindowedList,
};
