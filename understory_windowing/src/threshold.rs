// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Collection length above which hosts should switch to a windowed view.
pub const DEFAULT_VIRTUALIZE_THRESHOLD: usize = 100;

/// Returns `true` when a collection of `len` records is long enough that
/// windowing pays off compared with rendering every record.
///
/// Below the threshold the bookkeeping of a windowed view costs more than
/// it saves, so hosts render the plain collection.
#[must_use]
pub fn should_virtualize(len: usize, threshold: usize) -> bool {
    len > threshold
}
