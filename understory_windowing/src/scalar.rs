// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction for one-dimensional extents and scroll offsets.
//!
//! Only `f32` and `f64` implement [`Scalar`]. The two-dimensional grid works
//! directly in `f64` through Kurbo types.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for item extents, viewport extents, and scroll offsets.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Returns `true` when the value can act as an item or viewport extent.
    fn is_positive_extent(self) -> bool {
        self.is_finite() && self > Self::zero()
    }

    /// Maps negative and NaN values to zero.
    ///
    /// Scroll hosts occasionally report rubber-band overscroll as a negative
    /// offset; windowing treats that as the top of the content. Positive
    /// infinity is kept and lands past the end of any content.
    fn sanitize_offset(self) -> Self {
        if self > Self::zero() {
            self
        } else {
            Self::zero()
        }
    }

    /// Returns `floor(self)` as an index, saturating at `0` and `usize::MAX`.
    fn floor_index(self) -> usize;

    /// Returns `ceil(self)` as an index, saturating at `0` and `usize::MAX`.
    fn ceil_index(self) -> usize;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            fn zero() -> Self {
                0.0
            }

            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            fn from_usize(value: usize) -> Self {
                value as Self
            }

            fn floor_index(self) -> usize {
                if self.is_nan() || self <= 0.0 {
                    return 0;
                }
                // Float-to-int `as` truncates toward zero and saturates, which
                // is `floor` for the positive values that reach this point.
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "Saturating conversion of a positive value is the intended index approximation"
                )]
                {
                    self as usize
                }
            }

            fn ceil_index(self) -> usize {
                let floor = self.floor_index();
                if floor < usize::MAX && Self::from_usize(floor) < self {
                    floor + 1
                } else {
                    floor
                }
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
