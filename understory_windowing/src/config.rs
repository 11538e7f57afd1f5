// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated geometry for lists and grids, and the host-facing option set.
//!
//! [`ListGeometry`] and [`GridGeometry`] can only be built through validating
//! constructors, so every window computed from one is well-formed. Hosts that
//! receive their configuration as loose options (for example from a component
//! property bag) go through [`WindowOptions`].

use core::fmt;

use kurbo::Size;

use crate::scalar::Scalar;

/// Overscan applied on each side when none is configured.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Axis a configuration value belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Vertical axis (item height, viewport height, scroll top).
    Vertical,
    /// Horizontal axis (item width, viewport width, scroll left).
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        })
    }
}

/// Error returned when a list or grid is configured with unusable geometry.
///
/// Construction refuses these rather than computing a window from them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An item extent was zero or negative.
    NonPositiveItemExtent {
        /// Axis of the offending extent.
        axis: Axis,
    },
    /// A viewport extent was zero or negative.
    NonPositiveViewport {
        /// Axis of the offending extent.
        axis: Axis,
    },
    /// An extent was NaN or infinite.
    NonFinite {
        /// Axis of the offending extent.
        axis: Axis,
    },
    /// A grid was configured with zero columns.
    ZeroColumns,
    /// Grid options carried neither an item width nor a column count.
    NotAGrid,
    /// A grid item width was given without a column count.
    MissingColumns,
    /// A grid column count was given without an item width.
    MissingItemWidth,
    /// A grid was requested without a viewport extent on `axis`.
    MissingViewport {
        /// Axis without a viewport extent.
        axis: Axis,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveItemExtent { axis } => {
                write!(f, "{axis} item extent must be greater than zero")
            }
            Self::NonPositiveViewport { axis } => {
                write!(f, "{axis} viewport extent must be greater than zero")
            }
            Self::NonFinite { axis } => write!(f, "{axis} extent must be finite"),
            Self::ZeroColumns => f.write_str("grid must have at least one column"),
            Self::NotAGrid => f.write_str("grid requires an item width and a column count"),
            Self::MissingColumns => f.write_str("grid item width requires a column count"),
            Self::MissingItemWidth => f.write_str("grid column count requires an item width"),
            Self::MissingViewport { axis } => {
                write!(f, "grid requires a {axis} viewport extent")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

fn check_item_extent<S: Scalar>(extent: S, axis: Axis) -> Result<(), ConfigError> {
    if !extent.is_finite() {
        Err(ConfigError::NonFinite { axis })
    } else if !extent.is_positive_extent() {
        Err(ConfigError::NonPositiveItemExtent { axis })
    } else {
        Ok(())
    }
}

fn check_viewport<S: Scalar>(extent: S, axis: Axis) -> Result<(), ConfigError> {
    if !extent.is_finite() {
        Err(ConfigError::NonFinite { axis })
    } else if !extent.is_positive_extent() {
        Err(ConfigError::NonPositiveViewport { axis })
    } else {
        Ok(())
    }
}

fn report(error: ConfigError) -> ConfigError {
    #[cfg(feature = "tracing")]
    tracing::warn!(%error, "rejected windowing configuration");
    error
}

/// Geometry of a one-dimensional list of uniformly sized items.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ListGeometry<S: Scalar> {
    item_extent: S,
    viewport_extent: S,
    overscan: usize,
}

impl<S: Scalar> ListGeometry<S> {
    /// Creates list geometry with [`DEFAULT_OVERSCAN`].
    ///
    /// Both extents must be finite and greater than zero.
    pub fn new(item_extent: S, viewport_extent: S) -> Result<Self, ConfigError> {
        check_item_extent(item_extent, Axis::Vertical).map_err(report)?;
        check_viewport(viewport_extent, Axis::Vertical).map_err(report)?;
        Ok(Self {
            item_extent,
            viewport_extent,
            overscan: DEFAULT_OVERSCAN,
        })
    }

    /// Returns this geometry with a different overscan count.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Extent of every item along the scroll axis.
    #[must_use]
    pub fn item_extent(&self) -> S {
        self.item_extent
    }

    /// Extent of the viewport along the scroll axis.
    #[must_use]
    pub fn viewport_extent(&self) -> S {
        self.viewport_extent
    }

    /// Number of extra items realized on each side of the visible range.
    #[must_use]
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Replaces the viewport extent.
    pub fn set_viewport_extent(&mut self, viewport_extent: S) -> Result<(), ConfigError> {
        check_viewport(viewport_extent, Axis::Vertical).map_err(report)?;
        self.viewport_extent = viewport_extent;
        Ok(())
    }

    /// Replaces the item extent.
    pub fn set_item_extent(&mut self, item_extent: S) -> Result<(), ConfigError> {
        check_item_extent(item_extent, Axis::Vertical).map_err(report)?;
        self.item_extent = item_extent;
        Ok(())
    }

    /// Replaces the overscan count.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }
}

/// Geometry of a grid of uniformly sized cells laid out row-major.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridGeometry {
    item_size: Size,
    columns: usize,
    viewport: Size,
    overscan: usize,
}

impl GridGeometry {
    /// Creates grid geometry with [`DEFAULT_OVERSCAN`].
    ///
    /// Item and viewport sizes must be finite and positive on both axes, and
    /// `columns` must be at least one.
    pub fn new(item_size: Size, columns: usize, viewport: Size) -> Result<Self, ConfigError> {
        check_item_extent(item_size.width, Axis::Horizontal).map_err(report)?;
        check_item_extent(item_size.height, Axis::Vertical).map_err(report)?;
        check_viewport(viewport.width, Axis::Horizontal).map_err(report)?;
        check_viewport(viewport.height, Axis::Vertical).map_err(report)?;
        if columns == 0 {
            return Err(report(ConfigError::ZeroColumns));
        }
        Ok(Self {
            item_size,
            columns,
            viewport,
            overscan: DEFAULT_OVERSCAN,
        })
    }

    /// Returns this geometry with a different overscan count.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Size of every cell.
    #[must_use]
    pub fn item_size(&self) -> Size {
        self.item_size
    }

    /// Number of columns per row.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Size of the viewport.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Number of extra rows and columns realized on each side.
    #[must_use]
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Replaces the viewport size.
    pub fn set_viewport(&mut self, viewport: Size) -> Result<(), ConfigError> {
        check_viewport(viewport.width, Axis::Horizontal).map_err(report)?;
        check_viewport(viewport.height, Axis::Vertical).map_err(report)?;
        self.viewport = viewport;
        Ok(())
    }

    /// Replaces the overscan count.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }
}

/// Loose windowing options as a host component receives them.
///
/// With the `serde` feature this deserializes from the camel-cased property
/// names hosts already use (`itemHeight`, `viewportHeight`, ...). Negative
/// overscan or column counts fail deserialization.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", deny_unknown_fields)
)]
pub struct WindowOptions {
    /// Height of every item.
    pub item_height: f64,
    /// Width of every item; grids only, required together with `columns`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_width: Option<f64>,
    /// Column count; grids only, required together with `item_width`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub columns: Option<usize>,
    /// Height of the viewport.
    pub viewport_height: f64,
    /// Width of the viewport; grids only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub viewport_width: Option<f64>,
    /// Overscan count, defaulting to [`DEFAULT_OVERSCAN`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub overscan: Option<usize>,
}

impl WindowOptions {
    /// Creates list options with the given item and viewport heights.
    #[must_use]
    pub fn list(item_height: f64, viewport_height: f64) -> Self {
        Self {
            item_height,
            viewport_height,
            ..Self::default()
        }
    }

    /// Returns `true` if either grid-only option is present.
    #[must_use]
    pub fn is_grid(&self) -> bool {
        self.item_width.is_some() || self.columns.is_some()
    }

    /// Validates these options as a one-dimensional list.
    ///
    /// Grid-only options are ignored.
    pub fn to_list_geometry(&self) -> Result<ListGeometry<f64>, ConfigError> {
        let geometry = ListGeometry::new(self.item_height, self.viewport_height)?;
        Ok(geometry.with_overscan(self.overscan.unwrap_or(DEFAULT_OVERSCAN)))
    }

    /// Validates these options as a grid.
    pub fn to_grid_geometry(&self) -> Result<GridGeometry, ConfigError> {
        let (item_width, columns) = match (self.item_width, self.columns) {
            (Some(width), Some(columns)) => (width, columns),
            (Some(_), None) => return Err(report(ConfigError::MissingColumns)),
            (None, None) => return Err(report(ConfigError::NotAGrid)),
            (None, Some(_)) => return Err(report(ConfigError::MissingItemWidth)),
        };
        let viewport_width = self.viewport_width.ok_or_else(|| {
            report(ConfigError::MissingViewport {
                axis: Axis::Horizontal,
            })
        })?;
        let geometry = GridGeometry::new(
            Size::new(item_width, self.item_height),
            columns,
            Size::new(viewport_width, self.viewport_height),
        )?;
        Ok(geometry.with_overscan(self.overscan.unwrap_or(DEFAULT_OVERSCAN)))
    }
}
