// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis options and the resolved axis record.
//!
//! [`AxisOptions`] is what a caller authors for one dimension; [`AxisSpec`] is what the
//! bounds resolver produces from it. Both are plain values: an `AxisSpec` is built fresh for
//! every frame and never mutated once it leaves the engine.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Which spatial dimension an axis describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisKind {
    /// The horizontal axis.
    X,
    /// The vertical axis (2D) or depth axis (3D).
    Y,
    /// The vertical axis of a 3D chart.
    Z,
}

impl AxisKind {
    /// Axis kinds in frame order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Returns the axis kind at `index` in frame order, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the position of this axis in frame order.
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl core::fmt::Display for AxisKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

/// Default requested tick density.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Authoring options for one axis.
///
/// Every field is optional; an axis with default options is framed from its data alone.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisOptions {
    /// Manual lower edge. Sets the lower pad to 0 unless [`AxisOptions::pad_lower`] is given.
    pub lower_bound: Option<f64>,
    /// Manual upper edge. Sets the upper pad to 0 unless [`AxisOptions::pad_upper`] is given.
    pub upper_bound: Option<f64>,
    /// Manual `(lower, upper)` override.
    ///
    /// Sides given here take precedence over `lower_bound`/`upper_bound`; a `None` side is
    /// filled from the computed bound.
    pub bounds_pair: Option<(Option<f64>, Option<f64>)>,
    /// Manual padding below the lower bound.
    pub pad_lower: Option<f64>,
    /// Manual padding above the upper bound.
    pub pad_upper: Option<f64>,
    /// Requested tick density.
    pub tick_count: usize,
    /// Explicit tick positions, used verbatim.
    pub tick_locations: Option<Vec<f64>>,
    /// Explicit tick text. Its length overrides `tick_count`.
    pub tick_labels: Option<Vec<String>>,
    /// Fixed number of decimals for generated tick labels.
    pub tick_decimals: Option<usize>,
    /// Tick label rotation in degrees. Passed through to the backend.
    pub label_angle: f64,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            lower_bound: None,
            upper_bound: None,
            bounds_pair: None,
            pad_lower: None,
            pad_upper: None,
            tick_count: DEFAULT_TICK_COUNT,
            tick_locations: None,
            tick_labels: None,
            tick_decimals: None,
            label_angle: 0.0,
        }
    }
}

impl AxisOptions {
    /// Creates options with every override unset and `tick_count = 5`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the manual lower edge.
    pub fn with_lower_bound(mut self, lower: f64) -> Self {
        self.lower_bound = Some(lower);
        self
    }

    /// Set the manual upper edge.
    pub fn with_upper_bound(mut self, upper: f64) -> Self {
        self.upper_bound = Some(upper);
        self
    }

    /// Set a manual `(lower, upper)` pair; `None` sides are computed from data.
    pub fn with_bounds_pair(mut self, lower: Option<f64>, upper: Option<f64>) -> Self {
        self.bounds_pair = Some((lower, upper));
        self
    }

    /// Set manual padding on both sides.
    pub fn with_pad(mut self, lower: f64, upper: f64) -> Self {
        self.pad_lower = Some(lower);
        self.pad_upper = Some(upper);
        self
    }

    /// Set manual padding below the lower bound.
    pub fn with_pad_lower(mut self, pad: f64) -> Self {
        self.pad_lower = Some(pad);
        self
    }

    /// Set manual padding above the upper bound.
    pub fn with_pad_upper(mut self, pad: f64) -> Self {
        self.pad_upper = Some(pad);
        self
    }

    /// Set the requested tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Use explicit tick positions.
    pub fn with_tick_locations(mut self, locations: impl Into<Vec<f64>>) -> Self {
        self.tick_locations = Some(locations.into());
        self
    }

    /// Use explicit tick labels.
    pub fn with_tick_labels<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.tick_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Fix the number of decimals of generated tick labels.
    pub fn with_tick_decimals(mut self, decimals: usize) -> Self {
        self.tick_decimals = Some(decimals);
        self
    }

    /// Set the tick label rotation in degrees.
    pub fn with_label_angle(mut self, angle_degrees: f64) -> Self {
        self.label_angle = angle_degrees;
        self
    }

    /// The effective manual lower edge (`bounds_pair` side first, then `lower_bound`).
    pub fn manual_lower(&self) -> Option<f64> {
        self.bounds_pair
            .and_then(|(lower, _)| lower)
            .or(self.lower_bound)
    }

    /// The effective manual upper edge (`bounds_pair` side first, then `upper_bound`).
    pub fn manual_upper(&self) -> Option<f64> {
        self.bounds_pair
            .and_then(|(_, upper)| upper)
            .or(self.upper_bound)
    }
}

/// A resolved axis: final bounds and padding for one dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSpec {
    /// The dimension this axis describes.
    pub kind: AxisKind,
    /// `(min, max)` of the finite data values, if there were any.
    pub data_range: Option<(f64, f64)>,
    /// Manual lower edge that was in effect.
    pub manual_lower: Option<f64>,
    /// Manual upper edge that was in effect.
    pub manual_upper: Option<f64>,
    /// Manual lower pad that was in effect.
    pub manual_pad_lower: Option<f64>,
    /// Manual upper pad that was in effect.
    pub manual_pad_upper: Option<f64>,
    /// Resolved `(lower, upper)` bounds. Always `lower <= upper`.
    pub bounds: (f64, f64),
    /// Resolved `(lower, upper)` padding, applied outside `bounds`.
    pub pad: (f64, f64),
}

impl AxisSpec {
    /// Returns `upper - lower` of the resolved bounds.
    pub fn span(&self) -> f64 {
        self.bounds.1 - self.bounds.0
    }

    /// Returns half of [`AxisSpec::span`], computed without overflowing for finite bounds.
    pub fn half_span(&self) -> f64 {
        0.5 * self.bounds.1 - 0.5 * self.bounds.0
    }

    /// Returns the midpoint of the resolved bounds.
    pub fn center(&self) -> f64 {
        0.5 * self.bounds.0 + 0.5 * self.bounds.1
    }

    /// Returns the visible range: bounds widened by the padding.
    pub fn display_range(&self) -> (f64, f64) {
        (self.bounds.0 - self.pad.0, self.bounds.1 + self.pad.1)
    }

    /// Returns whether the resolved bounds have zero span.
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Returns a copy with new bounds, keeping the padding.
    pub fn with_bounds(mut self, bounds: (f64, f64)) -> Self {
        self.bounds = bounds;
        self
    }
}
