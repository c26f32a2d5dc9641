// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Framing errors.
//!
//! Every component returns these through `Result`. The chart orchestrator never lets one
//! abort a frame: it falls back, records the error in `Frame::diagnostics` and logs it.

use crate::axis::AxisKind;

/// Where degenerate data came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// The data of a chart axis.
    Axis(AxisKind),
    /// The quantity mapped through the colorbar.
    ColorQuantity,
}

impl core::fmt::Display for DataSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Axis(kind) => write!(f, "{kind} axis"),
            Self::ColorQuantity => f.write_str("color quantity"),
        }
    }
}

/// Errors produced while framing a chart.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FrameError {
    /// An axis (or the colorbar quantity) has no finite data and no complete manual range.
    #[error("no finite data and no manual bounds for the {origin}")]
    DegenerateData {
        /// The data that could not be resolved.
        origin: DataSource,
    },

    /// A colorbar was requested without a quantity array or a normalization.
    #[error("colorbar requested without a quantity or a normalization; colorbar omitted")]
    MissingColorRule,

    /// The aspect or scale configuration cannot be satisfied.
    #[error("invalid aspect configuration: {reason}")]
    InvalidAspectConfig {
        /// What was wrong with the configuration.
        reason: &'static str,
    },
}
