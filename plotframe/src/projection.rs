// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D projection scaling.
//!
//! The 3D backend renders the z axis foreshortened relative to x and y. An equal-spans
//! request therefore multiplies the z span by [`Z_SPAN_CORRECTION`] before normalizing, so
//! a cube of data still looks like a cube.

use glam::{DMat4, DVec3};

use crate::error::FrameError;

/// Empirical correction applied to the z span when equalizing spans.
pub const Z_SPAN_CORRECTION: f64 = 1.4;

/// A diagonal homogeneous scale transform, one factor per spatial axis.
///
/// The largest factor is always `1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleMatrix {
    factors: DVec3,
}

impl ScaleMatrix {
    /// Builds a matrix from raw per-axis factors, normalized by their maximum.
    ///
    /// Factors must be finite and non-negative with a positive maximum.
    pub fn from_factors(factors: [f64; 3]) -> Result<Self, FrameError> {
        if factors.iter().any(|f| !f.is_finite() || *f < 0.0) {
            return Err(FrameError::InvalidAspectConfig {
                reason: "scale factors must be finite and non-negative",
            });
        }
        let max = factors.iter().copied().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return Err(FrameError::InvalidAspectConfig {
                reason: "at least one scale factor must be positive",
            });
        }
        Ok(Self {
            factors: DVec3::from_array(factors) / max,
        })
    }

    /// Builds a matrix that gives each axis a length proportional to its span.
    ///
    /// The z span is multiplied by [`Z_SPAN_CORRECTION`] first. Spans smaller than the
    /// smallest non-zero span are raised to it, so a flat axis still gets a visible extent.
    pub fn equalized(span_x: f64, span_y: f64, span_z: f64) -> Result<Self, FrameError> {
        let spans = [
            span_x.abs(),
            span_y.abs(),
            span_z.abs() * Z_SPAN_CORRECTION,
        ];
        if spans.iter().any(|s| !s.is_finite()) {
            return Err(FrameError::InvalidAspectConfig {
                reason: "axis spans must be finite",
            });
        }
        let max_range = spans.iter().copied().fold(0.0_f64, f64::max);
        let min_range = spans
            .iter()
            .copied()
            .filter(|s| *s > 0.0)
            .fold(f64::INFINITY, f64::min);
        if max_range <= 0.0 || !min_range.is_finite() {
            return Err(FrameError::InvalidAspectConfig {
                reason: "cannot equalize spans when every axis has zero span",
            });
        }
        let factors = spans.map(|s| s.max(min_range) / max_range);
        Ok(Self {
            factors: DVec3::from_array(factors),
        })
    }

    /// Returns the normalized `[x, y, z]` factors.
    pub fn factors(&self) -> [f64; 3] {
        self.factors.to_array()
    }

    /// Returns the homogeneous 4×4 transform.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale(self.factors)
    }

    /// Applies the scale to a point.
    pub fn transform_point(&self, point: [f64; 3]) -> [f64; 3] {
        self.matrix()
            .transform_point3(DVec3::from_array(point))
            .to_array()
    }
}

/// Chooses the 3D scale transform.
///
/// Explicit factors take precedence over `aspect_equal`. Returns `Ok(None)` when neither is
/// requested.
pub fn scale_projection(
    x: (f64, f64),
    y: (f64, f64),
    z: (f64, f64),
    explicit_factors: Option<[f64; 3]>,
    aspect_equal: bool,
) -> Result<Option<ScaleMatrix>, FrameError> {
    if let Some(factors) = explicit_factors {
        if aspect_equal {
            log::debug!(
                target: "plotframe",
                "explicit scale factors take precedence over aspect_equal"
            );
        }
        return ScaleMatrix::from_factors(factors).map(Some);
    }
    if aspect_equal {
        return ScaleMatrix::equalized(x.1 - x.0, y.1 - y.0, z.1 - z.0).map(Some);
    }
    Ok(None)
}
