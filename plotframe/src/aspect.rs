// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D aspect correction.
//!
//! Two independent knobs, applied in a fixed order:
//! 1. `aspect` resizes the bounds of the axis with the smaller span so that
//!    `span(x) / span(y) == aspect`, and asks the backend for equal data scaling.
//! 2. `scale` (a literal device aspect) then replaces the device aspect instruction.
//!
//! When both are given the bound resize still happens, but the literal scale decides the
//! visual ratio of the plot box.

use crate::error::FrameError;

/// How the backend should shape the plot box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DeviceAspect {
    /// Fill whatever box the backend has.
    #[default]
    Auto,
    /// One data unit has the same on-screen length on both axes.
    Equal,
    /// Plot box height divided by width.
    Literal(f64),
}

impl DeviceAspect {
    /// Returns the plot box height/width ratio for the given displayed data spans.
    ///
    /// Returns `None` for [`DeviceAspect::Auto`] and for degenerate spans.
    pub fn box_ratio(&self, span_x: f64, span_y: f64) -> Option<f64> {
        match *self {
            Self::Auto => None,
            Self::Equal => (span_x > 0.0 && span_y > 0.0).then(|| span_y / span_x),
            Self::Literal(ratio) => Some(ratio),
        }
    }
}

/// Result of [`correct_aspect`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectCorrection {
    /// Corrected x bounds.
    pub x: (f64, f64),
    /// Corrected y bounds.
    pub y: (f64, f64),
    /// Instruction for the backend's plot box.
    pub device_aspect: DeviceAspect,
}

fn validate(value: Option<f64>, reason: &'static str) -> Result<Option<f64>, FrameError> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(FrameError::InvalidAspectConfig { reason }),
        other => Ok(other),
    }
}

fn resize(bounds: (f64, f64), span: f64) -> (f64, f64) {
    let mid = 0.5 * bounds.0 + 0.5 * bounds.1;
    (mid - 0.5 * span, mid + 0.5 * span)
}

/// Applies the aspect and literal scale knobs to resolved 2D bounds.
///
/// Both values must be finite and positive.
pub fn correct_aspect(
    x: (f64, f64),
    y: (f64, f64),
    aspect: Option<f64>,
    literal_scale: Option<f64>,
) -> Result<AspectCorrection, FrameError> {
    let aspect = validate(aspect, "aspect must be finite and positive")?;
    let literal_scale = validate(literal_scale, "scale must be finite and positive")?;

    let mut out = AspectCorrection {
        x,
        y,
        device_aspect: DeviceAspect::Auto,
    };

    if let Some(aspect) = aspect {
        let span_x = x.1 - x.0;
        let span_y = y.1 - y.0;
        if span_x >= span_y {
            if span_x > 0.0 {
                out.y = resize(y, span_x / aspect);
            }
        } else {
            out.x = resize(x, span_y * aspect);
        }
        out.device_aspect = DeviceAspect::Equal;
    }

    if let Some(scale) = literal_scale {
        if aspect.is_some() {
            log::debug!(
                target: "plotframe",
                "literal scale {scale} overrides the device aspect implied by the aspect request"
            );
        }
        out.device_aspect = DeviceAspect::Literal(scale);
    }

    Ok(out)
}
