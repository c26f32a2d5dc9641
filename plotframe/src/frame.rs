// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart framing: options and data in, an inert [`Frame`] out.
//!
//! Framing runs the components in a fixed order:
//! 1. resolve every axis ([`crate::resolve_axis`]), then widen zero-span axes
//!    ([`crate::reconcile_spans`]);
//! 2. 2D charts apply aspect correction, 3D charts pick a scale matrix;
//! 3. ticks are planned from the corrected bounds;
//! 4. the colorbar is normalized, if one was requested.
//!
//! No step aborts the frame. Each error is logged, recorded in [`Frame::diagnostics`] and
//! replaced by a fallback.

extern crate alloc;

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::aspect::{DeviceAspect, correct_aspect};
use crate::axis::{AxisKind, AxisOptions, AxisSpec};
use crate::bounds::{reconcile_spans, resolve_axis};
use crate::colorbar::{ColorRule, ColorbarOptions, ColorbarSpec, normalize_colorbar};
use crate::error::FrameError;
use crate::projection::{ScaleMatrix, scale_projection};
use crate::theme::Theme;
use crate::ticks::{TickSpec, plan_ticks};

/// Number of spatial axes in a chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dimensionality {
    /// x and y.
    #[default]
    Two,
    /// x, y and z.
    Three,
}

impl Dimensionality {
    /// Returns the number of axes.
    pub fn axis_count(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Chart-level framing options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartOptions {
    /// 2D or 3D.
    pub dimensionality: Dimensionality,
    /// Per-axis options, indexed like [`AxisKind`]. Missing entries use defaults.
    pub axes: SmallVec<[AxisOptions; 3]>,
    /// Add [`crate::DEMO_PAD_FRACTION`] of the span on unconstrained sides.
    pub demo_pad: bool,
    /// 2D only: target `span(x) / span(y)`.
    pub aspect: Option<f64>,
    /// 2D only: literal plot box height/width.
    pub scale: Option<f64>,
    /// 3D only: explicit `[x, y, z]` scale factors.
    pub scale_factors: Option<[f64; 3]>,
    /// 3D only: size axes proportionally to their spans.
    pub aspect_equal: bool,
    /// Colorbar options. `None` means no colorbar.
    pub colorbar: Option<ColorbarOptions>,
}

impl ChartOptions {
    /// Options for a 2D chart.
    pub fn two_d() -> Self {
        Self::default()
    }

    /// Options for a 3D chart.
    pub fn three_d() -> Self {
        Self {
            dimensionality: Dimensionality::Three,
            ..Self::default()
        }
    }

    /// Set the options of one axis.
    pub fn with_axis(mut self, kind: AxisKind, options: AxisOptions) -> Self {
        let index = kind.index();
        if self.axes.len() <= index {
            self.axes.resize(index + 1, AxisOptions::default());
        }
        self.axes[index] = options;
        self
    }

    /// Enable or disable demo padding.
    pub fn with_demo_pad(mut self, demo_pad: bool) -> Self {
        self.demo_pad = demo_pad;
        self
    }

    /// Set the 2D aspect target.
    pub fn with_aspect(mut self, aspect: f64) -> Self {
        self.aspect = Some(aspect);
        self
    }

    /// Set the 2D literal plot box ratio.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set explicit 3D scale factors.
    pub fn with_scale_factors(mut self, x: f64, y: f64, z: f64) -> Self {
        self.scale_factors = Some([x, y, z]);
        self
    }

    /// Enable or disable 3D equal-span scaling.
    pub fn with_aspect_equal(mut self, aspect_equal: bool) -> Self {
        self.aspect_equal = aspect_equal;
        self
    }

    /// Request a colorbar.
    pub fn with_colorbar(mut self, colorbar: ColorbarOptions) -> Self {
        self.colorbar = Some(colorbar);
        self
    }

    /// Returns the options for `kind`, or the defaults if none were set.
    pub fn axis(&self, kind: AxisKind) -> AxisOptions {
        self.axes.get(kind.index()).cloned().unwrap_or_default()
    }

    /// Frames `data` under these options.
    pub fn frame(&self, data: &ChartData<'_>) -> Frame {
        let mut diagnostics = Vec::new();
        let mut record = |error: FrameError| {
            log::warn!(target: "plotframe", "{error}");
            diagnostics.push(error);
        };

        let kinds = &AxisKind::ALL[..self.dimensionality.axis_count()];
        let options: SmallVec<[AxisOptions; 3]> = kinds.iter().map(|k| self.axis(*k)).collect();

        let resolved: SmallVec<[AxisSpec; 3]> = kinds
            .iter()
            .zip(&options)
            .map(|(kind, opts)| {
                let values = data.axis(*kind);
                resolve_axis(*kind, values, opts, self.demo_pad).unwrap_or_else(|error| {
                    record(error);
                    unit_window(*kind)
                })
            })
            .collect();
        let mut axes = reconcile_spans(&resolved);

        let mut device_aspect = DeviceAspect::Auto;
        let mut scale_matrix = None;
        match self.dimensionality {
            Dimensionality::Two => {
                if self.aspect.is_some() || self.scale.is_some() {
                    let corrected =
                        correct_aspect(axes[0].bounds, axes[1].bounds, self.aspect, self.scale);
                    match corrected {
                        Ok(corrected) => {
                            axes[0] = axes[0].with_bounds(corrected.x);
                            axes[1] = axes[1].with_bounds(corrected.y);
                            device_aspect = corrected.device_aspect;
                        }
                        Err(error) => record(error),
                    }
                }
                if self.scale_factors.is_some() || self.aspect_equal {
                    log::debug!(target: "plotframe", "3D scale options ignored on a 2D chart");
                }
            }
            Dimensionality::Three => {
                match scale_projection(
                    axes[0].bounds,
                    axes[1].bounds,
                    axes[2].bounds,
                    self.scale_factors,
                    self.aspect_equal,
                ) {
                    Ok(matrix) => scale_matrix = matrix,
                    Err(error) => record(error),
                }
                if self.aspect.is_some() || self.scale.is_some() {
                    log::debug!(target: "plotframe", "2D aspect options ignored on a 3D chart");
                }
            }
        }

        let ticks = axes
            .iter()
            .zip(&options)
            .map(|(axis, opts)| plan_ticks(axis, opts))
            .collect();

        let colorbar = self.colorbar.as_ref().and_then(|opts| {
            normalize_colorbar(data.color, opts).map_err(&mut record).ok()
        });

        Frame {
            dimensionality: self.dimensionality,
            axes,
            ticks,
            device_aspect,
            scale_matrix,
            colorbar,
            diagnostics,
        }
    }
}

fn unit_window(kind: AxisKind) -> AxisSpec {
    AxisSpec {
        kind,
        data_range: None,
        manual_lower: None,
        manual_upper: None,
        manual_pad_lower: None,
        manual_pad_upper: None,
        bounds: (0.0, 1.0),
        pad: (0.0, 0.0),
    }
}

/// Borrowed per-axis data for one chart.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartData<'a> {
    axes: [&'a [f64]; 3],
    color: Option<ColorRule<'a>>,
}

impl<'a> ChartData<'a> {
    /// Creates chart data from per-axis slices in `x, y, z` order.
    ///
    /// Missing axes are empty; extra slices are ignored.
    pub fn new(axes: &[&'a [f64]]) -> Self {
        let mut out = Self::default();
        for (slot, values) in out.axes.iter_mut().zip(axes) {
            *slot = *values;
        }
        out
    }

    /// Set the rule a colorbar is normalized against.
    pub fn with_color(mut self, rule: ColorRule<'a>) -> Self {
        self.color = Some(rule);
        self
    }

    /// Returns the values of `kind`.
    pub fn axis(&self, kind: AxisKind) -> &'a [f64] {
        self.axes[kind.index()]
    }

    /// Returns the color rule, if set.
    pub fn color(&self) -> Option<ColorRule<'a>> {
        self.color
    }
}

/// The framing of one chart, ready for a backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// 2D or 3D.
    pub dimensionality: Dimensionality,
    /// Resolved axes, in `x, y[, z]` order.
    pub axes: SmallVec<[AxisSpec; 3]>,
    /// Planned ticks, one entry per axis.
    pub ticks: SmallVec<[TickSpec; 3]>,
    /// Plot box instruction for 2D charts.
    pub device_aspect: DeviceAspect,
    /// Scale transform for 3D charts.
    pub scale_matrix: Option<ScaleMatrix>,
    /// The colorbar, if one was requested and could be resolved.
    pub colorbar: Option<ColorbarSpec>,
    /// Errors that were recovered from while framing.
    pub diagnostics: Vec<FrameError>,
}

impl Frame {
    /// Returns the axis for `kind`, if the chart has one.
    pub fn axis(&self, kind: AxisKind) -> Option<&AxisSpec> {
        self.axes.get(kind.index())
    }

    /// Returns the ticks for `kind`, if the chart has that axis.
    pub fn ticks(&self, kind: AxisKind) -> Option<&TickSpec> {
        self.ticks.get(kind.index())
    }

    /// Returns whether framing completed without falling back.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Hands the frame and theme to a backend.
    pub fn hand_off<B: RenderBackend + ?Sized>(&self, backend: &mut B, theme: &Theme) {
        log::debug!(
            target: "plotframe",
            "handing off {} axes ({} diagnostics)",
            self.axes.len(),
            self.diagnostics.len()
        );
        backend.apply_frame(self, theme);
    }
}

/// A rendering backend that consumes frames.
pub trait RenderBackend {
    /// Applies axis limits, ticks, aspect and colorbar from `frame`, styled by `theme`.
    fn apply_frame(&mut self, frame: &Frame, theme: &Theme);
}
