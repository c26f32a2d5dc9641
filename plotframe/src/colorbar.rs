// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colorbar range, ticks and banding.
//!
//! A colorbar needs a color rule: either the quantity that is being color-mapped, or an
//! externally supplied [`Normalization`]. Manual `vmin`/`vmax` override either.
//!
//! With `hard_bounds` the bar is drawn as flat bands whose edges are the tick locations;
//! otherwise the colormap is shaded continuously.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::color::DynamicColor;
use peniko::{Brush, Color, ColorStop, Gradient};

use crate::axis::DEFAULT_TICK_COUNT;
use crate::bounds::data_range;
use crate::error::{DataSource, FrameError};
use crate::format::{decimals_for_step, format_tick};
use crate::theme::Colormap;
use crate::ticks::linspace;

/// An externally supplied value range for color mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalization {
    /// Value mapped to the start of the colormap.
    pub vmin: f64,
    /// Value mapped to the end of the colormap.
    pub vmax: f64,
}

impl Normalization {
    /// Creates a normalization over `[vmin, vmax]`.
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self { vmin, vmax }
    }
}

/// What a colorbar's range is derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorRule<'a> {
    /// The color-mapped values themselves.
    Quantity(&'a [f64]),
    /// A caller-provided normalization.
    Norm(Normalization),
}

/// Authoring options for a colorbar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorbarOptions {
    /// Manual lower end of the value range.
    pub vmin: Option<f64>,
    /// Manual upper end of the value range.
    pub vmax: Option<f64>,
    /// Number of ticks spanning `[vmin, vmax]`.
    pub tick_count: usize,
    /// Draw discrete bands between ticks instead of continuous shading.
    pub hard_bounds: bool,
}

impl Default for ColorbarOptions {
    fn default() -> Self {
        Self {
            vmin: None,
            vmax: None,
            tick_count: DEFAULT_TICK_COUNT,
            hard_bounds: false,
        }
    }
}

impl ColorbarOptions {
    /// Creates colorbar options with an automatic range and five ticks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the manual value range.
    pub fn with_range(mut self, vmin: f64, vmax: f64) -> Self {
        self.vmin = Some(vmin);
        self.vmax = Some(vmax);
        self
    }

    /// Set the manual lower end.
    pub fn with_vmin(mut self, vmin: f64) -> Self {
        self.vmin = Some(vmin);
        self
    }

    /// Set the manual upper end.
    pub fn with_vmax(mut self, vmax: f64) -> Self {
        self.vmax = Some(vmax);
        self
    }

    /// Set the tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Enable or disable discrete banding.
    pub fn with_hard_bounds(mut self, hard_bounds: bool) -> Self {
        self.hard_bounds = hard_bounds;
        self
    }
}

/// How the colorbar is shaded.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorbarShading {
    /// The colormap is shaded smoothly from `vmin` to `vmax`.
    Continuous,
    /// Flat bands between consecutive boundaries.
    Discrete {
        /// Band edges, equal to the tick locations.
        boundaries: Vec<f64>,
    },
}

/// A resolved colorbar.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorbarSpec {
    /// Lower end of the value range. Always `vmin <= vmax`.
    pub vmin: f64,
    /// Upper end of the value range.
    pub vmax: f64,
    /// Number of ticks.
    pub tick_count: usize,
    /// Tick locations, evenly spaced over `[vmin, vmax]`.
    pub ticks: Vec<f64>,
    /// Tick label text.
    pub labels: Vec<String>,
    /// Whether discrete banding was requested.
    pub hard_bounds: bool,
    /// Resulting shading.
    pub shading: ColorbarShading,
}

impl ColorbarSpec {
    /// Maps a value into `[0, 1]` along the bar. Values outside the range are clamped.
    ///
    /// A zero-width range maps everything to `0.5`.
    pub fn position(&self, value: f64) -> f64 {
        let half_span = 0.5 * self.vmax - 0.5 * self.vmin;
        if half_span <= 0.0 {
            return 0.5;
        }
        ((0.5 * value - 0.5 * self.vmin) / half_span).clamp(0.0, 1.0)
    }

    /// Returns the band containing `value` for discrete shading.
    ///
    /// Values outside the range fall in the first or last band. Returns `None` for
    /// continuous shading or when there are fewer than two boundaries.
    pub fn band_index(&self, value: f64) -> Option<usize> {
        let ColorbarShading::Discrete { boundaries } = &self.shading else {
            return None;
        };
        let bands = boundaries.len().checked_sub(1).filter(|n| *n > 0)?;
        let inner = boundaries[1..bands]
            .iter()
            .take_while(|b| value >= **b)
            .count();
        Some(inner)
    }

    /// Returns the color of `value` under this colorbar.
    ///
    /// Discrete shading gives every value in a band the color at the band's midpoint.
    pub fn color_for(&self, value: f64, colormap: &Colormap) -> Color {
        match (&self.shading, self.band_index(value)) {
            (ColorbarShading::Discrete { boundaries }, Some(i)) => {
                let mid = 0.5 * (boundaries[i] + boundaries[i + 1]);
                colormap.sample(self.position(mid))
            }
            _ => colormap.sample(self.position(value)),
        }
    }

    /// Builds the bar's paint as a linear gradient from `start` (at `vmin`) to `end`.
    ///
    /// Discrete shading repeats each band color at both band edges, producing hard steps.
    pub fn brush(&self, colormap: &Colormap, start: Point, end: Point) -> Brush {
        let mut stops: Vec<ColorStop> = Vec::new();
        let mut push = |offset: f64, color: Color| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "gradient offsets are in [0, 1]"
            )]
            let offset = offset as f32;
            stops.push(ColorStop {
                offset,
                color: DynamicColor::from_alpha_color(color),
            });
        };

        match &self.shading {
            ColorbarShading::Discrete { boundaries } if boundaries.len() >= 2 => {
                for edge in boundaries.windows(2) {
                    let color = self.color_for(0.5 * (edge[0] + edge[1]), colormap);
                    push(self.position(edge[0]), color);
                    push(self.position(edge[1]), color);
                }
            }
            ColorbarShading::Discrete { .. } => {
                let color = colormap.sample(0.5);
                push(0.0, color);
                push(1.0, color);
            }
            ColorbarShading::Continuous => {
                let colors = colormap.colors();
                match colors.len() {
                    0 | 1 => {
                        let color = colormap.sample(0.0);
                        push(0.0, color);
                        push(1.0, color);
                    }
                    n => {
                        for (i, color) in colors.iter().enumerate() {
                            push(i as f64 / (n - 1) as f64, *color);
                        }
                    }
                }
            }
        }

        Gradient::new_linear(start, end)
            .with_stops(stops.as_slice())
            .into()
    }
}

/// Resolves a colorbar's value range, ticks and shading.
///
/// - `vmin`/`vmax` come from the options when given, else from the rule.
/// - Ticks are `tick_count` evenly spaced values over `[vmin, vmax]`.
/// - `hard_bounds` turns the ticks into band boundaries.
///
/// Fails with [`FrameError::MissingColorRule`] without a rule, and with
/// [`FrameError::DegenerateData`] when the rule has no finite range and the options do not
/// fill it in.
pub fn normalize_colorbar(
    rule: Option<ColorRule<'_>>,
    options: &ColorbarOptions,
) -> Result<ColorbarSpec, FrameError> {
    let rule = rule.ok_or(FrameError::MissingColorRule)?;
    let auto = match rule {
        ColorRule::Quantity(values) => data_range(values),
        ColorRule::Norm(norm) => Some((norm.vmin, norm.vmax)),
    };
    let auto_min = auto.map(|(lo, _)| lo).filter(|v| v.is_finite());
    let auto_max = auto.map(|(_, hi)| hi).filter(|v| v.is_finite());

    let degenerate = FrameError::DegenerateData {
        origin: DataSource::ColorQuantity,
    };
    let mut vmin = options
        .vmin
        .filter(|v| v.is_finite())
        .or(auto_min)
        .ok_or(degenerate.clone())?;
    let mut vmax = options
        .vmax
        .filter(|v| v.is_finite())
        .or(auto_max)
        .ok_or(degenerate)?;
    if vmin > vmax {
        log::debug!(target: "plotframe", "colorbar range inverted ({vmin} > {vmax}); swapping");
        core::mem::swap(&mut vmin, &mut vmax);
    }

    let ticks = linspace(vmin, vmax, options.tick_count);
    let step = if ticks.len() >= 2 {
        ticks[1] - ticks[0]
    } else {
        0.0
    };
    let decimals = decimals_for_step(step);
    let labels = ticks.iter().map(|v| format_tick(*v, decimals)).collect();

    let shading = if options.hard_bounds {
        ColorbarShading::Discrete {
            boundaries: ticks.clone(),
        }
    } else {
        ColorbarShading::Continuous
    };

    Ok(ColorbarSpec {
        vmin,
        vmax,
        tick_count: options.tick_count,
        ticks,
        labels,
        hard_bounds: options.hard_bounds,
        shading,
    })
}
