// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot box arrangement.
//!
//! Backends that size their own plot area can ignore this. Otherwise [`PlotBox::arrange`]
//! turns a frame's [`DeviceAspect`](crate::DeviceAspect) into a concrete rectangle inside
//! the available view.

use kurbo::Rect;

use crate::axis::AxisKind;
use crate::frame::Frame;

/// Output of [`PlotBox::arrange`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBox {
    /// The available view rectangle.
    pub view: Rect,
    /// The plot rectangle, centered in `view`.
    pub plot: Rect,
}

impl PlotBox {
    /// Fits the largest plot rectangle into `view` that honors the frame's device aspect.
    ///
    /// - [`DeviceAspect::Auto`](crate::DeviceAspect::Auto) fills the view.
    /// - [`DeviceAspect::Equal`](crate::DeviceAspect::Equal) uses the ratio of the displayed
    ///   y and x spans.
    /// - [`DeviceAspect::Literal`](crate::DeviceAspect::Literal) uses the given height/width
    ///   ratio.
    ///
    /// A ratio that cannot be honored (degenerate spans, non-positive values) also fills
    /// the view.
    pub fn arrange(view: Rect, frame: &Frame) -> Self {
        let view = view.abs();
        let span_x = span(frame, AxisKind::X).unwrap_or(0.0);
        let span_y = span(frame, AxisKind::Y).unwrap_or(0.0);
        let ratio = frame
            .device_aspect
            .box_ratio(span_x, span_y)
            .filter(|r| r.is_finite() && *r > 0.0);

        let plot = match ratio {
            Some(ratio) => fit(view, ratio),
            None => view,
        };
        Self { view, plot }
    }
}

fn span(frame: &Frame, kind: AxisKind) -> Option<f64> {
    frame.axis(kind).map(|axis| {
        let (lo, hi) = axis.display_range();
        hi - lo
    })
}

fn fit(view: Rect, ratio: f64) -> Rect {
    let (w, h) = (view.width(), view.height());
    let (plot_w, plot_h) = if w * ratio <= h {
        (w, w * ratio)
    } else {
        (h / ratio, h)
    };
    let center = view.center();
    Rect::new(
        center.x - 0.5 * plot_w,
        center.y - 0.5 * plot_h,
        center.x + 0.5 * plot_w,
        center.y + 0.5 * plot_h,
    )
}
