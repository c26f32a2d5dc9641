// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis framing for 2D and 3D charts.
//!
//! `plotframe` turns raw per-axis data plus a typed option record into the numbers a
//! plotting backend needs before it draws anything:
//! - **Bounds** and padding per axis, including manual edges, demo padding and
//!   zero-span data.
//! - **Aspect** correction for 2D charts and a **scale matrix** for 3D charts.
//! - **Ticks** and tick labels.
//! - **Colorbar** ranges, ticks and banding.
//!
//! Each component is a free function returning `Result<_, FrameError>`.
//! [`ChartOptions::frame`] runs them in order and always produces a [`Frame`]; errors are
//! recovered, logged through the `log` facade (target `"plotframe"`) and kept in
//! [`Frame::diagnostics`].
//!
//! Drawing is out of scope; a backend consumes a [`Frame`] through [`RenderBackend`].

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod aspect;
mod axis;
mod bounds;
mod colorbar;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod frame;
mod layout;
mod projection;
mod theme;
mod ticks;

pub use aspect::{AspectCorrection, DeviceAspect, correct_aspect};
pub use axis::{AxisKind, AxisOptions, AxisSpec, DEFAULT_TICK_COUNT};
pub use bounds::{DEMO_PAD_FRACTION, data_range, reconcile_spans, resolve_axis};
pub use colorbar::{
    ColorRule, ColorbarOptions, ColorbarShading, ColorbarSpec, Normalization, normalize_colorbar,
};
pub use error::{DataSource, FrameError};
pub use frame::{ChartData, ChartOptions, Dimensionality, Frame, RenderBackend};
pub use layout::PlotBox;
pub use projection::{ScaleMatrix, Z_SPAN_CORRECTION, scale_projection};
pub use theme::{Colormap, FontFamily, FontStyle, FontWeight, TextStyle, Theme, Typography};
pub use ticks::{TickSpec, linspace, plan_ticks};
