// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds and padding resolution.
//!
//! Resolution happens in two passes:
//! - [`resolve_axis`] frames one axis from its data and [`AxisOptions`].
//! - [`reconcile_spans`] looks at all axes of a chart together and widens zero-span axes
//!   (single points, vertical or horizontal lines) into a usable window.

use smallvec::SmallVec;

use crate::axis::{AxisKind, AxisOptions, AxisSpec};
use crate::error::{DataSource, FrameError};

/// Fraction of the span added on each unconstrained side when demo padding is enabled.
pub const DEMO_PAD_FRACTION: f64 = 0.05;

/// Returns `(min, max)` of the finite values in `data`.
///
/// Non-finite values are ignored. Returns `None` if no finite values are present.
pub fn data_range(data: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in data {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug)]
struct Edge {
    value: f64,
    manual: bool,
    manual_pad: Option<f64>,
}

impl Edge {
    fn pad(&self, demo_pad: Option<f64>) -> f64 {
        match self.manual_pad {
            Some(pad) => pad,
            None if self.manual => 0.0,
            None => demo_pad.unwrap_or(0.0),
        }
    }
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite())
}

/// Resolves bounds and padding for one axis.
///
/// - A manual edge replaces the data extreme on its side and pins that side's pad to 0.
/// - A manual pad always wins; negative pads are clamped to 0.
/// - With `demo_pad`, every side without a manual edge or pad gets
///   [`DEMO_PAD_FRACTION`] of the span. A zero span uses `|value|` (or 1 at the origin) as
///   the base so the visible window stays non-empty.
///
/// Manual edges that invert the range are swapped together with their pads.
///
/// Fails with [`FrameError::DegenerateData`] when a side has neither data nor a manual edge.
pub fn resolve_axis(
    kind: AxisKind,
    data: &[f64],
    options: &AxisOptions,
    demo_pad: bool,
) -> Result<AxisSpec, FrameError> {
    let range = data_range(data);
    let manual_lower = finite(options.manual_lower());
    let manual_upper = finite(options.manual_upper());
    let manual_pad_lower = finite(options.pad_lower).map(|p| p.max(0.0));
    let manual_pad_upper = finite(options.pad_upper).map(|p| p.max(0.0));

    let lower = manual_lower
        .or(range.map(|(min, _)| min))
        .ok_or(FrameError::DegenerateData {
            origin: DataSource::Axis(kind),
        })?;
    let upper = manual_upper
        .or(range.map(|(_, max)| max))
        .ok_or(FrameError::DegenerateData {
            origin: DataSource::Axis(kind),
        })?;

    let mut lo = Edge {
        value: lower,
        manual: manual_lower.is_some(),
        manual_pad: manual_pad_lower,
    };
    let mut hi = Edge {
        value: upper,
        manual: manual_upper.is_some(),
        manual_pad: manual_pad_upper,
    };
    if lo.value > hi.value {
        log::debug!(
            target: "plotframe",
            "{kind} axis bounds inverted ({lower} > {upper}); swapping"
        );
        core::mem::swap(&mut lo, &mut hi);
    }

    let demo = demo_pad.then(|| {
        let half_span = 0.5 * hi.value - 0.5 * lo.value;
        if half_span > 0.0 {
            return 2.0 * DEMO_PAD_FRACTION * half_span;
        }
        let center = 0.5 * lo.value + 0.5 * hi.value;
        let base = if center != 0.0 { center.abs() } else { 1.0 };
        DEMO_PAD_FRACTION * base
    });

    Ok(AxisSpec {
        kind,
        data_range: range,
        manual_lower,
        manual_upper,
        manual_pad_lower,
        manual_pad_upper,
        bounds: (lo.value, hi.value),
        pad: (lo.pad(demo), hi.pad(demo)),
    })
}

/// Widens zero-span axes into a usable window, looking at the chart as a whole.
///
/// - If every axis has zero span (a single point), each becomes `value ± |value| / 2`
///   (`± 0.5` at the origin) with zero padding.
/// - Otherwise each zero-span axis borrows the span and padding of the widest
///   non-degenerate axis, centered on its own value.
///
/// Manual settings survive widening:
/// - a manual pad on a side is kept;
/// - a side with a manual edge stays where it is and the window grows away from it, with
///   zero padding unless a manual pad is set;
/// - an axis pinned on both sides is returned unchanged.
///
/// Axes with a non-zero span are returned unchanged.
pub fn reconcile_spans(axes: &[AxisSpec]) -> SmallVec<[AxisSpec; 3]> {
    let donor = axes
        .iter()
        .filter(|a| !a.is_degenerate())
        .fold(None::<&AxisSpec>, |best, a| match best {
            Some(b) if b.half_span() >= a.half_span() => Some(b),
            _ => Some(a),
        });

    axes.iter()
        .map(|axis| {
            if !axis.is_degenerate() {
                return *axis;
            }
            match donor {
                Some(donor) => widen(axis, donor.half_span(), donor.pad),
                None => {
                    let value = axis.bounds.0;
                    let half = if value == 0.0 { 0.5 } else { 0.5 * value.abs() };
                    widen(axis, half, (0.0, 0.0))
                }
            }
        })
        .collect()
}

fn widen(axis: &AxisSpec, half: f64, free_pad: (f64, f64)) -> AxisSpec {
    let value = axis.bounds.0;
    let lower_pinned = axis.manual_lower.is_some();
    let upper_pinned = axis.manual_upper.is_some();
    let bounds = match (lower_pinned, upper_pinned) {
        (true, true) => {
            log::debug!(
                target: "plotframe",
                "{} axis pinned to a zero-span range at {value}; not widened",
                axis.kind
            );
            return *axis;
        }
        (true, false) => (value, value + half + half),
        (false, true) => (value - half - half, value),
        (false, false) => (value - half, value + half),
    };
    let side_pad = |manual_pad: Option<f64>, pinned: bool, free: f64| {
        manual_pad.unwrap_or(if pinned { 0.0 } else { free })
    };
    AxisSpec {
        bounds,
        pad: (
            side_pad(axis.manual_pad_lower, lower_pinned, free_pad.0),
            side_pad(axis.manual_pad_upper, upper_pinned, free_pad.1),
        ),
        ..*axis
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    fn line(n: usize) -> Vec<f64> {
        (0..=n).map(|i| i as f64).collect()
    }

    #[test]
    fn bounds_follow_data_without_overrides() {
        let spec = resolve_axis(AxisKind::X, &[3.0, -1.0, 7.5], &AxisOptions::new(), false)
            .expect("finite data");
        assert_eq!(spec.bounds, (-1.0, 7.5));
        assert_eq!(spec.pad, (0.0, 0.0));
        assert_eq!(spec.data_range, Some((-1.0, 7.5)));
    }

    #[test]
    fn demo_pad_adds_five_percent_of_span() {
        let spec =
            resolve_axis(AxisKind::X, &line(10), &AxisOptions::new(), true).expect("finite data");
        assert_eq!(spec.bounds, (0.0, 10.0));
        assert!((spec.pad.0 - 0.5).abs() < 1e-12);
        assert!((spec.pad.1 - 0.5).abs() < 1e-12);
        let (lo, hi) = spec.display_range();
        assert!((lo + 0.5).abs() < 1e-12);
        assert!((hi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn demo_pad_uses_span_not_magnitudes() {
        // 5% of the span is 0.1, not 5% of abs(max) + abs(min).
        let data = [100.0, 102.0];
        let spec = resolve_axis(AxisKind::Y, &data, &AxisOptions::new(), true).unwrap();
        assert!((spec.pad.0 - 0.1).abs() < 1e-12);
        assert!((spec.pad.1 - 0.1).abs() < 1e-12);
    }

    #[test]
    fn manual_edge_is_hard_and_unpadded() {
        let opts = AxisOptions::new().with_upper_bound(20.0);
        let spec = resolve_axis(AxisKind::X, &line(10), &opts, true).unwrap();
        assert_eq!(spec.bounds, (0.0, 20.0));
        assert_eq!(spec.pad.1, 0.0);
        // The unconstrained side still gets demo padding, computed from the resolved span.
        assert!((spec.pad.0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn manual_pad_wins_over_hard_edge() {
        let opts = AxisOptions::new().with_lower_bound(-2.0).with_pad_lower(0.25);
        let spec = resolve_axis(AxisKind::X, &line(4), &opts, false).unwrap();
        assert_eq!(spec.bounds, (-2.0, 4.0));
        assert_eq!(spec.pad, (0.25, 0.0));
    }

    #[test]
    fn bounds_pair_fills_missing_side_from_data() {
        let opts = AxisOptions::new().with_bounds_pair(None, Some(12.0));
        let spec = resolve_axis(AxisKind::Y, &line(10), &opts, false).unwrap();
        assert_eq!(spec.bounds, (0.0, 12.0));
        assert_eq!(spec.manual_lower, None);
        assert_eq!(spec.manual_upper, Some(12.0));
    }

    #[test]
    fn inverted_manual_bounds_are_swapped() {
        let opts = AxisOptions::new().with_lower_bound(30.0);
        let spec = resolve_axis(AxisKind::X, &line(10), &opts, true).unwrap();
        assert_eq!(spec.bounds, (10.0, 30.0));
        // The manual edge moved to the upper side and keeps its zero pad.
        assert_eq!(spec.pad.1, 0.0);
        assert!(spec.pad.0 > 0.0);
    }

    #[test]
    fn empty_data_without_bounds_is_degenerate() {
        let err = resolve_axis(AxisKind::Z, &[], &AxisOptions::new(), false).unwrap_err();
        assert_eq!(
            err,
            FrameError::DegenerateData {
                origin: DataSource::Axis(AxisKind::Z)
            }
        );

        let err = resolve_axis(AxisKind::X, &[f64::NAN], &AxisOptions::new(), false).unwrap_err();
        assert_eq!(
            err,
            FrameError::DegenerateData {
                origin: DataSource::Axis(AxisKind::X)
            }
        );
    }

    #[test]
    fn empty_data_with_full_manual_range_resolves() {
        let opts = AxisOptions::new().with_bounds_pair(Some(-1.0), Some(1.0));
        let spec = resolve_axis(AxisKind::X, &[], &opts, true).unwrap();
        assert_eq!(spec.bounds, (-1.0, 1.0));
        assert_eq!(spec.pad, (0.0, 0.0));
    }

    #[test]
    fn zero_span_band_is_flat_unless_padded() {
        let flat = resolve_axis(AxisKind::X, &[5.0, 5.0], &AxisOptions::new(), false).unwrap();
        assert_eq!(flat.bounds, (5.0, 5.0));
        let (lo, hi) = flat.display_range();
        assert_eq!(hi - lo, 0.0);

        let demo = resolve_axis(AxisKind::X, &[5.0], &AxisOptions::new(), true).unwrap();
        let (lo, hi) = demo.display_range();
        assert!(hi - lo > 0.0);
        assert!((demo.center() - 5.0).abs() < 1e-12);

        let origin = resolve_axis(AxisKind::X, &[0.0], &AxisOptions::new(), true).unwrap();
        let (lo, hi) = origin.display_range();
        assert!(hi - lo > 0.0);

        let padded = AxisOptions::new().with_pad(1.0, 1.0);
        let manual = resolve_axis(AxisKind::X, &[5.0], &padded, false).unwrap();
        assert_eq!(manual.display_range(), (4.0, 6.0));
    }

    #[test]
    fn resolution_is_deterministic() {
        let data = [0.3, 9.1, -4.2, 2.0];
        let opts = AxisOptions::new().with_pad_upper(0.7);
        let a = resolve_axis(AxisKind::Y, &data, &opts, true).unwrap();
        let b = resolve_axis(AxisKind::Y, &data, &opts, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_point_becomes_half_value_band() {
        let x = resolve_axis(AxisKind::X, &[4.0], &AxisOptions::new(), true).unwrap();
        let y = resolve_axis(AxisKind::Y, &[-2.0], &AxisOptions::new(), true).unwrap();
        let axes = reconcile_spans(&[x, y]);
        assert_eq!(axes[0].bounds, (2.0, 6.0));
        assert_eq!(axes[0].pad, (0.0, 0.0));
        assert_eq!(axes[1].bounds, (-3.0, -1.0));
    }

    #[test]
    fn vertical_line_borrows_span_of_other_axis() {
        let x = resolve_axis(AxisKind::X, &[3.0, 3.0, 3.0], &AxisOptions::new(), true).unwrap();
        let y = resolve_axis(AxisKind::Y, &[0.0, 4.0, 8.0], &AxisOptions::new(), true).unwrap();
        let axes = reconcile_spans(&[x, y]);
        assert_eq!(axes[0].bounds, (-1.0, 7.0));
        assert_eq!(axes[0].pad, axes[1].pad);
        assert_eq!(axes[1], y);
    }

    #[test]
    fn degenerate_axis_borrows_from_widest_axis_in_3d() {
        let x = resolve_axis(AxisKind::X, &[0.0, 2.0], &AxisOptions::new(), false).unwrap();
        let y = resolve_axis(AxisKind::Y, &[0.0, 6.0], &AxisOptions::new(), false).unwrap();
        let z = resolve_axis(AxisKind::Z, &[1.0], &AxisOptions::new(), false).unwrap();
        let axes = reconcile_spans(&[x, y, z]);
        assert_eq!(axes[2].bounds, (-2.0, 4.0));
        assert_eq!(axes[0], x);
        assert_eq!(axes[1], y);
    }

    #[test]
    fn widening_keeps_manual_pads() {
        let opts = AxisOptions::new().with_pad(2.0, 2.0);
        let x = resolve_axis(AxisKind::X, &[3.0, 3.0], &opts, false).unwrap();
        let y = resolve_axis(AxisKind::Y, &[0.0, 10.0], &AxisOptions::new(), false).unwrap();
        let axes = reconcile_spans(&[x, y]);
        assert_eq!(axes[0].bounds, (-2.0, 8.0));
        assert_eq!(axes[0].pad, (2.0, 2.0));

        let one_side = AxisOptions::new().with_pad_upper(1.5);
        let x = resolve_axis(AxisKind::X, &[3.0], &one_side, true).unwrap();
        let y = resolve_axis(AxisKind::Y, &[0.0, 10.0], &AxisOptions::new(), true).unwrap();
        let axes = reconcile_spans(&[x, y]);
        assert!((axes[0].pad.0 - 0.5).abs() < 1e-12);
        assert_eq!(axes[0].pad.1, 1.5);
    }

    #[test]
    fn widening_grows_away_from_a_hard_edge() {
        let opts = AxisOptions::new().with_lower_bound(5.0);
        let x = resolve_axis(AxisKind::X, &[5.0, 5.0], &opts, true).unwrap();
        let y = resolve_axis(AxisKind::Y, &[0.0, 4.0], &AxisOptions::new(), true).unwrap();
        let axes = reconcile_spans(&[x, y]);
        assert_eq!(axes[0].bounds, (5.0, 9.0));
        assert_eq!(axes[0].pad.0, 0.0);
        assert_eq!(axes[0].pad.1, y.pad.1);
    }

    #[test]
    fn pinned_zero_span_range_is_not_widened() {
        let opts = AxisOptions::new().with_bounds_pair(Some(5.0), Some(5.0));
        let x = resolve_axis(AxisKind::X, &[1.0, 9.0], &opts, false).unwrap();
        let y = resolve_axis(AxisKind::Y, &[0.0, 10.0], &AxisOptions::new(), false).unwrap();
        let axes = reconcile_spans(&[x, y]);
        assert_eq!(axes[0], x);
        assert_eq!(axes[0].bounds, (5.0, 5.0));
    }

    #[test]
    fn huge_finite_spans_stay_finite() {
        let data = [-f64::MAX, f64::MAX];
        let spec = resolve_axis(AxisKind::X, &data, &AxisOptions::new(), true).unwrap();
        assert!(spec.pad.0.is_finite() && spec.pad.0 > 0.0, "{spec:?}");
        assert_eq!(spec.center(), 0.0);

        let flat = resolve_axis(AxisKind::Y, &[1.0], &AxisOptions::new(), false).unwrap();
        let axes = reconcile_spans(&[spec, flat]);
        assert!(axes[1].bounds.0.is_finite() && axes[1].bounds.1.is_finite());
        assert!(axes[1].bounds.0 < axes[1].bounds.1);
    }

    #[test]
    fn lower_never_exceeds_upper() {
        let samples: [&[f64]; 5] = [
            &[1.0],
            &[-3.0, 3.0],
            &[f64::NAN, 2.0, f64::INFINITY, -7.0],
            &[1e300, -1e300],
            &[0.0, 0.0, 0.0],
        ];
        for data in samples {
            for demo in [false, true] {
                let spec = resolve_axis(AxisKind::X, data, &AxisOptions::new(), demo).unwrap();
                assert!(spec.bounds.0 <= spec.bounds.1, "{spec:?}");
                let (lo, hi) = spec.display_range();
                assert!(lo <= hi, "{spec:?}");
            }
        }
    }
}
