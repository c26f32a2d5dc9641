// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick planning.
//!
//! Ticks are evenly spaced over the resolved bounds (not the padded display range), unless
//! the caller supplies explicit locations. Explicit labels decide the tick count.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::axis::{AxisKind, AxisOptions, AxisSpec};
use crate::format::{decimals_for_step, format_tick};

/// Planned ticks for one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSpec {
    /// The axis these ticks belong to.
    pub axis: AxisKind,
    /// The tick count the caller asked for.
    pub requested_count: usize,
    /// The tick count actually used: the label count when labels are explicit, the
    /// location count when locations are explicit.
    pub effective_count: usize,
    /// Tick positions in data units, in placement order.
    pub locations: Vec<f64>,
    /// Tick label text.
    pub labels: Vec<String>,
    /// Whether `labels` came from the caller.
    pub explicit_labels: bool,
    /// Decimals used for generated labels.
    pub decimals: usize,
    /// Label rotation in degrees.
    pub label_angle: f64,
}

/// Returns `count` values evenly spaced over `[low, high]`, both ends included.
///
/// A single value sits at the midpoint. The span is never formed directly, so any finite
/// pair of ends yields finite values.
pub fn linspace(low: f64, high: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => alloc::vec![0.5 * low + 0.5 * high],
        _ => {
            let last = count - 1;
            (0..count)
                .map(|i| {
                    if i == last {
                        return high;
                    }
                    let t = i as f64 / last as f64;
                    low * (1.0 - t) + high * t
                })
                .collect()
        }
    }
}

/// Plans tick locations and labels for a resolved axis.
///
/// - Explicit labels set the effective count, whatever `tick_count` says.
/// - Explicit locations are used verbatim and set the effective count. When explicit
///   labels disagree in length, both lists are cut to the shorter one.
/// - Otherwise the effective count of locations is spread over the bounds; a single tick
///   sits at the midpoint.
///
/// `locations` and `labels` always have `effective_count` entries.
pub fn plan_ticks(axis: &AxisSpec, options: &AxisOptions) -> TickSpec {
    let requested_count = options.tick_count;
    let mut effective_count = options
        .tick_labels
        .as_ref()
        .map_or(requested_count, Vec::len);
    if effective_count != requested_count {
        log::debug!(
            target: "plotframe",
            "{} axis: {effective_count} labels override the requested {requested_count} ticks",
            axis.kind
        );
    }

    let locations = match &options.tick_locations {
        Some(locations) => {
            let mut locations = locations.clone();
            if options.tick_labels.is_some() {
                if locations.len() != effective_count {
                    log::warn!(
                        target: "plotframe",
                        "{} axis: {} tick locations but {effective_count} labels; keeping {}",
                        axis.kind,
                        locations.len(),
                        locations.len().min(effective_count)
                    );
                }
                locations.truncate(effective_count);
            }
            effective_count = locations.len();
            locations
        }
        None => linspace(axis.bounds.0, axis.bounds.1, effective_count),
    };

    let decimals = options
        .tick_decimals
        .unwrap_or_else(|| decimals_for_step(min_step(&locations)));

    let (labels, explicit_labels) = match &options.tick_labels {
        Some(labels) => (labels[..effective_count].to_vec(), true),
        None => (
            locations.iter().map(|v| format_tick(*v, decimals)).collect(),
            false,
        ),
    };

    TickSpec {
        axis: axis.kind,
        requested_count,
        effective_count,
        locations,
        labels,
        explicit_labels,
        decimals,
        label_angle: options.label_angle,
    }
}

fn min_step(locations: &[f64]) -> f64 {
    let step = locations
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .filter(|s| *s > 0.0)
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn axis(bounds: (f64, f64)) -> AxisSpec {
        AxisSpec {
            kind: AxisKind::X,
            data_range: Some(bounds),
            manual_lower: None,
            manual_upper: None,
            manual_pad_lower: None,
            manual_pad_upper: None,
            bounds,
            pad: (0.0, 0.0),
        }
    }

    #[test]
    fn single_tick_sits_at_midpoint() {
        for bounds in [(5.0, 5.0), (0.0, 10.0), (-3.0, 1.0)] {
            let ticks = plan_ticks(&axis(bounds), &AxisOptions::new().with_tick_count(1));
            assert_eq!(ticks.locations, vec![0.5 * (bounds.0 + bounds.1)]);
            assert_eq!(ticks.effective_count, 1);
        }
    }

    #[test]
    fn ticks_span_bounds_inclusive_and_increase() {
        for (low, high, n) in [(0.0, 1.0, 2), (-7.3, 12.9, 5), (1e-3, 2e-3, 11), (0.1, 0.7, 7)] {
            let ticks = plan_ticks(&axis((low, high)), &AxisOptions::new().with_tick_count(n));
            assert_eq!(ticks.locations.len(), n);
            assert_eq!(ticks.locations[0], low);
            assert_eq!(ticks.locations[n - 1], high);
            assert!(ticks.locations.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn labels_override_requested_count() {
        let opts = AxisOptions::new()
            .with_tick_count(5)
            .with_tick_labels(["low", "mid", "high"]);
        let ticks = plan_ticks(&axis((0.0, 10.0)), &opts);
        assert_eq!(ticks.requested_count, 5);
        assert_eq!(ticks.effective_count, 3);
        assert_eq!(ticks.locations, vec![0.0, 5.0, 10.0]);
        assert_eq!(ticks.labels, vec!["low", "mid", "high"]);
        assert!(ticks.explicit_labels);
    }

    #[test]
    fn explicit_locations_are_verbatim() {
        let opts = AxisOptions::new()
            .with_tick_count(2)
            .with_tick_locations(vec![42.0, -1.0, 3.5]);
        let ticks = plan_ticks(&axis((0.0, 10.0)), &opts);
        assert_eq!(ticks.locations, vec![42.0, -1.0, 3.5]);
        assert_eq!(ticks.effective_count, 3);
        assert_eq!(ticks.labels, vec!["42.0", "-1.0", "3.5"]);
    }

    #[test]
    fn generated_labels_follow_the_step() {
        let ticks = plan_ticks(&axis((0.0, 10.0)), &AxisOptions::new());
        assert_eq!(ticks.labels, vec!["0.0", "2.5", "5.0", "7.5", "10.0"]);

        let ticks = plan_ticks(&axis((0.0, 100.0)), &AxisOptions::new().with_tick_count(3));
        assert_eq!(ticks.labels, vec!["0", "50", "100"]);

        let fixed = AxisOptions::new().with_tick_count(3).with_tick_decimals(2);
        let ticks = plan_ticks(&axis((0.0, 1.0)), &fixed);
        assert_eq!(ticks.labels, vec!["0.00", "0.50", "1.00"]);
    }

    #[test]
    fn mismatched_locations_and_labels_are_cut_to_the_shorter() {
        let more_labels = AxisOptions::new()
            .with_tick_locations(vec![1.0, 2.0])
            .with_tick_labels(["a", "b", "c"]);
        let ticks = plan_ticks(&axis((0.0, 10.0)), &more_labels);
        assert_eq!(ticks.effective_count, 2);
        assert_eq!(ticks.locations, vec![1.0, 2.0]);
        assert_eq!(ticks.labels, vec!["a", "b"]);

        let more_locations = AxisOptions::new()
            .with_tick_locations(vec![1.0, 2.0, 3.0, 4.0])
            .with_tick_labels(["a", "b"]);
        let ticks = plan_ticks(&axis((0.0, 10.0)), &more_locations);
        assert_eq!(ticks.effective_count, 2);
        assert_eq!(ticks.locations, vec![1.0, 2.0]);
        assert_eq!(ticks.labels.len(), ticks.locations.len());
    }

    #[test]
    fn huge_finite_span_keeps_ticks_finite() {
        let locations = linspace(-f64::MAX, f64::MAX, 5);
        assert_eq!(locations[0], -f64::MAX);
        assert_eq!(locations[2], 0.0);
        assert_eq!(locations[4], f64::MAX);
        assert!(locations.iter().all(|v| v.is_finite()), "{locations:?}");
        assert!(locations.windows(2).all(|w| w[0] < w[1]), "{locations:?}");

        assert_eq!(linspace(-f64::MAX, f64::MAX, 1), vec![0.0]);

        let ticks = plan_ticks(&axis((-f64::MAX, f64::MAX)), &AxisOptions::new());
        assert!(ticks.labels.iter().all(|l| !l.contains("NaN") && !l.contains("inf")));
    }

    #[test]
    fn zero_ticks_plan_nothing() {
        let ticks = plan_ticks(&axis((0.0, 1.0)), &AxisOptions::new().with_tick_count(0));
        assert!(ticks.locations.is_empty());
        assert!(ticks.labels.is_empty());
    }

    #[test]
    fn label_angle_passes_through() {
        let ticks = plan_ticks(&axis((0.0, 1.0)), &AxisOptions::new().with_label_angle(-45.0));
        assert_eq!(ticks.label_angle, -45.0);
    }
}
