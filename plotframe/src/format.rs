// Copyright 2025 the plotframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const MAX_DECIMALS: usize = 12;

/// Returns the number of decimals needed to tell ticks `step` apart.
///
/// A step of `2.5` needs one decimal, `0.02` needs two, `50.0` needs none.
pub(crate) fn decimals_for_step(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let magnitude = -step.log10().floor();
    let mut decimals = if magnitude > 0.0 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to MAX_DECIMALS before the cast"
        )]
        {
            magnitude.min(MAX_DECIMALS as f64) as usize
        }
    } else {
        0
    };
    while decimals < MAX_DECIMALS {
        #[allow(
            clippy::cast_possible_wrap,
            clippy::cast_possible_truncation,
            reason = "decimals never exceeds MAX_DECIMALS"
        )]
        let scaled = step * 10_f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() <= 1.0e-6 * scaled.abs().max(1.0) {
            break;
        }
        decimals += 1;
    }
    decimals
}

/// Formats a tick value with a fixed number of decimals.
///
/// Negative zero is printed as `0`.
pub(crate) fn format_tick(value: f64, decimals: usize) -> String {
    let out = format!("{value:.decimals$}");
    if out.starts_with('-') && out[1..].chars().all(|c| c == '0' || c == '.') {
        return String::from(&out[1..]);
    }
    out
}
