// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear projection of scalar values between closed ranges.
//!
//! This is the whole numeric core of the crate: a normalized tilt component
//! is carried into a caller-chosen target range by the affine map that sends
//! the source endpoints onto the target endpoints. There is deliberately no
//! clamping at either end, so inputs outside the source range extrapolate
//! beyond the target range at the same slope.

use core::ops::RangeInclusive;

/// The nominal range of a normalized viewer-offset component.
pub const NORMALIZED_RANGE: RangeInclusive<f64> = -1.0..=1.0;

/// Projects `value` from `source` into `target` by linear interpolation.
///
/// The map takes `source.start()` to `target.start()` and `source.end()` to
/// `target.end()`; values in between move proportionally. Inputs outside
/// `source` extrapolate past the corresponding target endpoint, and a
/// degenerate `source` (both endpoints equal) divides by zero, yielding the
/// usual IEEE infinities or NaN. Callers own the choice of meaningful ranges.
///
/// # Example
///
/// ```
/// use understory_parallax::project;
///
/// assert_eq!(project(5.0, 0.0..=10.0, 0.0..=100.0), 50.0);
/// assert_eq!(project(0.0, -1.0..=1.0, 10.0..=50.0), 30.0);
/// // No clamping: out-of-range input extrapolates.
/// assert_eq!(project(2.0, -1.0..=1.0, -20.0..=20.0), 40.0);
/// ```
#[must_use]
pub fn project(value: f64, source: RangeInclusive<f64>, target: RangeInclusive<f64>) -> f64 {
    let (s0, s1) = source.into_inner();
    let (t0, t1) = target.into_inner();
    t0 + (t1 - t0) * (value - s0) / (s1 - s0)
}

/// Projects a normalized value from [`NORMALIZED_RANGE`] into `target`.
///
/// Shorthand for [`project`] with the source fixed to `-1.0..=1.0`, which is
/// the range platform motion subsystems report tilt in. `0.0` lands on the
/// center of `target`.
///
/// # Example
///
/// ```
/// use understory_parallax::project_normalized;
///
/// assert_eq!(project_normalized(-1.0, -20.0..=20.0), -20.0);
/// assert_eq!(project_normalized(0.0, -20.0..=20.0), 0.0);
/// assert_eq!(project_normalized(1.0, -20.0..=20.0), 20.0);
/// ```
#[must_use]
pub fn project_normalized(value: f64, target: RangeInclusive<f64>) -> f64 {
    project(value, NORMALIZED_RANGE, target)
}
