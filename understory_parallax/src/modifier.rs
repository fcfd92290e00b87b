// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-view projected offset state.

use core::ops::RangeInclusive;

use kurbo::Vec2;

use crate::project::project_normalized;
use crate::viewer::ViewerOffset;

/// The positional offset a view derives from viewer-offset samples.
///
/// Each axis has an optional target range. An axis with a range projects the
/// corresponding normalized tilt component into it; an axis without one is
/// pinned at `0.0`, so a view can parallax horizontally while staying
/// vertically fixed. Target ranges are fixed for the life of the value.
///
/// The offset starts at [`Vec2::ZERO`] and only moves when a sample is
/// applied. Note that for a target range not centered on zero, the first
/// neutral sample already moves the offset to the range's midpoint.
///
/// # Example
///
/// ```
/// use kurbo::Vec2;
/// use understory_parallax::{MotionOffset, ViewerOffset};
///
/// let mut state = MotionOffset::new(Some(-20.0..=20.0), Some(-20.0..=20.0));
/// assert_eq!(state.offset(), Vec2::ZERO);
///
/// assert!(state.apply(ViewerOffset::new(1.0, -1.0)));
/// assert_eq!(state.offset(), Vec2::new(20.0, -20.0));
///
/// // Axes without a target range stay pinned at zero.
/// let mut pinned = MotionOffset::new(None, Some(0.0..=10.0));
/// assert!(pinned.apply(ViewerOffset::new(1.0, 1.0)));
/// assert_eq!(pinned.offset(), Vec2::new(0.0, 10.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionOffset {
    horizontal: Option<RangeInclusive<f64>>,
    vertical: Option<RangeInclusive<f64>>,
    offset: Vec2,
}

impl MotionOffset {
    /// Creates offset state with the given per-axis target ranges.
    ///
    /// Passing `None` for an axis pins that axis at `0.0`.
    #[must_use]
    pub const fn new(
        horizontal: Option<RangeInclusive<f64>>,
        vertical: Option<RangeInclusive<f64>>,
    ) -> Self {
        Self {
            horizontal,
            vertical,
            offset: Vec2::ZERO,
        }
    }

    /// Projects `sample` into the target ranges and stores the result.
    ///
    /// Returns `true` if the stored offset changed. Out-of-range samples
    /// extrapolate past the target endpoints; see [`crate::project()`].
    pub fn apply(&mut self, sample: ViewerOffset) -> bool {
        let next = Vec2::new(
            self.horizontal
                .clone()
                .map_or(0.0, |range| project_normalized(sample.horizontal, range)),
            self.vertical
                .clone()
                .map_or(0.0, |range| project_normalized(sample.vertical, range)),
        );
        if next == self.offset {
            return false;
        }
        self.offset = next;
        true
    }

    /// Forces the offset back to [`Vec2::ZERO`], returning `true` if it
    /// changed.
    ///
    /// This is an unconditional reset, not a projection of the neutral
    /// sample: for target ranges not centered on zero the two differ, and
    /// motion reduction requires a view with no residual offset at all.
    pub fn reset(&mut self) -> bool {
        if self.offset == Vec2::ZERO {
            return false;
        }
        self.offset = Vec2::ZERO;
        true
    }

    /// The current positional offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// The horizontal target range, if the axis is enabled.
    #[must_use]
    pub fn horizontal_range(&self) -> Option<RangeInclusive<f64>> {
        self.horizontal.clone()
    }

    /// The vertical target range, if the axis is enabled.
    #[must_use]
    pub fn vertical_range(&self) -> Option<RangeInclusive<f64>> {
        self.vertical.clone()
    }
}
