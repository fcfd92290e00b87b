// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The normalized viewer-offset sample type.

use kurbo::Vec2;

/// A normalized two-axis viewer offset derived from device tilt.
///
/// Each component is nominally in `[-1, 1]`, with `(0, 0)` the neutral
/// (no-tilt) state. Platform motion subsystems produce a fresh value per
/// motion update; the type is a plain `Copy` value with no identity.
///
/// Values outside `[-1, 1]` are representable on purpose: this crate does not
/// clamp platform readings, so anomalous samples stay visible to consumers
/// instead of being silently normalized away.
///
/// # Example
///
/// ```
/// use understory_parallax::ViewerOffset;
///
/// let neutral = ViewerOffset::ZERO;
/// assert_eq!(neutral, ViewerOffset::new(0.0, 0.0));
///
/// let tilted = ViewerOffset::new(-0.5, 1.0);
/// assert_eq!(tilted.horizontal, -0.5);
/// assert_eq!(tilted.vertical, 1.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ViewerOffset {
    /// Horizontal tilt component, nominally in `[-1, 1]`.
    pub horizontal: f64,
    /// Vertical tilt component, nominally in `[-1, 1]`.
    pub vertical: f64,
}

impl ViewerOffset {
    /// The neutral offset `(0, 0)`.
    pub const ZERO: Self = Self {
        horizontal: 0.0,
        vertical: 0.0,
    };

    /// Creates a viewer offset from horizontal and vertical components.
    #[must_use]
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns the offset as a vector with `x = horizontal`, `y = vertical`.
    #[must_use]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.horizontal, self.vertical)
    }
}

impl From<(f64, f64)> for ViewerOffset {
    fn from((horizontal, vertical): (f64, f64)) -> Self {
        Self::new(horizontal, vertical)
    }
}

impl From<ViewerOffset> for Vec2 {
    fn from(offset: ViewerOffset) -> Self {
        offset.to_vec2()
    }
}
