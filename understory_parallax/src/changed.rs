// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change detection for values that are re-reported every update cycle.

/// Reports a value only when it differs from the previously seen one.
///
/// Declarative hosts tend to re-state inputs on every update pass rather
/// than signal edges, so anything that must *react* to a flag flipping
/// needs a small latch to turn repeated statements into transitions. An
/// unprimed detector reports the first value it sees; [`Changed::prime`]
/// seeds the detector so that only later differences report.
///
/// # Example
///
/// ```
/// use understory_parallax::Changed;
///
/// let mut reduce_motion = Changed::primed(false);
/// assert_eq!(reduce_motion.update(false), None);
/// assert_eq!(reduce_motion.update(true), Some(true));
/// assert_eq!(reduce_motion.update(true), None);
/// assert_eq!(reduce_motion.update(false), Some(false));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Changed<T> {
    last: Option<T>,
}

impl<T: PartialEq + Copy> Changed<T> {
    /// Creates an unprimed detector; the first [`Changed::update`] reports.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Creates a detector seeded with `initial`.
    #[must_use]
    pub const fn primed(initial: T) -> Self {
        Self {
            last: Some(initial),
        }
    }

    /// Seeds the detector with `value` without reporting a change.
    pub fn prime(&mut self, value: T) {
        self.last = Some(value);
    }

    /// Records `value`, returning `Some(value)` if it differs from the last
    /// recorded one (or if the detector was unprimed), `None` otherwise.
    pub fn update(&mut self, value: T) -> Option<T> {
        let changed = self.last != Some(value);
        self.last = Some(value);
        changed.then_some(value)
    }

    /// Returns the most recently recorded value, if any.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.last
    }
}
