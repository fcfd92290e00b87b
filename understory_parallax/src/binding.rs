// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composed observer and offset state for one mounted view.
//!
//! [`MotionOffsetBinding`] is the ready-made wiring for the common case: a
//! declarative host that re-states its environment every update pass and
//! wants a positional offset out the other end. It owns an
//! [`OffsetObserver`] and a [`MotionOffset`], turns repeated environment
//! statements into edge-triggered observer transitions, and keeps the two
//! halves of the motion-reduction contract together: detach the
//! subscription *and* zero the stored offset.
//!
//! Hosts that only want raw normalized samples (the callback surface rather
//! than the offset surface) drive an [`OffsetObserver`] directly instead.

use core::ops::RangeInclusive;

use kurbo::Vec2;

use crate::changed::Changed;
use crate::modifier::MotionOffset;
use crate::observer::{EffectCommand, ObserverPhase, OffsetObserver, Transition};
use crate::viewer::ViewerOffset;

/// The set of host actions requested by one binding reconcile.
///
/// Extends [`Transition`] with a `redraw` bit for when the stored offset
/// changed synchronously and the view needs repositioning now.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Update {
    /// Platform subscription change to perform, if any.
    pub effect: Option<EffectCommand>,
    /// Whether to schedule a drain via [`MotionOffsetBinding::on_tick`].
    pub schedule_drain: bool,
    /// Whether the stored offset changed and the view should be repositioned.
    pub redraw: bool,
}

impl Update {
    /// An update requesting no host actions.
    pub const NONE: Self = Self {
        effect: None,
        schedule_drain: false,
        redraw: false,
    };
}

impl From<Transition> for Update {
    fn from(transition: Transition) -> Self {
        Self {
            effect: transition.effect,
            schedule_drain: transition.schedule_drain,
            redraw: false,
        }
    }
}

/// Offset state for one view, driven by host lifecycle and platform samples.
///
/// The host calls [`mount`](Self::mount) once, [`update`](Self::update) on
/// every later environment pass, [`record_sample`](Self::record_sample) from
/// the platform callback, [`on_tick`](Self::on_tick) when a requested drain
/// comes due, and [`unmount`](Self::unmount) at teardown. Each lifecycle
/// call returns the [`Update`] to execute. [`offset`](Self::offset) is the
/// value to apply to the view's position.
///
/// When the reduce-motion flag flips on, the offset is zeroed in the same
/// call rather than waiting for the queued reset sample. The view must stop
/// moving with the flag, not one tick later, and the later drain then finds
/// nothing left to change.
///
/// # Example
///
/// ```
/// use kurbo::Vec2;
/// use understory_parallax::{EffectCommand, MotionOffsetBinding, ViewerOffset};
///
/// let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), None);
/// let mounted = binding.mount(false);
/// assert_eq!(mounted.effect, Some(EffectCommand::Attach));
///
/// // Platform callback: nothing moves yet.
/// assert!(binding.record_sample(ViewerOffset::new(1.0, 1.0)));
/// assert_eq!(binding.offset(), Vec2::ZERO);
///
/// // The scheduled drain projects and commits the sample.
/// assert!(binding.on_tick());
/// assert_eq!(binding.offset(), Vec2::new(20.0, 0.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionOffsetBinding {
    observer: OffsetObserver,
    state: MotionOffset,
    reduce_motion: Changed<bool>,
}

impl MotionOffsetBinding {
    /// Creates an unmounted binding with the given per-axis target ranges.
    ///
    /// Passing `None` for an axis pins that axis at `0.0`.
    #[must_use]
    pub const fn new(
        horizontal: Option<RangeInclusive<f64>>,
        vertical: Option<RangeInclusive<f64>>,
    ) -> Self {
        Self {
            observer: OffsetObserver::new(),
            state: MotionOffset::new(horizontal, vertical),
            reduce_motion: Changed::new(),
        }
    }

    /// Mounts the binding with the current reduce-motion flag.
    pub fn mount(&mut self, reduce_motion: bool) -> Update {
        self.reduce_motion.prime(reduce_motion);
        self.observer.mount(reduce_motion).into()
    }

    /// Reconciles the binding against a re-stated reduce-motion flag.
    ///
    /// Idempotent: repeating the current flag requests nothing. When the
    /// flag flips to `true` the stored offset is zeroed immediately and
    /// `redraw` reports whether that moved the view.
    pub fn update(&mut self, reduce_motion: bool) -> Update {
        match self.reduce_motion.update(reduce_motion) {
            Some(true) => {
                let transition = self.observer.set_reduce_motion(true);
                Update {
                    effect: transition.effect,
                    schedule_drain: transition.schedule_drain,
                    redraw: self.state.reset(),
                }
            }
            Some(false) => self.observer.set_reduce_motion(false).into(),
            None => Update::NONE,
        }
    }

    /// Records a platform sample; see [`OffsetObserver::record_sample`].
    pub fn record_sample(&mut self, sample: ViewerOffset) -> bool {
        self.observer.record_sample(sample)
    }

    /// Drains the pending sample into the stored offset.
    ///
    /// Returns `true` if the offset changed and the view should be
    /// repositioned. A reset drained while suppressed zeroes the offset
    /// outright instead of projecting, since target ranges not centered on
    /// zero would otherwise pull a "reset" view off its resting position.
    pub fn on_tick(&mut self) -> bool {
        match self.observer.take_pending() {
            Some(_) if self.observer.phase() == ObserverPhase::Suppressed => self.state.reset(),
            Some(sample) => self.state.apply(sample),
            None => false,
        }
    }

    /// Reports that the requested attach never took hold; see
    /// [`OffsetObserver::attach_failed`].
    pub fn attach_failed(&mut self) {
        self.observer.attach_failed();
    }

    /// Unmounts the binding, discarding anything pending.
    pub fn unmount(&mut self) -> Update {
        self.observer.unmount().into()
    }

    /// The current positional offset to apply to the view.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.state.offset()
    }

    /// Returns a snapshot of the binding state for debugging.
    #[must_use]
    pub fn debug_info(&self) -> MotionOffsetBindingDebugInfo {
        let observer = self.observer.debug_info();
        MotionOffsetBindingDebugInfo {
            phase: observer.phase,
            pending: observer.pending,
            offset: self.state.offset(),
            reduce_motion: self.reduce_motion.current(),
        }
    }
}

/// Debugging information about a [`MotionOffsetBinding`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionOffsetBindingDebugInfo {
    /// The observer's lifecycle phase.
    pub phase: ObserverPhase,
    /// The sample waiting to be drained, if any.
    pub pending: Option<ViewerOffset>,
    /// The stored positional offset.
    pub offset: Vec2,
    /// The last reduce-motion flag seen, if any.
    pub reduce_motion: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_attaches_and_offset_starts_at_zero() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), Some(-20.0..=20.0));
        let update = binding.mount(false);
        assert_eq!(update.effect, Some(EffectCommand::Attach));
        assert!(!update.schedule_drain);
        assert!(!update.redraw);
        assert_eq!(binding.offset(), Vec2::ZERO);
    }

    #[test]
    fn samples_commit_on_tick_not_on_record() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), Some(-20.0..=20.0));
        let _ = binding.mount(false);

        assert!(binding.record_sample(ViewerOffset::new(0.5, -0.5)));
        assert_eq!(binding.offset(), Vec2::ZERO);

        assert!(binding.on_tick());
        assert_eq!(binding.offset(), Vec2::new(10.0, -10.0));
        assert!(!binding.on_tick());
    }

    #[test]
    fn update_with_unchanged_flag_requests_nothing() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), None);
        let _ = binding.mount(false);
        assert_eq!(binding.update(false), Update::NONE);
        assert_eq!(binding.update(false), Update::NONE);
    }

    #[test]
    fn reduce_motion_zeroes_the_offset_in_the_same_call() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), None);
        let _ = binding.mount(false);
        let _ = binding.record_sample(ViewerOffset::new(1.0, 0.0));
        assert!(binding.on_tick());
        assert_eq!(binding.offset(), Vec2::new(20.0, 0.0));

        let update = binding.update(true);
        assert_eq!(update.effect, Some(EffectCommand::Detach));
        assert!(update.schedule_drain);
        assert!(update.redraw);
        assert_eq!(binding.offset(), Vec2::ZERO);

        // The queued reset drains to a no-op.
        assert!(!binding.on_tick());
        assert_eq!(binding.offset(), Vec2::ZERO);
    }

    #[test]
    fn pending_sample_cannot_outlive_suppression() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), None);
        let _ = binding.mount(false);
        assert!(binding.record_sample(ViewerOffset::new(0.8, 0.0)));

        let update = binding.update(true);
        // A drain was already scheduled for the replaced sample.
        assert!(!update.schedule_drain);
        assert!(!binding.on_tick());
        assert_eq!(binding.offset(), Vec2::ZERO);
    }

    #[test]
    fn reset_is_true_zero_for_uncentered_ranges() {
        let mut binding = MotionOffsetBinding::new(Some(10.0..=50.0), None);
        let _ = binding.mount(false);
        let _ = binding.record_sample(ViewerOffset::ZERO);
        assert!(binding.on_tick());
        assert_eq!(binding.offset(), Vec2::new(30.0, 0.0));

        let update = binding.update(true);
        assert!(update.redraw);
        assert_eq!(binding.offset(), Vec2::ZERO);
        assert!(!binding.on_tick());
        assert_eq!(binding.offset(), Vec2::ZERO);
    }

    #[test]
    fn samples_are_ignored_while_suppressed() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), None);
        let _ = binding.mount(true);
        assert!(!binding.record_sample(ViewerOffset::new(1.0, 0.0)));
        assert!(!binding.on_tick());
        assert_eq!(binding.offset(), Vec2::ZERO);
    }

    #[test]
    fn reactivation_resumes_the_flow() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), None);
        let _ = binding.mount(false);
        let _ = binding.update(true);
        let _ = binding.on_tick();

        let update = binding.update(false);
        assert_eq!(update.effect, Some(EffectCommand::Attach));
        assert!(!update.redraw);

        assert!(binding.record_sample(ViewerOffset::new(-1.0, 0.0)));
        assert!(binding.on_tick());
        assert_eq!(binding.offset(), Vec2::new(-20.0, 0.0));
    }

    #[test]
    fn mounting_suppressed_requests_nothing() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), None);
        let update = binding.mount(true);
        assert_eq!(update, Update::NONE);
        assert_eq!(binding.update(true), Update::NONE);
    }

    #[test]
    fn attach_failure_stops_the_flow() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), None);
        let _ = binding.mount(false);
        binding.attach_failed();
        assert!(!binding.record_sample(ViewerOffset::new(1.0, 0.0)));
        assert!(!binding.on_tick());
        assert_eq!(binding.offset(), Vec2::ZERO);
        // No detach is issued for a subscription that never attached.
        assert_eq!(binding.update(true).effect, None);
    }

    #[test]
    fn unmount_detaches_and_clears_pending() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), None);
        let _ = binding.mount(false);
        let _ = binding.record_sample(ViewerOffset::new(0.5, 0.0));

        let update = binding.unmount();
        assert_eq!(update.effect, Some(EffectCommand::Detach));
        assert!(!binding.on_tick());
        assert_eq!(binding.offset(), Vec2::ZERO);
    }

    #[test]
    fn update_before_mount_is_tolerated() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), None);
        assert_eq!(binding.update(true).effect, None);
        let update = binding.mount(false);
        assert_eq!(update.effect, Some(EffectCommand::Attach));
    }

    #[test]
    fn debug_info_reflects_the_composed_state() {
        let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), None);
        let _ = binding.mount(false);
        let _ = binding.record_sample(ViewerOffset::new(0.5, 0.0));

        let info = binding.debug_info();
        assert_eq!(info.phase, ObserverPhase::Active);
        assert_eq!(info.pending, Some(ViewerOffset::new(0.5, 0.0)));
        assert_eq!(info.offset, Vec2::ZERO);
        assert_eq!(info.reduce_motion, Some(false));
    }
}
