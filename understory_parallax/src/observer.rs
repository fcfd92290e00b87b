// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle state for one viewer-offset observation.
//!
//! An [`OffsetObserver`] tracks whether a mounted view should currently be
//! listening to the platform's motion subsystem, and buffers incoming
//! samples for deferred delivery. It owns no platform handles itself: state
//! changes return a [`Transition`] naming the host actions to perform, in
//! the same command-return style the rest of the workspace uses for
//! embedder-executed effects.
//!
//! Deferral is not optional. Platform motion callbacks fire while the host
//! is walking its own effect registry, and consumer reactions routinely
//! mutate that registry (remounting views, attaching or removing effects).
//! Every sample therefore lands in a single-slot [`Mailbox`] first and is
//! drained on a later tick, with only the newest sample surviving.

use crate::mailbox::Mailbox;
use crate::viewer::ViewerOffset;

/// A host-side action requested by an observer state change.
///
/// The embedder executes these against the platform motion subsystem. The
/// observer never talks to the platform directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EffectCommand {
    /// Install the motion-effect subscription for this view.
    Attach,
    /// Remove the motion-effect subscription for this view.
    Detach,
}

/// The set of host actions requested by one observer state change.
///
/// `effect` is executed against the platform; `schedule_drain` asks the
/// embedder to arrange exactly one future call to
/// [`OffsetObserver::take_pending`] on a safe tick. A transition with
/// neither is a no-op.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// Platform subscription change to perform, if any.
    pub effect: Option<EffectCommand>,
    /// Whether to schedule a drain of the pending sample.
    pub schedule_drain: bool,
}

impl Transition {
    /// A transition requesting no host actions.
    pub const NONE: Self = Self {
        effect: None,
        schedule_drain: false,
    };
}

/// Where an observer currently is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ObserverPhase {
    /// Not mounted; no subscription, samples are ignored.
    #[default]
    Detached,
    /// Mounted with a live subscription; samples are buffered for delivery.
    Active,
    /// Mounted, but motion reduction is on; no subscription, samples are
    /// ignored.
    Suppressed,
}

/// Deferred-delivery observation of normalized viewer offsets.
///
/// One observer corresponds to one mounted view. The host drives it with
/// lifecycle calls ([`mount`](Self::mount),
/// [`set_reduce_motion`](Self::set_reduce_motion),
/// [`unmount`](Self::unmount)) and forwards platform samples through
/// [`record_sample`](Self::record_sample); each lifecycle call answers with
/// the [`Transition`] to execute. Samples are never delivered from inside
/// [`record_sample`](Self::record_sample): they wait in a mailbox until the
/// embedder drains them via [`take_pending`](Self::take_pending) on a safe
/// tick.
///
/// When motion reduction switches on mid-flight, the observer queues a
/// single [`ViewerOffset::ZERO`] so consumers see an explicit reset instead
/// of holding their last tilt value forever.
///
/// # Example
///
/// ```
/// use understory_parallax::{EffectCommand, ObserverPhase, OffsetObserver, ViewerOffset};
///
/// let mut observer = OffsetObserver::new();
/// let transition = observer.mount(false);
/// assert_eq!(transition.effect, Some(EffectCommand::Attach));
/// assert_eq!(observer.phase(), ObserverPhase::Active);
///
/// // Platform callback: record now, deliver later.
/// assert!(observer.record_sample(ViewerOffset::new(0.3, -0.1)));
/// assert!(!observer.record_sample(ViewerOffset::new(0.5, 0.0)));
///
/// // Safe tick: the newest sample wins.
/// assert_eq!(observer.take_pending(), Some(ViewerOffset::new(0.5, 0.0)));
/// assert_eq!(observer.take_pending(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OffsetObserver {
    phase: ObserverPhase,
    mailbox: Mailbox<ViewerOffset>,
}

impl OffsetObserver {
    /// Creates a detached observer with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: ObserverPhase::Detached,
            mailbox: Mailbox::new(),
        }
    }

    /// Creates an observer from archived state.
    ///
    /// There is no archived representation of an observation; the
    /// subscription and pending sample are meaningless outside the process
    /// that created them. This constructor exists to give the legacy decode
    /// path a definite, loud failure rather than a silently broken observer.
    ///
    /// # Panics
    ///
    /// Always panics.
    pub fn from_archive(_archive: &[u8]) -> Self {
        panic!(
            "unsupported initialization path: an observer cannot be decoded from archived state"
        );
    }

    /// Mounts the observer, choosing its initial phase from `reduce_motion`.
    ///
    /// With motion reduction off this requests an [`EffectCommand::Attach`];
    /// with it on, the observer parks in [`ObserverPhase::Suppressed`] and
    /// requests nothing. No reset sample is queued on a suppressed mount,
    /// since no consumer has seen a tilt value yet.
    ///
    /// Mounting an already mounted observer is a bug in the host; it is
    /// debug-asserted and otherwise ignored.
    pub fn mount(&mut self, reduce_motion: bool) -> Transition {
        debug_assert!(
            self.phase == ObserverPhase::Detached,
            "mount called on an already mounted observer"
        );
        if self.phase != ObserverPhase::Detached {
            return Transition::NONE;
        }
        if reduce_motion {
            self.phase = ObserverPhase::Suppressed;
            Transition::NONE
        } else {
            self.phase = ObserverPhase::Active;
            Transition {
                effect: Some(EffectCommand::Attach),
                schedule_drain: false,
            }
        }
    }

    /// Applies a change of the accessibility reduce-motion flag.
    ///
    /// Turning reduction on while active detaches the subscription and
    /// queues [`ViewerOffset::ZERO`] for delivery, overwriting any pending
    /// sample so the reset cannot be shadowed by a stale tilt value.
    /// Turning it off while suppressed re-requests an attach. Repeating the
    /// current flag, or updating a detached observer, requests nothing.
    pub fn set_reduce_motion(&mut self, reduce_motion: bool) -> Transition {
        match (self.phase, reduce_motion) {
            (ObserverPhase::Active, true) => {
                self.phase = ObserverPhase::Suppressed;
                let schedule_drain = self.mailbox.post(ViewerOffset::ZERO);
                Transition {
                    effect: Some(EffectCommand::Detach),
                    schedule_drain,
                }
            }
            (ObserverPhase::Suppressed, false) => {
                self.phase = ObserverPhase::Active;
                Transition {
                    effect: Some(EffectCommand::Attach),
                    schedule_drain: false,
                }
            }
            _ => Transition::NONE,
        }
    }

    /// Records a platform sample for deferred delivery.
    ///
    /// Returns `true` when the embedder should schedule a drain, which
    /// happens only when the mailbox was empty. Samples arriving while not
    /// [`ObserverPhase::Active`] are dropped; platforms can deliver one last
    /// callback after a detach, and that stale sample must not overwrite a
    /// queued reset.
    pub fn record_sample(&mut self, sample: ViewerOffset) -> bool {
        if self.phase != ObserverPhase::Active {
            return false;
        }
        self.mailbox.post(sample)
    }

    /// Removes and returns the pending sample, if any.
    ///
    /// Called by the embedder on a safe tick, outside any platform effect
    /// enumeration. Draining is phase-independent so a tick scheduled just
    /// before a lifecycle change still completes cleanly.
    pub fn take_pending(&mut self) -> Option<ViewerOffset> {
        self.mailbox.take()
    }

    /// Reports that the requested attach never took hold.
    ///
    /// The observer returns to [`ObserverPhase::Detached`] and discards
    /// anything pending, so later flag changes do not issue detaches for a
    /// subscription that does not exist.
    pub fn attach_failed(&mut self) {
        debug_assert!(
            self.phase == ObserverPhase::Active,
            "attach_failed on an observer with no attach in flight"
        );
        if self.phase == ObserverPhase::Active {
            self.phase = ObserverPhase::Detached;
            self.mailbox.clear();
        }
    }

    /// Unmounts the observer, discarding any pending sample.
    ///
    /// Requests an [`EffectCommand::Detach`] only if a subscription is
    /// live. Unmounting an already detached observer is a quiet no-op;
    /// teardown paths are allowed to be defensive.
    pub fn unmount(&mut self) -> Transition {
        let was_active = self.phase == ObserverPhase::Active;
        self.phase = ObserverPhase::Detached;
        self.mailbox.clear();
        Transition {
            effect: was_active.then_some(EffectCommand::Detach),
            schedule_drain: false,
        }
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> ObserverPhase {
        self.phase
    }

    /// Returns `true` if a sample is queued and waiting for a drain.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.mailbox.is_armed()
    }

    /// Returns a snapshot of the observer state for debugging.
    #[must_use]
    pub fn debug_info(&self) -> OffsetObserverDebugInfo {
        OffsetObserverDebugInfo {
            phase: self.phase,
            pending: self.mailbox.peek().copied(),
        }
    }
}

/// Debugging information about an [`OffsetObserver`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetObserverDebugInfo {
    /// The current lifecycle phase.
    pub phase: ObserverPhase,
    /// The sample waiting to be drained, if any.
    pub pending: Option<ViewerOffset>,
}
