// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-slot, latest-value-wins deferral cell.
//!
//! Platform motion callbacks can fire at moments where acting immediately is
//! unsafe, typically while the host is iterating the very registry the
//! consumer would mutate. [`Mailbox`] splits delivery into a cheap `post`
//! phase (record the newest value, report whether a wake-up is needed) and a
//! later `take` phase run from a safe tick. Posting twice before a drain
//! keeps only the newest value; stale intermediate samples are dropped.

/// A one-value mailbox with latest-value-wins overwrite semantics.
///
/// `post` returns `true` exactly when the mailbox goes from empty to
/// occupied, so a scheduler can coalesce wake-ups: schedule one drain per
/// occupancy, not one per post.
///
/// # Example
///
/// ```
/// use understory_parallax::Mailbox;
///
/// let mut mailbox = Mailbox::new();
/// assert!(mailbox.post(1)); // schedule a drain
/// assert!(!mailbox.post(2)); // already scheduled; value replaced
/// assert_eq!(mailbox.take(), Some(2));
/// assert_eq!(mailbox.take(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mailbox<T> {
    slot: Option<T>,
}

impl<T> Mailbox<T> {
    /// Creates an empty mailbox.
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Stores `value`, replacing any value already present.
    ///
    /// Returns `true` if the mailbox was empty, which is the caller's signal
    /// to schedule a drain. Returns `false` if a value was replaced, in which
    /// case a drain is already pending.
    pub fn post(&mut self, value: T) -> bool {
        let was_empty = self.slot.is_none();
        self.slot = Some(value);
        was_empty
    }

    /// Removes and returns the stored value, leaving the mailbox empty.
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    /// Returns a reference to the stored value without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Discards any stored value without delivering it.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Returns `true` if a value is waiting to be taken.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.slot.is_some()
    }
}
