// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_parallax --heading-base-level=0

//! Understory Parallax: viewer-offset parallax primitives for UI.
//!
//! This crate provides small, headless models for motion parallax: views
//! that shift by a bounded 2D offset as the viewer tilts the device. It
//! focuses on:
//! - Linear projection of normalized tilt samples into caller-chosen target
//!   ranges, without clamping.
//! - Lifecycle state for a platform motion-effect subscription, including
//!   accessibility motion reduction.
//! - Deferred, latest-value-wins delivery of samples to a safe tick.
//! - Per-view offset state with per-axis enablement.
//!
//! It does **not** own any platform integration. Callers are expected to:
//! - Execute [`EffectCommand`]s against the platform's motion facility when
//!   a [`Transition`] or [`Update`] requests them.
//! - Forward platform samples into [`OffsetObserver::record_sample`] or
//!   [`MotionOffsetBinding::record_sample`], and arrange one future tick
//!   whenever a call reports that a drain is needed.
//! - Re-state the accessibility reduce-motion flag on every environment
//!   pass; the crate turns repetition into edges internally.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use understory_parallax::{EffectCommand, MotionOffsetBinding, ViewerOffset};
//!
//! // One binding per mounted view; motion reduction is off at mount time.
//! let mut binding = MotionOffsetBinding::new(Some(-20.0..=20.0), Some(-20.0..=20.0));
//! let mounted = binding.mount(false);
//! assert_eq!(mounted.effect, Some(EffectCommand::Attach));
//!
//! // Platform callback: record the sample; nothing is committed yet.
//! assert!(binding.record_sample(ViewerOffset::new(1.0, -0.5)));
//! assert_eq!(binding.offset(), Vec2::ZERO);
//!
//! // On the next safe tick, the newest sample is projected and committed.
//! assert!(binding.on_tick());
//! assert_eq!(binding.offset(), Vec2::new(20.0, -10.0));
//! ```
//!
//! ## Raw observation
//!
//! Consumers that want normalized samples rather than a positional offset
//! drive an [`OffsetObserver`] directly:
//!
//! ```rust
//! use understory_parallax::{EffectCommand, OffsetObserver, ViewerOffset};
//!
//! let mut observer = OffsetObserver::new();
//! let _ = observer.mount(false);
//!
//! // Bursty platform callbacks coalesce into one pending sample.
//! assert!(observer.record_sample(ViewerOffset::new(0.2, 0.0)));
//! assert!(!observer.record_sample(ViewerOffset::new(0.6, 0.0)));
//!
//! // Motion reduction arrives: detach, and a reset replaces the sample.
//! let transition = observer.set_reduce_motion(true);
//! assert_eq!(transition.effect, Some(EffectCommand::Detach));
//! assert_eq!(observer.take_pending(), Some(ViewerOffset::ZERO));
//! ```
//!
//! ## Design notes
//!
//! - State changes return commands instead of invoking callbacks. The
//!   embedder executes them, which keeps the crate free of host types and
//!   every transition unit-testable.
//! - Samples are never committed inside the platform callback. Hosts
//!   iterate their effect registries while delivering motion updates, and
//!   consumer reactions can mutate those registries, so delivery always
//!   goes through a single-slot [`Mailbox`] drained on a later tick.
//! - Projection does not clamp. Out-of-range samples extrapolate past the
//!   target range at the same slope, keeping anomalous platform readings
//!   visible instead of silently normalized.
//! - Motion reduction zeroes the stored offset outright rather than
//!   projecting the neutral sample, so target ranges not centered on zero
//!   still come to rest at exactly zero.
//!
//! ## Features
//!
//! - `std` (default): Build against the standard library.
//! - `libm`: Use `libm` for floating point in `no_std` builds.
//!
//! This crate is `no_std`.

#![no_std]

mod binding;
mod changed;
mod mailbox;
mod modifier;
mod observer;
mod project;
mod viewer;

pub use binding::{MotionOffsetBinding, MotionOffsetBindingDebugInfo, Update};
pub use changed::Changed;
pub use mailbox::Mailbox;
pub use modifier::MotionOffset;
pub use observer::{
    EffectCommand, ObserverPhase, OffsetObserver, OffsetObserverDebugInfo, Transition,
};
pub use project::{NORMALIZED_RANGE, project, project_normalized};
pub use viewer::ViewerOffset;
