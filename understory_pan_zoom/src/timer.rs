// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A cancellable, resettable deadline.
//!
//! Input sources without a native end event (the mouse wheel) and debounced
//! work (bounding-element resizes) are modeled with a [`Timeout`]: each new
//! event re-arms it, and the host's [`poll`](crate::PanZoom::poll) fires it once
//! the deadline passes.

use core::time::Duration;

/// Deadline that can be armed, re-armed, cancelled and fired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timeout {
    deadline: Option<Duration>,
}

impl Timeout {
    /// Arms (or re-arms) the timeout to fire `delay` after `now`.
    pub fn arm(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Disarms the timeout.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The instant at which the timeout fires, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Fires the timeout if its deadline has passed.
    ///
    /// Returns `true` exactly once per arming.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Earliest of two optional deadlines.
pub(crate) fn earliest(a: Option<Duration>, b: Option<Duration>) -> Option<Duration> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
