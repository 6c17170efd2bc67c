// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame scheduling and the interaction-cycle state machine.
//!
//! An interaction cycle is either a gesture or a programmatic move. The
//! scheduler tracks the active cycle and at most one pending frame. Targets
//! requested before the frame runs overwrite each other, so a frame always
//! writes the latest target exactly once.
//!
//! ```text
//! Idle --begin--> Active --frame/end/transition end--> Idle
//! ```
//!
//! Beginning a cycle while another is active interrupts it. The interrupted
//! cycle is handed back so its `end` can still be reported.

use crate::GestureKind;

/// What kind of interaction cycle is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cycle {
    /// Direct manipulation, ended by its gesture source.
    Gesture(GestureKind),
    /// A programmatic move without animation; ends after its frame.
    Immediate,
    /// A programmatic move with a transition.
    Animated {
        /// Run the clamp pass once the transition ends.
        clamp: bool,
        /// Whether the end of the transition can be observed. Caller-owned
        /// transitions cannot be.
        observed: bool,
    },
}

/// What to do after writing a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FrameOutcome {
    /// The cycle goes on.
    Continue(Cycle),
    /// The cycle is over; report its end.
    Finish(Cycle),
    /// The cycle is over but its end cannot be observed; report nothing.
    Release(Cycle),
}

/// Result of a gesture end signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GestureEnd {
    /// The gesture is over now.
    Now,
    /// A frame is pending; the gesture ends once it has been written.
    AfterFrame,
    /// No such gesture was running.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Active {
        cycle: Cycle,
        /// At least one frame of this cycle has been written.
        written: bool,
        /// The cycle ends with its next frame.
        ending: bool,
    },
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Scheduler {
    phase: Phase,
    frame_requested: bool,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            frame_requested: false,
        }
    }
}

impl Scheduler {
    pub(crate) fn cycle(&self) -> Option<Cycle> {
        match self.phase {
            Phase::Idle => None,
            Phase::Active { cycle, .. } => Some(cycle),
        }
    }

    pub(crate) fn is_moving(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// The gesture still taking input.
    ///
    /// A gesture that has ended but waits for its last frame is not
    /// reported, so a new gesture of the same kind begins its own cycle.
    pub(crate) fn gesture(&self) -> Option<GestureKind> {
        match self.phase {
            Phase::Active {
                cycle: Cycle::Gesture(kind),
                ending: false,
                ..
            } => Some(kind),
            _ => None,
        }
    }

    pub(crate) fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Starts a cycle, returning the one it interrupts.
    ///
    /// A pending frame is kept: the target it will write belongs to the new
    /// cycle now.
    pub(crate) fn begin(&mut self, cycle: Cycle) -> Option<Cycle> {
        let interrupted = self.cycle();
        self.phase = Phase::Active {
            cycle,
            written: false,
            ending: false,
        };
        interrupted
    }

    /// Asks for a frame. Requests made before the frame runs coalesce.
    pub(crate) fn request_frame(&mut self) {
        if self.is_moving() {
            self.frame_requested = true;
        }
    }

    /// Consumes the pending frame, if any.
    pub(crate) fn take_frame(&mut self) -> Option<FrameOutcome> {
        if !core::mem::take(&mut self.frame_requested) {
            return None;
        }
        let Phase::Active {
            cycle,
            written,
            ending,
        } = &mut self.phase
        else {
            return None;
        };
        *written = true;
        let cycle = *cycle;
        let outcome = match cycle {
            Cycle::Gesture(_) if !*ending => FrameOutcome::Continue(cycle),
            Cycle::Gesture(_) | Cycle::Immediate => FrameOutcome::Finish(cycle),
            Cycle::Animated { observed: true, .. } => FrameOutcome::Continue(cycle),
            Cycle::Animated {
                observed: false, ..
            } => FrameOutcome::Release(cycle),
        };
        if !matches!(outcome, FrameOutcome::Continue(_)) {
            self.phase = Phase::Idle;
        }
        Some(outcome)
    }

    /// Ends the gesture of `kind`, possibly after the pending frame.
    pub(crate) fn end_gesture(&mut self, kind: GestureKind) -> GestureEnd {
        match &mut self.phase {
            Phase::Active {
                cycle: Cycle::Gesture(active),
                ending,
                ..
            } if *active == kind => {
                if self.frame_requested {
                    *ending = true;
                    GestureEnd::AfterFrame
                } else {
                    self.phase = Phase::Idle;
                    GestureEnd::Now
                }
            }
            _ => GestureEnd::Ignored,
        }
    }

    /// Handles the end of a transition.
    ///
    /// Returns the finished cycle, or `None` when the signal is stale: no
    /// animated cycle is running, or its transition has not been written yet.
    pub(crate) fn transition_end(&mut self) -> Option<Cycle> {
        match self.phase {
            Phase::Active {
                cycle: cycle @ Cycle::Animated { observed: true, .. },
                written: true,
                ..
            } if !self.frame_requested => {
                self.phase = Phase::Idle;
                Some(cycle)
            }
            _ => None,
        }
    }

    /// Drops the active cycle and any pending frame.
    pub(crate) fn abort(&mut self) -> Option<Cycle> {
        let cycle = self.cycle();
        *self = Self::default();
        cycle
    }
}
