// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap detection.

use core::time::Duration;

use super::{
    GestureClass, GestureContext, GestureSignal, GestureSource, RawInput, Signals,
};
use crate::focal::focal_fraction;

/// Recognizes two taps on the element within a time threshold.
#[derive(Clone, Copy, Debug)]
pub struct DoubleTap {
    threshold: Duration,
    last_tap: Option<Duration>,
}

impl DoubleTap {
    /// Creates a recognizer accepting taps up to `threshold` apart.
    #[must_use]
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            last_tap: None,
        }
    }
}

impl GestureSource for DoubleTap {
    fn class(&self) -> GestureClass {
        GestureClass::Zoom
    }

    fn handle(&mut self, input: &RawInput, cx: &GestureContext, out: &mut Signals) {
        let RawInput::Tap { position } = *input else {
            return;
        };
        if !cx.hits(position) {
            self.last_tap = None;
            return;
        }
        match self.last_tap.take() {
            Some(last) if cx.now.saturating_sub(last) <= self.threshold => {
                out.push(GestureSignal::DoubleTap {
                    focal: focal_fraction(position, cx.frame),
                });
            }
            _ => self.last_tap = Some(cx.now),
        }
    }

    fn cancel(&mut self, _out: &mut Signals) {
        self.last_tap = None;
    }

    // Taps are discrete; there is never a gesture in progress.
    fn is_active(&self) -> bool {
        false
    }
}
