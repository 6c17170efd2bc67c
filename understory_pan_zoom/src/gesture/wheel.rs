// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse wheel zoom.
//!
//! Wheels have no end event. Every wheel input re-arms a [`Timeout`]; once it
//! fires the gesture is over.

use core::time::Duration;

use kurbo::Point;

use super::{
    GestureClass, GestureContext, GestureDelta, GestureKind, GestureSignal, GestureSource,
    RawInput, Signals,
};
use crate::focal::focal_fraction;
use crate::timer::Timeout;

/// Wheel zoom with timeout-based gesture end.
#[derive(Clone, Copy, Debug)]
pub struct WheelZoom {
    zoom_speed: f64,
    timeout: Duration,
    end: Timeout,
    focal: Option<Point>,
}

impl WheelZoom {
    /// Creates a wheel source converting pixels to scale with `zoom_speed` and
    /// ending gestures after `timeout` without wheel input.
    #[must_use]
    pub fn new(zoom_speed: f64, timeout: Duration) -> Self {
        Self {
            zoom_speed,
            timeout,
            end: Timeout::default(),
            focal: None,
        }
    }
}

impl GestureSource for WheelZoom {
    fn class(&self) -> GestureClass {
        GestureClass::Zoom
    }

    fn handle(&mut self, input: &RawInput, cx: &GestureContext, out: &mut Signals) {
        let RawInput::Wheel { position, delta } = *input else {
            return;
        };
        let pixels = delta.to_pixels(cx.bounds.height());
        if pixels == 0.0 {
            return;
        }
        let focal = match self.focal {
            Some(focal) => focal,
            None => {
                if !cx.hits(position) {
                    return;
                }
                let focal = focal_fraction(position, cx.frame);
                self.focal = Some(focal);
                out.push(GestureSignal::Start(GestureKind::Wheel));
                focal
            }
        };
        out.push(GestureSignal::Delta(
            GestureKind::Wheel,
            GestureDelta::zoom(-pixels * self.zoom_speed, focal),
        ));
        self.end.arm(cx.now, self.timeout);
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.end.deadline()
    }

    fn poll(&mut self, now: Duration, out: &mut Signals) {
        if self.end.fire(now) {
            self.focal = None;
            out.push(GestureSignal::End(GestureKind::Wheel));
        }
    }

    fn cancel(&mut self, out: &mut Signals) {
        self.end.cancel();
        if self.focal.take().is_some() {
            out.push(GestureSignal::End(GestureKind::Wheel));
        }
    }

    fn is_active(&self) -> bool {
        self.focal.is_some()
    }
}
