// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch zoom.

use kurbo::Point;

use super::{
    GestureClass, GestureContext, GestureDelta, GestureKind, GestureSignal, GestureSource,
    PINCH_MULTIPLIER, RawInput, Signals,
};
use crate::focal::focal_fraction;

#[derive(Clone, Copy, Debug)]
struct Pinch {
    distance: f64,
    focal: Point,
}

/// Pinch zoom around the midpoint of the two touches at pinch start.
#[derive(Clone, Copy, Debug)]
pub struct PinchZoom {
    zoom_speed: f64,
    active: Option<Pinch>,
}

impl PinchZoom {
    /// Creates a pinch source converting distance changes with `zoom_speed`.
    #[must_use]
    pub fn new(zoom_speed: f64) -> Self {
        Self {
            zoom_speed,
            active: None,
        }
    }
}

impl GestureSource for PinchZoom {
    fn class(&self) -> GestureClass {
        GestureClass::Zoom
    }

    fn handle(&mut self, input: &RawInput, cx: &GestureContext, out: &mut Signals) {
        match *input {
            RawInput::PinchStart { a, b } => {
                self.cancel(out);
                let center = a.midpoint(b);
                if !cx.hits(center) {
                    return;
                }
                self.active = Some(Pinch {
                    distance: a.distance(b),
                    focal: focal_fraction(center, cx.frame),
                });
                out.push(GestureSignal::Start(GestureKind::Pinch));
            }
            RawInput::PinchMove { a, b } => {
                let Some(pinch) = &mut self.active else {
                    return;
                };
                let distance = a.distance(b);
                let dz = (distance - pinch.distance) * PINCH_MULTIPLIER * self.zoom_speed;
                pinch.distance = distance;
                if dz != 0.0 {
                    out.push(GestureSignal::Delta(
                        GestureKind::Pinch,
                        GestureDelta::zoom(dz, pinch.focal),
                    ));
                }
            }
            RawInput::PinchEnd => self.cancel(out),
            _ => {}
        }
    }

    fn cancel(&mut self, out: &mut Signals) {
        if self.active.take().is_some() {
            out.push(GestureSignal::End(GestureKind::Pinch));
        }
    }

    fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
