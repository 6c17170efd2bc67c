// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drags.
//!
//! A drag is armed by a pointer down on the element and starts with the first
//! movement, so plain clicks and taps never produce a gesture. Deltas are
//! measured from the previous pointer position.

use kurbo::{Point, Vec2};

use super::{
    GestureClass, GestureContext, GestureDelta, GestureKind, GestureSignal, GestureSource,
    RawInput, Signals,
};

/// Drag tracking for mouse and single-touch pans.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerPan {
    /// Position of the pointer down that armed the drag.
    start_pos: Option<Point>,
    /// Last recorded pointer position during the drag.
    last_pos: Option<Point>,
    /// Whether the start signal has been sent.
    started: bool,
}

impl PointerPan {
    /// Creates an idle pan source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total offset from the pointer down, if armed.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current - start)
    }

    fn arm(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.started = false;
    }

    fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    fn finish(&mut self, out: &mut Signals) {
        if self.started {
            out.push(GestureSignal::End(GestureKind::Pan));
        }
        *self = Self::default();
    }
}

impl GestureSource for PointerPan {
    fn class(&self) -> GestureClass {
        GestureClass::Pan
    }

    fn handle(&mut self, input: &RawInput, cx: &GestureContext, out: &mut Signals) {
        match *input {
            RawInput::PointerDown { position } => {
                self.finish(out);
                if cx.hits(position) {
                    self.arm(position);
                }
            }
            RawInput::PointerMove { position } => {
                let Some(delta) = self.update(position) else {
                    return;
                };
                if delta == Vec2::ZERO {
                    return;
                }
                if !self.started {
                    self.started = true;
                    out.push(GestureSignal::Start(GestureKind::Pan));
                }
                out.push(GestureSignal::Delta(
                    GestureKind::Pan,
                    GestureDelta::pan(delta.x, delta.y),
                ));
            }
            RawInput::PointerUp { .. } | RawInput::PointerCancel => self.finish(out),
            _ => {}
        }
    }

    fn cancel(&mut self, out: &mut Signals) {
        self.finish(out);
    }

    fn is_active(&self) -> bool {
        self.started
    }
}
