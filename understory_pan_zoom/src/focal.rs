// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focal-point zoom: keep a point of the element still while its scale changes.
//!
//! The focal point is expressed as a fraction of the element's size, `(0, 0)`
//! being the top-left corner and `(1, 1)` the bottom-right one. Because the
//! transform origin is the top-left corner, growing the element by
//! `delta_scale` pushes the focal point away by `size * delta_scale * focal`;
//! the solver translates the element back by exactly that amount.
//!
//! The solver runs before position clamping. When the clamped position
//! differs from the solved one the focal point drifts by the clamp
//! correction. That loss is accepted: bounds win over focus.

use kurbo::{Point, Rect, Size, Vec2};

use crate::TransformState;

/// Translation that keeps the point at fraction `focal` of the element fixed
/// on screen when the scale changes by `delta_scale`.
///
/// `unscaled` is the element's layout size (before any scaling).
#[must_use]
pub fn focal_offset(delta_scale: f64, focal: Point, unscaled: Size) -> Vec2 {
    let delta_w = unscaled.width * delta_scale;
    let delta_h = unscaled.height * delta_scale;
    Vec2::new(-delta_w * focal.x, -delta_h * focal.y)
}

/// Rescales `state` to `scale` around the focal fraction `focal`.
#[must_use]
pub fn zoom_about(state: TransformState, scale: f64, focal: Point, unscaled: Size) -> TransformState {
    let position = state.position() + focal_offset(scale - state.scale(), focal, unscaled);
    TransformState::new(position.x, position.y, scale)
}

/// Fraction of the rendered element `frame` at which `point` lies.
///
/// A degenerate frame yields `0` along that axis.
#[must_use]
pub fn focal_fraction(point: Point, frame: Rect) -> Point {
    let fraction = |offset: f64, extent: f64| {
        if extent > 0.0 { offset / extent } else { 0.0 }
    };
    Point::new(
        fraction(point.x - frame.x0, frame.width()),
        fraction(point.y - frame.y0, frame.height()),
    )
}

/// Scale a double tap toggles to.
///
/// Zooms out to `min` once the current scale is past the midpoint of
/// `[min, max]`, and in to `max` otherwise.
#[must_use]
pub fn double_tap_target(current: f64, min: f64, max: f64) -> f64 {
    let mid = min + (max - min) / 2.0;
    if current > mid { min } else { max }
}
