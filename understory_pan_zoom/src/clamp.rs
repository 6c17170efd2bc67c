// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds clamping for scale and position.
//!
//! Position clamping is asymmetric on purpose. Along each axis the element is
//! compared against the padded bounding rectangle:
//! - If the element is larger, it must keep covering the padded rectangle; its
//!   edges may recede past the rectangle edges by up to the overhang.
//! - Otherwise it must stay fully inside the padded rectangle.
//!
//! Small content therefore stays fully visible, while large content always
//! covers the viewport.

use kurbo::{Point, Rect, Size};

use crate::{Bounds, TransformState, focal};

/// Clamps `scale` into `[min, max]`. A `None` bound leaves that side open.
#[must_use]
pub fn clamp_scale(scale: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut clamped = scale;
    if let Some(min) = min {
        clamped = clamped.max(min);
    }
    if let Some(max) = max {
        clamped = clamped.min(max);
    }
    clamped
}

/// Clamps the position of an element with the given rendered `size` to the
/// `bounds_rect`, shrunk by the padding of `bounds`.
///
/// Returns `position` unchanged when `bounds` is [`Bounds::Disabled`].
#[must_use]
pub fn clamp_position(position: Point, size: Size, bounds_rect: Rect, bounds: Bounds) -> Point {
    let Some(padding) = bounds.padding() else {
        return position;
    };
    let area = padding.shrink(bounds_rect);
    Point::new(
        clamp_axis(position.x, size.width, area.x0, area.x1),
        clamp_axis(position.y, size.height, area.y0, area.y1),
    )
}

fn clamp_axis(value: f64, extent: f64, near: f64, far: f64) -> f64 {
    // Furthest position at which the element's far edge still reaches `far`.
    let last = far - extent;
    if extent > far - near {
        value.min(near).max(last)
    } else {
        value.max(near).min(last)
    }
}

/// Zoom limits and the position clamp policy of a pan/zoom instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    /// Lower scale bound; `None` leaves it open.
    pub min_zoom: Option<f64>,
    /// Upper scale bound; `None` leaves it open.
    pub max_zoom: Option<f64>,
    /// Position clamp policy.
    pub bounds: Bounds,
}

impl Limits {
    /// Clamps a scale into the configured zoom range.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        clamp_scale(scale, self.min_zoom, self.max_zoom)
    }

    /// Clamps a position for an element of the given rendered size.
    #[must_use]
    pub fn clamp_position(&self, position: Point, size: Size, bounds_rect: Rect) -> Point {
        clamp_position(position, size, bounds_rect, self.bounds)
    }

    /// Clamps a whole transform.
    ///
    /// The scale is clamped first, re‑anchored around the element center so
    /// the element does not jump, then the position is clamped for the
    /// resulting rendered size. The returned flag reports whether anything
    /// moved.
    #[must_use]
    pub fn clamp(
        &self,
        state: TransformState,
        unscaled: Size,
        bounds_rect: Rect,
    ) -> (TransformState, bool) {
        let scale = self.clamp_scale(state.scale());
        let mut position = state.position();
        if scale != state.scale() {
            position += focal::focal_offset(
                scale - state.scale(),
                Point::new(0.5, 0.5),
                unscaled,
            );
            tracing::debug!(
                unclamped = state.scale(),
                clamped = scale,
                "clamped scale"
            );
        }
        let size = Size::new(unscaled.width * scale, unscaled.height * scale);
        let clamped = self.clamp_position(position, size, bounds_rect);
        if clamped != position {
            tracing::debug!(
                x = position.x,
                y = position.y,
                clamped_x = clamped.x,
                clamped_y = clamped.y,
                "clamped position"
            );
        }
        let result = TransformState::new(clamped.x, clamped.y, scale);
        (result, result != state)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_zoom: Some(crate::DEFAULT_MIN_ZOOM),
            max_zoom: Some(crate::DEFAULT_MAX_ZOOM),
            bounds: Bounds::default(),
        }
    }
}
