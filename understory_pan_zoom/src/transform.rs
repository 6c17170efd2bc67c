// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transform applied to the managed element.

use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Translation plus uniform scale of the managed element.
///
/// Positions live in the bounding rectangle's coordinate space, with the
/// element's layout origin at `(0, 0)`. The transform origin is the element's
/// top‑left corner, so the rendered element covers
/// `(x, y)..(x + width * scale, y + height * scale)`.
///
/// No validation happens here; see [`Limits`](crate::Limits) for clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    x: f64,
    y: f64,
    scale: f64,
}

impl TransformState {
    /// No translation, unit scale.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a transform from a translation and a scale.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Horizontal translation in pixels.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical translation in pixels.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Translation as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Overwrites all three components at once.
    pub fn apply(&mut self, x: f64, y: f64, scale: f64) {
        self.x = x;
        self.y = y;
        self.scale = scale;
    }

    /// Size of an element with the given layout size under this transform.
    #[must_use]
    pub fn rendered_size(&self, unscaled: Size) -> Size {
        Size::new(unscaled.width * self.scale, unscaled.height * self.scale)
    }

    /// Rectangle covered by an element with the given layout size.
    #[must_use]
    pub fn rendered_rect(&self, unscaled: Size) -> Rect {
        Rect::from_origin_size(self.position(), self.rendered_size(unscaled))
    }

    /// The equivalent affine transform (translate, then scale about the origin).
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(Vec2::new(self.x, self.y)) * Affine::scale(self.scale)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Formats as a CSS transform value: `translate(Xpx, Ypx) scale(S)`.
impl fmt::Display for TransformState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }
}
