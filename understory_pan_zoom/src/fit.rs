// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `object-fit` style placement of the element within the bounding rectangle.

use kurbo::{Rect, Size};

use crate::{FitKind, TransformState};

/// Geometry of an element fitted into a bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    /// Left edge of the fitted element.
    pub x: f64,
    /// Top edge of the fitted element.
    pub y: f64,
    /// Fitted width.
    pub width: f64,
    /// Fitted height.
    pub height: f64,
    /// Scale that turns the unscaled element into the fitted one.
    pub scale: f64,
}

impl Fit {
    /// The transform that places the element at this fit.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        TransformState::new(self.x, self.y, self.scale)
    }
}

/// Fits an element of layout size `unscaled` into `bounds`, centered.
///
/// Returns `None` when the element or the bounds have no area.
#[must_use]
pub fn fit_within(kind: FitKind, unscaled: Size, bounds: Rect) -> Option<Fit> {
    if unscaled.width <= 0.0 || unscaled.height <= 0.0 {
        return None;
    }
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return None;
    }
    let sx = bounds.width() / unscaled.width;
    let sy = bounds.height() / unscaled.height;
    let scale = match kind {
        FitKind::Contain => sx.min(sy),
        FitKind::Cover => sx.max(sy),
        FitKind::ScaleDown => sx.min(sy).min(1.0),
    };
    let width = unscaled.width * scale;
    let height = unscaled.height * scale;
    Some(Fit {
        x: bounds.x0 + (bounds.width() - width) / 2.0,
        y: bounds.y0 + (bounds.height() - height) / 2.0,
        width,
        height,
        scale,
    })
}
