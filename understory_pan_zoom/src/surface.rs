// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element being transformed, as seen by the engine.
//!
//! A [`Surface`] is the managed element together with its bounding element.
//! The engine only reads layout geometry from it and writes one transform per
//! rendered frame; everything else about the host (a DOM, a retained scene, a
//! test double) stays behind the trait.

use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use kurbo::{Rect, Size};

use crate::{GeometryError, TransformState};

bitflags::bitflags! {
    /// Pre-existing element styles that fight with the engine.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StyleConflicts: u8 {
        /// A transform is already set; it will be overwritten.
        const TRANSFORM        = 0b0000_0001;
        /// A transform origin other than the top-left corner is set.
        const TRANSFORM_ORIGIN = 0b0000_0010;
        /// Touch actions are not disabled, so the host may scroll or zoom too.
        const TOUCH_ACTION     = 0b0000_0100;
    }
}

/// A cubic Bézier timing curve, as in CSS `cubic-bezier()`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
    /// First control point x.
    pub x1: f64,
    /// First control point y.
    pub y1: f64,
    /// Second control point x.
    pub x2: f64,
    /// Second control point y.
    pub y2: f64,
}

impl CubicBezier {
    /// Quick start, slow settle; used for programmatic moves.
    pub const EASE_IN_OUT_CIRC: Self = Self::new(0.785, 0.135, 0.150, 0.860);

    /// Creates a curve from its two control points.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Transform transition used for animated moves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionSpec {
    /// Length of the transition.
    #[cfg_attr(feature = "serde", serde(with = "crate::options::millis"))]
    pub duration: Duration,
    /// Timing curve.
    pub easing: CubicBezier,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: CubicBezier::EASE_IN_OUT_CIRC,
        }
    }
}

impl fmt::Display for TransitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform {}ms {}", self.duration.as_millis(), self.easing)
    }
}

/// The managed element and its bounding element.
pub trait Surface {
    /// Layout size of the element, before the transform.
    fn unscaled_size(&self) -> Result<Size, GeometryError>;

    /// The bounding element, in the element's untransformed coordinate space.
    fn bounds(&self) -> Result<Rect, GeometryError>;

    /// Applies a transform to the element.
    fn write_transform(&mut self, state: TransformState);

    /// Styles set on the element that conflict with the engine.
    fn style_conflicts(&self) -> StyleConflicts {
        StyleConflicts::empty()
    }

    /// Makes the element ready to be transformed: top-left transform origin,
    /// no native touch actions and no text selection.
    fn prepare(&mut self) {}

    /// Whether the caller configured its own transform transition.
    ///
    /// The engine cannot observe the end of such transitions.
    fn has_transform_transition(&self) -> bool {
        false
    }

    /// Installs the transition for the next write, or restores the caller's
    /// transition when `None`.
    fn set_transition(&mut self, transition: Option<TransitionSpec>) {
        let _ = transition;
    }
}

/// An in-memory [`Surface`] recording every write.
#[derive(Clone, Debug, PartialEq)]
pub struct MemorySurface {
    size: Size,
    bounds: Rect,
    disposed: bool,
    prepared: bool,
    writes: Vec<TransformState>,
    transition: Option<TransitionSpec>,
    transform_transition: bool,
    conflicts: StyleConflicts,
}

impl MemorySurface {
    /// Creates a surface for an element of layout `size` inside `bounds`.
    #[must_use]
    pub fn new(size: Size, bounds: Rect) -> Self {
        Self {
            size,
            bounds,
            disposed: false,
            prepared: false,
            writes: Vec::new(),
            transition: None,
            transform_transition: false,
            conflicts: StyleConflicts::empty(),
        }
    }

    /// Marks the surface as having its own transform transition.
    #[must_use]
    pub fn with_transform_transition(mut self, enabled: bool) -> Self {
        self.transform_transition = enabled;
        self
    }

    /// Sets the styles reported as conflicting.
    #[must_use]
    pub fn with_style_conflicts(mut self, conflicts: StyleConflicts) -> Self {
        self.conflicts = conflicts;
        self
    }

    /// Removes the element; geometry reads fail from now on.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// Returns `true` once [`dispose`](Self::dispose) was called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Changes the element's layout size.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Changes the bounding rectangle.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Every transform written so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[TransformState] {
        &self.writes
    }

    /// Forgets recorded writes.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    /// The most recent transform written.
    #[must_use]
    pub fn last_transform(&self) -> Option<TransformState> {
        self.writes.last().copied()
    }

    /// The transition installed by the engine, if any.
    #[must_use]
    pub fn transition(&self) -> Option<TransitionSpec> {
        self.transition
    }

    /// Returns `true` once [`Surface::prepare`] ran.
    #[must_use]
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }
}

impl Surface for MemorySurface {
    fn unscaled_size(&self) -> Result<Size, GeometryError> {
        if self.disposed {
            return Err(GeometryError::Disposed);
        }
        Ok(self.size)
    }

    fn bounds(&self) -> Result<Rect, GeometryError> {
        if self.disposed {
            return Err(GeometryError::Disposed);
        }
        Ok(self.bounds)
    }

    fn write_transform(&mut self, state: TransformState) {
        self.writes.push(state);
    }

    fn style_conflicts(&self) -> StyleConflicts {
        self.conflicts
    }

    fn prepare(&mut self) {
        self.prepared = true;
        self.conflicts
            .remove(StyleConflicts::TRANSFORM_ORIGIN | StyleConflicts::TOUCH_ACTION);
    }

    fn has_transform_transition(&self) -> bool {
        self.transform_transition
    }

    fn set_transition(&mut self, transition: Option<TransitionSpec>) {
        self.transition = transition;
    }
}
