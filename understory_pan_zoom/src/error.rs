// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Failure to read geometry from a [`Surface`](crate::Surface).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// The element backing the surface has been disposed or detached.
    #[error("the pan/zoom target has been disposed")]
    Disposed,
}

/// Errors returned by [`PanZoom`](crate::PanZoom) operations.
///
/// Only lifecycle and geometry problems are reported. Contradictory
/// configuration (for example `min_zoom > max_zoom`) is not checked and
/// simply produces degenerate clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PanZoomError {
    /// The operation was called before [`PanZoom::init`](crate::PanZoom::init).
    #[error("pan/zoom has not been initialized with a surface")]
    NotInitialized,
    /// The operation was called after [`PanZoom::destroy`](crate::PanZoom::destroy).
    #[error("pan/zoom has been destroyed")]
    Destroyed,
    /// Geometry could not be read from the surface.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors from parsing a CSS-shorthand padding string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaddingParseError {
    /// The shorthand had more than four values.
    #[error("padding shorthand takes 1 to 4 values, found {0}")]
    TooManyValues(usize),
    /// One of the values was not a number.
    #[error("invalid padding value `{0}`")]
    InvalidValue(String),
}
