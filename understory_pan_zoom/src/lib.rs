// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_zoom --heading-base-level=0

//! Understory Pan/Zoom: a headless gesture-to-transform engine.
//!
//! This crate turns pointer drags, mouse wheels, pinches and double taps into
//! the transform of a single element: a translation plus a uniform scale,
//! applied with a top-left transform origin. It focuses on:
//! - Normalizing raw input into `{dx, dy, dz, focal_x, focal_y}` deltas.
//! - Zooming around a focal point that stays visually fixed.
//! - Clamping scale to zoom limits and position to a padded bounding rectangle.
//! - Writing at most one transform per frame and reporting
//!   `start`/`update`/`end` lifecycle events.
//!
//! It does **not** render or hit test anything. The element and its bounding
//! element are reached through the [`Surface`] trait; [`MemorySurface`] is an
//! in-memory implementation. The host feeds input and time through
//! [`PanZoom::handle_input`], [`PanZoom::frame`] and [`PanZoom::poll`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//!
//! use kurbo::{Point, Rect, Size};
//! use understory_pan_zoom::{
//!     MemorySurface, PanZoom, PanZoomOptions, RawInput, TransformState, WheelDelta,
//! };
//!
//! // A 100x100 element inside a 100x100 container.
//! let surface = MemorySurface::new(Size::new(100.0, 100.0), Rect::new(0.0, 0.0, 100.0, 100.0));
//! let mut pz = PanZoom::attach(surface, PanZoomOptions::default()).unwrap();
//!
//! // Scroll up by 50 pixels over the top-left corner: zoom in by 0.5.
//! let wheel = RawInput::Wheel {
//!     position: Point::new(0.0, 0.0),
//!     delta: WheelDelta::Pixels(-50.0),
//! };
//! pz.handle_input(wheel, Duration::ZERO).unwrap();
//! assert!(pz.wants_frame());
//! pz.frame().unwrap();
//!
//! assert_eq!(
//!     pz.surface().unwrap().last_transform(),
//!     Some(TransformState::new(0.0, 0.0, 1.5))
//! );
//!
//! // Once the wheel has been quiet long enough the gesture ends.
//! let deadline = pz.next_deadline().unwrap();
//! pz.poll(deadline).unwrap();
//! assert!(!pz.moving());
//! ```
//!
//! ## Design notes
//!
//! - Focal points are captured when a gesture starts and held for the whole
//!   gesture, so intermediate scale changes cannot make the focus drift.
//! - The focal solver runs before position clamping. Near the bounds the
//!   focal point may therefore shift; bounds win over focus.
//! - Programmatic moves animate through a transition installed on the
//!   surface. When the element already has its own transform transition the
//!   end of the move cannot be observed, so no `end` event is emitted.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod clamp;
mod error;
mod events;
mod fit;
mod focal;
pub mod gesture;
mod modes;
mod options;
mod padding;
mod pan_zoom;
mod scheduler;
mod surface;
mod timer;
mod transform;

pub use clamp::{Limits, clamp_position, clamp_scale};
pub use error::{GeometryError, PaddingParseError, PanZoomError};
pub use events::{Emitter, EventKind, ListenerId, PanZoomEvent};
pub use fit::{Fit, fit_within};
pub use focal::{double_tap_target, focal_fraction, focal_offset, zoom_about};
pub use gesture::{GestureClass, GestureDelta, GestureKind, RawInput, WheelDelta};
pub use modes::{FitKind, InitialFit};
pub use options::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, MoveOptions, PanZoomOptions};
pub use padding::{Bounds, Padding};
pub use pan_zoom::PanZoom;
pub use surface::{CubicBezier, MemorySurface, StyleConflicts, Surface, TransitionSpec};
pub use timer::Timeout;
pub use transform::TransformState;
