// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture normalization: raw device input in, uniform gesture signals out.
//!
//! Each input device is handled by a [`GestureSource`], a small state machine
//! that turns raw input into [`GestureSignal`]s:
//!
//! - [`PointerPan`]: mouse or single-touch drags become `dx`/`dy` deltas.
//! - [`WheelZoom`]: wheel deltas become `dz` deltas; the gesture ends after a
//!   quiet period since wheels have no end event.
//! - [`PinchZoom`]: two-finger distance changes become `dz` deltas.
//! - [`DoubleTap`]: two quick taps become a single double-tap signal.
//!
//! The [`GestureNormalizer`] owns the sources, routes every input to each of
//! them and enforces the pan/zoom toggles.
//!
//! Zoom focal points are captured once, when a gesture starts, as a fraction
//! of the element's rendered frame. Every delta of that gesture carries the
//! same fractions.

mod pan;
mod pinch;
mod tap;
mod wheel;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::time::Duration;

use kurbo::{Point, Rect};
use smallvec::SmallVec;

pub use pan::PointerPan;
pub use pinch::PinchZoom;
pub use tap::DoubleTap;
pub use wheel::WheelZoom;

use crate::PanZoomOptions;

/// Pixels per line for line-based wheel deltas.
pub const LINE_HEIGHT: f64 = 16.0;

/// Multiplier applied to pinch distance changes on top of the zoom speed.
pub const PINCH_MULTIPLIER: f64 = 1.3;

/// Raw input delivered by the host.
///
/// Positions are in the coordinate space of the bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawInput {
    /// A mouse button or single touch went down.
    PointerDown {
        /// Pointer position.
        position: Point,
    },
    /// The pointer moved.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// The pointer was released.
    PointerUp {
        /// Pointer position.
        position: Point,
    },
    /// The platform cancelled the pointer sequence.
    PointerCancel,
    /// A mouse wheel or trackpad scroll.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Vertical scroll amount; positive scrolls down.
        delta: WheelDelta,
    },
    /// A second touch went down.
    PinchStart {
        /// First touch.
        a: Point,
        /// Second touch.
        b: Point,
    },
    /// One of the two touches moved.
    PinchMove {
        /// First touch.
        a: Point,
        /// Second touch.
        b: Point,
    },
    /// One of the two touches lifted.
    PinchEnd,
    /// A completed tap or click.
    Tap {
        /// Tap position.
        position: Point,
    },
}

/// Vertical wheel delta, in the unit the platform reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    /// Device pixels.
    Pixels(f64),
    /// Lines of text, [`LINE_HEIGHT`] pixels each.
    Lines(f64),
    /// Pages, each the height of the bounding rectangle.
    Pages(f64),
}

impl WheelDelta {
    /// The delta in pixels, given the height of a page.
    #[must_use]
    pub fn to_pixels(self, page_height: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Lines(lines) => lines * LINE_HEIGHT,
            Self::Pages(pages) => pages * page_height,
        }
    }
}

/// Which gesture produced a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Pointer drag.
    Pan,
    /// Mouse wheel zoom.
    Wheel,
    /// Two-finger zoom.
    Pinch,
}

impl GestureKind {
    /// The toggle class the gesture belongs to.
    #[must_use]
    pub fn class(self) -> GestureClass {
        match self {
            Self::Pan => GestureClass::Pan,
            Self::Wheel | Self::Pinch => GestureClass::Zoom,
        }
    }
}

/// Gesture classes that can be enabled and disabled independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureClass {
    /// Translation gestures.
    Pan,
    /// Scaling gestures.
    Zoom,
}

/// One step of a gesture in device-independent form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureDelta {
    /// Horizontal movement in pixels.
    pub dx: f64,
    /// Vertical movement in pixels.
    pub dy: f64,
    /// Signed scale change.
    pub dz: f64,
    /// Horizontal focal fraction of the element, frozen at gesture start.
    pub focal_x: f64,
    /// Vertical focal fraction of the element, frozen at gesture start.
    pub focal_y: f64,
}

impl GestureDelta {
    /// A pure translation.
    #[must_use]
    pub fn pan(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            ..Self::default()
        }
    }

    /// A pure scale change around `focal`.
    #[must_use]
    pub fn zoom(dz: f64, focal: Point) -> Self {
        Self {
            dz,
            focal_x: focal.x,
            focal_y: focal.y,
            ..Self::default()
        }
    }

    /// The focal fractions as a point.
    #[must_use]
    pub fn focal(&self) -> Point {
        Point::new(self.focal_x, self.focal_y)
    }
}

/// Output of a [`GestureSource`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSignal {
    /// A gesture began. Emitted before any of its deltas.
    Start(GestureKind),
    /// A gesture moved.
    Delta(GestureKind, GestureDelta),
    /// A gesture finished.
    End(GestureKind),
    /// A double tap at the given focal fraction of the element.
    DoubleTap {
        /// Focal fraction of the element.
        focal: Point,
    },
}

/// Signals produced by a single input.
pub type Signals = SmallVec<[GestureSignal; 2]>;

/// Geometry a source needs to interpret an input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureContext {
    /// Host time of the input.
    pub now: Duration,
    /// The rendered element, in bounding-rectangle space.
    pub frame: Rect,
    /// The bounding rectangle.
    pub bounds: Rect,
}

impl GestureContext {
    /// Whether `point` lies on the rendered element, edges included.
    #[must_use]
    pub fn hits(&self, point: Point) -> bool {
        let frame = self.frame;
        (frame.x0..=frame.x1).contains(&point.x) && (frame.y0..=frame.y1).contains(&point.y)
    }
}

/// A strategy turning one kind of raw input into gesture signals.
pub trait GestureSource: Debug {
    /// The toggle class this source belongs to.
    fn class(&self) -> GestureClass;

    /// Interprets one input, appending any resulting signals to `out`.
    fn handle(&mut self, input: &RawInput, cx: &GestureContext, out: &mut Signals);

    /// Earliest time at which [`poll`](Self::poll) has work to do.
    fn next_deadline(&self) -> Option<Duration> {
        None
    }

    /// Advances timers to `now`.
    fn poll(&mut self, now: Duration, out: &mut Signals) {
        let _ = (now, out);
    }

    /// Aborts any in-progress gesture, appending its end signal to `out`.
    fn cancel(&mut self, out: &mut Signals);

    /// Returns `true` while a gesture is in progress.
    fn is_active(&self) -> bool;
}

/// Routes raw input through a set of [`GestureSource`]s.
#[derive(Debug)]
pub struct GestureNormalizer {
    sources: Vec<Box<dyn GestureSource>>,
    pan_enabled: bool,
    zoom_enabled: bool,
}

impl Default for GestureNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureNormalizer {
    /// Creates a normalizer without sources, both classes enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            pan_enabled: true,
            zoom_enabled: true,
        }
    }

    /// Creates the standard pointer, wheel, pinch and double-tap sources.
    #[must_use]
    pub fn from_options(options: &PanZoomOptions) -> Self {
        let mut normalizer = Self::new()
            .with_source(PointerPan::new())
            .with_source(WheelZoom::new(options.zoom_speed, options.wheel_timeout))
            .with_source(PinchZoom::new(options.zoom_speed))
            .with_source(DoubleTap::new(options.double_tap_threshold));
        normalizer.pan_enabled = options.pan_enabled;
        normalizer.zoom_enabled = options.zoom_enabled;
        normalizer
    }

    /// Adds a source.
    #[must_use]
    pub fn with_source(mut self, source: impl GestureSource + 'static) -> Self {
        self.push(Box::new(source));
        self
    }

    /// Adds a boxed source.
    pub fn push(&mut self, source: Box<dyn GestureSource>) {
        self.sources.push(source);
    }

    /// Returns `true` if gestures of `class` are processed.
    #[must_use]
    pub fn is_enabled(&self, class: GestureClass) -> bool {
        match class {
            GestureClass::Pan => self.pan_enabled,
            GestureClass::Zoom => self.zoom_enabled,
        }
    }

    /// Enables or disables a gesture class.
    ///
    /// Disabling cancels in-progress gestures of that class; their end
    /// signals are returned.
    pub fn set_enabled(&mut self, class: GestureClass, enabled: bool) -> Signals {
        match class {
            GestureClass::Pan => self.pan_enabled = enabled,
            GestureClass::Zoom => self.zoom_enabled = enabled,
        }
        let mut out = Signals::new();
        if !enabled {
            self.cancel_class(class, &mut out);
        }
        out
    }

    /// Feeds one input to every enabled source.
    pub fn handle(&mut self, input: &RawInput, cx: &GestureContext) -> Signals {
        let mut out = Signals::new();
        // A second finger turns a drag into a pinch.
        if matches!(input, RawInput::PinchStart { .. }) && self.zoom_enabled {
            self.cancel_class(GestureClass::Pan, &mut out);
        }
        let (pan, zoom) = (self.pan_enabled, self.zoom_enabled);
        for source in &mut self.sources {
            let enabled = match source.class() {
                GestureClass::Pan => pan,
                GestureClass::Zoom => zoom,
            };
            if enabled {
                source.handle(input, cx, &mut out);
            }
        }
        for signal in &out {
            tracing::trace!(?signal, "gesture signal");
        }
        out
    }

    /// Earliest deadline across all sources.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.sources
            .iter()
            .filter_map(|source| source.next_deadline())
            .min()
    }

    /// Advances every source's timers to `now`.
    pub fn poll(&mut self, now: Duration) -> Signals {
        let mut out = Signals::new();
        for source in &mut self.sources {
            source.poll(now, &mut out);
        }
        out
    }

    /// Aborts every in-progress gesture.
    pub fn cancel_all(&mut self) -> Signals {
        let mut out = Signals::new();
        for source in &mut self.sources {
            source.cancel(&mut out);
        }
        out
    }

    /// Returns `true` while any source tracks a gesture.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.sources.iter().any(|source| source.is_active())
    }

    fn cancel_class(&mut self, class: GestureClass, out: &mut Signals) {
        for source in &mut self.sources {
            if source.class() == class {
                source.cancel(out);
            }
        }
    }
}
