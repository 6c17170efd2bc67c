// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use core::time::Duration;

use crate::{Bounds, InitialFit, Limits, TransitionSpec};

/// Lower scale bound used when none is configured.
pub const DEFAULT_MIN_ZOOM: f64 = 0.3;

/// Upper scale bound used when none is configured.
pub const DEFAULT_MAX_ZOOM: f64 = 4.0;

/// Options for a [`PanZoom`](crate::PanZoom) instance.
///
/// Contradictory values, such as `min_zoom > max_zoom`, are not rejected;
/// they simply make clamping behave strangely.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct PanZoomOptions {
    /// Lower scale bound; `None` leaves it open.
    pub min_zoom: Option<f64>,
    /// Upper scale bound; `None` leaves it open.
    pub max_zoom: Option<f64>,
    /// Scale change per wheel pixel (and per pinch pixel, before the pinch multiplier).
    pub zoom_speed: f64,
    /// Whether drags pan the element.
    pub pan_enabled: bool,
    /// Whether wheels, pinches and double taps zoom the element.
    pub zoom_enabled: bool,
    /// Position clamp policy.
    pub bounds: Bounds,
    /// Placement applied once at init, without events.
    pub initial_fit: Option<InitialFit>,
    /// Quiet period after which a wheel gesture ends.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub wheel_timeout: Duration,
    /// Maximum delay between the taps of a double tap.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub double_tap_threshold: Duration,
    /// Quiet period after a bounds resize before positions are re-clamped.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub resize_debounce: Duration,
    /// Transition used for animated moves.
    pub transition: TransitionSpec,
}

impl Default for PanZoomOptions {
    fn default() -> Self {
        Self {
            min_zoom: Some(DEFAULT_MIN_ZOOM),
            max_zoom: Some(DEFAULT_MAX_ZOOM),
            zoom_speed: 0.01,
            pan_enabled: true,
            zoom_enabled: true,
            bounds: Bounds::default(),
            initial_fit: None,
            wheel_timeout: Duration::from_millis(50),
            double_tap_threshold: Duration::from_millis(500),
            resize_debounce: Duration::from_millis(300),
            transition: TransitionSpec::default(),
        }
    }
}

impl PanZoomOptions {
    /// Sets the lower scale bound.
    #[must_use]
    pub fn with_min_zoom(mut self, min_zoom: impl Into<Option<f64>>) -> Self {
        self.min_zoom = min_zoom.into();
        self
    }

    /// Sets the upper scale bound.
    #[must_use]
    pub fn with_max_zoom(mut self, max_zoom: impl Into<Option<f64>>) -> Self {
        self.max_zoom = max_zoom.into();
        self
    }

    /// Sets the zoom speed.
    #[must_use]
    pub fn with_zoom_speed(mut self, zoom_speed: f64) -> Self {
        self.zoom_speed = zoom_speed;
        self
    }

    /// Enables or disables panning.
    #[must_use]
    pub fn with_pan_enabled(mut self, enabled: bool) -> Self {
        self.pan_enabled = enabled;
        self
    }

    /// Enables or disables zooming.
    #[must_use]
    pub fn with_zoom_enabled(mut self, enabled: bool) -> Self {
        self.zoom_enabled = enabled;
        self
    }

    /// Sets the position clamp policy.
    #[must_use]
    pub fn with_bounds(mut self, bounds: impl Into<Bounds>) -> Self {
        self.bounds = bounds.into();
        self
    }

    /// Sets the placement applied at init.
    #[must_use]
    pub fn with_initial_fit(mut self, fit: impl Into<Option<InitialFit>>) -> Self {
        self.initial_fit = fit.into();
        self
    }

    /// Sets the wheel gesture timeout.
    #[must_use]
    pub fn with_wheel_timeout(mut self, timeout: Duration) -> Self {
        self.wheel_timeout = timeout;
        self
    }

    /// Sets the double-tap threshold.
    #[must_use]
    pub fn with_double_tap_threshold(mut self, threshold: Duration) -> Self {
        self.double_tap_threshold = threshold;
        self
    }

    /// Sets the resize debounce.
    #[must_use]
    pub fn with_resize_debounce(mut self, debounce: Duration) -> Self {
        self.resize_debounce = debounce;
        self
    }

    /// Sets the transition used for animated moves.
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionSpec) -> Self {
        self.transition = transition;
        self
    }

    /// Zoom limits and bounds as a [`Limits`].
    #[must_use]
    pub fn limits(&self) -> Limits {
        Limits {
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            bounds: self.bounds,
        }
    }
}

/// Per-call flags for programmatic moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOptions {
    /// Clamp the target to the zoom limits and bounds.
    pub clamp: bool,
    /// Animate with the configured transition instead of jumping.
    pub animate: bool,
}

impl MoveOptions {
    /// Clamped, without animation.
    pub const IMMEDIATE: Self = Self {
        clamp: true,
        animate: false,
    };

    /// Creates move options.
    #[must_use]
    pub const fn new(clamp: bool, animate: bool) -> Self {
        Self { clamp, animate }
    }
}

/// Clamped and animated.
impl Default for MoveOptions {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Durations as whole milliseconds.
#[cfg(feature = "serde")]
pub(crate) mod millis {
    use core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
