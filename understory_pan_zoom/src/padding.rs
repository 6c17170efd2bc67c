// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Padding and the position clamp policy.
//!
//! Padding insets the bounding rectangle before the element position is
//! clamped, which lets the element's edges travel inside the parent bounds.
//! It can be written the way CSS `padding` shorthand is written, without
//! units:
//!
//! ```
//! use understory_pan_zoom::Padding;
//!
//! let p: Padding = "10 20".parse().unwrap();
//! assert_eq!(p, Padding::new(10.0, 20.0, 10.0, 20.0));
//! ```

use alloc::string::ToString;
use core::str::FromStr;

use kurbo::Rect;

use crate::PaddingParseError;

/// Per-side inset of the bounding rectangle, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Padding {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the right edge.
    pub right: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the left edge.
    pub left: f64,
}

impl Padding {
    /// No inset on any side.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Creates padding in CSS order: top, right, bottom, left.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same inset on every side.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Shrinks `rect` by this padding.
    #[must_use]
    pub fn shrink(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 + self.left,
            rect.y0 + self.top,
            rect.x1 - self.right,
            rect.y1 - self.bottom,
        )
    }
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Self::uniform(value)
    }
}

/// Parses CSS-shorthand padding: one to four whitespace separated numbers.
///
/// - `"a"` applies to every side.
/// - `"a b"` is top/bottom `a`, left/right `b`.
/// - `"a b c"` is top `a`, left/right `b`, bottom `c`.
/// - `"a b c d"` is top, right, bottom, left.
///
/// An empty string is zero padding.
impl FromStr for Padding {
    type Err = PaddingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [0.0_f64; 4];
        let mut count = 0;
        for part in s.split_whitespace() {
            if count == values.len() {
                return Err(PaddingParseError::TooManyValues(
                    s.split_whitespace().count(),
                ));
            }
            values[count] = part
                .parse()
                .map_err(|_| PaddingParseError::InvalidValue(part.to_string()))?;
            count += 1;
        }
        let [a, b, c, d] = values;
        Ok(match count {
            0 => Self::ZERO,
            1 => Self::uniform(a),
            2 => Self::new(a, b, a, b),
            3 => Self::new(a, b, c, b),
            _ => Self::new(a, b, c, d),
        })
    }
}

/// Whether and how the element position is clamped to the bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "serde_repr::BoundsRepr", into = "serde_repr::BoundsRepr")
)]
pub enum Bounds {
    /// Position is never clamped.
    Disabled,
    /// Position is clamped to the bounding rectangle shrunk by this padding.
    Padded(Padding),
}

impl Bounds {
    /// Returns the padding when clamping is enabled.
    #[must_use]
    pub fn padding(&self) -> Option<Padding> {
        match self {
            Self::Disabled => None,
            Self::Padded(padding) => Some(*padding),
        }
    }

    /// Returns `true` unless clamping is disabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Padded(_))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::Padded(Padding::ZERO)
    }
}

impl From<Padding> for Bounds {
    fn from(padding: Padding) -> Self {
        Self::Padded(padding)
    }
}

impl From<f64> for Bounds {
    fn from(value: f64) -> Self {
        Self::Padded(Padding::uniform(value))
    }
}

/// `false` disables clamping, `true` clamps with no padding.
impl From<bool> for Bounds {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::default()
        } else {
            Self::Disabled
        }
    }
}

impl FromStr for Bounds {
    type Err = PaddingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "false" | "none" => Ok(Self::Disabled),
            other => other.parse().map(Self::Padded),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_repr {
    use alloc::string::String;

    use super::{Bounds, Padding};
    use crate::PaddingParseError;

    /// Every accepted spelling of [`Bounds`] in configuration data.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(untagged)]
    pub(super) enum BoundsRepr {
        Flag(bool),
        Uniform(f64),
        Sides(Padding),
        Shorthand(String),
    }

    impl TryFrom<BoundsRepr> for Bounds {
        type Error = PaddingParseError;

        fn try_from(repr: BoundsRepr) -> Result<Self, Self::Error> {
            Ok(match repr {
                BoundsRepr::Flag(enabled) => enabled.into(),
                BoundsRepr::Uniform(value) => value.into(),
                BoundsRepr::Sides(padding) => padding.into(),
                BoundsRepr::Shorthand(s) => s.parse()?,
            })
        }
    }

    impl From<Bounds> for BoundsRepr {
        fn from(bounds: Bounds) -> Self {
            match bounds {
                Bounds::Disabled => Self::Flag(false),
                Bounds::Padded(padding) => Self::Sides(padding),
            }
        }
    }
}
