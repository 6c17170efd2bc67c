// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the element should be sized relative to the bounding rectangle.
///
/// These mirror the CSS `object-fit` keywords and are consulted by
/// [`crate::fit_within`], [`crate::PanZoom::fit_size`] and the
/// contain/cover/scale-down operations of [`crate::PanZoom`]. The fitted
/// element is always centered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FitKind {
    /// Largest scale at which the whole element is visible.
    Contain,
    /// Smallest scale at which the element covers the whole bounds.
    Cover,
    /// Like [`FitKind::Contain`], but never enlarges the element.
    ScaleDown,
}

/// Placement applied once when a [`crate::PanZoom`] is initialized.
///
/// The initial placement is applied immediately, without a transition and
/// without emitting events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum InitialFit {
    /// Center the element at its current scale.
    Center,
    /// Fit with [`FitKind::Contain`].
    Contain,
    /// Fit with [`FitKind::Cover`].
    Cover,
    /// Fit with [`FitKind::ScaleDown`].
    ScaleDown,
}

impl InitialFit {
    /// The fit this placement scales to, if it scales at all.
    ///
    /// When present, the fitted scale replaces the minimum zoom as the
    /// "zoomed out" level of double-tap toggling.
    #[must_use]
    pub fn fit_kind(self) -> Option<FitKind> {
        match self {
            Self::Center => None,
            Self::Contain => Some(FitKind::Contain),
            Self::Cover => Some(FitKind::Cover),
            Self::ScaleDown => Some(FitKind::ScaleDown),
        }
    }
}
