// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan/zoom controller.
//!
//! [`PanZoom`] ties the pieces together:
//!
//! ```text
//! RawInput -> GestureNormalizer -> focal solver -> clamp -> TransformState
//!                                                              |
//!                          Surface::write_transform <- frame <-+-> events
//! ```
//!
//! The host drives it with four kinds of calls:
//! - [`PanZoom::handle_input`] for raw pointer, wheel, pinch and tap input.
//! - [`PanZoom::frame`] once per animation frame while
//!   [`PanZoom::wants_frame`] is `true`.
//! - [`PanZoom::poll`] once [`PanZoom::next_deadline`] has passed.
//! - [`PanZoom::transition_end`] when the surface finished a transition.

use core::mem;
use core::time::Duration;

use kurbo::{Point, Rect, Size};

use crate::clamp::Limits;
use crate::events::{Emitter, EventKind, ListenerId, PanZoomEvent};
use crate::focal;
use crate::gesture::{
    GestureClass, GestureContext, GestureDelta, GestureKind, GestureNormalizer, GestureSignal,
    RawInput,
};
use crate::scheduler::{Cycle, FrameOutcome, GestureEnd, Scheduler};
use crate::surface::{StyleConflicts, Surface};
use crate::timer::{Timeout, earliest};
use crate::{
    DEFAULT_MAX_ZOOM, Fit, FitKind, GeometryError, InitialFit, MoveOptions, PanZoomError,
    PanZoomOptions, TransformState, fit_within,
};

#[derive(Debug)]
enum Attachment<S> {
    Detached,
    Attached(S),
    Destroyed,
}

/// Pan/zoom state machine for one element.
///
/// Create it with [`PanZoom::new`] and [`init`](Self::init) it with a
/// [`Surface`], or do both at once with [`PanZoom::attach`]. Every operation
/// fails with [`PanZoomError::NotInitialized`] before init and with
/// [`PanZoomError::Destroyed`] after [`destroy`](Self::destroy).
#[derive(Debug)]
pub struct PanZoom<S> {
    options: PanZoomOptions,
    attachment: Attachment<S>,
    state: TransformState,
    /// Last known layout size of the element.
    unscaled: Size,
    scheduler: Scheduler,
    normalizer: GestureNormalizer,
    emitter: Emitter,
    resize: Timeout,
}

impl<S: Surface> PanZoom<S> {
    /// Creates an uninitialized instance.
    #[must_use]
    pub fn new(options: PanZoomOptions) -> Self {
        Self {
            normalizer: GestureNormalizer::from_options(&options),
            options,
            attachment: Attachment::Detached,
            state: TransformState::IDENTITY,
            unscaled: Size::ZERO,
            scheduler: Scheduler::default(),
            emitter: Emitter::new(),
            resize: Timeout::default(),
        }
    }

    /// Creates an instance and initializes it with `surface`.
    pub fn attach(surface: S, options: PanZoomOptions) -> Result<Self, PanZoomError> {
        let mut pan_zoom = Self::new(options);
        pan_zoom.init(surface)?;
        Ok(pan_zoom)
    }

    /// Takes control of `surface`.
    ///
    /// Conflicting styles are reported, the surface is prepared and the
    /// initial transform is written right away. Init emits no events.
    /// Initializing again replaces the surface.
    pub fn init(&mut self, mut surface: S) -> Result<(), PanZoomError> {
        if matches!(self.attachment, Attachment::Destroyed) {
            return Err(PanZoomError::Destroyed);
        }
        self.cancel_interaction();

        warn_conflicts(surface.style_conflicts());
        surface.prepare();
        let unscaled = surface.unscaled_size()?;
        let bounds = surface.bounds()?;
        let state = self.initial_state(unscaled, bounds);
        surface.write_transform(state);

        self.state = state;
        self.unscaled = unscaled;
        self.attachment = Attachment::Attached(surface);
        tracing::info!(
            x = state.x(),
            y = state.y(),
            scale = state.scale(),
            "pan/zoom initialized"
        );
        Ok(())
    }

    /// Stops all interaction and hands the surface back.
    ///
    /// Pending frames, timers and transitions are dropped, the caller's
    /// transition is restored and every listener is removed.
    pub fn destroy(&mut self) -> Result<S, PanZoomError> {
        match mem::replace(&mut self.attachment, Attachment::Destroyed) {
            Attachment::Attached(mut surface) => {
                self.cancel_interaction();
                surface.set_transition(None);
                self.emitter.clear();
                tracing::info!("pan/zoom destroyed");
                Ok(surface)
            }
            Attachment::Detached => {
                self.attachment = Attachment::Detached;
                Err(PanZoomError::NotInitialized)
            }
            Attachment::Destroyed => Err(PanZoomError::Destroyed),
        }
    }

    /// Feeds raw input at host time `now`.
    ///
    /// Returns `true` if the input was part of a gesture. Geometry failures
    /// abort the current interaction instead of being returned.
    pub fn handle_input(&mut self, input: RawInput, now: Duration) -> Result<bool, PanZoomError> {
        let Some((unscaled, bounds)) = self.input_geometry()? else {
            return Ok(false);
        };
        let cx = GestureContext {
            now,
            frame: self.state.rendered_rect(unscaled),
            bounds,
        };
        let signals = self.normalizer.handle(&input, &cx);
        let handled = !signals.is_empty();
        for signal in signals {
            self.apply_signal(signal, unscaled, bounds);
        }
        Ok(handled)
    }

    /// Returns `true` while a frame is pending.
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        self.scheduler.frame_requested()
    }

    /// Writes the pending transform, if any.
    ///
    /// Returns `true` if a transform was written.
    pub fn frame(&mut self) -> Result<bool, PanZoomError> {
        let surface = self.surface()?;
        if !self.scheduler.frame_requested() {
            return Ok(false);
        }
        match surface.unscaled_size() {
            Ok(unscaled) => self.unscaled = unscaled,
            Err(err) => {
                self.abort(err);
                return Ok(false);
            }
        }
        let Some(outcome) = self.scheduler.take_frame() else {
            return Ok(false);
        };
        let state = self.state;
        self.surface_mut()?.write_transform(state);
        tracing::debug!(
            x = state.x(),
            y = state.y(),
            scale = state.scale(),
            "wrote transform"
        );
        match outcome {
            FrameOutcome::Continue(cycle) | FrameOutcome::Release(cycle) => {
                self.emit_update(cycle);
            }
            FrameOutcome::Finish(cycle) => {
                self.emit_update(cycle);
                self.emit_end(cycle);
                if matches!(cycle, Cycle::Gesture(_)) {
                    self.settle_or_abort();
                }
            }
        }
        Ok(true)
    }

    /// Earliest host time at which [`poll`](Self::poll) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        earliest(self.normalizer.next_deadline(), self.resize.deadline())
    }

    /// Runs expired timers: wheel gesture ends and the resize debounce.
    ///
    /// Returns `true` if any timer fired.
    pub fn poll(&mut self, now: Duration) -> Result<bool, PanZoomError> {
        self.surface()?;
        let signals = self.normalizer.poll(now);
        let mut fired = !signals.is_empty();
        for signal in signals {
            if let GestureSignal::End(kind) = signal {
                self.end_gesture(kind);
            }
        }
        if self.resize.fire(now) {
            fired = true;
            tracing::info!("bounds resize settled");
            if !matches!(self.scheduler.cycle(), Some(Cycle::Gesture(_))) {
                self.settle_or_abort();
            }
        }
        Ok(fired)
    }

    /// Reports that the transition installed on the surface finished.
    ///
    /// Stale signals from superseded transitions are ignored and yield
    /// `false`.
    pub fn transition_end(&mut self) -> Result<bool, PanZoomError> {
        self.surface()?;
        let Some(cycle) = self.scheduler.transition_end() else {
            return Ok(false);
        };
        self.restore_transition();
        self.emit_update(cycle);
        self.emit_end(cycle);
        if matches!(cycle, Cycle::Animated { clamp: true, .. }) {
            self.settle_or_abort();
        }
        Ok(true)
    }

    /// Reports that the bounding element changed size.
    ///
    /// The position is re-clamped once resizes stop for the configured
    /// debounce period.
    pub fn resize(&mut self, now: Duration) -> Result<(), PanZoomError> {
        self.surface()?;
        self.resize.arm(now, self.options.resize_debounce);
        Ok(())
    }

    /// Moves the element to translation `(x, y)`.
    ///
    /// Every programmatic move returns `true` if it started a move and
    /// `false` if the element already is at the target.
    pub fn pan_to(&mut self, x: f64, y: f64, options: MoveOptions) -> Result<bool, PanZoomError> {
        let target = TransformState::new(x, y, self.state.scale());
        self.move_to(target, options)
    }

    /// Moves the element by `(dx, dy)`.
    pub fn pan_by(&mut self, dx: f64, dy: f64, options: MoveOptions) -> Result<bool, PanZoomError> {
        self.pan_to(self.state.x() + dx, self.state.y() + dy, options)
    }

    /// Scales the element to `scale` around the focal fraction `focal`.
    ///
    /// With clamping on, the scale is clamped before solving for the
    /// position, so the focal point stays put at the zoom limits.
    pub fn zoom_to(
        &mut self,
        scale: f64,
        focal: Point,
        options: MoveOptions,
    ) -> Result<bool, PanZoomError> {
        let (unscaled, _) = self.geometry()?;
        let scale = if options.clamp {
            self.limits().clamp_scale(scale)
        } else {
            scale
        };
        let target = focal::zoom_about(self.state, scale, focal, unscaled);
        self.move_to(target, options)
    }

    /// Changes the scale by `delta` around the focal fraction `focal`.
    pub fn zoom_by(
        &mut self,
        delta: f64,
        focal: Point,
        options: MoveOptions,
    ) -> Result<bool, PanZoomError> {
        self.zoom_to(self.state.scale() + delta, focal, options)
    }

    /// Centers the element in the bounds at its current scale, unclamped.
    pub fn center(&mut self, animate: bool) -> Result<bool, PanZoomError> {
        let scale = self.state.scale();
        self.center_on(0.5, 0.5, scale, MoveOptions::new(false, animate))
    }

    /// Puts the point at fraction `(px, py)` of the element in the middle of
    /// the bounds, at `scale`.
    pub fn center_on(
        &mut self,
        px: f64,
        py: f64,
        scale: f64,
        options: MoveOptions,
    ) -> Result<bool, PanZoomError> {
        let (unscaled, bounds) = self.geometry()?;
        let scale = if options.clamp {
            self.limits().clamp_scale(scale)
        } else {
            scale
        };
        let target = centered(Point::new(px, py), scale, unscaled, bounds);
        self.move_to(target, options)
    }

    /// Fits the whole element in the bounds. Fits are never clamped.
    pub fn contain(&mut self, animate: bool) -> Result<bool, PanZoomError> {
        self.fit(FitKind::Contain, animate)
    }

    /// Fills the bounds with the element.
    pub fn cover(&mut self, animate: bool) -> Result<bool, PanZoomError> {
        self.fit(FitKind::Cover, animate)
    }

    /// Like [`contain`](Self::contain), but never enlarges the element.
    pub fn scale_down(&mut self, animate: bool) -> Result<bool, PanZoomError> {
        self.fit(FitKind::ScaleDown, animate)
    }

    /// Geometry of a fit, for choosing zoom levels without moving.
    ///
    /// `None` when the element or the bounds are empty.
    pub fn fit_size(&mut self, kind: FitKind) -> Result<Option<Fit>, PanZoomError> {
        let (unscaled, bounds) = self.geometry()?;
        Ok(fit_within(kind, unscaled, bounds))
    }

    /// Returns to translation `(0, 0)` at scale 1.
    pub fn reset(&mut self, options: MoveOptions) -> Result<bool, PanZoomError> {
        self.move_to(TransformState::IDENTITY, options)
    }

    /// Enables panning and zooming.
    pub fn enable(&mut self) -> Result<(), PanZoomError> {
        self.enable_pan()?;
        self.enable_zoom()
    }

    /// Disables panning and zooming, ending any gesture in progress.
    pub fn disable(&mut self) -> Result<(), PanZoomError> {
        self.disable_pan()?;
        self.disable_zoom()
    }

    /// Enables drag panning.
    pub fn enable_pan(&mut self) -> Result<(), PanZoomError> {
        self.set_class_enabled(GestureClass::Pan, true)
    }

    /// Disables drag panning, ending a drag in progress.
    pub fn disable_pan(&mut self) -> Result<(), PanZoomError> {
        self.set_class_enabled(GestureClass::Pan, false)
    }

    /// Enables wheel, pinch and double-tap zooming.
    pub fn enable_zoom(&mut self) -> Result<(), PanZoomError> {
        self.set_class_enabled(GestureClass::Zoom, true)
    }

    /// Disables zooming gestures, ending one in progress.
    pub fn disable_zoom(&mut self) -> Result<(), PanZoomError> {
        self.set_class_enabled(GestureClass::Zoom, false)
    }

    /// Whether any gesture class is enabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.pan_enabled() || self.zoom_enabled()
    }

    /// Whether drags pan the element.
    #[must_use]
    pub fn pan_enabled(&self) -> bool {
        self.normalizer.is_enabled(GestureClass::Pan)
    }

    /// Whether gestures zoom the element.
    #[must_use]
    pub fn zoom_enabled(&self) -> bool {
        self.normalizer.is_enabled(GestureClass::Zoom)
    }

    /// Whether an interaction cycle is running.
    #[must_use]
    pub fn moving(&self) -> bool {
        self.scheduler.is_moving()
    }

    /// Whether a surface is attached.
    #[must_use]
    pub fn initialized(&self) -> bool {
        matches!(self.attachment, Attachment::Attached(_))
    }

    /// The current target transform.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.state
    }

    /// Current translation.
    #[must_use]
    pub fn position(&self) -> Point {
        self.state.position()
    }

    /// Current horizontal translation.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.state.x()
    }

    /// Current vertical translation.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.state.y()
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale()
    }

    /// The options this instance was created with.
    #[must_use]
    pub fn options(&self) -> &PanZoomOptions {
        &self.options
    }

    /// The attached surface.
    pub fn surface(&self) -> Result<&S, PanZoomError> {
        match &self.attachment {
            Attachment::Attached(surface) => Ok(surface),
            Attachment::Detached => Err(PanZoomError::NotInitialized),
            Attachment::Destroyed => Err(PanZoomError::Destroyed),
        }
    }

    /// The attached surface, mutably.
    pub fn surface_mut(&mut self) -> Result<&mut S, PanZoomError> {
        match &mut self.attachment {
            Attachment::Attached(surface) => Ok(surface),
            Attachment::Detached => Err(PanZoomError::NotInitialized),
            Attachment::Destroyed => Err(PanZoomError::Destroyed),
        }
    }

    /// Registers an event listener.
    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&PanZoomEvent) + 'static,
    ) -> Result<ListenerId, PanZoomError> {
        self.surface()?;
        Ok(self.emitter.on(kind, listener))
    }

    /// Removes an event listener.
    ///
    /// Returns `false` if no listener had this id.
    pub fn off(&mut self, id: ListenerId) -> Result<bool, PanZoomError> {
        self.surface()?;
        Ok(self.emitter.off(id))
    }

    fn limits(&self) -> Limits {
        self.options.limits()
    }

    fn geometry(&mut self) -> Result<(Size, Rect), PanZoomError> {
        let surface = self.surface()?;
        let unscaled = surface.unscaled_size()?;
        let bounds = surface.bounds()?;
        self.unscaled = unscaled;
        Ok((unscaled, bounds))
    }

    /// Geometry for input handling; geometry failures abort the interaction.
    fn input_geometry(&mut self) -> Result<Option<(Size, Rect)>, PanZoomError> {
        match self.geometry() {
            Ok(geometry) => Ok(Some(geometry)),
            Err(PanZoomError::Geometry(err)) => {
                self.abort(err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn initial_state(&self, unscaled: Size, bounds: Rect) -> TransformState {
        match self.options.initial_fit {
            None => TransformState::IDENTITY,
            Some(InitialFit::Center) => centered(Point::new(0.5, 0.5), 1.0, unscaled, bounds),
            Some(fit) => fit
                .fit_kind()
                .and_then(|kind| fit_within(kind, unscaled, bounds))
                .map_or(TransformState::IDENTITY, |fit| fit.transform()),
        }
    }

    fn fit(&mut self, kind: FitKind, animate: bool) -> Result<bool, PanZoomError> {
        match self.fit_size(kind)? {
            Some(fit) => self.move_to(fit.transform(), MoveOptions::new(false, animate)),
            None => Ok(false),
        }
    }

    /// Starts a programmatic move towards `target`.
    fn move_to(&mut self, target: TransformState, options: MoveOptions) -> Result<bool, PanZoomError> {
        let (unscaled, bounds) = self.geometry()?;
        let target = if options.clamp {
            self.limits().clamp(target, unscaled, bounds).0
        } else {
            target
        };
        if target == self.state {
            return Ok(false);
        }
        let cycle = if options.animate {
            Cycle::Animated {
                clamp: options.clamp,
                observed: !self.surface()?.has_transform_transition(),
            }
        } else {
            Cycle::Immediate
        };
        tracing::debug!(
            x = target.x(),
            y = target.y(),
            scale = target.scale(),
            animate = options.animate,
            "moving"
        );
        self.begin(cycle);
        if let Cycle::Animated { observed: true, .. } = cycle {
            let transition = self.options.transition;
            self.surface_mut()?.set_transition(Some(transition));
        }
        self.state = target;
        self.scheduler.request_frame();
        Ok(true)
    }

    /// Clamp pass after movement: animates back into bounds if needed.
    fn settle(&mut self) -> Result<bool, PanZoomError> {
        let (unscaled, bounds) = self.geometry()?;
        let (clamped, changed) = self.limits().clamp(self.state, unscaled, bounds);
        if !changed {
            return Ok(false);
        }
        tracing::debug!("moving back into bounds");
        self.move_to(clamped, MoveOptions::new(false, true))
    }

    fn settle_or_abort(&mut self) {
        if let Err(PanZoomError::Geometry(err)) = self.settle() {
            self.abort(err);
        }
    }

    fn apply_signal(&mut self, signal: GestureSignal, unscaled: Size, bounds: Rect) {
        match signal {
            GestureSignal::Start(kind) => {
                if self.scheduler.gesture() != Some(kind) {
                    self.begin(Cycle::Gesture(kind));
                }
            }
            GestureSignal::Delta(kind, delta) => self.apply_delta(kind, delta, unscaled, bounds),
            GestureSignal::End(kind) => self.end_gesture(kind),
            GestureSignal::DoubleTap { focal } => self.double_tap(focal, unscaled, bounds),
        }
    }

    fn apply_delta(&mut self, kind: GestureKind, delta: GestureDelta, unscaled: Size, bounds: Rect) {
        if self.scheduler.gesture() != Some(kind) {
            self.begin(Cycle::Gesture(kind));
        }
        let limits = self.limits();
        let mut next = self.state;
        if delta.dx != 0.0 || delta.dy != 0.0 {
            next = TransformState::new(next.x() + delta.dx, next.y() + delta.dy, next.scale());
        }
        if delta.dz != 0.0 {
            let scale = limits.clamp_scale(next.scale() + delta.dz);
            next = focal::zoom_about(next, scale, delta.focal(), unscaled);
        }
        let position = limits.clamp_position(next.position(), next.rendered_size(unscaled), bounds);
        let next = TransformState::new(position.x, position.y, next.scale());
        if next != self.state {
            self.state = next;
            self.scheduler.request_frame();
        }
    }

    fn end_gesture(&mut self, kind: GestureKind) {
        if self.scheduler.end_gesture(kind) == GestureEnd::Now {
            let cycle = Cycle::Gesture(kind);
            self.emit_end(cycle);
            self.settle_or_abort();
        }
    }

    /// Toggles between the smallest and largest zoom level.
    ///
    /// The smallest level is the initial fit's scale when one is configured.
    fn double_tap(&mut self, focal: Point, unscaled: Size, bounds: Rect) {
        let fit_scale = self
            .options
            .initial_fit
            .and_then(InitialFit::fit_kind)
            .and_then(|kind| fit_within(kind, unscaled, bounds))
            .map(|fit| fit.scale);
        let min = fit_scale.or(self.options.min_zoom).unwrap_or(1.0);
        let max = self.options.max_zoom.unwrap_or(DEFAULT_MAX_ZOOM);
        let target = focal::double_tap_target(self.state.scale(), min, max);
        tracing::debug!(from = self.state.scale(), to = target, "double tap");
        if let Err(PanZoomError::Geometry(err)) =
            self.zoom_to(target, focal, MoveOptions::default())
        {
            self.abort(err);
        }
    }

    fn set_class_enabled(
        &mut self,
        class: GestureClass,
        enabled: bool,
    ) -> Result<(), PanZoomError> {
        self.surface()?;
        for signal in self.normalizer.set_enabled(class, enabled) {
            if let GestureSignal::End(kind) = signal {
                self.end_gesture(kind);
            }
        }
        let name = match class {
            GestureClass::Pan => "pan",
            GestureClass::Zoom => "zoom",
        };
        if enabled {
            tracing::info!(class = name, "gestures enabled");
        } else {
            tracing::info!(class = name, "gestures disabled");
        }
        Ok(())
    }

    /// Starts `cycle`, ending the cycle it interrupts.
    fn begin(&mut self, cycle: Cycle) {
        if let Some(previous) = self.scheduler.begin(cycle) {
            if matches!(previous, Cycle::Animated { observed: true, .. }) {
                self.restore_transition();
            }
            self.emit_end(previous);
        }
        self.emit(EventKind::Start);
        if let Cycle::Gesture(kind) = cycle {
            self.emit(gesture_events(kind)[0]);
        }
    }

    /// Ends the interaction after a geometry failure, reporting the last
    /// known values.
    fn abort(&mut self, err: GeometryError) {
        tracing::debug!(%err, "aborting interaction");
        let _ = self.normalizer.cancel_all();
        self.resize.cancel();
        if let Some(cycle) = self.scheduler.abort() {
            if matches!(cycle, Cycle::Animated { observed: true, .. }) {
                self.restore_transition();
            }
            self.emit_end(cycle);
        }
    }

    /// Drops every running interaction without events.
    fn cancel_interaction(&mut self) {
        let _ = self.normalizer.cancel_all();
        self.scheduler.abort();
        self.resize.cancel();
    }

    fn restore_transition(&mut self) {
        if let Ok(surface) = self.surface_mut() {
            surface.set_transition(None);
        }
    }

    fn emit(&mut self, kind: EventKind) {
        let event = PanZoomEvent::new(kind, self.state, self.unscaled);
        self.emitter.emit(&event);
    }

    fn emit_update(&mut self, cycle: Cycle) {
        self.emit(EventKind::Update);
        if let Cycle::Gesture(kind) = cycle {
            self.emit(gesture_events(kind)[1]);
        }
    }

    fn emit_end(&mut self, cycle: Cycle) {
        self.emit(EventKind::End);
        if let Cycle::Gesture(kind) = cycle {
            self.emit(gesture_events(kind)[2]);
        }
    }
}

/// Start, move and end events specific to a gesture.
fn gesture_events(kind: GestureKind) -> [EventKind; 3] {
    match kind.class() {
        GestureClass::Pan => [EventKind::PanStart, EventKind::Pan, EventKind::PanEnd],
        GestureClass::Zoom => [EventKind::ZoomStart, EventKind::Zoom, EventKind::ZoomEnd],
    }
}

/// Transform placing the point at fraction `focal` of the element in the
/// middle of `bounds`.
fn centered(focal: Point, scale: f64, unscaled: Size, bounds: Rect) -> TransformState {
    let center = bounds.center();
    TransformState::new(
        center.x - unscaled.width * scale * focal.x,
        center.y - unscaled.height * scale * focal.y,
        scale,
    )
}

fn warn_conflicts(conflicts: StyleConflicts) {
    if conflicts.contains(StyleConflicts::TRANSFORM) {
        tracing::warn!("element already has a transform; it will be overwritten");
    }
    if conflicts.contains(StyleConflicts::TRANSFORM_ORIGIN) {
        tracing::warn!("element transform-origin will be reset to `0 0`");
    }
    if conflicts.contains(StyleConflicts::TOUCH_ACTION) {
        tracing::warn!("element touch-action will be set to `none`");
    }
}
