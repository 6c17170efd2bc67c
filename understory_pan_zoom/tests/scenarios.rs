// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios driving a `PanZoom` over a `MemorySurface`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Point, Rect, Size};
use understory_pan_zoom::{
    EventKind, FitKind, GeometryError, InitialFit, MemorySurface, MoveOptions, PanZoom,
    PanZoomError, PanZoomEvent, PanZoomOptions, RawInput, StyleConflicts, Surface, TransformState,
    TransitionSpec, WheelDelta,
};

const ALL_EVENTS: [EventKind; 9] = [
    EventKind::Start,
    EventKind::Update,
    EventKind::End,
    EventKind::PanStart,
    EventKind::Pan,
    EventKind::PanEnd,
    EventKind::ZoomStart,
    EventKind::Zoom,
    EventKind::ZoomEnd,
];

type Log = Rc<RefCell<Vec<PanZoomEvent>>>;

fn record(pz: &mut PanZoom<MemorySurface>) -> Log {
    let log: Log = Rc::default();
    for kind in ALL_EVENTS {
        let log = Rc::clone(&log);
        pz.on(kind, move |event| log.borrow_mut().push(*event)).unwrap();
    }
    log
}

fn kinds(log: &Log) -> Vec<EventKind> {
    log.borrow().iter().map(|event| event.kind).collect()
}

fn count(log: &Log, kind: EventKind) -> usize {
    log.borrow().iter().filter(|event| event.kind == kind).count()
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn square() -> MemorySurface {
    MemorySurface::new(Size::new(100.0, 100.0), Rect::new(0.0, 0.0, 100.0, 100.0))
}

fn wide() -> MemorySurface {
    MemorySurface::new(Size::new(200.0, 100.0), Rect::new(0.0, 0.0, 100.0, 100.0))
}

fn unbounded() -> PanZoomOptions {
    PanZoomOptions::default().with_bounds(false)
}

fn wheel(pz: &mut PanZoom<MemorySurface>, now: Duration, at: Point, pixels: f64) {
    let input = RawInput::Wheel {
        position: at,
        delta: WheelDelta::Pixels(pixels),
    };
    assert!(pz.handle_input(input, now).unwrap());
}

fn pointer(pz: &mut PanZoom<MemorySurface>, input: RawInput) -> bool {
    pz.handle_input(input, Duration::ZERO).unwrap()
}

fn down(x: f64, y: f64) -> RawInput {
    RawInput::PointerDown {
        position: Point::new(x, y),
    }
}

fn moved(x: f64, y: f64) -> RawInput {
    RawInput::PointerMove {
        position: Point::new(x, y),
    }
}

fn up(x: f64, y: f64) -> RawInput {
    RawInput::PointerUp {
        position: Point::new(x, y),
    }
}

fn tap(pz: &mut PanZoom<MemorySurface>, now: Duration, x: f64, y: f64) {
    let input = RawInput::Tap {
        position: Point::new(x, y),
    };
    pz.handle_input(input, now).unwrap();
}

fn assert_state(actual: TransformState, x: f64, y: f64, scale: f64) {
    assert!(
        (actual.x() - x).abs() < 1e-9
            && (actual.y() - y).abs() < 1e-9
            && (actual.scale() - scale).abs() < 1e-9,
        "expected ({x}, {y}, {scale}), got {actual:?}"
    );
}

/// Runs an animated move to completion.
fn finish_transition(pz: &mut PanZoom<MemorySurface>) {
    assert!(pz.frame().unwrap());
    assert!(pz.transition_end().unwrap());
}

#[test]
fn wheel_zoom_in_and_back_out() {
    let mut pz = PanZoom::attach(square(), PanZoomOptions::default().with_max_zoom(4.0)).unwrap();
    let log = record(&mut pz);
    let corner = Point::new(0.0, 0.0);

    for (now, pixels) in [(0, -20.0), (10, -10.0), (20, -20.0)] {
        wheel(&mut pz, ms(now), corner, pixels);
        assert!(pz.frame().unwrap());
    }
    assert_eq!(pz.next_deadline(), Some(ms(70)));
    assert!(!pz.poll(ms(69)).unwrap());
    assert!(pz.poll(ms(70)).unwrap());

    assert_eq!(count(&log, EventKind::Start), 1);
    assert_eq!(count(&log, EventKind::Update), 3);
    assert_eq!(count(&log, EventKind::End), 1);
    assert_eq!(count(&log, EventKind::ZoomStart), 1);
    assert_eq!(count(&log, EventKind::Zoom), 3);
    assert_eq!(count(&log, EventKind::ZoomEnd), 1);
    assert_eq!(count(&log, EventKind::PanStart), 0);

    let end = *log.borrow().last().unwrap();
    assert_eq!(end.kind, EventKind::ZoomEnd);
    assert!((end.width - 150.0).abs() < 1e-9);
    assert!((end.height - 150.0).abs() < 1e-9);
    assert!(end.x.abs() < 1e-9 && end.y.abs() < 1e-9);
    assert_eq!((end.unscaled_width, end.unscaled_height), (100.0, 100.0));
    assert!(!pz.moving());

    // Zooming back out around the middle of the element lands on the origin.
    wheel(&mut pz, ms(100), Point::new(50.0, 50.0), 50.0);
    pz.frame().unwrap();
    assert_state(pz.transform(), 0.0, 0.0, 1.0);
}

#[test]
fn deltas_within_a_frame_coalesce_into_one_write() {
    let mut pz = PanZoom::attach(square(), unbounded()).unwrap();
    let log = record(&mut pz);

    pointer(&mut pz, down(10.0, 10.0));
    for step in 1..=5 {
        assert!(pointer(&mut pz, moved(10.0 + f64::from(step), 10.0)));
    }
    assert!(pz.wants_frame());
    assert!(pz.frame().unwrap());
    assert!(!pz.frame().unwrap());

    let writes = pz.surface().unwrap().writes();
    assert_eq!(
        writes,
        [TransformState::IDENTITY, TransformState::new(5.0, 0.0, 1.0)]
    );
    assert_eq!(
        kinds(&log),
        [
            EventKind::Start,
            EventKind::PanStart,
            EventKind::Update,
            EventKind::Pan,
        ]
    );

    pointer(&mut pz, up(15.0, 10.0));
    assert_eq!(count(&log, EventKind::End), 1);
    assert_eq!(count(&log, EventKind::PanEnd), 1);
    assert!(!pz.moving());
}

#[test]
fn start_events_carry_the_values_before_the_change() {
    let mut pz = PanZoom::attach(square(), unbounded()).unwrap();
    let log = record(&mut pz);
    pointer(&mut pz, down(10.0, 10.0));
    pointer(&mut pz, moved(30.0, 10.0));
    pz.frame().unwrap();

    let log = log.borrow();
    assert_eq!((log[0].kind, log[0].x), (EventKind::Start, 0.0));
    assert_eq!((log[2].kind, log[2].x), (EventKind::Update, 20.0));
}

#[test]
fn panning_stops_at_the_far_bound() {
    let mut pz = PanZoom::attach(square(), PanZoomOptions::default()).unwrap();
    assert!(pz.zoom_to(4.0, Point::ZERO, MoveOptions::IMMEDIATE).unwrap());
    pz.frame().unwrap();
    assert_state(pz.transform(), 0.0, 0.0, 4.0);

    pz.pan_by(-500.0, -500.0, MoveOptions::IMMEDIATE).unwrap();
    pz.frame().unwrap();
    assert_state(pz.transform(), -300.0, -300.0, 4.0);

    // Dragging clamps the same way, every frame.
    pz.pan_to(0.0, 0.0, MoveOptions::IMMEDIATE).unwrap();
    pz.frame().unwrap();
    pointer(&mut pz, down(50.0, 50.0));
    pointer(&mut pz, moved(-450.0, -450.0));
    pz.frame().unwrap();
    assert_eq!(
        pz.surface().unwrap().last_transform(),
        Some(TransformState::new(-300.0, -300.0, 4.0))
    );
}

#[test]
fn wheel_end_waits_for_the_pending_frame() {
    let mut pz = PanZoom::attach(square(), PanZoomOptions::default()).unwrap();
    let log = record(&mut pz);
    wheel(&mut pz, ms(0), Point::new(50.0, 50.0), -10.0);
    assert!(pz.poll(ms(50)).unwrap());
    assert_eq!(count(&log, EventKind::End), 0);
    assert!(pz.moving());

    pz.frame().unwrap();
    assert_eq!(
        kinds(&log),
        [
            EventKind::Start,
            EventKind::ZoomStart,
            EventKind::Update,
            EventKind::Zoom,
            EventKind::End,
            EventKind::ZoomEnd,
        ]
    );
    assert!(!pz.moving());
}

#[test]
fn a_drag_started_before_the_last_frame_gets_its_own_cycle() {
    let mut pz = PanZoom::attach(square(), unbounded()).unwrap();
    let log = record(&mut pz);
    pointer(&mut pz, down(10.0, 10.0));
    pointer(&mut pz, moved(20.0, 10.0));
    pointer(&mut pz, up(20.0, 10.0));
    assert!(pz.wants_frame());

    pointer(&mut pz, down(30.0, 10.0));
    pointer(&mut pz, moved(45.0, 10.0));
    pz.frame().unwrap();
    assert!(pz.moving(), "the second drag is still running");
    pointer(&mut pz, up(45.0, 10.0));
    assert!(!pz.moving());

    let events: Vec<_> = log
        .borrow()
        .iter()
        .filter(|event| {
            matches!(
                event.kind,
                EventKind::Start | EventKind::Update | EventKind::End
            )
        })
        .map(|event| (event.kind, event.x))
        .collect();
    assert_eq!(
        events,
        [
            (EventKind::Start, 0.0),
            (EventKind::End, 10.0),
            (EventKind::Start, 10.0),
            (EventKind::Update, 25.0),
            (EventKind::End, 25.0),
        ]
    );
    assert_eq!(count(&log, EventKind::PanStart), 2);
    assert_eq!(count(&log, EventKind::PanEnd), 2);
}

#[test]
fn a_wheel_tick_before_the_last_frame_starts_a_new_gesture() {
    let mut pz = PanZoom::attach(square(), PanZoomOptions::default()).unwrap();
    let log = record(&mut pz);
    let center = Point::new(50.0, 50.0);
    wheel(&mut pz, ms(0), center, -10.0);
    assert!(pz.poll(ms(50)).unwrap());
    wheel(&mut pz, ms(60), center, -10.0);
    assert_eq!(count(&log, EventKind::ZoomEnd), 1);
    assert_eq!(count(&log, EventKind::ZoomStart), 2);

    pz.frame().unwrap();
    assert!(pz.moving());
    let deadline = pz.next_deadline().unwrap();
    pz.poll(deadline).unwrap();
    assert!(!pz.moving());
    assert_eq!(count(&log, EventKind::ZoomEnd), 2);
    assert_state(pz.transform(), -10.0, -10.0, 1.2);
}

#[test]
fn pinch_zooms_around_the_touch_midpoint() {
    let mut pz = PanZoom::attach(square(), unbounded()).unwrap();
    let log = record(&mut pz);
    pointer(
        &mut pz,
        RawInput::PinchStart {
            a: Point::new(40.0, 50.0),
            b: Point::new(60.0, 50.0),
        },
    );
    // 20px -> 120px apart: +100 * 1.3 * 0.01.
    pointer(
        &mut pz,
        RawInput::PinchMove {
            a: Point::new(-10.0, 50.0),
            b: Point::new(110.0, 50.0),
        },
    );
    pz.frame().unwrap();
    pointer(&mut pz, RawInput::PinchEnd);

    assert_state(pz.transform(), -65.0, -65.0, 2.3);
    assert_eq!(count(&log, EventKind::ZoomStart), 1);
    assert_eq!(count(&log, EventKind::ZoomEnd), 1);
}

#[test]
fn double_tap_toggles_between_zoom_limits() {
    let mut pz = PanZoom::attach(square(), PanZoomOptions::default()).unwrap();
    let log = record(&mut pz);

    tap(&mut pz, ms(0), 50.0, 50.0);
    tap(&mut pz, ms(100), 50.0, 50.0);
    assert_eq!(
        pz.surface().unwrap().transition(),
        Some(TransitionSpec::default())
    );
    finish_transition(&mut pz);
    assert_state(pz.transform(), -150.0, -150.0, 4.0);
    assert_eq!(pz.surface().unwrap().transition(), None);
    assert_eq!(
        kinds(&log),
        [
            EventKind::Start,
            EventKind::Update,
            EventKind::Update,
            EventKind::End,
        ]
    );

    tap(&mut pz, ms(1000), 50.0, 50.0);
    tap(&mut pz, ms(1100), 50.0, 50.0);
    finish_transition(&mut pz);
    assert_state(pz.transform(), 35.0, 35.0, 0.3);
}

#[test]
fn double_tap_zooms_out_to_the_initial_fit() {
    let options = PanZoomOptions::default().with_initial_fit(InitialFit::Contain);
    let mut pz = PanZoom::attach(wide(), options).unwrap();
    assert_state(pz.transform(), 0.0, 25.0, 0.5);

    tap(&mut pz, ms(0), 50.0, 50.0);
    tap(&mut pz, ms(10), 50.0, 50.0);
    finish_transition(&mut pz);
    assert_state(pz.transform(), -350.0, -150.0, 4.0);

    tap(&mut pz, ms(1000), 50.0, 50.0);
    tap(&mut pz, ms(1010), 50.0, 50.0);
    finish_transition(&mut pz);
    assert_state(pz.transform(), 0.0, 25.0, 0.5);
}

#[test]
fn initial_fit_is_silent_and_immediate() {
    let options = PanZoomOptions::default().with_initial_fit(InitialFit::Cover);
    let mut pz = PanZoom::new(options);
    let log = record(&mut pz);
    pz.init(wide()).unwrap();

    assert!(log.borrow().is_empty());
    assert!(!pz.wants_frame());
    assert_eq!(
        pz.surface().unwrap().writes(),
        [TransformState::new(-50.0, 0.0, 1.0)]
    );
}

#[test]
fn fits_bypass_clamping() {
    let options = PanZoomOptions::default().with_min_zoom(1.0);
    let mut pz = PanZoom::attach(wide(), options).unwrap();
    let log = record(&mut pz);

    let contain = pz.fit_size(FitKind::Contain).unwrap().unwrap();
    assert_eq!(contain.scale, 0.5);
    assert!(pz.contain(true).unwrap());
    finish_transition(&mut pz);
    assert_state(pz.transform(), 0.0, 25.0, 0.5);
    // No correction cycle followed.
    assert_eq!(count(&log, EventKind::Start), 1);

    assert!(pz.cover(false).unwrap());
    assert!(pz.frame().unwrap());
    assert_state(pz.transform(), -50.0, 0.0, 1.0);
    assert_eq!(count(&log, EventKind::End), 2);

    assert!(pz.scale_down(false).unwrap());
    pz.frame().unwrap();
    assert_state(pz.transform(), 0.0, 25.0, 0.5);

    pz.pan_by(10.0, 0.0, MoveOptions::new(false, false)).unwrap();
    pz.frame().unwrap();
    assert!(pz.center(false).unwrap());
    pz.frame().unwrap();
    assert!(!pz.center(false).unwrap());
}

#[test]
fn center_on_puts_a_point_in_the_middle() {
    let mut pz = PanZoom::attach(square(), PanZoomOptions::default()).unwrap();
    pz.center_on(0.25, 0.75, 2.0, MoveOptions::IMMEDIATE).unwrap();
    pz.frame().unwrap();
    assert_state(pz.transform(), 0.0, -100.0, 2.0);
}

#[test]
fn operations_fail_before_init_and_after_destroy() {
    let mut pz = PanZoom::<MemorySurface>::new(PanZoomOptions::default());
    let input = down(1.0, 1.0);
    assert_eq!(
        pz.handle_input(input, Duration::ZERO),
        Err(PanZoomError::NotInitialized)
    );
    assert_eq!(
        pz.zoom_to(2.0, Point::ZERO, MoveOptions::default()),
        Err(PanZoomError::NotInitialized)
    );
    assert_eq!(pz.reset(MoveOptions::default()), Err(PanZoomError::NotInitialized));
    assert_eq!(pz.disable_pan(), Err(PanZoomError::NotInitialized));
    assert_eq!(pz.enable(), Err(PanZoomError::NotInitialized));
    assert_eq!(
        pz.on(EventKind::Start, |_| {}).err(),
        Some(PanZoomError::NotInitialized)
    );
    assert!(pz.pan_enabled(), "failed toggles leave the state alone");

    pz.init(square()).unwrap();
    pz.zoom_to(2.0, Point::ZERO, MoveOptions::default()).unwrap();
    assert!(pz.surface().unwrap().transition().is_some());
    let surface = pz.destroy().unwrap();
    assert_eq!(surface.transition(), None);
    assert!(!pz.wants_frame());
    assert_eq!(pz.poll(ms(1)), Err(PanZoomError::Destroyed));
    assert_eq!(pz.cover(false), Err(PanZoomError::Destroyed));
    assert_eq!(pz.handle_input(input, ms(1)), Err(PanZoomError::Destroyed));
    assert_eq!(pz.enable_zoom(), Err(PanZoomError::Destroyed));
    assert_eq!(pz.disable(), Err(PanZoomError::Destroyed));
    assert!(pz.enabled());
    assert_eq!(
        pz.on(EventKind::End, |_| {}).err(),
        Some(PanZoomError::Destroyed)
    );
    assert!(!pz.initialized());
}

#[test]
fn disposed_surfaces_end_the_gesture_with_last_known_values() {
    let mut pz = PanZoom::attach(square(), unbounded()).unwrap();
    let log = record(&mut pz);
    pointer(&mut pz, down(50.0, 50.0));
    pointer(&mut pz, moved(60.0, 50.0));
    pz.frame().unwrap();

    pz.surface_mut().unwrap().dispose();
    assert!(!pointer(&mut pz, moved(70.0, 50.0)));
    assert!(!pz.moving());

    let log = log.borrow();
    let end = log[log.len() - 2];
    assert_eq!(end.kind, EventKind::End);
    assert_eq!((end.x, end.unscaled_width), (10.0, 100.0));
    assert_eq!(log[log.len() - 1].kind, EventKind::PanEnd);
    drop(log);

    assert_eq!(
        pz.pan_by(1.0, 1.0, MoveOptions::default()),
        Err(PanZoomError::Geometry(GeometryError::Disposed))
    );
}

#[test]
fn caller_owned_transitions_never_end() {
    let surface = square().with_transform_transition(true);
    let mut pz = PanZoom::attach(surface, unbounded()).unwrap();
    let log = record(&mut pz);

    assert!(pz.pan_to(20.0, 0.0, MoveOptions::default()).unwrap());
    assert_eq!(pz.surface().unwrap().transition(), None);
    pz.frame().unwrap();
    assert!(!pz.transition_end().unwrap());
    assert_eq!(kinds(&log), [EventKind::Start, EventKind::Update]);
    assert!(!pz.moving());
}

#[test]
fn newer_moves_supersede_older_transitions() {
    let mut pz = PanZoom::attach(square(), unbounded()).unwrap();
    let log = record(&mut pz);

    pz.pan_to(50.0, 0.0, MoveOptions::default()).unwrap();
    pz.frame().unwrap();
    pz.pan_to(80.0, 0.0, MoveOptions::default()).unwrap();
    // The first transition's end arrives late and is ignored.
    assert!(!pz.transition_end().unwrap());
    finish_transition(&mut pz);

    assert_eq!(
        kinds(&log),
        [
            EventKind::Start,
            EventKind::Update,
            EventKind::End,
            EventKind::Start,
            EventKind::Update,
            EventKind::Update,
            EventKind::End,
        ]
    );
    let xs: Vec<f64> = pz.surface().unwrap().writes().iter().map(|t| t.x()).collect();
    assert_eq!(xs, [0.0, 50.0, 80.0]);
}

#[test]
fn gestures_interrupt_animations() {
    let mut pz = PanZoom::attach(square(), unbounded()).unwrap();
    let log = record(&mut pz);
    pz.pan_to(50.0, 0.0, MoveOptions::default()).unwrap();
    pz.frame().unwrap();

    pointer(&mut pz, down(60.0, 10.0));
    pointer(&mut pz, moved(70.0, 10.0));
    assert_eq!(pz.surface().unwrap().transition(), None);
    assert!(!pz.transition_end().unwrap());
    assert_eq!(
        kinds(&log)[2..],
        [EventKind::End, EventKind::Start, EventKind::PanStart]
    );
}

#[test]
fn resizing_the_bounds_moves_the_element_back_inside() {
    let mut pz = PanZoom::attach(square(), PanZoomOptions::default()).unwrap();
    pz.zoom_to(2.0, Point::ZERO, MoveOptions::IMMEDIATE).unwrap();
    pz.frame().unwrap();
    pz.pan_by(-100.0, -100.0, MoveOptions::IMMEDIATE).unwrap();
    pz.frame().unwrap();
    assert_state(pz.transform(), -100.0, -100.0, 2.0);

    let log = record(&mut pz);
    pz.surface_mut()
        .unwrap()
        .set_bounds(Rect::new(0.0, 0.0, 300.0, 300.0));
    pz.resize(ms(0)).unwrap();
    pz.resize(ms(100)).unwrap();
    assert_eq!(pz.next_deadline(), Some(ms(400)));
    assert!(!pz.poll(ms(399)).unwrap());
    assert!(pz.poll(ms(400)).unwrap());
    finish_transition(&mut pz);

    assert_state(pz.transform(), 0.0, 0.0, 2.0);
    assert_eq!(
        kinds(&log),
        [
            EventKind::Start,
            EventKind::Update,
            EventKind::Update,
            EventKind::End,
        ]
    );
}

#[test]
fn reset_is_idempotent() {
    let mut pz = PanZoom::attach(square(), PanZoomOptions::default()).unwrap();
    pz.zoom_to(2.0, Point::new(0.5, 0.5), MoveOptions::default())
        .unwrap();
    finish_transition(&mut pz);
    assert_state(pz.transform(), -50.0, -50.0, 2.0);

    assert!(pz.reset(MoveOptions::default()).unwrap());
    finish_transition(&mut pz);
    let once = pz.transform();
    assert!(!pz.reset(MoveOptions::default()).unwrap());
    assert_eq!(pz.transform(), once);
    assert_eq!(once, TransformState::IDENTITY);
}

#[test]
fn disabling_pan_ends_a_drag() {
    let mut pz = PanZoom::attach(square(), unbounded()).unwrap();
    let log = record(&mut pz);
    pointer(&mut pz, down(10.0, 10.0));
    pointer(&mut pz, moved(20.0, 10.0));
    pz.frame().unwrap();

    pz.disable_pan().unwrap();
    assert!(!pz.moving());
    assert_eq!(count(&log, EventKind::PanEnd), 1);
    assert!(!pointer(&mut pz, moved(40.0, 10.0)));

    pz.enable_pan().unwrap();
    pointer(&mut pz, down(20.0, 10.0));
    assert!(pointer(&mut pz, moved(25.0, 10.0)));
}

#[test]
fn listeners_can_be_removed() {
    let mut pz = PanZoom::attach(square(), unbounded()).unwrap();
    let hits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&hits);
    let id = pz
        .on(EventKind::Update, move |_| *counter.borrow_mut() += 1)
        .unwrap();

    pz.pan_by(5.0, 0.0, MoveOptions::IMMEDIATE).unwrap();
    pz.frame().unwrap();
    assert_eq!(pz.off(id), Ok(true));
    assert_eq!(pz.off(id), Ok(false));
    pz.pan_by(5.0, 0.0, MoveOptions::IMMEDIATE).unwrap();
    pz.frame().unwrap();
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn init_prepares_conflicting_surfaces() {
    let surface = square().with_style_conflicts(StyleConflicts::all());
    let pz = PanZoom::attach(surface, PanZoomOptions::default()).unwrap();
    let surface = pz.surface().unwrap();
    assert!(surface.is_prepared());
    assert_eq!(surface.style_conflicts(), StyleConflicts::TRANSFORM);
}

#[cfg(feature = "serde")]
#[test]
fn options_load_from_json() {
    let options: PanZoomOptions = serde_json::from_str(
        r#"{ "minZoom": 1, "maxZoom": 3, "bounds": { "left": 10 }, "zoomEnabled": false }"#,
    )
    .unwrap();
    let pz = PanZoom::attach(square(), options).unwrap();
    assert!(pz.pan_enabled());
    assert!(!pz.zoom_enabled());
    assert_eq!(pz.options().max_zoom, Some(3.0));
}
