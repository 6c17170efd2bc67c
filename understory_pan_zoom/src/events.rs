// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle events and the observer list that dispatches them.
//!
//! Every interaction cycle emits `start` before any movement, one `update`
//! per rendered frame (plus one when an animated transition completes) and a
//! final `end`. Pointer pans additionally emit `panstart`/`pan`/`panend`;
//! wheel and pinch zooms emit `zoomstart`/`zoom`/`zoomend`.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Size;

use crate::TransformState;

/// Names of the events a [`PanZoom`](crate::PanZoom) emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// A gesture or programmatic move is about to change the transform.
    Start,
    /// A new transform was written.
    Update,
    /// Movement stopped.
    End,
    /// A pointer pan started.
    PanStart,
    /// A pointer pan wrote a new transform.
    Pan,
    /// A pointer pan ended.
    PanEnd,
    /// A wheel or pinch zoom started.
    ZoomStart,
    /// A wheel or pinch zoom wrote a new transform.
    Zoom,
    /// A wheel or pinch zoom ended.
    ZoomEnd,
}

impl EventKind {
    /// The conventional lowercase event name, e.g. `"panstart"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Update => "update",
            Self::End => "end",
            Self::PanStart => "panstart",
            Self::Pan => "pan",
            Self::PanEnd => "panend",
            Self::ZoomStart => "zoomstart",
            Self::Zoom => "zoom",
            Self::ZoomEnd => "zoomend",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload delivered to listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomEvent {
    /// Which event this is.
    pub kind: EventKind,
    /// Horizontal translation.
    pub x: f64,
    /// Vertical translation.
    pub y: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Rendered width (`unscaled_width * scale`).
    pub width: f64,
    /// Rendered height (`unscaled_height * scale`).
    pub height: f64,
    /// Layout width of the element.
    pub unscaled_width: f64,
    /// Layout height of the element.
    pub unscaled_height: f64,
}

impl PanZoomEvent {
    /// Builds the payload for `kind` from a transform and the element's layout size.
    #[must_use]
    pub fn new(kind: EventKind, state: TransformState, unscaled: Size) -> Self {
        let rendered = state.rendered_size(unscaled);
        Self {
            kind,
            x: state.x(),
            y: state.y(),
            scale: state.scale(),
            width: rendered.width,
            height: rendered.height,
            unscaled_width: unscaled.width,
            unscaled_height: unscaled.height,
        }
    }
}

/// Handle returned by [`Emitter::on`], used to remove the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&PanZoomEvent)>;

/// Observer list keyed by event kind.
///
/// Listeners of one kind run in registration order.
#[derive(Default)]
pub struct Emitter {
    listeners: HashMap<EventKind, Vec<(ListenerId, Listener)>>,
    next_id: u64,
}

impl Emitter {
    /// Creates an emitter without listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for events of `kind`.
    pub fn on(&mut self, kind: EventKind, listener: impl FnMut(&PanZoomEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        for list in self.listeners.values_mut() {
            if let Some(index) = list.iter().position(|(other, _)| *other == id) {
                list.remove(index);
                return true;
            }
        }
        false
    }

    /// Removes every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Number of listeners registered for `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Calls every listener registered for `event.kind`.
    pub fn emit(&mut self, event: &PanZoomEvent) {
        if let Some(list) = self.listeners.get_mut(&event.kind) {
            for (_, listener) in list.iter_mut() {
                listener(event);
            }
        }
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(EventKind, usize)> = self
            .listeners
            .iter()
            .map(|(kind, list)| (*kind, list.len()))
            .collect();
        counts.sort();
        f.debug_struct("Emitter")
            .field("listeners", &counts)
            .field("next_id", &self.next_id)
            .finish()
    }
}
