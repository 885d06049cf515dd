//! Events
//!
//! The event object handed to every listener. Handlers only ever see a
//! shared reference, so the flags a handler may flip live in `Cell`s.

use std::cell::Cell;

use crate::TargetId;

/// Dispatch phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventPhase {
    #[default]
    None,
    Capturing,
    AtTarget,
    Bubbling,
}

/// Parameters for constructing an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInit {
    pub name: String,
    pub bubbles: bool,
    pub cancelable: bool,
}

impl EventInit {
    /// Bubbling, non-cancelable event (what a user click looks like)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bubbles: true,
            cancelable: false,
        }
    }

    pub fn bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }
}

/// A dispatched event
#[derive(Debug)]
pub struct Event {
    name: String,
    target: TargetId,
    bubbles: bool,
    cancelable: bool,
    current_target: Cell<Option<TargetId>>,
    phase: Cell<EventPhase>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
    immediate_propagation_stopped: Cell<bool>,
}

impl Event {
    pub(crate) fn new(init: EventInit, target: TargetId) -> Self {
        Self {
            name: init.name,
            target,
            bubbles: init.bubbles,
            cancelable: init.cancelable,
            current_target: Cell::new(None),
            phase: Cell::new(EventPhase::None),
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
            immediate_propagation_stopped: Cell::new(false),
        }
    }

    /// Event name, e.g. `"click"`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The target the event was dispatched on
    pub fn target(&self) -> TargetId {
        self.target
    }

    /// The target whose listeners are currently running
    pub fn current_target(&self) -> Option<TargetId> {
        self.current_target.get()
    }

    pub fn phase(&self) -> EventPhase {
        self.phase.get()
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// Prevent default action (only honoured on cancelable events)
    pub fn prevent_default(&self) {
        if self.cancelable {
            self.default_prevented.set(true);
        }
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Stop after the listeners of the current target have run
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    /// Stop now, skipping the remaining listeners of the current target
    pub fn stop_immediate_propagation(&self) {
        self.propagation_stopped.set(true);
        self.immediate_propagation_stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    pub(crate) fn is_immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped.get()
    }

    pub(crate) fn enter(&self, current: TargetId, phase: EventPhase) {
        self.current_target.set(Some(current));
        self.phase.set(phase);
    }

    pub(crate) fn finish(&self) {
        self.current_target.set(None);
        self.phase.set(EventPhase::None);
    }
}
