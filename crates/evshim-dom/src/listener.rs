//! Native listener table

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::{Event, TargetId};

/// A shared event callback.
///
/// Identity is the identity of the shared allocation: clones of a handler
/// compare equal, two handlers built from identical closures do not. This
/// is what removal matches on.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn(&Event)>);

impl Handler {
    pub fn new(f: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }

    pub fn downgrade(&self) -> WeakHandler {
        WeakHandler(Rc::downgrade(&self.0))
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.addr(), other.addr())
    }
}

impl Eq for Handler {}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", self.addr())
    }
}

/// Non-owning reference to a [`Handler`].
///
/// While a handler is registered the listener table keeps it alive, so a
/// failed upgrade means it is registered nowhere.
#[derive(Clone)]
pub struct WeakHandler(Weak<dyn Fn(&Event)>);

impl WeakHandler {
    pub fn upgrade(&self) -> Option<Handler> {
        self.0.upgrade().map(Handler)
    }
}

impl fmt::Debug for WeakHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeakHandler({:p})", self.0.as_ptr() as *const ())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Listener {
    pub(crate) handler: Handler,
    pub(crate) capture: bool,
    /// Set on removal so an in-flight dispatch snapshot skips it
    pub(crate) removed: Rc<Cell<bool>>,
}

#[derive(Debug, Default)]
pub(crate) struct ListenerStore {
    map: HashMap<TargetId, HashMap<String, Vec<Listener>>>,
}

impl ListenerStore {
    /// Returns false when the registration was a duplicate and ignored
    pub(crate) fn add(
        &mut self,
        target: TargetId,
        event: &str,
        handler: Handler,
        capture: bool,
        dedupe: bool,
    ) -> bool {
        let listeners = self
            .map
            .entry(target)
            .or_default()
            .entry(event.to_string())
            .or_default();

        if dedupe
            && listeners
                .iter()
                .any(|existing| existing.capture == capture && existing.handler == handler)
        {
            return false;
        }

        listeners.push(Listener {
            handler,
            capture,
            removed: Rc::new(Cell::new(false)),
        });
        true
    }

    pub(crate) fn remove(
        &mut self,
        target: TargetId,
        event: &str,
        handler: &Handler,
        capture: bool,
    ) -> bool {
        let Some(events) = self.map.get_mut(&target) else {
            return false;
        };
        let Some(listeners) = events.get_mut(event) else {
            return false;
        };

        if let Some(pos) = listeners
            .iter()
            .position(|listener| listener.capture == capture && listener.handler == *handler)
        {
            let listener = listeners.remove(pos);
            listener.removed.set(true);
            if listeners.is_empty() {
                events.remove(event);
            }
            if events.is_empty() {
                self.map.remove(&target);
            }
            return true;
        }

        false
    }

    /// Snapshot of the listeners for one target and event, in registration order
    pub(crate) fn snapshot(&self, target: TargetId, event: &str) -> Vec<Listener> {
        self.map
            .get(&target)
            .and_then(|events| events.get(event))
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn contains(
        &self,
        target: TargetId,
        event: &str,
        handler: &Handler,
        capture: bool,
    ) -> bool {
        self.map
            .get(&target)
            .and_then(|events| events.get(event))
            .is_some_and(|listeners| {
                listeners
                    .iter()
                    .any(|listener| listener.capture == capture && listener.handler == *handler)
            })
    }

    pub(crate) fn count(&self, target: TargetId, event: &str) -> usize {
        self.map
            .get(&target)
            .and_then(|events| events.get(event))
            .map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeId;

    fn node(n: u32) -> TargetId {
        TargetId::Node(NodeId::new(1, n))
    }

    #[test]
    fn test_handler_identity() {
        let a = Handler::new(|_| {});
        let b = Handler::new(|_| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_weak_handler() {
        let handler = Handler::new(|_| {});
        let weak = handler.downgrade();
        assert_eq!(weak.upgrade(), Some(handler.clone()));
        drop(handler);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_add_dedupes_same_pair() {
        let mut store = ListenerStore::default();
        let handler = Handler::new(|_| {});

        assert!(store.add(node(1), "click", handler.clone(), false, true));
        assert!(!store.add(node(1), "click", handler.clone(), false, true));
        // Capture flag is part of the identity
        assert!(store.add(node(1), "click", handler.clone(), true, true));
        assert_eq!(store.count(node(1), "click"), 2);
    }

    #[test]
    fn test_add_without_dedupe() {
        let mut store = ListenerStore::default();
        let handler = Handler::new(|_| {});

        store.add(node(1), "click", handler.clone(), false, false);
        store.add(node(1), "click", handler, false, false);
        assert_eq!(store.count(node(1), "click"), 2);
    }

    #[test]
    fn test_remove_marks_and_prunes() {
        let mut store = ListenerStore::default();
        let handler = Handler::new(|_| {});
        store.add(node(1), "click", handler.clone(), false, true);

        let snapshot = store.snapshot(node(1), "click");
        assert!(store.remove(node(1), "click", &handler, false));
        assert!(snapshot[0].removed.get());
        assert!(store.map.is_empty());

        assert!(!store.remove(node(1), "click", &handler, false));
    }

    #[test]
    fn test_remove_requires_matching_capture() {
        let mut store = ListenerStore::default();
        let handler = Handler::new(|_| {});
        store.add(node(1), "click", handler.clone(), true, true);

        assert!(!store.remove(node(1), "click", &handler, false));
        assert!(store.contains(node(1), "click", &handler, true));
    }
}
