//! Host - the platform side of event registration and dispatch

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::listener::{Listener, ListenerStore};
use crate::tree::Tree;
use crate::{Event, EventInit, EventPhase, Handler, HostConfig, NodeId, NodeList, Result, TargetId};

/// Stamped into every `NodeId` a host mints
static NEXT_HOST_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Debug)]
struct Inner {
    config: HostConfig,
    tree: RefCell<Tree>,
    listeners: RefCell<ListenerStore>,
}

/// Handle to a host: node arena, window and native listener table.
///
/// Cloning is cheap and every clone refers to the same host. No borrow of
/// the internal state is held while a handler runs, so handlers may call
/// back into the host.
#[derive(Debug, Clone)]
pub struct Host {
    inner: Rc<Inner>,
}

/// Non-owning handle to a [`Host`]
#[derive(Debug, Clone)]
pub struct WeakHost(Weak<Inner>);

impl WeakHost {
    pub fn upgrade(&self) -> Option<Host> {
        self.0.upgrade().map(|inner| Host { inner })
    }
}

impl Host {
    /// Create a host with an empty document
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    pub fn with_config(config: HostConfig) -> Self {
        let id = NEXT_HOST_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Creating host {}: {:?}", id, config);
        Self {
            inner: Rc::new(Inner {
                config,
                tree: RefCell::new(Tree::new(id)),
                listeners: RefCell::new(ListenerStore::default()),
            }),
        }
    }

    pub fn config(&self) -> &HostConfig {
        &self.inner.config
    }

    pub fn downgrade(&self) -> WeakHost {
        WeakHost(Rc::downgrade(&self.inner))
    }

    /// Whether both handles refer to the same host
    pub fn ptr_eq(&self, other: &Host) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// The document node
    pub fn document(&self) -> NodeId {
        self.inner.tree.borrow().root()
    }

    /// Create a detached element
    pub fn create_element(&self, tag: &str) -> NodeId {
        self.inner.tree.borrow_mut().create_element(tag)
    }

    pub fn append_child(&self, parent: NodeId, child: NodeId) -> Result<()> {
        self.inner.tree.borrow_mut().append_child(parent, child)
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>> {
        self.inner.tree.borrow().parent(node)
    }

    pub fn tag_name(&self, node: NodeId) -> Result<String> {
        self.inner.tree.borrow().tag_name(node).map(str::to_string)
    }

    /// Elements with `tag` (or `"*"`) in document order
    pub fn elements_by_tag(&self, tag: &str) -> NodeList {
        self.inner.tree.borrow().elements_by_tag(tag)
    }

    /// Number of nodes including the document
    pub fn node_count(&self) -> usize {
        self.inner.tree.borrow().len()
    }

    // ------------------------------------------------------------------
    // Native registration
    // ------------------------------------------------------------------

    pub fn add_event_listener(
        &self,
        target: impl Into<TargetId>,
        event: &str,
        handler: &Handler,
        capture: bool,
    ) -> Result<()> {
        let target = target.into();
        self.validate(target)?;

        let added = self.inner.listeners.borrow_mut().add(
            target,
            event,
            handler.clone(),
            capture,
            self.inner.config.dedupe_listeners,
        );
        if added {
            tracing::debug!("Added {} listener on {} (capture: {})", event, target, capture);
        } else {
            tracing::debug!("Ignored duplicate {} listener on {} (capture: {})", event, target, capture);
        }
        Ok(())
    }

    /// Removing a listener that is not registered is a no-op
    pub fn remove_event_listener(
        &self,
        target: impl Into<TargetId>,
        event: &str,
        handler: &Handler,
        capture: bool,
    ) -> Result<()> {
        let target = target.into();
        self.validate(target)?;

        let removed = self
            .inner
            .listeners
            .borrow_mut()
            .remove(target, event, handler, capture);
        if removed {
            tracing::debug!("Removed {} listener from {} (capture: {})", event, target, capture);
        }
        Ok(())
    }

    pub fn has_listener(
        &self,
        target: impl Into<TargetId>,
        event: &str,
        handler: &Handler,
        capture: bool,
    ) -> bool {
        self.inner
            .listeners
            .borrow()
            .contains(target.into(), event, handler, capture)
    }

    /// Listeners registered for `event` on `target`, both phases
    pub fn listener_count(&self, target: impl Into<TargetId>, event: &str) -> usize {
        self.inner.listeners.borrow().count(target.into(), event)
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Dispatch a bubbling, non-cancelable event named `name`
    pub fn dispatch(&self, target: impl Into<TargetId>, name: &str) -> Result<bool> {
        self.dispatch_event(target, EventInit::new(name))
    }

    /// Run an event through capture, target and bubble phases.
    ///
    /// Returns `false` if a listener prevented the default action.
    pub fn dispatch_event(&self, target: impl Into<TargetId>, init: EventInit) -> Result<bool> {
        let target = target.into();
        self.validate(target)?;

        let path = self.propagation_path(target)?;
        let event = Event::new(init, target);
        tracing::trace!("Dispatching {} on {} (path length {})", event.name(), target, path.len());

        for &current in &path {
            if event.is_propagation_stopped() {
                break;
            }
            self.invoke(&event, current, EventPhase::Capturing, |l| l.capture);
        }

        if !event.is_propagation_stopped() {
            self.invoke(&event, target, EventPhase::AtTarget, |l| l.capture);
        }
        if !event.is_propagation_stopped() {
            self.invoke(&event, target, EventPhase::AtTarget, |l| !l.capture);
        }

        if event.bubbles() {
            for &current in path.iter().rev() {
                if event.is_propagation_stopped() {
                    break;
                }
                self.invoke(&event, current, EventPhase::Bubbling, |l| !l.capture);
            }
        }

        event.finish();
        Ok(!event.is_default_prevented())
    }

    fn validate(&self, target: TargetId) -> Result<()> {
        match target {
            TargetId::Window => Ok(()),
            TargetId::Node(id) => self.inner.tree.borrow().check(id),
        }
    }

    /// Targets before `target`, outermost first
    fn propagation_path(&self, target: TargetId) -> Result<Vec<TargetId>> {
        let TargetId::Node(id) = target else {
            return Ok(Vec::new());
        };

        let mut path = Vec::new();
        if self.inner.config.window_in_path {
            path.push(TargetId::Window);
        }
        let ancestors = self.inner.tree.borrow().ancestors(id)?;
        path.extend(ancestors.into_iter().map(TargetId::Node));
        Ok(path)
    }

    fn invoke(
        &self,
        event: &Event,
        current: TargetId,
        phase: EventPhase,
        select: impl Fn(&Listener) -> bool,
    ) {
        // Listeners added from here on do not run for this target
        let snapshot = self.inner.listeners.borrow().snapshot(current, event.name());
        if snapshot.is_empty() {
            return;
        }

        event.enter(current, phase);
        for listener in &snapshot {
            if !select(listener) || listener.removed.get() {
                continue;
            }
            tracing::trace!("Invoking {} listener on {} ({:?})", event.name(), current, phase);
            listener.handler.call(event);
            if event.is_immediate_propagation_stopped() {
                break;
            }
        }
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}
