//! The capability set: `add_event_listener`, `remove_event_listener`,
//! `on`, `off` and `once` for every kind of target.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use evshim_dom::{Event, Handler, Host, NodeId, NodeList, Result, Window};

use crate::{Subscription, Target};

/// Event registration on a target of some host.
///
/// Implementors only forward the two native calls; `on`, `off` and `once`
/// are built on top of them. The host is always passed explicitly.
pub trait Listen {
    /// Register `handler` for `event` on every node this target covers
    fn add_event_listener(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<()>;

    /// Remove a registration. Unknown registrations are ignored.
    fn remove_event_listener(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<()>;

    /// Register `handler` and return the handle that removes it again
    fn on(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<Subscription>
    where
        Self: Clone + 'static,
    {
        self.add_event_listener(host, event, handler, capture)?;
        tracing::debug!("Subscribed to {} (capture: {})", event, capture);
        Ok(Subscription::new(host, self.clone(), event, handler.downgrade(), capture))
    }

    /// Alias for [`remove_event_listener`](Self::remove_event_listener)
    fn off(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        self.remove_event_listener(host, event, handler, capture)
    }

    /// Run `handler` for the first matching event only.
    ///
    /// The registered wrapper unsubscribes itself before calling `handler`.
    /// On a collection the first event on any member removes it from all of
    /// them. The returned handle cancels the wrapper before it fires.
    /// If `on` fails partway through a collection, the wrapper stays on the
    /// earlier members and no handle is returned to remove it.
    fn once(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<Subscription>
    where
        Self: Clone + 'static,
    {
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let fired = Rc::new(Cell::new(false));

        let wrapper = {
            let slot = slot.clone();
            let handler = handler.clone();
            Handler::new(move |e: &Event| {
                if fired.replace(true) {
                    return;
                }
                let subscription = slot.borrow_mut().take();
                if let Some(subscription) = subscription {
                    if let Err(err) = subscription.unsubscribe() {
                        tracing::warn!("Failed to remove once wrapper for {}: {}", e.name(), err);
                    }
                }
                tracing::debug!("Once handler for {} fired", e.name());
                handler.call(e);
            })
        };

        let subscription = self.on(host, event, &wrapper, capture)?;
        *slot.borrow_mut() = Some(subscription.clone());
        Ok(subscription)
    }
}

impl Listen for NodeId {
    fn add_event_listener(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        host.add_event_listener(*self, event, handler, capture)
    }

    fn remove_event_listener(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        host.remove_event_listener(*self, event, handler, capture)
    }
}

impl Listen for Window {
    fn add_event_listener(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        host.add_event_listener(*self, event, handler, capture)
    }

    fn remove_event_listener(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        host.remove_event_listener(*self, event, handler, capture)
    }
}

/// Members are visited in order; the first failure stops the walk and
/// leaves earlier members registered.
impl Listen for NodeList {
    fn add_event_listener(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        for node in self {
            host.add_event_listener(node, event, handler, capture)?;
        }
        Ok(())
    }

    fn remove_event_listener(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        for node in self {
            host.remove_event_listener(node, event, handler, capture)?;
        }
        Ok(())
    }
}

impl Listen for Target {
    fn add_event_listener(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        match self {
            Target::Node(node) => node.add_event_listener(host, event, handler, capture),
            Target::List(list) => list.add_event_listener(host, event, handler, capture),
            Target::Window => Window.add_event_listener(host, event, handler, capture),
        }
    }

    fn remove_event_listener(&self, host: &Host, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        match self {
            Target::Node(node) => node.remove_event_listener(host, event, handler, capture),
            Target::List(list) => list.remove_event_listener(host, event, handler, capture),
            Target::Window => Window.remove_event_listener(host, event, handler, capture),
        }
    }
}
