//! Unsubscribe handles

use std::fmt;
use std::rc::Rc;

use evshim_dom::{Host, Result, WeakHandler, WeakHost};

use crate::Listen;

/// Removes exactly one (event, handler, capture) registration.
///
/// Holds only weak references: it does not keep the host or the handler
/// alive, and dropping it does not unsubscribe. Calling
/// [`unsubscribe`](Self::unsubscribe) more than once is a no-op after the
/// first call.
#[derive(Clone)]
pub struct Subscription {
    event: Rc<str>,
    capture: bool,
    remove: Rc<dyn Fn() -> Result<()>>,
}

impl Subscription {
    pub(crate) fn new<T>(host: &Host, target: T, event: &str, handler: WeakHandler, capture: bool) -> Self
    where
        T: Listen + 'static,
    {
        let host: WeakHost = host.downgrade();
        let name: Rc<str> = Rc::from(event);
        let remove = {
            let name = name.clone();
            move || {
                // Either side gone means nothing is left to remove
                let (Some(host), Some(handler)) = (host.upgrade(), handler.upgrade()) else {
                    return Ok(());
                };
                target.remove_event_listener(&host, &name, &handler, capture)
            }
        };

        Self {
            event: name,
            capture,
            remove: Rc::new(remove),
        }
    }

    /// Remove the registration this handle was created for
    pub fn unsubscribe(&self) -> Result<()> {
        (self.remove)()
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn capture(&self) -> bool {
        self.capture
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}
