//! EventShim - a target bound to its host

use evshim_dom::{Handler, Host, Result};

use crate::{Listen, Subscription};

/// Adapter bundling a host with one target and exposing the five
/// registration methods without repeating the host on every call.
///
/// ```rust,ignore
/// let host = Host::new();
/// let button = host.create_element("button");
/// let shim = EventShim::new(&host, button);
///
/// let sub = shim.on("click", &Handler::new(|e| println!("{}", e.name())), false)?;
/// sub.unsubscribe()?;
/// ```
#[derive(Debug, Clone)]
pub struct EventShim<T> {
    host: Host,
    target: T,
}

impl<T> EventShim<T>
where
    T: Listen + Clone + 'static,
{
    pub fn new(host: &Host, target: T) -> Self {
        Self {
            host: host.clone(),
            target,
        }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn add_event_listener(&self, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        self.target.add_event_listener(&self.host, event, handler, capture)
    }

    pub fn remove_event_listener(&self, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        self.target.remove_event_listener(&self.host, event, handler, capture)
    }

    pub fn on(&self, event: &str, handler: &Handler, capture: bool) -> Result<Subscription> {
        self.target.on(&self.host, event, handler, capture)
    }

    pub fn off(&self, event: &str, handler: &Handler, capture: bool) -> Result<()> {
        self.target.off(&self.host, event, handler, capture)
    }

    pub fn once(&self, event: &str, handler: &Handler, capture: bool) -> Result<Subscription> {
        self.target.once(&self.host, event, handler, capture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Target;
    use evshim_dom::{Event, Window};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_shim_forwards_to_host() {
        let host = Host::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let handler = {
            let log = log.clone();
            Handler::new(move |e: &Event| log.borrow_mut().push(e.name().to_string()))
        };

        let shim = EventShim::new(&host, Window);
        assert!(shim.host().ptr_eq(&host));
        assert_eq!(*shim.target(), Window);

        shim.add_event_listener("resize", &handler, false).unwrap();
        let sub = shim.on("scroll", &handler, false).unwrap();
        shim.once("load", &handler, false).unwrap();

        for name in ["resize", "scroll", "load", "load"] {
            host.dispatch(Window, name).unwrap();
        }
        sub.unsubscribe().unwrap();
        shim.off("resize", &handler, false).unwrap();
        host.dispatch(Window, "scroll").unwrap();
        host.dispatch(Window, "resize").unwrap();

        assert_eq!(*log.borrow(), vec!["resize", "scroll", "load"]);
    }

    #[test]
    fn test_shim_over_target_enum() {
        let host = Host::new();
        let list = host.elements_by_tag("li");
        let shim = EventShim::new(&host, Target::from(list));
        let handler = Handler::new(|_| {});

        // Empty list: nothing to register on, nothing fails
        shim.on("click", &handler, false).unwrap();
        shim.remove_event_listener("click", &handler, false).unwrap();
    }
}
