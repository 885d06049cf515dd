//! evshim
//!
//! `on`/`off`/`once` shorthand over native event registration, uniform
//! across a single node, a [`NodeList`] and the [`Window`].
//!
//! Nothing is installed on shared objects. The capability set is the
//! [`Listen`] trait, implemented for every target kind with the host passed
//! explicitly, and [`EventShim`] binds a target to its host when that is
//! more convenient. The host's listener table stays the only registry.
//!
//! # Example
//! ```rust,ignore
//! use evshim::{Host, Handler, Listen};
//!
//! let host = Host::new();
//! let button = host.create_element("button");
//! let clicked = Handler::new(|e| println!("{} on {}", e.name(), e.target()));
//!
//! let sub = button.on(&host, "click", &clicked, false)?;
//! host.dispatch(button, "click")?;
//! sub.unsubscribe()?;
//! ```

mod listen;
mod shim;
mod subscription;
mod target;

pub use listen::Listen;
pub use shim::EventShim;
pub use subscription::Subscription;
pub use target::Target;

pub use evshim_dom::{
    Event, EventInit, EventPhase, Handler, Host, HostConfig, HostError, NodeId, NodeList,
    Result, TargetId, Window,
};

// Re-export the host crate for advanced usage
pub use evshim_dom as dom;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subscribe `handler` on `target` and return the remover
pub fn add_listener<T>(
    host: &Host,
    target: &T,
    event: &str,
    handler: &Handler,
    capture: bool,
) -> Result<Subscription>
where
    T: Listen + Clone + 'static,
{
    target.on(host, event, handler, capture)
}
