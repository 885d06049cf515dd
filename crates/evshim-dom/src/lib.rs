//! evshim DOM - Host platform model
//!
//! A small, deterministic stand-in for the browser side of event handling:
//! a node arena, the global window, the native listener table and the
//! capture/target/bubble dispatch loop.
//!
//! Everything here is single-threaded. [`Host`] is an `Rc` handle and can be
//! cloned freely into handlers, which may re-enter it while an event is
//! being dispatched.

mod config;
mod event;
mod host;
mod listener;
mod tree;

pub use config::HostConfig;
pub use event::{Event, EventInit, EventPhase};
pub use host::{Host, WeakHost};
pub use listener::{Handler, WeakHandler};
pub use tree::NodeList;

use std::fmt;

/// Node identifier: the minting host plus an index into its arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) host: u32,
    pub(crate) index: u32,
}

impl NodeId {
    #[inline]
    pub(crate) fn new(host: u32, index: u32) -> Self {
        Self { host, index }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.index as usize
    }

    /// Whether this is a host's document node
    pub fn is_document(self) -> bool {
        self.index == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.host)
    }
}

/// The global scope target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Window;

/// Anything the host can register listeners on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetId {
    Window,
    Node(NodeId),
}

impl From<NodeId> for TargetId {
    fn from(id: NodeId) -> Self {
        TargetId::Node(id)
    }
}

impl From<Window> for TargetId {
    fn from(_: Window) -> Self {
        TargetId::Window
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetId::Window => f.write_str("window"),
            TargetId::Node(id) => id.fmt(f),
        }
    }
}

/// Errors raised by the host primitives
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("TypeError: node {0} is not an event target of this host")]
    NotEventTarget(NodeId),

    #[error("HierarchyRequestError: cannot append {child} to {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}

pub type Result<T> = std::result::Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_id_from() {
        assert_eq!(TargetId::from(Window), TargetId::Window);
        let id = NodeId::new(1, 3);
        assert_eq!(TargetId::from(id), TargetId::Node(id));
    }

    #[test]
    fn test_display() {
        assert_eq!(TargetId::Window.to_string(), "window");
        assert_eq!(TargetId::Node(NodeId::new(2, 7)).to_string(), "#7@2");
        assert_eq!(
            HostError::NotEventTarget(NodeId::new(2, 9)).to_string(),
            "TypeError: node #9@2 is not an event target of this host"
        );
    }
}
