//! Targets the shim can subscribe on

use evshim_dom::{NodeId, NodeList, Window};

/// A single node, an ordered collection of nodes, or the global scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Node(NodeId),
    List(NodeList),
    Window,
}

impl From<NodeId> for Target {
    fn from(id: NodeId) -> Self {
        Target::Node(id)
    }
}

impl From<NodeList> for Target {
    fn from(list: NodeList) -> Self {
        Target::List(list)
    }
}

impl From<Window> for Target {
    fn from(_: Window) -> Self {
        Target::Window
    }
}
