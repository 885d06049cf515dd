//! Node tree (arena-based allocation)

use crate::{HostError, NodeId, Result};

#[derive(Debug)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena of nodes. Node 0 is the document.
#[derive(Debug)]
pub(crate) struct Tree {
    host: u32,
    nodes: Vec<Node>,
}

impl Tree {
    pub(crate) fn new(host: u32) -> Self {
        Self {
            host,
            nodes: vec![Node {
                tag: "#document".to_string(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub(crate) fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId::new(self.host, self.nodes.len() as u32);
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            parent: None,
            children: Vec::new(),
        });
        id
    }

    pub(crate) fn root(&self) -> NodeId {
        NodeId::new(self.host, 0)
    }

    /// Ids minted by another host are rejected even when the index is in range
    pub(crate) fn check(&self, id: NodeId) -> Result<()> {
        if id.host == self.host && id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(HostError::NotEventTarget(id))
        }
    }

    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check(parent)?;
        self.check(child)?;

        let already_attached = self.nodes[child.index()].parent.is_some();
        if child.is_document() || already_attached || self.is_inclusive_ancestor(child, parent) {
            return Err(HostError::HierarchyRequest { parent, child });
        }

        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    pub(crate) fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        self.check(id)?;
        Ok(self.nodes[id.index()].parent)
    }

    pub(crate) fn tag_name(&self, id: NodeId) -> Result<&str> {
        self.check(id)?;
        Ok(&self.nodes[id.index()].tag)
    }

    /// Ancestors of `id`, outermost first, excluding `id` itself
    pub(crate) fn ancestors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.check(id)?;
        let mut chain = Vec::new();
        let mut current = self.nodes[id.index()].parent;
        while let Some(node) = current {
            chain.push(node);
            current = self.nodes[node.index()].parent;
        }
        chain.reverse();
        Ok(chain)
    }

    /// Elements with the given tag in document order
    pub(crate) fn elements_by_tag(&self, tag: &str) -> NodeList {
        let tag = tag.to_ascii_lowercase();
        let mut found = NodeList::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.index()];
            if !id.is_document() && (tag == "*" || node.tag == tag) {
                found.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.nodes[node.index()].parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }
}

/// Ordered collection of nodes. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
    nodes: Vec<NodeId>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: NodeId) {
        self.nodes.push(id);
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }
}

impl FromIterator<NodeId> for NodeList {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<NodeId>> for NodeList {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}
