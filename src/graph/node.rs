use std::fmt;

/// A handle to a node in a [`Graph`](super::Graph).
///
/// Identifiers are handed out in insertion order starting from zero and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node stored in the graph's arena.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<T> {
    id: NodeId,
    data: T,
}

impl<T> Node<T> {
    pub(super) fn new(id: NodeId, data: T) -> Self {
        Self { id, data }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub(super) fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }
}
