use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::graph::{Graph, NodeId, Result};

/// A graph that can be shared between threads.
///
/// All access, reads included, goes through a single lock, so a node insertion and an edge
/// insertion never observe each other half-done. Cloning the handle shares the same graph.
#[derive(Debug)]
pub struct SharedGraph<T> {
    inner: Arc<Mutex<Graph<T>>>,
}

impl<T> Clone for SharedGraph<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Graph<T>> for SharedGraph<T> {
    fn from(graph: Graph<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }
}

impl<T> SharedGraph<T> {
    pub fn new() -> Self {
        Self::from(Graph::new())
    }

    pub fn add_node(&self, data: T) -> NodeId {
        self.lock().add_node(data)
    }

    pub fn add_edge(&self, from: NodeId, to: NodeId) -> Result<()> {
        self.lock().add_edge(from, to)
    }

    /// Returns a copy of the neighbor list as it is at the time of the call.
    pub fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>> {
        self.lock().neighbors(node).map(<[NodeId]>::to_vec)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.lock().edge_count()
    }

    /// Runs `f` with shared access to the graph while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Graph<T>) -> R) -> R {
        f(&*self.lock())
    }

    /// Runs `f` with exclusive access to the graph while holding the lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut Graph<T>) -> R) -> R {
        f(&mut *self.lock())
    }

    // Every graph operation either completes or leaves the graph untouched,
    // so the data behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Graph<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Display> SharedGraph<T> {
    pub fn describe(&self) -> String {
        self.lock().describe().to_string()
    }
}
