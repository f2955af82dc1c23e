use std::ops::Index;

use tracing::{debug, trace};

pub use describe::Describe;
pub use error::{GraphError, Result};
pub use node::{Node, NodeId};
pub use table::Table;

mod describe;
mod error;
mod node;
mod table;

/// A directed graph whose nodes carry a payload of type `T`.
///
/// Nodes live in an append-only arena and are referred to by [`NodeId`].
/// Edges are stored as target identifiers in the source node's adjacency list,
/// so payloads are never duplicated and are resolved only when asked for.
/// Parallel edges and self-loops are allowed.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    nodes: Vec<Node<T>>,

    /// Outgoing edges of each node, in the order they were added.
    edges: Table<Vec<NodeId>>,

    edge_count: usize,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Table::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph with room for `nodes` nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Table::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Inserts a node holding `data` and returns its identifier.
    pub fn add_node(&mut self, data: T) -> NodeId {
        let id = NodeId::from(self.nodes.len());
        self.nodes.push(Node::new(id, data));
        self.edges.associate(id, Vec::new());
        trace!(node = %id, "added node");
        id
    }

    /// Adds a directed edge from `from` to `to`.
    ///
    /// Fails without modifying the graph if either endpoint is unknown.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        let len = self.nodes.len();
        self.edges
            .get_mut(from)
            .ok_or_else(|| unknown(from, len))?
            .push(to);
        self.edge_count += 1;
        trace!(%from, %to, "added edge");
        Ok(())
    }

    /// Returns the nodes `node` points to, in the order the edges were added.
    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        self.edges
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| unknown(node, self.nodes.len()))
    }

    /// Like [`Graph::neighbors`], but resolves each target to its node.
    pub fn neighbor_nodes(&self, node: NodeId) -> Result<impl Iterator<Item = &Node<T>> + '_> {
        let targets = self.neighbors(node)?;
        Ok(targets
            .iter()
            .filter_map(move |target| self.nodes.get(target.index())))
    }

    /// Returns a [`Display`](std::fmt::Display) adapter listing every node with its neighbors.
    pub fn describe(&self) -> Describe<'_, T> {
        Describe::new(self)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node<T>> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| unknown(id, self.nodes.len()))
    }

    pub fn payload(&self, id: NodeId) -> Result<&T> {
        self.node(id).map(Node::data)
    }

    /// Gives mutable access to a payload.
    /// Edges refer to nodes by identifier, so the new value is visible through every neighbor list.
    pub fn payload_mut(&mut self, id: NodeId) -> Result<&mut T> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.index())
            .map(Node::data_mut)
            .ok_or_else(|| unknown(id, len))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates over the nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(Node::id)
    }

    /// Iterates over every edge as a `(from, to)` pair.
    /// Edges are grouped by source node in insertion order, then by the order they were added.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(unknown(id, self.nodes.len()))
        }
    }
}

impl<T> Index<NodeId> for Graph<T> {
    type Output = T;

    /// Panics if `id` does not belong to this graph. Use [`Graph::payload`] for a checked lookup.
    fn index(&self, id: NodeId) -> &T {
        self.nodes[id.index()].data()
    }
}

fn unknown(id: NodeId, len: usize) -> GraphError {
    debug!(node = %id, len, "rejected unknown node");
    GraphError::UnknownNode { id, len }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(index: usize) -> NodeId {
        NodeId::from(index)
    }

    #[test]
    fn empty() {
        let graph = Graph::<()>::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.nodes().count(), 0);
    }

    #[test]
    fn ids_are_sequential() {
        let mut graph = Graph::with_capacity(3);
        let ids: Vec<_> = (0..3).map(|i| graph.add_node(i)).collect();
        assert_eq!(ids, vec![id(0), id(1), id(2)]);
        assert_eq!(graph.node_ids().collect::<Vec<_>>(), ids);
    }

    #[test]
    fn fresh_node_has_no_neighbors() {
        let mut graph = Graph::new();
        let a = graph.add_node("a");
        assert_eq!(graph.neighbors(a), Ok(&[][..]));
    }

    #[test]
    fn add_edge_appends_to_source_only() {
        let mut graph = Graph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, c).unwrap();

        assert_eq!(graph.neighbors(a).unwrap(), &[b, c]);
        assert!(graph.neighbors(b).unwrap().is_empty());
        assert!(graph.neighbors(c).unwrap().is_empty());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn self_loops_and_parallel_edges() {
        let mut graph = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, a).unwrap();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, b).unwrap();
        assert_eq!(graph.neighbors(a).unwrap(), &[a, b, b]);
    }

    #[test]
    fn add_edge_rejects_unknown_source() {
        let mut graph = Graph::new();
        let a = graph.add_node("a");
        let result = graph.add_edge(id(4), a);
        assert_eq!(result, Err(GraphError::UnknownNode { id: id(4), len: 1 }));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_edge_rejects_unknown_target_without_mutating() {
        let mut graph = Graph::new();
        let a = graph.add_node("a");
        let result = graph.add_edge(a, id(1));
        assert_eq!(result, Err(GraphError::UnknownNode { id: id(1), len: 1 }));
        assert!(graph.neighbors(a).unwrap().is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn neighbors_rejects_unknown_node() {
        let graph = Graph::<u8>::new();
        assert_eq!(
            graph.neighbors(id(usize::MAX)),
            Err(GraphError::UnknownNode {
                id: id(usize::MAX),
                len: 0
            })
        );
    }

    #[test]
    fn neighbor_nodes_resolve_payloads() {
        let mut graph = Graph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.add_edge(a, c).unwrap();
        graph.add_edge(a, b).unwrap();

        let payloads: Vec<_> = graph.neighbor_nodes(a).unwrap().map(Node::data).collect();
        assert_eq!(payloads, vec![&"c", &"b"]);
        assert!(graph.neighbor_nodes(id(3)).is_err());
    }

    #[test]
    fn payload_lookup() {
        let mut graph = Graph::new();
        let a = graph.add_node(String::from("a"));
        assert_eq!(graph.payload(a).map(String::as_str), Ok("a"));
        assert_eq!(graph[a], "a");
        assert_eq!(graph.node(a).map(Node::id), Ok(a));
        assert!(graph.payload(id(1)).is_err());
    }

    #[test]
    fn payload_mut_is_seen_by_neighbors() {
        let mut graph = Graph::new();
        let a = graph.add_node(String::from("a"));
        let b = graph.add_node(String::from("b"));
        graph.add_edge(a, b).unwrap();

        graph.payload_mut(b).unwrap().push_str("ob");

        let payloads: Vec<_> = graph.neighbor_nodes(a).unwrap().map(Node::data).collect();
        assert_eq!(payloads, vec!["bob"]);
        assert!(graph.payload_mut(id(2)).is_err());
    }

    #[test]
    #[should_panic]
    fn index_panics_on_unknown_node() {
        let graph = Graph::<u8>::new();
        let _ = &graph[id(0)];
    }

    #[test]
    fn edges_are_grouped_by_source() {
        let mut graph = Graph::new();
        let a = graph.add_node(0);
        let b = graph.add_node(1);
        graph.add_edge(b, a).unwrap();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, b).unwrap();

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(a, b), (b, a), (b, b)]);
        assert_eq!(edges.len(), graph.edge_count());
    }

    #[test]
    fn contains() {
        let mut graph = Graph::new();
        let a = graph.add_node(());
        assert!(graph.contains(a));
        assert!(!graph.contains(id(1)));
    }
}
