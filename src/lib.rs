pub use graph::{Describe, Graph, GraphError, Node, NodeId, Result, Table};
pub use shared::SharedGraph;

pub mod graph;
mod shared;
