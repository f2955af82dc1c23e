use thiserror::Error;

use super::NodeId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Unknown node {id}: the graph has {len} node(s)")]
    UnknownNode { id: NodeId, len: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
