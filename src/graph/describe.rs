use std::fmt::{self, Display};

use super::Graph;

/// Human-readable rendering of a graph, returned by [`Graph::describe`].
///
/// Each node is printed on its own line in insertion order, followed by the payloads of
/// its neighbors in the order the edges were added:
///
/// ```text
/// Alice -> Bob, Charlie
/// Bob -> Charlie
/// Charlie ->
/// ```
///
/// This is a debugging aid, not a serialization format.
pub struct Describe<'a, T> {
    graph: &'a Graph<T>,
}

impl<'a, T> Describe<'a, T> {
    pub(super) fn new(graph: &'a Graph<T>) -> Self {
        Self { graph }
    }
}

impl<T: Display> Display for Describe<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.graph.nodes() {
            write!(f, "{} ->", node.data())?;

            let neighbors = self.graph.neighbor_nodes(node.id()).map_err(|_| fmt::Error)?;
            for (i, neighbor) in neighbors.enumerate() {
                let separator = if i == 0 { " " } else { ", " };
                write!(f, "{}{}", separator, neighbor.data())?;
            }

            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe().fmt(f)
    }
}
