use super::NodeId;

/// When using a graph in an algorithm, we want each node to carry extra information
/// (a visited flag, a distance, its outgoing edges...) without touching its payload.
/// This table associates a value to each node in a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<V> {
    slots: Vec<Option<V>>,
    len: usize,
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Table<V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Associates `value` with `node`, returning the value previously associated with it.
    pub fn associate(&mut self, node: NodeId, value: V) -> Option<V> {
        let index = node.index();
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }

        let previous = self.slots[index].replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub fn get(&self, node: NodeId) -> Option<&V> {
        self.slots.get(node.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut V> {
        self.slots.get_mut(node.index()).and_then(Option::as_mut)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    /// Number of nodes with an associated value.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the associated values in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &V)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (NodeId::from(index), value)))
    }
}
