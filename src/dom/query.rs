//! DOM queries: by id, class, type; selector strings; generic predicates.

use crate::selector::{SelectorError, SelectorList};

use super::node::{NodeData, NodeId};
use super::tree::Dom;

impl Dom {
    /// Find the first node whose `id` field matches the given string.
    ///
    /// Iterates all nodes in the arena, in slotmap insertion order.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter_nodes()
            .find(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// Find all nodes that have the given class.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| data.has_class(class))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Find all nodes whose `element_type` matches the given string.
    pub fn query_by_type(&self, element_type: &str) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| data.element_type == element_type)
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Find all nodes matching an arbitrary predicate.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Find all nodes matching a selector string, e.g. `".carousel"` or
    /// `"Button.carousel-dot, #hero"`.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        Ok(self.query_all(|data| list.matches(data)))
    }

    /// Find the first node matching a selector string.
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        Ok(self
            .iter_nodes()
            .find(|(_, data)| list.matches(data))
            .map(|(node_id, _)| node_id))
    }

    /// Iterate over all `(NodeId, &NodeData)` pairs in the arena.
    ///
    /// This is a helper used by the query methods. It iterates in slotmap
    /// insertion order, which is deterministic but not tree-order.
    fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }
}
