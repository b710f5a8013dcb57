use super::node_id::NodeId;

/// A single tree node: one key, one value, and three links.
///
/// `parent` is a non-owning back-reference used only for upward traversal;
/// ownership flows root-to-leaf through `left` and `right`. The key is never
/// rewritten after creation except during two-child removal, where the
/// in-order successor's key and value are promoted into the removed node's
/// slot. That rewrite preserves BST order and is invisible to callers.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// Creates a new leaf node attached under `parent`.
    pub(crate) const fn new(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            parent,
            left: None,
            right: None,
        }
    }
}
