use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use super::arena::Arena;
use super::node::Node;
use super::node_id::NodeId;

/// The unbalanced binary search tree backing `BstMap`.
///
/// Nodes are arena slots addressed by [`NodeId`]; the parent link is a plain
/// stored id rather than a borrowed reference, so upward traversal costs
/// O(1) without aliasing any owned node. No rebalancing is performed: depth
/// is O(n) in the worst case.
pub(crate) struct RawBstMap<K, V> {
    /// Arena storing all tree nodes. Its live-slot count is the element
    /// count, since every element is exactly one node.
    nodes: Arena<Node<K, V>>,
    /// Id of the root node, if the tree is non-empty.
    root: Option<NodeId>,
    /// Position of the external cursor, `None` when exhausted.
    cursor: Option<NodeId>,
}

impl<K, V> RawBstMap<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            cursor: None,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Frees every node and resets to the empty state.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.cursor = None;
    }

    /// Leftmost (minimum-key) node of the subtree rooted at `from`.
    fn leftmost(&self, from: NodeId) -> NodeId {
        let mut current = from;
        while let Some(left) = self.nodes.get(current).left {
            current = left;
        }
        current
    }

    /// In-order successor of `of`: the leftmost node of its right subtree,
    /// or else the nearest ancestor reached through a left-child link.
    fn successor(&self, of: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(of);
        if let Some(right) = node.right {
            return Some(self.leftmost(right));
        }
        let mut current = of;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let ancestor = self.nodes.get(p);
            if ancestor.left == Some(current) {
                return Some(p);
            }
            current = p;
            parent = ancestor.parent;
        }
        None
    }

    /// First node of a full in-order traversal.
    fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    /// Rewires the link that pointed at `child` (from its parent, or the
    /// root slot) to point at `replacement`, and fixes the replacement's
    /// parent back-link. `child` itself is left untouched.
    fn splice(&mut self, child: NodeId, replacement: Option<NodeId>) {
        let parent = self.nodes.get(child).parent;
        match parent {
            None => self.root = replacement,
            Some(p) => {
                let node = self.nodes.get_mut(p);
                if node.left == Some(child) {
                    node.left = replacement;
                } else {
                    node.right = replacement;
                }
            }
        }
        if let Some(id) = replacement {
            self.nodes.get_mut(id).parent = parent;
        }
    }

    /// Detaches the minimum-key node and returns its (key, value) pair.
    /// The minimum has no left child, so its right child (if any) is
    /// spliced into its place.
    pub(crate) fn remove_min(&mut self) -> Option<(K, V)> {
        let min = self.first()?;
        let right = self.nodes.get(min).right;
        self.splice(min, right);
        let node = self.nodes.take(min);
        Some((node.key, node.value))
    }

    /// Resets the external cursor to the minimum-key node, or to exhausted
    /// on an empty tree.
    pub(crate) fn begin(&mut self) {
        self.cursor = self.first();
    }

    /// Borrowing in-order walk, used by `Display`, `Debug`, and equality.
    /// Independent of the external cursor.
    pub(crate) fn in_order(&self) -> InOrder<'_, K, V> {
        InOrder {
            tree: self,
            current: self.first(),
        }
    }
}

impl<K: Ord, V> RawBstMap<K, V> {
    /// Id of the node holding `key`, if present.
    fn search<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.nodes.get(id);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|id| &self.nodes.get(id).value)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let id = self.search(key)?;
        Some(&mut self.nodes.get_mut(id).value)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Walks from the root and attaches a new leaf under the last visited
    /// node. An equal key already in the tree wins: the call is a no-op and
    /// `value` is dropped.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        let Some(mut current) = self.root else {
            let id = self.nodes.alloc(Node::new(key, value, None));
            self.root = Some(id);
            return;
        };
        loop {
            let node = self.nodes.get(current);
            match key.cmp(&node.key) {
                Ordering::Equal => return,
                Ordering::Less => match node.left {
                    Some(left) => current = left,
                    None => {
                        let id = self.nodes.alloc(Node::new(key, value, Some(current)));
                        self.nodes.get_mut(current).left = Some(id);
                        return;
                    }
                },
                Ordering::Greater => match node.right {
                    Some(right) => current = right,
                    None => {
                        let id = self.nodes.alloc(Node::new(key, value, Some(current)));
                        self.nodes.get_mut(current).right = Some(id);
                        return;
                    }
                },
            }
        }
    }

    /// Removes the node holding `key` and returns its former value, or
    /// `None` (with the tree untouched) if the key is absent.
    pub(crate) fn erase<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let target = self.search(key)?;
        let (left, right) = {
            let node = self.nodes.get(target);
            (node.left, node.right)
        };
        match (left, right) {
            (Some(_), Some(right)) => {
                // Two children: promote the in-order successor's key and
                // value into the target's slot, then splice the successor
                // (which by construction has no left child) out of its old
                // position.
                let succ = self.leftmost(right);
                let succ_right = self.nodes.get(succ).right;
                self.splice(succ, succ_right);
                let promoted = self.nodes.take(succ);
                let node = self.nodes.get_mut(target);
                node.key = promoted.key;
                Some(mem::replace(&mut node.value, promoted.value))
            }
            (child, None) | (None, child) => {
                // Zero or one child: splice the sole child (or nothing)
                // into the target's position.
                self.splice(target, child);
                Some(self.nodes.take(target).value)
            }
        }
    }
}

impl<K: Clone, V: Clone> RawBstMap<K, V> {
    /// Copies out the cursor's (key, value) pair and advances the cursor to
    /// its in-order successor. `None` once the walk is exhausted, and on
    /// every call thereafter until the next `begin`.
    pub(crate) fn next(&mut self) -> Option<(K, V)> {
        let id = self.cursor?;
        let node = self.nodes.get(id);
        let pair = (node.key.clone(), node.value.clone());
        self.cursor = self.successor(id);
        Some(pair)
    }
}

impl<K: Clone, V: Clone> Clone for RawBstMap<K, V> {
    /// Full structural deep copy; the two trees share no node. The copy's
    /// cursor starts exhausted, so `begin` must be called on it before
    /// pulling elements.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            cursor: None,
        }
    }
}

/// Borrowing in-order iterator over a tree. Allocation-free: it advances by
/// right-subtree descent and parent climbs, like the external cursor.
pub(crate) struct InOrder<'a, K, V> {
    tree: &'a RawBstMap<K, V>,
    current: Option<NodeId>,
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.successor(id);
        let node = self.tree.nodes.get(id);
        Some((&node.key, &node.value))
    }
}
