use core::borrow::Borrow;
use core::fmt;

use crate::Error;
use crate::raw::RawBstMap;

/// An ordered map backed by an unbalanced [binary search tree].
///
/// Given a key type with a [total order], the map stores its entries in key
/// order: keys must implement [`Ord`]. Each key maps to exactly one value,
/// and an insert under an already-present key is a defined no-op — the first
/// value written for a key wins until that key is erased.
///
/// No rebalancing is performed. Expected depth is O(log n) for random
/// insertion orders, but adversarial orders (for example, already-sorted
/// keys) degrade lookups to O(n). Callers that need guaranteed logarithmic
/// bounds should reach for `std::collections::BTreeMap` instead.
///
/// # Iteration
///
/// Instead of borrowing iterators, `BstMap` exposes a single external
/// cursor: [`begin`](BstMap::begin) resets it to the smallest key, and each
/// [`next`](BstMap::next) clones out one `(key, value)` pair and advances in
/// key order until exhaustion.
///
/// ```
/// use bst_map::BstMap;
///
/// let mut map = BstMap::new();
/// map.insert(2, "two");
/// map.insert(1, "one");
/// map.insert(3, "three");
///
/// map.begin();
/// while let Some((key, value)) = map.next() {
///     println!("{key}: {value}");
/// }
/// ```
///
/// Mutating the map between `begin` and exhaustion invalidates the cursor.
/// Doing so is a logic error: it will never cause undefined behavior, but a
/// subsequent `next` may panic or yield unrelated elements until the cursor
/// is reset with `begin`.
///
/// # Examples
///
/// ```
/// use bst_map::{BstMap, Error};
///
/// let mut movie_reviews = BstMap::new();
///
/// // Review some movies.
/// movie_reviews.insert("Office Space", "Deals with real issues in the workplace.");
/// movie_reviews.insert("Pulp Fiction", "Masterpiece.");
/// movie_reviews.insert("The Godfather", "Very enjoyable.");
///
/// // Check for a specific one.
/// assert!(!movie_reviews.contains("Les Miserables"));
/// assert_eq!(movie_reviews.len(), 3);
///
/// // Look up the value stored under a key.
/// assert_eq!(movie_reviews.at("Pulp Fiction"), Ok(&"Masterpiece."));
/// assert_eq!(movie_reviews.at("Up!"), Err(Error::KeyNotFound));
///
/// // Delete a review; `erase` hands back the removed value.
/// let removed = movie_reviews.erase("The Godfather")?;
/// assert_eq!(removed, "Very enjoyable.");
/// # Ok::<(), bst_map::Error>(())
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct BstMap<K, V> {
    raw: RawBstMap<K, V>,
}

impl<K, V> BstMap<K, V> {
    /// Creates an empty `BstMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawBstMap::new(),
        }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert!(map.is_empty());
    /// map.insert(1, "a");
    /// assert!(!map.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, dropping all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// The minimum node has no left child, so its right child (if any) is
    /// spliced into its place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the map holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::{BstMap, Error};
    ///
    /// let mut map = BstMap::new();
    /// map.insert(5, "five");
    /// map.insert(3, "three");
    ///
    /// assert_eq!(map.remove_min(), Ok((3, "three")));
    /// assert_eq!(map.remove_min(), Ok((5, "five")));
    /// assert_eq!(map.remove_min(), Err(Error::EmptyTree));
    /// ```
    pub fn remove_min(&mut self) -> Result<(K, V), Error> {
        self.raw.remove_min().ok_or(Error::EmptyTree)
    }

    /// Resets the traversal cursor to the smallest key, or directly to the
    /// exhausted state if the map is empty.
    ///
    /// See the [iteration section](BstMap#iteration) of the type docs for
    /// the full protocol.
    pub fn begin(&mut self) {
        self.raw.begin();
    }
}

impl<K: Ord, V> BstMap<K, V> {
    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present, the call is a silent no-op: the stored
    /// value is kept and `value` is dropped. First write wins; to replace a
    /// value, use [`at_mut`](BstMap::at_mut), or erase the key first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(37, "a");
    /// map.insert(37, "b");
    /// assert_eq!(map.at(&37), Ok(&"a"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        self.raw.insert(key, value);
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// The key may be any borrowed form of the map's key type, with matching
    /// `Ord` semantics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no node holds that key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::{BstMap, Error};
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn at<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// This is the only way to change a stored value, since
    /// [`insert`](BstMap::insert) never overwrites.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no node holds that key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// if let Ok(value) = map.at_mut(&1) {
    ///     *value = "b";
    /// }
    /// assert_eq!(map.at(&1), Ok(&"b"));
    /// ```
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if the map contains a value under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains(&1));
    /// assert!(!map.contains(&2));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(key)
    }

    /// Removes the entry stored under `key` and returns its value.
    ///
    /// When the removed node has two children, its in-order successor's key
    /// and value take over its slot, which keeps the remaining entries in
    /// strictly ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no node holds that key; the map is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::{BstMap, Error};
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.erase(&1), Ok("a"));
    /// assert_eq!(map.erase(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn erase<Q>(&mut self, key: &Q) -> Result<V, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.erase(key).ok_or(Error::KeyNotFound)
    }
}

impl<K: Clone, V: Clone> BstMap<K, V> {
    /// Clones out the cursor's `(key, value)` pair and advances the cursor
    /// to the next key in ascending order.
    ///
    /// Returns `None` once the traversal started by [`begin`](BstMap::begin)
    /// is exhausted, and keeps returning `None` until the cursor is reset.
    /// A freshly created (or cloned) map starts with an exhausted cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// map.begin();
    /// assert_eq!(map.next(), Some((1, "a")));
    /// assert_eq!(map.next(), Some((2, "b")));
    /// assert_eq!(map.next(), None);
    /// assert_eq!(map.next(), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(K, V)> {
        self.raw.next()
    }
}

impl<K: Clone, V: Clone> Clone for BstMap<K, V> {
    /// Performs a full structural deep copy: the clone shares no node with
    /// the original, so mutating one never affects the other. The clone's
    /// cursor starts exhausted regardless of the original's cursor state.
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
        }
    }
}

impl<K, V> Default for BstMap<K, V> {
    /// Creates an empty `BstMap`.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for BstMap<K, V> {
    /// Two maps are equal iff they have the same length and produce
    /// identical `(key, value)` sequences in key order. The comparison walks
    /// both trees directly and leaves their traversal cursors untouched.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.raw.in_order().eq(other.raw.in_order())
    }
}

impl<K: Eq, V: Eq> Eq for BstMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BstMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.raw.in_order()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for BstMap<K, V> {
    /// Renders one `key: value` line per element, in ascending key order.
    ///
    /// This is a debugging aid, not a durable format; `to_string()` comes
    /// for free through the blanket [`ToString`](alloc::string::ToString)
    /// impl.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(5, "five");
    /// map.insert(3, "three");
    /// assert_eq!(map.to_string(), "3: three\n5: five\n");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.raw.in_order() {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}
