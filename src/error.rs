use thiserror::Error;

/// Failure conditions for the fallible [`BstMap`](crate::BstMap) operations.
///
/// Inserting a duplicate key is deliberately not among them: insertion on an
/// existing key is a defined no-op (first write wins), not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// Returned by [`at`](crate::BstMap::at), [`at_mut`](crate::BstMap::at_mut),
    /// and [`erase`](crate::BstMap::erase) when no node holds the requested
    /// key. The map is left unchanged.
    #[error("key not found")]
    KeyNotFound,
    /// Returned by [`remove_min`](crate::BstMap::remove_min) when the map
    /// holds no elements.
    #[error("tree is empty")]
    EmptyTree,
}
