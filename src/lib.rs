//! An ordered map backed by an unbalanced binary search tree.
//!
//! This crate provides [`BstMap`], a key→value container that keeps its
//! entries in key order without any rebalancing, plus an external single-pass
//! cursor ([`begin`](BstMap::begin)/[`next`](BstMap::next)) as its iteration
//! protocol:
//!
//! - [`insert`](BstMap::insert) is first-write-wins: inserting under an
//!   existing key is a defined no-op, never an overwrite.
//! - [`at`](BstMap::at) / [`erase`](BstMap::erase) /
//!   [`remove_min`](BstMap::remove_min) fail with an [`Error`] instead of
//!   silently mutating anything.
//! - Cloning is a full structural deep copy; equality compares in-order
//!   `(key, value)` sequences.
//!
//! # Example
//!
//! ```
//! use bst_map::BstMap;
//!
//! let mut map = BstMap::new();
//! map.insert(5, "five");
//! map.insert(3, "three");
//! map.insert(7, "seven");
//!
//! assert_eq!(map.at(&3), Ok(&"three"));
//! assert_eq!(map.len(), 3);
//!
//! // Entries come back in ascending key order.
//! map.begin();
//! assert_eq!(map.next(), Some((3, "three")));
//! assert_eq!(map.next(), Some((5, "five")));
//! assert_eq!(map.next(), Some((7, "seven")));
//! assert_eq!(map.next(), None);
//!
//! // The minimum can be removed without naming its key.
//! assert_eq!(map.remove_min(), Ok((3, "three")));
//! ```
//!
//! # Implementation
//!
//! Nodes live in an arena (a growable slot table addressed by integer ids),
//! and the parent relationship is a plain id stored alongside each node
//! rather than a borrowed reference. Upward traversal for the cursor is
//! therefore O(1) per step with no explicit stack and no aliasing of owned
//! nodes. The tree is deliberately unbalanced: adversarial insertion orders
//! (such as sorted keys) degrade operations to O(n).

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod bst_map;

pub use bst_map::BstMap;
pub use error::Error;
