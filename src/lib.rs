//! An insert-only ordered dictionary based on a binary search tree.
//!
//! The crate exposes two layers. [`Tree`] is the collection itself: a plain
//! link-based binary search tree that rejects duplicate keys and offers
//! insertion, exact-key retrieval and in-order traversal. [`Dictionary`] is a
//! facade that owns a single tree and presents it as a key-value store,
//! adding an independent empty-collection guard in front of traversal.
//!
//! Stored pairs are [`Entry`] values whose identity and ordering are
//! determined solely by the key. Every fallible operation reports one of the
//! four [`Error`] kinds and leaves the collection untouched on failure.
//!
//! The tree performs no rebalancing: insertion order permanently determines
//! its shape, and sorted input degenerates into a chain by design.
//!
//! # Examples
//!
//! ```
//! use treedict::{Dictionary, Entry, Error};
//!
//! let mut dict = Dictionary::new();
//! dict.put(Entry::new("cat", "kissa")).unwrap();
//! dict.put(Entry::new("dog", "koira")).unwrap();
//! dict.put(Entry::new("bird", "lintu")).unwrap();
//!
//! assert_eq!(dict.get(&"cat").unwrap().value(), &"kissa");
//! assert_eq!(dict.get(&"fish"), Err(Error::KeyNotFound));
//!
//! let mut listing = Vec::new();
//! dict.for_each(|entry| listing.push(entry.to_string())).unwrap();
//! assert_eq!(listing, ["bird — lintu", "cat — kissa", "dog — koira"]);
//! ```

#![warn(missing_docs)]

pub mod dictionary;
pub mod tree;

mod entry;
mod error;
mod node;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use crate::dictionary::Dictionary;
pub use crate::entry::Entry;
pub use crate::error::Error;
pub use crate::tree::Tree;
