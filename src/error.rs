//! Failure kinds shared by the tree and the dictionary facade.

use thiserror::Error;

/// The ways a tree or dictionary operation can fail.
///
/// Every fallible operation reports exactly one of these kinds, and a failed
/// operation leaves the collection exactly as it was. `DuplicateKey`,
/// `EmptyCollection` and `KeyNotFound` are recoverable conditions a caller is
/// expected to report and move past; `AllocationFailure` means node storage
/// could not be acquired and usually ends the caller's whole ingestion.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Storage for a new node could not be acquired.
    #[error("storage for a new node could not be acquired")]
    AllocationFailure,

    /// An entry with the same key is already stored.
    #[error("an entry with the same key is already stored")]
    DuplicateKey,

    /// The collection holds no entries.
    #[error("the collection holds no entries")]
    EmptyCollection,

    /// The key is not present in the collection.
    #[error("the key is not present in the collection")]
    KeyNotFound,
}
