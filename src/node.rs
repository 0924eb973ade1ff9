//! Tree nodes and the recursive algorithms that operate on them.

use std::alloc::{self, Layout};
use std::cmp::Ordering::{Equal, Greater, Less};
use std::ptr;

use compare::Compare;

use crate::entry::Entry;
use crate::error::Error;

/// An owning link to a subtree; `None` marks an absent child.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A node owning one entry and up to two children.
///
/// `Clone` copies the entry before the children, so cloning a link
/// duplicates the whole subtree in pre-order.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    entry: Entry<K, V>,
    left: Link<K, V>,
    right: Link<K, V>,
}

/// Moves a value to the heap, reporting exhaustion instead of aborting.
///
/// `Box::try_new` is not stable, so this goes through the raw allocator.
fn try_box<T>(value: T) -> Result<Box<T>, Error> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(value));
    }
    // SAFETY: the layout is non-zero-sized, the pointer is checked before
    // use, and `value` is written into the allocation before `Box` takes
    // ownership of it.
    unsafe {
        let ptr = alloc::alloc(layout).cast::<T>();
        if ptr.is_null() {
            return Err(Error::AllocationFailure);
        }
        ptr::write(ptr, value);
        Ok(Box::from_raw(ptr))
    }
}

/// Attaches `entry` at the absent position reached by descending from `link`.
///
/// Finding an equal key on the way down rejects the insertion with
/// `DuplicateKey` and leaves every link untouched.
pub(crate) fn insert<K, V, C>(
    link: &mut Link<K, V>,
    cmp: &C,
    entry: Entry<K, V>,
) -> Result<(), Error>
where
    C: Compare<K>,
{
    match *link {
        None => {
            *link = Some(try_box(Node {
                entry,
                left: None,
                right: None,
            })?);
            Ok(())
        }
        Some(ref mut node) => match cmp.compare(entry.key(), node.entry.key()) {
            Equal => Err(Error::DuplicateKey),
            Less => insert(&mut node.left, cmp, entry),
            Greater => insert(&mut node.right, cmp, entry),
        },
    }
}

/// Finds the entry with `key` in the subtree under `link`.
pub(crate) fn find<'a, K, V, C, Q>(
    link: &'a Link<K, V>,
    cmp: &C,
    key: &Q,
) -> Result<&'a Entry<K, V>, Error>
where
    C: Compare<Q, K>,
    Q: ?Sized,
{
    match *link {
        None => Err(Error::KeyNotFound),
        Some(ref node) => match cmp.compare(key, node.entry.key()) {
            Equal => Ok(&node.entry),
            Less => find(&node.left, cmp, key),
            Greater => find(&node.right, cmp, key),
        },
    }
}

/// Finds the entry with `key` and hands out its value for writing.
///
/// Only the value half is exposed; the key stays immutable so the search
/// order cannot be broken through the returned reference.
pub(crate) fn find_mut<'a, K, V, C, Q>(
    link: &'a mut Link<K, V>,
    cmp: &C,
    key: &Q,
) -> Result<&'a mut V, Error>
where
    C: Compare<Q, K>,
    Q: ?Sized,
{
    match *link {
        None => Err(Error::KeyNotFound),
        Some(ref mut node) => match cmp.compare(key, node.entry.key()) {
            Equal => Ok(node.entry.value_mut()),
            Less => find_mut(&mut node.left, cmp, key),
            Greater => find_mut(&mut node.right, cmp, key),
        },
    }
}

/// Visits the subtree under `link` in order: left, entry, right.
pub(crate) fn for_each<K, V, F>(link: &Link<K, V>, visit: &mut F)
where
    F: FnMut(&Entry<K, V>),
{
    if let Some(ref node) = *link {
        for_each(&node.left, visit);
        visit(&node.entry);
        for_each(&node.right, visit);
    }
}
