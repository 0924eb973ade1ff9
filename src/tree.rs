//! An ordered collection based on a binary search tree.

use std::fmt::{self, Debug};

use compare::{Compare, Natural, natural};

use crate::entry::Entry;
use crate::error::Error;
use crate::node::{self, Link};

/// A link-based binary search tree of unique-key entries.
///
/// Entries are placed by recursive descent from the root and never moved
/// afterwards: the tree performs no rebalancing, so insertion order
/// permanently determines its shape and sorted input degenerates into a
/// chain. Duplicate keys are rejected rather than overwritten.
///
/// Cloning a tree deep-copies every node; the clone shares no structure with
/// the source. Dropping a tree releases every node exactly once, children
/// before parents.
///
/// The behavior of this tree is undefined if a key's ordering relative to
/// any other key changes while the key is stored. This is normally only
/// possible through `Cell`, `RefCell`, or unsafe code.
///
/// # Examples
///
/// ```
/// use treedict::{Entry, Tree};
///
/// let mut tree = Tree::new();
///
/// tree.insert(Entry::new("cat", "kissa")).unwrap();
/// tree.insert(Entry::new("dog", "koira")).unwrap();
/// tree.insert(Entry::new("bird", "lintu")).unwrap();
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.retrieve(&"dog").unwrap().value(), &"koira");
/// ```
#[derive(Clone)]
pub struct Tree<K, V, C = Natural<K>>
where
    C: Compare<K>,
{
    root: Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> Tree<K, V>
where
    K: Ord,
{
    /// Creates an empty tree ordered according to the natural order of its
    /// keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Entry, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(Entry::new(2, "b")).unwrap();
    /// tree.insert(Entry::new(1, "a")).unwrap();
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn new() -> Self {
        Tree::with_cmp(natural())
    }
}

impl<K, V, C> Tree<K, V, C>
where
    C: Compare<K>,
{
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use treedict::{Entry, Tree};
    ///
    /// let mut tree = Tree::with_cmp(natural().rev());
    ///
    /// tree.insert(Entry::new(2, "b")).unwrap();
    /// tree.insert(Entry::new(1, "a")).unwrap();
    /// tree.insert(Entry::new(3, "c")).unwrap();
    ///
    /// let mut keys = Vec::new();
    /// tree.for_each(|entry| keys.push(*entry.key())).unwrap();
    /// assert_eq!(keys, [3, 2, 1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Tree {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Entry, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(Entry::new(2, "b")).unwrap();
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Entry, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(Entry::new(2, "b")).unwrap();
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns a reference to the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use treedict::Tree;
    ///
    /// let tree: Tree<i32, &str> = Tree::new();
    /// assert!(tree.cmp().compares_lt(&1, &2));
    ///
    /// let tree: Tree<i32, &str, _> = Tree::with_cmp(natural().rev());
    /// assert!(tree.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Removes all entries from the tree, releasing every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Entry, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(Entry::new(2, "b")).unwrap();
    /// tree.insert(Entry::new(1, "a")).unwrap();
    ///
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts an entry into the tree.
    ///
    /// The entry is attached at the absent position reached by descending
    /// from the root, in O(height) time. If an equal key is already stored
    /// the insertion fails with [`Error::DuplicateKey`]; if node storage
    /// cannot be acquired it fails with [`Error::AllocationFailure`]. Either
    /// way the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Entry, Error, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(Entry::new("cat", "kissa")), Ok(()));
    /// assert_eq!(
    ///     tree.insert(Entry::new("cat", "katt")),
    ///     Err(Error::DuplicateKey),
    /// );
    ///
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.retrieve(&"cat").unwrap().value(), &"kissa");
    /// ```
    pub fn insert(&mut self, entry: Entry<K, V>) -> Result<(), Error> {
        node::insert(&mut self.root, &self.cmp, entry)?;
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the stored entry with the given key.
    ///
    /// Fails with [`Error::EmptyCollection`] when the tree holds no entries
    /// and with [`Error::KeyNotFound`] when the key is absent. Runs in
    /// O(height) time and does not mutate the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Entry, Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.retrieve(&"cat").unwrap_err(), Error::EmptyCollection);
    ///
    /// tree.insert(Entry::new("cat", "kissa")).unwrap();
    /// assert_eq!(tree.retrieve(&"cat").unwrap().value(), &"kissa");
    /// assert_eq!(tree.retrieve(&"dog").unwrap_err(), Error::KeyNotFound);
    /// ```
    pub fn retrieve<Q>(&self, key: &Q) -> Result<&Entry<K, V>, Error>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }
        node::find(&self.root, &self.cmp, key)
    }

    /// Returns a mutable reference to the value stored under the given key.
    ///
    /// Only the value half of the entry is exposed; the key cannot be
    /// altered through the returned reference. Fails with the same kinds as
    /// [`retrieve`](Tree::retrieve).
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Entry, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(Entry::new("cat", "kissa")).unwrap();
    ///
    /// *tree.retrieve_mut(&"cat").unwrap() = "katt";
    /// assert_eq!(tree.retrieve(&"cat").unwrap().value(), &"katt");
    /// ```
    pub fn retrieve_mut<Q>(&mut self, key: &Q) -> Result<&mut V, Error>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }
        node::find_mut(&mut self.root, &self.cmp, key)
    }

    /// Checks if the tree contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Entry, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert!(!tree.contains_key(&"cat"));
    ///
    /// tree.insert(Entry::new("cat", "kissa")).unwrap();
    /// assert!(tree.contains_key(&"cat"));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        self.retrieve(key).is_ok()
    }

    /// Visits every entry in ascending key order.
    ///
    /// The visitor receives a shared reference to each entry in turn: left
    /// subtree, entry, right subtree. It may carry side effects but cannot
    /// mutate the tree. Fails with [`Error::EmptyCollection`] when the tree
    /// holds no entries, before any entry is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Entry, Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.for_each(|_| {}), Err(Error::EmptyCollection));
    ///
    /// tree.insert(Entry::new("cat", "kissa")).unwrap();
    /// tree.insert(Entry::new("dog", "koira")).unwrap();
    /// tree.insert(Entry::new("bird", "lintu")).unwrap();
    ///
    /// let mut seen = Vec::new();
    /// tree.for_each(|entry| seen.push((*entry.key(), *entry.value()))).unwrap();
    /// assert_eq!(
    ///     seen,
    ///     [("bird", "lintu"), ("cat", "kissa"), ("dog", "koira")],
    /// );
    /// ```
    pub fn for_each<F>(&self, mut visit: F) -> Result<(), Error>
    where
        F: FnMut(&Entry<K, V>),
    {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }
        node::for_each(&self.root, &mut visit);
        Ok(())
    }
}

impl<K, V, C> Debug for Tree<K, V, C>
where
    K: Debug,
    V: Debug,
    C: Compare<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        let _ = self.for_each(|entry| {
            map.entry(entry.key(), entry.value());
        });
        map.finish()
    }
}

impl<K, V, C> Default for Tree<K, V, C>
where
    C: Compare<K> + Default,
{
    fn default() -> Self {
        Tree::with_cmp(C::default())
    }
}

impl<K, V, C> Extend<(K, V)> for Tree<K, V, C>
where
    C: Compare<K>,
{
    /// Inserts every pair in turn; the first entry stored for a key wins and
    /// later duplicates are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ = self.insert(Entry::new(key, value));
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for Tree<K, V, C>
where
    C: Compare<K> + Default,
{
    /// Collects pairs with the same first-wins policy as
    /// [`extend`](Tree::extend).
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Tree::default();
        tree.extend(iter);
        tree
    }
}
