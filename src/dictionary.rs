//! A key-value facade over the binary search tree.

use std::fmt::{self, Debug};

use compare::{Compare, Natural};

use crate::entry::Entry;
use crate::error::Error;
use crate::tree::Tree;

/// An insert-only key-value store backed by a binary search tree.
///
/// A dictionary owns exactly one [`Tree`] and forwards every operation to
/// it, hiding the structural choice behind a fixed surface. The only policy
/// it adds is an empty-collection guard in front of traversal, checked
/// independently of the tree's own guard.
///
/// # Examples
///
/// ```
/// use treedict::{Dictionary, Entry};
///
/// let mut dict = Dictionary::new();
///
/// dict.put(Entry::new("cat", "kissa")).unwrap();
/// dict.put(Entry::new("dog", "koira")).unwrap();
///
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict.get(&"cat").unwrap().value(), &"kissa");
/// ```
#[derive(Clone)]
pub struct Dictionary<K, V, C = Natural<K>>
where
    C: Compare<K>,
{
    entries: Tree<K, V, C>,
}

impl<K, V> Dictionary<K, V>
where
    K: Ord,
{
    /// Creates an empty dictionary ordered according to the natural order of
    /// its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::Dictionary;
    ///
    /// let dict: Dictionary<&str, &str> = Dictionary::new();
    /// assert!(dict.is_empty());
    /// ```
    pub fn new() -> Self {
        Dictionary {
            entries: Tree::new(),
        }
    }
}

impl<K, V, C> Dictionary<K, V, C>
where
    C: Compare<K>,
{
    /// Creates an empty dictionary ordered according to the given
    /// comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use treedict::{Dictionary, Entry};
    ///
    /// let mut dict = Dictionary::with_cmp(natural().rev());
    ///
    /// dict.put(Entry::new(1, "a")).unwrap();
    /// dict.put(Entry::new(2, "b")).unwrap();
    ///
    /// let mut keys = Vec::new();
    /// dict.for_each(|entry| keys.push(*entry.key())).unwrap();
    /// assert_eq!(keys, [2, 1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Dictionary {
            entries: Tree::with_cmp(cmp),
        }
    }

    /// Checks if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the dictionary.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Dictionary, Entry};
    ///
    /// let mut dict = Dictionary::new();
    /// assert_eq!(dict.len(), 0);
    ///
    /// dict.put(Entry::new("cat", "kissa")).unwrap();
    /// assert_eq!(dict.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns a reference to the dictionary's comparator.
    pub fn cmp(&self) -> &C {
        self.entries.cmp()
    }

    /// Removes all entries from the dictionary.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Puts an entry into the dictionary.
    ///
    /// Propagates [`Error::DuplicateKey`] and [`Error::AllocationFailure`]
    /// from the tree unchanged; on failure the dictionary is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Dictionary, Entry, Error};
    ///
    /// let mut dict = Dictionary::new();
    ///
    /// assert_eq!(dict.put(Entry::new("cat", "kissa")), Ok(()));
    /// assert_eq!(
    ///     dict.put(Entry::new("cat", "katt")),
    ///     Err(Error::DuplicateKey),
    /// );
    /// assert_eq!(dict.len(), 1);
    /// ```
    pub fn put(&mut self, entry: Entry<K, V>) -> Result<(), Error> {
        self.entries.insert(entry)
    }

    /// Gets the stored entry for the given key.
    ///
    /// Propagates [`Error::EmptyCollection`] and [`Error::KeyNotFound`] from
    /// the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Dictionary, Entry, Error};
    ///
    /// let mut dict = Dictionary::new();
    /// assert_eq!(dict.get(&"cat"), Err(Error::EmptyCollection));
    ///
    /// dict.put(Entry::new("cat", "kissa")).unwrap();
    /// assert_eq!(dict.get(&"cat").unwrap().value(), &"kissa");
    /// assert_eq!(dict.get(&"fish"), Err(Error::KeyNotFound));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&Entry<K, V>, Error>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        self.entries.retrieve(key)
    }

    /// Gets a mutable reference to the value stored under the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Dictionary, Entry};
    ///
    /// let mut dict = Dictionary::new();
    /// dict.put(Entry::new("cat", "kissa")).unwrap();
    ///
    /// *dict.get_mut(&"cat").unwrap() = "katt";
    /// assert_eq!(dict.get(&"cat").unwrap().value(), &"katt");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, Error>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        self.entries.retrieve_mut(key)
    }

    /// Checks if the dictionary contains the given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Visits every entry in ascending key order.
    ///
    /// Fails with [`Error::EmptyCollection`] before the visitor runs even
    /// once on an empty dictionary.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::{Dictionary, Entry, Error};
    ///
    /// let mut dict = Dictionary::new();
    /// assert_eq!(dict.for_each(|_| {}), Err(Error::EmptyCollection));
    ///
    /// dict.put(Entry::new("dog", "koira")).unwrap();
    /// dict.put(Entry::new("cat", "kissa")).unwrap();
    ///
    /// let mut keys = Vec::new();
    /// dict.for_each(|entry| keys.push(*entry.key())).unwrap();
    /// assert_eq!(keys, ["cat", "dog"]);
    /// ```
    pub fn for_each<F>(&self, visit: F) -> Result<(), Error>
    where
        F: FnMut(&Entry<K, V>),
    {
        // Checked here as well as in the tree: no visitor may run on an
        // empty dictionary.
        if self.len() == 0 {
            return Err(Error::EmptyCollection);
        }
        self.entries.for_each(visit)
    }
}

impl<K, V, C> Debug for Dictionary<K, V, C>
where
    K: Debug,
    V: Debug,
    C: Compare<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entries.fmt(f)
    }
}

impl<K, V, C> Default for Dictionary<K, V, C>
where
    C: Compare<K> + Default,
{
    fn default() -> Self {
        Dictionary {
            entries: Tree::default(),
        }
    }
}

impl<K, V, C> Extend<(K, V)> for Dictionary<K, V, C>
where
    C: Compare<K>,
{
    /// Inserts every pair in turn; the first entry stored for a key wins and
    /// later duplicates are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V, C> FromIterator<(K, V)> for Dictionary<K, V, C>
where
    C: Compare<K> + Default,
{
    /// Collects pairs with the same first-wins policy as
    /// [`extend`](Dictionary::extend).
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::default();
        dict.extend(iter);
        dict
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Dictionary;
    use crate::entry::Entry;
    use crate::error::Error;

    #[test]
    fn traversal_of_an_empty_dictionary_never_calls_the_visitor() {
        let dict: Dictionary<&str, &str> = Dictionary::new();

        let mut calls = 0;
        assert_eq!(dict.for_each(|_| calls += 1), Err(Error::EmptyCollection));
        assert_eq!(calls, 0);
    }

    #[test]
    fn ingestion_skips_duplicates_and_keeps_going() {
        let records = [
            ("cat", "kissa"),
            ("dog", "koira"),
            ("cat", "katt"),
            ("bird", "lintu"),
        ];

        let mut dict = Dictionary::new();
        let mut skipped = 0;
        for (key, value) in records {
            match dict.put(Entry::new(key, value)) {
                Ok(()) => {}
                Err(Error::DuplicateKey) => skipped += 1,
                Err(err) => panic!("unexpected failure: {err}"),
            }
        }

        assert_eq!(skipped, 1);
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(&"cat").unwrap().value(), &"kissa");
    }

    #[test]
    fn traversal_renders_in_ascending_key_order() {
        let mut dict = Dictionary::new();
        dict.put(Entry::new("cat", "kissa")).unwrap();
        dict.put(Entry::new("dog", "koira")).unwrap();
        dict.put(Entry::new("bird", "lintu")).unwrap();

        let mut lines = Vec::new();
        dict.for_each(|entry| lines.push(entry.to_string())).unwrap();
        assert_eq!(lines, ["bird — lintu", "cat — kissa", "dog — koira"]);
    }

    #[test]
    fn lookup_failures_keep_their_kinds_apart() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.get(&"fish"), Err(Error::EmptyCollection));

        dict.put(Entry::new("cat", "kissa")).unwrap();
        dict.put(Entry::new("dog", "koira")).unwrap();
        assert_eq!(dict.get(&"fish"), Err(Error::KeyNotFound));
    }

    #[test]
    fn writes_go_through_the_value_only() {
        let mut dict = Dictionary::new();
        dict.put(Entry::new("cat", String::from("kissa"))).unwrap();

        dict.get_mut(&"cat").unwrap().push_str("kin");
        assert_eq!(dict.get(&"cat").unwrap().value(), "kissakin");
    }
}
