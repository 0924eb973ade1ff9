//! The stored key-value pair.

use std::cmp::Ordering;
use std::fmt;

/// A key-value pair as stored in a [`Tree`](crate::Tree) or
/// [`Dictionary`](crate::Dictionary).
///
/// Identity and ordering are determined solely by the key: two entries with
/// equal keys compare equal no matter their values. The value is opaque
/// payload. There is no mutable accessor for the key, so a stored key can
/// never be altered through an entry.
///
/// # Examples
///
/// ```
/// use treedict::Entry;
///
/// let stored = Entry::new("cat", "kissa");
/// let probe: Entry<&str, &str> = Entry::from_key("cat");
///
/// assert_eq!(stored, probe);
/// assert!(stored < Entry::new("dog", "koira"));
/// ```
#[derive(Clone, Debug)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry from a key and a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::Entry;
    ///
    /// let entry = Entry::new("cat", "kissa");
    /// assert_eq!(entry.key(), &"cat");
    /// assert_eq!(entry.value(), &"kissa");
    /// ```
    pub fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }

    /// Returns a reference to the key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::Entry;
    ///
    /// let mut entry = Entry::new("cat", "kissa");
    /// *entry.value_mut() = "katt";
    /// assert_eq!(entry.value(), &"katt");
    /// ```
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the entry, returning the key and the value.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> Entry<K, V>
where
    V: Default,
{
    /// Creates a probe entry from a key alone, with a defaulted value.
    ///
    /// A probe compares equal to any stored entry with the same key, which
    /// makes it usable purely for lookup comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedict::Entry;
    ///
    /// let probe: Entry<&str, &str> = Entry::from_key("cat");
    /// assert_eq!(probe, Entry::new("cat", "kissa"));
    /// ```
    pub fn from_key(key: K) -> Self {
        Entry {
            key,
            value: V::default(),
        }
    }
}

impl<K, V> PartialEq for Entry<K, V>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K, V> Eq for Entry<K, V> where K: Eq {}

impl<K, V> PartialOrd for Entry<K, V>
where
    K: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K, V> Ord for Entry<K, V>
where
    K: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Renders the entry as `key — value`.
///
/// # Examples
///
/// ```
/// use treedict::Entry;
///
/// assert_eq!(Entry::new("cat", "kissa").to_string(), "cat — kissa");
/// ```
impl<K, V> fmt::Display for Entry<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.key, self.value)
    }
}
