//! Randomized properties for the tree and the dictionary facade.

use std::collections::BTreeMap;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use treedict::{Dictionary, Entry, Error, Tree};

/// The container's own semantics as a model: first stored value per key.
fn model(pairs: &[(u8, u16)]) -> BTreeMap<u8, u16> {
    let mut model = BTreeMap::new();
    for &(key, value) in pairs {
        model.entry(key).or_insert(value);
    }
    model
}

fn contents<K, V>(tree: &Tree<K, V>) -> Vec<(K, V)>
where
    K: Copy + Ord,
    V: Copy,
{
    let mut pairs = Vec::with_capacity(tree.len());
    let _ = tree.for_each(|entry| pairs.push((*entry.key(), *entry.value())));
    pairs
}

#[quickcheck]
fn traversal_yields_strictly_ascending_keys(tree: Tree<u16, u16>) -> bool {
    let keys: Vec<u16> = contents(&tree).into_iter().map(|(key, _)| key).collect();
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn count_matches_traversal(tree: Tree<u16, u16>) -> bool {
    let mut visited = 0;
    match tree.for_each(|_| visited += 1) {
        Ok(()) => visited > 0 && tree.len() == visited,
        Err(Error::EmptyCollection) => tree.len() == 0,
        Err(_) => false,
    }
}

#[quickcheck]
fn lookups_match_a_model(pairs: Vec<(u8, u16)>, probes: Vec<u8>) -> bool {
    let tree: Tree<u8, u16> = pairs.iter().copied().collect();
    let model = model(&pairs);

    let stored = model
        .iter()
        .all(|(key, value)| tree.retrieve(key).map(|entry| entry.value()) == Ok(value));

    let expected = if model.is_empty() {
        Error::EmptyCollection
    } else {
        Error::KeyNotFound
    };
    let missing = probes
        .iter()
        .copied()
        .filter(|probe| !model.contains_key(probe))
        .all(|probe| tree.retrieve(&probe) == Err(expected));

    stored && missing
}

#[quickcheck]
fn reinserting_stored_keys_changes_nothing(pairs: Vec<(u8, u16)>) -> TestResult {
    let mut tree: Tree<u8, u16> = pairs.iter().copied().collect();
    if tree.is_empty() {
        return TestResult::discard();
    }

    let model = model(&pairs);
    let before = contents(&tree);

    for &key in model.keys() {
        if tree.insert(Entry::new(key, 0xdead)) != Err(Error::DuplicateKey) {
            return TestResult::failed();
        }
    }

    let intact = model
        .iter()
        .all(|(key, value)| tree.retrieve(key).map(|entry| entry.value()) == Ok(value));
    TestResult::from_bool(contents(&tree) == before && tree.len() == before.len() && intact)
}

#[quickcheck]
fn copies_share_no_structure(pairs: Vec<(u16, u16)>, key: u16, value: u16) -> bool {
    let tree: Tree<u16, u16> = pairs.iter().copied().collect();
    let snapshot = contents(&tree);

    let mut copy = tree.clone();
    let inserted = copy.insert(Entry::new(key, value)).is_ok();

    contents(&tree) == snapshot
        && copy.len() == tree.len() + usize::from(inserted)
        && contents(&copy).len() == copy.len()
}

#[quickcheck]
fn facade_matches_the_tree_it_wraps(pairs: Vec<(u8, u16)>) -> bool {
    let dict: Dictionary<u8, u16> = pairs.iter().copied().collect();
    let tree: Tree<u8, u16> = pairs.iter().copied().collect();

    let mut dict_pairs = Vec::with_capacity(dict.len());
    let _ = dict.for_each(|entry| dict_pairs.push((*entry.key(), *entry.value())));

    dict.len() == tree.len() && dict_pairs == contents(&tree)
}

#[quickcheck]
fn probe_entries_find_the_stored_value(pairs: Vec<(u8, u16)>) -> bool {
    let tree: Tree<u8, u16> = pairs.iter().copied().collect();

    // A key-only probe carries a defaulted value, which must play no part
    // in the comparison.
    model(&pairs).iter().all(|(key, value)| {
        let probe: Entry<u8, u16> = Entry::from_key(*key);
        tree.retrieve(probe.key()).map(|entry| entry.value()) == Ok(value)
    })
}
