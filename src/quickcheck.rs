//! `Arbitrary` impls for the public containers.

use compare::Compare;
use quickcheck::{Arbitrary, Gen};

use crate::dictionary::Dictionary;
use crate::tree::Tree;

impl<K, V, C> Arbitrary for Tree<K, V, C>
where
    K: Arbitrary,
    V: Arbitrary,
    C: 'static + Clone + Compare<K> + Default + Send,
{
    fn arbitrary(g: &mut Gen) -> Self {
        Vec::<(K, V)>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut pairs = Vec::with_capacity(self.len());
        let _ = self.for_each(|entry| pairs.push((entry.key().clone(), entry.value().clone())));
        Box::new(pairs.shrink().map(|pairs| pairs.into_iter().collect()))
    }
}

impl<K, V, C> Arbitrary for Dictionary<K, V, C>
where
    K: Arbitrary,
    V: Arbitrary,
    C: 'static + Clone + Compare<K> + Default + Send,
{
    fn arbitrary(g: &mut Gen) -> Self {
        Vec::<(K, V)>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut pairs = Vec::with_capacity(self.len());
        let _ = self.for_each(|entry| pairs.push((entry.key().clone(), entry.value().clone())));
        Box::new(pairs.shrink().map(|pairs| pairs.into_iter().collect()))
    }
}
