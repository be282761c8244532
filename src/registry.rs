//! The mapping from hashable elements to the indices of a [`Forest`].
//!
//! [`Forest`]: ../disjoint_sets/forest/struct.Forest.html

use {
    std::{
        borrow::Borrow,
        hash::{Hash, BuildHasher},
        collections::hash_map::{self, HashMap},
    },
    tracing::debug,
    crate::{
        disjoint_sets::Forest,
        error::{Error, Result},
        group::{Group, Members},
    },
};

/// Registers elements once and gives each a dense index in order of registration.
///
/// The element is stored twice: as the key of `map` and at its index in `keys`,
/// so both directions are a single lookup.
#[derive(Clone)]
pub(crate) struct Registry<K, S> {
    map: HashMap<K, usize, S>,
    keys: Vec<K>,
    pub(crate) forest: Forest,
}

impl<K, S> Registry<K, S> where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            keys: Vec::with_capacity(capacity),
            forest: Forest::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn hasher(&self) -> &S {
        self.map.hasher()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        usize::min(self.map.capacity(), self.forest.capacity())
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
        self.keys.reserve(additional);
        self.forest.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.map.shrink_to_fit();
        self.keys.shrink_to_fit();
        self.forest.shrink_to_fit();
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    /// The registered elements in order of registration.
    #[inline]
    pub(crate) fn keys(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    pub(crate) fn key(&self, index: usize) -> &K {
        &self.keys[index]
    }

    /// Registers `key` in its own set.
    ///
    /// Returns the new index, or `None` if `key` was already registered.
    pub(crate) fn insert(&mut self, key: K) -> Option<usize> where
        K: Clone,
    {
        match self.map.entry(key) {
            hash_map::Entry::Occupied(_) => None,
            hash_map::Entry::Vacant(vacant) => {
                let index = self.forest.push();
                self.keys.push(vacant.key().clone());
                vacant.insert(index);

                Some(index)
            },
        }
    }

    #[inline]
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the index of `key`.
    pub(crate) fn index_of<Q>(&self, key: &Q) -> Result<usize> where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        match self.map.get(key) {
            Some(&index) => Ok(index),
            None => {
                debug!("rejected an element that is not registered");
                Err(Error::NotFound)
            },
        }
    }

    /// Returns the indices of all `keys`, failing if any of them is not registered.
    pub(crate) fn indices_of<'q, Q, I>(&self, keys: I) -> Result<Vec<usize>> where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        keys.into_iter().map(|key| self.index_of(key)).collect()
    }

    /// Returns the index of the root of the set of `key`.
    #[inline]
    pub(crate) fn root_of<Q>(&self, key: &Q) -> Result<usize> where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        Ok(self.forest.find(self.index_of(key)?))
    }

    pub(crate) fn members<Q>(&self, key: &Q) -> Result<Members<'_, K>> where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let index = self.index_of(key)?;

        Ok(Members::new(self.forest.set(index), &self.keys))
    }

    /// Takes a snapshot of all sets, each paired with the value `value` gives for its root.
    ///
    /// The groups are in order of their first registered member.
    pub(crate) fn groups<'a, V, F>(&'a self, mut value: F) -> Vec<Group<'a, K, V>> where
        F: FnMut(usize) -> &'a V,
    {
        self.forest.all_sets()
            .map(|set| {
                let root = set.root();
                let members = set.map(|index| &self.keys[index]).collect();

                Group::new(members, value(root))
            })
            .collect()
    }

    /// Returns `true` if `other` holds the same elements divided in the same sets.
    ///
    /// `same_value` is asked once for every pair of corresponding roots.
    pub(crate) fn same_partition<T, F>(&self, other: &Registry<K, T>, mut same_value: F) -> bool where
        T: BuildHasher,
        F: FnMut(usize, usize) -> bool,
    {
        if self.len() != other.len()
            || self.forest.amount_of_sets() != other.forest.amount_of_sets()
        {
            return false
        }

        // We map the roots of self to the roots of other.
        // With the same elements and the same amount of sets this map can only
        // be consistent if it is a bijection.
        let mut roots = HashMap::with_capacity(self.forest.amount_of_sets());

        for (index, key) in self.keys.iter().enumerate() {
            let other_index = match other.map.get(key) {
                Some(&other_index) => other_index,
                None => return false,
            };

            let self_root = self.forest.find(index);
            let other_root = other.forest.find(other_index);

            match roots.entry(self_root) {
                hash_map::Entry::Occupied(occupied) => {
                    // If we have seen this root we check if we have the same map.
                    if *occupied.get() != other_root {
                        return false
                    }
                },
                hash_map::Entry::Vacant(vacant) => {
                    if !same_value(self_root, other_root) {
                        return false
                    }
                    vacant.insert(other_root);
                },
            }
        }

        true
    }
}
