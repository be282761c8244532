//! A [disjoint-sets/union-find] implementation that folds a value over each set.
//!
//! See [`DisjointSetFold<K, V, F>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSetFold<K, V, F>`]: struct.DisjointSetFold.html

use {
    std::{
        fmt,
        slice,
        borrow::Borrow,
        hash::{Hash, BuildHasher},
        iter::{
            Enumerate,
            FusedIterator,
        },
        collections::hash_map::RandomState,
    },
    tracing::debug,
    crate::{
        disjoint_sets::{Forest, Merge},
        error::{Error, Result},
        group::{self, Braced, Group, Members},
        registry::Registry,
    },
};

/// A [disjoint-sets/union-find] implementation where every set carries a value.
///
/// Each key is registered with `set` together with its initial value and starts out
/// in its own set.
/// When two sets are joined their values are combined with the operator given
/// at construction as `op(winner, loser)`, where `winner` is the value of the set
/// whose representative stays the representative.
/// The operator is expected to be associative.
/// If it is commutative as well the value of a set does not depend on the order
/// of the joins.
///
/// # Examples
///
/// ```
/// use disjoint_groups::{DisjointSetFold, Error};
///
/// let mut totals = DisjointSetFold::from_items(|a: u32, b: u32| a + b, vec![
///     ("rent", 1200),
///     ("power", 80),
///     ("water", 40),
///     ("food", 300),
/// ])?;
///
/// totals.union("power", "water")?;
///
/// assert!(totals.get("water")? == &120);
/// assert!(totals.get("food")? == &300);
/// assert!(totals.group_count() == 3);
///
/// assert!(totals.set("food", 0) == Err(Error::DuplicateKey));
/// # Ok::<(), Error>(())
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone)]
pub struct DisjointSetFold<K, V, F, S = RandomState> {
    registry: Registry<K, S>,
    /// The value of each set, stored at the index of its root.
    /// Every other index holds `None`.
    values: Vec<Option<V>>,
    op: F,
}

impl<K, V, F> DisjointSetFold<K, V, F, RandomState> where
    K: Eq + Hash,
    F: Fn(V, V) -> V,
{
    /// Constructs a new, empty `DisjointSetFold` which combines values with `op`.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::DisjointSetFold;
    ///
    /// let fold: DisjointSetFold<char, u64, _> = DisjointSetFold::new(u64::max);
    ///
    /// assert!(fold.is_empty());
    /// ```
    #[inline]
    pub fn new(op: F) -> Self {
        Self::with_capacity(op, 0)
    }

    #[inline]
    pub fn with_capacity(op: F, capacity: usize) -> Self {
        Self::with_capacity_and_hasher(op, capacity, RandomState::new())
    }

    /// Constructs a `DisjointSetFold` and sets all `items` as with `update`.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if a key occurs twice in `items`.
    ///
    /// [`Error::DuplicateKey`]: error/enum.Error.html#variant.DuplicateKey
    pub fn from_items<I>(op: F, items: I) -> Result<Self> where
        K: Clone,
        I: IntoIterator<Item = (K, V)>,
    {
        let items = items.into_iter();
        let mut fold = Self::with_capacity(op, items.size_hint().0);

        fold.update(items)?;

        Ok(fold)
    }
}

impl<K, V, F, S> DisjointSetFold<K, V, F, S> where
    K: Eq + Hash,
    F: Fn(V, V) -> V,
    S: BuildHasher,
{
    #[inline]
    pub fn with_hasher(op: F, hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(op, 0, hash_builder)
    }

    pub fn with_capacity_and_hasher(op: F, capacity: usize, hash_builder: S) -> Self {
        Self {
            registry: Registry::with_capacity_and_hasher(capacity, hash_builder),
            values: Vec::with_capacity(capacity),
            op,
        }
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        self.registry.hasher()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        usize::min(self.registry.capacity(), self.values.capacity())
    }

    pub fn reserve(&mut self, additional: usize) {
        self.registry.reserve(additional);
        self.values.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.registry.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    /// Registers `key` in a set of its own with `value` as the value of that set.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if `key` is already registered, in which case nothing is changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::{DisjointSetFold, Error};
    ///
    /// let mut fold = DisjointSetFold::new(|a: String, b: String| a + &b);
    ///
    /// fold.set('a', "a".to_owned())?;
    /// fold.set('b', "b".to_owned())?;
    ///
    /// assert!(fold.set('a', "c".to_owned()) == Err(Error::DuplicateKey));
    /// assert!(fold.get(&'a')? == "a");
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [`Error::DuplicateKey`]: error/enum.Error.html#variant.DuplicateKey
    pub fn set(&mut self, key: K, value: V) -> Result<()> where
        K: Clone,
    {
        match self.registry.insert(key) {
            Some(index) => {
                debug_assert!(index == self.values.len());
                self.values.push(Some(value));

                Ok(())
            },
            None => {
                debug!("rejected a key that is already registered");
                Err(Error::DuplicateKey)
            },
        }
    }

    /// Sets every `(key, value)` pair of `items` in order.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] at the first key that is already registered.
    /// The pairs before it stay registered, the pairs after it are not looked at.
    ///
    /// [`Error::DuplicateKey`]: error/enum.Error.html#variant.DuplicateKey
    pub fn update<I>(&mut self, items: I) -> Result<()> where
        K: Clone,
        I: IntoIterator<Item = (K, V)>,
    {
        let items = items.into_iter();
        self.reserve(items.size_hint().0);

        for (key, value) in items {
            self.set(key, value)?;
        }

        Ok(())
    }

    /// Returns the value of the set that `key` belongs to.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `key` is not registered.
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    pub fn get<Q>(&self, key: &Q) -> Result<&V> where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let root = self.registry.root_of(key)?;

        Ok(root_value(&self.values, root))
    }

    /// Returns `true` if `key` is registered.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.registry.contains(key)
    }

    /// Returns the amount of registered keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// Returns an iterator over the registered keys in the order they were set.
    #[inline]
    pub fn keys(&self) -> slice::Iter<'_, K> {
        self.registry.keys().iter()
    }

    /// Returns an iterator over the keys in the order they were set,
    /// each with the value of its set.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            keys: self.registry.keys().iter().enumerate(),
            forest: &self.registry.forest,
            values: &self.values,
        }
    }

    /// Gives the representative of the set that `key` belongs to.
    ///
    /// This compresses the path to the representative like [`DisjointSet::find`].
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `key` is not registered.
    ///
    /// [`DisjointSet::find`]: struct.DisjointSet.html#method.find
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Result<&K> where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let root = self.registry.root_of(key)?;

        Ok(self.registry.key(root))
    }

    /// Joins the sets of `first` and `second` and combines their values.
    ///
    /// The representative of the larger set stays the representative,
    /// if both sets have the same size the representative of `first` does.
    /// The new value is `op(winner, loser)`.
    /// Returns `true` if two sets were joined and `false` if they already were the same set.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if either key is not registered, in which case nothing is changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::{DisjointSetFold, Error};
    ///
    /// let mut fold = DisjointSetFold::from_items(
    ///     |a: Vec<u8>, b: Vec<u8>| [a, b].concat(),
    ///     vec![(1, vec![1]), (2, vec![2]), (3, vec![3])],
    /// )?;
    ///
    /// // Equal sizes so the first key wins and its value comes first.
    /// assert!(fold.union(&2, &1)?);
    /// assert!(fold.get(&1)? == &[2, 1]);
    ///
    /// // The larger set wins.
    /// assert!(fold.union(&3, &1)?);
    /// assert!(fold.get(&3)? == &[2, 1, 3]);
    ///
    /// assert!(!fold.union(&1, &3)?);
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    pub fn union<Q1, Q2>(&mut self, first: &Q1, second: &Q2) -> Result<bool> where
        K: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ?Sized,
        Q2: Eq + Hash + ?Sized,
    {
        let i = self.registry.index_of(first)?;
        let j = self.registry.index_of(second)?;

        match self.registry.forest.union(i, j) {
            Some(merge) => {
                fold_values(&mut self.values, &self.op, merge);
                Ok(true)
            },
            None => Ok(false),
        }
    }

    /// Joins the sets of all `keys` and combines their values.
    ///
    /// This is a left fold of `union` over `keys`.
    /// All keys are looked up before any set is joined, so if one of them is
    /// not registered nothing is changed.
    /// Returns the amount of joins that changed the sets.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if any of the keys is not registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::{DisjointSetFold, Error};
    ///
    /// let mut fold = DisjointSetFold::from_items(u32::min, (0 .. 6).map(|i| (i, 10 - i)))?;
    ///
    /// assert!(fold.merge(&[0, 2, 4])? == 2);
    /// assert!(fold.get(&0)? == &6);
    /// assert!(fold.get(&1)? == &9);
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    pub fn merge<'q, Q, I>(&mut self, keys: I) -> Result<usize> where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        let indices = self.registry.indices_of(keys)?;

        let values = &mut self.values;
        let op = &self.op;

        Ok(self.registry.forest.union_all(&indices, |merge| fold_values(values, op, merge)))
    }

    /// Returns `true` if `first` and `second` are in the same set.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if either key is not registered.
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    #[inline]
    pub fn linked<Q1, Q2>(&self, first: &Q1, second: &Q2) -> Result<bool> where
        K: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ?Sized,
        Q2: Eq + Hash + ?Sized,
    {
        let i = self.registry.index_of(first)?;
        let j = self.registry.index_of(second)?;

        Ok(self.registry.forest.same_set(i, j))
    }

    /// Returns the amount of keys in the set that `key` belongs to.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `key` is not registered.
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    #[inline]
    pub fn group_size<Q>(&self, key: &Q) -> Result<usize> where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        Ok(self.registry.forest.len_of_set(self.registry.index_of(key)?))
    }

    /// Returns the amount of sets, which is also the amount of values.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.registry.forest.amount_of_sets()
    }

    /// Returns an iterator over the keys of the set that `key` belongs to.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `key` is not registered.
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    #[inline]
    pub fn group<Q>(&self, key: &Q) -> Result<Members<'_, K>> where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.registry.members(key)
    }

    /// Returns a snapshot of all sets together with their values.
    ///
    /// The groups are in order of their first registered key.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::{DisjointSetFold, Error};
    ///
    /// let mut fold = DisjointSetFold::from_items(|a: i32, b: i32| a * b, vec![
    ///     ('a', 2),
    ///     ('b', 3),
    ///     ('c', 5),
    /// ])?;
    /// fold.union(&'c', &'a')?;
    ///
    /// let groups = fold.groups();
    ///
    /// assert!(groups.len() == 2);
    /// assert!(groups[0].len() == 2 && *groups[0].value() == 10);
    /// assert!(groups[1].members() == [&'b'] && *groups[1].value() == 3);
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn groups(&self) -> Vec<Group<'_, K, V>> {
        self.registry.groups(|root| root_value(&self.values, root))
    }

    /// Returns the sets and their values in canonical order.
    ///
    /// The keys of each group are sorted and
    /// the groups are sorted by descending size and then by their keys.
    pub fn describe(&self) -> Vec<Group<'_, K, V>> where
        K: Ord,
    {
        let mut groups = self.groups();
        group::canonicalize(&mut groups);

        groups
    }

    /// Returns `true` if `other` has the same keys divided in the same sets
    /// and the corresponding sets have equal values.
    ///
    /// The operators are not compared.
    pub fn equals<G, U>(&self, other: &DisjointSetFold<K, V, G, U>) -> bool where
        V: PartialEq,
        G: Fn(V, V) -> V,
        U: BuildHasher,
    {
        self.registry.same_partition(&other.registry, |self_root, other_root| {
            self.values[self_root] == other.values[other_root]
        })
    }
}

/// Returns the value of the set that `root` is the representative of.
///
/// # Panics
///
/// If `root` is not a representative.
fn root_value<V>(values: &[Option<V>], root: usize) -> &V {
    values[root].as_ref().expect("every root holds a value")
}

/// Replaces the value of the winner with `op(winner, loser)` and removes the value of the loser.
fn fold_values<V, F>(values: &mut [Option<V>], op: &F, merge: Merge) where
    F: Fn(V, V) -> V,
{
    let loser = values[merge.loser].take();
    let winner = values[merge.winner].take();
    debug_assert!(winner.is_some() && loser.is_some(), "every root holds a value");

    values[merge.winner] = match (winner, loser) {
        (Some(winner), Some(loser)) => Some(op(winner, loser)),
        (winner, loser) => winner.or(loser),
    };
}

impl<K, V, F, S> fmt::Debug for DisjointSetFold<K, V, F, S> where
    K: Eq + Hash + Ord + fmt::Debug,
    V: fmt::Debug,
    F: Fn(V, V) -> V,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let groups = self.describe();

        formatter.debug_tuple("DisjointSetFold")
            .field(&DebugGroups(&groups))
            .finish()
    }
}

struct DebugGroups<'g, 'a, K, V>(&'g [Group<'a, K, V>]);

impl<'g, 'a, K, V> fmt::Debug for DebugGroups<'g, 'a, K, V> where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_list()
            .entries(self.0.iter().map(|group| (Braced(group.members()), group.value())))
            .finish()
    }
}

impl<K, V, F, S> fmt::Display for DisjointSetFold<K, V, F, S> where
    K: Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
    F: Fn(V, V) -> V,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("DisjointSetFold([")?;

        for (position, group) in self.describe().iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "({}, {})", Braced(group.members()), group.value())?;
        }

        formatter.write_str("])")
    }
}

impl<K, V, F, S, G, U> PartialEq<DisjointSetFold<K, V, G, U>> for DisjointSetFold<K, V, F, S> where
    K: Eq + Hash,
    V: PartialEq,
    F: Fn(V, V) -> V,
    S: BuildHasher,
    G: Fn(V, V) -> V,
    U: BuildHasher,
{
    fn eq(&self, other: &DisjointSetFold<K, V, G, U>) -> bool {
        self.equals(other)
    }
}

impl<'a, K, V, F, S> IntoIterator for &'a DisjointSetFold<K, V, F, S> where
    K: Eq + Hash,
    F: Fn(V, V) -> V,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// An iterator over the keys of a `DisjointSetFold` with the values of their sets.
///
/// This struct is created by the [`iter`] method on [`DisjointSetFold`].
///
/// [`iter`]: struct.DisjointSetFold.html#method.iter
/// [`DisjointSetFold`]: struct.DisjointSetFold.html
#[derive(Clone)]
pub struct Iter<'a, K: 'a, V: 'a> {
    keys: Enumerate<slice::Iter<'a, K>>,
    forest: &'a Forest,
    values: &'a [Option<V>],
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let (index, key) = self.keys.next()?;

        Some((key, root_value(self.values, self.forest.find(index))))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> fmt::Debug for Iter<'a, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_struct("Iter")
            .field("remaining", &self.keys.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(first: i64, second: i64) -> i64 {
        first + second
    }

    fn scenario() -> DisjointSetFold<u32, i64, fn(i64, i64) -> i64> {
        let items = (1 ..= 8).map(|key| (key, i64::from(key)));
        let mut fold = DisjointSetFold::from_items(sum as fn(i64, i64) -> i64, items)
            .expect("distinct keys");
        for &(x, y) in &[(1, 2), (1, 5), (1, 6), (1, 8), (3, 4), (7, 7)] {
            fold.union(&x, &y).expect("registered");
        }
        fold
    }

    #[test]
    fn values_follow_unions() {
        let fold = scenario();
        assert_eq!(fold.get(&8), Ok(&22));
        assert_eq!(fold.get(&4), Ok(&7));
        assert_eq!(fold.get(&7), Ok(&7));
        assert_eq!(fold.group_count(), 3);
        assert_eq!(fold.group_size(&2), Ok(5));
        assert_eq!(fold.len(), 8);
    }

    #[test]
    fn only_roots_hold_values() {
        let fold = scenario();
        let live = fold.values.iter().filter(|value| value.is_some()).count();
        assert_eq!(live, fold.group_count());
        for (index, value) in fold.values.iter().enumerate() {
            assert_eq!(value.is_some(), fold.registry.forest.find(index) == index);
        }
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut fold = scenario();
        assert_eq!(fold.set(3, 100), Err(Error::DuplicateKey));
        assert_eq!(fold.get(&3), Ok(&7));
        assert_eq!(fold.len(), 8);

        let items = vec![(1, 1), (2, 2), (1, 3), (4, 4)];
        let mut partial = DisjointSetFold::new(sum);
        assert_eq!(partial.update(items), Err(Error::DuplicateKey));
        assert_eq!(partial.len(), 2);
        assert!(!partial.contains(&4));
    }

    #[test]
    fn unregistered_keys_are_not_found() {
        let mut fold = scenario();
        assert_eq!(fold.get(&9), Err(Error::NotFound));
        assert_eq!(fold.find(&9), Err(Error::NotFound));
        assert_eq!(fold.union(&1, &9), Err(Error::NotFound));
        assert_eq!(fold.merge(&[3, 7, 9]), Err(Error::NotFound));
        assert_eq!(fold.linked(&3, &7), Ok(false));
        assert_eq!(fold.get(&3), Ok(&7));
    }

    #[test]
    fn reducer_gets_winner_then_loser() {
        let mut fold = DisjointSetFold::new(|a: String, b: String| a + &b);
        for key in ["x", "y", "z"].iter() {
            fold.set(*key, key.to_string()).expect("distinct keys");
        }
        fold.union("y", "x").expect("registered");
        assert_eq!(fold.get("x").map(String::as_str), Ok("yx"));
        fold.union("z", "x").expect("registered");
        assert_eq!(fold.get("z").map(String::as_str), Ok("yxz"));
    }

    #[test]
    fn merge_folds_every_set() {
        let mut fold = scenario();
        assert_eq!(fold.merge(&[7, 3, 1]), Ok(2));
        assert_eq!(fold.get(&4), Ok(&36));
        assert_eq!(fold.group_count(), 1);
    }

    #[test]
    fn iter_pairs_keys_with_set_values() {
        let fold = scenario();
        let pairs: Vec<(u32, i64)> = fold.iter().map(|(&key, &value)| (key, value)).collect();
        assert_eq!(pairs, vec![
            (1, 22), (2, 22), (3, 7), (4, 7), (5, 22), (6, 22), (7, 7), (8, 22),
        ]);
        assert_eq!(fold.keys().count(), 8);
    }

    #[test]
    fn iter_knows_its_length() {
        let fold = scenario();
        let mut iter = fold.iter();
        assert_eq!(iter.len(), 8);
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (6, Some(6)));
        assert_eq!(iter.count(), 6);
    }

    #[test]
    #[should_panic(expected = "every root holds a value")]
    fn missing_root_value_is_a_broken_invariant() {
        let values: Vec<Option<i64>> = vec![Some(1), None];
        root_value(&values, 1);
    }

    #[test]
    fn equality_compares_values() {
        let first = scenario();
        let items = (1 ..= 8u32).rev().map(|key| (key, i64::from(key)));
        let mut second = DisjointSetFold::from_items(|a: i64, b: i64| b + a, items)
            .expect("distinct keys");
        for &(x, y) in &[(8, 6), (6, 5), (5, 2), (2, 1), (3, 4), (7, 7)] {
            second.union(&x, &y).expect("registered");
        }
        assert!(first == second);
        assert!(first.equals(&second));

        let mut third = DisjointSetFold::new(sum);
        for key in 1 ..= 8u32 {
            third.set(key, 1).expect("distinct keys");
        }
        for &(x, y) in &[(1, 2), (1, 5), (1, 6), (1, 8), (3, 4)] {
            third.union(&x, &y).expect("registered");
        }
        assert!(first != third);
    }

    #[test]
    fn display_is_canonical() {
        let fold = scenario();
        assert_eq!(
            fold.to_string(),
            "DisjointSetFold([({1, 2, 5, 6, 8}, 22), ({3, 4}, 7), ({7}, 7)])",
        );
    }

    #[test]
    fn debug_lists_groups_with_values() {
        let fold = DisjointSetFold::from_items(sum, vec![("a", 1), ("b", 2)]).expect("distinct keys");
        assert_eq!(format!("{:?}", fold), r#"DisjointSetFold([({"a"}, 1), ({"b"}, 2)])"#);
    }

    #[test]
    fn debug_does_not_depend_on_union_order() {
        let mut first = DisjointSetFold::from_items(sum, (1 ..= 4u32).map(|key| (key, i64::from(key))))
            .expect("distinct keys");
        first.union(&1, &2).expect("registered");
        first.union(&1, &3).expect("registered");

        let mut second = DisjointSetFold::from_items(sum, (1 ..= 4u32).rev().map(|key| (key, i64::from(key))))
            .expect("distinct keys");
        second.union(&3, &2).expect("registered");
        second.union(&3, &1).expect("registered");

        assert!(first == second);
        assert_eq!(format!("{:?}", first), format!("{:?}", second));
        assert_eq!(format!("{:?}", first), "DisjointSetFold([({1, 2, 3}, 6), ({4}, 4)])");
    }
}
