//! A [disjoint-sets/union-find] implementation over hashable elements.
//!
//! See [`DisjointSet<T>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet<T>`]: struct.DisjointSet.html

use {
    std::{
        fmt,
        slice,
        borrow::Borrow,
        hash::{Hash, BuildHasher},
        iter::FromIterator,
        collections::hash_map::RandomState,
    },
    crate::{
        error::Result,
        group::{self, Braced, Group, Members},
        registry::Registry,
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] implementation over hashable elements.
///
/// Every element is registered once with `add` and starts out in its own set.
/// Sets can be joined with the `union` and `merge` methods and
/// never split again.
/// Elements are looked up by any borrowed form, the same way a `HashMap` looks up keys.
///
/// The `find` method returns the representative of a set.
/// It compresses the path to the representative as it goes,
/// so although it only borrows the `DisjointSet` it does write to it.
/// This is done with `Cell`s which is why a `DisjointSet` is not `Sync`.
///
/// # Examples
///
/// ```
/// use disjoint_groups::{DisjointSet, Error};
///
/// let mut disjoint_set: DisjointSet<u32> = (1 ..= 8).collect();
/// disjoint_set.merge(&[1, 2, 5, 6, 8])?;
/// disjoint_set.union(&3, &4)?;
///
/// assert!(disjoint_set.group_count() == 3);
/// assert!(disjoint_set.group_size(&1)? == 5);
/// assert!(disjoint_set.linked(&2, &8)?);
/// assert!(!disjoint_set.linked(&2, &3)?);
/// assert!(disjoint_set.find(&9) == Err(Error::NotFound));
///
/// assert!(disjoint_set.to_string() == "DisjointSet([{1, 2, 5, 6, 8}, {3, 4}, {7}])");
/// # Ok::<(), Error>(())
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone)]
pub struct DisjointSet<T, S = RandomState> {
    registry: Registry<T, S>,
}

/// Creates a [`DisjointSet`] containing the arguments.
///
/// There are two forms of the `disjoint_set!` macro:
///
/// - Create a [`DisjointSet`] containing a given list of elements all in distinct sets:
///
/// ```
/// use disjoint_groups::disjoint_set;
///
/// let disjoint_set = disjoint_set!['a', 'b', 'c'];
///
/// assert!(disjoint_set.len() == 3);
/// assert!(disjoint_set.group_count() == 3);
/// ```
///
/// - Create a [`DisjointSet`] containing a given list of elements in the sets specified:
///
/// ```
/// use disjoint_groups::disjoint_set;
///
/// let disjoint_set = disjoint_set![
///     'a' => 0,
///     'b' => 1,
///     'c' => 2,
///     'd' => 1,
///     'e' => 0,
/// ];
///
/// assert!(disjoint_set.linked(&'a', &'e') == Ok(true));
/// assert!(disjoint_set.linked(&'b', &'d') == Ok(true));
/// assert!(disjoint_set.group_size(&'c') == Ok(1));
/// ```
///
/// You can use any identifiers that implement `Hash` and `Eq`.
/// Elements with the same set identifiers will be placed in the same set.
/// These identifiers will only be used when constructing a [`DisjointSet`]
/// and will not be stored further.
/// The elements themselves need to implement `Clone`.
///
/// [`DisjointSet`]: struct.DisjointSet.html
#[macro_export]
macro_rules! disjoint_set {
    ($($elem: expr),* $(,)?) => {
        {
            let len = $crate::disjoint_groups_count_expr![$($elem),*];
            let mut disjoint_set = $crate::DisjointSet::with_capacity(len);

            $(
                disjoint_set.add($elem);
            )*

            disjoint_set
        }
    };
    ($($elem: expr => $set: expr),* $(,)?) => {
        {
            let len = $crate::disjoint_groups_count_expr![$($elem),*];
            let mut disjoint_set = $crate::DisjointSet::with_capacity(len);
            let mut anchors = ::std::collections::HashMap::new();

            $(
                let element = $elem;
                disjoint_set.add(::std::clone::Clone::clone(&element));

                match anchors.entry($set) {
                    ::std::collections::hash_map::Entry::Occupied(occupied) => {
                        // Both elements are registered so this can not fail.
                        let _ = disjoint_set.union(occupied.get(), &element);
                    },
                    ::std::collections::hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(element);
                    },
                }
            )*

            disjoint_set
        }
    };
}

impl<T> DisjointSet<T, RandomState> where
    T: Eq + Hash,
{
    /// Constructs a new, empty `DisjointSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::DisjointSet;
    ///
    /// let disjoint_set: DisjointSet<&str> = DisjointSet::new();
    ///
    /// assert!(disjoint_set.is_empty());
    /// assert!(disjoint_set.group_count() == 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `DisjointSet<T>` with room for `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::with_capacity(10);
    ///
    /// assert!(disjoint_set.len() == 0);
    /// assert!(disjoint_set.capacity() >= 10);
    ///
    /// // This can be done without reallocating.
    /// for i in 0 .. 10 {
    ///     disjoint_set.add(i);
    /// }
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<T, S> DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Constructs a new, empty `DisjointSet<T, S>` which will use `hash_builder` to hash elements.
    #[inline]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            registry: Registry::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns a reference to the `BuildHasher` of the `DisjointSet<T, S>`.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.registry.hasher()
    }

    /// Returns the number of elements the `DisjointSet<T, S>` can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.registry.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.registry.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.registry.shrink_to_fit();
    }

    /// Registers `element` in a set of its own.
    ///
    /// Returns `false` and changes nothing if `element` was already registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::new();
    ///
    /// assert!(disjoint_set.add("a"));
    /// assert!(disjoint_set.add("b"));
    /// assert!(!disjoint_set.add("a"));
    ///
    /// assert!(disjoint_set.len() == 2);
    /// ```
    #[inline]
    pub fn add(&mut self, element: T) -> bool where
        T: Clone,
    {
        self.registry.insert(element).is_some()
    }

    /// Returns `true` if `element` is registered.
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.registry.contains(element)
    }

    /// Returns the amount of registered elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// Returns an iterator over the registered elements in the order they were added.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.registry.keys().iter()
    }

    /// Gives the representative of the set that `element` belongs to.
    ///
    /// Each element of a set gives the same representative.
    /// Every element on the way to the representative is pointed at its grandparent,
    /// so this method writes to the `DisjointSet` even though it only borrows it.
    /// Together with joining by size this gives an amortized complexity of `O(α(n))`
    /// where `α` is the inverse Ackermann function.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `element` is not registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::{DisjointSet, Error};
    ///
    /// let mut disjoint_set: DisjointSet<_> = vec!["a", "b", "c"].into_iter().collect();
    /// disjoint_set.union("b", "c")?;
    ///
    /// assert!(disjoint_set.find("a")? == &"a");
    /// assert!(disjoint_set.find("b")? == disjoint_set.find("c")?);
    /// assert!(disjoint_set.find("d") == Err(Error::NotFound));
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    #[inline]
    pub fn find<Q>(&self, element: &Q) -> Result<&T> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let root = self.registry.root_of(element)?;

        Ok(self.registry.key(root))
    }

    /// Joins the sets of `first` and `second`.
    ///
    /// The representative of the larger set stays the representative,
    /// if both sets have the same size the representative of `first` does.
    /// Returns `true` if two sets were joined and `false` if they already were the same set.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if either element is not registered,
    /// in which case nothing is changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::{disjoint_set, Error};
    ///
    /// let mut disjoint_set = disjoint_set![1, 2, 3, 4];
    ///
    /// // All elements start out in their own sets.
    /// assert!(disjoint_set.group_size(&2)? == 1);
    ///
    /// assert!(disjoint_set.union(&2, &3)?);
    /// assert!(!disjoint_set.union(&3, &2)?);
    ///
    /// // Now 2 and 3 share a set.
    /// assert!(disjoint_set.group_size(&2)? == 2);
    /// assert!(disjoint_set.group_size(&3)? == 2);
    /// assert!(disjoint_set.group_count() == 3);
    ///
    /// assert!(disjoint_set.union(&4, &5) == Err(Error::NotFound));
    /// assert!(disjoint_set.group_count() == 3);
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    pub fn union<Q1, Q2>(&mut self, first: &Q1, second: &Q2) -> Result<bool> where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ?Sized,
        Q2: Eq + Hash + ?Sized,
    {
        let i = self.registry.index_of(first)?;
        let j = self.registry.index_of(second)?;

        Ok(self.registry.forest.union(i, j).is_some())
    }

    /// Joins the sets of all `elements`.
    ///
    /// This is a left fold of `union` over `elements`.
    /// All elements are looked up before any set is joined, so if one of them is
    /// not registered nothing is changed.
    /// Fewer than two elements join nothing.
    /// Returns the amount of joins that changed the sets.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if any of the elements is not registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::{disjoint_set, Error};
    ///
    /// let mut disjoint_set = disjoint_set!["a", "b", "c", "d", "e"];
    ///
    /// assert!(disjoint_set.merge(&["a", "b", "c", "a"])? == 2);
    /// assert!(disjoint_set.group_size("b")? == 3);
    ///
    /// assert!(disjoint_set.merge(&["d", "e", "f"]) == Err(Error::NotFound));
    /// assert!(!disjoint_set.linked("d", "e")?);
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    pub fn merge<'q, Q, I>(&mut self, elements: I) -> Result<usize> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        let indices = self.registry.indices_of(elements)?;

        Ok(self.registry.forest.union_all(&indices, |_| ()))
    }

    /// Returns `true` if `first` and `second` are in the same set.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if either element is not registered.
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    #[inline]
    pub fn linked<Q1, Q2>(&self, first: &Q1, second: &Q2) -> Result<bool> where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ?Sized,
        Q2: Eq + Hash + ?Sized,
    {
        let i = self.registry.index_of(first)?;
        let j = self.registry.index_of(second)?;

        Ok(self.registry.forest.same_set(i, j))
    }

    /// Returns the amount of elements in the set that `element` belongs to.
    ///
    /// The representative keeps the size of its set, so this is as fast as `find`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `element` is not registered.
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    #[inline]
    pub fn group_size<Q>(&self, element: &Q) -> Result<usize> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        Ok(self.registry.forest.len_of_set(self.registry.index_of(element)?))
    }

    /// Returns the amount of sets.
    ///
    /// This is kept up to date by `add` and `union` and takes `O(1)` time.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.registry.forest.amount_of_sets()
    }

    /// Returns an iterator over the elements of the set that `element` belongs to.
    ///
    /// The representative is returned first, the order of the others is not specified.
    /// Iterating takes time linear in the size of the set.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `element` is not registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::{disjoint_set, Error};
    ///
    /// let disjoint_set = disjoint_set![
    ///     'a' => "first set",
    ///     'b' => "first set",
    ///     'c' => "second set",
    ///     'd' => "second set",
    /// ];
    ///
    /// let mut members: Vec<char> = disjoint_set.group(&'d')?.copied().collect();
    /// members.sort();
    ///
    /// assert!(members == ['c', 'd']);
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
    #[inline]
    pub fn group<Q>(&self, element: &Q) -> Result<Members<'_, T>> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.registry.members(element)
    }

    /// Returns a snapshot of all sets.
    ///
    /// The groups are in order of their first added element.
    /// This takes `O(n α(n))` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::disjoint_set;
    ///
    /// let disjoint_set = disjoint_set![
    ///     0 => 'a',
    ///     1 => 'a',
    ///     2 => 'b',
    ///     3 => 'b',
    ///     4 => 'c',
    ///     5 => 'c',
    /// ];
    ///
    /// for group in disjoint_set.groups() {
    ///     assert!(group.len() == 2);
    ///     for &element in &group {
    ///         assert!(disjoint_set.linked(&element, group.members()[0]) == Ok(true));
    ///     }
    /// }
    /// ```
    #[inline]
    pub fn groups(&self) -> Vec<Group<'_, T>> {
        self.registry.groups(|_| &())
    }

    /// Returns the sets in canonical order.
    ///
    /// The elements of each group are sorted and
    /// the groups are sorted by descending size and then by their elements.
    /// Two `DisjointSet`s that are equal have equal descriptions.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::disjoint_set;
    ///
    /// let disjoint_set = disjoint_set![
    ///     5 => 'x',
    ///     4 => 'y',
    ///     3 => 'x',
    ///     2 => 'z',
    /// ];
    ///
    /// let groups: Vec<Vec<i32>> = disjoint_set
    ///     .describe()
    ///     .into_iter()
    ///     .map(|group| group.into_iter().copied().collect())
    ///     .collect();
    ///
    /// assert!(groups == vec![vec![3, 5], vec![2], vec![4]]);
    /// ```
    pub fn describe(&self) -> Vec<Group<'_, T>> where
        T: Ord,
    {
        let mut groups = self.groups();
        group::canonicalize(&mut groups);

        groups
    }

    /// Returns `true` if `other` has the same elements divided in the same sets.
    ///
    /// Neither the order of registration nor the order of the joins matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_groups::{DisjointSet, Error};
    ///
    /// let mut first: DisjointSet<_> = (1 ..= 4).collect();
    /// first.union(&1, &2)?;
    /// first.union(&2, &3)?;
    ///
    /// let mut second: DisjointSet<_> = (1 ..= 4).rev().collect();
    /// second.union(&3, &1)?;
    /// second.union(&2, &1)?;
    ///
    /// assert!(first.equals(&second));
    ///
    /// second.union(&4, &1)?;
    /// assert!(!first.equals(&second));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn equals<U>(&self, other: &DisjointSet<T, U>) -> bool where
        U: BuildHasher,
    {
        self.registry.same_partition(&other.registry, |_, _| true)
    }
}

impl<T> Default for DisjointSet<T, RandomState> where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> fmt::Debug for DisjointSet<T, S> where
    T: Eq + Hash + Ord + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let groups = self.describe();

        formatter.debug_tuple("DisjointSet")
            .field(&DebugGroups(&groups))
            .finish()
    }
}

struct DebugGroups<'g, 'a, T>(&'g [Group<'a, T>]);

impl<'g, 'a, T> fmt::Debug for DebugGroups<'g, 'a, T> where T: fmt::Debug {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_list()
            .entries(self.0.iter().map(|group| Braced(group.members())))
            .finish()
    }
}

impl<T, S> fmt::Display for DisjointSet<T, S> where
    T: Eq + Hash + Ord + fmt::Display,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("DisjointSet([")?;

        for (position, group) in self.describe().iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{}", Braced(group.members()))?;
        }

        formatter.write_str("])")
    }
}

impl<T, S, U> PartialEq<DisjointSet<T, U>> for DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
    U: BuildHasher,
{
    fn eq(&self, other: &DisjointSet<T, U>) -> bool {
        self.equals(other)
    }
}

impl<T, S> Eq for DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{}

impl<T, S> FromIterator<T> for DisjointSet<T, S> where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = T> {
        let iter = iter.into_iter();
        let mut disjoint_set = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());

        disjoint_set.extend(iter);

        disjoint_set
    }
}

impl<T, S> Extend<T> for DisjointSet<T, S> where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = T> {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for element in iter {
            self.add(element);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for DisjointSet<T, S> where
    T: Eq + Hash + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = &'a T> {
        self.extend(iter.into_iter().cloned());
    }
}

impl<'a, T, S> IntoIterator for &'a DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

#[cfg(feature = "rayon")]
impl<T, S> FromParallelIterator<T> for DisjointSet<T, S> where
    T: Eq + Hash + Clone + Send,
    S: BuildHasher + Default,
{
    fn from_par_iter<I>(par_iter: I) -> Self where I: IntoParallelIterator<Item = T> {
        let elements: Vec<T> = par_iter.into_par_iter().collect();

        elements.into_iter().collect()
    }
}

#[cfg(feature = "rayon")]
impl<T, S> ParallelExtend<T> for DisjointSet<T, S> where
    T: Eq + Hash + Clone + Send,
    S: BuildHasher,
{
    fn par_extend<I>(&mut self, par_iter: I) where I: IntoParallelIterator<Item = T> {
        // The elements are collected in parallel but registered in order.
        let elements: Vec<T> = par_iter.into_par_iter().collect();

        self.extend(elements);
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for DisjointSet<T> where
    T: Arbitrary + Eq + Hash + Ord + Clone + 'static,
    T::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        use std::collections::hash_map;

        let (size_range, params) = params;
        let params = (size_range, (params, ()));

        (Vec::<(T, usize)>::arbitrary_with(params)).prop_map(|vec| {
            let mut disjoint_set = Self::with_capacity(vec.len());

            // We map a `set_number` to an element of that set.
            let mut anchors = hash_map::HashMap::with_capacity(vec.len());

            for (element, set_number) in vec {
                disjoint_set.add(element.clone());

                // Few trailing zeros are the most likely so the sets have varying sizes.
                match anchors.entry(set_number.trailing_zeros()) {
                    hash_map::Entry::Occupied(occupied) => {
                        let _ = disjoint_set.union(occupied.get(), &element);
                    },
                    hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(element);
                    },
                }
            }

            disjoint_set
        }).boxed()
    }
}
