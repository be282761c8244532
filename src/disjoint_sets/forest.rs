//! A [disjoint-sets/union-find] forest over the indices `0 .. len`.
//!
//! See [`Forest`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

use {
    std::{
        ops,
        iter::FusedIterator,
    },
    tracing::trace,
    crate::disjoint_sets::metadata::Metadata,
};

/// The result of joining two different sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Merge {
    /// The root of the joined set.
    pub(crate) winner: usize,
    /// The former root which is now a child of `winner`.
    pub(crate) loser: usize,
}

/// A forest of parent pointers where every tree is one set.
///
/// Each index is a member of exactly one set.
/// Initially each index has its own set but sets can be joined with the `union` method.
///
/// Next to the parent pointer we store an additional index for each element.
/// These indices form a circular linked list of the set the element is in.
/// This allows for iteration of a set in time linear to its size using the `set` method.
///
/// The `find` method compresses paths while only borrowing the forest.
/// This is why the metadata lives in `Cell`s and why a `Forest` is not `Sync`.
#[derive(Clone, Debug)]
pub(crate) struct Forest {
    /// The metadata for each index.
    meta: Vec<Metadata>,
    /// The amount of roots, which is the amount of sets.
    sets: usize,
}

impl Forest {
    /// Constructs a new, empty `Forest` with room for `capacity` indices.
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            meta: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Returns the amount of indices in the `Forest`.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.meta.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.meta.capacity()
    }

    #[inline]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.meta.reserve(additional);
    }

    #[inline]
    pub(crate) fn shrink_to_fit(&mut self) {
        self.meta.shrink_to_fit();
    }

    /// Adds a new index in its own set and returns it.
    #[inline]
    pub(crate) fn push(&mut self) -> usize {
        let index = self.meta.len();

        self.meta.push(Metadata::new(index));
        self.sets += 1;

        index
    }

    /// Gives the representative of the set that `index` belongs to.
    ///
    /// Every index on the way to the root is pointed at its grandparent.
    /// Together with `union` joining by size this gives an amortized
    /// complexity of `O(α(n))` where `α` is the inverse Ackermann function.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub(crate) fn find(&self, mut index: usize) -> usize {
        loop {
            let parent = self.meta[index].parent();

            // If the node is its own parent we have found the root.
            if parent == index {
                return index
            }

            let grandparent = self.meta[parent].parent();
            self.meta[index].set_parent(grandparent);
            index = grandparent;
        }
    }

    /// Joins the sets of `first_index` and `second_index`.
    ///
    /// The root of the smaller set is placed under the root of the larger set.
    /// If both sets have the same size the root of `first_index` stays the root.
    /// Returns `None` if both indices already share a set.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    pub(crate) fn union(&mut self, first_index: usize, second_index: usize) -> Option<Merge> {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return None
        }

        // We swap the values of the links which splices the two circular lists.
        let link_i = self.meta[i].link();
        let link_j = self.meta[j].link();
        self.meta[i].set_link(link_j);
        self.meta[j].set_link(link_i);

        // We add to the tree with the most elements.
        let (winner, loser) = if self.meta[i].size() < self.meta[j].size() {
            (j, i)
        } else {
            (i, j)
        };

        let size = self.meta[winner].size() + self.meta[loser].take_size();
        self.meta[winner].set_size(size);
        self.meta[loser].set_parent(winner);
        self.sets -= 1;

        trace!(winner, loser, size, "joined sets");

        Some(Merge { winner, loser })
    }

    /// Joins the sets of all `indices` as a left fold of `union`.
    ///
    /// `on_merge` is called after every join that changed the partition,
    /// the amount of these joins is returned.
    ///
    /// # Panics
    ///
    /// If any of the `indices` is out of bounds.
    pub(crate) fn union_all<F>(&mut self, indices: &[usize], mut on_merge: F) -> usize where
        F: FnMut(Merge),
    {
        let (&first, rest) = match indices.split_first() {
            Some(split) => split,
            None => return 0,
        };

        let mut root = self.find(first);
        let mut count = 0;

        for &index in rest {
            if let Some(merge) = self.union(root, index) {
                root = merge.winner;
                count += 1;
                on_merge(merge);
            }
        }

        count
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    #[inline]
    pub(crate) fn same_set(&self, first_index: usize, second_index: usize) -> bool {
        self.find(first_index) == self.find(second_index)
    }

    /// Returns the amount of elements in the set that `index` belongs to.
    ///
    /// This will be done in `O(α(n))` time since the root keeps the size of its set.
    #[inline]
    pub(crate) fn len_of_set(&self, index: usize) -> usize {
        self.meta[self.find(index)].size()
    }

    /// Returns the amount of sets in the `Forest`.
    ///
    /// This will be done in `O(1)` time.
    #[inline]
    pub(crate) fn amount_of_sets(&self) -> usize {
        self.sets
    }

    /// Returns an iterator over the indices of the set that `index` belongs to.
    ///
    /// The root is returned first, the order of the other indices is not specified.
    #[inline]
    pub(crate) fn set(&self, index: usize) -> Set<'_> {
        let root = self.find(index);

        Set {
            forest: self,
            current: Some(root),
            root,
        }
    }

    /// Returns an iterator over all sets of the `Forest`.
    ///
    /// The sets are returned in order by their first member.
    #[inline]
    pub(crate) fn all_sets(&self) -> AllSets<'_> {
        let len = self.len();

        AllSets {
            forest: self,
            done: bit_vec![false; len],
            range: 0 .. len,
        }
    }
}

/// An iterator over the indices of a set in a `Forest`.
///
/// This struct is created by the [`set`] method on [`Forest`].
///
/// [`set`]: struct.Forest.html#method.set
/// [`Forest`]: struct.Forest.html
#[derive(Clone, Debug)]
pub(crate) struct Set<'a> {
    forest: &'a Forest,
    current: Option<usize>,
    root: usize,
}

impl<'a> Set<'a> {
    /// The representative of the set being iterated.
    #[inline]
    pub(crate) fn root(&self) -> usize {
        self.root
    }
}

impl<'a> Iterator for Set<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.current?;

        // We visit every member anyway so we can point it directly at the root.
        self.forest.meta[current].set_parent(self.root);

        let next = self.forest.meta[current].link();

        // We started at the root.
        self.current = if next == self.root {
            None
        } else {
            Some(next)
        };

        Some(current)
    }
}

impl<'a> FusedIterator for Set<'a> {}

/// An iterator over all sets in a `Forest`.
///
/// This struct is created by the [`all_sets`] method on [`Forest`].
///
/// [`all_sets`]: struct.Forest.html#method.all_sets
/// [`Forest`]: struct.Forest.html
#[derive(Clone, Debug)]
pub(crate) struct AllSets<'a> {
    forest: &'a Forest,
    done: bit_vec::BitVec,
    range: ops::Range<usize>,
}

impl<'a> AllSets<'a> {
    fn visit(&mut self, index: usize) -> Option<Set<'a>> {
        let root = self.forest.find(index);

        if self.done.get(root).unwrap_or(true) {
            return None
        }

        self.done.set(root, true);

        Some(Set {
            forest: self.forest,
            current: Some(root),
            root,
        })
    }
}

impl<'a> Iterator for AllSets<'a> {
    type Item = Set<'a>;

    fn next(&mut self) -> Option<Set<'a>> {
        // We keep going until we find a set we have not returned yet.
        loop {
            let index = self.range.next()?;

            if let Some(set) = self.visit(index) {
                return Some(set)
            }
        }
    }
}

impl<'a> FusedIterator for AllSets<'a> {}
