//! A [disjoint-sets/union-find] implementation over hashable elements that can fold
//! a value over every set.
//!
//! The main structs of this crate are [`DisjointSet<T>`] and [`DisjointSetFold<K, V, F>`].
//! Elements are registered once and each starts out in its own set.
//! These sets can be joined with the `union` and `merge` methods and are never split again.
//! You can check if elements share a set with the `linked` method, get the representative
//! of a set with `find` and take a snapshot of all sets with `groups`.
//! The `union`, `linked` and `find` methods are extremely fast and have an amortized
//! complexity of `O(α(n))` where `α` is the inverse Ackermann function and `n` the
//! amount of elements.
//! The `α(n)` has value below 5 for any `n` that can be written in the observable universe.
//!
//! A [`DisjointSetFold<K, V, F>`] additionally stores a value for every set.
//! When two sets are joined their values are combined with an operator given at construction,
//! so for example the total weight of every connected component of a graph is always at hand.
//!
//! This can be used to keep track of the connected components of an undirected graph.
//! It can then be used to determine whether two vertices belong to the same component,
//! or whether adding an edge between them would result in a cycle.
//! It is a key component in implementing Kruskal's algorithm to find the minimum spanning
//! tree of a graph.
//!
//! Operations that name an element which was never registered return [`Error::NotFound`]
//! and setting a key of a [`DisjointSetFold<K, V, F>`] twice returns [`Error::DuplicateKey`].
//! In both cases nothing is changed.
//!
//! Two features are enabled by default:
//! `rayon` allows collecting a [`DisjointSet<T>`] from a parallel iterator and
//! `proptest` implements `Arbitrary` for [`DisjointSet<T>`].
//! ```toml
//! [dependencies.disjoint-groups]
//! version = "0.1"
//! default-features = false
//! ```
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet<T>`]: struct.DisjointSet.html
//! [`DisjointSetFold<K, V, F>`]: struct.DisjointSetFold.html
//! [`Error::NotFound`]: error/enum.Error.html#variant.NotFound
//! [`Error::DuplicateKey`]: error/enum.Error.html#variant.DuplicateKey

/// We count the amount of expresions given to this macro.
#[doc(hidden)]
#[macro_export]
macro_rules! disjoint_groups_count_expr {
    () => { 0usize };
    ($_single: expr) => { 1usize };
    // Even amount of expresions.
    ($($first: expr, $_second: expr),*) => {
        ($crate::disjoint_groups_count_expr![$($first),*] << 1usize)
    };
    // Odd amount of expresions.
    ($_single: expr, $($first: expr, $_second: expr),*) => {
        ($crate::disjoint_groups_count_expr![$($first),*] << 1usize) | 1
    };
}

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        ::bit_vec::BitVec::from_elem($len, $element)
    };
}

mod disjoint_sets;
mod registry;
pub mod error;
pub mod group;
pub mod disjoint_set;
pub mod disjoint_set_fold;

pub use {
    error::{Error, Result},
    group::{Group, Members},
    disjoint_set::DisjointSet,
    disjoint_set_fold::DisjointSetFold,
};
