//! Contains the implementation of the [disjoint-sets/union-find] forest.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

mod metadata;
pub(crate) mod forest;

pub(crate) use self::forest::{Forest, Merge};
