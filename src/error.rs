use thiserror::Error;

/// The ways an operation on a [`DisjointSet`] or [`DisjointSetFold`] can be rejected.
///
/// Both are caller errors and are reported before anything is modified.
///
/// [`DisjointSet`]: ../struct.DisjointSet.html
/// [`DisjointSetFold`]: ../struct.DisjointSetFold.html
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum Error {
    #[error("element is not registered")]
    NotFound,

    #[error("key is already registered")]
    DuplicateKey,
}

pub type Result<T> = std::result::Result<T, Error>;
