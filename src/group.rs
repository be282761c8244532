//! Views on the sets of a [`DisjointSet`] or [`DisjointSetFold`].
//!
//! A [`Group`] is a snapshot: it is collected when it is requested and
//! does not change with the structure it came from.
//! [`Members`] is lazy and walks a single set.
//!
//! [`DisjointSet`]: ../struct.DisjointSet.html
//! [`DisjointSetFold`]: ../struct.DisjointSetFold.html
//! [`Group`]: struct.Group.html
//! [`Members`]: struct.Members.html

use {
    std::{
        fmt,
        slice,
        borrow::Borrow,
        cmp::Ordering,
        iter::{
            Copied,
            FusedIterator,
        },
    },
    crate::disjoint_sets::forest::Set,
};

/// The members of one set at the moment the group was taken.
///
/// For a [`DisjointSetFold`] the group also carries the folded value of the set,
/// for a [`DisjointSet`] this value is `()`.
///
/// # Examples
///
/// ```
/// use disjoint_groups::disjoint_set;
///
/// let disjoint_set = disjoint_set![
///     'a' => 0,
///     'b' => 0,
///     'c' => 1,
/// ];
///
/// let groups = disjoint_set.groups();
/// assert!(groups.len() == 2);
/// assert!(groups[0].len() == 2);
/// assert!(groups[0].contains(&'b'));
/// assert!(!groups[0].contains(&'c'));
/// ```
///
/// [`DisjointSet`]: ../struct.DisjointSet.html
/// [`DisjointSetFold`]: ../struct.DisjointSetFold.html
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Group<'a, T, V = ()> {
    members: Vec<&'a T>,
    value: &'a V,
}

impl<'a, T, V> Group<'a, T, V> {
    pub(crate) fn new(members: Vec<&'a T>, value: &'a V) -> Self {
        Self { members, value }
    }

    /// The members of the set.
    #[inline]
    pub fn members(&self) -> &[&'a T] {
        &self.members
    }

    /// The folded value of the set.
    #[inline]
    pub fn value(&self) -> &'a V {
        self.value
    }

    /// The amount of members, this is never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if `element` is a member.
    ///
    /// This takes `O(m)` time where `m` is the amount of members.
    pub fn contains<Q>(&self, element: &Q) -> bool where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.members.iter().any(|&member| Borrow::<Q>::borrow(member) == element)
    }

    #[inline]
    pub fn iter(&self) -> Copied<slice::Iter<'_, &'a T>> {
        self.members.iter().copied()
    }
}

impl<'a, T, V> IntoIterator for Group<'a, T, V> {
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'g, 'a, T, V> IntoIterator for &'g Group<'a, T, V> {
    type Item = &'a T;
    type IntoIter = Copied<slice::Iter<'g, &'a T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Puts groups in canonical order.
///
/// The members of each group are sorted ascending.
/// The groups are sorted by descending size and then by their members.
pub(crate) fn canonicalize<T, V>(groups: &mut [Group<T, V>]) where
    T: Ord,
{
    for group in groups.iter_mut() {
        group.members.sort_unstable();
    }

    groups.sort_by(|first, second| {
        match Ord::cmp(&second.len(), &first.len()) {
            Ordering::Equal => Ord::cmp(&first.members, &second.members),
            ordering => ordering,
        }
    });
}

/// Formats members as `{a, b, c}`.
pub(crate) struct Braced<'g, 'a, T>(pub(crate) &'g [&'a T]);

impl<'g, 'a, T> fmt::Display for Braced<'g, 'a, T> where T: fmt::Display {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("{")?;

        for (position, member) in self.0.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            fmt::Display::fmt(member, formatter)?;
        }

        formatter.write_str("}")
    }
}

impl<'g, 'a, T> fmt::Debug for Braced<'g, 'a, T> where T: fmt::Debug {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_set().entries(self.0.iter()).finish()
    }
}

/// An iterator over the members of one set.
///
/// This struct is created by the `group` method on [`DisjointSet`] and [`DisjointSetFold`].
/// The representative of the set is returned first,
/// the order of the other members is not specified.
///
/// Every member that is visited is pointed directly at the representative.
///
/// [`DisjointSet`]: ../struct.DisjointSet.html
/// [`DisjointSetFold`]: ../struct.DisjointSetFold.html
#[derive(Clone)]
pub struct Members<'a, T: 'a> {
    set: Set<'a>,
    elements: &'a [T],
}

impl<'a, T> Members<'a, T> {
    pub(crate) fn new(set: Set<'a>, elements: &'a [T]) -> Self {
        Self { set, elements }
    }
}

impl<'a, T> Iterator for Members<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.set.next().map(|index| &self.elements[index])
    }
}

impl<'a, T> FusedIterator for Members<'a, T> {}

impl<'a, T> fmt::Debug for Members<'a, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_struct("Members")
            .field("root", &self.set.root())
            .finish()
    }
}
