use std::cell::Cell;

/// This provides the bookkeeping for a single element of a `Forest`.
///
/// For each registered element we store a `Metadata` at the element's index.
#[derive(Clone, Debug)]
pub(crate) struct Metadata {
    /// The parent of the element in its sets tree.
    /// These form an upside down tree where each child has the index of its parent.
    parent: Cell<usize>,
    /// A link to another index.
    /// These form a circular linked list in its set.
    link: Cell<usize>,
    /// The amount of elements in the set, only meaningful while this element is a root.
    /// A root that is joined under another root has its size cleared to zero.
    size: Cell<usize>,
}

impl Metadata {
    /// Create a new `Metadata` for a singleton element with the given index.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            link: Cell::new(index),
            size: Cell::new(1),
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `link` variable.
    pub(crate) fn link(&self) -> usize {
        self.link.get()
    }

    /// Set the `link` variable.
    pub(crate) fn set_link(&self, value: usize) {
        self.link.set(value);
    }

    /// Return the `size` variable.
    pub(crate) fn size(&self) -> usize {
        self.size.get()
    }

    /// Set the `size` variable.
    pub(crate) fn set_size(&self, value: usize) {
        self.size.set(value);
    }

    /// Clear the `size` variable and return what it held.
    pub(crate) fn take_size(&self) -> usize {
        self.size.replace(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_a_singleton_root() {
        let meta = Metadata::new(7);
        assert_eq!(meta.parent(), 7);
        assert_eq!(meta.link(), 7);
        assert_eq!(meta.size(), 1);
    }

    #[test]
    fn take_size_clears() {
        let meta = Metadata::new(0);
        meta.set_size(4);
        assert_eq!(meta.take_size(), 4);
        assert_eq!(meta.size(), 0);
    }
}
