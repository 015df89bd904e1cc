//! Disjoint-set forest with path compression and union by size.
//!
//! Each analysis owns its own forest; nothing here is shared between runs.
//! Sizes are only meaningful at roots; entries for non-root elements are
//! stale after a merge and are never read.

/// Union-find over the fixed universe `0..len`.
///
/// # Examples
/// ```
/// use proxima_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// assert!(forest.union(0, 1));
/// assert!(!forest.union(1, 0));
/// assert_eq!(forest.component_size(1), 2);
/// assert_eq!(forest.component_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSetForest {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// Number of elements in the universe.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the universe is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct components.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the root of `element`'s component, relinking every node on the
    /// walked path directly to that root.
    ///
    /// # Panics
    /// Panics when `element >= self.len()`.
    pub fn find(&mut self, mut element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[element] != root {
            let next = self.parent[element];
            self.parent[element] = root;
            element = next;
        }

        root
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` and leaves the forest untouched when both already share
    /// a root. Otherwise the smaller component is attached beneath the larger
    /// one; on equal sizes `left`'s root stays the root.
    ///
    /// # Panics
    /// Panics when either element is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut keep = self.find(left);
        let mut absorb = self.find(right);
        if keep == absorb {
            return false;
        }
        if self.size[keep] < self.size[absorb] {
            std::mem::swap(&mut keep, &mut absorb);
        }
        self.parent[absorb] = keep;
        self.size[keep] = self.size[keep].saturating_add(self.size[absorb]);
        self.components = self.components.saturating_sub(1);
        true
    }

    /// Size of the component containing `element`.
    ///
    /// # Panics
    /// Panics when `element >= self.len()`.
    pub fn component_size(&mut self, element: usize) -> usize {
        let root = self.find(element);
        self.size[root]
    }

    /// Sizes of every component, one entry per root, in root index order.
    #[must_use]
    pub fn component_sizes(&self) -> Vec<usize> {
        self.parent
            .iter()
            .zip(&self.size)
            .enumerate()
            .filter_map(|(element, (&parent, &size))| (parent == element).then_some(size))
            .collect()
    }
}
