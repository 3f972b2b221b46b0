//! Disjoint-set (union-find) over arbitrary keys.
//!
//! Elements are interned to dense ordinals on `make_set`. `find` compresses
//! the whole path it walks so every visited element points straight at its
//! root afterwards. `union` links by rank; on equal ranks the root of the
//! first argument wins, so the representative depends on call order while
//! the resulting partition does not.

use std::hash::Hash;

use algotrace_common::utils::hash::FxHashMap;

/// A union-find structure with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    /// Key -> ordinal.
    index: FxHashMap<T, usize>,
    /// Ordinal -> key.
    items: Vec<T>,
    /// Ordinal -> parent ordinal (roots point at themselves).
    parent: Vec<usize>,
    /// Ordinal -> rank (upper bound on tree height).
    rank: Vec<u32>,
    /// Number of disjoint sets.
    sets: usize,
}

impl<T: Hash + Eq + Clone> DisjointSet<T> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            items: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            sets: 0,
        }
    }

    /// Adds `item` as a singleton set. No-op if it is already present.
    pub fn make_set(&mut self, item: T) {
        if self.index.contains_key(&item) {
            return;
        }
        let ordinal = self.items.len();
        self.index.insert(item.clone(), ordinal);
        self.items.push(item);
        self.parent.push(ordinal);
        self.rank.push(0);
        self.sets += 1;
    }

    /// Returns the representative of the set containing `item`, or `None`
    /// if `item` was never added.
    pub fn find(&mut self, item: &T) -> Option<&T> {
        let ordinal = *self.index.get(item)?;
        let root = self.find_ordinal(ordinal);
        Some(&self.items[root])
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` if they were already in the same set (for spanning
    /// tree builders: the edge `a-b` would close a cycle). Elements not yet
    /// added are made into singletons first.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        self.make_set(a.clone());
        self.make_set(b.clone());

        let root_a = self.find_ordinal(self.index[a]);
        let root_b = self.find_ordinal(self.index[b]);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// Returns whether `a` and `b` are known and in the same set.
    pub fn same_set(&mut self, a: &T, b: &T) -> bool {
        match (self.index.get(a).copied(), self.index.get(b).copied()) {
            (Some(a), Some(b)) => self.find_ordinal(a) == self.find_ordinal(b),
            _ => false,
        }
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether no elements were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Two-pass find: locate the root, then point every element on the path
    /// directly at it. Parent links only ever point at roots of higher rank,
    /// so the walk terminates.
    fn find_ordinal(&mut self, ordinal: usize) -> usize {
        let mut root = ordinal;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = ordinal;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}

impl<T: Hash + Eq + Clone> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for DisjointSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.make_set(item);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut set: DisjointSet<&str> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(set.set_count(), 3);
        assert_eq!(set.find(&"b"), Some(&"b"));
        assert_eq!(set.find(&"z"), None);
    }

    #[test]
    fn test_union_reports_cycles() {
        let mut set: DisjointSet<&str> = ["a", "b", "c"].into_iter().collect();
        assert!(set.union(&"a", &"b"));
        assert!(set.union(&"b", &"c"));
        // a-c would close the cycle a-b-c
        assert!(!set.union(&"a", &"c"));
        assert_eq!(set.set_count(), 1);
    }

    #[test]
    fn test_union_outcome_is_commutative() {
        let mut forward: DisjointSet<u32> = (0..4).collect();
        let mut backward: DisjointSet<u32> = (0..4).collect();
        forward.union(&0, &1);
        backward.union(&1, &0);

        for (a, b) in [(0, 1), (0, 2), (2, 3)] {
            assert_eq!(forward.same_set(&a, &b), backward.same_set(&a, &b));
        }
    }

    #[test]
    fn test_equal_rank_first_root_wins() {
        let mut set: DisjointSet<&str> = ["x", "y"].into_iter().collect();
        set.union(&"y", &"x");
        assert_eq!(set.find(&"x"), Some(&"y"));
    }

    #[test]
    fn test_path_compression() {
        let mut set: DisjointSet<u32> = (0..8).collect();
        // Build a deeper tree: {0,1} {2,3} -> {0..3}, {4,5} {6,7} -> {4..7}, then all
        set.union(&0, &1);
        set.union(&2, &3);
        set.union(&0, &2);
        set.union(&4, &5);
        set.union(&6, &7);
        set.union(&4, &6);
        set.union(&0, &4);

        let root = *set.find(&7).unwrap();
        let seven = set.index[&7];
        assert_eq!(set.items[set.parent[seven]], root);
    }

    #[test]
    fn test_union_adds_unknown_elements() {
        let mut set = DisjointSet::new();
        assert!(set.union(&"p", &"q"));
        assert_eq!(set.len(), 2);
        assert!(set.same_set(&"p", &"q"));
        assert!(!set.same_set(&"p", &"missing"));
    }
}
