/*!
# Generalized Sets

Abstraction over set data structures so that traversals can be handed a visited-set of the
caller's choosing (e.g. to share it between several traversals).

Implemented for
- `HashSet<T, S>` for any hasher, which includes `FxHashSet<T>`,
- `BTreeSet<T>` if deterministic iteration over visited keys is desired.
*/

use std::{
    collections::{BTreeSet, HashSet, btree_set, hash_set},
    hash::{BuildHasher, Hash},
    iter::Cloned,
};

/// Minimalist trait for a set-like collection.
///
/// Supports insertion, removal, membership queries and iteration.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was not present before.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Iterator over elements in set.
    ///
    /// Returned by [`Set::iter`].
    type SetIter<'a>: Iterator<Item = T>
    where
        Self: 'a,
        T: Clone;

    /// Returns an iterator over (clones of) all elements in the set.
    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<hash_set::Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        HashSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<T> Set<T> for BTreeSet<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) -> bool {
        BTreeSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        BTreeSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<btree_set::Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        BTreeSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self);
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;
    use itertools::Itertools;

    use super::*;

    fn exercise<S: Set<u32> + Default>() -> S {
        let mut set = S::default();
        assert!(set.is_empty());
        assert!(set.insert(3));
        assert!(!set.insert(3));
        set.insert_multiple([1, 2, 5]);
        assert_eq!(set.len(), 4);
        assert!(set.contains(&5));
        assert!(set.remove(&5));
        assert!(!set.remove(&5));
        assert!(!set.contains(&5));
        set
    }

    #[test]
    fn hash_set() {
        let mut set = exercise::<FxHashSet<u32>>();
        assert_eq!(Set::iter(&set).sorted().collect_vec(), vec![1, 2, 3]);
        Set::clear(&mut set);
        assert!(Set::is_empty(&set));
    }

    #[test]
    fn btree_set() {
        let mut set = exercise::<BTreeSet<u32>>();
        assert_eq!(Set::iter(&set).collect_vec(), vec![1, 2, 3]);
        Set::clear(&mut set);
        assert!(Set::is_empty(&set));
    }
}
