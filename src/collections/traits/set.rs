use std::iter::{Chain, FusedIterator};

/// The read-only half of a set: membership, borrowed iteration and lazy views over the result of
/// combining two sets.
///
/// None of the views allocate or clone. They borrow both operands and produce references to the
/// elements that belong in the result, so they are the cheapest way to inspect `self ∪ other` and
/// friends without building a new set.
pub trait Set<T>: IntoIterator<Item = T> + Sized {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool;

    /// Returns an iterator over all elements in the set, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a;

    /// Creates a borrowed iterator over all items that are in `self` but not `other`.
    /// (`self \ other`)
    fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T>
    where
        T: 'a,
    {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn symmetric_difference<'a>(&'a self, other: &'a Self) -> SymmetricDifference<'a, Self, T>
    where
        T: 'a,
    {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`.
    /// (`self ∩ other`)
    fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T>
    where
        T: 'a,
    {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`.
    /// (`self ∪ other`)
    fn union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T>
    where
        T: 'a,
    {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        other.iter().all(|item| self.contains(item))
    }

    /// Returns true if `self` and `other` share no elements. (`self ∩ other = ∅`)
    fn is_disjoint(&self, other: &Self) -> bool {
        self.intersection(other).next().is_none()
    }
}

pub struct Difference<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for Difference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|&item| !other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for Difference<'a, S, T>
where
    S::Iter<'a>: FusedIterator
{}

pub struct SymmetricDifference<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: Chain<Difference<'a, S, T>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for SymmetricDifference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for SymmetricDifference<'a, S, T>
where
    S::Iter<'a>: FusedIterator
{}

pub struct Intersection<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for Intersection<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|&item| other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for Intersection<'a, S, T>
where
    S::Iter<'a>: FusedIterator
{}

pub struct Union<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: Chain<S::Iter<'a>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for Union<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for Union<'a, S, T>
where
    S::Iter<'a>: FusedIterator
{}
