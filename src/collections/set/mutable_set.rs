use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::{Iter, SetOperation};
use crate::collections::traits::set::Set;
use crate::util::error::CapacityOverflow;

/// An unordered collection of unique elements, which relies on the elements implementing [`Hash`]
/// and [`Eq`].
///
/// Internally, a MutableSet is a [`HashMap`] from each element to `()`, so uniqueness comes for
/// free from the map's keys. Iteration order is unspecified and may differ between two
/// iterations of the same, unmodified set.
///
/// The binary set operations come in two flavours:
/// - In-place mutators ([`union_with`](MutableSet::union_with),
///   [`intersect_with`](MutableSet::intersect_with), etc.) which modify `self` and only read the
///   other operand.
/// - Lazy views from the [`Set`] trait ([`Set::union`], [`Set::intersection`], etc.), which borrow
///   both operands and produce references.
///
/// The operator traits build on these: `&a | &b` creates a new set while `a |= &b` mutates `a`.
/// For combining any number of sets at once, see the [`combinators`](super::combinators) module.
///
/// It is a logic error for an element to be modified in a way that changes its hash while it is
/// in the set. Because of this, MutableSet's API never hands out mutable references to elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in `self`.
/// - `m`: The number of elements in `other`.
///
/// | Method | Complexity |
/// |-|-|
/// | `cardinality` | `O(1)` |
/// | `add` | `O(1)`* |
/// | `discard` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `elements` | `O(n)` |
/// | `union_with` | `O(m)` |
/// | `intersect_with` | `O(n)` |
/// | `difference_with` | `O(min(n, m))` |
/// | `symmetric_difference_with` | `O(m)` |
///
/// \* Amortized, and assuming a hasher that rarely collides.
pub struct MutableSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: HashMap<T, (), B>,
}

// These constructors are tied to RandomState, like std's, so that `MutableSet::new()` doesn't need
// a type annotation for the hasher. Other hashers go through `with_hasher` or `Default`.
impl<T: Hash + Eq> MutableSet<T> {
    /// Creates a new, empty MutableSet using the default hasher. No memory is allocated until the
    /// first element is added.
    pub fn new() -> MutableSet<T> {
        MutableSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new, empty MutableSet with enough capacity for `cap` elements.
    pub fn with_cap(cap: usize) -> MutableSet<T> {
        MutableSet {
            inner: HashMap::with_capacity(cap),
        }
    }

    /// Creates a MutableSet containing the distinct values of `elements`. Duplicates collapse into
    /// a single element and an empty iterator produces an empty set.
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I) -> MutableSet<T> {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> MutableSet<T, B> {
    /// Creates a new, empty MutableSet which will use the provided `hasher`.
    pub fn with_hasher(hasher: B) -> MutableSet<T, B> {
        MutableSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new, empty MutableSet with enough capacity for `cap` elements, which will use the
    /// provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> MutableSet<T, B> {
        MutableSet {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of distinct elements in the set.
    pub fn cardinality(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's hasher builder.
    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Adds `item` to the set, returning true if it wasn't already present. Adding an element
    /// that is already present leaves the set unchanged, including the stored element.
    pub fn add(&mut self, item: T) -> bool {
        match self.inner.entry(item) {
            Entry::Vacant(entry) => {
                entry.insert(());
                true
            },
            Entry::Occupied(_) => false,
        }
    }

    /// Removes `item` from the set, returning true if it was present. Discarding an absent element
    /// is a no-op.
    pub fn discard<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Removes `item` from the set and returns the element that was stored, if any.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(stored, ())| stored)
    }

    /// Returns a reference to the stored element equal to `item`, if any.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_key_value(item).map(|(stored, ())| stored)
    }

    /// Returns true if `item` belongs to the set.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Returns true if `item` doesn't belong to the set. Always the negation of
    /// [`contains`](MutableSet::contains).
    pub fn does_not_contain<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        !self.contains(item)
    }

    /// Returns an iterator over all elements in the set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a snapshot of the set's current elements in an unspecified order.
    ///
    /// The snapshot owns its elements, so it can be iterated any number of times and is unaffected
    /// by later changes to the set. Two calls may return the elements in different orders.
    pub fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Removes all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Reserves capacity for at least `extra` more elements.
    ///
    /// # Panics
    /// Panics if the new capacity overflows `usize`. See [`try_reserve`](MutableSet::try_reserve)
    /// for a non-panicking alternative.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Tries to reserve capacity for at least `extra` more elements, returning an error rather than
    /// panicking if the capacity can't be provided.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        self.inner.try_reserve(extra).map_err(|_| CapacityOverflow)
    }

    /// Returns true if both sets have the same cardinality and every element of `other` is
    /// contained in `self`.
    pub fn is_equal_to<C: BuildHasher>(&self, other: &MutableSet<T, C>) -> bool {
        self.cardinality() == other.cardinality()
            && other.iter().all(|item| self.contains(item))
    }

    /// Updates `self` to be `self ∪ other`. `other` is left unchanged.
    pub fn union_with<C: BuildHasher>(&mut self, other: &MutableSet<T, C>)
    where
        T: Clone,
    {
        for item in other {
            if self.does_not_contain(item) {
                self.inner.insert(item.clone(), ());
            }
        }
    }

    /// Updates `self` to be `self ∩ other`. `other` is left unchanged.
    pub fn intersect_with<C: BuildHasher>(&mut self, other: &MutableSet<T, C>) {
        // Membership is decided per element by the map itself, no removal happens mid-iteration.
        self.inner.retain(|item, ()| other.contains(item));
    }

    /// Updates `self` to be `self \ other`, removing every element that is also in `other`.
    /// `other` is left unchanged.
    pub fn difference_with<C: BuildHasher>(&mut self, other: &MutableSet<T, C>) {
        if self.cardinality() < other.cardinality() {
            self.inner.retain(|item, ()| other.does_not_contain(item));
        } else {
            for item in other {
                self.inner.remove(item);
            }
        }
    }

    /// Updates `self` to be `(self ∪ other) \ (self ∩ other)`: elements in exactly one of the two
    /// sets. `other` is left unchanged.
    pub fn symmetric_difference_with<C: BuildHasher>(&mut self, other: &MutableSet<T, C>)
    where
        T: Clone,
    {
        for item in other {
            if self.inner.remove(item).is_none() {
                self.inner.insert(item.clone(), ());
            }
        }
    }

    /// Applies the in-place mutator matching `operation`, with `other` as its argument.
    pub fn apply<C: BuildHasher>(&mut self, operation: SetOperation, other: &MutableSet<T, C>)
    where
        T: Clone,
    {
        match operation {
            SetOperation::Union => self.union_with(other),
            SetOperation::Intersection => self.intersect_with(other),
            SetOperation::Difference => self.difference_with(other),
            SetOperation::SymmetricDifference => self.symmetric_difference_with(other),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for MutableSet<T, B> {
    type Iter<'a> = crate::collections::set::Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        self.inner.contains_key(item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
    {
        self.into_iter()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for MutableSet<T, B> {
    fn clone(&self) -> Self {
        MutableSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for MutableSet<T, B> {
    fn default() -> Self {
        MutableSet::with_hasher(B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher, C: BuildHasher> PartialEq<MutableSet<T, C>> for MutableSet<T, B> {
    fn eq(&self, other: &MutableSet<T, C>) -> bool {
        self.is_equal_to(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for MutableSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for MutableSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = MutableSet::with_cap_and_hasher(iter.size_hint().0, B::default());

        for item in iter {
            set.add(item);
        }

        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for MutableSet<T> {
    fn from(value: [T; N]) -> Self {
        MutableSet::from_elements(value)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for MutableSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for MutableSet<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &MutableSet<T, B> {
    type Output = MutableSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        Set::union(self, rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for MutableSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.reserve(rhs.cardinality());
        self.extend(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher> BitOrAssign<&MutableSet<T, B>> for MutableSet<T, B> {
    fn bitor_assign(&mut self, rhs: &MutableSet<T, B>) {
        self.union_with(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &MutableSet<T, B> {
    type Output = MutableSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        Set::intersection(self, rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for MutableSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.intersect_with(&rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign<&MutableSet<T, B>> for MutableSet<T, B> {
    fn bitand_assign(&mut self, rhs: &MutableSet<T, B>) {
        self.intersect_with(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &MutableSet<T, B> {
    type Output = MutableSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Set::symmetric_difference(self, rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for MutableSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if self.inner.remove(&item).is_none() {
                self.inner.insert(item, ());
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher> BitXorAssign<&MutableSet<T, B>> for MutableSet<T, B> {
    fn bitxor_assign(&mut self, rhs: &MutableSet<T, B>) {
        self.symmetric_difference_with(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &MutableSet<T, B> {
    type Output = MutableSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        Set::difference(self, rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for MutableSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        self.difference_with(&rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign<&MutableSet<T, B>> for MutableSet<T, B> {
    fn sub_assign(&mut self, rhs: &MutableSet<T, B>) {
        self.difference_with(rhs)
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for MutableSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for MutableSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
