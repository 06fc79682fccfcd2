//! Compact copy-on-write sets over small closed enums.
//!
//! Phonetic attributes, phonetic expectations and lexeme attributes are all
//! drawn from closed vocabularies of fewer than 32 members, so a set of them
//! fits in one machine word. `FlagSet` mirrors the persistent-set API used
//! elsewhere in the workspace: updates return a new set and leave the
//! original untouched.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::marker::PhantomData;

/// A member of a closed vocabulary that can live in a [`FlagSet`].
pub trait Flag: Copy + Eq + 'static {
    /// Every member of the vocabulary, in declaration order.
    const ALL: &'static [Self];

    /// Bit position of this member. Must be below 32 and unique.
    fn bit(self) -> u32;
}

/// An immutable set of [`Flag`] values packed into a `u32`.
pub struct FlagSet<T: Flag> {
    bits: u32,
    marker: PhantomData<T>,
}

impl<T: Flag> FlagSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            marker: PhantomData,
        }
    }

    /// Creates a set holding a single value.
    #[must_use]
    pub fn of(value: T) -> Self {
        Self::empty().insert(value)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns true if the set contains the value.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.bits & (1 << value.bit()) != 0
    }

    /// Returns true if every value of `other` is in this set.
    #[must_use]
    pub fn contains_all(&self, other: &Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Returns true if the two sets share at least one value.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits & other.bits != 0
    }

    /// Returns a new set with the value inserted.
    #[must_use]
    pub fn insert(&self, value: T) -> Self {
        Self::from_bits(self.bits | (1 << value.bit()))
    }

    /// Returns a new set with the value removed.
    #[must_use]
    pub fn remove(&self, value: T) -> Self {
        Self::from_bits(self.bits & !(1 << value.bit()))
    }

    /// Returns a new set that is the union of this set and another.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    /// Returns a new set that is the difference of this set and another.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    /// Returns an iterator over the elements in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        T::ALL.iter().copied().filter(move |v| self.contains(*v))
    }

    fn from_bits(bits: u32) -> Self {
        Self {
            bits,
            marker: PhantomData,
        }
    }
}

impl<T: Flag> Clone for FlagSet<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Flag> Copy for FlagSet<T> {}

impl<T: Flag> Default for FlagSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Flag> PartialEq for FlagSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: Flag> Eq for FlagSet<T> {}

impl<T: Flag> Hash for FlagSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T: Flag + fmt::Debug> fmt::Debug for FlagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Flag> FromIterator<T> for FlagSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, v| set.insert(v))
    }
}

impl<T: Flag> From<&[T]> for FlagSet<T> {
    fn from(values: &[T]) -> Self {
        values.iter().copied().collect()
    }
}

#[cfg(feature = "serde")]
impl<T: Flag + serde::Serialize> serde::Serialize for FlagSet<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Flag + serde::Deserialize<'de>> serde::Deserialize<'de> for FlagSet<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}
