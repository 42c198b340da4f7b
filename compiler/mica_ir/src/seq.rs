//! Growable element sequence with explicit capacity policy.

use std::fmt;
use std::ops::Deref;

/// Growable sequence of `T` with a doubling-plus-one growth policy.
///
/// Backed by a `Vec`, but growth is controlled here instead of left to
/// the standard library: when more room is needed the capacity becomes
/// `max(1 + 2 * capacity, required)`, reserved exactly. An empty
/// sequence owns no allocation, and [`free`](Seq::free) returns one to
/// that state.
///
/// Amortized push cost stays O(1) and capacity never more than roughly
/// doubles in one step, so peak memory stays within a constant factor
/// of the live data.
pub struct Seq<T> {
    items: Vec<T>,
}

impl<T> Seq<T> {
    /// Create an empty sequence. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Seq { items: Vec::new() }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of elements the current allocation can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Check if the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append one element, growing if the sequence is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.items.len() == self.items.capacity() {
            self.grow(self.items.len() + 1);
        }
        self.items.push(value);
    }

    /// Append every element of `values`, growing at most once.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        let required = self.items.len() + values.len();
        if required > self.items.capacity() {
            self.grow(required);
        }
        self.items.extend_from_slice(values);
    }

    /// Drop all elements but keep the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop all elements and release the allocation.
    #[inline]
    pub fn free(&mut self) {
        self.items = Vec::new();
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Grow to hold at least `required` elements.
    ///
    /// The new capacity is `max(1 + 2 * capacity, required)`, so a
    /// fresh sequence steps through 1, 3, 7, 15, ... while a bulk
    /// append larger than a doubling lands exactly on `required`.
    fn grow(&mut self, required: usize) {
        let doubled = 1 + 2 * self.items.capacity();
        let new_cap = doubled.max(required);
        self.items.reserve_exact(new_cap - self.items.len());
    }
}

impl<T> Default for Seq<T> {
    #[inline]
    fn default() -> Self {
        Seq::new()
    }
}

impl<T> Deref for Seq<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_owns_nothing() {
        let seq: Seq<u32> = Seq::new();
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.capacity(), 0);
        assert!(seq.is_empty());
    }

    #[test]
    fn push_preserves_order() {
        let mut seq = Seq::new();
        for i in 0..1024u32 {
            seq.push(i);
        }
        assert_eq!(seq.len(), 1024);
        let mut expected = 0u32;
        for &value in &seq {
            assert_eq!(value, expected);
            expected += 1;
        }
    }

    #[test]
    fn growth_steps_double_plus_one() {
        let mut seq = Seq::new();
        let mut observed = Vec::new();
        for i in 0..16u32 {
            seq.push(i);
            if observed.last() != Some(&seq.capacity()) {
                observed.push(seq.capacity());
            }
        }
        assert_eq!(observed, vec![1, 3, 7, 15, 31]);
    }

    #[test]
    fn bulk_append_grows_to_exact_required() {
        let mut seq: Seq<u8> = Seq::new();
        seq.push(0);
        // 1 + 100 is far past the doubling step of 3
        seq.extend_from_slice(&[7u8; 100]);
        assert_eq!(seq.len(), 101);
        assert_eq!(seq.capacity(), 101);
    }

    #[test]
    fn bulk_append_prefers_doubling_when_larger() {
        let mut seq: Seq<u8> = Seq::new();
        for i in 0..7u8 {
            seq.push(i);
        }
        assert_eq!(seq.capacity(), 7);
        // required 9 < doubled 15
        seq.extend_from_slice(&[0u8; 2]);
        assert_eq!(seq.capacity(), 15);
    }

    #[test]
    fn clear_keeps_allocation() {
        let mut seq = Seq::new();
        seq.extend_from_slice(b"hello");
        let cap = seq.capacity();
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), cap);
    }

    #[test]
    fn free_releases_allocation() {
        let mut seq = Seq::new();
        for i in 0..100u32 {
            seq.push(i);
        }
        seq.free();
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.capacity(), 0);
    }

    #[test]
    fn reuse_after_free() {
        let mut seq = Seq::new();
        seq.push(1u8);
        seq.free();
        seq.push(2);
        assert_eq!(seq.as_slice(), &[2]);
        assert_eq!(seq.capacity(), 1);
    }

    #[test]
    fn deref_as_slice() {
        let mut seq = Seq::new();
        seq.extend_from_slice(&[1u8, 2, 3]);
        assert_eq!(&seq[..], &[1, 2, 3]);
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
    }

    proptest::proptest! {
        /// The growth policy holds at every step of an arbitrary append
        /// sequence: capacity only changes when the append would not
        /// fit, and then becomes exactly max(1 + 2 * cap, required).
        #[test]
        fn growth_policy_holds_for_arbitrary_appends(
            chunks in proptest::collection::vec(0usize..48, 1..12)
        ) {
            use proptest::prelude::prop_assert_eq;

            let mut seq: Seq<u8> = Seq::new();
            let mut model_cap = 0usize;
            for chunk in chunks {
                let required = seq.len() + chunk;
                if required > model_cap {
                    model_cap = (1 + 2 * model_cap).max(required);
                }
                if chunk == 1 {
                    seq.push(0);
                } else {
                    seq.extend_from_slice(&vec![0u8; chunk]);
                }
                prop_assert_eq!(seq.len(), required);
                prop_assert_eq!(seq.capacity(), model_cap);
            }
        }
    }
}
