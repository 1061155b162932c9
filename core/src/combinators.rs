//! Searching, folding and whole-array transformations.
//!
//! Comparators follow `Ord` conventions: an element matches when the
//! comparator returns [`Ordering::Equal`]. Without a comparator, elements
//! are compared byte for byte.

use alloc::vec;
use core::cmp::Ordering;

use crate::array::Array;
use crate::error::Result;

impl Array {
    /// Index of the first element whose bytes equal `value`.
    pub fn find(&self, value: &[u8]) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    /// Index of the first element for which `compare(element, value)` is
    /// [`Ordering::Equal`].
    pub fn find_by(
        &self,
        mut compare: impl FnMut(&[u8], &[u8]) -> Ordering,
        value: &[u8],
    ) -> Option<usize> {
        self.iter()
            .position(|element| compare(element, value) == Ordering::Equal)
    }

    pub fn contains(&self, value: &[u8]) -> bool {
        self.find(value).is_some()
    }

    pub fn contains_by(&self, compare: impl FnMut(&[u8], &[u8]) -> Ordering, value: &[u8]) -> bool {
        self.find_by(compare, value).is_some()
    }

    /// Number of elements whose bytes equal `value`.
    pub fn count(&self, value: &[u8]) -> usize {
        self.iter().filter(|element| *element == value).count()
    }

    pub fn count_by(
        &self,
        mut compare: impl FnMut(&[u8], &[u8]) -> Ordering,
        value: &[u8],
    ) -> usize {
        self.iter()
            .filter(|element| compare(*element, value) == Ordering::Equal)
            .count()
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` and leaves the array untouched when nothing matches.
    pub fn remove(&mut self, value: &[u8]) -> Result<bool> {
        match self.find(value) {
            Some(index) => self.remove_found(index),
            None => Ok(false),
        }
    }

    /// Removes the first element matching `value` under `compare`.
    pub fn remove_by(
        &mut self,
        compare: impl FnMut(&[u8], &[u8]) -> Ordering,
        value: &[u8],
    ) -> Result<bool> {
        match self.find_by(compare, value) {
            Some(index) => self.remove_found(index),
            None => Ok(false),
        }
    }

    /// `true` if `predicate` holds for every element (vacuously for none).
    pub fn all(&self, predicate: impl FnMut(&[u8]) -> bool) -> bool {
        self.iter().all(predicate)
    }

    /// `true` if `predicate` holds for at least one element.
    pub fn any(&self, predicate: impl FnMut(&[u8]) -> bool) -> bool {
        self.iter().any(predicate)
    }

    /// Builds a new array by running `transform(source, out)` on every
    /// element.
    ///
    /// `out` is a zeroed scratch element of the same width. The result has no
    /// destructor.
    pub fn map(&self, mut transform: impl FnMut(&[u8], &mut [u8])) -> Result<Array> {
        let mut mapped = Array::new(self.element)?;
        let mut scratch = vec![0u8; self.element.size()];
        for element in self {
            scratch.fill(0);
            transform(element, &mut scratch);
            mapped.push_back(&scratch)?;
        }
        Ok(mapped)
    }

    /// Builds a new array from copies of the elements accepted by
    /// `predicate`, in order. The result has no destructor.
    pub fn filter(&self, mut predicate: impl FnMut(&[u8]) -> bool) -> Result<Array> {
        let mut filtered = Array::new(self.element)?;
        for element in self {
            if predicate(element) {
                filtered.push_back(element)?;
            }
        }
        Ok(filtered)
    }

    /// Folds the elements from first to last into `accumulator`.
    pub fn reduce<A: ?Sized>(&self, accumulator: &mut A, mut combine: impl FnMut(&mut A, &[u8])) {
        for element in self {
            combine(accumulator, element);
        }
    }

    /// Reverses the elements in place.
    pub fn reverse(&mut self) {
        let size = self.size;
        for slot in 0..size / 2 {
            self.swap_slots(slot, size - 1 - slot);
        }
    }

    fn remove_found(&mut self, index: usize) -> Result<bool> {
        // `find` only yields live slots, which always fit in `isize`.
        self.remove_at(index as isize)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "combinators_test.rs"]
mod combinators_test;
