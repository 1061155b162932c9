//! The byte-erased resizable array.
//!
//! [`Array`] stores fixed-size records in one contiguous `Vec<u8>` whose
//! length is always `capacity * element_size`. Every mutation follows the
//! same three steps:
//!
//! 1. grow the buffer if the new size needs it (the only fallible step);
//! 2. move bytes and commit the new size;
//! 3. shrink the buffer if the capacity policy asks for it.
//!
//! Failures therefore happen before anything observable changes.

use alloc::vec::Vec;
use core::ops::Range;
use core::slice::ChunksExact;

use crate::capacity::{self, MIN_CAPACITY};
use crate::element::ElementType;
use crate::error::{ArrayError, Result};
use crate::index;
use crate::options::ArrayOptions;
use crate::ownership::ElementFree;

/// A growable array of fixed-size, type-erased elements.
///
/// Elements are passed in and out as byte slices exactly
/// [`element_size`](Array::element_size) bytes long. Indexes are signed and
/// negative values count from the end.
///
/// ```
/// use erased_array_core::{Array, ElementType};
///
/// let mut array = Array::new(ElementType::of::<i32>()).unwrap();
/// for i in 0i32..4 {
///     array.push_back(&i.to_ne_bytes()).unwrap();
/// }
/// assert_eq!(array.get(-1), Some(&3i32.to_ne_bytes()[..]));
/// assert_eq!(array.pop_front().unwrap(), &0i32.to_ne_bytes()[..]);
/// assert_eq!(array.len(), 3);
/// ```
pub struct Array {
    pub(crate) size: usize,
    pub(crate) capacity: usize,
    pub(crate) element: ElementType,
    pub(crate) element_free: Option<ElementFree>,
    pub(crate) data: Vec<u8>,
}

static_assertions::assert_not_impl_any!(Array: Send, Sync);

impl Array {
    /// Creates an empty array with [`MIN_CAPACITY`] zeroed slots.
    pub fn new(element: ElementType) -> Result<Self> {
        if element.size() == 0 {
            return Err(ArrayError::ZeroSizedElement);
        }
        let mut array = Self {
            size: 0,
            capacity: 0,
            element,
            element_free: None,
            data: Vec::new(),
        };
        array.grow_to(MIN_CAPACITY)?;
        Ok(array)
    }

    /// Creates an empty array of `T`-sized elements.
    pub fn of<T>() -> Result<Self> {
        Self::new(ElementType::of::<T>())
    }

    /// Creates an array holding `size` zeroed elements.
    pub fn with_size(element: ElementType, size: usize) -> Result<Self> {
        let mut array = Self::new(element)?;
        array.resize(size)?;
        Ok(array)
    }

    /// Creates an array from [`ArrayOptions`].
    pub fn with_options(options: ArrayOptions) -> Result<Self> {
        let mut array = Self::with_size(options.element, options.initial_size)?;
        array.element_free = options.element_free;
        Ok(array)
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of allocated element slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Width of one element in bytes.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.element.size()
    }

    pub fn element_type(&self) -> ElementType {
        self.element
    }

    /// Bytes of the live elements, in order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.size * self.element.size()]
    }

    /// Mutable bytes of the live elements.
    ///
    /// Writing here bypasses the destructor just like [`Array::set`].
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let end = self.size * self.element.size();
        &mut self.data[..end]
    }

    /// The whole allocation, including slack slots past the live elements.
    pub fn buffer(&self) -> &[u8] {
        &self.data
    }

    /// Iterates over the live elements.
    pub fn iter(&self) -> ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.element.size())
    }

    // ------------------------------------------------------------------
    // Indexed access
    // ------------------------------------------------------------------

    /// Element at `index`, or `None` when it does not resolve to a live
    /// element.
    pub fn get(&self, index: isize) -> Option<&[u8]> {
        index::resolve(index, self.size).map(|slot| self.slot(slot))
    }

    /// Mutable element at `index`.
    pub fn get_mut(&mut self, index: isize) -> Option<&mut [u8]> {
        let slot = index::resolve(index, self.size)?;
        Some(self.slot_mut(slot))
    }

    /// Slot at `index` without checking it against [`len`](Array::len).
    ///
    /// Negative indexes are still normalised against the live size. Any
    /// allocated slot can be read, including slack past the end whose
    /// contents are zero or left over from earlier elements.
    ///
    /// # Panics
    ///
    /// Panics if the slot lies outside the allocation.
    pub fn at_unchecked(&self, index: isize) -> &[u8] {
        self.slot(index::resolve_unchecked(index, self.size))
    }

    pub fn front(&self) -> Option<&[u8]> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&[u8]> {
        self.get(-1)
    }

    /// Overwrites the element at `index`.
    ///
    /// The previous bytes are not passed to the destructor; releasing
    /// whatever they owned is up to the caller.
    pub fn set(&mut self, index: isize, value: &[u8]) -> Result<()> {
        self.check_width(value)?;
        let slot = self.resolve(index)?;
        self.slot_mut(slot).copy_from_slice(value);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Insertion
    // ------------------------------------------------------------------

    /// Appends `value`.
    pub fn push_back(&mut self, value: &[u8]) -> Result<()> {
        self.check_width(value)?;
        self.reserve_for(self.size + 1)?;
        self.size += 1;
        self.slot_mut(self.size - 1).copy_from_slice(value);
        self.settle();
        Ok(())
    }

    /// Prepends `value`, shifting every element one slot toward the end.
    pub fn push_front(&mut self, value: &[u8]) -> Result<()> {
        self.check_width(value)?;
        self.reserve_for(self.size + 1)?;
        self.shift_toward_end(0);
        self.slot_mut(0).copy_from_slice(value);
        self.settle();
        Ok(())
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// `index == len()` appends. Otherwise the index must resolve to a live
    /// element, which is shifted one slot toward the end together with
    /// everything after it.
    pub fn insert_at(&mut self, index: isize, value: &[u8]) -> Result<()> {
        self.check_width(value)?;
        if usize::try_from(index).is_ok_and(|index| index == self.size) {
            return self.push_back(value);
        }
        let slot = self.resolve(index)?;
        self.reserve_for(self.size + 1)?;
        self.shift_toward_end(slot);
        self.slot_mut(slot).copy_from_slice(value);
        self.settle();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------

    /// Destroys the element at `index` and closes the gap.
    pub fn remove_at(&mut self, index: isize) -> Result<()> {
        let slot = self.resolve(index)?;
        self.reserve_for(self.size - 1)?;
        self.release(slot..slot + 1);
        let es = self.element.size();
        self.data.copy_within((slot + 1) * es..self.size * es, slot * es);
        self.size -= 1;
        self.settle();
        Ok(())
    }

    /// Removes the last element and returns it.
    ///
    /// The returned bytes live in the scratch slot just past the new end;
    /// the borrow ends before the array can be mutated again. Ownership of
    /// the element passes to the caller, so the destructor is not run.
    pub fn pop_back(&mut self) -> Result<&[u8]> {
        if self.size == 0 {
            return Err(ArrayError::Empty);
        }
        self.reserve_for(self.size - 1)?;
        self.size -= 1;
        self.settle();
        Ok(self.slot(self.size))
    }

    /// Removes the first element, keeping the order of the rest (O(n)).
    pub fn pop_front(&mut self) -> Result<&[u8]> {
        if self.size == 0 {
            return Err(ArrayError::Empty);
        }
        self.pop_slot(0)
    }

    /// Removes the first element by moving the last one into its place (O(1)).
    ///
    /// The remaining elements are reordered.
    pub fn pop_front_fast(&mut self) -> Result<&[u8]> {
        if self.size == 0 {
            return Err(ArrayError::Empty);
        }
        self.reserve_for(self.size - 1)?;
        self.swap_slots(0, self.size - 1);
        self.size -= 1;
        self.settle();
        Ok(self.slot(self.size))
    }

    /// Removes the element at `index`, keeping the order of the rest.
    pub fn pop_at(&mut self, index: isize) -> Result<&[u8]> {
        if self.size == 0 {
            return Err(ArrayError::Empty);
        }
        let slot = self.resolve(index)?;
        self.pop_slot(slot)
    }

    // ------------------------------------------------------------------
    // Sizing
    // ------------------------------------------------------------------

    /// Sets the number of live elements.
    ///
    /// Elements past `new_size` are destroyed; new elements are zeroed.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        self.reserve_for(new_size)?;
        let es = self.element.size();
        if new_size < self.size {
            self.release(new_size..self.size);
        } else {
            self.data[self.size * es..new_size * es].fill(0);
        }
        self.size = new_size;
        self.settle();
        Ok(())
    }

    /// Releases every slot past the live elements.
    ///
    /// This is the only operation that leaves the capacity off the
    /// power-of-two schedule; the next size change puts it back.
    pub fn shrink_to_fit(&mut self) {
        tracing::debug!(from = self.capacity, to = self.size, "shrinking to fit");
        self.shrink_to(self.size);
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    #[inline]
    pub(crate) fn slot_range(&self, slot: usize) -> Range<usize> {
        let es = self.element.size();
        slot * es..(slot + 1) * es
    }

    #[inline]
    pub(crate) fn slot(&self, slot: usize) -> &[u8] {
        &self.data[self.slot_range(slot)]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, slot: usize) -> &mut [u8] {
        let range = self.slot_range(slot);
        &mut self.data[range]
    }

    pub(crate) fn check_width(&self, value: &[u8]) -> Result<()> {
        if value.len() == self.element.size() {
            Ok(())
        } else {
            Err(ArrayError::ElementSizeMismatch {
                expected: self.element.size(),
                actual: value.len(),
            })
        }
    }

    fn resolve(&self, index: isize) -> Result<usize> {
        index::resolve(index, self.size).ok_or(ArrayError::IndexOutOfBounds {
            index,
            size: self.size,
        })
    }

    /// Swaps two live or scratch slots in place.
    pub(crate) fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let es = self.element.size();
        let (head, tail) = self.data.split_at_mut(hi * es);
        head[lo * es..(lo + 1) * es].swap_with_slice(&mut tail[..es]);
    }

    /// Opens a gap at `slot` by moving `slot..size` one slot toward the end
    /// and bumping the size. The buffer must already have room.
    fn shift_toward_end(&mut self, slot: usize) {
        let es = self.element.size();
        self.data.copy_within(slot * es..self.size * es, (slot + 1) * es);
        self.size += 1;
    }

    /// Moves `slot` to the end of the live range, preserving the order of
    /// the others, then drops it from the live range.
    fn pop_slot(&mut self, slot: usize) -> Result<&[u8]> {
        self.reserve_for(self.size - 1)?;
        let es = self.element.size();
        self.data[slot * es..self.size * es].rotate_left(es);
        self.size -= 1;
        self.settle();
        Ok(self.slot(self.size))
    }

    /// Grows the buffer if `size` live elements need more slots.
    pub(crate) fn reserve_for(&mut self, size: usize) -> Result<()> {
        let target = capacity::scaled_capacity(size, self.capacity);
        if target < size {
            return Err(ArrayError::CapacityOverflow {
                capacity: size,
                element_size: self.element.size(),
            });
        }
        if target > self.capacity {
            self.grow_to(target)?;
        }
        Ok(())
    }

    /// Shrinks the buffer if the committed size no longer needs all slots.
    pub(crate) fn settle(&mut self) {
        let target = capacity::scaled_capacity(self.size, self.capacity);
        if target < self.capacity {
            self.shrink_to(target);
        }
    }

    fn grow_to(&mut self, capacity: usize) -> Result<()> {
        let element_size = self.element.size();
        let bytes = capacity
            .checked_mul(element_size)
            .ok_or(ArrayError::CapacityOverflow {
                capacity,
                element_size,
            })?;
        if let Err(source) = self.data.try_reserve_exact(bytes - self.data.len()) {
            tracing::warn!(requested_bytes = bytes, %source, "element buffer allocation failed");
            return Err(ArrayError::Allocation {
                requested_bytes: bytes,
                source,
            });
        }
        // Zero-fills every slot in `old_capacity..capacity`.
        self.data.resize(bytes, 0);
        tracing::trace!(from = self.capacity, to = capacity, element_size, "grew element buffer");
        self.capacity = capacity;
        Ok(())
    }

    fn shrink_to(&mut self, capacity: usize) {
        self.data.truncate(capacity * self.element.size());
        self.data.shrink_to_fit();
        tracing::trace!(from = self.capacity, to = capacity, "shrank element buffer");
        self.capacity = capacity;
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a [u8];
    type IntoIter = ChunksExact<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
