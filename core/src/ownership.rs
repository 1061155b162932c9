//! Element ownership: destructors, duplication, clearing and dropping.
//!
//! The destructor fires exactly once for each element that leaves the array
//! while still resident: through [`Array::remove_at`] (and the `remove`
//! variants), [`Array::resize`] to a smaller size, [`Array::clear`] and when
//! the array is dropped. Elements moved around by a shift are still alive and
//! are never passed to it, and popped elements are handed to the caller
//! instead.

use alloc::rc::Rc;
use core::ops::Range;

use crate::array::Array;
use crate::error::Result;

/// Destructor invoked on an element's bytes before its slot is vacated.
///
/// Shared between an array and its duplicates.
pub type ElementFree = Rc<dyn Fn(&mut [u8])>;

impl Array {
    /// Registers `free` as the element destructor, replacing any previous one.
    pub fn set_element_free(&mut self, free: impl Fn(&mut [u8]) + 'static) {
        self.element_free = Some(Rc::new(free));
    }

    /// Registers an already shared destructor.
    pub fn set_shared_element_free(&mut self, free: ElementFree) {
        self.element_free = Some(free);
    }

    /// Unregisters the element destructor.
    pub fn clear_element_free(&mut self) {
        self.element_free = None;
    }

    pub fn element_free(&self) -> Option<&ElementFree> {
        self.element_free.as_ref()
    }

    /// Copies the array byte for byte.
    ///
    /// The copy has its own buffer but shares the destructor, and whatever
    /// the elements point to is not cloned. Use [`Array::duplicate_with`]
    /// when elements own resources.
    pub fn duplicate(&self) -> Result<Array> {
        let mut copy = self.empty_copy()?;
        copy.as_bytes_mut().copy_from_slice(self.as_bytes());
        Ok(copy)
    }

    /// Copies the array, building each element with `clone(destination,
    /// source)`.
    ///
    /// Destinations start zeroed.
    pub fn duplicate_with(&self, mut clone: impl FnMut(&mut [u8], &[u8])) -> Result<Array> {
        let mut copy = self.empty_copy()?;
        for slot in 0..self.size {
            let range = self.slot_range(slot);
            clone(&mut copy.data[range.clone()], &self.data[range]);
        }
        Ok(copy)
    }

    /// Destroys every element and returns to a fresh minimum-capacity buffer.
    pub fn clear(&mut self) -> Result<()> {
        self.reserve_for(0)?;
        tracing::debug!(size = self.size, element = %self.element, "clearing array");
        self.release(0..self.size);
        self.size = 0;
        self.settle();
        self.data.fill(0);
        Ok(())
    }

    /// Destroys every element and releases the buffer.
    ///
    /// Equivalent to dropping the array.
    pub fn free(self) {
        drop(self);
    }

    /// Runs the destructor over `slots`.
    pub(crate) fn release(&mut self, slots: Range<usize>) {
        let Some(free) = self.element_free.clone() else {
            return;
        };
        for slot in slots {
            free(self.slot_mut(slot));
        }
    }

    fn empty_copy(&self) -> Result<Array> {
        tracing::debug!(size = self.size, element = %self.element, "duplicating array");
        let mut copy = Array::with_size(self.element, self.size)?;
        copy.element_free = self.element_free.clone();
        Ok(copy)
    }
}

impl Drop for Array {
    fn drop(&mut self) {
        self.release(0..self.size);
    }
}

#[cfg(test)]
#[path = "ownership_test.rs"]
mod ownership_test;
