//! Statically typed view over [`Array`].
//!
//! `TypedArray<T>` wraps a byte-erased array whose elements are `T` and
//! converts at the boundary with `bytemuck`, so callers never handle raw
//! bytes. Every accessor returns an owned copy of the element; nothing
//! borrowed from the buffer outlives the call.
//!
//! # Example
//!
//! ```
//! use erased_array_core::TypedArray;
//!
//! let mut squares = TypedArray::<i32>::new().unwrap();
//! for i in 0..16 {
//!     squares.push_back(i).unwrap();
//! }
//! let squares = squares.map(|x| x * x).unwrap();
//! assert_eq!(squares.get(-1), Some(225));
//! assert_eq!(squares.reduce(0, |acc, x| acc + x), 1240);
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use bytemuck::Pod;

use crate::array::Array;
use crate::element::ElementType;
use crate::error::{ArrayError, Result};

/// An [`Array`] of `T` values.
pub struct TypedArray<T> {
    raw: Array,
    _marker: PhantomData<T>,
}

static_assertions::assert_eq_size!(TypedArray<u64>, Array);

#[inline]
fn read<T: Pod>(bytes: &[u8]) -> T {
    bytemuck::pod_read_unaligned(bytes)
}

impl<T: Pod> TypedArray<T> {
    pub fn new() -> Result<Self> {
        Ok(Self::wrap(Array::of::<T>()?))
    }

    /// Creates an array of `size` zeroed values.
    pub fn with_size(size: usize) -> Result<Self> {
        Ok(Self::wrap(Array::with_size(ElementType::of::<T>(), size)?))
    }

    /// Creates an array holding a copy of `values`.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        let mut array = Self::new()?;
        for value in values {
            array.push_back(*value)?;
        }
        Ok(array)
    }

    /// Reinterprets a byte-erased array as holding `T`.
    ///
    /// Fails with [`ArrayError::ElementSizeMismatch`] if the element width
    /// differs from `size_of::<T>()`.
    pub fn from_raw(raw: Array) -> Result<Self> {
        let expected = core::mem::size_of::<T>();
        if raw.element_size() != expected {
            return Err(ArrayError::ElementSizeMismatch {
                expected,
                actual: raw.element_size(),
            });
        }
        Ok(Self::wrap(raw))
    }

    fn wrap(raw: Array) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub fn as_raw(&self) -> &Array {
        &self.raw
    }

    /// Mutable access to the erased array, e.g. to register a destructor.
    pub fn as_raw_mut(&mut self) -> &mut Array {
        &mut self.raw
    }

    pub fn into_raw(self) -> Array {
        self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    pub fn get(&self, index: isize) -> Option<T> {
        self.raw.get(index).map(read)
    }

    pub fn front(&self) -> Option<T> {
        self.raw.front().map(read)
    }

    pub fn back(&self) -> Option<T> {
        self.raw.back().map(read)
    }

    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        self.raw.set(index, bytemuck::bytes_of(&value))
    }

    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.raw.push_back(bytemuck::bytes_of(&value))
    }

    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.raw.push_front(bytemuck::bytes_of(&value))
    }

    pub fn insert_at(&mut self, index: isize, value: T) -> Result<()> {
        self.raw.insert_at(index, bytemuck::bytes_of(&value))
    }

    pub fn remove_at(&mut self, index: isize) -> Result<()> {
        self.raw.remove_at(index)
    }

    pub fn remove(&mut self, value: T) -> Result<bool> {
        self.raw.remove(bytemuck::bytes_of(&value))
    }

    pub fn pop_back(&mut self) -> Result<T> {
        self.raw.pop_back().map(read)
    }

    pub fn pop_front(&mut self) -> Result<T> {
        self.raw.pop_front().map(read)
    }

    pub fn pop_front_fast(&mut self) -> Result<T> {
        self.raw.pop_front_fast().map(read)
    }

    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        self.raw.pop_at(index).map(read)
    }

    pub fn resize(&mut self, size: usize) -> Result<()> {
        self.raw.resize(size)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.raw.clear()
    }

    pub fn reverse(&mut self) {
        self.raw.reverse();
    }

    /// Index of the first value bitwise equal to `value`.
    pub fn find(&self, value: T) -> Option<usize> {
        self.raw.find(bytemuck::bytes_of(&value))
    }

    pub fn contains(&self, value: T) -> bool {
        self.find(value).is_some()
    }

    pub fn count(&self, value: T) -> usize {
        self.raw.count(bytemuck::bytes_of(&value))
    }

    pub fn all(&self, mut predicate: impl FnMut(T) -> bool) -> bool {
        self.raw.all(|bytes| predicate(read(bytes)))
    }

    pub fn any(&self, mut predicate: impl FnMut(T) -> bool) -> bool {
        self.raw.any(|bytes| predicate(read(bytes)))
    }

    pub fn map(&self, mut transform: impl FnMut(T) -> T) -> Result<Self> {
        let mapped = self.raw.map(|bytes, out| {
            out.copy_from_slice(bytemuck::bytes_of(&transform(read(bytes))));
        })?;
        Ok(Self::wrap(mapped))
    }

    pub fn filter(&self, mut predicate: impl FnMut(T) -> bool) -> Result<Self> {
        Ok(Self::wrap(self.raw.filter(|bytes| predicate(read(bytes)))?))
    }

    /// Folds the values from first to last, starting from `init`.
    pub fn reduce<A>(&self, init: A, combine: impl FnMut(A, T) -> A) -> A {
        self.iter().fold(init, combine)
    }

    /// Iterates over copies of the values.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = T> + '_ {
        self.raw.iter().map(read)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Pod> TryFrom<&[T]> for TypedArray<T> {
    type Error = ArrayError;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<T: Pod + fmt::Debug> fmt::Debug for TypedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedArray")
            .field("element_type", &core::any::type_name::<T>())
            .field("capacity", &self.capacity())
            .field("values", &self.to_vec())
            .finish()
    }
}

#[cfg(test)]
#[path = "typed_test.rs"]
mod typed_test;
