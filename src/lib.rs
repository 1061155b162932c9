//! erased-array - a resizable array of fixed-size, type-erased elements
//!
//! # Overview
//!
//! [`Array`] stores records of any fixed width in one contiguous buffer and
//! hands them in and out as byte slices. Capacity follows a power-of-two
//! schedule with a floor of [`MIN_CAPACITY`] slots, indexes may be negative
//! and count from the end, and an optional destructor is run on every element
//! that leaves the array while still resident.
//!
//! # Quick Start
//!
//! ```
//! use erased_array::{Array, ElementType, helpers};
//!
//! let mut array = Array::new(ElementType::of::<i32>()).unwrap();
//! for i in 0i32..16 {
//!     array.push_back(&i.to_ne_bytes()).unwrap();
//! }
//! assert_eq!(array.capacity(), 32);
//!
//! let squares = array.map(helpers::square_i32).unwrap();
//! let mut sum = 0;
//! squares.reduce(&mut sum, helpers::sum_i32);
//! assert_eq!(sum, 1240);
//!
//! let evens = array.filter(helpers::is_even_i32).unwrap();
//! assert_eq!(
//!     evens.display_with(helpers::fmt_i32).to_string(),
//!     "Array {size: 8, capacity: 16, element_size: 4, data: {0, 2, 4, 6, 8, 10, 12, 14}}"
//! );
//! ```
//!
//! # Typed arrays
//!
//! For plain-old-data element types, [`TypedArray`] does the byte
//! conversions:
//!
//! ```
//! use erased_array::TypedArray;
//!
//! let values = TypedArray::from_slice(&[3u64, 1, 4, 1, 5]).unwrap();
//! assert_eq!(values.count(1), 2);
//! assert_eq!(values.get(-1), Some(5));
//! ```

// Stringifiers and callbacks for common element types
pub mod helpers;

// Re-export the array and its supporting types
pub use erased_array_core::{
    Array, ArrayError, ArrayOptions, DisplayWith, ElementFree, ElementType, MIN_CAPACITY, Result,
    TypedArray,
};

// Re-export the building blocks for callers that reimplement the policy
pub use erased_array_core::{capacity, index};
