//! A resizable array of fixed-size, type-erased elements.
//!
//! [`Array`] keeps its elements in one contiguous, zero-initialised byte
//! buffer. It offers:
//!
//! - power-of-two growth with a minimum of [`MIN_CAPACITY`] slots and a
//!   hysteresis band before shrinking ([`capacity`]);
//! - Python-style negative indexing, checked and unchecked ([`index`]);
//! - insertion and removal anywhere, implemented as block moves;
//! - an optional per-element destructor with precise firing rules
//!   ([`ownership`]);
//! - `find`, `count`, `map`, `filter`, `reduce` and friends ([`combinators`]).
//!
//! [`TypedArray`] layers a statically typed API on top for plain-old-data
//! element types.
//!
//! Arrays are single-threaded: they are neither `Send` nor `Sync`.
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod array;
pub mod capacity;
pub mod combinators;
pub mod display;
pub mod element;
pub mod error;
pub mod index;
pub mod options;
pub mod ownership;
pub mod typed;

pub use array::Array;
pub use capacity::MIN_CAPACITY;
pub use display::DisplayWith;
pub use element::ElementType;
pub use error::{ArrayError, Result};
pub use options::ArrayOptions;
pub use ownership::ElementFree;
pub use typed::TypedArray;
