//! Construction options for [`Array`](crate::Array).

use alloc::rc::Rc;
use core::fmt;

use crate::element::ElementType;
use crate::ownership::ElementFree;

/// Options accepted by [`Array::with_options`](crate::Array::with_options).
///
/// # Example
///
/// ```
/// use erased_array_core::{Array, ArrayOptions, ElementType};
///
/// let options = ArrayOptions::new(ElementType::of::<u64>())
///     .initial_size(32)
///     .element_free(|bytes: &mut [u8]| bytes.fill(0));
/// let array = Array::with_options(options).unwrap();
/// assert_eq!(array.len(), 32);
/// assert_eq!(array.capacity(), 64);
/// assert!(array.element_free().is_some());
/// ```
#[derive(Clone)]
pub struct ArrayOptions {
    /// Type of the stored records.
    pub element: ElementType,
    /// Number of zeroed live elements the array starts with.
    pub initial_size: usize,
    /// Destructor registered before the array is handed out.
    pub element_free: Option<ElementFree>,
}

impl ArrayOptions {
    /// Options for an empty array of `element` records with no destructor.
    pub fn new(element: ElementType) -> Self {
        Self {
            element,
            initial_size: 0,
            element_free: None,
        }
    }

    /// Start with `size` zeroed elements.
    pub fn initial_size(mut self, size: usize) -> Self {
        self.initial_size = size;
        self
    }

    /// Register a destructor for removed elements.
    pub fn element_free(mut self, free: impl Fn(&mut [u8]) + 'static) -> Self {
        self.element_free = Some(Rc::new(free));
        self
    }
}

impl fmt::Debug for ArrayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayOptions")
            .field("element", &self.element)
            .field("initial_size", &self.initial_size)
            .field("element_free", &self.element_free.is_some())
            .finish()
    }
}
