//! A table of owned strings addressed by 4-byte handles.
//!
//! Arrays store the handles; the pool owns the text. Registering
//! [`StringPool::releaser`] as an array's element destructor hands each
//! removed string back to the pool.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use erased_array::ArrayError;

/// Width of a handle element.
pub const HANDLE_SIZE: usize = 4;

/// Handle that never refers to a string.
pub const NULL_HANDLE: [u8; HANDLE_SIZE] = u32::MAX.to_ne_bytes();

pub struct StringPool {
    slots: RefCell<Vec<Option<String>>>,
    limit: usize,
}

impl StringPool {
    pub fn new() -> Rc<Self> {
        // Every u32 below the null handle is addressable.
        Self::with_limit(u32::MAX as usize)
    }

    /// Pool that hands out at most `limit` handles.
    pub fn with_limit(limit: usize) -> Rc<Self> {
        Rc::new(Self {
            slots: RefCell::default(),
            limit: limit.min(u32::MAX as usize),
        })
    }

    /// Stores `text` and returns the handle bytes referring to it.
    ///
    /// Fails with [`ArrayError::CapacityOverflow`] once every handle has
    /// been handed out; released handles are not reused.
    pub fn intern(&self, text: impl Into<String>) -> Result<[u8; HANDLE_SIZE], ArrayError> {
        let mut slots = self.slots.borrow_mut();
        let index = slots.len();
        let handle = u32::try_from(index)
            .ok()
            .filter(|_| index < self.limit)
            .ok_or(ArrayError::CapacityOverflow {
                capacity: index + 1,
                element_size: HANDLE_SIZE,
            })?;
        slots.push(Some(text.into()));
        Ok(handle.to_ne_bytes())
    }

    /// Text behind a handle, or `None` once it has been released.
    pub fn get(&self, handle: &[u8]) -> Option<String> {
        let slots = self.slots.borrow();
        slots.get(Self::slot(handle)?)?.clone()
    }

    /// Drops the text behind a handle.
    pub fn release(&self, handle: &[u8]) {
        let Some(index) = Self::slot(handle) else {
            return;
        };
        if let Some(slot) = self.slots.borrow_mut().get_mut(index) {
            tracing::trace!(index, "releasing pooled string");
            *slot = None;
        }
    }

    /// Number of strings still owned by some array.
    pub fn live(&self) -> usize {
        self.slots.borrow().iter().flatten().count()
    }

    /// Orders two handles by the text they refer to.
    pub fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        self.get(a).cmp(&self.get(b))
    }

    /// Element destructor returning strings to `pool`.
    pub fn releaser(pool: &Rc<Self>) -> impl Fn(&mut [u8]) + 'static {
        let pool = Rc::clone(pool);
        move |handle| pool.release(handle)
    }

    fn slot(handle: &[u8]) -> Option<usize> {
        let bytes: [u8; HANDLE_SIZE] = handle.try_into().ok()?;
        usize::try_from(u32::from_ne_bytes(bytes)).ok()
    }
}
