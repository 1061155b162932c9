//! Capacity policy for [`Array`](crate::Array).
//!
//! The policy is a pure function of the live element count and the current
//! slot count, so it can be checked without touching the allocator.

/// Smallest number of slots an array keeps allocated.
pub const MIN_CAPACITY: usize = 8;

/// Returns the slot count an array of `size` live elements should have,
/// given that it currently has `capacity` slots.
///
/// - Below [`MIN_CAPACITY`] the floor wins.
/// - When `size` has outgrown the buffer, or fallen below half of it, the
///   capacity becomes the smallest power of two strictly greater than `size`.
/// - Otherwise the capacity is left alone, so alternating pushes and pops
///   around a power of two don't reallocate every time.
pub fn scaled_capacity(size: usize, capacity: usize) -> usize {
    if size < MIN_CAPACITY {
        MIN_CAPACITY
    } else if size < capacity / 2 || size >= capacity {
        next_power_above(size)
    } else {
        capacity
    }
}

/// `2^(floor(log2(size)) + 1)`, saturating at the largest power of two.
#[inline]
fn next_power_above(size: usize) -> usize {
    let bits = usize::BITS - size.leading_zeros();
    1usize.checked_shl(bits).unwrap_or(1 << (usize::BITS - 1))
}
