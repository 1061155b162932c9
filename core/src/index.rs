//! Signed index resolution.
//!
//! Indexes follow Python conventions: `-1` is the last element, `-size` the
//! first. Two contracts are offered and kept as separate functions so call
//! sites show which one they rely on.

/// Resolves `index` against an array of `size` live elements.
///
/// Returns `None` when the normalised index falls outside `[0, size)`.
#[inline]
pub fn resolve(index: isize, size: usize) -> Option<usize> {
    let resolved = if index < 0 {
        size.checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };
    (resolved < size).then_some(resolved)
}

/// Normalises a negative `index` without checking it against `size`.
///
/// Only meant for slots the caller already knows are allocated, such as the
/// scratch slot one past the last live element. A negative index reaching
/// before the first element saturates to `0`.
#[inline]
pub fn resolve_unchecked(index: isize, size: usize) -> usize {
    if index < 0 {
        size.saturating_sub(index.unsigned_abs())
    } else {
        index as usize
    }
}
