//! Ready-made callbacks for common element types.
//!
//! The `fmt_*` functions plug into [`Array::display_with`], the others into
//! [`Array::map`], [`Array::filter`], [`Array::reduce`] and the comparator
//! taking operations.
//!
//! All of them expect elements of exactly the right width and panic
//! otherwise.
//!
//! [`Array::display_with`]: crate::Array::display_with
//! [`Array::map`]: crate::Array::map
//! [`Array::filter`]: crate::Array::filter
//! [`Array::reduce`]: crate::Array::reduce

use std::cmp::Ordering;
use std::fmt;

fn i32_of(bytes: &[u8]) -> i32 {
    bytemuck::pod_read_unaligned(bytes)
}

/// Formats an `i32` element in decimal.
pub fn fmt_i32(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "{}", i32_of(bytes))
}

/// Formats an `f32` element with two decimals.
pub fn fmt_f32(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "{:.2}", bytemuck::pod_read_unaligned::<f32>(bytes))
}

/// Formats an `f64` element with four decimals.
pub fn fmt_f64(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "{:.4}", bytemuck::pod_read_unaligned::<f64>(bytes))
}

/// Formats a one-byte element as a character.
pub fn fmt_char(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "{}", char::from(bytes[0]))
}

/// Formats a fixed-width, NUL-padded text record as a quoted string, or
/// `NULL` when every byte is zero.
pub fn fmt_text(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    if bytes.iter().all(|&byte| byte == 0) {
        return f.write_str("NULL");
    }
    write!(f, "\"{}\"", String::from_utf8_lossy(text_of(bytes)))
}

/// Bytes of a text record up to the first NUL.
pub fn text_of(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|&byte| byte == 0).unwrap_or(bytes.len());
    &bytes[..end]
}

/// Builds a NUL-padded text record of `width` bytes, truncating `text` if
/// it does not fit.
pub fn text_record(text: &str, width: usize) -> Vec<u8> {
    let mut record = vec![0u8; width];
    let len = text.len().min(width);
    record[..len].copy_from_slice(&text.as_bytes()[..len]);
    record
}

/// Orders text records by their contents, ignoring the padding.
pub fn compare_text(a: &[u8], b: &[u8]) -> Ordering {
    text_of(a).cmp(text_of(b))
}

/// `map` callback squaring an `i32` element.
pub fn square_i32(src: &[u8], dst: &mut [u8]) {
    let value = i32_of(src);
    dst.copy_from_slice(bytemuck::bytes_of(&value.wrapping_mul(value)));
}

/// `filter` predicate accepting even `i32` elements.
pub fn is_even_i32(bytes: &[u8]) -> bool {
    i32_of(bytes) % 2 == 0
}

/// `reduce` callback adding an `i32` element to the accumulator.
pub fn sum_i32(acc: &mut i32, bytes: &[u8]) {
    *acc = acc.wrapping_add(i32_of(bytes));
}
