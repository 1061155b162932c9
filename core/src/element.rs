//! Element type descriptors.

use core::fmt;

/// Describes the fixed-size records stored in an [`Array`](crate::Array).
///
/// The array itself only needs the byte width; the name is only used in
/// diagnostics. [`TypedArray::from_raw`](crate::TypedArray::from_raw)
/// checks the width alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementType {
    size: usize,
    name: &'static str,
}

impl ElementType {
    /// Descriptor for an opaque record of `size` bytes.
    pub const fn bytes(size: usize) -> Self {
        Self { size, name: "bytes" }
    }

    /// Descriptor for an opaque record with a custom diagnostic name.
    pub const fn named(name: &'static str, size: usize) -> Self {
        Self { size, name }
    }

    /// Descriptor for values of `T`.
    pub fn of<T>() -> Self {
        Self {
            size: core::mem::size_of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    /// Width of one element in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Diagnostic name of the element type.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.name, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn of_uses_size_of() {
        assert_eq!(ElementType::of::<i32>().size(), 4);
        assert_eq!(ElementType::of::<[f32; 3]>().size(), 12);
        assert_eq!(ElementType::of::<u8>().name(), "u8");
    }

    #[test]
    fn display_shows_name_and_width() {
        assert_eq!(ElementType::named("Point", 12).to_string(), "Point (12 bytes)");
        assert_eq!(ElementType::bytes(3).to_string(), "bytes (3 bytes)");
    }
}
