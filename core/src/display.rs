//! Debug printing.
//!
//! ```text
//! Array {size: 3, capacity: 8, element_size: 4, data: {0, 1, 2}}
//! ```

use core::fmt;

use crate::array::Array;

/// [`Display`](fmt::Display) adapter returned by [`Array::display_with`].
pub struct DisplayWith<'a, F> {
    array: &'a Array,
    stringify: F,
}

impl Array {
    /// Formats the array header followed by every element rendered with
    /// `stringify`.
    ///
    /// ```
    /// use erased_array_core::Array;
    ///
    /// let mut array = Array::of::<u8>().unwrap();
    /// array.push_back(b"a").unwrap();
    /// array.push_back(b"b").unwrap();
    /// let shown = array.display_with(|f, bytes| write!(f, "{}", bytes[0] as char));
    /// assert_eq!(
    ///     shown.to_string(),
    ///     "Array {size: 2, capacity: 8, element_size: 1, data: {a, b}}"
    /// );
    /// ```
    pub fn display_with<F>(&self, stringify: F) -> DisplayWith<'_, F>
    where
        F: Fn(&mut fmt::Formatter<'_>, &[u8]) -> fmt::Result,
    {
        DisplayWith {
            array: self,
            stringify,
        }
    }

    fn fmt_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Array {{size: {}, capacity: {}, element_size: {}, data: {{",
            self.len(),
            self.capacity(),
            self.element_size()
        )
    }
}

impl<F> fmt::Display for DisplayWith<'_, F>
where
    F: Fn(&mut fmt::Formatter<'_>, &[u8]) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.array.fmt_header(f)?;
        for (i, element) in self.array.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            (self.stringify)(f, element)?;
        }
        f.write_str("}}")
    }
}

/// Without a stringifier only the address range of the live elements is
/// shown.
impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)?;
        let live = self.as_bytes().as_ptr_range();
        write!(f, "{:p} to {:p}}}}}", live.start, live.end)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Array, ElementType};
    use alloc::format;
    use expect_test::expect;

    fn ints(values: &[i32]) -> Array {
        let mut array = Array::of::<i32>().unwrap();
        for value in values {
            array.push_back(&value.to_ne_bytes()).unwrap();
        }
        array
    }

    fn int(f: &mut core::fmt::Formatter<'_>, bytes: &[u8]) -> core::fmt::Result {
        let value = i32::from_ne_bytes(bytes.try_into().unwrap());
        write!(f, "{value}")
    }

    #[test]
    fn empty_array() {
        let array = ints(&[]);
        expect![[r#"Array {size: 0, capacity: 8, element_size: 4, data: {}}"#]]
            .assert_eq(&format!("{}", array.display_with(int)));
    }

    #[test]
    fn elements_are_comma_separated() {
        let array = ints(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        expect![[r#"Array {size: 16, capacity: 32, element_size: 4, data: {0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15}}"#]]
            .assert_eq(&format!("{}", array.display_with(int)));
    }

    #[test]
    fn debug_shows_address_range() {
        let array = Array::with_size(ElementType::bytes(3), 2).unwrap();
        let shown = format!("{array:?}");
        assert!(shown.starts_with("Array {size: 2, capacity: 8, element_size: 3, data: {0x"));
        assert!(shown.contains(" to 0x"));
        assert!(shown.ends_with("}}"));
    }
}
