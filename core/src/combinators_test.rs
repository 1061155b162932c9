use crate::test_utils::{int, int_array, int_values};
use crate::{Array, ElementType};
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use pretty_assertions::assert_eq;

fn b(value: i32) -> [u8; 4] {
    value.to_ne_bytes()
}

/// Fixed-width, NUL-padded text records.
const LABEL: ElementType = ElementType::named("label", 16);

fn label(text: &str) -> [u8; 16] {
    let mut record = [0u8; 16];
    record[..text.len()].copy_from_slice(text.as_bytes());
    record
}

fn label_text(record: &[u8]) -> &str {
    let end = record.iter().position(|&byte| byte == 0).unwrap_or(record.len());
    core::str::from_utf8(&record[..end]).unwrap()
}

/// Compares records by text, ignoring whatever follows the terminator.
fn compare_labels(a: &[u8], b: &[u8]) -> Ordering {
    label_text(a).cmp(label_text(b))
}

/// "String 0" .. "String 3", then 0..7, then 0..11.
fn string_batches() -> Array {
    let mut array = Array::new(LABEL).unwrap();
    for batch in [4, 8, 12] {
        for i in 0..batch {
            array
                .push_back(&label(&alloc::format!("String {i}")))
                .unwrap();
        }
    }
    array
}

#[test]
fn find_returns_the_first_match() {
    let array = int_array([5, 7, 5, 9]);
    assert_eq!(array.find(&b(5)), Some(0));
    assert_eq!(array.find(&b(9)), Some(3));
    assert_eq!(array.find(&b(1)), None);
    assert!(array.contains(&b(7)));
    assert!(!array.contains(&b(8)));
}

#[test]
fn find_in_empty_array() {
    let array = Array::of::<i32>().unwrap();
    assert_eq!(array.find(&b(0)), None);
    assert_eq!(array.count(&b(0)), 0);
}

#[test]
fn find_by_uses_the_comparator() {
    let array = string_batches();
    assert_eq!(array.len(), 24);
    assert_eq!(array.capacity(), 32);
    assert_eq!(array.find_by(compare_labels, &label("String 6")), Some(10));
    assert_eq!(array.find_by(compare_labels, &label("String 12")), None);
    assert!(array.contains_by(compare_labels, &label("String 11")));
}

#[test]
fn find_by_ignores_padding_when_asked_to() {
    let mut array = Array::new(LABEL).unwrap();
    let mut record = label("x");
    record[15] = 0xff;
    array.push_back(&record).unwrap();
    assert_eq!(array.find(&label("x")), None);
    assert_eq!(array.find_by(compare_labels, &label("x")), Some(0));
}

#[test]
fn count_string_batches() {
    let array = string_batches();
    assert_eq!(array.count_by(compare_labels, &label("String 2")), 3);
    assert_eq!(array.count_by(compare_labels, &label("String 5")), 2);
    assert_eq!(array.count_by(compare_labels, &label("String 11")), 1);
    assert_eq!(array.count_by(compare_labels, &label("String 99")), 0);
    assert_eq!(array.count(&label("String 0")), 3);
}

#[test]
fn remove_by_drops_the_first_match_only() {
    let mut array = string_batches();
    assert!(array.remove_by(compare_labels, &label("String 0")).unwrap());
    assert_eq!(array.len(), 23);
    assert_eq!(label_text(array.get(0).unwrap()), "String 1");
    assert_eq!(array.count_by(compare_labels, &label("String 0")), 2);
    assert!(!array.remove_by(compare_labels, &label("nope")).unwrap());
    assert_eq!(array.len(), 23);
}

#[test]
fn remove_without_match_leaves_the_array_alone() {
    let mut array = int_array([1, 2, 3]);
    assert!(!array.remove(&b(4)).unwrap());
    assert_eq!(int_values(&array), vec![1, 2, 3]);
    assert!(array.remove(&b(2)).unwrap());
    assert_eq!(int_values(&array), vec![1, 3]);
}

#[test]
fn all_and_any() {
    let evens = int_array([0, 2, 4, 6]);
    let mixed = int_array([1, 2, 3]);
    let is_even = |bytes: &[u8]| int(bytes) % 2 == 0;

    assert!(evens.all(is_even));
    assert!(!mixed.all(is_even));
    assert!(mixed.any(is_even));
    assert!(!int_array([1, 3]).any(is_even));

    let empty = Array::of::<i32>().unwrap();
    assert!(empty.all(is_even));
    assert!(!empty.any(is_even));
}

#[test]
fn all_and_any_stop_at_the_deciding_element() {
    let array = int_array(0..10);

    let mut calls = 0;
    assert!(!array.all(|bytes| {
        calls += 1;
        int(bytes) < 2
    }));
    assert_eq!(calls, 3);

    let mut calls = 0;
    assert!(array.any(|bytes| {
        calls += 1;
        int(bytes) == 4
    }));
    assert_eq!(calls, 5);

    // Without a deciding element every value is visited
    let mut calls = 0;
    assert!(array.all(|_| {
        calls += 1;
        true
    }));
    assert_eq!(calls, 10);
}

#[test]
fn map_squares() {
    let array = int_array(0..16);
    let squares = array
        .map(|src, dst| {
            let value = int(src);
            dst.copy_from_slice(&(value * value).to_ne_bytes());
        })
        .unwrap();
    assert_eq!(squares.len(), 16);
    assert_eq!(squares.capacity(), 32);
    assert_eq!(squares.get(-1).map(int), Some(225));
    assert!(squares.element_free().is_none());
    // Source untouched.
    assert_eq!(int_values(&array), (0..16).collect::<Vec<_>>());
}

#[test]
fn map_output_starts_zeroed() {
    let array = int_array([7, 8, 9]);
    let mapped = array
        .map(|_, dst| {
            assert_eq!(dst, &[0u8; 4][..]);
            dst[0] = 1;
        })
        .unwrap();
    assert_eq!(mapped.len(), 3);
    assert!(mapped.iter().all(|element| element[0] == 1));
}

#[test]
fn map_does_not_inherit_the_destructor() {
    let mut array = int_array([1, 2]);
    array.set_element_free(|_| panic!("mapped copy must not free"));
    let mapped = array.map(|src, dst| dst.copy_from_slice(src)).unwrap();
    drop(mapped);
    array.clear_element_free();
}

#[test]
fn filter_keeps_matches_in_order() {
    let array = int_array(0..16);
    let evens = array.filter(|bytes| int(bytes) % 2 == 0).unwrap();
    assert_eq!(int_values(&evens), vec![0, 2, 4, 6, 8, 10, 12, 14]);
    assert_eq!(evens.capacity(), 16);

    let none = array.filter(|_| false).unwrap();
    assert!(none.is_empty());
    assert_eq!(none.element_size(), 4);
}

#[test]
fn reduce_sums() {
    let array = int_array(0..16);
    let mut sum = 0i32;
    array.reduce(&mut sum, |acc, bytes| *acc += int(bytes));
    assert_eq!(sum, 120);

    // Accumulators are not reset.
    let mut acc = 12i32;
    array.reduce(&mut acc, |acc, bytes| *acc += int(bytes));
    assert_eq!(acc, 132);
}

#[test]
fn reduce_into_unsized_accumulator() {
    let array = int_array([1, 2, 3]);
    let mut slots = [0i32; 3];
    let mut next = 0;
    array.reduce(&mut slots[..], |acc: &mut [i32], bytes| {
        acc[next] = int(bytes) * 10;
        next += 1;
    });
    assert_eq!(slots, [10, 20, 30]);
}

#[test]
fn reduce_over_empty_array_leaves_the_accumulator() {
    let array = Array::of::<i32>().unwrap();
    let mut acc = 7;
    array.reduce(&mut acc, |acc, bytes| *acc += int(bytes));
    assert_eq!(acc, 7);
}

#[test]
fn reverse_odd_and_even_lengths() {
    let mut odd = int_array(0..7);
    odd.reverse();
    assert_eq!(int_values(&odd), vec![6, 5, 4, 3, 2, 1, 0]);

    let mut even = int_array(0..8);
    even.reverse();
    assert_eq!(int_values(&even), vec![7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn reverse_after_shrink_to_fit() {
    let mut array = int_array(0..5);
    array.shrink_to_fit();
    array.reverse();
    assert_eq!(int_values(&array), vec![4, 3, 2, 1, 0]);
    assert_eq!(array.capacity(), 5);
}

#[test]
fn reverse_trivial_arrays() {
    let mut empty = Array::of::<i32>().unwrap();
    empty.reverse();
    assert!(empty.is_empty());

    let mut single = int_array([3]);
    single.reverse();
    assert_eq!(int_values(&single), vec![3]);
}

#[test]
fn values_of_the_wrong_width_never_match() {
    let mut array = int_array([1, 2]);
    assert_eq!(array.remove(&[1, 0]), Ok(false));
    assert_eq!(array.find(&[1, 0, 0, 0, 0]), None);
}
