use crate::*;
use std::{ptr, slice};

const ZERO_TO_NINE: [i32; SEQUENCE_LEN] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// A macro that generates tests for exported functions that must ignore a null destination
macro_rules! test_null_destination {
    ($(
        $name:ident($($arg:expr),*)
    ),+) => {
        $(
            paste::item! {
                #[test]
                fn [<test_ $name:snake _null_destination>]() {
                    unsafe { $name($($arg),*) };
                }
            }
        )+
    };
}

test_null_destination!(
    WriteToInt32Array(ptr::null_mut(), 10),
    WriteToInt32Arrays(ptr::null_mut(), 10, 3, ptr::null_mut()),
    FreeInt32Array(ptr::null_mut())
);

#[test]
fn test_get_int32_array_zero_to_nine() {
    let array = GetInt32ArrayZeroToNine();
    assert!(!array.is_null());

    let values = unsafe { slice::from_raw_parts(array, SEQUENCE_LEN) };
    assert_eq!(values, ZERO_TO_NINE);

    unsafe { FreeInt32Array(array) };
}

#[test]
fn test_get_int32_array_zero_to_nine_allocates() {
    let first = GetInt32ArrayZeroToNine();
    let second = GetInt32ArrayZeroToNine();
    assert_ne!(first, second);

    // Mutating one of the arrays doesn't affect the other or the canonical sequence.
    unsafe { *first = 99 };
    assert_eq!(unsafe { IsInt32ArrayZeroToNine(first) }, 0);
    assert_eq!(unsafe { IsInt32ArrayZeroToNine(second) }, 1);
    assert!(is_zero_to_nine(SequenceProvider::global().values()));

    unsafe {
        FreeInt32Array(first);
        FreeInt32Array(second);
    }
}

#[test]
fn test_is_int32_array_zero_to_nine() {
    let array = ZERO_TO_NINE;
    assert_eq!(unsafe { IsInt32ArrayZeroToNine(array.as_ptr()) }, 1);

    let array = [0, 1, 2, 3, 4, 5, 6, 7, 8, 99];
    assert_eq!(unsafe { IsInt32ArrayZeroToNine(array.as_ptr()) }, 0);
}

#[test]
fn test_is_int32_array_zero_to_nine_any_element() {
    for index in 0..SEQUENCE_LEN {
        let mut array = ZERO_TO_NINE;
        array[index] = -1;
        assert_eq!(
            unsafe { IsInt32ArrayZeroToNine(array.as_ptr()) },
            0,
            "element {index} was changed"
        );
    }
}

#[test]
fn test_is_int32_array_zero_to_nine_null() {
    assert_eq!(unsafe { IsInt32ArrayZeroToNine(ptr::null()) }, 0);
}

#[test]
fn test_write_to_int32_array() {
    let mut dest = [-1; SEQUENCE_LEN];
    unsafe { WriteToInt32Array(dest.as_mut_ptr(), 10) };
    assert_eq!(dest, ZERO_TO_NINE);
    assert!(SequenceProvider::is_initialized());
}

#[test]
fn test_write_to_int32_array_short() {
    let mut dest = [-1; SEQUENCE_LEN];
    unsafe { WriteToInt32Array(dest.as_mut_ptr(), 5) };
    assert_eq!(dest, [0, 1, 2, 3, 4, -1, -1, -1, -1, -1]);
}

#[test]
fn test_write_to_int32_array_clamps_length() {
    let mut dest = [-1; 12];
    unsafe { WriteToInt32Array(dest.as_mut_ptr(), 12) };
    assert_eq!(dest, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, -1, -1]);
}

#[test]
fn test_write_to_int32_array_negative_length() {
    let mut dest = [-1; SEQUENCE_LEN];
    unsafe { WriteToInt32Array(dest.as_mut_ptr(), -3) };
    assert_eq!(dest, [-1; SEQUENCE_LEN]);
}

#[test]
fn test_write_to_int32_array_is_idempotent() {
    for _ in 0..3 {
        let mut dest = [-1; SEQUENCE_LEN];
        unsafe { WriteToInt32Array(dest.as_mut_ptr(), 10) };
        assert_eq!(dest, ZERO_TO_NINE);
    }
}

#[test]
fn test_write_to_int32_arrays() {
    let mut dest_a = [-1; 5];
    let mut dest_b = [-1; 3];
    unsafe { WriteToInt32Arrays(dest_a.as_mut_ptr(), 5, 3, dest_b.as_mut_ptr()) };

    assert_eq!(dest_a, [0, 1, 2, 3, 4]);
    assert_eq!(dest_b, [3, 2, 1]);
}

#[test]
fn test_write_to_int32_arrays_second_is_not_clamped() {
    let mut dest_a = [-1; SEQUENCE_LEN];
    let mut dest_b = [-1; 12];
    unsafe { WriteToInt32Arrays(dest_a.as_mut_ptr(), 10, 12, dest_b.as_mut_ptr()) };

    assert_eq!(dest_a, ZERO_TO_NINE);
    assert_eq!(dest_b, [12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_write_to_int32_arrays_negative_lengths() {
    let mut dest_a = [-1; 2];
    let mut dest_b = [-1; 2];
    unsafe { WriteToInt32Arrays(dest_a.as_mut_ptr(), -1, -1, dest_b.as_mut_ptr()) };

    assert_eq!(dest_a, [-1, -1]);
    assert_eq!(dest_b, [-1, -1]);
}

#[test]
fn test_write_to_int32_arrays_null_second() {
    let mut dest_a = [-1; 3];
    unsafe { WriteToInt32Arrays(dest_a.as_mut_ptr(), 3, 3, ptr::null_mut()) };

    assert_eq!(dest_a, [0, 1, 2]);
}
