//! Exposes the zero-to-nine fixtures using the C ABI.
//!
//! The exported names are consumed by foreign test harnesses, which is why they don't follow Rust
//! naming conventions.
#![allow(non_snake_case)]

use capi_utils::{
    buffer_destroy, buffer_into_raw, clamp_len, slice_from_raw_parts, slice_from_raw_parts_mut,
};

use crate::sequence::{is_zero_to_nine, SequenceProvider, SEQUENCE_LEN};

/// Allocates a new array of ten `int32` values containing `0` through `9`.
///
/// Ownership of the array is transferred to the caller. It must be released exactly once using
/// `FreeInt32Array`; releasing it with another allocator, e.g. `free`, leads to undefined
/// behavior.
#[no_mangle]
pub extern "C" fn GetInt32ArrayZeroToNine() -> *mut i32 {
    buffer_into_raw(SequenceProvider::global().allocate())
}

/// Releases an array that was allocated by `GetInt32ArrayZeroToNine`.
///
/// # Safety
///
/// This function receives a raw pointer as parameter. Only when the argument is not a null pointer,
/// its content will be deallocated. Passing pointers that were not returned by
/// `GetInt32ArrayZeroToNine`, or releasing the same array twice, will lead to undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn FreeInt32Array(array: *mut i32) {
    buffer_destroy::<i32, SEQUENCE_LEN>(array);
}

/// Returns `1` if the ten elements at `array` are `0` through `9`, otherwise `0`. A null pointer
/// returns `0`.
///
/// # Safety
///
/// If `array` is not null, it must point to at least ten readable `int32` values.
#[no_mangle]
pub unsafe extern "C" fn IsInt32ArrayZeroToNine(array: *const i32) -> i32 {
    let array = slice_from_raw_parts(array, SEQUENCE_LEN);
    i32::from(is_zero_to_nine(array))
}

/// Writes the first `min(dest_len, 10)` elements of `[0, 1, ..., 9]` to `dest`. Elements past that
/// are left untouched. A null `dest` or a negative `dest_len` writes nothing.
///
/// # Safety
///
/// If `dest` is not null, it must be valid for writing `min(dest_len, 10)` `int32` values.
#[no_mangle]
pub unsafe extern "C" fn WriteToInt32Array(dest: *mut i32, dest_len: i32) {
    let dest = slice_from_raw_parts_mut(dest, clamp_len(dest_len, SEQUENCE_LEN));
    SequenceProvider::global().copy_into(dest);
}

/// Writes the first `min(len_a, 10)` elements of `[0, 1, ..., 9]` to `dest_a` and fills the
/// `len_b` elements of `dest_b` with `len_b - i`. A null destination or a negative length skips
/// the corresponding array.
///
/// # Safety
///
/// If `dest_a` is not null, it must be valid for writing `min(len_a, 10)` `int32` values. If
/// `dest_b` is not null, it must be valid for writing `len_b` `int32` values. The two regions must
/// not overlap.
#[no_mangle]
pub unsafe extern "C" fn WriteToInt32Arrays(
    dest_a: *mut i32,
    len_a: i32,
    len_b: i32,
    dest_b: *mut i32,
) {
    let dest_a = slice_from_raw_parts_mut(dest_a, clamp_len(len_a, SEQUENCE_LEN));
    let dest_b = slice_from_raw_parts_mut(dest_b, clamp_len(len_b, usize::MAX));

    SequenceProvider::global().copy_into_pair(dest_a, dest_b);
}
