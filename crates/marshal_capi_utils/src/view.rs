//! Bounded views over pointer/length pairs received through the C ABI.

use std::slice;

/// Converts a length received through the C ABI into a `usize` that does not exceed `max`.
/// Negative lengths clamp to zero.
pub fn clamp_len(len: i32, max: usize) -> usize {
    usize::try_from(len).map_or(0, |len| len.min(max))
}

/// Constructs a shared slice of `len` elements starting at `ptr`. A null pointer results in an
/// empty slice.
///
/// # Safety
///
/// If `ptr` is not null, it must point to at least `len` initialized elements whose content doesnt
/// change during the lifetime `'a`.
pub unsafe fn slice_from_raw_parts<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if ptr.is_null() || len == 0 {
        Default::default()
    } else {
        slice::from_raw_parts(ptr, len)
    }
}

/// Constructs a mutable slice of `len` elements starting at `ptr`. A null pointer results in an
/// empty slice.
///
/// # Safety
///
/// If `ptr` is not null, it must point to at least `len` elements that are valid for writes and
/// that are not accessed through any other pointer during the lifetime `'a`.
pub unsafe fn slice_from_raw_parts_mut<'a, T>(ptr: *mut T, len: usize) -> &'a mut [T] {
    if ptr.is_null() || len == 0 {
        Default::default()
    } else {
        slice::from_raw_parts_mut(ptr, len)
    }
}
