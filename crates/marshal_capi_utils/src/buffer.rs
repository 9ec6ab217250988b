//! Moves fixed-size buffers across the C ABI.

/// Hands ownership of `buffer` to the other side of the boundary and returns a pointer to its
/// first element.
///
/// The buffer must be returned through [`buffer_destroy`] with the same `T` and `N`, it must never
/// be released by a foreign allocator.
pub fn buffer_into_raw<T, const N: usize>(buffer: Box<[T; N]>) -> *mut T {
    Box::into_raw(buffer).cast()
}

/// Reclaims and drops a buffer that was handed out by [`buffer_into_raw`].
///
/// # Safety
///
/// This function receives a raw pointer as parameter. Only when the argument is not a null pointer,
/// its content will be deallocated. The pointer must originate from `buffer_into_raw::<T, N>` and
/// must not be used afterwards. Only call this function once for every pointer.
pub unsafe fn buffer_destroy<T, const N: usize>(ptr: *mut T) {
    if !ptr.is_null() {
        let _buffer = Box::from_raw(ptr.cast::<[T; N]>());
    }
}
