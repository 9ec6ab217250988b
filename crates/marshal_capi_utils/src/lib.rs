//! Common functionality between C api crates.
//!
//! Everything that crosses the C ABI as a pointer (plus an optional length) is turned into a
//! bounded slice here before any logic touches it.

pub mod buffer;
pub mod view;

pub use buffer::{buffer_destroy, buffer_into_raw};
pub use view::{clamp_len, slice_from_raw_parts, slice_from_raw_parts_mut};
