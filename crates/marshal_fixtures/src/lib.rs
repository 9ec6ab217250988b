//! Native fixtures for exercising array marshalling through the C ABI.
//!
//! The library exposes a canonical `int32` sequence, `[0, 1, ..., 9]`, and a handful of exported
//! functions that allocate it, validate it, or write it into caller provided buffers. A foreign
//! test harness loads the `cdylib` and checks that its span marshalling round-trips these arrays.

mod array;
mod sequence;

pub use crate::{
    array::{
        FreeInt32Array, GetInt32ArrayZeroToNine, IsInt32ArrayZeroToNine, WriteToInt32Array,
        WriteToInt32Arrays,
    },
    sequence::{fill_countdown, is_zero_to_nine, SequenceProvider, SEQUENCE_LEN},
};

#[cfg(test)]
mod tests;
