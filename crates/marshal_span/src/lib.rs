//! Span marshalling layouts
//!
//! Describes how a native signature that takes or returns spans is lowered to a plain C ABI
//! signature. Every span parameter is passed as a pointer to its first element, optionally
//! accompanied by a length parameter whose position and integer type are configured through
//! [`SpanMarshalling`]. A span return type is passed as a pointer to a fixed number of elements.

mod error;
mod length;
mod signature;
mod types;

pub use crate::{
    error::SpanMarshallingError,
    length::{LengthParameterDirection, LengthParameterType, LengthValue, SpanMarshalling},
    signature::{
        lower_signature, span_from_return, LoweredParameter, LoweredReturn, LoweredSignature,
        Parameter, ParameterKind, ReturnType, Signature,
    },
    types::NativeType,
};

/// The result of span marshalling operations.
pub type Result<T> = std::result::Result<T, SpanMarshallingError>;
