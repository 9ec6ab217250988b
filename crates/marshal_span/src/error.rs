use thiserror::Error;

use crate::{LengthParameterType, NativeType};

/// An error that occurs while lowering a signature or converting span lengths.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SpanMarshallingError {
    #[error("span parameter `{parameter}` has a generic element type `{element}`")]
    GenericElement { parameter: String, element: NativeType },
    #[error(
        "span `{context}` has element type `{element}` which is or contains a reference and cannot be marshalled"
    )]
    NonBlittableElement { context: String, element: NativeType },
    #[error("return type of `{function}` is a span but no native collection length was specified")]
    MissingCollectionLength { function: String },
    #[error("insert position of the length of `{parameter}` must not be negative (index {index}, offset {offset})")]
    InsertPositionNegative {
        parameter: String,
        index: usize,
        offset: usize,
    },
    #[error("insert position {position} of the length of `{parameter}` must not be bigger than the parameter count {count}")]
    InsertPositionOutOfRange {
        parameter: String,
        position: usize,
        count: usize,
    },
    #[error("length {length} does not fit in a length parameter of type `{length_type}`")]
    LengthOverflow {
        length: usize,
        length_type: LengthParameterType,
    },
    #[error("received a negative length: {0}")]
    NegativeLength(i128),
    #[error("received a length that does not fit in memory: {0}")]
    LengthOutOfRange(i128),
    #[error("no length was provided for span parameter `{parameter}`")]
    MissingLength { parameter: String },
    #[error("the return type is not a span")]
    NotASpanReturn,
    #[error("received a null pointer for a span return")]
    NullSpanReturn,
    #[error("span element `{element}` is {expected} bytes but was read as {actual} bytes")]
    ElementSizeMismatch {
        element: NativeType,
        expected: usize,
        actual: usize,
    },
}
