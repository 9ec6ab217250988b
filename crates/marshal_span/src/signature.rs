//! Lowering of span-typed signatures to their C ABI form.

use std::{fmt, mem};

use itertools::Itertools;
use log::debug;

use crate::{
    LengthParameterType, LengthValue, NativeType, Result, SpanMarshalling, SpanMarshallingError,
};

/// The kind of a parameter in a signature before lowering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterKind {
    /// A parameter passed as is.
    Value(NativeType),
    /// A contiguous view over `element`s, passed as a pointer. If `marshalling` is set, a length
    /// parameter is inserted as well.
    Span {
        element: NativeType,
        mutable: bool,
        marshalling: Option<SpanMarshalling>,
    },
}

/// A named parameter of a [`Signature`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
}

impl Parameter {
    /// Constructs a parameter that is passed as is.
    pub fn value(name: impl Into<String>, ty: NativeType) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Value(ty),
        }
    }

    /// Constructs a read-only span parameter that is passed as a bare pointer. Use
    /// [`Parameter::with_marshalling`] to pass its length as well.
    pub fn span(name: impl Into<String>, element: NativeType) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Span {
                element,
                mutable: false,
                marshalling: None,
            },
        }
    }

    /// Constructs a writable span parameter that is passed as a bare pointer. Use
    /// [`Parameter::with_marshalling`] to pass its length as well.
    pub fn span_mut(name: impl Into<String>, element: NativeType) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Span {
                element,
                mutable: true,
                marshalling: None,
            },
        }
    }

    /// Replaces the marshalling of a span parameter. `None` passes the span without a length.
    /// Has no effect on value parameters.
    pub fn with_marshalling(mut self, marshalling: Option<SpanMarshalling>) -> Self {
        if let ParameterKind::Span {
            marshalling: current,
            ..
        } = &mut self.kind
        {
            *current = marshalling;
        }
        self
    }
}

/// The return type of a [`Signature`] before lowering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReturnType {
    #[default]
    Void,
    Value(NativeType),
    /// A span of a fixed number of elements, returned as a pointer to the first element.
    Span {
        element: NativeType,
        collection_length: Option<usize>,
    },
}

/// A function signature that may contain spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub return_type: ReturnType,
    pub parameters: Vec<Parameter>,
}

impl Signature {
    /// Constructs a signature without parameters that returns nothing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: ReturnType::Void,
            parameters: Vec::new(),
        }
    }

    /// Sets the return type.
    pub fn returns(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }

    /// Appends a parameter.
    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A parameter of a [`LoweredSignature`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoweredParameter {
    Value {
        name: String,
        ty: NativeType,
    },
    /// The pointer of the span parameter at `span_index` in the original signature.
    Pointer {
        name: String,
        element: NativeType,
        mutable: bool,
        span_index: usize,
    },
    /// The length of the span parameter at `span_index` in the original signature.
    Length {
        name: String,
        length_type: LengthParameterType,
        span_index: usize,
    },
}

impl LoweredParameter {
    /// Returns the name of the parameter.
    pub fn name(&self) -> &str {
        match self {
            LoweredParameter::Value { name, .. }
            | LoweredParameter::Pointer { name, .. }
            | LoweredParameter::Length { name, .. } => name,
        }
    }
}

impl fmt::Display for LoweredParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoweredParameter::Value { name, ty } => write!(f, "{ty} {name}"),
            LoweredParameter::Pointer {
                name,
                element,
                mutable,
                ..
            } => {
                let qualifier = if *mutable { "mut" } else { "const" };
                write!(f, "*{qualifier} {element} {name}")
            }
            LoweredParameter::Length {
                name, length_type, ..
            } => write!(f, "{length_type} {name}"),
        }
    }
}

/// The return type of a [`LoweredSignature`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoweredReturn {
    Void,
    Value(NativeType),
    /// A pointer to `collection_length` consecutive `element`s.
    Pointer {
        element: NativeType,
        collection_length: usize,
    },
}

impl fmt::Display for LoweredReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoweredReturn::Void => write!(f, "void"),
            LoweredReturn::Value(ty) => write!(f, "{ty}"),
            LoweredReturn::Pointer {
                element,
                collection_length,
            } => write!(f, "*mut [{element}; {collection_length}]"),
        }
    }
}

/// A signature in which all spans have been replaced by pointers and lengths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoweredSignature {
    pub name: String,
    pub return_type: LoweredReturn,
    pub parameters: Vec<LoweredParameter>,
}

impl LoweredSignature {
    /// Encodes the length arguments of a call, in the order in which they appear in the lowered
    /// parameter list.
    ///
    /// `lengths` holds the length of every parameter of the original signature, indexed like
    /// [`Signature::parameters`]. Entries of non-span parameters are ignored.
    pub fn length_arguments(&self, lengths: &[usize]) -> Result<Vec<LengthValue>> {
        self.parameters
            .iter()
            .filter_map(|parameter| match parameter {
                LoweredParameter::Length {
                    name,
                    length_type,
                    span_index,
                } => Some((name, *length_type, *span_index)),
                _ => None,
            })
            .map(|(name, length_type, span_index)| {
                let length = lengths.get(span_index).ok_or_else(|| {
                    SpanMarshallingError::MissingLength {
                        parameter: self.span_name(span_index).unwrap_or(name).to_owned(),
                    }
                })?;
                length_type.encode(*length)
            })
            .collect()
    }

    /// Returns the name of the pointer that belongs to the span parameter at `span_index`.
    fn span_name(&self, span_index: usize) -> Option<&str> {
        self.parameters.iter().find_map(|parameter| match parameter {
            LoweredParameter::Pointer {
                name,
                span_index: index,
                ..
            } if *index == span_index => Some(name.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for LoweredSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) -> {}",
            self.name,
            self.parameters.iter().join(", "),
            self.return_type
        )
    }
}

/// Lowers `signature` to its C ABI form.
///
/// Every span parameter becomes a pointer to its elements. If the span has a
/// [`SpanMarshalling`], a length parameter named `<name>Length` is inserted relative to the
/// position the span occupies at that moment, taking previously inserted lengths into account.
/// A span return type becomes a pointer with a fixed collection length.
pub fn lower_signature(signature: &Signature) -> Result<LoweredSignature> {
    let return_type = lower_return_type(signature)?;

    let mut parameters: Vec<LoweredParameter> = signature
        .parameters
        .iter()
        .enumerate()
        .map(|(span_index, parameter)| match &parameter.kind {
            ParameterKind::Value(ty) => LoweredParameter::Value {
                name: parameter.name.clone(),
                ty: ty.clone(),
            },
            ParameterKind::Span {
                element, mutable, ..
            } => LoweredParameter::Pointer {
                name: parameter.name.clone(),
                element: element.clone(),
                mutable: *mutable,
                span_index,
            },
        })
        .collect();

    // Current position of every original parameter in the lowered parameter list
    let mut indices: Vec<usize> = (0..signature.parameters.len()).collect();

    for (span_index, parameter) in signature.parameters.iter().enumerate() {
        let ParameterKind::Span {
            element,
            marshalling,
            ..
        } = &parameter.kind
        else {
            continue;
        };

        if element.is_generic() {
            return Err(SpanMarshallingError::GenericElement {
                parameter: parameter.name.clone(),
                element: element.clone(),
            });
        }

        if element.is_or_contains_references() {
            return Err(SpanMarshallingError::NonBlittableElement {
                context: parameter.name.clone(),
                element: element.clone(),
            });
        }

        let Some(marshalling) = marshalling else {
            continue;
        };

        let index = indices[span_index];
        let position = marshalling.insert_position(index).ok_or_else(|| {
            SpanMarshallingError::InsertPositionNegative {
                parameter: parameter.name.clone(),
                index,
                offset: marshalling.offset,
            }
        })?;

        if position > parameters.len() {
            return Err(SpanMarshallingError::InsertPositionOutOfRange {
                parameter: parameter.name.clone(),
                position,
                count: parameters.len(),
            });
        }

        for slot in indices.iter_mut().filter(|slot| **slot >= position) {
            *slot += 1;
        }

        parameters.insert(
            position,
            LoweredParameter::Length {
                name: format!("{}Length", parameter.name),
                length_type: marshalling.length_type,
                span_index,
            },
        );
    }

    let lowered = LoweredSignature {
        name: signature.name.clone(),
        return_type,
        parameters,
    };
    debug!("lowered `{}` to `{lowered}`", signature.name);
    Ok(lowered)
}

fn lower_return_type(signature: &Signature) -> Result<LoweredReturn> {
    match &signature.return_type {
        ReturnType::Void => Ok(LoweredReturn::Void),
        ReturnType::Value(ty) => Ok(LoweredReturn::Value(ty.clone())),
        ReturnType::Span {
            element,
            collection_length,
        } => {
            if element.is_or_contains_references() {
                return Err(SpanMarshallingError::NonBlittableElement {
                    context: format!("{} return", signature.name),
                    element: element.clone(),
                });
            }

            let collection_length =
                collection_length.ok_or_else(|| SpanMarshallingError::MissingCollectionLength {
                    function: signature.name.clone(),
                })?;

            Ok(LoweredReturn::Pointer {
                element: element.clone(),
                collection_length,
            })
        }
    }
}

/// Views the pointer returned by a call to a lowered signature as a slice of its declared
/// collection length.
///
/// # Safety
///
/// `ptr` must point to at least `collection_length` initialized elements of type `T` whose content
/// doesnt change during the lifetime `'a`.
pub unsafe fn span_from_return<'a, T>(
    ptr: *const T,
    return_type: &LoweredReturn,
) -> Result<&'a [T]> {
    let LoweredReturn::Pointer {
        element,
        collection_length,
    } = return_type
    else {
        return Err(SpanMarshallingError::NotASpanReturn);
    };

    if let Some(expected) = element.primitive_size() {
        let actual = mem::size_of::<T>();
        if expected != actual {
            return Err(SpanMarshallingError::ElementSizeMismatch {
                element: element.clone(),
                expected,
                actual,
            });
        }
    }

    if ptr.is_null() {
        return Err(SpanMarshallingError::NullSpanReturn);
    }

    Ok(capi_utils::slice_from_raw_parts(ptr, *collection_length))
}
