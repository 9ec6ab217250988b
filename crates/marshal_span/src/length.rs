//! Length parameters that accompany lowered span parameters.

use std::fmt;

use crate::{NativeType, Result, SpanMarshallingError};

/// Where the length parameter of a span is placed, relative to the span itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthParameterDirection {
    /// The length parameter is placed before the span.
    Before,
    /// The length parameter is placed after the span.
    #[default]
    After,
}

/// The integer type used to pass the length of a span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthParameterType {
    Byte,
    SByte,
    Short,
    UShort,
    #[default]
    Int,
    UInt,
    Long,
    ULong,
}

impl LengthParameterType {
    /// Returns the native type that represents this length type.
    pub fn native_type(self) -> NativeType {
        match self {
            LengthParameterType::Byte => NativeType::U8,
            LengthParameterType::SByte => NativeType::I8,
            LengthParameterType::Short => NativeType::I16,
            LengthParameterType::UShort => NativeType::U16,
            LengthParameterType::Int => NativeType::I32,
            LengthParameterType::UInt => NativeType::U32,
            LengthParameterType::Long => NativeType::I64,
            LengthParameterType::ULong => NativeType::U64,
        }
    }

    /// Converts the length of a span into a value of this type.
    pub fn encode(self, length: usize) -> Result<LengthValue> {
        let value = match self {
            LengthParameterType::Byte => u8::try_from(length).ok().map(LengthValue::Byte),
            LengthParameterType::SByte => i8::try_from(length).ok().map(LengthValue::SByte),
            LengthParameterType::Short => i16::try_from(length).ok().map(LengthValue::Short),
            LengthParameterType::UShort => u16::try_from(length).ok().map(LengthValue::UShort),
            LengthParameterType::Int => i32::try_from(length).ok().map(LengthValue::Int),
            LengthParameterType::UInt => u32::try_from(length).ok().map(LengthValue::UInt),
            LengthParameterType::Long => i64::try_from(length).ok().map(LengthValue::Long),
            LengthParameterType::ULong => u64::try_from(length).ok().map(LengthValue::ULong),
        };
        value.ok_or(SpanMarshallingError::LengthOverflow {
            length,
            length_type: self,
        })
    }
}

impl fmt::Display for LengthParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.native_type(), f)
    }
}

/// A span length, encoded as one of the [`LengthParameterType`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthValue {
    Byte(u8),
    SByte(i8),
    Short(i16),
    UShort(u16),
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
}

impl LengthValue {
    /// Returns the type of this length.
    pub fn length_type(self) -> LengthParameterType {
        match self {
            LengthValue::Byte(_) => LengthParameterType::Byte,
            LengthValue::SByte(_) => LengthParameterType::SByte,
            LengthValue::Short(_) => LengthParameterType::Short,
            LengthValue::UShort(_) => LengthParameterType::UShort,
            LengthValue::Int(_) => LengthParameterType::Int,
            LengthValue::UInt(_) => LengthParameterType::UInt,
            LengthValue::Long(_) => LengthParameterType::Long,
            LengthValue::ULong(_) => LengthParameterType::ULong,
        }
    }

    /// Converts a length that was received through the C ABI into a `usize`.
    pub fn as_usize(self) -> Result<usize> {
        let value = match self {
            LengthValue::Byte(v) => i128::from(v),
            LengthValue::SByte(v) => i128::from(v),
            LengthValue::Short(v) => i128::from(v),
            LengthValue::UShort(v) => i128::from(v),
            LengthValue::Int(v) => i128::from(v),
            LengthValue::UInt(v) => i128::from(v),
            LengthValue::Long(v) => i128::from(v),
            LengthValue::ULong(v) => i128::from(v),
        };

        if value < 0 {
            return Err(SpanMarshallingError::NegativeLength(value));
        }
        usize::try_from(value).map_err(|_err| SpanMarshallingError::LengthOutOfRange(value))
    }
}

/// Describes how the length of a span parameter is passed.
///
/// The default places an `Int` length directly after the span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SpanMarshalling {
    /// Whether the length is placed before or after the span.
    pub direction: LengthParameterDirection,
    /// The number of parameters between the span and its length, in `direction`.
    pub offset: usize,
    /// The integer type of the length.
    pub length_type: LengthParameterType,
}

impl SpanMarshalling {
    /// Places the length `offset` parameters before the span.
    pub fn before(offset: usize) -> Self {
        Self {
            direction: LengthParameterDirection::Before,
            offset,
            ..Self::default()
        }
    }

    /// Places the length `offset` parameters after the span.
    pub fn after(offset: usize) -> Self {
        Self {
            direction: LengthParameterDirection::After,
            offset,
            ..Self::default()
        }
    }

    /// Sets the integer type of the length.
    pub fn with_length_type(mut self, length_type: LengthParameterType) -> Self {
        self.length_type = length_type;
        self
    }

    /// Returns the index at which the length parameter is inserted for a span that currently lives
    /// at `index`, or `None` if it would be negative. Positions past `usize::MAX` saturate, they
    /// are out of range for any parameter list.
    pub(crate) fn insert_position(&self, index: usize) -> Option<usize> {
        match self.direction {
            LengthParameterDirection::After => {
                Some(index.saturating_add(self.offset).saturating_add(1))
            }
            LengthParameterDirection::Before => index.checked_sub(self.offset),
        }
    }
}
