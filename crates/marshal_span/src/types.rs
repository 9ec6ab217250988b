use std::fmt;

/// A type as it appears in a native signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NativeType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// A value type with the given field types.
    Struct { name: String, fields: Vec<NativeType> },
    /// A reference to a managed object.
    Reference(String),
    /// An unresolved generic type argument.
    Generic(String),
}

impl NativeType {
    /// Constructs a struct type.
    pub fn structure(name: impl Into<String>, fields: Vec<NativeType>) -> Self {
        NativeType::Struct {
            name: name.into(),
            fields,
        }
    }

    /// Returns true if this type is a reference or a struct that (transitively) contains one.
    /// Such types don't have the same representation on both sides of the boundary.
    pub fn is_or_contains_references(&self) -> bool {
        match self {
            NativeType::Reference(_) => true,
            NativeType::Struct { fields, .. } => fields.iter().any(Self::is_or_contains_references),
            _ => false,
        }
    }

    /// Returns true if this type is an unresolved generic.
    pub fn is_generic(&self) -> bool {
        matches!(self, NativeType::Generic(_))
    }

    /// Returns the size in bytes of primitive types, or `None` for other types.
    pub fn primitive_size(&self) -> Option<usize> {
        let size = match self {
            NativeType::Bool | NativeType::I8 | NativeType::U8 => 1,
            NativeType::I16 | NativeType::U16 => 2,
            NativeType::I32 | NativeType::U32 | NativeType::F32 => 4,
            NativeType::I64 | NativeType::U64 | NativeType::F64 => 8,
            NativeType::Struct { .. } | NativeType::Reference(_) | NativeType::Generic(_) => {
                return None
            }
        };
        Some(size)
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeType::Bool => write!(f, "bool"),
            NativeType::I8 => write!(f, "i8"),
            NativeType::I16 => write!(f, "i16"),
            NativeType::I32 => write!(f, "i32"),
            NativeType::I64 => write!(f, "i64"),
            NativeType::U8 => write!(f, "u8"),
            NativeType::U16 => write!(f, "u16"),
            NativeType::U32 => write!(f, "u32"),
            NativeType::U64 => write!(f, "u64"),
            NativeType::F32 => write!(f, "f32"),
            NativeType::F64 => write!(f, "f64"),
            NativeType::Struct { name, .. } | NativeType::Generic(name) => write!(f, "{name}"),
            NativeType::Reference(name) => write!(f, "ref {name}"),
        }
    }
}
