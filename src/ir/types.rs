//! Value types carried by IR operands and function signatures.

/// The scalar/aggregate type kinds an IR value can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    #[default]
    Void,
    U64,
    I64,
    U32,
    I32,
    U16,
    I16,
    U8,
    I8,
    F64,
    F32,
    Struct,
}

/// Type information attached to a variable, argument, or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeInfo {
    pub ty: ValueType,
    /// Element type for aggregates; unused outside `ty == Struct`.
    pub sub_type: ValueType,
    /// Size in bytes; unused outside `ty == Struct`.
    pub struct_size: usize,
}

impl TypeInfo {
    pub const fn scalar(ty: ValueType) -> TypeInfo {
        TypeInfo {
            ty,
            sub_type: ValueType::Void,
            struct_size: 0,
        }
    }

    pub const fn of_struct(sub_type: ValueType, struct_size: usize) -> TypeInfo {
        TypeInfo {
            ty: ValueType::Struct,
            sub_type,
            struct_size,
        }
    }
}
