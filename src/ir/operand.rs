//! IR operands.

bitflags::bitflags! {
    /// Flags carried alongside an operand's [`OperandKind`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct OperandFlags: u8 {
        /// The operand's address, not its value, is taken.
        const ADDRESS = 0b01;
        /// The operand is dereferenced (load/store through a pointer).
        const DEREFERENCE = 0b10;
    }
}

/// An immediate value, tagged by its width/signedness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImmValue {
    U64(u64),
    I64(i64),
    U32(u32),
    I32(i32),
    U16(u16),
    I16(i16),
    U8(u8),
    I8(i8),
    F64(f64),
    F32(f32),
}

/// What an [`Operand`] refers to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperandKind {
    /// A literal value.
    Immediate(ImmValue),
    /// A reference into the containing function's variable table.
    Variable(usize),
    /// A reference into the containing function's argument table.
    Argument(usize),
    /// A reference into a constant pool; no bounds-checked table is modeled
    /// for this (see `DESIGN.md`), the id is opaque to the analyzer.
    Constant(usize),
    /// A reference to a callable function; likewise opaque.
    Function(usize),
    /// A `Goto`/`Compare` branch target, interpreted directly as an
    /// instruction index rather than a table reference.
    InstructionIndex(usize),
}

/// One operand of an [`Opcode`](super::Opcode).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand {
    pub kind: OperandKind,
    pub flags: OperandFlags,
}

impl Operand {
    pub const fn new(kind: OperandKind) -> Operand {
        Operand {
            kind,
            flags: OperandFlags::empty(),
        }
    }

    pub const fn with_flags(kind: OperandKind, flags: OperandFlags) -> Operand {
        Operand { kind, flags }
    }

    pub const fn immediate(value: ImmValue) -> Operand {
        Operand::new(OperandKind::Immediate(value))
    }

    pub const fn variable(id: usize) -> Operand {
        Operand::new(OperandKind::Variable(id))
    }

    pub const fn argument(id: usize) -> Operand {
        Operand::new(OperandKind::Argument(id))
    }

    pub const fn instruction_index(target: usize) -> Operand {
        Operand::new(OperandKind::InstructionIndex(target))
    }

    /// An empty/unused operand slot (e.g. `NOP`'s three operands).
    pub const fn none() -> Operand {
        // Index 0 into a table that's never consulted for an unused slot;
        // callers never read `variable_id`/`instruction_index_value` on an
        // opcode position that doesn't use this slot.
        Operand::new(OperandKind::Constant(0))
    }

    pub fn variable_id(&self) -> Option<usize> {
        match self.kind {
            OperandKind::Variable(id) => Some(id),
            _ => None,
        }
    }

    pub fn argument_id(&self) -> Option<usize> {
        match self.kind {
            OperandKind::Argument(id) => Some(id),
            _ => None,
        }
    }

    pub fn instruction_index_value(&self) -> Option<usize> {
        match self.kind {
            OperandKind::InstructionIndex(idx) => Some(idx),
            _ => None,
        }
    }

    /// Whether this operand's *address*, not its value, is taken.
    pub fn address_taken(&self) -> bool {
        self.flags.contains(OperandFlags::ADDRESS)
    }
}
