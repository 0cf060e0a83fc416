/// Rejection of a malformed [`Function`](super::Function) at construction.
///
/// The analyzer itself trusts its input is well-formed; this is the
/// function-construction boundary that does the rejecting instead, so
/// [`analyse`](super::analyse) never has to handle an out-of-range
/// reference.
#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum FunctionError {
    /// A `Goto`-family opcode's target does not name an instruction index
    /// within the function.
    #[error("opcode {opcode} jumps to out-of-range instruction index {target}")]
    JumpTargetOutOfRange { opcode: usize, target: usize },

    /// An operand refers to a variable or argument slot outside the
    /// function's variable/argument table.
    #[error("opcode {opcode} operand {slot:?} refers to out-of-range index {index}")]
    OperandRefOutOfRange {
        opcode: usize,
        slot: OperandSlot,
        index: usize,
    },
}

/// Which of an opcode's three operand slots a [`FunctionError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSlot {
    Target,
    Primary1,
    Primary2,
}
