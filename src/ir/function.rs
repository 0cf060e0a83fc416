//! IR functions: the unit the analyzer consumes.

use super::error::{FunctionError, OperandSlot};
use super::opcode::Opcode;
use super::types::TypeInfo;

/// A local variable slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable {
    pub type_info: TypeInfo,
}

impl Variable {
    pub const fn new(type_info: TypeInfo) -> Variable {
        Variable { type_info }
    }
}

/// A three-address-IR function: an ordered opcode sequence plus its
/// signature and variable table.
///
/// Constructed only through [`Function::new`], which rejects malformed
/// input (out-of-range jump targets and operand references) up front so
/// [`analyse`](super::analyse) can trust its input is well-formed.
#[derive(Debug, Clone)]
pub struct Function {
    pub id: u32,
    pub opcodes: Vec<Opcode>,
    pub arguments: Vec<TypeInfo>,
    pub return_type: TypeInfo,
    pub variables: Vec<Variable>,
}

impl Function {
    /// Build a function, validating every jump target and every
    /// variable/argument operand reference.
    ///
    /// Constant and function-table operand references aren't validated:
    /// `Function` carries no constant pool or callable-function table to
    /// check them against, so those operand kinds are opaque to this
    /// bounds check (see `DESIGN.md`).
    pub fn new(
        id: u32,
        opcodes: Vec<Opcode>,
        arguments: Vec<TypeInfo>,
        return_type: TypeInfo,
        variables: Vec<Variable>,
    ) -> Result<Function, FunctionError> {
        for (i, op) in opcodes.iter().enumerate() {
            if op.kind.is_goto() {
                if let Some(target) = op.target.instruction_index_value() {
                    if target >= opcodes.len() {
                        return Err(FunctionError::JumpTargetOutOfRange { opcode: i, target });
                    }
                }
            }

            let slots = [
                (OperandSlot::Target, &op.target),
                (OperandSlot::Primary1, &op.primary_1),
                (OperandSlot::Primary2, &op.primary_2),
            ];
            for (slot, operand) in slots {
                if let Some(idx) = operand.variable_id() {
                    if idx >= variables.len() {
                        return Err(FunctionError::OperandRefOutOfRange {
                            opcode: i,
                            slot,
                            index: idx,
                        });
                    }
                }
                if let Some(idx) = operand.argument_id() {
                    if idx >= arguments.len() {
                        return Err(FunctionError::OperandRefOutOfRange {
                            opcode: i,
                            slot,
                            index: idx,
                        });
                    }
                }
            }
        }

        log::debug!(
            "Function::new id={id} opcodes={} variables={}",
            opcodes.len(),
            variables.len()
        );

        Ok(Function {
            id,
            opcodes,
            arguments,
            return_type,
            variables,
        })
    }
}
