use crate::encoder::{Encoder, Reg64};

/// Trait for indirect [`jmp`](https://www.felixcloutier.com/x86/jmp) through a register.
///
/// Direct jumps to a [`Label`](crate::encoder::LabelId) go through
/// [`Encoder::emit_jmp`] instead, since they need a relocation rather than
/// an operand-width dispatch.
pub trait Jmp<T> {
    /// Emit an indirect jump instruction.
    fn jmp(&mut self, op1: T);
}

impl Jmp<Reg64> for Encoder {
    fn jmp(&mut self, op1: Reg64) {
        self.encode_r(0xff, 0x4, op1);
    }
}
