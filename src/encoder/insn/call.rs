use crate::encoder::{Encoder, Reg64};

/// Trait for indirect [`call`](https://www.felixcloutier.com/x86/call) through a register.
///
/// Direct calls to a [`Label`](crate::encoder::LabelId) go through
/// [`Encoder::emit_jmp`] (with `is_call = true`) instead.
pub trait Call<T> {
    /// Emit an indirect call instruction.
    fn call(&mut self, op1: T);
}

impl Call<Reg64> for Encoder {
    fn call(&mut self, op1: Reg64) {
        self.encode_r(0xff, 0x2, op1);
    }
}
