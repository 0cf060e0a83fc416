use crate::encoder::{Encoder, Reg16, Reg64};

/// Trait for [`pop`](https://www.felixcloutier.com/x86/pop) instruction kinds.
pub trait Pop<T> {
    /// Emit a pop instruction.
    fn pop(&mut self, op1: T);
}

impl Pop<Reg64> for Encoder {
    fn pop(&mut self, op1: Reg64) {
        self.encode_o(0x58, op1);
    }
}

impl Pop<Reg16> for Encoder {
    fn pop(&mut self, op1: Reg16) {
        self.encode_o(0x58, op1);
    }
}
