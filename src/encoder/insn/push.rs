use crate::encoder::{Encoder, Reg16, Reg64};

/// Trait for [`push`](https://www.felixcloutier.com/x86/push) instruction kinds.
pub trait Push<T> {
    /// Emit a push instruction.
    fn push(&mut self, op1: T);
}

impl Push<Reg64> for Encoder {
    fn push(&mut self, op1: Reg64) {
        self.encode_o(0x50, op1);
    }
}

impl Push<Reg16> for Encoder {
    fn push(&mut self, op1: Reg16) {
        self.encode_o(0x50, op1);
    }
}
