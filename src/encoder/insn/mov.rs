//! `mov` instruction kinds.

use crate::encoder::{Encoder, Imm16, Imm32, Imm64, Imm8, Reg16, Reg32, Reg64, Reg8};

/// Trait for [`mov`](https://www.felixcloutier.com/x86/mov) instruction kinds.
pub trait Mov<T, U> {
    /// Emit a move instruction.
    fn mov(&mut self, dst: T, src: U);
}

// -- MOV : reg reg

impl Mov<Reg64, Reg64> for Encoder {
    fn mov(&mut self, dst: Reg64, src: Reg64) {
        self.encode_rr(0x89, dst, src);
    }
}

impl Mov<Reg32, Reg32> for Encoder {
    fn mov(&mut self, dst: Reg32, src: Reg32) {
        self.encode_rr(0x89, dst, src);
    }
}

impl Mov<Reg16, Reg16> for Encoder {
    fn mov(&mut self, dst: Reg16, src: Reg16) {
        self.encode_rr(0x89, dst, src);
    }
}

impl Mov<Reg8, Reg8> for Encoder {
    fn mov(&mut self, dst: Reg8, src: Reg8) {
        // 8-bit variant of 0x89 is 0x88.
        self.encode_rr(0x88, dst, src);
    }
}

// -- MOV : reg imm

impl Mov<Reg64, Imm64> for Encoder {
    fn mov(&mut self, dst: Reg64, src: Imm64) {
        self.encode_oi(0xb8, dst, src);
    }
}

impl Mov<Reg32, Imm32> for Encoder {
    fn mov(&mut self, dst: Reg32, src: Imm32) {
        self.encode_oi(0xb8, dst, src);
    }
}

impl Mov<Reg16, Imm16> for Encoder {
    fn mov(&mut self, dst: Reg16, src: Imm16) {
        self.encode_oi(0xb8, dst, src);
    }
}

impl Mov<Reg8, Imm8> for Encoder {
    fn mov(&mut self, dst: Reg8, src: Imm8) {
        self.encode_oi(0xb0, dst, src);
    }
}
