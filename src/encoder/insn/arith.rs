//! Register-register arithmetic/logic/compare/move group.
//!
//! All nine mnemonics in this family (`ADD`, `OR`, `ADC`, `SBB`, `AND`,
//! `SUB`, `XOR`, `CMP` here, `MOV` in [`super::mov`]) share one encoding
//! skeleton and differ only in their base opcode byte, with the 8-bit
//! variant always using `opcode - 1`. That's purely mechanical, so one
//! macro generates the trait and every register-width impl for each
//! mnemonic below instead of nine near-identical hand-written files.

use crate::encoder::{Encoder, Reg16, Reg32, Reg64, Reg8};

macro_rules! arith_group {
    ($(#[$doc:meta])* $trait:ident, $method:ident, $opc:expr) => {
        $(#[$doc])*
        pub trait $trait<T, U> {
            #[doc = concat!("Emit a register-register `", stringify!($method), "`.")]
            fn $method(&mut self, dst: T, src: U);
        }

        impl $trait<Reg64, Reg64> for Encoder {
            fn $method(&mut self, dst: Reg64, src: Reg64) {
                self.encode_rr($opc, dst, src);
            }
        }

        impl $trait<Reg32, Reg32> for Encoder {
            fn $method(&mut self, dst: Reg32, src: Reg32) {
                self.encode_rr($opc, dst, src);
            }
        }

        impl $trait<Reg16, Reg16> for Encoder {
            fn $method(&mut self, dst: Reg16, src: Reg16) {
                self.encode_rr($opc, dst, src);
            }
        }

        impl $trait<Reg8, Reg8> for Encoder {
            fn $method(&mut self, dst: Reg8, src: Reg8) {
                // 8-bit variant of this opcode family is always `opcode - 1`.
                self.encode_rr($opc - 1, dst, src);
            }
        }
    };
}

arith_group!(
    /// Trait for [`add`](https://www.felixcloutier.com/x86/add) instruction kinds.
    Add, add, 0x01
);
arith_group!(
    /// Trait for [`or`](https://www.felixcloutier.com/x86/or) instruction kinds.
    Or, or, 0x09
);
arith_group!(
    /// Trait for [`adc`](https://www.felixcloutier.com/x86/adc) instruction kinds.
    Adc, adc, 0x11
);
arith_group!(
    /// Trait for [`sbb`](https://www.felixcloutier.com/x86/sbb) instruction kinds.
    Sbb, sbb, 0x19
);
arith_group!(
    /// Trait for [`and`](https://www.felixcloutier.com/x86/and) instruction kinds.
    And, and, 0x21
);
arith_group!(
    /// Trait for [`sub`](https://www.felixcloutier.com/x86/sub) instruction kinds.
    Sub, sub, 0x29
);
arith_group!(
    /// Trait for [`xor`](https://www.felixcloutier.com/x86/xor) instruction kinds.
    Xor, xor, 0x31
);
arith_group!(
    /// Trait for [`cmp`](https://www.felixcloutier.com/x86/cmp) instruction kinds.
    ///
    /// Computes `dst - src` and sets the status flags, discarding the result.
    Cmp, cmp, 0x39
);
