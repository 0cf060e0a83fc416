//! Single-operand arithmetic: `MUL`/`IMUL`/`DIV`/`IDIV`, `F7 /{4,5,6,7}`.
//!
//! All four share the `REX.W F7` skeleton and only differ in the `ModR/M`
//! opcode-extension digit, so one macro generates the four traits the same
//! way [`super::arith`] generates the register-register group.

use crate::encoder::{Encoder, Reg64};

macro_rules! unary_group {
    ($(#[$doc:meta])* $trait:ident, $method:ident, $ext:expr) => {
        $(#[$doc])*
        pub trait $trait<T> {
            #[doc = concat!("Emit a `", stringify!($method), "`.")]
            fn $method(&mut self, op1: T);
        }

        impl $trait<Reg64> for Encoder {
            fn $method(&mut self, op1: Reg64) {
                self.encode_r(0xf7, $ext, op1);
            }
        }
    };
}

unary_group!(
    /// Trait for [`mul`](https://www.felixcloutier.com/x86/mul) instruction kinds.
    ///
    /// Unsigned multiply of `rax` by the operand; result in `rdx:rax`.
    Mul, mul, 0x4
);
unary_group!(
    /// Trait for [`imul`](https://www.felixcloutier.com/x86/imul) instruction kinds.
    ///
    /// Signed multiply of `rax` by the operand; result in `rdx:rax`.
    Imul, imul, 0x5
);
unary_group!(
    /// Trait for [`div`](https://www.felixcloutier.com/x86/div) instruction kinds.
    ///
    /// Unsigned divide of `rdx:rax` by the operand; quotient in `rax`, remainder in `rdx`.
    Div, div, 0x6
);
unary_group!(
    /// Trait for [`idiv`](https://www.felixcloutier.com/x86/idiv) instruction kinds.
    ///
    /// Signed divide of `rdx:rax` by the operand; quotient in `rax`, remainder in `rdx`.
    Idiv, idiv, 0x7
);
