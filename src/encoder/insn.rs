//! Trait definitions of the supported instruction mnemonics.
//!
//! Register-register arithmetic/logic/compare/move share one opcode family
//! (see [`arith`]) and are generated by a macro, since the nine mnemonics
//! differ only in their base opcode byte. Every other mnemonic gets its own
//! small file, one trait per mnemonic.

mod arith;
mod call;
mod jmp;
mod mov;
mod pop;
mod push;
mod unary;

pub use arith::{Adc, Add, And, Cmp, Or, Sbb, Sub, Xor};
pub use call::Call;
pub use jmp::Jmp;
pub use mov::Mov;
pub use pop::Pop;
pub use push::Push;
pub use unary::{Div, Idiv, Imul, Mul};
