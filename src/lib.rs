//! A minimal x86-64 machine-code generation toolkit, made of two
//! independent leaf subsystems:
//!
//! - [`encoder`]: an in-memory assembler with labels, relocations, and a
//!   link step, ready to be copied into executable memory and called.
//! - [`ir`]: a control-flow-sensitive liveness analyzer over a simple
//!   three-address intermediate representation.
//!
//! The following builds and JITs a factorial function, using the
//! [`encoder`] to emit the code and [`Runtime`] to run it.
//!
//! ```rust
//! use nanojit_core::encoder::insn::*;
//! use nanojit_core::encoder::{ConditionCode, Encoder, Imm64, Reg64};
//! use nanojit_core::Runtime;
//!
//! let mut asm = Encoder::new();
//!
//! let n = Reg64::rdi;
//! let acc = Reg64::rax;
//! let one = Reg64::r8;
//!
//! asm.mov(acc, Imm64::from(1u64));
//! asm.mov(one, acc);
//!
//! let start = asm.add_label();
//! asm.mov(Reg64::rdx, Imm64::from(0u64));
//! asm.cmp(n, Reg64::rdx);
//! let end = asm.add_label();
//! asm.emit_jmp_cond(ConditionCode::LessOrEqual, end);
//! asm.imul(n);
//! asm.sub(n, one);
//! asm.emit_jmp(false, start);
//! asm.move_label(end);
//! asm.ret();
//!
//! let mut rt = Runtime::new();
//! asm.link_to(unsafe { rt.as_mut_slice() }).unwrap();
//! unsafe { rt.make_executable() };
//! let factorial = unsafe { rt.as_fn::<extern "C" fn(i64) -> i64>() };
//!
//! assert_eq!(factorial(5), 120);
//! ```

pub mod encoder;
pub mod ir;
mod rt;

pub use rt::Runtime;
