//! Factorial example.
//!
//! Jit compile a function at runtime (generate native host code) to compute
//! factorial, to demonstrate the [`nanojit_core`] crate's [`Encoder`] and
//! [`Runtime`].

use nanojit_core::encoder::insn::*;
use nanojit_core::encoder::{ConditionCode, Encoder, Imm64, Reg64};
use nanojit_core::Runtime;

const fn factorial_rs(n: u64) -> u64 {
    match n {
        0 => 1,
        _ => n * factorial_rs(n - 1),
    }
}

fn main() {
    env_logger::init();

    let mut asm = Encoder::new();

    // Reference implementation:
    //
    // u64 factorial(u64 n) {
    //   u64 acc = 1;
    // loop:
    //   if (n <= 1) goto end;
    //   acc *= n;
    //   n -= 1;
    //   goto loop;
    // end:
    //   return acc;
    // }

    // SystemV abi:
    //   rdi -> first argument
    //   rax -> return value
    let n = Reg64::rdi;
    let acc = Reg64::rax;
    let one = Reg64::r8;

    asm.mov(acc, Imm64::from(1u64));
    asm.mov(one, Imm64::from(1u64));

    let lp = asm.add_label();
    asm.mov(Reg64::rdx, Imm64::from(1u64));
    asm.cmp(n, Reg64::rdx);
    let end = asm.add_label();
    asm.emit_jmp_cond(ConditionCode::LessOrEqual, end);
    asm.imul(n);
    asm.sub(n, one);
    asm.emit_jmp(false, lp);
    asm.move_label(end);
    asm.ret();

    // Copy code into an executable page and get a function pointer to it.
    let mut rt = Runtime::new();
    asm.link_to(unsafe { rt.as_mut_slice() })
        .expect("linking the emitted code failed");
    unsafe { rt.make_executable() };
    let factorial = unsafe { rt.as_fn::<extern "C" fn(u64) -> u64>() };

    for n in 0..14 {
        let factorial_jit = factorial(n);
        println!("{n}! = {factorial_jit}");
        assert_eq!(factorial_jit, factorial_rs(n));
    }
}
