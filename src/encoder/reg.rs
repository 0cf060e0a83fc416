//! x86-64 general-purpose register operands.

/// Trait implemented by every register width, giving access to the 4-bit
/// register index (0..15) that the `ModR/M` and `REX` bytes split apart.
pub(crate) trait Reg: Copy {
    /// Full 4-bit register index.
    fn idx(self) -> u8;

    /// Low three bits, used in the `reg`/`rm` fields of `ModR/M`.
    fn low3(self) -> u8 {
        self.idx() & 0b111
    }

    /// Whether this register needs the high extension bit (`r8`-`r15`).
    fn is_ext(self) -> bool {
        self.idx() >= 8
    }
}

macro_rules! impl_reg {
    ($name:ident { $($variant:ident = $idx:expr),+ $(,)? }) => {
        /// A general-purpose register operand.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[allow(non_camel_case_types)]
        pub enum $name {
            $($variant = $idx),+
        }

        impl Reg for $name {
            fn idx(self) -> u8 {
                self as u8
            }
        }
    };
}

impl_reg!(Reg8 {
    al = 0, cl = 1, dl = 2, bl = 3, spl = 4, bpl = 5, sil = 6, dil = 7,
    r8l = 8, r9l = 9, r10l = 10, r11l = 11, r12l = 12, r13l = 13, r14l = 14, r15l = 15,
});

impl_reg!(Reg16 {
    ax = 0, cx = 1, dx = 2, bx = 3, sp = 4, bp = 5, si = 6, di = 7,
    r8w = 8, r9w = 9, r10w = 10, r11w = 11, r12w = 12, r13w = 13, r14w = 14, r15w = 15,
});

impl_reg!(Reg32 {
    eax = 0, ecx = 1, edx = 2, ebx = 3, esp = 4, ebp = 5, esi = 6, edi = 7,
    r8d = 8, r9d = 9, r10d = 10, r11d = 11, r12d = 12, r13d = 13, r14d = 14, r15d = 15,
});

impl_reg!(Reg64 {
    rax = 0, rcx = 1, rdx = 2, rbx = 3, rsp = 4, rbp = 5, rsi = 6, rdi = 7,
    r8 = 8, r9 = 9, r10 = 10, r11 = 11, r12 = 12, r13 = 13, r14 = 14, r15 = 15,
});

/// Trait implemented once per register width, describing the operand-size
/// machinery (legacy `0x66` prefix, `REX.W`) that the encoder needs but that
/// doesn't depend on *which* register within the width is used.
pub(crate) trait Width {
    /// `REX.W`: set for the 64-bit operand size.
    const REXW: bool;

    /// Legacy operand-size-override prefix, only present for 16-bit operands.
    const LEGACY_PREFIX: Option<u8> = None;
}

impl Width for Reg8 {
    const REXW: bool = false;
}

impl Width for Reg16 {
    const REXW: bool = false;
    const LEGACY_PREFIX: Option<u8> = Some(0x66);
}

impl Width for Reg32 {
    const REXW: bool = false;
}

impl Width for Reg64 {
    const REXW: bool = true;
}
