//! IR opcodes.

use super::Operand;

/// The kind of a three-address [`Opcode`]: arithmetic, bitwise, control,
/// or data movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeKind {
    // -- arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // -- bitwise
    Not,
    BitNeg,
    Shl,
    Shr,

    // -- control: unconditional goto plus the eight conditional variants
    Goto,
    GotoEq,
    GotoNe,
    GotoLt,
    GotoLe,
    GotoGt,
    GotoGe,
    GotoBelow,
    GotoAboveEq,

    // -- control: "always" compare plus the eight conditional variants
    Compare,
    CompareEq,
    CompareNe,
    CompareLt,
    CompareLe,
    CompareGt,
    CompareGe,
    CompareBelow,
    CompareAboveEq,

    Call,
    Return,
    SetArgument,

    // -- data movement
    Nop,
    Copy,
}

impl OpcodeKind {
    /// Whether this opcode is in the conditional/unconditional-goto band --
    /// the only opcodes that transfer control to another instruction index.
    pub fn is_goto(self) -> bool {
        use OpcodeKind::*;
        matches!(
            self,
            Goto | GotoEq | GotoNe | GotoLt | GotoLe | GotoGt | GotoGe | GotoBelow | GotoAboveEq
        )
    }

    /// The unconditional/"always" form of `Goto`, the one `Goto` variant
    /// that does *not* read `primary_1` (there's no condition to compare it
    /// against).
    fn is_goto_base(self) -> bool {
        matches!(self, OpcodeKind::Goto)
    }

    /// The unconditional/"always" form of `Compare`. Only this base form
    /// skips reading `primary_1`; the eight conditional `Compare*` variants
    /// all read it to evaluate their condition, spelled out here as an
    /// explicit match rather than an opaque equality check.
    fn is_compare_base(self) -> bool {
        matches!(self, OpcodeKind::Compare)
    }

    /// Whether this opcode's `COPY`/`CALL`-style effect on `target` is a
    /// pure assignment (write without reading the old value).
    pub fn is_pure_assignment(self) -> bool {
        matches!(self, OpcodeKind::Copy | OpcodeKind::Call)
    }

    /// Whether this opcode writes a result into its `target` operand.
    /// Every opcode does except `NOP`, `RETURN`, and the `GOTO` family
    /// (whose `target` slot instead carries a jump-target instruction
    /// index, not a value to be written).
    pub fn writes_target(self) -> bool {
        !matches!(self, OpcodeKind::Nop | OpcodeKind::Return) && !self.is_goto()
    }

    /// Readership rule for `primary_1`: read by every opcode except `NOP`
    /// and the bare `COMPARE`/`GOTO` base forms.
    pub fn reads_primary1(self) -> bool {
        !matches!(self, OpcodeKind::Nop) && !self.is_goto_base() && !self.is_compare_base()
    }

    /// Readership rule for `primary_2`: read only if `primary_1` is read
    /// and the opcode isn't one of `RETURN`, `CALL`, `SET_ARGUMENT`,
    /// `BIT_NEG`, `NOT`, or `COPY`.
    pub fn reads_primary2(self) -> bool {
        self.reads_primary1()
            && !matches!(
                self,
                OpcodeKind::Return
                    | OpcodeKind::Call
                    | OpcodeKind::SetArgument
                    | OpcodeKind::BitNeg
                    | OpcodeKind::Not
                    | OpcodeKind::Copy
            )
    }
}

/// A single three-address instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opcode {
    pub kind: OpcodeKind,
    pub target: Operand,
    pub primary_1: Operand,
    pub primary_2: Operand,
}

impl Opcode {
    pub const fn new(kind: OpcodeKind, target: Operand, primary_1: Operand, primary_2: Operand) -> Opcode {
        Opcode {
            kind,
            target,
            primary_1,
            primary_2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OpcodeKind::*;

    #[test]
    fn is_goto_covers_only_the_goto_band() {
        for k in [
            Goto, GotoEq, GotoNe, GotoLt, GotoLe, GotoGt, GotoGe, GotoBelow, GotoAboveEq,
        ] {
            assert!(k.is_goto(), "{k:?} should be in the goto band");
        }
        for k in [Add, Sub, Compare, CompareEq, Call, Return, Nop, Copy] {
            assert!(!k.is_goto(), "{k:?} should not be in the goto band");
        }
    }

    #[test]
    fn is_pure_assignment_is_copy_and_call_only() {
        assert!(Copy.is_pure_assignment());
        assert!(Call.is_pure_assignment());
        for k in [Add, Sub, Nop, Return, Goto, GotoEq, Compare] {
            assert!(!k.is_pure_assignment(), "{k:?} should not be a pure assignment");
        }
    }

    #[test]
    fn writes_target_excludes_nop_return_and_every_goto() {
        assert!(!Nop.writes_target());
        assert!(!Return.writes_target());
        for k in [Goto, GotoEq, GotoNe, GotoLt, GotoLe, GotoGt, GotoGe, GotoBelow, GotoAboveEq] {
            assert!(!k.writes_target(), "{k:?} should not write target");
        }
        for k in [Add, Sub, Mul, Div, Not, BitNeg, Shl, Shr, Call, Copy, Compare, SetArgument] {
            assert!(k.writes_target(), "{k:?} should write target");
        }
    }

    #[test]
    fn reads_primary1_excludes_nop_and_base_goto_compare_only() {
        assert!(!Nop.reads_primary1());
        assert!(!Goto.reads_primary1());
        assert!(!Compare.reads_primary1());

        // The conditional variants of both goto and compare do read
        // primary_1 -- only the unconditional/"always" base forms don't.
        for k in [GotoEq, GotoNe, GotoLt, GotoBelow, CompareEq, CompareNe, CompareLt] {
            assert!(k.reads_primary1(), "{k:?} should read primary_1");
        }
        for k in [Add, Sub, Call, Return, Copy, SetArgument] {
            assert!(k.reads_primary1(), "{k:?} should read primary_1");
        }
    }

    #[test]
    fn reads_primary2_excludes_the_single_operand_family() {
        for k in [Return, Call, SetArgument, BitNeg, Not, Copy] {
            assert!(!k.reads_primary2(), "{k:?} should not read primary_2");
        }
        for k in [Add, Sub, Mul, Div, Shl, Shr, GotoEq, CompareEq] {
            assert!(k.reads_primary2(), "{k:?} should read primary_2");
        }

        // Never reads primary_2 if it doesn't even read primary_1.
        assert!(!Nop.reads_primary2());
        assert!(!Goto.reads_primary2());
        assert!(!Compare.reads_primary2());
    }
}
