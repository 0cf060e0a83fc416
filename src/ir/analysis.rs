//! Lifetime analysis: a three-pass control-flow-sensitive liveness
//! computation over a [`Function`]'s opcode sequence.

use super::function::Function;
use super::opcode::OpcodeKind;

bitflags::bitflags! {
    /// Flags a variable can be marked with during lifetime computation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct VariableFlags: u8 {
        /// Reserved for a downstream dead-code-elimination pass; nothing in
        /// this analyzer ever sets it.
        const PRUNED = 0b0001;
        /// Set when last assigned without an intervening read; cleared on
        /// the next read.
        const UNUSED = 0b0010;
        /// Conservatively live across the whole function.
        const ETERNAL = 0b0100;
        /// First use was a read with no prior write. Implies `ETERNAL`.
        const UNINITIALIZED = 0b1000;
    }
}

/// Per-instruction bookkeeping used by the backward-jump closure.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpcodeInfo {
    /// Index of the nearest earlier instruction that is a jump target, if any.
    pub previous_label: Option<usize>,
    /// Index of the latest (highest-index) instruction seen so far that
    /// jumps to this one, if any.
    pub jump_from: Option<usize>,
}

/// Per-variable liveness result.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableInfo {
    /// `None` iff the variable has never been visited.
    pub lifetime_start: Option<usize>,
    /// Half-open range end; ignored (and possibly stale/`None`) if `ETERNAL` is set.
    pub lifetime_end: Option<usize>,
    pub flags: VariableFlags,
}

impl VariableInfo {
    pub fn is_eternal(&self) -> bool {
        self.flags.contains(VariableFlags::ETERNAL)
    }

    pub fn is_uninitialized(&self) -> bool {
        self.flags.contains(VariableFlags::UNINITIALIZED)
    }

    /// The variable's live range, resolving `ETERNAL` to `[0, opcode_count)`.
    pub fn lifetime(&self, opcode_count: usize) -> Option<std::ops::Range<usize>> {
        if self.is_eternal() {
            return Some(0..opcode_count);
        }
        match (self.lifetime_start, self.lifetime_end) {
            (Some(start), Some(end)) => Some(start..end),
            _ => None,
        }
    }
}

/// The full result of [`analyse`]: one [`OpcodeInfo`] per instruction, one
/// [`VariableInfo`] per variable.
#[derive(Debug, Clone, Default)]
pub struct FunctionAnalysis {
    pub opcodes: Vec<OpcodeInfo>,
    pub variables: Vec<VariableInfo>,
}

/// Run the three-pass liveness analysis over `function`.
///
/// Purely a read of `function`; it is never mutated.
pub fn analyse(function: &Function) -> FunctionAnalysis {
    let n = function.opcodes.len();
    let mut infos = vec![OpcodeInfo::default(); n];

    // Pass 1 -- jump-source discovery, right to left. Keep the *latest*
    // (highest-index) jump source per target: the loop runs from the end
    // down and only ever sets `jump_from` once per target.
    for i in (0..n).rev() {
        let op = &function.opcodes[i];
        if op.kind.is_goto() {
            if let Some(target) = op.target.instruction_index_value() {
                if infos[target].jump_from.is_none() {
                    infos[target].jump_from = Some(i);
                }
            }
        }
    }

    // Pass 2 -- previous-label chain, left to right.
    let mut previous_label = None;
    for i in 0..n {
        infos[i].previous_label = previous_label;
        if infos[i].jump_from.is_some() {
            previous_label = Some(i);
        }
    }

    // Pass 3 -- lifetime computation, left to right.
    let mut variables = vec![VariableInfo::default(); function.variables.len()];
    for i in 0..n {
        let op = &function.opcodes[i];
        let kind = op.kind;

        if op.kind.writes_target() {
            if let Some(var) = op.target.variable_id() {
                extend(&mut variables, &infos, var, i, kind.is_pure_assignment());
            }
        }

        let primaries = [
            (op.primary_1, kind.reads_primary1()),
            (op.primary_2, kind.reads_primary2()),
        ];
        for (operand, is_read) in primaries {
            let Some(var) = operand.variable_id() else {
                continue;
            };
            if operand.address_taken() {
                mark_eternal(&mut variables, var);
            } else if is_read {
                extend(&mut variables, &infos, var, i, false);
            }
        }
    }

    log::trace!(
        "analyse: {n} opcode(s), {} variable(s)",
        function.variables.len()
    );

    FunctionAnalysis {
        opcodes: infos,
        variables,
    }
}

fn mark_eternal(variables: &mut [VariableInfo], var: usize) {
    variables[var].flags.insert(VariableFlags::ETERNAL);
}

/// Extend `var`'s live range to cover `index`, widening through any
/// backward jump that re-enters the range along the way.
///
/// The guard is `lifetime_end > index`, not `>=`: `lifetime_end` is a
/// half-open bound, so a touch exactly at `lifetime_end` is one past the
/// currently-recorded range and still needs to extend it. Once
/// `lifetime_end` is strictly past `index`, the range already covers this
/// use and `extend` is a no-op.
fn extend(variables: &mut [VariableInfo], infos: &[OpcodeInfo], var: usize, index: usize, pure_assignment: bool) {
    let v = &mut variables[var];

    if v.flags.intersects(VariableFlags::ETERNAL | VariableFlags::UNINITIALIZED) {
        return;
    }
    if let Some(end) = v.lifetime_end {
        if end > index {
            return;
        }
    }

    if v.lifetime_start.is_none() {
        if pure_assignment {
            v.lifetime_start = Some(index);
            v.lifetime_end = Some(index + 1);
            v.flags.insert(VariableFlags::UNUSED);
        } else {
            // First use is a read: conservatively treat as live everywhere
            // and flag the uninitialized read.
            v.flags.insert(VariableFlags::ETERNAL | VariableFlags::UNINITIALIZED);
        }
        return;
    }

    if pure_assignment {
        v.flags.insert(VariableFlags::UNUSED);
    } else {
        v.flags.remove(VariableFlags::UNUSED);
    }

    // Backward-jump closure: extend through any instruction in the current
    // live range that is the target of a later jump, and transitively
    // through whatever that jump source itself pulls in.
    let floor = v.lifetime_start.unwrap().max(v.lifetime_end.unwrap());
    let mut max_jmp_pos = index;
    let candidate_max = loop {
        let candidate_max = max_jmp_pos + 1;
        let mut pos = Some(max_jmp_pos);
        while let Some(p) = pos {
            if p < floor {
                break;
            }
            if let Some(jf) = infos[p].jump_from {
                if jf > max_jmp_pos {
                    max_jmp_pos = jf;
                }
            }
            pos = infos[p].previous_label;
        }
        if max_jmp_pos >= candidate_max {
            continue;
        }
        break candidate_max;
    };
    v.lifetime_end = Some(candidate_max);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Function, Opcode, OpcodeKind, Operand, TypeInfo, ValueType, Variable};

    fn nop() -> Opcode {
        Opcode::new(OpcodeKind::Nop, Operand::none(), Operand::none(), Operand::none())
    }

    fn goto(target: usize) -> Opcode {
        Opcode::new(OpcodeKind::Goto, Operand::instruction_index(target), Operand::none(), Operand::none())
    }

    fn func(opcodes: Vec<Opcode>) -> Function {
        Function::new(0, opcodes, vec![], TypeInfo::scalar(ValueType::Void), vec![]).unwrap()
    }

    #[test]
    fn jump_from_is_none_with_no_jumps() {
        let f = func(vec![nop(), nop(), nop()]);
        let result = analyse(&f);
        assert!(result.opcodes.iter().all(|i| i.jump_from.is_none()));
    }

    #[test]
    fn jump_from_records_a_single_jump_source() {
        // 0: nop
        // 1: goto 0
        let f = func(vec![nop(), goto(0)]);
        let result = analyse(&f);
        assert_eq!(result.opcodes[0].jump_from, Some(1));
        assert_eq!(result.opcodes[1].jump_from, None);
    }

    #[test]
    fn jump_from_keeps_the_latest_jump_source_for_a_shared_target() {
        // 0: nop       <- target of both jumps below
        // 1: goto 0
        // 2: nop
        // 3: goto 0    <- the later source; pass 1 runs right-to-left and
        //                 must keep this one, not the one at index 1
        let f = func(vec![nop(), goto(0), nop(), goto(0)]);
        let result = analyse(&f);
        assert_eq!(result.opcodes[0].jump_from, Some(3));
    }

    #[test]
    fn previous_label_chains_only_jump_targets_left_to_right() {
        // 0: nop          <- never a jump target
        // 1: nop          <- target of the jump at 3
        // 2: nop
        // 3: goto 1
        // 4: nop          <- target of the jump at 5
        // 5: goto 4
        let f = func(vec![nop(), nop(), nop(), goto(1), nop(), goto(4)]);
        let result = analyse(&f);

        // Instructions 0 and 1 are visited before 1 is discovered as a jump
        // target (that only happens once instruction 3, whose `jump_from`
        // back-points to it, has itself been visited), so they still see no
        // previous label.
        assert_eq!(result.opcodes[0].previous_label, None);
        assert_eq!(result.opcodes[1].previous_label, None);
        // From instruction 2 onward the chain points at 1, right up through
        // instruction 4 (target of the jump at 5, but not yet visited as
        // such when instruction 4 itself records its own previous label).
        assert_eq!(result.opcodes[2].previous_label, Some(1));
        assert_eq!(result.opcodes[3].previous_label, Some(1));
        assert_eq!(result.opcodes[4].previous_label, Some(1));
        // Instruction 5 is visited after instruction 4 has updated the
        // chain, so it now points at 4.
        assert_eq!(result.opcodes[5].previous_label, Some(4));
    }
}
