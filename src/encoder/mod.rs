//! The `x86-64` in-memory assembler.
//!
//! [`Encoder`] is an append-only byte buffer with a label table and a
//! relocation table. Emitters (see [`insn`]) append bytes for a single
//! instruction; nothing is ever rewritten in place except by the explicit
//! relocation step at link time ([`Encoder::apply_relocations`],
//! [`Encoder::link_to`]).

mod cc;
mod error;
mod imm;
mod label;
pub mod insn;
mod reg;

use imm::Imm;
use label::Relocation;
use reg::{Reg, Width};

pub use cc::ConditionCode;
pub use error::LinkError;
pub use imm::{Imm16, Imm32, Imm64, Imm8};
pub use label::LabelId;
pub use reg::{Reg16, Reg32, Reg64, Reg8};

/// Encode the `REX` byte: `0100_WRXB`.
///
/// Emitted unconditionally by every `ModR/M`-style emitter in this crate,
/// even when `W`, `R` and `B` are all zero -- a non-canonical but valid
/// choice that keeps every emitter's byte count a function of its operand
/// width alone.
const fn rex(w: bool, r: u8, x: u8, b: u8) -> u8 {
    let w = w as u8;
    let r = (r >> 3) & 1;
    let x = (x >> 3) & 1;
    let b = (b >> 3) & 1;
    0b0100_0000 | (w << 3) | (r << 2) | (x << 1) | b
}

/// Encode the `ModR/M` byte: `mod(2) | reg(3) | rm(3)`.
const fn modrm(mod_: u8, reg: u8, rm: u8) -> u8 {
    ((mod_ & 0b11) << 6) | ((reg & 0b111) << 3) | (rm & 0b111)
}

/// The `x86-64` in-memory assembler.
pub struct Encoder {
    buf: Vec<u8>,
    labels: Vec<usize>,
    relocations: Vec<Relocation>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Create a new encoder with a default starting capacity.
    pub fn new() -> Encoder {
        Self::with_capacity(1024)
    }

    /// Create a new encoder with the given starting buffer capacity.
    pub fn with_capacity(capacity: usize) -> Encoder {
        Encoder {
            buf: Vec::with_capacity(capacity),
            labels: Vec::new(),
            relocations: Vec::new(),
        }
    }

    /// Number of bytes emitted so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the bytes emitted so far.
    pub fn code(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the encoder and get the emitted code.
    pub fn into_code(self) -> Vec<u8> {
        self.buf
    }

    /// Reserve a fresh label id bound to the current write position.
    ///
    /// Labels are always created "here"; use [`Encoder::move_label`] to
    /// rebind one once its final position is known.
    pub fn add_label(&mut self) -> LabelId {
        let id = LabelId(self.labels.len() as u32);
        self.labels.push(self.buf.len());
        log::trace!("add_label -> {:?} @ {}", id, self.buf.len());
        id
    }

    /// Overwrite a label's recorded offset with the current write position.
    pub fn move_label(&mut self, label: LabelId) {
        log::trace!("move_label {:?} -> {}", label, self.buf.len());
        self.labels[label.index()] = self.buf.len();
    }

    /// Patch every recorded relocation directly into this encoder's own
    /// buffer. `base` is used for absolute relocations only; relative
    /// relocations (the only kind any supported emitter currently produces)
    /// don't depend on it.
    pub fn apply_relocations(&mut self, base: u64) -> Result<(), LinkError> {
        log::debug!(
            "apply_relocations: {} relocation(s) against base {:#x}",
            self.relocations.len(),
            base
        );
        Self::resolve_relocations(&mut self.buf, &self.labels, &self.relocations, base)
    }

    /// Copy this encoder's emitted bytes into `dest` and patch relocations
    /// against `dest`, using `dest`'s own address as the absolute base.
    ///
    /// The encoder's internal buffer is untouched, so the same encoder can
    /// be linked into any number of independent destinations.
    ///
    /// # Panics
    ///
    /// Panics if `dest` is smaller than the emitted code.
    pub fn link_to(&self, dest: &mut [u8]) -> Result<(), LinkError> {
        assert!(
            dest.len() >= self.buf.len(),
            "destination buffer ({} bytes) smaller than emitted code ({} bytes)",
            dest.len(),
            self.buf.len()
        );
        dest[..self.buf.len()].copy_from_slice(&self.buf);
        let base = dest.as_ptr() as u64;
        log::debug!("link_to: {} byte(s) at base {:#x}", self.buf.len(), base);
        Self::resolve_relocations(dest, &self.labels, &self.relocations, base)
    }

    fn resolve_relocations(
        buf: &mut [u8],
        labels: &[usize],
        relocations: &[Relocation],
        base: u64,
    ) -> Result<(), LinkError> {
        for reloc in relocations {
            let label_off = *labels
                .get(reloc.label_id.index())
                .ok_or(LinkError::UnknownLabel(reloc.label_id))?;

            if reloc.relative {
                let disp = label_off as i64 - (reloc.patch_offset as i64 + 4);
                let disp32 = i32::try_from(disp).map_err(|_| LinkError::DisplacementOverflow {
                    patch_offset: reloc.patch_offset,
                })?;
                buf[reloc.patch_offset..reloc.patch_offset + 4]
                    .copy_from_slice(&disp32.to_le_bytes());
            } else {
                let addr = base.wrapping_add(label_off as u64);
                buf[reloc.patch_offset..reloc.patch_offset + 8].copy_from_slice(&addr.to_le_bytes());
            }
        }
        Ok(())
    }

    // -- Raw byte emission.

    fn emit(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    // -- Encode utilities, one per `ModR/M` operand-encoding family.

    /// Encode a register-register instruction (`MR` form: `op1` -> `rm`,
    /// `op2` -> `reg`).
    pub(crate) fn encode_rr<T: Reg + Width>(&mut self, opc: u8, op1: T, op2: T) {
        let modrm = modrm(0b11, op2.low3(), op1.low3());
        let rex = rex(T::REXW, op2.idx(), 0, op1.idx());

        if let Some(prefix) = T::LEGACY_PREFIX {
            self.emit(&[prefix]);
        }
        self.emit(&[rex, opc, modrm]);
    }

    /// Encode an opcode-extension single-register instruction (the opcode
    /// digit occupies `ModR/M.reg`, the register occupies `ModR/M.rm`). Used
    /// by the unary arithmetic group and indirect jumps/calls.
    pub(crate) fn encode_r<T: Reg + Width>(&mut self, opc: u8, opc_ext: u8, op1: T) {
        let modrm = modrm(0b11, opc_ext, op1.low3());
        let rex = rex(T::REXW, 0, 0, op1.idx());

        if let Some(prefix) = T::LEGACY_PREFIX {
            self.emit(&[prefix]);
        }
        self.emit(&[rex, opc, modrm]);
    }

    /// Encode a register folded into the low 3 bits of the opcode, with a
    /// trailing immediate (the `B8+r imm`/`B0+r imm` move forms).
    pub(crate) fn encode_oi<T: Reg + Width, U: Imm>(&mut self, opc: u8, op1: T, op2: U) {
        let opc = opc + op1.low3();
        let rex = rex(T::REXW, 0, 0, op1.idx());

        if let Some(prefix) = T::LEGACY_PREFIX {
            self.emit(&[prefix]);
        }
        self.emit(&[rex, opc]);
        self.emit(op2.bytes());
    }

    /// Encode a register folded into the low 3 bits of the opcode, with no
    /// immediate (the `50+r`/`58+r` push/pop forms).
    pub(crate) fn encode_o<T: Reg + Width>(&mut self, opc: u8, op1: T) {
        let opc = opc + op1.low3();
        let rex = rex(T::REXW, 0, 0, op1.idx());

        if let Some(prefix) = T::LEGACY_PREFIX {
            self.emit(&[prefix]);
        }
        self.emit(&[rex, opc]);
    }

    /// Emit a direct jump or call to a label: the opcode, followed by a
    /// zeroed `disp32` placeholder, and record a relative relocation
    /// pointing at that placeholder.
    pub fn emit_jmp(&mut self, is_call: bool, label: LabelId) {
        self.emit(&[if is_call { 0xe8 } else { 0xe9 }]);
        self.record_disp32_reloc(label);
    }

    /// Emit a conditional jump (`0F 8x rel32`) to a label.
    pub fn emit_jmp_cond(&mut self, cond: ConditionCode, label: LabelId) {
        self.emit(&[0x0f, 0x80 | cond.as_u8()]);
        self.record_disp32_reloc(label);
    }

    fn record_disp32_reloc(&mut self, label: LabelId) {
        let patch_offset = self.buf.len();
        self.emit(&[0u8; 4]);
        log::trace!("relocation recorded: patch_offset={patch_offset} label={label:?}");
        self.relocations.push(Relocation {
            patch_offset,
            label_id: label,
            relative: true,
        });
    }

    /// Emit a `ret` instruction.
    pub fn ret(&mut self) {
        self.emit(&[0xc3]);
    }

    /// Emit a `nop` instruction.
    pub fn nop(&mut self) {
        self.emit(&[0x90]);
    }
}
