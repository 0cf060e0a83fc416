use nanojit_core::encoder::{ConditionCode, Encoder, LinkError};

/// Exercises the `log::trace!`/`log::debug!` breadcrumbs on the
/// label/relocation path under a real backend, rather than just trusting
/// they compile. `try_init` because other tests in this binary may run
/// first and already have installed the global logger.
#[test]
fn label_and_relocation_trace_breadcrumbs_dont_panic() {
    let _ = env_logger::try_init();

    let mut asm = Encoder::new();
    let lbl = asm.add_label();
    asm.nop();
    asm.move_label(lbl);
    asm.emit_jmp(false, lbl);
    asm.apply_relocations(0).unwrap();
}

#[test]
fn jmp_label_bind_first() {
    let mut asm = Encoder::new();
    let lbl = asm.add_label();
    asm.emit_jmp(false, lbl);
    asm.apply_relocations(0).unwrap();
    // 0xfffffffb -> -5
    assert_eq!(asm.code(), [0xe9, 0xfb, 0xff, 0xff, 0xff]);
}

#[test]
fn jmp_label_bind_later() {
    let mut asm = Encoder::new();
    let lbl = asm.add_label();
    asm.emit_jmp(false, lbl);
    asm.move_label(lbl);
    asm.apply_relocations(0).unwrap();
    assert_eq!(asm.code(), [0xe9, 0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn jmp_label_with_nops_between() {
    let mut asm = Encoder::new();
    let lbl = asm.add_label();
    asm.emit_jmp(false, lbl);
    asm.nop();
    asm.nop();
    asm.move_label(lbl);
    asm.apply_relocations(0).unwrap();
    assert_eq!(asm.code(), [0xe9, 0x02, 0x00, 0x00, 0x00, 0x90, 0x90]);
}

#[test]
fn call_label() {
    let mut asm = Encoder::new();
    let lbl = asm.add_label();
    asm.emit_jmp(true, lbl);
    asm.apply_relocations(0).unwrap();
    assert_eq!(asm.code(), [0xe8, 0xfb, 0xff, 0xff, 0xff]);
}

#[test]
fn conditional_jmp_backward() {
    let mut asm = Encoder::new();
    let lbl = asm.add_label();
    asm.emit_jmp_cond(ConditionCode::Equal, lbl);
    asm.apply_relocations(0).unwrap();
    // patch_offset=2, disp = 0 - (2+4) = -6 -> 0xfffffffa
    assert_eq!(asm.code(), [0x0f, 0x84, 0xfa, 0xff, 0xff, 0xff]);
}

#[test]
fn move_label_repoints_every_relocation_referencing_it() {
    let mut asm = Encoder::new();
    let lbl = asm.add_label();
    asm.emit_jmp(false, lbl);
    asm.emit_jmp(false, lbl);
    asm.nop();
    asm.move_label(lbl);
    asm.apply_relocations(0).unwrap();
    let code = asm.code();
    // Both jumps now target offset 11 (5 + 5 + 1 nop), the position
    // `move_label` recorded.
    assert_eq!(&code[1..5], &(11i32 - 5).to_le_bytes());
    assert_eq!(&code[6..10], &(11i32 - 10).to_le_bytes());
}

#[test]
fn link_to_can_be_called_against_multiple_destinations() {
    let mut asm = Encoder::new();
    asm.nop();
    let lbl = asm.add_label();
    asm.ret();

    let mut dest_a = vec![0u8; asm.len()];
    let mut dest_b = vec![0u8; asm.len()];
    asm.link_to(&mut dest_a).unwrap();
    asm.link_to(&mut dest_b).unwrap();

    assert_eq!(dest_a, dest_b);
    assert_eq!(dest_a, asm.code());
    let _ = lbl;
}

#[test]
fn link_to_panics_if_destination_too_small() {
    let mut asm = Encoder::new();
    asm.nop();
    asm.nop();
    let mut dest = vec![0u8; 1];
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        asm.link_to(&mut dest)
    }));
    assert!(result.is_err());
}

#[test]
fn apply_relocations_rejects_a_label_from_a_different_encoder() {
    let mut producer = Encoder::new();
    let foreign_label = producer.add_label();

    let mut asm = Encoder::new();
    asm.emit_jmp(false, foreign_label);
    let err = asm.apply_relocations(0).unwrap_err();
    assert!(matches!(err, LinkError::UnknownLabel(_)));
}
