use crate::encoder::LabelId;

/// Failure linking (patching relocations into) an emitted buffer.
#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum LinkError {
    /// A relocation names a label id that was never created.
    #[error("relocation refers to unknown label {0:?}")]
    UnknownLabel(LabelId),

    /// A relative displacement didn't fit into the 32-bit signed field the
    /// encoder's jump forms reserve for it.
    #[error("relative displacement at patch offset {patch_offset} overflows 32 bits")]
    DisplacementOverflow { patch_offset: usize },
}
