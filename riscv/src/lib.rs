//! RV32GC/RV64GC instruction tables for the `decoder` crate.
//!
//! [`decoder_tree`] builds the tree for a register width on first use and
//! shares it afterwards; [`declarations`] hands out the raw table for callers
//! that want their own [`BuildOptions`].

use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

use decoder::{BuildOptions, DecoderTree, InstructionDeclaration};

pub mod format;
mod isa;

/// Register width of the emulated hart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Xlen {
    Rv32,
    #[default]
    Rv64,
}

impl Display for Xlen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rv32 => write!(f, "RV32GC"),
            Self::Rv64 => write!(f, "RV64GC"),
        }
    }
}

/// The G and C encodings available at `xlen`.
pub fn declarations(xlen: Xlen) -> decoder::Result<Vec<InstructionDeclaration>> {
    isa::entries(xlen).map(isa::Entry::declaration).collect()
}

/// The options the shared trees are built with. The compressed extension
/// and the hint encodings carve specific encodings out of broader ones.
pub const fn build_options() -> BuildOptions {
    BuildOptions::with_specializations()
}

/// Shared decoder tree for `xlen`, built on first use.
pub fn decoder_tree(xlen: Xlen) -> decoder::Result<&'static DecoderTree> {
    static RV32: OnceLock<DecoderTree> = OnceLock::new();
    static RV64: OnceLock<DecoderTree> = OnceLock::new();

    let cell = match xlen {
        Xlen::Rv32 => &RV32,
        Xlen::Rv64 => &RV64,
    };
    if let Some(tree) = cell.get() {
        return Ok(tree);
    }

    tracing::debug!("building {xlen} decoder tree");
    let tree = DecoderTree::build_with(declarations(xlen)?, &build_options())?;
    Ok(cell.get_or_init(|| tree))
}
