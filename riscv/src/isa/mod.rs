//! RISC-V encodings, one module per extension.
//!
//! Each module lists the encodings shared by RV32 and RV64 in `COMMON` and
//! the ones that only exist at one register width in `RV32` and `RV64`.
//! Patterns are written most significant bit first; `0`/`1` are fixed bits
//! and letters name the operand that occupies the bit.

mod a;
mod base;
mod compressed;
mod fp;
mod m;

use decoder::{InstructionDeclaration, InstructionKind};

use crate::Xlen;
use crate::format::Format;

#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub bits: &'static str,
    pub format: Format,
    pub kind: InstructionKind,
}

impl Entry {
    const fn op(name: &'static str, bits: &'static str, format: Format) -> Self {
        Self {
            name,
            bits,
            format,
            kind: InstructionKind::Normal,
        }
    }

    const fn with_kind(self, kind: InstructionKind) -> Self {
        Self { kind, ..self }
    }

    pub fn declaration(&self) -> decoder::Result<InstructionDeclaration> {
        Ok(
            InstructionDeclaration::from_bit_pattern(self.name, self.bits, self.format.fields())?
                .with_kind(self.kind),
        )
    }
}

struct Extension {
    common: &'static [Entry],
    rv32: &'static [Entry],
    rv64: &'static [Entry],
}

static EXTENSIONS: [Extension; 5] = [
    Extension {
        common: base::COMMON,
        rv32: base::RV32,
        rv64: base::RV64,
    },
    Extension {
        common: m::COMMON,
        rv32: &[],
        rv64: m::RV64,
    },
    Extension {
        common: a::COMMON,
        rv32: &[],
        rv64: a::RV64,
    },
    Extension {
        common: fp::COMMON,
        rv32: &[],
        rv64: fp::RV64,
    },
    Extension {
        common: compressed::COMMON,
        rv32: compressed::RV32,
        rv64: compressed::RV64,
    },
];

/// Every encoding of the G and C extensions at the given register width.
pub fn entries(xlen: Xlen) -> impl Iterator<Item = &'static Entry> {
    EXTENSIONS.iter().flat_map(move |extension| {
        let specific = match xlen {
            Xlen::Rv32 => extension.rv32,
            Xlen::Rv64 => extension.rv64,
        };
        extension.common.iter().chain(specific)
    })
}
