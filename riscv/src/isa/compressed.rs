//! C: 16-bit encodings, written as 16-character patterns over the low half
//! of the word.
//!
//! Several encodings are carved out of broader ones (`C.NOP` out of
//! `C.ADDI`, `C.JR` out of `C.MV`, `C.EBREAK` out of `C.JALR` and `C.ADD`),
//! so a tree over this table needs specializations admitted.

use decoder::InstructionKind;

use super::Entry;
use crate::format::Format as F;

pub const COMMON: &[Entry] = &[
    Entry::op("C.ILLEGAL", "000 00000000 000 00", F::None).with_kind(InstructionKind::Illegal),
    Entry::op("C.ADDI4SPN", "000 iiiiiiii ddd 00", F::Ciw),
    Entry::op("C.FLD", "001 iii sss ii ddd 00", F::CLd),
    Entry::op("C.LW", "010 iii sss ii ddd 00", F::CLw),
    Entry::op("C.FSD", "101 iii sss ii ttt 00", F::CSd),
    Entry::op("C.SW", "110 iii sss ii ttt 00", F::CSw),
    Entry::op("C.NOP", "000 0 00000 00000 01", F::None).with_kind(InstructionKind::Nop),
    Entry::op("C.ADDI", "000 i ddddd iiiii 01", F::Ci),
    Entry::op("C.LI", "010 i ddddd iiiii 01", F::Ci),
    Entry::op("C.ADDI16SP", "011 i 00010 iiiii 01", F::CiSp),
    Entry::op("C.LUI", "011 i ddddd iiiii 01", F::Ci),
    Entry::op("C.SRLI", "100 i 00 ddd iiiii 01", F::CbShamt),
    Entry::op("C.SRAI", "100 i 01 ddd iiiii 01", F::CbShamt),
    Entry::op("C.ANDI", "100 i 10 ddd iiiii 01", F::CbImm),
    Entry::op("C.SUB", "100 0 11 ddd 00 ttt 01", F::Ca),
    Entry::op("C.XOR", "100 0 11 ddd 01 ttt 01", F::Ca),
    Entry::op("C.OR", "100 0 11 ddd 10 ttt 01", F::Ca),
    Entry::op("C.AND", "100 0 11 ddd 11 ttt 01", F::Ca),
    Entry::op("C.J", "101 iiiiiiiiiii 01", F::Cj),
    Entry::op("C.BEQZ", "110 iii sss iiiii 01", F::CbBranch),
    Entry::op("C.BNEZ", "111 iii sss iiiii 01", F::CbBranch),
    Entry::op("C.SLLI", "000 i ddddd iiiii 10", F::CiShamt),
    Entry::op("C.FLDSP", "001 i ddddd iiiii 10", F::CLdsp),
    Entry::op("C.LWSP", "010 i ddddd iiiii 10", F::CLwsp),
    Entry::op("C.JR", "100 0 sssss 00000 10", F::CrJump),
    Entry::op("C.MV", "100 0 ddddd ttttt 10", F::Cr),
    Entry::op("C.EBREAK", "100 1 00000 00000 10", F::None),
    Entry::op("C.JALR", "100 1 sssss 00000 10", F::CrJump),
    Entry::op("C.ADD", "100 1 ddddd ttttt 10", F::Cr),
    Entry::op("C.FSDSP", "101 iiiiii ttttt 10", F::CSdsp),
    Entry::op("C.SWSP", "110 iiiiii ttttt 10", F::CSwsp),
];

pub const RV32: &[Entry] = &[
    Entry::op("C.FLW", "011 iii sss ii ddd 00", F::CLw),
    Entry::op("C.FSW", "111 iii sss ii ttt 00", F::CSw),
    Entry::op("C.JAL", "001 iiiiiiiiiii 01", F::Cj),
    Entry::op("C.FLWSP", "011 i ddddd iiiii 10", F::CLwsp),
    Entry::op("C.FSWSP", "111 iiiiii ttttt 10", F::CSwsp),
];

pub const RV64: &[Entry] = &[
    Entry::op("C.LD", "011 iii sss ii ddd 00", F::CLd),
    Entry::op("C.SD", "111 iii sss ii ttt 00", F::CSd),
    Entry::op("C.ADDIW", "001 i ddddd iiiii 01", F::Ci),
    Entry::op("C.SUBW", "100 1 11 ddd 00 ttt 01", F::Ca),
    Entry::op("C.ADDW", "100 1 11 ddd 01 ttt 01", F::Ca),
    Entry::op("C.LDSP", "011 i ddddd iiiii 10", F::CLdsp),
    Entry::op("C.SDSP", "111 iiiiii ttttt 10", F::CSdsp),
];
