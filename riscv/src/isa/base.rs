//! RV32I/RV64I with Zicsr, Zifencei and the machine/supervisor instructions.

use decoder::InstructionKind;

use super::Entry;
use crate::format::Format as F;

pub const COMMON: &[Entry] = &[
    Entry::op("LUI", "iiiiiiiiiiiiiiiiiiii ddddd 0110111", F::U),
    Entry::op("AUIPC", "iiiiiiiiiiiiiiiiiiii ddddd 0010111", F::U),
    Entry::op("JAL", "iiiiiiiiiiiiiiiiiiii ddddd 1101111", F::J),
    Entry::op("JALR", "iiiiiiiiiiii sssss 000 ddddd 1100111", F::I),
    Entry::op("BEQ", "iiiiiii ttttt sssss 000 iiiii 1100011", F::B),
    Entry::op("BNE", "iiiiiii ttttt sssss 001 iiiii 1100011", F::B),
    Entry::op("BLT", "iiiiiii ttttt sssss 100 iiiii 1100011", F::B),
    Entry::op("BGE", "iiiiiii ttttt sssss 101 iiiii 1100011", F::B),
    Entry::op("BLTU", "iiiiiii ttttt sssss 110 iiiii 1100011", F::B),
    Entry::op("BGEU", "iiiiiii ttttt sssss 111 iiiii 1100011", F::B),
    Entry::op("LB", "iiiiiiiiiiii sssss 000 ddddd 0000011", F::I),
    Entry::op("LH", "iiiiiiiiiiii sssss 001 ddddd 0000011", F::I),
    Entry::op("LW", "iiiiiiiiiiii sssss 010 ddddd 0000011", F::I),
    Entry::op("LBU", "iiiiiiiiiiii sssss 100 ddddd 0000011", F::I),
    Entry::op("LHU", "iiiiiiiiiiii sssss 101 ddddd 0000011", F::I),
    Entry::op("SB", "iiiiiii ttttt sssss 000 iiiii 0100011", F::S),
    Entry::op("SH", "iiiiiii ttttt sssss 001 iiiii 0100011", F::S),
    Entry::op("SW", "iiiiiii ttttt sssss 010 iiiii 0100011", F::S),
    Entry::op("ADDI", "iiiiiiiiiiii sssss 000 ddddd 0010011", F::I),
    Entry::op("NOP", "000000000000 00000 000 00000 0010011", F::None)
        .with_kind(InstructionKind::Nop),
    Entry::op("SLTI", "iiiiiiiiiiii sssss 010 ddddd 0010011", F::I),
    Entry::op("SLTIU", "iiiiiiiiiiii sssss 011 ddddd 0010011", F::I),
    Entry::op("XORI", "iiiiiiiiiiii sssss 100 ddddd 0010011", F::I),
    Entry::op("ORI", "iiiiiiiiiiii sssss 110 ddddd 0010011", F::I),
    Entry::op("ANDI", "iiiiiiiiiiii sssss 111 ddddd 0010011", F::I),
    Entry::op("ADD", "0000000 ttttt sssss 000 ddddd 0110011", F::R),
    Entry::op("SUB", "0100000 ttttt sssss 000 ddddd 0110011", F::R),
    Entry::op("SLL", "0000000 ttttt sssss 001 ddddd 0110011", F::R),
    Entry::op("SLT", "0000000 ttttt sssss 010 ddddd 0110011", F::R),
    Entry::op("SLTU", "0000000 ttttt sssss 011 ddddd 0110011", F::R),
    Entry::op("XOR", "0000000 ttttt sssss 100 ddddd 0110011", F::R),
    Entry::op("SRL", "0000000 ttttt sssss 101 ddddd 0110011", F::R),
    Entry::op("SRA", "0100000 ttttt sssss 101 ddddd 0110011", F::R),
    Entry::op("OR", "0000000 ttttt sssss 110 ddddd 0110011", F::R),
    Entry::op("AND", "0000000 ttttt sssss 111 ddddd 0110011", F::R),
    Entry::op("FENCE", "ffff pppp cccc sssss 000 ddddd 0001111", F::Fence),
    Entry::op("PAUSE", "0000 0001 0000 00000 000 00000 0001111", F::None)
        .with_kind(InstructionKind::Hint),
    Entry::op("FENCE.I", "iiiiiiiiiiii sssss 001 ddddd 0001111", F::I),
    Entry::op("ECALL", "000000000000 00000 000 00000 1110011", F::None),
    Entry::op("EBREAK", "000000000001 00000 000 00000 1110011", F::None),
    Entry::op("SRET", "0001000 00010 00000 000 00000 1110011", F::None),
    Entry::op("MRET", "0011000 00010 00000 000 00000 1110011", F::None),
    Entry::op("WFI", "0001000 00101 00000 000 00000 1110011", F::None),
    Entry::op("SFENCE.VMA", "0001001 ttttt sssss 000 00000 1110011", F::SfenceVma),
    Entry::op("CSRRW", "cccccccccccc sssss 001 ddddd 1110011", F::Csr),
    Entry::op("CSRRS", "cccccccccccc sssss 010 ddddd 1110011", F::Csr),
    Entry::op("CSRRC", "cccccccccccc sssss 011 ddddd 1110011", F::Csr),
    Entry::op("CSRRWI", "cccccccccccc uuuuu 101 ddddd 1110011", F::CsrImm),
    Entry::op("CSRRSI", "cccccccccccc uuuuu 110 ddddd 1110011", F::CsrImm),
    Entry::op("CSRRCI", "cccccccccccc uuuuu 111 ddddd 1110011", F::CsrImm),
];

pub const RV32: &[Entry] = &[
    Entry::op("SLLI", "0000000 hhhhh sssss 001 ddddd 0010011", F::IShamt5),
    Entry::op("SRLI", "0000000 hhhhh sssss 101 ddddd 0010011", F::IShamt5),
    Entry::op("SRAI", "0100000 hhhhh sssss 101 ddddd 0010011", F::IShamt5),
];

pub const RV64: &[Entry] = &[
    Entry::op("SLLI", "000000 hhhhhh sssss 001 ddddd 0010011", F::IShamt6),
    Entry::op("SRLI", "000000 hhhhhh sssss 101 ddddd 0010011", F::IShamt6),
    Entry::op("SRAI", "010000 hhhhhh sssss 101 ddddd 0010011", F::IShamt6),
    Entry::op("LWU", "iiiiiiiiiiii sssss 110 ddddd 0000011", F::I),
    Entry::op("LD", "iiiiiiiiiiii sssss 011 ddddd 0000011", F::I),
    Entry::op("SD", "iiiiiii ttttt sssss 011 iiiii 0100011", F::S),
    Entry::op("ADDIW", "iiiiiiiiiiii sssss 000 ddddd 0011011", F::I),
    Entry::op("SLLIW", "0000000 hhhhh sssss 001 ddddd 0011011", F::IShamt5),
    Entry::op("SRLIW", "0000000 hhhhh sssss 101 ddddd 0011011", F::IShamt5),
    Entry::op("SRAIW", "0100000 hhhhh sssss 101 ddddd 0011011", F::IShamt5),
    Entry::op("ADDW", "0000000 ttttt sssss 000 ddddd 0111011", F::R),
    Entry::op("SUBW", "0100000 ttttt sssss 000 ddddd 0111011", F::R),
    Entry::op("SLLW", "0000000 ttttt sssss 001 ddddd 0111011", F::R),
    Entry::op("SRLW", "0000000 ttttt sssss 101 ddddd 0111011", F::R),
    Entry::op("SRAW", "0100000 ttttt sssss 101 ddddd 0111011", F::R),
];
