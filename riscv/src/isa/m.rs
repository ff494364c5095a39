use super::Entry;
use crate::format::Format as F;

pub const COMMON: &[Entry] = &[
    Entry::op("MUL", "0000001 ttttt sssss 000 ddddd 0110011", F::R),
    Entry::op("MULH", "0000001 ttttt sssss 001 ddddd 0110011", F::R),
    Entry::op("MULHSU", "0000001 ttttt sssss 010 ddddd 0110011", F::R),
    Entry::op("MULHU", "0000001 ttttt sssss 011 ddddd 0110011", F::R),
    Entry::op("DIV", "0000001 ttttt sssss 100 ddddd 0110011", F::R),
    Entry::op("DIVU", "0000001 ttttt sssss 101 ddddd 0110011", F::R),
    Entry::op("REM", "0000001 ttttt sssss 110 ddddd 0110011", F::R),
    Entry::op("REMU", "0000001 ttttt sssss 111 ddddd 0110011", F::R),
];

pub const RV64: &[Entry] = &[
    Entry::op("MULW", "0000001 ttttt sssss 000 ddddd 0111011", F::R),
    Entry::op("DIVW", "0000001 ttttt sssss 100 ddddd 0111011", F::R),
    Entry::op("DIVUW", "0000001 ttttt sssss 101 ddddd 0111011", F::R),
    Entry::op("REMW", "0000001 ttttt sssss 110 ddddd 0111011", F::R),
    Entry::op("REMUW", "0000001 ttttt sssss 111 ddddd 0111011", F::R),
];
