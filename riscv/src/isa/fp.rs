//! F and D: single and double precision floating point.

use super::Entry;
use crate::format::Format as F;

pub const COMMON: &[Entry] = &[
    Entry::op("FLW", "iiiiiiiiiiii sssss 010 ddddd 0000111", F::I),
    Entry::op("FSW", "iiiiiii ttttt sssss 010 iiiii 0100111", F::S),
    Entry::op("FMADD.S", "uuuuu 00 ttttt sssss mmm ddddd 1000011", F::R4),
    Entry::op("FMSUB.S", "uuuuu 00 ttttt sssss mmm ddddd 1000111", F::R4),
    Entry::op("FNMSUB.S", "uuuuu 00 ttttt sssss mmm ddddd 1001011", F::R4),
    Entry::op("FNMADD.S", "uuuuu 00 ttttt sssss mmm ddddd 1001111", F::R4),
    Entry::op("FADD.S", "0000000 ttttt sssss mmm ddddd 1010011", F::RFp),
    Entry::op("FSUB.S", "0000100 ttttt sssss mmm ddddd 1010011", F::RFp),
    Entry::op("FMUL.S", "0001000 ttttt sssss mmm ddddd 1010011", F::RFp),
    Entry::op("FDIV.S", "0001100 ttttt sssss mmm ddddd 1010011", F::RFp),
    Entry::op("FSQRT.S", "0101100 00000 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FSGNJ.S", "0010000 ttttt sssss 000 ddddd 1010011", F::R),
    Entry::op("FSGNJN.S", "0010000 ttttt sssss 001 ddddd 1010011", F::R),
    Entry::op("FSGNJX.S", "0010000 ttttt sssss 010 ddddd 1010011", F::R),
    Entry::op("FMIN.S", "0010100 ttttt sssss 000 ddddd 1010011", F::R),
    Entry::op("FMAX.S", "0010100 ttttt sssss 001 ddddd 1010011", F::R),
    Entry::op("FCVT.W.S", "1100000 00000 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.WU.S", "1100000 00001 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FMV.X.W", "1110000 00000 sssss 000 ddddd 1010011", F::R2),
    Entry::op("FEQ.S", "1010000 ttttt sssss 010 ddddd 1010011", F::R),
    Entry::op("FLT.S", "1010000 ttttt sssss 001 ddddd 1010011", F::R),
    Entry::op("FLE.S", "1010000 ttttt sssss 000 ddddd 1010011", F::R),
    Entry::op("FCLASS.S", "1110000 00000 sssss 001 ddddd 1010011", F::R2),
    Entry::op("FCVT.S.W", "1101000 00000 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.S.WU", "1101000 00001 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FMV.W.X", "1111000 00000 sssss 000 ddddd 1010011", F::R2),
    Entry::op("FLD", "iiiiiiiiiiii sssss 011 ddddd 0000111", F::I),
    Entry::op("FSD", "iiiiiii ttttt sssss 011 iiiii 0100111", F::S),
    Entry::op("FMADD.D", "uuuuu 01 ttttt sssss mmm ddddd 1000011", F::R4),
    Entry::op("FMSUB.D", "uuuuu 01 ttttt sssss mmm ddddd 1000111", F::R4),
    Entry::op("FNMSUB.D", "uuuuu 01 ttttt sssss mmm ddddd 1001011", F::R4),
    Entry::op("FNMADD.D", "uuuuu 01 ttttt sssss mmm ddddd 1001111", F::R4),
    Entry::op("FADD.D", "0000001 ttttt sssss mmm ddddd 1010011", F::RFp),
    Entry::op("FSUB.D", "0000101 ttttt sssss mmm ddddd 1010011", F::RFp),
    Entry::op("FMUL.D", "0001001 ttttt sssss mmm ddddd 1010011", F::RFp),
    Entry::op("FDIV.D", "0001101 ttttt sssss mmm ddddd 1010011", F::RFp),
    Entry::op("FSQRT.D", "0101101 00000 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FSGNJ.D", "0010001 ttttt sssss 000 ddddd 1010011", F::R),
    Entry::op("FSGNJN.D", "0010001 ttttt sssss 001 ddddd 1010011", F::R),
    Entry::op("FSGNJX.D", "0010001 ttttt sssss 010 ddddd 1010011", F::R),
    Entry::op("FMIN.D", "0010101 ttttt sssss 000 ddddd 1010011", F::R),
    Entry::op("FMAX.D", "0010101 ttttt sssss 001 ddddd 1010011", F::R),
    Entry::op("FCVT.S.D", "0100000 00001 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.D.S", "0100001 00000 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FEQ.D", "1010001 ttttt sssss 010 ddddd 1010011", F::R),
    Entry::op("FLT.D", "1010001 ttttt sssss 001 ddddd 1010011", F::R),
    Entry::op("FLE.D", "1010001 ttttt sssss 000 ddddd 1010011", F::R),
    Entry::op("FCLASS.D", "1110001 00000 sssss 001 ddddd 1010011", F::R2),
    Entry::op("FCVT.W.D", "1100001 00000 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.WU.D", "1100001 00001 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.D.W", "1101001 00000 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.D.WU", "1101001 00001 sssss mmm ddddd 1010011", F::RFp1),
];

pub const RV64: &[Entry] = &[
    Entry::op("FCVT.L.S", "1100000 00010 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.LU.S", "1100000 00011 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.S.L", "1101000 00010 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.S.LU", "1101000 00011 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.L.D", "1100001 00010 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.LU.D", "1100001 00011 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FMV.X.D", "1110001 00000 sssss 000 ddddd 1010011", F::R2),
    Entry::op("FCVT.D.L", "1101001 00010 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FCVT.D.LU", "1101001 00011 sssss mmm ddddd 1010011", F::RFp1),
    Entry::op("FMV.D.X", "1111001 00000 sssss 000 ddddd 1010011", F::R2),
];
