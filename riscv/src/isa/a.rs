use super::Entry;
use crate::format::Format as F;

pub const COMMON: &[Entry] = &[
    Entry::op("LR.W", "00010 a r 00000 sssss 010 ddddd 0101111", F::Lr),
    Entry::op("SC.W", "00011 a r ttttt sssss 010 ddddd 0101111", F::Amo),
    Entry::op("AMOSWAP.W", "00001 a r ttttt sssss 010 ddddd 0101111", F::Amo),
    Entry::op("AMOADD.W", "00000 a r ttttt sssss 010 ddddd 0101111", F::Amo),
    Entry::op("AMOXOR.W", "00100 a r ttttt sssss 010 ddddd 0101111", F::Amo),
    Entry::op("AMOAND.W", "01100 a r ttttt sssss 010 ddddd 0101111", F::Amo),
    Entry::op("AMOOR.W", "01000 a r ttttt sssss 010 ddddd 0101111", F::Amo),
    Entry::op("AMOMIN.W", "10000 a r ttttt sssss 010 ddddd 0101111", F::Amo),
    Entry::op("AMOMAX.W", "10100 a r ttttt sssss 010 ddddd 0101111", F::Amo),
    Entry::op("AMOMINU.W", "11000 a r ttttt sssss 010 ddddd 0101111", F::Amo),
    Entry::op("AMOMAXU.W", "11100 a r ttttt sssss 010 ddddd 0101111", F::Amo),
];

pub const RV64: &[Entry] = &[
    Entry::op("LR.D", "00010 a r 00000 sssss 011 ddddd 0101111", F::Lr),
    Entry::op("SC.D", "00011 a r ttttt sssss 011 ddddd 0101111", F::Amo),
    Entry::op("AMOSWAP.D", "00001 a r ttttt sssss 011 ddddd 0101111", F::Amo),
    Entry::op("AMOADD.D", "00000 a r ttttt sssss 011 ddddd 0101111", F::Amo),
    Entry::op("AMOXOR.D", "00100 a r ttttt sssss 011 ddddd 0101111", F::Amo),
    Entry::op("AMOAND.D", "01100 a r ttttt sssss 011 ddddd 0101111", F::Amo),
    Entry::op("AMOOR.D", "01000 a r ttttt sssss 011 ddddd 0101111", F::Amo),
    Entry::op("AMOMIN.D", "10000 a r ttttt sssss 011 ddddd 0101111", F::Amo),
    Entry::op("AMOMAX.D", "10100 a r ttttt sssss 011 ddddd 0101111", F::Amo),
    Entry::op("AMOMINU.D", "11000 a r ttttt sssss 011 ddddd 0101111", F::Amo),
    Entry::op("AMOMAXU.D", "11100 a r ttttt sssss 011 ddddd 0101111", F::Amo),
];
