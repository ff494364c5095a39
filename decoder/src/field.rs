//! # Operand Fields
//!
//! An operand field names the bits of an instruction word that carry one
//! operand. Most fields are a single contiguous range, but immediates are
//! often scattered over the word and are described as several ranges:
//!
//! ```text
//! S-type immediate: imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode
//!                   31....25                        11.....7
//!
//! OperandField::signed("imm", [(31, 25), (11, 7)])
//! ```
//!
//! Ranges are concatenated in declaration order, the first range ending up in
//! the most significant position. The order is part of the field and never
//! sorted by bit position.

use serde::{Deserialize, Serialize};

use crate::bitwise::{Bits, field_mask};
use crate::error::MalformedReason;

/// An inclusive `high:low` range of bits of an instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitRange {
    pub high: u8,
    pub low: u8,
}

impl BitRange {
    pub const fn new(high: u8, low: u8) -> Self {
        Self { high, low }
    }

    pub const fn is_valid(self) -> bool {
        self.high >= self.low && self.high < 32
    }

    pub const fn width(self) -> u8 {
        self.high - self.low + 1
    }

    pub const fn mask(self) -> u32 {
        field_mask(self.low, self.width())
    }
}

impl From<(u8, u8)> for BitRange {
    fn from((high, low): (u8, u8)) -> Self {
        Self::new(high, low)
    }
}

impl std::fmt::Display for BitRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.high == self.low {
            write!(f, "{}", self.high)
        } else {
            write!(f, "{}:{}", self.high, self.low)
        }
    }
}

/// A named operand encoded in one or more bit ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperandField {
    name: String,
    ranges: Vec<BitRange>,
    signed: bool,
}

impl OperandField {
    pub fn new<R>(
        name: impl Into<String>,
        ranges: impl IntoIterator<Item = R>,
        signed: bool,
    ) -> Self
    where
        R: Into<BitRange>,
    {
        Self {
            name: name.into(),
            ranges: ranges.into_iter().map(Into::into).collect(),
            signed,
        }
    }

    pub fn unsigned<R: Into<BitRange>>(
        name: impl Into<String>,
        ranges: impl IntoIterator<Item = R>,
    ) -> Self {
        Self::new(name, ranges, false)
    }

    pub fn signed<R: Into<BitRange>>(
        name: impl Into<String>,
        ranges: impl IntoIterator<Item = R>,
    ) -> Self {
        Self::new(name, ranges, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ranges(&self) -> &[BitRange] {
        &self.ranges
    }

    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Total number of bits of the decoded value.
    pub fn width(&self) -> u32 {
        self.ranges.iter().map(|r| u32::from(r.width())).sum()
    }

    /// Every bit of the word this field reads.
    pub fn bit_mask(&self) -> u32 {
        self.ranges.iter().fold(0, |acc, r| acc | r.mask())
    }

    /// Checks the field on its own; overlaps with the fixed bits and with the
    /// other fields are checked by the owning declaration.
    pub(crate) fn validate(&self) -> Result<(), MalformedReason> {
        let mut seen = 0_u32;
        for range in &self.ranges {
            if !range.is_valid() {
                return Err(MalformedReason::InvalidRange {
                    field: self.name.clone(),
                    high: range.high,
                    low: range.low,
                });
            }
            let overlap = seen & range.mask();
            if overlap != 0 {
                return Err(MalformedReason::FieldsOverlap {
                    first: self.name.clone(),
                    second: self.name.clone(),
                    overlap,
                });
            }
            seen |= range.mask();
        }

        let width = self.width();
        if width == 0 || width > 32 {
            return Err(MalformedReason::InvalidFieldWidth {
                field: self.name.clone(),
                width,
            });
        }

        Ok(())
    }

    /// Gathers the field's bits from `word` and sign-extends them if the
    /// field is signed. Only validated fields, those owned by a declaration,
    /// reach this; see [`crate::extract`].
    #[inline]
    pub(crate) fn extract(&self, word: u32) -> i64 {
        let mut value = 0_u64;
        for range in &self.ranges {
            value = (value << range.width()) | u64::from(word.get_bits(range.low..=range.high));
        }

        if self.signed {
            // The width is at most 32 bits once validated.
            value.sign_extended(self.width() as u8) as i64
        } else {
            value as i64
        }
    }
}

impl std::fmt::Display for OperandField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[", self.name)?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{range}")?;
        }
        f.write_str("]")?;
        if self.signed {
            f.write_str("s")?;
        }
        Ok(())
    }
}
