//! # Instruction Declarations
//!
//! A declaration describes how one instruction is encoded: which bits of the
//! 32-bit word are fixed (the `mask`), what value those bits must have (the
//! `pattern`), and where its operands live (the `fields`).
//!
//! ```text
//! ADD rd, rs1, rs2
//!
//! 31-25    24-20  19-15  14-12  11-7   6-0
//! [0000000][rs2  ][rs1  ][000  ][rd   ][0110011]
//!
//! mask    = 0xFE00707F  (funct7, funct3 and opcode are fixed)
//! pattern = 0x00000033
//! ```
//!
//! Declarations are validated when they are created and are immutable
//! afterwards.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::bitwise::Bits;
use crate::error::{DecoderError, MalformedReason, Result};
use crate::field::OperandField;

/// Coarse classification of a declaration, reported to consumers but not
/// used for decoding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionKind {
    #[default]
    Normal,

    /// Encoding reserved for hints; executes as a no-op on cores that do not
    /// implement the hint.
    Hint,

    /// Canonical no-op encoding.
    Nop,

    /// Encoding that is defined to raise an illegal-instruction fault.
    Illegal,
}

/// Shape used by serde, converted into a validated declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDeclaration {
    name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    kind: InstructionKind,
    #[serde(default)]
    size: Option<u8>,
    mask: u32,
    pattern: u32,
    #[serde(default)]
    fields: Vec<OperandField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDeclaration", into = "RawDeclaration")]
pub struct InstructionDeclaration {
    name: String,
    display_name: String,
    kind: InstructionKind,
    size: u8,
    mask: u32,
    pattern: u32,
    fields: Vec<OperandField>,
}

impl InstructionDeclaration {
    pub fn new(
        name: impl Into<String>,
        mask: u32,
        pattern: u32,
        fields: Vec<OperandField>,
    ) -> Result<Self> {
        let name = name.into();
        let declaration = Self {
            display_name: name.to_lowercase(),
            size: default_size(pattern),
            kind: InstructionKind::Normal,
            name,
            mask,
            pattern,
            fields,
        };
        declaration
            .validate()
            .map_err(|reason| DecoderError::malformed(&declaration.name, reason))?;
        Ok(declaration)
    }

    /// Creates a declaration from a bit-pattern string such as
    /// `"0000000 ..... ..... 000 ..... 0110011"`.
    ///
    /// `0` and `1` are fixed bits, spaces and `_` are ignored and every other
    /// character is a wildcard. Strings with fewer than 32 significant
    /// characters describe the low bits of the word.
    pub fn from_bit_pattern(
        name: impl Into<String>,
        bit_pattern: &str,
        fields: Vec<OperandField>,
    ) -> Result<Self> {
        let name = name.into();
        let (mask, pattern) = parse_bit_pattern(bit_pattern)
            .ok_or_else(|| {
                DecoderError::malformed(
                    &name,
                    MalformedReason::InvalidBitPattern(bit_pattern.to_owned()),
                )
            })?;
        Self::new(name, mask, pattern, fields)
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: InstructionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_size(mut self, size: u8) -> Result<Self> {
        if size != 2 && size != 4 {
            return Err(DecoderError::malformed(
                &self.name,
                MalformedReason::InvalidSize(size),
            ));
        }
        self.size = size;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub const fn kind(&self) -> InstructionKind {
        self.kind
    }

    /// Encoded length in bytes.
    pub const fn size(&self) -> u8 {
        self.size
    }

    pub const fn mask(&self) -> u32 {
        self.mask
    }

    pub const fn pattern(&self) -> u32 {
        self.pattern
    }

    pub fn fields(&self) -> &[OperandField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&OperandField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    #[inline]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.pattern
    }

    /// Whether some word matches both declarations.
    pub const fn conflicts_with(&self, other: &Self) -> bool {
        let shared = self.mask & other.mask;
        self.pattern & shared == other.pattern & shared
    }

    /// Whether every word matching `self` also matches `other`, while `self`
    /// fixes strictly more bits.
    pub const fn specializes(&self, other: &Self) -> bool {
        self.mask != other.mask
            && self.mask & other.mask == other.mask
            && self.pattern & other.mask == other.pattern
    }

    fn validate(&self) -> std::result::Result<(), MalformedReason> {
        if self.pattern & !self.mask != 0 {
            return Err(MalformedReason::PatternOutsideMask {
                mask: self.mask,
                pattern: self.pattern,
            });
        }

        let mut names = HashSet::with_capacity(self.fields.len());
        let mut used: Vec<(&str, u32)> = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            field.validate()?;

            if !names.insert(field.name()) {
                return Err(MalformedReason::DuplicateField(field.name().to_owned()));
            }

            let bits = field.bit_mask();
            let overlap = bits & self.mask;
            if overlap != 0 {
                return Err(MalformedReason::FieldOverlapsMask {
                    field: field.name().to_owned(),
                    overlap,
                });
            }

            if let Some((other, other_bits)) = used.iter().find(|(_, b)| b & bits != 0) {
                return Err(MalformedReason::FieldsOverlap {
                    first: (*other).to_owned(),
                    second: field.name().to_owned(),
                    overlap: other_bits & bits,
                });
            }
            used.push((field.name(), bits));
        }

        Ok(())
    }
}

impl TryFrom<RawDeclaration> for InstructionDeclaration {
    type Error = DecoderError;

    fn try_from(raw: RawDeclaration) -> Result<Self> {
        let mut declaration = Self::new(raw.name, raw.mask, raw.pattern, raw.fields)?;
        if let Some(display_name) = raw.display_name {
            declaration = declaration.with_display_name(display_name);
        }
        if let Some(size) = raw.size {
            declaration = declaration.with_size(size)?;
        }
        Ok(declaration.with_kind(raw.kind))
    }
}

impl From<InstructionDeclaration> for RawDeclaration {
    fn from(declaration: InstructionDeclaration) -> Self {
        Self {
            name: declaration.name,
            display_name: Some(declaration.display_name),
            kind: declaration.kind,
            size: Some(declaration.size),
            mask: declaration.mask,
            pattern: declaration.pattern,
            fields: declaration.fields,
        }
    }
}

impl Display for InstructionDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name)?;
        for (i, field) in self.fields.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            f.write_str(field.name())?;
        }
        Ok(())
    }
}

/// Encodings whose two lowest bits are not `11` are 16 bits long.
const fn default_size(pattern: u32) -> u8 {
    if pattern & 0b11 == 0b11 { 4 } else { 2 }
}

/// Parses a bit-pattern string into `(mask, pattern)`.
pub fn parse_bit_pattern(bit_pattern: &str) -> Option<(u32, u32)> {
    let mut mask = 0_u32;
    let mut pattern = 0_u32;
    let mut count = 0_u32;

    for c in bit_pattern.chars().filter(|c| !c.is_whitespace() && *c != '_') {
        if count == 32 {
            return None;
        }
        mask <<= 1;
        pattern <<= 1;
        match c {
            '0' => mask |= 1,
            '1' => {
                mask |= 1;
                pattern |= 1;
            }
            c if c.is_ascii_alphabetic() || matches!(c, '.' | '-' | '?') => {}
            _ => return None,
        }
        count += 1;
    }

    (count > 0).then_some((mask, pattern))
}

/// Renders `mask`/`pattern` as a 32-character bit-pattern string.
pub fn format_bit_pattern(mask: u32, pattern: u32) -> String {
    (0..32_u8)
        .rev()
        .map(|i| match (mask.is_bit_on(i), pattern.is_bit_on(i)) {
            (false, _) => '.',
            (true, false) => '0',
            (true, true) => '1',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn add() -> InstructionDeclaration {
        InstructionDeclaration::new(
            "ADD",
            0xFE00_707F,
            0x0000_0033,
            vec![
                OperandField::unsigned("rd", [(11, 7)]),
                OperandField::unsigned("rs1", [(19, 15)]),
                OperandField::unsigned("rs2", [(24, 20)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn parse_patterns() {
        assert_eq!(
            parse_bit_pattern("0000000 ..... ..... 000 ..... 0110011"),
            Some((0xFE00_707F, 0x0000_0033))
        );
        assert_eq!(
            parse_bit_pattern("0100000 sssss fffff 000 ddddd 0110011"),
            Some((0xFE00_707F, 0x4000_0033))
        );
        // Compressed encodings only describe the low half.
        assert_eq!(
            parse_bit_pattern("000 . ..... ..... 01"),
            Some((0xE003, 0x0001))
        );
        assert_eq!(parse_bit_pattern(""), None);
        assert_eq!(parse_bit_pattern("01*"), None);
        assert_eq!(parse_bit_pattern(&"0".repeat(33)), None);
    }

    #[test]
    fn format_patterns() {
        assert_eq!(
            format_bit_pattern(0xFE00_707F, 0x4000_0033),
            "0100000..........000.....0110011"
        );
    }

    #[test]
    fn from_bit_pattern() {
        let decl = InstructionDeclaration::from_bit_pattern(
            "ADD",
            "0000000 ..... ..... 000 ..... 0110011",
            vec![OperandField::unsigned("rd", [(11, 7)])],
        )
        .unwrap();
        assert_eq!(decl.mask(), 0xFE00_707F);
        assert_eq!(decl.pattern(), 0x33);
        assert_eq!(decl.size(), 4);
        assert_eq!(decl.display_name(), "add");

        let err = InstructionDeclaration::from_bit_pattern("BAD", "01#", vec![]).unwrap_err();
        assert_eq!(
            err,
            DecoderError::MalformedDeclaration {
                name: "BAD".to_string(),
                reason: MalformedReason::InvalidBitPattern("01#".to_string()),
            }
        );
    }

    #[test]
    fn compressed_size() {
        let decl =
            InstructionDeclaration::from_bit_pattern("C.NOP", "000 0 00000 00000 01", vec![])
                .unwrap();
        assert_eq!(decl.size(), 2);
    }

    #[test]
    fn pattern_outside_mask() {
        let err = InstructionDeclaration::new("BAD", 0x7F, 0x80, vec![]).unwrap_err();
        assert_eq!(
            err,
            DecoderError::MalformedDeclaration {
                name: "BAD".to_string(),
                reason: MalformedReason::PatternOutsideMask {
                    mask: 0x7F,
                    pattern: 0x80,
                },
            }
        );
    }

    #[test]
    fn field_overlapping_mask() {
        let err = InstructionDeclaration::new(
            "BAD",
            0x7F,
            0x33,
            vec![OperandField::unsigned("rd", [(7, 6)])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DecoderError::MalformedDeclaration {
                name: "BAD".to_string(),
                reason: MalformedReason::FieldOverlapsMask {
                    field: "rd".to_string(),
                    overlap: 1 << 6,
                },
            }
        );
    }

    #[test]
    fn overlapping_fields() {
        let err = InstructionDeclaration::new(
            "BAD",
            0x7F,
            0x33,
            vec![
                OperandField::unsigned("rd", [(11, 7)]),
                OperandField::signed("imm", [(31, 20), (8, 8)]),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DecoderError::MalformedDeclaration {
                name: "BAD".to_string(),
                reason: MalformedReason::FieldsOverlap {
                    first: "rd".to_string(),
                    second: "imm".to_string(),
                    overlap: 1 << 8,
                },
            }
        );
    }

    #[test]
    fn duplicate_field() {
        let err = InstructionDeclaration::new(
            "BAD",
            0x7F,
            0x33,
            vec![
                OperandField::unsigned("rd", [(11, 7)]),
                OperandField::unsigned("rd", [(19, 15)]),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DecoderError::malformed("BAD", MalformedReason::DuplicateField("rd".to_string()))
        );
    }

    #[test]
    fn invalid_size() {
        let err = add().with_size(3).unwrap_err();
        assert_eq!(err, DecoderError::malformed("ADD", MalformedReason::InvalidSize(3)));
    }

    #[test]
    fn conflicts_and_specializations() {
        let add = add();
        let sub = InstructionDeclaration::new("SUB", 0xFE00_707F, 0x4000_0033, vec![]).unwrap();
        let any_op = InstructionDeclaration::new("OP", 0x7F, 0x33, vec![]).unwrap();
        let nop = InstructionDeclaration::new("NOP", 0xFFFF_FFFF, 0x0000_0033, vec![]).unwrap();

        assert!(!add.conflicts_with(&sub));
        assert!(add.conflicts_with(&any_op));
        assert!(add.specializes(&any_op));
        assert!(!any_op.specializes(&add));
        assert!(nop.specializes(&add));
        assert!(!nop.specializes(&sub));
        assert!(!add.specializes(&add));
    }

    #[test]
    fn matches() {
        let add = add();
        assert!(add.matches(0x0000_0033));
        assert!(add.matches(0x00B5_02B3));
        assert!(!add.matches(0x4000_0033));
    }

    #[test]
    fn display() {
        assert_eq!(add().to_string(), "add rd, rs1, rs2");
    }

    #[test]
    fn deserialize_validates() {
        let decl: InstructionDeclaration = serde_json::from_str(
            r#"{
                "name": "ADDI",
                "mask": 28799,
                "pattern": 19,
                "fields": [
                    { "name": "rd", "ranges": [{ "high": 11, "low": 7 }], "signed": false },
                    { "name": "imm", "ranges": [{ "high": 31, "low": 20 }], "signed": true }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(decl.mask(), 0x707F);
        assert_eq!(decl.display_name(), "addi");
        assert_eq!(decl.kind(), InstructionKind::Normal);

        let err = serde_json::from_str::<InstructionDeclaration>(
            r#"{ "name": "BAD", "mask": 127, "pattern": 255 }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("BAD"));
    }

    #[test]
    fn serialize_round_trip() {
        let add = add().with_kind(InstructionKind::Normal);
        let json = serde_json::to_string(&add).unwrap();
        let back: InstructionDeclaration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, add);
    }
}
