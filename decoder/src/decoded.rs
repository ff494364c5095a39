use std::fmt::{Display, Formatter};

use crate::declaration::InstructionDeclaration;

/// A matched declaration together with the operand values read from the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction<'a> {
    declaration: &'a InstructionDeclaration,
    word: u32,
    /// Parallel to `declaration.fields()`.
    values: Vec<i64>,
}

impl<'a> DecodedInstruction<'a> {
    pub const fn declaration(&self) -> &'a InstructionDeclaration {
        self.declaration
    }

    pub const fn word(&self) -> u32 {
        self.word
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.declaration
            .fields()
            .iter()
            .position(|field| field.name() == name)
            .map(|idx| self.values[idx])
    }

    /// `(name, value)` pairs in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, i64)> + '_ {
        self.declaration
            .fields()
            .iter()
            .zip(&self.values)
            .map(|(field, value)| (field.name(), *value))
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

impl Display for DecodedInstruction<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.declaration.display_name())?;
        for (i, (name, value)) in self.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

/// Reads every operand field of `declaration` out of `word`.
///
/// `word` is expected to match the declaration; fields are read regardless.
pub fn extract(declaration: &InstructionDeclaration, word: u32) -> DecodedInstruction<'_> {
    DecodedInstruction {
        declaration,
        word,
        values: declaration
            .fields()
            .iter()
            .map(|field| field.extract(word))
            .collect(),
    }
}
