use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecoderError>;

/// Faults in the declaration table. All of them are detected while building
/// and abort the build; a word that matches nothing is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecoderError {
    #[error("malformed instruction declaration `{name}`: {reason}")]
    MalformedDeclaration { name: String, reason: MalformedReason },

    #[error("instructions `{first}` and `{second}` cannot be told apart")]
    AmbiguousInstruction { first: String, second: String },

    #[error("no instruction declarations to build a decoder tree from")]
    Empty,
}

impl DecoderError {
    pub(crate) fn malformed(name: &str, reason: MalformedReason) -> Self {
        Self::MalformedDeclaration {
            name: name.to_owned(),
            reason,
        }
    }

    pub(crate) fn ambiguous(first: &str, second: &str) -> Self {
        Self::AmbiguousInstruction {
            first: first.to_owned(),
            second: second.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("pattern {pattern:#010x} has bits outside mask {mask:#010x}")]
    PatternOutsideMask { mask: u32, pattern: u32 },

    #[error("field `{field}` overlaps fixed bits {overlap:#010x}")]
    FieldOverlapsMask { field: String, overlap: u32 },

    #[error("fields `{first}` and `{second}` overlap at bits {overlap:#010x}")]
    FieldsOverlap {
        first: String,
        second: String,
        overlap: u32,
    },

    #[error("field `{field}` has invalid bit range {high}:{low}")]
    InvalidRange { field: String, high: u8, low: u8 },

    #[error("field `{field}` is {width} bits wide, expected 1 to 32")]
    InvalidFieldWidth { field: String, width: u32 },

    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("name is used by more than one declaration")]
    DuplicateName,

    #[error("invalid bit pattern `{0}`")]
    InvalidBitPattern(String),

    #[error("invalid instruction size {0}, expected 2 or 4 bytes")]
    InvalidSize(u8),
}
