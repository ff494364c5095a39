//! Decision-tree decoding of fixed-width instruction words.
//!
//! A table of [`InstructionDeclaration`]s, each a mask/pattern pair plus the
//! operand fields it carries, is compiled once into a [`DecoderTree`]. The
//! tree then maps any 32-bit word to the single declaration it matches, or to
//! nothing, visiting far fewer nodes than a linear scan of the table would.
//!
//! ```
//! use decoder::{DecoderTree, InstructionDeclaration, OperandField};
//!
//! let fields = vec![
//!     OperandField::unsigned("rd", [(11, 7)]),
//!     OperandField::unsigned("rs1", [(19, 15)]),
//!     OperandField::unsigned("rs2", [(24, 20)]),
//! ];
//! let tree = DecoderTree::build([
//!     InstructionDeclaration::new("ADD", 0xFE00_707F, 0x0000_0033, fields.clone())?,
//!     InstructionDeclaration::new("SUB", 0xFE00_707F, 0x4000_0033, fields)?,
//! ])?;
//!
//! let decoded = tree.decode(0x40B5_02B3).unwrap();
//! assert_eq!(decoded.to_string(), "sub rd=5, rs1=10, rs2=11");
//! assert!(tree.query(0x0000_1033).is_none());
//! # Ok::<(), decoder::DecoderError>(())
//! ```

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_wrap)]
mod bitwise;

mod builder;

#[allow(clippy::cast_possible_truncation)]
pub mod declaration;

pub mod decoded;
pub mod error;

#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::cast_lossless)]
pub mod field;

pub mod options;

#[allow(clippy::cast_possible_truncation)]
pub mod tree;
pub mod visitor;

pub use declaration::{
    InstructionDeclaration, InstructionKind, format_bit_pattern, parse_bit_pattern,
};
pub use decoded::{DecodedInstruction, extract};
pub use error::{DecoderError, MalformedReason, Result};
pub use field::{BitRange, OperandField};
pub use options::BuildOptions;
pub use tree::{DecoderTree, Switch};
pub use visitor::{BranchView, DecoderTreeVisitor, Edge, LeafView};

/// Builds a tree with the default, strict, [`BuildOptions`].
pub fn build<I>(declarations: I) -> Result<DecoderTree>
where
    I: IntoIterator<Item = InstructionDeclaration>,
{
    DecoderTree::build(declarations)
}
