//! # Decoder Tree
//!
//! The tree is built once from the full declaration table and then queried
//! for every fetched instruction word.
//!
//! ```text
//!                 Branch  mask/pattern: bits shared by everything below
//!                 switch: bits 6:0
//!        ┌──────────────┼──────────────────┐
//!   key 0x13        key 0x33          (fallback)
//!    Branch          Branch         declarations that leave
//!  switch 14:12    switch 31:25     bits 6:0 unconstrained
//!   ┌───┴───┐       ┌───┴───┐
//!  ADDI   SLTI     ADD     SUB
//! ```
//!
//! A query tests the branch mask/pattern first, which rejects whole subtrees
//! in one comparison, then follows the child whose key equals the switch bits
//! of the word. Leaves confirm their declaration's full mask/pattern, since
//! bits constrained by a single declaration are never tested higher up.

use std::sync::Arc;

use crate::builder::Builder;
use crate::declaration::InstructionDeclaration;
use crate::decoded::{DecodedInstruction, extract};
use crate::error::Result;
use crate::field::OperandField;
use crate::options::BuildOptions;
use crate::visitor::{self, DecoderTreeVisitor};

/// A contiguous group of bits a branch switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Switch {
    pub low: u8,
    pub width: u8,
}

impl Switch {
    pub const fn new(low: u8, width: u8) -> Self {
        Self { low, width }
    }

    pub const fn high(self) -> u8 {
        self.low + self.width - 1
    }

    pub const fn mask(self) -> u32 {
        crate::bitwise::field_mask(self.low, self.width)
    }

    /// The switch bits of `word`, moved down to position 0.
    #[inline]
    pub const fn key(self, word: u32) -> u32 {
        (word & self.mask()) >> self.low
    }
}

impl std::fmt::Display for Switch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.width == 1 {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}:{}", self.high(), self.low)
        }
    }
}

#[derive(Debug)]
pub(crate) enum DecoderTreeNode {
    Leaf(Arc<InstructionDeclaration>),
    Branch(Branch),
}

#[derive(Debug)]
pub(crate) struct Branch {
    pub(crate) mask: u32,
    pub(crate) pattern: u32,
    pub(crate) switch: Switch,
    /// Sorted ascending, parallel to `children`.
    pub(crate) keys: Vec<u32>,
    pub(crate) children: Vec<DecoderTreeNode>,
    pub(crate) fallback: Option<Box<DecoderTreeNode>>,
    /// Fields with the same layout in every declaration below.
    pub(crate) shared_fields: Vec<OperandField>,
}

impl Branch {
    #[inline]
    fn select(&self, word: u32) -> Option<&DecoderTreeNode> {
        if word & self.mask != self.pattern {
            return None;
        }

        match self.keys.binary_search(&self.switch.key(word)) {
            Ok(idx) => Some(&self.children[idx]),
            Err(_) => self.fallback.as_deref(),
        }
    }
}

impl DecoderTreeNode {
    pub(crate) fn mask(&self) -> u32 {
        match self {
            Self::Leaf(declaration) => declaration.mask(),
            Self::Branch(branch) => branch.mask,
        }
    }

    pub(crate) fn pattern(&self) -> u32 {
        match self {
            Self::Leaf(declaration) => declaration.pattern(),
            Self::Branch(branch) => branch.pattern,
        }
    }

    pub(crate) fn max_depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(branch) => {
                1 + branch
                    .children
                    .iter()
                    .chain(branch.fallback.as_deref())
                    .map(Self::max_depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(branch) => {
                1 + branch
                    .children
                    .iter()
                    .chain(branch.fallback.as_deref())
                    .map(Self::node_count)
                    .sum::<usize>()
            }
        }
    }
}

/// Immutable decision tree over a set of instruction declarations.
///
/// Built once, then shared freely between threads: every operation on a built
/// tree is a read-only traversal.
#[derive(Debug)]
pub struct DecoderTree {
    root: DecoderTreeNode,
    declarations: Vec<Arc<InstructionDeclaration>>,
    node_count: usize,
    max_depth: usize,
}

impl DecoderTree {
    /// Builds a tree that rejects every overlapping pair of declarations.
    pub fn build<I>(declarations: I) -> Result<Self>
    where
        I: IntoIterator<Item = InstructionDeclaration>,
    {
        Self::build_with(declarations, &BuildOptions::default())
    }

    pub fn build_with<I>(declarations: I, options: &BuildOptions) -> Result<Self>
    where
        I: IntoIterator<Item = InstructionDeclaration>,
    {
        let declarations: Vec<_> = declarations.into_iter().map(Arc::new).collect();
        let root = Builder::new(&declarations, *options).build()?;
        let node_count = root.node_count();
        let max_depth = root.max_depth();

        tracing::info!(
            "decoder tree built: {} declarations, {node_count} nodes, max depth {max_depth}",
            declarations.len()
        );

        Ok(Self {
            root,
            declarations,
            node_count,
            max_depth,
        })
    }

    /// Finds the declaration matching `word`, `None` for an undefined encoding.
    #[inline]
    pub fn query(&self, word: u32) -> Option<&InstructionDeclaration> {
        let mut node = &self.root;
        loop {
            match node {
                DecoderTreeNode::Leaf(declaration) => {
                    return declaration.matches(word).then_some(declaration.as_ref());
                }
                DecoderTreeNode::Branch(branch) => node = branch.select(word)?,
            }
        }
    }

    /// Number of nodes a query for `word` visits, whatever its outcome.
    pub fn query_steps(&self, word: u32) -> usize {
        let mut node = &self.root;
        let mut steps = 1;
        while let DecoderTreeNode::Branch(branch) = node {
            match branch.select(word) {
                Some(next) => node = next,
                None => break,
            }
            steps += 1;
        }
        steps
    }

    /// Queries `word` and extracts the operand fields of the match.
    pub fn decode(&self, word: u32) -> Option<DecodedInstruction<'_>> {
        self.query(word).map(|declaration| extract(declaration, word))
    }

    /// Walks the tree depth first, parents before children.
    pub fn accept<V: DecoderTreeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor::walk(&self.root, visitor);
    }

    /// The declarations the tree was built from, in their original order.
    pub fn declarations(&self) -> impl ExactSizeIterator<Item = &InstructionDeclaration> {
        self.declarations.iter().map(AsRef::as_ref)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of branches between the root and the deepest leaf.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Mask/pattern every decodable word satisfies.
    pub fn root_constraint(&self) -> (u32, u32) {
        (self.root.mask(), self.root.pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecoderError;
    use crate::field::OperandField;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    fn r_type(name: &str, funct7: u32, funct3: u32) -> InstructionDeclaration {
        InstructionDeclaration::new(
            name,
            0xFE00_707F,
            (funct7 << 25) | (funct3 << 12) | 0x33,
            vec![
                OperandField::unsigned("rd", [(11, 7)]),
                OperandField::unsigned("rs1", [(19, 15)]),
                OperandField::unsigned("rs2", [(24, 20)]),
            ],
        )
        .unwrap()
    }

    fn i_type(name: &str, funct3: u32) -> InstructionDeclaration {
        InstructionDeclaration::new(
            name,
            0x0000_707F,
            (funct3 << 12) | 0x13,
            vec![
                OperandField::unsigned("rd", [(11, 7)]),
                OperandField::unsigned("rs1", [(19, 15)]),
                OperandField::signed("imm", [(31, 20)]),
            ],
        )
        .unwrap()
    }

    fn add_sub() -> DecoderTree {
        DecoderTree::build([r_type("ADD", 0x00, 0), r_type("SUB", 0x20, 0)]).unwrap()
    }

    #[test]
    fn switch_keys() {
        let switch = Switch::new(25, 7);
        assert_eq!(switch.mask(), 0xFE00_0000);
        assert_eq!(switch.high(), 31);
        assert_eq!(switch.key(0x4000_0033), 0x20);
        assert_eq!(switch.to_string(), "31:25");
        assert_eq!(Switch::new(4, 1).to_string(), "4");
    }

    #[test]
    fn add_and_sub() {
        let tree = add_sub();
        assert_eq!(tree.query(0x0000_0033).map(InstructionDeclaration::name), Some("ADD"));
        assert_eq!(tree.query(0x4000_0033).map(InstructionDeclaration::name), Some("SUB"));
        // add x5, x10, x11
        assert_eq!(tree.query(0x00B5_02B3).map(InstructionDeclaration::name), Some("ADD"));
    }

    #[test]
    fn add_and_sub_share_root_constraint() {
        let tree = add_sub();
        // Only funct7 bit 30 differs, everything else fixed is shared.
        assert_eq!(tree.root_constraint(), (0xBE00_707F, 0x0000_0033));
        assert_eq!(tree.max_depth(), 1);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn undefined_encodings() {
        let tree = add_sub();
        // funct3 = 1 with funct7 = 0 is declared by nobody.
        assert_eq!(tree.query(0x0000_1033), None);
        // funct7 = 0x01 is MUL in the full ISA, not here.
        assert_eq!(tree.query(0x0200_0033), None);
        assert_eq!(tree.query(0xFFFF_FFFF), None);
        assert_eq!(tree.query(0), None);
    }

    #[test]
    fn single_declaration() {
        let tree = DecoderTree::build([i_type("ADDI", 0)]).unwrap();
        assert_eq!(tree.max_depth(), 0);
        assert_eq!(tree.query(0xFFF0_0093).map(InstructionDeclaration::name), Some("ADDI"));
        assert_eq!(tree.query(0x0000_1013), None);
        assert_eq!(tree.query_steps(0x0000_1013), 1);
    }

    #[test]
    fn mixed_formats() {
        let tree = DecoderTree::build([
            r_type("ADD", 0x00, 0),
            r_type("SUB", 0x20, 0),
            r_type("SLL", 0x00, 1),
            r_type("MUL", 0x01, 0),
            i_type("ADDI", 0),
            i_type("SLTI", 2),
            i_type("XORI", 4),
        ])
        .unwrap();

        let expect = [
            (0x0000_0033, Some("ADD")),
            (0x4000_0033, Some("SUB")),
            (0x0000_1033, Some("SLL")),
            (0x0200_0033, Some("MUL")),
            (0xFFF0_0013, Some("ADDI")),
            (0x0010_2013, Some("SLTI")),
            (0x0000_4013, Some("XORI")),
            (0x0000_1013, None),
            (0x4000_1033, None),
            (0x0000_0037, None),
        ];
        for (word, name) in expect {
            assert_eq!(
                tree.query(word).map(InstructionDeclaration::name),
                name,
                "word {word:#010x}"
            );
        }
    }

    #[test]
    fn wildcard_declarations_reachable_through_fallback() {
        // No bit is fixed by all three, so the root switches on bits 1..0
        // which C leaves open: C is copied under every key and also sits in
        // the fallback for the keys nobody declares.
        let tree = DecoderTree::build([
            InstructionDeclaration::new("A", 0x13, 0x00, vec![]).unwrap(),
            InstructionDeclaration::new("B", 0x23, 0x01, vec![]).unwrap(),
            InstructionDeclaration::new("C", 0x30, 0x30, vec![]).unwrap(),
        ])
        .unwrap();

        assert_eq!(tree.query(0x00).map(InstructionDeclaration::name), Some("A"));
        assert_eq!(tree.query(0x01).map(InstructionDeclaration::name), Some("B"));
        assert_eq!(tree.query(0x31).map(InstructionDeclaration::name), Some("C"));
        // Key 0b11 has no child of its own.
        assert_eq!(tree.query(0x33).map(InstructionDeclaration::name), Some("C"));
        assert_eq!(tree.query(0x03), None);
        assert_eq!(tree.query(0x10), None);
    }

    #[test]
    fn identical_declarations_are_ambiguous() {
        let err = DecoderTree::build([r_type("ADD", 0, 0), r_type("ALSO_ADD", 0, 0)]).unwrap_err();
        assert_eq!(
            err,
            DecoderError::AmbiguousInstruction {
                first: "ADD".to_string(),
                second: "ALSO_ADD".to_string(),
            }
        );
    }

    #[test]
    fn overlapping_declarations_are_ambiguous() {
        let nop = InstructionDeclaration::new("NOP", 0xFFFF_FFFF, 0x0000_0013, vec![]).unwrap();
        let err = DecoderTree::build([i_type("ADDI", 0), nop]).unwrap_err();
        assert_eq!(err, DecoderError::ambiguous("ADDI", "NOP"));
    }

    #[test]
    fn specializations_when_allowed() {
        let nop = InstructionDeclaration::new("NOP", 0xFFFF_FFFF, 0x0000_0013, vec![]).unwrap();
        let tree = DecoderTree::build_with(
            [i_type("ADDI", 0), nop, i_type("SLTI", 2)],
            &BuildOptions::with_specializations(),
        )
        .unwrap();

        assert_eq!(tree.query(0x0000_0013).map(InstructionDeclaration::name), Some("NOP"));
        assert_eq!(tree.query(0x0000_0093).map(InstructionDeclaration::name), Some("ADDI"));
        assert_eq!(tree.query(0x0010_0013).map(InstructionDeclaration::name), Some("ADDI"));
        assert_eq!(tree.query(0x0000_2013).map(InstructionDeclaration::name), Some("SLTI"));
    }

    #[test]
    fn crossing_overlaps_rejected_even_when_specializations_allowed() {
        // Each fixes a bit the other leaves open, neither is more specific.
        let a = InstructionDeclaration::new("A", 0x0000_017F, 0x0000_0013, vec![]).unwrap();
        let b = InstructionDeclaration::new("B", 0x0000_027F, 0x0000_0013, vec![]).unwrap();
        let err =
            DecoderTree::build_with([a, b], &BuildOptions::with_specializations()).unwrap_err();
        assert_eq!(err, DecoderError::ambiguous("A", "B"));
    }

    #[test]
    fn empty_table() {
        assert_eq!(DecoderTree::build(Vec::new()).unwrap_err(), DecoderError::Empty);
    }

    #[test]
    fn duplicate_names() {
        let err = DecoderTree::build([r_type("ADD", 0, 0), r_type("ADD", 0x20, 0)]).unwrap_err();
        assert_eq!(
            err,
            DecoderError::malformed("ADD", crate::error::MalformedReason::DuplicateName)
        );
    }

    #[test]
    fn query_steps_follow_depth() {
        let tree = add_sub();
        assert_eq!(tree.query_steps(0x0000_0033), 2);
        // Rejected by the root mask/pattern.
        assert_eq!(tree.query_steps(0x0000_0013), 1);
    }

    #[test]
    fn decode_extracts_fields() {
        let tree = DecoderTree::build([i_type("ADDI", 0), i_type("SLTI", 2)]).unwrap();
        // addi x5, x0, -1
        let decoded = tree.decode(0xFFF0_0293).unwrap();
        assert_eq!(decoded.declaration().name(), "ADDI");
        assert_eq!(decoded.get("rd"), Some(5));
        assert_eq!(decoded.get("rs1"), Some(0));
        assert_eq!(decoded.get("imm"), Some(-1));
        assert!(tree.decode(0x0000_1013).is_none());
    }

    #[test]
    fn declarations_keep_order() {
        let tree = add_sub();
        let names: Vec<_> = tree.declarations().map(InstructionDeclaration::name).collect();
        assert_eq!(names, vec!["ADD", "SUB"]);
        assert_eq!(tree.len(), 2);
        assert!(!tree.is_empty());
    }

    #[test]
    fn tree_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DecoderTree>();

        let tree = std::sync::Arc::new(add_sub());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let tree = std::sync::Arc::clone(&tree);
                std::thread::spawn(move || {
                    let word = if i % 2 == 0 { 0x0000_0033 } else { 0x4000_0033 };
                    tree.query(word).map(|d| d.name().to_string())
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = if i % 2 == 0 { "ADD" } else { "SUB" };
            assert_eq!(handle.join().unwrap().as_deref(), Some(expected));
        }
    }

    /// Sparse declarations over the low 12 bits. Overlapping candidates are
    /// dropped unless `specializations` is set and one strictly specializes
    /// the other.
    fn random_table(rng: &mut impl Rng, specializations: bool) -> Vec<InstructionDeclaration> {
        let mut table: Vec<InstructionDeclaration> = Vec::new();
        for i in 0..24 {
            let mask = rng.random::<u32>() & rng.random::<u32>() & 0xFFF;
            let pattern = rng.random::<u32>() & mask;
            let candidate = InstructionDeclaration::new(format!("D{i}"), mask, pattern, vec![])
                .unwrap();
            let fits = table.iter().all(|d| {
                !d.conflicts_with(&candidate)
                    || (specializations
                        && (d.specializes(&candidate) || candidate.specializes(d)))
            });
            if fits {
                table.push(candidate);
            }
        }
        table
    }

    fn most_specific(table: &[InstructionDeclaration], word: u32) -> Option<&str> {
        table
            .iter()
            .filter(|d| d.matches(word))
            .max_by_key(|d| d.mask().count_ones())
            .map(InstructionDeclaration::name)
    }

    #[test]
    fn random_tables_match_linear_scan() {
        let mut rng = rand::rng();
        for options in [BuildOptions::strict(), BuildOptions::with_specializations()] {
            for _ in 0..200 {
                let table = random_table(&mut rng, options.allow_specializations);
                let tree = DecoderTree::build_with(table.clone(), &options).unwrap();
                assert!(tree.max_depth() <= 32);

                for word in 0..0x1000 {
                    assert_eq!(
                        tree.query(word).map(InstructionDeclaration::name),
                        most_specific(&table, word),
                        "word {word:#05x} in {table:?}"
                    );
                }
            }
        }
    }
}
