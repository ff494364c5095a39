//! Read-only traversal of a built [`crate::DecoderTree`].
//!
//! Visitors see borrowed views of each node, never the nodes themselves, so
//! they can inspect the tree (printers, code generators) but not change it.
//! The walk is depth first, a branch is reported before its children, keyed
//! children come in ascending key order and the fallback comes last.

use crate::declaration::InstructionDeclaration;
use crate::field::OperandField;
use crate::tree::{DecoderTreeNode, Switch};

/// How a node is reached from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Root,
    /// Taken when the parent's switch bits equal the key.
    Key(u32),
    /// Taken when no keyed child matches.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchView<'a> {
    pub depth: usize,
    pub edge: Edge,
    pub mask: u32,
    pub pattern: u32,
    pub switch: Switch,
    /// Keyed children, the fallback not included.
    pub child_count: usize,
    pub has_fallback: bool,
    /// Fields laid out identically by every declaration below this branch.
    pub shared_fields: &'a [OperandField],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafView<'a> {
    pub depth: usize,
    pub edge: Edge,
    pub declaration: &'a InstructionDeclaration,
}

impl LeafView<'_> {
    pub const fn mask(&self) -> u32 {
        self.declaration.mask()
    }

    pub const fn pattern(&self) -> u32 {
        self.declaration.pattern()
    }
}

pub trait DecoderTreeVisitor {
    fn visit_branch(&mut self, branch: &BranchView<'_>);

    fn visit_leaf(&mut self, leaf: &LeafView<'_>);

    /// Called once all children of `branch` have been visited.
    fn leave_branch(&mut self, _branch: &BranchView<'_>) {}
}

pub(crate) fn walk<V: DecoderTreeVisitor + ?Sized>(root: &DecoderTreeNode, visitor: &mut V) {
    walk_node(root, 0, Edge::Root, visitor);
}

fn walk_node<V: DecoderTreeVisitor + ?Sized>(
    node: &DecoderTreeNode,
    depth: usize,
    edge: Edge,
    visitor: &mut V,
) {
    match node {
        DecoderTreeNode::Leaf(declaration) => visitor.visit_leaf(&LeafView {
            depth,
            edge,
            declaration,
        }),
        DecoderTreeNode::Branch(branch) => {
            let view = BranchView {
                depth,
                edge,
                mask: branch.mask,
                pattern: branch.pattern,
                switch: branch.switch,
                child_count: branch.children.len(),
                has_fallback: branch.fallback.is_some(),
                shared_fields: &branch.shared_fields,
            };
            visitor.visit_branch(&view);
            for (key, child) in branch.keys.iter().zip(&branch.children) {
                walk_node(child, depth + 1, Edge::Key(*key), visitor);
            }
            if let Some(fallback) = branch.fallback.as_deref() {
                walk_node(fallback, depth + 1, Edge::Fallback, visitor);
            }
            visitor.leave_branch(&view);
        }
    }
}
