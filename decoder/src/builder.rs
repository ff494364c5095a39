//! # Tree Construction
//!
//! The builder refines the full candidate set recursively. At every node:
//!
//! 1. Bits fixed to the same value by every candidate are folded into the
//!    node's mask/pattern, so one comparison rejects the whole subtree.
//! 2. Among the remaining bits, the ones where candidates disagree are
//!    widened into contiguous groups of bits fixed by exactly the same
//!    candidates, and the best group becomes the node's switch.
//! 3. Candidates are grouped by their value of the switch bits. Candidates
//!    that leave the switch open are copied into every group and into the
//!    fallback child, which catches keys no candidate declares.
//!
//! Groups are ranked, lowest first, by:
//!
//! ```text
//! (left open by someone, largest child, copied candidates, -width, low bit)
//! ```
//!
//! so a group every candidate fixes is preferred, then the most even split,
//! then the widest group, and ties go to the lowest bit position. The ranking
//! only depends on the declarations, so the same table always yields the
//! same tree.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::bitwise::Bits;
use crate::declaration::InstructionDeclaration;
use crate::error::{DecoderError, MalformedReason, Result};
use crate::field::OperandField;
use crate::options::BuildOptions;
use crate::tree::{Branch, DecoderTreeNode, Switch};

/// Bits already decided by the switches on the path from the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Known {
    mask: u32,
    pattern: u32,
}

impl Known {
    const fn with(self, switch: Switch, key: u32) -> Self {
        Self {
            mask: self.mask | switch.mask(),
            pattern: self.pattern | (key << switch.low),
        }
    }
}

/// How one open bit is constrained across the candidates of a node.
#[derive(Debug)]
struct BitProfile {
    /// Positions in the candidate list of the candidates fixing the bit.
    fixers: Vec<usize>,
    ones: usize,
}

impl BitProfile {
    const fn disagrees(&self) -> bool {
        self.ones > 0 && self.ones < self.fixers.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    replicates: bool,
    largest_child: usize,
    replicated: usize,
    width: Reverse<u8>,
    low: u8,
}

pub(crate) struct Builder<'a> {
    declarations: &'a [Arc<InstructionDeclaration>],
    options: BuildOptions,
}

impl<'a> Builder<'a> {
    pub(crate) const fn new(
        declarations: &'a [Arc<InstructionDeclaration>],
        options: BuildOptions,
    ) -> Self {
        Self {
            declarations,
            options,
        }
    }

    pub(crate) fn build(&self) -> Result<DecoderTreeNode> {
        if self.declarations.is_empty() {
            tracing::warn!("refusing to build a decoder tree without declarations");
            return Err(DecoderError::Empty);
        }

        self.validate()?;

        tracing::debug!(
            "building decoder tree from {} declarations (specializations {})",
            self.declarations.len(),
            if self.options.allow_specializations {
                "allowed"
            } else {
                "rejected"
            }
        );

        let candidates = (0..self.declarations.len()).collect();
        self.build_node(candidates, Known::default())
    }

    /// Rejects duplicate names and every pair of declarations some word could
    /// match both of, except admitted specializations.
    fn validate(&self) -> Result<()> {
        let mut names = HashSet::with_capacity(self.declarations.len());
        for declaration in self.declarations {
            if !names.insert(declaration.name()) {
                tracing::warn!("duplicate instruction name `{}`", declaration.name());
                return Err(DecoderError::malformed(
                    declaration.name(),
                    MalformedReason::DuplicateName,
                ));
            }
        }

        for (idx, first) in self.declarations.iter().enumerate() {
            for second in &self.declarations[idx + 1..] {
                if !first.conflicts_with(second) {
                    continue;
                }

                let admitted = self.options.allow_specializations
                    && (first.specializes(second) || second.specializes(first));
                if !admitted {
                    tracing::warn!(
                        "`{}` ({:#010x}/{:#010x}) and `{}` ({:#010x}/{:#010x}) overlap",
                        first.name(),
                        first.mask(),
                        first.pattern(),
                        second.name(),
                        second.mask(),
                        second.pattern()
                    );
                    return Err(DecoderError::ambiguous(first.name(), second.name()));
                }
            }
        }

        Ok(())
    }

    /// `candidates` holds indices into the declarations, ascending.
    fn build_node(&self, candidates: Vec<usize>, known: Known) -> Result<DecoderTreeNode> {
        debug_assert!(candidates.iter().all(|&idx| {
            let declaration = &self.declarations[idx];
            let decided = declaration.mask() & known.mask;
            declaration.pattern() & decided == known.pattern & decided
        }));

        if let [only] = candidates[..] {
            return Ok(DecoderTreeNode::Leaf(Arc::clone(&self.declarations[only])));
        }

        let (mask, pattern) = self.shared_constraint(&candidates);
        match self.pick_switch(&candidates, known, mask) {
            Some(switch) => self.split(candidates, known, mask, pattern, switch),
            None => self.resolve_specialization(&candidates),
        }
    }

    /// Bits fixed to the same value by every candidate.
    fn shared_constraint(&self, candidates: &[usize]) -> (u32, u32) {
        let first = self.declarations[candidates[0]].pattern();
        let mut mask = u32::MAX;
        let mut differing = 0;
        for &idx in candidates {
            let declaration = &self.declarations[idx];
            mask &= declaration.mask();
            differing |= declaration.pattern() ^ first;
        }
        mask &= !differing;
        (mask, first & mask)
    }

    fn pick_switch(&self, candidates: &[usize], known: Known, shared_mask: u32) -> Option<Switch> {
        // Shared bits never disagree, but they are profiled so that a group
        // can reach across them.
        let open = !known.mask;
        let profiles: Vec<Option<BitProfile>> = (0..32_u8)
            .map(|bit| open.is_bit_on(bit).then(|| self.profile(candidates, bit)))
            .collect();

        let mut seeds: Vec<u8> = (0..32_u8)
            .filter(|&bit| profiles[bit as usize].as_ref().is_some_and(BitProfile::disagrees))
            .collect();

        // Nothing left to tell the candidates apart by value: they all
        // overlap, which validation only lets through for specializations.
        // Split on the bits only the more specific ones fix.
        if seeds.is_empty() && self.options.allow_specializations {
            seeds = (0..32_u8)
                .filter(|&bit| {
                    profiles[bit as usize]
                        .as_ref()
                        .is_some_and(|p| !p.fixers.is_empty() && p.fixers.len() < candidates.len())
                })
                .collect();
        }

        let mut best: Option<(Rank, Switch)> = None;
        let mut tried = HashSet::new();
        for seed in seeds {
            let switch = self.widen(seed, &profiles, shared_mask);
            if !tried.insert(switch) {
                continue;
            }

            let Some(profile) = profiles[seed as usize].as_ref() else {
                continue;
            };
            let rank = self.rank(candidates, &profile.fixers, switch);
            if best.is_none_or(|(current, _)| rank < current) {
                best = Some((rank, switch));
            }
        }

        best.map(|(_, switch)| switch)
    }

    fn profile(&self, candidates: &[usize], bit: u8) -> BitProfile {
        let mut fixers = Vec::new();
        let mut ones = 0;
        for (pos, &idx) in candidates.iter().enumerate() {
            let declaration = &self.declarations[idx];
            if declaration.mask().is_bit_on(bit) {
                fixers.push(pos);
                if declaration.pattern().is_bit_on(bit) {
                    ones += 1;
                }
            }
        }
        BitProfile { fixers, ones }
    }

    /// Grows `seed` into the widest run of undecided bits fixed by exactly
    /// the same candidates, down first, then up. Shared bits may sit inside
    /// the run but are trimmed off its ends.
    fn widen(&self, seed: u8, profiles: &[Option<BitProfile>], shared_mask: u32) -> Switch {
        let Some(seed_profile) = profiles[seed as usize].as_ref() else {
            return Switch::new(seed, 1);
        };
        let same = |bit: u8| {
            profiles[bit as usize]
                .as_ref()
                .is_some_and(|p| p.fixers == seed_profile.fixers)
        };

        let max_width = self.options.switch_width();
        let (mut low, mut high) = (seed, seed);
        while high - low + 1 < max_width && low > 0 && same(low - 1) {
            low -= 1;
        }
        while high - low + 1 < max_width && high < 31 && same(high + 1) {
            high += 1;
        }
        while low < seed && shared_mask.is_bit_on(low) {
            low += 1;
        }
        while high > seed && shared_mask.is_bit_on(high) {
            high -= 1;
        }
        Switch::new(low, high - low + 1)
    }

    fn rank(&self, candidates: &[usize], fixers: &[usize], switch: Switch) -> Rank {
        let mut sizes: BTreeMap<u32, usize> = BTreeMap::new();
        for &pos in fixers {
            let key = switch.key(self.declarations[candidates[pos]].pattern());
            *sizes.entry(key).or_default() += 1;
        }

        let replicated = candidates.len() - fixers.len();
        Rank {
            replicates: replicated > 0,
            largest_child: sizes.values().copied().max().unwrap_or(0) + replicated,
            replicated,
            width: Reverse(switch.width),
            low: switch.low,
        }
    }

    fn split(
        &self,
        candidates: Vec<usize>,
        known: Known,
        mask: u32,
        pattern: u32,
        switch: Switch,
    ) -> Result<DecoderTreeNode> {
        let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        let mut wildcards = Vec::new();
        for &idx in &candidates {
            let declaration = &self.declarations[idx];
            if declaration.mask() & switch.mask() == 0 {
                wildcards.push(idx);
            } else {
                debug_assert_eq!(declaration.mask() & switch.mask(), switch.mask());
                groups
                    .entry(switch.key(declaration.pattern()))
                    .or_default()
                    .push(idx);
            }
        }

        tracing::trace!(
            "branch on bits {switch} over {} candidates: {} keys, {} copied",
            candidates.len(),
            groups.len(),
            wildcards.len()
        );

        let mut keys = Vec::with_capacity(groups.len());
        let mut children = Vec::with_capacity(groups.len());
        for (key, mut members) in groups {
            members.extend_from_slice(&wildcards);
            members.sort_unstable();
            children.push(self.build_node(members, known.with(switch, key))?);
            keys.push(key);
        }

        // Every key has a child of its own, nothing can fall through.
        let complete = keys.len() as u64 == 1_u64 << switch.width;
        let fallback = if wildcards.is_empty() || complete {
            None
        } else {
            Some(Box::new(self.build_node(wildcards, known)?))
        };

        Ok(DecoderTreeNode::Branch(Branch {
            mask,
            pattern,
            switch,
            keys,
            children,
            fallback,
            shared_fields: self.shared_fields(&candidates),
        }))
    }

    /// All candidates overlap. With specializations admitted they form a
    /// chain, and once the most specific one is fully decided it owns every
    /// word that reaches this node.
    fn resolve_specialization(&self, candidates: &[usize]) -> Result<DecoderTreeNode> {
        if self.options.allow_specializations {
            let winner = candidates.iter().copied().find(|&idx| {
                let declaration = &self.declarations[idx];
                candidates.iter().all(|&other| {
                    other == idx || declaration.specializes(&self.declarations[other])
                })
            });
            if let Some(idx) = winner {
                tracing::trace!(
                    "`{}` specializes {} other candidates",
                    self.declarations[idx].name(),
                    candidates.len() - 1
                );
                return Ok(DecoderTreeNode::Leaf(Arc::clone(&self.declarations[idx])));
            }
        }

        let first = self.declarations[candidates[0]].name();
        let second = self.declarations[candidates[1]].name();
        tracing::warn!("`{first}` and `{second}` cannot be told apart by any bit");
        Err(DecoderError::ambiguous(first, second))
    }

    fn shared_fields(&self, candidates: &[usize]) -> Vec<OperandField> {
        let Some((first, rest)) = candidates.split_first() else {
            return Vec::new();
        };
        self.declarations[*first]
            .fields()
            .iter()
            .filter(|field| {
                rest.iter()
                    .all(|&idx| self.declarations[idx].fields().contains(*field))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn declarations(table: &[(&str, u32, u32)]) -> Vec<Arc<InstructionDeclaration>> {
        table
            .iter()
            .map(|&(name, mask, pattern)| {
                Arc::new(InstructionDeclaration::new(name, mask, pattern, vec![]).unwrap())
            })
            .collect()
    }

    fn root_switch(node: &DecoderTreeNode) -> Option<Switch> {
        match node {
            DecoderTreeNode::Leaf(_) => None,
            DecoderTreeNode::Branch(branch) => Some(branch.switch),
        }
    }

    #[test]
    fn shared_bits_fold_into_node() {
        let decls = declarations(&[
            ("ADD", 0xFE00_707F, 0x0000_0033),
            ("SUB", 0xFE00_707F, 0x4000_0033),
        ]);
        let builder = Builder::new(&decls, BuildOptions::default());
        assert_eq!(builder.shared_constraint(&[0, 1]), (0xBE00_707F, 0x0000_0033));
    }

    #[test]
    fn prefers_groups_fixed_by_everyone() {
        // Bits 1:0 are fixed by all four, bit 8 only by C and D.
        let decls = declarations(&[
            ("A", 0x003, 0x000),
            ("B", 0x003, 0x001),
            ("C", 0x103, 0x002),
            ("D", 0x103, 0x102),
        ]);
        let root = Builder::new(&decls, BuildOptions::default()).build().unwrap();
        assert_eq!(root_switch(&root), Some(Switch::new(0, 2)));
    }

    #[test]
    fn widens_to_contiguous_groups() {
        let decls = declarations(&[
            ("A", 0xF0, 0x10),
            ("B", 0xF0, 0x20),
            ("C", 0xF0, 0x30),
            ("D", 0xF0, 0x40),
        ]);
        let root = Builder::new(&decls, BuildOptions::default()).build().unwrap();
        // Bit 7 is zero everywhere and gets folded, bits 6:4 are the switch.
        assert_eq!(root_switch(&root), Some(Switch::new(4, 3)));
        assert_eq!(root.mask(), 0x80);
    }

    #[test]
    fn groups_bridge_shared_bits() {
        // Bit 13 is zero for all of them, yet funct3 is switched on as a whole.
        let decls = declarations(&[
            ("ADD", 0xFE00_707F, 0x0000_0033),
            ("SLL", 0xFE00_707F, 0x0000_1033),
            ("XOR", 0xFE00_707F, 0x0000_4033),
        ]);
        let root = Builder::new(&decls, BuildOptions::default()).build().unwrap();
        assert_eq!(root_switch(&root), Some(Switch::new(12, 3)));
        assert_eq!(root.mask(), 0xFE00_207F);
    }

    #[test]
    fn switch_width_is_capped() {
        let decls = declarations(&[("A", 0xFF, 0x0F), ("B", 0xFF, 0xF0)]);
        let options = BuildOptions {
            max_switch_width: 2,
            ..BuildOptions::default()
        };
        let root = Builder::new(&decls, options).build().unwrap();
        // Every bit disagrees, but no group may be wider than two bits.
        assert_eq!(root_switch(&root), Some(Switch::new(0, 2)));
    }

    #[test]
    fn single_bit_switch_has_no_fallback() {
        let decls = declarations(&[("A", 0x3, 0x0), ("B", 0x5, 0x1), ("C", 0x6, 0x6)]);
        let root = Builder::new(&decls, BuildOptions::default()).build().unwrap();
        let DecoderTreeNode::Branch(branch) = root else {
            panic!("expected a branch");
        };
        assert_eq!(branch.switch, Switch::new(0, 1));
        assert_eq!(branch.keys, vec![0, 1]);
        assert!(branch.fallback.is_none());
    }

    #[test]
    fn shared_fields_need_identical_layout() {
        let rd = OperandField::unsigned("rd", [(11, 7)]);
        let decls = vec![
            Arc::new(
                InstructionDeclaration::new(
                    "A",
                    0x7F,
                    0x13,
                    vec![rd.clone(), OperandField::signed("imm", [(31, 20)])],
                )
                .unwrap(),
            ),
            Arc::new(
                InstructionDeclaration::new(
                    "B",
                    0x7F,
                    0x33,
                    vec![rd.clone(), OperandField::unsigned("imm", [(31, 20)])],
                )
                .unwrap(),
            ),
        ];
        let builder = Builder::new(&decls, BuildOptions::default());
        assert_eq!(builder.shared_fields(&[0, 1]), vec![rd]);
    }

    #[test]
    fn specialization_chain_resolves_to_most_specific() {
        let decls = declarations(&[
            ("OP", 0x0000_007F, 0x0000_0033),
            ("ADD", 0xFE00_707F, 0x0000_0033),
            ("ADD_ZERO", 0xFFFF_FFFF, 0x0000_0033),
        ]);
        let builder = Builder::new(&decls, BuildOptions::with_specializations());
        assert!(builder.build().is_ok());
        assert!(matches!(
            builder.resolve_specialization(&[0, 1, 2]),
            Ok(DecoderTreeNode::Leaf(decl)) if decl.name() == "ADD_ZERO"
        ));

        let strict = Builder::new(&decls, BuildOptions::default());
        assert_eq!(strict.build().unwrap_err(), DecoderError::ambiguous("OP", "ADD"));
    }

    #[test]
    fn known_bits_accumulate() {
        let known = Known::default().with(Switch::new(12, 3), 0b101);
        assert_eq!(known, Known { mask: 0x7000, pattern: 0x5000 });
        let known = known.with(Switch::new(0, 2), 0b11);
        assert_eq!(known, Known { mask: 0x7003, pattern: 0x5003 });
    }
}
