use std::fmt::Write;

use decoder::{BranchView, DecoderTreeVisitor, Edge, LeafView, format_bit_pattern};

/// Renders a decoder tree as indented text, one node per line.
///
/// ```text
/// 14:12 over 0xbe00207f/0x00000033 [rd[11:7]]
///   000 -> 30 over 0xbe00707f/0x00000033 [rd[11:7]]
///     0 -> ADD         0000000..........000.....0110011
///     1 -> SUB         0100000..........000.....0110011
///   001 -> SLL         0000000..........001.....0110011
/// ```
#[derive(Debug, Default)]
pub struct TreePrinter {
    out: String,
    /// Switch widths of the open branches, to print keys at their width.
    widths: Vec<u8>,
}

impl TreePrinter {
    pub fn finish(self) -> String {
        self.out
    }

    fn edge(&mut self, depth: usize, edge: Edge) {
        let indent = depth * 2;
        let _ = write!(self.out, "{:indent$}", "");
        match edge {
            Edge::Root => {}
            Edge::Key(key) => {
                let width = self.widths.last().copied().unwrap_or(1) as usize;
                let _ = write!(self.out, "{key:0width$b} -> ");
            }
            Edge::Fallback => self.out.push_str("* -> "),
        }
    }
}

impl DecoderTreeVisitor for TreePrinter {
    fn visit_branch(&mut self, branch: &BranchView<'_>) {
        self.edge(branch.depth, branch.edge);
        let _ = write!(
            self.out,
            "{} over {:#010x}/{:#010x}",
            branch.switch, branch.mask, branch.pattern
        );
        if !branch.shared_fields.is_empty() {
            let fields: Vec<_> = branch.shared_fields.iter().map(ToString::to_string).collect();
            let _ = write!(self.out, " [{}]", fields.join(", "));
        }
        self.out.push('\n');
        self.widths.push(branch.switch.width);
    }

    fn visit_leaf(&mut self, leaf: &LeafView<'_>) {
        self.edge(leaf.depth, leaf.edge);
        let _ = writeln!(
            self.out,
            "{:<12}{}",
            leaf.declaration.name(),
            format_bit_pattern(leaf.mask(), leaf.pattern())
        );
    }

    fn leave_branch(&mut self, _branch: &BranchView<'_>) {
        self.widths.pop();
    }
}
