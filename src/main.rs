use std::{env, error, process};

use decoder::{BranchView, DecoderTree, DecoderTreeVisitor, InstructionKind, LeafView};
use riscv::Xlen;

mod logging;
mod printer;

use logging::LogKind;
use printer::TreePrinter;

const USAGE: &str = "usage: dectree [--rv32] [--log-file] <print | stats | decode <word>...>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Print,
    Stats,
    Decode(Vec<u32>),
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    xlen: Xlen,
    log: LogKind,
    command: Command,
}

fn main() {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            process::exit(1);
        }
    };

    let guard = logging::init(args.log);
    let result = run(&args);
    drop(guard);

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(2);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn error::Error>> {
    tracing::debug!("{:?} on {}", args.command, args.xlen);
    let tree = riscv::decoder_tree(args.xlen)?;

    match &args.command {
        Command::Print => {
            let mut printer = TreePrinter::default();
            tree.accept(&mut printer);
            print!("{}", printer.finish());
        }
        Command::Stats => print_stats(args.xlen, tree),
        Command::Decode(words) => {
            for &word in words {
                match tree.decode(word) {
                    Some(decoded) => println!("{word:#010x}  {decoded}"),
                    None => println!("{word:#010x}  <undefined>"),
                }
            }
        }
    }

    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut xlen = Xlen::Rv64;
    let mut log = LogKind::Stderr;
    let mut positional = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--rv32" => xlen = Xlen::Rv32,
            "--rv64" => xlen = Xlen::Rv64,
            "--log-file" => log = LogKind::File,
            flag if flag.starts_with("--") => return Err(format!("unknown flag `{flag}`")),
            _ => positional.push(arg),
        }
    }

    let Some((command, rest)) = positional.split_first() else {
        return Err("no command given".to_string());
    };
    let command = match command.as_str() {
        "print" => Command::Print,
        "stats" => Command::Stats,
        "decode" if rest.is_empty() => return Err("nothing to decode".to_string()),
        "decode" => Command::Decode(rest.iter().map(|w| parse_word(w)).collect::<Result<_, _>>()?),
        other => return Err(format!("unknown command `{other}`")),
    };
    if !matches!(command, Command::Decode(_)) && !rest.is_empty() {
        return Err(format!("unexpected argument `{}`", rest[0]));
    }

    Ok(Args { xlen, log, command })
}

/// Accepts `0x`-prefixed hex or plain decimal.
fn parse_word(word: &str) -> Result<u32, String> {
    let parsed = match word.strip_prefix("0x").or_else(|| word.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => word.parse(),
    };
    parsed.map_err(|e| format!("invalid instruction word `{word}`: {e}"))
}

#[derive(Debug, Default)]
struct Stats {
    branches: usize,
    fallbacks: usize,
    widest_switch: u8,
    leaves: usize,
    hints: usize,
    nops: usize,
    illegal: usize,
}

impl DecoderTreeVisitor for Stats {
    fn visit_branch(&mut self, branch: &BranchView<'_>) {
        self.branches += 1;
        self.fallbacks += usize::from(branch.has_fallback);
        self.widest_switch = self.widest_switch.max(branch.switch.width);
    }

    fn visit_leaf(&mut self, leaf: &LeafView<'_>) {
        self.leaves += 1;
        match leaf.declaration.kind() {
            InstructionKind::Normal => {}
            InstructionKind::Hint => self.hints += 1,
            InstructionKind::Nop => self.nops += 1,
            InstructionKind::Illegal => self.illegal += 1,
        }
    }
}

fn print_stats(xlen: Xlen, tree: &DecoderTree) {
    let mut stats = Stats::default();
    tree.accept(&mut stats);

    let (mask, pattern) = tree.root_constraint();
    let worst = tree
        .declarations()
        .map(|d| tree.query_steps(d.pattern()))
        .max()
        .unwrap_or(0);

    println!("{xlen}: {} declarations", tree.len());
    println!("nodes:          {}", tree.node_count());
    println!("max depth:      {}", tree.max_depth());
    println!("root:           {mask:#010x}/{pattern:#010x}");
    println!(
        "branches:       {} ({} with fallback, widest switch {} bits)",
        stats.branches, stats.fallbacks, stats.widest_switch
    );
    println!(
        "leaves:         {} ({} hint, {} nop, {} illegal)",
        stats.leaves, stats.hints, stats.nops, stats.illegal
    );
    println!("worst query:    {worst} nodes");
}
