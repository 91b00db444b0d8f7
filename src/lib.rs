use anyhow::{anyhow, bail, Result};
use clap::Parser;
use log::debug;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

pub mod sequence;

pub use sequence::{gc_content, reverse_complement};

#[derive(Parser, Debug)]
#[command(arg_required_else_help = true, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, default_value = "false")]
    pub debug: bool,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// GC content of sequences
    Gc(GcArgs),

    /// Reverse-complement sequences
    #[clap(alias = "rc")]
    Revcomp(RevcompArgs),
}

#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct GcArgs {
    /// Sequence
    #[arg(value_name = "SEQ")]
    sequence: Option<String>,

    /// Input file, one sequence per line
    #[arg(short, long, value_name = "FILE")]
    file: Option<String>,

    /// Decimal places in the reported percentage
    #[arg(short, long, value_name = "PREC", default_value = "2")]
    precision: usize,
}

#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct RevcompArgs {
    /// Sequence
    #[arg(value_name = "SEQ")]
    sequence: Option<String>,

    /// Input file, one sequence per line
    #[arg(short, long, value_name = "FILE")]
    file: Option<String>,
}

// --------------------------------------------------
pub fn run(args: Cli) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(if args.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    match &args.command {
        Command::Gc(args) => gc(args.clone())?,
        Command::Revcomp(args) => revcomp(args.clone())?,
    }

    Ok(())
}

// --------------------------------------------------
fn open(filename: &str) -> Result<Box<dyn BufRead>> {
    match filename {
        "-" => Ok(Box::new(BufReader::new(io::stdin()))),
        _ => Ok(Box::new(BufReader::new(
            File::open(filename).map_err(|e| anyhow!("{filename}: {e}"))?,
        ))),
    }
}

// --------------------------------------------------
fn read_lines(path: &str) -> Result<Vec<String>> {
    Ok(open(path)?
        .lines()
        .map_while(Result::ok)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

// --------------------------------------------------
fn resolve_inputs(
    sequence: &Option<String>,
    file: &Option<String>,
) -> Result<Vec<String>> {
    match (sequence, file) {
        (_, Some(filename)) => {
            let seqs = read_lines(filename)?;
            debug!("read {} sequence(s) from {filename}", seqs.len());
            Ok(seqs)
        }
        (Some(seq), None) => Ok(vec![seq.clone()]),
        (None, None) => bail!("No sequence or input file provided"),
    }
}

// --------------------------------------------------
fn gc(args: GcArgs) -> Result<()> {
    for seq in resolve_inputs(&args.sequence, &args.file)? {
        let pct = gc_content(&seq)?;
        println!("GC content: {pct:.prec$}%", prec = args.precision);
    }

    Ok(())
}

// --------------------------------------------------
fn revcomp(args: RevcompArgs) -> Result<()> {
    for seq in resolve_inputs(&args.sequence, &args.file)? {
        println!("{}", reverse_complement(&seq));
    }

    Ok(())
}
