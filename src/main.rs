use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use huffman_codec::{stats::DEFAULT_SYMBOL_BITS, CodeTable, Codec, FrequencyTable, Stats};

/// Huffman-code a piece of text into a string of '0'/'1' characters.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode text, then show the code table, sizes, and round-trip result.
    Encode {
        #[command(flatten)]
        input: Input,

        /// Uncompressed width of one character, for the size comparison.
        #[arg(
            long,
            default_value_t = DEFAULT_SYMBOL_BITS,
            value_parser = clap::value_parser!(u64).range(1..=64),
        )]
        symbol_bits: u64,
    },

    /// Decode a bit-string using the codes built from some text.
    Decode {
        /// Text to build the code table from.
        #[arg(long)]
        text: String,

        bits: String,
    },
}

#[derive(Debug, Args)]
struct Input {
    /// Text to encode. Read from stdin if neither this nor --file is given.
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    #[arg(long)]
    file: Option<PathBuf>,
}

impl Input {
    fn read(self) -> anyhow::Result<String> {
        let text = match (self.text, self.file) {
            (Some(text), _) => text,
            (None, Some(path)) => fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?,
            (None, None) => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                text
            }
        };
        non_empty_trimmed(&text).map(str::to_owned)
    }
}

/// Strip surrounding whitespace; nothing left is an error.
fn non_empty_trimmed(text: &str) -> anyhow::Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        bail!("no text to encode");
    }
    Ok(text)
}

/// `(symbol, code)` pairs in the order the symbols first appear in `text`.
fn codes_in_text_order<'a>(text: &str, table: &'a CodeTable<char>) -> Vec<(char, &'a str)> {
    FrequencyTable::count(text.chars())
        .iter()
        .filter_map(|(&symbol, _)| table.code(&symbol).map(|code| (symbol, code)))
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Encode { input, symbol_bits } => encode(&input.read()?, symbol_bits),
        Command::Decode { text, bits } => decode(text.trim(), bits.trim()),
    }
}

fn encode(text: &str, symbol_bits: u64) -> anyhow::Result<()> {
    let mut codec = Codec::new();
    codec.build(text.chars())?;
    let bits = codec.encode(text.chars())?;

    println!("Encoded: {bits}");
    println!("Huffman Codes:");
    if let Some(table) = codec.table() {
        for (symbol, code) in codes_in_text_order(text, &table) {
            println!("  {symbol:?}: {code}");
        }
    }
    println!();

    let stats = Stats::with_symbol_width(text.chars().count(), bits.len(), symbol_bits);
    println!("{stats}");

    println!("Decoded: {}", codec.decode_to_string(&bits)?);
    Ok(())
}

fn decode(text: &str, bits: &str) -> anyhow::Result<()> {
    let mut codec = Codec::new();
    codec
        .build(text.chars())
        .context("building code table from --text")?;
    println!("{}", codec.decode_to_string(bits)?);
    Ok(())
}
