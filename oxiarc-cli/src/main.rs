//! OxiHuff CLI - Huffman compression from the command line
//!
//! A Pure Rust utility that compresses text files with a Huffman prefix code
//! and restores them, plus a few tools to inspect the produced artifacts.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{
    CompressOptions, cmd_codes, cmd_compress, cmd_copy, cmd_decompress, cmd_info, cmd_test,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "Huffman compression - Pure Rust entropy coder")]
#[command(long_about = "
OxiHuff compresses text with a Huffman code built from the input's own
symbol frequencies. By default the output is a self-contained container
that carries the code table and a CRC-32 of the content.

Examples:
  oxihuff compress notes.txt
  oxihuff compress notes.txt -o notes.huf --exact
  oxihuff compress image.png --bytes
  oxihuff decompress notes.bin
  oxihuff info notes.bin --json
  oxihuff codes notes.txt
  oxihuff copy file:///var/data/image.img backup.img -P
  oxihuff test notes.bin
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a text file
    #[command(alias = "c")]
    Compress {
        /// Text file to compress
        input: PathBuf,

        /// Output path (default: <input stem>.bin)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep trailing whitespace instead of trimming it
        #[arg(long)]
        exact: bool,

        /// Write only the padded bit buffer, without the code table
        #[arg(long)]
        raw: bool,

        /// Treat the input as raw bytes instead of UTF-8 text
        #[arg(short, long, conflicts_with = "exact")]
        bytes: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress a container back to text
    #[command(alias = "d")]
    Decompress {
        /// Container produced by `compress`
        input: PathBuf,

        /// Output path (default: <input stem>_decompressed.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show information about a compressed artifact
    #[command(alias = "i")]
    Info {
        /// Container or raw buffer
        artifact: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Print the code table a text file would be compressed with
    Codes {
        /// Text file to analyze
        input: PathBuf,

        /// Keep trailing whitespace instead of trimming it
        #[arg(long)]
        exact: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Copy a file or file:// URI block by block
    Copy {
        /// Source path or file:// URI
        source: String,

        /// Destination path or file:// URI
        destination: String,

        /// Block size in bytes (0 selects the default)
        #[arg(short, long, default_value_t = oxiarc_core::DEFAULT_BLOCK_SIZE)]
        block_size: usize,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Verify a container's checksum and symbol count
    #[command(alias = "t")]
    Test {
        /// Container to verify
        artifact: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            exact,
            raw,
            bytes,
            verbose,
        } => cmd_compress(
            &input,
            &CompressOptions {
                output,
                exact,
                raw,
                bytes,
                verbose,
            },
        ),
        Commands::Decompress {
            input,
            output,
            verbose,
        } => cmd_decompress(&input, output, verbose),
        Commands::Info { artifact, json } => cmd_info(&artifact, json),
        Commands::Codes { input, exact, json } => cmd_codes(&input, exact, json),
        Commands::Copy {
            source,
            destination,
            block_size,
            progress,
        } => cmd_copy(&source, &destination, block_size, progress),
        Commands::Test { artifact, verbose } => cmd_test(&artifact, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
