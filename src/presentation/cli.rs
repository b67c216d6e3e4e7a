//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// emotegen - resolve layered emote declarations and export their variants
#[derive(Parser, Debug)]
#[command(name = "emotegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable output (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve declarations and print the resulting sets
    Resolve {
        /// Declaration files, or directories containing them
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
    },

    /// Resolve one declaration and export its entries
    Export {
        /// Declaration file
        #[arg(value_name = "DECL")]
        declaration: PathBuf,

        /// Entries to export (all when omitted)
        #[arg(value_name = "NAMES")]
        names: Vec<String>,

        /// Entries to export, comma-separated
        #[arg(short = 'e', long = "entries", value_delimiter = ',', value_name = "NAMES")]
        entries: Vec<String>,

        /// Output directory [default: output]
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Raster size to request (repeatable)
        #[arg(long = "dim", value_name = "N")]
        dimensions: Vec<u32>,

        /// Keep the declared view box instead of fitting it to the drawing
        #[arg(long)]
        no_resize: bool,
    },
}
