//! emotegen CLI - resolve layered emote declarations and export variants
//!
//! Usage: emotegen [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   resolve  Resolve declarations and print the resulting sets
//!   export   Resolve one declaration and export its entries

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use emotegen::presentation::{Cli, Commands};

use commands::export::{cmd_export, ExportArgs};
use commands::resolve::cmd_resolve;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { paths } => cmd_resolve(&paths, cli.json, cli.verbose, cli.color),
        Commands::Export {
            declaration,
            names,
            entries,
            output,
            dimensions,
            no_resize,
        } => cmd_export(
            ExportArgs {
                declaration,
                names,
                entries,
                output,
                dimensions,
                no_resize,
            },
            cli.json,
            cli.verbose,
            cli.color,
        ),
    }
}
