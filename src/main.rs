//! polyfill-locales - Intl.DisplayNames locale polyfill importer
//!
//! Copies the per-locale data files of `@formatjs/intl-displaynames` into the
//! polyfill tree and generates a detection snippet and config for each
//! locale, writing only files whose content changed.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod detect;
mod error;
mod hash;
mod locale;
mod pipeline;
mod progress;
mod sync;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sync(ref args) => commands::sync::run(args, cli.verbose),
        Commands::Completions(ref args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
