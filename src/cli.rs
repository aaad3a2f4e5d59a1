//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default upstream locale data directory
pub const DEFAULT_SOURCE_DIR: &str = "node_modules/@formatjs/intl-displaynames/locale-data";

/// Default `Intl.DisplayNames` polyfill directory
pub const DEFAULT_POLYFILL_DIR: &str = "polyfills/Intl/DisplayNames";

/// polyfill-locales - Intl.DisplayNames locale polyfill importer
///
/// Copies upstream locale data into per-locale polyfills and generates their
/// detection snippets and configs.
#[derive(Parser, Debug)]
#[command(
    name = "polyfill-locales",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Import Intl.DisplayNames locale polyfills from upstream locale data",
    long_about = "polyfill-locales copies every locale data file of @formatjs/intl-displaynames \
                  into polyfills/Intl/DisplayNames/~locale/<locale>/ together with a detect.js \
                  snippet and a config.toml derived from the Intl.DisplayNames config. \
                  Files are only written when their content changed.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  polyfill-locales sync\n    \
                  polyfill-locales sync --dry-run -v\n    \
                  polyfill-locales sync --check"
)]
pub struct Cli {
    /// Print one line per generated file
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import locale polyfills
    Sync(SyncArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Import with default paths:\n    polyfill-locales sync\n\n\
                  Import from a custom checkout:\n    polyfill-locales sync --source-dir ../formatjs/locale-data\n\n\
                  Show what would change:\n    polyfill-locales sync --dry-run -v\n\n\
                  Fail when generated files are stale (CI):\n    polyfill-locales sync --check")]
pub struct SyncArgs {
    /// Directory with one <locale>.js data file per locale
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Intl.DisplayNames polyfill directory (holds config.toml and ~locale/)
    #[arg(long, value_name = "DIR", default_value = DEFAULT_POLYFILL_DIR)]
    pub polyfill_dir: PathBuf,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Like --dry-run, but fail if any file would change
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
