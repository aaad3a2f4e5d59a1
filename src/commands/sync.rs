//! Sync command implementation
//!
//! Imports every upstream locale into `~locale/<locale>/`:
//! 1. Enumerate locale data files
//! 2. Render the shared locale config
//! 3. Write `polyfill.js`, `detect.js` and `config.toml` where they changed
//!
//! `--dry-run` and `--check` run the same pipeline against a storage that
//! records writes instead of performing them.

use console::Style;

use crate::cli::SyncArgs;
use crate::error::{PolyfillError, Result};
use crate::pipeline::{self, SyncEvent, SyncSettings};
use crate::progress::ProgressDisplay;
use crate::sync::{DryRunStorage, FsStorage, Storage, SyncAction, SyncReport};

const DRY_RUN_PREFIX: &str = "[DRY RUN]";

/// Run sync command
pub fn run(args: &SyncArgs, verbose: bool) -> Result<()> {
    let dry_run = args.dry_run || args.check;
    let settings = SyncSettings {
        source_dir: args.source_dir.clone(),
        polyfill_dir: args.polyfill_dir.clone(),
        create_dirs: !dry_run,
    };

    if !dry_run {
        let report = execute(&settings, &mut FsStorage, verbose, false)?;
        print_summary(&report, false);
        println!("Intl.DisplayNames polyfill imported successfully");
        return Ok(());
    }

    let mut storage = DryRunStorage::default();
    let report = execute(&settings, &mut storage, verbose, true)?;
    print_summary(&report, true);

    if args.check && report.changed() > 0 {
        return Err(PolyfillError::OutOfDate {
            count: storage.pending().len(),
        });
    }

    println!("{DRY_RUN_PREFIX} No files were written");
    Ok(())
}

fn execute<S>(
    settings: &SyncSettings,
    storage: &mut S,
    verbose: bool,
    dry_run: bool,
) -> Result<SyncReport>
where
    S: Storage + ?Sized,
{
    let mut progress: Option<ProgressDisplay> = None;

    let result = pipeline::run(settings, storage, |event| match event {
        SyncEvent::Started {
            source_dir,
            locales,
        } => {
            println!(
                "{}Importing {locales} Intl.DisplayNames locale sources from {}",
                prefix(dry_run),
                source_dir.display()
            );
            progress = Some(ProgressDisplay::new(locales as u64));
        }
        SyncEvent::Locale { entry } => {
            if let Some(ref pb) = progress {
                pb.start_locale(&entry.id);
            }
        }
        SyncEvent::Artifact { path, action } => {
            // Dry runs always list what would change.
            if verbose || (dry_run && action.writes()) {
                let line = artifact_line(path, action, dry_run);
                match progress {
                    Some(ref pb) => pb.println(&line),
                    None => println!("{line}"),
                }
            }
        }
    });

    match (&result, &progress) {
        (Ok(_), Some(pb)) => pb.finish(),
        (Err(_), Some(pb)) => pb.abandon(),
        _ => {}
    }

    result
}

fn artifact_line(path: &std::path::Path, action: SyncAction, dry_run: bool) -> String {
    let style = match action {
        SyncAction::Create => Style::new().green(),
        SyncAction::Update => Style::new().yellow(),
        SyncAction::Skip => Style::new().dim(),
    };
    let label = if dry_run && action.writes() {
        format!("would be {}", action.label())
    } else {
        action.label().to_string()
    };
    format!("  {} {}", style.apply_to(format!("{label:>18}")), path.display())
}

fn prefix(dry_run: bool) -> String {
    if dry_run {
        format!("{DRY_RUN_PREFIX} ")
    } else {
        String::new()
    }
}

fn print_summary(report: &SyncReport, dry_run: bool) {
    println!(
        "{}{} imported locales ({} created, {} updated, {} unchanged)",
        prefix(dry_run),
        report.locales,
        report.created,
        report.updated,
        report.unchanged
    );
}
