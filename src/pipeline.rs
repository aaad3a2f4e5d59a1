//! Locale import pipeline
//!
//! 1. Enumerate locale sources (fatal if the directory cannot be read)
//! 2. Render the shared locale config once (fatal if the base config is bad)
//! 3. For each locale, sync `polyfill.js`, `detect.js` and `config.toml`
//!
//! Nothing is written before steps 1 and 2 succeed. A failing write stops
//! the run immediately.

use std::path::{Path, PathBuf};

use crate::config::{self, CONFIG_FILE_NAME};
use crate::detect::{self, DETECT_FILE_NAME};
use crate::error::{Result, fs as fs_err};
use crate::locale::{LocaleEntry, LocaleSources};
use crate::sync::{self, Storage, SyncAction, SyncReport};

/// Name of the copied upstream data inside a locale directory
pub const POLYFILL_FILE_NAME: &str = "polyfill.js";

/// Directory under the polyfill holding one sub-directory per locale
pub const LOCALES_DIR_NAME: &str = "~locale";

/// Where to read from and write to
#[derive(Debug, Clone)]
pub struct SyncSettings {
    /// Upstream `locale-data` directory
    pub source_dir: PathBuf,
    /// `Intl.DisplayNames` polyfill directory holding the base `config.toml`
    pub polyfill_dir: PathBuf,
    /// Create missing output directories (off for dry runs)
    pub create_dirs: bool,
}

impl SyncSettings {
    pub fn base_config(&self) -> PathBuf {
        self.polyfill_dir.join(CONFIG_FILE_NAME)
    }

    pub fn output_root(&self) -> PathBuf {
        self.polyfill_dir.join(LOCALES_DIR_NAME)
    }
}

/// Progress notifications emitted while the pipeline runs
#[derive(Debug)]
pub enum SyncEvent<'a> {
    /// Sources were enumerated and the config rendered
    Started { source_dir: &'a Path, locales: usize },
    /// A locale is about to be synchronized
    Locale { entry: &'a LocaleEntry },
    /// One artifact was synchronized
    Artifact { path: &'a Path, action: SyncAction },
}

/// Run the full import against `storage`
pub fn run<S, F>(settings: &SyncSettings, storage: &mut S, mut on_event: F) -> Result<SyncReport>
where
    S: Storage + ?Sized,
    F: FnMut(SyncEvent<'_>),
{
    let sources = LocaleSources::open(&settings.source_dir, settings.output_root())?;
    let entries = sources.entries()?;
    let locale_config = config::render_locale_config(&settings.base_config())?;

    on_event(SyncEvent::Started {
        source_dir: sources.dir(),
        locales: entries.len(),
    });

    if settings.create_dirs {
        ensure_dir(&settings.output_root())?;
    }

    let mut report = SyncReport::default();
    for entry in &entries {
        on_event(SyncEvent::Locale { entry });
        sync_locale(settings, storage, entry, &locale_config, &mut report, &mut on_event)?;
        report.locales += 1;
    }

    Ok(report)
}

fn sync_locale<S, F>(
    settings: &SyncSettings,
    storage: &mut S,
    entry: &LocaleEntry,
    locale_config: &str,
    report: &mut SyncReport,
    on_event: &mut F,
) -> Result<()>
where
    S: Storage + ?Sized,
    F: FnMut(SyncEvent<'_>),
{
    if settings.create_dirs {
        ensure_dir(&entry.output_dir)?;
    }

    // Upstream sources are inputs, not artifacts; only artifacts go through `storage`.
    let polyfill =
        std::fs::read(&entry.source).map_err(|e| fs_err::file_read_error(&entry.source, &e))?;
    let snippet = detect::detect_snippet(&entry.id);

    let artifacts: [(&str, &[u8]); 3] = [
        (POLYFILL_FILE_NAME, polyfill.as_slice()),
        (DETECT_FILE_NAME, snippet.as_bytes()),
        (CONFIG_FILE_NAME, locale_config.as_bytes()),
    ];

    for (file_name, content) in artifacts {
        let path = entry.output_dir.join(file_name);
        let action = sync::write_if_changed(storage, &path, content)?;
        report.record(action);
        on_event(SyncEvent::Artifact {
            path: &path,
            action,
        });
    }

    Ok(())
}

fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .map_err(|e| fs_err::create_dir_failed(path.display().to_string(), e.to_string()))
}
