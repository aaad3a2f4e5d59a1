//! Locale source discovery
//!
//! Lists the per-locale data files shipped by the upstream package. Each
//! `<locale>.js` file becomes one [`LocaleEntry`] whose output directory sits
//! under the `~locale` root of the polyfill.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{PolyfillError, Result, fs as fs_err};

/// Extension of upstream locale data files
pub const SOURCE_EXTENSION: &str = ".js";

/// One discovered locale source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    /// Locale identifier, e.g. `fr` or `fr-CA`
    pub id: String,
    /// Upstream locale data file
    pub source: PathBuf,
    /// Directory receiving the generated artifacts for this locale
    pub output_dir: PathBuf,
}

/// Lazily enumerates the locale sources of a directory
#[derive(Debug, Clone)]
pub struct LocaleSources {
    dir: PathBuf,
    output_root: PathBuf,
}

impl LocaleSources {
    /// Open a locale source directory
    ///
    /// Fails when the directory is missing, is not a directory, or cannot be read.
    pub fn open(dir: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::read_dir(&dir)
            .map_err(|e| fs_err::directory_read_failed(dir.display().to_string(), e.to_string()))?;

        Ok(Self {
            dir,
            output_root: output_root.into(),
        })
    }

    /// Source directory being enumerated
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Iterate over locale entries in directory order
    ///
    /// Each call re-reads the directory.
    pub fn iter(&self) -> impl Iterator<Item = Result<LocaleEntry>> + '_ {
        WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(move |entry| match entry {
                Err(e) => Some(Err(fs_err::directory_read_failed(
                    self.dir.display().to_string(),
                    e.to_string(),
                ))),
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        return None;
                    }
                    let file_name = entry.file_name().to_str()?;
                    let id = locale_id_from_file_name(file_name)?;
                    Some(self.entry_for(id, file_name, entry.path()))
                }
            })
    }

    /// Collect one entry per locale identifier, sorted by identifier
    ///
    /// Any read failure is returned before the caller gets to write anything.
    /// When several files share an identifier (`en.js`, `en.min.js`) the
    /// shortest file name is kept, ties broken by name, so every run picks the
    /// same source.
    pub fn entries(&self) -> Result<Vec<LocaleEntry>> {
        let mut entries = self.iter().collect::<Result<Vec<_>>>()?;
        entries.sort_by(|a, b| {
            let (a_name, b_name) = (source_name(a), source_name(b));
            a.id.cmp(&b.id)
                .then(a_name.len().cmp(&b_name.len()))
                .then(a_name.cmp(&b_name))
        });
        entries.dedup_by(|later, kept| later.id == kept.id);
        Ok(entries)
    }

    fn entry_for(&self, id: &str, file_name: &str, source: &Path) -> Result<LocaleEntry> {
        validate_locale_id(id, file_name)?;
        Ok(LocaleEntry {
            id: id.to_string(),
            source: source.to_path_buf(),
            output_dir: self.output_root.join(id),
        })
    }
}

fn source_name(entry: &LocaleEntry) -> std::borrow::Cow<'_, str> {
    entry
        .source
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
}

/// Derive a locale identifier from an upstream file name
///
/// Returns `None` for files without the source extension and for names
/// starting with a dot. The identifier stops at the first `.`, so
/// `en.min.js` yields `en`.
pub fn locale_id_from_file_name(file_name: &str) -> Option<&str> {
    if !file_name.ends_with(SOURCE_EXTENSION) {
        return None;
    }
    let id = file_name.split('.').next()?;
    if id.is_empty() { None } else { Some(id) }
}

/// Locale identifiers end up quoted inside generated JavaScript and used as
/// directory names, so only tag characters are accepted.
fn validate_locale_id(id: &str, file_name: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(PolyfillError::InvalidLocale {
            name: id.to_string(),
            file: file_name.to_string(),
        })
    }
}
