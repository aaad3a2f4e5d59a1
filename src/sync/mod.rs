//! Change-detecting file synchronization
//!
//! An artifact is written only when no file exists at its path or when the
//! BLAKE3 digest of the file on disk differs from the digest of the freshly
//! generated content. Re-running with unchanged inputs performs no writes.
//!
//! Storage access goes through the [`Storage`] trait so the decision logic can
//! be exercised without a filesystem and so dry runs can reuse it unchanged.

mod storage;

pub use storage::{DryRunStorage, FsStorage, Storage};

#[cfg(test)]
pub use storage::MemoryStorage;

use std::fmt;
use std::path::Path;

use blake3::Hash;

use crate::error::Result;
use crate::hash::hash_bytes;

/// What synchronizing one artifact does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// No file existed, it gets written
    Create,
    /// The file existed with different content, it gets overwritten
    Update,
    /// The file already holds the content
    Skip,
}

impl SyncAction {
    /// Whether this action writes to storage
    pub fn writes(self) -> bool {
        !matches!(self, SyncAction::Skip)
    }

    /// Past-tense label used in reports
    pub fn label(self) -> &'static str {
        match self {
            SyncAction::Create => "created",
            SyncAction::Update => "updated",
            SyncAction::Skip => "unchanged",
        }
    }
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decide what to do with an artifact given the digest of the existing file
pub fn decide_action(existing: Option<Hash>, new: Hash) -> SyncAction {
    match existing {
        None => SyncAction::Create,
        Some(current) if current == new => SyncAction::Skip,
        Some(_) => SyncAction::Update,
    }
}

/// Write `content` to `path` unless the stored content already has the same digest
///
/// Performs at most one write. The parent directory must already exist.
pub fn write_if_changed<S>(storage: &mut S, path: &Path, content: &[u8]) -> Result<SyncAction>
where
    S: Storage + ?Sized,
{
    let existing = storage.read(path)?.map(|bytes| hash_bytes(&bytes));
    let action = decide_action(existing, hash_bytes(content));

    if action.writes() {
        storage.write(path, content)?;
    }

    Ok(action)
}

/// Tally of synchronization outcomes over a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub locales: usize,
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl SyncReport {
    /// Count one artifact outcome
    pub fn record(&mut self, action: SyncAction) {
        match action {
            SyncAction::Create => self.created += 1,
            SyncAction::Update => self.updated += 1,
            SyncAction::Skip => self.unchanged += 1,
        }
    }

    /// Number of artifacts that were (or would be) written
    pub fn changed(&self) -> usize {
        self.created + self.updated
    }
}
