//! Common test utilities for polyfill-locales integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Relative path of the upstream locale data inside a test workspace
pub const SOURCE_DIR: &str = "locale-data";

/// Relative path of the polyfill inside a test workspace
pub const POLYFILL_DIR: &str = "polyfills/Intl/DisplayNames";

/// Base config mirroring the shape of the real Intl.DisplayNames config
#[allow(dead_code)]
pub const BASE_CONFIG: &str = r#"aliases = ["es2020"]
dependencies = ["A"]
license = "MIT"

[browsers]
chrome = "<81"

[install]
module = "@formatjs/intl-displaynames"
paths = ["polyfill.js"]

[test]
ci = true
"#;

/// A temporary polyfill project for integration tests
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace with a base config and the given locale sources
    #[allow(dead_code)]
    pub fn with_locales(locales: &[&str]) -> Self {
        let workspace = Self::new();
        workspace.write_file(&format!("{POLYFILL_DIR}/config.toml"), BASE_CONFIG);
        std::fs::create_dir_all(workspace.path.join(SOURCE_DIR))
            .expect("Failed to create source directory");
        for locale in locales {
            workspace.add_locale(locale, &format!("/* {locale} locale data */\n"));
        }
        workspace
    }

    /// Write an upstream locale data file
    #[allow(dead_code)]
    pub fn add_locale(&self, locale: &str, content: &str) {
        self.write_file(&format!("{SOURCE_DIR}/{locale}.js"), content);
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Path of a generated artifact, relative to the workspace
    #[allow(dead_code)]
    pub fn artifact(locale: &str, file_name: &str) -> String {
        format!("{POLYFILL_DIR}/~locale/{locale}/{file_name}")
    }

    /// `polyfill-locales sync` pointed at this workspace
    #[allow(dead_code)]
    pub fn sync_cmd(&self) -> Command {
        let mut cmd = polyfill_locales_cmd();
        cmd.current_dir(&self.path).args([
            "sync",
            "--source-dir",
            SOURCE_DIR,
            "--polyfill-dir",
            POLYFILL_DIR,
        ]);
        cmd
    }
}

/// The real binary under test
#[allow(deprecated, dead_code)]
pub fn polyfill_locales_cmd() -> Command {
    Command::cargo_bin("polyfill-locales").expect("binary should be built")
}
