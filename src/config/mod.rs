//! Per-locale `config.toml` derivation
//!
//! Every locale polyfill shares one configuration, derived from the base
//! `Intl.DisplayNames` config:
//! - the `install` section is dropped,
//! - `Intl.DisplayNames` is appended to `dependencies`,
//! - `[test]` is replaced by `ci = false` so CI does not run every locale.
//!
//! `toml_edit` keeps the key order and formatting of the base document, so
//! the output stays diff-friendly against it.

use std::path::Path;

use toml_edit::{Array, DocumentMut, Item, Table, value};

use crate::error::{Result, config as config_err};

/// Dependency every locale polyfill gets on top of the base config
pub const LOCALE_DEPENDENCY: &str = "Intl.DisplayNames";

/// File name of the config inside a polyfill directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

const INSTALL_KEY: &str = "install";
const DEPENDENCIES_KEY: &str = "dependencies";
const TEST_KEY: &str = "test";

/// Read and parse the base configuration document
pub fn load_base_config(path: &Path) -> Result<DocumentMut> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| config_err::read_failed(path.display().to_string(), e.to_string()))?;

    content
        .parse::<DocumentMut>()
        .map_err(|e| config_err::parse_failed(path.display().to_string(), e.to_string()))
}

/// Apply the locale transformation to a base configuration in place
pub fn transform_config(doc: &mut DocumentMut) -> Result<()> {
    doc.remove(INSTALL_KEY);

    if !doc.contains_key(DEPENDENCIES_KEY) {
        doc.insert(DEPENDENCIES_KEY, value(Array::new()));
    }
    let dependencies = doc
        .get_mut(DEPENDENCIES_KEY)
        .and_then(Item::as_array_mut)
        .ok_or_else(|| config_err::invalid("'dependencies' must be an array"))?;
    dependencies.push(LOCALE_DEPENDENCY);

    let mut test = Table::new();
    test.insert("ci", value(false));
    doc.insert(TEST_KEY, Item::Table(test));

    Ok(())
}

/// Load, transform and serialize the shared locale configuration
pub fn render_locale_config(base_config: &Path) -> Result<String> {
    let mut doc = load_base_config(base_config)?;
    transform_config(&mut doc)?;
    Ok(doc.to_string())
}
