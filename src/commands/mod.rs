//! Command implementations for the polyfill-locales CLI

pub mod completions;
pub mod sync;
