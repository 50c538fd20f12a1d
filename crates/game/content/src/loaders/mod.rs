//! Content loaders for reading duel data from files.
//!
//! Each loader turns one RON/TOML file into a `duel-core` value or an oracle
//! implementation. Parse and validation failures carry the file path.

pub mod config;
pub mod factory;
pub mod roster;
pub mod tables;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use roster::RosterLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
