//! Content factory for building duel inputs from a data directory.

use std::path::{Path, PathBuf};

use duel_core::CombatRules;

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader, TablesLoader};
use crate::roster::Roster;
use crate::tables::TableSnapshot;

/// Content factory that loads all duel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// ├── tables.toml
/// └── roster.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load combat rules from `rules.toml`, or the defaults when the file
    /// is absent.
    pub fn load_rules(&self) -> LoadResult<CombatRules> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no rules file, using default rules");
            return Ok(CombatRules::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load balance tables from `tables.toml`, or the standard tables when
    /// the file is absent.
    pub fn load_tables(&self) -> LoadResult<TableSnapshot> {
        let path = self.data_dir.join("tables.toml");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no tables file, using standard tables");
            return Ok(TableSnapshot::standard());
        }
        TablesLoader::load(&path)
    }

    /// Load the fighter roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let path = self.data_dir.join("roster.ron");
        RosterLoader::load(&path)
    }
}
