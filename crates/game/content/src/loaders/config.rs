//! Combat rules loader.

use std::path::Path;

use duel_core::CombatRules;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load combat rules from a TOML file.
    ///
    /// Keys left out of the file keep their default values.
    pub fn load(path: &Path) -> LoadResult<CombatRules> {
        let content = read_file(path)?;
        let rules = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), ?rules, "loaded combat rules");
        Ok(rules)
    }

    /// Parse combat rules from TOML text.
    pub fn parse(content: &str) -> LoadResult<CombatRules> {
        let rules: CombatRules = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        anyhow::ensure!(
            rules.minimum_action_cost > 0,
            "minimum_action_cost must be positive"
        );
        anyhow::ensure!(
            rules.miss_cost_divisor > 0,
            "miss_cost_divisor must be positive"
        );
        Ok(rules)
    }
}
