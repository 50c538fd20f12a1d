//! Balance tables loader.

use std::collections::HashMap;
use std::path::Path;

use duel_core::{
    ArmorKind, ArmorStats, DerivationTable, Stance, StanceModifiers, WeaponKind, WeaponStats,
};
use strum::IntoEnumIterator;

use crate::loaders::{LoadResult, read_file};
use crate::tables::TableSnapshot;

/// On-disk layout of `tables.toml`.
///
/// ```toml
/// [weapons.quarterstaff]
/// attack_speed = 130
/// min_damage = 18
/// max_damage = 28
/// damage_type = "blunt"
/// parry_modifier = 120
/// stamina_modifier = 80
///
/// [armor.plate]
/// defense = 6
/// # ...
/// ```
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TablesFile {
    weapons: HashMap<WeaponKind, WeaponStats>,
    armor: HashMap<ArmorKind, ArmorStats>,
    stances: HashMap<Stance, StanceModifiers>,
    derivation: Option<DerivationTable>,
}

/// Loader for balance tables from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load tables from a TOML file.
    ///
    /// Rows the file leaves out fall back to the standard tables, with a
    /// warning naming them.
    pub fn load(path: &Path) -> LoadResult<TableSnapshot> {
        let content = read_file(path)?;
        let snapshot = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;

        tracing::debug!(
            path = %path.display(),
            weapons = snapshot.weapons.len(),
            armor = snapshot.armor.len(),
            stances = snapshot.stances.len(),
            "loaded balance tables"
        );
        Ok(snapshot)
    }

    /// Parse tables from TOML text.
    pub fn parse(content: &str) -> LoadResult<TableSnapshot> {
        let file: TablesFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        for (kind, row) in &file.weapons {
            anyhow::ensure!(row.attack_speed > 0, "weapon {kind}: attack_speed must be positive");
            anyhow::ensure!(
                row.damage_spread().is_some(),
                "weapon {kind}: min_damage {} exceeds max_damage {}",
                row.min_damage,
                row.max_damage
            );
        }
        for (kind, row) in &file.armor {
            anyhow::ensure!(row.is_well_formed(), "armor {kind}: resistance above 100");
        }
        if let Some(derivation) = &file.derivation {
            for (stat, formula) in derivation.formulas() {
                anyhow::ensure!(
                    formula.min <= formula.max,
                    "derivation {stat}: min {} exceeds max {}",
                    formula.min,
                    formula.max
                );
            }
        }

        let mut snapshot = TableSnapshot::standard();
        warn_defaults("weapon", WeaponKind::iter(), &file.weapons);
        warn_defaults("armor", ArmorKind::iter(), &file.armor);
        warn_defaults("stance", Stance::iter(), &file.stances);
        if file.derivation.is_none() {
            tracing::debug!("derivation table not overridden, using standard formulas");
        }

        snapshot.weapons.extend(file.weapons);
        snapshot.armor.extend(file.armor);
        snapshot.stances.extend(file.stances);
        if let Some(derivation) = file.derivation {
            snapshot.derivation = derivation;
        }
        Ok(snapshot)
    }
}

fn warn_defaults<K, V>(table: &str, kinds: impl Iterator<Item = K>, rows: &HashMap<K, V>)
where
    K: std::hash::Hash + Eq + std::fmt::Display,
{
    let missing: Vec<String> = kinds
        .filter(|kind| !rows.contains_key(kind))
        .map(|kind| kind.to_string())
        .collect();
    if !missing.is_empty() {
        tracing::warn!(
            table,
            missing = %missing.join(", "),
            "rows missing from tables file, using standard values"
        );
    }
}
