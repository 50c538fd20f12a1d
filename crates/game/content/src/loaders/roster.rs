//! Fighter roster loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::roster::{Roster, RosterFighter, RosterSkin};

/// On-disk layout of `roster.ron`.
///
/// ```ron
/// (
///     fighters: [
///         (id: 1, name: "Brakka", attributes: (strength: 18, constitution: 14, size: 16, agility: 8, stamina: 12, luck: 10)),
///     ],
///     skins: [
///         (index: 0, token: 1, loadout: (weapon: battleaxe, armor: plate, stance: offensive)),
///     ],
/// )
/// ```
#[derive(Debug, serde::Deserialize)]
struct RosterFile {
    #[serde(default)]
    fighters: Vec<RosterFighter>,
    #[serde(default)]
    skins: Vec<RosterSkin>,
}

/// Loader for fighter rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let roster = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;

        tracing::debug!(
            path = %path.display(),
            fighters = roster.fighter_count(),
            skins = roster.skin_count(),
            "loaded roster"
        );
        Ok(roster)
    }

    /// Parse a roster from RON text. Duplicate fighter ids and duplicate
    /// `(index, token)` skins are rejected.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let file: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut roster = Roster::new();
        for fighter in file.fighters {
            let id = fighter.id;
            anyhow::ensure!(
                roster.insert_fighter(fighter).is_none(),
                "duplicate fighter id {id}"
            );
        }
        for skin in file.skins {
            anyhow::ensure!(
                roster.insert_skin(skin).is_none(),
                "duplicate skin (index {}, token {})",
                skin.index,
                skin.token
            );
        }
        Ok(roster)
    }
}
