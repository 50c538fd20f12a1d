//! Traits describing read-only collaborator data.
//!
//! Oracles expose fighter attributes, skin loadouts and balance tables. The
//! [`DuelEnv`] aggregate bundles them so the engine can resolve a duel without
//! hard coupling to registries, storage or global singletons.
mod error;
mod fighters;
mod rng;
mod tables;

pub use error::OracleError;
pub use fighters::{FighterOracle, PlayerLoadout, SkinOracle};
pub use rng::{Seed, SeedStream};
pub use tables::{StandardTables, TablesOracle};

use crate::equipment::Loadout;
use crate::stats::BaseAttributes;

/// Aggregates the read-only oracles needed to resolve a [`PlayerLoadout`].
#[derive(Clone, Copy)]
pub struct DuelEnv<'a> {
    fighters: &'a dyn FighterOracle,
    skins: &'a dyn SkinOracle,
    tables: &'a dyn TablesOracle,
}

impl<'a> DuelEnv<'a> {
    pub fn new(
        fighters: &'a dyn FighterOracle,
        skins: &'a dyn SkinOracle,
        tables: &'a dyn TablesOracle,
    ) -> Self {
        Self {
            fighters,
            skins,
            tables,
        }
    }

    pub fn tables(&self) -> &'a dyn TablesOracle {
        self.tables
    }

    /// Looks up the attributes and equipment behind a player loadout.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::FighterNotFound` or `OracleError::SkinNotFound`
    /// when a registry has no matching record.
    pub fn resolve(
        &self,
        player: &PlayerLoadout,
    ) -> Result<(BaseAttributes, Loadout), OracleError> {
        let attributes = self
            .fighters
            .base_attributes(player.fighter_id)
            .ok_or(OracleError::FighterNotFound(player.fighter_id))?;

        let loadout = self
            .skins
            .loadout(player.skin_index, player.skin_token_id)
            .ok_or(OracleError::SkinNotFound {
                skin_index: player.skin_index,
                token_id: player.skin_token_id,
            })?;

        Ok((attributes, loadout))
    }
}

impl core::fmt::Debug for DuelEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DuelEnv").finish_non_exhaustive()
    }
}
