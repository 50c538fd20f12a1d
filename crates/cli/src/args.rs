//! Shared argument groups and value parsers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use duel_content::{ContentFactory, Roster, TableSnapshot};
use duel_core::{
    BaseAttributes, CombatRules, DuelEnv, FighterProfile, Loadout, PlayerLoadout, Seed, Side,
};

/// Where rules, tables and the roster come from.
#[derive(Args, Clone)]
pub struct ContentArgs {
    /// Content directory holding rules.toml, tables.toml and roster.ron
    /// (built-in rules and tables when omitted)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Rules, tables and the optional roster a command runs against.
pub struct Content {
    pub rules: CombatRules,
    pub tables: TableSnapshot,
    roster: Option<Roster>,
}

impl ContentArgs {
    pub fn load(&self, with_roster: bool) -> Result<Content> {
        let Some(dir) = &self.data_dir else {
            anyhow::ensure!(
                !with_roster,
                "roster fighters need --data-dir pointing at a roster.ron"
            );
            return Ok(Content {
                rules: CombatRules::default(),
                tables: TableSnapshot::standard(),
                roster: None,
            });
        };

        let factory = ContentFactory::new(dir);
        let roster = if with_roster {
            Some(factory.load_roster()?)
        } else {
            None
        };
        Ok(Content {
            rules: factory.load_rules()?,
            tables: factory.load_tables()?,
            roster,
        })
    }
}

/// One fighter as given on the command line.
#[derive(Clone, Copy, Debug)]
pub enum FighterSource {
    /// Fighter and skin looked up in the roster
    Roster(PlayerLoadout),
    /// Attributes and equipment given directly
    Inline(BaseAttributes, Loadout),
}

impl FighterSource {
    pub fn from_args(
        side: Side,
        player: Option<PlayerLoadout>,
        attributes: Option<BaseAttributes>,
        loadout: Option<Loadout>,
    ) -> Result<Self> {
        match (player, loadout) {
            (Some(player), _) => Ok(Self::Roster(player)),
            (None, Some(loadout)) => Ok(Self::Inline(attributes.unwrap_or_default(), loadout)),
            (None, None) => anyhow::bail!(
                "fighter {side} needs --{side} FIGHTER:SKIN:TOKEN or --loadout-{side} WEAPON,ARMOR,STANCE"
            ),
        }
    }

    pub fn needs_roster(&self) -> bool {
        matches!(self, Self::Roster(_))
    }
}

impl Content {
    /// Builds the stance-adjusted profile for one fighter.
    pub fn profile(&self, side: Side, source: FighterSource) -> Result<FighterProfile> {
        let (attributes, loadout) = match source {
            FighterSource::Inline(attributes, loadout) => (attributes, loadout),
            FighterSource::Roster(player) => {
                let roster = self
                    .roster
                    .as_ref()
                    .context("roster fighters need a loaded roster")?;
                DuelEnv::new(roster, roster, &self.tables)
                    .resolve(&player)
                    .with_context(|| format!("fighter {side}"))?
            }
        };
        FighterProfile::build(attributes, loadout, &self.tables)
            .with_context(|| format!("fighter {side}: {loadout:?}"))
    }
}

/// Both fighters of a matchup.
#[derive(Args, Clone)]
pub struct MatchupArgs {
    /// Side one from the roster, as FIGHTER:SKIN_INDEX:TOKEN
    #[arg(
        long,
        value_name = "PLAYER",
        value_parser = parse_player,
        conflicts_with_all = ["attrs_one", "loadout_one"]
    )]
    pub one: Option<PlayerLoadout>,

    /// Side two from the roster, as FIGHTER:SKIN_INDEX:TOKEN
    #[arg(
        long,
        value_name = "PLAYER",
        value_parser = parse_player,
        conflicts_with_all = ["attrs_two", "loadout_two"]
    )]
    pub two: Option<PlayerLoadout>,

    /// Side one attributes, STR,CON,SIZE,AGI,STA,LUCK (default all 12)
    #[arg(long, value_name = "ATTRS", value_parser = parse_attributes)]
    pub attrs_one: Option<BaseAttributes>,

    /// Side one equipment, WEAPON,ARMOR,STANCE
    #[arg(long, value_name = "LOADOUT", value_parser = parse_loadout)]
    pub loadout_one: Option<Loadout>,

    /// Side two attributes, STR,CON,SIZE,AGI,STA,LUCK (default all 12)
    #[arg(long, value_name = "ATTRS", value_parser = parse_attributes)]
    pub attrs_two: Option<BaseAttributes>,

    /// Side two equipment, WEAPON,ARMOR,STANCE
    #[arg(long, value_name = "LOADOUT", value_parser = parse_loadout)]
    pub loadout_two: Option<Loadout>,
}

impl MatchupArgs {
    pub fn sources(&self) -> Result<[FighterSource; 2]> {
        Ok([
            FighterSource::from_args(Side::One, self.one, self.attrs_one, self.loadout_one)?,
            FighterSource::from_args(Side::Two, self.two, self.attrs_two, self.loadout_two)?,
        ])
    }

    /// Loads content and builds both profiles.
    pub fn resolve(&self, content: &ContentArgs) -> Result<(Content, [FighterProfile; 2])> {
        let [one, two] = self.sources()?;
        let content = content.load(one.needs_roster() || two.needs_roster())?;
        let profiles = [
            content.profile(Side::One, one)?,
            content.profile(Side::Two, two)?,
        ];
        Ok((content, profiles))
    }
}

/// Parses a hex seed of up to 64 digits, left-padded with zeros.
pub fn parse_seed(value: &str) -> Result<Seed, String> {
    let digits = value.trim_start_matches("0x");
    if digits.is_empty() || digits.len() > 64 {
        return Err(format!("expected 1 to 64 hex digits, got {}", digits.len()));
    }
    let padded = format!("{digits:0>64}");
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(&padded, &mut bytes).map_err(|e| e.to_string())?;
    Ok(Seed::new(bytes))
}

/// Parses six comma-separated attributes, or one value for all six.
pub fn parse_attributes(value: &str) -> Result<BaseAttributes, String> {
    let values = value
        .split(',')
        .map(|part| part.trim().parse::<u8>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match values.as_slice() {
        &[all] => Ok(BaseAttributes::uniform(all)),
        &[strength, constitution, size, agility, stamina, luck] => Ok(BaseAttributes::new(
            strength,
            constitution,
            size,
            agility,
            stamina,
            luck,
        )),
        other => Err(format!("expected 1 or 6 attributes, got {}", other.len())),
    }
}

/// Parses `weapon,armor,stance`, e.g. `quarterstaff,leather,defensive`.
pub fn parse_loadout(value: &str) -> Result<Loadout, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let &[weapon, armor, stance] = parts.as_slice() else {
        return Err("expected WEAPON,ARMOR,STANCE".into());
    };
    Ok(Loadout::new(
        weapon.parse().map_err(|_| format!("unknown weapon {weapon:?}"))?,
        armor.parse().map_err(|_| format!("unknown armor {armor:?}"))?,
        stance.parse().map_err(|_| format!("unknown stance {stance:?}"))?,
    ))
}

/// Parses `fighter:skin_index:token`.
pub fn parse_player(value: &str) -> Result<PlayerLoadout, String> {
    let parts: Vec<&str> = value.split(':').collect();
    let &[fighter, index, token] = parts.as_slice() else {
        return Err("expected FIGHTER:SKIN_INDEX:TOKEN".into());
    };
    Ok(PlayerLoadout::new(
        fighter.parse().map_err(|e| format!("fighter {fighter:?}: {e}"))?,
        index.parse().map_err(|e| format!("skin index {index:?}: {e}"))?,
        token.parse().map_err(|e| format!("token {token:?}: {e}"))?,
    ))
}
