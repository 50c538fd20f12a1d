//! Print the derived profile of a fighter.

use anyhow::Result;
use clap::Parser;
use console::style;
use duel_core::combat::ActionCosts;
use duel_core::{BaseAttributes, FighterProfile, Loadout, Side};

use crate::args::{ContentArgs, FighterSource, parse_attributes, parse_loadout};

/// Print the derived profile of a fighter
#[derive(Parser)]
pub struct Stats {
    #[command(flatten)]
    content: ContentArgs,

    /// Attributes, STR,CON,SIZE,AGI,STA,LUCK or one value for all six
    #[arg(long, value_name = "ATTRS", value_parser = parse_attributes, default_value = "12")]
    attrs: BaseAttributes,

    /// Equipment, WEAPON,ARMOR,STANCE
    #[arg(long, value_name = "LOADOUT", value_parser = parse_loadout)]
    loadout: Loadout,

    /// Print the profile and costs as JSON
    #[arg(long)]
    json: bool,
}

impl Stats {
    pub fn execute(self) -> Result<()> {
        let content = self.content.load(false)?;
        let profile =
            content.profile(Side::One, FighterSource::Inline(self.attrs, self.loadout))?;
        let costs = ActionCosts::for_fighter(&profile, &content.rules);

        tracing::info!(
            loadout = ?profile.loadout,
            max_health = profile.stats.max_health,
            tempo = profile.tempo(),
            "profile built"
        );

        if self.json {
            let value = serde_json::json!({ "profile": profile, "costs": costs });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            print_profile(&profile, &costs);
        }
        Ok(())
    }
}

fn print_profile(profile: &FighterProfile, costs: &ActionCosts) {
    let stats = &profile.stats;
    let loadout = profile.loadout;
    println!(
        "{} {} {} {}",
        style("Loadout:").bold().cyan(),
        loadout.weapon,
        loadout.armor,
        loadout.stance
    );
    println!("{} {:?}", style("Attributes:").bold().cyan(), profile.attributes);
    println!();

    println!("{}", style("=== Derived Stats ===").bold().green());
    let rows = [
        ("max health", stats.max_health),
        ("max endurance", stats.max_endurance),
        ("initiative", stats.initiative),
        ("hit chance", stats.hit_chance),
        ("dodge chance", stats.dodge_chance),
        ("block chance", stats.block_chance),
        ("parry chance", stats.parry_chance),
        ("crit chance", stats.crit_chance),
        ("crit multiplier", stats.crit_multiplier),
        ("counter chance", stats.counter_chance),
        ("damage modifier", stats.damage_modifier),
        ("tempo", profile.tempo()),
        ("effective initiative", profile.effective_initiative()),
    ];
    for (name, value) in rows {
        println!("  {name:<22}{value:>6}");
    }
    println!();

    println!("{}", style("=== Stamina Costs ===").bold().green());
    let rows = [
        ("attack", costs.attack),
        ("miss", costs.miss),
        ("block", costs.block),
        ("parry", costs.parry),
        ("dodge", costs.dodge),
        ("counter", costs.counter),
        ("exhausted below", costs.minimum),
    ];
    for (name, value) in rows {
        println!("  {name:<22}{value:>6}");
    }
}
