//! Resolution of a single attack round.

use crate::combat::{
    ActionCosts, ActionOutcome, CombatAction, CombatResultType, Side, check_hit,
    effective_hit_chance, resolve_defense, roll_strike,
};
use crate::env::SeedStream;
use crate::stats::FighterProfile;

use super::state::CombatState;

/// The two fighters of a duel with their resolved stamina prices.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Corner<'a> {
    pub profile: &'a FighterProfile,
    pub costs: ActionCosts,
}

/// What a round did, before it is written to the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RoundOutcome {
    pub action: CombatAction,
    /// Side left standing when someone's health hit zero this round.
    pub knockout: Option<Side>,
}

/// Resolves one round with `attacker_side` on the attack and applies it to
/// `state`.
///
/// Draw order: hit, damage, crit, then one draw per defensive check and the
/// counter rolls. A miss or an exhausted attacker stops after the hit draw
/// (or before it).
pub(crate) fn resolve_round(
    corners: &[Corner<'_>; 2],
    attacker_side: Side,
    state: &mut CombatState,
    stream: SeedStream,
) -> (RoundOutcome, SeedStream) {
    let defender_side = attacker_side.opponent();
    let attacker = &corners[attacker_side.index()];
    let defender = &corners[defender_side.index()];

    let stamina = state.fighter(attacker_side).stamina;
    if stamina < attacker.costs.attack {
        state.fighter_mut(attacker_side).spend(stamina);
        let action = CombatAction::new(
            ActionOutcome::saturating(CombatResultType::Exhausted, 0, stamina),
            ActionOutcome::idle(),
        );
        return (finish(action, None), stream);
    }

    let (hit, stream) = check_hit(effective_hit_chance(defender.profile), stream);
    if !hit {
        let cost = attacker.costs.miss;
        state.fighter_mut(attacker_side).spend(cost);
        let action = CombatAction::new(
            ActionOutcome::saturating(CombatResultType::Miss, 0, cost),
            ActionOutcome::idle(),
        );
        return (finish(action, None), stream);
    }

    let (strike, stream) = roll_strike(attacker.profile, stream);
    let (defense, stream) = resolve_defense(
        attacker.profile,
        defender.profile,
        state.fighter(defender_side).stamina,
        &defender.costs,
        &strike,
        stream,
    );

    state.fighter_mut(attacker_side).spend(attacker.costs.attack);
    state.fighter_mut(defender_side).spend(defense.stamina);

    let attack_result = if strike.critical {
        CombatResultType::Crit
    } else {
        CombatResultType::Attack
    };
    let action = CombatAction::new(
        ActionOutcome::saturating(attack_result, defense.landed, attacker.costs.attack),
        ActionOutcome::saturating(defense.result, defense.counter_damage, defense.stamina),
    );

    // Attack damage first, then the counter. Only a prevented attack can be
    // countered, so at most one of these lands.
    state.fighter_mut(defender_side).take_damage(defense.landed);
    if state.fighter(defender_side).is_down() {
        return (finish(action, Some(attacker_side)), stream);
    }
    state.fighter_mut(attacker_side).take_damage(defense.counter_damage);
    if state.fighter(attacker_side).is_down() {
        return (finish(action, Some(defender_side)), stream);
    }

    (finish(action, None), stream)
}

fn finish(action: CombatAction, knockout: Option<Side>) -> RoundOutcome {
    RoundOutcome { action, knockout }
}
