use std::collections::HashMap;

use duel_core::{
    ArmorKind, BaseAttributes, CombatEngine, CombatError, CombatReport, CombatResultType,
    CombatRules, DuelEnv, FighterOracle, FighterProfile, Loadout, OracleError, PlayerLoadout,
    Seed, Side, SkinOracle, StandardTables, Stance, WeaponKind, WinCondition, decode, encode,
    peek_outcome,
};

fn fighter(weapon: WeaponKind, armor: ArmorKind, stance: Stance) -> FighterProfile {
    FighterProfile::build(
        BaseAttributes::uniform(10),
        Loadout::new(weapon, armor, stance),
        &StandardTables,
    )
    .expect("standard tables cover every loadout")
}

fn balanced(weapon: WeaponKind) -> FighterProfile {
    fighter(weapon, ArmorKind::Leather, Stance::Balanced)
}

/// Blocks, parries and dodges everything, never tires, and lets every
/// incoming attack pass the hit check.
fn wall() -> FighterProfile {
    let mut profile = balanced(WeaponKind::RapierAndShield);
    profile.stats.max_endurance = 10_000;
    profile.stats.hit_chance = 100;
    profile.stats.block_chance = 100;
    profile.stats.parry_chance = 100;
    profile.stats.dodge_chance = 100;
    profile.stats.counter_chance = 0;
    profile
}

fn run(
    rules: &CombatRules,
    one: &FighterProfile,
    two: &FighterProfile,
    seed: u64,
) -> CombatReport {
    CombatEngine::new(rules)
        .simulate(one, two, Seed::from_u64(seed))
        .expect("valid profiles always simulate")
}

fn sweep(
    one: &FighterProfile,
    two: &FighterProfile,
    seeds: u64,
) -> impl Iterator<Item = CombatReport> {
    let rules = CombatRules::default();
    let (one, two) = (*one, *two);
    (0..seeds).map(move |seed| run(&rules, &one, &two, seed))
}

fn matchups() -> Vec<(FighterProfile, FighterProfile)> {
    vec![
        (balanced(WeaponKind::SwordAndShield), balanced(WeaponKind::SwordAndShield)),
        (
            fighter(WeaponKind::Quarterstaff, ArmorKind::Cloth, Stance::Defensive),
            fighter(WeaponKind::Battleaxe, ArmorKind::Plate, Stance::Offensive),
        ),
        (
            fighter(WeaponKind::Greatsword, ArmorKind::Chain, Stance::Offensive),
            fighter(WeaponKind::RapierAndShield, ArmorKind::Leather, Stance::Defensive),
        ),
        (balanced(WeaponKind::Spear), balanced(WeaponKind::MaceAndShield)),
    ]
}

// ============================================================================
// Determinism and bounds
// ============================================================================

#[test]
fn same_inputs_same_bytes() {
    let rules = CombatRules::default();
    for (one, two) in matchups() {
        for seed in 0..20 {
            let first = run(&rules, &one, &two, seed);
            let second = run(&rules, &one, &two, seed);
            assert_eq!(first, second);
            assert_eq!(encode(&first.log), encode(&second.log));
        }
    }
}

#[test]
fn different_seeds_diverge() {
    let one = balanced(WeaponKind::SwordAndShield);
    let logs: Vec<_> = sweep(&one, &one, 20).map(|r| encode(&r.log)).collect();
    assert!(logs.windows(2).any(|pair| pair[0] != pair[1]));
}

#[test]
fn fights_never_exceed_the_round_cap() {
    for (one, two) in matchups() {
        for report in sweep(&one, &two, 100) {
            assert!(report.log.rounds() <= CombatRules::MAX_ROUNDS);
            assert_eq!(report.trace.len(), report.log.rounds());
            assert_eq!(report.state.round as usize, report.log.rounds());
            if report.condition() == WinCondition::MaxRounds {
                assert_eq!(report.log.rounds(), CombatRules::MAX_ROUNDS);
            }
        }
    }
}

#[test]
fn health_and_stamina_only_go_down() {
    for (one, two) in matchups() {
        for report in sweep(&one, &two, 50) {
            let mut health = [one.stats.max_health, two.stats.max_health];
            let mut stamina = [one.stats.max_endurance, two.stats.max_endurance];
            for round in &report.trace {
                for side in Side::BOTH {
                    let i = side.index();
                    assert!(round.health[i] <= health[i]);
                    assert!(round.stamina[i] <= stamina[i]);
                }
                health = round.health;
                stamina = round.stamina;
            }
            assert_eq!(report.state.health(), health);
        }
    }
}

#[test]
fn health_wins_leave_the_loser_at_zero() {
    for (one, two) in matchups() {
        for report in sweep(&one, &two, 100) {
            if report.condition() == WinCondition::Health {
                let loser = report.winner().opponent();
                assert_eq!(report.state.fighter(loser).health, 0);
                assert!(report.state.fighter(report.winner()).health > 0);
            }
        }
    }
}

#[test]
fn simulated_logs_survive_the_codec() {
    for (one, two) in matchups() {
        for report in sweep(&one, &two, 40) {
            let bytes = encode(&report.log);
            assert_eq!(decode(&bytes).unwrap(), report.log);
            assert_eq!(
                peek_outcome(&bytes).unwrap(),
                (report.winner(), report.condition())
            );
        }
    }
}

// ============================================================================
// Turn order
// ============================================================================

#[test]
fn identical_loadouts_alternate_every_round() {
    let one = balanced(WeaponKind::Spear);
    for report in sweep(&one, &one, 200) {
        for pair in report.trace.windows(2) {
            assert_ne!(pair[0].attacker, pair[1].attacker);
        }
        let diff = report.attacks_by(Side::One).abs_diff(report.attacks_by(Side::Two));
        assert!(diff <= 1);
        assert_eq!(
            report.attacks_by(Side::One) + report.attacks_by(Side::Two),
            report.log.rounds()
        );
    }
}

#[test]
fn higher_initiative_always_opens() {
    let fast = fighter(WeaponKind::Quarterstaff, ArmorKind::Cloth, Stance::Balanced);
    let slow = fighter(WeaponKind::Battleaxe, ArmorKind::Plate, Stance::Balanced);
    assert!(fast.effective_initiative() > slow.effective_initiative());

    for report in sweep(&slow, &fast, 200) {
        assert_eq!(report.opener, Side::Two);
        if let Some(first) = report.trace.first() {
            assert_eq!(first.attacker, Side::Two);
        }
    }
}

#[test]
fn tied_initiative_splits_the_opening() {
    let one = balanced(WeaponKind::SwordAndShield);
    let openers_one = sweep(&one, &one, 1_000)
        .filter(|report| report.opener == Side::One)
        .count();
    assert!(
        (400..=600).contains(&openers_one),
        "side one opened {openers_one} of 1000"
    );
}

#[test]
fn fast_weapons_attack_more_often() {
    let fast = fighter(WeaponKind::Quarterstaff, ArmorKind::Leather, Stance::Defensive);
    let slow = fighter(WeaponKind::Battleaxe, ArmorKind::Leather, Stance::Offensive);

    let (mut fast_attacks, mut slow_attacks) = (0usize, 0usize);
    for report in sweep(&fast, &slow, 300) {
        fast_attacks += report.attacks_by(Side::One);
        slow_attacks += report.attacks_by(Side::Two);
    }

    let ratio = fast_attacks as f64 / slow_attacks as f64;
    assert!(
        (1.5..=3.0).contains(&ratio),
        "fast {fast_attacks} vs slow {slow_attacks}"
    );
}

// ============================================================================
// Defense priority
// ============================================================================

fn defender_results(rules: &CombatRules, defender: &FighterProfile) -> Vec<CombatResultType> {
    let attacker = balanced(WeaponKind::SwordAndShield);
    let mut results = Vec::new();
    for seed in 0..30 {
        let report = run(rules, &attacker, defender, seed);
        for (action, round) in report.rounds() {
            let landed = matches!(
                action.attacker.result,
                CombatResultType::Attack | CombatResultType::Crit
            );
            if round.attacker == Side::One && landed {
                results.push(action.defender.result);
            }
        }
    }
    results
}

#[test]
fn block_takes_priority() {
    let results = defender_results(&CombatRules::default(), &wall());
    assert!(!results.is_empty());
    assert!(results.iter().all(|&r| r == CombatResultType::Block));
}

#[test]
fn unaffordable_defenses_fall_through_in_order() {
    // Every forced cost exceeds the wall's whole endurance pool.
    let no_block = CombatRules {
        block_cost: 20_000,
        ..CombatRules::default()
    };
    let results = defender_results(&no_block, &wall());
    assert!(!results.is_empty());
    assert!(results.iter().all(|&r| r == CombatResultType::Parry));

    let no_parry = CombatRules {
        parry_cost: 20_000,
        ..no_block.clone()
    };
    let results = defender_results(&no_parry, &wall());
    assert!(!results.is_empty());
    assert!(results.iter().all(|&r| r == CombatResultType::Dodge));

    let nothing = CombatRules {
        dodge_cost: 20_000,
        ..no_parry
    };
    let results = defender_results(&nothing, &wall());
    assert!(!results.is_empty());
    assert!(results.iter().all(|&r| r == CombatResultType::Hit));
}

// ============================================================================
// Termination conditions
// ============================================================================

#[test]
fn nobody_hits_so_the_round_cap_fires() {
    let mut one = balanced(WeaponKind::SwordAndShield);
    one.stats.hit_chance = 0;

    let mut winners = [0usize; 2];
    for report in sweep(&one, &one, 100) {
        assert_eq!(report.condition(), WinCondition::MaxRounds);
        assert_eq!(report.log.rounds(), CombatRules::MAX_ROUNDS);
        assert!(
            report
                .log
                .actions
                .iter()
                .all(|a| a.attacker.result == CombatResultType::Miss)
        );
        winners[report.winner().index()] += 1;
    }
    assert!(winners.iter().all(|&w| w > 20), "tie-breaks: {winners:?}");

    let mut two = one;
    two.stats.max_health -= 1;
    for report in sweep(&one, &two, 20) {
        assert_eq!(report.winner(), Side::One);
        assert_eq!(report.condition(), WinCondition::MaxRounds);
    }
}

#[test]
fn drained_fighter_loses_by_exhaustion() {
    let fresh = balanced(WeaponKind::SwordAndShield);
    let mut tired = fresh;
    tired.stats.max_endurance = 2;

    for report in sweep(&tired, &fresh, 20) {
        assert_eq!(report.winner(), Side::Two);
        assert_eq!(report.condition(), WinCondition::Exhaustion);
        assert_eq!(report.log.rounds(), 0);
    }

    let mut winners = [0usize; 2];
    for report in sweep(&tired, &tired, 100) {
        assert_eq!(report.condition(), WinCondition::Exhaustion);
        assert_eq!(report.log.rounds(), 0);
        winners[report.winner().index()] += 1;
    }
    assert!(winners.iter().all(|&w| w > 20));
}

#[test]
fn low_endurance_runs_out_mid_fight() {
    let fresh = balanced(WeaponKind::SwordAndShield);
    let mut tired = fresh;
    tired.stats.max_endurance = 12;

    for report in sweep(&tired, &fresh, 50) {
        assert_eq!(report.winner(), Side::Two);
        assert_eq!(report.condition(), WinCondition::Exhaustion);
        assert!(report.log.rounds() > 0);
        assert!(report.state.fighter(Side::One).stamina < 3);

        for (action, round) in report.rounds() {
            if action.attacker.result == CombatResultType::Exhausted {
                assert_eq!(round.attacker, Side::One);
                assert_eq!(round.stamina[0], 0);
                assert_eq!(action.defender.result, CombatResultType::Miss);
            }
        }
    }
}

#[test]
fn counter_can_end_the_fight_for_the_defender() {
    let mut glass = balanced(WeaponKind::Quarterstaff);
    glass.stats.max_health = 1;
    let mut riposte = wall();
    riposte.stats.counter_chance = 100;

    for report in sweep(&glass, &riposte, 30) {
        assert_eq!(report.opener, Side::One);
        assert_eq!(report.winner(), Side::Two);
        assert_eq!(report.condition(), WinCondition::Health);
        assert_eq!(report.log.rounds(), 1);

        let action = report.log.actions[0];
        assert!(action.defender.result.is_counter());
        assert!(action.defender.damage > 0);
        assert_eq!(report.state.fighter(Side::Two).health, riposte.stats.max_health);
    }
}

// ============================================================================
// Collaborator resolution
// ============================================================================

#[derive(Default)]
struct Registry {
    fighters: HashMap<u32, BaseAttributes>,
    skins: HashMap<(u32, u16), Loadout>,
}

impl FighterOracle for Registry {
    fn base_attributes(&self, fighter_id: u32) -> Option<BaseAttributes> {
        self.fighters.get(&fighter_id).copied()
    }
}

impl SkinOracle for Registry {
    fn loadout(&self, skin_index: u32, token_id: u16) -> Option<Loadout> {
        self.skins.get(&(skin_index, token_id)).copied()
    }
}

fn registry() -> Registry {
    let mut registry = Registry::default();
    registry.fighters.insert(1, BaseAttributes::new(14, 12, 10, 8, 11, 9));
    registry.fighters.insert(2, BaseAttributes::new(8, 10, 7, 16, 12, 13));
    registry.skins.insert(
        (0, 1),
        Loadout::new(WeaponKind::Greatsword, ArmorKind::Chain, Stance::Offensive),
    );
    registry.skins.insert(
        (0, 2),
        Loadout::new(WeaponKind::RapierAndShield, ArmorKind::Leather, Stance::Defensive),
    );
    registry
}

#[test]
fn resolve_duel_matches_prebuilt_profiles() {
    let registry = registry();
    let env = DuelEnv::new(&registry, &registry, &StandardTables);
    let rules = CombatRules::default();
    let engine = CombatEngine::new(&rules);

    let one = PlayerLoadout::new(1, 0, 1);
    let two = PlayerLoadout::new(2, 0, 2);
    let report = engine
        .resolve_duel(&env, &one, &two, Seed::from_u64(77))
        .unwrap();

    let built = |id: u32, token: u16| {
        FighterProfile::build(
            registry.fighters[&id],
            registry.skins[&(0, token)],
            &StandardTables,
        )
        .unwrap()
    };
    let direct = engine
        .simulate(&built(1, 1), &built(2, 2), Seed::from_u64(77))
        .unwrap();
    assert_eq!(report, direct);
}

#[test]
fn unknown_records_abort_the_duel() {
    let registry = registry();
    let env = DuelEnv::new(&registry, &registry, &StandardTables);
    let rules = CombatRules::default();
    let engine = CombatEngine::new(&rules);

    let err = engine
        .resolve_duel(
            &env,
            &PlayerLoadout::new(1, 0, 1),
            &PlayerLoadout::new(99, 0, 2),
            Seed::default(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        CombatError::Oracle {
            side: Side::Two,
            error: OracleError::FighterNotFound(99),
        }
    );

    let err = engine
        .resolve_duel(
            &env,
            &PlayerLoadout::new(1, 7, 7),
            &PlayerLoadout::new(2, 0, 2),
            Seed::default(),
        )
        .unwrap_err();
    assert_eq!(err.side(), Some(Side::One));
}
