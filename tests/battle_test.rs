//! Integration tests for mob state, attack resolution, and the
//! deterministic skeleton-vs-zombie demo battle.

use mobfight::constants::*;
use mobfight::{attack, run_battle, AttackOutcome, BattleEvent, Mob};

fn skeleton() -> Mob {
    Mob::new(
        SKELETON_NAME.to_string(),
        SKELETON_MAX_HEALTH,
        SKELETON_MAX_STRENGTH,
    )
}

fn zombie() -> Mob {
    Mob::new(
        ZOMBIE_NAME.to_string(),
        ZOMBIE_MAX_HEALTH,
        ZOMBIE_MAX_STRENGTH,
    )
}

#[test]
fn accessors_report_construction_values() {
    let mob = skeleton();
    assert_eq!(mob.name(), "skeleton");
    assert_eq!(mob.max_health(), 20);
    assert_eq!(mob.health(), 20);
    assert_eq!(mob.max_strength(), 2);
}

#[test]
fn health_stays_in_bounds_over_damage_sequences() {
    let mut mob = skeleton();
    for amount in [0, 3, 7, 100, 2] {
        mob.take_damage(amount);
        assert!(mob.health() <= mob.max_health());
    }
    assert_eq!(mob.health(), 0);
}

#[test]
fn exact_lethal_damage_zeroes_health() {
    let mut mob = zombie();
    mob.take_damage(mob.health());
    assert_eq!(mob.health(), 0);
    assert!(!mob.is_alive());
    assert!(mob.is_injured());
}

#[test]
fn strength_scales_by_health_fraction() {
    let mut mob = Mob::new("skeleton".to_string(), 20, 10);
    assert_eq!(mob.current_strength(), 10);
    mob.take_damage(10);
    assert_eq!(mob.current_strength(), 5);
    mob.take_damage(10);
    assert_eq!(mob.current_strength(), 0);
}

#[test]
fn full_health_skeleton_hits_for_its_max_strength() {
    let mob = skeleton();
    // ceil(20 * 2 / 20) = 2
    assert_eq!(mob.current_strength(), 2);
}

#[test]
fn attack_refuses_self_and_changes_nothing() {
    let mut mob = skeleton();
    let same = mob.clone();
    let outcome = attack(&same, &mut mob);
    assert_eq!(outcome.to_string(), "A mob cannot attack itself!");
    assert_eq!(mob.health(), mob.max_health());
}

#[test]
fn attack_refuses_dead_attacker_and_changes_nothing() {
    let mut attacker = skeleton();
    attacker.take_damage(attacker.max_health());
    let mut defender = zombie();

    let outcome = attack(&attacker, &mut defender);
    assert_eq!(
        outcome.to_string(),
        "The dead skeleton cannot attack healthy zombie."
    );
    assert_eq!(defender.health(), defender.max_health());
}

#[test]
fn attack_refuses_dead_defender_and_changes_nothing() {
    let attacker = skeleton();
    let mut defender = zombie();
    defender.take_damage(defender.max_health());

    let outcome = attack(&attacker, &mut defender);
    assert_eq!(outcome.to_string(), "The zombie is already dead.");
    assert_eq!(defender.health(), 0);
}

#[test]
fn attack_damages_defender_by_current_strength() {
    let attacker = skeleton();
    let mut defender = zombie();

    let outcome = attack(&attacker, &mut defender);
    let expected_health = ZOMBIE_MAX_HEALTH - attacker.current_strength();
    assert_eq!(
        outcome.to_string(),
        format!(
            "The skeleton does 2 damage to the zombie, which now has a health of {}.",
            expected_health
        )
    );
    assert_eq!(defender.health(), 13);
    // Attacker is untouched.
    assert_eq!(attacker.health(), attacker.max_health());
}

#[test]
fn attack_reports_kill_without_negative_health() {
    let attacker = skeleton();
    let mut defender = zombie();
    defender.take_damage(defender.max_health() - 1);

    let outcome = attack(&attacker, &mut defender);
    assert_eq!(
        outcome.to_string(),
        "The skeleton does 2 damage to the zombie, which is now dead."
    );
    assert_eq!(defender.health(), 0);
    assert!(!defender.is_alive());
}

#[test]
fn battle_refuses_same_mob() {
    let mut mob = skeleton();
    let mut same = mob.clone();
    let events = run_battle(&mut mob, &mut same);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].to_string(), "The skeleton cannot battle itself!");
    assert_eq!(mob.health(), mob.max_health());
}

// The demo matchup is fully deterministic: the skeleton lands the first
// hit every round and wins on round 11 with 3 health left.
#[test]
fn skeleton_beats_zombie_in_21_attacks() {
    let mut skeleton = skeleton();
    let mut zombie = zombie();
    let events = run_battle(&mut skeleton, &mut zombie);

    let attacks = events
        .iter()
        .filter(|e| matches!(e, BattleEvent::Attack(_)))
        .count();
    assert_eq!(attacks, 21);
    assert_eq!(events.len(), 22);

    assert_eq!(
        events[0].to_string(),
        "The skeleton does 2 damage to the zombie, which now has a health of 13."
    );
    assert_eq!(
        events[1].to_string(),
        "The zombie does 3 damage to the skeleton, which now has a health of 17."
    );
    assert_eq!(
        events[events.len() - 2].to_string(),
        "The skeleton does 1 damage to the zombie, which is now dead."
    );
    assert_eq!(events.last().unwrap().to_string(), "The skeleton triumphs!");

    assert!(skeleton.is_alive());
    assert_eq!(skeleton.health(), 3);
    assert!(!zombie.is_alive());
}

#[test]
fn battle_winner_is_the_surviving_mob() {
    let mut strong = Mob::new("ravager".to_string(), 30, 6);
    let mut weak = Mob::new("silverfish".to_string(), 8, 1);
    let events = run_battle(&mut strong, &mut weak);

    assert_eq!(
        events.last(),
        Some(&BattleEvent::Triumph {
            winner: "ravager".to_string()
        })
    );
    assert!(strong.is_alive());
    assert!(!weak.is_alive());
}

#[test]
fn second_mob_can_win() {
    let mut weak = Mob::new("silverfish".to_string(), 8, 1);
    let mut strong = Mob::new("ravager".to_string(), 30, 6);
    let events = run_battle(&mut weak, &mut strong);

    assert_eq!(events.last().unwrap().to_string(), "The ravager triumphs!");
    assert!(strong.is_alive());
}

#[test]
fn attack_outcomes_serialize_for_transcripts() {
    let attacker = skeleton();
    let mut defender = zombie();
    let outcome = attack(&attacker, &mut defender);

    let json = serde_json::to_string(&outcome).unwrap();
    let back: AttackOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
}
