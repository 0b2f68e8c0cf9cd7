use serde::{Deserialize, Serialize};
use std::fmt;

use super::mob::Mob;

/// Outcome of a single attack attempt. Rendering via `Display` gives
/// the narration line for the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// Attacker and defender are the same mob; nothing happens.
    SelfAttack,
    /// A dead mob tried to attack; nothing happens. The wording always
    /// calls the defender "healthy", whatever its actual state.
    DeadAttacker { attacker: String, defender: String },
    /// The defender was already dead; nothing happens.
    DeadDefender { defender: String },
    /// Damage landed and the defender survived.
    Hit {
        attacker: String,
        damage: u32,
        defender: String,
        remaining: u32,
    },
    /// Damage landed and killed the defender.
    Kill {
        attacker: String,
        damage: u32,
        defender: String,
    },
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackOutcome::SelfAttack => write!(f, "A mob cannot attack itself!"),
            AttackOutcome::DeadAttacker { attacker, defender } => {
                write!(f, "The dead {} cannot attack healthy {}.", attacker, defender)
            }
            AttackOutcome::DeadDefender { defender } => {
                write!(f, "The {} is already dead.", defender)
            }
            AttackOutcome::Hit {
                attacker,
                damage,
                defender,
                remaining,
            } => write!(
                f,
                "The {} does {} damage to the {}, which now has a health of {}.",
                attacker, damage, defender, remaining
            ),
            AttackOutcome::Kill {
                attacker,
                damage,
                defender,
            } => write!(
                f,
                "The {} does {} damage to the {}, which is now dead.",
                attacker, damage, defender
            ),
        }
    }
}

/// Resolves one attack. Damage equals the attacker's current strength
/// and only lands when both parties are alive and distinct; the refusal
/// cases change no state.
pub fn attack(attacker: &Mob, defender: &mut Mob) -> AttackOutcome {
    if attacker.is_same_mob(defender) {
        return AttackOutcome::SelfAttack;
    }

    if !attacker.is_alive() {
        return AttackOutcome::DeadAttacker {
            attacker: attacker.name().to_string(),
            defender: defender.name().to_string(),
        };
    }

    if !defender.is_alive() {
        return AttackOutcome::DeadDefender {
            defender: defender.name().to_string(),
        };
    }

    let damage = attacker.current_strength();
    defender.take_damage(damage);

    if defender.is_alive() {
        AttackOutcome::Hit {
            attacker: attacker.name().to_string(),
            damage,
            defender: defender.name().to_string(),
            remaining: defender.health(),
        }
    } else {
        AttackOutcome::Kill {
            attacker: attacker.name().to_string(),
            damage,
            defender: defender.name().to_string(),
        }
    }
}

/// One narrated moment of a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// Both sides are the same mob; the battle is refused outright.
    SelfBattle { name: String },
    Attack(AttackOutcome),
    /// The battle is over and `winner` is still standing.
    Triumph { winner: String },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::SelfBattle { name } => {
                write!(f, "The {} cannot battle itself!", name)
            }
            BattleEvent::Attack(outcome) => outcome.fmt(f),
            BattleEvent::Triumph { winner } => write!(f, "The {} triumphs!", winner),
        }
    }
}

/// Runs a battle to the death and returns the event sequence, leaving
/// rendering to the caller.
///
/// `mob1` strikes first each round; `mob2` only strikes back if still
/// alive. Termination is guaranteed: a live mob's strength is at least
/// one, so every round lowers someone's health.
pub fn run_battle(mob1: &mut Mob, mob2: &mut Mob) -> Vec<BattleEvent> {
    if mob1.is_same_mob(mob2) {
        return vec![BattleEvent::SelfBattle {
            name: mob1.name().to_string(),
        }];
    }

    let mut events = Vec::new();
    while mob1.is_alive() && mob2.is_alive() {
        events.push(BattleEvent::Attack(attack(mob1, mob2)));
        if mob2.is_alive() {
            events.push(BattleEvent::Attack(attack(mob2, mob1)));
        }
    }

    let winner = if mob1.is_alive() { &*mob1 } else { &*mob2 };
    events.push(BattleEvent::Triumph {
        winner: winner.name().to_string(),
    });
    events
}

/// Runs a battle and prints each narration line to stdout.
pub fn narrate_battle(mob1: &mut Mob, mob2: &mut Mob) {
    for event in run_battle(mob1, mob2) {
        println!("{}", event);
    }
}
