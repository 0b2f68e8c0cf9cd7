use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A hostile mob: fixed capacity stats plus a mutable health pool.
///
/// Health starts at `max_health` and only ever decreases; once it hits
/// zero the mob is dead and stays dead. Attack strength scales with the
/// remaining health fraction (see [`Mob::current_strength`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mob {
    id: Uuid,
    name: String,
    max_health: u32,
    health: u32,
    max_strength: u32,
}

impl Mob {
    /// Creates a new mob at full health.
    ///
    /// Panics if `max_health` or `max_strength` is zero: a zero-health
    /// mob breaks the strength formula and a zero-strength mob can
    /// never finish a battle.
    pub fn new(name: String, max_health: u32, max_strength: u32) -> Self {
        assert!(max_health > 0, "mob must have positive max health");
        assert!(max_strength > 0, "mob must have positive max strength");
        Self {
            id: Uuid::new_v4(),
            name,
            health: max_health,
            max_health,
            max_strength,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Current health points, never below zero.
    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_strength(&self) -> u32 {
        self.max_strength
    }

    /// Whether this is the same mob instance. Clones keep the identity
    /// of the original, so a mob and its clone count as the same mob.
    pub fn is_same_mob(&self, other: &Mob) -> bool {
        self.id == other.id
    }

    /// Whether this mob has taken any damage. Dead mobs count as injured.
    pub fn is_injured(&self) -> bool {
        self.health < self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Applies damage, saturating at zero health.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Current attack strength: max strength scaled by the remaining
    /// health fraction, rounded up. A dead mob has zero strength; a
    /// live mob always has at least one.
    ///
    /// For example, a mob with max strength 15 at half health attacks
    /// for 8 (0.5 * 15, rounded up).
    pub fn current_strength(&self) -> u32 {
        if self.health == 0 {
            return 0;
        }
        let scaled = self.health as u64 * self.max_strength as u64;
        scaled.div_ceil(self.max_health as u64) as u32
    }
}

/// Renders the mob's status: `"<name> is dead"`, `"injured <name>"`,
/// or `"<name> is alive"`.
impl fmt::Display for Mob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.health == 0 {
            write!(f, "{} is dead", self.name)
        } else if self.health < self.max_health {
            write!(f, "injured {}", self.name)
        } else {
            write!(f, "{} is alive", self.name)
        }
    }
}

/// Value equality over the four stat fields; the identity token is
/// deliberately excluded so two freshly built identical mobs compare equal.
impl PartialEq for Mob {
    fn eq(&self, other: &Self) -> bool {
        self.max_health == other.max_health
            && self.health == other.health
            && self.max_strength == other.max_strength
            && self.name == other.name
    }
}

impl Eq for Mob {}

impl Hash for Mob {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.max_health.hash(state);
        self.health.hash(state);
        self.max_strength.hash(state);
    }
}
