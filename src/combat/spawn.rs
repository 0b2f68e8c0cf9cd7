use rand::Rng;

use super::mob::Mob;
use crate::constants::*;

/// Generates a three-part hostile mob name, e.g. "Gravemaw Skeleton".
pub fn generate_mob_name(rng: &mut impl Rng) -> String {
    let prefixes = [
        "Rot", "Grave", "Bone", "Husk", "Gloom", "Ash", "Mire", "Dusk", "Fen", "Crag",
    ];
    let roots = [
        "ted", "maw", "jaw", "shank", "claw", "fang", "gut", "snap", "brow", "hide",
    ];
    let suffixes = [
        "Zombie", "Skeleton", "Creeper", "Spider", "Ghoul", "Witch", "Shambler", "Stray",
        "Phantom", "Ravager",
    ];

    let prefix = prefixes[rng.gen_range(0..prefixes.len())];
    let root = roots[rng.gen_range(0..roots.len())];
    let suffix = suffixes[rng.gen_range(0..suffixes.len())];

    format!("{}{} {}", prefix, root, suffix)
}

/// Generates a random full-health mob within the spawn stat ranges.
///
/// The RNG is caller-supplied so simulation runs can be seeded.
pub fn generate_mob(rng: &mut impl Rng) -> Mob {
    let name = generate_mob_name(rng);
    let max_health = rng.gen_range(SPAWN_MIN_HEALTH..=SPAWN_MAX_HEALTH);
    let max_strength = rng.gen_range(SPAWN_MIN_STRENGTH..=SPAWN_MAX_STRENGTH);
    Mob::new(name, max_health, max_strength)
}
