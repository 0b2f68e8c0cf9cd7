// Demo mobs (skeleton vs zombie)
pub const SKELETON_NAME: &str = "skeleton";
pub const SKELETON_MAX_HEALTH: u32 = 20;
pub const SKELETON_MAX_STRENGTH: u32 = 2;
pub const ZOMBIE_NAME: &str = "zombie";
pub const ZOMBIE_MAX_HEALTH: u32 = 15;
pub const ZOMBIE_MAX_STRENGTH: u32 = 3;

// Spawn stat ranges for randomly generated mobs (simulator)
pub const SPAWN_MIN_HEALTH: u32 = 10;
pub const SPAWN_MAX_HEALTH: u32 = 40;
pub const SPAWN_MIN_STRENGTH: u32 = 1;
pub const SPAWN_MAX_STRENGTH: u32 = 6;
