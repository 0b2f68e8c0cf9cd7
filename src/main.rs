//! Demo battle: a skeleton fights a zombie to the death, with each
//! attack narrated on stdout.

use mobfight::constants::*;
use mobfight::{narrate_battle, Mob};

fn main() {
    let mut skeleton = Mob::new(
        SKELETON_NAME.to_string(),
        SKELETON_MAX_HEALTH,
        SKELETON_MAX_STRENGTH,
    );
    let mut zombie = Mob::new(
        ZOMBIE_NAME.to_string(),
        ZOMBIE_MAX_HEALTH,
        ZOMBIE_MAX_STRENGTH,
    );

    narrate_battle(&mut skeleton, &mut zombie);
}
