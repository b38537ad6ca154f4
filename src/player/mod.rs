mod camera;
mod health;
pub mod movement;
pub mod shooting;
mod spawn;

use bevy::prelude::*;
use crate::shared::*;

pub use movement::PlayerMovement;
pub use shooting::Weapon;
pub use spawn::SPAWN_POINT;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // -- Spawn player when we enter Playing --
        app.add_systems(OnEnter(GameState::Playing), spawn::spawn_player);

        // -- Movement lands before proximity checks read the position --
        app.add_systems(
            Update,
            movement::player_movement.in_set(NarrativeSet::Resolve),
        );

        app.add_systems(
            Update,
            (shooting::player_shooting, health::apply_player_hits).in_set(NarrativeSet::Act),
        );

        app.add_systems(
            Update,
            camera::camera_follow_player.in_set(NarrativeSet::Animate),
        );
    }
}
