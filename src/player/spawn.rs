use bevy::prelude::*;
use crate::shared::*;
use super::movement::PlayerMovement;
use super::shooting::Weapon;

/// Where the player appears when the district loads.
pub const SPAWN_POINT: Vec2 = Vec2::new(0.0, 0.0);

/// Spawn the player entity with all necessary components.
/// Runs once on `OnEnter(GameState::Playing)`.
pub fn spawn_player(
    mut commands: Commands,
    existing: Query<Entity, With<Player>>,
) {
    // Guard: don't double-spawn if returning to Playing state.
    if !existing.is_empty() {
        return;
    }

    commands.spawn((
        Name::new("Player"),
        Player,
        PlayerMovement::default(),
        Weapon::default(),
        Health::default(),
        // Placeholder sprite, one world unit square.
        Sprite::from_color(Color::srgb(0.2, 0.5, 0.8), Vec2::ONE),
        Transform::from_translation(SPAWN_POINT.extend(Z_ACTOR)),
        Visibility::default(),
    ));
    info!("[Player] Spawned at {:?}.", SPAWN_POINT);
}
