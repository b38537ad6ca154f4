use bevy::prelude::*;
use crate::shared::*;

/// Applies host-reported hits to the player's health.
pub fn apply_player_hits(
    mut hits: EventReader<PlayerHitEvent>,
    mut query: Query<&mut Health, With<Player>>,
) {
    let Ok(mut health) = query.get_single_mut() else {
        hits.clear();
        return;
    };
    for hit in hits.read() {
        if health.is_dead() {
            continue;
        }
        health.damage(hit.damage);
        if health.is_dead() {
            warn!("[Player] Player died.");
        }
    }
}
