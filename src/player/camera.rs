use bevy::prelude::*;
use crate::shared::*;

const FOLLOW_LERP_SPEED: f32 = 5.0;

/// Smoothly follow the player with the camera using a lerp.
pub fn camera_follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let Ok(mut cam_tf) = camera_query.get_single_mut() else {
        return;
    };

    let target = player.translation.truncate();
    let t = (FOLLOW_LERP_SPEED * time.delta_secs()).min(1.0);
    let smooth = cam_tf.translation.truncate().lerp(target, t);
    cam_tf.translation.x = smooth.x;
    cam_tf.translation.y = smooth.y;
}
