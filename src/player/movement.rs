use bevy::prelude::*;
use crate::shared::*;

/// Kinematic top-down movement in world units per second.
#[derive(Component, Debug, Clone)]
pub struct PlayerMovement {
    pub speed: f32,
    /// Last non-zero movement direction.
    pub facing: Vec2,
    pub is_moving: bool,
}

impl Default for PlayerMovement {
    fn default() -> Self {
        Self {
            speed: 5.0,
            facing: Vec2::NEG_Y,
            is_moving: false,
        }
    }
}

/// Displacement for one frame. Diagonals are normalized so they are not
/// faster than cardinal moves.
pub fn step(axis: Vec2, speed: f32, dt: f32) -> Vec2 {
    axis.normalize_or_zero() * speed * dt
}

pub fn player_movement(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut query: Query<(&mut Transform, &mut PlayerMovement), With<Player>>,
) {
    let Ok((mut transform, mut movement)) = query.get_single_mut() else {
        return;
    };

    let delta = step(input.move_axis, movement.speed, time.delta_secs());
    movement.is_moving = delta != Vec2::ZERO;
    if movement.is_moving {
        movement.facing = input.move_axis.normalize_or_zero();
        transform.translation += delta.extend(0.0);
    }
}
