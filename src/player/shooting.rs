use bevy::prelude::*;
use crate::shared::*;
use super::movement::PlayerMovement;

/// Distance from the player's centre to the muzzle, along the aim.
pub const FIRE_POINT_DISTANCE: f32 = 0.5;

#[derive(Component, Debug, Clone)]
pub struct Weapon {
    /// Seconds between shots while fire is held.
    pub fire_rate: f32,
    pub range: f32,
    fire_timer: f32,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            fire_rate: 0.15,
            range: 20.0,
            fire_timer: 0.0,
        }
    }
}

impl Weapon {
    /// Accumulates held time and reports whether a shot goes off this frame.
    /// Time only builds up while the trigger is held.
    pub fn tick(&mut self, dt: f32, held: bool) -> bool {
        if !held {
            return false;
        }
        self.fire_timer += dt;
        if self.fire_timer < self.fire_rate {
            return false;
        }
        self.fire_timer = 0.0;
        true
    }
}

/// Aim toward the cursor, or along the facing when there is none.
pub fn aim_direction(position: Vec2, aim_point: Option<Vec2>, facing: Vec2) -> Vec2 {
    aim_point
        .and_then(|p| (p - position).try_normalize())
        .unwrap_or_else(|| facing.normalize_or_zero())
}

pub fn player_shooting(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut query: Query<(&Transform, &PlayerMovement, &mut Weapon), With<Player>>,
    mut shots: EventWriter<ShotFiredEvent>,
) {
    let Ok((transform, movement, mut weapon)) = query.get_single_mut() else {
        return;
    };
    if !weapon.tick(time.delta_secs(), input.fire_held) {
        return;
    }
    let position = transform.translation.truncate();
    let direction = aim_direction(position, input.aim_point, movement.facing);
    if direction == Vec2::ZERO {
        return;
    }
    shots.send(ShotFiredEvent {
        origin: position + direction * FIRE_POINT_DISTANCE,
        direction,
        range: weapon.range,
    });
}
