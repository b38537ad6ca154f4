use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .init_resource::<PlayerInput>()
            .add_systems(PreUpdate, reset_and_read_input);
    }
}

/// Rebindable keyboard layout.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub interact: KeyCode,
    pub fire: KeyCode,
    pub close_shop: KeyCode,
    /// Shop entries in `ShopItem::ALL` order.
    pub shop_entries: [KeyCode; 4],
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            interact: KeyCode::KeyF,
            fire: KeyCode::Space,
            close_shop: KeyCode::Digit5,
            shop_entries: [
                KeyCode::Digit1,
                KeyCode::Digit2,
                KeyCode::Digit3,
                KeyCode::Digit4,
            ],
        }
    }
}

/// The single point where hardware input becomes game actions.
fn reset_and_read_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    bindings: Res<KeyBindings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut input: ResMut<PlayerInput>,
) {
    *input = PlayerInput::default();

    let mut axis = Vec2::ZERO;
    if keys.pressed(bindings.move_up) || keys.pressed(KeyCode::ArrowUp) {
        axis.y += 1.0;
    }
    if keys.pressed(bindings.move_down) || keys.pressed(KeyCode::ArrowDown) {
        axis.y -= 1.0;
    }
    if keys.pressed(bindings.move_left) || keys.pressed(KeyCode::ArrowLeft) {
        axis.x -= 1.0;
    }
    if keys.pressed(bindings.move_right) || keys.pressed(KeyCode::ArrowRight) {
        axis.x += 1.0;
    }
    input.move_axis = axis.normalize_or_zero();

    input.interact = keys.just_pressed(bindings.interact);
    input.fire_held = keys.pressed(bindings.fire) || mouse.pressed(MouseButton::Left);
    input.close_shop = keys.just_pressed(bindings.close_shop);

    input.aim_point = windows
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position())
        .zip(cameras.get_single().ok())
        .and_then(|(cursor, (camera, camera_transform))| {
            camera.viewport_to_world_2d(camera_transform, cursor).ok()
        });

    input.shop_choice = bindings
        .shop_entries
        .iter()
        .position(|key| keys.just_pressed(*key))
        .map(|i| i as u8 + 1);
}
