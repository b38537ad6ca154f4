//! Text visuals for chat bubbles.

use bevy::prelude::*;
use crate::shared::*;
use super::bubble::ChatBubble;

const BUBBLE_FONT_SIZE: f32 = 16.0;

/// The `Text2d` child that renders a bubble's revealed text.
#[derive(Component)]
pub struct BubbleLabel;

/// Gives every new bubble entity its label child. Pooled entities keep
/// theirs across reuse.
pub fn attach_bubble_labels(
    mut commands: Commands,
    bubbles: Query<Entity, Added<ChatBubble>>,
) {
    for entity in &bubbles {
        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                BubbleLabel,
                Text2d::new(""),
                TextFont {
                    font_size: BUBBLE_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                // Text is laid out in pixels; the world is in units.
                Transform::from_scale(Vec3::splat(1.0 / PIXELS_PER_UNIT)),
            ));
        });
    }
}

pub fn sync_bubble_labels(
    bubbles: Query<(&ChatBubble, &Children), Changed<ChatBubble>>,
    mut labels: Query<(&mut Text2d, &mut TextColor), With<BubbleLabel>>,
) {
    for (bubble, children) in &bubbles {
        for &child in children.iter() {
            let Ok((mut text, mut color)) = labels.get_mut(child) else {
                continue;
            };
            let visible = bubble.visible_text();
            if text.0 != visible {
                text.0 = visible;
            }
            color.0 = Color::WHITE.with_alpha(bubble.alpha);
        }
    }
}
