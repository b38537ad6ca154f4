//! Placeholder visuals for quest directors and reach zones.

use bevy::prelude::*;
use super::ledger::{QuestDirector, QuestLedger};
use super::reach::QuestReachZone;

const DIRECTOR_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);
const ZONE_COLOR: Color = Color::srgba(1.0, 0.85, 0.2, 0.2);

pub fn attach_director_sprites(
    mut commands: Commands,
    directors: Query<Entity, Added<QuestDirector>>,
) {
    for entity in &directors {
        commands.entity(entity).insert((
            Sprite::from_color(DIRECTOR_COLOR, Vec2::new(0.25, 0.6)),
            Visibility::Visible,
        ));
    }
}

/// Shows a reach zone's area only while its quest is active and unreached.
pub fn sync_reach_zone_sprites(
    mut commands: Commands,
    ledger: Res<QuestLedger>,
    mut zones: Query<(Entity, &QuestReachZone, Option<&mut Visibility>)>,
) {
    for (entity, zone, visibility) in &mut zones {
        let shown = !zone.reached && ledger.contains(&zone.quest_id);
        let wanted = if shown {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        match visibility {
            Some(mut visibility) => {
                if *visibility != wanted {
                    *visibility = wanted;
                }
            }
            None => {
                commands.entity(entity).insert((
                    Sprite::from_color(ZONE_COLOR, Vec2::splat(zone.radius * 2.0)),
                    wanted,
                ));
            }
        }
    }
}
