use bevy::prelude::*;
use crate::shared::*;
use super::ledger::QuestLedger;

pub const DEFAULT_REACH_RADIUS: f32 = 3.0;

/// A quest target that completes its quest when the tracked actor comes
/// within `radius`. Only evaluated while the quest is active.
#[derive(Component, Debug, Clone)]
pub struct QuestReachZone {
    pub quest_id: String,
    pub radius: f32,
    pub reached: bool,
}

impl QuestReachZone {
    pub fn new(quest_id: impl Into<String>) -> Self {
        Self {
            quest_id: quest_id.into(),
            radius: DEFAULT_REACH_RADIUS,
            reached: false,
        }
    }

    pub fn is_reached_at(&self, distance: f32) -> bool {
        distance < self.radius
    }
}

pub fn evaluate_reach_zones(
    ledger: Res<QuestLedger>,
    tracked: Res<TrackedActor>,
    actors: Query<&Transform, Without<QuestReachZone>>,
    mut zones: Query<(&Transform, &mut QuestReachZone)>,
    mut remove: EventWriter<RemoveQuestEvent>,
    mut completed: EventWriter<QuestCompletedEvent>,
) {
    let Some(actor) = tracked.entity.and_then(|e| actors.get(e).ok()) else {
        return;
    };
    let actor = actor.translation.truncate();

    for (transform, mut zone) in zones.iter_mut() {
        if zone.reached || !ledger.contains(&zone.quest_id) {
            continue;
        }
        if zone.is_reached_at(actor.distance(transform.translation.truncate())) {
            zone.reached = true;
            info!("[Quest] Reached target of {}.", zone.quest_id);
            remove.send(RemoveQuestEvent {
                quest_id: zone.quest_id.clone(),
            });
            completed.send(QuestCompletedEvent {
                quest_id: zone.quest_id.clone(),
            });
        }
    }
}
