//! Quest domain: the active-quest ledger, the compass that points at the
//! head quest, reach-zone objectives and the story runner.

pub mod director;
pub mod ledger;
pub mod reach;
pub mod render;
pub mod story;

use bevy::prelude::*;
use crate::shared::*;

pub use director::{director_pose, DirectorPose};
pub use ledger::{Quest, QuestDirector, QuestLedger};
pub use reach::QuestReachZone;
pub use story::StoryQueue;

pub struct QuestPlugin;

impl Plugin for QuestPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<QuestLedger>()
            .init_resource::<StoryQueue>()
            .add_systems(OnEnter(GameState::Playing), story::queue_opening)
            .add_systems(
                Update,
                ledger::resolve_tracked_actor.in_set(NarrativeSet::Resolve),
            )
            .add_systems(
                Update,
                (story::queue_story_hooks, story::run_story_queue)
                    .chain()
                    .in_set(NarrativeSet::Sequence),
            )
            .add_systems(
                Update,
                reach::evaluate_reach_zones.in_set(NarrativeSet::QuestEvaluate),
            )
            .add_systems(
                Update,
                ledger::apply_quest_requests.in_set(NarrativeSet::QuestMutate),
            )
            .add_systems(
                Update,
                (
                    director::update_quest_director,
                    render::attach_director_sprites,
                    render::sync_reach_zone_sprites,
                )
                    .in_set(NarrativeSet::QuestDirect),
            );
    }
}
