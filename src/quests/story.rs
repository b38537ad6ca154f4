use std::collections::VecDeque;

use bevy::prelude::*;
use crate::shared::*;

/// Pending story beats. Processed one step per frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct StoryQueue {
    pub steps: VecDeque<StoryStep>,
    pub step_timer: f32,
}

impl StoryQueue {
    pub fn extend(&mut self, steps: impl IntoIterator<Item = StoryStep>) {
        self.steps.extend(steps);
    }

    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }

    fn finish_step(&mut self) {
        self.steps.pop_front();
        self.step_timer = 0.0;
    }
}

pub fn queue_opening(script: Res<StoryScript>, mut queue: ResMut<StoryQueue>) {
    if script.opening.is_empty() {
        return;
    }
    info!("[Story] Opening sequence queued ({} steps).", script.opening.len());
    queue.extend(script.opening.iter().cloned());
}

pub fn queue_story_hooks(
    mut completed: EventReader<QuestCompletedEvent>,
    script: Res<StoryScript>,
    mut queue: ResMut<StoryQueue>,
) {
    for ev in completed.read() {
        for hook in script.hooks_for(&ev.quest_id) {
            info!("[Story] {} completed; queueing {} steps.", ev.quest_id, hook.steps.len());
            queue.extend(hook.steps.iter().cloned());
        }
    }
}

/// Executes the front step. Waits accumulate frame time; a `Say` holds
/// until the tracked actor is resolved; every other step completes on
/// the frame it runs.
pub fn run_story_queue(
    time: Res<Time>,
    tracked: Res<TrackedActor>,
    mut queue: ResMut<StoryQueue>,
    mut chat: EventWriter<SendChatEvent>,
    mut notices: EventWriter<NoticeEvent>,
    mut start_quest: EventWriter<StartQuestEvent>,
    mut scene_load: EventWriter<SceneLoadEvent>,
) {
    let Some(step) = queue.steps.front().cloned() else {
        return;
    };

    match step {
        StoryStep::Wait(secs) => {
            queue.step_timer += time.delta_secs();
            if queue.step_timer >= secs {
                queue.finish_step();
            }
        }

        StoryStep::Say(text) => {
            let Some(actor) = tracked.entity else {
                return;
            };
            chat.send(SendChatEvent::new(text, actor));
            queue.finish_step();
        }

        StoryStep::Notice(message) => {
            notices.send(NoticeEvent::new(message));
            queue.finish_step();
        }

        StoryStep::StartQuest(quest_id) => {
            start_quest.send(StartQuestEvent { quest_id });
            queue.finish_step();
        }

        StoryStep::LoadScene(scene) => {
            info!("[Story] Requesting scene {:?}.", scene);
            scene_load.send(SceneLoadEvent { scene });
            queue.finish_step();
        }
    }
}
