//! Chat bubbles: a pool of reusable bubble entities and the dispatcher that
//! turns `SendChatEvent`s into typed, held and faded bubbles.

pub mod bubble;
pub mod dispatch;
pub mod pool;
pub mod render;

use bevy::prelude::*;
use crate::shared::*;

pub use bubble::{BubbleAnchor, BubblePhase, BubbleProgress, ChatBubble};
pub use dispatch::ChatSlots;
pub use pool::ChatPool;

pub struct ChatPlugin;

impl Plugin for ChatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChatPool>()
            .init_resource::<ChatSlots>()
            .add_systems(OnEnter(GameState::Playing), dispatch::prewarm_pool)
            .add_systems(
                Update,
                (dispatch::handle_dismiss_requests, dispatch::dispatch_chat_requests)
                    .chain()
                    .in_set(NarrativeSet::Dispatch),
            )
            .add_systems(
                Update,
                (
                    dispatch::advance_chat_bubbles,
                    dispatch::follow_chat_anchors,
                    render::attach_bubble_labels,
                    render::sync_bubble_labels,
                )
                    .chain()
                    .in_set(NarrativeSet::Animate),
            );
    }
}
