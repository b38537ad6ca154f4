//! Interactables: proximity prompts and the controllers that react to the
//! interact key (talking NPCs, the merchant, kill-proxy items).

pub mod kill_proxy;
pub mod npc_chat;
pub mod proximity;
pub mod shop_keeper;

use bevy::prelude::*;
use crate::shared::*;

pub use kill_proxy::KillProxy;
pub use npc_chat::{DialogueLines, LineSequence, LineStyle, NpcChat, LINE_GAP_SECS};
pub use proximity::{Interactable, PromptSettings, ProximityDetector};
pub use shop_keeper::ShopKeeper;

/// Default detection radius before the hysteresis margin is added.
pub const INTERACTION_RANGE: f32 = 3.0;
/// Extra margin used by NPCs and the merchant.
pub const NPC_RANGE_DEVIATION: f32 = 5.0;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            proximity::detect_interaction_range.in_set(NarrativeSet::Detect),
        )
        .add_systems(
            Update,
            (
                proximity::route_interact_press,
                (
                    npc_chat::start_npc_dialogue,
                    kill_proxy::trigger_kill_proxy,
                    shop_keeper::open_shop_on_interact,
                ),
                shop_keeper::close_shop_panel,
            )
                .chain()
                .in_set(NarrativeSet::Act),
        )
        .add_systems(
            Update,
            npc_chat::advance_dialogue_lines.in_set(NarrativeSet::Sequence),
        );
    }
}
