use bevy::prelude::*;
use crate::shared::*;
use super::npc_chat::DialogueLines;
use super::proximity::Interactable;

/// An item that stands in for an enemy kill. Using it reports the kill,
/// then reads out its info lines.
#[derive(Component, Debug, Clone)]
pub struct KillProxy {
    pub enemy_id: String,
    pub fire_once: bool,
    fired: bool,
}

impl KillProxy {
    pub fn new(enemy_id: impl Into<String>) -> Self {
        Self {
            enemy_id: enemy_id.into(),
            fire_once: true,
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns the id to report, if this use should report a kill.
    pub fn trigger(&mut self) -> Option<String> {
        if self.fired && self.fire_once {
            return None;
        }
        self.fired = true;
        Some(self.enemy_id.clone())
    }
}

impl Default for KillProxy {
    fn default() -> Self {
        Self::new("ItemEnemyProxy")
    }
}

pub fn trigger_kill_proxy(
    mut interact_events: EventReader<InteractEvent>,
    mut proxies: Query<(&mut KillProxy, &mut Interactable, Option<&mut DialogueLines>)>,
    mut killed: EventWriter<EnemyKilledEvent>,
    mut started: EventWriter<InteractionStartedEvent>,
) {
    for ev in interact_events.read() {
        let Ok((mut proxy, mut interactable, dialogue)) = proxies.get_mut(ev.entity) else {
            continue;
        };
        if interactable.is_interacting {
            continue;
        }
        if let Some(enemy_id) = proxy.trigger() {
            info!("[Interaction] Kill proxy reported enemy {:?}.", enemy_id);
            killed.send(EnemyKilledEvent { enemy_id });
        }
        if let Some(mut dialogue) = dialogue {
            if !dialogue.lines.is_empty() {
                dialogue.begin(&mut interactable);
                started.send(InteractionStartedEvent { entity: ev.entity });
            }
        }
    }
}
