use bevy::prelude::*;
use crate::shared::*;
use super::proximity::Interactable;

/// Marker for a merchant NPC that opens the shop panel.
#[derive(Component, Debug, Clone, Default)]
pub struct ShopKeeper;

pub fn open_shop_on_interact(
    mut interact_events: EventReader<InteractEvent>,
    mut keepers: Query<&mut Interactable, With<ShopKeeper>>,
    mut panel: ResMut<ShopPanel>,
    mut started: EventWriter<InteractionStartedEvent>,
) {
    for ev in interact_events.read() {
        let Ok(mut interactable) = keepers.get_mut(ev.entity) else {
            continue;
        };
        if interactable.is_interacting {
            continue;
        }
        if let Some(previous) = panel.open_for {
            if previous != ev.entity {
                debug!("[Interaction] Shop already open for {:?}.", previous);
                continue;
            }
        }
        interactable.is_interacting = true;
        panel.open(ev.entity);
        started.send(InteractionStartedEvent { entity: ev.entity });
        info!("[Interaction] Shop opened by {:?}.", ev.entity);
    }
}

/// Closes the panel on the close key, or when the actor walks away from
/// the keeper holding it. Either way the keeper's latch is released.
pub fn close_shop_panel(
    input: Res<PlayerInput>,
    mut range_events: EventReader<InteractionRangeEvent>,
    mut panel: ResMut<ShopPanel>,
    mut keepers: Query<&mut Interactable, With<ShopKeeper>>,
) {
    let mut walked_away = false;
    for ev in range_events.read() {
        if ev.edge == RangeEdge::Exited && Some(ev.entity) == panel.open_for {
            walked_away = true;
        }
    }
    if !(input.close_shop || walked_away) {
        return;
    }
    let Some(keeper) = panel.close() else {
        return;
    };
    if let Ok(mut interactable) = keepers.get_mut(keeper) {
        interactable.is_interacting = false;
    }
    info!("[Interaction] Shop closed.");
}
