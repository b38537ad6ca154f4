use std::collections::HashMap;

use bevy::ecs::entity::Entities;
use bevy::prelude::*;

use crate::shared::*;
use super::bubble::{BubbleAnchor, BubbleProgress, ChatBubble};
use super::pool::ChatPool;

/// Which bubble each logical caller currently holds.
#[derive(Resource, Debug, Default)]
pub struct ChatSlots {
    bound: HashMap<ChatSlot, Entity>,
}

impl ChatSlots {
    pub fn get(&self, slot: ChatSlot) -> Option<Entity> {
        self.bound.get(&slot).copied()
    }

    pub fn bind(&mut self, slot: ChatSlot, entity: Entity) -> Option<Entity> {
        self.bound.insert(slot, entity)
    }

    /// Unbinds `slot` only if it still points at `entity`.
    pub fn unbind_if(&mut self, slot: ChatSlot, entity: Entity) {
        if self.bound.get(&slot) == Some(&entity) {
            self.bound.remove(&slot);
        }
    }
}

fn bubble_position(anchor: Vec3, offset: Vec3) -> Vec3 {
    let p = anchor + offset;
    Vec3::new(p.x, p.y, Z_BUBBLE)
}

pub fn prewarm_pool(
    mut commands: Commands,
    config: Res<ChatConfig>,
    mut pool: ResMut<ChatPool>,
) {
    for _ in 0..config.initial_pool_size {
        let entity = commands
            .spawn((
                Name::new("ChatBubble"),
                ChatBubble::idle(),
                Transform::default(),
                Visibility::Hidden,
            ))
            .id();
        pool.prewarm(entity);
    }
    info!("[Chat] Pre-warmed {} chat bubbles.", config.initial_pool_size);
}

/// Fades a slot's bubble early. Runs ahead of new requests so a dismissal
/// never touches a bubble requested in the same frame.
pub fn handle_dismiss_requests(
    mut events: EventReader<DismissChatEvent>,
    slots: Res<ChatSlots>,
    mut bubbles: Query<&mut ChatBubble>,
) {
    for ev in events.read() {
        let Some(entity) = slots.get(ev.slot) else {
            continue;
        };
        if let Ok(mut bubble) = bubbles.get_mut(entity) {
            bubble.dismiss();
        }
    }
}

/// Turns chat requests into running bubbles. All writes go through
/// `Commands` so a slot restarted twice in one frame resolves in request
/// order.
pub fn dispatch_chat_requests(
    mut commands: Commands,
    mut events: EventReader<SendChatEvent>,
    config: Res<ChatConfig>,
    mut pool: ResMut<ChatPool>,
    mut slots: ResMut<ChatSlots>,
    entities: &Entities,
    anchors: Query<&Transform, Without<ChatBubble>>,
) {
    for ev in events.read() {
        if ev.text.is_empty() {
            debug!("[Chat] Ignoring empty chat request.");
            continue;
        }
        let Some(talker) = ev.talker else {
            debug!("[Chat] Ignoring chat request with no talker: {:?}", ev.text);
            continue;
        };
        let Ok(talker_transform) = anchors.get(talker) else {
            debug!("[Chat] Talker {:?} is gone; dropping {:?}", talker, ev.text);
            continue;
        };

        if let Some(slot) = ev.slot {
            if let Some(previous) = slots.get(slot) {
                if entities.contains(previous) {
                    commands
                        .entity(previous)
                        .insert((ChatBubble::idle(), Visibility::Hidden));
                    pool.release(previous);
                }
            }
        }

        let entity = pool.acquire(
            |candidate| entities.contains(candidate),
            || commands.spawn(Name::new("ChatBubble")).id(),
        );

        let offset = ev.offset.unwrap_or_else(|| config.default_offset());
        let anchor = if ev.follow {
            BubbleAnchor::Follow {
                target: talker,
                offset,
            }
        } else {
            BubbleAnchor::Fixed(bubble_position(talker_transform.translation, offset))
        };
        let bubble = ChatBubble::showing(
            ev.text.clone(),
            config.interval(ev.speed),
            config.effective_stay(ev.stay),
            config.fade_out_secs,
            anchor,
            ev.slot,
        );

        commands.entity(entity).insert((
            bubble,
            Transform::from_translation(bubble_position(talker_transform.translation, offset)),
            Visibility::Visible,
        ));
        if let Some(slot) = ev.slot {
            slots.bind(slot, entity);
        }
    }
}

/// Drives every active bubble one frame and returns finished ones to the pool.
pub fn advance_chat_bubbles(
    time: Res<Time>,
    mut pool: ResMut<ChatPool>,
    mut slots: ResMut<ChatSlots>,
    mut bubbles: Query<(Entity, &mut ChatBubble, &mut Visibility)>,
) {
    let dt = time.delta_secs();
    for (entity, mut bubble, mut visibility) in bubbles.iter_mut() {
        if !bubble.is_active() {
            continue;
        }
        if bubble.advance(dt) == BubbleProgress::Finished {
            if let Some(slot) = bubble.slot {
                slots.unbind_if(slot, entity);
            }
            bubble.reset();
            *visibility = Visibility::Hidden;
            pool.release(entity);
        }
    }
}

/// Keeps following bubbles pinned over their talker. A talker that has
/// disappeared leaves the bubble where it last was.
pub fn follow_chat_anchors(
    mut bubbles: Query<(&ChatBubble, &mut Transform)>,
    anchors: Query<&Transform, Without<ChatBubble>>,
) {
    for (bubble, mut transform) in bubbles.iter_mut() {
        if !bubble.is_active() {
            continue;
        }
        if let BubbleAnchor::Follow { target, offset } = bubble.anchor {
            if let Ok(anchor) = anchors.get(target) {
                transform.translation = bubble_position(anchor.translation, offset);
            }
        }
    }
}
