//! Active quest list and the director visuals it owns.

use bevy::prelude::*;
use crate::shared::*;

/// The compass entity for one quest. Spawned and despawned by the ledger.
#[derive(Component, Debug, Clone)]
pub struct QuestDirector {
    pub handle: QuestHandle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    pub handle: QuestHandle,
    pub id: String,
    pub description: String,
    pub target: Vec2,
    pub director: Option<Entity>,
}

/// Active quests in the order they were received. The head drives the
/// compass.
#[derive(Resource, Debug, Default)]
pub struct QuestLedger {
    quests: Vec<Quest>,
    next_handle: u64,
}

impl QuestLedger {
    pub fn add(&mut self, def: &QuestDef, director: Option<Entity>) -> QuestHandle {
        let handle = QuestHandle(self.next_handle);
        self.next_handle += 1;
        self.quests.push(Quest {
            handle,
            id: def.id.clone(),
            description: def.description.clone(),
            target: def.target(),
            director,
        });
        handle
    }

    /// Removes every quest with `quest_id`, in ledger order.
    pub fn remove_by_id(&mut self, quest_id: &str) -> Vec<Quest> {
        let (removed, kept): (Vec<Quest>, Vec<Quest>) = std::mem::take(&mut self.quests)
            .into_iter()
            .partition(|q| q.id == quest_id);
        self.quests = kept;
        removed
    }

    pub fn remove_handle(&mut self, handle: QuestHandle) -> Option<Quest> {
        let index = self.quests.iter().position(|q| q.handle == handle)?;
        Some(self.quests.remove(index))
    }

    pub fn head(&self) -> Option<&Quest> {
        self.quests.first()
    }

    pub fn contains(&self, quest_id: &str) -> bool {
        self.quests.iter().any(|q| q.id == quest_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter()
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

/// Points `TrackedActor` at the player, re-resolving if the previous
/// entity has gone away.
pub fn resolve_tracked_actor(
    mut tracked: ResMut<TrackedActor>,
    players: Query<Entity, With<Player>>,
) {
    if let Some(entity) = tracked.entity {
        if players.contains(entity) {
            return;
        }
    }
    let found = players.iter().next();
    if found != tracked.entity {
        tracked.entity = found;
        if let Some(entity) = found {
            debug!("[Quest] Tracking actor {:?}.", entity);
        }
    }
}

fn add_quest(
    commands: &mut Commands,
    ledger: &mut QuestLedger,
    def: &QuestDef,
    notices: &mut EventWriter<NoticeEvent>,
    added: &mut EventWriter<QuestAddedEvent>,
) {
    let director = commands
        .spawn((
            Name::new(format!("QuestDirector {}", def.id)),
            Transform::from_xyz(DIRECTOR_PARKED.x, DIRECTOR_PARKED.y, Z_DIRECTOR),
        ))
        .id();
    let handle = ledger.add(def, Some(director));
    commands.entity(director).insert(QuestDirector { handle });

    notices.send(NoticeEvent::new(format!("Quest received: {}", def.description)));
    added.send(QuestAddedEvent {
        handle,
        quest_id: def.id.clone(),
        description: def.description.clone(),
    });
    info!("[Quest] Added {} \"{}\" ({} active).", def.id, def.description, ledger.len());
}

fn drop_quest(
    commands: &mut Commands,
    quest: Quest,
    removed: &mut EventWriter<QuestRemovedEvent>,
) {
    if let Some(director) = quest.director {
        if let Some(entity) = commands.get_entity(director) {
            entity.despawn_recursive();
        }
    }
    info!("[Quest] Removed {}.", quest.id);
    removed.send(QuestRemovedEvent {
        handle: quest.handle,
        quest_id: quest.id,
    });
}

/// Applies every add/start/remove request of this frame, in that order.
#[allow(clippy::too_many_arguments)]
pub fn apply_quest_requests(
    mut commands: Commands,
    mut ledger: ResMut<QuestLedger>,
    catalog: Res<QuestCatalog>,
    mut add_events: EventReader<AddQuestEvent>,
    mut start_events: EventReader<StartQuestEvent>,
    mut remove_events: EventReader<RemoveQuestEvent>,
    mut remove_handle_events: EventReader<RemoveQuestHandleEvent>,
    mut notices: EventWriter<NoticeEvent>,
    mut added: EventWriter<QuestAddedEvent>,
    mut removed: EventWriter<QuestRemovedEvent>,
) {
    for ev in add_events.read() {
        add_quest(&mut commands, &mut ledger, &ev.quest, &mut notices, &mut added);
    }

    for ev in start_events.read() {
        match catalog.get(&ev.quest_id) {
            Some(def) => add_quest(&mut commands, &mut ledger, def, &mut notices, &mut added),
            None => warn!("[Quest] No quest {:?} in the catalog.", ev.quest_id),
        }
    }

    for ev in remove_events.read() {
        let quests = ledger.remove_by_id(&ev.quest_id);
        if quests.is_empty() {
            debug!("[Quest] Remove {:?}: not active.", ev.quest_id);
        }
        for quest in quests {
            drop_quest(&mut commands, quest, &mut removed);
        }
    }

    for ev in remove_handle_events.read() {
        match ledger.remove_handle(ev.handle) {
            Some(quest) => drop_quest(&mut commands, quest, &mut removed),
            None => debug!("[Quest] Remove {:?}: not active.", ev.handle),
        }
    }
}
