use std::collections::{HashSet, VecDeque};

use bevy::prelude::*;

/// Idle chat-bubble entities waiting to be reused.
///
/// Entries are never despawned by the pool; it only grows. The `in_pool`
/// set mirrors `idle` so a second release of the same entity cannot create
/// a duplicate slot.
#[derive(Resource, Debug, Default)]
pub struct ChatPool {
    idle: VecDeque<Entity>,
    in_pool: HashSet<Entity>,
    created: usize,
}

impl ChatPool {
    /// Hands out an idle entity, skipping any the world no longer has.
    /// Calls `spawn` when nothing idle is left.
    pub fn acquire(
        &mut self,
        is_alive: impl Fn(Entity) -> bool,
        spawn: impl FnOnce() -> Entity,
    ) -> Entity {
        while let Some(candidate) = self.idle.pop_front() {
            self.in_pool.remove(&candidate);
            if is_alive(candidate) {
                return candidate;
            }
        }
        self.created += 1;
        spawn()
    }

    /// Returns `entity` to the idle set. Releasing an entity that is
    /// already idle does nothing and returns `false`.
    pub fn release(&mut self, entity: Entity) -> bool {
        if !self.in_pool.insert(entity) {
            return false;
        }
        self.idle.push_back(entity);
        true
    }

    /// Registers a freshly spawned entity as idle without counting it
    /// as an on-demand creation.
    pub fn prewarm(&mut self, entity: Entity) {
        self.release(entity);
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.in_pool.contains(&entity)
    }

    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    /// Entities spawned because the pool ran dry.
    pub fn created_count(&self) -> usize {
        self.created
    }
}
