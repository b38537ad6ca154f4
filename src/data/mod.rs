//! Data layer — populates tuning resources at game startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), reads the narrative
//! config (or falls back to built-in defaults), inserts every tuning
//! resource, then transitions the game into GameState::Playing.

pub mod config;
mod defaults;

use std::path::Path;

use bevy::prelude::*;
use crate::shared::*;

pub use config::{ConfigError, NarrativeConfig, CONFIG_PATH};

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Splits a config into the resources each domain reads.
pub fn apply_config(commands: &mut Commands, config: NarrativeConfig) {
    commands.insert_resource(config.chat);
    commands.insert_resource(config.shop);
    commands.insert_resource(QuestCatalog {
        quests: config.quests,
    });
    commands.insert_resource(config.story);
}

fn load_all_data(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    info!("[Data] Populating narrative resources…");

    let config = NarrativeConfig::load_or_default(Path::new(CONFIG_PATH));
    info!(
        "[Data]   Quests in catalog: {}, story hooks: {}",
        config.quests.len(),
        config.story.hooks.len()
    );
    apply_config(&mut commands, config);

    info!("[Data] All resources populated. Transitioning to Playing.");
    next_state.set(GameState::Playing);
}
