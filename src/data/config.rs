//! RON configuration file for the narrative layer.
//!
//! Every section is `#[serde(default)]`, so a file only needs the fields
//! it overrides. A missing or malformed file falls back to the built-in
//! defaults with a warning.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::*;
use super::defaults;

pub const CONFIG_PATH: &str = "assets/narrative.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse narrative config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    pub chat: ChatConfig,
    pub shop: ShopConfig,
    pub quests: Vec<QuestDef>,
    pub story: StoryScript,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            shop: ShopConfig::default(),
            quests: defaults::quest_catalog(),
            story: defaults::story_script(),
        }
    }
}

impl NarrativeConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string_lossy().into_owned(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::read(path) {
            Ok(config) => {
                info!("[Data] Read narrative config from {}", path.to_string_lossy());
                config
            }
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                info!("[Data] No config at {}; using built-in defaults.", path.to_string_lossy());
                Self::default()
            }
            Err(error) => {
                warn!("[Data] {}. Using built-in defaults.", error);
                Self::default()
            }
        }
    }
}
