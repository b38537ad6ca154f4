//! Black City library crate: re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is the playable demo scene.
//! This library crate exposes the same modules so that `tests/` integration
//! tests can drive the narrative systems without a window or GPU.

pub mod shared;
pub mod input;
pub mod data;
pub mod chat;
pub mod interaction;
pub mod quests;
pub mod economy;
pub mod player;
pub mod ui;
