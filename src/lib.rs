//! Grimoire - persistent single-player text adventure core.
//!
//! This library is the game-state simulation engine: combat, enemy
//! selection, progression, stacked inventory, durable persistence,
//! and the admin mutation side-channel. The interactive shell and HUD
//! live outside the crate; they call the action surface in
//! `game_logic` and render the returned events.

pub mod admin;
pub mod catalog;
pub mod combat_logic;
pub mod constants;
pub mod enemy_selection;
pub mod events;
pub mod game_logic;
pub mod game_state;
pub mod inventory;
pub mod progression;
pub mod save_manager;
