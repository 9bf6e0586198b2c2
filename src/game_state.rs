use crate::constants::DEFAULT_MAX_HP;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main game state containing all player progress.
///
/// This is the only mutable structure the engine operates on. It is
/// loaded once per session, mutated in place by action handlers, and
/// persisted by the caller after any mutating action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub gold: i64,
    pub hp: i64,
    pub max_hp: i64,
    pub sp: i64,
    pub level: i64,
    pub xp: i64,
    /// Stacked inventory: item id -> count. Absent key means zero;
    /// counts are always positive.
    pub inventory: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub location: String,
    pub quests_completed: i64,
    pub command_count: i64,
}

impl Default for GameState {
    fn default() -> Self {
        let mut inventory = BTreeMap::new();
        inventory.insert("torch".to_string(), 1);
        inventory.insert("rusty_dagger".to_string(), 1);

        Self {
            player: Player {
                name: "Traveller".to_string(),
                class_name: "Adventurer".to_string(),
                gold: 50,
                hp: DEFAULT_MAX_HP,
                max_hp: DEFAULT_MAX_HP,
                sp: 10,
                level: 1,
                xp: 0,
                inventory,
            },
            meta: Meta {
                location: "Starting Village".to_string(),
                quests_completed: 0,
                command_count: 0,
            },
        }
    }
}

impl Player {
    /// Returns true if the player has HP remaining.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Clamps HP into `[0, max_hp]`.
    pub fn clamp_hp(&mut self) {
        self.hp = self.hp.clamp(0, self.max_hp.max(0));
    }
}
