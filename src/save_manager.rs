use crate::constants::SAVE_FILE_NAME;
use crate::game_state::GameState;
use crate::inventory::normalize_inventory;
use directories::ProjectDirs;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::warn;

/// How a save landed on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Temp file written and renamed over the canonical path.
    Atomic,
    /// Atomic replace failed; the canonical path was overwritten
    /// directly. The save succeeded but a crash mid-write could have
    /// truncated it.
    NonAtomic,
}

#[derive(Debug, thiserror::Error)]
#[error("failed to persist save file: {0}")]
pub struct SaveError(#[from] io::Error);

/// Manages durable load/save of the game state as a JSON document.
///
/// `load` never fails: missing saves produce the default state and
/// corrupt saves are quarantined to a timestamped backup first.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager using the platform config directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "grimoire").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self { save_path: config_dir.join(SAVE_FILE_NAME) })
    }

    /// Creates a SaveManager over an explicit save path.
    pub fn at_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save_path(&self) -> &PathBuf {
        &self.save_path
    }

    /// Loads the saved state, always returning a usable `GameState`.
    ///
    /// Missing file: default state. Unreadable file: default state.
    /// Unparseable file: renamed to `<name>.corrupt.<unix-ts>` and
    /// replaced by the default state. Parseable documents get
    /// best-effort field coercion and legacy inventory upgrades.
    pub fn load(&self) -> GameState {
        if !self.save_path.exists() {
            return GameState::default();
        }

        let raw = match fs::read_to_string(&self.save_path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %self.save_path.display(), %err, "failed to read save file; using defaults");
                return GameState::default();
            }
        };

        let document: Value = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(err) => {
                self.quarantine_corrupt_save(&err);
                return GameState::default();
            }
        };

        sanitize_document(&document)
    }

    fn quarantine_corrupt_save(&self, err: &serde_json::Error) {
        let file_name = self
            .save_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| SAVE_FILE_NAME.to_string());
        let backup_name = format!("{}.corrupt.{}", file_name, chrono::Utc::now().timestamp());
        let backup_path = self.save_path.with_file_name(&backup_name);

        match fs::rename(&self.save_path, &backup_path) {
            Ok(()) => warn!(
                backup = %backup_path.display(),
                %err,
                "corrupted save moved aside; using defaults"
            ),
            Err(rename_err) => warn!(
                %err,
                %rename_err,
                "failed to move corrupted save; using defaults"
            ),
        }
    }

    /// Saves the state durably: temp file plus atomic rename. If that
    /// fails, falls back to a direct overwrite and reports
    /// `SaveMode::NonAtomic` so the caller can surface a warning.
    pub fn save(&self, state: &GameState) -> Result<SaveMode, SaveError> {
        let data = serde_json::to_string_pretty(state)
            .map_err(|e| SaveError(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let tmp_path = self.save_path.with_file_name(format!(
            "{}.tmp",
            self.save_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| SAVE_FILE_NAME.to_string())
        ));

        let atomic_result =
            fs::write(&tmp_path, &data).and_then(|_| fs::rename(&tmp_path, &self.save_path));

        match atomic_result {
            Ok(()) => Ok(SaveMode::Atomic),
            Err(err) => {
                warn!(%err, "atomic save failed; falling back to direct overwrite");
                fs::write(&self.save_path, &data)?;
                Ok(SaveMode::NonAtomic)
            }
        }
    }
}

/// Rebuilds a `GameState` from a parsed JSON document, starting from
/// defaults and overlaying every field the document provides. Numeric
/// coercion is best-effort: uncoercible values keep the default.
fn sanitize_document(document: &Value) -> GameState {
    let mut state = GameState::default();

    if let Some(player) = document.get("player") {
        if let Some(name) = player.get("name").and_then(Value::as_str) {
            state.player.name = name.to_string();
        }
        if let Some(class_name) = player.get("class").and_then(Value::as_str) {
            state.player.class_name = class_name.to_string();
        }
        coerce_int(player.get("gold"), &mut state.player.gold);
        coerce_int(player.get("hp"), &mut state.player.hp);
        coerce_int(player.get("max_hp"), &mut state.player.max_hp);
        coerce_int(player.get("sp"), &mut state.player.sp);
        coerce_int(player.get("level"), &mut state.player.level);
        coerce_int(player.get("xp"), &mut state.player.xp);

        match player.get("inventory") {
            // Legacy format: a flat list of item ids, one entry per
            // unit. Upgraded one-way to a stacked mapping.
            Some(Value::Array(entries)) => {
                let mut stacked = BTreeMap::new();
                for entry in entries {
                    if let Some(item_id) = entry.as_str() {
                        *stacked.entry(item_id.to_string()).or_insert(0) += 1;
                    }
                }
                state.player.inventory = normalize_inventory(&stacked);
            }
            Some(Value::Object(map)) => {
                let mut stacked = BTreeMap::new();
                for (item_id, qty) in map {
                    let mut count = 0;
                    coerce_int(Some(qty), &mut count);
                    stacked.insert(item_id.clone(), count);
                }
                state.player.inventory = normalize_inventory(&stacked);
            }
            _ => state.player.inventory.clear(),
        }
    }

    if let Some(meta) = document.get("meta") {
        if let Some(location) = meta.get("location").and_then(Value::as_str) {
            state.meta.location = location.to_string();
        }
        coerce_int(meta.get("quests_completed"), &mut state.meta.quests_completed);
        coerce_int(meta.get("command_count"), &mut state.meta.command_count);
    }

    // externally edited saves can carry hp outside [0, max_hp]
    state.player.clamp_hp();
    state
}

/// Writes a JSON value into `target` if it can be read as an integer
/// (directly, via float truncation, or from a numeric string).
fn coerce_int(value: Option<&Value>, target: &mut i64) {
    let Some(value) = value else { return };
    let coerced = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    if let Some(v) = coerced {
        *target = v;
    }
}
