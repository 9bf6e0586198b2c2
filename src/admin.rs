use crate::constants::{ADMIN_KEY_ENV, ADMIN_NONINTERACTIVE_ENV};
use crate::game_state::GameState;
use std::env;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminError {
    #[error("admin access disabled; set GRIMOIRE_ADMIN_KEY to enable")]
    Disabled,
    #[error("authentication failed")]
    AuthFailed,
    #[error("path invalid at '{segment}'")]
    InvalidPath { segment: String },
    #[error("key '{field}' not found in target object")]
    UnknownField { field: String },
    #[error("value must be an integer for {path}")]
    NotAnInteger { path: String },
    #[error("target at '{path}' is not an item container")]
    NotAContainer { path: String },
}

/// Shared-secret gate for admin mutations. This is a capability
/// guard, not a cryptographic protocol: the secret arrives out of
/// band via the environment.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    expected: Option<String>,
    noninteractive: bool,
}

impl AdminAuth {
    /// Reads the admin secret and mode from the environment. An
    /// absent secret disables admin entirely.
    pub fn from_env() -> Self {
        Self {
            expected: env::var(ADMIN_KEY_ENV).ok().filter(|k| !k.is_empty()),
            noninteractive: env::var(ADMIN_NONINTERACTIVE_ENV).ok().as_deref() == Some("1"),
        }
    }

    /// Builds a gate with an explicit secret, bypassing the
    /// environment. Used by tests and embedding shells.
    pub fn with_secret(expected: Option<String>, noninteractive: bool) -> Self {
        Self { expected, noninteractive }
    }

    pub fn enabled(&self) -> bool {
        self.expected.is_some()
    }

    /// True when the shell may pass the secret as a parameter instead
    /// of prompting interactively.
    pub fn noninteractive(&self) -> bool {
        self.noninteractive
    }

    /// Checks a provided secret against the configured one. The shell
    /// is responsible for collecting it (prompt or parameter).
    pub fn authorize(&self, provided: Option<&str>) -> Result<(), AdminError> {
        let expected = self.expected.as_deref().ok_or(AdminError::Disabled)?;
        match provided {
            Some(p) if p == expected => Ok(()),
            _ => Err(AdminError::AuthFailed),
        }
    }
}

/// The settable scalar fields of the state schema. Admin writes go
/// through this closed table instead of reflective traversal, so a
/// typo can never create a new field.
enum Field {
    PlayerName,
    PlayerClass,
    PlayerGold,
    PlayerHp,
    PlayerMaxHp,
    PlayerSp,
    PlayerLevel,
    PlayerXp,
    MetaLocation,
    MetaQuestsCompleted,
    MetaCommandCount,
}

fn resolve_field(path: &str) -> Result<Field, AdminError> {
    let segments: Vec<&str> = path.split('.').collect();

    let (section, field) = match segments.as_slice() {
        [section, field] => (*section, *field),
        [section] => {
            // no scalar fields live at the root
            return Err(AdminError::UnknownField { field: section.to_string() });
        }
        [section, mid, ..] => {
            // walking deeper than a known section/field pair: the
            // first segment that is not a nested mapping is invalid
            let segment = if matches!(*section, "player" | "meta") { *mid } else { *section };
            return Err(AdminError::InvalidPath { segment: segment.to_string() });
        }
        [] => return Err(AdminError::InvalidPath { segment: String::new() }),
    };

    match (section, field) {
        ("player", "name") => Ok(Field::PlayerName),
        ("player", "class") => Ok(Field::PlayerClass),
        ("player", "gold") => Ok(Field::PlayerGold),
        ("player", "hp") => Ok(Field::PlayerHp),
        ("player", "max_hp") => Ok(Field::PlayerMaxHp),
        ("player", "sp") => Ok(Field::PlayerSp),
        ("player", "level") => Ok(Field::PlayerLevel),
        ("player", "xp") => Ok(Field::PlayerXp),
        ("meta", "location") => Ok(Field::MetaLocation),
        ("meta", "quests_completed") => Ok(Field::MetaQuestsCompleted),
        ("meta", "command_count") => Ok(Field::MetaCommandCount),
        ("player" | "meta", _) => Err(AdminError::UnknownField { field: field.to_string() }),
        _ => Err(AdminError::InvalidPath { segment: section.to_string() }),
    }
}

/// Sets a scalar field by dotted path, e.g. `player.hp` or
/// `meta.location`. Integer fields parse the value (a parse failure
/// mutates nothing); string fields store it verbatim.
pub fn set(state: &mut GameState, path: &str, value: &str) -> Result<(), AdminError> {
    let field = resolve_field(path)?;

    let parse_int = || {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| AdminError::NotAnInteger { path: path.to_string() })
    };

    match field {
        Field::PlayerName => state.player.name = value.to_string(),
        Field::PlayerClass => state.player.class_name = value.to_string(),
        Field::PlayerGold => state.player.gold = parse_int()?,
        Field::PlayerHp => state.player.hp = parse_int()?,
        Field::PlayerMaxHp => state.player.max_hp = parse_int()?,
        Field::PlayerSp => state.player.sp = parse_int()?,
        Field::PlayerLevel => state.player.level = parse_int()?,
        Field::PlayerXp => state.player.xp = parse_int()?,
        Field::MetaLocation => state.meta.location = value.to_string(),
        Field::MetaQuestsCompleted => state.meta.quests_completed = parse_int()?,
        Field::MetaCommandCount => state.meta.command_count = parse_int()?,
    }

    debug!(path, value, "admin set");
    Ok(())
}

/// Adds `qty` of an item to a count-stacking container named by a
/// dotted path. The only container in the schema is
/// `player.inventory`. Unlike `set`, this may create a new key inside
/// the container; a non-positive resulting count removes it.
pub fn add_to_container(
    state: &mut GameState,
    path: &str,
    item_id: &str,
    qty: i64,
) -> Result<(), AdminError> {
    let segments: Vec<&str> = path.split('.').collect();

    match segments.as_slice() {
        ["player", "inventory"] => {
            let current = state.player.inventory.get(item_id).copied().unwrap_or(0);
            let updated = current + qty;
            if updated <= 0 {
                state.player.inventory.remove(item_id);
            } else {
                state.player.inventory.insert(item_id.to_string(), updated);
            }
            debug!(item_id, qty, "admin add to inventory");
            Ok(())
        }
        ["player", "inventory", extra, ..] => {
            Err(AdminError::InvalidPath { segment: extra.to_string() })
        }
        // existing scalar leaves are reachable but cannot stack items
        ["player", "name" | "class" | "gold" | "hp" | "max_hp" | "sp" | "level" | "xp"]
        | ["meta", "location" | "quests_completed" | "command_count"]
        | ["player"]
        | ["meta"] => Err(AdminError::NotAContainer { path: path.to_string() }),
        ["player", unknown, ..] | ["meta", unknown, ..] => {
            Err(AdminError::InvalidPath { segment: unknown.to_string() })
        }
        [other, ..] => Err(AdminError::InvalidPath { segment: other.to_string() }),
        [] => Err(AdminError::InvalidPath { segment: String::new() }),
    }
}
