use crate::catalog::EnemyId;

/// What an explore roll turned up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreFind {
    Treasure,
    Item,
    Gold,
    Nothing,
}

/// Who dealt a swing of damage in combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combatant {
    Player,
    Enemy(EnemyId),
}

/// Events emitted by engine logic. The shell decides how (and whether)
/// to render each one; the engine never prints.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EncounterStarted {
        enemy: EnemyId,
    },
    DamageDealt {
        source: Combatant,
        target: Combatant,
        amount: i64,
        hp_left: i64,
    },
    EnemyDefeated {
        enemy: EnemyId,
        xp: i64,
        gold: i64,
    },
    PlayerDefeated,
    XpGained {
        amount: i64,
    },
    LevelUp {
        new_level: i64,
        new_max_hp: i64,
    },
    ItemAdded {
        item_id: String,
        count: i64,
    },
    ItemRemoved {
        item_id: String,
        count: i64,
    },
    GoldGained {
        amount: i64,
    },
    SpSpent {
        amount: i64,
    },
    HpRestored {
        amount: i64,
    },
    Exploration {
        find: ExploreFind,
    },
}
