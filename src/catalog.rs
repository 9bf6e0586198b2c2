use serde::{Deserialize, Serialize};

/// The closed pool of enemy archetypes, in catalog order from easiest
/// to toughest. Selection weighting in `enemy_selection` depends on
/// this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyId {
    Goblin,
    Skeleton,
    Bandit,
    Wolf,
    Bear,
    Orc,
}

impl EnemyId {
    pub const POOL: [EnemyId; 6] = [
        EnemyId::Goblin,
        EnemyId::Skeleton,
        EnemyId::Bandit,
        EnemyId::Wolf,
        EnemyId::Bear,
        EnemyId::Orc,
    ];

    /// Returns the canonical string id for this enemy.
    pub fn id(&self) -> &'static str {
        match self {
            EnemyId::Goblin => "goblin",
            EnemyId::Skeleton => "skeleton",
            EnemyId::Bandit => "bandit",
            EnemyId::Wolf => "wolf",
            EnemyId::Bear => "bear",
            EnemyId::Orc => "orc",
        }
    }
}

/// One probabilistic drop slot in an enemy's loot table.
///
/// Slots roll independently: a single kill can yield zero, one, or
/// many of the listed items.
#[derive(Debug, Clone, Copy)]
pub struct LootDrop {
    pub item_id: &'static str,
    pub chance: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct EnemyTemplate {
    pub id: EnemyId,
    pub name: &'static str,
    pub hp: i64,
    pub attack_min: i64,
    pub attack_max: i64,
    pub xp: i64,
    pub gold: i64,
    pub loot: &'static [LootDrop],
}

/// Returns the combat template for an enemy. Total because the enemy
/// pool is a closed enum.
pub fn enemy_template(id: EnemyId) -> &'static EnemyTemplate {
    match id {
        EnemyId::Goblin => &GOBLIN,
        EnemyId::Skeleton => &SKELETON,
        EnemyId::Bandit => &BANDIT,
        EnemyId::Wolf => &WOLF,
        EnemyId::Bear => &BEAR,
        EnemyId::Orc => &ORC,
    }
}

static GOBLIN: EnemyTemplate = EnemyTemplate {
    id: EnemyId::Goblin,
    name: "Goblin",
    hp: 8,
    attack_min: 1,
    attack_max: 3,
    xp: 5,
    gold: 3,
    loot: &[
        LootDrop { item_id: "rusty_dagger", chance: 0.20 },
        LootDrop { item_id: "healing_potion", chance: 0.10 },
    ],
};

static SKELETON: EnemyTemplate = EnemyTemplate {
    id: EnemyId::Skeleton,
    name: "Skeleton",
    hp: 10,
    attack_min: 2,
    attack_max: 4,
    xp: 8,
    gold: 5,
    loot: &[
        LootDrop { item_id: "bone_shield", chance: 0.10 },
        LootDrop { item_id: "ancient_coin", chance: 0.25 },
    ],
};

static BANDIT: EnemyTemplate = EnemyTemplate {
    id: EnemyId::Bandit,
    name: "Bandit",
    hp: 12,
    attack_min: 2,
    attack_max: 5,
    xp: 10,
    gold: 8,
    loot: &[
        LootDrop { item_id: "coin_pouch", chance: 0.30 },
        LootDrop { item_id: "healing_potion", chance: 0.15 },
    ],
};

static WOLF: EnemyTemplate = EnemyTemplate {
    id: EnemyId::Wolf,
    name: "Wolf",
    hp: 14,
    attack_min: 3,
    attack_max: 6,
    xp: 12,
    gold: 6,
    loot: &[
        LootDrop { item_id: "wolf_pelt", chance: 0.30 },
        LootDrop { item_id: "meat", chance: 0.40 },
    ],
};

static BEAR: EnemyTemplate = EnemyTemplate {
    id: EnemyId::Bear,
    name: "Bear",
    hp: 20,
    attack_min: 4,
    attack_max: 8,
    xp: 20,
    gold: 10,
    loot: &[LootDrop { item_id: "bear_claw", chance: 0.25 }],
};

static ORC: EnemyTemplate = EnemyTemplate {
    id: EnemyId::Orc,
    name: "Orc",
    hp: 25,
    attack_min: 5,
    attack_max: 10,
    xp: 25,
    gold: 15,
    loot: &[
        LootDrop { item_id: "orcish_blade", chance: 0.15 },
        LootDrop { item_id: "coin_pouch", chance: 0.25 },
    ],
};

/// Use-effect parameters for cataloged items. Items without an effect
/// can still be held and looted, just not used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemEffect {
    /// Restores HP and SP, each rolled uniformly in the given
    /// inclusive range.
    Restore {
        hp_min: i64,
        hp_max: i64,
        sp_min: i64,
        sp_max: i64,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub effect: Option<ItemEffect>,
}

static ITEM_CATALOG: [ItemDef; 10] = [
    ItemDef {
        id: "healing_potion",
        name: "Healing Potion",
        effect: Some(ItemEffect::Restore { hp_min: 10, hp_max: 25, sp_min: 1, sp_max: 3 }),
    },
    ItemDef { id: "torch", name: "Torch", effect: None },
    ItemDef { id: "rusty_dagger", name: "Rusty Dagger", effect: None },
    ItemDef { id: "bone_shield", name: "Bone Shield", effect: None },
    ItemDef { id: "ancient_coin", name: "Ancient Coin", effect: None },
    ItemDef { id: "coin_pouch", name: "Coin Pouch", effect: None },
    ItemDef { id: "wolf_pelt", name: "Wolf Pelt", effect: None },
    ItemDef {
        id: "meat",
        name: "Meat",
        effect: Some(ItemEffect::Restore { hp_min: 40, hp_max: 40, sp_min: 2, sp_max: 2 }),
    },
    ItemDef { id: "bear_claw", name: "Bear Claw", effect: None },
    ItemDef { id: "orcish_blade", name: "Orcish Blade", effect: None },
];

/// Looks up an item definition by canonical id. Inventories may hold
/// ids that are not cataloged; those return `None`.
pub fn item_def(id: &str) -> Option<&'static ItemDef> {
    ITEM_CATALOG.iter().find(|def| def.id == id)
}

/// Returns the display name for an item, falling back to the raw id
/// for uncataloged loot.
pub fn item_display_name(id: &str) -> &str {
    match item_def(id) {
        Some(def) => def.name,
        None => id,
    }
}

/// Canonicalizes a user-supplied item id: trimmed, lowercased, runs of
/// whitespace and hyphens collapsed to single underscores.
pub fn normalize_item_id(raw: &str) -> String {
    raw.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_pool_order() {
        let ids: Vec<&str> = EnemyId::POOL.iter().map(|e| e.id()).collect();
        assert_eq!(ids, ["goblin", "skeleton", "bandit", "wolf", "bear", "orc"]);
    }

    #[test]
    fn test_enemy_template_lookup() {
        let orc = enemy_template(EnemyId::Orc);
        assert_eq!(orc.name, "Orc");
        assert_eq!(orc.hp, 25);
        assert_eq!(orc.attack_min, 5);
        assert_eq!(orc.attack_max, 10);
        assert_eq!(orc.xp, 25);
        assert_eq!(orc.gold, 15);
        assert_eq!(orc.loot.len(), 2);
    }

    #[test]
    fn test_loot_tables_reference_cataloged_items() {
        for enemy in EnemyId::POOL {
            for drop in enemy_template(enemy).loot {
                assert!(
                    item_def(drop.item_id).is_some(),
                    "loot item {} missing from catalog",
                    drop.item_id
                );
                assert!(drop.chance > 0.0 && drop.chance < 1.0);
            }
        }
    }

    #[test]
    fn test_item_lookup() {
        let potion = item_def("healing_potion").unwrap();
        assert_eq!(potion.name, "Healing Potion");
        assert!(matches!(
            potion.effect,
            Some(ItemEffect::Restore { hp_min: 10, hp_max: 25, sp_min: 1, sp_max: 3 })
        ));

        assert!(item_def("torch").unwrap().effect.is_none());
        assert!(item_def("excalibur").is_none());
    }

    #[test]
    fn test_item_display_name_falls_back_to_id() {
        assert_eq!(item_display_name("wolf_pelt"), "Wolf Pelt");
        assert_eq!(item_display_name("mystery_orb"), "mystery_orb");
    }

    #[test]
    fn test_normalize_item_id() {
        assert_eq!(normalize_item_id(" Healing Potion "), "healing_potion");
        assert_eq!(normalize_item_id("RUSTY-DAGGER"), "rusty_dagger");
        assert_eq!(normalize_item_id("silver   ring"), "silver_ring");
        assert_eq!(normalize_item_id(""), "");
    }
}
