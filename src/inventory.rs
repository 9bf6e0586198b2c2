use crate::catalog::normalize_item_id;
use crate::game_state::Player;
use std::collections::BTreeMap;

/// Returns how many of an item the player holds.
pub fn count(player: &Player, item_id: &str) -> i64 {
    player.inventory.get(item_id).copied().unwrap_or(0)
}

/// Returns true if the player holds at least `qty` of an item.
pub fn has(player: &Player, item_id: &str, qty: i64) -> bool {
    if qty <= 0 {
        return true;
    }
    count(player, item_id) >= qty
}

/// Adds `qty` of an item, creating the stack if absent. Zero or
/// negative quantities are a no-op.
pub fn add(player: &mut Player, item_id: &str, qty: i64) {
    if qty <= 0 {
        return;
    }
    *player.inventory.entry(item_id.to_string()).or_insert(0) += qty;
}

/// Removes `qty` of an item. Removing at least as many as held deletes
/// the stack entirely rather than going negative.
pub fn remove(player: &mut Player, item_id: &str, qty: i64) {
    if qty <= 0 {
        return;
    }
    let have = count(player, item_id);
    if have <= qty {
        player.inventory.remove(item_id);
    } else {
        player.inventory.insert(item_id.to_string(), have - qty);
    }
}

/// Rebuilds an inventory with canonical item ids: keys are normalized,
/// duplicate stacks merged, and empty or non-positive entries dropped.
/// Applied transparently when loading older saves.
pub fn normalize_inventory(inventory: &BTreeMap<String, i64>) -> BTreeMap<String, i64> {
    let mut normalized = BTreeMap::new();
    for (raw_id, &qty) in inventory {
        if qty <= 0 {
            continue;
        }
        let id = normalize_item_id(raw_id);
        if id.is_empty() {
            continue;
        }
        *normalized.entry(id).or_insert(0) += qty;
    }
    normalized
}
