use crate::catalog::{enemy_template, item_def, normalize_item_id, ItemEffect};
use crate::combat_logic::{resolve_combat, CombatOutcome, CombatResult};
use crate::constants::{HUNT_BASE_SP, HUNT_EXTRA_SP_MAX, REST_HP_PER_SP};
use crate::enemy_selection::choose_enemy;
use crate::events::{ExploreFind, GameEvent};
use crate::game_state::{GameState, Meta, Player};
use crate::inventory;
use crate::progression::{grant_xp, xp_to_next};
use rand::Rng;

/// Recoverable input errors for player actions. Every variant is a
/// no-op: when an action returns an error, no state was mutated and
/// the caller can safely skip persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("you are down (HP 0); rest or revive first")]
    PlayerDown,
    #[error("invalid amount: must be a positive integer")]
    InvalidAmount,
    #[error("not enough SP")]
    NotEnoughSp,
    #[error("invalid item id")]
    InvalidItemId,
    #[error("you don't have any {0}")]
    ItemNotHeld(String),
    #[error("unknown item {0}")]
    UnknownItem(String),
    #[error("cannot use {0} (no effect defined)")]
    NoUseEffect(String),
}

/// Read-only snapshot for HUD rendering.
#[derive(Debug, Clone, Copy)]
pub struct StatusView<'a> {
    pub player: &'a Player,
    pub meta: &'a Meta,
    /// XP threshold for the player's current level.
    pub xp_to_next: i64,
}

/// Returns the status view. Never mutates state.
pub fn status(state: &GameState) -> StatusView<'_> {
    StatusView {
        player: &state.player,
        meta: &state.meta,
        xp_to_next: xp_to_next(state.player.level),
    }
}

/// Explores the world: a d100 roll picks between treasure, an item
/// find, loose gold, an enemy encounter, or nothing. Every explore
/// advances the command counter, so even a "nothing" roll mutates
/// state and should be persisted.
pub fn explore(state: &mut GameState, rng: &mut impl Rng) -> Result<Vec<GameEvent>, ActionError> {
    if !state.player.is_alive() {
        return Err(ActionError::PlayerDown);
    }

    state.meta.command_count += 1;
    let mut events = Vec::new();
    let roll = rng.gen_range(1..=100);

    // Treasure (<=2%)
    if roll <= 2 {
        let gold = rng.gen_range(100..=500);
        state.player.gold += gold;
        events.push(GameEvent::Exploration { find: ExploreFind::Treasure });
        events.push(GameEvent::GoldGained { amount: gold });

        let finds = ["healing_potion", "rusty_dagger", "torch"];
        let item_id = finds[rng.gen_range(0..finds.len())];
        inventory::add(&mut state.player, item_id, 1);
        events.push(GameEvent::ItemAdded { item_id: item_id.to_string(), count: 1 });
        return Ok(events);
    }

    // Item find (<=10%)
    if roll <= 10 {
        let finds = ["healing_potion", "torch"];
        let item_id = finds[rng.gen_range(0..finds.len())];
        inventory::add(&mut state.player, item_id, 1);
        events.push(GameEvent::Exploration { find: ExploreFind::Item });
        events.push(GameEvent::ItemAdded { item_id: item_id.to_string(), count: 1 });
        return Ok(events);
    }

    // Gold find (<=30%)
    if roll <= 30 {
        let gold = rng.gen_range(5..=50);
        state.player.gold += gold;
        events.push(GameEvent::Exploration { find: ExploreFind::Gold });
        events.push(GameEvent::GoldGained { amount: gold });
        return Ok(events);
    }

    // Enemy encounter (<=50%)
    if roll <= 50 {
        let enemy_id = choose_enemy(state, 0, rng);
        let (result, combat_events) = resolve_combat(&state.player, enemy_template(enemy_id), rng);
        events.extend(combat_events);

        state.player.hp = result.player_hp.max(0);
        if result.outcome == CombatOutcome::Win {
            apply_victory_rewards(state, &result, 1.0, &mut events);
        }
        return Ok(events);
    }

    events.push(GameEvent::Exploration { find: ExploreFind::Nothing });
    Ok(events)
}

/// Hunts for an enemy, staking extra SP for a tougher opponent pool
/// and proportionally larger rewards.
///
/// Costs `1 + stake` SP up front (stake clamped to `[0, 5]`). On a win
/// with 0 HP remaining the player is revived to 1 HP.
pub fn hunt(state: &mut GameState, stake: i64, rng: &mut impl Rng) -> Result<Vec<GameEvent>, ActionError> {
    if !state.player.is_alive() {
        return Err(ActionError::PlayerDown);
    }

    let stake = stake.clamp(0, HUNT_EXTRA_SP_MAX);
    let cost = HUNT_BASE_SP + stake;
    if state.player.sp < cost {
        return Err(ActionError::NotEnoughSp);
    }

    state.player.sp -= cost;
    state.meta.command_count += 1;
    let mut events = vec![GameEvent::SpSpent { amount: cost }];

    let enemy_id = choose_enemy(state, stake, rng);
    let (result, combat_events) = resolve_combat(&state.player, enemy_template(enemy_id), rng);
    events.extend(combat_events);

    state.player.hp = result.player_hp.max(0);
    if result.outcome == CombatOutcome::Win {
        // each staked SP adds 25% to xp and gold rewards
        let multiplier = 1.0 + 0.25 * stake as f64;
        apply_victory_rewards(state, &result, multiplier, &mut events);

        if state.player.hp == 0 {
            state.player.hp = 1;
            events.push(GameEvent::HpRestored { amount: 1 });
        }
    }

    Ok(events)
}

fn apply_victory_rewards(
    state: &mut GameState,
    result: &CombatResult,
    multiplier: f64,
    events: &mut Vec<GameEvent>,
) {
    let xp = (result.xp as f64 * multiplier) as i64;
    let gold = (result.gold as f64 * multiplier) as i64;

    events.extend(grant_xp(state, xp));

    state.player.gold += gold;
    events.push(GameEvent::GoldGained { amount: gold });

    for item_id in &result.loot {
        inventory::add(&mut state.player, item_id, 1);
        events.push(GameEvent::ItemAdded { item_id: item_id.clone(), count: 1 });
    }
}

/// Rests, converting SP into HP at 25 HP per SP, clamped to max HP.
pub fn rest(state: &mut GameState, amount: i64) -> Result<Vec<GameEvent>, ActionError> {
    if amount <= 0 {
        return Err(ActionError::InvalidAmount);
    }
    if state.player.sp < amount {
        return Err(ActionError::NotEnoughSp);
    }

    state.player.sp -= amount;
    let hp_gain = amount * REST_HP_PER_SP;
    state.player.hp += hp_gain;
    state.player.clamp_hp();

    Ok(vec![
        GameEvent::SpSpent { amount },
        GameEvent::HpRestored { amount: hp_gain },
    ])
}

/// Uses one unit of an item from the inventory. The id is
/// canonicalized first, so "Healing Potion" works. Only cataloged
/// items with an effect can be used.
pub fn use_item(
    state: &mut GameState,
    raw_item_id: &str,
    rng: &mut impl Rng,
) -> Result<Vec<GameEvent>, ActionError> {
    let item_id = normalize_item_id(raw_item_id);
    if item_id.is_empty() {
        return Err(ActionError::InvalidItemId);
    }

    if !inventory::has(&state.player, &item_id, 1) {
        return Err(ActionError::ItemNotHeld(item_id));
    }

    let def = item_def(&item_id).ok_or_else(|| ActionError::UnknownItem(item_id.clone()))?;
    let effect = def
        .effect
        .ok_or_else(|| ActionError::NoUseEffect(item_id.clone()))?;

    match effect {
        ItemEffect::Restore { hp_min, hp_max, sp_min, sp_max } => {
            let hp_gain = rng.gen_range(hp_min..=hp_max);
            let sp_gain = rng.gen_range(sp_min..=sp_max);

            state.player.hp += hp_gain;
            state.player.sp += sp_gain;
            state.player.clamp_hp();

            inventory::remove(&mut state.player, &item_id, 1);

            Ok(vec![
                GameEvent::ItemRemoved { item_id, count: 1 },
                GameEvent::HpRestored { amount: hp_gain },
            ])
        }
    }
}

/// Replaces the state with the new-game default. Confirmation is the
/// shell's concern; calling this always mutates.
pub fn reset(state: &mut GameState) -> bool {
    *state = GameState::default();
    true
}
