use crate::catalog::EnemyTemplate;
use crate::events::{Combatant, GameEvent};
use crate::game_state::Player;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Win,
    Lose,
}

/// Terminal result of a resolved combat. The caller applies hp, xp,
/// gold, and loot to the state as one logical unit; the resolver never
/// mutates state itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatResult {
    pub outcome: CombatOutcome,
    pub player_hp: i64,
    pub xp: i64,
    pub gold: i64,
    /// Looted item ids in loot-table order. Slots roll independently,
    /// so several drops from one kill are possible.
    pub loot: Vec<String>,
}

/// Runs a full combat exchange against an enemy template.
///
/// Alternating turns, player first. Player damage is uniform in
/// `[1 + level, 2 + level]`; enemy damage uses the template range.
/// Terminates because both sides always deal at least 1 damage.
pub fn resolve_combat(
    player: &Player,
    enemy: &EnemyTemplate,
    rng: &mut impl Rng,
) -> (CombatResult, Vec<GameEvent>) {
    let mut events = vec![GameEvent::EncounterStarted { enemy: enemy.id }];

    let mut player_hp = player.hp;
    let mut enemy_hp = enemy.hp;
    let level = player.level;

    loop {
        // Player attack
        let damage = rng.gen_range(1 + level..=2 + level);
        enemy_hp = (enemy_hp - damage).max(0);
        events.push(GameEvent::DamageDealt {
            source: Combatant::Player,
            target: Combatant::Enemy(enemy.id),
            amount: damage,
            hp_left: enemy_hp,
        });

        if enemy_hp <= 0 {
            let mut loot = Vec::new();
            for drop in enemy.loot {
                if rng.gen::<f64>() < drop.chance {
                    loot.push(drop.item_id.to_string());
                }
            }

            events.push(GameEvent::EnemyDefeated {
                enemy: enemy.id,
                xp: enemy.xp,
                gold: enemy.gold,
            });

            return (
                CombatResult {
                    outcome: CombatOutcome::Win,
                    player_hp: player_hp.max(0),
                    xp: enemy.xp,
                    gold: enemy.gold,
                    loot,
                },
                events,
            );
        }

        // Enemy attack
        let attack_max = enemy.attack_max.max(enemy.attack_min);
        let damage = rng.gen_range(enemy.attack_min..=attack_max);
        player_hp = (player_hp - damage).max(0);
        events.push(GameEvent::DamageDealt {
            source: Combatant::Enemy(enemy.id),
            target: Combatant::Player,
            amount: damage,
            hp_left: player_hp,
        });

        if player_hp <= 0 {
            events.push(GameEvent::PlayerDefeated);
            return (
                CombatResult {
                    outcome: CombatOutcome::Lose,
                    player_hp: 0,
                    xp: 0,
                    gold: 0,
                    loot: Vec::new(),
                },
                events,
            );
        }
    }
}
