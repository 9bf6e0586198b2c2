use crate::constants::{LEVEL_UP_HEAL, LEVEL_UP_MAX_HP_GAIN, XP_CURVE_STEP};
use crate::events::GameEvent;
use crate::game_state::GameState;

/// XP required to advance past the given level. Linear curve.
pub fn xp_to_next(level: i64) -> i64 {
    level.max(1) * XP_CURVE_STEP
}

/// Adds XP to the player and processes any level-ups, in ascending
/// order. A single grant can cross multiple thresholds.
///
/// Non-positive amounts are a no-op; level demotion is not supported.
pub fn grant_xp(state: &mut GameState, amount: i64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if amount <= 0 {
        return events;
    }

    let player = &mut state.player;
    player.xp += amount;
    events.push(GameEvent::XpGained { amount });

    loop {
        let need = xp_to_next(player.level);
        if player.xp < need {
            break;
        }

        player.xp -= need;
        player.level += 1;
        player.max_hp += LEVEL_UP_MAX_HP_GAIN;
        player.hp += LEVEL_UP_HEAL;
        player.clamp_hp();

        events.push(GameEvent::LevelUp {
            new_level: player.level,
            new_max_hp: player.max_hp,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_to_next_linear_curve() {
        assert_eq!(xp_to_next(1), 100);
        assert_eq!(xp_to_next(5), 500);
        assert_eq!(xp_to_next(42), 4200);
        // floor at level 1 for degenerate input
        assert_eq!(xp_to_next(0), 100);
        assert_eq!(xp_to_next(-3), 100);
    }

    #[test]
    fn test_grant_xp_no_level_up() {
        let mut state = GameState::default();

        let events = grant_xp(&mut state, 50);
        assert_eq!(state.player.level, 1);
        assert_eq!(state.player.xp, 50);
        assert_eq!(events, vec![GameEvent::XpGained { amount: 50 }]);
    }

    #[test]
    fn test_grant_xp_single_level_up() {
        let mut state = GameState::default();
        state.player.hp = 80;

        let events = grant_xp(&mut state, 120);
        assert_eq!(state.player.level, 2);
        assert_eq!(state.player.xp, 20);
        assert_eq!(state.player.max_hp, 110);
        assert_eq!(state.player.hp, 90);
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            GameEvent::LevelUp { new_level: 2, new_max_hp: 110 }
        );
    }

    #[test]
    fn test_grant_xp_multiple_level_ups_in_order() {
        let mut state = GameState::default();
        state.player.hp = 90;

        // 350 XP from level 1: 100 to reach 2, 200 to reach 3, 50 left over
        let events = grant_xp(&mut state, 350);
        assert_eq!(state.player.level, 3);
        assert_eq!(state.player.xp, 50);
        assert_eq!(state.player.max_hp, 120);
        assert_eq!(state.player.hp, 110);

        let level_ups: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::LevelUp { new_level, .. } => Some(*new_level),
                _ => None,
            })
            .collect();
        assert_eq!(level_ups, vec![2, 3]);
    }

    #[test]
    fn test_grant_xp_invariant_after_return() {
        let mut state = GameState::default();

        for amount in [1, 99, 100, 250, 999, 10_000] {
            grant_xp(&mut state, amount);
            assert!(
                state.player.xp < xp_to_next(state.player.level),
                "xp {} >= threshold {} at level {}",
                state.player.xp,
                xp_to_next(state.player.level),
                state.player.level
            );
        }
    }

    #[test]
    fn test_grant_xp_non_positive_is_noop() {
        let mut state = GameState::default();
        state.player.xp = 40;

        assert!(grant_xp(&mut state, 0).is_empty());
        assert!(grant_xp(&mut state, -500).is_empty());
        assert_eq!(state.player.xp, 40);
        assert_eq!(state.player.level, 1);
    }

    #[test]
    fn test_level_up_heal_clamps_to_new_max_hp() {
        let mut state = GameState::default();
        state.player.hp = 105; // above default max via external mutation

        grant_xp(&mut state, 100);
        assert_eq!(state.player.max_hp, 110);
        assert_eq!(state.player.hp, 110);
    }
}
