//! Admin side-channel driven the way the shell does: authorize,
//! mutate, then persist immediately.

use grimoire::admin::{self, AdminAuth, AdminError};
use grimoire::constants::SAVE_FILE_NAME;
use grimoire::game_state::GameState;
use grimoire::save_manager::SaveManager;
use tempfile::TempDir;

#[test]
fn authorized_set_persists_parsed_integer() {
    let dir = TempDir::new().unwrap();
    let manager = SaveManager::at_path(dir.path().join(SAVE_FILE_NAME));
    let auth = AdminAuth::with_secret(Some("sesame".to_string()), true);

    let mut state = manager.load();
    auth.authorize(Some("sesame")).unwrap();
    admin::set(&mut state, "player.max_hp", "999999").unwrap();
    admin::set(&mut state, "player.hp", "999999").unwrap();
    assert_eq!(state.player.hp, 999999);
    manager.save(&state).unwrap();

    assert_eq!(manager.load().player.hp, 999999);
}

#[test]
fn out_of_range_admin_hp_is_clamped_on_reload() {
    let dir = TempDir::new().unwrap();
    let manager = SaveManager::at_path(dir.path().join(SAVE_FILE_NAME));
    let auth = AdminAuth::with_secret(Some("sesame".to_string()), true);

    // admin writes the raw value into the live state; the load-time
    // normalization restores the hp invariant on the next session
    let mut state = manager.load();
    auth.authorize(Some("sesame")).unwrap();
    admin::set(&mut state, "player.hp", "500").unwrap();
    assert_eq!(state.player.hp, 500);
    manager.save(&state).unwrap();

    let reloaded = manager.load();
    assert_eq!(reloaded.player.hp, reloaded.player.max_hp);
}

#[test]
fn failed_set_leaves_state_and_disk_untouched() {
    let dir = TempDir::new().unwrap();
    let manager = SaveManager::at_path(dir.path().join(SAVE_FILE_NAME));

    let mut state = manager.load();
    manager.save(&state).unwrap();
    let before = state.clone();

    for (path, value, expected) in [
        (
            "player.nonexistent_field",
            "x",
            AdminError::UnknownField { field: "nonexistent_field".to_string() },
        ),
        (
            "nosuchsection.hp",
            "1",
            AdminError::InvalidPath { segment: "nosuchsection".to_string() },
        ),
        (
            "player.hp",
            "not-a-number",
            AdminError::NotAnInteger { path: "player.hp".to_string() },
        ),
    ] {
        assert_eq!(admin::set(&mut state, path, value), Err(expected));
        assert_eq!(state, before);
    }

    assert_eq!(manager.load(), before);
}

#[test]
fn add_to_inventory_creates_key_and_round_trips() {
    let dir = TempDir::new().unwrap();
    let manager = SaveManager::at_path(dir.path().join(SAVE_FILE_NAME));

    let mut state = manager.load();
    admin::add_to_container(&mut state, "player.inventory", "orcish_blade", 3).unwrap();
    manager.save(&state).unwrap();

    let reloaded = manager.load();
    assert_eq!(reloaded.player.inventory.get("orcish_blade"), Some(&3));
}

#[test]
fn unauthorized_admin_never_reaches_mutation() {
    let auth = AdminAuth::with_secret(Some("sesame".to_string()), false);
    let state = GameState::default();

    assert_eq!(auth.authorize(Some("guess")), Err(AdminError::AuthFailed));
    // the shell aborts here; state was never touched
    assert_eq!(state, GameState::default());

    let disabled = AdminAuth::with_secret(None, false);
    assert!(!disabled.enabled());
    assert_eq!(disabled.authorize(Some("sesame")), Err(AdminError::Disabled));
}
