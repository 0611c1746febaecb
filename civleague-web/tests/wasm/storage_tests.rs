//! Browser-side storage round-trip checks. Run with `wasm-pack test --headless`.

use civleague_core::{LeagueState, LeagueStorage, PlayerLadderState};
use civleague_web::storage::BrowserStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn snapshot_round_trips_through_local_storage() {
    let storage = BrowserStorage;
    storage.clear().unwrap();

    let mut state = LeagueState::default();
    state.house_rules = "Quick combat on.".to_string();
    state.seeded = true;
    state.players.insert(
        "Ecca".to_string(),
        PlayerLadderState {
            player: "Ecca".to_string(),
            difficulty: civleague_core::Difficulty::Deity,
            deity_turns: 2,
        },
    );

    storage.save(&state).unwrap();
    let loaded = storage.load().unwrap().expect("snapshot should exist");
    assert_eq!(loaded, state);

    storage.clear().unwrap();
    assert!(storage.load().unwrap().is_none());
}

#[wasm_bindgen_test]
fn empty_profile_loads_as_none() {
    let storage = BrowserStorage;
    storage.clear().unwrap();
    assert!(storage.load().unwrap().is_none());
}
