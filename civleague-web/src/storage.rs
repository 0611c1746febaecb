//! Browser persistence for the league snapshot.
//!
//! Each collection keeps its own localStorage key, matching the layout the
//! league has always used, so an existing browser profile keeps its data.

use std::collections::BTreeMap;

use civleague_core::{Entry, LeagueState, LeagueStorage, PlayerLadderState, Session};

use crate::dom;

const KEY_SESSIONS: &str = "civ_games";
const KEY_ENTRIES: &str = "civ_entries";
const KEY_PLAYERS: &str = "civ_players_state";
const KEY_RULES: &str = "civ_house_rules";
const KEY_SEEDED: &str = "civ_seed_done";

const ALL_KEYS: [&str; 5] = [KEY_SESSIONS, KEY_ENTRIES, KEY_PLAYERS, KEY_RULES, KEY_SEEDED];

/// League storage backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[derive(Debug, thiserror::Error)]
pub enum BrowserStorageError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn storage() -> Result<web_sys::Storage, BrowserStorageError> {
    dom::local_storage().map_err(|e| BrowserStorageError::Storage(dom::js_error_message(&e)))
}

fn read_key(
    storage: &web_sys::Storage,
    key: &str,
) -> Result<Option<String>, BrowserStorageError> {
    storage
        .get_item(key)
        .map_err(|e| BrowserStorageError::Storage(dom::js_error_message(&e)))
}

fn write_key(
    storage: &web_sys::Storage,
    key: &str,
    value: &str,
) -> Result<(), BrowserStorageError> {
    storage
        .set_item(key, value)
        .map_err(|e| BrowserStorageError::Storage(dom::js_error_message(&e)))
}

fn parse_or_empty<T: serde::de::DeserializeOwned>(
    json: Option<String>,
) -> Result<Vec<T>, BrowserStorageError> {
    match json {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

impl LeagueStorage for BrowserStorage {
    type Error = BrowserStorageError;

    fn load(&self) -> Result<Option<LeagueState>, Self::Error> {
        let storage = storage()?;
        let sessions_json = read_key(&storage, KEY_SESSIONS)?;
        let entries_json = read_key(&storage, KEY_ENTRIES)?;
        let players_json = read_key(&storage, KEY_PLAYERS)?;
        let seeded = read_key(&storage, KEY_SEEDED)?.as_deref() == Some("true");
        if sessions_json.is_none() && entries_json.is_none() && players_json.is_none() && !seeded {
            return Ok(None);
        }

        let sessions: Vec<Session> = parse_or_empty(sessions_json)?;
        let entries: Vec<Entry> = parse_or_empty(entries_json)?;
        let player_rows: Vec<PlayerLadderState> = parse_or_empty(players_json)?;
        let players: BTreeMap<String, PlayerLadderState> = player_rows
            .into_iter()
            .map(|row| (row.player.clone(), row))
            .collect();
        let house_rules = read_key(&storage, KEY_RULES)?.unwrap_or_default();

        Ok(Some(LeagueState {
            sessions,
            entries,
            players,
            house_rules,
            seeded,
        }))
    }

    fn save(&self, state: &LeagueState) -> Result<(), Self::Error> {
        let storage = storage()?;
        write_key(
            &storage,
            KEY_SESSIONS,
            &serde_json::to_string(&state.sessions)?,
        )?;
        write_key(
            &storage,
            KEY_ENTRIES,
            &serde_json::to_string(&state.entries)?,
        )?;
        let player_rows: Vec<&PlayerLadderState> = state.players.values().collect();
        write_key(&storage, KEY_PLAYERS, &serde_json::to_string(&player_rows)?)?;
        write_key(&storage, KEY_RULES, &state.house_rules)?;
        write_key(&storage, KEY_SEEDED, if state.seeded { "true" } else { "false" })
    }

    fn clear(&self) -> Result<(), Self::Error> {
        let storage = storage()?;
        for key in ALL_KEYS {
            storage
                .remove_item(key)
                .map_err(|e| BrowserStorageError::Storage(dom::js_error_message(&e)))?;
        }
        Ok(())
    }
}
