//! CivLeague Core
//!
//! Platform-agnostic logic for tracking a recurring Civilization VI league:
//! per-session scoring, the difficulty ladder, and the all-time
//! leaderboard. This crate has no UI or browser dependencies; hosts provide
//! persistence through the [`LeagueStorage`] trait and display whatever the
//! store hands back.

pub mod difficulty;
pub mod ids;
pub mod ladder;
pub mod leaderboard;
pub mod memory;
pub mod models;
pub mod recalc;
pub mod scoring;
pub mod store;

// Re-export commonly used types
pub use difficulty::Difficulty;
pub use ids::IdGen;
pub use ladder::{advance, apply_completion};
pub use leaderboard::{LeaderboardRow, compute};
pub use memory::MemoryStorage;
pub use models::{
    Entry, EntryPatch, LeagueState, PlayerLadderState, RosterSlot, Session, SessionDraft,
    SessionView,
};
pub use recalc::recalculate;
pub use scoring::{ABSENT_POINTS, points};
pub use store::{DEFAULT_ROSTER, SEED_PLAYER, SessionStore, seed_roster};

/// Trait for abstracting snapshot persistence.
/// Platform-specific implementations should provide this.
pub trait LeagueStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the persisted league snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be loaded or parsed.
    fn load(&self) -> Result<Option<LeagueState>, Self::Error>;

    /// Persist the league snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be saved.
    fn save(&self, state: &LeagueState) -> Result<(), Self::Error>;

    /// Drop the persisted snapshot entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be removed.
    fn clear(&self) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn store_roundtrips_through_storage() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::open(storage.clone(), 0xABCD).unwrap();
        store
            .create_session(SessionDraft {
                played_at: NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
                turns: Some(250),
                notes: Some("marathon".into()),
                roster: vec![RosterSlot {
                    player: "Peter".into(),
                    placement: Some(1),
                    ..RosterSlot::default()
                }],
            })
            .unwrap();
        let snapshot = store.state().clone();

        let reopened = SessionStore::open(storage, 0xEF01).unwrap();
        assert_eq!(reopened.state(), &snapshot);
    }

    #[test]
    fn cleared_storage_seeds_on_next_open() {
        let storage = MemoryStorage::default();
        let _ = SessionStore::open(storage.clone(), 1).unwrap();
        storage.clear().unwrap();
        let store = SessionStore::open(storage, 2).unwrap();
        assert_eq!(store.ladder().len(), DEFAULT_ROSTER.len());
        assert_eq!(store.ladder()[SEED_PLAYER].difficulty, Difficulty::Deity);
    }
}
