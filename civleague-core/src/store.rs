//! The session store: owns the record collections, keeps them consistent
//! through the recalculator and the ladder, and persists every mutation
//! through a [`LeagueStorage`] backend.

use std::collections::BTreeMap;

use crate::LeagueStorage;
use crate::difficulty::Difficulty;
use crate::ids::IdGen;
use crate::ladder::apply_completion;
use crate::leaderboard::{LeaderboardRow, compute};
use crate::models::{
    Entry, EntryPatch, LeagueState, PlayerLadderState, Session, SessionDraft, SessionView,
};
use crate::recalc::recalculate;

/// Roster the league starts out with.
pub const DEFAULT_ROSTER: [&str; 4] = ["Peter", "Jocke", "Macce", "Ecca"];

/// The player seeded at the top tier for the league's opening season.
pub const SEED_PLAYER: &str = "Ecca";

/// Ladder rows for a fresh league: the seed player starts at `Deity` with
/// one banked handicap turn, everyone else at `Settler`.
#[must_use]
pub fn seed_roster() -> BTreeMap<String, PlayerLadderState> {
    DEFAULT_ROSTER
        .iter()
        .map(|&name| {
            let state = if name == SEED_PLAYER {
                PlayerLadderState {
                    player: name.to_string(),
                    difficulty: Difficulty::Deity,
                    deity_turns: 1,
                }
            } else {
                PlayerLadderState {
                    player: name.to_string(),
                    difficulty: Difficulty::Settler,
                    deity_turns: 0,
                }
            };
            (name.to_string(), state)
        })
        .collect()
}

/// In-memory collections plus the persistence backend.
///
/// All derivation logic lives in the pure sibling modules; this type only
/// sequences them, generates ids, and saves the snapshot after each change.
#[derive(Debug, Clone)]
pub struct SessionStore<S: LeagueStorage> {
    storage: S,
    ids: IdGen,
    state: LeagueState,
}

impl<S: LeagueStorage> SessionStore<S> {
    /// Load the persisted snapshot, seeding the initial roster the first
    /// time the store opens onto an empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be loaded or the seed cannot
    /// be saved.
    pub fn open(storage: S, entropy: u64) -> Result<Self, S::Error> {
        let state = storage.load()?.unwrap_or_default();
        let mut store = Self {
            storage,
            ids: IdGen::new(entropy),
            state,
        };
        if !store.state.seeded
            && store.state.sessions.is_empty()
            && store.state.entries.is_empty()
        {
            store.state.players = seed_roster();
            store.state.seeded = true;
            store.persist()?;
        }
        Ok(store)
    }

    fn persist(&self) -> Result<(), S::Error> {
        self.storage.save(&self.state)
    }

    #[must_use]
    pub const fn state(&self) -> &LeagueState {
        &self.state
    }

    #[must_use]
    pub const fn ladder(&self) -> &BTreeMap<String, PlayerLadderState> {
        &self.state.players
    }

    #[must_use]
    pub fn house_rules(&self) -> &str {
        &self.state.house_rules
    }

    /// Register a session and its entries in bulk, then normalize them.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated snapshot cannot be saved.
    pub fn create_session(&mut self, draft: SessionDraft) -> Result<String, S::Error> {
        let session = Session {
            id: self.ids.next_id(),
            played_at: draft.played_at,
            turns: draft.turns,
            notes: draft.notes.filter(|n| !n.trim().is_empty()),
            completed: false,
        };
        let session_id = session.id.clone();
        for slot in draft.roster {
            self.state.entries.push(Entry {
                id: self.ids.next_id(),
                session_id: session_id.clone(),
                player: slot.player,
                leader: slot.leader.filter(|l| !l.trim().is_empty()),
                difficulty: slot.difficulty,
                handicap_turns: slot.handicap_turns,
                placement: slot.placement.filter(|&p| p > 0),
                points: 0,
                winner: false,
                absent: slot.absent,
                exit_turn: slot.exit_turn,
            });
        }
        self.state.sessions.push(session);
        self.state.entries = recalculate(&self.state.entries, &session_id);
        self.persist()?;
        Ok(session_id)
    }

    /// Edit one entry and recalculate its session. Returns whether the edit
    /// was applied; edits to entries of completed sessions are refused.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated snapshot cannot be saved.
    pub fn update_entry(&mut self, entry_id: &str, patch: EntryPatch) -> Result<bool, S::Error> {
        let Some(pos) = self.state.entries.iter().position(|e| e.id == entry_id) else {
            return Ok(false);
        };
        let session_id = self.state.entries[pos].session_id.clone();
        if self
            .state
            .sessions
            .iter()
            .any(|s| s.id == session_id && s.completed)
        {
            return Ok(false);
        }
        patch.apply(&mut self.state.entries[pos]);
        self.state.entries = recalculate(&self.state.entries, &session_id);
        self.persist()?;
        Ok(true)
    }

    /// Remove one entry and recalculate what remains of its session.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated snapshot cannot be saved.
    pub fn delete_entry(&mut self, entry_id: &str) -> Result<(), S::Error> {
        let Some(pos) = self.state.entries.iter().position(|e| e.id == entry_id) else {
            return Ok(());
        };
        let session_id = self.state.entries.remove(pos).session_id;
        self.state.entries = recalculate(&self.state.entries, &session_id);
        self.persist()
    }

    /// Remove a session and cascade to its entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated snapshot cannot be saved.
    pub fn delete_session(&mut self, session_id: &str) -> Result<(), S::Error> {
        self.state.sessions.retain(|s| s.id != session_id);
        self.state.entries.retain(|e| e.session_id != session_id);
        self.persist()
    }

    /// Mark a session complete and advance every participant's ladder
    /// state. One-way: a session already completed is left alone, which
    /// keeps the ladder transition exactly-once. Returns whether the
    /// completion was applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated snapshot cannot be saved.
    pub fn mark_completed(&mut self, session_id: &str) -> Result<bool, S::Error> {
        let Some(pos) = self.state.sessions.iter().position(|s| s.id == session_id) else {
            return Ok(false);
        };
        if self.state.sessions[pos].completed {
            return Ok(false);
        }
        self.state.players = apply_completion(&self.state.entries, session_id, &self.state.players);
        self.state.sessions[pos].completed = true;
        self.persist()?;
        Ok(true)
    }

    /// Overwrite the free-text house rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated snapshot cannot be saved.
    pub fn set_house_rules(&mut self, text: String) -> Result<(), S::Error> {
        self.state.house_rules = text;
        self.persist()
    }

    /// Wipe all sessions and entries and re-seed the opening roster. House
    /// rules survive the wipe.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset snapshot cannot be saved.
    pub fn clear_history(&mut self) -> Result<(), S::Error> {
        let house_rules = std::mem::take(&mut self.state.house_rules);
        self.state = LeagueState {
            players: seed_roster(),
            house_rules,
            seeded: true,
            ..LeagueState::default()
        };
        self.persist()
    }

    /// Ranked leaderboard over the full entry history. Read-only.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<LeaderboardRow> {
        compute(&self.state.entries)
    }

    #[must_use]
    pub fn has_completed(&self) -> bool {
        self.state.sessions.iter().any(|s| s.completed)
    }

    #[must_use]
    pub fn ongoing(&self) -> Vec<SessionView> {
        self.views_where(|s| !s.completed)
    }

    #[must_use]
    pub fn completed(&self) -> Vec<SessionView> {
        self.views_where(|s| s.completed)
    }

    /// The most recently played completed sessions, capped at `limit`.
    #[must_use]
    pub fn latest(&self, limit: usize) -> Vec<SessionView> {
        let mut views = self.completed();
        views.truncate(limit);
        views
    }

    /// One session with its placement-sorted entries.
    #[must_use]
    pub fn session_view(&self, session_id: &str) -> Option<SessionView> {
        self.views_where(|s| s.id == session_id).into_iter().next()
    }

    fn views_where(&self, keep: impl Fn(&Session) -> bool) -> Vec<SessionView> {
        let mut views: Vec<SessionView> = self
            .state
            .sessions
            .iter()
            .filter(|s| keep(s))
            .map(|session| {
                let mut entries: Vec<Entry> = self
                    .state
                    .entries
                    .iter()
                    .filter(|e| e.session_id == session.id)
                    .cloned()
                    .collect();
                // Unplaced rows sink to the bottom, as on the score sheet.
                entries.sort_by_key(|e| e.placement.unwrap_or(99));
                SessionView {
                    session: session.clone(),
                    entries,
                }
            })
            .collect();
        views.sort_by(|a, b| b.session.played_at.cmp(&a.session.played_at));
        views
    }
}
