//! Record types owned by the session store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::difficulty::Difficulty;

/// One played match being tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub played_at: NaiveDate,
    #[serde(default)]
    pub turns: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    /// One-way flag; flipping it back is not part of the normal flow.
    #[serde(default)]
    pub completed: bool,
}

/// One player's participation record within exactly one session.
///
/// `points` and `winner` are computed fields; the recalculator owns them
/// and rewrites them after every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub session_id: String,
    /// Free-text name; identity is the trimmed exact string.
    pub player: String,
    #[serde(default)]
    pub leader: Option<String>,
    /// Tier snapshot taken when the session was registered, not authoritative.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub handicap_turns: u32,
    /// 1-based finishing rank; `None` while unplaced.
    #[serde(default)]
    pub placement: Option<u32>,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub winner: bool,
    #[serde(default)]
    pub absent: bool,
    #[serde(default)]
    pub exit_turn: Option<u32>,
}

impl Entry {
    #[must_use]
    pub const fn is_participant(&self) -> bool {
        !self.absent
    }

    #[must_use]
    pub fn trimmed_player(&self) -> &str {
        self.player.trim()
    }
}

/// Ladder position of one known player name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLadderState {
    pub player: String,
    pub difficulty: Difficulty,
    /// Consecutive-win counter, meaningful only at `Deity`.
    #[serde(default)]
    pub deity_turns: u32,
}

impl PlayerLadderState {
    /// Default state for a player first seen mid-league.
    #[must_use]
    pub fn seeded(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            difficulty: Difficulty::default(),
            deity_turns: 0,
        }
    }
}

/// The full snapshot the session store owns and persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueState {
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub players: BTreeMap<String, PlayerLadderState>,
    #[serde(default)]
    pub house_rules: String,
    /// Set once the initial roster seed has run.
    #[serde(default)]
    pub seeded: bool,
}

/// One roster slot of a session being registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub player: String,
    #[serde(default)]
    pub leader: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub handicap_turns: u32,
    #[serde(default)]
    pub placement: Option<u32>,
    #[serde(default)]
    pub absent: bool,
    #[serde(default)]
    pub exit_turn: Option<u32>,
}

/// Input payload for registering a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub played_at: NaiveDate,
    #[serde(default)]
    pub turns: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    pub roster: Vec<RosterSlot>,
}

/// Field edit applied to a single entry. `None` leaves a field untouched;
/// the double-`Option` fields distinguish "leave" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub player: Option<String>,
    pub leader: Option<Option<String>>,
    pub difficulty: Option<Option<Difficulty>>,
    pub handicap_turns: Option<u32>,
    pub placement: Option<Option<u32>>,
    pub absent: Option<bool>,
    pub exit_turn: Option<Option<u32>>,
}

impl EntryPatch {
    pub(crate) fn apply(self, entry: &mut Entry) {
        if let Some(player) = self.player {
            entry.player = player;
        }
        if let Some(leader) = self.leader {
            entry.leader = leader;
        }
        if let Some(difficulty) = self.difficulty {
            entry.difficulty = difficulty;
        }
        if let Some(handicap_turns) = self.handicap_turns {
            entry.handicap_turns = handicap_turns;
        }
        if let Some(placement) = self.placement {
            // Placement 0 means "unplaced" in form input.
            entry.placement = placement.filter(|&p| p > 0);
        }
        if let Some(absent) = self.absent {
            entry.absent = absent;
        }
        if let Some(exit_turn) = self.exit_turn {
            entry.exit_turn = exit_turn;
        }
    }
}

/// A session paired with its entries, placement-sorted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub session: Session,
    pub entries: Vec<Entry>,
}

impl SessionView {
    /// Winner's name, if the session has one.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.winner)
            .map(Entry::trimmed_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player: &str) -> Entry {
        Entry {
            id: "e1".into(),
            session_id: "s1".into(),
            player: player.into(),
            leader: None,
            difficulty: None,
            handicap_turns: 0,
            placement: None,
            points: 0,
            winner: false,
            absent: false,
            exit_turn: None,
        }
    }

    #[test]
    fn patch_distinguishes_leave_from_clear() {
        let mut e = entry("Peter");
        e.placement = Some(2);
        e.exit_turn = Some(180);

        EntryPatch::default().apply(&mut e);
        assert_eq!(e.placement, Some(2));
        assert_eq!(e.exit_turn, Some(180));

        EntryPatch {
            placement: Some(None),
            exit_turn: Some(None),
            ..EntryPatch::default()
        }
        .apply(&mut e);
        assert_eq!(e.placement, None);
        assert_eq!(e.exit_turn, None);
    }

    #[test]
    fn patch_treats_zero_placement_as_unplaced() {
        let mut e = entry("Jocke");
        EntryPatch {
            placement: Some(Some(0)),
            ..EntryPatch::default()
        }
        .apply(&mut e);
        assert_eq!(e.placement, None);
    }

    #[test]
    fn league_state_round_trips_through_json() {
        let state = LeagueState {
            sessions: vec![Session {
                id: "s1".into(),
                played_at: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                turns: Some(210),
                notes: None,
                completed: true,
            }],
            entries: vec![entry("Macce")],
            players: BTreeMap::from([(
                "Macce".to_string(),
                PlayerLadderState::seeded("Macce"),
            )]),
            house_rules: "No restarts.".into(),
            seeded: true,
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: LeagueState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let json = r#"{"id":"e9","session_id":"s9","player":"Ecca"}"#;
        let e: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(e.points, 0);
        assert!(!e.winner);
        assert!(!e.absent);
        assert_eq!(e.placement, None);
    }
}
