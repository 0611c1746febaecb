//! Difficulty-ladder transitions applied when a session completes.

use std::collections::BTreeMap;

use crate::models::{Entry, PlayerLadderState};

/// One ladder step for one player.
///
/// Wins climb one tier; a win already at `Deity` banks an extra handicap
/// turn instead. Losses drop one tier and clear the streak, except at
/// `Settler` where there is nothing left to lose.
#[must_use]
pub fn advance(state: &PlayerLadderState, won: bool) -> PlayerLadderState {
    let mut next = state.clone();
    if won {
        if state.difficulty.is_top() {
            next.deity_turns = state.deity_turns + 1;
        } else {
            next.difficulty = state.difficulty.harder();
            next.deity_turns = 0;
        }
    } else if !state.difficulty.is_bottom() {
        next.difficulty = state.difficulty.easier();
        next.deity_turns = 0;
    }
    next
}

/// Apply the ladder transition for every non-absent entry of `session_id`.
///
/// Players without a prior ladder row are seeded at the default tier first.
/// Absent players and blank names are left untouched. The caller guarantees
/// this runs exactly once per session, at the moment it is marked complete.
#[must_use]
pub fn apply_completion(
    entries: &[Entry],
    session_id: &str,
    players: &BTreeMap<String, PlayerLadderState>,
) -> BTreeMap<String, PlayerLadderState> {
    let mut next = players.clone();
    for entry in entries.iter().filter(|e| e.session_id == session_id) {
        let name = entry.trimmed_player();
        if name.is_empty() || entry.absent {
            continue;
        }
        let current = next
            .get(name)
            .cloned()
            .unwrap_or_else(|| PlayerLadderState::seeded(name));
        next.insert(name.to_string(), advance(&current, entry.winner));
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    fn state(difficulty: Difficulty, deity_turns: u32) -> PlayerLadderState {
        PlayerLadderState {
            player: "Peter".into(),
            difficulty,
            deity_turns,
        }
    }

    #[test]
    fn win_climbs_one_tier_and_clears_streak() {
        let next = advance(&state(Difficulty::Settler, 0), true);
        assert_eq!(next.difficulty, Difficulty::Chieftain);
        assert_eq!(next.deity_turns, 0);

        let next = advance(&state(Difficulty::Immortal, 0), true);
        assert_eq!(next.difficulty, Difficulty::Deity);
        assert_eq!(next.deity_turns, 0);
    }

    #[test]
    fn win_at_deity_banks_streak_without_moving() {
        let mut s = state(Difficulty::Deity, 0);
        for expected in 1..=3 {
            s = advance(&s, true);
            assert_eq!(s.difficulty, Difficulty::Deity);
            assert_eq!(s.deity_turns, expected);
        }
    }

    #[test]
    fn loss_drops_one_tier_and_clears_streak() {
        let next = advance(&state(Difficulty::Deity, 4), false);
        assert_eq!(next.difficulty, Difficulty::Immortal);
        assert_eq!(next.deity_turns, 0);

        let next = advance(&state(Difficulty::King, 0), false);
        assert_eq!(next.difficulty, Difficulty::Prince);
    }

    #[test]
    fn loss_at_settler_is_a_floor() {
        let next = advance(&state(Difficulty::Settler, 0), false);
        assert_eq!(next.difficulty, Difficulty::Settler);
        assert_eq!(next.deity_turns, 0);
    }

    fn entry(player: &str, winner: bool, absent: bool) -> Entry {
        Entry {
            id: format!("e-{player}"),
            session_id: "s1".into(),
            player: player.into(),
            leader: None,
            difficulty: None,
            handicap_turns: 0,
            placement: None,
            points: 0,
            winner,
            absent,
            exit_turn: None,
        }
    }

    #[test]
    fn completion_moves_every_participant_once() {
        let players = BTreeMap::from([
            ("Peter".to_string(), state(Difficulty::Prince, 0)),
            ("Jocke".to_string(), {
                let mut s = state(Difficulty::Settler, 0);
                s.player = "Jocke".into();
                s
            }),
        ]);
        let entries = vec![
            entry("Peter", true, false),
            entry("Jocke", false, false),
            entry("Macce", false, true),
        ];
        let next = apply_completion(&entries, "s1", &players);
        assert_eq!(next["Peter"].difficulty, Difficulty::King);
        assert_eq!(next["Jocke"].difficulty, Difficulty::Settler);
        // Absent player gains no ladder row.
        assert!(!next.contains_key("Macce"));
    }

    #[test]
    fn unknown_player_is_seeded_at_prince_before_the_step() {
        let next = apply_completion(&[entry("Ecca", true, false)], "s1", &BTreeMap::new());
        assert_eq!(next["Ecca"].difficulty, Difficulty::King);
        assert_eq!(next["Ecca"].deity_turns, 0);
    }

    #[test]
    fn names_are_trimmed_and_blanks_skipped() {
        let entries = vec![entry("  Peter  ", true, false), entry("   ", true, false)];
        let next = apply_completion(&entries, "s1", &BTreeMap::new());
        assert_eq!(next.len(), 1);
        assert_eq!(next["Peter"].difficulty, Difficulty::King);
    }

    #[test]
    fn other_sessions_do_not_trigger_steps() {
        let mut other = entry("Peter", true, false);
        other.session_id = "s2".into();
        let next = apply_completion(&[other], "s1", &BTreeMap::new());
        assert!(next.is_empty());
    }
}
