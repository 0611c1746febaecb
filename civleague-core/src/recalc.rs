//! Session recalculation: keeps one session's entries internally consistent.

use crate::models::Entry;
use crate::scoring::{ABSENT_POINTS, points};

/// Recompute points, placements, and the winner flag for every entry of
/// `session_id`; all other entries pass through unchanged.
///
/// Absent entries are normalized first (fixed points, no placement, no
/// winner, no handicap). Scoring only happens once every participant has a
/// placement; until then points are suppressed to zero so half-entered
/// results never leak into the leaderboard. Entries are ranked by a stable
/// sort over placement, so duplicate or gapped placement numbers still
/// award the full points column top-down.
///
/// Idempotent: recalculating an already-consistent session changes nothing.
#[must_use]
pub fn recalculate(entries: &[Entry], session_id: &str) -> Vec<Entry> {
    let mut out = entries.to_vec();

    let mut participants = Vec::new();
    for (i, entry) in out.iter_mut().enumerate() {
        if entry.session_id != session_id {
            continue;
        }
        if entry.absent {
            entry.points = ABSENT_POINTS;
            entry.placement = None;
            entry.winner = false;
            entry.handicap_turns = 0;
            entry.exit_turn = None;
        } else {
            participants.push(i);
        }
    }

    let all_placed = !participants.is_empty()
        && participants
            .iter()
            .all(|&i| out[i].placement.is_some_and(|p| p > 0));

    if all_placed {
        let mut order = participants;
        order.sort_by_key(|&i| out[i].placement.unwrap_or(0));
        let count = order.len();
        for (rank, &i) in order.iter().enumerate() {
            out[i].points = points(rank + 1, count);
            out[i].winner = rank == 0;
        }
    } else {
        for &i in &participants {
            out[i].points = 0;
            out[i].winner = false;
        }
    }

    out
}
