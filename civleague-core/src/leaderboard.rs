//! All-time leaderboard reduction over the entry history.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Entry;

/// Ranked per-player summary row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub player: String,
    /// Sessions actually played; absences are not counted.
    pub played: u32,
    pub wins: u32,
    /// Total points including absence bonuses.
    pub points: i32,
    /// Mean of recorded placements, 0.0 when none were recorded.
    pub avg_placement: f64,
}

#[derive(Default)]
struct Acc {
    played: u32,
    wins: u32,
    points: i32,
    placements: Vec<u32>,
}

/// Reduce the full entry history, completed and ongoing alike, into ranked
/// rows: points descending, ties broken by ascending average placement.
/// Stateless; recomputed on every read.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(entries: &[Entry]) -> Vec<LeaderboardRow> {
    let mut acc: BTreeMap<&str, Acc> = BTreeMap::new();
    for entry in entries {
        let name = entry.trimmed_player();
        if name.is_empty() {
            continue;
        }
        let row = acc.entry(name).or_default();
        if entry.is_participant() {
            row.played += 1;
        }
        if entry.winner {
            row.wins += 1;
        }
        row.points += entry.points;
        if let Some(placement) = entry.placement.filter(|&p| p > 0) {
            row.placements.push(placement);
        }
    }

    let mut rows: Vec<LeaderboardRow> = acc
        .into_iter()
        .map(|(player, a)| {
            let avg_placement = if a.placements.is_empty() {
                0.0
            } else {
                f64::from(a.placements.iter().sum::<u32>()) / a.placements.len() as f64
            };
            LeaderboardRow {
                player: player.to_string(),
                played: a.played,
                wins: a.wins,
                points: a.points,
                avg_placement,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.avg_placement.total_cmp(&b.avg_placement))
    });
    rows
}
