//! Placement-to-points tables.

/// Courtesy points for a player who sat the session out.
pub const ABSENT_POINTS: i32 = 5;

/// Points awarded for a 1-based placement among `participants` non-absent
/// players. Total over its domain: placements outside the table and the
/// sentinel placement 0 score nothing, and unlisted participant counts use
/// the four-player table.
#[must_use]
pub fn points(placement: usize, participants: usize) -> i32 {
    const TWO: &[i32] = &[10, 6];
    const THREE: &[i32] = &[10, 6, 3];
    const FOUR: &[i32] = &[10, 6, 3, 1];
    let table = match participants {
        2 => TWO,
        3 => THREE,
        _ => FOUR,
    };
    match placement {
        0 => 0,
        p => table.get(p - 1).copied().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_tables_hold() {
        assert_eq!(points(1, 2), 10);
        assert_eq!(points(2, 2), 6);

        assert_eq!(points(1, 3), 10);
        assert_eq!(points(2, 3), 6);
        assert_eq!(points(3, 3), 3);

        assert_eq!(points(1, 4), 10);
        assert_eq!(points(2, 4), 6);
        assert_eq!(points(3, 4), 3);
        assert_eq!(points(4, 4), 1);
    }

    #[test]
    fn unplaced_scores_zero() {
        for participants in 0..6 {
            assert_eq!(points(0, participants), 0);
        }
    }

    #[test]
    fn out_of_table_placement_scores_zero() {
        assert_eq!(points(3, 2), 0);
        assert_eq!(points(4, 3), 0);
        assert_eq!(points(5, 4), 0);
    }

    #[test]
    fn unknown_participant_count_falls_back_to_four_player_table() {
        assert_eq!(points(4, 7), 1);
        assert_eq!(points(1, 1), 10);
        assert_eq!(points(2, 0), 6);
    }
}
