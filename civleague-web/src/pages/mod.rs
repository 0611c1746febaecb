pub mod history;
pub mod latest;
pub mod leaderboard;
pub mod new_session;
pub mod ongoing;
pub mod rules;

use std::collections::BTreeMap;

use civleague_core::Session;

use crate::i18n::tr;

/// Session meta line: date plus the optional turn count.
#[must_use]
pub fn session_meta(session: &Session) -> String {
    let mut meta = session.played_at.to_string();
    if let Some(turns) = session.turns {
        let turns = turns.to_string();
        let mut args = BTreeMap::new();
        args.insert("turns", turns.as_str());
        meta.push(' ');
        meta.push_str(&tr("session.turns-suffix", Some(&args)));
    }
    meta
}
