use chrono::NaiveDate;
use civleague_web::pages::{
    history::{HistoryPage, HistoryPageProps},
    latest::{LatestPage, LatestPageProps},
    leaderboard::{LeaderboardPage, LeaderboardPageProps},
    new_session::{NewSessionPage, NewSessionPageProps},
    ongoing::{OngoingPage, OngoingPageProps},
    rules::{RulesPage, RulesPageProps},
};
use civleague_core::{Difficulty, Entry, LeaderboardRow, Session, SessionView};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

fn entry(player: &str, placement: Option<u32>, points: i32, absent: bool) -> Entry {
    Entry {
        id: format!("e-{player}"),
        session_id: "s1".into(),
        player: player.into(),
        leader: Some("Hojo Tokimune".into()),
        difficulty: Some(Difficulty::Prince),
        handicap_turns: 0,
        placement,
        points,
        winner: placement == Some(1),
        absent,
        exit_turn: None,
    }
}

fn session_view(completed: bool) -> SessionView {
    SessionView {
        session: Session {
            id: "s1".into(),
            played_at: NaiveDate::from_ymd_opt(2025, 7, 19).unwrap(),
            turns: Some(212),
            notes: Some("close finish".into()),
            completed,
        },
        entries: vec![
            entry("Peter", Some(1), 10, false),
            entry("Jocke", Some(2), 6, false),
            entry("Ecca", None, 5, true),
        ],
    }
}

#[test]
fn new_session_page_renders_seeded_roster() {
    civleague_web::i18n::set_lang("en");
    let props = NewSessionPageProps {
        ladder: Vec::new(),
        has_completed: false,
        on_create: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NewSessionPage>::with_props(props).render());
    assert!(html.contains("Register a session"));
    assert!(html.contains("Save as ongoing"));
    // All four default roster rows appear.
    for name in ["Peter", "Jocke", "Macce", "Ecca"] {
        assert!(html.contains(name), "missing roster row for {name}");
    }
    assert!(html.contains("Deity"));
}

#[test]
fn ongoing_page_lists_sessions_with_actions() {
    civleague_web::i18n::set_lang("en");
    let props = OngoingPageProps {
        sessions: vec![session_view(false)],
        on_complete: Callback::noop(),
        on_delete_session: Callback::noop(),
        on_delete_entry: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<OngoingPage>::with_props(props).render());
    assert!(html.contains("2025-07-19"));
    assert!(html.contains("212 turns"));
    assert!(html.contains("Mark as finished"));
    assert!(html.contains("Delete game"));
    assert!(html.contains("Yes (+5)"));
}

#[test]
fn ongoing_page_shows_empty_hint() {
    civleague_web::i18n::set_lang("en");
    let props = OngoingPageProps {
        sessions: Vec::new(),
        on_complete: Callback::noop(),
        on_delete_session: Callback::noop(),
        on_delete_entry: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<OngoingPage>::with_props(props).render());
    assert!(html.contains("No ongoing games"));
}

#[test]
fn leaderboard_page_renders_ranked_rows() {
    civleague_web::i18n::set_lang("en");
    let props = LeaderboardPageProps {
        rows: vec![
            LeaderboardRow {
                player: "Peter".into(),
                played: 3,
                wins: 2,
                points: 26,
                avg_placement: 1.33,
            },
            LeaderboardRow {
                player: "Jocke".into(),
                played: 3,
                wins: 1,
                points: 19,
                avg_placement: 2.0,
            },
        ],
    };
    let html = block_on(LocalServerRenderer::<LeaderboardPage>::with_props(props).render());
    assert!(html.contains("Standings"));
    assert!(html.contains("Peter"));
    assert!(html.contains("26"));
    assert!(html.contains("1.33"));
    assert!(html.contains("2.00"));
}

#[test]
fn leaderboard_page_handles_empty_history() {
    civleague_web::i18n::set_lang("en");
    let props = LeaderboardPageProps { rows: Vec::new() };
    let html = block_on(LocalServerRenderer::<LeaderboardPage>::with_props(props).render());
    assert!(html.contains("No data yet."));
}

#[test]
fn latest_page_summarizes_completed_sessions() {
    civleague_web::i18n::set_lang("en");
    let props = LatestPageProps {
        sessions: vec![session_view(true)],
    };
    let html = block_on(LocalServerRenderer::<LatestPage>::with_props(props).render());
    assert!(html.contains("Winner"));
    assert!(html.contains("Peter"));
    assert!(html.contains("#1 Peter"));
    assert!(html.contains("(absent)"));
}

#[test]
fn history_page_lists_finished_games() {
    civleague_web::i18n::set_lang("en");
    let props = HistoryPageProps {
        sessions: vec![session_view(true)],
        on_delete_session: Callback::noop(),
        on_delete_entry: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HistoryPage>::with_props(props).render());
    assert!(html.contains("History (finished)"));
    assert!(html.contains("Remove row"));
}

#[test]
fn rules_page_shows_saved_text() {
    civleague_web::i18n::set_lang("en");
    let props = RulesPageProps {
        rules: "No nukes before turn 200.".into(),
        on_save: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RulesPage>::with_props(props).render());
    assert!(html.contains("No nukes before turn 200."));
    assert!(html.contains("Stored locally in your browser."));
}

#[test]
fn swedish_locale_renders_original_labels() {
    civleague_web::i18n::set_lang("sv");
    let props = OngoingPageProps {
        sessions: vec![session_view(false)],
        on_complete: Callback::noop(),
        on_delete_session: Callback::noop(),
        on_delete_entry: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<OngoingPage>::with_props(props).render());
    assert!(html.contains("Markera som färdig"));
    assert!(html.contains("Ta bort spel"));
    // Restore for the other suites sharing this process.
    civleague_web::i18n::set_lang("en");
}
