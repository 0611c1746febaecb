use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use civleague_core::{
    DEFAULT_ROSTER, Difficulty, PlayerLadderState, RosterSlot, SEED_PLAYER, SessionDraft,
};

use crate::components::card::Card;
use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct NewSessionPageProps {
    pub ladder: Vec<PlayerLadderState>,
    /// Whether any session has ever been completed; before that the form
    /// offers the opening-season seed instead of the live ladder.
    pub has_completed: bool,
    pub on_create: Callback<SessionDraft>,
}

/// Edit applied to one roster row from a form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEdit {
    Player(String),
    Leader(String),
    Difficulty(String),
    Handicap(String),
    Placement(String),
    Absent(bool),
    ExitTurn(String),
}

pub fn apply_roster_edit(slot: &mut RosterSlot, edit: RosterEdit) {
    match edit {
        RosterEdit::Player(value) => slot.player = value,
        RosterEdit::Leader(value) => {
            slot.leader = if value.trim().is_empty() {
                None
            } else {
                Some(value)
            };
        }
        RosterEdit::Difficulty(value) => slot.difficulty = Difficulty::from_name(&value),
        RosterEdit::Handicap(value) => slot.handicap_turns = value.parse().unwrap_or(0),
        RosterEdit::Placement(value) => {
            slot.placement = value.parse::<u32>().ok().filter(|&p| p > 0);
        }
        RosterEdit::Absent(true) => {
            slot.absent = true;
            slot.placement = None;
            slot.exit_turn = None;
        }
        RosterEdit::Absent(false) => slot.absent = false,
        RosterEdit::ExitTurn(value) => slot.exit_turn = value.parse().ok(),
    }
}

/// Pre-filled roster rows: live ladder tiers once the league is underway,
/// the opening-season seed before the first completed game.
#[must_use]
pub fn initial_roster(ladder: &[PlayerLadderState], has_completed: bool) -> Vec<RosterSlot> {
    DEFAULT_ROSTER
        .iter()
        .map(|&name| {
            let (difficulty, handicap_turns) = if has_completed {
                let row = ladder.iter().find(|p| p.player == name);
                (
                    row.map_or_else(Difficulty::default, |p| p.difficulty),
                    row.map_or(0, |p| p.deity_turns),
                )
            } else if name == SEED_PLAYER {
                (Difficulty::Deity, 1)
            } else {
                (Difficulty::Settler, 0)
            };
            RosterSlot {
                player: name.to_string(),
                difficulty: Some(difficulty),
                handicap_turns,
                ..RosterSlot::default()
            }
        })
        .collect()
}

fn today_iso() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.get(..10).map(str::to_string).unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

fn roster_row(idx: usize, slot: &RosterSlot, on_edit: &Callback<(usize, RosterEdit)>) -> Html {
    let on_player = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_edit.emit((idx, RosterEdit::Player(input.value())));
            }
        })
    };
    let on_difficulty = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_edit.emit((idx, RosterEdit::Difficulty(select.value())));
            }
        })
    };
    let on_handicap = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_edit.emit((idx, RosterEdit::Handicap(select.value())));
            }
        })
    };
    let on_leader = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_edit.emit((idx, RosterEdit::Leader(input.value())));
            }
        })
    };
    let on_absent = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_edit.emit((idx, RosterEdit::Absent(input.checked())));
            }
        })
    };
    let on_placement = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_edit.emit((idx, RosterEdit::Placement(select.value())));
            }
        })
    };
    let on_exit_turn = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_edit.emit((idx, RosterEdit::ExitTurn(input.value())));
            }
        })
    };

    html! {
        <div class="row gap wrap">
            <input
                class="w150"
                placeholder={t("new.player-placeholder")}
                value={slot.player.clone()}
                oninput={on_player}
            />

            <select onchange={on_difficulty}>
                { for Difficulty::ALL.iter().map(|&d| html! {
                    <option value={d.name()} selected={slot.difficulty == Some(d)}>
                        { d.name() }
                    </option>
                }) }
            </select>

            <select onchange={on_handicap}>
                { for (0..=10u32).map(|n| html! {
                    <option value={n.to_string()} selected={slot.handicap_turns == n}>
                        { format!("+{n}") }
                    </option>
                }) }
            </select>

            <input
                class="w200"
                placeholder={t("new.leader-placeholder")}
                value={slot.leader.clone().unwrap_or_default()}
                oninput={on_leader}
            />

            <label class="row gap s">
                <input type="checkbox" checked={slot.absent} onchange={on_absent} />
                { t("new.absent") }
            </label>

            <select disabled={slot.absent} onchange={on_placement}>
                <option value="0" selected={slot.placement.is_none()}>
                    { t("entry.placement") }
                </option>
                { for (1..=4u32).map(|n| html! {
                    <option value={n.to_string()} selected={slot.placement == Some(n)}>
                        { n.to_string() }
                    </option>
                }) }
            </select>

            <input
                class="w100"
                disabled={slot.absent}
                inputmode="numeric"
                placeholder={t("entry.exit-turn")}
                value={slot.exit_turn.map_or_else(String::new, |turn| turn.to_string())}
                oninput={on_exit_turn}
            />
        </div>
    }
}

#[function_component(NewSessionPage)]
pub fn new_session_page(props: &NewSessionPageProps) -> Html {
    let played_at = use_state(today_iso);
    let turns = use_state(String::new);
    let notes = use_state(String::new);
    let roster = use_state(|| initial_roster(&props.ladder, props.has_completed));

    let on_row_edit = {
        let roster = roster.clone();
        Callback::from(move |(idx, edit): (usize, RosterEdit)| {
            let mut rows = (*roster).clone();
            if let Some(slot) = rows.get_mut(idx) {
                apply_roster_edit(slot, edit);
            }
            roster.set(rows);
        })
    };

    let on_date = {
        let played_at = played_at.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                played_at.set(input.value());
            }
        })
    };
    let on_turns = {
        let turns = turns.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                turns.set(input.value());
            }
        })
    };
    let on_notes = {
        let notes = notes.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                notes.set(area.value());
            }
        })
    };

    let on_submit = {
        let played_at = played_at.clone();
        let turns = turns.clone();
        let notes = notes.clone();
        let roster = roster.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |_: MouseEvent| {
            let Ok(date) = NaiveDate::parse_from_str(&played_at, "%Y-%m-%d") else {
                log::warn!("ignoring submit with unparseable date {:?}", &*played_at);
                return;
            };
            on_create.emit(SessionDraft {
                played_at: date,
                turns: turns.parse().ok(),
                notes: if notes.trim().is_empty() {
                    None
                } else {
                    Some((*notes).clone())
                },
                roster: (*roster).clone(),
            });
        })
    };

    html! {
        <Card title={t("new.title")}>
            <div class="col gap">
                <div class="grid">
                    <label>
                        <span>{ t("new.date") }</span>
                        <input type="date" value={(*played_at).clone()} oninput={on_date} />
                    </label>
                    <label>
                        <span>{ t("new.turns") }</span>
                        <input
                            inputmode="numeric"
                            placeholder={t("new.turns-placeholder")}
                            value={(*turns).clone()}
                            oninput={on_turns}
                        />
                    </label>
                    <label class="full">
                        <span>{ t("new.notes") }</span>
                        <textarea
                            rows="3"
                            placeholder={t("new.notes-placeholder")}
                            value={(*notes).clone()}
                            oninput={on_notes}
                        />
                    </label>
                </div>

                { for (*roster)
                    .iter()
                    .enumerate()
                    .map(|(idx, slot)| roster_row(idx, slot, &on_row_edit)) }

                <div class="right">
                    <button class="btn primary" onclick={on_submit}>{ t("new.submit") }</button>
                </div>
            </div>
        </Card>
    }
}
