use yew::prelude::*;

use civleague_core::PlayerLadderState;

use crate::app::state::AppState;
use crate::app::{Tab, handlers};
use crate::components::tabs::TabsBar;
use crate::i18n::{LOCALES, t};
use crate::pages::history::HistoryPage;
use crate::pages::latest::LatestPage;
use crate::pages::leaderboard::LeaderboardPage;
use crate::pages::new_session::NewSessionPage;
use crate::pages::ongoing::OngoingPage;
use crate::pages::rules::RulesPage;

const LATEST_LIMIT: usize = 10;

pub fn render_app(state: &AppState, on_select_tab: Callback<Tab>) -> Html {
    let store = (*state.store).as_ref();
    let tab = *state.tab;

    let body = match tab {
        Tab::NewSession => {
            let ladder: Vec<PlayerLadderState> = store
                .map(|s| s.ladder().values().cloned().collect())
                .unwrap_or_default();
            let has_completed = store.is_some_and(super::state::Store::has_completed);
            html! {
                <NewSessionPage
                    {ladder}
                    {has_completed}
                    on_create={handlers::build_create_session(state)}
                />
            }
        }
        Tab::Ongoing => html! {
            <OngoingPage
                sessions={store.map(super::state::Store::ongoing).unwrap_or_default()}
                on_complete={handlers::build_mark_completed(state)}
                on_delete_session={handlers::build_delete_session(state)}
                on_delete_entry={handlers::build_delete_entry(state)}
            />
        },
        Tab::Leaderboard => html! {
            <LeaderboardPage rows={store.map(super::state::Store::leaderboard).unwrap_or_default()} />
        },
        Tab::Latest => html! {
            <LatestPage sessions={store.map(|s| s.latest(LATEST_LIMIT)).unwrap_or_default()} />
        },
        Tab::History => html! {
            <HistoryPage
                sessions={store.map(super::state::Store::completed).unwrap_or_default()}
                on_delete_session={handlers::build_delete_session(state)}
                on_delete_entry={handlers::build_delete_entry(state)}
            />
        },
        Tab::Rules => html! {
            <RulesPage
                rules={store.map_or_else(String::new, |s| s.house_rules().to_string())}
                on_save={handlers::build_save_rules(state)}
            />
        },
    };

    let on_clear = handlers::build_clear_history(state);
    let on_language = handlers::build_set_language(state);
    let current_language = (*state.language).clone();
    let onchange_language = Callback::from(move |e: Event| {
        if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
            on_language.emit(select.value());
        }
    });

    html! {
        <div class="wrap">
            <header class="topbar">
                <h1>{ t("app.title") }</h1>
                <div class="spacer" />
                <select class="lang" onchange={onchange_language} aria-label="language">
                    { for LOCALES.iter().map(|&(code, name)| html! {
                        <option value={code} selected={current_language == code}>{ name }</option>
                    }) }
                </select>
                <button
                    class="btn secondary"
                    onclick={Callback::from(move |_| on_clear.emit(()))}
                >
                    { t("app.clear") }
                </button>
            </header>

            <TabsBar active={tab} on_select={on_select_tab} />

            { body }

            <footer class="muted center small">{ t("app.footer") }</footer>
        </div>
    }
}
