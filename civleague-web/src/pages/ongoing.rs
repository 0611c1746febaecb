use yew::prelude::*;

use civleague_core::SessionView;

use crate::components::card::Card;
use crate::components::entry_table::EntryTable;
use crate::i18n::t;
use crate::pages::session_meta;

#[derive(Properties, Clone, PartialEq)]
pub struct OngoingPageProps {
    pub sessions: Vec<SessionView>,
    pub on_complete: Callback<String>,
    pub on_delete_session: Callback<String>,
    pub on_delete_entry: Callback<String>,
}

#[function_component(OngoingPage)]
pub fn ongoing_page(props: &OngoingPageProps) -> Html {
    let panels = props.sessions.iter().map(|view| {
        let complete = {
            let on_complete = props.on_complete.clone();
            let id = view.session.id.clone();
            Callback::from(move |_| on_complete.emit(id.clone()))
        };
        let delete = {
            let on_delete = props.on_delete_session.clone();
            let id = view.session.id.clone();
            Callback::from(move |_| on_delete.emit(id.clone()))
        };
        html! {
            <div class="panel" key={view.session.id.clone()}>
                <div class="row between">
                    <div class="muted">{ session_meta(&view.session) }</div>
                    <div class="row gap">
                        <button class="btn" onclick={complete}>{ t("ongoing.complete") }</button>
                        <button class="btn danger" onclick={delete}>{ t("ongoing.delete") }</button>
                    </div>
                </div>
                <EntryTable
                    entries={view.entries.clone()}
                    on_delete={Some(props.on_delete_entry.clone())}
                />
            </div>
        }
    });

    html! {
        <Card title={t("ongoing.title")}>
            if props.sessions.is_empty() {
                <div class="muted">{ t("ongoing.empty") }</div>
            }
            { for panels }
        </Card>
    }
}
