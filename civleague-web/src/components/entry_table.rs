use yew::prelude::*;

use civleague_core::Entry;

use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct EntryTableProps {
    /// Already placement-sorted by the store.
    pub entries: Vec<Entry>,
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
}

fn entry_row(entry: &Entry, on_delete: Option<&Callback<String>>) -> Html {
    let placement = entry
        .placement
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    let exit_turn = entry
        .exit_turn
        .map_or_else(|| "-".to_string(), |turn| turn.to_string());
    let difficulty = entry
        .difficulty
        .map_or_else(String::new, |d| d.name().to_string());
    let winner = if entry.winner { t("entry.yes") } else { t("entry.no") };
    let absent = if entry.absent {
        t("entry.absent-bonus")
    } else {
        t("entry.no")
    };
    let delete_cell = on_delete.map_or_else(
        || html! {},
        |on_delete| {
            let on_delete = on_delete.clone();
            let id = entry.id.clone();
            html! {
                <button class="link" onclick={Callback::from(move |_| on_delete.emit(id.clone()))}>
                    { t("entry.delete") }
                </button>
            }
        },
    );

    html! {
        <tr key={entry.id.clone()}>
            <td>{ placement }</td>
            <td>{ entry.player.clone() }</td>
            <td>{ entry.leader.clone().unwrap_or_default() }</td>
            <td>{ difficulty }</td>
            <td>{ entry.handicap_turns }</td>
            <td>{ exit_turn }</td>
            <td>{ entry.points }</td>
            <td>{ winner }</td>
            <td>{ absent }</td>
            <td class="right">{ delete_cell }</td>
        </tr>
    }
}

#[function_component(EntryTable)]
pub fn entry_table(props: &EntryTableProps) -> Html {
    html! {
        <table class="table">
            <thead>
                <tr>
                    <th>{ t("entry.placement") }</th>
                    <th>{ t("entry.player") }</th>
                    <th>{ t("entry.leader") }</th>
                    <th>{ t("entry.difficulty") }</th>
                    <th>{ t("entry.handicap") }</th>
                    <th>{ t("entry.exit-turn") }</th>
                    <th>{ t("entry.points") }</th>
                    <th>{ t("entry.winner") }</th>
                    <th>{ t("entry.absent") }</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for props
                    .entries
                    .iter()
                    .map(|entry| entry_row(entry, props.on_delete.as_ref())) }
            </tbody>
        </table>
    }
}
