use yew::prelude::*;

use civleague_core::SessionView;

use crate::components::card::Card;
use crate::i18n::t;
use crate::pages::session_meta;

#[derive(Properties, Clone, PartialEq)]
pub struct LatestPageProps {
    pub sessions: Vec<SessionView>,
}

/// One-line result summary: entries in placement order, absentees and
/// elimination turns annotated.
#[must_use]
pub fn summary_line(view: &SessionView) -> String {
    view.entries
        .iter()
        .map(|entry| {
            let place = entry
                .placement
                .map_or_else(|| "-".to_string(), |p| format!("#{p}"));
            let mut part = format!("{place} {}", entry.trimmed_player());
            if entry.absent {
                part.push_str(&format!(" ({})", t("latest.absent")));
            }
            if let Some(turn) = entry.exit_turn {
                part.push_str(&format!(" \u{b7} T{turn}"));
            }
            part
        })
        .collect::<Vec<_>>()
        .join(" \u{b7} ")
}

#[function_component(LatestPage)]
pub fn latest_page(props: &LatestPageProps) -> Html {
    let panels = props.sessions.iter().map(|view| {
        let winner = view.winner().unwrap_or("-").to_string();
        html! {
            <div class="panel" key={view.session.id.clone()}>
                <div class="row between">
                    <div class="muted">{ session_meta(&view.session) }</div>
                    <div class="small">
                        { t("latest.winner") }{ ": " }<b>{ winner }</b>
                    </div>
                </div>
                <div class="small muted">{ summary_line(view) }</div>
            </div>
        }
    });

    html! {
        <Card title={t("latest.title")}>
            if props.sessions.is_empty() {
                <div class="muted">{ t("latest.empty") }</div>
            }
            <div class="col gap">
                { for panels }
            </div>
        </Card>
    }
}
