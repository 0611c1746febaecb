use yew::prelude::*;

use civleague_core::LeaderboardRow;

use crate::components::card::Card;
use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct LeaderboardPageProps {
    pub rows: Vec<LeaderboardRow>,
}

fn board_row(row: &LeaderboardRow) -> Html {
    html! {
        <tr key={row.player.clone()}>
            <td>{ row.player.clone() }</td>
            <td>{ row.played }</td>
            <td>{ row.wins }</td>
            <td>{ row.points }</td>
            <td>{ format!("{:.2}", row.avg_placement) }</td>
        </tr>
    }
}

#[function_component(LeaderboardPage)]
pub fn leaderboard_page(props: &LeaderboardPageProps) -> Html {
    html! {
        <Card title={t("leaderboard.title")}>
            if props.rows.is_empty() {
                <div class="muted">{ t("leaderboard.empty") }</div>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{ t("leaderboard.player") }</th>
                            <th>{ t("leaderboard.played") }</th>
                            <th>{ t("leaderboard.wins") }</th>
                            <th>{ t("leaderboard.points") }</th>
                            <th>{ t("leaderboard.avg") }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.rows.iter().map(board_row) }
                    </tbody>
                </table>
            }
            <div class="muted small">{ t("leaderboard.hint") }</div>
        </Card>
    }
}
