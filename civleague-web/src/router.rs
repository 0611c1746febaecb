use yew_router::prelude::*;

use crate::app::Tab;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/ongoing")]
    Ongoing,
    #[at("/standings")]
    Standings,
    #[at("/latest")]
    Latest,
    #[at("/history")]
    History,
    #[at("/rules")]
    Rules,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_tab(tab: Tab) -> Self {
        match tab {
            Tab::NewSession => Self::Home,
            Tab::Ongoing => Self::Ongoing,
            Tab::Leaderboard => Self::Standings,
            Tab::Latest => Self::Latest,
            Tab::History => Self::History,
            Tab::Rules => Self::Rules,
        }
    }

    #[must_use]
    pub const fn to_tab(&self) -> Option<Tab> {
        match self {
            Self::Home => Some(Tab::NewSession),
            Self::Ongoing => Some(Tab::Ongoing),
            Self::Standings => Some(Tab::Leaderboard),
            Self::Latest => Some(Tab::Latest),
            Self::History => Some(Tab::History),
            Self::Rules => Some(Tab::Rules),
            Self::NotFound => None, // Preserve current tab on 404 routes.
        }
    }
}
