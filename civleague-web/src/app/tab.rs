/// The six top-level views of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    NewSession,
    Ongoing,
    Leaderboard,
    Latest,
    History,
    Rules,
}

impl Tab {
    pub const ALL: [Self; 6] = [
        Self::NewSession,
        Self::Ongoing,
        Self::Leaderboard,
        Self::Latest,
        Self::History,
        Self::Rules,
    ];

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::NewSession => "tab.new",
            Self::Ongoing => "tab.ongoing",
            Self::Leaderboard => "tab.leaderboard",
            Self::Latest => "tab.latest",
            Self::History => "tab.history",
            Self::Rules => "tab.rules",
        }
    }
}
