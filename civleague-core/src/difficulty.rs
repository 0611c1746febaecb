//! The eight ordered Civilization difficulty tiers.

use serde::{Deserialize, Serialize};

/// Difficulty tier a player is assigned for a session.
///
/// Tiers are ordered from easiest (`Settler`) to hardest (`Deity`); the
/// ladder moves players one step at a time along this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Settler,
    Chieftain,
    Warlord,
    Prince,
    King,
    Emperor,
    Immortal,
    Deity,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Self; 8] = [
        Self::Settler,
        Self::Chieftain,
        Self::Warlord,
        Self::Prince,
        Self::King,
        Self::Emperor,
        Self::Immortal,
        Self::Deity,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One tier up, clamped at `Deity`.
    #[must_use]
    pub fn harder(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// One tier down, clamped at `Settler`.
    #[must_use]
    pub fn easier(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::Deity)
    }

    #[must_use]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::Settler)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Settler => "Settler",
            Self::Chieftain => "Chieftain",
            Self::Warlord => "Warlord",
            Self::Prince => "Prince",
            Self::King => "King",
            Self::Emperor => "Emperor",
            Self::Immortal => "Immortal",
            Self::Deity => "Deity",
        }
    }

    /// Exact-name lookup.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.name() == name)
    }

    /// Lenient lookup: unrecognized input resolves to the default tier.
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Prince
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
