use std::str::FromStr;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::SkError;

/// A cultural background, used to pick place names for worlds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Culture {
    /// Arabic naming.
    Arabic,
    /// Chinese naming.
    Chinese,
    /// English naming.
    English,
    /// Greek naming.
    Greek,
    /// Indian naming.
    Indian,
    /// Japanese naming.
    Japanese,
    /// Latin naming.
    Latin,
    /// Nigerian naming.
    Nigerian,
    /// Russian naming.
    Russian,
    /// Spanish naming.
    Spanish,
}

impl Culture {
    /// Every culture, in display order.
    pub const ALL: [Culture; 10] = [
        Self::Arabic,
        Self::Chinese,
        Self::English,
        Self::Greek,
        Self::Indian,
        Self::Japanese,
        Self::Latin,
        Self::Nigerian,
        Self::Russian,
        Self::Spanish,
    ];

    /// Pick a culture uniformly at random.
    pub fn random(rng: &mut StdRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// The culture's display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arabic => "Arabic",
            Self::Chinese => "Chinese",
            Self::English => "English",
            Self::Greek => "Greek",
            Self::Indian => "Indian",
            Self::Japanese => "Japanese",
            Self::Latin => "Latin",
            Self::Nigerian => "Nigerian",
            Self::Russian => "Russian",
            Self::Spanish => "Spanish",
        }
    }
}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Culture {
    type Err = SkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SkError::UnknownCulture {
                name: wanted.to_string(),
                options: Self::ALL.map(Culture::as_str).join(", "),
            })
    }
}
