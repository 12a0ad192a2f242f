use super::*;

/// Result of a round, always from the user's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same round seen from the opponent's side.
    pub fn flip(&self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }
}

/// Judge `user` against `opponent`. Total over all nine pairings.
pub fn judge(user: Move, opponent: Move) -> Outcome {
    match (user, opponent) {
        (u, o) if u == o => Outcome::Draw,
        (u, o) if u.beats(&o) => Outcome::Win,
        _ => Outcome::Lose,
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "Win"),
            Self::Lose => write!(f, "Lose"),
            Self::Draw => write!(f, "Draw"),
        }
    }
}
