use crate::Streak;
use crate::game::*;

/// Whether the current run still accepts moves.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    Ready,
    Finished,
}

/// Everything a front end needs to render one played round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    pub user: Move,
    pub opponent: Move,
    pub outcome: Outcome,
    /// Streak after the round was applied.
    pub streak: Streak,
    /// True iff this round ended the run.
    pub over: bool,
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} vs {}: {} (streak {})",
            self.user, self.opponent, self.outcome, self.streak
        )
    }
}
