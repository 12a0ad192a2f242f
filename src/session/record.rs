use crate::Streak;
use crate::TIMESTAMP_FORMAT;
use crate::Timestamp;

/// A finished run: when it ended and the streak it had reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    timestamp: Timestamp,
    streak: Streak,
}

impl Record {
    pub fn new(timestamp: Timestamp, streak: Streak) -> Self {
        Self { timestamp, streak }
    }
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
    /// Streak at the moment of the losing round.
    pub fn streak(&self) -> Streak {
        self.streak
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} streak {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.streak
        )
    }
}
