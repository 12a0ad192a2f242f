use super::*;
use crate::Error;
use crate::Streak;
use crate::Timestamp;
use crate::game::*;

/// Mutable state of one player's session.
///
/// - `history` grows by exactly one record per loss, and only then
/// - `streak` returns to zero only through [`GameState::restart`]
/// - `over` is true exactly when the last round was lost
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Unchecked")]
pub struct GameState {
    streak: Streak,
    over: bool,
    history: Vec<Record>,
}

/// Wire form of [`GameState`], before its invariants are checked.
#[derive(serde::Deserialize)]
struct Unchecked {
    streak: Streak,
    over: bool,
    history: Vec<Record>,
}

/// A finished run must have been recorded with the streak it ended on.
impl TryFrom<Unchecked> for GameState {
    type Error = String;
    fn try_from(raw: Unchecked) -> Result<Self, Self::Error> {
        let last = raw.history.last().map(Record::streak);
        match (raw.over, last) {
            (true, None) => Err("finished run with no recorded loss".into()),
            (true, Some(s)) if s != raw.streak => Err(format!(
                "finished run at streak {} but last record says {}",
                raw.streak, s
            )),
            _ => Ok(Self {
                streak: raw.streak,
                over: raw.over,
                history: raw.history,
            }),
        }
    }
}

impl GameState {
    pub fn streak(&self) -> Streak {
        self.streak
    }
    pub fn over(&self) -> bool {
        self.over
    }
    /// Finished runs in the order they ended.
    pub fn history(&self) -> &[Record] {
        &self.history
    }
    pub fn phase(&self) -> Phase {
        match self.over {
            false => Phase::Ready,
            true => Phase::Finished,
        }
    }

    /// Play `user` against `opponent`, stamping a loss with `at`.
    pub fn apply(&mut self, user: Move, opponent: Move, at: Timestamp) -> Result<Round, Error> {
        if self.over {
            return Err(Error::InvalidState);
        }
        let outcome = judge(user, opponent);
        match outcome {
            Outcome::Win => self.streak = self.streak.saturating_add(1),
            Outcome::Draw => (),
            Outcome::Lose => {
                self.history.push(Record::new(at, self.streak));
                self.over = true;
            }
        }
        Ok(Round {
            user,
            opponent,
            outcome,
            streak: self.streak,
            over: self.over,
        })
    }

    /// Start a new run. History is kept.
    pub fn restart(&mut self) {
        self.streak = 0;
        self.over = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> Timestamp {
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn fresh() {
        let state = GameState::default();
        assert_eq!(state.streak(), 0);
        assert!(!state.over());
        assert!(state.history().is_empty());
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn win_increments() {
        let mut state = GameState::default();
        let round = state.apply(Move::Paper, Move::Rock, noon()).unwrap();
        assert_eq!(round.outcome, Outcome::Win);
        assert_eq!(round.streak, 1);
        assert_eq!(state.streak(), 1);
        assert!(state.history().is_empty());
    }

    #[test]
    fn draw_changes_nothing() {
        let mut state = GameState::default();
        state.apply(Move::Paper, Move::Rock, noon()).unwrap();
        let before = state.clone();
        let round = state.apply(Move::Rock, Move::Rock, noon()).unwrap();
        assert_eq!(round.outcome, Outcome::Draw);
        assert_eq!(state, before);
    }

    #[test]
    fn lose_records_and_ends() {
        let mut state = GameState::default();
        state.apply(Move::Paper, Move::Rock, noon()).unwrap();
        state.apply(Move::Scissors, Move::Paper, noon()).unwrap();
        let round = state.apply(Move::Rock, Move::Paper, noon()).unwrap();
        assert_eq!(round.outcome, Outcome::Lose);
        assert!(round.over);
        assert_eq!(state.phase(), Phase::Finished);
        assert_eq!(state.streak(), 2);
        assert_eq!(state.history(), &[Record::new(noon(), 2)]);
    }

    #[test]
    fn finished_rejects_moves() {
        let mut state = GameState::default();
        state.apply(Move::Rock, Move::Paper, noon()).unwrap();
        let before = state.clone();
        assert_eq!(
            state.apply(Move::Rock, Move::Scissors, noon()),
            Err(Error::InvalidState)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn restart_is_idempotent() {
        let mut state = GameState::default();
        state.apply(Move::Paper, Move::Rock, noon()).unwrap();
        state.apply(Move::Rock, Move::Paper, noon()).unwrap();
        state.restart();
        assert_eq!((state.streak(), state.over()), (0, false));
        state.restart();
        assert_eq!((state.streak(), state.over()), (0, false));
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn serializes_history() {
        let mut state = GameState::default();
        state.apply(Move::Rock, Move::Paper, noon()).unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["over"], true);
        assert_eq!(json["history"][0]["streak"], 0);
        assert_eq!(json["history"][0]["timestamp"], "2024-01-01T12:00:00");
    }

    #[test]
    fn streak_saturates() {
        let mut state = GameState {
            streak: Streak::MAX,
            ..GameState::default()
        };
        let round = state.apply(Move::Paper, Move::Rock, noon()).unwrap();
        assert_eq!(round.streak, Streak::MAX);
    }

    #[test]
    fn deserializes_consistent_state() {
        let mut state = GameState::default();
        state.apply(Move::Paper, Move::Rock, noon()).unwrap();
        state.apply(Move::Rock, Move::Paper, noon()).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameState>(&json).unwrap(), state);
    }

    #[test]
    fn rejects_finished_run_without_record() {
        let json = r#"{"streak":3,"over":true,"history":[]}"#;
        assert!(serde_json::from_str::<GameState>(json).is_err());
    }

    #[test]
    fn rejects_finished_run_with_mismatched_record() {
        let json = r#"{"streak":3,"over":true,"history":[{"timestamp":"2024-01-01T12:00:00","streak":1}]}"#;
        assert!(serde_json::from_str::<GameState>(json).is_err());
    }
}
