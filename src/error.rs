/// Errors that can occur while playing a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input that names none of Rock, Paper or Scissors.
    InvalidMove(String),
    /// A move was submitted after the run ended and before a restart.
    InvalidState,
    /// The entropy source failed or never produced a usable sample.
    GeneratorFailure(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMove(s) => write!(f, "invalid move: {}", s),
            Self::InvalidState => write!(f, "invalid state: game is over, restart to play again"),
            Self::GeneratorFailure(s) => write!(f, "generator failure: {}", s),
        }
    }
}

impl std::error::Error for Error {}
