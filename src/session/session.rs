use super::*;
use crate::Error;
use crate::Streak;
use crate::entropy::*;
use crate::game::*;
use crate::generator::Generator;

/// One player's game: an opponent generator plus the state it plays into.
///
/// Sessions never share state; each owns its own [`GameState`].
#[derive(Debug, Clone)]
pub struct Session<E> {
    generator: Generator<E>,
    state: GameState,
}

impl<E: Entropy> From<Generator<E>> for Session<E> {
    fn from(generator: Generator<E>) -> Self {
        Self {
            generator,
            state: GameState::default(),
        }
    }
}

impl<E: Entropy> Session<E> {
    pub fn new(source: E) -> Self {
        Self::from(Generator::from(source))
    }

    /// Play one round. The opponent is only drawn once the move is known to
    /// be legal, and a failed draw leaves the state untouched.
    pub fn submit(&mut self, user: Move) -> Result<Round, Error> {
        if self.state.over() {
            log::debug!("rejected {} while game is over", user);
            return Err(Error::InvalidState);
        }
        let opponent = self.generator.generate()?;
        let round = self
            .state
            .apply(user, opponent, chrono::Local::now().naive_local())?;
        log::debug!("{}", round);
        if round.over {
            log::info!("run ended with streak {}", round.streak);
        }
        Ok(round)
    }

    /// Parse and play a textual move such as `"rock"` or `"s"`.
    pub fn submit_str(&mut self, user: &str) -> Result<Round, Error> {
        Move::try_from(user).and_then(|user| self.submit(user))
    }

    pub fn restart(&mut self) {
        log::debug!("restart after streak {}", self.state.streak());
        self.state.restart();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }
    pub fn history(&self) -> &[Record] {
        self.state.history()
    }
    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::from(self.state.history())
    }
    pub fn best(&self) -> Option<Streak> {
        self.leaderboard().best()
    }
    pub fn generator(&self) -> &Generator<E> {
        &self.generator
    }
}
