use crate::Error;
use crate::MAX_DRAWS;
use crate::entropy::*;
use crate::game::Move;
use std::num::NonZeroUsize;

/// Turns two-bit samples into a uniform choice of three moves.
///
/// Samples decoding to `11` carry no move and are redrawn. With a fair
/// source each move has probability exactly 1/3 and a move costs 4/3
/// draws on average.
///
/// The number of draws per move is capped at `limit`; `None` retries for
/// as long as the source keeps producing samples.
#[derive(Debug, Clone)]
pub struct Generator<E> {
    source: E,
    limit: Option<NonZeroUsize>,
}

impl<E: Entropy> From<E> for Generator<E> {
    fn from(source: E) -> Self {
        Self {
            source,
            limit: NonZeroUsize::new(MAX_DRAWS),
        }
    }
}

impl<E: Entropy> Generator<E> {
    pub fn with_limit(self, limit: Option<NonZeroUsize>) -> Self {
        Self { limit, ..self }
    }
    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }
    pub fn source(&self) -> &E {
        &self.source
    }
    pub fn into_source(self) -> E {
        self.source
    }

    pub fn generate(&mut self) -> Result<Move, Error> {
        let mut draws = 0;
        loop {
            if let Some(limit) = self.limit.filter(|limit| draws >= limit.get()) {
                log::warn!("no usable sample after {} draws", limit);
                return Err(Error::GeneratorFailure(format!(
                    "no usable sample after {} draws",
                    limit
                )));
            }
            draws += 1;
            let bits = self.source.measure()?;
            match bits.decode() {
                Some(choice) => {
                    log::debug!("generated {} from {} after {} draw(s)", choice, bits, draws);
                    return Ok(choice);
                }
                None => log::trace!("rejected {} on draw {}", bits, draws),
            }
        }
    }
}

impl<E: Entropy> Iterator for Generator<E> {
    type Item = Result<Move, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}
