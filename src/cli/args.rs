use crate::entropy::*;
use crate::generator::Generator;
use crate::session::Session;
use clap::Parser;
use clap::ValueEnum;
use rand::rngs::SmallRng;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Simulated two-qubit circuit
    Circuit,
    /// Plain pseudo-random bits
    Uniform,
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Rock Paper Scissors against a quantum opponent",
    long_about = None
)]
pub struct Args {
    #[arg(long, value_enum, default_value_t = Backend::Circuit)]
    pub backend: Backend,
    #[arg(long, help = "Seed the backend for a reproducible opponent")]
    pub seed: Option<u64>,
    #[arg(
        long,
        default_value_t = crate::MAX_DRAWS,
        help = "Measurements allowed per opponent move, 0 for no limit"
    )]
    pub max_draws: usize,
    #[arg(long, help = "Print the leaderboard as JSON on exit")]
    pub json: bool,
}

impl Args {
    pub fn entropy(&self) -> Box<dyn Entropy> {
        match (self.backend, self.seed) {
            (Backend::Circuit, Some(seed)) => Box::new(Circuit::seeded(seed)),
            (Backend::Circuit, None) => Box::new(Circuit::<SmallRng>::default()),
            (Backend::Uniform, Some(seed)) => Box::new(Uniform::seeded(seed)),
            (Backend::Uniform, None) => Box::new(Uniform::<SmallRng>::default()),
        }
    }
    pub fn limit(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.max_draws)
    }
    pub fn session(&self) -> Session<Box<dyn Entropy>> {
        Session::from(Generator::from(self.entropy()).with_limit(self.limit()))
    }
}
