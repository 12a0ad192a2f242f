//! Bookkeeping for one player's runs.
//!
//! A run is a sequence of rounds that ends with the first loss. The state
//! machine has two phases: [`Phase::Ready`] accepts moves, and
//! [`Phase::Finished`] accepts only a restart. Every finished run leaves a
//! [`Record`] of how long its streak got.

mod leaderboard;
mod record;
mod round;
mod session;
mod state;

pub use leaderboard::*;
pub use record::*;
pub use round::*;
pub use session::*;
pub use state::*;
