//! Moves and the cyclic dominance rule between them.
//!
//! Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
//! Every other pairing is either a draw or the mirror of one of these.

mod moves;
mod outcome;

pub use moves::*;
pub use outcome::*;
