//! Terminal front end. Holds no game logic: it reads choices, forwards them
//! to a [`crate::session::Session`] and renders what comes back.

mod args;
mod terminal;

pub use args::*;
pub use terminal::*;
