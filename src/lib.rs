//! Rock Paper Scissors against a quantum opponent.
//!
//! The opponent's throw comes from measuring two qubits held in equal
//! superposition. Three of the four basis states map onto a move; the
//! fourth is rejected and the circuit is measured again, which keeps the
//! three moves exactly equiprobable.
//!
//! The crate is split the way a round flows:
//! - [`entropy`] produces raw two-bit measurements
//! - [`generator`] turns measurements into moves by rejection sampling
//! - [`game`] judges a pair of moves
//! - [`session`] tracks the streak, game-over flag and history of a player
#![allow(clippy::module_inception)]

pub mod entropy;
pub mod error;
pub mod game;
pub mod generator;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Consecutive wins since the last loss or restart.
pub type Streak = u32;
/// Local wall-clock time at which a run ended.
pub type Timestamp = chrono::NaiveDateTime;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MOVE GENERATION
// ============================================================================
/// Default cap on measurements per generated move. A fair source rejects
/// with probability 1/4, so reaching this is a 4^-64 event.
pub const MAX_DRAWS: usize = 64;
/// Number of qubits in the opponent's circuit.
pub const QUBITS: usize = 2;

// ============================================================================
// PRESENTATION
// ============================================================================
/// Rendering of run timestamps in history tables.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Directory for log files written by [`log`].
pub const LOG_DIR: &str = "logs";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so the interactive prompt stays readable.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all(LOG_DIR).expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOG_DIR, time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
