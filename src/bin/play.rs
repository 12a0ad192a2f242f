//! Interactive Rock Paper Scissors Binary
//!
//! Options: --backend, --seed, --max-draws, --json

use clap::Parser;
use quantumrps::*;

fn main() -> anyhow::Result<()> {
    log();
    let args = cli::Args::parse();
    log::info!("starting session with {:?} backend", args.backend);
    let leaderboard = cli::Terminal::from(args.session()).run()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&leaderboard)?);
    }
    Ok(())
}
