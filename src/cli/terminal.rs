use crate::entropy::Entropy;
use crate::game::*;
use crate::session::*;
use colored::*;
use dialoguer::Select;

/// Interactive loop over a [`Session`].
pub struct Terminal<E>(Session<E>);

impl<E: Entropy> From<Session<E>> for Terminal<E> {
    fn from(session: Session<E>) -> Self {
        Self(session)
    }
}

impl<E: Entropy> Terminal<E> {
    /// Play until the user quits, then hand back the session's leaderboard.
    pub fn run(mut self) -> anyhow::Result<Leaderboard> {
        println!("{}", "QUANTUM ROCK PAPER SCISSORS".bold());
        println!("the opponent's throw collapses out of a two-qubit superposition\n");
        loop {
            let proceed = match self.0.phase() {
                Phase::Ready => self.ready()?,
                Phase::Finished => self.finished()?,
            };
            if !proceed {
                break;
            }
        }
        log::info!("leaving with best streak {:?}", self.0.best());
        Ok(self.0.leaderboard())
    }

    fn ready(&mut self) -> anyhow::Result<bool> {
        println!("current streak: {}", self.0.state().streak().to_string().bold());
        let choices = Move::ALL
            .iter()
            .map(|m| format!("{} {}", m.emoji(), m))
            .chain(std::iter::once("Quit".to_string()))
            .collect::<Vec<String>>();
        let selection = Select::new()
            .with_prompt("your move")
            .report(false)
            .items(choices.as_slice())
            .default(0)
            .interact()?;
        match Move::ALL.get(selection) {
            None => Ok(false),
            Some(user) => {
                match self.0.submit(*user) {
                    Ok(round) => Self::render(&round),
                    Err(e) => log::error!("{}", e),
                }
                Ok(true)
            }
        }
    }

    fn finished(&mut self) -> anyhow::Result<bool> {
        println!(
            "{}",
            format!("game over! final streak: {}", self.0.state().streak()).red()
        );
        println!("\nhall of fame\n{}", self.0.leaderboard());
        let selection = Select::new()
            .with_prompt("again?")
            .report(false)
            .items(&["🔄 Restart", "Quit"])
            .default(0)
            .interact()?;
        match selection {
            0 => {
                self.0.restart();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn render(round: &Round) {
        println!(
            "you: {} {} | quantum: {} {}",
            round.user.emoji(),
            round.user,
            round.opponent.emoji(),
            round.opponent
        );
        match round.outcome {
            Outcome::Win => println!("{}", "🎉 you win! the wavefunction is on your side".green()),
            Outcome::Draw => println!("{}", "🤝 draw, go again".yellow()),
            Outcome::Lose => println!("{}", "💀 you lose".red()),
        }
        println!();
    }
}
