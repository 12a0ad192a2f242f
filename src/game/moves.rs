use super::*;
use crate::Arbitrary;
use crate::Error;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// The move this one defeats.
    pub fn prey(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }
    /// The move that defeats this one.
    pub fn predator(&self) -> Self {
        self.prey().prey()
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.prey() == *other
    }
    /// Outcome of playing `self` against `other`, from our side.
    pub fn versus(&self, other: &Self) -> Outcome {
        judge(*self, *other)
    }
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Rock => "🪨",
            Self::Paper => "📄",
            Self::Scissors => "✂️",
        }
    }
}

/// u8 isomorphism
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}
impl TryFrom<u8> for Move {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Rock),
            1 => Ok(Self::Paper),
            2 => Ok(Self::Scissors),
            _ => Err(Error::InvalidMove(n.to_string())),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Move {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            _ => Err(Error::InvalidMove(s.trim().to_string())),
        }
    }
}
impl std::str::FromStr for Move {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Rock => "Rock",
                Self::Paper => "Paper",
                Self::Scissors => "Scissors",
            }
        )
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        use rand::Rng;
        Self::ALL[rand::rng().random_range(0..Self::ALL.len())]
    }
}
