use super::*;
use crate::game::Move;
use std::collections::VecDeque;

/// Replays a fixed sequence of samples, then fails.
///
/// Useful to force an opponent's moves, including rejected `11` samples
/// between them.
#[derive(Debug, Clone, Default)]
pub struct Scripted(VecDeque<Bits>);

impl Scripted {
    /// Samples that decode to exactly these moves, in order.
    pub fn moves(moves: &[Move]) -> Self {
        Self(moves.iter().copied().map(Bits::from).collect())
    }
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
    pub fn push(&mut self, bits: Bits) {
        self.0.push_back(bits);
    }
}

impl From<Vec<Bits>> for Scripted {
    fn from(bits: Vec<Bits>) -> Self {
        Self(bits.into())
    }
}

/// whitespace-separated labels, e.g. "11 11 01"
impl TryFrom<&str> for Scripted {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Bits::try_from)
            .collect::<Result<VecDeque<Bits>, _>>()
            .map(Self)
    }
}

impl Entropy for Scripted {
    fn measure(&mut self) -> Result<Bits, Error> {
        self.0
            .pop_front()
            .ok_or_else(|| Error::GeneratorFailure("scripted entropy exhausted".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_then_fails() {
        let mut scripted = Scripted::try_from("11 01").unwrap();
        assert_eq!(scripted.measure(), Ok(Bits::REJECT));
        assert_eq!(scripted.measure().unwrap().decode(), Some(Move::Scissors));
        assert!(matches!(scripted.measure(), Err(Error::GeneratorFailure(_))));
    }

    #[test]
    fn forced_moves() {
        let mut scripted = Scripted::moves(&[Move::Paper, Move::Rock]);
        assert_eq!(scripted.remaining(), 2);
        assert_eq!(scripted.measure().unwrap().decode(), Some(Move::Paper));
        assert_eq!(scripted.measure().unwrap().decode(), Some(Move::Rock));
    }

    #[test]
    fn rejects_bad_labels() {
        assert!(Scripted::try_from("00 12").is_err());
    }
}
