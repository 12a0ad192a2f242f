use crate::game::Move;

/// One two-qubit measurement.
///
/// Encoded as `q1 * 2 + q0`, so the binary label reads with qubit 1 on the
/// left the way circuit count keys are printed:
///
/// | label | move     |
/// |-------|----------|
/// | `00`  | Rock     |
/// | `01`  | Scissors |
/// | `10`  | Paper    |
/// | `11`  | rejected |
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bits(u8);

impl Bits {
    pub const REJECT: Self = Self(0b11);

    /// The move this sample stands for, or `None` for the unused state.
    pub fn decode(&self) -> Option<Move> {
        match self.0 {
            0b00 => Some(Move::Rock),
            0b01 => Some(Move::Scissors),
            0b10 => Some(Move::Paper),
            _ => None,
        }
    }
    pub fn is_reject(&self) -> bool {
        self.decode().is_none()
    }
}

/// (q1, q0) isomorphism
impl From<(bool, bool)> for Bits {
    fn from((q1, q0): (bool, bool)) -> Self {
        Self((q1 as u8) << 1 | q0 as u8)
    }
}
impl From<Bits> for (bool, bool) {
    fn from(b: Bits) -> Self {
        (b.0 & 0b10 != 0, b.0 & 0b01 != 0)
    }
}

/// inverse of decode
impl From<Move> for Bits {
    fn from(m: Move) -> Self {
        match m {
            Move::Rock => Self(0b00),
            Move::Scissors => Self(0b01),
            Move::Paper => Self(0b10),
        }
    }
}

/// u8 isomorphism
impl From<Bits> for u8 {
    fn from(b: Bits) -> u8 {
        b.0
    }
}
impl TryFrom<u8> for Bits {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0..=3 => Ok(Self(n)),
            _ => Err(format!("{} does not fit in two bits", n)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Bits {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "00" => Ok(Self(0b00)),
            "01" => Ok(Self(0b01)),
            "10" => Ok(Self(0b10)),
            "11" => Ok(Self(0b11)),
            x => Err(format!("{:?} is not a two-bit label", x)),
        }
    }
}

impl std::fmt::Display for Bits {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:02b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_mapping() {
        assert_eq!(Bits::try_from("00").unwrap().decode(), Some(Move::Rock));
        assert_eq!(Bits::try_from("01").unwrap().decode(), Some(Move::Scissors));
        assert_eq!(Bits::try_from("10").unwrap().decode(), Some(Move::Paper));
        assert_eq!(Bits::try_from("11").unwrap().decode(), None);
    }

    #[test]
    fn encode_inverts_decode() {
        for m in Move::ALL {
            assert_eq!(Bits::from(m).decode(), Some(m));
        }
    }

    #[test]
    fn qubit_order() {
        assert_eq!(Bits::from((true, false)).to_string(), "10");
        assert_eq!(Bits::from((false, true)).to_string(), "01");
        assert_eq!(<(bool, bool)>::from(Bits::REJECT), (true, true));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Bits::try_from(4u8).is_err());
        assert!(Bits::try_from("2").is_err());
        assert!(Bits::try_from("011").is_err());
    }
}
