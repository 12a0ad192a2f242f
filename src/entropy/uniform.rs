use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Two independent fair bits drawn directly from a pseudo-random generator.
#[derive(Debug, Clone)]
pub struct Uniform<R = SmallRng>(R);

impl<R: Rng> From<R> for Uniform<R> {
    fn from(rng: R) -> Self {
        Self(rng)
    }
}

impl Uniform<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Uniform<SmallRng> {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl<R: Rng> Entropy for Uniform<R> {
    fn measure(&mut self) -> Result<Bits, Error> {
        Ok(Bits::from((self.0.random::<bool>(), self.0.random::<bool>())))
    }
}
