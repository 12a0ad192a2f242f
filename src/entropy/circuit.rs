use super::*;
use crate::QUBITS;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Two-qubit circuit simulated shot by shot.
///
/// Each shot prepares |00⟩, applies H to both qubits and measures both.
/// The measurement rolls come from `R`.
#[derive(Debug, Clone)]
pub struct Circuit<R = SmallRng> {
    rng: R,
    register: Register,
}

impl<R: Rng> From<R> for Circuit<R> {
    fn from(rng: R) -> Self {
        Self {
            rng,
            register: Register::default(),
        }
    }
}

impl Circuit<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Circuit<SmallRng> {
    fn default() -> Self {
        Self::from(SmallRng::from_os_rng())
    }
}

impl<R: Rng> Circuit<R> {
    /// State left behind by the most recent shot.
    pub fn register(&self) -> &Register {
        &self.register
    }

    fn shot(&mut self) -> Bits {
        self.register.reset();
        (0..QUBITS).for_each(|q| self.register.hadamard(q));
        let q0 = self.register.collapse(0, self.rng.random::<f64>());
        let q1 = self.register.collapse(1, self.rng.random::<f64>());
        Bits::from((q1, q0))
    }
}

impl<R: Rng> Entropy for Circuit<R> {
    fn measure(&mut self) -> Result<Bits, Error> {
        let bits = self.shot();
        log::trace!("circuit shot {} ({})", bits, self.register);
        Ok(bits)
    }
}
