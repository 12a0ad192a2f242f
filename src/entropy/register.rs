use crate::QUBITS;
use std::f64::consts::FRAC_1_SQRT_2;

/// State vector of a small qubit register.
///
/// Only Hadamard gates and computational-basis measurements are needed, and
/// both keep every amplitude real, so amplitudes are stored as `f64`.
/// Qubit 0 is the least-significant bit of a basis index.
#[derive(Debug, Clone, PartialEq)]
pub struct Register {
    amplitudes: [f64; 1 << QUBITS],
}

impl Default for Register {
    fn default() -> Self {
        let mut amplitudes = [0.; 1 << QUBITS];
        amplitudes[0] = 1.;
        Self { amplitudes }
    }
}

impl Register {
    /// Return to |0...0⟩.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Probability of observing basis state `index`.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index] * self.amplitudes[index]
    }

    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a * a).sum()
    }

    /// Apply H to `qubit`, pairing each basis state with its partner that
    /// differs only in that bit.
    pub fn hadamard(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in (0..self.amplitudes.len()).filter(|i| i & mask == 0) {
            let j = i | mask;
            let a = self.amplitudes[i];
            let b = self.amplitudes[j];
            self.amplitudes[i] = FRAC_1_SQRT_2 * (a + b);
            self.amplitudes[j] = FRAC_1_SQRT_2 * (a - b);
        }
    }

    /// Probability of `qubit` reading 1, marginalized over the rest.
    pub fn marginal(&self, qubit: usize) -> f64 {
        (0..self.amplitudes.len())
            .filter(|i| (i >> qubit) & 1 == 1)
            .map(|i| self.probability(i))
            .sum()
    }

    /// Projective measurement of `qubit` given a uniform `roll` in [0, 1).
    /// Collapses and renormalizes the state in place.
    pub fn collapse(&mut self, qubit: usize, roll: f64) -> bool {
        let outcome = roll < self.marginal(qubit);
        for (i, amplitude) in self.amplitudes.iter_mut().enumerate() {
            if ((i >> qubit) & 1 == 1) != outcome {
                *amplitude = 0.;
            }
        }
        let norm = self.total_probability().sqrt();
        self.amplitudes.iter_mut().for_each(|a| *a /= norm);
        outcome
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, a) in self.amplitudes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:+.3}|{:0width$b}⟩", a, i, width = QUBITS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    #[test]
    fn equal_superposition() {
        let mut register = Register::default();
        (0..QUBITS).for_each(|q| register.hadamard(q));
        for i in 0..1 << QUBITS {
            assert!((register.probability(i) - 0.25).abs() < EPS);
        }
        assert!((register.total_probability() - 1.).abs() < EPS);
    }

    #[test]
    fn hadamard_is_self_inverse() {
        let mut register = Register::default();
        register.hadamard(1);
        register.hadamard(1);
        assert!((register.probability(0) - 1.).abs() < EPS);
    }

    #[test]
    fn collapse_is_repeatable() {
        let mut register = Register::default();
        (0..QUBITS).for_each(|q| register.hadamard(q));
        let first = register.collapse(0, 0.9);
        assert!(!first);
        assert!((register.total_probability() - 1.).abs() < EPS);
        assert!(register.marginal(0) < EPS);
        // a measured qubit gives the same answer whatever the roll
        assert_eq!(register.collapse(0, 0.0), first);
        assert!((register.marginal(1) - 0.5).abs() < EPS);
    }
}
