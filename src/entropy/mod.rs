//! Sources of uniformly random two-bit samples.
//!
//! A move generator only needs independent fair bit pairs. Where they come
//! from is pluggable:
//! - [`Circuit`] simulates two qubits put through Hadamard gates and measured
//! - [`Uniform`] takes two bits straight from any [`rand::Rng`]
//! - [`Scripted`] replays a fixed sequence, for tests and reproductions

mod bits;
mod circuit;
mod register;
mod scripted;
mod uniform;

pub use bits::*;
pub use circuit::*;
pub use register::*;
pub use scripted::*;
pub use uniform::*;

use crate::Error;

/// Provider of independent, uniformly distributed two-bit samples.
pub trait Entropy {
    /// Take one sample. Errors mean the source can produce nothing more.
    fn measure(&mut self) -> Result<Bits, Error>;
}

impl<E> Entropy for &mut E
where
    E: Entropy + ?Sized,
{
    fn measure(&mut self) -> Result<Bits, Error> {
        (**self).measure()
    }
}

impl<E> Entropy for Box<E>
where
    E: Entropy + ?Sized,
{
    fn measure(&mut self) -> Result<Bits, Error> {
        (**self).measure()
    }
}
