//! Seed policy: non-deterministic by default, explicit for reproducibility.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GenerateError;
use crate::rng::VariateRng;

/// Seeding policy applied by every generation call.
///
/// The production default is [`Seed::Entropy`]: each call provisions
/// freshly entropy-seeded engines, so two calls with identical parameters
/// produce different sequences with overwhelming probability.
/// [`Seed::Fixed`] is the additive deterministic mode: calls reproduce
/// exactly, which is the point of the mode, and parallel workers receive
/// seeds derived from the one master value instead of sharing an engine.
///
/// # Examples
///
/// ```rust
/// use variate_engine::Seed;
///
/// assert_eq!(Seed::default(), Seed::Entropy);
/// let deterministic = Seed::Fixed(42);
/// assert_ne!(deterministic, Seed::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// Every engine is seeded from the platform entropy source. Parallel
    /// workers are each seeded directly from the source, never from a
    /// shared or derived value.
    Entropy,

    /// Deterministic mode. The sequential path seeds one engine with the
    /// value; the parallel path derives per-worker seeds from it (see
    /// [`Seed::worker_engines`]). Reproducible for a fixed worker count.
    Fixed(u64),
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Entropy
    }
}

impl Seed {
    /// Provisions the single engine for a sequential generation call.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EntropyUnavailable`] in entropy mode when
    /// the platform source fails.
    pub fn engine(&self) -> Result<VariateRng, GenerateError> {
        match self {
            Seed::Entropy => VariateRng::from_entropy(),
            Seed::Fixed(seed) => Ok(VariateRng::from_seed(*seed)),
        }
    }

    /// Provisions one independent engine per parallel worker.
    ///
    /// In entropy mode each worker engine is seeded straight from the
    /// platform source. In fixed mode worker `k` is seeded with the k-th
    /// `u64` drawn from a master engine seeded with the master value:
    /// a documented, reproducible derivation that keeps the workers'
    /// engines independent without ever sharing one mutable engine.
    ///
    /// Any provisioning failure aborts the whole call: the caller never
    /// starts a worker with this function's partial output.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EntropyUnavailable`] in entropy mode when
    /// the platform source fails.
    pub fn worker_engines(&self, count: usize) -> Result<Vec<VariateRng>, GenerateError> {
        match self {
            Seed::Entropy => (0..count).map(|_| VariateRng::from_entropy()).collect(),
            Seed::Fixed(master) => {
                let mut master = StdRng::seed_from_u64(*master);
                Ok((0..count)
                    .map(|_| VariateRng::from_seed(master.gen()))
                    .collect())
            }
        }
    }
}
