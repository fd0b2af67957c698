//! Sequential bulk sampling.
//!
//! One generic fill loop serves every family: binding yields a
//! [`DrawVariate`](instance::DrawVariate) instance, the engine is
//! provisioned, the output buffer is reserved up front, and draws land in
//! index order. Variate `i` is always the `(i + 1)`-th draw from the
//! engine, so a fixed seed pins the whole sequence.

use crate::error::GenerateError;
use crate::rng::{Seed, VariateRng};

pub(crate) mod instance;
mod sequence;

pub use sequence::VariateSequence;

use instance::DrawVariate;

/// Reserves an output buffer for `n` variates, surfacing allocation
/// failure as an error instead of aborting the process.
pub(crate) fn sequence_buffer<T: Clone + Default>(n: usize) -> Result<Vec<T>, GenerateError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(n)
        .map_err(|source| GenerateError::AllocationFailure {
            requested: n,
            source,
        })?;
    buffer.resize(n, T::default());
    Ok(buffer)
}

/// Fills `buffer` with consecutive draws from `instance`, in index order.
pub(crate) fn fill_sequential<D: DrawVariate>(
    instance: &mut D,
    engine: &mut VariateRng,
    buffer: &mut [D::Output],
) {
    for slot in buffer.iter_mut() {
        *slot = instance.draw(engine);
    }
}

/// Runs one sequential generation: provision an engine under the seeding
/// policy, reserve the buffer, fill it.
pub(crate) fn generate_with<D>(
    mut instance: D,
    seed: &Seed,
    n: usize,
) -> Result<Vec<D::Output>, GenerateError>
where
    D: DrawVariate,
    D::Output: Clone + Default,
{
    let mut engine = seed.engine()?;
    let mut buffer = sequence_buffer(n)?;
    fill_sequential(&mut instance, &mut engine, &mut buffer);
    Ok(buffer)
}
