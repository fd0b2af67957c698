//! Error taxonomy for generation calls.
//!
//! Every failure is detected eagerly and surfaced synchronously as a
//! failed call: there are no retries, no partial sequences and no silent
//! degradation (never fewer workers, never a shorter output).

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;
use variate_core::catalog::ParameterError;

/// A generation call failed before producing a sequence.
///
/// # Variants
/// - `InvalidParameter`: a parameter violates its family's domain;
///   detected at instance construction, before any draw
/// - `EntropyUnavailable`: the platform cannot supply non-deterministic
///   seed material; generation never falls back to a fixed seed
/// - `AllocationFailure`: the output sequence cannot be allocated
/// - `WorkerProvisioning`: a parallel worker thread could not be started;
///   the whole call aborts rather than returning unwritten positions
///
/// # Examples
/// ```
/// use variate_core::catalog::UniformParams;
/// use variate_engine::{GenerateError, Generator};
///
/// let err = Generator::new()
///     .uniform(10, UniformParams::new(5.0, 2.0))
///     .unwrap_err();
/// assert!(matches!(err, GenerateError::InvalidParameter(_)));
/// ```
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A supplied parameter violates its family's domain.
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    /// The platform entropy source is exhausted or unavailable.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[source] rand::Error),

    /// The output sequence cannot be allocated.
    #[error("cannot allocate a sequence of {requested} variates")]
    AllocationFailure {
        /// Requested sequence length.
        requested: usize,
        /// Allocator refusal.
        #[source]
        source: TryReserveError,
    },

    /// A parallel worker thread could not be started.
    #[error("cannot start worker {worker}: {source}")]
    WorkerProvisioning {
        /// Index of the worker that failed to start.
        worker: usize,
        /// Spawn error from the operating system.
        #[source]
        source: io::Error,
    },
}
