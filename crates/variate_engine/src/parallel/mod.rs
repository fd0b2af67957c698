//! The parallel partition sampler.
//!
//! Index space `[0, n)` is carved into interleaved stripes, one per
//! worker: worker `k` owns indices `k, k + w, k + 2w, ...`. Striding keeps
//! the load balanced to within one draw regardless of `n mod w`, at the
//! cost of weaker per-worker cache locality; each draw is O(1) and
//! independent, so the trade lands in throughput's favour.
//!
//! Workers share nothing but the disjointly-partitioned output buffer:
//! each one moves in its own cloned distribution instance and its own
//! independently provisioned engine. No lock, mutex or atomic exists on
//! the fill path. Threads are spawned fresh per call and joined at the
//! end of the scope, which is the call's join barrier; no partial result
//! is observable before it.

use std::thread;

use tracing::debug;

use crate::error::GenerateError;
use crate::rng::Seed;
use crate::sampler::instance::DrawVariate;
use crate::sampler::sequence_buffer;

mod stripe;

pub(crate) use stripe::split_stripes;

/// Number of workers for a parallel call: one per hardware execution
/// unit, discovered at call time, never less than one.
pub(crate) fn worker_count() -> usize {
    num_cpus::get().max(1)
}

/// Runs one parallel generation across `workers` fresh OS threads.
///
/// All fallible provisioning happens on the calling thread before any
/// spawn: engines first (so `EntropyUnavailable` aborts with zero threads
/// started), then the output buffer. A failed spawn aborts the whole call
/// with `WorkerProvisioning`; workers already running are joined by the
/// scope and the partially filled buffer is discarded, never returned.
pub(crate) fn generate_parallel_with<D>(
    instance: D,
    seed: &Seed,
    n: usize,
    workers: usize,
) -> Result<Vec<D::Output>, GenerateError>
where
    D: DrawVariate + Clone + Send,
    D::Output: Clone + Default + Send,
{
    debug_assert!(workers > 0, "worker count must be positive");

    let engines = seed.worker_engines(workers)?;
    let mut buffer = sequence_buffer(n)?;
    let stripes = split_stripes(&mut buffer, workers);

    debug!(n, workers, "parallel fill across interleaved stripes");

    let mut spawn_failure = None;
    thread::scope(|scope| {
        for (worker, (mut stripe, mut engine)) in
            stripes.into_iter().zip(engines).enumerate()
        {
            let mut copy = instance.clone();
            let spawned = thread::Builder::new()
                .name(format!("variate-worker-{worker}"))
                .spawn_scoped(scope, move || {
                    stripe.fill_with(|| copy.draw(&mut engine));
                });
            if let Err(source) = spawned {
                spawn_failure = Some(GenerateError::WorkerProvisioning { worker, source });
                break;
            }
        }
        // Scope exit joins every spawned worker: the join barrier.
    });

    match spawn_failure {
        Some(err) => Err(err),
        None => Ok(buffer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::instance::{FloatInstance, IntInstance};
    use crate::sampler::{fill_sequential, generate_with};
    use variate_core::catalog::{UniformIntParams, UniformParams};

    #[test]
    fn test_parallel_length_matches_request() {
        let instance = FloatInstance::uniform(&UniformParams::default()).unwrap();
        for n in [0, 1, 7, 1_000, 4_096] {
            let sequence = generate_parallel_with(instance.clone(), &Seed::Fixed(3), n, 4).unwrap();
            assert_eq!(sequence.len(), n);
        }
    }

    #[test]
    fn test_parallel_zero_length_is_empty_not_error() {
        let instance = IntInstance::uniform_int(&UniformIntParams::default()).unwrap();
        let sequence = generate_parallel_with(instance, &Seed::Entropy, 0, 8).unwrap();
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_parallel_respects_range_across_all_stripes() {
        let instance = FloatInstance::uniform(&UniformParams::new(2.0, 5.0)).unwrap();
        let sequence = generate_parallel_with(instance, &Seed::Fixed(17), 10_007, 5).unwrap();
        assert!(sequence.iter().all(|v| (2.0..5.0).contains(v)));
    }

    #[test]
    fn test_fixed_seed_reproduces_for_fixed_worker_count() {
        let instance = FloatInstance::uniform(&UniformParams::default()).unwrap();
        let first = generate_parallel_with(instance.clone(), &Seed::Fixed(11), 2_000, 3).unwrap();
        let second = generate_parallel_with(instance, &Seed::Fixed(11), 2_000, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_entropy_mode_runs_differ() {
        let instance = FloatInstance::uniform(&UniformParams::default()).unwrap();
        let first = generate_parallel_with(instance.clone(), &Seed::Entropy, 1_000, 4).unwrap();
        let second = generate_parallel_with(instance, &Seed::Entropy, 1_000, 4).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_single_worker_matches_sequential_stream() {
        // With one worker, stripe 0 is the whole buffer in index order, so
        // worker seed derivation aside the fill is the sequential loop.
        let instance = FloatInstance::uniform(&UniformParams::default()).unwrap();
        let parallel = generate_parallel_with(instance.clone(), &Seed::Fixed(5), 512, 1).unwrap();

        let mut engine = Seed::Fixed(5).worker_engines(1).unwrap().pop().unwrap();
        let mut reference = vec![0.0; 512];
        let mut replay = instance;
        fill_sequential(&mut replay, &mut engine, &mut reference);
        assert_eq!(parallel, reference);
    }

    #[test]
    fn test_parallel_differs_from_sequential_even_when_seeded() {
        // Same master seed, but stripe assignment changes the draw-to-index
        // mapping: the parallel output is not the sequential output.
        let instance = FloatInstance::uniform(&UniformParams::default()).unwrap();
        let parallel = generate_parallel_with(instance.clone(), &Seed::Fixed(7), 1_000, 4).unwrap();
        let sequential = generate_with(instance, &Seed::Fixed(7), 1_000).unwrap();
        assert_ne!(parallel, sequential);
    }

    #[test]
    fn test_worker_count_is_positive() {
        assert!(worker_count() >= 1);
    }
}
