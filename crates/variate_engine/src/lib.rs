//! # variate_engine: Bulk Variate Generation Engine
//!
//! ## Layer 2 (Engine) Role
//!
//! variate_engine is the top layer of the two-layer architecture,
//! turning a `variate_core` catalog specification into an ordered
//! sequence of variates:
//! - Entropy provisioning and the seeding policy (`rng`)
//! - The sequential generic sampler and output sequences (`sampler`)
//! - The strided parallel partition sampler (`parallel`)
//! - The [`Generator`] facade, one operation per family
//! - The [`GenerateError`] taxonomy of call failures
//!
//! ## Generation Model
//!
//! Every call is self-contained: it provisions its own engines, binds its
//! own distribution instance and fills a buffer it allocated, then hands
//! the buffer back. Nothing survives the call and nothing is shared
//! between concurrent calls. The parallel path partitions the buffer into
//! interleaved stripes, one fresh OS thread per hardware execution unit,
//! each worker owning a cloned instance and a private engine; the stripes
//! are disjoint, so the fill needs no lock and the call returns after the
//! join barrier with every index written exactly once.
//!
//! By default engines are seeded from the platform entropy source and
//! sequences are deliberately not reproducible; [`Seed::Fixed`] is the
//! additive deterministic mode for tests and debugging.
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_core::catalog::{GammaParams, UniformParams};
//! use variate_engine::Generator;
//!
//! let generator = Generator::new();
//!
//! // Sequential: one engine, draws in index order.
//! let gammas = generator.gamma(10_000, GammaParams { shape: 2.0, rate: 0.5 }).unwrap();
//! assert_eq!(gammas.len(), 10_000);
//!
//! // Parallel: striped across one worker per hardware execution unit.
//! let uniforms = generator.uniform_parallel(1_000_000, UniformParams::default()).unwrap();
//! assert_eq!(uniforms.len(), 1_000_000);
//! ```
//!
//! ## Logging
//!
//! Generation paths emit `tracing` debug events (family, length, worker
//! count); install a subscriber to see them, none is pulled in here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
mod generator;
mod parallel;
pub mod rng;
mod sampler;

pub use error::GenerateError;
pub use generator::Generator;
pub use rng::{Seed, VariateRng};
pub use sampler::VariateSequence;
