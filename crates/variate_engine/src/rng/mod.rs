//! Entropy provisioning and engine ownership.
//!
//! Every generation call owns the engines it draws from: one engine on
//! the sequential path, one per worker on the parallel path. Engines are
//! provisioned through the call's [`Seed`] policy and discarded at call
//! end; nothing here is shared or reused across calls.

pub mod engine;
pub mod seed;

pub use engine::VariateRng;
pub use seed::Seed;
