//! # variate_core: Distribution Catalog for Bulk Variate Generation
//!
//! ## Layer 1 (Foundation) Role
//!
//! variate_core is the bottom layer of the two-layer architecture,
//! providing:
//! - Family tags and element kinds (`catalog::family`)
//! - Per-family parameter sets with declared defaults (`catalog::params`)
//! - The tagged-variant request type (`catalog::spec`)
//! - Domain validation errors (`catalog::error`)
//!
//! ## Zero Engine Principle
//!
//! Layer 1 holds no random engine, spawns no threads and performs no
//! drawing; it only describes and validates what may be generated. The
//! generation engine lives in `variate_engine` (Layer 2). External
//! dependencies are minimal:
//! - thiserror: error derives
//! - serde: serialisation of catalog types (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_core::catalog::{DistributionSpec, Family, NormalParams};
//!
//! // A request for N(10, 2) variates, built from defaults.
//! let params = NormalParams { mean: 10.0, sd: 2.0 };
//! let spec = DistributionSpec::Normal(params);
//!
//! assert_eq!(spec.family(), Family::Normal);
//! assert!(spec.validate().is_ok());
//!
//! // Out-of-domain parameters are representable but refuse to validate.
//! let bad = NormalParams { mean: 0.0, sd: -1.0 };
//! assert!(bad.validate().is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for all catalog types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod catalog;
