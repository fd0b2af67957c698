//! The distribution catalog: a closed set of families, their parameter
//! sets with declared defaults, and domain validation.
//!
//! The catalog is pure data. It knows which families exist
//! ([`Family`]), what parameters each takes ([`UniformParams`],
//! [`BinomialParams`], ...), what a request looks like
//! ([`DistributionSpec`]) and which values are admissible
//! ([`ParameterError`] on violation). It owns no engine, no entropy and
//! no threads; binding a specification to a sampler is the engine
//! layer's job.

pub mod error;
pub mod family;
pub mod params;
pub mod spec;

pub use error::ParameterError;
pub use family::{ElementKind, Family};
pub use params::{
    BinomialParams, CauchyParams, ChiSquaredParams, ExponentialParams, ExtremeValueParams,
    FisherFParams, GammaParams, GeometricParams, LogNormalParams, NegativeBinomialParams,
    NormalParams, PoissonParams, UniformIntParams, UniformParams, WeibullParams,
};
pub use spec::DistributionSpec;
