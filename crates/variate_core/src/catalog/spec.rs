//! Tagged-variant distribution specification.
//!
//! [`DistributionSpec`] pairs a family tag with that family's parameter
//! set in one closed enum; family-agnostic code (the generic sampler) is
//! written once against it and stays oblivious to which law it drives.

use crate::catalog::{
    BinomialParams, CauchyParams, ChiSquaredParams, ElementKind, ExponentialParams,
    ExtremeValueParams, Family, FisherFParams, GammaParams, GeometricParams, LogNormalParams,
    NegativeBinomialParams, NormalParams, ParameterError, PoissonParams, UniformIntParams,
    UniformParams, WeibullParams,
};

/// One generation request's distribution: family tag plus parameters.
///
/// Immutable once constructed. Validation is deferred to
/// [`DistributionSpec::validate`] so an invalid value is representable but
/// never generates.
///
/// # Examples
/// ```
/// use variate_core::catalog::{DistributionSpec, ElementKind, Family, PoissonParams};
///
/// let spec = DistributionSpec::Poisson(PoissonParams { lambda: 4.0 });
/// assert_eq!(spec.family(), Family::Poisson);
/// assert_eq!(spec.element_kind(), ElementKind::Int);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionSpec {
    /// Continuous uniform on `[min, max)`.
    Uniform(UniformParams),
    /// Integer uniform on `[min, max]`.
    UniformInt(UniformIntParams),
    /// Binomial trial counts.
    Binomial(BinomialParams),
    /// Geometric failure counts.
    Geometric(GeometricParams),
    /// Negative-binomial failure counts.
    NegativeBinomial(NegativeBinomialParams),
    /// Poisson event counts.
    Poisson(PoissonParams),
    /// Exponential waiting times.
    Exponential(ExponentialParams),
    /// Gamma variates (shape/rate form).
    Gamma(GammaParams),
    /// Weibull variates.
    Weibull(WeibullParams),
    /// Extreme-value (Gumbel) variates.
    ExtremeValue(ExtremeValueParams),
    /// Gaussian variates.
    Normal(NormalParams),
    /// Log-normal variates.
    LogNormal(LogNormalParams),
    /// Chi-squared variates.
    ChiSquared(ChiSquaredParams),
    /// Cauchy variates.
    Cauchy(CauchyParams),
    /// Fisher F variates.
    FisherF(FisherFParams),
}

impl DistributionSpec {
    /// Family tag of this specification.
    #[inline]
    pub fn family(&self) -> Family {
        match self {
            DistributionSpec::Uniform(_) => Family::Uniform,
            DistributionSpec::UniformInt(_) => Family::UniformInt,
            DistributionSpec::Binomial(_) => Family::Binomial,
            DistributionSpec::Geometric(_) => Family::Geometric,
            DistributionSpec::NegativeBinomial(_) => Family::NegativeBinomial,
            DistributionSpec::Poisson(_) => Family::Poisson,
            DistributionSpec::Exponential(_) => Family::Exponential,
            DistributionSpec::Gamma(_) => Family::Gamma,
            DistributionSpec::Weibull(_) => Family::Weibull,
            DistributionSpec::ExtremeValue(_) => Family::ExtremeValue,
            DistributionSpec::Normal(_) => Family::Normal,
            DistributionSpec::LogNormal(_) => Family::LogNormal,
            DistributionSpec::ChiSquared(_) => Family::ChiSquared,
            DistributionSpec::Cauchy(_) => Family::Cauchy,
            DistributionSpec::FisherF(_) => Family::FisherF,
        }
    }

    /// Element type of the sequences this specification generates.
    #[inline]
    pub fn element_kind(&self) -> ElementKind {
        self.family().element_kind()
    }

    /// Checks the wrapped parameter set against its family's domain.
    ///
    /// # Errors
    /// Returns the wrapped parameters' [`ParameterError`] unchanged.
    pub fn validate(&self) -> Result<(), ParameterError> {
        match self {
            DistributionSpec::Uniform(p) => p.validate(),
            DistributionSpec::UniformInt(p) => p.validate(),
            DistributionSpec::Binomial(p) => p.validate(),
            DistributionSpec::Geometric(p) => p.validate(),
            DistributionSpec::NegativeBinomial(p) => p.validate(),
            DistributionSpec::Poisson(p) => p.validate(),
            DistributionSpec::Exponential(p) => p.validate(),
            DistributionSpec::Gamma(p) => p.validate(),
            DistributionSpec::Weibull(p) => p.validate(),
            DistributionSpec::ExtremeValue(p) => p.validate(),
            DistributionSpec::Normal(p) => p.validate(),
            DistributionSpec::LogNormal(p) => p.validate(),
            DistributionSpec::ChiSquared(p) => p.validate(),
            DistributionSpec::Cauchy(p) => p.validate(),
            DistributionSpec::FisherF(p) => p.validate(),
        }
    }

    /// Specification of the given family with its declared defaults.
    pub fn with_defaults(family: Family) -> Self {
        match family {
            Family::Uniform => DistributionSpec::Uniform(UniformParams::default()),
            Family::UniformInt => DistributionSpec::UniformInt(UniformIntParams::default()),
            Family::Binomial => DistributionSpec::Binomial(BinomialParams::default()),
            Family::Geometric => DistributionSpec::Geometric(GeometricParams::default()),
            Family::NegativeBinomial => {
                DistributionSpec::NegativeBinomial(NegativeBinomialParams::default())
            }
            Family::Poisson => DistributionSpec::Poisson(PoissonParams::default()),
            Family::Exponential => DistributionSpec::Exponential(ExponentialParams::default()),
            Family::Gamma => DistributionSpec::Gamma(GammaParams::default()),
            Family::Weibull => DistributionSpec::Weibull(WeibullParams::default()),
            Family::ExtremeValue => DistributionSpec::ExtremeValue(ExtremeValueParams::default()),
            Family::Normal => DistributionSpec::Normal(NormalParams::default()),
            Family::LogNormal => DistributionSpec::LogNormal(LogNormalParams::default()),
            Family::ChiSquared => DistributionSpec::ChiSquared(ChiSquaredParams::default()),
            Family::Cauchy => DistributionSpec::Cauchy(CauchyParams::default()),
            Family::FisherF => DistributionSpec::FisherF(FisherFParams::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_tag_matches_variant() {
        for family in Family::ALL {
            let spec = DistributionSpec::with_defaults(family);
            assert_eq!(spec.family(), family);
            assert_eq!(spec.element_kind(), family.element_kind());
        }
    }

    #[test]
    fn test_every_default_spec_validates() {
        for family in Family::ALL {
            assert!(
                DistributionSpec::with_defaults(family).validate().is_ok(),
                "{}",
                family
            );
        }
    }

    #[test]
    fn test_validate_surfaces_wrapped_parameter_error() {
        let spec = DistributionSpec::Weibull(WeibullParams::new(1.0, -1.0));
        assert!(matches!(
            spec.validate(),
            Err(ParameterError::OutOfDomain {
                family: Family::Weibull,
                name: "scale",
                ..
            })
        ));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_spec_json_round_trip() {
            let spec = DistributionSpec::Gamma(GammaParams::new(2.0, 0.5));
            let json = serde_json::to_string(&spec).unwrap();
            let back: DistributionSpec = serde_json::from_str(&json).unwrap();
            assert_eq!(back, spec);
        }

        #[test]
        fn test_parameter_error_json_round_trip() {
            let err = ParameterError::EmptyRange {
                family: Family::Uniform,
                min: 2.0,
                max: 2.0,
            };
            let json = serde_json::to_string(&err).unwrap();
            let back: ParameterError = serde_json::from_str(&json).unwrap();
            assert_eq!(back, err);
        }
    }
}
