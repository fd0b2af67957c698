//! Per-family parameter sets with declared defaults and domain validation.
//!
//! Each family in the catalog owns one small parameter struct. Field names
//! and defaults follow the catalog table (`uniform{min=0, max=1}`,
//! `binomial{size=1, prob=0.5}`, ...). An omitted parameter is expressed
//! with struct-update syntax over [`Default`]:
//!
//! ```
//! use variate_core::catalog::GammaParams;
//!
//! let params = GammaParams { shape: 2.0, ..GammaParams::default() };
//! assert_eq!(params.rate, 1.0);
//! ```
//!
//! Validation is separate from construction: `validate()` checks the
//! family's domain and reports the first violation as a
//! [`ParameterError`], naming the family, the parameter and the supplied
//! value. Construction never panics on a bad value; generation refuses it.

use crate::catalog::{Family, ParameterError};

fn require_finite(family: Family, name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite {
            family,
            name,
            value,
        })
    }
}

fn require_positive(family: Family, name: &'static str, value: f64) -> Result<(), ParameterError> {
    require_finite(family, name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::OutOfDomain {
            family,
            name,
            value,
            constraint: "strictly positive",
        })
    }
}

/// Probability admitting both degenerate endpoints.
fn require_closed_probability(
    family: Family,
    name: &'static str,
    value: f64,
) -> Result<(), ParameterError> {
    require_finite(family, name, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::OutOfDomain {
            family,
            name,
            value,
            constraint: "a probability in [0, 1]",
        })
    }
}

/// Probability with a finite expected draw (`prob = 0` never terminates).
fn require_open_probability(
    family: Family,
    name: &'static str,
    value: f64,
) -> Result<(), ParameterError> {
    require_finite(family, name, value)?;
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ParameterError::OutOfDomain {
            family,
            name,
            value,
            constraint: "a probability in (0, 1]",
        })
    }
}

/// Continuous uniform on the half-open interval `[min, max)`.
///
/// Defaults to the unit interval `[0, 1)`.
///
/// # Examples
/// ```
/// use variate_core::catalog::UniformParams;
///
/// let unit = UniformParams::default();
/// assert!(unit.validate().is_ok());
///
/// let inverted = UniformParams { min: 5.0, max: 2.0 };
/// assert!(inverted.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformParams {
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl UniformParams {
    /// Creates uniform parameters over `[min, max)`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Checks the domain: both bounds finite and `min < max`.
    ///
    /// # Errors
    /// Returns [`ParameterError`] on a non-finite bound or an empty range.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_finite(Family::Uniform, "min", self.min)?;
        require_finite(Family::Uniform, "max", self.max)?;
        if self.min < self.max {
            Ok(())
        } else {
            Err(ParameterError::EmptyRange {
                family: Family::Uniform,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for UniformParams {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Integer uniform on the closed interval `[min, max]`.
///
/// Defaults to `[0, 10]`. A single-point range (`min == max`) is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformIntParams {
    /// Inclusive lower bound.
    pub min: i32,
    /// Inclusive upper bound.
    pub max: i32,
}

impl UniformIntParams {
    /// Creates integer-uniform parameters over `[min, max]`.
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Checks the domain: `min <= max`.
    ///
    /// # Errors
    /// Returns [`ParameterError::EmptyRange`] when `min > max`.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.min <= self.max {
            Ok(())
        } else {
            Err(ParameterError::EmptyRange {
                family: Family::UniformInt,
                min: self.min as f64,
                max: self.max as f64,
            })
        }
    }
}

impl Default for UniformIntParams {
    fn default() -> Self {
        Self { min: 0, max: 10 }
    }
}

/// Binomial: successes in `size` Bernoulli trials of probability `prob`.
///
/// Defaults to a single fair trial (`size = 1`, `prob = 0.5`). Both
/// degenerate probabilities are valid: `prob = 0` always draws 0 and
/// `prob = 1` always draws `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinomialParams {
    /// Number of trials; must be non-negative.
    pub size: i32,
    /// Success probability of one trial, in `[0, 1]`.
    pub prob: f64,
}

impl BinomialParams {
    /// Creates binomial parameters.
    pub fn new(size: i32, prob: f64) -> Self {
        Self { size, prob }
    }

    /// Checks the domain: `size >= 0` and `prob` in `[0, 1]`.
    ///
    /// # Errors
    /// Returns [`ParameterError`] on a negative size or a probability
    /// outside the closed unit interval.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.size < 0 {
            return Err(ParameterError::OutOfDomain {
                family: Family::Binomial,
                name: "size",
                value: self.size as f64,
                constraint: "a non-negative trial count",
            });
        }
        require_closed_probability(Family::Binomial, "prob", self.prob)
    }
}

impl Default for BinomialParams {
    fn default() -> Self {
        Self { size: 1, prob: 0.5 }
    }
}

/// Geometric: failures before the first success.
///
/// Defaults to `prob = 0.5`. `prob = 0` is rejected (the first success
/// would never arrive); `prob = 1` is the point mass at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometricParams {
    /// Success probability of one trial, in `(0, 1]`.
    pub prob: f64,
}

impl GeometricParams {
    /// Creates geometric parameters.
    pub fn new(prob: f64) -> Self {
        Self { prob }
    }

    /// Checks the domain: `prob` in `(0, 1]`.
    ///
    /// # Errors
    /// Returns [`ParameterError::OutOfDomain`] for `prob = 0` or any value
    /// outside the half-open unit interval.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_open_probability(Family::Geometric, "prob", self.prob)
    }
}

impl Default for GeometricParams {
    fn default() -> Self {
        Self { prob: 0.5 }
    }
}

/// Negative binomial: failures before the `size`-th success.
///
/// Defaults to `size = 1`, `prob = 0.5` (the geometric case).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NegativeBinomialParams {
    /// Number of successes to wait for; must be at least 1.
    pub size: i32,
    /// Success probability of one trial, in `(0, 1]`.
    pub prob: f64,
}

impl NegativeBinomialParams {
    /// Creates negative-binomial parameters.
    pub fn new(size: i32, prob: f64) -> Self {
        Self { size, prob }
    }

    /// Checks the domain: `size >= 1` and `prob` in `(0, 1]`.
    ///
    /// # Errors
    /// Returns [`ParameterError`] on a non-positive size or a probability
    /// outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.size < 1 {
            return Err(ParameterError::OutOfDomain {
                family: Family::NegativeBinomial,
                name: "size",
                value: self.size as f64,
                constraint: "a positive success count",
            });
        }
        require_open_probability(Family::NegativeBinomial, "prob", self.prob)
    }
}

impl Default for NegativeBinomialParams {
    fn default() -> Self {
        Self { size: 1, prob: 0.5 }
    }
}

/// Poisson: event counts at mean rate `lambda`.
///
/// Defaults to `lambda = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoissonParams {
    /// Mean event count; must be strictly positive.
    pub lambda: f64,
}

impl PoissonParams {
    /// Creates Poisson parameters.
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }

    /// Checks the domain: `lambda > 0` and finite.
    ///
    /// # Errors
    /// Returns [`ParameterError`] on a non-positive or non-finite rate.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_positive(Family::Poisson, "lambda", self.lambda)
    }
}

impl Default for PoissonParams {
    fn default() -> Self {
        Self { lambda: 1.0 }
    }
}

/// Exponential: waiting time at event rate `rate`.
///
/// Defaults to `rate = 1` (mean 1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialParams {
    /// Event rate; must be strictly positive. Mean is `1 / rate`.
    pub rate: f64,
}

impl ExponentialParams {
    /// Creates exponential parameters.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Checks the domain: `rate > 0` and finite.
    ///
    /// # Errors
    /// Returns [`ParameterError`] on a non-positive or non-finite rate.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_positive(Family::Exponential, "rate", self.rate)
    }
}

impl Default for ExponentialParams {
    fn default() -> Self {
        Self { rate: 1.0 }
    }
}

/// Gamma law in the shape/rate parameterisation.
///
/// Defaults to `shape = 1`, `rate = 1`. The mean is `shape / rate`; the
/// engine converts to the scale form (`scale = 1 / rate`) expected by the
/// backing sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GammaParams {
    /// Shape parameter; must be strictly positive.
    pub shape: f64,
    /// Rate parameter; must be strictly positive.
    pub rate: f64,
}

impl GammaParams {
    /// Creates gamma parameters.
    pub fn new(shape: f64, rate: f64) -> Self {
        Self { shape, rate }
    }

    /// Checks the domain: both parameters strictly positive and finite.
    ///
    /// # Errors
    /// Returns [`ParameterError`] naming whichever parameter fails first.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_positive(Family::Gamma, "shape", self.shape)?;
        require_positive(Family::Gamma, "rate", self.rate)
    }
}

impl Default for GammaParams {
    fn default() -> Self {
        Self {
            shape: 1.0,
            rate: 1.0,
        }
    }
}

/// Weibull law with shape and scale.
///
/// Defaults to `shape = 1`, `scale = 1` (the standard exponential).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeibullParams {
    /// Shape parameter; must be strictly positive.
    pub shape: f64,
    /// Scale parameter; must be strictly positive.
    pub scale: f64,
}

impl WeibullParams {
    /// Creates Weibull parameters.
    pub fn new(shape: f64, scale: f64) -> Self {
        Self { shape, scale }
    }

    /// Checks the domain: both parameters strictly positive and finite.
    ///
    /// # Errors
    /// Returns [`ParameterError`] naming whichever parameter fails first.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_positive(Family::Weibull, "shape", self.shape)?;
        require_positive(Family::Weibull, "scale", self.scale)
    }
}

impl Default for WeibullParams {
    fn default() -> Self {
        Self {
            shape: 1.0,
            scale: 1.0,
        }
    }
}

/// Extreme-value (Gumbel) law with location and scale.
///
/// Defaults to `location = 0`, `scale = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtremeValueParams {
    /// Location (mode) parameter; any finite value.
    pub location: f64,
    /// Scale parameter; must be strictly positive.
    pub scale: f64,
}

impl ExtremeValueParams {
    /// Creates extreme-value parameters.
    pub fn new(location: f64, scale: f64) -> Self {
        Self { location, scale }
    }

    /// Checks the domain: finite location, strictly positive scale.
    ///
    /// # Errors
    /// Returns [`ParameterError`] naming whichever parameter fails first.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_finite(Family::ExtremeValue, "location", self.location)?;
        require_positive(Family::ExtremeValue, "scale", self.scale)
    }
}

impl Default for ExtremeValueParams {
    fn default() -> Self {
        Self {
            location: 0.0,
            scale: 1.0,
        }
    }
}

/// Gaussian law with mean and standard deviation.
///
/// Defaults to the standard normal (`mean = 0`, `sd = 1`).
///
/// # Examples
/// ```
/// use variate_core::catalog::NormalParams;
///
/// let shifted = NormalParams { mean: 3.0, ..NormalParams::default() };
/// assert_eq!(shifted.sd, 1.0);
/// assert!(shifted.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalParams {
    /// Mean; any finite value.
    pub mean: f64,
    /// Standard deviation; must be strictly positive.
    pub sd: f64,
}

impl NormalParams {
    /// Creates normal parameters.
    pub fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }

    /// Checks the domain: finite mean, strictly positive standard deviation.
    ///
    /// # Errors
    /// Returns [`ParameterError`] naming whichever parameter fails first.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_finite(Family::Normal, "mean", self.mean)?;
        require_positive(Family::Normal, "sd", self.sd)
    }
}

impl Default for NormalParams {
    fn default() -> Self {
        Self { mean: 0.0, sd: 1.0 }
    }
}

/// Log-normal law: `exp(N(mean, sdlog))`.
///
/// Defaults to `mean = 0`, `sdlog = 1`, both on the log scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogNormalParams {
    /// Mean of the underlying Gaussian; any finite value.
    pub mean: f64,
    /// Standard deviation of the underlying Gaussian; strictly positive.
    pub sdlog: f64,
}

impl LogNormalParams {
    /// Creates log-normal parameters.
    pub fn new(mean: f64, sdlog: f64) -> Self {
        Self { mean, sdlog }
    }

    /// Checks the domain: finite log-mean, strictly positive log-sd.
    ///
    /// # Errors
    /// Returns [`ParameterError`] naming whichever parameter fails first.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_finite(Family::LogNormal, "mean", self.mean)?;
        require_positive(Family::LogNormal, "sdlog", self.sdlog)
    }
}

impl Default for LogNormalParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            sdlog: 1.0,
        }
    }
}

/// Chi-squared law with `df` degrees of freedom.
///
/// Defaults to `df = 1`. Fractional degrees of freedom are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChiSquaredParams {
    /// Degrees of freedom; must be strictly positive.
    pub df: f64,
}

impl ChiSquaredParams {
    /// Creates chi-squared parameters.
    pub fn new(df: f64) -> Self {
        Self { df }
    }

    /// Checks the domain: `df > 0` and finite.
    ///
    /// # Errors
    /// Returns [`ParameterError`] on a non-positive or non-finite value.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_positive(Family::ChiSquared, "df", self.df)
    }
}

impl Default for ChiSquaredParams {
    fn default() -> Self {
        Self { df: 1.0 }
    }
}

/// Cauchy law with location and scale.
///
/// Defaults to the standard Cauchy (`location = 0`, `scale = 1`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CauchyParams {
    /// Location (median) parameter; any finite value.
    pub location: f64,
    /// Scale parameter; must be strictly positive.
    pub scale: f64,
}

impl CauchyParams {
    /// Creates Cauchy parameters.
    pub fn new(location: f64, scale: f64) -> Self {
        Self { location, scale }
    }

    /// Checks the domain: finite location, strictly positive scale.
    ///
    /// # Errors
    /// Returns [`ParameterError`] naming whichever parameter fails first.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_finite(Family::Cauchy, "location", self.location)?;
        require_positive(Family::Cauchy, "scale", self.scale)
    }
}

impl Default for CauchyParams {
    fn default() -> Self {
        Self {
            location: 0.0,
            scale: 1.0,
        }
    }
}

/// Fisher F law with numerator and denominator degrees of freedom.
///
/// Defaults to `df1 = 1`, `df2 = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FisherFParams {
    /// Numerator degrees of freedom; must be strictly positive.
    pub df1: f64,
    /// Denominator degrees of freedom; must be strictly positive.
    pub df2: f64,
}

impl FisherFParams {
    /// Creates Fisher F parameters.
    pub fn new(df1: f64, df2: f64) -> Self {
        Self { df1, df2 }
    }

    /// Checks the domain: both degrees of freedom strictly positive.
    ///
    /// # Errors
    /// Returns [`ParameterError`] naming whichever parameter fails first.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_positive(Family::FisherF, "df1", self.df1)?;
        require_positive(Family::FisherF, "df2", self.df2)
    }
}

impl Default for FisherFParams {
    fn default() -> Self {
        Self { df1: 1.0, df2: 1.0 }
    }
}
