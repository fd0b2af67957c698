//! Bound distribution instances.
//!
//! Binding takes a validated parameter set and prepares the backing
//! rand_distr sampler for it, once per call. Instances are `Clone` so the
//! parallel path can hand every worker its own copy: any internal state a
//! sampler carries is duplicated, never shared across threads.
//!
//! Count families draw through wider backing types (`u64` trial counts,
//! `f64` Poisson intensities) and saturate at `i32::MAX` instead of
//! wrapping.

use rand::distributions::Uniform;
use rand_distr::{
    Binomial, Cauchy, ChiSquared, Exp, FisherF, Gamma, Geometric, Gumbel, LogNormal, Normal,
    Poisson, Weibull,
};
use variate_core::catalog::{
    BinomialParams, CauchyParams, ChiSquaredParams, ExponentialParams, ExtremeValueParams, Family,
    FisherFParams, GammaParams, GeometricParams, LogNormalParams, NegativeBinomialParams,
    NormalParams, ParameterError, PoissonParams, UniformIntParams, UniformParams, WeibullParams,
};

use crate::rng::VariateRng;
use variate_core::catalog::DistributionSpec;

/// One bound sampler: draws variates of a fixed element type from one
/// engine. The generic fill loops are written against this seam and stay
/// oblivious to which family they drive.
pub(crate) trait DrawVariate {
    /// Element type of the drawn variates.
    type Output;

    /// Draws one variate, advancing the engine.
    fn draw(&mut self, engine: &mut VariateRng) -> Self::Output;
}

/// Bound instance of a continuous family.
#[derive(Debug, Clone)]
pub(crate) enum FloatInstance {
    Uniform(Uniform<f64>),
    Exponential(Exp<f64>),
    Gamma(Gamma<f64>),
    Weibull(Weibull<f64>),
    ExtremeValue(Gumbel<f64>),
    Normal(Normal<f64>),
    LogNormal(LogNormal<f64>),
    ChiSquared(ChiSquared<f64>),
    Cauchy(Cauchy<f64>),
    FisherF(FisherF<f64>),
}

impl FloatInstance {
    pub(crate) fn uniform(params: &UniformParams) -> Result<Self, ParameterError> {
        params.validate()?;
        // Half-open [min, max); the bounds were checked above, so the
        // panicking constructor cannot fire.
        Ok(Self::Uniform(Uniform::new(params.min, params.max)))
    }

    pub(crate) fn exponential(params: &ExponentialParams) -> Result<Self, ParameterError> {
        params.validate()?;
        Exp::new(params.rate)
            .map(Self::Exponential)
            .map_err(|e| ParameterError::rejected(Family::Exponential, e))
    }

    pub(crate) fn gamma(params: &GammaParams) -> Result<Self, ParameterError> {
        params.validate()?;
        // The backing sampler is scale-parameterised; the catalog speaks rate.
        Gamma::new(params.shape, params.rate.recip())
            .map(Self::Gamma)
            .map_err(|e| ParameterError::rejected(Family::Gamma, e))
    }

    pub(crate) fn weibull(params: &WeibullParams) -> Result<Self, ParameterError> {
        params.validate()?;
        // rand_distr argument order is (scale, shape).
        Weibull::new(params.scale, params.shape)
            .map(Self::Weibull)
            .map_err(|e| ParameterError::rejected(Family::Weibull, e))
    }

    pub(crate) fn extreme_value(params: &ExtremeValueParams) -> Result<Self, ParameterError> {
        params.validate()?;
        Gumbel::new(params.location, params.scale)
            .map(Self::ExtremeValue)
            .map_err(|e| ParameterError::rejected(Family::ExtremeValue, e))
    }

    pub(crate) fn normal(params: &NormalParams) -> Result<Self, ParameterError> {
        params.validate()?;
        Normal::new(params.mean, params.sd)
            .map(Self::Normal)
            .map_err(|e| ParameterError::rejected(Family::Normal, e))
    }

    pub(crate) fn log_normal(params: &LogNormalParams) -> Result<Self, ParameterError> {
        params.validate()?;
        LogNormal::new(params.mean, params.sdlog)
            .map(Self::LogNormal)
            .map_err(|e| ParameterError::rejected(Family::LogNormal, e))
    }

    pub(crate) fn chi_squared(params: &ChiSquaredParams) -> Result<Self, ParameterError> {
        params.validate()?;
        ChiSquared::new(params.df)
            .map(Self::ChiSquared)
            .map_err(|e| ParameterError::rejected(Family::ChiSquared, e))
    }

    pub(crate) fn cauchy(params: &CauchyParams) -> Result<Self, ParameterError> {
        params.validate()?;
        Cauchy::new(params.location, params.scale)
            .map(Self::Cauchy)
            .map_err(|e| ParameterError::rejected(Family::Cauchy, e))
    }

    pub(crate) fn fisher_f(params: &FisherFParams) -> Result<Self, ParameterError> {
        params.validate()?;
        FisherF::new(params.df1, params.df2)
            .map(Self::FisherF)
            .map_err(|e| ParameterError::rejected(Family::FisherF, e))
    }
}

impl DrawVariate for FloatInstance {
    type Output = f64;

    #[inline]
    fn draw(&mut self, engine: &mut VariateRng) -> f64 {
        match self {
            Self::Uniform(d) => engine.sample(d),
            Self::Exponential(d) => engine.sample(d),
            Self::Gamma(d) => engine.sample(d),
            Self::Weibull(d) => engine.sample(d),
            Self::ExtremeValue(d) => engine.sample(d),
            Self::Normal(d) => engine.sample(d),
            Self::LogNormal(d) => engine.sample(d),
            Self::ChiSquared(d) => engine.sample(d),
            Self::Cauchy(d) => engine.sample(d),
            Self::FisherF(d) => engine.sample(d),
        }
    }
}

/// Bound instance of a count family.
#[derive(Debug, Clone)]
pub(crate) enum IntInstance {
    UniformInt(Uniform<i32>),
    Binomial(Binomial),
    Geometric(Geometric),
    NegativeBinomial(NegativeBinomialMix),
    Poisson(Poisson<f64>),
}

impl IntInstance {
    pub(crate) fn uniform_int(params: &UniformIntParams) -> Result<Self, ParameterError> {
        params.validate()?;
        // Closed [min, max]; the bounds were checked above, so the
        // panicking constructor cannot fire.
        Ok(Self::UniformInt(Uniform::new_inclusive(
            params.min, params.max,
        )))
    }

    pub(crate) fn binomial(params: &BinomialParams) -> Result<Self, ParameterError> {
        params.validate()?;
        Binomial::new(params.size as u64, params.prob)
            .map(Self::Binomial)
            .map_err(|e| ParameterError::rejected(Family::Binomial, e))
    }

    pub(crate) fn geometric(params: &GeometricParams) -> Result<Self, ParameterError> {
        params.validate()?;
        Geometric::new(params.prob)
            .map(Self::Geometric)
            .map_err(|e| ParameterError::rejected(Family::Geometric, e))
    }

    pub(crate) fn negative_binomial(
        params: &NegativeBinomialParams,
    ) -> Result<Self, ParameterError> {
        params.validate()?;
        NegativeBinomialMix::bind(params).map(Self::NegativeBinomial)
    }

    pub(crate) fn poisson(params: &PoissonParams) -> Result<Self, ParameterError> {
        params.validate()?;
        Poisson::new(params.lambda)
            .map(Self::Poisson)
            .map_err(|e| ParameterError::rejected(Family::Poisson, e))
    }
}

impl DrawVariate for IntInstance {
    type Output = i32;

    #[inline]
    fn draw(&mut self, engine: &mut VariateRng) -> i32 {
        match self {
            Self::UniformInt(d) => engine.sample(d),
            Self::Binomial(d) => saturating_count(engine.sample(d)),
            Self::Geometric(d) => saturating_count(engine.sample(d)),
            Self::NegativeBinomial(mix) => mix.draw(engine),
            Self::Poisson(d) => {
                let intensity_draw: f64 = engine.sample(d);
                intensity_draw as i32
            }
        }
    }
}

/// Negative-binomial sampler as the exact gamma-Poisson mixture.
///
/// rand_distr has no negative-binomial law; for failures before the
/// `size`-th success with probability `prob`, draw an intensity
/// λ ~ Gamma(size, (1 - prob) / prob) and then Poisson(λ).
#[derive(Debug, Clone)]
pub(crate) struct NegativeBinomialMix {
    /// Mixing law for the Poisson intensity; `None` is the `prob = 1`
    /// point mass at zero.
    intensity: Option<Gamma<f64>>,
}

impl NegativeBinomialMix {
    fn bind(params: &NegativeBinomialParams) -> Result<Self, ParameterError> {
        if params.prob == 1.0 {
            return Ok(Self { intensity: None });
        }
        let scale = (1.0 - params.prob) / params.prob;
        Gamma::new(params.size as f64, scale)
            .map(|gamma| Self {
                intensity: Some(gamma),
            })
            .map_err(|e| ParameterError::rejected(Family::NegativeBinomial, e))
    }

    fn draw(&self, engine: &mut VariateRng) -> i32 {
        let gamma = match &self.intensity {
            Some(gamma) => gamma,
            None => return 0,
        };
        let lambda = engine.sample(gamma);
        if !(lambda > 0.0) {
            // Intensity underflowed to zero: the conditional law is the
            // point mass at zero.
            return 0;
        }
        if !lambda.is_finite() {
            return i32::MAX;
        }
        // lambda is finite and positive here; a refusal would mean the
        // backing sampler narrowed its domain, which must not be papered
        // over with a silently wrong variate.
        let poisson = match Poisson::new(lambda) {
            Ok(poisson) => poisson,
            Err(refusal) => unreachable!("poisson({lambda}) refused: {refusal}"),
        };
        let count: f64 = engine.sample(&poisson);
        count as i32
    }
}

/// Clamps a count from a wider backing sampler into `i32`.
#[inline]
fn saturating_count(count: u64) -> i32 {
    count.min(i32::MAX as u64) as i32
}

/// A bound instance of either element kind.
///
/// This is the `DistributionSpec`-driven entry: per-family code binds the
/// concrete instance type directly and skips the wrapper.
pub(crate) enum BoundInstance {
    Float(FloatInstance),
    Int(IntInstance),
}

impl BoundInstance {
    pub(crate) fn bind(spec: &DistributionSpec) -> Result<Self, ParameterError> {
        match spec {
            DistributionSpec::Uniform(p) => FloatInstance::uniform(p).map(Self::Float),
            DistributionSpec::UniformInt(p) => IntInstance::uniform_int(p).map(Self::Int),
            DistributionSpec::Binomial(p) => IntInstance::binomial(p).map(Self::Int),
            DistributionSpec::Geometric(p) => IntInstance::geometric(p).map(Self::Int),
            DistributionSpec::NegativeBinomial(p) => {
                IntInstance::negative_binomial(p).map(Self::Int)
            }
            DistributionSpec::Poisson(p) => IntInstance::poisson(p).map(Self::Int),
            DistributionSpec::Exponential(p) => FloatInstance::exponential(p).map(Self::Float),
            DistributionSpec::Gamma(p) => FloatInstance::gamma(p).map(Self::Float),
            DistributionSpec::Weibull(p) => FloatInstance::weibull(p).map(Self::Float),
            DistributionSpec::ExtremeValue(p) => FloatInstance::extreme_value(p).map(Self::Float),
            DistributionSpec::Normal(p) => FloatInstance::normal(p).map(Self::Float),
            DistributionSpec::LogNormal(p) => FloatInstance::log_normal(p).map(Self::Float),
            DistributionSpec::ChiSquared(p) => FloatInstance::chi_squared(p).map(Self::Float),
            DistributionSpec::Cauchy(p) => FloatInstance::cauchy(p).map(Self::Float),
            DistributionSpec::FisherF(p) => FloatInstance::fisher_f(p).map(Self::Float),
        }
    }
}
