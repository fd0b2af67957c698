//! Distribution family tags and element kinds.
//!
//! The catalog is a closed set: every family the engine can generate from
//! is listed here, together with the element type its variates carry.

use std::fmt;

/// Element type of a generated variate sequence.
///
/// Count-valued families (binomial, Poisson, ...) produce signed 32-bit
/// integers; continuous families produce 64-bit floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// Variates are signed 32-bit integers (`i32`).
    Int,
    /// Variates are 64-bit floats (`f64`).
    Float,
}

/// Tag identifying one distribution family in the catalog.
///
/// Each family has a fixed, named parameter list with declared defaults
/// (see the parameter structs in [`crate::catalog`]) and a fixed element
/// kind. The set is closed: callers select a family, they never register
/// new ones.
///
/// # Examples
/// ```
/// use variate_core::catalog::{ElementKind, Family};
///
/// assert_eq!(Family::Poisson.element_kind(), ElementKind::Int);
/// assert_eq!(Family::Weibull.element_kind(), ElementKind::Float);
/// assert_eq!(Family::NegativeBinomial.to_string(), "negative_binomial");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// Continuous uniform on the half-open interval `[min, max)`.
    Uniform,
    /// Integer uniform on the closed interval `[min, max]`.
    UniformInt,
    /// Number of successes in `size` Bernoulli trials.
    Binomial,
    /// Number of failures before the first success.
    Geometric,
    /// Number of failures before the `size`-th success.
    NegativeBinomial,
    /// Counts of events at a fixed mean rate.
    Poisson,
    /// Waiting time at a fixed event rate.
    Exponential,
    /// Gamma law with shape and rate parameters.
    Gamma,
    /// Weibull law with shape and scale parameters.
    Weibull,
    /// Extreme-value (Gumbel) law with location and scale.
    ExtremeValue,
    /// Gaussian law with mean and standard deviation.
    Normal,
    /// Exponential of a Gaussian variate.
    LogNormal,
    /// Chi-squared law with `df` degrees of freedom.
    ChiSquared,
    /// Cauchy law with location and scale.
    Cauchy,
    /// Fisher F law with two degree-of-freedom parameters.
    FisherF,
}

impl Family {
    /// Every family in the catalog, in declaration order.
    pub const ALL: [Family; 15] = [
        Family::Uniform,
        Family::UniformInt,
        Family::Binomial,
        Family::Geometric,
        Family::NegativeBinomial,
        Family::Poisson,
        Family::Exponential,
        Family::Gamma,
        Family::Weibull,
        Family::ExtremeValue,
        Family::Normal,
        Family::LogNormal,
        Family::ChiSquared,
        Family::Cauchy,
        Family::FisherF,
    ];

    /// Canonical snake_case name of the family.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Family::Uniform => "uniform",
            Family::UniformInt => "uniform_int",
            Family::Binomial => "binomial",
            Family::Geometric => "geometric",
            Family::NegativeBinomial => "negative_binomial",
            Family::Poisson => "poisson",
            Family::Exponential => "exponential",
            Family::Gamma => "gamma",
            Family::Weibull => "weibull",
            Family::ExtremeValue => "extreme_value",
            Family::Normal => "normal",
            Family::LogNormal => "log_normal",
            Family::ChiSquared => "chi_squared",
            Family::Cauchy => "cauchy",
            Family::FisherF => "fisher_f",
        }
    }

    /// Element type of the sequences this family generates.
    #[inline]
    pub fn element_kind(&self) -> ElementKind {
        match self {
            Family::UniformInt
            | Family::Binomial
            | Family::Geometric
            | Family::NegativeBinomial
            | Family::Poisson => ElementKind::Int,
            Family::Uniform
            | Family::Exponential
            | Family::Gamma
            | Family::Weibull
            | Family::ExtremeValue
            | Family::Normal
            | Family::LogNormal
            | Family::ChiSquared
            | Family::Cauchy
            | Family::FisherF => ElementKind::Float,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_family_once() {
        assert_eq!(Family::ALL.len(), 15);
        for (i, a) in Family::ALL.iter().enumerate() {
            for b in Family::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_names_are_unique_snake_case() {
        for family in Family::ALL {
            let name = family.name();
            assert!(!name.is_empty());
            assert!(name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Family::Uniform.to_string(), "uniform");
        assert_eq!(Family::ExtremeValue.to_string(), "extreme_value");
        assert_eq!(Family::FisherF.to_string(), "fisher_f");
    }

    #[test]
    fn test_element_kinds_split_counts_from_continuous() {
        let ints = [
            Family::UniformInt,
            Family::Binomial,
            Family::Geometric,
            Family::NegativeBinomial,
            Family::Poisson,
        ];
        for family in Family::ALL {
            let expected = if ints.contains(&family) {
                ElementKind::Int
            } else {
                ElementKind::Float
            };
            assert_eq!(family.element_kind(), expected, "{}", family);
        }
    }
}
