//! Parameter validation errors.

use thiserror::Error;

use crate::catalog::Family;

/// A distribution parameter set violates its family's domain.
///
/// Raised during validation or instance construction, before any draw
/// occurs. Every variant names the offending family so a failed call can
/// be traced back without further context.
///
/// # Variants
/// - `OutOfDomain`: a parameter value lies outside its declared domain
/// - `NonFinite`: a parameter is NaN or infinite
/// - `EmptyRange`: a range family was given `min`/`max` that admit no value
/// - `Rejected`: the backing sampler refused an otherwise-validated set
///
/// # Examples
/// ```
/// use variate_core::catalog::{Family, ParameterError};
///
/// let err = ParameterError::OutOfDomain {
///     family: Family::Weibull,
///     name: "scale",
///     value: -1.0,
///     constraint: "strictly positive",
/// };
/// assert_eq!(
///     err.to_string(),
///     "weibull: parameter 'scale' must be strictly positive, got -1"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterError {
    /// Parameter value outside the family's declared domain.
    #[error("{family}: parameter '{name}' must be {constraint}, got {value}")]
    OutOfDomain {
        /// Family whose domain was violated.
        family: Family,
        /// Name of the offending parameter.
        name: &'static str,
        /// The supplied value.
        value: f64,
        /// Human-readable statement of the domain.
        constraint: &'static str,
    },

    /// Parameter value is NaN or infinite.
    #[error("{family}: parameter '{name}' must be finite, got {value}")]
    NonFinite {
        /// Family whose parameter was non-finite.
        family: Family,
        /// Name of the offending parameter.
        name: &'static str,
        /// The supplied value.
        value: f64,
    },

    /// Range bounds admit no value.
    #[error("{family}: invalid range: min {min}, max {max}")]
    EmptyRange {
        /// Family whose range was empty.
        family: Family,
        /// Supplied lower bound.
        min: f64,
        /// Supplied upper bound.
        max: f64,
    },

    /// The backing sampler refused the parameter set at construction.
    #[error("{family}: parameters rejected by sampler: {reason}")]
    Rejected {
        /// Family whose construction failed.
        family: Family,
        /// Constructor error reported by the backing sampler.
        reason: String,
    },
}

impl ParameterError {
    /// Wraps a backing-sampler constructor error.
    pub fn rejected<E: std::fmt::Display>(family: Family, source: E) -> Self {
        ParameterError::Rejected {
            family,
            reason: source.to_string(),
        }
    }

    /// Family whose parameters failed validation.
    #[inline]
    pub fn family(&self) -> Family {
        match self {
            ParameterError::OutOfDomain { family, .. }
            | ParameterError::NonFinite { family, .. }
            | ParameterError::EmptyRange { family, .. }
            | ParameterError::Rejected { family, .. } => *family,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_domain_display() {
        let err = ParameterError::OutOfDomain {
            family: Family::Geometric,
            name: "prob",
            value: 0.0,
            constraint: "a probability in (0, 1]",
        };
        assert_eq!(
            err.to_string(),
            "geometric: parameter 'prob' must be a probability in (0, 1], got 0"
        );
    }

    #[test]
    fn test_non_finite_display() {
        let err = ParameterError::NonFinite {
            family: Family::Normal,
            name: "sd",
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "normal: parameter 'sd' must be finite, got NaN");
    }

    #[test]
    fn test_empty_range_display() {
        let err = ParameterError::EmptyRange {
            family: Family::Uniform,
            min: 5.0,
            max: 2.0,
        };
        assert_eq!(err.to_string(), "uniform: invalid range: min 5, max 2");
    }

    #[test]
    fn test_rejected_wraps_reason() {
        let err = ParameterError::rejected(Family::Gamma, "shape too small");
        assert_eq!(
            err.to_string(),
            "gamma: parameters rejected by sampler: shape too small"
        );
    }

    #[test]
    fn test_family_accessor() {
        let err = ParameterError::EmptyRange {
            family: Family::UniformInt,
            min: 3.0,
            max: 1.0,
        };
        assert_eq!(err.family(), Family::UniformInt);
    }
}
