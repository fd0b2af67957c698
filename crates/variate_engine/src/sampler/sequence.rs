//! Generated output sequences.

use variate_core::catalog::ElementKind;

/// An ordered sequence of generated variates.
///
/// Count families carry `i32` elements, continuous families `f64`; the
/// wrapper keeps the family-agnostic entry point ([`crate::Generator::generate`])
/// usable without the caller knowing the element kind up front. A sequence
/// is produced once, filled in place and returned; it has no identity
/// beyond the call that produced it.
///
/// # Examples
///
/// ```rust
/// use variate_core::catalog::{DistributionSpec, PoissonParams};
/// use variate_engine::Generator;
///
/// let spec = DistributionSpec::Poisson(PoissonParams { lambda: 3.0 });
/// let sequence = Generator::from_seed(7).generate(&spec, 100).unwrap();
/// assert_eq!(sequence.len(), 100);
/// let counts = sequence.into_int().unwrap();
/// assert!(counts.iter().all(|&c| c >= 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum VariateSequence {
    /// Output of a continuous family.
    Float(Vec<f64>),
    /// Output of a count family.
    Int(Vec<i32>),
}

impl VariateSequence {
    /// Number of variates in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            VariateSequence::Float(values) => values.len(),
            VariateSequence::Int(values) => values.len(),
        }
    }

    /// True when the sequence holds no variates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element kind of the sequence.
    #[inline]
    pub fn element_kind(&self) -> ElementKind {
        match self {
            VariateSequence::Float(_) => ElementKind::Float,
            VariateSequence::Int(_) => ElementKind::Int,
        }
    }

    /// Borrows the float elements, or `None` for a count sequence.
    #[inline]
    pub fn as_float(&self) -> Option<&[f64]> {
        match self {
            VariateSequence::Float(values) => Some(values),
            VariateSequence::Int(_) => None,
        }
    }

    /// Borrows the int elements, or `None` for a continuous sequence.
    #[inline]
    pub fn as_int(&self) -> Option<&[i32]> {
        match self {
            VariateSequence::Int(values) => Some(values),
            VariateSequence::Float(_) => None,
        }
    }

    /// Consumes the sequence into its float elements, or `None`.
    #[inline]
    pub fn into_float(self) -> Option<Vec<f64>> {
        match self {
            VariateSequence::Float(values) => Some(values),
            VariateSequence::Int(_) => None,
        }
    }

    /// Consumes the sequence into its int elements, or `None`.
    #[inline]
    pub fn into_int(self) -> Option<Vec<i32>> {
        match self {
            VariateSequence::Int(values) => Some(values),
            VariateSequence::Float(_) => None,
        }
    }
}
