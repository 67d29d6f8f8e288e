//! Error types.

use thiserror::Error;

/// Errors returned by the fallible polynomial conversions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A scalar was requested from a polynomial of positive degree.
    #[error("polynomial of degree {degree} is not a constant")]
    NotConstant {
        /// Degree of the offending polynomial.
        degree: usize,
    },

    /// The operation needs a non-zero polynomial.
    #[error("the zero polynomial has no leading coefficient")]
    ZeroPolynomial,
}
