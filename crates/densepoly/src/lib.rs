//! # densepoly
//!
//! Dense univariate polynomials over generic coefficients.
//!
//! This crate provides:
//! - `Polynomial<T>` with a trimmed coefficient representation
//! - Arithmetic against polynomials and bare scalars, with compound forms
//! - Evaluation, scalar-aware equality, and ascending/descending iteration
//! - Opt-in Karatsuba multiplication
//!
//! ## Representation
//!
//! Coefficients are stored in ascending degree order and never end in a
//! zero. The zero polynomial is the empty sequence and has degree -1:
//!
//! ```
//! use densepoly::Polynomial;
//!
//! let p = Polynomial::new(vec![1, 2, 3, 0]); // 1 + 2x + 3x^2
//! assert_eq!(p.degree(), 2);
//! assert_eq!(p.evaluate(&2), 17);
//! assert_eq!(p.to_string(), "3 2 1");
//!
//! let zero = Polynomial::new(vec![0, 0, 0]);
//! assert_eq!(zero.degree(), -1);
//! assert!(zero == 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod arith;
pub mod cmp;
pub mod coeff;
pub mod dense;
pub mod error;
pub mod iter;

#[cfg(test)]
mod proptests;

pub use coeff::Coefficient;
pub use dense::Polynomial;
pub use error::PolyError;
pub use iter::{Ascending, AscendingMut, CoeffsMut, Descending, DescendingMut, IntoIter};
