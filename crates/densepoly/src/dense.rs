//! Dense univariate polynomials.
//!
//! Coefficients are kept in ascending degree order with trailing zeros
//! trimmed, so the zero polynomial is the empty sequence and has degree -1.

use std::fmt;

use num_traits::One;

use crate::algorithms::karatsuba::karatsuba_mul;
use crate::coeff::Coefficient;
use crate::error::PolyError;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order: `coeffs[i]` is the
/// coefficient of `x^i`. The last stored coefficient is never zero; the
/// zero polynomial stores nothing.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Polynomial<T: Coefficient> {
    /// Coefficients in ascending degree order, trailing zeros removed.
    pub(crate) coeffs: Vec<T>,
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates a new polynomial from coefficients in ascending degree order.
    #[must_use]
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// Creates a polynomial from any sequence of coefficients.
    #[must_use]
    pub fn from_coeffs<I: IntoIterator<Item = T>>(coeffs: I) -> Self {
        Self::new(coeffs.into_iter().collect())
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates a constant polynomial.
    ///
    /// A zero constant yields the zero polynomial, not a degree-0 one.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: T, n: usize) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![T::zero(); n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Removes trailing zero coefficients.
    pub(crate) fn normalize(&mut self) {
        while self.coeffs.last().map_or(false, Coefficient::is_zero) {
            self.coeffs.pop();
        }
    }

    /// Returns the degree of the polynomial, or -1 for the zero polynomial.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn degree(&self) -> isize {
        // Vec lengths never exceed isize::MAX.
        self.coeffs.len() as isize - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the coefficient of x^i.
    ///
    /// Indices past the degree read as zero.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Returns a reference to the coefficient of x^i, if it is stored.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.coeffs.get(i)
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant_term(&self) -> T {
        self.coeff(0)
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&T> {
        self.coeffs.last()
    }

    /// Returns the leading coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroPolynomial`] for the zero polynomial.
    pub fn try_leading_coeff(&self) -> Result<&T, PolyError> {
        self.leading_coeff().ok_or(PolyError::ZeroPolynomial)
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// Converts a polynomial of degree at most 0 into its scalar value.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NotConstant`] if the degree is positive.
    pub fn into_constant(mut self) -> Result<T, PolyError> {
        match self.coeffs.len() {
            0 => Ok(T::zero()),
            1 => Ok(self.coeffs.swap_remove(0)),
            n => Err(PolyError::NotConstant { degree: n - 1 }),
        }
    }

    /// Moves the coefficients out, leaving the zero polynomial behind.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Evaluates the polynomial at a point.
    ///
    /// Accumulates `c[i] * x^i` from the constant term upwards, keeping a
    /// running power of `x`.
    #[must_use]
    pub fn evaluate(&self, x: &T) -> T {
        let Some((first, rest)) = self.coeffs.split_first() else {
            return T::zero();
        };

        let mut result = first.clone();
        let mut power = x.clone();
        for (i, c) in rest.iter().enumerate() {
            if i > 0 {
                power = power * x.clone();
            }
            result = result + c.clone() * power.clone();
        }
        result
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn evaluate_horner(&self, x: &T) -> T {
        let mut result = T::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Shifts the polynomial by multiplying by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let mut coeffs = vec![T::zero(); n];
        coeffs.extend(self.coeffs.iter().cloned());
        Self { coeffs }
    }

    /// Multiplies two polynomials with Karatsuba's algorithm.
    ///
    /// Operands shorter than
    /// [`KARATSUBA_THRESHOLD`](crate::algorithms::karatsuba::KARATSUBA_THRESHOLD)
    /// fall back to the schoolbook product. Over exact coefficient types the
    /// result equals `self * other`; floating-point results may differ in
    /// rounding.
    #[must_use]
    pub fn mul_karatsuba(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self::new(karatsuba_mul(&self.coeffs, &other.coeffs))
    }
}

impl<T: Coefficient + One> Polynomial<T> {
    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(T::one())
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(T::one(), 1)
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// `p.pow(0)` is 1 for every `p`, including the zero polynomial.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        result
    }
}

impl<T: Coefficient> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Coefficient> From<&[T]> for Polynomial<T> {
    fn from(coeffs: &[T]) -> Self {
        Self::new(coeffs.to_vec())
    }
}

impl<T: Coefficient, const N: usize> From<[T; N]> for Polynomial<T> {
    fn from(coeffs: [T; N]) -> Self {
        Self::new(Vec::from(coeffs))
    }
}

impl<T: Coefficient> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_coeffs(iter)
    }
}

/// Renders coefficients from the highest degree down, separated by single
/// spaces. The zero polynomial renders as the empty string.
impl<T: Coefficient + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.descending();
        if let Some(c) = terms.next() {
            write!(f, "{c}")?;
        }
        for c in terms {
            write!(f, " {c}")?;
        }
        Ok(())
    }
}
