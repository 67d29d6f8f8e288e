//! Coefficient trait.
//!
//! This module defines the algebraic contract a type must satisfy to be
//! used as the coefficient of a [`Polynomial`](crate::Polynomial).

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// A numeric-like value usable as a polynomial coefficient.
///
/// The additive identity is the type's [`Default`] value: `T::default()`
/// must behave as zero under addition, and equality against it decides
/// whether a coefficient is trimmed.
///
/// # Laws
///
/// - `a + T::default() == a`
/// - `a * T::default() == T::default()`
///
/// Nothing beyond the type's own arithmetic is assumed: overflow, rounding
/// and precision are whatever `T` does.
///
/// This trait is implemented for every type meeting the bounds.
pub trait Coefficient:
    Clone + Default + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity.
    #[must_use]
    fn zero() -> Self {
        Self::default()
    }

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl<T> Coefficient for T where
    T: Clone + Default + PartialEq + Debug + Add<Output = T> + Sub<Output = T> + Mul<Output = T>
{
}
