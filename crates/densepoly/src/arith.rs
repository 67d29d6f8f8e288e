//! Arithmetic operators.
//!
//! The compound operators (`+=`, `-=`, `*=`) do the work and re-normalize
//! the receiver. Every binary operator clones (or reuses) its left operand
//! and applies the matching compound operator.

use std::mem;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::algorithms::karatsuba::schoolbook_mul;
use crate::coeff::Coefficient;
use crate::dense::Polynomial;

impl<T: Coefficient> Polynomial<T> {
    /// Grows the receiver to cover `other`, combines the overlapping slots
    /// with `op`, then normalizes.
    fn combine_with(&mut self, other: &Self, op: impl Fn(T, T) -> T) {
        if self.coeffs.len() < other.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), T::zero());
        }
        for (slot, c) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *slot = op(mem::take(slot), c.clone());
        }
        self.normalize();
    }

    /// Applies `op` to the constant term, creating it if needed.
    fn combine_constant(&mut self, c: T, op: impl FnOnce(T, T) -> T) {
        if self.coeffs.is_empty() {
            self.coeffs.push(T::zero());
        }
        let slot = &mut self.coeffs[0];
        *slot = op(mem::take(slot), c);
        self.normalize();
    }
}

impl<T: Coefficient> AddAssign<&Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &Polynomial<T>) {
        self.combine_with(rhs, |a, b| a + b);
    }
}

impl<T: Coefficient> AddAssign<T> for Polynomial<T> {
    fn add_assign(&mut self, rhs: T) {
        self.combine_constant(rhs, |a, b| a + b);
    }
}

impl<T: Coefficient> SubAssign<&Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &Polynomial<T>) {
        self.combine_with(rhs, |a, b| a - b);
    }
}

impl<T: Coefficient> SubAssign<T> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.combine_constant(rhs, |a, b| a - b);
    }
}

impl<T: Coefficient> MulAssign<&Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &Polynomial<T>) {
        if self.is_zero() || rhs.is_zero() {
            self.coeffs.clear();
            return;
        }
        self.coeffs = schoolbook_mul(&self.coeffs, &rhs.coeffs);
        self.normalize();
    }
}

impl<T: Coefficient> MulAssign<T> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: T) {
        for c in &mut self.coeffs {
            *c = mem::take(c) * rhs.clone();
        }
        self.normalize();
    }
}

/// Forwards owned right-hand sides of a compound operator to the borrowed
/// form, and derives the binary operator for every owned/borrowed mix.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Coefficient> $OpAssign<Polynomial<T>> for Polynomial<T> {
            fn $op_assign(&mut self, rhs: Polynomial<T>) {
                $OpAssign::$op_assign(self, &rhs);
            }
        }

        impl<T: Coefficient> $Op<&Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $op(mut self, rhs: &Polynomial<T>) -> Self::Output {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T: Coefficient> $Op<Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $op(mut self, rhs: Polynomial<T>) -> Self::Output {
                $OpAssign::$op_assign(&mut self, &rhs);
                self
            }
        }

        impl<T: Coefficient> $Op<&Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $op(self, rhs: &Polynomial<T>) -> Self::Output {
                let mut tmp = self.clone();
                $OpAssign::$op_assign(&mut tmp, rhs);
                tmp
            }
        }

        impl<T: Coefficient> $Op<Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $op(self, rhs: Polynomial<T>) -> Self::Output {
                let mut tmp = self.clone();
                $OpAssign::$op_assign(&mut tmp, &rhs);
                tmp
            }
        }

        impl<T: Coefficient> $Op<T> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $op(mut self, rhs: T) -> Self::Output {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T: Coefficient> $Op<T> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $op(self, rhs: T) -> Self::Output {
                let mut tmp = self.clone();
                $OpAssign::$op_assign(&mut tmp, rhs);
                tmp
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);

impl<T: Coefficient + Neg<Output = T>> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(mut self) -> Self::Output {
        for c in &mut self.coeffs {
            *c = -mem::take(c);
        }
        self.normalize();
        self
    }
}

impl<T: Coefficient + Neg<Output = T>> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<T: Coefficient> Zero for Polynomial<T> {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl<T: Coefficient + One> One for Polynomial<T> {
    fn one() -> Self {
        Polynomial::one()
    }
}

/// Scalar-on-the-left operators for the primitive numeric types.
///
/// Addition and multiplication commute; `s - p` is `constant(s) - p`.
macro_rules! scalar_lhs_ops {
    ($($t:ty)*) => {$(
        impl Add<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn add(self, rhs: Polynomial<$t>) -> Self::Output {
                rhs + self
            }
        }

        impl Add<&Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn add(self, rhs: &Polynomial<$t>) -> Self::Output {
                rhs + self
            }
        }

        impl Sub<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn sub(self, rhs: Polynomial<$t>) -> Self::Output {
                Polynomial::constant(self) - &rhs
            }
        }

        impl Sub<&Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn sub(self, rhs: &Polynomial<$t>) -> Self::Output {
                Polynomial::constant(self) - rhs
            }
        }

        impl Mul<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn mul(self, rhs: Polynomial<$t>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<&Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn mul(self, rhs: &Polynomial<$t>) -> Self::Output {
                rhs * self
            }
        }
    )*};
}

scalar_lhs_ops!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);
