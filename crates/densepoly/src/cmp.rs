//! Comparison between polynomials and bare scalars.
//!
//! Polynomial-to-polynomial equality is the derived coefficient-wise
//! comparison, which is exact because both sides are trimmed.
//!
//! A scalar equals a polynomial when the polynomial is zero and the scalar
//! is the additive identity, or when the polynomial has degree 0 and its
//! only coefficient equals the scalar. There is no degree-0 polynomial with
//! a zero coefficient, so scalar zero always goes through the first case.

use crate::coeff::Coefficient;
use crate::dense::Polynomial;

impl<T: Coefficient> PartialEq<T> for Polynomial<T> {
    fn eq(&self, other: &T) -> bool {
        match self.coeffs() {
            [] => other.is_zero(),
            [c] => c == other,
            _ => false,
        }
    }
}

macro_rules! scalar_lhs_eq {
    ($($t:ty)*) => {$(
        impl PartialEq<Polynomial<$t>> for $t {
            fn eq(&self, other: &Polynomial<$t>) -> bool {
                <Polynomial<$t> as PartialEq<$t>>::eq(other, self)
            }
        }
    )*};
}

scalar_lhs_eq!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);
