//! Schoolbook and Karatsuba multiplication on coefficient slices.
//!
//! Both functions take coefficients in ascending degree order and return the
//! untrimmed product; callers normalize.

use std::mem;

use crate::coeff::Coefficient;

/// Karatsuba multiplication threshold.
///
/// Operands with fewer coefficients than this use schoolbook multiplication.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Schoolbook multiplication: O(n*m).
///
/// Slot `i + j` accumulates `a[j] * b[i]`, with `b` driving the outer loop.
/// Returns an empty vector if either operand is empty.
pub fn schoolbook_mul<T: Coefficient>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![T::zero(); a.len() + b.len() - 1];
    for (i, bi) in b.iter().enumerate() {
        for (j, aj) in a.iter().enumerate() {
            let slot = &mut result[i + j];
            *slot = mem::take(slot) + aj.clone() * bi.clone();
        }
    }

    result
}

/// Performs Karatsuba multiplication: O(n^1.58).
///
/// The result may be longer than `a.len() + b.len() - 1`; the extra slots
/// are zero.
pub fn karatsuba_mul<T: Coefficient>(a: &[T], b: &[T]) -> Vec<T> {
    let n = a.len();
    let m = b.len();

    // Base case
    if n < KARATSUBA_THRESHOLD || m < KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    // Make both the same size (power of 2)
    let size = n.max(m).next_power_of_two();
    let half = size / 2;

    let mut a_ext = a.to_vec();
    let mut b_ext = b.to_vec();
    a_ext.resize(size, T::zero());
    b_ext.resize(size, T::zero());

    // Split: a = a0 + a1*x^half, b = b0 + b1*x^half
    let (a0, a1) = a_ext.split_at(half);
    let (b0, b1) = b_ext.split_at(half);

    let z0 = karatsuba_mul(a0, b0);
    let z2 = karatsuba_mul(a1, b1);

    let a01 = pairwise_sum(a0, a1);
    let b01 = pairwise_sum(b0, b1);

    // z1 = (a0+a1)*(b0+b1) - z0 - z2
    let mut z1 = karatsuba_mul(&a01, &b01);
    for part in [&z0, &z2] {
        for (slot, c) in z1.iter_mut().zip(part) {
            *slot = mem::take(slot) - c.clone();
        }
    }

    // Combine: result = z0 + z1*x^half + z2*x^(2*half)
    let mut result = vec![T::zero(); 2 * size - 1];
    for (offset, part) in [(0, z0), (half, z1), (2 * half, z2)] {
        for (i, c) in part.into_iter().enumerate() {
            let slot = &mut result[i + offset];
            *slot = mem::take(slot) + c;
        }
    }

    result
}

fn pairwise_sum<T: Coefficient>(lo: &[T], hi: &[T]) -> Vec<T> {
    lo.iter()
        .zip(hi)
        .map(|(x, y)| x.clone() + y.clone())
        .collect()
}
