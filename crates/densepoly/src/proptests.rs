//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::karatsuba::KARATSUBA_THRESHOLD;
    use crate::dense::Polynomial;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    // Raw coefficient vectors, possibly with trailing zeros
    fn raw_coeffs() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(prop_oneof![Just(0i64), small_coeff()], 0..=6)
    }

    // Strategy for generating small polynomials (degree -1 to 5)
    fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
        raw_coeffs().prop_map(Polynomial::new)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial<i64>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Representation

        #[test]
        fn poly_trimmed(coeffs in raw_coeffs()) {
            let p = Polynomial::new(coeffs.clone());
            prop_assert!(p.leading_coeff().map_or(true, |c| *c != 0));

            let mut expected = coeffs;
            while expected.last() == Some(&0) {
                expected.pop();
            }
            prop_assert_eq!(p.coeffs(), &expected[..]);
        }

        #[test]
        fn poly_normalize_idempotent(coeffs in raw_coeffs()) {
            let mut p = Polynomial::new(coeffs);
            let once = p.clone();
            p.normalize();
            prop_assert_eq!(p, once);
        }

        #[test]
        fn poly_degree_matches_len(p in small_poly()) {
            prop_assert_eq!(p.degree() + 1, p.coeffs().len() as isize);
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = &a * &(&b + &c);
            let right = &a * &b + &a * &c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::<i64>::zero();
            prop_assert_eq!(&a + &zero, a.clone());
            prop_assert_eq!(&zero + &a, a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = Polynomial::<i64>::one();
            prop_assert_eq!(&a * &one, a.clone());
            prop_assert_eq!(&one * &a, a);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            let zero = Polynomial::<i64>::zero();
            prop_assert!((&a * &zero).is_zero());
            prop_assert!((&zero * &a).is_zero());
            prop_assert!((&a * 0).is_zero());
        }

        #[test]
        fn poly_add_sub_roundtrip(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!((&a + &(-&a)).is_zero());
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn poly_compound_matches_binary(a in small_poly(), b in small_poly(), s in small_coeff()) {
            let mut sum = a.clone();
            sum += &b;
            prop_assert_eq!(sum, &a + &b);

            let mut diff = a.clone();
            diff -= &b;
            prop_assert_eq!(diff, &a - &b);

            let mut prod = a.clone();
            prod *= &b;
            prop_assert_eq!(prod, &a * &b);

            let mut scaled = a.clone();
            scaled *= s;
            prop_assert_eq!(scaled, &a * &Polynomial::constant(s));
        }

        #[test]
        fn poly_scalar_matches_constant(a in small_poly(), s in small_coeff()) {
            let c = Polynomial::constant(s);
            prop_assert_eq!(&a + s, &a + &c);
            prop_assert_eq!(&a - s, &a - &c);
            prop_assert_eq!(s + &a, &a + s);
            prop_assert_eq!(s * &a, &a * s);
            prop_assert_eq!(s - &a, &c - &a);
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) over the integers
            let product = &a * &b;
            prop_assert_eq!(product.degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            // deg(a + b) <= max(deg(a), deg(b))
            let sum = &a + &b;
            prop_assert!(sum.degree() <= a.degree().max(b.degree()));
        }

        // Comparison

        #[test]
        fn poly_scalar_eq(s in small_coeff()) {
            let p = Polynomial::constant(s);
            prop_assert!(p == s);
            prop_assert!(s == p);
            prop_assert!(p != s + 1);
            prop_assert_eq!(p == 0i64, s == 0);
        }

        // Evaluation

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in -5i64..5i64) {
            // (a + b)(x) = a(x) + b(x)
            let sum = &a + &b;
            prop_assert_eq!(sum.evaluate(&x), a.evaluate(&x) + b.evaluate(&x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -5i64..5i64) {
            // (a * b)(x) = a(x) * b(x)
            let product = &a * &b;
            prop_assert_eq!(product.evaluate(&x), a.evaluate(&x) * b.evaluate(&x));
        }

        #[test]
        fn poly_eval_horner(a in small_poly(), x in -5i64..5i64) {
            prop_assert_eq!(a.evaluate(&x), a.evaluate_horner(&x));
        }

        // Iteration

        #[test]
        fn poly_iteration_roundtrip(a in small_poly()) {
            let rebuilt: Polynomial<i64> = a.ascending().copied().collect();
            prop_assert_eq!(&rebuilt, &a);

            let mut down: Vec<i64> = a.descending().copied().collect();
            down.reverse();
            prop_assert_eq!(&down[..], a.coeffs());
        }

        #[test]
        fn poly_display_tokens(a in small_poly()) {
            let rendered = a.to_string();
            let tokens: Vec<i64> = rendered
                .split(' ')
                .filter(|t| !t.is_empty())
                .map(|t| t.parse().unwrap())
                .collect();
            prop_assert_eq!(tokens, a.descending().copied().collect::<Vec<_>>());
            prop_assert_eq!(rendered.is_empty(), a.is_zero());
        }

        // Powers

        #[test]
        fn poly_pow_matches_repeated_mul(a in small_poly(), n in 0u32..5) {
            let mut expected = Polynomial::<i64>::one();
            for _ in 0..n {
                expected *= &a;
            }
            prop_assert_eq!(a.pow(n), expected);
        }

        // Karatsuba vs schoolbook equivalence

        #[test]
        fn karatsuba_matches_schoolbook(
            a_coeffs in proptest::collection::vec(-10i64..10i64, 1..=(3 * KARATSUBA_THRESHOLD)),
            b_coeffs in proptest::collection::vec(-10i64..10i64, 1..=(3 * KARATSUBA_THRESHOLD))
        ) {
            let a = Polynomial::new(a_coeffs);
            let b = Polynomial::new(b_coeffs);
            prop_assert_eq!(a.mul_karatsuba(&b), &a * &b);
        }
    }
}
