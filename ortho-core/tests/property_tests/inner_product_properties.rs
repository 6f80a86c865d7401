//! Property-based tests for the weighted inner product

use num_bigint::BigInt;
use num_rational::BigRational;
use ortho_core::{Interval, inner_product, seed_function};
use proptest::prelude::*;

proptest! {
    /// <phi_i, phi_j> on [0, 1] is 1 / (1/(i+1) + 1/(j+1))
    #[test]
    fn seed_gram_entries(i in 0usize..20, j in 0usize..20) {
        let value = inner_product(&seed_function(i), &seed_function(j), &Interval::unit()).unwrap();
        let a = BigRational::new(BigInt::from(1), BigInt::from(i + 1));
        let b = BigRational::new(BigInt::from(1), BigInt::from(j + 1));
        prop_assert_eq!(value, (a + b).recip());
    }

    /// The inner product is symmetric
    #[test]
    fn symmetric(i in 0usize..10, j in 0usize..10, k in 0usize..10) {
        let f = &seed_function(i) + &seed_function(k);
        let g = seed_function(j);
        let unit = Interval::unit();
        prop_assert_eq!(
            inner_product(&f, &g, &unit).unwrap(),
            inner_product(&g, &f, &unit).unwrap()
        );
    }
}
