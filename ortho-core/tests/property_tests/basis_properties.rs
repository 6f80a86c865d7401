//! Property-based tests for the orthonormal family
//!
//! Sizes are kept small since cost grows quickly with N.

use num_bigint::BigInt;
use num_rational::BigRational;
use ortho_core::{
    OrthoConfig, OrthogonalFunctions, inner_product_scaled, predicted_alpha,
};
use proptest::prelude::*;

fn config() -> impl Strategy<Value = OrthoConfig> {
    (1usize..5, 0usize..6, 1i64..20).prop_map(|(n, s, l)| {
        OrthoConfig::new(n, s, BigRational::from_integer(BigInt::from(l)))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Every pairwise inner product is exactly 0 or 1
    #[test]
    fn family_is_orthonormal(config in config()) {
        let family = OrthogonalFunctions::new(config).unwrap();
        let basis = family.functions();
        for (i, f) in basis.functions().iter().enumerate() {
            for (j, g) in basis.functions().iter().enumerate() {
                let value = inner_product_scaled(f, g, basis.working_interval()).unwrap();
                if i == j {
                    prop_assert!(value.is_one());
                } else {
                    prop_assert!(value.is_zero());
                }
            }
        }
        prop_assert!(family.check().unwrap().all_orthonormal);
    }

    /// alpha alternates in sign and matches the closed form
    #[test]
    fn alpha_follows_closed_form(config in config()) {
        let start = config.start_index;
        let family = OrthogonalFunctions::new(config).unwrap();
        for row in family.coefficients() {
            let j = row.position();
            prop_assert_eq!(row.alpha(), &predicted_alpha(j, start));
            prop_assert_eq!(row.alpha().is_negative(), j % 2 == 1);
            prop_assert_eq!(row.coefficients().len(), j + 1);
        }
    }

    /// alpha * sum a_i phi_i reproduces each function
    #[test]
    fn coefficients_round_trip(config in config()) {
        let family = OrthogonalFunctions::new(config).unwrap();
        let rows = family.coefficients().rows();
        for (row, f) in rows.iter().zip(family.functions().functions()) {
            prop_assert!(row.reconstruct().same_function(f));
        }
    }

    /// The interval end only rescales the variable
    #[test]
    fn interval_end_does_not_change_coefficients(config in config()) {
        let unit = config.clone().with_end_interval(BigRational::from_integer(BigInt::from(1)));
        let a = OrthogonalFunctions::new(config).unwrap();
        let b = OrthogonalFunctions::new(unit).unwrap();
        prop_assert_eq!(a.coefficients(), b.coefficients());
    }
}
