//! Ortho Core - exact weighted Gram-Schmidt over inverse-monomials
//!
//! This crate orthonormalizes the seed family `phi_i(t) = t^(1/(i+1))`
//! under the inner product `<f, g> = ∫_0^L f(t) g(t) / t dt`, entirely in
//! exact arithmetic:
//! - [`seed`]: the seed functions
//! - [`inner_product`]: closed-form power-rule integration
//! - [`gram_schmidt`]: the sequential orthonormalizer
//! - [`coefficients`]: `alpha_j` and the integer coefficients `a_{j,i}`
//! - [`verify`]: the `N x N` orthogonality matrix
//! - [`sampling`]: f64 samples for plotting
//!
//! # Examples
//!
//! ```
//! use ortho_core::{OrthoConfig, OrthogonalFunctions};
//! use num_bigint::BigInt;
//!
//! let family = OrthogonalFunctions::new(OrthoConfig::default().with_num_func(3)).unwrap();
//!
//! let row = &family.coefficients().rows()[2];
//! assert_eq!(row.alpha_text(), "+sqrt(2/4)");
//! let expected: Vec<BigInt> = [20, -40, 21].into_iter().map(BigInt::from).collect();
//! assert_eq!(row.coefficients(), expected.as_slice());
//!
//! assert!(family.check().unwrap().all_orthonormal);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod basis;
pub mod coefficients;
pub mod config;
pub mod error;
pub mod functions;
pub mod gram_schmidt;
pub mod inner_product;
pub mod interval;
pub mod sampling;
pub mod seed;
pub mod verify;

pub use basis::OrthonormalBasis;
pub use coefficients::{CoefficientRow, CoefficientTable, extract_coefficients, predicted_alpha};
pub use config::{DEFAULT_NUM_FUNC, DEFAULT_START_INDEX, OrthoConfig};
pub use error::{OrthoError, OrthoResult};
pub use functions::OrthogonalFunctions;
pub use gram_schmidt::{GramSchmidt, orthonormalize};
pub use inner_product::{inner_product, inner_product_scaled};
pub use interval::Interval;
pub use sampling::{SampleGrid, SampledFunction, sample_functions};
pub use seed::seed_function;
pub use verify::{InnerProductClass, OrthogonalityMatrix, OrthogonalityReport, verify_orthonormality};
