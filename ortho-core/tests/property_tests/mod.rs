//! Property-based tests for ortho-core
//!
//! Orthonormality, coefficient integrality and round-trip reconstruction
//! over randomly chosen configurations.

mod basis_properties;
mod inner_product_properties;
