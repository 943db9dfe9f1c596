// src/lib.rs
//
// Numerics helpers for the scattering simulator: element-wise arithmetic on flattened
// 3D complex arrays, 3-vector / 3x3 helpers, real 2D buffer helpers and closed-form
// plane-wave integrals.

pub mod complex;
pub mod config;
pub mod elementwise;
pub mod error;
pub mod field;
pub mod integral;
pub mod real2d;
pub mod shape;
pub mod vec3;

/// Real scalar type (`f32` with the `single-precision` feature).
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;
#[cfg(feature = "single-precision")]
pub type Real = f32;

pub type Complex = rustfft::num_complex::Complex<Real>;

/// Three reals; three of them side by side are the rows of a 3x3 matrix.
pub type Vector3 = [Real; 3];

pub use config::NumericsConfig;
pub use error::{NumResult, NumericsError};
pub use field::ComplexField3D;
pub use shape::Shape3;
