//! series-kernels: numeric array/matrix test kernels for binding generators.
//!
//! A fixture for exercising a wrapper layer's array marshaling:
//! - **Eight operations**: `prod`, `ones`, `max`, `clamp_floor`, `sum`,
//!   `zeros`, `min`, `clamp_ceil` — single-pass scans and in-place fills
//! - **Fourteen element types**: `i8` through `f64` plus `half::f16`/`bf16`
//! - **Monomorphic per-type modules**: generated by `expand_elem_impls!`
//! - **Raw `extern "C"` surface**: the `series-ffi` member crate exports
//!   every instantiation by symbol name, in both data-first and data-last
//!   argument orderings
//!
//! # Quick Start
//!
//! ```
//! use series_kernels::kernels::f64_ops;
//!
//! assert_eq!(f64_ops::prod(&[1.0, 2.0, 3.0, 4.0]), 24.0);
//! assert_eq!(f64_ops::sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
//! ```

pub mod error;
pub mod kernels;
#[macro_use]
pub mod macros;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::ExtentError;
pub use traits::Element;
pub use validation::{validate_matrix_extents, validate_series_extent};

#[cfg(test)]
mod tests;
