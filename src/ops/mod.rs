//! Canonical generic implementations of the operation set.
//!
//! One implementation per operation, generic over [`crate::traits::Element`].
//! The per-type surfaces in [`crate::kernels`] and the `series-ffi` exports
//! are monomorphic wrappers around these.

pub mod matrix;
pub mod series;
