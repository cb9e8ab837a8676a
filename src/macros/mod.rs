//! # Kernel Macro Architecture
//!
//! Single expansion layer:
//!
//! ## `expand_elem_impls!` (src/macros/expand.rs)
//! Takes a module name and a concrete element type and generates the
//! monomorphic per-type module around the generic operations in
//! [`crate::ops`]: `expand_elem_impls!(i32_ops, i32)`.
//!
//! [`crate::kernels`] invokes it once per supported element type; the
//! `series-ffi` member crate then exports each module's functions as
//! `extern "C"` symbols.

#[macro_use]
pub mod expand;
