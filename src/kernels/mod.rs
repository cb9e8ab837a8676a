//! Per-type instantiations of the operation set.
//!
//! One module per supported element type, generated by
//! [`expand_elem_impls!`](crate::expand_elem_impls). These are the concrete
//! surfaces a wrapper layer marshals against; `series-ffi` exports each of
//! them by symbol name.

crate::expand_elem_impls!(i8_ops, i8);
crate::expand_elem_impls!(u8_ops, u8);
crate::expand_elem_impls!(i16_ops, i16);
crate::expand_elem_impls!(u16_ops, u16);
crate::expand_elem_impls!(i32_ops, i32);
crate::expand_elem_impls!(u32_ops, u32);
crate::expand_elem_impls!(i64_ops, i64);
crate::expand_elem_impls!(u64_ops, u64);
crate::expand_elem_impls!(isize_ops, isize);
crate::expand_elem_impls!(usize_ops, usize);
crate::expand_elem_impls!(f32_ops, f32);
crate::expand_elem_impls!(f64_ops, f64);
crate::expand_elem_impls!(f16_ops, f16);
crate::expand_elem_impls!(bf16_ops, bf16);
