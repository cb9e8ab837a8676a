//! series-ffi: `extern "C"` surface over the series kernels.
//!
//! Every (element type, operation) instantiation is exported as a
//! `#[no_mangle] pub extern "C"` symbol so a binding generator, or the
//! wrapper layer it produces, can locate it by name. Per type the surface
//! covers:
//!
//! * 1D input arrays                 — `<sname>_prod(series, size)`
//! * 1D in-place arrays              — `<sname>_ones(array, size)`
//! * 2D input arrays                 — `<sname>_max(matrix, rows, cols)`
//! * 2D in-place arrays              — `<sname>_floor(array, rows, cols, floor)`
//! * 1D input arrays, data last      — `<sname>_sum(size, series)`
//! * 1D in-place arrays, data last   — `<sname>_zeros(size, array)`
//! * 2D input arrays, data last      — `<sname>_min(rows, cols, matrix)`
//! * 2D in-place arrays, data last   — `<sname>_ceil(rows, cols, array, ceil)`
//!
//! The data-last orderings exist purely to exercise the wrapper's handling
//! of argument order; behavior is otherwise identical.
//!
//! No validation happens at this surface: extents that disagree with the
//! true buffer extent are undefined behavior, a caller contract. Matrices
//! are column-major (`index = col * rows + row`).

#[macro_use]
mod expand;

export_series_abi!(i8, i8);
export_series_abi!(u8, u8);
export_series_abi!(i16, i16);
export_series_abi!(u16, u16);
export_series_abi!(i32, i32);
export_series_abi!(u32, u32);
export_series_abi!(i64, i64);
export_series_abi!(u64, u64);
export_series_abi!(isize, isize);
export_series_abi!(usize, usize);
export_series_abi!(f32, f32);
export_series_abi!(f64, f64);
export_series_abi!(half::f16, f16);
export_series_abi!(half::bf16, bf16);
