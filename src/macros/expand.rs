/// Expands the full operation set for one concrete element type.
///
/// Takes a module name and an element type, and generates a module
/// containing a monomorphic wrapper per operation, delegating to the
/// generic implementations in [`crate::ops`]. Binding harnesses get a
/// flat, concrete surface per type without touching generics.
#[macro_export]
macro_rules! expand_elem_impls {
    ($module_name:ident, $elem:ty) => {
        pub mod $module_name {
            #[allow(unused_imports)]
            use half::{bf16, f16};

            /// Multiplicative reduction over the sequence, seeded at 1.
            #[inline(always)]
            pub fn prod(series: &[$elem]) -> $elem {
                $crate::ops::series::prod(series)
            }

            /// Additive reduction over the sequence, seeded at 0.
            #[inline(always)]
            pub fn sum(series: &[$elem]) -> $elem {
                $crate::ops::series::sum(series)
            }

            /// Overwrite every element with 1.
            #[inline(always)]
            pub fn ones(array: &mut [$elem]) {
                $crate::ops::series::ones(array)
            }

            /// Overwrite every element with 0.
            #[inline(always)]
            pub fn zeros(array: &mut [$elem]) {
                $crate::ops::series::zeros(array)
            }

            /// Maximum over a column-major `rows x cols` matrix.
            #[inline(always)]
            pub fn max(matrix: &[$elem], rows: usize, cols: usize) -> $elem {
                $crate::ops::matrix::max(matrix, rows, cols)
            }

            /// Minimum over a column-major `rows x cols` matrix.
            #[inline(always)]
            pub fn min(matrix: &[$elem], rows: usize, cols: usize) -> $elem {
                $crate::ops::matrix::min(matrix, rows, cols)
            }

            /// Raise every element below `floor` to `floor`, in place.
            #[inline(always)]
            pub fn clamp_floor(array: &mut [$elem], rows: usize, cols: usize, floor: $elem) {
                $crate::ops::matrix::clamp_floor(array, rows, cols, floor)
            }

            /// Lower every element above `ceil` to `ceil`, in place.
            #[inline(always)]
            pub fn clamp_ceil(array: &mut [$elem], rows: usize, cols: usize, ceil: $elem) {
                $crate::ops::matrix::clamp_ceil(array, rows, cols, ceil)
            }
        }
    };
}
