/// Exports the eight-operation `extern "C"` surface for one element type.
///
/// `$elem` is the concrete element type, `$sname` the symbol-name stem
/// (also the per-type module prefix in `series_kernels::kernels`).
/// Prod/ones/max/floor lead with the buffer pointer; sum/zeros/min/ceil
/// take it last.
macro_rules! export_series_abi {
    ($elem:ty, $sname:ident) => {
        paste::paste! {
            /// Multiplicative reduction over `series[0..size]`, seeded at 1.
            #[no_mangle]
            #[inline(never)]
            pub extern "C" fn [<$sname _prod>](series: *const $elem, size: usize) -> $elem {
                let series = unsafe { std::slice::from_raw_parts(series, size) };
                series_kernels::kernels::[<$sname _ops>]::prod(series)
            }

            /// Overwrite `array[0..size]` with 1.
            #[no_mangle]
            #[inline(never)]
            pub extern "C" fn [<$sname _ones>](array: *mut $elem, size: usize) {
                let array = unsafe { std::slice::from_raw_parts_mut(array, size) };
                series_kernels::kernels::[<$sname _ops>]::ones(array);
            }

            /// Maximum over a column-major `rows x cols` matrix.
            #[no_mangle]
            #[inline(never)]
            pub extern "C" fn [<$sname _max>](matrix: *const $elem, rows: usize, cols: usize) -> $elem {
                let matrix = unsafe { std::slice::from_raw_parts(matrix, rows * cols) };
                series_kernels::kernels::[<$sname _ops>]::max(matrix, rows, cols)
            }

            /// Raise every element below `floor` to `floor`, in place.
            #[no_mangle]
            #[inline(never)]
            pub extern "C" fn [<$sname _floor>](array: *mut $elem, rows: usize, cols: usize, floor: $elem) {
                let array = unsafe { std::slice::from_raw_parts_mut(array, rows * cols) };
                series_kernels::kernels::[<$sname _ops>]::clamp_floor(array, rows, cols, floor);
            }

            /// Additive reduction over `series[0..size]`, seeded at 0. Data last.
            #[no_mangle]
            #[inline(never)]
            pub extern "C" fn [<$sname _sum>](size: usize, series: *const $elem) -> $elem {
                let series = unsafe { std::slice::from_raw_parts(series, size) };
                series_kernels::kernels::[<$sname _ops>]::sum(series)
            }

            /// Overwrite `array[0..size]` with 0. Data last.
            #[no_mangle]
            #[inline(never)]
            pub extern "C" fn [<$sname _zeros>](size: usize, array: *mut $elem) {
                let array = unsafe { std::slice::from_raw_parts_mut(array, size) };
                series_kernels::kernels::[<$sname _ops>]::zeros(array);
            }

            /// Minimum over a column-major `rows x cols` matrix. Data last.
            #[no_mangle]
            #[inline(never)]
            pub extern "C" fn [<$sname _min>](rows: usize, cols: usize, matrix: *const $elem) -> $elem {
                let matrix = unsafe { std::slice::from_raw_parts(matrix, rows * cols) };
                series_kernels::kernels::[<$sname _ops>]::min(matrix, rows, cols)
            }

            /// Lower every element above `ceil` to `ceil`, in place. Data last.
            #[no_mangle]
            #[inline(never)]
            pub extern "C" fn [<$sname _ceil>](rows: usize, cols: usize, array: *mut $elem, ceil: $elem) {
                let array = unsafe { std::slice::from_raw_parts_mut(array, rows * cols) };
                series_kernels::kernels::[<$sname _ops>]::clamp_ceil(array, rows, cols, ceil);
            }
        }
    };
}
