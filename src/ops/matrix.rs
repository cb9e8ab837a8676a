//! 2D column-major matrix operations: extremum reductions and in-place clamps.
//!
//! Layout: `index = col * rows + row`, the row index varies fastest. The
//! slice length must equal `rows * cols`; the extremum scans additionally
//! require a non-empty matrix (element 0 seeds the result).

use crate::traits::Element;

/// Maximum over a column-major matrix, seeded with element 0.
#[inline(always)]
pub fn max<E: Element>(matrix: &[E], rows: usize, cols: usize) -> E {
    assert_eq!(matrix.len(), rows * cols);
    let mut result = matrix[0];
    for col in 0..cols {
        for row in 0..rows {
            let v = matrix[col * rows + row];
            if v > result {
                result = v;
            }
        }
    }
    result
}

/// Minimum over a column-major matrix, seeded with element 0.
#[inline(always)]
pub fn min<E: Element>(matrix: &[E], rows: usize, cols: usize) -> E {
    assert_eq!(matrix.len(), rows * cols);
    let mut result = matrix[0];
    for col in 0..cols {
        for row in 0..rows {
            let v = matrix[col * rows + row];
            if v < result {
                result = v;
            }
        }
    }
    result
}

/// Raise every element below `floor` to `floor`, in place.
#[inline(always)]
pub fn clamp_floor<E: Element>(array: &mut [E], rows: usize, cols: usize, floor: E) {
    assert_eq!(array.len(), rows * cols);
    for col in 0..cols {
        for row in 0..rows {
            let index = col * rows + row;
            if array[index] < floor {
                array[index] = floor;
            }
        }
    }
}

/// Lower every element above `ceil` to `ceil`, in place.
#[inline(always)]
pub fn clamp_ceil<E: Element>(array: &mut [E], rows: usize, cols: usize, ceil: E) {
    assert_eq!(array.len(), rows * cols);
    for col in 0..cols {
        for row in 0..rows {
            let index = col * rows + row;
            if array[index] > ceil {
                array[index] = ceil;
            }
        }
    }
}
