use half::{bf16, f16};

use crate::kernels::{bf16_ops, f16_ops, f32_ops, f64_ops, i32_ops, i8_ops, u8_ops, usize_ops};
use crate::validation::{validate_matrix_extents, validate_series_extent};
use crate::ExtentError;

// ============================================================================
// 1D reductions
// ============================================================================

#[test]
fn test_prod_f64() {
    assert_eq!(f64_ops::prod(&[1.0, 2.0, 3.0, 4.0]), 24.0);
}

#[test]
fn test_prod_i32() {
    assert_eq!(i32_ops::prod(&[1, 2, 3, 4]), 24);
}

#[test]
fn test_prod_empty_is_one() {
    assert_eq!(i32_ops::prod(&[]), 1);
    assert_eq!(f32_ops::prod(&[]), 1.0);
}

#[test]
fn test_sum_f64() {
    assert_eq!(f64_ops::sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
}

#[test]
fn test_sum_i8() {
    assert_eq!(i8_ops::sum(&[1, 2, 3, 4]), 10);
}

#[test]
fn test_sum_empty_is_zero() {
    assert_eq!(u8_ops::sum(&[]), 0);
}

// ============================================================================
// 1D in-place fills
// ============================================================================

#[test]
fn test_ones_then_sum_equals_len() {
    let mut buf = vec![0_i32; 7];
    i32_ops::ones(&mut buf);
    assert_eq!(buf, vec![1; 7]);
    assert_eq!(i32_ops::sum(&buf), 7);
}

#[test]
fn test_zeros_then_sum_is_zero() {
    let mut buf = vec![3.5_f32; 5];
    f32_ops::zeros(&mut buf);
    assert_eq!(buf, vec![0.0; 5]);
    assert_eq!(f32_ops::sum(&buf), 0.0);
}

#[test]
fn test_fills_on_empty_buffer() {
    let mut buf: Vec<u8> = Vec::new();
    u8_ops::ones(&mut buf);
    u8_ops::zeros(&mut buf);
    assert!(buf.is_empty());
}

// ============================================================================
// 2D extremum scans (column-major)
// ============================================================================

// 3x2 matrix [[1,4],[7,2],[5,3]], column-major: col0 = 1,7,5; col1 = 4,2,3.
const MAT_3X2: [i32; 6] = [1, 7, 5, 4, 2, 3];

#[test]
fn test_max_3x2() {
    assert_eq!(i32_ops::max(&MAT_3X2, 3, 2), 7);
}

#[test]
fn test_min_3x2() {
    assert_eq!(i32_ops::min(&MAT_3X2, 3, 2), 1);
}

#[test]
fn test_max_seeds_from_element_zero() {
    // Single element: the seed is the answer.
    assert_eq!(f64_ops::max(&[-3.0], 1, 1), -3.0);
    assert_eq!(f64_ops::min(&[-3.0], 1, 1), -3.0);
}

#[test]
#[should_panic]
fn test_max_extent_mismatch_panics() {
    let _ = i32_ops::max(&MAT_3X2, 2, 2);
}

// ============================================================================
// 2D in-place clamps
// ============================================================================

#[test]
fn test_clamp_floor_3x2() {
    let mut m = MAT_3X2;
    i32_ops::clamp_floor(&mut m, 3, 2, 4);
    assert_eq!(m, [4, 7, 5, 4, 4, 4]);
}

#[test]
fn test_clamp_ceil_3x2() {
    let mut m = MAT_3X2;
    i32_ops::clamp_ceil(&mut m, 3, 2, 4);
    assert_eq!(m, [1, 4, 4, 4, 2, 3]);
}

#[test]
fn test_clamp_idempotent() {
    let mut once = MAT_3X2;
    i32_ops::clamp_floor(&mut once, 3, 2, 4);
    let mut twice = once;
    i32_ops::clamp_floor(&mut twice, 3, 2, 4);
    assert_eq!(once, twice);

    let mut once = MAT_3X2;
    i32_ops::clamp_ceil(&mut once, 3, 2, 4);
    let mut twice = once;
    i32_ops::clamp_ceil(&mut twice, 3, 2, 4);
    assert_eq!(once, twice);
}

// ============================================================================
// Reduced-precision instantiations
// ============================================================================

#[test]
fn test_prod_f16() {
    let series: Vec<f16> = [1.0, 2.0, 3.0, 4.0].map(f16::from_f32).to_vec();
    assert_eq!(f16_ops::prod(&series), f16::from_f32(24.0));
}

#[test]
fn test_sum_bf16() {
    let series: Vec<bf16> = [1.0, 2.0, 3.0, 4.0].map(bf16::from_f32).to_vec();
    assert_eq!(bf16_ops::sum(&series), bf16::from_f32(10.0));
}

#[test]
fn test_clamp_floor_f16() {
    let mut m: Vec<f16> = [1.0, 7.0, 5.0, 4.0, 2.0, 3.0].map(f16::from_f32).to_vec();
    f16_ops::clamp_floor(&mut m, 3, 2, f16::from_f32(4.0));
    let expected: Vec<f16> = [4.0, 7.0, 5.0, 4.0, 4.0, 4.0].map(f16::from_f32).to_vec();
    assert_eq!(m, expected);
}

// ============================================================================
// usize instantiation (pointer-width integers)
// ============================================================================

#[test]
fn test_usize_ops() {
    assert_eq!(usize_ops::prod(&[2, 3, 4]), 24);
    assert_eq!(usize_ops::max(&[1, 7, 5, 4, 2, 3], 3, 2), 7);
}

// ============================================================================
// Extent validation
// ============================================================================

#[test]
fn test_validate_series_extent() {
    assert_eq!(validate_series_extent(4, 4), Ok(()));
    assert_eq!(
        validate_series_extent(5, 4),
        Err(ExtentError::LengthMismatch { extent: 5, len: 4 })
    );
}

#[test]
fn test_validate_matrix_extents() {
    assert_eq!(validate_matrix_extents(3, 2, 6), Ok(()));
    assert_eq!(
        validate_matrix_extents(3, 3, 6),
        Err(ExtentError::LengthMismatch { extent: 9, len: 6 })
    );
    assert_eq!(
        validate_matrix_extents(usize::MAX, 2, 6),
        Err(ExtentError::ExtentOverflow {
            rows: usize::MAX,
            cols: 2
        })
    );
    assert_eq!(
        validate_matrix_extents(0, 0, 0),
        Err(ExtentError::EmptyBuffer)
    );
}
