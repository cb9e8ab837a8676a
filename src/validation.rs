//! Extent validation for callers crossing the unchecked FFI surface.
//!
//! The kernels never validate: extents that disagree with the true buffer
//! extent are undefined behavior at the raw-pointer surface. A marshaling
//! harness that builds those calls can run these checks on the Rust side
//! first. Overflow checks use `checked_mul`.

use crate::error::ExtentError;

/// Validate a 1D extent against the buffer it describes.
#[inline]
pub fn validate_series_extent(size: usize, len: usize) -> Result<(), ExtentError> {
    if size != len {
        log::warn!("series extent {size} disagrees with buffer length {len}");
        return Err(ExtentError::LengthMismatch { extent: size, len });
    }
    Ok(())
}

/// Validate 2D extents against the buffer they describe.
///
/// Rejects `rows * cols` overflow and empty matrices; the extremum scans
/// seed from element 0 and have no defined result on an empty buffer.
#[inline]
pub fn validate_matrix_extents(rows: usize, cols: usize, len: usize) -> Result<(), ExtentError> {
    let extent = rows
        .checked_mul(cols)
        .ok_or(ExtentError::ExtentOverflow { rows, cols })?;
    if extent != len {
        log::warn!("matrix extents {rows}x{cols} disagree with buffer length {len}");
        return Err(ExtentError::LengthMismatch { extent, len });
    }
    if len == 0 {
        return Err(ExtentError::EmptyBuffer);
    }
    Ok(())
}
