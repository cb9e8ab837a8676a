use thiserror::Error;

/// Errors produced by extent validation.
///
/// The kernels themselves never return these: extents that disagree with
/// the true buffer are a caller contract at the raw surface. Marshaling
/// harnesses run [`crate::validation`] before crossing it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtentError {
    #[error("extent {extent} disagrees with buffer length {len}")]
    LengthMismatch { extent: usize, len: usize },
    #[error("matrix extents {rows}x{cols} overflow usize")]
    ExtentOverflow { rows: usize, cols: usize },
    #[error("extremum scan requires a non-empty buffer")]
    EmptyBuffer,
}
