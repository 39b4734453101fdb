use std::fmt;
use std::io;

use thiserror::Error;

/// Failure modes of the formatting and dumping calls.
///
/// Truncation is deliberately absent: an over-long header or message is
/// reported through the logical length, not as an error, and an unknown
/// header directive is not an error at all. Both policies keep diagnostic
/// output degrading gracefully instead of disappearing.
#[derive(Debug, Error)]
pub enum DebugError {
    /// A header directive or the user message failed to render.
    #[error("failed to render debug text: {0}")]
    Encoding(#[from] fmt::Error),

    /// The output sink rejected a write. No retry is attempted.
    #[error("failed to write to debug sink: {0}")]
    Output(#[from] io::Error),
}
