//! Roster error taxonomy

use thiserror::Error;

/// Errors raised while loading or selecting from a creature sheet
///
/// `Read` and `Parse` surface a failed data load to the caller as a
/// non-recoverable startup error; no retry policy is applied here.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The sheet file could not be read
    #[error("failed to read creature sheet: {0}")]
    Read(#[from] std::io::Error),

    /// The sheet was not valid JSON of the expected shape
    #[error("failed to parse creature sheet: {0}")]
    Parse(#[from] serde_json::Error),

    /// A selection index pointed past the end of the sheet
    #[error("no creature at index {0}")]
    NoSuchCreature(usize),
}
