// error.rs - Error types for the table generator.
//
// Fatal conditions only: data-consistency findings are reported through
// `log::warn!` at the point of discovery and generation proceeds, because
// aborting a whole table build over one bad source row is worse than
// flagging it for data curation.

use std::fmt;

/// Error type for table generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A table's value range does not fit any supported fixed-width
    /// integer type (at most 32 bits, signed or unsigned).
    RangeExceeded {
        /// Name of the offending table.
        table: String,
        /// Smallest value in the table.
        min: i64,
        /// Largest value in the table.
        max: i64,
    },
    /// A symbolic name is not present in the supplied enumerations.
    UnknownName { kind: &'static str, name: String },
    /// A tag id does not fit the fixed-width bitmap for its catalog.
    BitmapOverflow {
        kind: &'static str,
        id: u16,
        words: usize,
    },
    /// A case delta points outside the codepoint domain.
    CaseDeltaOutOfRange { codepoint: u32, delta: i32 },
    /// An output resource could not be created or written.
    Resource { name: String, message: String },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::RangeExceeded { table, min, max } => write!(
                f,
                "values in `{}` ({}..={}) do not fit any 8/16/32-bit integer type",
                table, min, max
            ),
            GenError::UnknownName { kind, name } => {
                write!(f, "undeclared {} name: `{}`", kind, name)
            }
            GenError::BitmapOverflow { kind, id, words } => write!(
                f,
                "{} id {} does not fit a {}-word bitmap",
                kind, id, words
            ),
            GenError::CaseDeltaOutOfRange { codepoint, delta } => write!(
                f,
                "case delta {} at {:#06x} points outside the codepoint domain",
                delta, codepoint
            ),
            GenError::Resource { name, message } => {
                write!(f, "cannot write `{}`: {}", name, message)
            }
        }
    }
}

impl std::error::Error for GenError {}
