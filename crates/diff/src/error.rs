use derive_more::Display;

use crate::line_store::Side;

/// Errors returned by index-taking accessors
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AlignError {
    /// A line index past the end of its side
    #[display(fmt = "{} line {} is out of range ({} lines)", side, index, count)]
    OutOfRange {
        side: Side,
        index: usize,
        count: usize,
    },
}

impl std::error::Error for AlignError {}
