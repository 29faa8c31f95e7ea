// Line alignment library for sectiondiff
// This crate links the identical lines of two texts and groups both sides into
// matched and changed sections that views can colour, scroll and navigate.

mod anchor;
mod correlate;
mod error;
mod line_store;
mod navigate;
mod options;
mod partition;
mod section;
mod section_diff;
mod text_diff;
mod unique_index;

pub use anchor::{expand_anchor, match_range};
pub use correlate::correlate;
pub use error::AlignError;
pub use line_store::{Line, LineStore, Side};
pub use navigate::LineKind;
pub use options::CompareOptions;
pub use partition::partition;
pub use section::{section_index, LineRange, Section, SectionState};
pub use section_diff::{CompareState, SectionDiff, SectionDiffSnapshot};
pub use text_diff::TextDiff;
pub use unique_index::{Lookup, UniqueIndex};
