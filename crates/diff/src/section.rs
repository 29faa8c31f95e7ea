use derive_more::Display;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::line_store::Side;

/// Represents the state of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SectionState {
    /// Every line of the section is linked to the other side
    #[display(fmt = "Same")]
    Same,

    /// No line of the section is linked, and the section is on the left
    #[display(fmt = "LeftOnly")]
    LeftOnly,

    /// No line of the section is linked, and the section is on the right
    #[display(fmt = "RightOnly")]
    RightOnly,
}

impl SectionState {
    /// The unmatched state for sections on the given side
    pub fn unmatched(side: Side) -> Self {
        match side {
            Side::Left => SectionState::LeftOnly,
            Side::Right => SectionState::RightOnly,
        }
    }

    /// Check if this is a changed (unmatched) state
    pub fn is_changed(&self) -> bool {
        *self != SectionState::Same
    }
}

/// A range of lines within one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineRange {
    /// The starting line (0-based)
    pub start: usize,

    /// The number of lines
    pub count: usize,
}

impl LineRange {
    /// Create a new range from start and count
    pub fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// Convert to a standard Range
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Get the end of the range (exclusive)
    pub fn end(&self) -> usize {
        self.start + self.count
    }

    /// Check if this range is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if this range contains the given line
    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.end()
    }
}

/// A maximal contiguous run of lines on one side that are either all
/// linked (and consecutively so) or all unlinked.
///
/// `link` and `correspond` are indices into the other side's section list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Section {
    /// Whether the section is matched or only present on one side
    pub state: SectionState,

    /// The lines covered by this section, never empty
    pub range: LineRange,

    /// The linked section on the other side
    pub link: Option<usize>,

    /// Positional counterpart on the other side for unlinked changed sections.
    /// Equal to the other side's section count when the section falls after
    /// its last section.
    pub correspond: Option<usize>,
}

impl Section {
    /// Create a new section over the inclusive line span `first..=last`
    pub fn new(state: SectionState, first_line: usize, last_line: usize) -> Self {
        debug_assert!(first_line <= last_line);
        Self {
            state,
            range: LineRange::new(first_line, last_line - first_line + 1),
            link: None,
            correspond: None,
        }
    }

    /// First line of the section
    pub fn first_line(&self) -> usize {
        self.range.start
    }

    /// Last line of the section (inclusive)
    pub fn last_line(&self) -> usize {
        self.range.end() - 1
    }

    /// Number of lines in the section
    pub fn len(&self) -> usize {
        self.range.count
    }

    /// Sections always hold at least one line
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Check if this section contains the given line
    pub fn contains(&self, line: usize) -> bool {
        self.range.contains(line)
    }

    /// Check if this section is changed (not matched)
    pub fn is_changed(&self) -> bool {
        self.state.is_changed()
    }

    /// Check if this section has neither a link nor a correspondence
    pub fn is_unpaired(&self) -> bool {
        self.link.is_none() && self.correspond.is_none()
    }
}

/// Find the index of the section containing `line` in an ordered section list
pub fn section_index(sections: &[Section], line: usize) -> Option<usize> {
    let index = sections.partition_point(|s| s.last_line() < line);
    sections
        .get(index)
        .filter(|s| s.contains(line))
        .map(|_| index)
}
