//! Read-only queries over a compared document, for views that colour lines,
//! scroll both sides together and jump between changes.

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AlignError;
use crate::line_store::Side;
use crate::section::section_index;
use crate::section_diff::SectionDiff;

/// How a line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineKind {
    /// The line is linked to an identical line on the other side
    #[display(fmt = "Identical")]
    Identical,

    /// The line is unlinked but its section is paired with a changed section
    /// on the other side
    #[display(fmt = "Different")]
    Different,

    /// The line only exists on the left
    #[display(fmt = "LeftOnly")]
    LeftOnly,

    /// The line only exists on the right
    #[display(fmt = "RightOnly")]
    RightOnly,
}

impl SectionDiff {
    /// Index of the section containing `line`
    pub fn section_at(&self, side: Side, line: usize) -> Option<usize> {
        section_index(self.sections(side), line)
    }

    /// Classify a line for display
    pub fn line_kind(&self, side: Side, line: usize) -> Result<LineKind, AlignError> {
        if self.line(side, line)?.is_linked() {
            return Ok(LineKind::Identical);
        }

        let paired = self
            .section_at(side, line)
            .and_then(|index| self.sections(side)[index].link)
            .is_some();
        Ok(match (paired, side) {
            (true, _) => LineKind::Different,
            (false, Side::Left) => LineKind::LeftOnly,
            (false, Side::Right) => LineKind::RightOnly,
        })
    }

    /// The line on the other side to keep level with `line` when scrolling.
    ///
    /// Linked lines map to their link. An unlinked line maps to the line
    /// after the other-side counterpart of the preceding section, and has no
    /// counterpart when it sits in the first section.
    pub fn counterpart_line(&self, side: Side, line: usize) -> Result<Option<usize>, AlignError> {
        if let Some(link) = self.line(side, line)?.link {
            return Ok(Some(link));
        }

        let Some(index) = self.section_at(side, line).filter(|&index| index > 0) else {
            return Ok(None);
        };
        let previous = &self.sections(side)[index - 1];
        let Some(other) = previous.link.or(previous.correspond) else {
            return Ok(None);
        };

        let other_side = side.other();
        Ok(Some(match self.sections(other_side).get(other) {
            Some(section) => section.last_line() + 1,
            None => self.line_count(other_side),
        }))
    }

    /// First line of the next changed section after the one holding `from_line`
    pub fn next_change(&self, side: Side, from_line: usize) -> Option<usize> {
        let sections = self.sections(side);
        // sections cover every line, so a miss means `from_line` is past the end
        let start = self
            .section_at(side, from_line)
            .map_or(sections.len(), |index| index + 1);

        sections[start..]
            .iter()
            .find(|s| s.is_changed())
            .map(|s| s.first_line())
    }

    /// First line of the previous changed section before the one holding
    /// `from_line`
    pub fn previous_change(&self, side: Side, from_line: usize) -> Option<usize> {
        let sections = self.sections(side);
        let end = self.section_at(side, from_line).unwrap_or(sections.len());

        sections[..end]
            .iter()
            .rev()
            .find(|s| s.is_changed())
            .map(|s| s.first_line())
    }

    /// Indices of the unlinked lines of a side
    pub fn changed_lines(&self, side: Side) -> Vec<usize> {
        self.lines(side)
            .enumerate()
            .filter(|(_, line)| !line.is_linked())
            .map(|(index, _)| index)
            .collect()
    }
}
