use derive_more::Display;
use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::anchor::match_ranges;
use crate::correlate::correlate;
use crate::error::AlignError;
use crate::line_store::{Line, LineStore, Side};
use crate::options::CompareOptions;
use crate::partition::partition;
use crate::section::Section;

/// Lifecycle of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CompareState {
    /// Lines are loaded but not compared
    #[default]
    #[display(fmt = "Ready")]
    Ready,

    /// A comparison is running
    #[display(fmt = "Comparing")]
    Comparing,

    /// The sections and links are final until the next load
    #[display(fmt = "Done")]
    Done,
}

/// A comparison between two line sequences: the lines with their links and,
/// once compared, the section lists of both sides
#[derive(Debug, Clone, Default)]
pub struct SectionDiff {
    /// The lines of both sides
    store: LineStore,

    /// The final sections, left then right
    sections: [Vec<Section>; 2],

    state: CompareState,
    options: CompareOptions,

    /// Number of passes the last comparison took
    passes: usize,
}

/// An immutable snapshot of a compared document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectionDiffSnapshot {
    /// The sections of the left side
    pub left: Vec<Section>,

    /// The sections of the right side
    pub right: Vec<Section>,

    /// The number of lines on the left side
    pub left_line_count: usize,

    /// The number of lines on the right side
    pub right_line_count: usize,
}

impl SectionDiff {
    /// Create an empty document with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with the given options
    pub fn with_options(options: CompareOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Create a document with both sides loaded, ready to compare
    pub fn from_lines<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            store: LineStore::from_lines(left, right),
            ..Self::default()
        }
    }

    /// Replace the lines of one side. Links and sections are discarded.
    pub fn load_lines<I>(&mut self, side: Side, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.store.load(side, lines);
        self.reset();
    }

    /// Change the options. Any previous result is discarded.
    pub fn set_options(&mut self, options: CompareOptions) {
        self.options = options;
        self.store.clear_links();
        self.reset();
    }

    /// Get the options
    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Run passes of anchor matching, partitioning and correlation until a
    /// pass makes no new link, then keep that pass's sections as the result.
    pub fn compare(&mut self) {
        self.state = CompareState::Comparing;
        self.store.clear_links();

        let limit = self
            .options
            .pass_limit(self.store.len(Side::Left), self.store.len(Side::Right));
        let whole_left = self.store.whole_range(Side::Left);
        let whole_right = self.store.whole_range(Side::Right);

        let mut passes = 0;
        let (left, right) = loop {
            passes += 1;

            let (contents, links) = self.store.split_mut();
            let mut linked = match_ranges(contents, links, whole_left, whole_right);

            let mut left = partition(&self.store, Side::Left);
            let mut right = partition(&self.store, Side::Right);
            linked |= correlate(
                &mut self.store,
                &mut left,
                &mut right,
                self.options.nested_matching,
            );

            debug!(
                "pass {}: {} left and {} right sections, {} lines linked",
                passes,
                left.len(),
                right.len(),
                self.store.linked_count(Side::Left)
            );

            if !linked {
                break (left, right);
            }

            if passes >= limit {
                warn!(
                    "comparison still linking lines after {} passes, treating the rest as unmatched",
                    passes
                );
                let mut left = partition(&self.store, Side::Left);
                let mut right = partition(&self.store, Side::Right);
                correlate(&mut self.store, &mut left, &mut right, false);
                break (left, right);
            }
        };

        self.sections = [left, right];
        self.passes = passes;
        self.state = CompareState::Done;
    }

    /// Get the state of the comparison
    pub fn state(&self) -> CompareState {
        self.state
    }

    /// Check if the sections hold a finished comparison
    pub fn is_compared(&self) -> bool {
        self.state == CompareState::Done
    }

    /// Number of passes the last comparison took
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Get the underlying line store
    pub fn store(&self) -> &LineStore {
        &self.store
    }

    /// Get the number of lines on a side
    pub fn line_count(&self, side: Side) -> usize {
        self.store.len(side)
    }

    /// Get a line by index
    pub fn line(&self, side: Side, index: usize) -> Result<Line<'_>, AlignError> {
        self.store.line(side, index)
    }

    /// Iterate over the lines of a side
    pub fn lines(&self, side: Side) -> impl ExactSizeIterator<Item = Line<'_>> + '_ {
        self.store.lines(side)
    }

    /// Get the sections of a side. Empty until compared.
    pub fn sections(&self, side: Side) -> &[Section] {
        &self.sections[side.index()]
    }

    /// Get a snapshot of the current result
    pub fn snapshot(&self) -> SectionDiffSnapshot {
        SectionDiffSnapshot {
            left: self.sections(Side::Left).to_vec(),
            right: self.sections(Side::Right).to_vec(),
            left_line_count: self.store.len(Side::Left),
            right_line_count: self.store.len(Side::Right),
        }
    }

    fn reset(&mut self) {
        self.sections = Default::default();
        self.state = CompareState::Ready;
        self.passes = 0;
    }
}

impl SectionDiffSnapshot {
    /// Get the sections of a side
    pub fn sections(&self, side: Side) -> &[Section] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Get the number of sections on a side
    pub fn section_count(&self, side: Side) -> usize {
        self.sections(side).len()
    }

    /// Get a section by index
    pub fn section(&self, side: Side, index: usize) -> Option<&Section> {
        self.sections(side).get(index)
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.left.iter().chain(&self.right).any(Section::is_changed)
    }

    /// Get the number of lines only present on the right
    pub fn added_lines(&self) -> usize {
        changed_lines(&self.right)
    }

    /// Get the number of lines only present on the left
    pub fn deleted_lines(&self) -> usize {
        changed_lines(&self.left)
    }

    /// Get the number of linked lines (counted once per pair)
    pub fn unchanged_lines(&self) -> usize {
        self.left
            .iter()
            .filter(|s| !s.is_changed())
            .map(Section::len)
            .sum()
    }
}

fn changed_lines(sections: &[Section]) -> usize {
    sections
        .iter()
        .filter(|s| s.is_changed())
        .map(Section::len)
        .sum()
}
