use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AlignError;
use crate::section::LineRange;

/// One of the two sequences being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// The first (old) sequence
    #[display(fmt = "left")]
    Left,

    /// The second (new) sequence
    #[display(fmt = "right")]
    Right,
}

impl Side {
    /// Both sides, left first
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// The opposite side
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// A read-only view of a stored line: its content and its link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The text of the line, without its terminator
    pub content: &'a str,

    /// Index of the matched line on the other side, if any
    pub link: Option<usize>,
}

impl Line<'_> {
    /// Whether the line has been matched to a line on the other side
    pub fn is_linked(&self) -> bool {
        self.link.is_some()
    }
}

/// Line contents for both sides. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub(crate) struct Contents {
    sides: [Vec<String>; 2],
}

impl Contents {
    pub(crate) fn side(&self, side: Side) -> &[String] {
        &self.sides[side.index()]
    }

    pub(crate) fn get(&self, side: Side, index: usize) -> &str {
        &self.sides[side.index()][index]
    }
}

/// Per-line link fields for both sides
#[derive(Debug, Clone, Default)]
pub(crate) struct Links {
    sides: [Vec<Option<usize>>; 2],
}

impl Links {
    pub(crate) fn get(&self, side: Side, index: usize) -> Option<usize> {
        self.sides[side.index()][index]
    }

    pub(crate) fn is_linked(&self, side: Side, index: usize) -> bool {
        self.get(side, index).is_some()
    }

    /// Link a left line and a right line to each other
    pub(crate) fn link(&mut self, left: usize, right: usize) {
        self.sides[Side::Left.index()][left] = Some(right);
        self.sides[Side::Right.index()][right] = Some(left);
    }

    pub(crate) fn count_linked(&self, side: Side) -> usize {
        self.sides[side.index()].iter().filter(|l| l.is_some()).count()
    }

    fn reset(&mut self, side: Side, len: usize) {
        let links = &mut self.sides[side.index()];
        links.clear();
        links.resize(len, None);
    }
}

/// The two ordered line sequences under comparison, each line carrying a
/// mutable link to its counterpart on the other side.
///
/// Contents and links are stored apart so that content lookups can stay
/// borrowed while links are being written.
#[derive(Debug, Clone, Default)]
pub struct LineStore {
    contents: Contents,
    links: Links,
}

impl LineStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with both sides loaded
    pub fn from_lines<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let mut store = Self::new();
        store.load(Side::Left, left);
        store.load(Side::Right, right);
        store
    }

    /// Replace the content of one side. All links on both sides are reset.
    pub fn load<I>(&mut self, side: Side, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.contents.sides[side.index()] = lines.into_iter().map(Into::into).collect();
        self.clear_links();
    }

    /// Unset every link on both sides
    pub fn clear_links(&mut self) {
        for side in Side::BOTH {
            let len = self.len(side);
            self.links.reset(side, len);
        }
    }

    /// Number of lines on a side
    pub fn len(&self, side: Side) -> usize {
        self.contents.side(side).len()
    }

    /// Check if a side has no lines
    pub fn is_empty(&self, side: Side) -> bool {
        self.len(side) == 0
    }

    /// The range covering every line of a side
    pub fn whole_range(&self, side: Side) -> LineRange {
        LineRange::new(0, self.len(side))
    }

    /// Get a line by index
    pub fn line(&self, side: Side, index: usize) -> Result<Line<'_>, AlignError> {
        self.check_index(side, index)?;
        Ok(Line {
            content: self.contents.get(side, index),
            link: self.links.get(side, index),
        })
    }

    /// Iterate over the lines of a side in order
    pub fn lines(&self, side: Side) -> impl ExactSizeIterator<Item = Line<'_>> + '_ {
        self.contents
            .side(side)
            .iter()
            .zip(self.links.sides[side.index()].iter())
            .map(|(content, &link)| Line {
                content: content.as_str(),
                link,
            })
    }

    /// Get the content of a line
    pub fn content(&self, side: Side, index: usize) -> Result<&str, AlignError> {
        self.check_index(side, index)?;
        Ok(self.contents.get(side, index))
    }

    /// Get the link of a line
    pub fn link(&self, side: Side, index: usize) -> Result<Option<usize>, AlignError> {
        self.check_index(side, index)?;
        Ok(self.links.get(side, index))
    }

    /// Link a left line to a right line if their contents are equal.
    ///
    /// Returns `false` (and links nothing) when the contents differ or when
    /// either line is already linked.
    pub fn link_lines(&mut self, left: usize, right: usize) -> Result<bool, AlignError> {
        self.check_index(Side::Left, left)?;
        self.check_index(Side::Right, right)?;

        if self.links.is_linked(Side::Left, left) || self.links.is_linked(Side::Right, right) {
            return Ok(false);
        }
        if self.contents.get(Side::Left, left) != self.contents.get(Side::Right, right) {
            return Ok(false);
        }
        self.links.link(left, right);
        Ok(true)
    }

    /// Number of linked lines on a side
    pub fn linked_count(&self, side: Side) -> usize {
        self.links.count_linked(side)
    }

    pub(crate) fn contents(&self) -> &Contents {
        &self.contents
    }

    pub(crate) fn links(&self) -> &Links {
        &self.links
    }

    /// Split into the immutable contents and the mutable links
    pub(crate) fn split_mut(&mut self) -> (&Contents, &mut Links) {
        (&self.contents, &mut self.links)
    }

    fn check_index(&self, side: Side, index: usize) -> Result<(), AlignError> {
        let count = self.len(side);
        if index >= count {
            return Err(AlignError::OutOfRange { side, index, count });
        }
        Ok(())
    }
}
