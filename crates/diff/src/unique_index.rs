use std::collections::HashMap;

use crate::line_store::{Contents, LineStore, Links, Side};
use crate::section::LineRange;

/// Result of looking up a line content in a [`UniqueIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The content occurs exactly once, at this line
    Line(usize),

    /// The content occurs more than once
    NotUnique,

    /// The content does not occur
    NotFound,
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    Unique(usize),
    Duplicate,
}

/// Map from line content to the single unlinked line holding it, built over
/// one range of one side.
///
/// Linked lines are skipped while building, so uniqueness is judged only
/// against the lines that are still unmatched.
#[derive(Debug, Clone)]
pub struct UniqueIndex<'a> {
    map: HashMap<&'a str, Entry>,
}

impl<'a> UniqueIndex<'a> {
    /// Build an index over the unlinked lines of `range` on `side`.
    ///
    /// Panics if `range` extends past the end of the side.
    pub fn build(store: &'a LineStore, side: Side, range: LineRange) -> Self {
        let (contents, links) = (store.contents(), store.links());
        Self::from_parts(contents, links, side, range)
    }

    pub(crate) fn from_parts(
        contents: &'a Contents,
        links: &Links,
        side: Side,
        range: LineRange,
    ) -> Self {
        let mut map = HashMap::with_capacity(range.count);
        for line in range.to_range() {
            if links.is_linked(side, line) {
                continue;
            }
            map.entry(contents.get(side, line))
                .and_modify(|entry| *entry = Entry::Duplicate)
                .or_insert(Entry::Unique(line));
        }
        Self { map }
    }

    /// Look up a line content
    pub fn lookup(&self, content: &str) -> Lookup {
        match self.map.get(content) {
            Some(Entry::Unique(line)) => Lookup::Line(*line),
            Some(Entry::Duplicate) => Lookup::NotUnique,
            None => Lookup::NotFound,
        }
    }

    /// The unique line holding `content`, if there is exactly one
    pub fn unique_line(&self, content: &str) -> Option<usize> {
        match self.lookup(content) {
            Lookup::Line(line) => Some(line),
            Lookup::NotUnique | Lookup::NotFound => None,
        }
    }

    /// Number of distinct contents in the index
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the index holds no content
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
