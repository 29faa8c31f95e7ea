//! Anchor matching: link lines whose content is unique on both sides, then
//! grow each anchor into the longest run of equal lines around it.
//!
//! This is a heuristic, not a longest-common-subsequence solver. Content
//! that occurs more than once among the unmatched lines of a range is never
//! used as an anchor, so files with many repeated lines (blank lines, lone
//! braces) may align less well than an optimal diff would.

use log::trace;

use crate::error::AlignError;
use crate::line_store::{Contents, LineStore, Links, Side};
use crate::section::LineRange;
use crate::unique_index::UniqueIndex;

/// Link matching lines between `left` (a range of the left side) and `right`
/// (a range of the right side).
///
/// Returns whether any new link was made.
pub fn match_range(
    store: &mut LineStore,
    left: LineRange,
    right: LineRange,
) -> Result<bool, AlignError> {
    check_range(store, Side::Left, left)?;
    check_range(store, Side::Right, right)?;

    let (contents, links) = store.split_mut();
    Ok(match_ranges(contents, links, left, right))
}

/// Grow a run of links from the anchor pair `(left_line, right_line)`,
/// first forwards and then backwards, within the whole of both sides.
///
/// Returns whether any link was made.
pub fn expand_anchor(
    store: &mut LineStore,
    left_line: usize,
    right_line: usize,
) -> Result<bool, AlignError> {
    store.line(Side::Left, left_line)?;
    store.line(Side::Right, right_line)?;

    let left = store.whole_range(Side::Left);
    let right = store.whole_range(Side::Right);
    let (contents, links) = store.split_mut();
    Ok(expand(contents, links, (left_line, right_line), left, right))
}

pub(crate) fn match_ranges(
    contents: &Contents,
    links: &mut Links,
    left: LineRange,
    right: LineRange,
) -> bool {
    if left.is_empty() || right.is_empty() {
        return false;
    }

    let left_index = UniqueIndex::from_parts(contents, links, Side::Left, left);
    let right_index = UniqueIndex::from_parts(contents, links, Side::Right, right);

    let mut linked = false;
    for line in left.to_range() {
        if links.is_linked(Side::Left, line) {
            continue;
        }

        let content = contents.get(Side::Left, line);
        if left_index.unique_line(content).is_none() {
            continue;
        }
        let Some(other) = right_index.unique_line(content) else {
            continue;
        };
        if links.is_linked(Side::Right, other) {
            continue;
        }

        if expand(contents, links, (line, other), left, right) {
            linked = true;
        }
    }

    linked
}

fn expand(
    contents: &Contents,
    links: &mut Links,
    (left_line, right_line): (usize, usize),
    left: LineRange,
    right: LineRange,
) -> bool {
    let can_link = |links: &Links, l: usize, r: usize| {
        !links.is_linked(Side::Left, l)
            && !links.is_linked(Side::Right, r)
            && contents.get(Side::Left, l) == contents.get(Side::Right, r)
    };

    // forwards, starting with the anchor itself
    let (mut l, mut r) = (left_line, right_line);
    while left.contains(l) && right.contains(r) && can_link(links, l, r) {
        links.link(l, r);
        l += 1;
        r += 1;
    }
    let forward = l - left_line;
    if forward == 0 {
        return false;
    }

    // backwards
    let (mut l, mut r) = (left_line, right_line);
    while l > left.start && r > right.start && can_link(links, l - 1, r - 1) {
        l -= 1;
        r -= 1;
        links.link(l, r);
    }
    let backward = left_line - l;

    trace!(
        "anchor {}<->{} linked {} lines ({} before anchor)",
        left_line,
        right_line,
        forward + backward,
        backward
    );
    true
}

fn check_range(store: &LineStore, side: Side, range: LineRange) -> Result<(), AlignError> {
    let count = store.len(side);
    if range.end() > count {
        return Err(AlignError::OutOfRange {
            side,
            index: range.end() - 1,
            count,
        });
    }
    Ok(())
}
