use log::{log_enabled, trace, Level};

use crate::anchor::match_ranges;
use crate::line_store::{LineStore, Side};
use crate::section::Section;

/// Link and correspond the sections of both sides.
///
/// 1. Every matched left section is linked to the right section starting at
///    the line its first line is linked to.
/// 2. Every changed left section is paired by position with the right
///    section that follows the counterpart of its predecessor (or precedes
///    the counterpart of its successor, for the first section). A changed
///    right section found there is linked, and when `nested` is set the
///    anchor matcher is run again inside the two sections. Otherwise only a
///    correspondence is recorded.
/// 3. Changed right sections left unpaired get a correspondence by the
///    mirror rule.
///
/// Returns whether nested matching made any new line link. Section data is
/// stale for the lines involved when it does.
pub fn correlate(
    store: &mut LineStore,
    left: &mut [Section],
    right: &mut [Section],
    nested: bool,
) -> bool {
    link_same_sections(store, left, right);
    let linked = pair_left_changes(store, left, right, nested);
    correspond_right_changes(left, right);

    if log_enabled!(Level::Trace) {
        for (side, sections) in [(Side::Left, &*left), (Side::Right, &*right)] {
            for (index, section) in sections.iter().enumerate() {
                trace!(
                    "{side} section {index}: {} lines {}..={} link {:?} correspond {:?}",
                    section.state,
                    section.first_line(),
                    section.last_line(),
                    section.link,
                    section.correspond
                );
            }
        }
    }

    linked
}

fn link_same_sections(store: &LineStore, left: &mut [Section], right: &mut [Section]) {
    let links = store.links();
    for (index, section) in left.iter_mut().enumerate() {
        if section.is_changed() {
            continue;
        }
        let Some(target) = links.get(Side::Left, section.first_line()) else {
            continue;
        };
        if let Ok(other) = right.binary_search_by_key(&target, Section::first_line) {
            section.link = Some(other);
            right[other].link = Some(index);
        }
    }
}

/// Position on the other side for the changed section at `index`, derived
/// from its neighbours' links.
///
/// `None` when the section has no neighbour and the other side has sections.
fn counterpart_position(sections: &[Section], index: usize, other_count: usize) -> Option<usize> {
    if index > 0 {
        Some(sections[index - 1].link.map_or(0, |link| link + 1))
    } else if sections.len() > 1 {
        // an inserted block at the very start clamps to the first section
        Some(sections[1].link.map_or(0, |link| link.saturating_sub(1)))
    } else if other_count == 0 {
        Some(0)
    } else {
        None
    }
}

fn pair_left_changes(
    store: &mut LineStore,
    left: &mut [Section],
    right: &mut [Section],
    nested: bool,
) -> bool {
    let mut linked = false;

    for index in 0..left.len() {
        if !left[index].is_changed() {
            continue;
        }
        let Some(position) = counterpart_position(left, index, right.len()) else {
            break;
        };

        if position >= right.len() {
            left[index].correspond = Some(right.len());
        } else if right[position].is_changed() {
            left[index].link = Some(position);
            right[position].link = Some(index);

            if nested {
                let (contents, links) = store.split_mut();
                if match_ranges(contents, links, left[index].range, right[position].range) {
                    trace!("nested match in left section {index} / right section {position}");
                    linked = true;
                }
            }
        } else {
            left[index].correspond = Some(position);
        }
    }

    linked
}

fn correspond_right_changes(left: &[Section], right: &mut [Section]) {
    for index in 0..right.len() {
        if !right[index].is_changed() || !right[index].is_unpaired() {
            continue;
        }
        let Some(position) = counterpart_position(right, index, left.len()) else {
            break;
        };
        right[index].correspond = Some(position.min(left.len()));
    }
}
