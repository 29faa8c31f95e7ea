use crate::line_store::{LineStore, Links, Side};
use crate::section::{Section, SectionState};

/// Split one side into an ordered list of sections with no gaps.
///
/// A matched section is a run of lines linked to consecutive lines on the
/// other side; an unmatched section is a run of unlinked lines.
pub fn partition(store: &LineStore, side: Side) -> Vec<Section> {
    let links = store.links();
    let count = store.len(side);
    let mut sections = Vec::new();

    let mut line = 0;
    while line < count {
        let section = if links.is_linked(side, line) {
            Section::new(SectionState::Same, line, end_of_matched(links, side, count, line))
        } else {
            Section::new(
                SectionState::unmatched(side),
                line,
                end_of_unmatched(links, side, count, line),
            )
        };
        line = section.last_line() + 1;
        sections.push(section);
    }

    sections
}

fn end_of_matched(links: &Links, side: Side, count: usize, start: usize) -> usize {
    let Some(mut previous) = links.get(side, start) else {
        panic!("matched section must start at a linked line ({side} line {start})");
    };

    let mut end = start;
    while end + 1 < count {
        match links.get(side, end + 1) {
            Some(link) if link == previous + 1 => previous = link,
            _ => break,
        }
        end += 1;
    }
    end
}

fn end_of_unmatched(links: &Links, side: Side, count: usize, start: usize) -> usize {
    assert!(
        !links.is_linked(side, start),
        "unmatched section must start at an unlinked line ({side} line {start})"
    );

    let mut end = start;
    while end + 1 < count && !links.is_linked(side, end + 1) {
        end += 1;
    }
    end
}
