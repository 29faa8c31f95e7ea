use proptest::prelude::*;
use section_diff::{SectionDiff, SectionState, Side, TextDiff};

// Short lines from a small alphabet give plenty of repeats and unique lines
fn lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{0,2}", 0..24)
}

fn compared(left: &[String], right: &[String]) -> SectionDiff {
    let mut diff = SectionDiff::from_lines(left.iter().cloned(), right.iter().cloned());
    diff.compare();
    diff
}

proptest! {
    #[test]
    fn links_are_symmetric_and_content_equal(left in lines(), right in lines()) {
        let diff = compared(&left, &right);

        for (index, line) in diff.lines(Side::Left).enumerate() {
            if let Some(other) = line.link {
                let counterpart = diff.line(Side::Right, other).unwrap();
                prop_assert_eq!(counterpart.link, Some(index));
                prop_assert_eq!(counterpart.content, line.content);
            }
        }
        for (index, line) in diff.lines(Side::Right).enumerate() {
            if let Some(other) = line.link {
                prop_assert_eq!(diff.line(Side::Left, other).unwrap().link, Some(index));
            }
        }
    }

    #[test]
    fn sections_partition_each_side(left in lines(), right in lines()) {
        let diff = compared(&left, &right);

        for side in Side::BOTH {
            let mut next = 0;
            for section in diff.sections(side) {
                prop_assert_eq!(section.first_line(), next);
                prop_assert!(!section.is_empty());

                let linked = (section.first_line()..=section.last_line())
                    .all(|line| diff.line(side, line).unwrap().is_linked());
                let unlinked = (section.first_line()..=section.last_line())
                    .all(|line| !diff.line(side, line).unwrap().is_linked());
                match section.state {
                    SectionState::Same => prop_assert!(linked),
                    state => {
                        prop_assert_eq!(state, SectionState::unmatched(side));
                        prop_assert!(unlinked);
                    }
                }
                next = section.last_line() + 1;
            }
            prop_assert_eq!(next, diff.line_count(side));
        }
    }

    #[test]
    fn matched_sections_pair_up(left in lines(), right in lines()) {
        let diff = compared(&left, &right);
        let right_sections = diff.sections(Side::Right);

        for (index, section) in diff.sections(Side::Left).iter().enumerate() {
            if section.state != SectionState::Same {
                continue;
            }
            let other = &right_sections[section.link.unwrap()];
            prop_assert_eq!(other.state, SectionState::Same);
            prop_assert_eq!(other.link, Some(index));
            prop_assert_eq!(other.len(), section.len());
        }

        for side in Side::BOTH {
            let other_count = diff.sections(side.other()).len();
            for section in diff.sections(side) {
                if let Some(correspond) = section.correspond {
                    prop_assert!(correspond <= other_count);
                }
            }
        }
    }

    #[test]
    fn compare_is_idempotent_and_deterministic(left in lines(), right in lines()) {
        let mut diff = compared(&left, &right);
        let first = diff.snapshot();
        let first_links: Vec<_> = diff.lines(Side::Left).map(|l| l.link).collect();

        diff.compare();
        prop_assert_eq!(&diff.snapshot(), &first);

        let fresh = compared(&left, &right);
        let fresh_links: Vec<_> = fresh.lines(Side::Left).map(|l| l.link).collect();
        prop_assert_eq!(&fresh.snapshot(), &first);
        prop_assert_eq!(fresh_links, first_links);
    }

    #[test]
    fn render_accounts_for_every_line(left in lines(), right in lines()) {
        let diff = compared(&left, &right);
        let snapshot = diff.snapshot();
        let rendered = TextDiff::render(&diff);

        let count = |sign: char| rendered.lines().filter(|l| l.starts_with(sign)).count();
        prop_assert_eq!(count(' '), snapshot.unchanged_lines());
        prop_assert_eq!(count('-'), snapshot.deleted_lines());
        prop_assert_eq!(count('+'), snapshot.added_lines());
    }
}
