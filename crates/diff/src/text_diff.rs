use ropey::Rope;

use crate::line_store::Side;
use crate::options::CompareOptions;
use crate::section::Section;
use crate::section_diff::SectionDiff;

/// Wrapper around whole-text comparisons
pub struct TextDiff;

impl TextDiff {
    /// Compare two texts line by line
    pub fn diff(left_text: &str, right_text: &str) -> SectionDiff {
        Self::diff_with(CompareOptions::default(), left_text, right_text)
    }

    /// Compare two texts line by line with the given options
    pub fn diff_with(options: CompareOptions, left_text: &str, right_text: &str) -> SectionDiff {
        let mut diff = SectionDiff::with_options(options);
        diff.load_lines(Side::Left, Self::split_lines(left_text));
        diff.load_lines(Side::Right, Self::split_lines(right_text));
        diff.compare();
        diff
    }

    /// Compare two byte buffers as UTF-8 text.
    ///
    /// Invalid sequences are replaced with U+FFFD, so any file can be
    /// compared. Equal bytes still decode to equal lines.
    pub fn diff_bytes(options: CompareOptions, left: &[u8], right: &[u8]) -> SectionDiff {
        let left_text = String::from_utf8_lossy(left);
        let right_text = String::from_utf8_lossy(right);
        Self::diff_with(options, &left_text, &right_text)
    }

    /// Split text into lines without their terminators.
    ///
    /// Only `\n` ends a line, and one `\r` before it is dropped with it.
    /// Other break characters (lone `\r`, form feed, U+2028 and so on) stay
    /// part of the line. A terminator at the very end does not start another
    /// line, so `""` has no lines and `"a\n"` has one.
    pub fn split_lines(text: &str) -> Vec<String> {
        let rope = Rope::from_str(text);
        let mut lines = Vec::new();
        let mut current = String::new();

        // ropey also breaks on characters that do not end a line here, so
        // its pieces are joined until one ends with '\n'
        for piece in rope.lines() {
            for chunk in piece.chunks() {
                current.push_str(chunk);
            }
            if let Some(line) = current.strip_suffix('\n') {
                let line = line.strip_suffix('\r').unwrap_or(line);
                lines.push(line.to_owned());
                current.clear();
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Render a compared document as a merged listing.
    ///
    /// Linked lines are prefixed with `' '`, lines only on the left with
    /// `'-'` and lines only on the right with `'+'`.
    pub fn render(diff: &SectionDiff) -> String {
        let left = diff.sections(Side::Left);
        let right = diff.sections(Side::Right);
        let mut out = String::new();
        let mut emitted = vec![false; right.len()];

        let (mut i, mut j) = (0, 0);
        loop {
            while j < right.len() && emitted[j] {
                j += 1;
            }

            match (left.get(i), right.get(j)) {
                (Some(l), _) if l.is_changed() && l.link.is_none() => {
                    push_section(&mut out, diff, Side::Left, l, '-');
                    i += 1;
                }
                (_, Some(r)) if r.is_changed() && r.link.is_none() => {
                    push_section(&mut out, diff, Side::Right, r, '+');
                    emitted[j] = true;
                }
                (Some(l), _) => {
                    if l.is_changed() {
                        push_section(&mut out, diff, Side::Left, l, '-');
                    } else {
                        push_section(&mut out, diff, Side::Left, l, ' ');
                    }
                    if let Some(k) = l.link {
                        if l.is_changed() && !emitted[k] {
                            push_section(&mut out, diff, Side::Right, &right[k], '+');
                        }
                        emitted[k] = true;
                        j = j.max(k + 1);
                    }
                    i += 1;
                }
                (None, Some(_)) => j += 1,
                (None, None) => break,
            }
        }

        // right-only sections passed over by crossed links
        for (k, section) in right.iter().enumerate() {
            if !emitted[k] && section.is_changed() {
                push_section(&mut out, diff, Side::Right, section, '+');
            }
        }

        out
    }
}

fn push_section(out: &mut String, diff: &SectionDiff, side: Side, section: &Section, sign: char) {
    for line in diff.lines(side).skip(section.first_line()).take(section.len()) {
        out.push(sign);
        out.push_str(line.content);
        out.push('\n');
    }
}
