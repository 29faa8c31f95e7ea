use section_diff::{LineKind, Side, TextDiff};

fn main() {
    // Two sample texts to compare
    let text1 = "fn main() {\n    println!(\"Hello, world!\");\n}\n";
    let text2 = "fn main() {\n    // Add a greeting with name\n    let name = \"Rust\";\n    println!(\"Hello, {}!\", name);\n}\n";

    let diff = TextDiff::diff(text1, text2);
    let snapshot = diff.snapshot();

    println!("Merged listing:");
    print!("{}", TextDiff::render(&diff));

    // Print diff statistics
    println!("\nDiff statistics:");
    println!("  Passes: {}", diff.passes());
    println!("  Left sections: {}", snapshot.section_count(Side::Left));
    println!("  Right sections: {}", snapshot.section_count(Side::Right));
    println!("  Added lines: {}", snapshot.added_lines());
    println!("  Deleted lines: {}", snapshot.deleted_lines());
    println!("  Unchanged lines: {}", snapshot.unchanged_lines());

    // Print sections with their pairing
    for side in Side::BOTH {
        println!("\n{} sections:", side);
        for (i, section) in diff.sections(side).iter().enumerate() {
            println!(
                "  {}: {} lines {}..={} link {:?} correspond {:?}",
                i,
                section.state,
                section.first_line(),
                section.last_line(),
                section.link,
                section.correspond
            );
        }
    }

    // Print right-side lines with color-coded kinds
    println!("\nRight side:");
    for (i, line) in diff.lines(Side::Right).enumerate() {
        let color = match diff.line_kind(Side::Right, i) {
            Ok(LineKind::Identical) => "\x1b[37m",
            Ok(LineKind::Different) => "\x1b[35m",
            Ok(LineKind::LeftOnly) => "\x1b[31m",
            Ok(LineKind::RightOnly) | Err(_) => "\x1b[34m",
        };
        println!("  {:>3} {}{}\x1b[0m", i, color, line.content);
    }
}
