use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use section_diff::{CompareOptions, Side, TextDiff};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Parser)]
#[command(
    name = "sectiondiff",
    version,
    about = "Compare two files line by line",
    long_about = "Compare two files line by line and print a merged listing. \
    Exits with 0 when the files match, 1 when they differ and 2 on error."
)]
struct Args {
    #[arg(index = 1, help = "The left (old) file")]
    left: PathBuf,

    #[arg(index = 2, help = "The right (new) file")]
    right: PathBuf,

    #[arg(long, help = "Print without colors (also set by NO_COLOR)")]
    plain: bool,

    #[arg(long, help = "Do not re-match inside paired changed sections")]
    no_nested: bool,

    #[arg(long, value_name = "N", help = "Stop after N matching passes")]
    max_passes: Option<usize>,
}

impl Args {
    fn options(&self) -> CompareOptions {
        let options = CompareOptions::default().nested_matching(!self.no_nested);
        match self.max_passes {
            Some(passes) => options.max_passes(passes),
            None => options,
        }
    }

    fn color(&self) -> bool {
        !self.plain && env::var_os("NO_COLOR").is_none()
    }
}

fn main() -> ExitCode {
    env_logger::init();

    // clap exits with 2 on usage errors and 0 for --help/--version
    let args = Args::parse();
    match run(&args) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(err) => {
            eprintln!("sectiondiff: {:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Compare the two files and print the listing. Returns whether they differ.
fn run(args: &Args) -> Result<bool> {
    info!("Comparing {} with {}", args.left.display(), args.right.display());

    let left = fs::read(&args.left)
        .with_context(|| format!("failed to read {}", args.left.display()))?;
    let right = fs::read(&args.right)
        .with_context(|| format!("failed to read {}", args.right.display()))?;

    let diff = TextDiff::diff_bytes(args.options(), &left, &right);
    debug!("Comparison finished after {} passes", diff.passes());

    let color = args.color();
    for line in TextDiff::render(&diff).lines() {
        let code = match line.chars().next() {
            Some('-') if color => RED,
            Some('+') if color => BLUE,
            _ => "",
        };
        if code.is_empty() {
            println!("{}", line);
        } else {
            println!("{}{}{}", code, line, RESET);
        }
    }

    let snapshot = diff.snapshot();
    println!(
        "{} left / {} right sections, {} unchanged, -{} +{}",
        snapshot.section_count(Side::Left),
        snapshot.section_count(Side::Right),
        snapshot.unchanged_lines(),
        snapshot.deleted_lines(),
        snapshot.added_lines()
    );

    Ok(snapshot.has_changes())
}
