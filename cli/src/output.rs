//! Colored terminal output for the `pygen` binary.
//!
//! Status lines go to stdout, problems to stderr, so `pygen list --json`
//! stays machine-readable even when a warning is printed.

use {
    console::{style, Emoji, StyledObject},
    std::fmt::Display,
};

pub static SUCCESS: Emoji = Emoji("✓", "+");
pub static ERROR: Emoji = Emoji("✗", "x");
pub static INFO: Emoji = Emoji("ℹ", "i");
pub static WARNING: Emoji = Emoji("⚠", "!");
pub static ARROW: Emoji = Emoji("→", ">");

enum Stream {
    Out,
    Err,
}

fn status(stream: Stream, marker: StyledObject<Emoji<'_, '_>>, msg: impl Display) {
    match stream {
        Stream::Out => println!("{marker} {msg}"),
        Stream::Err => eprintln!("{marker} {msg}"),
    }
}

pub fn success(msg: impl Display) {
    status(Stream::Out, style(SUCCESS).green().bold(), msg);
}

pub fn error(msg: impl Display) {
    status(Stream::Err, style(ERROR).red().bold(), msg);
}

pub fn info(msg: impl Display) {
    status(Stream::Out, style(INFO).cyan().bold(), msg);
}

pub fn warning(msg: impl Display) {
    status(Stream::Err, style(WARNING).yellow().bold(), msg);
}

/// A written path or planned entry.
pub fn step(msg: impl Display) {
    status(Stream::Out, style(ARROW).dim(), style(msg).dim());
}

/// A shell command the user is expected to run next.
pub fn command(cmd: impl Display) {
    println!("  {}", style(cmd).cyan());
}

/// An aligned `label  value` row with an optional dimmed note.
pub fn row(label: &str, value: impl Display, note: Option<&str>) {
    let label = style(label).bold();
    match note {
        Some(note) => println!("  {label:<12} {value} {}", style(note).dim()),
        None => println!("  {label:<12} {value}"),
    }
}

pub fn header(msg: impl Display) {
    println!("\n{}", style(msg).bold());
}
