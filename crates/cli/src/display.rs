//! Final display of the chosen manual page.
//!
//! This is the only place that gives the terminal away for good: the renderer
//! replaces the fzman process and its exit code becomes ours.

use std::fmt::Display;
use std::io::{stdout, Write};
use std::process::{Command, ExitCode};

use crossterm::style::Stylize;
use crossterm::terminal;
use fzman_core::error::Result;
use fzman_core::execution::{capture_output, hand_off};
use fzman_core::manual::SystemManual;
use fzman_core::selection::ManualTarget;
use fzman_core::session::{DisplayMode, Session};
use log::debug;

const EXAMPLES_TITLE: &str = "TLDR EXAMPLES";
const MANPAGE_TITLE: &str = "MANPAGE";
const FALLBACK_WIDTH: u16 = 80;

/// Title line of a block, ruled out to `width` columns.
fn top_border(title: impl Display, title_width: usize, width: usize) -> String {
    let rule = width.saturating_sub(title_width + 4).max(3);
    format!("┌─ {title} {}", "─".repeat(rule))
}

fn bottom_border(width: usize) -> String {
    format!("└{}", "─".repeat(width.saturating_sub(1).max(3)))
}

/// A titled block with a left border.
pub fn framed_block(title: impl Display, title_width: usize, body: &str, width: usize) -> String {
    let mut lines = vec![top_border(title, title_width, width)];
    lines.extend(body.lines().map(|line| format!("│ {line}")));
    lines.push(bottom_border(width));
    lines.join("\n")
}

/// Body of the examples block, with a fallback when the provider had nothing.
#[must_use]
pub fn examples_body(target: &ManualTarget, examples: Option<String>) -> String {
    examples.unwrap_or_else(|| format!("No tldr examples available for {}.", target.name))
}

fn terminal_width() -> usize {
    usize::from(terminal::size().map_or(FALLBACK_WIDTH, |(columns, _)| columns))
}

fn print_examples(target: &ManualTarget, example_provider: &str) -> Result<()> {
    let mut provider = Command::new(example_provider);
    provider.arg(&target.name);

    let body = examples_body(target, capture_output(provider));
    let width = terminal_width();

    let mut stdout = stdout();
    writeln!(
        stdout,
        "{}",
        framed_block(EXAMPLES_TITLE.bold().cyan(), EXAMPLES_TITLE.len(), &body, width)
    )?;
    writeln!(
        stdout,
        "{}",
        top_border(MANPAGE_TITLE.bold().cyan(), MANPAGE_TITLE.len(), width)
    )?;
    stdout.flush()?;

    Ok(())
}

/// Shows the target and hands the terminal to the renderer.
///
/// With examples on, a bordered examples block and a manual page header are
/// printed first. Failures of the example provider are absorbed.
///
/// # Errors
///
/// Returns an error if writing to the terminal fails or the renderer cannot
/// be started.
pub fn display(target: &ManualTarget, session: &Session, manual: &SystemManual) -> Result<ExitCode> {
    debug!("Displaying `{}` in {:?}", target, session.mode);

    if session.mode == DisplayMode::ExamplesOn {
        if let Some(example_provider) = &session.capabilities.example_provider {
            print_examples(target, example_provider)?;
        }
    }

    hand_off(manual.render_command(target))
}
