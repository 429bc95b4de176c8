//! Messages for the user that are not errors.
//!
//! These go to standard error so they stay visible whatever `RUST_LOG` says.

use std::fmt::Display;

use crossterm::style::Stylize;

fn notice(message: impl Display) {
    eprintln!("{} {}", "fzman:".bold().yellow(), message);
}

pub fn examples_unavailable(example_providers: &[String]) {
    notice(format!(
        "examples requested but no example provider ({}) is installed, showing manual pages only",
        example_providers.join(", ")
    ));
}

pub fn target_not_found(name: &str) {
    notice(format!(
        "no manual entry for `{name}`, opening the interactive search"
    ));
}

pub fn failure(error: impl Display) {
    eprintln!("{} {}", "fzman:".bold().red(), error);
}
