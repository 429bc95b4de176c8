//! Deciding between opening a page directly and searching interactively.

use fzman_core::manual::{resolve, DirectTarget, ManualIndex};
use fzman_core::selection::{parse, ManualTarget};

use crate::finder::FinderOutcome;

/// Where an invocation starts.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Start {
    /// The name given on the command line has a manual entry, skip the finder.
    Direct(ManualTarget),
    /// Open the finder over the full index. Carries the name that was not found, if any.
    Search { not_found: Option<String> },
}

/// Picks the starting point for an optional direct target.
pub fn start(target: Option<&str>, index: &impl ManualIndex) -> Start {
    match target.map(|name| resolve(index, name)) {
        Some(DirectTarget::Found(target)) => Start::Direct(target),
        Some(DirectTarget::NotFound(name)) => Start::Search {
            not_found: Some(name),
        },
        None => Start::Search { not_found: None },
    }
}

/// The target chosen in the finder, `None` when the user cancelled.
#[must_use]
pub fn chosen_target(outcome: &FinderOutcome) -> Option<ManualTarget> {
    match outcome {
        FinderOutcome::Chosen(line) => parse(line),
        FinderOutcome::Cancelled => None,
    }
}
