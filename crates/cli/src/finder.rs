//! Running the external fuzzy finder over the manual index.
//!
//! The finder owns the terminal for the whole session. Everything it needs,
//! including the preview pipeline, key bindings and styling, goes in as
//! arguments; the only thing that comes back is the chosen line.

use std::process::{Command, ExitStatus};

use fzman_core::collaborators::Collaborators;
use fzman_core::error::{Error, Result};
use fzman_core::execution::pipe_into;
use fzman_core::manual::SystemManual;
use fzman_core::preview::PreviewPipeline;
use itertools::Itertools;
use log::{debug, info};

/// Finder exit code when nothing matched the query.
const NO_MATCH_EXIT_CODE: i32 = 1;
/// Finder exit code when the user aborted with Escape or Ctrl-C.
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// How a finder session ended.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FinderOutcome {
    Chosen(String),
    Cancelled,
}

/// Builds the finder invocation. Multi-select stays off and no query is pre-filled.
#[must_use]
pub fn finder_command(collaborators: &Collaborators, pipeline: &PreviewPipeline) -> Command {
    let mut command = Command::new(&collaborators.finder);
    command
        .arg("--no-multi")
        .arg("--preview")
        .arg(pipeline.as_str())
        .arg("--preview-window")
        .arg(&collaborators.preview_window)
        .arg("--prompt")
        .arg(&collaborators.prompt)
        .arg("--header")
        .arg(&collaborators.header)
        .args(&collaborators.finder_options);
    command
}

/// Maps the finder's exit status and output to an outcome.
///
/// # Errors
///
/// Returns [`Error::SubProcessExit`] for exit codes other than success, no
/// match, or interruption.
pub fn interpret(finder: &str, status: ExitStatus, output: &str) -> Result<FinderOutcome> {
    match status.code() {
        Some(0) => {
            let line = output.trim();
            if line.is_empty() {
                Ok(FinderOutcome::Cancelled)
            } else {
                Ok(FinderOutcome::Chosen(line.to_string()))
            }
        }
        Some(NO_MATCH_EXIT_CODE | INTERRUPTED_EXIT_CODE) => Ok(FinderOutcome::Cancelled),
        _ => Err(Error::sub_process_exit(finder, status)),
    }
}

/// Runs one interactive session over the full manual index.
///
/// # Errors
///
/// Returns an error if the index lister or the finder cannot be started, or
/// if the finder fails for a reason other than cancellation.
pub fn run(
    manual: &SystemManual,
    collaborators: &Collaborators,
    pipeline: &PreviewPipeline,
) -> Result<FinderOutcome> {
    let command = finder_command(collaborators, pipeline);
    debug!(
        "Finder arguments: {}",
        command
            .get_args()
            .map(|argument| argument.to_string_lossy())
            .join(" ")
    );

    let (status, output) = pipe_into(manual.index_command(), command)?;
    let outcome = interpret(&collaborators.finder, status, &output)?;
    info!("Finder session ended: {:?}", outcome);

    Ok(outcome)
}
