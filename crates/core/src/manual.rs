//! The manual page tools: index listing, existence checks and rendering.

use std::process::Command;

use log::debug;

use crate::execution::succeeds;
use crate::selection::ManualTarget;

/// Answers whether the manual index has an entry for a name.
pub trait ManualIndex {
    fn contains(&self, name: &str) -> bool;
}

/// The system manual, reached through a `man`-compatible renderer.
#[derive(Debug, Clone)]
pub struct SystemManual {
    renderer: String,
}

impl SystemManual {
    #[must_use]
    pub fn new(renderer: &str) -> Self {
        Self {
            renderer: renderer.to_string(),
        }
    }

    /// Lists every page as `name (section) - description`, one per line.
    #[must_use]
    pub fn index_command(&self) -> Command {
        let mut command = Command::new(&self.renderer);
        command.args(["-k", "."]);
        command
    }

    /// Renders a page interactively, the renderer picks its own pager.
    #[must_use]
    pub fn render_command(&self, target: &ManualTarget) -> Command {
        let mut command = Command::new(&self.renderer);
        if let Some(section) = target.section() {
            command.arg(section);
        }
        command.arg(&target.name);
        command
    }

    fn where_command(&self, name: &str) -> Command {
        let mut command = Command::new(&self.renderer);
        command.arg("-w").arg(name);
        command
    }
}

impl ManualIndex for SystemManual {
    fn contains(&self, name: &str) -> bool {
        succeeds(self.where_command(name))
    }
}

/// Outcome of looking up a name given on the command line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DirectTarget {
    Found(ManualTarget),
    NotFound(String),
}

/// Checks whether `name` has a manual entry.
///
/// Found targets carry no section, the renderer resolves it.
pub fn resolve(index: &impl ManualIndex, name: &str) -> DirectTarget {
    let name = name.trim();

    if !name.is_empty() && index.contains(name) {
        debug!("Manual entry found for `{}`", name);
        DirectTarget::Found(ManualTarget::new(name, ""))
    } else {
        debug!("No manual entry for `{}`", name);
        DirectTarget::NotFound(name.to_string())
    }
}
