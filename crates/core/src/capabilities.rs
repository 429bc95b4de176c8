//! Detection of the external programs available on this machine.
//!
//! Probing never fails: a missing optional program simply switches the
//! matching feature off. Mandatory programs are checked with [`require`].

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::debug;

use crate::collaborators::{install_hint, Collaborators};
use crate::error::{Error, Result};

/// Answers whether a program can be started by name.
pub trait Locator {
    fn is_available(&self, program: &str) -> bool;
}

/// Looks programs up in the directories of a `PATH`-style list, like `command -v`.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    directories: Vec<PathBuf>,
}

impl SearchPath {
    /// Search path of the current process.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_path_value(env::var_os("PATH"))
    }

    #[must_use]
    pub fn from_path_value(path: Option<OsString>) -> Self {
        let directories = path
            .map(|path| env::split_paths(&path).collect())
            .unwrap_or_default();

        Self { directories }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

impl Locator for SearchPath {
    fn is_available(&self, program: &str) -> bool {
        // Programs given with a path are checked directly
        if program.contains(std::path::MAIN_SEPARATOR) {
            return is_executable(Path::new(program));
        }

        self.directories
            .iter()
            .any(|directory| is_executable(&directory.join(program)))
    }
}

/// Optional programs found at startup. Immutable for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    pub highlighter: Option<String>,
    pub example_provider: Option<String>,
}

impl CapabilitySet {
    #[must_use]
    pub fn has_highlighter(&self) -> bool {
        self.highlighter.is_some()
    }

    #[must_use]
    pub fn has_example_provider(&self) -> bool {
        self.example_provider.is_some()
    }
}

fn first_available(locator: &impl Locator, candidates: &[String]) -> Option<String> {
    candidates
        .iter()
        .find(|candidate| locator.is_available(candidate))
        .cloned()
}

/// Probes for the optional highlighter and example provider.
pub fn probe(locator: &impl Locator, collaborators: &Collaborators) -> CapabilitySet {
    let capabilities = CapabilitySet {
        highlighter: first_available(locator, &collaborators.highlighters),
        example_provider: first_available(locator, &collaborators.example_providers),
    };

    debug!("Probed capabilities: {:?}", capabilities);

    capabilities
}

/// Checks that the finder and the manual renderer are present.
///
/// # Errors
///
/// Returns [`Error::MissingRequiredCollaborator`] for the first absent program.
pub fn require(locator: &impl Locator, collaborators: &Collaborators) -> Result<()> {
    for program in [&collaborators.finder, &collaborators.renderer] {
        if !locator.is_available(program) {
            return Err(Error::missing_required(program, &install_hint(program)));
        }
    }

    Ok(())
}
