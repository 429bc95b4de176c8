//! Configuration path and environment utilities for fzman.
//!
//! This module provides functions for resolving the configuration file path
//! and for describing the preview width handed over by the finder.

use std::fmt::{Display, Formatter};

/// Default path for the collaborators configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.fzman/config.yml";

/// Environment variable the finder sets inside its preview sub-process
pub const PREVIEW_COLUMNS_VARIABLE: &str = "FZF_PREVIEW_COLUMNS";

/// Width used when the finder does not report one
pub const DEFAULT_PREVIEW_COLUMNS: u16 = 80;

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use fzman_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = config_path_arg.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

    shellexpand::tilde(config_path).to_string()
}

/// Column count bounding manual page reflow inside the preview pane.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PreviewWidth {
    /// A fixed number of columns.
    Columns(u16),
    /// Read `FZF_PREVIEW_COLUMNS` when the preview runs, falling back to the given width.
    Deferred { fallback: u16 },
}

impl Default for PreviewWidth {
    fn default() -> Self {
        Self::Deferred {
            fallback: DEFAULT_PREVIEW_COLUMNS,
        }
    }
}

/// Renders as a shell word: either a literal number or a parameter expansion.
impl Display for PreviewWidth {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PreviewWidth::Columns(columns) => write!(formatter, "{columns}"),
            PreviewWidth::Deferred { fallback } => {
                write!(formatter, "${{{PREVIEW_COLUMNS_VARIABLE}:-{fallback}}}")
            }
        }
    }
}
