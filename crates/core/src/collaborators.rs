//! External programs fzman delegates to, as read from configuration.
//!
//! Every field has a default so a missing or partial configuration file still
//! yields a usable set of collaborators.

use serde::Deserialize;

const DEFAULT_FINDER: &str = "fzf";
const DEFAULT_RENDERER: &str = "man";
const DEFAULT_HIGHLIGHTERS: [&str; 2] = ["bat", "batcat"];
const DEFAULT_EXAMPLE_PROVIDERS: [&str; 1] = ["tldr"];
const DEFAULT_COLUMN_FILTER: &str = "col -bx";
const DEFAULT_PREVIEW_WINDOW: &str = "right:60%:wrap";
const DEFAULT_PROMPT: &str = "man> ";
const DEFAULT_HEADER: &str = "Enter: open | Ctrl-/: toggle preview | Shift-Up/Down: scroll preview";

/// Key bindings and styling handed to the finder untouched.
const DEFAULT_FINDER_OPTIONS: [&str; 10] = [
    "--layout=reverse",
    "--border=rounded",
    "--bind",
    "ctrl-/:toggle-preview",
    "--bind",
    "shift-up:preview-up,shift-down:preview-down",
    "--bind",
    "ctrl-u:preview-half-page-up,ctrl-d:preview-half-page-down",
    "--bind",
    "esc:abort",
];

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Collaborators {
    /// Interactive fuzzy finder. Mandatory.
    pub finder: String,
    /// Manual page renderer, also used to list the index and check existence. Mandatory.
    pub renderer: String,
    /// Syntax highlighters, first one found on `PATH` wins.
    pub highlighters: Vec<String>,
    /// Example snippet providers, first one found on `PATH` wins.
    pub example_providers: Vec<String>,
    /// Filter stripping backspace overstrikes from raw renderer output.
    pub column_filter: String,
    pub preview_window: String,
    pub prompt: String,
    pub header: String,
    pub finder_options: Vec<String>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            finder: DEFAULT_FINDER.to_string(),
            renderer: DEFAULT_RENDERER.to_string(),
            highlighters: DEFAULT_HIGHLIGHTERS.map(String::from).to_vec(),
            example_providers: DEFAULT_EXAMPLE_PROVIDERS.map(String::from).to_vec(),
            column_filter: DEFAULT_COLUMN_FILTER.to_string(),
            preview_window: DEFAULT_PREVIEW_WINDOW.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            header: DEFAULT_HEADER.to_string(),
            finder_options: DEFAULT_FINDER_OPTIONS.map(String::from).to_vec(),
        }
    }
}

/// Guidance printed when a mandatory program is absent.
#[must_use]
pub fn install_hint(program: &str) -> String {
    match program {
        "fzf" => "Install it with your package manager (e.g. `apt install fzf` or `brew install fzf`).".to_string(),
        "man" => "Install man-db (e.g. `apt install man-db`) or your platform's manual page tools.".to_string(),
        other => format!("Install `{other}` or point the configuration at another program."),
    }
}
