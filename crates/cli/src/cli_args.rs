//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate, plus the small normalisation step that lets the historical `-eg`
//! spelling through.

use std::ffi::OsString;

use clap::Parser;

/// Spelling accepted for the examples flag that clap cannot express as a short flag.
const EXAMPLES_SHORTHAND: &str = "-eg";

/// Command-line arguments for the fzman CLI tool.
///
/// # Examples
///
/// ```rust
/// use fzman_cli::cli_args::Args;
///
/// let args = Args::parse_arguments(["fzman", "-eg", "tar"]).unwrap();
/// assert!(args.examples);
/// assert_eq!(args.target(), Some("tar"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "fzman",
    version,
    about = "Fuzzy-search installed manual pages and open the chosen one."
)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Show tldr examples in the preview and above the opened manual page.
    ///
    /// `-eg` and `--example` are accepted as well.
    #[arg(long, short = 'e', visible_alias = "example", action)]
    pub examples: bool,

    /// Path to the configuration file YAML.
    ///
    /// If not provided, defaults to `~/.fzman/config.yml` when that file exists.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Command whose manual page should be opened directly.
    ///
    /// If no manual entry exists, the interactive search opens instead. When
    /// several names are given, the last one is used.
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,
}

impl Args {
    /// Parses arguments after normalising `-eg`.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags, and for `--help`/`--version`,
    /// which clap reports as errors that print to standard output.
    pub fn parse_arguments<I, T>(arguments: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_arguments(arguments))
    }

    /// The direct target, last positional wins.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.commands.last().map(String::as_str)
    }
}

/// Rewrites `-eg` to `--examples`, leaving anything after `--` untouched.
pub fn normalize_arguments<I, T>(arguments: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_separator = false;

    arguments
        .into_iter()
        .map(Into::into)
        .map(|argument| {
            if argument == "--" {
                past_separator = true;
            }

            if !past_separator && argument == EXAMPLES_SHORTHAND {
                OsString::from("--examples")
            } else {
                argument
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_arguments(["fzman"]).unwrap();

        assert!(!args.examples);
        assert!(args.config_path.is_none());
        assert!(args.commands.is_empty());
        assert_eq!(args.target(), None);
    }

    #[test]
    fn test_examples_flag_spellings() {
        for flag in ["-e", "-eg", "--example", "--examples"] {
            let args = Args::parse_arguments(["fzman", flag]).unwrap();
            assert!(args.examples, "{flag} should enable examples");
        }
    }

    #[test]
    fn test_config_path_flags() {
        let args = Args::parse_arguments(["fzman", "-c", "/custom/config.yml"]).unwrap();
        assert_eq!(args.config_path, Some("/custom/config.yml".to_string()));

        let args = Args::parse_arguments(["fzman", "--config-path", "/other.yml"]).unwrap();
        assert_eq!(args.config_path, Some("/other.yml".to_string()));
    }

    #[test]
    fn test_last_positional_wins() {
        let args = Args::parse_arguments(["fzman", "ls", "git", "curl"]).unwrap();
        assert_eq!(args.target(), Some("curl"));
    }

    #[test]
    fn test_flag_after_target() {
        let args = Args::parse_arguments(["fzman", "tar", "-e"]).unwrap();

        assert!(args.examples);
        assert_eq!(args.target(), Some("tar"));
    }

    #[test]
    fn test_unknown_flag_is_error() {
        let error = Args::parse_arguments(["fzman", "--bogus"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
        assert!(error.use_stderr());
    }

    #[test]
    fn test_help_is_not_a_failure() {
        for flag in ["-h", "--help"] {
            let error = Args::parse_arguments(["fzman", flag]).unwrap_err();

            assert_eq!(error.kind(), ErrorKind::DisplayHelp);
            assert!(!error.use_stderr());
        }
    }

    #[test]
    fn test_normalize_leaves_arguments_after_separator() {
        let normalized = normalize_arguments(["fzman", "-eg", "--", "-eg"]);
        assert_eq!(normalized, vec!["fzman", "--examples", "--", "-eg"]);
    }
}
