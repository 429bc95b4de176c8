//! End-to-end tests for the fzman binary and its decision flow.
//!
//! The binary runs against a `PATH` holding only fake collaborators written
//! as shell scripts, so no real finder or manual is needed.

use fzman_cli::cli_args::Args;
use fzman_cli::finder::{finder_command, FinderOutcome};
use fzman_cli::flow::{chosen_target, start, Start};
use fzman_core::capabilities::{probe, Locator};
use fzman_core::collaborators::Collaborators;
use fzman_core::config::PreviewWidth;
use fzman_core::manual::ManualIndex;
use fzman_core::preview::{PreviewPipeline, PreviewVariant};
use fzman_core::selection::ManualTarget;
use fzman_core::session::{DisplayMode, Session};

struct Everything;

impl Locator for Everything {
    fn is_available(&self, _program: &str) -> bool {
        true
    }
}

struct Pages(&'static [&'static str]);

impl ManualIndex for Pages {
    fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|page| *page == name)
    }
}

fn finder_arguments(args: &Args) -> Vec<String> {
    let collaborators = Collaborators::default();
    let session = Session::new(
        DisplayMode::from_flag(args.examples),
        probe(&Everything, &collaborators),
    );
    let pipeline = PreviewPipeline::build(
        session.mode,
        &session.capabilities,
        PreviewWidth::default(),
        &collaborators,
    )
    .unwrap();

    finder_command(&collaborators, &pipeline)
        .get_args()
        .map(|argument| argument.to_string_lossy().into_owned())
        .collect()
}

/// No arguments with every optional tool installed previews highlighted examples
#[test]
fn test_interactive_session_with_all_tools() {
    let args = Args::parse_arguments(["fzman", "--examples"]).unwrap();
    let collaborators = Collaborators::default();
    let capabilities = probe(&Everything, &collaborators);

    assert_eq!(start(args.target(), &Pages(&[])), Start::Search { not_found: None });

    let pipeline = PreviewPipeline::build(
        DisplayMode::from_flag(args.examples),
        &capabilities,
        PreviewWidth::default(),
        &collaborators,
    )
    .unwrap();
    assert_eq!(pipeline.variant(), PreviewVariant::HighlightedExamples);
    assert!(finder_arguments(&args).contains(&pipeline.as_str().to_string()));
}

/// A known direct target skips the finder
#[test]
fn test_known_direct_target() {
    let args = Args::parse_arguments(["fzman", "git"]).unwrap();

    assert_eq!(
        start(args.target(), &Pages(&["git", "ls"])),
        Start::Direct(ManualTarget::new("git", ""))
    );
}

/// An unknown direct target searches the full list without a query
#[test]
fn test_unknown_direct_target_searches_everything() {
    let args = Args::parse_arguments(["fzman", "zzznotacommand"]).unwrap();

    assert_eq!(
        start(args.target(), &Pages(&["git"])),
        Start::Search {
            not_found: Some("zzznotacommand".to_string())
        }
    );

    let arguments = finder_arguments(&args);
    assert!(!arguments.iter().any(|argument| argument.contains("zzznotacommand")));
    assert!(!arguments.iter().any(|argument| argument.starts_with("--query")));
}

/// Cancelling the finder resolves nothing
#[test]
fn test_cancelled_finder_resolves_nothing() {
    assert_eq!(chosen_target(&FinderOutcome::Cancelled), None);
}

#[cfg(unix)]
mod binary {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::process::{Command, Output};

    use tempfile::TempDir;

    struct Sandbox {
        tools: TempDir,
        config: PathBuf,
    }

    impl Sandbox {
        fn new() -> Self {
            let tools = tempfile::tempdir().unwrap();
            let config = tools.path().join("config.yml");
            fs::write(&config, "").unwrap();
            Self { tools, config }
        }

        fn install(&self, name: &str, script: &str) {
            let path = self.tools.path().join(name);
            fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        fn log(&self, name: &str) -> PathBuf {
            self.tools.path().join(format!("{name}.log"))
        }

        /// A finder that records its arguments, drains its input, then exits with `code`.
        fn install_finder(&self, code: i32) {
            let log = self.log("fzf");
            self.install(
                "fzf",
                &format!(
                    "printf '%s\\n' \"$@\" > '{}'\nwhile read -r _; do :; done\nexit {code}",
                    log.display()
                ),
            );
        }

        /// A manual that knows only `git`, logs every call and prints what it renders.
        fn install_manual(&self) {
            let log = self.log("man");
            self.install(
                "man",
                &format!(
                    "echo \"$*\" >> '{}'\n\
                     case \"$1\" in\n\
                     -w) [ \"$2\" = git ] && exit 0; exit 16 ;;\n\
                     -k) echo 'git (1) - the stupid content tracker'; exit 0 ;;\n\
                     esac\n\
                     echo \"RENDERED $*\"",
                    log.display()
                ),
            );
        }

        fn run(&self, arguments: &[&str]) -> Output {
            Command::new(env!("CARGO_BIN_EXE_fzman"))
                .arg("--config-path")
                .arg(&self.config)
                .args(arguments)
                .env("PATH", self.tools.path())
                .env_remove("RUST_LOG")
                .output()
                .unwrap()
        }
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn test_unknown_flag_exits_with_failure() {
        let sandbox = Sandbox::new();
        sandbox.install_finder(0);
        sandbox.install_manual();

        let output = sandbox.run(&["--bogus"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("--help"));
        assert!(!sandbox.log("fzf").exists());
        assert!(!sandbox.log("man").exists());
    }

    #[test]
    fn test_help_exits_with_success() {
        let sandbox = Sandbox::new();
        let output = sandbox.run(&["--help"]);

        assert_eq!(output.status.code(), Some(0));
        assert!(String::from_utf8_lossy(&output.stdout).contains("--examples"));
    }

    #[test]
    fn test_missing_finder_exits_with_failure() {
        let sandbox = Sandbox::new();
        sandbox.install_manual();

        let output = sandbox.run(&[]);

        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("fzf"));
    }

    #[test]
    fn test_known_target_renders_without_finder() {
        let sandbox = Sandbox::new();
        sandbox.install_finder(0);
        sandbox.install_manual();

        let output = sandbox.run(&["git"]);

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "RENDERED git");
        assert!(!sandbox.log("fzf").exists());
    }

    #[test]
    fn test_unknown_target_opens_finder_over_full_index() {
        let sandbox = Sandbox::new();
        sandbox.install_finder(130);
        sandbox.install_manual();

        let output = sandbox.run(&["zzznotacommand"]);

        assert_eq!(output.status.code(), Some(0));
        assert!(String::from_utf8_lossy(&output.stderr).contains("zzznotacommand"));

        let finder_arguments = read(&sandbox.log("fzf"));
        assert!(finder_arguments.contains("--no-multi"));
        assert!(!finder_arguments.contains("zzznotacommand"));
        assert!(read(&sandbox.log("man")).contains("-k ."));
    }

    #[test]
    fn test_cancelled_finder_renders_nothing() {
        let sandbox = Sandbox::new();
        sandbox.install_finder(130);
        sandbox.install_manual();

        let output = sandbox.run(&[]);

        assert_eq!(output.status.code(), Some(0));
        assert!(output.stdout.is_empty());
        let manual_calls = read(&sandbox.log("man"));
        assert_eq!(manual_calls.trim(), "-k .");
    }

    #[test]
    fn test_examples_without_provider_warns_and_continues() {
        let sandbox = Sandbox::new();
        sandbox.install_finder(130);
        sandbox.install_manual();

        let output = sandbox.run(&["-eg"]);

        assert_eq!(output.status.code(), Some(0));
        assert!(String::from_utf8_lossy(&output.stderr).contains("tldr"));
        assert!(!read(&sandbox.log("fzf")).contains("TLDR EXAMPLES"));
    }

    #[test]
    fn test_examples_preview_with_all_tools() {
        let sandbox = Sandbox::new();
        sandbox.install_finder(130);
        sandbox.install_manual();
        sandbox.install("bat", "while read -r line; do echo \"$line\"; done");
        sandbox.install("tldr", "echo \"examples for $1\"");

        let output = sandbox.run(&["--examples"]);

        assert_eq!(output.status.code(), Some(0));
        let finder_arguments = read(&sandbox.log("fzf"));
        assert!(finder_arguments.contains("TLDR EXAMPLES"));
        assert!(finder_arguments.contains("| bat --language man"));
    }

    #[test]
    fn test_chosen_line_is_rendered_with_section() {
        let sandbox = Sandbox::new();
        let log = sandbox.log("fzf");
        sandbox.install(
            "fzf",
            &format!(
                "printf '%s\\n' \"$@\" > '{}'\nwhile read -r _; do :; done\necho 'git (1) - the stupid content tracker'",
                log.display()
            ),
        );
        sandbox.install_manual();

        let output = sandbox.run(&[]);

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "RENDERED 1 git");
    }
}
