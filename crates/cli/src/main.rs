use std::env;
use std::process::ExitCode;

use fzman_cli::cli_args::Args;
use fzman_cli::flow::{self, Start};
use fzman_cli::{display, finder, notices};
use fzman_core::capabilities::{self, SearchPath};
use fzman_core::config::{self, PreviewWidth};
use fzman_core::error::Result;
use fzman_core::file_handling;
use fzman_core::manual::SystemManual;
use fzman_core::preview::PreviewPipeline;
use fzman_core::session::{DisplayMode, Session};
use log::{debug, info};

fn execute(args: &Args) -> Result<ExitCode> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    let collaborators =
        file_handling::get_collaborators(&config_path, args.config_path.is_some())?;

    // Probe once, everything below works from this snapshot
    let search_path = SearchPath::from_env();
    capabilities::require(&search_path, &collaborators)?;
    let session = Session::new(
        DisplayMode::from_flag(args.examples),
        capabilities::probe(&search_path, &collaborators),
    );

    if session.downgraded {
        notices::examples_unavailable(&collaborators.example_providers);
    }

    let manual = SystemManual::new(&collaborators.renderer);

    let target = match flow::start(args.target(), &manual) {
        Start::Direct(target) => target,
        Start::Search { not_found } => {
            if let Some(name) = not_found {
                notices::target_not_found(&name);
            }

            let pipeline = PreviewPipeline::build(
                session.mode,
                &session.capabilities,
                PreviewWidth::default(),
                &collaborators,
            )?;

            let outcome = finder::run(&manual, &collaborators, &pipeline)?;
            let Some(target) = flow::chosen_target(&outcome) else {
                info!("No selection made, exiting");
                return Ok(ExitCode::SUCCESS);
            };

            target
        }
    };

    display::display(&target, &session, &manual)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::parse_arguments(env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            // Help and version land here too and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            notices::failure(e);
            ExitCode::FAILURE
        }
    }
}
