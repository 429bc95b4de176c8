use std::process::ExitStatus;

use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Required program `{}` was not found on PATH. {}", .program, .install_hint)]
    MissingRequiredCollaborator {
        program: String,
        install_hint: String,
    },

    #[error("The sub process `{}` exiting with non-success code ({}).", .program, .status)]
    SubProcessExit { program: String, status: ExitStatus },

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("The configured {} command is empty.", .0)]
    EmptyProgram(String),

    #[error("Error parsing preview template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering preview template: {}", .0)]
    Render(#[from] RenderError),
}

impl Error {
    pub fn missing_required(program: &str, install_hint: &str) -> Self {
        Self::MissingRequiredCollaborator {
            program: program.to_string(),
            install_hint: install_hint.to_string(),
        }
    }

    pub fn sub_process_exit(program: &str, status: ExitStatus) -> Self {
        Self::SubProcessExit {
            program: program.to_string(),
            status,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
