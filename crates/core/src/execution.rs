use std::process::{Command, ExitCode, ExitStatus, Stdio};

use log::{debug, info};

use crate::error::{Error, Result};

/// Program and arguments of a command, for log lines.
fn describe(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(
        command
            .get_args()
            .map(|argument| argument.to_string_lossy().into_owned()),
    );
    parts.join(" ")
}

/// Runs a command quietly and reports whether it succeeded.
///
/// Failing to start counts as failure.
pub fn succeeds(mut command: Command) -> bool {
    let status = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) => status.success(),
        Err(e) => {
            debug!("Could not run `{}`: {}", describe(&command), e);
            false
        }
    }
}

/// Captures the standard output of a command.
///
/// Returns `None` when the command cannot start, exits with failure, or prints
/// nothing but whitespace.
pub fn capture_output(mut command: Command) -> Option<String> {
    let output = command
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(output) if output.status.success() => {
            let text = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
            if text.trim().is_empty() {
                None
            } else {
                Some(text)
            }
        }
        Ok(output) => {
            debug!("`{}` exited with {}", describe(&command), output.status);
            None
        }
        Err(e) => {
            debug!("Could not run `{}`: {}", describe(&command), e);
            None
        }
    }
}

/// Streams the output of `producer` into `consumer` and captures what the
/// consumer prints. The consumer keeps the terminal through standard error.
///
/// # Errors
///
/// Returns an error if either process cannot be started or waited on.
pub fn pipe_into(mut producer: Command, mut consumer: Command) -> Result<(ExitStatus, String)> {
    let mut producer = producer
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let Some(producer_stdout) = producer.stdout.take() else {
        return Err(Error::SubProcess(std::io::Error::other(
            "producer standard output was not captured",
        )));
    };

    let output = consumer
        .stdin(Stdio::from(producer_stdout))
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .and_then(|child| child.wait_with_output());

    // The consumer may finish, or fail to start, before the producer is done writing
    let _ = producer.kill();
    let _ = producer.wait();

    let output = output?;
    Ok((
        output.status,
        String::from_utf8_lossy(&output.stdout).into_owned(),
    ))
}

/// Gives the terminal to `command` for good.
///
/// On Unix the current process image is replaced and this only returns on failure.
///
/// # Errors
///
/// Returns an error if the command cannot be started.
#[cfg(unix)]
pub fn hand_off(mut command: Command) -> Result<ExitCode> {
    use std::os::unix::process::CommandExt;

    info!("Handing terminal to `{}`", describe(&command));
    Err(Error::SubProcess(command.exec()))
}

/// Gives the terminal to `command` and forwards its exit status.
///
/// # Errors
///
/// Returns an error if the command cannot be started or waited on.
#[cfg(not(unix))]
pub fn hand_off(mut command: Command) -> Result<ExitCode> {
    info!("Handing terminal to `{}`", describe(&command));

    let status = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    Ok(exit_code_of(status))
}

/// Maps a child's exit status to this process's exit code.
#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> ExitCode {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from)
}
