// kommit - Conventional commits from a declarative configuration.
// Copyright (C) 2026 Jean-Philippe Cugnet <jean-philippe@cugnet.eu>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Running external commands.

use std::{
    fmt,
    io::{self, Write as _},
    process::{Command, Stdio},
};

use thiserror::Error;

use crate::tracing::LogResult as _;

/// Runs external commands.
pub trait CommandRunner: fmt::Debug {
    /// Runs a command, optionally writing `input` to its stdin.
    ///
    /// Without input, the command inherits the stdin of the process. Its
    /// stdout and stderr are captured.
    fn run_with_input(
        &self,
        program: &str,
        args: &[&str],
        input: Option<&str>,
    ) -> Result<CommandOutput, RunError>;

    /// Runs a command.
    fn run(
        &self,
        program: &str,
        args: &[&str],
    ) -> Result<CommandOutput, RunError> {
        self.run_with_input(program, args, None)
    }

    /// Runs a command attached to the terminal, returning its exit code.
    ///
    /// Nothing is captured, so that the command can interact with the user,
    /// like when opening an editor.
    fn run_attached(
        &self,
        program: &str,
        args: &[&str],
    ) -> Result<Option<i32>, RunError> {
        self.run(program, args).map(|output| output.exit_code)
    }
}

/// The output of a finished command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// The exit code, if the command has not been killed by a signal.
    pub exit_code: Option<i32>,
    /// The captured stdout.
    pub stdout: String,
    /// The captured stderr.
    pub stderr: String,
}

/// Errors that can occur when running a command.
#[derive(Debug, Error)]
pub enum RunError {
    /// The command cannot be run.
    #[error("Failed to run `{command}`")]
    CannotRun {
        /// The command that cannot be run.
        command: String,
        /// The OS error.
        #[source]
        os_error: io::Error,
    },
}

/// A runner spawning processes on the system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandOutput {
    /// Returns whether the command has exited with 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl CommandRunner for SystemRunner {
    #[tracing::instrument(name = "system_runner", level = "trace", skip_all)]
    fn run_with_input(
        &self,
        program: &str,
        args: &[&str],
        input: Option<&str>,
    ) -> Result<CommandOutput, RunError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::inherit()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::info!(?command, "running a command");

        let cannot_run = |os_error| RunError::CannotRun {
            command: format!("{program} {}", args.join(" ")).trim().to_owned(),
            os_error,
        };

        let mut child = command.spawn().map_err(cannot_run).log_err()?;

        if let Some(input) = input
            && let Some(mut stdin) = child.stdin.take()
        {
            stdin
                .write_all(input.as_bytes())
                .map_err(cannot_run)
                .log_err()?;
        }

        let output = child.wait_with_output().map_err(cannot_run).log_err()?;

        tracing::debug!(status = ?output.status);

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    #[tracing::instrument(
        name = "system_runner_attached",
        level = "trace",
        skip_all
    )]
    fn run_attached(
        &self,
        program: &str,
        args: &[&str],
    ) -> Result<Option<i32>, RunError> {
        let mut command = Command::new(program);
        command.args(args);

        tracing::info!(?command, "running an attached command");

        let status = command
            .status()
            .map_err(|os_error| RunError::CannotRun {
                command: format!("{program} {}", args.join(" "))
                    .trim()
                    .to_owned(),
                os_error,
            })
            .log_err()?;

        tracing::debug!(?status);

        Ok(status.code())
    }
}
