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

//! The `commit` subcommand.

use std::path::PathBuf;

use clap::Parser;
use eyre::Result;

use crate::{
    config::{CONFIG_FILE_NAME, ResolvedConfig},
    git::Git,
    hint,
    message::assemble,
    prompt::{Console, Wizard, console::console},
    runner::{CommandRunner, SystemRunner},
    staging::{
        PostCommitAction, PreflightAction, decide_post_commit,
        decide_preflight, needs_staging_state,
    },
    success, warning,
};

use super::helpers::print_output;

/// The commit command.
#[derive(Debug, Parser)]
pub struct Commit {
    /// Path to the configuration file.
    #[arg(long, short = 'c', default_value = CONFIG_FILE_NAME)]
    config: PathBuf,
    /// Print the commit message instead of calling `git commit`.
    #[arg(long)]
    print_only: bool,
}

/// How the commit flow has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The message has been built but not committed.
    Printed(String),
    /// The user has declined the message.
    Aborted,
    /// The changes have been committed.
    Committed {
        /// Whether the commit has been pushed.
        pushed: bool,
    },
}

impl Default for Commit {
    fn default() -> Self {
        Self {
            config: PathBuf::from(CONFIG_FILE_NAME),
            print_only: false,
        }
    }
}

impl super::Command for Commit {
    fn run(&self) -> Result<()> {
        let config = ResolvedConfig::load(&self.config)?;
        let mut console = console();

        match commit_flow(
            &config,
            console.as_mut(),
            &SystemRunner,
            self.print_only,
        )? {
            CommitOutcome::Printed(message) => println!("{message}"),
            CommitOutcome::Aborted => warning!("Commit aborted."),
            CommitOutcome::Committed { pushed: false } => {
                success!("Changes committed.");
            }
            CommitOutcome::Committed { pushed: true } => {
                success!("Changes committed and pushed.");
            }
        }

        Ok(())
    }
}

/// Runs the whole commit flow.
///
/// With `print_only`, the flow stops once the message is built: there is no
/// staging check, no confirmation and no push.
#[tracing::instrument(name = "commit_flow", level = "trace", skip_all)]
pub fn commit_flow(
    config: &ResolvedConfig,
    console: &mut dyn Console,
    runner: &dyn CommandRunner,
    print_only: bool,
) -> Result<CommitOutcome> {
    let git = Git::new(runner);

    if print_only {
        let answers = Wizard::new(config, console).run()?;
        return Ok(CommitOutcome::Printed(assemble(&answers, &config.options)));
    }

    git.ensure_in_worktree()?;

    if needs_staging_state(&config.options) {
        let staged = git.has_staged_changes();
        let action = decide_preflight(staged, &config.options);
        tracing::debug!(staged, ?action);

        match action {
            PreflightAction::Proceed => {}
            PreflightAction::AutoStage => match git.stage_all() {
                Ok(()) => {
                    hint!("Nothing was staged, so all changes were added.");
                }
                Err(error) => warning!("Failed to stage the changes: {error}"),
            },
            PreflightAction::Remind => {
                warning!("No changes are staged.");
                hint!("You can stage them by running `kommit stage -a`.");
            }
        }
    }

    let mut wizard = Wizard::new(config, console);
    let answers = wizard.run()?;
    let message = assemble(&answers, &config.options);

    if !wizard.confirm_commit(&message)? {
        return Ok(CommitOutcome::Aborted);
    }

    let committed = git.commit(&message);
    let action = decide_post_commit(committed.is_ok(), &config.options);
    print_output(&committed?);

    let pushed = match action {
        PostCommitAction::Push => {
            print_output(&git.push(None, None)?);
            true
        }
        PostCommitAction::NoOp => false,
    };

    Ok(CommitOutcome::Committed { pushed })
}
