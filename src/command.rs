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

//! The command-line interface.

mod amend;
mod branch;
mod commit;
mod create;
mod fetch;
mod gpg;
pub mod helpers;
mod init;
mod log;
mod pull;
mod push;
mod stage;
mod status;
mod tag;

use clap::{Parser, Subcommand};
use eyre::Result;

pub use self::commit::{CommitOutcome, commit_flow};

use self::{
    amend::Amend,
    branch::Branch,
    commit::Commit,
    create::{Create, CreateError},
    fetch::Fetch,
    gpg::Gpg,
    init::Init,
    log::Log,
    pull::Pull,
    push::Push,
    stage::{Stage, StageError},
    status::Status,
    tag::{Tag, TagError},
};
use crate::{
    config::{CONFIG_FILE_NAME, ConfigError},
    error,
    git::{GitError, NotInGitWorktree},
    hint,
    prompt::{ConsoleError, PromptError},
};

/// Conventional commits from a declarative configuration.
///
/// Without a subcommand, runs the commit wizard.
#[derive(Debug, Parser)]
#[command(author, version = env!("VERSION_WITH_GIT"))]
pub struct Kommit {
    /// The subcommand to run.
    #[command(subcommand)]
    command: Option<KommitCommand>,
}

/// The subcommands.
#[derive(Debug, Subcommand)]
enum KommitCommand {
    /// Runs the commit wizard.
    Commit(Commit),
    /// Amends the last commit.
    Amend(Amend),
    /// Manages branches.
    Branch(Branch),
    /// Creates a default configuration file.
    #[command(alias = "create-config")]
    Create(Create),
    /// Fetches from remotes.
    Fetch(Fetch),
    /// Initialises a Git repository.
    Init(Init),
    /// Shows the recent commits or generates a changelog.
    Log(Log),
    /// Pulls from the upstream branch.
    Pull(Pull),
    /// Pushes to a remote.
    Push(Push),
    /// Tests or resets the GPG setup.
    Gpg(Gpg),
    /// Stages changes.
    Stage(Stage),
    /// Shows the status of the worktree.
    Status(Status),
    /// Lists or creates tags.
    Tag(Tag),
}

trait Command {
    /// Runs the command.
    fn run(&self) -> Result<()>;
}

impl Kommit {
    /// Runs kommit.
    #[expect(clippy::exit, reason = "usage errors exit with a status of 1")]
    pub fn run() -> Result<()> {
        let kommit = match Self::try_parse() {
            Ok(kommit) => kommit,
            Err(e) if e.use_stderr() => {
                e.print()?;
                std::process::exit(1);
            }
            Err(e) => e.exit(),
        };

        let command = kommit
            .command
            .unwrap_or_else(|| KommitCommand::Commit(Commit::default()));

        tracing::debug!(?command);

        let result = match command {
            KommitCommand::Commit(commit) => commit.run(),
            KommitCommand::Amend(amend) => amend.run(),
            KommitCommand::Branch(branch) => branch.run(),
            KommitCommand::Create(create) => create.run(),
            KommitCommand::Fetch(fetch) => fetch.run(),
            KommitCommand::Init(init) => init.run(),
            KommitCommand::Log(log) => log.run(),
            KommitCommand::Pull(pull) => pull.run(),
            KommitCommand::Push(push) => push.run(),
            KommitCommand::Gpg(gpg) => gpg.run(),
            KommitCommand::Stage(stage) => stage.run(),
            KommitCommand::Status(status) => status.run(),
            KommitCommand::Tag(tag) => tag.run(),
        };

        match result {
            Err(e) => handle_errors(e),
            Ok(()) => Ok(()),
        }
    }
}

#[expect(clippy::exit, reason = "known errors exit with a status of 1")]
fn handle_errors(e: color_eyre::Report) -> Result<()> {
    if let Some(e) = e.downcast_ref::<ConfigError>() {
        error!("{e}");
        match e {
            ConfigError::NotFound { .. } => {
                hint!("You can create one by running `kommit create`.");
            }
            ConfigError::Syntax(syntax_error) => hint!("{syntax_error}"),
            _ => hint!("Please check your {CONFIG_FILE_NAME}."),
        }
    } else if let Some(e) = e.downcast_ref::<CreateError>() {
        error!("{e}");
        hint!("You can force the command by running `kommit create -f`.");
    } else if let Some(e) = e.downcast_ref::<PromptError>() {
        match e {
            PromptError::Console(
                ConsoleError::Cancelled | ConsoleError::Interrupted,
            ) => error!("Commit aborted."),
            _ => error!("{e}"),
        }
    } else if let Some(e) = e.downcast_ref::<NotInGitWorktree>() {
        error!("{e}");
        if let NotInGitWorktree::NotInRepo = e {
            hint!("You can initialise one by running `kommit init`.");
        }
    } else if let Some(e) = e.downcast_ref::<GitError>() {
        error!("{e}");
        if let GitError::Failed { stderr, .. } = e
            && !stderr.trim().is_empty()
        {
            eprintln!("{}", stderr.trim_end());
        }
    } else if let Some(e) = e.downcast_ref::<StageError>() {
        error!("{e}");
        hint!("You can pass some files, or stage everything with `-a`.");
    } else if let Some(e) = e.downcast_ref::<TagError>() {
        error!("{e}");
        hint!("You can pass a tag name, or list the tags with `-l`.");
    } else {
        return Err(e);
    }

    std::process::exit(1);
}
