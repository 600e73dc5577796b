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

//! Git and GPG invocations.

use thiserror::Error;

use crate::{
    runner::{CommandOutput, CommandRunner, RunError},
    tracing::LogResult as _,
};

/// The format of `git log --pretty`.
const PRETTY_LOG_FORMAT: &str = "--pretty=format:%C(yellow)%h%Creset \
    %C(green)%ad%Creset | %s %C(red)[%an]%Creset";

/// Git operations.
#[derive(Debug, Clone, Copy)]
pub struct Git<'a> {
    /// The runner used to call `git`.
    runner: &'a dyn CommandRunner,
}

/// GPG operations.
#[derive(Debug, Clone, Copy)]
pub struct Gpg<'a> {
    /// The runner used to call the GPG tools.
    runner: &'a dyn CommandRunner,
}

/// Errors that can occur when calling Git or GPG.
#[derive(Debug, Error)]
pub enum GitError {
    /// The command cannot be run.
    #[error(transparent)]
    Run(#[from] RunError),
    /// The command has returned an error.
    #[error("`{command}` has returned an error")]
    Failed {
        /// The command.
        command: String,
        /// The status code returned by the command.
        status_code: Option<i32>,
        /// The captured stderr.
        stderr: String,
    },
}

/// Errors that can occur when not inside a Git worktree.
#[derive(Debug, Error)]
pub enum NotInGitWorktree {
    /// Git cannot be run.
    #[error("Failed to run the git command")]
    CannotRunGit(#[from] RunError),
    /// The command is not run from inside a Git repository.
    #[error("Not in a Git repository")]
    NotInRepo,
    /// The command is not run from inside a Git worktree.
    #[error("Not inside a Git worktree")]
    NotInWorktree,
}

/// Where to fetch from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFrom<'r> {
    /// The default remote.
    Default,
    /// A given remote.
    Remote(&'r str),
    /// All remotes.
    All,
}

impl<'a> Git<'a> {
    /// Builds a Git interface over a runner.
    pub const fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Ensures the command is run from a Git worktree.
    #[tracing::instrument(
        name = "ensure_in_worktree",
        level = "trace",
        skip_all
    )]
    pub fn ensure_in_worktree(&self) -> Result<(), NotInGitWorktree> {
        let output = self
            .runner
            .run("git", &["rev-parse", "--is-inside-work-tree"])?;

        if !output.success() {
            return Err(NotInGitWorktree::NotInRepo).log_err();
        }

        if output.stdout.trim() == "true" {
            Ok(())
        } else {
            Err(NotInGitWorktree::NotInWorktree).log_err()
        }
    }

    /// Returns whether some changes are staged.
    ///
    /// A failure to check counts as no staged changes.
    #[tracing::instrument(
        name = "has_staged_changes",
        level = "trace",
        skip_all
    )]
    pub fn has_staged_changes(&self) -> bool {
        match self.git(&["diff", "--cached", "--name-only"]) {
            Ok(output) => !output.stdout.trim().is_empty(),
            Err(error) => {
                tracing::warn!(?error, "cannot check the staged changes");
                false
            }
        }
    }

    /// Stages all changes.
    pub fn stage_all(&self) -> Result<(), GitError> {
        self.git(&["add", "."]).map(drop)
    }

    /// Stages some files.
    pub fn stage_files(&self, files: &[String]) -> Result<(), GitError> {
        let mut args = vec!["add", "--"];
        args.extend(files.iter().map(String::as_str));
        self.git(&args).map(drop)
    }

    /// Commits the staged changes with a message.
    #[tracing::instrument(name = "git_commit", level = "trace", skip_all)]
    pub fn commit(&self, message: &str) -> Result<CommandOutput, GitError> {
        self.git(&["commit", "-m", message])
    }

    /// Amends the last commit.
    ///
    /// Without `no_edit`, Git opens an editor, so the command is attached to
    /// the terminal.
    #[tracing::instrument(name = "git_amend", level = "trace", skip_all)]
    pub fn amend(&self, no_edit: bool) -> Result<(), GitError> {
        if no_edit {
            return self.git(&["commit", "--amend", "--no-edit"]).map(drop);
        }

        let status_code =
            self.runner.run_attached("git", &["commit", "--amend"])?;

        if status_code == Some(0) {
            Ok(())
        } else {
            Err(GitError::Failed {
                command: String::from("git commit --amend"),
                status_code,
                stderr: String::new(),
            })
            .log_err()
        }
    }

    /// Pushes to a remote.
    pub fn push(
        &self,
        remote: Option<&str>,
        branch: Option<&str>,
    ) -> Result<CommandOutput, GitError> {
        let mut args = vec!["push"];
        args.extend(remote);
        args.extend(branch);
        self.git(&args)
    }

    /// Pulls from the upstream branch.
    pub fn pull(&self) -> Result<CommandOutput, GitError> {
        self.git(&["pull"])
    }

    /// Fetches from remotes.
    pub fn fetch(
        &self,
        from: FetchFrom<'_>,
        prune: bool,
    ) -> Result<CommandOutput, GitError> {
        let mut args = vec!["fetch"];

        match from {
            FetchFrom::Default => {}
            FetchFrom::Remote(remote) => args.push(remote),
            FetchFrom::All => args.push("--all"),
        }

        if prune {
            args.push("--prune");
        }

        self.git(&args)
    }

    /// Returns the status of the worktree.
    pub fn status(&self) -> Result<String, GitError> {
        self.git(&["status"]).map(|output| output.stdout)
    }

    /// Initialises a repository in the current directory.
    pub fn init(&self) -> Result<CommandOutput, GitError> {
        self.git(&["init"])
    }

    /// Returns the last `count` commits.
    pub fn log(&self, count: usize, pretty: bool) -> Result<String, GitError> {
        let count = count.to_string();

        let mut args = vec!["log", "-n", count.as_str()];
        if pretty {
            args.extend([PRETTY_LOG_FORMAT, "--date=short"]);
        }

        self.git(&args).map(|output| output.stdout)
    }

    /// Returns the subjects of the last `count` commits, or of all commits.
    pub fn log_subjects(
        &self,
        count: Option<usize>,
    ) -> Result<Vec<String>, GitError> {
        let count = count.map(|count| count.to_string());

        let mut args = vec!["log", "--pretty=format:%s"];
        if let Some(count) = &count {
            args.extend(["-n", count.as_str()]);
        }

        let output = self.git(&args)?;

        Ok(output.stdout.lines().map(str::to_owned).collect())
    }

    /// Returns the list of local branches.
    pub fn branches(&self) -> Result<String, GitError> {
        self.git(&["branch"]).map(|output| output.stdout)
    }

    /// Creates a branch, optionally checking it out.
    pub fn create_branch(
        &self,
        name: &str,
        checkout: bool,
    ) -> Result<(), GitError> {
        if checkout {
            self.git(&["checkout", "-b", name]).map(drop)
        } else {
            self.git(&["branch", name]).map(drop)
        }
    }

    /// Switches to a branch.
    pub fn switch_branch(&self, name: &str) -> Result<(), GitError> {
        self.git(&["checkout", name]).map(drop)
    }

    /// Deletes a merged branch.
    pub fn delete_branch(&self, name: &str) -> Result<(), GitError> {
        self.git(&["branch", "-d", name]).map(drop)
    }

    /// Merges a branch into the current one.
    pub fn merge(&self, name: &str) -> Result<CommandOutput, GitError> {
        self.git(&["merge", name])
    }

    /// Rebases the current branch onto another one.
    pub fn rebase(&self, name: &str) -> Result<CommandOutput, GitError> {
        self.git(&["rebase", name])
    }

    /// Returns the list of tags.
    pub fn tags(&self) -> Result<String, GitError> {
        self.git(&["tag"]).map(|output| output.stdout)
    }

    /// Creates a tag, annotated when a message is given.
    pub fn create_tag(
        &self,
        name: &str,
        message: Option<&str>,
    ) -> Result<(), GitError> {
        let output = match message {
            Some(message) => self.git(&["tag", "-a", name, "-m", message])?,
            None => self.git(&["tag", name])?,
        };

        tracing::debug!(stdout = output.stdout, "tag created");
        Ok(())
    }

    /// Runs a Git command, failing on a non-zero exit code.
    fn git(&self, args: &[&str]) -> Result<CommandOutput, GitError> {
        checked(self.runner.run("git", args)?, "git", args)
    }
}

impl<'a> Gpg<'a> {
    /// Builds a GPG interface over a runner.
    pub const fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Clear-signs a text, returning the signed text.
    #[tracing::instrument(name = "gpg_clearsign", level = "trace", skip_all)]
    pub fn clearsign(&self, text: &str) -> Result<String, GitError> {
        let args = ["--clearsign"];
        let output = self.runner.run_with_input("gpg", &args, Some(text))?;
        checked(output, "gpg", &args).map(|output| output.stdout)
    }

    /// Restarts the GPG agent.
    #[tracing::instrument(name = "gpg_reset", level = "trace", skip_all)]
    pub fn reset_agent(&self) -> Result<(), GitError> {
        let kill = ["--kill", "gpg-agent"];
        checked(self.runner.run("gpgconf", &kill)?, "gpgconf", &kill)?;

        let start = ["/bye"];
        checked(
            self.runner.run("gpg-connect-agent", &start)?,
            "gpg-connect-agent",
            &start,
        )?;

        Ok(())
    }
}

/// Turns a non-zero exit code into an error.
fn checked(
    output: CommandOutput,
    program: &str,
    args: &[&str],
) -> Result<CommandOutput, GitError> {
    tracing::debug!(exit_code = ?output.exit_code, program);

    if output.success() {
        Ok(output)
    } else {
        Err(GitError::Failed {
            command: format!("{program} {}", args.join(" ")).trim().to_owned(),
            status_code: output.exit_code,
            stderr: output.stderr,
        })
        .log_err()
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use super::*;
    use crate::runner::fake::FakeRunner;

    #[test]
    fn inside_a_worktree() {
        let runner = FakeRunner::default().with_output(0, "true\n");

        assert!(Git::new(&runner).ensure_in_worktree().is_ok());
        assert_eq!(runner.calls(), ["git rev-parse --is-inside-work-tree"]);
    }

    #[test]
    fn inside_a_git_directory() {
        let runner = FakeRunner::default().with_output(0, "false\n");

        assert!(matches!(
            Git::new(&runner).ensure_in_worktree(),
            Err(NotInGitWorktree::NotInWorktree)
        ));
    }

    #[test]
    fn outside_a_repository() {
        let runner = FakeRunner::default().with_output(128, "");

        assert!(matches!(
            Git::new(&runner).ensure_in_worktree(),
            Err(NotInGitWorktree::NotInRepo)
        ));
    }

    #[test]
    fn staged_changes_are_listed_files() {
        let runner = FakeRunner::default()
            .with_output(0, "src/main.rs\n")
            .with_output(0, "");
        let git = Git::new(&runner);

        assert!(git.has_staged_changes());
        assert!(!git.has_staged_changes());
        assert_eq!(runner.calls()[0], "git diff --cached --name-only");
    }

    #[test]
    fn failed_staging_checks_count_as_nothing_staged() {
        let runner = FakeRunner::default().with_output(1, "src/main.rs\n");

        assert!(!Git::new(&runner).has_staged_changes());
    }

    #[test]
    fn commit_passes_the_message_as_one_argument() {
        let runner = FakeRunner::default();

        Git::new(&runner).commit("feat(ui): add thing").unwrap();

        assert_eq!(runner.calls(), ["git commit -m feat(ui): add thing"]);
    }

    #[test]
    fn failures_carry_the_command_and_status() {
        let runner = FakeRunner::default().with_output(1, "");

        let error = Git::new(&runner).push(Some("origin"), None).unwrap_err();

        assert!(matches!(
            error,
            GitError::Failed { command, status_code: Some(1), .. }
                if command == "git push origin"
        ));
    }

    #[test]
    fn fetch_arguments() {
        let runner = FakeRunner::default();
        let git = Git::new(&runner);

        git.fetch(FetchFrom::Default, false).unwrap();
        git.fetch(FetchFrom::Remote("upstream"), true).unwrap();
        git.fetch(FetchFrom::All, true).unwrap();

        assert_eq!(runner.calls(), [
            "git fetch",
            "git fetch upstream --prune",
            "git fetch --all --prune",
        ]);
    }

    #[test]
    fn stage_files_separates_paths_from_options() {
        let runner = FakeRunner::default();

        Git::new(&runner)
            .stage_files(&[String::from("-weird"), String::from("README.md")])
            .unwrap();

        assert_eq!(runner.calls(), ["git add -- -weird README.md"]);
    }

    #[test]
    fn tags_are_annotated_when_a_message_is_given() {
        let runner = FakeRunner::default();
        let git = Git::new(&runner);

        git.create_tag("v1.0.0", Some("First release")).unwrap();
        git.create_tag("v1.0.1", None).unwrap();

        assert_eq!(runner.calls(), [
            "git tag -a v1.0.0 -m First release",
            "git tag v1.0.1",
        ]);
    }

    #[test]
    fn branch_creation_can_check_out() {
        let runner = FakeRunner::default();
        let git = Git::new(&runner);

        git.create_branch("feature/a", true).unwrap();
        git.create_branch("feature/b", false).unwrap();

        assert_eq!(runner.calls(), [
            "git checkout -b feature/a",
            "git branch feature/b",
        ]);
    }

    #[test]
    fn pretty_log_uses_a_one_line_format() {
        let runner = FakeRunner::default();

        Git::new(&runner).log(5, true).unwrap();

        assert_eq!(runner.calls(), [
            "git log -n 5 --pretty=format:%C(yellow)%h%Creset %C(green)%ad%Creset \
             | %s %C(red)[%an]%Creset --date=short"
        ]);
    }

    #[test]
    fn log_subjects_are_split_by_line() {
        let runner =
            FakeRunner::default().with_output(0, "feat: a\nfix(ui): b");

        let subjects = Git::new(&runner).log_subjects(Some(10)).unwrap();

        assert_eq!(subjects, ["feat: a", "fix(ui): b"]);
        assert_eq!(runner.calls(), ["git log --pretty=format:%s -n 10"]);
    }

    #[test]
    fn log_subjects_can_cover_the_whole_history() {
        let runner = FakeRunner::default();

        Git::new(&runner).log_subjects(None).unwrap();

        assert_eq!(runner.calls(), ["git log --pretty=format:%s"]);
    }

    #[test]
    fn gpg_clearsign_pipes_the_text() {
        let runner = FakeRunner::default().with_output(0, "-----BEGIN PGP");

        let signed = Gpg::new(&runner).clearsign("test").unwrap();

        assert_eq!(signed, "-----BEGIN PGP");
        assert_eq!(runner.calls(), ["gpg --clearsign"]);
        assert_eq!(runner.inputs(), ["test"]);
    }

    #[test]
    fn gpg_reset_kills_then_restarts_the_agent() {
        let runner = FakeRunner::default();

        Gpg::new(&runner).reset_agent().unwrap();

        assert_eq!(runner.calls(), [
            "gpgconf --kill gpg-agent",
            "gpg-connect-agent /bye",
        ]);
    }

    #[test]
    fn gpg_reset_stops_when_the_kill_fails() {
        let runner = FakeRunner::default().with_output(2, "");

        assert!(Gpg::new(&runner).reset_agent().is_err());
        assert_eq!(runner.calls(), ["gpgconf --kill gpg-agent"]);
    }
}
