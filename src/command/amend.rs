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

//! The `amend` subcommand.

use clap::Parser;
use eyre::Result;

use crate::{git::Git, runner::SystemRunner, success};

/// The amend command.
#[derive(Debug, Parser)]
pub struct Amend {
    /// Keep the message of the last commit.
    #[arg(long)]
    no_edit: bool,
}

impl super::Command for Amend {
    fn run(&self) -> Result<()> {
        let git = Git::new(&SystemRunner);

        git.ensure_in_worktree()?;
        git.amend(self.no_edit)?;

        success!("The last commit has been amended.");
        Ok(())
    }
}
