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

//! The `stage` subcommand.

use clap::Parser;
use eyre::{Result, bail};
use thiserror::Error;

use crate::{git::Git, runner::SystemRunner, success};

/// The stage command.
#[derive(Debug, Parser)]
pub struct Stage {
    /// Stage all changes.
    #[arg(long, short = 'a', conflicts_with = "files")]
    all: bool,
    /// The files to stage.
    files: Vec<String>,
}

/// Usage errors of `kommit stage`.
#[derive(Debug, Error)]
pub enum StageError {
    /// There is nothing to stage.
    #[error("No files to stage")]
    NothingToStage,
}

impl super::Command for Stage {
    fn run(&self) -> Result<()> {
        let git = Git::new(&SystemRunner);

        if self.all {
            git.stage_all()?;
            success!("All changes have been staged.");
        } else if self.files.is_empty() {
            bail!(StageError::NothingToStage);
        } else {
            git.stage_files(&self.files)?;
            success!("{} file(s) staged.", self.files.len());
        }

        Ok(())
    }
}
