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

//! The `log` subcommand.

use std::{fs, path::PathBuf};

use clap::Parser;
use eyre::Result;

use crate::{
    changelog::build_changelog, git::Git, runner::SystemRunner, success,
    warning,
};

/// The log command.
#[derive(Debug, Parser)]
pub struct Log {
    /// The number of commits to show.
    #[arg(long, short = 'n', default_value_t = 10)]
    number: usize,
    /// Show one commit per line.
    #[arg(long, short = 'p')]
    pretty: bool,
    /// Generate a changelog from the whole history instead.
    #[arg(long, short = 'c')]
    changelog: bool,
    /// Where to write the changelog.
    #[arg(long, short = 'o', default_value = "CHANGELOG.md")]
    output: PathBuf,
}

impl super::Command for Log {
    fn run(&self) -> Result<()> {
        let git = Git::new(&SystemRunner);

        if self.changelog {
            let subjects = git.log_subjects(None)?;

            if subjects.is_empty() {
                warning!("No commits found to generate the changelog.");
                return Ok(());
            }

            fs::write(&self.output, build_changelog(&subjects))?;
            success!("Changelog generated at {}.", self.output.display());
        } else {
            let log = git.log(self.number, self.pretty)?;

            if log.trim().is_empty() {
                warning!("No commits found.");
            } else {
                println!("{}", log.trim_end());
            }
        }

        Ok(())
    }
}
