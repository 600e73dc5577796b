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

//! The `fetch` subcommand.

use clap::Parser;
use eyre::Result;

use crate::{
    git::{FetchFrom, Git},
    runner::SystemRunner,
    success,
};

use super::helpers::print_output;

/// The fetch command.
#[derive(Debug, Parser)]
pub struct Fetch {
    /// The remote to fetch from.
    remote: Option<String>,
    /// Fetch from all remotes.
    #[arg(long, short = 'a', conflicts_with = "remote")]
    all: bool,
    /// Remove the remote-tracking references that no longer exist.
    #[arg(long, short = 'p')]
    prune: bool,
}

impl super::Command for Fetch {
    fn run(&self) -> Result<()> {
        let from = match (&self.remote, self.all) {
            (_, true) => FetchFrom::All,
            (Some(remote), false) => FetchFrom::Remote(remote),
            (None, false) => FetchFrom::Default,
        };

        print_output(&Git::new(&SystemRunner).fetch(from, self.prune)?);

        success!("Fetched.");
        Ok(())
    }
}
