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

//! The `init` subcommand.

use std::path::Path;

use clap::Parser;
use eyre::Result;

use crate::{
    config::CONFIG_FILE_NAME, git::Git, hint, runner::SystemRunner, success,
};

use super::{create::write_scaffold, helpers::print_output};

/// The init command.
#[derive(Debug, Parser)]
pub struct Init {
    /// Also create a default configuration file.
    #[arg(long, short = 'c')]
    config: bool,
}

impl super::Command for Init {
    fn run(&self) -> Result<()> {
        print_output(&Git::new(&SystemRunner).init()?);
        success!("The Git repository has been initialised!");

        if self.config {
            write_scaffold(Path::new(CONFIG_FILE_NAME), false)?;
            success!("{CONFIG_FILE_NAME} has been created!");
            hint!("You can now edit it to adjust the configuration.");
        }

        Ok(())
    }
}
