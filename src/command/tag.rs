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

//! The `tag` subcommand.

use clap::Parser;
use eyre::{Result, bail};
use thiserror::Error;

use crate::{git::Git, runner::SystemRunner, success};

/// The tag command.
#[derive(Debug, Parser)]
pub struct Tag {
    /// The name of the tag to create.
    name: Option<String>,
    /// List the tags.
    #[arg(long, short = 'l')]
    list: bool,
    /// Create an annotated tag with this message.
    #[arg(long, short = 'm', requires = "name")]
    message: Option<String>,
}

/// Usage errors of `kommit tag`.
#[derive(Debug, Error)]
pub enum TagError {
    /// Neither a tag name nor `--list` has been given.
    #[error("No tag name given")]
    MissingName,
}

impl super::Command for Tag {
    fn run(&self) -> Result<()> {
        let git = Git::new(&SystemRunner);

        if self.list {
            print!("{}", git.tags()?);
            return Ok(());
        }

        let Some(name) = &self.name else {
            bail!(TagError::MissingName);
        };

        git.create_tag(name, self.message.as_deref())?;
        success!("Tag {name} created.");

        Ok(())
    }
}
