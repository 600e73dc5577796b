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

//! The `gpg` subcommand.

use clap::{Parser, Subcommand};
use eyre::Result;

use crate::{git::Gpg as GpgTools, runner::SystemRunner, success};

/// The text signed to test the GPG setup.
const TEST_TEXT: &str = "test";

/// The gpg command.
#[derive(Debug, Parser)]
pub struct Gpg {
    /// What to do with GPG.
    #[command(subcommand)]
    action: GpgAction,
}

/// Actions on the GPG setup.
#[derive(Debug, Subcommand)]
enum GpgAction {
    /// Checks that GPG can sign.
    Test,
    /// Restarts the GPG agent.
    Reset,
}

impl super::Command for Gpg {
    fn run(&self) -> Result<()> {
        let gpg = GpgTools::new(&SystemRunner);

        match self.action {
            GpgAction::Test => {
                let signed = gpg.clearsign(TEST_TEXT)?;
                print!("{signed}");
                success!("GPG signing works.");
            }
            GpgAction::Reset => {
                gpg.reset_agent()?;
                success!("The GPG agent has been restarted.");
            }
        }

        Ok(())
    }
}
