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

//! The `branch` subcommand.

use clap::{Parser, Subcommand};
use eyre::Result;

use crate::{git::Git, runner::SystemRunner, success};

use super::helpers::print_output;

/// The branch command.
#[derive(Debug, Parser)]
pub struct Branch {
    /// What to do with branches. Lists them by default.
    #[command(subcommand)]
    action: Option<BranchAction>,
}

/// Actions on branches.
#[derive(Debug, Subcommand)]
enum BranchAction {
    /// Lists the local branches.
    List,
    /// Creates a branch.
    Create {
        /// The name of the branch.
        name: String,
        /// Check out the branch after creating it.
        #[arg(long, short = 'c')]
        checkout: bool,
    },
    /// Switches to a branch.
    Switch {
        /// The name of the branch.
        name: String,
    },
    /// Deletes a merged branch.
    Delete {
        /// The name of the branch.
        name: String,
    },
    /// Merges a branch into the current one.
    Merge {
        /// The name of the branch.
        name: String,
    },
    /// Rebases the current branch onto another one.
    Rebase {
        /// The name of the branch.
        name: String,
    },
}

impl super::Command for Branch {
    fn run(&self) -> Result<()> {
        let git = Git::new(&SystemRunner);

        match self.action.as_ref().unwrap_or(&BranchAction::List) {
            BranchAction::List => print!("{}", git.branches()?),
            BranchAction::Create { name, checkout } => {
                git.create_branch(name, *checkout)?;
                if *checkout {
                    success!("Switched to the new branch {name}.");
                } else {
                    success!("Branch {name} created.");
                }
            }
            BranchAction::Switch { name } => {
                git.switch_branch(name)?;
                success!("Switched to {name}.");
            }
            BranchAction::Delete { name } => {
                git.delete_branch(name)?;
                success!("Branch {name} deleted.");
            }
            BranchAction::Merge { name } => {
                print_output(&git.merge(name)?);
                success!("{name} merged.");
            }
            BranchAction::Rebase { name } => {
                print_output(&git.rebase(name)?);
                success!("Rebased onto {name}.");
            }
        }

        Ok(())
    }
}
