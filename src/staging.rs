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

//! Decisions around staging and pushing.

use crate::config::ResolvedOptions;

/// What to do before running the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreflightAction {
    /// Carry on.
    Proceed,
    /// Stage all changes.
    AutoStage,
    /// Remind the user to stage changes, then carry on.
    Remind,
}

/// What to do after the commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostCommitAction {
    /// Push the commit.
    Push,
    /// Do nothing.
    NoOp,
}

/// Decides what to do before running the wizard.
///
/// When nothing is staged, auto-staging takes priority over the reminder.
pub fn decide_preflight(
    staged: bool,
    options: &ResolvedOptions,
) -> PreflightAction {
    if staged {
        PreflightAction::Proceed
    } else if options.auto_stage {
        PreflightAction::AutoStage
    } else if options.remind_to_stage_changes {
        PreflightAction::Remind
    } else {
        PreflightAction::Proceed
    }
}

/// Decides what to do after the commit.
pub fn decide_post_commit(
    commit_succeeded: bool,
    options: &ResolvedOptions,
) -> PostCommitAction {
    if commit_succeeded && options.auto_push {
        PostCommitAction::Push
    } else {
        PostCommitAction::NoOp
    }
}

/// Returns whether the preflight decision needs to know the staging state.
///
/// When neither staging option is set, the decision is always to proceed.
pub fn needs_staging_state(options: &ResolvedOptions) -> bool {
    options.auto_stage || options.remind_to_stage_changes
}
