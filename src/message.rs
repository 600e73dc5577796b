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

//! Commit message assembly.
//!
//! A message has the following structure, where each optional block is
//! preceded by a single blank line:
//!
//! ```text
//! <type>[(<scope>)][!]: <short description>
//!
//! [<long description>]
//!
//! [<changes prefix> <breaking change detail>]
//!
//! [<issue prefix> <issue references>]
//! ```

use crate::config::ResolvedOptions;

/// The answers collected by the wizard.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Answers {
    /// The commit type.
    pub selected_type: String,
    /// The scope. Empty for no scope.
    pub scope: String,
    /// The short description. Never empty.
    pub short_description: String,
    /// The long description. May span several lines.
    pub long_description: String,
    /// Whether the commit introduces a breaking change.
    pub is_breaking: bool,
    /// The description of the breaking change. May be empty.
    pub breaking_detail: String,
    /// The normalised issue references, like `#12, #34`.
    pub issues_ref: String,
}

/// Assembles the commit message.
///
/// The `!` marker is set whenever the change is breaking, even without a
/// breaking change detail.
pub fn assemble(answers: &Answers, options: &ResolvedOptions) -> String {
    let mut message = answers.selected_type.clone();

    if !answers.scope.trim().is_empty() {
        message.push('(');
        message.push_str(&answers.scope);
        message.push(')');
    }

    if answers.is_breaking {
        message.push('!');
    }

    message.push_str(": ");
    message.push_str(&answers.short_description);

    let breaking_detail = answers
        .is_breaking
        .then_some(answers.breaking_detail.as_str())
        .unwrap_or_default();

    let blocks = [
        (None, answers.long_description.as_str()),
        (Some(options.changes_prefix.as_str()), breaking_detail),
        (Some(options.issue_prefix.as_str()), answers.issues_ref.as_str()),
    ];

    for (prefix, content) in blocks {
        if content.trim().is_empty() {
            continue;
        }

        message.push_str("\n\n");
        if let Some(prefix) = prefix {
            message.push_str(prefix);
            message.push(' ');
        }
        message.push_str(content);
    }

    message
}
