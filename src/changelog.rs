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

//! Changelog generation from commit subjects.

use std::sync::LazyLock;

use indexmap::IndexMap;
use itertools::Itertools as _;
use regex::Regex;

/// A conventional commit subject: `type(scope)!: description`.
#[expect(clippy::unwrap_used, reason = "the regex is valid")]
static SUBJECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)(\(.*\))?(!)?:(.+)$").unwrap());

/// Builds a Markdown changelog from commit subjects.
///
/// Conventional commit subjects are grouped by type, in the order of their
/// first appearance. Other subjects are skipped.
pub fn build_changelog<S: AsRef<str>>(subjects: &[S]) -> String {
    let mut sections: IndexMap<&str, Vec<&str>> = IndexMap::new();

    for subject in subjects {
        let Some(captures) = SUBJECT_REGEX.captures(subject.as_ref()) else {
            tracing::debug!(subject = subject.as_ref(), "skipping subject");
            continue;
        };

        if let (Some(commit_type), Some(description)) =
            (captures.get(1), captures.get(4))
        {
            sections
                .entry(commit_type.as_str())
                .or_default()
                .push(description.as_str().trim());
        }
    }

    let body = sections
        .into_iter()
        .map(|(commit_type, descriptions)| {
            let items = descriptions
                .into_iter()
                .map(|description| format!("- {description}\n"))
                .join("");
            format!("### {}\n\n{items}\n", section_header(commit_type))
        })
        .join("");

    format!("# Changelog\n\n{body}")
}

/// Returns the section header for a commit type.
fn section_header(commit_type: &str) -> String {
    let header = match commit_type {
        "feat" => "Features",
        "fix" => "Bug Fixes",
        "docs" => "Documentation",
        "style" => "Styling",
        "refactor" => "Refactors",
        "perf" => "Performance",
        "test" => "Tests",
        "build" => "Build",
        "ci" => "CI",
        "chore" => "Chores",
        other => return capitalise(other),
    };

    String::from(header)
}

/// Capitalises the first character in s.
fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            first.to_uppercase().collect::<String>() + chars.as_str()
        }
    }
}
