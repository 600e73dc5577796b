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

//! The `options` section of the configuration.

use indexmap::IndexSet;
use serde::{
    Deserialize, Deserializer,
    de::{Error as _, Unexpected},
};

/// The default values of the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefaults {
    /// Default for `allowCustomScopes`.
    pub allow_custom_scopes: bool,
    /// Default for `allowEmptyScopes`.
    pub allow_empty_scopes: bool,
    /// Default for `issuePrefix`.
    pub issue_prefix: &'static str,
    /// Default for `changesPrefix`.
    pub changes_prefix: &'static str,
    /// Default for `remindToStageChanges`.
    pub remind_to_stage_changes: bool,
    /// Default for `autoStage`.
    pub auto_stage: bool,
    /// Default for `autoPush`.
    pub auto_push: bool,
}

/// The defaults applied to options absent from the configuration.
///
/// `allowBreakingChanges` and `allowIssues` always default to an empty set.
pub const DEFAULT_OPTIONS: OptionDefaults = OptionDefaults {
    allow_custom_scopes: true,
    allow_empty_scopes: true,
    issue_prefix: "ISSUES CLOSED:",
    changes_prefix: "BREAKING CHANGE:",
    remind_to_stage_changes: false,
    auto_stage: false,
    auto_push: false,
};

/// The options, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Whether the user can enter a scope that is not in the list.
    pub allow_custom_scopes: bool,
    /// Whether the user can leave the scope empty.
    pub allow_empty_scopes: bool,
    /// The commit types allowed to declare a breaking change.
    pub allow_breaking_changes: IndexSet<String>,
    /// The commit types allowed to reference issues.
    pub allow_issues: IndexSet<String>,
    /// The prefix of the issues footer.
    pub issue_prefix: String,
    /// The prefix of the breaking change footer.
    pub changes_prefix: String,
    /// Whether to remind the user to stage changes when nothing is staged.
    pub remind_to_stage_changes: bool,
    /// Whether to stage all changes when nothing is staged.
    pub auto_stage: bool,
    /// Whether to push after a successful commit.
    pub auto_push: bool,
}

/// The options as written in the configuration, before defaults.
///
/// Unknown keys are ignored. Keys with an empty value are treated as absent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawOptions {
    /// `allowCustomScopes`.
    #[serde(deserialize_with = "lenient_bool")]
    pub allow_custom_scopes: Option<bool>,
    /// `allowEmptyScopes`.
    #[serde(deserialize_with = "lenient_bool")]
    pub allow_empty_scopes: Option<bool>,
    /// `allowBreakingChanges`.
    pub allow_breaking_changes: Option<Vec<String>>,
    /// `allowIssues`.
    pub allow_issues: Option<Vec<String>>,
    /// `issuePrefix`.
    pub issue_prefix: Option<String>,
    /// `changesPrefix`.
    pub changes_prefix: Option<String>,
    /// `remindToStageChanges`.
    #[serde(deserialize_with = "lenient_bool")]
    pub remind_to_stage_changes: Option<bool>,
    /// `autoStage`.
    #[serde(deserialize_with = "lenient_bool")]
    pub auto_stage: Option<bool>,
    /// `autoPush`.
    #[serde(deserialize_with = "lenient_bool")]
    pub auto_push: Option<bool>,
}

/// A boolean as it can be written in the configuration.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LenientBool {
    /// A YAML boolean.
    Bool(bool),
    /// A string, like `"TRUE"`.
    Text(String),
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        RawOptions::default().resolve(&DEFAULT_OPTIONS)
    }
}

impl RawOptions {
    /// Applies the defaults to the absent options.
    pub fn resolve(self, defaults: &OptionDefaults) -> ResolvedOptions {
        ResolvedOptions {
            allow_custom_scopes: self
                .allow_custom_scopes
                .unwrap_or(defaults.allow_custom_scopes),
            allow_empty_scopes: self
                .allow_empty_scopes
                .unwrap_or(defaults.allow_empty_scopes),
            allow_breaking_changes: self
                .allow_breaking_changes
                .unwrap_or_default()
                .into_iter()
                .collect(),
            allow_issues: self
                .allow_issues
                .unwrap_or_default()
                .into_iter()
                .collect(),
            issue_prefix: self
                .issue_prefix
                .unwrap_or_else(|| String::from(defaults.issue_prefix)),
            changes_prefix: self
                .changes_prefix
                .unwrap_or_else(|| String::from(defaults.changes_prefix)),
            remind_to_stage_changes: self
                .remind_to_stage_changes
                .unwrap_or(defaults.remind_to_stage_changes),
            auto_stage: self.auto_stage.unwrap_or(defaults.auto_stage),
            auto_push: self.auto_push.unwrap_or(defaults.auto_push),
        }
    }
}

/// Reads an optional boolean, accepting `true` and `false` in any case.
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LenientBool>::deserialize(deserializer)? {
        None => Ok(None),
        Some(LenientBool::Bool(value)) => Ok(Some(value)),
        Some(LenientBool::Text(text)) => {
            match text.trim().to_lowercase().as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(D::Error::invalid_value(
                    Unexpected::Str(&text),
                    &"true or false",
                )),
            }
        }
    }
}
