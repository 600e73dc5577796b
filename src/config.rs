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

//! Configuration for kommit.
//!
//! The configuration has three sections:
//!
//! ```yaml
//! types:
//!   - feat: A new feature
//!   - "fix: A bug fix"
//!   - chore
//!
//! scopes:
//!   all: [core, ui]
//!   feat: [api]
//!
//! options:
//!   allowBreakingChanges: [feat]
//!   autoPush: false
//! ```
//!
//! Only `types` is required. Parsing is pure: the caller reads the file and
//! hands its content to [`ResolvedConfig::parse`].

pub mod options;

pub use options::{DEFAULT_OPTIONS, OptionDefaults, RawOptions, ResolvedOptions};

use std::{fs, io, path::Path};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// The default name of the configuration file.
pub const CONFIG_FILE_NAME: &str = ".kommit.yaml";

/// The scope group used when a commit type has no group of its own.
pub const GLOBAL_SCOPE_GROUP: &str = "all";

/// The mapping from scope group names to their scopes.
pub type ScopeMap = IndexMap<String, Vec<String>>;

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file {path} not found")]
    NotFound {
        /// The path of the configuration file.
        path: String,
    },
    /// The configuration file cannot be read.
    #[error("Failed to read {path}")]
    Read {
        /// The path of the configuration file.
        path: String,
        /// The OS error.
        #[source]
        os_error: io::Error,
    },
    /// The configuration is not valid YAML or has the wrong shape.
    #[error("Invalid configuration syntax")]
    Syntax(#[from] serde_yaml::Error),
    /// There is no commit type.
    #[error("No commit types defined in the configuration")]
    NoCommitTypes,
    /// An entry of `types` is a mapping with more than one key.
    #[error("Commit type #{position} must be `type: description`")]
    InvalidTypesEntry {
        /// The 1-based position of the entry.
        position: usize,
    },
    /// A commit type is defined twice.
    #[error("Commit type `{name}` is defined more than once")]
    DuplicateType {
        /// The name of the commit type.
        name: String,
    },
}

/// A commit type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    /// The type, as written in the commit header.
    pub name: String,
    /// The description shown in the menu. May be empty.
    pub description: String,
}

/// The configuration, validated and with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The commit types, in document order. Never empty.
    pub types: Vec<TypeEntry>,
    /// The scope groups.
    pub scopes: ScopeMap,
    /// The options.
    pub options: ResolvedOptions,
}

/// The configuration as written in the file.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    /// The commit types.
    types: Option<Vec<RawTypeEntry>>,
    /// The scope groups.
    scopes: Option<ScopeMap>,
    /// The options.
    options: Option<RawOptions>,
}

/// The two accepted shapes of a `types` entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTypeEntry {
    /// `- "feat: A new feature"` or `- chore`.
    Scalar(String),
    /// `- feat: A new feature`.
    SingleEntryMap(IndexMap<String, Option<String>>),
}

impl TypeEntry {
    /// Builds a type entry.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl ResolvedConfig {
    /// Loads and parses the configuration file at `path`.
    #[tracing::instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|os_error| {
            let path = path.display().to_string();
            match os_error.kind() {
                io::ErrorKind::NotFound => ConfigError::NotFound { path },
                _ => ConfigError::Read { path, os_error },
            }
        })?;

        Self::parse(&text)
    }

    /// Parses the configuration from its text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Self::parse_with_defaults(text, &DEFAULT_OPTIONS)
    }

    /// Parses the configuration, using `defaults` for absent options.
    pub fn parse_with_defaults(
        text: &str,
        defaults: &OptionDefaults,
    ) -> Result<Self, ConfigError> {
        let raw: Option<RawConfig> = serde_yaml::from_str(text)?;
        let raw = raw.unwrap_or_default();

        let types = resolve_types(raw.types.unwrap_or_default())?;
        let scopes = raw.scopes.unwrap_or_default();
        let options = raw.options.unwrap_or_default();

        tracing::debug!(
            types = types.len(),
            scope_groups = scopes.len(),
            "configuration parsed"
        );

        Ok(Self {
            types,
            scopes,
            options: options.resolve(defaults),
        })
    }

    /// Returns the scopes available for a commit type.
    ///
    /// The group named after the type takes precedence, even if empty. Without
    /// such group, the [`GLOBAL_SCOPE_GROUP`] is used. Without both, there is
    /// no scope.
    pub fn scopes_for(&self, commit_type: &str) -> &[String] {
        self.scopes
            .get(commit_type)
            .or_else(|| self.scopes.get(GLOBAL_SCOPE_GROUP))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Resolves the `types` section into uniform entries.
fn resolve_types(
    entries: Vec<RawTypeEntry>,
) -> Result<Vec<TypeEntry>, ConfigError> {
    if entries.is_empty() {
        return Err(ConfigError::NoCommitTypes);
    }

    let mut types = Vec::<TypeEntry>::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let position = index + 1;
        let entry = entry
            .into_type_entry()
            .filter(|entry| !entry.name.is_empty())
            .ok_or(ConfigError::InvalidTypesEntry { position })?;

        if types.iter().any(|known| known.name == entry.name) {
            return Err(ConfigError::DuplicateType { name: entry.name });
        }

        types.push(entry);
    }

    Ok(types)
}

impl RawTypeEntry {
    /// Resolves the entry into a uniform [`TypeEntry`].
    ///
    /// Returns `None` for a mapping that has not exactly one key.
    fn into_type_entry(self) -> Option<TypeEntry> {
        match self {
            Self::Scalar(scalar) => match scalar.split_once(':') {
                Some((name, description)) => {
                    Some(TypeEntry::new(name.trim(), description.trim()))
                }
                None => Some(TypeEntry::new(scalar.trim(), "")),
            },
            Self::SingleEntryMap(mapping) if mapping.len() == 1 => {
                let (name, description) = mapping.into_iter().next()?;
                let description = description.unwrap_or_default();
                Some(TypeEntry::new(name.trim(), description.trim()))
            }
            Self::SingleEntryMap(_) => None,
        }
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use indoc::indoc;

    use super::*;

    fn scopes(list: &[&str]) -> Vec<String> {
        list.iter().map(|scope| String::from(*scope)).collect()
    }

    #[test]
    fn types_keep_document_order() {
        let config = ResolvedConfig::parse(indoc! {"
            types:
              - feat: A new feature
              - fix: A bug fix
        "})
        .unwrap();

        assert_eq!(
            config.types,
            vec![
                TypeEntry::new("feat", "A new feature"),
                TypeEntry::new("fix", "A bug fix"),
            ]
        );
    }

    #[test]
    fn types_without_colon_have_an_empty_description() {
        let config = ResolvedConfig::parse(indoc! {"
            types:
              - chore
        "})
        .unwrap();

        assert_eq!(config.types, vec![TypeEntry::new("chore", "")]);
    }

    #[test]
    fn scalar_and_map_types_can_be_mixed() {
        let config = ResolvedConfig::parse(indoc! {r#"
            types:
              - feat: A new feature
              - "fix: A bug fix"
              - docs:Documentation
              - {perf: Performance}
              - style:
        "#})
        .unwrap();

        assert_eq!(
            config.types,
            vec![
                TypeEntry::new("feat", "A new feature"),
                TypeEntry::new("fix", "A bug fix"),
                TypeEntry::new("docs", "Documentation"),
                TypeEntry::new("perf", "Performance"),
                TypeEntry::new("style", ""),
            ]
        );
    }

    #[test]
    fn missing_types_is_an_error() {
        let result = ResolvedConfig::parse(indoc! {"
            scopes:
              all: [core]
        "});

        assert!(matches!(result, Err(ConfigError::NoCommitTypes)));
    }

    #[test]
    fn empty_types_is_an_error() {
        assert!(matches!(
            ResolvedConfig::parse("types: []\n"),
            Err(ConfigError::NoCommitTypes)
        ));
        assert!(matches!(
            ResolvedConfig::parse("types:\n"),
            Err(ConfigError::NoCommitTypes)
        ));
        assert!(matches!(
            ResolvedConfig::parse(""),
            Err(ConfigError::NoCommitTypes)
        ));
    }

    #[test]
    fn multi_key_type_entries_are_errors() {
        let result = ResolvedConfig::parse(indoc! {"
            types:
              - feat: A new feature
              - name: fix
                description: A bug fix
        "});

        assert!(matches!(
            result,
            Err(ConfigError::InvalidTypesEntry { position: 2 })
        ));
    }

    #[test]
    fn nested_type_entries_are_errors() {
        let result = ResolvedConfig::parse(indoc! {"
            types:
              - [feat, fix]
        "});

        assert!(matches!(result, Err(ConfigError::Syntax(_))));
    }

    #[test]
    fn duplicate_types_are_errors() {
        let result = ResolvedConfig::parse(indoc! {"
            types:
              - feat: A new feature
              - feat
        "});

        assert!(matches!(
            result,
            Err(ConfigError::DuplicateType { name }) if name == "feat"
        ));
    }

    #[test]
    fn scope_groups_must_be_lists() {
        let result = ResolvedConfig::parse(indoc! {"
            types:
              - feat
            scopes:
              all: [core]
              feat: api
        "});

        assert!(matches!(result, Err(ConfigError::Syntax(_))));
    }

    #[test]
    fn missing_scopes_and_options_use_defaults() {
        let config = ResolvedConfig::parse("types: [feat]\n").unwrap();

        assert!(config.scopes.is_empty());
        assert_eq!(config.options, ResolvedOptions::default());
    }

    #[test]
    fn options_are_resolved() {
        let config = ResolvedConfig::parse(indoc! {r#"
            types:
              - feat
            options:
              allowCustomScopes: false
              allowBreakingChanges:
                - feat
              issuePrefix: "Closes:"
              autoPush: true
        "#})
        .unwrap();

        assert!(!config.options.allow_custom_scopes);
        assert!(config.options.allow_empty_scopes);
        assert!(config.options.allow_breaking_changes.contains("feat"));
        assert_eq!(config.options.issue_prefix, "Closes:");
        assert_eq!(config.options.changes_prefix, "BREAKING CHANGE:");
        assert!(config.options.auto_push);
    }

    #[test]
    fn scopes_for_prefers_the_type_group() {
        let config = ResolvedConfig::parse(indoc! {"
            types: [feat, fix]
            scopes:
              all: [a, b]
              feat: [c]
        "})
        .unwrap();

        assert_eq!(config.scopes_for("feat"), scopes(&["c"]));
        assert_eq!(config.scopes_for("fix"), scopes(&["a", "b"]));
    }

    #[test]
    fn scopes_for_is_empty_without_type_nor_global_group() {
        let config = ResolvedConfig::parse(indoc! {"
            types: [docs]
            scopes:
              feat: [c]
        "})
        .unwrap();

        assert!(config.scopes_for("docs").is_empty());
    }

    #[test]
    fn an_empty_type_group_does_not_fall_back() {
        let config = ResolvedConfig::parse(indoc! {"
            types: [feat]
            scopes:
              all: [core]
              feat: []
        "})
        .unwrap();

        assert!(config.scopes_for("feat").is_empty());
    }

    #[test]
    fn the_root_must_be_a_mapping() {
        assert!(matches!(
            ResolvedConfig::parse("- feat\n"),
            Err(ConfigError::Syntax(_))
        ));
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(matches!(
            ResolvedConfig::parse("types: [feat\n"),
            Err(ConfigError::Syntax(_))
        ));
    }

    #[test]
    fn flow_collections_can_be_nested() {
        let config = ResolvedConfig::parse(indoc! {"
            types: [feat, fix]
            scopes: {all: [core, ui], feat: [api]}
            options: {allowIssues: [feat, fix], autoPush: true}
        "})
        .unwrap();

        assert_eq!(config.scopes_for("fix"), scopes(&["core", "ui"]));
        assert_eq!(config.scopes_for("feat"), scopes(&["api"]));
        assert!(config.options.allow_issues.contains("fix"));
        assert!(config.options.auto_push);
    }

    #[test]
    fn block_sequences_can_sit_at_the_key_indentation() {
        let config = ResolvedConfig::parse(indoc! {"
            types:
            - feat: A new feature
            scopes:
              all:
              - core
        "})
        .unwrap();

        assert_eq!(config.types, vec![TypeEntry::new("feat", "A new feature")]);
        assert_eq!(config.scopes_for("feat"), scopes(&["core"]));
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let config = ResolvedConfig::parse(indoc! {"
            types: [feat]
            extra:
              anything: [1, 2]
        "})
        .unwrap();

        assert_eq!(config.types.len(), 1);
    }
}
