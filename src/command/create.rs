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

//! The `create` subcommand.

use std::{
    fs,
    path::{Path, PathBuf},
};

use askama::Template;
use clap::Parser;
use eyre::{Result, bail};
use thiserror::Error;

use crate::{
    config::{
        CONFIG_FILE_NAME, DEFAULT_OPTIONS, GLOBAL_SCOPE_GROUP, OptionDefaults,
        TypeEntry,
    },
    hint, success,
};

/// The create command.
#[derive(Debug, Parser)]
pub struct Create {
    /// Overwrite an existing configuration file.
    #[arg(long, short = 'f')]
    force: bool,
    /// Path to the configuration file.
    #[arg(long, short = 'c', default_value = CONFIG_FILE_NAME)]
    config: PathBuf,
}

/// Usage errors of `kommit create`.
#[derive(Debug, Error)]
pub enum CreateError {
    /// A configuration already exists.
    #[error("There is already a configuration file at {path}")]
    ExistingConfig {
        /// The path of the configuration file.
        path: String,
    },
}

/// Parameters to generate a configuration file.
#[derive(Debug, Template)]
#[template(path = "kommit.yaml.jinja", escape = "none")]
struct Scaffold {
    /// The commit types.
    types: Vec<TypeEntry>,
    /// The scope groups.
    scope_groups: Vec<ScopeGroup>,
    /// The types allowed to declare breaking changes.
    breaking_types: Vec<&'static str>,
    /// The types allowed to reference issues.
    issue_types: Vec<&'static str>,
    /// The defaults of the options, shown as comments.
    defaults: OptionDefaults,
}

/// A group of scopes.
#[derive(Debug)]
struct ScopeGroup {
    /// The name of the group.
    name: &'static str,
    /// The scopes in the group.
    scopes: Vec<&'static str>,
}

impl super::Command for Create {
    fn run(&self) -> Result<()> {
        write_scaffold(&self.config, self.force)?;

        success!("{} has been created!", self.config.display());
        hint!("You can now edit it to adjust the configuration.");

        Ok(())
    }
}

impl Default for Scaffold {
    fn default() -> Self {
        Self {
            types: vec![
                TypeEntry::new("feat", "A new feature"),
                TypeEntry::new("fix", "A bug fix"),
                TypeEntry::new("docs", "Documentation only changes"),
                TypeEntry::new(
                    "refactor",
                    "A code change that neither fixes a bug nor adds a feature",
                ),
                TypeEntry::new(
                    "chore",
                    "Other changes that don't modify src or test files",
                ),
            ],
            scope_groups: vec![ScopeGroup {
                name: GLOBAL_SCOPE_GROUP,
                scopes: vec!["core", "ui", "api", "docs"],
            }],
            breaking_types: vec!["feat", "fix"],
            issue_types: vec!["feat", "fix"],
            defaults: DEFAULT_OPTIONS,
        }
    }
}

/// Writes the default configuration to `path`.
///
/// An existing file is only overwritten with `force`.
pub fn write_scaffold(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        bail!(CreateError::ExistingConfig {
            path: path.display().to_string(),
        });
    }

    let mut content = Scaffold::default().render()?;
    if !content.ends_with('\n') {
        content.push('\n');
    }

    tracing::debug!(?path, "writing the configuration");
    fs::write(path, content)?;

    Ok(())
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use assert_fs::{TempDir, prelude::*};

    use super::*;
    use crate::config::ResolvedConfig;

    #[test]
    fn the_scaffold_is_a_valid_configuration() {
        let content = Scaffold::default().render().unwrap();

        let config = ResolvedConfig::parse(&content).unwrap();

        let types: Vec<_> =
            config.types.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(types, ["feat", "fix", "docs", "refactor", "chore"]);
        assert_eq!(
            config.types[4].description,
            "Other changes that don't modify src or test files"
        );
        assert_eq!(config.scopes_for("docs"), ["core", "ui", "api", "docs"]);
        assert!(config.options.allow_breaking_changes.contains("fix"));
        assert!(config.options.allow_issues.contains("feat"));
        assert!(!config.options.allow_issues.contains("chore"));
        assert_eq!(config.options.changes_prefix, "BREAKING CHANGE:");
    }

    #[test]
    fn existing_files_are_kept_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.child(CONFIG_FILE_NAME);
        config.write_str("types: [feat]\n").unwrap();

        let error = write_scaffold(config.path(), false).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<CreateError>(),
            Some(CreateError::ExistingConfig { .. })
        ));
        config.assert("types: [feat]\n");
    }

    #[test]
    fn existing_files_are_overwritten_with_force() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.child(CONFIG_FILE_NAME);
        config.write_str("types: [feat]\n").unwrap();

        write_scaffold(config.path(), true).unwrap();

        let content = std::fs::read_to_string(config.path()).unwrap();
        assert!(content.starts_with("# Conventional commit configuration"));
        assert!(content.ends_with("\n"));
    }
}
