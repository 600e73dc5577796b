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

//! The commit wizard.
//!
//! The wizard runs a fixed sequence of steps, each reading one answer from a
//! [`Console`]:
//!
//! 1. the commit type, from a numbered menu,
//! 2. the scope, from the scopes configured for the type,
//! 3. the short description,
//! 4. the optional long description,
//! 5. the breaking change, for the types allowing it,
//! 6. the closed issues, for the types allowing them.
//!
//! Only the type selection is retried on invalid input. Any other invalid
//! answer aborts the wizard.

pub mod console;

use itertools::Itertools as _;
use thiserror::Error;

use crate::{config::ResolvedConfig, message::Answers};

pub use self::console::{Console, ConsoleError, InquireConsole, StdConsole};

/// How many times the type selection is asked before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// The label of the custom scope menu entry.
const CUSTOM_SCOPE_LABEL: &str = "Other (custom scope)";
/// The label of the empty scope menu entry.
const EMPTY_SCOPE_LABEL: &str = "None (empty scope)";

/// The commit wizard.
#[derive(Debug)]
pub struct Wizard<'a> {
    /// The configuration driving the questions.
    config: &'a ResolvedConfig,
    /// The console to interact with.
    console: &'a mut dyn Console,
    /// How many times the type selection is asked before giving up.
    max_attempts: usize,
}

/// The answer used when a yes/no question gets an unrecognised response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAnswer {
    /// Anything but an explicit no means yes.
    Yes,
    /// Anything but an explicit yes means no.
    No,
}

/// Errors that can occur when running the wizard.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The console has failed.
    #[error(transparent)]
    Console(#[from] ConsoleError),
    /// The input has ended before the wizard.
    #[error("The input has ended before the end of the wizard")]
    EndOfInput,
    /// Too many invalid type selections.
    #[error("No valid commit type selected after {attempts} attempts")]
    TooManyAttempts {
        /// The number of attempts.
        attempts: usize,
    },
    /// The selection is not in the menu.
    #[error("Invalid selection: {input:?}")]
    InvalidSelection {
        /// The user input.
        input: String,
    },
    /// No scope can be chosen for the commit type.
    #[error("No scope is available for `{commit_type}`")]
    NoScopeAvailable {
        /// The commit type.
        commit_type: String,
    },
    /// The scope has been left empty while empty scopes are not allowed.
    #[error("A scope is required")]
    ScopeRequired,
    /// The short description has been left empty.
    #[error("The short description cannot be empty")]
    EmptyDescription,
}

impl<'a> Wizard<'a> {
    /// Builds a wizard over a configuration and a console.
    pub fn new(
        config: &'a ResolvedConfig,
        console: &'a mut dyn Console,
    ) -> Self {
        Self {
            config,
            console,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many times the type selection is asked before giving up.
    #[must_use]
    pub fn with_max_attempts(self, max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }

    /// Runs the wizard.
    #[tracing::instrument(name = "wizard", level = "trace", skip_all)]
    pub fn run(&mut self) -> Result<Answers, PromptError> {
        let selected_type = self.select_type()?;
        tracing::debug!(?selected_type);

        let scope = self.select_scope(&selected_type)?;
        tracing::debug!(?scope);

        let short_description = self.ask_short_description()?;
        let long_description = self.ask_long_description()?;

        let (is_breaking, breaking_detail) = if self
            .config
            .options
            .allow_breaking_changes
            .contains(&selected_type)
        {
            self.ask_breaking_change()?
        } else {
            (false, String::new())
        };

        let issues_ref =
            if self.config.options.allow_issues.contains(&selected_type) {
                self.ask_issues()?
            } else {
                String::new()
            };

        Ok(Answers {
            selected_type,
            scope,
            short_description,
            long_description,
            is_breaking,
            breaking_detail,
            issues_ref,
        })
    }

    /// Shows the commit message and asks whether to commit with it.
    pub fn confirm_commit(
        &mut self,
        message: &str,
    ) -> Result<bool, PromptError> {
        self.console.say("")?;
        self.console.say("Generated commit message:")?;
        self.console.say(message)?;
        self.console.say("")?;

        self.ask_yes_no(
            "Do you want to commit with this message? (Y/n)",
            DefaultAnswer::Yes,
        )
    }

    /// Asks for the commit type.
    fn select_type(&mut self) -> Result<String, PromptError> {
        let config = self.config;
        let types = &config.types;

        self.console.say("Select the type of change:")?;
        for (index, entry) in types.iter().enumerate() {
            let position = index + 1;
            if entry.description.trim().is_empty() {
                self.console.say(&format!("{position}. {}", entry.name))?;
            } else {
                self.console.say(&format!(
                    "{position}. {} - {}",
                    entry.name, entry.description
                ))?;
            }
        }

        let question = format!("Enter your choice (1-{}):", types.len());

        for attempt in 1..=self.max_attempts {
            let input = self.ask_line(&question)?;

            let selected = menu_choice(&input, types.len())
                .and_then(|index| types.get(index));

            if let Some(selected) = selected {
                return Ok(selected.name.clone());
            }

            tracing::debug!(attempt, ?input, "invalid type selection");
            self.console.say("Invalid selection. Please try again.")?;
        }

        Err(PromptError::TooManyAttempts {
            attempts: self.max_attempts,
        })
    }

    /// Asks for the scope.
    fn select_scope(
        &mut self,
        commit_type: &str,
    ) -> Result<String, PromptError> {
        let config = self.config;
        let options = &config.options;
        let scopes = config.scopes_for(commit_type);

        if scopes.is_empty() {
            return if options.allow_custom_scopes && options.allow_empty_scopes
            {
                self.ask_custom_scope("Enter the scope (optional):")
            } else if options.allow_custom_scopes {
                self.ask_custom_scope("Enter the scope:")
            } else if options.allow_empty_scopes {
                Ok(String::new())
            } else {
                Err(PromptError::NoScopeAvailable {
                    commit_type: commit_type.to_owned(),
                })
            };
        }

        let mut menu: Vec<&str> = scopes.iter().map(String::as_str).collect();
        if options.allow_custom_scopes {
            menu.push(CUSTOM_SCOPE_LABEL);
        }
        if options.allow_empty_scopes {
            menu.push(EMPTY_SCOPE_LABEL);
        }

        self.console.say("Select the scope of this change:")?;
        for (index, label) in menu.iter().enumerate() {
            self.console.say(&format!("{}. {label}", index + 1))?;
        }

        let input =
            self.ask_line(&format!("Enter your choice (1-{}):", menu.len()))?;

        let Some(index) = menu_choice(&input, menu.len()) else {
            return Err(PromptError::InvalidSelection { input });
        };

        if let Some(scope) = scopes.get(index) {
            Ok(scope.clone())
        } else if menu.get(index) == Some(&CUSTOM_SCOPE_LABEL) {
            self.ask_custom_scope("Enter the custom scope:")
        } else {
            Ok(String::new())
        }
    }

    /// Asks for a free-text scope.
    fn ask_custom_scope(
        &mut self,
        question: &str,
    ) -> Result<String, PromptError> {
        let scope = self.ask_line(question)?.trim().to_owned();

        if scope.is_empty() && !self.config.options.allow_empty_scopes {
            return Err(PromptError::ScopeRequired);
        }

        Ok(scope)
    }

    /// Asks for the short description.
    fn ask_short_description(&mut self) -> Result<String, PromptError> {
        let description = self
            .console
            .ask("Enter a short description:")?
            .unwrap_or_default()
            .trim()
            .to_owned();

        if description.is_empty() {
            Err(PromptError::EmptyDescription)
        } else {
            Ok(description)
        }
    }

    /// Asks for the optional long description.
    ///
    /// Lines are read until a blank line or the end of input.
    fn ask_long_description(&mut self) -> Result<String, PromptError> {
        if !self.ask_yes_no(
            "Do you want to add a longer description? (y/N)",
            DefaultAnswer::No,
        )? {
            return Ok(String::new());
        }

        self.console
            .say("Enter the longer description (finish with an empty line):")?;

        let mut lines = vec![];
        while let Some(line) = self.console.ask(">")? {
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }

        Ok(lines.join("\n").trim_end().to_owned())
    }

    /// Asks whether the commit introduces a breaking change.
    fn ask_breaking_change(&mut self) -> Result<(bool, String), PromptError> {
        if !self.ask_yes_no(
            "Are there any breaking changes? (y/N)",
            DefaultAnswer::No,
        )? {
            return Ok((false, String::new()));
        }

        let detail = self
            .console
            .ask("Describe the breaking changes:")?
            .unwrap_or_default()
            .trim()
            .to_owned();

        Ok((true, detail))
    }

    /// Asks for the issues closed by the commit.
    fn ask_issues(&mut self) -> Result<String, PromptError> {
        if !self.ask_yes_no(
            "Does this commit close any issues? (y/N)",
            DefaultAnswer::No,
        )? {
            return Ok(String::new());
        }

        let raw = self
            .console
            .ask("Enter the issue numbers (e.g. 123, 456):")?
            .unwrap_or_default();

        Ok(normalize_issue_refs(&raw).unwrap_or_default())
    }

    /// Asks a yes/no question.
    ///
    /// The end of input counts as an empty answer.
    fn ask_yes_no(
        &mut self,
        question: &str,
        default: DefaultAnswer,
    ) -> Result<bool, PromptError> {
        let response = self.console.ask(question)?.unwrap_or_default();
        Ok(parse_yes_no(&response, default))
    }

    /// Asks a question whose answer is required.
    fn ask_line(&mut self, question: &str) -> Result<String, PromptError> {
        self.console.ask(question)?.ok_or(PromptError::EndOfInput)
    }
}

/// Parses a yes/no response.
///
/// With [`DefaultAnswer::No`], only `y` and `yes` are affirmative. With
/// [`DefaultAnswer::Yes`], anything but `n` and `no` is affirmative.
pub fn parse_yes_no(response: &str, default: DefaultAnswer) -> bool {
    let response = response.trim().to_lowercase();

    match default {
        DefaultAnswer::No => matches!(response.as_str(), "y" | "yes"),
        DefaultAnswer::Yes => !matches!(response.as_str(), "n" | "no"),
    }
}

/// Normalises comma-separated issue references.
///
/// Each token is trimmed and loses one leading `#`. Tokens that are not made
/// only of digits are discarded. Returns `None` if no token remains.
pub fn normalize_issue_refs(raw: &str) -> Option<String> {
    let refs = raw
        .split(',')
        .map(str::trim)
        .map(|token| token.strip_prefix('#').unwrap_or(token))
        .filter(|token| {
            !token.is_empty()
                && token.chars().all(|digit| digit.is_ascii_digit())
        })
        .map(|number| format!("#{number}"))
        .join(", ");

    (!refs.is_empty()).then_some(refs)
}

/// Returns the index for a 1-based menu choice.
fn menu_choice(input: &str, menu_len: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=menu_len).contains(choice))
        .map(|choice| choice - 1)
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use std::io::Cursor;

    use indoc::indoc;

    use super::*;

    const CONFIG: &str = indoc! {"
        types:
          - feat: A new feature
          - fix: A bug fix
          - chore

        scopes:
          all:
            - core
            - ui
          fix: []

        options:
          allowBreakingChanges:
            - feat
          allowIssues:
            - feat
            - fix
    "};

    fn run(config: &str, input: &str) -> (Result<Answers, PromptError>, String) {
        let config = ResolvedConfig::parse(config).unwrap();
        let mut console = StdConsole::new(Cursor::new(input.to_owned()), vec![]);

        let result = Wizard::new(&config, &mut console).run();
        let output = String::from_utf8(console.into_writer()).unwrap();

        (result, output)
    }

    ////////////////////////////////////////////////////////////////////////////
    //                              Type selection                            //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn types_are_listed_in_order() {
        let (_, output) = run(CONFIG, "");

        assert!(output.contains(indoc! {"
            1. feat - A new feature
            2. fix - A bug fix
            3. chore
            Enter your choice (1-3): "}));
    }

    #[test]
    fn invalid_type_selections_are_retried() {
        let (answers, output) = run(CONFIG, "0\nfoo\n3\n4\ndone\n");

        assert_eq!(answers.unwrap().selected_type, "chore");
        assert_eq!(output.matches("Invalid selection").count(), 2);
    }

    #[test]
    fn type_selection_gives_up_after_the_maximum_attempts() {
        let (answers, _) = run(CONFIG, "4\n5\n6\n1\n");

        assert!(matches!(
            answers,
            Err(PromptError::TooManyAttempts { attempts: 3 })
        ));
    }

    #[test]
    fn type_selection_aborts_at_end_of_input() {
        let (answers, _) = run(CONFIG, "9\n");

        assert!(matches!(answers, Err(PromptError::EndOfInput)));
    }

    ////////////////////////////////////////////////////////////////////////////
    //                             Scope selection                            //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn scope_menu_ends_with_custom_then_empty() {
        let (answers, output) = run(CONFIG, "3\n2\nupdate deps\n\n");

        assert!(output.contains(indoc! {"
            1. core
            2. ui
            3. Other (custom scope)
            4. None (empty scope)
            Enter your choice (1-4): "}));
        assert_eq!(answers.unwrap().scope, "ui");
    }

    #[test]
    fn custom_scope_is_asked_as_free_text() {
        let (answers, _) = run(CONFIG, "3\n3\n  deps \nupdate deps\n\n");

        assert_eq!(answers.unwrap().scope, "deps");
    }

    #[test]
    fn empty_scope_entry_gives_an_empty_scope() {
        let (answers, _) = run(CONFIG, "3\n4\nupdate deps\n\n");

        assert_eq!(answers.unwrap().scope, "");
    }

    #[test]
    fn invalid_scope_selections_abort() {
        let (answers, _) = run(CONFIG, "3\n7\n");

        assert!(matches!(
            answers,
            Err(PromptError::InvalidSelection { input }) if input == "7"
        ));
    }

    #[test]
    fn an_empty_type_group_asks_for_a_custom_scope() {
        let (answers, output) = run(CONFIG, "2\nparser\ncrash\n\n\n");

        assert!(output.contains("Enter the scope (optional): "));
        assert_eq!(answers.unwrap().scope, "parser");
    }

    #[test]
    fn no_scope_list_and_no_custom_scopes_gives_an_empty_scope() {
        let config = indoc! {"
            types:
              - fix: Bug fix
            options:
              allowCustomScopes: false
              allowEmptyScopes: true
        "};

        let (answers, output) = run(config, "1\nnull pointer\n\n");

        assert_eq!(answers.unwrap().scope, "");
        assert!(!output.contains("scope"));
    }

    #[test]
    fn no_scope_obtainable_is_an_error() {
        let config = indoc! {"
            types:
              - fix: Bug fix
            options:
              allowCustomScopes: false
              allowEmptyScopes: false
        "};

        let (answers, _) = run(config, "1\n");

        assert!(matches!(
            answers,
            Err(PromptError::NoScopeAvailable { commit_type }) if commit_type == "fix"
        ));
    }

    #[test]
    fn empty_custom_scope_is_an_error_when_a_scope_is_required() {
        let config = indoc! {"
            types:
              - fix: Bug fix
            options:
              allowEmptyScopes: false
        "};

        let (answers, _) = run(config, "1\n\n");

        assert!(matches!(answers, Err(PromptError::ScopeRequired)));
    }

    ////////////////////////////////////////////////////////////////////////////
    //                              Descriptions                              //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn empty_short_description_is_an_error() {
        let (answers, _) = run(CONFIG, "3\n4\n   \n");

        assert!(matches!(answers, Err(PromptError::EmptyDescription)));
    }

    #[test]
    fn long_description_stops_at_the_first_blank_line() {
        let (answers, _) = run(
            CONFIG,
            "3\n4\nupdate deps\ny\nFirst line.\nSecond line.  \n\nignored\n",
        );

        assert_eq!(
            answers.unwrap().long_description,
            "First line.\nSecond line."
        );
    }

    #[test]
    fn long_description_stops_at_end_of_input() {
        let (answers, _) = run(CONFIG, "3\n4\nupdate deps\nyes\nOnly line.");

        assert_eq!(answers.unwrap().long_description, "Only line.");
    }

    ////////////////////////////////////////////////////////////////////////////
    //                          Breaking changes & issues                     //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn breaking_change_is_only_asked_for_allowed_types() {
        let (answers, output) = run(CONFIG, "2\n\ncrash\n\n\n");

        let answers = answers.unwrap();
        assert!(!answers.is_breaking);
        assert!(!output.contains("breaking"));
        assert!(output.contains("Does this commit close any issues?"));
    }

    #[test]
    fn full_feature_flow() {
        let (answers, _) = run(
            CONFIG,
            "1\n2\nadd thing\nn\nY\nold API removed\nyes\n123, #456, abc\n",
        );

        assert_eq!(
            answers.unwrap(),
            Answers {
                selected_type: String::from("feat"),
                scope: String::from("ui"),
                short_description: String::from("add thing"),
                long_description: String::new(),
                is_breaking: true,
                breaking_detail: String::from("old API removed"),
                issues_ref: String::from("#123, #456"),
            }
        );
    }

    #[test]
    fn optional_gates_default_to_no_at_end_of_input() {
        let (answers, _) = run(CONFIG, "1\n1\nadd thing\n");

        let answers = answers.unwrap();
        assert_eq!(answers.long_description, "");
        assert!(!answers.is_breaking);
        assert_eq!(answers.issues_ref, "");
    }

    #[test]
    fn confirmation_defaults_to_yes() {
        let config = ResolvedConfig::parse(CONFIG).unwrap();
        let mut console = StdConsole::new(Cursor::new("\nno\n"), vec![]);
        let mut wizard = Wizard::new(&config, &mut console);

        assert!(wizard.confirm_commit("fix: thing").unwrap());
        assert!(!wizard.confirm_commit("fix: thing").unwrap());

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert!(output.contains("Generated commit message:\nfix: thing\n"));
    }

    ////////////////////////////////////////////////////////////////////////////
    //                                 Parsing                                //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn yes_no_with_default_no() {
        assert!(parse_yes_no("y", DefaultAnswer::No));
        assert!(parse_yes_no(" YES ", DefaultAnswer::No));
        assert!(!parse_yes_no("", DefaultAnswer::No));
        assert!(!parse_yes_no("sure", DefaultAnswer::No));
    }

    #[test]
    fn yes_no_with_default_yes() {
        assert!(parse_yes_no("", DefaultAnswer::Yes));
        assert!(parse_yes_no("whatever", DefaultAnswer::Yes));
        assert!(!parse_yes_no("N", DefaultAnswer::Yes));
        assert!(!parse_yes_no("no", DefaultAnswer::Yes));
    }

    #[test]
    fn issue_refs_are_normalised() {
        assert_eq!(
            normalize_issue_refs("123, #456, abc").as_deref(),
            Some("#123, #456")
        );
        assert_eq!(normalize_issue_refs("#12").as_deref(), Some("#12"));
    }

    #[test]
    fn issue_refs_without_numbers_are_none() {
        assert_eq!(normalize_issue_refs("abc, #, ##1"), None);
        assert_eq!(normalize_issue_refs(""), None);
    }
}
