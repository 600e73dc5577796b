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

//! Conventional commits from a declarative configuration.
//!
//! The core of kommit is a pipeline:
//!
//! 1. [`config`] parses the configuration text into a [`ResolvedConfig`],
//! 2. [`prompt`] drives the interactive wizard and collects [`Answers`],
//! 3. [`message`] assembles the commit message from the answers,
//! 4. [`staging`] decides what to do before and after the commit.
//!
//! Everything touching processes goes through a [`CommandRunner`].
//!
//! [`ResolvedConfig`]: config::ResolvedConfig
//! [`Answers`]: message::Answers
//! [`CommandRunner`]: runner::CommandRunner

pub mod changelog;
pub mod command;
pub mod config;
pub mod git;
pub mod message;
pub mod prompt;
pub mod runner;
pub mod staging;
pub mod tracing;

pub use command::Kommit;
