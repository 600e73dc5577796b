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

//! Utilities to help with tracing.

use tracing_subscriber::EnvFilter;

use crate::command::helpers::uncapitalise;

/// The environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "KOMMIT_LOG";

/// Installs the global subscriber, logging to stderr.
///
/// The filter is read from [`LOG_ENV_VAR`] using the `tracing-subscriber`
/// directive syntax, like `KOMMIT_LOG=debug`. Logs are off by default.
pub fn install_subscriber() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Logs errors where they are produced.
pub trait LogResult {
    /// Logs the error, if any, and returns `self` unchanged.
    fn log_err(self) -> Self;
}

impl<T, E> LogResult for Result<T, E>
where
    E: std::fmt::Display + std::fmt::Debug,
{
    fn log_err(self) -> Self {
        self.inspect_err(|error| {
            let message = uncapitalise(&error.to_string());
            tracing::error!(?error, "{message}");
        })
    }
}
