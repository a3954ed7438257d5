// Jetporch
// Copyright (C) 2023 - Michael DeHaan <michael@michaeldehaan.net> + contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// long with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;
use std::error::Error as StdError;
use std::io;

/// Error type for wrapper playbook generation and checking
#[derive(Debug)]
pub enum ProviderTestsError {
    /// Bad exclusion table or ignore set
    Config(String),

    /// Wrapper template failed to register or render
    Template(String),

    /// IO errors
    Io(io::Error),

    /// YAML parsing errors
    Yaml(serde_yaml::Error),
}

impl fmt::Display for ProviderTestsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderTestsError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ProviderTestsError::Template(msg) => write!(f, "Template error: {}", msg),
            ProviderTestsError::Io(err) => write!(f, "IO error: {}", err),
            ProviderTestsError::Yaml(err) => write!(f, "YAML error: {}", err),
        }
    }
}

impl StdError for ProviderTestsError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ProviderTestsError::Io(err) => Some(err),
            ProviderTestsError::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ProviderTestsError {
    fn from(err: io::Error) -> Self {
        ProviderTestsError::Io(err)
    }
}

impl From<serde_yaml::Error> for ProviderTestsError {
    fn from(err: serde_yaml::Error) -> Self {
        ProviderTestsError::Yaml(err)
    }
}

/// Result type alias for provider test operations
pub type Result<T> = std::result::Result<T, ProviderTestsError>;
