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

//! Generates and checks the per-provider wrapper playbooks of a network
//! role's test suite. Every `playbooks/tests_*.yml` gets a `tests_*_nm.yml`
//! wrapper and, unless it is NetworkManager-only, a `tests_*_initscripts.yml`
//! wrapper.

pub mod cli;
pub mod playbooks;
pub mod util;

pub mod api;
pub mod config;
pub mod error;
pub mod output;

// Re-export commonly used types for library users
pub use api::{ProviderTestsRunner, RunResult};
pub use config::{NmOnlyEntry, ProviderTestsConfig};
pub use error::{ProviderTestsError, Result};
pub use output::{OutputHandler, OutputHandlerRef, TerminalOutputHandler, NullOutputHandler, LogLevel};
pub use playbooks::reconcile::{Mode, Outcome};
pub use playbooks::wrapper::{Provider, WrapperPlaybook, WrapperRenderer};
