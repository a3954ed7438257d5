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

use crate::error::{ProviderTestsError, Result};
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PLAYBOOKS_DIR: &str = "playbooks";
pub const DEFAULT_PROGRAM_NAME: &str = "ensure_provider_tests";

/// A base playbook that only runs with NetworkManager, optionally only
/// from a given NetworkManager version on.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NmOnlyEntry {
    /// Ansible literal including its quotes, e.g. `'1.20.0'`
    #[serde(default)]
    pub minimum_version: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl NmOnlyEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimum_version(mut self, version: impl Into<String>) -> Self {
        self.minimum_version = Some(version.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The version constraint if one is set; an empty string counts as unset.
    pub fn effective_minimum_version(&self) -> Option<&str> {
        self.minimum_version.as_deref().filter(|v| !v.is_empty())
    }

    fn validate(&self, test_playbook: &str) -> Result<()> {
        let literal = match self.effective_minimum_version() {
            Some(x) => x,
            None => return Ok(()),
        };
        let unquoted = unquote(literal).ok_or_else(|| ProviderTestsError::Config(format!(
            "minimum_version for {} must be a quoted literal such as '1.20.0', got: {}",
            test_playbook, literal
        )))?;
        semver::Version::parse(unquoted).map_err(|e| ProviderTestsError::Config(format!(
            "minimum_version for {} is not a valid version ({}): {}",
            test_playbook, e, literal
        )))?;
        Ok(())
    }
}

fn unquote(literal: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if literal.len() >= 2 && literal.starts_with(quote) && literal.ends_with(quote) {
            return Some(&literal[1..literal.len() - 1]);
        }
    }
    None
}

// on-disk shape of the tables; a bare key with no value is an nm-only entry without options
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesFile {
    #[serde(default)]
    nm_only: IndexMap<String, Option<NmOnlyEntry>>,
    #[serde(default)]
    ignore: Vec<String>,
}

/// Settings for one generate or check run
#[derive(Clone, Debug)]
pub struct ProviderTestsConfig {
    /// Directory wrapper playbooks are written to; base paths are relative to it
    pub root: PathBuf,
    pub playbooks_dir: PathBuf,
    /// Base playbooks that get only an nm wrapper
    pub nm_only: IndexMap<String, NmOnlyEntry>,
    /// Base playbooks skipped entirely
    pub ignore: IndexSet<String>,
    /// Used in the remediation hint for missing wrappers
    pub program_name: String,
}

impl Default for ProviderTestsConfig {
    fn default() -> Self {
        let mut nm_only = IndexMap::new();
        nm_only.insert(
            String::from("playbooks/tests_ethtool_features.yml"),
            NmOnlyEntry::new()
                .minimum_version("'1.20.0'")
                .comment("# NetworkManager 1.20.0 introduced ethtool settings support"),
        );
        nm_only.insert(String::from("playbooks/tests_reapply.yml"), NmOnlyEntry::new());
        nm_only.insert(String::from("playbooks/tests_states.yml"), NmOnlyEntry::new());
        nm_only.insert(String::from("playbooks/tests_802_1x.yml"), NmOnlyEntry::new());

        let mut ignore = IndexSet::new();
        // checked by tests_regression_nm.yml
        ignore.insert(String::from("playbooks/tests_checkpoint_cleanup.yml"));

        Self {
            root: PathBuf::from("."),
            playbooks_dir: PathBuf::from(DEFAULT_PLAYBOOKS_DIR),
            nm_only,
            ignore,
            program_name: String::from(DEFAULT_PROGRAM_NAME),
        }
    }
}

impl ProviderTestsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with both tables replaced by the contents of a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::new().load_tables(yaml)
    }

    /// Replace the nm-only table and the ignore set from YAML of the form
    /// `{ nm_only: { <path>: { minimum_version, comment } }, ignore: [<path>] }`.
    pub fn load_tables(mut self, yaml: &str) -> Result<Self> {
        let tables: TablesFile = serde_yaml::from_str(yaml)?;
        let mut nm_only = IndexMap::new();
        for (path, entry) in tables.nm_only.into_iter() {
            let entry = entry.unwrap_or_default();
            entry.validate(&path)?;
            nm_only.insert(path, entry);
        }
        self.nm_only = nm_only;
        self.ignore = tables.ignore.into_iter().collect();
        Ok(self)
    }

    pub fn root<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.root = path.into();
        self
    }

    pub fn playbooks_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.playbooks_dir = path.into();
        self
    }

    pub fn nm_only_entry(mut self, test_playbook: impl Into<String>, entry: NmOnlyEntry) -> Self {
        self.nm_only.insert(test_playbook.into(), entry);
        self
    }

    pub fn clear_nm_only(mut self) -> Self {
        self.nm_only.clear();
        self
    }

    pub fn ignore(mut self, test_playbook: impl Into<String>) -> Self {
        self.ignore.insert(test_playbook.into());
        self
    }

    pub fn clear_ignore(mut self) -> Self {
        self.ignore.clear();
        self
    }

    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    pub fn is_ignored(&self, test_playbook: &str) -> bool {
        self.ignore.contains(test_playbook)
    }

    pub fn nm_only_lookup(&self, test_playbook: &str) -> Option<&NmOnlyEntry> {
        self.nm_only.get(test_playbook)
    }
}
