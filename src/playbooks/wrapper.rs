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

use crate::config::ProviderTestsConfig;
use crate::error::Result;
use crate::playbooks::templar::Templar;
use crate::util::io::path_file_stem;
use serde_yaml::{Mapping, Value};

// the generated text is compared byte for byte against files already in
// the role, so every newline in these templates matters

const GET_NM_VERSION: &str = "
    - block:
        - name: Install NetworkManager
          package:
            name: NetworkManager
            state: present
        - name: Get NetworkManager version
          command: rpm -q --qf \"%{version}\" NetworkManager
          args:
            warn: false
          register: NetworkManager_version
          when: true
      when:
        - ansible_distribution_major_version != '6'
";

const MINIMUM_NM_VERSION_CHECK: &str = "
    - NetworkManager_version.stdout is version({{minimum_nm_version}}, '>=')
";

const RUN_PLAYBOOK_WITH_NM: &str = "# SPDX-License-Identifier: BSD-3-Clause
# This file was generated by ensure_provider_tests.py
---
# set network provider and gather facts
- hosts: all
  name: Run playbook '{{test_playbook}}' with nm as provider
  tasks:
    - name: Set network provider to 'nm'
      set_fact:
        network_provider: nm
{{get_nm_version}}

# workaround for: https://github.com/ansible/ansible/issues/27973
# There is no way in Ansible to abort a playbook hosts with specific OS
# releases Therefore we include the playbook with the tests only if the hosts
# would support it.
# The test requires or should run with NetworkManager, therefore it cannot run
# on RHEL/CentOS 6
- import_playbook: {{test_playbook}}
  when:
    - ansible_distribution_major_version != '6'
{{minimum_nm_version_check}}";

const RUN_PLAYBOOK_WITH_INITSCRIPTS: &str = "# SPDX-License-Identifier: BSD-3-Clause
# This file was generated by ensure_provider_tests.py
---
- hosts: all
  name: Run playbook '{{test_playbook}}' with initscripts as provider
  tasks:
    - name: Set network provider to 'initscripts'
      set_fact:
        network_provider: initscripts

- import_playbook: {{test_playbook}}
";

const TEMPLATE_NM: &str = "nm";
const TEMPLATE_NM_VERSION_CHECK: &str = "nm_version_check";
const TEMPLATE_INITSCRIPTS: &str = "initscripts";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provider {
    Nm,
    Initscripts,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Nm => "nm",
            Provider::Initscripts => "initscripts",
        }
    }
}

/// The expected on-disk form of one provider wrapper
#[derive(Clone, Debug, PartialEq)]
pub struct WrapperPlaybook {
    pub provider: Provider,
    /// Relative to the working root, e.g. `tests_foo_nm.yml`
    pub file_name: String,
    pub contents: String,
}

// "playbooks/tests_foo.yml" + nm -> "tests_foo_nm.yml"
pub fn wrapper_file_name(test_playbook: &str, provider: Provider) -> String {
    format!("{}_{}.yml", path_file_stem(test_playbook), provider.name())
}

fn string_data(pairs: &[(&str, &str)]) -> Mapping {
    let mut mapping = Mapping::new();
    for (k, v) in pairs.iter() {
        mapping.insert(Value::String(k.to_string()), Value::String(v.to_string()));
    }
    mapping
}

pub struct WrapperRenderer {
    templar: Templar,
}

impl WrapperRenderer {
    pub fn new() -> Result<Self> {
        let mut templar = Templar::new();
        templar.register(TEMPLATE_NM, RUN_PLAYBOOK_WITH_NM)?;
        templar.register(TEMPLATE_NM_VERSION_CHECK, MINIMUM_NM_VERSION_CHECK)?;
        templar.register(TEMPLATE_INITSCRIPTS, RUN_PLAYBOOK_WITH_INITSCRIPTS)?;
        Ok(Self { templar })
    }

    /// Render the wrapper for one provider. The minimum version only
    /// affects the nm wrapper; None and an empty string both mean no guard.
    pub fn render(&self, test_playbook: &str, provider: Provider, minimum_nm_version: Option<&str>) -> Result<WrapperPlaybook> {
        let contents = match provider {
            Provider::Nm => self.render_nm(test_playbook, minimum_nm_version)?,
            Provider::Initscripts => self.templar.render(
                TEMPLATE_INITSCRIPTS,
                &string_data(&[("test_playbook", test_playbook)]),
            )?,
        };
        Ok(WrapperPlaybook {
            provider,
            file_name: wrapper_file_name(test_playbook, provider),
            contents,
        })
    }

    fn render_nm(&self, test_playbook: &str, minimum_nm_version: Option<&str>) -> Result<String> {
        let (get_nm_version, version_check) = match minimum_nm_version.filter(|v| !v.is_empty()) {
            Some(version) => {
                let check = self.templar.render(
                    TEMPLATE_NM_VERSION_CHECK,
                    &string_data(&[("minimum_nm_version", version)]),
                )?;
                (GET_NM_VERSION, check)
            },
            None => ("", String::new()),
        };
        self.templar.render(TEMPLATE_NM, &string_data(&[
            ("test_playbook", test_playbook),
            ("get_nm_version", get_nm_version),
            ("minimum_nm_version_check", version_check.as_str()),
        ]))
    }

    /// Every wrapper a base playbook needs: nm always, initscripts unless
    /// the base playbook is in the nm-only table.
    pub fn wrappers_for(&self, test_playbook: &str, config: &ProviderTestsConfig) -> Result<Vec<WrapperPlaybook>> {
        let nm_only = config.nm_only_lookup(test_playbook);
        let minimum_nm_version = nm_only.and_then(|entry| entry.effective_minimum_version());
        let mut wrappers = vec![self.render(test_playbook, Provider::Nm, minimum_nm_version)?];
        if nm_only.is_none() {
            wrappers.push(self.render(test_playbook, Provider::Initscripts, None)?);
        }
        Ok(wrappers)
    }
}
