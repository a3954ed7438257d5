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
use crate::output::{NullOutputHandler, OutputHandlerRef};
use crate::playbooks::discovery::discover_test_playbooks;
use crate::playbooks::reconcile::{reconcile, Mode, Outcome};
use crate::playbooks::wrapper::WrapperRenderer;
use std::sync::Arc;

/// What one run found or did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunResult {
    pub mode: Mode,
    /// Base playbooks found, ignored ones included
    pub discovered: Vec<String>,
    /// Wrapper file names written (generate mode)
    pub generated: Vec<String>,
    /// Wrapper file names whose contents differ (check mode)
    pub mismatched: Vec<String>,
    /// Base playbook paths, once per absent wrapper (check mode)
    pub missing: Vec<String>,
}

impl RunResult {
    pub fn no_tests(&self) -> bool {
        self.discovered.is_empty()
    }

    pub fn success(&self) -> bool {
        !self.no_tests() && self.mismatched.is_empty() && self.missing.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        match self.success() {
            true => 0,
            false => 1,
        }
    }
}

/// Generates or checks the provider wrappers of every base playbook
pub struct ProviderTestsRunner {
    config: ProviderTestsConfig,
    output_handler: OutputHandlerRef,
}

impl ProviderTestsRunner {
    pub fn new(config: ProviderTestsConfig) -> Self {
        Self {
            config,
            output_handler: Arc::new(NullOutputHandler),
        }
    }

    pub fn with_output_handler(mut self, handler: OutputHandlerRef) -> Self {
        self.output_handler = handler;
        self
    }

    pub fn config(&self) -> &ProviderTestsConfig {
        &self.config
    }

    /// Mismatches, missing wrappers and an empty playbook directory are
    /// collected in the result; only filesystem and template errors stop
    /// the run early.
    pub fn run(&self, mode: Mode) -> Result<RunResult> {
        let output = &*self.output_handler;
        let renderer = WrapperRenderer::new()?;
        let mut result = RunResult { mode, ..Default::default() };

        result.discovered = discover_test_playbooks(&self.config, output)?;
        if result.no_tests() {
            output.on_no_tests();
        }

        for test_playbook in result.discovered.iter() {
            if self.config.is_ignored(test_playbook) {
                output.debug(&format!("skipping ignored {}", test_playbook));
                continue;
            }
            output.info(&format!("{}: {}", mode_verb(mode), test_playbook));
            for wrapper in renderer.wrappers_for(test_playbook, &self.config)?.iter() {
                match reconcile(&self.config.root, wrapper, mode, output)? {
                    Outcome::Generated => result.generated.push(wrapper.file_name.clone()),
                    Outcome::Mismatched => result.mismatched.push(wrapper.file_name.clone()),
                    Outcome::Missing => result.missing.push(test_playbook.clone()),
                    Outcome::Matched => {}
                }
            }
        }

        if !result.missing.is_empty() {
            output.on_missing(&result.missing, &self.config.program_name);
        }
        Ok(result)
    }

    pub fn check(&self) -> Result<RunResult> {
        self.run(Mode::Check)
    }

    pub fn generate(&self) -> Result<RunResult> {
        self.run(Mode::Generate)
    }
}

fn mode_verb(mode: Mode) -> &'static str {
    match mode {
        Mode::Check => "checking",
        Mode::Generate => "generating",
    }
}
