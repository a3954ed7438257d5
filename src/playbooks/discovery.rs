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
use crate::output::OutputHandler;
use crate::util::io::list_dir_files;
use once_cell::sync::Lazy;
use regex::Regex;

// same files as the shell glob tests_*.yml
static TEST_PLAYBOOK_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^tests_.*\.yml$").expect("test playbook pattern compiles"));

pub fn is_test_playbook_name(file_name: &str) -> bool {
    TEST_PLAYBOOK_NAME.is_match(file_name)
}

/// Base playbooks under `<root>/<playbooks_dir>`, sorted, as paths relative
/// to the root (`playbooks/tests_foo.yml`). Those are the keys of the
/// nm-only table and ignore set, and what the wrappers import. A missing
/// directory yields an empty list. A matching file whose name is not UTF-8
/// cannot be written into a wrapper, so it is reported and left out.
pub fn discover_test_playbooks(config: &ProviderTestsConfig, output: &dyn OutputHandler) -> Result<Vec<String>> {
    let dir = config.root.join(&config.playbooks_dir);
    let mut found = Vec::new();
    for file in list_dir_files(&dir)?.iter() {
        let file_name = match file.file_name() {
            Some(x) => x,
            None => continue,
        };
        if !is_test_playbook_name(&file_name.to_string_lossy()) {
            continue;
        }
        match config.playbooks_dir.join(file_name).to_str() {
            Some(rel) => found.push(rel.to_string()),
            None => output.warning(&format!(
                "skipping {}: file name is not valid UTF-8, its wrappers are not checked",
                file.display()
            )),
        }
    }
    Ok(found)
}
