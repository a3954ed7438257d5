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

use crate::error::Result;
use crate::output::OutputHandler;
use crate::playbooks::wrapper::WrapperPlaybook;
use crate::util::io::{read_if_file, write_local_file};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Compare wrappers on disk with the rendered text, touching nothing
    #[default]
    Check,
    /// Overwrite every wrapper with the rendered text
    Generate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    Matched,
    Mismatched,
    Missing,
}

pub fn reconcile(root: &Path, wrapper: &WrapperPlaybook, mode: Mode, output: &dyn OutputHandler) -> Result<Outcome> {
    let path = root.join(&wrapper.file_name);
    match mode {
        Mode::Generate => {
            output.on_generated(&wrapper.file_name);
            write_local_file(&path, &wrapper.contents)?;
            Ok(Outcome::Generated)
        },
        Mode::Check => {
            let on_disk = match read_if_file(&path)? {
                Some(x) => x,
                None => {
                    output.debug(&format!("{} is missing", wrapper.file_name));
                    return Ok(Outcome::Missing);
                }
            };
            if on_disk != wrapper.contents.as_bytes() {
                output.on_mismatch(&wrapper.file_name);
                return Ok(Outcome::Mismatched);
            }
            Ok(Outcome::Matched)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::NullOutputHandler;
    use crate::playbooks::wrapper::Provider;
    use std::fs;
    use tempfile::TempDir;

    fn wrapper() -> WrapperPlaybook {
        WrapperPlaybook {
            provider: Provider::Initscripts,
            file_name: String::from("tests_foo_initscripts.yml"),
            contents: String::from("---\n- import_playbook: playbooks/tests_foo.yml\n"),
        }
    }

    #[test]
    fn test_default_mode_is_check() {
        assert_eq!(Mode::default(), Mode::Check);
    }

    #[test]
    fn test_check_missing_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = reconcile(temp_dir.path(), &wrapper(), Mode::Check, &NullOutputHandler).unwrap();
        assert_eq!(outcome, Outcome::Missing);
        assert!(!temp_dir.path().join("tests_foo_initscripts.yml").exists());
    }

    #[test]
    fn test_generate_then_check() {
        let temp_dir = TempDir::new().unwrap();
        let w = wrapper();
        assert_eq!(reconcile(temp_dir.path(), &w, Mode::Generate, &NullOutputHandler).unwrap(), Outcome::Generated);
        assert_eq!(fs::read_to_string(temp_dir.path().join(&w.file_name)).unwrap(), w.contents);
        assert_eq!(reconcile(temp_dir.path(), &w, Mode::Check, &NullOutputHandler).unwrap(), Outcome::Matched);
    }

    #[test]
    fn test_check_detects_trailing_newline_change() {
        let temp_dir = TempDir::new().unwrap();
        let w = wrapper();
        fs::write(temp_dir.path().join(&w.file_name), format!("{}\n", w.contents)).unwrap();
        assert_eq!(reconcile(temp_dir.path(), &w, Mode::Check, &NullOutputHandler).unwrap(), Outcome::Mismatched);
    }

    #[test]
    fn test_generate_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let w = wrapper();
        fs::write(temp_dir.path().join(&w.file_name), "stale").unwrap();
        reconcile(temp_dir.path(), &w, Mode::Generate, &NullOutputHandler).unwrap();
        assert_eq!(fs::read_to_string(temp_dir.path().join(&w.file_name)).unwrap(), w.contents);
    }
}
