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
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

// keep the io::ErrorKind but put the path in the message
fn with_path(path: &Path, err: io::Error) -> ProviderTestsError {
    ProviderTestsError::Io(io::Error::new(err.kind(), format!("{}: {}", path.display(), err)))
}

// list the regular files directly inside a directory, sorted. A directory
// that does not exist has no files.
pub fn list_dir_files(path: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(path) {
        Ok(x) => x,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(with_path(path, e)),
    };
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| with_path(path, e))?;
        let entry_path = entry.path();
        if entry_path.is_file() {
            files.push(entry_path);
        }
    }
    files.sort();
    Ok(files)
}

// contents of a regular file, or None when there is no regular file at the path
pub fn read_if_file(path: &Path) -> Result<Option<Vec<u8>>> {
    if !path.is_file() {
        return Ok(None);
    }
    fs::read(path).map(Some).map_err(|e| with_path(path, e))
}

pub fn write_local_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| with_path(path, e))
}

// the file name without directory or final extension, "playbooks/tests_foo.yml" -> "tests_foo"
pub fn path_file_stem(path: &str) -> String {
    match Path::new(path).file_stem() {
        Some(stem) => stem.to_string_lossy().to_string(),
        None => String::new(),
    }
}

pub fn quit(s: &str) -> ! {
    // quit with a message - don't use this except in main.rs!
    eprintln!("{}", s);
    process::exit(0x01)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_list_dir_files_sorted_and_skips_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();
        File::create(path.join("b.yml")).unwrap();
        File::create(path.join("a.yml")).unwrap();
        fs::create_dir(path.join("c.yml")).unwrap();

        let files = list_dir_files(path).unwrap();
        assert_eq!(files, vec![path.join("a.yml"), path.join("b.yml")]);
    }

    #[test]
    fn test_list_dir_files_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let files = list_dir_files(&temp_dir.path().join("nope")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_read_if_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("x.yml");
        assert_eq!(read_if_file(&file).unwrap(), None);
        assert_eq!(read_if_file(temp_dir.path()).unwrap(), None);

        write_local_file(&file, "---\n").unwrap();
        assert_eq!(read_if_file(&file).unwrap(), Some(b"---\n".to_vec()));
    }

    #[test]
    fn test_write_into_missing_dir_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("nope").join("x.yml");
        let err = write_local_file(&file, "x").unwrap_err();
        assert!(err.to_string().contains("x.yml"));
    }

    #[test]
    fn test_path_file_stem() {
        assert_eq!(path_file_stem("playbooks/tests_foo.yml"), "tests_foo");
        assert_eq!(path_file_stem("tests_bar.yml"), "tests_bar");
        assert_eq!(path_file_stem("playbooks/tests.v2.yml"), "tests.v2");
    }
}
