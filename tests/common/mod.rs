// Common test utilities

use provider_tests::{LogLevel, OutputHandler, ProviderTestsConfig};
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Remembers every event so tests can assert on what would have been printed
#[derive(Default)]
pub struct RecordingOutputHandler {
    pub generated: Mutex<Vec<String>>,
    pub mismatched: Mutex<Vec<String>>,
    pub missing: Mutex<Vec<String>>,
    pub no_tests: Mutex<bool>,
    pub hints: Mutex<Vec<String>>,
    pub warnings: Mutex<Vec<String>>,
}

impl OutputHandler for RecordingOutputHandler {
    fn on_generated(&self, wrapper_file: &str) {
        self.generated.lock().unwrap().push(wrapper_file.to_string());
    }
    fn on_mismatch(&self, wrapper_file: &str) {
        self.mismatched.lock().unwrap().push(wrapper_file.to_string());
    }
    fn on_no_tests(&self) {
        *self.no_tests.lock().unwrap() = true;
    }
    fn on_missing(&self, test_playbooks: &[String], program_name: &str) {
        self.missing.lock().unwrap().extend(test_playbooks.iter().cloned());
        self.hints.lock().unwrap().push(program_name.to_string());
    }
    fn log(&self, level: LogLevel, message: &str) {
        if level == LogLevel::Warning {
            self.warnings.lock().unwrap().push(message.to_string());
        }
    }
}

/// A scratch role tests directory with the given base playbooks under playbooks/
pub fn role_with_playbooks(names: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let playbooks = temp_dir.path().join("playbooks");
    fs::create_dir(&playbooks).unwrap();
    for name in names {
        fs::write(playbooks.join(name), "---\n- hosts: all\n").unwrap();
    }
    temp_dir
}

pub fn config_for(root: &Path) -> ProviderTestsConfig {
    ProviderTestsConfig::new().root(root).program_name("ensure_provider_tests")
}

pub fn yml_files_at_root(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.is_file())
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .filter(|n| n.ends_with(".yml"))
        .collect();
    names.sort();
    names
}
