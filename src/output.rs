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

use std::io::IsTerminal;
use std::sync::Arc;
use inline_colorization::{color_red, color_reset};

/// Trait for reporting what a generate or check run finds
pub trait OutputHandler: Send + Sync {
    /// A wrapper was written (generate mode)
    fn on_generated(&self, wrapper_file: &str);

    /// A wrapper on disk differs from the rendered text (check mode)
    fn on_mismatch(&self, wrapper_file: &str);

    /// Discovery found no base playbooks at all
    fn on_no_tests(&self);

    /// Base playbooks with at least one absent wrapper, in discovery order
    fn on_missing(&self, test_playbooks: &[String], program_name: &str);

    fn log(&self, level: LogLevel, message: &str);
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }
    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

/// A no-op output handler for when output is not needed
pub struct NullOutputHandler;

impl OutputHandler for NullOutputHandler {
    fn on_generated(&self, _wrapper_file: &str) {}
    fn on_mismatch(&self, _wrapper_file: &str) {}
    fn on_no_tests(&self) {}
    fn on_missing(&self, _test_playbooks: &[String], _program_name: &str) {}
    fn log(&self, _level: LogLevel, _message: &str) {}
}

/// Plain stdout reporting, one line per event
pub struct TerminalOutputHandler {
    pub verbosity: u32,
    pub color: bool,
}

impl TerminalOutputHandler {
    pub fn new(verbosity: u32) -> Self {
        Self { verbosity, color: std::io::stdout().is_terminal() }
    }

    fn error_prefix(&self) -> String {
        match self.color {
            true => format!("{color_red}ERROR{color_reset}:"),
            false => String::from("ERROR:"),
        }
    }
}

// "ERROR: No NM or initscripts tests found for:" body, one base playbook per line
pub fn format_missing(test_playbooks: &[String]) -> String {
    test_playbooks.join(", \n")
}

pub fn format_generate_hint(program_name: &str) -> String {
    format!("Try to generate them with '{} generate'", program_name)
}

impl OutputHandler for TerminalOutputHandler {
    fn on_generated(&self, wrapper_file: &str) {
        println!("{}", wrapper_file);
    }

    fn on_mismatch(&self, wrapper_file: &str) {
        println!("{} Playbook does not match nominal value: {}", self.error_prefix(), wrapper_file);
    }

    fn on_no_tests(&self) {
        println!("{} No tests found", self.error_prefix());
    }

    fn on_missing(&self, test_playbooks: &[String], program_name: &str) {
        println!("{} No NM or initscripts tests found for:\n{}", self.error_prefix(), format_missing(test_playbooks));
        println!("{}", format_generate_hint(program_name));
    }

    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug if self.verbosity >= 3 => println!("DEBUG: {}", message),
            LogLevel::Info if self.verbosity >= 1 => println!("INFO: {}", message),
            LogLevel::Warning => println!("WARNING: {}", message),
            LogLevel::Error => eprintln!("{} {}", self.error_prefix(), message),
            _ => {}
        }
    }
}

/// Thread-safe wrapper for output handlers
pub type OutputHandlerRef = Arc<dyn OutputHandler>;
