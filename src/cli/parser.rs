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

use crate::config::DEFAULT_PROGRAM_NAME;
use crate::playbooks::reconcile::Mode;
use std::ffi::{OsStr, OsString};

pub const CLI_MODE_GENERATE: &str = "generate";

// the whole command line: no arguments checks, "generate" as the first
// argument generates, anything else is ignored and checks. Arguments need
// not be UTF-8.
pub struct CliParser {
    pub mode: Mode,
    pub program_name: String,
}

impl Default for CliParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CliParser {
    pub fn new() -> Self {
        Self {
            mode: Mode::Check,
            program_name: String::from(DEFAULT_PROGRAM_NAME),
        }
    }

    pub fn parse(&mut self) {
        self.parse_args(std::env::args_os());
    }

    pub fn parse_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        if let Some(program_name) = args.next() {
            self.program_name = program_name.to_string_lossy().to_string();
        }
        self.mode = match args.next() {
            Some(arg) if arg.as_os_str() == OsStr::new(CLI_MODE_GENERATE) => Mode::Generate,
            _ => Mode::Check,
        };
    }
}
