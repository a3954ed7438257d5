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


use provider_tests::{ProviderTestsConfig, ProviderTestsRunner, TerminalOutputHandler, Result};
use provider_tests::cli::parser::CliParser;
use provider_tests::util::io::quit;
use std::process;
use std::sync::Arc;

fn main() {
    match liftoff() {
        Ok(code) => process::exit(code),
        Err(e) => quit(&e.to_string()),
    }
}

fn liftoff() -> Result<i32> {
    let mut cli_parser = CliParser::new();
    cli_parser.parse();

    // wrappers are written to and read from the current directory
    let config = ProviderTestsConfig::new()
        .program_name(cli_parser.program_name.clone());
    let runner = ProviderTestsRunner::new(config)
        .with_output_handler(Arc::new(TerminalOutputHandler::new(0)));

    let result = runner.run(cli_parser.mode)?;
    Ok(result.exit_code())
}
