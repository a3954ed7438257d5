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
use handlebars::Handlebars;

/// Named handlebars templates rendered verbatim. Output is YAML, not HTML,
/// so nothing is escaped, and any variable the data does not supply is an
/// error rather than an empty string.
pub struct Templar {
    registry: Handlebars<'static>,
}

impl Default for Templar {
    fn default() -> Self {
        Self::new()
    }
}

impl Templar {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        Self { registry }
    }

    pub fn register(&mut self, name: &str, template: &str) -> Result<()> {
        self.registry.register_template_string(name, template).map_err(|e| {
            ProviderTestsError::Template(format!("failed to register {}: {}", name, e))
        })
    }

    pub fn render(&self, name: &str, data: &serde_yaml::Mapping) -> Result<String> {
        self.registry.render(name, data).map_err(|e| {
            ProviderTestsError::Template(format!("failed to render {}: {}", name, e))
        })
    }
}
