/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::string::String;

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RenderSettings {
    line_end: Option<String>,
    emit_descriptions: bool,
    section: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSettings {
    pub fn new() -> Self {
        Self {
            line_end: None,
            emit_descriptions: true,
            section: None,
        }
    }

    pub fn line_end(&self) -> &str {
        if let Some(line_end) = &self.line_end {
            line_end
        } else {
            "\n"
        }
    }
    pub fn with_line_end<T>(self, line_end: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            line_end: Some(line_end.into()),
            ..self
        }
    }

    pub const fn emit_descriptions(&self) -> bool {
        self.emit_descriptions
    }
    pub fn with_emit_descriptions(self, emit_descriptions: bool) -> Self {
        Self {
            emit_descriptions,
            ..self
        }
    }

    /// Restricts the output to the section of that name.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }
    pub fn with_section<T>(self, section: Option<T>) -> Self
    where
        T: Into<String>,
    {
        Self {
            section: section.map(Into::into),
            ..self
        }
    }
}
