/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::string::String;

/// Where to find things inside a pmdsky-debug checkout, and what to read.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct LoadConfig {
    symbols_dir: String,
    headers_dir: String,
    load_types: bool,
}

impl LoadConfig {
    pub fn new() -> Self {
        Self {
            symbols_dir: "symbols".into(),
            headers_dir: "headers/data".into(),
            load_types: true,
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadConfig {
    /// Directory holding the YAML symbol files, relative to the checkout.
    pub fn symbols_dir(&self) -> &str {
        &self.symbols_dir
    }
    pub fn symbols_dir_mut(&mut self) -> &mut String {
        &mut self.symbols_dir
    }
    pub fn with_symbols_dir<T>(self, symbols_dir: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            symbols_dir: symbols_dir.into(),
            ..self
        }
    }

    /// Directory holding the C headers that declare data symbols, relative
    /// to the checkout.
    pub fn headers_dir(&self) -> &str {
        &self.headers_dir
    }
    pub fn headers_dir_mut(&mut self) -> &mut String {
        &mut self.headers_dir
    }
    pub fn with_headers_dir<T>(self, headers_dir: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            headers_dir: headers_dir.into(),
            ..self
        }
    }

    pub const fn load_types(&self) -> bool {
        self.load_types
    }
    pub fn load_types_mut(&mut self) -> &mut bool {
        &mut self.load_types
    }
    pub fn with_load_types(self, load_types: bool) -> Self {
        Self { load_types, ..self }
    }
}
