/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

//! Reading a pmdsky-debug checkout into a [`SymbolTable`].
//!
//! [`SymbolTable`]: crate::table::SymbolTable

mod headers;
mod load_error;
mod loader;
mod yaml_defs;

pub use headers::{parse_header_types, HeaderType};
pub use load_error::{
    IoLoadError, LoadError, MissingAddressError, MissingNameError, YamlLoadError,
};
pub use loader::{load_dir, load_str, read_yaml, symbol_files};

#[cfg(feature = "pyo3")]
pub(crate) mod python_bindings {
    pub(crate) use super::load_error::python_bindings::LoadError;
}
