/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

//! A symbol table shipped inside the library.
//!
//! Only the addresses of the European release are bundled. Load a full
//! pmdsky-debug checkout with [`load_dir`] for the other regions.
//!
//! [`load_dir`]: crate::loader::load_dir

use std::sync::OnceLock;

use crate::{
    loader::{load_str, LoadError},
    metadata::Region,
    table::SymbolTable,
};

/// The bundled symbols, in the pmdsky-debug YAML format.
pub const SYMBOLS_YAML: &str = include_str!("../data/eu.yml");

/// The only region with addresses in the bundled table.
pub const REGION: Region = Region::Eu;

static TABLE: OnceLock<SymbolTable> = OnceLock::new();

/// Parses the bundled symbols into a fresh table.
pub fn load() -> Result<SymbolTable, LoadError> {
    load_str(SYMBOLS_YAML)
}

/// The bundled table, parsed on first use.
///
/// If the bundled document ever fails to parse the error is logged and an
/// empty table is returned; use [`load`] to observe the error itself.
pub fn table() -> &'static SymbolTable {
    TABLE.get_or_init(|| match load() {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to parse the bundled symbols: {}", e);
            SymbolTable::default()
        }
    })
}
