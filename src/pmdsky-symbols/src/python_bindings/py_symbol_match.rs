/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{string::String, vec::Vec};

use pyo3::prelude::*;

use crate::{
    metadata::{Region, SymbolKind},
    table::RegionSymbol,
};

/// A symbol found by a lookup, detached from the table it came from.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[pyclass(module = "pmdsky_symbols", name = "SymbolMatch", frozen)]
pub struct PySymbolMatch {
    #[pyo3(get)]
    region: Region,
    #[pyo3(get)]
    section: String,
    #[pyo3(get)]
    kind: SymbolKind,
    #[pyo3(get)]
    name: String,
    #[pyo3(get)]
    aliases: Vec<String>,
    #[pyo3(get)]
    addresses: Vec<u32>,
    #[pyo3(get)]
    length: Option<u32>,
    #[pyo3(get)]
    description: String,
    #[pyo3(get)]
    typ: Option<String>,
}

impl From<RegionSymbol<'_>> for PySymbolMatch {
    fn from(value: RegionSymbol<'_>) -> Self {
        Self {
            region: value.region(),
            section: value.section().name().into(),
            kind: value.kind(),
            name: value.name().into(),
            aliases: value.aliases().iter().map(|x| String::from(&**x)).collect(),
            addresses: value.addresses().iter().map(|x| x.inner()).collect(),
            length: value.length().map(|x| x.inner()),
            description: value.description().into(),
            typ: value.typ().map(Into::into),
        }
    }
}

#[pymethods]
impl PySymbolMatch {
    /// The first address of the symbol, if known.
    #[getter]
    fn address(&self) -> Option<u32> {
        self.addresses.first().copied()
    }

    fn __repr__(&self) -> String {
        alloc::format!(
            "SymbolMatch({} {} in {} {:?})",
            self.kind,
            self.name,
            self.section,
            self.region
        )
    }
}
