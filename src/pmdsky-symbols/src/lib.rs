/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

#![no_std]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

extern crate alloc;

pub mod addresses;
pub mod collections;
pub mod config;
pub mod metadata;
pub mod render;
pub mod table;

#[cfg(feature = "std")]
pub mod loader;

#[cfg(feature = "bundled")]
pub mod bundled;

#[cfg(feature = "pyo3")]
pub(crate) mod python_bindings;

#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn pmdsky_symbols(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<metadata::Region>()?;
    m.add_class::<metadata::SymbolKind>()?;
    m.add_class::<addresses::Address>()?;
    m.add_class::<addresses::Size>()?;
    m.add_class::<python_bindings::PySymbolTable>()?;
    m.add_class::<python_bindings::PySymbolMatch>()?;

    m.add(
        "LoadError",
        m.py().get_type::<loader::python_bindings::LoadError>(),
    )?;

    Ok(())
}
