/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{string::String, sync::Arc, vec::Vec};
use std::path::PathBuf;

use pyo3::{exceptions::PyValueError, prelude::*};

use crate::{
    addresses::Address,
    collections::addended_ordered_map::FindSettings,
    config::LoadConfig,
    loader,
    metadata::{Region, SymbolKinds},
    render::{self, RenderFormat, RenderSettings},
    table::SymbolTable,
};

use super::PySymbolMatch;

#[derive(Debug, Clone, PartialEq, Eq)]
#[pyclass(module = "pmdsky_symbols", name = "SymbolTable", frozen)]
pub struct PySymbolTable {
    inner: Arc<SymbolTable>,
}

impl PySymbolTable {
    pub fn inner(&self) -> &SymbolTable {
        &self.inner
    }
}

fn kinds_from_name(kind: Option<&str>) -> PyResult<SymbolKinds> {
    match kind {
        None => Ok(SymbolKinds::ANY),
        Some("function") => Ok(SymbolKinds::FUNCTION),
        Some("data") => Ok(SymbolKinds::DATA),
        Some(x) => Err(PyValueError::new_err(alloc::format!(
            "Unknown symbol kind '{}'",
            x
        ))),
    }
}

fn format_from_name(format: &str) -> PyResult<RenderFormat> {
    match format {
        "listing" => Ok(RenderFormat::Listing),
        "symbol-addrs" => Ok(RenderFormat::SymbolAddrs),
        "python" => Ok(RenderFormat::Python),
        "json" => Ok(RenderFormat::Json),
        x => Err(PyValueError::new_err(alloc::format!(
            "Unknown render format '{}'",
            x
        ))),
    }
}

#[pymethods]
impl PySymbolTable {
    #[cfg(feature = "bundled")]
    #[staticmethod]
    pub fn bundled() -> Self {
        Self {
            inner: Arc::new(crate::bundled::table().clone()),
        }
    }

    #[staticmethod]
    #[pyo3(signature = (pmdsky_debug_dir, load_types=true))]
    pub fn load(pmdsky_debug_dir: PathBuf, load_types: bool) -> PyResult<Self> {
        let config = LoadConfig::new().with_load_types(load_types);
        let table = loader::load_dir(pmdsky_debug_dir, &config)?;

        Ok(Self {
            inner: Arc::new(table),
        })
    }

    pub fn binaries(&self) -> Vec<String> {
        self.inner
            .binaries()
            .iter()
            .map(|x| String::from(x.name()))
            .collect()
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    #[pyo3(signature = (region, name, kind=None))]
    pub fn find_by_name(
        &self,
        region: Region,
        name: &str,
        kind: Option<&str>,
    ) -> PyResult<Option<PySymbolMatch>> {
        let kinds = kinds_from_name(kind)?;

        Ok(self
            .inner
            .sections(region)
            .find_by_name(name, kinds)
            .map(Into::into))
    }

    #[pyo3(signature = (region, address, kind=None, allow_addend=false))]
    pub fn find_by_address(
        &self,
        region: Region,
        address: u32,
        kind: Option<&str>,
        allow_addend: bool,
    ) -> PyResult<Vec<PySymbolMatch>> {
        let kinds = kinds_from_name(kind)?;

        Ok(self
            .inner
            .sections(region)
            .find_by_address(Address::new(address), kinds, FindSettings::new(allow_addend))
            .into_iter()
            .map(Into::into)
            .collect())
    }

    #[pyo3(signature = (region, format="listing", section=None, descriptions=true))]
    pub fn render(
        &self,
        region: Region,
        format: &str,
        section: Option<String>,
        descriptions: bool,
    ) -> PyResult<String> {
        let settings = RenderSettings::new()
            .with_section(section)
            .with_emit_descriptions(descriptions);

        render::render(self.inner.sections(region), format_from_name(format)?, &settings)
            .map_err(|e| PyValueError::new_err(alloc::string::ToString::to_string(&e)))
    }
}
