/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::sync::Arc;
use core::{error, fmt};
use std::{io, path::PathBuf};

use crate::metadata::ParseRegionError;

#[derive(Debug)]
#[non_exhaustive]
pub enum LoadError {
    Io(IoLoadError),
    Yaml(YamlLoadError),
    Walk(walkdir::Error),
    MissingName(MissingNameError),
    MissingAddress(MissingAddressError),
    Region(ParseRegionError),
    HeaderPattern(regex::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(x) => write!(f, "{}", x),
            LoadError::Yaml(x) => write!(f, "{}", x),
            LoadError::Walk(x) => write!(f, "{}", x),
            LoadError::MissingName(x) => write!(f, "{}", x),
            LoadError::MissingAddress(x) => write!(f, "{}", x),
            LoadError::Region(x) => write!(f, "{}", x),
            LoadError::HeaderPattern(x) => write!(f, "{}", x),
        }
    }
}
impl error::Error for LoadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LoadError::Io(x) => Some(&x.inner),
            LoadError::Yaml(x) => Some(&x.inner),
            LoadError::Walk(x) => Some(x),
            LoadError::HeaderPattern(x) => Some(x),
            LoadError::MissingName(_) | LoadError::MissingAddress(_) | LoadError::Region(_) => {
                None
            }
        }
    }
}

impl From<IoLoadError> for LoadError {
    fn from(value: IoLoadError) -> Self {
        LoadError::Io(value)
    }
}
impl From<YamlLoadError> for LoadError {
    fn from(value: YamlLoadError) -> Self {
        LoadError::Yaml(value)
    }
}
impl From<walkdir::Error> for LoadError {
    fn from(value: walkdir::Error) -> Self {
        LoadError::Walk(value)
    }
}
impl From<MissingNameError> for LoadError {
    fn from(value: MissingNameError) -> Self {
        LoadError::MissingName(value)
    }
}
impl From<MissingAddressError> for LoadError {
    fn from(value: MissingAddressError) -> Self {
        LoadError::MissingAddress(value)
    }
}
impl From<ParseRegionError> for LoadError {
    fn from(value: ParseRegionError) -> Self {
        LoadError::Region(value)
    }
}
impl From<regex::Error> for LoadError {
    fn from(value: regex::Error) -> Self {
        LoadError::HeaderPattern(value)
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct IoLoadError {
    path: PathBuf,
    inner: io::Error,
}
impl IoLoadError {
    pub(crate) fn new(path: PathBuf, inner: io::Error) -> Self {
        Self { path, inner }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
    pub fn inner(&self) -> &io::Error {
        &self.inner
    }
}
impl fmt::Display for IoLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to read '{}': {}", self.path.display(), self.inner)
    }
}
impl error::Error for IoLoadError {}

#[derive(Debug)]
#[non_exhaustive]
pub struct YamlLoadError {
    path: Option<PathBuf>,
    inner: serde_yaml::Error,
}
impl YamlLoadError {
    pub(crate) fn new(path: Option<PathBuf>, inner: serde_yaml::Error) -> Self {
        Self { path, inner }
    }

    /// The offending file, if the document was read from disk.
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
    pub fn inner(&self) -> &serde_yaml::Error {
        &self.inner
    }
}
impl fmt::Display for YamlLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Malformed symbols file '{}': {}", path.display(), self.inner),
            None => write!(f, "Malformed symbols document: {}", self.inner),
        }
    }
}
impl error::Error for YamlLoadError {}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub struct MissingNameError {
    binary: Arc<str>,
}
impl MissingNameError {
    pub(crate) fn new(binary: Arc<str>) -> Self {
        Self { binary }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
}
impl fmt::Display for MissingNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol is missing its name. (in binary '{}')", self.binary)
    }
}
impl error::Error for MissingNameError {}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub struct MissingAddressError {
    binary: Arc<str>,
    symbol: Arc<str>,
}
impl MissingAddressError {
    pub(crate) fn new(binary: Arc<str>, symbol: Arc<str>) -> Self {
        Self { binary, symbol }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}
impl fmt::Display for MissingAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Symbol {} is missing an address. (in binary '{}')",
            self.symbol, self.binary
        )
    }
}
impl error::Error for MissingAddressError {}

#[cfg(feature = "pyo3")]
pub(crate) mod python_bindings {
    use alloc::string::ToString;
    use pyo3::exceptions::PyRuntimeError;
    use pyo3::prelude::*;

    pyo3::create_exception!(pmdsky_symbols, LoadError, PyRuntimeError);

    impl std::convert::From<super::LoadError> for PyErr {
        fn from(err: super::LoadError) -> PyErr {
            LoadError::new_err(err.to_string())
        }
    }
}
