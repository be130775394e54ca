/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{error, fmt};

use alloc::string::String;

#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

/// A release of the game, or the ITCM address space of that release.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "pyo3", pyclass(module = "pmdsky_symbols", eq, eq_int, ord, hash, frozen))]
pub enum Region {
    Na,
    Eu,
    Jp,
    NaItcm,
    EuItcm,
    JpItcm,
}

impl Region {
    pub const COUNT: usize = 6;

    pub const ALL: [Region; Self::COUNT] = [
        Region::Na,
        Region::Eu,
        Region::Jp,
        Region::NaItcm,
        Region::EuItcm,
        Region::JpItcm,
    ];

    /// Parses a region key as used by the symbol files.
    ///
    /// Keys are case insensitive. The RAM and WRAM keys are valid but have
    /// no region of their own, so they parse to `Ok(None)`.
    pub fn parse(region_str: &str) -> Result<Option<Self>, ParseRegionError> {
        let lowered = region_str.to_ascii_lowercase();

        match lowered.as_str() {
            "na" => Ok(Some(Region::Na)),
            "eu" => Ok(Some(Region::Eu)),
            "jp" => Ok(Some(Region::Jp)),
            "na-itcm" => Ok(Some(Region::NaItcm)),
            "eu-itcm" => Ok(Some(Region::EuItcm)),
            "jp-itcm" => Ok(Some(Region::JpItcm)),
            "na-wram" | "eu-wram" | "jp-wram" | "na-ram" | "eu-ram" | "jp-ram" => Ok(None),
            _ => Err(ParseRegionError::new(region_str.into())),
        }
    }

    pub(crate) const fn index(&self) -> usize {
        match self {
            Region::Na => 0,
            Region::Eu => 1,
            Region::Jp => 2,
            Region::NaItcm => 3,
            Region::EuItcm => 4,
            Region::JpItcm => 5,
        }
    }

    /// The canonical key, as written in the symbol files.
    pub const fn key(&self) -> &'static str {
        match self {
            Region::Na => "NA",
            Region::Eu => "EU",
            Region::Jp => "JP",
            Region::NaItcm => "NA-ITCM",
            Region::EuItcm => "EU-ITCM",
            Region::JpItcm => "JP-ITCM",
        }
    }

    pub const fn file_name(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Eu => "eu",
            Region::Jp => "jp",
            Region::NaItcm => "na_itcm",
            Region::EuItcm => "eu_itcm",
            Region::JpItcm => "jp_itcm",
        }
    }

    pub const fn class_prefix(&self) -> &'static str {
        match self {
            Region::Na => "Na",
            Region::Eu => "Eu",
            Region::Jp => "Jp",
            Region::NaItcm => "NaItcm",
            Region::EuItcm => "EuItcm",
            Region::JpItcm => "JpItcm",
        }
    }

    pub const fn is_itcm(&self) -> bool {
        matches!(self, Region::NaItcm | Region::EuItcm | Region::JpItcm)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub struct ParseRegionError {
    region_str: String,
}

impl ParseRegionError {
    pub(crate) fn new(region_str: String) -> Self {
        Self { region_str }
    }

    pub fn region_str(&self) -> &str {
        &self.region_str
    }
}

impl fmt::Display for ParseRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown region string: {}", self.region_str)
    }
}
impl error::Error for ParseRegionError {}


#[cfg(feature = "pyo3")]
pub(crate) mod python_bindings {
    use alloc::string::{String, ToString};

    use super::*;

    #[pymethods]
    impl Region {
        #[staticmethod]
        #[pyo3(name = "parse")]
        pub fn py_parse(region_str: &str) -> PyResult<Option<Self>> {
            Self::parse(region_str)
                .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
        }

        #[pyo3(name = "key")]
        pub fn py_key(&self) -> &'static str {
            self.key()
        }

        #[pyo3(name = "file_name")]
        pub fn py_file_name(&self) -> &'static str {
            self.file_name()
        }

        #[pyo3(name = "class_prefix")]
        pub fn py_class_prefix(&self) -> &'static str {
            self.class_prefix()
        }

        fn __str__(&self) -> String {
            self.key().into()
        }
    }
}
