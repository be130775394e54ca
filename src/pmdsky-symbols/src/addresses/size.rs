/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::fmt;

#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "pyo3", pyclass(module = "pmdsky_symbols", frozen, eq, ord, hash))]
pub struct Size {
    inner: u32,
}

impl Size {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { inner: value }
    }

    #[must_use]
    pub const fn inner(&self) -> u32 {
        self.inner
    }
}

impl fmt::Debug for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size {{ 0x{:02X} }}", self.inner)
    }
}
impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.inner)
    }
}

impl From<u32> for Size {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

/// Values stored by address which may span more than a single byte.
pub trait SizedAddress {
    fn size(&self) -> Option<Size>;
}

impl SizedAddress for Size {
    fn size(&self) -> Option<Size> {
        Some(*self)
    }
}

impl SizedAddress for Option<Size> {
    fn size(&self) -> Option<Size> {
        *self
    }
}

#[cfg(feature = "pyo3")]
pub(crate) mod python_bindings {
    use alloc::{
        format,
        string::{String, ToString},
    };

    use super::*;

    #[pymethods]
    impl Size {
        #[new]
        pub fn py_new(value: u32) -> Self {
            Self::new(value)
        }

        #[pyo3(name = "inner")]
        pub fn py_inner(&self) -> u32 {
            self.inner()
        }

        fn __repr__(&self) -> String {
            format!("{:?}", self)
        }

        fn __str__(&self) -> String {
            self.to_string()
        }
    }
}
