/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::fmt;

#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

use super::Size;

/// A location in the memory map of the running game.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "pyo3", pyclass(module = "pmdsky_symbols", frozen, eq, ord, hash))]
pub struct Address {
    inner: u32,
}

impl Address {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { inner: value }
    }

    #[must_use]
    pub const fn inner(&self) -> u32 {
        self.inner
    }
}

impl Address {
    /// `None` if the result doesn't fit in the address space.
    #[must_use]
    pub const fn checked_add_size(&self, size: &Size) -> Option<Self> {
        match self.inner.checked_add(size.inner()) {
            Some(x) => Some(Self::new(x)),
            None => None,
        }
    }

    /// Distance from `base` up to `self`, or `None` if `self` comes first.
    #[must_use]
    pub const fn checked_offset_from(&self, base: &Address) -> Option<Size> {
        match self.inner.checked_sub(base.inner) {
            Some(x) => Some(Size::new(x)),
            None => None,
        }
    }

    /// Whether `self` lies in the `length` bytes starting at `start`.
    ///
    /// Works up to the very end of the address space.
    #[must_use]
    pub const fn is_within(&self, start: &Address, length: &Size) -> bool {
        match self.checked_offset_from(start) {
            Some(offset) => offset.inner() < length.inner(),
            None => false,
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address {{ 0x{:08X} }}", self.inner)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.inner)
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::format;
    use pretty_assertions::assert_eq;

    #[test]
    fn offsets() {
        let base = Address::new(0x0238AC80);

        assert_eq!(
            Address::new(0x0238DE60).checked_offset_from(&base),
            Some(Size::new(0x31E0))
        );
        assert_eq!(base.checked_offset_from(&base), Some(Size::new(0)));
        assert_eq!(Address::new(0x02000000).checked_offset_from(&base), None);
    }

    #[test]
    fn end_of_address_space() {
        let bios = Address::new(0xFFFF0000);
        let length = Size::new(0x10000);

        assert!(Address::new(0xFFFFFFFF).is_within(&bios, &length));
        assert!(bios.is_within(&bios, &length));
        assert!(!Address::new(0xFFFEFFFF).is_within(&bios, &length));
        assert!(!bios.is_within(&bios, &Size::new(0)));

        assert_eq!(bios.checked_add_size(&Size::new(0xFFFF)), Some(Address::new(0xFFFFFFFF)));
        assert_eq!(bios.checked_add_size(&length), None);
    }

    #[test]
    fn display_is_unpadded_uppercase_hex() {
        assert_eq!(format!("{}", Address::new(0x2000DE0)), "0x2000DE0");
        assert_eq!(format!("{:?}", Address::new(0x2000DE0)), "Address { 0x02000DE0 }");
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
    impl Address {
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
