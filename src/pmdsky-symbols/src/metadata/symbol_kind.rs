/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::fmt;

use bitflags::bitflags;

#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "pyo3", pyclass(module = "pmdsky_symbols", eq, eq_int, ord, hash, frozen))]
pub enum SymbolKind {
    Function,
    Data,
}

impl SymbolKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Data => "data",
        }
    }

    pub const fn as_kinds(&self) -> SymbolKinds {
        match self {
            SymbolKind::Function => SymbolKinds::FUNCTION,
            SymbolKind::Data => SymbolKinds::DATA,
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

bitflags! {
    /// Filter for queries that may return either kind of symbol.
    #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
    pub struct SymbolKinds: u8 {
        const FUNCTION = 1 << 0;
        const DATA = 1 << 1;

        const ANY = Self::FUNCTION.bits() | Self::DATA.bits();
    }
}

impl SymbolKinds {
    #[must_use]
    pub const fn accepts(&self, kind: SymbolKind) -> bool {
        self.contains(kind.as_kinds())
    }
}

impl From<SymbolKind> for SymbolKinds {
    fn from(value: SymbolKind) -> Self {
        value.as_kinds()
    }
}

impl Default for SymbolKinds {
    fn default() -> Self {
        Self::ANY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtering() {
        assert!(SymbolKinds::ANY.accepts(SymbolKind::Function));
        assert!(SymbolKinds::ANY.accepts(SymbolKind::Data));
        assert!(SymbolKinds::DATA.accepts(SymbolKind::Data));
        assert!(!SymbolKinds::DATA.accepts(SymbolKind::Function));
        assert!(!SymbolKinds::empty().accepts(SymbolKind::Function));
        assert_eq!(SymbolKinds::from(SymbolKind::Function), SymbolKinds::FUNCTION);
    }
}
