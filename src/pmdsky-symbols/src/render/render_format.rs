/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::fmt;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum RenderFormat {
    /// Human readable dump of every section and symbol.
    Listing,
    /// Linker script symbol assignments.
    SymbolAddrs,
    /// The module layout used by the `pmdsky_debug_py` package.
    Python,
    #[cfg(feature = "std")]
    Json,
}

impl RenderFormat {
    pub const fn name(&self) -> &'static str {
        match self {
            RenderFormat::Listing => "listing",
            RenderFormat::SymbolAddrs => "symbol-addrs",
            RenderFormat::Python => "python",
            #[cfg(feature = "std")]
            RenderFormat::Json => "json",
        }
    }

    /// Extension of the files written by the [`Generator`].
    ///
    /// [`Generator`]: super::Generator
    pub const fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Listing => "txt",
            RenderFormat::SymbolAddrs => "ld",
            RenderFormat::Python => "py",
            #[cfg(feature = "std")]
            RenderFormat::Json => "json",
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
