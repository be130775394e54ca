/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{sync::Arc, vec::Vec};

use crate::{
    addresses::{Address, AddressRange, Size},
    metadata::{Region, Symbol, SymbolKind},
};

use super::Section;

/// A symbol seen through the addresses of a single region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSymbol<'a> {
    section: Section<'a>,
    kind: SymbolKind,
    symbol: &'a Symbol,
}

impl<'a> RegionSymbol<'a> {
    pub(crate) fn new(section: Section<'a>, kind: SymbolKind, symbol: &'a Symbol) -> Self {
        Self {
            section,
            kind,
            symbol,
        }
    }
}

impl<'a> RegionSymbol<'a> {
    pub const fn section(&self) -> Section<'a> {
        self.section
    }
    pub const fn kind(&self) -> SymbolKind {
        self.kind
    }
    pub const fn symbol(&self) -> &'a Symbol {
        self.symbol
    }
    pub const fn region(&self) -> Region {
        self.section.region()
    }

    pub fn name(&self) -> &'a str {
        self.symbol.name()
    }
    pub fn aliases(&self) -> &'a [Arc<str>] {
        self.symbol.aliases()
    }
    pub fn description(&self) -> &'a str {
        self.symbol.description()
    }
    pub fn typ(&self) -> Option<&'a str> {
        self.symbol.typ()
    }

    /// Every address of the symbol in this region; empty if unknown.
    pub fn addresses(&self) -> &'a [Address] {
        self.symbol
            .addresses_in(self.region())
            .unwrap_or_default()
    }

    /// The first address of the symbol in this region.
    pub fn address(&self) -> Option<Address> {
        self.addresses().first().copied()
    }

    pub fn length(&self) -> Option<Size> {
        self.symbol.length_in(self.region())
    }

    pub fn is_known(&self) -> bool {
        !self.addresses().is_empty()
    }

    pub fn ranges(&self) -> impl Iterator<Item = AddressRange<Address>> + 'a {
        self.symbol.ranges_in(self.region())
    }

    /// Offsets of every address from the load address of the owning section.
    ///
    /// `None` if the symbol or the section have no address in this region,
    /// or if any address lies before the load address.
    #[must_use]
    pub fn relative_addresses(&self) -> Option<Vec<Size>> {
        let base = self.section.load_address()?;
        let addresses = self.symbol.addresses_in(self.region())?;

        addresses
            .iter()
            .map(|x| x.checked_offset_from(&base))
            .collect()
    }
}
