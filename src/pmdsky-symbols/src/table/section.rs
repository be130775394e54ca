/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::vec::Vec;

use crate::{
    addresses::{Address, AddressRange, Size},
    collections::addended_ordered_map::FindSettings,
    metadata::{Binary, Region, SymbolKind, SymbolKinds},
};

use super::{symbol_index::SymbolIndex, RegionSymbol};

/// A binary seen through the addresses of a single region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    binary: &'a Binary,
    index: &'a SymbolIndex,
    region: Region,
}

impl<'a> Section<'a> {
    pub(crate) fn new(binary: &'a Binary, index: &'a SymbolIndex, region: Region) -> Self {
        Self {
            binary,
            index,
            region,
        }
    }
}

impl<'a> Section<'a> {
    pub fn binary(&self) -> &'a Binary {
        self.binary
    }
    pub const fn region(&self) -> Region {
        self.region
    }
    pub fn name(&self) -> &'a str {
        self.binary.name()
    }
    pub fn class_name(&self) -> &'a str {
        self.binary.class_name()
    }
    pub fn description(&self) -> &'a str {
        self.binary.description()
    }

    pub fn load_address(&self) -> Option<Address> {
        self.binary.load_address_in(self.region)
    }
    pub fn length(&self) -> Option<Size> {
        self.binary.length_in(self.region)
    }
    pub fn range(&self) -> Option<AddressRange<Address>> {
        self.binary.range_in(self.region)
    }

    #[must_use]
    pub fn in_range(&self, address: Address) -> bool {
        self.binary.contains_in(self.region, address)
    }
}

impl<'a> Section<'a> {
    fn symbols_of(&self, kind: SymbolKind) -> impl Iterator<Item = RegionSymbol<'a>> + 'a {
        let slf = *self;

        self.binary
            .symbols(kind)
            .iter()
            .map(move |sym| RegionSymbol::new(slf, kind, sym))
    }

    pub fn functions(&self) -> impl Iterator<Item = RegionSymbol<'a>> + 'a {
        self.symbols_of(SymbolKind::Function)
    }

    pub fn data(&self) -> impl Iterator<Item = RegionSymbol<'a>> + 'a {
        self.symbols_of(SymbolKind::Data)
    }

    /// Functions first, then data, each in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = RegionSymbol<'a>> + 'a {
        self.functions().chain(self.data())
    }

    /// The first symbol of an accepted kind with the given name or alias.
    #[must_use]
    pub fn find_symbol(&self, name: &str, kinds: SymbolKinds) -> Option<RegionSymbol<'a>> {
        self.symbols()
            .filter(|x| kinds.accepts(x.kind()))
            .find(|x| x.symbol().is_named(name))
    }

    /// Symbols of an accepted kind located at `address`.
    ///
    /// With `allow_addend`, every symbol with a known length that spans over
    /// `address` is returned too, enclosing symbols first.
    #[must_use]
    pub fn symbols_at(
        &self,
        address: Address,
        kinds: SymbolKinds,
        settings: FindSettings,
    ) -> Vec<RegionSymbol<'a>> {
        self.index
            .find(address, settings)
            .into_iter()
            .filter(|x| kinds.accepts(x.kind()))
            .map(|x| {
                RegionSymbol::new(
                    *self,
                    x.kind(),
                    &self.binary.symbols(x.kind())[x.index()],
                )
            })
            .collect()
    }
}
