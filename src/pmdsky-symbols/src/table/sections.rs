/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::vec::Vec;

use crate::{
    addresses::Address,
    collections::addended_ordered_map::FindSettings,
    metadata::{Region, SymbolKinds},
};

use super::{RegionSymbol, Section, SymbolTable};

/// The registry of every section of the game for one region.
///
/// Overlays share address space, so address based queries may return
/// symbols from several sections at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    table: &'a SymbolTable,
    region: Region,
}

impl<'a> Sections<'a> {
    pub(crate) fn new(table: &'a SymbolTable, region: Region) -> Self {
        Self { table, region }
    }
}

impl<'a> Sections<'a> {
    pub const fn table(&self) -> &'a SymbolTable {
        self.table
    }
    pub const fn region(&self) -> Region {
        self.region
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Sections sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = Section<'a>> + 'a {
        let table = self.table;
        let region = self.region;

        table
            .binaries()
            .iter()
            .enumerate()
            .map(move |(i, binary)| Section::new(binary, table.index_of(region, i), region))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Section<'a>> {
        self.iter().find(|x| x.name() == name)
    }

    /// The first symbol of an accepted kind named `name`, or aliased as such,
    /// in any section.
    #[must_use]
    pub fn find_by_name(&self, name: &str, kinds: SymbolKinds) -> Option<RegionSymbol<'a>> {
        self.iter().find_map(|x| x.find_symbol(name, kinds))
    }

    /// Symbols of an accepted kind located at `address`, across every section.
    #[must_use]
    pub fn find_by_address(
        &self,
        address: Address,
        kinds: SymbolKinds,
        settings: FindSettings,
    ) -> Vec<RegionSymbol<'a>> {
        self.iter()
            .flat_map(|x| x.symbols_at(address, kinds, settings))
            .collect()
    }

    /// Sections whose load range contains `address`.
    pub fn sections_containing(&self, address: Address) -> impl Iterator<Item = Section<'a>> + 'a {
        self.iter().filter(move |x| x.in_range(address))
    }
}
