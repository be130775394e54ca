/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::vec::Vec;
use core::array;

use crate::metadata::{Binary, Region};

use super::{symbol_index::SymbolIndex, Sections};

/// Every binary of the game together with its symbols.
///
/// Binaries are kept sorted by name. Per region views are obtained with
/// [`SymbolTable::sections`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    binaries: Vec<Binary>,
    /// For every region, one index per binary in the same order as `binaries`.
    indices: [Vec<SymbolIndex>; Region::COUNT],
}

impl SymbolTable {
    #[must_use]
    pub fn new(mut binaries: Vec<Binary>) -> Self {
        binaries.sort_by(|a, b| a.name().cmp(b.name()));

        let indices = array::from_fn(|i| {
            let region = Region::ALL[i];

            binaries
                .iter()
                .map(|binary| SymbolIndex::new(binary, region))
                .collect()
        });

        Self { binaries, indices }
    }
}

impl SymbolTable {
    pub fn binaries(&self) -> &[Binary] {
        &self.binaries
    }

    #[must_use]
    pub fn binary(&self, name: &str) -> Option<&Binary> {
        self.binaries.iter().find(|x| x.name() == name)
    }

    pub fn len(&self) -> usize {
        self.binaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binaries.is_empty()
    }

    /// Total amount of function and data symbols across every binary.
    pub fn symbol_count(&self) -> usize {
        self.binaries
            .iter()
            .map(|x| x.functions().len() + x.data().len())
            .sum()
    }

    /// A view of the table using the addresses of `region`.
    #[must_use]
    pub fn sections(&self, region: Region) -> Sections<'_> {
        Sections::new(self, region)
    }

    pub(crate) fn index_of(&self, region: Region, binary_position: usize) -> &SymbolIndex {
        &self.indices[region.index()][binary_position]
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
