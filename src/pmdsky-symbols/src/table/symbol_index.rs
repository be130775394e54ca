/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::vec::Vec;

use crate::{
    addresses::{Address, Size, SizedAddress},
    collections::addended_ordered_map::{AddendedOrderedMap, FindSettings},
    metadata::{Binary, Region, SymbolKind},
};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct SymbolRef {
    kind: SymbolKind,
    index: usize,
    length: Option<Size>,
}

impl SymbolRef {
    pub(crate) const fn kind(&self) -> SymbolKind {
        self.kind
    }
    pub(crate) const fn index(&self) -> usize {
        self.index
    }

    /// Sizeless symbols can only span over `address` from the closest slot
    /// before it.
    fn contains(
        &self,
        start: Address,
        address: Address,
        nearest: bool,
        settings: FindSettings,
    ) -> bool {
        if start == address {
            return true;
        }
        if !settings.allow_addend() {
            return false;
        }
        match self.length {
            Some(length) => address.is_within(&start, &length),
            None => nearest && !settings.reject_sizeless_addended(),
        }
    }
}

/// Every symbol of a binary that starts at the same address.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub(crate) struct AddressSlot {
    size: Option<Size>,
    entries: Vec<SymbolRef>,
}

impl AddressSlot {
    const fn new() -> Self {
        Self {
            size: None,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, entry: SymbolRef) {
        self.size = match (self.size, entry.length) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self.entries.push(entry);
    }
}

impl SizedAddress for AddressSlot {
    fn size(&self) -> Option<Size> {
        self.size
    }
}

/// Address lookup table for the symbols of a single binary in a single
/// region.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Default)]
pub(crate) struct SymbolIndex {
    slots: AddendedOrderedMap<Address, AddressSlot>,
    /// Length of the biggest symbol, which bounds how far back a lookup has
    /// to look for symbols spanning over an address.
    longest: Size,
}

impl SymbolIndex {
    pub(crate) fn new(binary: &Binary, region: Region) -> Self {
        let mut slots = AddendedOrderedMap::new();
        let mut longest = Size::new(0);

        for kind in [SymbolKind::Function, SymbolKind::Data] {
            for (index, sym) in binary.symbols(kind).iter().enumerate() {
                let length = sym.length_in(region);
                if let Some(length) = length {
                    longest = longest.max(length);
                }

                for address in sym.addresses_in(region).unwrap_or_default() {
                    let slot: &mut AddressSlot = slots.find_mut_or_insert_with(
                        *address,
                        FindSettings::new(false),
                        || (*address, AddressSlot::new()),
                    );
                    slot.push(SymbolRef {
                        kind,
                        index,
                        length,
                    });
                }
            }
        }

        Self { slots, longest }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// The symbols that start at `address` or, if the settings allow it,
    /// span over it.
    ///
    /// Sorted by start address, so enclosing symbols come before the ones
    /// nested inside them.
    pub(crate) fn find(&self, address: Address, settings: FindSettings) -> Vec<SymbolRef> {
        let reach = if settings.allow_addend() {
            self.longest
        } else {
            Size::new(0)
        };

        let mut found: Vec<SymbolRef> = Vec::new();
        for (i, (start, slot)) in self.slots.range(..=address).rev().enumerate() {
            let nearest = i == 0;
            if !nearest && !address.is_within(start, &reach) {
                break;
            }

            let mut hits: Vec<SymbolRef> = slot
                .entries
                .iter()
                .filter(|x| x.contains(*start, address, nearest, settings))
                .copied()
                .collect();
            hits.append(&mut found);
            found = hits;
        }
        found
    }
}
