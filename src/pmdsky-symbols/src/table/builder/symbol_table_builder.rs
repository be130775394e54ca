/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{collections::btree_map::BTreeMap, sync::Arc, vec::Vec};

use crate::{metadata::Binary, table::SymbolTable};

use super::BinaryBuilder;

/// Accumulates binaries and their symbols before freezing them into a
/// [`SymbolTable`].
///
/// The same binary may be described piecewise, e.g. by a main file followed
/// by several sub-files; every call to [`binary`](Self::binary) with the same
/// name edits the same binary.
#[derive(Debug, Clone, Default)]
pub struct SymbolTableBuilder {
    binaries: Vec<Binary>,
    by_name: BTreeMap<Arc<str>, usize>,
}

impl SymbolTableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the binary called `name`, creating it if needed.
    pub fn binary(&mut self, name: &str) -> BinaryBuilder<'_> {
        let position = match self.by_name.get(name) {
            Some(position) => *position,
            None => {
                let position = self.binaries.len();
                self.binaries.push(Binary::new(name));
                self.by_name.insert(name.into(), position);
                position
            }
        };

        BinaryBuilder::new(&mut self.binaries[position])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.binaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binaries.is_empty()
    }

    #[must_use]
    pub fn build(self) -> SymbolTable {
        SymbolTable::new(self.binaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    use crate::{
        addresses::{Address, Size},
        collections::addended_ordered_map::FindSettings,
        metadata::{Region, Symbol, SymbolKind, SymbolKinds},
    };

    fn sample() -> SymbolTable {
        let mut builder = SymbolTableBuilder::new();

        builder
            .binary("overlay18")
            .set_load_address(Region::Eu, Address::new(0x0238AC80))
            .set_length(Region::Eu, Size::new(0x3500))
            .set_description_if_empty("Controls the Electivire Link Shop.")
            .add_data(
                Symbol::new("MOVES_MENU_CONFIRM")
                    .with_address(Region::Eu, Address::new(0x0238DE60))
                    .with_length(Region::Eu, Size::new(0x18)),
            );
        builder
            .binary("arm9")
            .set_load_address(Region::Eu, Address::new(0x02000000))
            .set_length(Region::Eu, Size::new(0xB7D38))
            .add_function(
                Symbol::new("InitMemAllocTable")
                    .with_address(Region::Eu, Address::new(0x02000DE0))
                    .with_description("Initializes MEMORY_ALLOCATION_TABLE."),
            )
            .add_data(
                Symbol::new("MAX_MONEY_CARRIED")
                    .with_address(Region::Eu, Address::new(0x0200EDF8))
                    .with_length(Region::Eu, Size::new(0x4)),
            );
        // Later pieces of the same binary append to it.
        builder
            .binary("overlay18")
            .set_description_if_empty("Ignored.")
            .add_data(
                Symbol::new("MOVES_SUBMENU_1")
                    .with_address(Region::Eu, Address::new(0x0238DE78))
                    .with_length(Region::Eu, Size::new(0x20)),
            );
        builder
            .binary("overlay13")
            .set_load_address(Region::Eu, Address::new(0x0238AC80))
            .set_length(Region::Eu, Size::new(0x2E80));

        assert_eq!(builder.len(), 3);
        assert!(builder.contains("arm9"));
        builder.build()
    }

    #[test]
    fn binaries_are_sorted_and_merged() {
        let table = sample();

        let names: Vec<_> = table.binaries().iter().map(|x| x.name()).collect();
        assert_eq!(names, ["arm9", "overlay13", "overlay18"]);
        assert_eq!(table.symbol_count(), 4);

        let overlay18 = table.binary("overlay18").unwrap();
        assert_eq!(overlay18.description(), "Controls the Electivire Link Shop.");
        assert_eq!(overlay18.class_name(), "Overlay18");
        let data: Vec<_> = overlay18.data().iter().map(|x| x.name()).collect();
        assert_eq!(data, ["MOVES_MENU_CONFIRM", "MOVES_SUBMENU_1"]);
    }

    #[test]
    fn region_views() {
        let table = sample();
        let eu = table.sections(Region::Eu);
        let jp = table.sections(Region::Jp);

        let sym = eu.find_by_name("MOVES_SUBMENU_1", SymbolKinds::ANY).unwrap();
        assert_eq!(sym.section().name(), "overlay18");
        assert_eq!(sym.kind(), SymbolKind::Data);
        assert_eq!(sym.address(), Some(Address::new(0x0238DE78)));
        assert_eq!(sym.relative_addresses(), Some(alloc::vec![Size::new(0x31F8)]));

        assert!(eu
            .find_by_name("MOVES_SUBMENU_1", SymbolKinds::FUNCTION)
            .is_none());

        // Known by name in every region, but without an address outside of EU.
        let jp_sym = jp.find_by_name("MOVES_SUBMENU_1", SymbolKinds::ANY).unwrap();
        assert_eq!(jp_sym.address(), None);
        assert!(!jp_sym.is_known());
        assert_eq!(jp_sym.relative_addresses(), None);
        assert_eq!(jp.get("overlay18").unwrap().load_address(), None);
    }

    #[test]
    fn address_lookups() {
        let table = sample();
        let eu = table.sections(Region::Eu);

        let found = eu.find_by_address(
            Address::new(0x0238DE80),
            SymbolKinds::ANY,
            FindSettings::new(true),
        );
        let names: Vec<_> = found
            .iter()
            .map(|x| (x.section().name(), x.name()))
            .collect();
        assert_eq!(names, [("overlay18", "MOVES_SUBMENU_1")]);

        assert!(eu
            .find_by_address(
                Address::new(0x0238DE80),
                SymbolKinds::ANY,
                FindSettings::new(false)
            )
            .is_empty());

        // Both overlays are loaded at the same address.
        let containing: Vec<_> = eu
            .sections_containing(Address::new(0x0238AC80))
            .map(|x| x.name())
            .collect();
        assert_eq!(containing, ["overlay13", "overlay18"]);
        let containing: Vec<_> = eu
            .sections_containing(Address::new(0x0238DE60))
            .map(|x| x.name())
            .collect();
        assert_eq!(containing, ["overlay18"]);

        let arm9 = eu.get("arm9").unwrap();
        let at_start = arm9.symbols_at(
            Address::new(0x02000DE0),
            SymbolKinds::FUNCTION,
            FindSettings::new(false),
        );
        assert_eq!(at_start.len(), 1);
        assert_eq!(at_start[0].name(), "InitMemAllocTable");
        // Functions without a length never span past their first byte.
        assert!(arm9
            .symbols_at(
                Address::new(0x02000DE4),
                SymbolKinds::ANY,
                FindSettings::new(true)
            )
            .is_empty());
    }
}
