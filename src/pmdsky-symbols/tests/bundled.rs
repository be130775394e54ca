/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

#![cfg(feature = "bundled")]

use pmdsky_symbols::{
    addresses::{Address, Size},
    bundled,
    collections::addended_ordered_map::FindSettings,
    metadata::{Region, SymbolKind, SymbolKinds},
};
use pretty_assertions::assert_eq;

#[test]
fn bundled_parses() {
    let table = bundled::load().unwrap();

    assert_eq!(table.len(), 38);
    assert_eq!(table.symbol_count(), 861);
    assert_eq!(&table, bundled::table());
}

#[test]
fn sections_registry() {
    let eu = bundled::table().sections(bundled::REGION);

    let names: Vec<_> = eu.iter().map(|x| x.name()).collect();
    assert_eq!(names.first(), Some(&"arm9"));
    assert_eq!(names.last(), Some(&"ram"));
    // Lexicographic, not numeric.
    assert!(names.windows(2).all(|x| x[0] < x[1]));
    assert_eq!(names[1..4], ["overlay0", "overlay1", "overlay10"]);

    let overlay18 = eu.get("overlay18").unwrap();
    assert_eq!(overlay18.class_name(), "Overlay18");
    assert_eq!(overlay18.description(), "Controls the Electivire Link Shop.");
    assert_eq!(overlay18.load_address(), Some(Address::new(0x0238AC80)));
    assert_eq!(overlay18.length(), Some(Size::new(0x3500)));
    assert_eq!(overlay18.functions().count(), 0);
    assert_eq!(overlay18.data().count(), 9);

    assert!(eu.get("overlay36").is_none());
}

#[test]
fn symbols_by_name() {
    let eu = bundled::table().sections(Region::Eu);

    let init = eu.find_by_name("InitMemAllocTable", SymbolKinds::ANY).unwrap();
    assert_eq!(init.section().name(), "arm9");
    assert_eq!(init.kind(), SymbolKind::Function);
    assert_eq!(init.addresses(), [Address::new(0x02000DE0)]);
    assert_eq!(init.length(), None);
    assert!(init
        .description()
        .starts_with("Initializes MEMORY_ALLOCATION_TABLE.\n\n"));

    let money = eu.find_by_name("MAX_MONEY_CARRIED", SymbolKinds::DATA).unwrap();
    assert_eq!(money.address(), Some(Address::new(0x0200EDF8)));
    assert_eq!(money.length(), Some(Size::new(0x4)));
    assert_eq!(
        money.description(),
        "Maximum amount of money the player can carry, 99999."
    );
    assert!(eu
        .find_by_name("MAX_MONEY_CARRIED", SymbolKinds::FUNCTION)
        .is_none());

    // Duplicated names resolve to the first section declaring one.
    let sprintf = eu.find_by_name("SprintfStatic", SymbolKinds::ANY).unwrap();
    assert_eq!(sprintf.section().name(), "arm9");
    assert_eq!(sprintf.addresses().len(), 16);
}

#[test]
fn symbols_by_address() {
    let eu = bundled::table().sections(Region::Eu);

    let found = eu.find_by_address(
        Address::new(0x0204B81C),
        SymbolKinds::ANY,
        FindSettings::new(false),
    );
    let names: Vec<_> = found.iter().map(|x| x.name()).collect();
    assert_eq!(names, ["SCRIPT_VARS_VALUES_PTR"]);
    assert_eq!(
        found[0].addresses(),
        [
            Address::new(0x0204B630),
            Address::new(0x0204B81C),
            Address::new(0x0204C764),
            Address::new(0x0204C7BC),
        ]
    );
    assert_eq!(
        found[0].relative_addresses(),
        Some(vec![
            Size::new(0x4B630),
            Size::new(0x4B81C),
            Size::new(0x4C764),
            Size::new(0x4C7BC),
        ])
    );

    // Inside a symbol with a known length.
    let inside = Address::new(0x0200EDFA);
    assert!(eu
        .find_by_address(inside, SymbolKinds::ANY, FindSettings::new(false))
        .is_empty());
    let found = eu.find_by_address(inside, SymbolKinds::ANY, FindSettings::new(true));
    let names: Vec<_> = found.iter().map(|x| x.name()).collect();
    assert_eq!(names, ["MAX_MONEY_CARRIED"]);

    // Main memory overlaps the ARM9 binary.
    let containing: Vec<_> = eu
        .sections_containing(Address::new(0x02000DE0))
        .map(|x| x.name())
        .collect();
    assert_eq!(containing, ["arm9", "ram"]);

    // Seventeen overlays are loaded there, overlay31 and main memory span over it.
    assert_eq!(eu.sections_containing(Address::new(0x0238AC80)).count(), 19);
}

fn lookup(address: u32) -> Vec<(&'static str, &'static str)> {
    bundled::table()
        .sections(bundled::REGION)
        .find_by_address(
            Address::new(address),
            SymbolKinds::ANY,
            FindSettings::new(true),
        )
        .iter()
        .map(|x| (x.section().name(), x.name()))
        .collect()
}

#[test]
fn enclosing_symbols() {
    let eu = bundled::table().sections(bundled::REGION);

    // BAG_LEVEL is one of the script variables.
    assert_eq!(
        lookup(0x022ABA9C),
        [("ram", "SCRIPT_VARS_VALUES"), ("ram", "BAG_LEVEL")]
    );
    assert_eq!(lookup(0x022ABAA0), [("ram", "SCRIPT_VARS_VALUES")]);

    assert_eq!(
        lookup(0x020B3CC4),
        [
            ("arm9", "MEMORY_ALLOCATION_TABLE"),
            ("arm9", "DEFAULT_MEMORY_ARENA")
        ]
    );
    // Past DEFAULT_MEMORY_ARENA, still in the table.
    assert_eq!(lookup(0x020B3CFC), [("arm9", "MEMORY_ALLOCATION_TABLE")]);

    let exact: Vec<_> = eu
        .find_by_address(
            Address::new(0x022ABA9C),
            SymbolKinds::ANY,
            FindSettings::new(false),
        )
        .iter()
        .map(|x| x.name())
        .collect();
    assert_eq!(exact, ["BAG_LEVEL"]);
}

#[test]
fn other_regions_are_empty() {
    let table = bundled::table();

    for region in Region::ALL {
        let sections = table.sections(region);
        assert_eq!(sections.len(), 38);

        let init = sections
            .find_by_name("InitMemAllocTable", SymbolKinds::FUNCTION)
            .unwrap();
        assert_eq!(init.is_known(), region == Region::Eu);
        assert_eq!(
            sections.get("arm9").unwrap().load_address().is_some(),
            region == Region::Eu
        );
    }
}
