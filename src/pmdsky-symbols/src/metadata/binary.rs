/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{string::String, sync::Arc, vec::Vec};

use crate::addresses::{Address, AddressRange, Size};

use super::{PerRegion, Region, Symbol, SymbolKind};

/// One of the game's binaries: the main executables, an overlay, or a
/// memory region such as ITCM or RAM.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Binary {
    name: Arc<str>,
    class_name: Arc<str>,
    description: Arc<str>,
    versions: Vec<Region>,
    load_addresses: PerRegion<Address>,
    lengths: PerRegion<Size>,
    functions: Vec<Symbol>,
    data: Vec<Symbol>,
}

impl Binary {
    pub fn new<T>(name: T) -> Self
    where
        T: Into<Arc<str>>,
    {
        let name: Arc<str> = name.into();
        let class_name = capitalize(&name).into();

        Self {
            name,
            class_name,
            description: "".into(),
            versions: Vec::new(),
            load_addresses: PerRegion::new(),
            lengths: PerRegion::new(),
            functions: Vec::new(),
            data: Vec::new(),
        }
    }
}

impl Binary {
    pub fn name(&self) -> &str {
        &self.name
    }
    /// The name with its first character in uppercase and the rest in
    /// lowercase, as used when generating type names for the binary.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn versions(&self) -> &[Region] {
        &self.versions
    }
    pub fn load_addresses(&self) -> &PerRegion<Address> {
        &self.load_addresses
    }
    pub fn lengths(&self) -> &PerRegion<Size> {
        &self.lengths
    }
    pub fn functions(&self) -> &[Symbol] {
        &self.functions
    }
    pub fn data(&self) -> &[Symbol] {
        &self.data
    }

    pub fn symbols(&self, kind: SymbolKind) -> &[Symbol] {
        match kind {
            SymbolKind::Function => &self.functions,
            SymbolKind::Data => &self.data,
        }
    }

    #[must_use]
    pub fn load_address_in(&self, region: Region) -> Option<Address> {
        self.load_addresses.get(region).copied()
    }

    #[must_use]
    pub fn length_in(&self, region: Region) -> Option<Size> {
        self.lengths.get(region).copied()
    }

    /// The memory this binary occupies once loaded, if both its load address
    /// and length are known for `region` and it ends inside the address space.
    #[must_use]
    pub fn range_in(&self, region: Region) -> Option<AddressRange<Address>> {
        let start = self.load_address_in(region)?;
        let length = self.length_in(region)?;

        AddressRange::from_start_size(start, length)
    }

    /// Whether `address` falls inside this binary once loaded in `region`.
    #[must_use]
    pub fn contains_in(&self, region: Region, address: Address) -> bool {
        match (self.load_address_in(region), self.length_in(region)) {
            (Some(start), Some(length)) => address.is_within(&start, &length),
            _ => false,
        }
    }
}

impl Binary {
    pub(crate) fn set_description_if_empty(&mut self, description: Arc<str>) {
        if self.description.is_empty() {
            self.description = description;
        }
    }
    pub(crate) fn add_version(&mut self, region: Region) {
        if !self.versions.contains(&region) {
            self.versions.push(region);
        }
    }
    pub(crate) fn load_addresses_mut(&mut self) -> &mut PerRegion<Address> {
        &mut self.load_addresses
    }
    pub(crate) fn lengths_mut(&mut self) -> &mut PerRegion<Size> {
        &mut self.lengths
    }
    pub(crate) fn symbols_mut(&mut self, kind: SymbolKind) -> &mut Vec<Symbol> {
        match kind {
            SymbolKind::Function => &mut self.functions,
            SymbolKind::Data => &mut self.data,
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn class_names() {
        assert_eq!(Binary::new("arm9").class_name(), "Arm9");
        assert_eq!(Binary::new("overlay29").class_name(), "Overlay29");
        assert_eq!(Binary::new("ITCM").class_name(), "Itcm");
        assert_eq!(Binary::new("").class_name(), "");
    }

    #[test]
    fn ranges_need_both_fields() {
        let mut binary = Binary::new("overlay18");
        binary
            .load_addresses_mut()
            .set(Region::Eu, Address::new(0x0238AC80));

        assert_eq!(binary.range_in(Region::Eu), None);

        binary.lengths_mut().set(Region::Eu, Size::new(0x3500));
        assert_eq!(
            binary.range_in(Region::Eu),
            Some(AddressRange::new(
                Address::new(0x0238AC80),
                Address::new(0x0238E180)
            ))
        );
        assert_eq!(binary.range_in(Region::Jp), None);
        assert!(binary.contains_in(Region::Eu, Address::new(0x0238E17F)));
        assert!(!binary.contains_in(Region::Eu, Address::new(0x0238E180)));
        assert!(!binary.contains_in(Region::Jp, Address::new(0x0238AC80)));
    }

    #[test]
    fn binary_at_the_top_of_memory() {
        let mut binary = Binary::new("bios");
        binary
            .load_addresses_mut()
            .set(Region::Eu, Address::new(0xFFFF0000));
        binary.lengths_mut().set(Region::Eu, Size::new(0x10000));

        assert_eq!(binary.range_in(Region::Eu), None);
        assert!(binary.contains_in(Region::Eu, Address::new(0xFFFFFFFF)));
        assert!(!binary.contains_in(Region::Eu, Address::new(0x100)));
    }

    #[test]
    fn first_description_wins() {
        let mut binary = Binary::new("ram");

        binary.set_description_if_empty("".into());
        binary.set_description_if_empty("Main memory.".into());
        binary.set_description_if_empty("Something else.".into());

        assert_eq!(binary.description(), "Main memory.");
    }
}
