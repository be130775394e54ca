/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{sync::Arc, vec::Vec};

use crate::addresses::{Address, AddressRange, Size};

use super::{PerRegion, Region};

/// A named function or data structure of the game, with its address in every
/// region where it is known.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Symbol {
    name: Arc<str>,
    aliases: Arc<[Arc<str>]>,
    addresses: PerRegion<Arc<[Address]>>,
    lengths: PerRegion<Size>,
    description: Arc<str>,
    typ: Option<Arc<str>>,
}

impl Symbol {
    pub fn new<T>(name: T) -> Self
    where
        T: Into<Arc<str>>,
    {
        Self {
            name: name.into(),
            aliases: Arc::new([]),
            addresses: PerRegion::new(),
            lengths: PerRegion::new(),
            description: "".into(),
            typ: None,
        }
    }

    pub fn with_address(mut self, region: Region, address: Address) -> Self {
        self.addresses.set(region, Arc::new([address]));
        self
    }

    pub fn with_addresses<I>(mut self, region: Region, addresses: I) -> Self
    where
        I: IntoIterator<Item = Address>,
    {
        self.addresses
            .set(region, addresses.into_iter().collect::<Vec<_>>().into());
        self
    }

    pub fn with_length(mut self, region: Region, length: Size) -> Self {
        self.lengths.set(region, length);
        self
    }

    pub fn with_description<T>(self, description: T) -> Self
    where
        T: Into<Arc<str>>,
    {
        Self {
            description: description.into(),
            ..self
        }
    }

    pub fn with_aliases<I, T>(self, aliases: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Arc<str>>,
    {
        Self {
            aliases: aliases.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn with_type<T>(self, typ: Option<T>) -> Self
    where
        T: Into<Arc<str>>,
    {
        Self {
            typ: typ.map(Into::into),
            ..self
        }
    }
}

impl Symbol {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn aliases(&self) -> &[Arc<str>] {
        &self.aliases
    }
    pub fn addresses(&self) -> &PerRegion<Arc<[Address]>> {
        &self.addresses
    }
    pub fn lengths(&self) -> &PerRegion<Size> {
        &self.lengths
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn typ(&self) -> Option<&str> {
        self.typ.as_deref()
    }
    pub(crate) fn typ_mut(&mut self) -> &mut Option<Arc<str>> {
        &mut self.typ
    }

    /// Whether `name` is this symbol's name or one of its aliases.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        &*self.name == name || self.aliases.iter().any(|x| &**x == name)
    }

    #[must_use]
    pub fn addresses_in(&self, region: Region) -> Option<&[Address]> {
        self.addresses.get(region).map(|x| &**x)
    }

    #[must_use]
    pub fn length_in(&self, region: Region) -> Option<Size> {
        self.lengths.get(region).copied()
    }

    /// The memory occupied by every copy of this symbol in `region`.
    ///
    /// Empty when the length is unknown. Copies running past the end of the
    /// address space are skipped.
    pub fn ranges_in(&self, region: Region) -> impl Iterator<Item = AddressRange<Address>> + '_ {
        let length = self.length_in(region);

        self.addresses_in(region)
            .unwrap_or_default()
            .iter()
            .filter_map(move |x| length.and_then(|len| AddressRange::from_start_size(*x, len)))
    }
}
