/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::sync::Arc;

use crate::{
    addresses::{Address, Size},
    metadata::{Binary, Region, Symbol, SymbolKind},
};

/// Mutable access to a binary while a [`SymbolTableBuilder`] is being filled.
///
/// [`SymbolTableBuilder`]: super::SymbolTableBuilder
#[derive(Debug)]
pub struct BinaryBuilder<'a> {
    binary: &'a mut Binary,
}

impl<'a> BinaryBuilder<'a> {
    pub(crate) fn new(binary: &'a mut Binary) -> Self {
        Self { binary }
    }

    pub fn binary(&self) -> &Binary {
        self.binary
    }

    pub fn set_load_address(&mut self, region: Region, address: Address) -> &mut Self {
        self.binary.load_addresses_mut().set(region, address);
        self
    }

    pub fn set_length(&mut self, region: Region, length: Size) -> &mut Self {
        self.binary.lengths_mut().set(region, length);
        self
    }

    pub fn add_version(&mut self, region: Region) -> &mut Self {
        self.binary.add_version(region);
        self
    }

    /// Only the first non-empty description of a binary is kept.
    pub fn set_description_if_empty<T>(&mut self, description: T) -> &mut Self
    where
        T: Into<Arc<str>>,
    {
        self.binary.set_description_if_empty(description.into());
        self
    }

    pub fn add_symbol(&mut self, kind: SymbolKind, symbol: Symbol) -> &mut Self {
        self.binary.symbols_mut(kind).push(symbol);
        self
    }

    pub fn add_function(&mut self, symbol: Symbol) -> &mut Self {
        self.add_symbol(SymbolKind::Function, symbol)
    }

    pub fn add_data(&mut self, symbol: Symbol) -> &mut Self {
        self.add_symbol(SymbolKind::Data, symbol)
    }

    /// Assigns a C type to the first data symbol named `name`.
    ///
    /// Returns `false` if there is no such data symbol.
    pub fn set_data_type<T>(&mut self, name: &str, typ: T) -> bool
    where
        T: Into<Arc<str>>,
    {
        match self
            .binary
            .symbols_mut(SymbolKind::Data)
            .iter_mut()
            .find(|x| x.name() == name)
        {
            Some(sym) => {
                *sym.typ_mut() = Some(typ.into());
                true
            }
            None => false,
        }
    }
}
