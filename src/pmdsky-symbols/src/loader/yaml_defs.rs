/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{collections::btree_map::BTreeMap, string::String, vec::Vec};

use serde::Deserialize;

/// A whole symbols file: binary name to its definition.
pub(crate) type FileDef = BTreeMap<String, BinaryDef>;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BinaryDef {
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub address: BTreeMap<String, u32>,
    #[serde(default)]
    pub length: BTreeMap<String, u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub functions: Vec<SymbolDef>,
    #[serde(default)]
    pub data: Vec<SymbolDef>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SymbolDef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub address: Option<BTreeMap<String, AddressDef>>,
    #[serde(default)]
    pub length: BTreeMap<String, u32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Symbols placed at several addresses list all of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum AddressDef {
    Single(u32),
    List(Vec<u32>),
}

impl AddressDef {
    pub fn into_vec(self) -> Vec<u32> {
        match self {
            AddressDef::Single(x) => alloc::vec![x],
            AddressDef::List(x) => x,
        }
    }
}
