/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::vec::Vec;
use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    addresses::{Address, Size},
    config::LoadConfig,
    metadata::{Region, Symbol, SymbolKind},
    table::{BinaryBuilder, SymbolTable, SymbolTableBuilder},
};

use super::{
    headers::apply_header_types,
    yaml_defs::{FileDef, SymbolDef},
    IoLoadError, LoadError, MissingAddressError, MissingNameError, YamlLoadError,
};

/// Loads every symbols file and data header of a pmdsky-debug checkout.
pub fn load_dir<P>(pmdsky_debug_dir: P, config: &LoadConfig) -> Result<SymbolTable, LoadError>
where
    P: AsRef<Path>,
{
    let root = pmdsky_debug_dir.as_ref();
    let mut builder = SymbolTableBuilder::new();

    let files = symbol_files(root.join(config.symbols_dir()))?;
    log::debug!("Reading {} symbols files from '{}'", files.len(), root.display());

    for path in files {
        log::trace!("Reading '{}'", path.display());
        let text =
            fs::read_to_string(&path).map_err(|e| IoLoadError::new(path.to_path_buf(), e))?;

        read_document(&mut builder, &text, Some(&path))?;
    }

    if config.load_types() {
        apply_header_types(&mut builder, &root.join(config.headers_dir()))?;
    }

    let table = builder.build();
    log::debug!(
        "Loaded {} binaries with {} symbols",
        table.len(),
        table.symbol_count()
    );
    Ok(table)
}

/// Builds a table out of a single symbols document.
pub fn load_str(yaml: &str) -> Result<SymbolTable, LoadError> {
    let mut builder = SymbolTableBuilder::new();

    read_yaml(&mut builder, yaml)?;
    Ok(builder.build())
}

/// Merges a symbols document into `builder`.
///
/// Binaries already known to the builder are extended: their load address
/// and length are only overwritten for the regions the document lists, and
/// their description is kept if they already have one.
pub fn read_yaml(builder: &mut SymbolTableBuilder, yaml: &str) -> Result<(), LoadError> {
    read_document(builder, yaml, None)
}

fn read_document(
    builder: &mut SymbolTableBuilder,
    yaml: &str,
    path: Option<&Path>,
) -> Result<(), LoadError> {
    if yaml.trim().is_empty() {
        return Ok(());
    }

    let file: FileDef = serde_yaml::from_str(yaml)
        .map_err(|e| YamlLoadError::new(path.map(Path::to_path_buf), e))?;

    for (bin_name, definition) in file {
        let mut binary = builder.binary(&bin_name);

        for region in definition.versions.iter() {
            if let Some(region) = parse_region(region)? {
                binary.add_version(region);
            }
        }
        for (region, address) in definition.address {
            if let Some(region) = parse_region(&region)? {
                binary.set_load_address(region, Address::new(address));
            }
        }
        for (region, length) in definition.length {
            if let Some(region) = parse_region(&region)? {
                binary.set_length(region, Size::new(length));
            }
        }

        read_symbols(&mut binary, SymbolKind::Function, definition.functions)?;
        read_symbols(&mut binary, SymbolKind::Data, definition.data)?;

        if let Some(description) = definition.description {
            binary.set_description_if_empty(description);
        }
    }

    Ok(())
}

fn read_symbols(
    binary: &mut BinaryBuilder,
    kind: SymbolKind,
    defs: Vec<SymbolDef>,
) -> Result<(), LoadError> {
    for def in defs {
        let sym = read_symbol(binary.binary().name(), def)?;
        binary.add_symbol(kind, sym);
    }
    Ok(())
}

fn read_symbol(bin_name: &str, def: SymbolDef) -> Result<Symbol, LoadError> {
    let Some(name) = def.name else {
        return Err(MissingNameError::new(bin_name.into()).into());
    };
    let Some(address) = def.address else {
        return Err(MissingAddressError::new(bin_name.into(), name.into()).into());
    };

    let mut sym = Symbol::new(name)
        .with_aliases(def.aliases)
        .with_description(def.description.unwrap_or_default());

    for (region, addresses) in address {
        if let Some(region) = parse_region(&region)? {
            sym = sym.with_addresses(
                region,
                addresses.into_vec().into_iter().map(Address::new),
            );
        }
    }
    for (region, length) in def.length {
        if let Some(region) = parse_region(&region)? {
            sym = sym.with_length(region, Size::new(length));
        }
    }

    Ok(sym)
}

fn parse_region(region_str: &str) -> Result<Option<Region>, LoadError> {
    let region = Region::parse(region_str)?;

    if region.is_none() {
        log::trace!("Ignoring region '{}'", region_str);
    }
    Ok(region)
}

/// Collects the `.yml` files under `symbols_dir` in reading order.
///
/// Shallower files come first. On equal depth, files named after a binary
/// (`arm*`, `overlay*`) precede the rest, so the files declaring load
/// addresses, lengths and descriptions are read before any sub-file.
pub fn symbol_files<P>(symbols_dir: P) -> Result<Vec<PathBuf>, LoadError>
where
    P: AsRef<Path>,
{
    let mut keyed = Vec::new();

    for entry in WalkDir::new(symbols_dir) {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() || path.extension().is_none_or(|x| x != "yml") {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let priority: i8 = if file_name.starts_with("arm") || file_name.starts_with("overlay") {
            -1
        } else {
            1
        };
        keyed.push(((entry.depth(), priority), entry.into_path()));
    }

    keyed.sort();
    Ok(keyed.into_iter().map(|(_, path)| path).collect())
}
