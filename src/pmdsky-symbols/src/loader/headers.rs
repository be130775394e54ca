/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{string::String, vec::Vec};
use std::{fs, path::Path};

use regex::Regex;
use walkdir::WalkDir;

use crate::table::SymbolTableBuilder;

use super::{IoLoadError, LoadError};

const C_TYPE_PATTERN: &str = r"(((enum )|(struct ))?[a-z0-9_*]+) ([A-Z0-9_]+)(\[\d+\])*;";

/// A data symbol declaration found in a C header.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeaderType {
    name: String,
    typ: String,
}

impl HeaderType {
    pub fn name(&self) -> &str {
        &self.name
    }
    /// The declared type, with the last array dimension appended if any.
    pub fn typ(&self) -> &str {
        &self.typ
    }
}

fn compile_pattern() -> Result<Regex, LoadError> {
    Ok(Regex::new(C_TYPE_PATTERN)?)
}

fn extract(pattern: &Regex, text: &str) -> Vec<HeaderType> {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| {
            let caps = pattern.captures(line)?;
            let mut typ = String::from(caps.get(1)?.as_str());
            if let Some(array) = caps.get(6) {
                typ.push_str(array.as_str());
            }
            Some(HeaderType {
                name: caps.get(5)?.as_str().into(),
                typ,
            })
        })
        .collect()
}

/// Lists every data declaration of a header, in order.
///
/// Preprocessor lines are skipped. Only the first declaration of a line is
/// considered.
pub fn parse_header_types(text: &str) -> Result<Vec<HeaderType>, LoadError> {
    let pattern = compile_pattern()?;

    Ok(extract(&pattern, text))
}

/// Binary named by a header file: `overlay29.h` and `overlay29.extra.h`
/// both describe `overlay29`.
fn binary_name(path: &Path) -> Option<&str> {
    let file_name = path.file_name()?.to_str()?;

    file_name.split('.').next()
}

pub(crate) fn apply_header_types(
    builder: &mut SymbolTableBuilder,
    headers_dir: &Path,
) -> Result<(), LoadError> {
    if !headers_dir.is_dir() {
        log::debug!(
            "No headers directory at '{}', data symbols stay untyped",
            headers_dir.display()
        );
        return Ok(());
    }

    let pattern = compile_pattern()?;

    for entry in WalkDir::new(headers_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() || path.extension().is_none_or(|x| x != "h") {
            continue;
        }
        let Some(binary_name) = binary_name(path) else {
            continue;
        };
        if !builder.contains(binary_name) {
            log::trace!("Skipping header '{}', unknown binary", path.display());
            continue;
        }

        let text = fs::read_to_string(path)
            .map_err(|e| IoLoadError::new(path.to_path_buf(), e))?;
        let mut binary = builder.binary(binary_name);

        for declaration in extract(&pattern, &text) {
            if !binary.set_data_type(&declaration.name, declaration.typ) {
                log::debug!(
                    "'{}' declares '{}', which is not a data symbol of {}",
                    path.display(),
                    declaration.name,
                    binary_name
                );
            }
        }
    }

    Ok(())
}
