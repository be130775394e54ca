/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{string::String, vec::Vec};

use serde::Serialize;

use crate::table::{RegionSymbol, Section, Sections};

use super::{selected_sections, RenderError, RenderSettings};

#[derive(Debug, Serialize)]
struct JsonRegion<'a> {
    region: &'static str,
    sections: Vec<JsonSection<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonSection<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    load_address: Option<u32>,
    length: Option<u32>,
    functions: Vec<JsonSymbol<'a>>,
    data: Vec<JsonSymbol<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonSymbol<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<&'a str>,
    addresses: Vec<u32>,
    length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    typ: Option<&'a str>,
}

impl<'a> JsonSymbol<'a> {
    fn new(sym: RegionSymbol<'a>, settings: &RenderSettings) -> Self {
        Self {
            name: sym.name(),
            aliases: sym.aliases().iter().map(|x| &**x).collect(),
            addresses: sym.addresses().iter().map(|x| x.inner()).collect(),
            length: sym.length().map(|x| x.inner()),
            description: settings.emit_descriptions().then(|| sym.description()),
            typ: sym.typ(),
        }
    }
}

impl<'a> JsonSection<'a> {
    fn new(section: Section<'a>, settings: &RenderSettings) -> Self {
        Self {
            name: section.name(),
            description: settings
                .emit_descriptions()
                .then(|| section.description()),
            load_address: section.load_address().map(|x| x.inner()),
            length: section.length().map(|x| x.inner()),
            functions: section
                .functions()
                .map(|x| JsonSymbol::new(x, settings))
                .collect(),
            data: section
                .data()
                .map(|x| JsonSymbol::new(x, settings))
                .collect(),
        }
    }
}

/// Pretty printed JSON document describing every selected section.
///
/// Addresses and lengths are plain numbers.
pub fn render_json(sections: Sections<'_>, settings: &RenderSettings) -> Result<String, RenderError> {
    let doc = JsonRegion {
        region: sections.region().key(),
        sections: selected_sections(sections, settings)?
            .into_iter()
            .map(|x| JsonSection::new(x, settings))
            .collect(),
    };

    let mut text = serde_json::to_string_pretty(&doc)?;
    text.push_str(settings.line_end());
    Ok(text)
}
