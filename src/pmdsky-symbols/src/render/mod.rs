/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod listing;
mod python;
mod render_error;
mod render_format;
mod render_settings;
mod symbol_addrs;

#[cfg(feature = "std")]
mod generator;
#[cfg(feature = "std")]
mod json;

pub use listing::ListingDisplay;
pub use python::{escape_py, PythonDisplay, PYTHON_PROTOCOL};
pub use render_error::{RenderError, UnknownSectionError};
pub use render_format::RenderFormat;
pub use render_settings::RenderSettings;
pub use symbol_addrs::SymbolAddrsDisplay;

#[cfg(feature = "std")]
pub use generator::{GenerateError, Generator, WriteError};
#[cfg(feature = "std")]
pub use json::render_json;

use alloc::{string::String, vec::Vec};
use core::fmt::Write;

use crate::table::{Section, Sections};

/// Renders every selected section of `sections` in the requested format.
pub fn render(
    sections: Sections<'_>,
    format: RenderFormat,
    settings: &RenderSettings,
) -> Result<String, RenderError> {
    // Fails early on a bad section filter, displays can't report it.
    selected_sections(sections, settings)?;

    let mut out = String::new();
    match format {
        RenderFormat::Listing => write!(out, "{}", ListingDisplay::new(sections, settings))?,
        RenderFormat::SymbolAddrs => {
            write!(out, "{}", SymbolAddrsDisplay::new(sections, settings))?
        }
        RenderFormat::Python => write!(out, "{}", PythonDisplay::new(sections, settings))?,
        #[cfg(feature = "std")]
        RenderFormat::Json => out = render_json(sections, settings)?,
    }
    Ok(out)
}

pub(crate) fn selected_sections<'a>(
    sections: Sections<'a>,
    settings: &RenderSettings,
) -> Result<Vec<Section<'a>>, UnknownSectionError> {
    match settings.section() {
        None => Ok(sections.iter().collect()),
        Some(name) => match sections.get(name) {
            Some(section) => Ok(alloc::vec![section]),
            None => Err(UnknownSectionError::new(name.into(), sections.region())),
        },
    }
}

/// Writes `text` one line at a time, each line prefixed by `indent`.
pub(crate) fn write_indented(
    f: &mut core::fmt::Formatter<'_>,
    text: &str,
    indent: &str,
    line_end: &str,
) -> core::fmt::Result {
    for line in text.lines() {
        if line.is_empty() {
            write!(f, "{}", line_end)?;
        } else {
            write!(f, "{}{}{}", indent, line, line_end)?;
        }
    }
    Ok(())
}
