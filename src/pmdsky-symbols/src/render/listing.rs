/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::fmt;

use crate::{
    addresses::Address,
    table::{RegionSymbol, Section, Sections},
};

use super::{selected_sections, write_indented, RenderSettings};

/// Plain text dump of a region, one line per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingDisplay<'a, 'flg> {
    sections: Sections<'a>,
    settings: &'flg RenderSettings,
}

impl<'a, 'flg> ListingDisplay<'a, 'flg> {
    pub fn new(sections: Sections<'a>, settings: &'flg RenderSettings) -> Self {
        Self { sections, settings }
    }
}

pub(crate) fn write_address_list(f: &mut fmt::Formatter<'_>, addresses: &[Address]) -> fmt::Result {
    if addresses.is_empty() {
        return write!(f, "?");
    }
    for (i, address) in addresses.iter().enumerate() {
        if i != 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", address)?;
    }
    Ok(())
}

impl ListingDisplay<'_, '_> {
    fn fmt_section(&self, f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
        let line_end = self.settings.line_end();

        write!(f, "== {} @ ", section.name())?;
        match section.load_address() {
            Some(x) => write!(f, "{}", x)?,
            None => write!(f, "?")?,
        }
        if let Some(length) = section.length() {
            write!(f, " size:{}", length)?;
        }
        write!(f, " =={}", line_end)?;

        if self.settings.emit_descriptions() {
            write_indented(f, section.description(), "    ", line_end)?;
        }

        for sym in section.symbols() {
            self.fmt_symbol(f, &sym)?;
        }
        Ok(())
    }

    fn fmt_symbol(&self, f: &mut fmt::Formatter<'_>, sym: &RegionSymbol) -> fmt::Result {
        let line_end = self.settings.line_end();

        write!(f, "{:<8} ", sym.kind().as_str())?;
        write_address_list(f, sym.addresses())?;
        if let Some(length) = sym.length() {
            write!(f, " size:{}", length)?;
        }
        write!(f, " {}", sym.name())?;
        if let Some(typ) = sym.typ() {
            write!(f, " ({})", typ)?;
        }
        if !sym.aliases().is_empty() {
            write!(f, " aka {}", sym.aliases().join(", "))?;
        }
        write!(f, "{}", line_end)?;

        if self.settings.emit_descriptions() {
            write_indented(f, sym.description(), "    ", line_end)?;
        }
        Ok(())
    }
}

impl fmt::Display for ListingDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(sections) = selected_sections(self.sections, self.settings) else {
            return Ok(());
        };

        for (i, section) in sections.iter().enumerate() {
            if i != 0 {
                write!(f, "{}", self.settings.line_end())?;
            }
            self.fmt_section(f, section)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::format;
    use pretty_assertions::assert_eq;

    use crate::{
        addresses::Size,
        metadata::{Region, Symbol},
        table::SymbolTableBuilder,
    };

    #[test]
    fn listing() {
        let mut builder = SymbolTableBuilder::new();
        builder
            .binary("arm9")
            .set_load_address(Region::Eu, Address::new(0x02000000))
            .set_description_if_empty("The main ARM9 binary.")
            .add_function(
                Symbol::new("InitMemAllocTable")
                    .with_address(Region::Eu, Address::new(0x02000DE0))
                    .with_description("Initializes MEMORY_ALLOCATION_TABLE.\n\nNo params."),
            )
            .add_data(
                Symbol::new("MAX_MONEY_CARRIED")
                    .with_address(Region::Eu, Address::new(0x0200EDF8))
                    .with_length(Region::Eu, Size::new(0x4))
                    .with_type(Some("int32_t")),
            )
            .add_data(Symbol::new("NA_ONLY").with_address(Region::Na, Address::new(0x02001000)));
        let table = builder.build();

        let settings = RenderSettings::new();
        let text = format!("{}", ListingDisplay::new(table.sections(Region::Eu), &settings));
        assert_eq!(
            text,
            "== arm9 @ 0x2000000 ==\n\
             \x20   The main ARM9 binary.\n\
             function 0x2000DE0 InitMemAllocTable\n\
             \x20   Initializes MEMORY_ALLOCATION_TABLE.\n\
             \n\
             \x20   No params.\n\
             data     0x200EDF8 size:0x4 MAX_MONEY_CARRIED (int32_t)\n\
             data     ? NA_ONLY\n"
        );

        let settings = RenderSettings::new().with_emit_descriptions(false);
        let text = format!("{}", ListingDisplay::new(table.sections(Region::Jp), &settings));
        assert_eq!(
            text,
            "== arm9 @ ? ==\n\
             function ? InitMemAllocTable\n\
             data     ? MAX_MONEY_CARRIED (int32_t)\n\
             data     ? NA_ONLY\n"
        );
    }
}
