/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::fmt;

use crate::table::{Section, Sections};

use super::{selected_sections, RenderSettings};

/// Linker script assignments, one per known symbol address.
///
/// Symbols placed at several addresses produce one assignment per address,
/// all of them with the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolAddrsDisplay<'a, 'flg> {
    sections: Sections<'a>,
    settings: &'flg RenderSettings,
}

impl<'a, 'flg> SymbolAddrsDisplay<'a, 'flg> {
    pub fn new(sections: Sections<'a>, settings: &'flg RenderSettings) -> Self {
        Self { sections, settings }
    }
}

impl SymbolAddrsDisplay<'_, '_> {
    fn fmt_section(&self, f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
        let line_end = self.settings.line_end();

        write!(f, "// {}{}", section.name(), line_end)?;
        for sym in section.symbols() {
            for address in sym.addresses() {
                write!(f, "{} = {};", sym.name(), address)?;
                write!(f, " // type:{}", sym.kind().as_str())?;
                if let Some(length) = sym.length() {
                    write!(f, " size:{}", length)?;
                }
                write!(f, "{}", line_end)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SymbolAddrsDisplay<'_, '_> {
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
        addresses::{Address, Size},
        metadata::{Region, Symbol},
        table::SymbolTableBuilder,
    };

    #[test]
    fn assignments() {
        let mut builder = SymbolTableBuilder::new();
        builder
            .binary("overlay11")
            .add_data(
                Symbol::new("SCRIPT_VARS_VALUES_PTR").with_addresses(
                    Region::Eu,
                    [Address::new(0x0204B630), Address::new(0x0204B81C)],
                ),
            )
            .add_function(Symbol::new("NoAddressHere"));
        builder.binary("arm9").add_function(
            Symbol::new("InitMemAllocTable")
                .with_address(Region::Eu, Address::new(0x02000DE0))
                .with_length(Region::Eu, Size::new(0x90)),
        );
        let table = builder.build();

        let settings = RenderSettings::new().with_line_end("\r\n");
        let text = format!(
            "{}",
            SymbolAddrsDisplay::new(table.sections(Region::Eu), &settings)
        );
        assert_eq!(
            text,
            "// arm9\r\n\
             InitMemAllocTable = 0x2000DE0; // type:function size:0x90\r\n\
             \r\n\
             // overlay11\r\n\
             SCRIPT_VARS_VALUES_PTR = 0x204B630; // type:data\r\n\
             SCRIPT_VARS_VALUES_PTR = 0x204B81C; // type:data\r\n"
        );

        let settings = RenderSettings::new().with_section(Some("arm9"));
        let text = format!(
            "{}",
            SymbolAddrsDisplay::new(table.sections(Region::Eu), &settings)
        );
        assert_eq!(
            text,
            "// arm9\nInitMemAllocTable = 0x2000DE0; // type:function size:0x90\n"
        );
    }
}
