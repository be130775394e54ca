/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::string::String;
use core::fmt;

use crate::table::{RegionSymbol, Section, Sections};

use super::{listing::write_address_list, selected_sections, RenderSettings};

/// Contents of the `protocol.py` module the region modules import from.
pub const PYTHON_PROTOCOL: &str = r#"from typing import List, NamedTuple, Optional


class Symbol(NamedTuple):
    addresses: Optional[List[int]]
    length: Optional[int]
    description: str

    @property
    def address(self) -> Optional[int]:
        """The first address of the symbol, if known."""
        if not self.addresses:
            return None
        return self.addresses[0]
"#;

/// Makes `value` fit inside a double quoted, single line Python string.
pub fn escape_py(value: &str) -> String {
    value.replace('\n', r"\n").replace('"', "'")
}

/// A region module in the layout of the `pmdsky_debug_py` package.
///
/// Every section becomes a `Functions`, a `Data` and a `Section` class, all
/// prefixed by the region's class prefix, and a final `Sections` class
/// points to every section class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PythonDisplay<'a, 'flg> {
    sections: Sections<'a>,
    settings: &'flg RenderSettings,
}

impl<'a, 'flg> PythonDisplay<'a, 'flg> {
    pub fn new(sections: Sections<'a>, settings: &'flg RenderSettings) -> Self {
        Self { sections, settings }
    }
}

impl PythonDisplay<'_, '_> {
    fn prefix(&self) -> &'static str {
        self.sections.region().class_prefix()
    }

    fn description<'s>(&self, description: &'s str) -> &'s str {
        if self.settings.emit_descriptions() {
            description
        } else {
            ""
        }
    }

    fn fmt_symbols<'a, I>(
        &self,
        f: &mut fmt::Formatter<'_>,
        class_name: fmt::Arguments,
        symbols: I,
    ) -> fmt::Result
    where
        I: Iterator<Item = RegionSymbol<'a>>,
    {
        let line_end = self.settings.line_end();

        write!(f, "class {}:{}", class_name, line_end)?;
        write!(f, "{}", line_end)?;

        let mut empty = true;
        for sym in symbols {
            empty = false;
            write!(f, "    {} = Symbol(", sym.name())?;
            if sym.is_known() {
                write!(f, "[")?;
                write_address_list(f, sym.addresses())?;
                write!(f, "]")?;
            } else {
                write!(f, "None")?;
            }
            match sym.length() {
                Some(length) => write!(f, ", {}", length)?,
                None => write!(f, ", None")?,
            }
            write!(
                f,
                ", \"{}\"){}",
                escape_py(self.description(sym.description())),
                line_end
            )?;
            write!(f, "{}", line_end)?;
        }
        if empty {
            write!(f, "    pass{}{}", line_end, line_end)?;
        }
        write!(f, "{}", line_end)
    }

    fn fmt_section(&self, f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
        let line_end = self.settings.line_end();
        let prefix = self.prefix();
        let class_name = section.class_name();

        self.fmt_symbols(
            f,
            format_args!("{}{}Functions", prefix, class_name),
            section.functions(),
        )?;
        self.fmt_symbols(
            f,
            format_args!("{}{}Data", prefix, class_name),
            section.data(),
        )?;

        write!(f, "class {}{}Section:{}", prefix, class_name, line_end)?;
        write!(f, "    name = \"{}\"{}", section.name(), line_end)?;
        write!(
            f,
            "    description = \"{}\"{}",
            escape_py(self.description(section.description())),
            line_end
        )?;
        match section.load_address() {
            Some(x) => write!(f, "    loadaddress = {}{}", x, line_end)?,
            None => write!(f, "    loadaddress = None{}", line_end)?,
        }
        match section.length() {
            Some(x) => write!(f, "    length = {}{}", x, line_end)?,
            None => write!(f, "    length = None{}", line_end)?,
        }
        write!(f, "    functions = {}{}Functions{}", prefix, class_name, line_end)?;
        write!(f, "    data = {}{}Data{}", prefix, class_name, line_end)?;
        write!(f, "{}{}", line_end, line_end)
    }
}

impl fmt::Display for PythonDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_end = self.settings.line_end();
        let Ok(sections) = selected_sections(self.sections, self.settings) else {
            return Ok(());
        };

        write!(f, "from .protocol import Symbol{}", line_end)?;
        write!(f, "{}{}", line_end, line_end)?;

        for section in sections.iter() {
            self.fmt_section(f, section)?;
        }

        write!(f, "class {}Sections:{}", self.prefix(), line_end)?;
        for section in sections.iter() {
            write!(f, "{}", line_end)?;
            write!(
                f,
                "    {} = {}{}Section{}",
                section.name(),
                self.prefix(),
                section.class_name(),
                line_end
            )?;
        }
        if sections.is_empty() {
            write!(f, "{}    pass{}", line_end, line_end)?;
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
    fn escaping() {
        assert_eq!(
            escape_py("Says \"hi\".\n\nr0: x"),
            r#"Says 'hi'.\n\nr0: x"#
        );
    }

    #[test]
    fn module_layout() {
        let mut builder = SymbolTableBuilder::new();
        builder
            .binary("overlay18")
            .set_load_address(Region::Eu, Address::new(0x0238AC80))
            .set_length(Region::Eu, Size::new(0x3500))
            .set_description_if_empty("Controls the Electivire Link Shop.")
            .add_data(
                Symbol::new("MOVES_MENU_CONFIRM")
                    .with_address(Region::Eu, Address::new(0x0238DE60))
                    .with_length(Region::Eu, Size::new(0x18)),
            );
        let table = builder.build();

        let settings = RenderSettings::new();
        let text = format!("{}", PythonDisplay::new(table.sections(Region::Eu), &settings));
        let expected = r#"from .protocol import Symbol


class EuOverlay18Functions:

    pass


class EuOverlay18Data:

    MOVES_MENU_CONFIRM = Symbol([0x238DE60], 0x18, "")


class EuOverlay18Section:
    name = "overlay18"
    description = "Controls the Electivire Link Shop."
    loadaddress = 0x238AC80
    length = 0x3500
    functions = EuOverlay18Functions
    data = EuOverlay18Data


class EuSections:

    overlay18 = EuOverlay18Section
"#;
        assert_eq!(text, expected);

        let text = format!("{}", PythonDisplay::new(table.sections(Region::JpItcm), &settings));
        assert!(text.contains("class JpItcmOverlay18Data:\n\n    MOVES_MENU_CONFIRM = Symbol(None, None, \"\")\n"));
        assert!(text.contains("    loadaddress = None\n    length = None\n"));
    }
}
