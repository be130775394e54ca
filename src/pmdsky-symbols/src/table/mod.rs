/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

pub mod builder;
mod region_symbol;
mod section;
mod sections;
mod symbol_index;
mod symbol_table;

pub use builder::{BinaryBuilder, SymbolTableBuilder};
pub use region_symbol::RegionSymbol;
pub use section::Section;
pub use sections::Sections;
pub use symbol_table::SymbolTable;
