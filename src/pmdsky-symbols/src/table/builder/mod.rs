/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod binary_builder;
mod symbol_table_builder;

pub use binary_builder::BinaryBuilder;
pub use symbol_table_builder::SymbolTableBuilder;
