/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod py_symbol_match;
mod py_symbol_table;

pub use py_symbol_match::PySymbolMatch;
pub use py_symbol_table::PySymbolTable;
