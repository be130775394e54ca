/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod binary;
mod per_region;
pub(crate) mod region;
mod symbol;
mod symbol_kind;

pub use binary::Binary;
pub use per_region::PerRegion;
pub use region::{ParseRegionError, Region};
pub use symbol::Symbol;
pub use symbol_kind::{SymbolKind, SymbolKinds};
