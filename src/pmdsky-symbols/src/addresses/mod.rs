/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod address;
mod address_range;
mod size;

pub use address::Address;
pub use address_range::AddressRange;
pub use size::{Size, SizedAddress};
