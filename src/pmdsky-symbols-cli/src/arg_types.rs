/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use pmdsky_symbols::{
    addresses::Address,
    metadata::{Region, SymbolKinds},
    render::RenderFormat,
};

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum ArgRegion {
    #[clap(aliases = &["NA", "us"])]
    Na,
    #[clap(aliases = &["EU"])]
    Eu,
    #[clap(aliases = &["JP"])]
    Jp,
    #[clap(aliases = &["NA-ITCM"])]
    NaItcm,
    #[clap(aliases = &["EU-ITCM"])]
    EuItcm,
    #[clap(aliases = &["JP-ITCM"])]
    JpItcm,
}

impl From<ArgRegion> for Region {
    fn from(value: ArgRegion) -> Self {
        match value {
            ArgRegion::Na => Region::Na,
            ArgRegion::Eu => Region::Eu,
            ArgRegion::Jp => Region::Jp,
            ArgRegion::NaItcm => Region::NaItcm,
            ArgRegion::EuItcm => Region::EuItcm,
            ArgRegion::JpItcm => Region::JpItcm,
        }
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum ArgKind {
    #[clap(aliases = &["func"])]
    Function,
    Data,
}

impl From<ArgKind> for SymbolKinds {
    fn from(value: ArgKind) -> Self {
        match value {
            ArgKind::Function => SymbolKinds::FUNCTION,
            ArgKind::Data => SymbolKinds::DATA,
        }
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum ArgFormat {
    Listing,
    SymbolAddrs,
    Python,
    Json,
}

impl From<ArgFormat> for RenderFormat {
    fn from(value: ArgFormat) -> Self {
        match value {
            ArgFormat::Listing => RenderFormat::Listing,
            ArgFormat::SymbolAddrs => RenderFormat::SymbolAddrs,
            ArgFormat::Python => RenderFormat::Python,
            ArgFormat::Json => RenderFormat::Json,
        }
    }
}

/// Accepts `0x`-prefixed hexadecimal or plain decimal addresses.
pub fn parse_address(value: &str) -> Result<Address, String> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    };

    parsed
        .map(Address::new)
        .map_err(|e| format!("invalid address '{}': {}", value, e))
}
