/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::sync::Arc;
use core::{error, fmt};

use crate::metadata::Region;

#[derive(Debug)]
#[non_exhaustive]
pub enum RenderError {
    Fmt(fmt::Error),
    UnknownSection(UnknownSectionError),
    #[cfg(feature = "std")]
    Json(serde_json::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Fmt(x) => write!(f, "{}", x),
            RenderError::UnknownSection(x) => write!(f, "{}", x),
            #[cfg(feature = "std")]
            RenderError::Json(x) => write!(f, "{}", x),
        }
    }
}
impl error::Error for RenderError {}

impl From<fmt::Error> for RenderError {
    fn from(value: fmt::Error) -> Self {
        RenderError::Fmt(value)
    }
}
impl From<UnknownSectionError> for RenderError {
    fn from(value: UnknownSectionError) -> Self {
        RenderError::UnknownSection(value)
    }
}
#[cfg(feature = "std")]
impl From<serde_json::Error> for RenderError {
    fn from(value: serde_json::Error) -> Self {
        RenderError::Json(value)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub struct UnknownSectionError {
    name: Arc<str>,
    region: Region,
}
impl UnknownSectionError {
    pub(crate) fn new(name: Arc<str>, region: Region) -> Self {
        Self { name, region }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub const fn region(&self) -> Region {
        self.region
    }
}
impl fmt::Display for UnknownSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "There's no section named '{}' in {}", self.name, self.region)
    }
}
impl error::Error for UnknownSectionError {}
