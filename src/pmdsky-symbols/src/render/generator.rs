/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{format, string::String, vec::Vec};
use core::{error, fmt};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{metadata::Region, table::SymbolTable};

use super::{escape_py, render, RenderError, RenderFormat, RenderSettings, PYTHON_PROTOCOL};

/// Writes one rendered file per region into a directory.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Generator {
    format: RenderFormat,
    settings: RenderSettings,
    release: Option<String>,
}

impl Generator {
    pub fn new(format: RenderFormat) -> Self {
        Self {
            format,
            settings: RenderSettings::new(),
            release: None,
        }
    }

    pub const fn format(&self) -> RenderFormat {
        self.format
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }
    pub fn with_settings(self, settings: RenderSettings) -> Self {
        Self { settings, ..self }
    }

    /// Release tag recorded in `_release.py` by the Python format. Left empty
    /// when unset.
    pub fn release(&self) -> Option<&str> {
        self.release.as_deref()
    }
    pub fn with_release<T>(self, release: Option<T>) -> Self
    where
        T: Into<String>,
    {
        Self {
            release: release.map(Into::into),
            ..self
        }
    }
}

impl Generator {
    /// Renders every region of `table` into `out_dir`, creating it if needed.
    ///
    /// Files are named after the region, e.g. `jp_itcm.py`. Returns the paths
    /// written, in writing order.
    pub fn generate<P>(&self, table: &SymbolTable, out_dir: P) -> Result<Vec<PathBuf>, GenerateError>
    where
        P: AsRef<Path>,
    {
        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir).map_err(|e| WriteError::new(out_dir.to_path_buf(), e))?;

        let mut written = Vec::new();

        if self.format == RenderFormat::Python {
            written.push(write_file(out_dir.join("protocol.py"), PYTHON_PROTOCOL)?);
        }

        for region in Region::ALL {
            let text = render(table.sections(region), self.format, &self.settings)?;
            let path =
                out_dir.join(format!("{}.{}", region.file_name(), self.format.extension()));

            written.push(write_file(path, &text)?);
        }

        if self.format == RenderFormat::Python {
            let release = escape_py(self.release.as_deref().unwrap_or_default());
            let text = format!("RELEASE = \"{}\"\n", release);
            written.push(write_file(out_dir.join("_release.py"), &text)?);
        }

        Ok(written)
    }
}

fn write_file(path: PathBuf, contents: &str) -> Result<PathBuf, WriteError> {
    log::debug!("Writing '{}'", path.display());

    match fs::write(&path, contents) {
        Ok(()) => Ok(path),
        Err(e) => Err(WriteError::new(path, e)),
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum GenerateError {
    Write(WriteError),
    Render(RenderError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Write(x) => write!(f, "{}", x),
            GenerateError::Render(x) => write!(f, "{}", x),
        }
    }
}
impl error::Error for GenerateError {}

impl From<WriteError> for GenerateError {
    fn from(value: WriteError) -> Self {
        GenerateError::Write(value)
    }
}
impl From<RenderError> for GenerateError {
    fn from(value: RenderError) -> Self {
        GenerateError::Render(value)
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct WriteError {
    path: PathBuf,
    inner: io::Error,
}
impl WriteError {
    pub(crate) fn new(path: PathBuf, inner: io::Error) -> Self {
        Self { path, inner }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to write '{}': {}", self.path.display(), self.inner)
    }
}
impl error::Error for WriteError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.inner)
    }
}
