//! File I/O for Chemical JSON documents.
//!
//! The [`cjson`] module holds the decoder ([`cjson::reader`]) and encoder
//! ([`cjson::writer`]). Hosts that expect the boolean-plus-error-log contract
//! of a format plugin use [`CjsonFormat`] through the [`FileFormat`] trait.

use std::fmt;
use std::io::{Read, Write};

use crate::model::molecule::Molecule;

pub mod cjson;
pub mod error;

pub use cjson::CjsonFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Cjson,
}

impl Format {
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Cjson => &["cjson"],
        }
    }

    pub fn mime_types(&self) -> &'static [&'static str] {
        match self {
            Format::Cjson => &["chemical/x-cjson"],
        }
    }

    /// Looks up a format by file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        [Format::Cjson]
            .into_iter()
            .find(|f| f.extensions().contains(&ext.as_str()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Cjson => write!(f, "CJSON"),
        }
    }
}

/// Output settings for the writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level when `pretty` is set.
    pub indent: usize,
    /// Indented multi-line output; compact single-line JSON otherwise.
    pub pretty: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            pretty: true,
        }
    }
}

/// Contract between a format implementation and the host that registers it.
///
/// `read` and `write` report success as a flag; every failure and warning is
/// appended to an ordered log the host can inspect afterwards.
pub trait FileFormat {
    fn format(&self) -> Format;

    fn read(&mut self, reader: &mut dyn Read, molecule: &mut Molecule) -> bool;

    fn write(&mut self, writer: &mut dyn Write, molecule: &Molecule) -> bool;

    fn errors(&self) -> &[String];

    fn clear_errors(&mut self);

    fn file_extensions(&self) -> &'static [&'static str] {
        self.format().extensions()
    }

    fn mime_types(&self) -> &'static [&'static str] {
        self.format().mime_types()
    }
}
