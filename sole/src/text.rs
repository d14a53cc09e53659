use std::fmt::Display;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolutionError};

/// UTF-8 signature as it appears in decoded text
pub const BOM: char = '\u{feff}';
const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

/// Line terminator detected from the first line break of a file
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// `\r\n` when the first `\n` is preceded by `\r`, `\n` otherwise
    #[must_use]
    pub fn detect(content: &str) -> Self {
        match content.find('\n') {
            Some(ix) if content[..ix].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

impl Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "LF"),
            LineEnding::CrLf => write!(f, "CRLF"),
        }
    }
}

/// Text content with its byte order mark and newline style split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    pub content: String,
    pub newline: LineEnding,
    pub has_bom: bool,
}

impl TextFile {
    /// Reads a UTF-8 file, with or without signature
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| SolutionError::read(path, e))?;
        Self::from_bytes(bytes).map_err(|e| SolutionError::read(path, e))
    }

    /// Decodes raw bytes. Fails with [`std::io::ErrorKind::InvalidData`] if they are not UTF-8.
    pub fn from_bytes(mut bytes: Vec<u8>) -> std::io::Result<Self> {
        let has_bom = bytes.starts_with(UTF8_BOM);
        if has_bom {
            bytes.drain(..UTF8_BOM.len());
        }
        let content = String::from_utf8(bytes)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let newline = LineEnding::detect(&content);
        Ok(Self {
            content,
            newline,
            has_bom,
        })
    }

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let (content, has_bom) = match text.strip_prefix(BOM) {
            Some(rest) => (rest, true),
            None => (text, false),
        };
        Self {
            content: content.to_owned(),
            newline: LineEnding::detect(content),
            has_bom,
        }
    }
}
