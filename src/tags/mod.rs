//! Tag index search engine
//!
//! - [`parser`]: line grammar for ctags index files
//! - [`reader`]: prefix scan over a single sorted index file
//! - [`resolver`]: ordered index discovery across directory, project,
//!   project-registered and global scopes

pub mod parser;
pub mod reader;
pub mod resolver;

pub use parser::{is_rooted, parse_line, parse_locator};
pub use reader::scan_index;
pub use resolver::{IndexResolver, Resolution};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where inside the target file a definition lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locator {
    /// 1-based line number
    Line(u32),
    /// Literal source text to search for
    Pattern(String),
}

impl Locator {
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::Line(line) => Some(*line),
            Self::Pattern(_) => None,
        }
    }

    /// Find the 1-based line this locator points at within `lines`.
    ///
    /// Patterns match the first line containing the text as a literal substring.
    pub fn find_in<I, S>(&self, lines: I) -> Option<u32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self {
            Self::Line(line) => Some(*line),
            Self::Pattern(text) => lines
                .into_iter()
                .position(|line| line.as_ref().contains(text.as_str()))
                .map(|idx| idx as u32 + 1),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(line) => write!(f, "{line}"),
            Self::Pattern(text) => write!(f, "{}", text.trim()),
        }
    }
}

/// One matched definition from an index file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    /// Full tag name, which may extend beyond the query prefix
    pub name: String,
    /// Absolute path of the file holding the definition
    pub location: PathBuf,
    pub locator: Locator,
    /// Trailing ext fields (kind, scope...), display only
    pub extra: String,
}

impl TagEntry {
    /// File name component of `location`, used as the searchable column.
    pub fn file_name(&self) -> String {
        self.location
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.location.display().to_string())
    }
}

impl fmt::Display for TagEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.locator {
            Locator::Line(line) => write!(f, "{}\t{}:{line}", self.name, self.location.display()),
            Locator::Pattern(text) => write!(
                f,
                "{}\t{}\t/{}/",
                self.name,
                self.location.display(),
                text
            ),
        }
    }
}
