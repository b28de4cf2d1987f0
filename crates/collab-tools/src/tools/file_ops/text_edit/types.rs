//! Type definitions for the range-editing engine

use super::{hash, indexer};
use collab_core::tools::ToolError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Line terminator style of a text file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Inclusive, 1-indexed line range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines covered; zero when `end < start`
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate against a file of `total_lines` lines.
    ///
    /// A non-empty span within bounds is required: `1 <= start <= end <=
    /// total_lines`.
    pub fn validate(&self, total_lines: usize) -> Result<(), ToolError> {
        if self.start < 1 {
            return Err(ToolError::OutOfRange(format!(
                "Line numbers are 1-indexed; got start={}",
                self.start
            )));
        }
        if self.start > self.end {
            return Err(ToolError::OutOfRange(format!(
                "Invalid range: start={} is greater than end={}",
                self.start, self.end
            )));
        }
        if self.end > total_lines {
            return Err(ToolError::OutOfRange(format!(
                "Range [{}, {}] exceeds file bounds ({} lines)",
                self.start, self.end, total_lines
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lines {}-{}", self.start, self.end)
    }
}

/// Immutable view of a text file at the moment an operation began.
///
/// Loaded fresh for every operation and discarded when it finishes; a
/// mutation builds a new line sequence and commits it, never editing the
/// snapshot it read. Each element of `lines` keeps its original
/// terminator, so concatenating them reproduces the file byte-for-byte.
#[derive(Debug, Clone)]
pub struct FileSnapshot {
    pub path: PathBuf,
    pub lines: Vec<String>,
    pub line_ending: LineEnding,
    pub file_hash: String,
}

impl FileSnapshot {
    /// Read and index `path`.
    ///
    /// Fails with `NotFound` when the file is missing and `Encoding` when
    /// its content is not valid UTF-8 text.
    pub async fn load(path: &Path) -> Result<Self, ToolError> {
        let bytes = fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ToolError::NotFound(format!("File not found: {}", path.display()))
            } else {
                ToolError::Io(e)
            }
        })?;

        let content = String::from_utf8(bytes).map_err(|_| {
            ToolError::Encoding(format!(
                "File is not valid UTF-8 text: {}",
                path.display()
            ))
        })?;

        Ok(Self::from_content(path, &content))
    }

    /// Index already-loaded content
    pub fn from_content(path: &Path, content: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: indexer::split_lines(content),
            line_ending: indexer::detect_line_ending(content),
            file_hash: hash::digest(content.as_bytes()),
        }
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// The span's lines concatenated, terminators included
    pub fn span_content(&self, range: LineRange) -> String {
        if range.is_empty() {
            return String::new();
        }
        self.lines[range.start - 1..range.end].concat()
    }

    /// Digest over the bytes of the inclusive span
    pub fn range_hash(&self, range: LineRange) -> String {
        hash::digest(self.span_content(range).as_bytes())
    }
}
