//! Raw schema source as an ordered buffer of lines.
//!
//! Lines are split on `\n` so buffer index `i` is always source line `i + 1`.
//! Each line keeps its own terminator, and [`SourceLines::render`]
//! reproduces untouched files byte for byte, mixed line endings included.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ProtostyleError, Result};

/// Line terminator of a single source line.
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

/// Lines of a source file, without their terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLines {
    pub lines: Vec<String>,
    /// Terminator of each line, parallel to `lines`. Only the last line can
    /// be unterminated.
    pub endings: Vec<Option<LineEnding>>,
}

impl SourceLines {
    /// Split `content` into lines.
    pub fn parse(content: &str) -> Self {
        let mut lines = Vec::new();
        let mut endings = Vec::new();

        for chunk in content.split_inclusive('\n') {
            let (line, ending) = if let Some(line) = chunk.strip_suffix("\r\n") {
                (line, Some(LineEnding::CrLf))
            } else if let Some(line) = chunk.strip_suffix('\n') {
                (line, Some(LineEnding::Lf))
            } else {
                (chunk, None)
            };
            lines.push(line.to_string());
            endings.push(ending);
        }

        Self { lines, endings }
    }

    /// Join the lines back into file content.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            out.push_str(line);
            if let Some(ending) = self.endings.get(index).copied().flatten() {
                out.push_str(ending.as_str());
            }
        }
        out
    }
}

/// Read the whole file at `path` as lines.
pub fn read_all_lines(path: &Path) -> Result<SourceLines> {
    let content = fs::read_to_string(path).map_err(|source| ProtostyleError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(SourceLines::parse(&content))
}

/// Replace the content of `path` with `source`.
///
/// The content is written to a temporary file next to `path` and renamed
/// over it, so a failed write leaves the original untouched.
pub fn write_lines(path: &Path, source: &SourceLines) -> Result<()> {
    let write_err = |source: std::io::Error| ProtostyleError::WriteSource {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(source.render().as_bytes())
        .map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(write_err)?;
    }

    temp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
