use crate::error::ScanError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// A log file read fully into memory as raw lines.
///
/// Lines break at `\n`, `\r\n` or a lone `\r`, and each line keeps its
/// terminator exactly as it appears on disk; only the last line may lack one.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl LogFile {
    /// Opens `path` read-only and reads every line. The handle is closed
    /// before this returns.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref().to_path_buf();
        let read_err = |source| ScanError::Read {
            path: path.clone(),
            source,
        };

        let file = File::open(&path).map_err(read_err)?;
        let mut contents = String::new();
        BufReader::new(file)
            .read_to_string(&mut contents)
            .map_err(read_err)?;
        let lines = split_lines(&contents);

        tracing::debug!(
            path = %path.display(),
            bytes = contents.len(),
            lines = lines.len(),
            "Log file loaded"
        );

        Ok(Self { path, lines })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the file, yielding its lines in file order.
    pub fn into_lines(self) -> impl Iterator<Item = String> {
        self.lines.into_iter()
    }
}

/// Splits `contents` after every `\n`, `\r\n` or lone `\r`, keeping the
/// terminators.
pub fn split_lines(contents: &str) -> Vec<String> {
    let bytes = contents.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let end = match bytes[i] {
            b'\n' => Some(i),
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => Some(i + 1),
            b'\r' => Some(i),
            _ => None,
        };
        if let Some(end) = end {
            lines.push(contents[start..=end].to_string());
            start = end + 1;
            i = end;
        }
        i += 1;
    }

    if start < bytes.len() {
        lines.push(contents[start..].to_string());
    }
    lines
}
