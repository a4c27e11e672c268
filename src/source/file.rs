use super::RecordSource;
use anyhow::{Context, Result};
use niffler::get_reader;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A record file on disk, plain or compressed.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn read_text(&self) -> Result<String> {
        read_file(&self.path)
    }
}

/// An ordered list of record files treated as one logical text.
///
/// Extraction order spans the files in the order they were given.
pub struct MultiFileSource {
    paths: Vec<PathBuf>,
}

impl MultiFileSource {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl RecordSource for MultiFileSource {
    fn read_text(&self) -> Result<String> {
        let mut text = String::new();
        for path in &self.paths {
            text.push_str(&read_file(path)?);
            // A file without a trailing newline must not merge its last line
            // with the first line of the next file.
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
        }
        Ok(text)
    }
}

fn read_file(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open record file {}", path.display()))?;
    let mut text = String::new();
    match get_reader(Box::new(file)) {
        Ok((mut reader, _compression)) => {
            reader
                .read_to_string(&mut text)
                .with_context(|| format!("Failed to read record file {}", path.display()))?;
        }
        // Shorter than the compression sniff window, so it cannot be a
        // compressed stream. An empty record file is valid input.
        Err(niffler::Error::FileTooShort) => {
            text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read record file {}", path.display()))?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(text)
}
