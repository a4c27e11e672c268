mod file;
mod text;

pub use file::{FileSource, MultiFileSource};
pub use text::TextSource;

use anyhow::Result;

/// A source providing the full text content of a record file.
///
/// The extractors only ever need the complete text blob; where it comes from
/// (a plain file, a gzipped file, an in-memory buffer) is the source's
/// business.
pub trait RecordSource {
    fn read_text(&self) -> Result<String>;
}
