pub mod export;
pub mod extractor;
pub mod source;
pub mod types;

// Re-export main API
pub use extractor::{Proteins, Rnas};
pub use source::{FileSource, MultiFileSource, RecordSource, TextSource};
