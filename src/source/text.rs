use super::RecordSource;
use anyhow::Result;

/// An in-memory record text, for callers that already hold the content.
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RecordSource for TextSource {
    fn read_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
