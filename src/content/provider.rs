// Content provider trait - the seam between the loader and page storage

use super::ContentError;

/// A renderable documentation payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSource {
    pub markdown: String,
}

impl PageSource {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
        }
    }
}

/// Keyed registry of page payloads. The built-in implementation is an
/// in-process map over embedded markdown, but anything that can fetch by
/// (section, page) - disk, HTTP - satisfies the same contract.
///
/// `fetch` runs on the content worker thread and may take arbitrary time.
pub trait ContentProvider: Send + Sync {
    fn fetch(&self, section: &str, page: &str) -> Result<PageSource, ContentError>;
}
