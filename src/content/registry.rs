// In-process page registry backed by embedded markdown

use std::collections::HashMap;

use super::provider::{ContentProvider, PageSource};
use super::ContentError;

/// Compile-time map from (section key, page key) to a markdown payload.
#[derive(Default)]
pub struct ContentRegistry {
    pages: HashMap<(String, String), &'static str>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a payload. Re-registering the same identifier replaces the
    /// previous payload.
    pub fn register(&mut self, section: &str, page: &str, markdown: &'static str) {
        self.pages
            .insert((section.to_string(), page.to_string()), markdown);
    }

    pub fn contains(&self, section: &str, page: &str) -> bool {
        self.pages
            .contains_key(&(section.to_string(), page.to_string()))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl ContentProvider for ContentRegistry {
    fn fetch(&self, section: &str, page: &str) -> Result<PageSource, ContentError> {
        self.pages
            .get(&(section.to_string(), page.to_string()))
            .map(|markdown| PageSource::new(*markdown))
            .ok_or_else(|| ContentError::NotFound {
                section: section.to_string(),
                page: page.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_returns_registered_payload() {
        let mut registry = ContentRegistry::new();
        registry.register("start", "Introduction", "# Introduction\n");
        let page = registry.fetch("start", "Introduction").unwrap();
        assert_eq!(page.markdown, "# Introduction\n");
    }

    #[test]
    fn fetch_unknown_identifier_is_not_found() {
        let registry = ContentRegistry::new();
        assert_eq!(
            registry.fetch("nonexistent-section", "nonexistent-page"),
            Err(ContentError::NotFound {
                section: "nonexistent-section".to_string(),
                page: "nonexistent-page".to_string(),
            })
        );
    }

    #[test]
    fn lookup_is_scoped_by_section() {
        let mut registry = ContentRegistry::new();
        registry.register("attacker", "Overview", "attacker overview");
        assert!(registry.fetch("defender", "Overview").is_err());
    }
}
