// Content subsystem: resolves the active chapter to a documentation payload
//
// Pages are addressed by (section key, page key). Resolution runs on a worker
// thread so the UI can show a skeleton while a page is in flight; results are
// keyed by request generation so an out-of-order completion can never
// overwrite a newer selection.

mod loader;
mod pages;
mod provider;
mod registry;
mod worker;

pub use loader::{ContentLoader, LoadState, LoadedPage};
pub use pages::builtin_registry;
pub use provider::{ContentProvider, PageSource};
pub use registry::ContentRegistry;
pub use worker::{spawn_worker, LoadCommand, LoadResult};

use thiserror::Error;

/// Fallback page key when a chapter names a section without a page.
pub const OVERVIEW_PAGE: &str = "Overview";

/// Resolution-time failure. Not fatal: the error is rendered in the content
/// pane and navigation keeps working.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("no page registered under `{section}/{page}`")]
    NotFound { section: String, page: String },
}
