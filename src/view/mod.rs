mod content;
mod header;
mod markdown;
mod sidebar;

pub use markdown::MarkdownView;
