pub mod context;
pub mod document;

// Re-export main types
pub use context::{to_js, RenderContext};
pub use document::HtmlDocument;
