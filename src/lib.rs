//! Convert Slack rich text blocks to Markdown.
//!
//! ```
//! use richtext_md::{Block, Element, RichTextBlock};
//!
//! let doc = RichTextBlock::new(vec![Block::Quote {
//!     elements: vec![Element::text("a"), Element::text("b")],
//! }]);
//! assert_eq!(richtext_md::convert(&doc).unwrap(), "> ab");
//! ```

mod block;
mod config;
mod error;
mod markdown;

pub use block::{Block, Element, List, ListStyle, RICH_TEXT, RichTextBlock, Style};
pub use config::{Config, DateConfig, ListConfig, Timezone};
pub use error::{Error, Result};
pub use markdown::MAX_LIST_INDENT;

/// Convert a rich text document to Markdown using the default config.
pub fn convert(doc: &RichTextBlock) -> Result<String> {
    convert_with_config(doc, &Config::compiled_default())
}

/// Convert a rich text document to Markdown with custom config.
pub fn convert_with_config(doc: &RichTextBlock, config: &Config) -> Result<String> {
    markdown::document_to_markdown(doc, config)
}

/// Decode a rich text document from JSON and convert it.
pub fn convert_json(json: &str) -> Result<String> {
    convert_json_with_config(json, &Config::compiled_default())
}

/// Decode a rich text document from JSON and convert it with custom config.
pub fn convert_json_with_config(json: &str, config: &Config) -> Result<String> {
    let doc: RichTextBlock = serde_json::from_str(json)?;
    convert_with_config(&doc, config)
}
