//! Static site generator for markdown article collections.

mod assets;
pub mod components;
mod config;
mod document;
mod frontmatter;
mod markdown;
pub mod pages;
mod tree;
mod util;

pub use assets::write_css_assets;
pub use config::Config;
pub use document::{Document, is_markdown, scan};
pub use frontmatter::{Frontmatter, split as split_frontmatter};
pub use markdown::{LinkResolver, MarkdownRenderer, undefined_references};
pub use tree::{ArticleEntry, ArticleTree, Section};
pub use util::{format_reading_time, word_count};
