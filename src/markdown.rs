//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module provides markdown rendering using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists) and link resolution for
//! cross-references between articles.

mod links;
mod renderer;

pub use links::{LinkResolver, undefined_references};
pub use renderer::MarkdownRenderer;
