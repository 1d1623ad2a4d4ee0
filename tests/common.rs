//! Shared test utilities for integration tests.
//!
//! Provides helper functions for creating temporary content directories
//! populated with markdown articles, used across multiple test files.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates an empty temporary content directory.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_content_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes an article file at a path relative to the content root.
///
/// Creates intermediate directories as needed.
///
/// # Arguments
///
/// * `root`: Content root directory
/// * `relative`: Article path relative to the root
/// * `content`: Raw article content including any front-matter
///
/// # Errors
///
/// Returns error if directory creation or writing fails
pub fn write_article(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Creates a small article collection used by several tests.
///
/// Layout:
/// - `intro.md` (front-matter title, cross-reference to the decorator
///   article via a reference alias)
/// - `patterns/decorator.md`
/// - `patterns/presenter.md` (no front-matter)
///
/// # Errors
///
/// Returns error if any file cannot be written
pub fn create_sample_collection() -> Result<TempDir> {
    let dir = create_content_dir()?;
    let root = dir.path();

    write_article(
        root,
        "intro.md",
        "---\ntitle: Introduction\n---\n# Introduction\n\nStart with [the decorator pattern][decorator-object].\n\n[decorator-object]: ./patterns/decorator.md\n",
    )?;
    write_article(
        root,
        "patterns/decorator.md",
        "---\ntitle: Decorator Objects\n---\n# Decorator Objects\n\nSee also [presenters](./presenter.md).\n\n```ruby\nclass UserDecorator\n  def initialize(user)\n    @user = user\n  end\nend\n```\n",
    )?;
    write_article(
        root,
        "patterns/presenter.md",
        "# Presenter Objects\n\nBack to [the introduction](../intro.md).\n",
    )?;

    Ok(dir)
}
