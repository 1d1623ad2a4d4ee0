//! Article documents and content directory scanning.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::frontmatter;

/// Markdown file extensions recognized by the scanner.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// A single markdown article.
///
/// Loaded once at render time and immutable afterwards. The title comes from
/// front-matter and defaults to empty when the front-matter is missing or
/// carries no `title:` key.
#[derive(Debug, Clone)]
pub struct Document {
    source_path: PathBuf,
    title: String,
    body: String,
}

impl Document {
    /// Builds a document from raw file content.
    ///
    /// Splits front-matter from the body. Missing or malformed front-matter
    /// is never an error.
    ///
    /// # Arguments
    ///
    /// * `source_path`: Path relative to the content root
    /// * `content`: Raw file content
    pub fn from_content(source_path: impl Into<PathBuf>, content: &str) -> Self {
        let (fm, body) = frontmatter::split(content);
        Self {
            source_path: source_path.into(),
            title: fm.title.unwrap_or_default(),
            body: body.to_string(),
        }
    }

    /// Reads and parses the document at `content_root/source_path`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read as UTF8 text.
    pub fn load(content_root: impl AsRef<Path>, source_path: impl Into<PathBuf>) -> Result<Self> {
        let source_path = source_path.into();
        let full_path = content_root.as_ref().join(&source_path);
        let content = fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read article: {}", full_path.display()))?;
        Ok(Self::from_content(source_path, &content))
    }

    /// Path of the source file relative to the content root.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Front-matter title; empty when none was given.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Markdown body with front-matter stripped.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Output page path mirroring the source path.
    ///
    /// `guides/decorators.md` becomes `guides/decorators.html`.
    pub fn output_path(&self) -> PathBuf {
        self.source_path.with_extension("html")
    }

    /// Directory depth of the output page below the site root.
    ///
    /// Root-level articles have depth 0 and reference assets directly;
    /// nested pages need one `../` prefix per level.
    pub fn depth(&self) -> usize {
        self.source_path.components().count().saturating_sub(1)
    }

    /// Title for listings, with fallbacks for untitled articles.
    ///
    /// Prefers the front-matter title, then the first `# ` heading in the
    /// body, then the file stem.
    pub fn display_title(&self) -> String {
        if !self.title.is_empty() {
            return self.title.clone();
        }

        for line in self.body.lines() {
            if let Some(rest) = line.strip_prefix("# ") {
                let heading = rest.trim();
                if !heading.is_empty() {
                    return heading.to_string();
                }
            }
        }

        self.source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string()
    }
}

/// Scans a content directory for markdown articles.
///
/// Walks the tree recursively and returns paths relative to `content_root`,
/// sorted so generation order (and therefore output) is deterministic.
/// Hidden directories and files are skipped, as is `skip_dir` when it sits
/// inside the content root (keeps the generator from ingesting its own
/// output on a second run).
///
/// # Arguments
///
/// * `content_root`: Directory to scan
/// * `skip_dir`: Directory to exclude from the walk, typically the output
///
/// # Errors
///
/// Returns error if a directory cannot be listed.
pub fn scan(content_root: impl AsRef<Path>, skip_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
    let content_root = content_root.as_ref();
    let skip_canonical = skip_dir.and_then(|d| d.canonicalize().ok());

    let mut found = Vec::new();
    walk(content_root, content_root, skip_canonical.as_deref(), &mut found)?;
    found.sort();
    Ok(found)
}

fn walk(
    content_root: &Path,
    dir: &Path,
    skip_canonical: Option<&Path>,
    found: &mut Vec<PathBuf>,
) -> Result<()> {
    if let Some(skip) = skip_canonical
        && let Ok(canonical) = dir.canonicalize()
        && canonical == skip
    {
        return Ok(());
    }

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();

        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        if path.is_dir() {
            walk(content_root, &path, skip_canonical, found)?;
        } else if is_markdown(&path) {
            let relative = path
                .strip_prefix(content_root)
                .with_context(|| format!("Path outside content root: {}", path.display()))?;
            found.push(relative.to_path_buf());
        }
    }

    Ok(())
}

/// Checks whether a path has a markdown extension.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
