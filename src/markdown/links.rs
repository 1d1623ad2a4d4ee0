//! Link resolution for article cross-references.

use anyhow::{Context, Result, bail};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Resolves article-relative links to generated page paths.
///
/// Transforms links between source articles (./decorator.md, ../guides/)
/// into URLs pointing at the mirrored output pages (decorator.html), with
/// `../` prefixes matching the linking page's depth below the site root.
pub struct LinkResolver {
    current_path: PathBuf,
    depth: usize,
}

impl LinkResolver {
    /// Creates a resolver for the article at `current_path`.
    ///
    /// Page depth is derived from the path: one `../` per directory level.
    ///
    /// # Arguments
    ///
    /// * `current_path`: Source path of the article being rendered,
    ///   relative to the content root
    pub fn new(current_path: impl AsRef<Path>) -> Self {
        let current_path = current_path.as_ref().to_path_buf();
        let depth = current_path.components().count().saturating_sub(1);
        Self {
            current_path,
            depth,
        }
    }

    /// Creates a resolver with an explicit page depth.
    ///
    /// Used when the rendered page does not sit at the mirrored location,
    /// e.g. article excerpts embedded in the site index at depth 0.
    ///
    /// # Arguments
    ///
    /// * `current_path`: Source path of the article being rendered
    /// * `depth`: Directory depth of the rendered page below the site root
    pub fn with_depth(current_path: impl AsRef<Path>, depth: usize) -> Self {
        Self {
            current_path: current_path.as_ref().to_path_buf(),
            depth,
        }
    }

    /// Resolves a link target to a site URL.
    ///
    /// Handles the different link shapes:
    /// - Absolute URLs (http://, https://, mailto:) remain unchanged
    /// - Anchor links (#section) remain unchanged
    /// - Relative markdown targets (./file.md) resolve to mirrored .html pages
    /// - Other relative targets (images) resolve to mirrored raw paths
    /// - Directory targets (./dir/) resolve to the directory's index page
    ///
    /// Fragments on relative targets (./file.md#section) are preserved.
    ///
    /// # Arguments
    ///
    /// * `link`: Link href from the rendered markdown
    /// * `is_image`: Whether the link is an image source
    ///
    /// # Errors
    ///
    /// Returns error if the target escapes the content root or contains
    /// invalid UTF8.
    pub fn resolve(&self, link: &str, is_image: bool) -> Result<String> {
        if link.starts_with("http://")
            || link.starts_with("https://")
            || link.starts_with("mailto:")
        {
            return Ok(link.to_string());
        }

        if link.starts_with('#') {
            return Ok(link.to_string());
        }

        // Keep the fragment aside while resolving the path part
        let (path_part, fragment) = match link.split_once('#') {
            Some((p, f)) => (p, Some(f)),
            None => (link, None),
        };

        let current_dir = self.current_path.parent().unwrap_or_else(|| Path::new(""));
        let target_path = current_dir.join(path_part);
        let normalized = self
            .normalize_path(&target_path)
            .context("Failed to normalize link target")?;

        let path_str = normalized.to_str().context("Path contains invalid UTF8")?;
        let prefix = "../".repeat(self.depth);

        let resolved = if path_part.ends_with('/') {
            format!("{}{}/index.html", prefix, path_str)
        } else if !is_image && crate::document::is_markdown(&normalized) {
            let page = normalized.with_extension("html");
            let page_str = page.to_str().context("Path contains invalid UTF8")?;
            format!("{}{}", prefix, page_str)
        } else {
            format!("{}{}", prefix, path_str)
        };

        match fragment {
            Some(f) => Ok(format!("{}#{}", resolved, f)),
            None => Ok(resolved),
        }
    }

    /// Normalizes a path by resolving `..` and `.` components.
    ///
    /// Rejects targets that would escape the content root.
    fn normalize_path(&self, path: &Path) -> Result<PathBuf> {
        let mut components = Vec::new();

        for component in path.components() {
            match component {
                std::path::Component::Normal(c) => {
                    components.push(c);
                }
                std::path::Component::ParentDir => {
                    if components.is_empty() {
                        bail!("Link escapes content root: {}", path.display());
                    }
                    components.pop();
                }
                std::path::Component::CurDir => {}
                _ => {}
            }
        }

        Ok(components.iter().collect())
    }
}

/// Finds reference aliases used in a document but never defined there.
///
/// Scans for full references (`[text][alias]`) and collapsed references
/// (`[alias][]`) outside fenced code blocks, and compares them against the
/// document's link reference definitions (`[alias]: target`). Matching is
/// case-insensitive per CommonMark. Undefined aliases are cosmetic, not
/// errors: the markdown renderer emits them as literal text.
///
/// # Arguments
///
/// * `markdown`: Raw markdown body
///
/// # Returns
///
/// Sorted, deduplicated aliases with no matching definition
pub fn undefined_references(markdown: &str) -> Vec<String> {
    let mut defined = BTreeSet::new();
    let mut used = BTreeSet::new();
    let mut in_fence = false;

    for line in markdown.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        if let Some(alias) = parse_definition(trimmed) {
            defined.insert(alias.to_lowercase());
            continue;
        }

        collect_usages(line, &mut used);
    }

    used.into_iter()
        .filter(|alias| !defined.contains(&alias.to_lowercase()))
        .collect()
}

/// Parses a link reference definition line, returning the alias.
///
/// Definitions have the form `[alias]: target` at the start of a line.
fn parse_definition(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let close = rest.find(']')?;
    if rest[close + 1..].starts_with(':') {
        Some(&rest[..close])
    } else {
        None
    }
}

/// Collects reference aliases used on a line.
///
/// Looks for `][` pairs and extracts the label before and alias after.
/// A collapsed reference (`[alias][]`) uses its label as the alias. Inline
/// links (`[text](url)`) never match since they have no `][` pair.
fn collect_usages(line: &str, used: &mut BTreeSet<String>) {
    let mut pos = 0;

    while let Some(found) = line[pos..].find("][") {
        let bracket = pos + found;

        // Walk back to the matching opening bracket of the label
        let label_start = match line[..bracket].rfind('[') {
            Some(s) => s,
            None => {
                pos = bracket + 2;
                continue;
            }
        };
        let label = &line[label_start + 1..bracket];

        // Alias sits between the `][` and the next closing bracket
        let alias_start = bracket + 2;
        let alias_end = match line[alias_start..].find(']') {
            Some(e) => alias_start + e,
            None => break,
        };
        let alias = &line[alias_start..alias_end];

        let key = if alias.is_empty() { label } else { alias };
        if !key.is_empty() && !key.contains(['[', ']']) {
            used.insert(key.to_string());
        }

        pos = alias_end + 1;
        if pos >= line.len() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_sibling_article() {
        // Arrange
        let resolver = LinkResolver::new("guides/decorators.md");

        // Act
        let result = resolver
            .resolve("./presenters.md", false)
            .expect("Should resolve");

        // Assert
        assert_eq!(result, "../guides/presenters.html");
    }

    #[test]
    fn test_resolve_root_level_article() {
        // Arrange
        let resolver = LinkResolver::new("index.md");

        // Act
        let result = resolver
            .resolve("./about.md", false)
            .expect("Should resolve");

        // Assert
        assert_eq!(result, "about.html", "Depth 0 needs no prefix");
    }

    #[test]
    fn test_resolve_parent_directory_link() {
        // Arrange
        let resolver = LinkResolver::new("guides/rails/decorators.md");

        // Act
        let result = resolver
            .resolve("../../intro.md", false)
            .expect("Should resolve");

        // Assert
        assert_eq!(result, "../../intro.html");
    }

    #[test]
    fn test_resolve_absolute_url_unchanged() {
        // Arrange
        let resolver = LinkResolver::new("index.md");

        // Act & Assert
        assert_eq!(
            resolver
                .resolve("https://example.com", false)
                .expect("Should pass through"),
            "https://example.com"
        );
        assert_eq!(
            resolver
                .resolve("mailto:author@example.com", false)
                .expect("Should pass through"),
            "mailto:author@example.com"
        );
    }

    #[test]
    fn test_resolve_anchor_unchanged() {
        // Arrange
        let resolver = LinkResolver::new("guides/decorators.md");

        // Act
        let result = resolver
            .resolve("#conclusion", false)
            .expect("Should pass through");

        // Assert
        assert_eq!(result, "#conclusion");
    }

    #[test]
    fn test_resolve_preserves_fragment() {
        // Arrange
        let resolver = LinkResolver::new("guides/decorators.md");

        // Act
        let result = resolver
            .resolve("./presenters.md#setup", false)
            .expect("Should resolve");

        // Assert
        assert_eq!(result, "../guides/presenters.html#setup");
    }

    #[test]
    fn test_resolve_image_keeps_raw_path() {
        // Arrange
        let resolver = LinkResolver::new("guides/decorators.md");

        // Act
        let result = resolver
            .resolve("./diagrams/flow.png", true)
            .expect("Should resolve image");

        // Assert
        assert_eq!(
            result, "../guides/diagrams/flow.png",
            "Images should not get an .html extension"
        );
    }

    #[test]
    fn test_resolve_directory_link() {
        // Arrange
        let resolver = LinkResolver::new("index.md");

        // Act
        let result = resolver
            .resolve("./guides/", false)
            .expect("Should resolve directory");

        // Assert
        assert_eq!(result, "guides/index.html");
    }

    #[test]
    fn test_reject_escape_from_content_root() {
        // Arrange
        let resolver = LinkResolver::new("index.md");

        // Act
        let result = resolver.resolve("../../../etc/passwd", false);

        // Assert
        assert!(result.is_err(), "Should reject target outside content root");
    }

    #[test]
    fn test_resolve_with_explicit_depth() {
        // Arrange
        let resolver = LinkResolver::with_depth("guides/decorators.md", 0);

        // Act
        let result = resolver
            .resolve("./presenters.md", false)
            .expect("Should resolve");

        // Assert
        assert_eq!(
            result, "guides/presenters.html",
            "Explicit depth overrides the mirrored location"
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        // Arrange
        let resolver = LinkResolver::new("guides/decorators.md");

        // Act
        let first = resolver.resolve("./presenters.md", false).expect("first");
        let second = resolver.resolve("./presenters.md", false).expect("second");

        // Assert
        assert_eq!(first, second, "Same input must resolve identically");
    }

    #[test]
    fn test_undefined_references_reports_missing() {
        // Arrange
        let markdown = "\
See [the decorator pattern][decorator-object] and [presenters][presenter].

[decorator-object]: ./decorator.md
";

        // Act
        let missing = undefined_references(markdown);

        // Assert
        assert_eq!(missing, vec!["presenter".to_string()]);
    }

    #[test]
    fn test_undefined_references_all_defined() {
        // Arrange
        let markdown = "\
A [query][query-object] plus [query-object][] again.

[query-object]: ./query.md
";

        // Act & Assert
        assert!(undefined_references(markdown).is_empty());
    }

    #[test]
    fn test_undefined_references_case_insensitive() {
        // Arrange
        let markdown = "See [forms][Form-Object].\n\n[form-object]: ./form.md\n";

        // Act & Assert
        assert!(
            undefined_references(markdown).is_empty(),
            "Alias matching should ignore case"
        );
    }

    #[test]
    fn test_undefined_references_ignores_code_fences() {
        // Arrange
        let markdown = "\
```ruby
hash[:key][other]
```

Real [usage][missing-alias] here.
";

        // Act
        let missing = undefined_references(markdown);

        // Assert
        assert_eq!(missing, vec!["missing-alias".to_string()]);
    }

    #[test]
    fn test_undefined_references_ignores_inline_links() {
        // Arrange
        let markdown = "An [inline link](https://example.com) only.";

        // Act & Assert
        assert!(undefined_references(markdown).is_empty());
    }
}
