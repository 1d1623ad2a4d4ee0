//! Section grouping for the site index.

use std::path::PathBuf;

use crate::document::Document;
use crate::util::word_count;

/// A single article entry in the index listing.
#[derive(Debug, Clone)]
pub struct ArticleEntry {
    title: String,
    output_path: PathBuf,
    words: usize,
}

impl ArticleEntry {
    /// Listing title, with fallbacks applied for untitled articles.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Generated page path relative to the site root.
    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    /// Body word count, used for reading time display.
    pub fn words(&self) -> usize {
        self.words
    }
}

/// A group of articles sharing a top-level content directory.
///
/// Articles at the content root form the unnamed root section.
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    articles: Vec<ArticleEntry>,
}

impl Section {
    /// Section name: the top-level directory, empty for the root section.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Articles in this section, in content path order.
    pub fn articles(&self) -> &[ArticleEntry] {
        &self.articles
    }
}

/// Articles grouped into sections for the index page.
///
/// The root section (articles directly under the content root) comes first,
/// followed by directory sections sorted by name. Within a section articles
/// keep scan order, which is path-sorted, so the listing is deterministic.
#[derive(Debug, Clone, Default)]
pub struct ArticleTree {
    sections: Vec<Section>,
}

impl ArticleTree {
    /// Builds the section grouping from loaded documents.
    ///
    /// # Arguments
    ///
    /// * `documents`: Documents in scan order
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut root = Vec::new();
        let mut named: Vec<(String, Vec<ArticleEntry>)> = Vec::new();

        for doc in documents {
            let entry = ArticleEntry {
                title: doc.display_title(),
                output_path: doc.output_path(),
                words: word_count(doc.body()),
            };

            let section_name = doc
                .source_path()
                .components()
                .next()
                .filter(|_| doc.depth() > 0)
                .and_then(|c| c.as_os_str().to_str())
                .map(str::to_string);

            match section_name {
                None => root.push(entry),
                Some(name) => match named.iter().position(|(n, _)| *n == name) {
                    Some(i) => named[i].1.push(entry),
                    None => named.push((name, vec![entry])),
                },
            }
        }

        named.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut sections = Vec::new();
        if !root.is_empty() {
            sections.push(Section {
                name: String::new(),
                articles: root,
            });
        }
        for (name, articles) in named {
            sections.push(Section { name, articles });
        }

        Self { sections }
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Total number of articles across all sections.
    pub fn article_count(&self) -> usize {
        self.sections.iter().map(|s| s.articles.len()).sum()
    }

    /// True when no articles were found.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(path: &str, content: &str) -> Document {
        Document::from_content(path, content)
    }

    #[test]
    fn test_root_section_comes_first() {
        // Arrange
        let docs = vec![
            doc("guides/decorators.md", "# Decorators"),
            doc("intro.md", "# Intro"),
        ];

        // Act
        let tree = ArticleTree::from_documents(&docs);

        // Assert
        assert_eq!(tree.sections().len(), 2);
        assert_eq!(tree.sections()[0].name(), "", "Root section first");
        assert_eq!(tree.sections()[1].name(), "guides");
    }

    #[test]
    fn test_sections_sorted_by_name() {
        // Arrange
        let docs = vec![
            doc("patterns/form.md", "x"),
            doc("basics/intro.md", "x"),
            doc("patterns/query.md", "x"),
        ];

        // Act
        let tree = ArticleTree::from_documents(&docs);

        // Assert
        let names: Vec<&str> = tree.sections().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["basics", "patterns"]);
        assert_eq!(tree.sections()[1].articles().len(), 2);
    }

    #[test]
    fn test_entry_carries_display_title_and_path() {
        // Arrange
        let docs = vec![doc(
            "guides/presenters.md",
            "---\ntitle: Presenters\n---\nSome words here.",
        )];

        // Act
        let tree = ArticleTree::from_documents(&docs);

        // Assert
        let entry = &tree.sections()[0].articles()[0];
        assert_eq!(entry.title(), "Presenters");
        assert_eq!(entry.output_path(), &PathBuf::from("guides/presenters.html"));
        assert_eq!(entry.words(), 3);
    }

    #[test]
    fn test_article_count() {
        // Arrange
        let docs = vec![
            doc("a.md", "x"),
            doc("guides/b.md", "x"),
            doc("guides/c.md", "x"),
        ];

        // Act & Assert
        assert_eq!(ArticleTree::from_documents(&docs).article_count(), 3);
    }

    #[test]
    fn test_empty_tree() {
        let tree = ArticleTree::from_documents(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.article_count(), 0);
    }
}
