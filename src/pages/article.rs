//! Article page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::{breadcrumb, path_components};
use crate::document::Document;
use crate::util::{format_reading_time, word_count};

/// Data container for article page generation
pub struct ArticlePageData<'a> {
    pub document: &'a Document,
    pub site_name: &'a str,
    pub body_html: &'a str,
}

/// Generates an article page from rendered markdown
///
/// Wraps the rendered article body with breadcrumb navigation and a meta
/// line. The page `<title>` is the front-matter title, which may be empty
/// for untitled articles; the body carries its own headings.
///
/// # Arguments
///
/// * `data`: Article page data container
///
/// # Returns
///
/// Complete HTML markup for the article page
pub fn generate(data: ArticlePageData<'_>) -> Markup {
    let depth = data.document.depth();
    let prefix = "../".repeat(depth);
    let css_paths = [
        format!("{}assets/article.css", prefix),
        format!("{}assets/markdown.css", prefix),
    ];
    let css_path_refs: Vec<&str> = css_paths.iter().map(|s| s.as_str()).collect();
    let index_path = format!("{}index.html", prefix);

    let source = data.document.source_path().display().to_string();
    let components = path_components(&source);
    let reading_time = format_reading_time(word_count(data.document.body()));

    page_wrapper(
        data.document.title(),
        data.site_name,
        &css_path_refs,
        html! {
            (breadcrumb(data.site_name, &index_path, &components))

            main class="article-card" {
                div class="article-meta" {
                    span class="reading-time" { (reading_time) }
                }
                div class="article-content" {
                    (PreEscaped(data.body_html))
                }
            }
        },
    )
}
