//! Site index page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::tree::ArticleTree;
use crate::util::format_reading_time;

/// Data container for index page generation
pub struct IndexPageData<'a> {
    pub site_name: &'a str,
    pub tree: &'a ArticleTree,
}

/// Generates the site index page listing all articles
///
/// Shows articles grouped by section: root-level articles first, then one
/// group per top-level content directory. Each row links to the generated
/// article page and shows a reading time estimate.
///
/// # Arguments
///
/// * `data`: Index page data container
///
/// # Returns
///
/// Complete HTML markup for the index page
pub fn generate(data: IndexPageData<'_>) -> Markup {
    page_wrapper(
        data.site_name,
        data.site_name,
        &["assets/index.css", "assets/markdown.css"],
        html! {
            header class="site-header" {
                h1 class="site-name" { (data.site_name) }
                span class="article-count" {
                    (data.tree.article_count()) " articles"
                }
            }

            main class="article-list-card" {
                @if data.tree.is_empty() {
                    p class="empty-state" { "No articles found" }
                } @else {
                    @for section in data.tree.sections() {
                        @if !section.name().is_empty() {
                            h2 class="section-name" { (section.name()) }
                        }
                        div class="article-table" {
                            @for entry in section.articles() {
                                @let href = entry.output_path().display().to_string();
                                a href=(href) class="article-row" {
                                    div class="article-link" { (entry.title()) }
                                    div class="article-reading-time" {
                                        (format_reading_time(entry.words()))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
