//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// all page types. The wrapper handles viewport configuration, charset, and
/// stylesheet loading while the caller provides page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (may be empty for untitled articles)
/// * `site_name`: Site name appended to the title
/// * `stylesheets`: Array of CSS file paths to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, site_name: &str, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="container" {
                    (body)
                }
                (footer(site_name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_contains_title_and_stylesheets() {
        // Arrange & Act
        let markup = page_wrapper(
            "Presenters",
            "Patterns",
            &["assets/article.css"],
            html! { p { "body" } },
        );
        let html_string = markup.into_string();

        // Assert
        assert!(html_string.contains("<title>Presenters</title>"));
        assert!(html_string.contains("assets/article.css"));
        assert!(html_string.contains("<p>body</p>"));
    }

    #[test]
    fn test_wrapper_empty_title() {
        // Arrange & Act
        let markup = page_wrapper("", "Patterns", &[], html! {});
        let html_string = markup.into_string();

        // Assert
        assert!(
            html_string.contains("<title></title>"),
            "Empty title renders an empty title tag: {}",
            html_string
        );
    }
}
