//! Navigation breadcrumb component

use maud::{Markup, html};

/// Renders breadcrumb navigation
///
/// Displays hierarchical path navigation with the site name as root link
/// and source path components as a breadcrumb trail. Used on article pages
/// to show location within the content tree.
///
/// # Arguments
///
/// * `site_name`: Site name for the root breadcrumb link
/// * `index_path`: Relative path back to index.html
/// * `components`: Source path components, last being the current article
///
/// # Returns
///
/// Breadcrumb navigation markup with links and separators
pub fn breadcrumb(site_name: &str, index_path: &str, components: &[&str]) -> Markup {
    html! {
        header {
            div class="breadcrumb" {
                a href=(index_path) class="breadcrumb-link" { (site_name) }
                @for (i, component) in components.iter().enumerate() {
                    span class="breadcrumb-separator" { "/" }
                    @if i + 1 == components.len() {
                        span class="breadcrumb-current" { (*component) }
                    } @else {
                        span class="breadcrumb-dir" { (*component) }
                    }
                }
            }
        }
    }
}

/// Extracts breadcrumb components from a source path
///
/// Splits the path on forward slashes and filters empty components.
pub fn path_components(path: &str) -> Vec<&str> {
    path.split('/').filter(|c| !c.is_empty()).collect()
}
