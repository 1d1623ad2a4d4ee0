//! Page footer component

use maud::{Markup, html};

/// Renders the shared page footer
///
/// # Arguments
///
/// * `site_name`: Site name shown in the attribution line
pub fn footer(site_name: &str) -> Markup {
    html! {
        footer {
            p {
                (site_name) " · generated by "
                a href="https://github.com/lemorage/pressmark" target="_blank" { "pressmark" }
            }
        }
    }
}
