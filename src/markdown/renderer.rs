//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::Options;
use std::path::Path;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::LinkResolver;

/// Renders article markdown to HTML with GFM extensions.
///
/// Provides GFM extensions including tables, strikethrough, autolinks,
/// task lists, footnotes, and description lists. Uses syntect for code
/// block syntax highlighting when a language is specified. Optionally
/// rewrites article-relative links to generated page paths when configured
/// with a LinkResolver.
///
/// Rendering is total: any input produces some HTML. Malformed constructs
/// (unterminated fences included) degrade to literal content per CommonMark
/// rather than failing.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
    link_resolver: Option<LinkResolver>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates a renderer with GitHub Flavored Markdown options.
    ///
    /// Configures all GFM extensions and rendering behavior:
    /// - Tables, strikethrough, autolinks, task lists, footnotes
    /// - Smart punctuation for quotes and dashes
    /// - Raw HTML passes through (article content is trusted)
    /// - Syntax highlighting with syntect using CSS classes
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        // Parse options (smart punctuation)
        options.parse.smart = true;

        // Render options (articles are trusted content)
        options.render.unsafe_ = true;

        // Load syntax definitions for highlighting
        let syntax_set = SyntaxSet::load_defaults_newlines();

        Self {
            options,
            syntax_set,
            link_resolver: None,
        }
    }

    /// Creates a renderer that rewrites cross-article links.
    ///
    /// Relative links in the article (./other.md, ../guides/) are
    /// transformed to mirrored output page URLs. Absolute URLs and anchor
    /// links remain unchanged. Page depth is derived from the article path.
    ///
    /// # Arguments
    ///
    /// * `current_path`: Path of the article being rendered, relative to
    ///   the content root
    pub fn with_resolver(current_path: impl AsRef<Path>) -> Self {
        let mut renderer = Self::new();
        renderer.link_resolver = Some(LinkResolver::new(current_path));
        renderer
    }

    /// Creates a renderer with link resolution at an explicit page depth.
    ///
    /// Depth determines how many `../` prefixes reach the site root. For
    /// index.html at the root, depth is 0.
    ///
    /// # Arguments
    ///
    /// * `current_path`: Path of the article being rendered
    /// * `depth`: Directory depth of the rendered page from the site root
    pub fn with_resolver_depth(current_path: impl AsRef<Path>, depth: usize) -> Self {
        let mut renderer = Self::new();
        renderer.link_resolver = Some(LinkResolver::with_depth(current_path, depth));
        renderer
    }

    /// Renders markdown content to an HTML string.
    ///
    /// Parses markdown, rewrites cross-article links if a resolver is
    /// configured, and highlights fenced code blocks with CSS class names.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let mut html = comrak::markdown_to_html(content, &self.options);

        // Rewrite relative links if resolver configured
        if let Some(resolver) = &self.link_resolver {
            html = self.rewrite_links(&html, resolver)?;
        }

        // Post-process HTML to add syntax highlighting with CSS classes
        self.highlight_code_blocks(&html)
    }

    /// Rewrites relative links in HTML to generated page paths.
    ///
    /// Finds all `<a href="...">` and `<img src="...">` tags and resolves
    /// relative targets through the LinkResolver. Targets the resolver
    /// rejects (content-root escapes) are left unchanged.
    fn rewrite_links(&self, html: &str, resolver: &LinkResolver) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut pos = 0;

        while pos < html.len() {
            // Find next link or image tag
            let link_pos = html[pos..].find("<a ");
            let img_pos = html[pos..].find("<img ");

            let (tag_start, is_image) = match (link_pos, img_pos) {
                (Some(l), Some(i)) if l < i => (pos + l, false),
                (Some(l), None) => (pos + l, false),
                (None, Some(i)) => (pos + i, true),
                (Some(_), Some(i)) => (pos + i, true),
                (None, None) => {
                    result.push_str(&html[pos..]);
                    break;
                }
            };

            // Copy everything before this tag
            result.push_str(&html[pos..tag_start]);

            // Find the attribute (href or src)
            let attr = if is_image { "src=\"" } else { "href=\"" };
            let attr_start = match html[tag_start..].find(attr) {
                Some(p) => tag_start + p + attr.len(),
                None => {
                    result.push_str(&html[tag_start..tag_start + 1]);
                    pos = tag_start + 1;
                    continue;
                }
            };

            // Find end of attribute value
            let attr_end = match html[attr_start..].find('"') {
                Some(p) => attr_start + p,
                None => {
                    result.push_str(&html[tag_start..attr_start]);
                    pos = attr_start;
                    continue;
                }
            };

            let url = &html[attr_start..attr_end];

            // Resolve the link, degrading to the original target on error
            let resolved = resolver
                .resolve(url, is_image)
                .unwrap_or_else(|_| url.to_string());

            // Write tag up to attribute value, then resolved URL
            result.push_str(&html[tag_start..attr_start]);
            result.push_str(&resolved);

            pos = attr_end;
        }

        Ok(result)
    }

    /// Post-processes HTML to apply syntax highlighting with CSS classes.
    ///
    /// Finds code blocks with language-* classes from comrak's output and
    /// replaces the plain text content with syntect highlighted HTML using
    /// CSS class names (hljs-* prefix).
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;

        // Pattern: <code class="language-LANG">CODE</code>
        let mut search_pos = 0;

        while let Some(code_start) = html[search_pos..].find("<code class=\"language-") {
            let code_start = search_pos + code_start;

            // Find the language name
            let lang_start = code_start + "<code class=\"language-".len();
            let lang_end = match html[lang_start..].find('"') {
                Some(pos) => lang_start + pos,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let language = &html[lang_start..lang_end];

            // Find the end of the opening tag
            let content_start = match html[lang_end..].find('>') {
                Some(pos) => lang_end + pos + 1,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            // Find the closing </code> tag
            let content_end = match html[content_start..].find("</code>") {
                Some(pos) => content_start + pos,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let code_content = &html[content_start..content_end];

            // HTML decode the content (comrak escapes &, <, >, ", ')
            let decoded_content = Self::html_decode(code_content);

            // Copy everything before this code block
            result.push_str(&html[last_end..code_start]);

            // Generate highlighted HTML with CSS classes
            let highlighted = self
                .highlight_code(&decoded_content, language)
                .context("Failed to highlight code block")?;

            // Write opening tag with language class preserved
            result.push_str("<code class=\"language-");
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str("</code>");

            // Move past this code block
            last_end = content_end + "</code>".len();
            search_pos = last_end;
        }

        // Copy remaining HTML after last code block
        result.push_str(&html[last_end..]);

        Ok(result)
    }

    /// Highlights code with syntect using CSS classes.
    ///
    /// Uses ClassedHTMLGenerator to produce HTML with CSS class names
    /// instead of inline styles. The class prefix is "hljs-" to match the
    /// highlight.js conventions in markdown.css.
    fn highlight_code(&self, code: &str, language: &str) -> Result<String> {
        // Handle empty code blocks
        if code.is_empty() {
            return Ok(String::new());
        }

        // Find syntax definition for language
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let syntax = match syntax {
            Some(s) => s,
            None => {
                // Unknown language: return escaped plain text
                return Ok(Self::html_escape(code));
            }
        };

        // Generate HTML with CSS classes using hljs- prefix
        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        // Process each line
        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }

    /// Decodes HTML entities in code block content.
    ///
    /// Comrak escapes special characters in code blocks. This function
    /// reverses those escapes before passing to syntect.
    fn html_decode(html: &str) -> String {
        html.replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
    }

    /// Escapes HTML special characters.
    ///
    /// Used for plain text fallback when language is unknown.
    fn html_escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
