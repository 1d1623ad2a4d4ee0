use anyhow::{Context, Result};
use pressmark::pages::article::{self, ArticlePageData};
use pressmark::pages::index::{self, IndexPageData};
use pressmark::{ArticleTree, Config, Document, MarkdownRenderer};
use std::fs;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let site_name = config
        .site_name()
        .context("Failed to determine site name")?;

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    pressmark::write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let paths = pressmark::scan(&config.content, Some(&config.output))
        .context("Failed to scan content directory")?;

    println!("Found {} articles in {}", paths.len(), config.content.display());

    let mut documents = Vec::new();
    for path in paths {
        match Document::load(&config.content, &path) {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                eprintln!("Warning: Skipping {}: {:#}", path.display(), e);
            }
        }
    }

    println!("Generating article pages...");
    let mut page_count = 0;
    for doc in &documents {
        // Broken reference aliases are cosmetic; report and keep going
        for alias in pressmark::undefined_references(doc.body()) {
            eprintln!(
                "Warning: Undefined reference [{}] in {}",
                alias,
                doc.source_path().display()
            );
        }

        let renderer = MarkdownRenderer::with_resolver(doc.source_path());
        let body_html = match renderer.render(doc.body()) {
            Ok(html) => html,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to render {}: {:#}",
                    doc.source_path().display(),
                    e
                );
                continue;
            }
        };

        let markup = article::generate(ArticlePageData {
            document: doc,
            site_name: &site_name,
            body_html: &body_html,
        });

        let out_path = config.output.join(doc.output_path());
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
        fs::write(&out_path, markup.into_string())
            .with_context(|| format!("Failed to write page: {}", out_path.display()))?;
        page_count += 1;
    }
    println!("Generated {} article pages", page_count);

    let tree = ArticleTree::from_documents(&documents);
    let index_markup = index::generate(IndexPageData {
        site_name: &site_name,
        tree: &tree,
    });
    let index_path = config.output.join("index.html");
    fs::write(&index_path, index_markup.into_string())
        .with_context(|| format!("Failed to write index page: {}", index_path.display()))?;
    println!("Generated: {}", index_path.display());

    if !config.no_open && open::that(&index_path).is_err() {
        eprintln!(
            "Warning: Failed to open {} in a browser",
            index_path.display()
        );
    }

    Ok(())
}
