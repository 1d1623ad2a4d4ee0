//! YAML front-matter extraction.

use serde::{Deserialize, Serialize};

/// Delimiter line for front-matter blocks.
const FENCE: &str = "---";

/// Metadata block preceding an article body.
///
/// Parsed from a `---` delimited YAML block at the top of a markdown file.
/// Unknown keys are ignored so articles can carry extra metadata without
/// breaking older versions of the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Article title, used for the page `<title>` and header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Frontmatter {
    /// Serializes front-matter back to YAML.
    ///
    /// Round-trips with [`split`]: parsing the serialized output yields an
    /// equal `Frontmatter` value.
    ///
    /// # Errors
    ///
    /// Returns error if YAML serialization fails.
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Splits a document into front-matter and body.
///
/// Recognizes a leading `---` fence closed by a second `---` line. Everything
/// after the closing fence is the body. Recovery rules keep this total:
///
/// - No opening fence: no front-matter, the whole input is the body.
/// - Opening fence without a closing fence: treated as body text.
/// - Delimited block that is not valid YAML: front-matter defaults apply,
///   the block is still stripped from the body.
///
/// # Arguments
///
/// * `content`: Raw file content
///
/// # Returns
///
/// Parsed front-matter (defaulted on any recovery) and the body slice
pub fn split(content: &str) -> (Frontmatter, &str) {
    let Some(rest) = strip_fence_line(content) else {
        return (Frontmatter::default(), content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == FENCE {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let fm = serde_yaml::from_str(block).unwrap_or_default();
            return (fm, body);
        }
        offset += line.len();
    }

    // Unterminated fence: literal body text
    (Frontmatter::default(), content)
}

/// Strips the opening fence line, returning the remainder.
///
/// Returns None when the input does not start with a `---` line.
fn strip_fence_line(content: &str) -> Option<&str> {
    let first_line_end = content.find('\n')?;
    let first_line = content[..first_line_end].trim_end_matches('\r');
    if first_line == FENCE {
        Some(&content[first_line_end + 1..])
    } else {
        None
    }
}
