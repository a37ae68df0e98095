//! Types shared between the pipeline, page generation, and CLI output.
//!
//! [`ManifestEntry`] is serialized into `recipes.json` and read back by the
//! client-side search script, so its field names are part of the site format.

use serde::{Deserialize, Serialize};

/// One recipe's record in the search manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub title: String,
    /// Path of the recipe page relative to the site root (`<slug>/`).
    pub url: String,
    /// Tags from the description line, in order of appearance.
    pub tags: Vec<String>,
    /// Rendered body with markup stripped, used for full-text search.
    pub content: String,
}

/// Result of parsing one recipe document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecipe {
    /// First `# heading`, or the file stem when the document has none.
    pub title: String,
    pub tags: Vec<String>,
    pub html_body: String,
    pub plain_text: String,
}

impl ParsedRecipe {
    /// Manifest record for this recipe published under `slug`.
    pub fn manifest_entry(&self, slug: &str) -> ManifestEntry {
        ManifestEntry {
            title: self.title.clone(),
            url: format!("{slug}/"),
            tags: self.tags.clone(),
            content: self.plain_text.clone(),
        }
    }
}
