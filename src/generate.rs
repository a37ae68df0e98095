//! HTML site generation.
//!
//! Writes everything under the output directory except the static assets.
//!
//! ## Output Structure
//!
//! ```text
//! site/
//! ├── index.html                 # Landing page: search box + tag filter
//! ├── recipes.json               # Search manifest (one entry per recipe)
//! ├── tags.json                  # Sorted tag universe
//! ├── tomato-soup/
//! │   ├── index.html             # Recipe page
//! │   └── tomato-soup.recipe     # Original document, for download
//! └── banana-bread/
//!     ├── index.html
//!     ├── banana-bread.recipe
//!     └── Photos/                # Copied from the package
//!         └── loaf.webp
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for the page shells. Titles and tags
//! are escaped by maud; the rendered recipe body is inserted pre-escaped
//! because it is already HTML.
//!
//! The landing page embeds the tag universe as a JSON literal (`const TAGS`)
//! that `search.js` uses to populate the tag filter.

use crate::scan::RecipeSource;
use crate::types::{ManifestEntry, ParsedRecipe};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// What was written for one recipe.
#[derive(Debug, Clone)]
pub struct EmittedRecipe {
    pub dir: PathBuf,
    /// Number of photo files copied from the package.
    pub photos: usize,
}

/// Delete `output_dir` if present and recreate it empty.
pub fn reset_output(output_dir: &Path) -> Result<(), GenerateError> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)?;
    }
    fs::create_dir_all(output_dir)?;
    Ok(())
}

/// Write a recipe's output directory: page, document copy, and photos.
pub fn emit_recipe(
    output_dir: &Path,
    slug: &str,
    source: &RecipeSource,
    recipe: &ParsedRecipe,
    photos_dir: &str,
) -> Result<EmittedRecipe, GenerateError> {
    let dir = output_dir.join(slug);
    fs::create_dir_all(&dir)?;

    let download = format!("{slug}.recipe");
    fs::copy(source.document(), dir.join(&download))?;

    let photos = match source.photos() {
        Some(src) => copy_dir_recursive(src, &dir.join(photos_dir))?,
        None => 0,
    };

    let page = render_recipe_page(recipe, &download);
    fs::write(dir.join("index.html"), page.into_string())?;
    log::debug!("wrote {}/index.html", slug);

    Ok(EmittedRecipe { dir, photos })
}

/// Sorted, deduplicated set of every tag in the manifest.
pub fn tag_universe(entries: &[ManifestEntry]) -> BTreeSet<String> {
    entries
        .iter()
        .flat_map(|e| e.tags.iter().cloned())
        .collect()
}

/// Write `recipes.json`, `tags.json`, and the landing `index.html`.
///
/// Returns the tag universe embedded in the landing page.
pub fn write_index(
    output_dir: &Path,
    site_title: &str,
    entries: &[ManifestEntry],
) -> Result<BTreeSet<String>, GenerateError> {
    let tags = tag_universe(entries);

    fs::write(
        output_dir.join("recipes.json"),
        serde_json::to_string(entries)?,
    )?;
    fs::write(output_dir.join("tags.json"), serde_json::to_string(&tags)?)?;

    let index = render_index(site_title, &tags)?;
    fs::write(output_dir.join("index.html"), index.into_string())?;
    log::debug!("wrote index with {} recipes, {} tags", entries.len(), tags.len());

    Ok(tags)
}

/// Copy a directory tree, returning the number of files copied.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut files = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            files += 1;
        }
    }
    Ok(files)
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a recipe page. Assets are referenced relative to the slug dir.
fn render_recipe_page(recipe: &ParsedRecipe, download: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (recipe.title) }
                link rel="stylesheet" href="../styles.css";
            }
            body {
                a href="../index.html" { "Home" }
                h1 { (recipe.title) }
                @if !recipe.tags.is_empty() {
                    ul.tags {
                        @for tag in &recipe.tags {
                            li { a href={ "../index.html?tag=" (tag) } { "#" (tag) } }
                        }
                    }
                }
                (PreEscaped(&recipe.html_body))
                p { a href=(download) download { "Download recipe" } }
            }
        }
    }
}

/// Renders the landing page with the tag universe inlined for `search.js`.
fn render_index(site_title: &str, tags: &BTreeSet<String>) -> Result<Markup, GenerateError> {
    let tags_literal = format!("const TAGS = {};", serde_json::to_string(tags)?);
    Ok(html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (site_title) }
                link rel="stylesheet" href="styles.css";
            }
            body {
                h1 { (site_title) }
                input id="search" placeholder="Search recipes";
                select id="tag" {
                    option value="" { "All Tags" }
                }
                ul id="results" {}
                script { (PreEscaped(tags_literal)) }
                script src="search.js" {}
            }
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
