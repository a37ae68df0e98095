//! The build pipeline driver.
//!
//! Runs every stage in order, start to finish, owning the only accumulated
//! state (manifest entries and the slugs seen so far):
//!
//! ```text
//! asset build → scan → slugs → reset output → per recipe: parse, emit
//!             → index (recipes.json, tags.json, index.html) → static assets
//! ```
//!
//! Any failure aborts the run. The asset build, the scan, and slug assignment
//! all happen before the output directory is touched, so a failing asset
//! build, a broken package, or an unusable or colliding slug leaves the
//! previous site intact.

use crate::assets::{self, AssetError};
use crate::config::{self, ConfigError, SiteConfig};
use crate::generate::{self, GenerateError};
use crate::naming::slugify;
use crate::recipe::parse_recipe;
use crate::scan::{self, RecipeSource, ScanError};
use crate::types::ManifestEntry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Generate error: {0}")]
    Generate(#[from] GenerateError),
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
    #[error("Slug '{slug}' produced by both {} and {}", .first.display(), .second.display())]
    SlugCollision {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("No slug for {}: the name has no ASCII letters or digits", .entry.display())]
    EmptySlug { entry: PathBuf },
}

/// Paths and switches for one build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory of `.recipe` files and `.recipepackage` directories.
    pub source: PathBuf,
    /// Site output directory; deleted and recreated by the build.
    pub output: PathBuf,
    /// Directory holding `styles.css` and `search.js`.
    pub static_dir: PathBuf,
    /// Run the external asset build (still subject to `asset_build.enabled`).
    pub asset_build: bool,
}

/// Per-recipe summary for CLI output.
#[derive(Debug, Clone)]
pub struct BuiltRecipe {
    pub slug: String,
    pub title: String,
    pub source: PathBuf,
    pub tags: Vec<String>,
    pub photos: usize,
}

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub recipes: Vec<BuiltRecipe>,
    pub tags: Vec<String>,
    pub manifest: Vec<ManifestEntry>,
}

/// Load config from the source directory and run the full build.
pub fn build(options: &BuildOptions) -> Result<BuildReport, BuildError> {
    let config = config::load_config(&options.source)?;
    build_with_config(options, &config)
}

/// Run the full build with an already-resolved config.
pub fn build_with_config(
    options: &BuildOptions,
    config: &SiteConfig,
) -> Result<BuildReport, BuildError> {
    if options.asset_build && config.asset_build.enabled {
        assets::run_asset_build(&config.asset_build.command)?;
    } else {
        log::info!("skipping asset build");
    }

    let sources = scan::scan(&options.source, config)?;
    let slugs = assign_slugs(&sources)?;

    generate::reset_output(&options.output)?;

    let mut manifest: Vec<ManifestEntry> = Vec::with_capacity(sources.len());
    let mut recipes = Vec::with_capacity(sources.len());

    for (source, slug) in sources.iter().zip(slugs) {
        let text = fs::read_to_string(source.document())?;
        let photos = source.is_package().then_some(&config.photos);
        let parsed = parse_recipe(&text, source.stem(), photos);

        let emitted =
            generate::emit_recipe(&options.output, &slug, source, &parsed, &config.photos.dir)?;
        log::info!("built {} → {}", source.entry().display(), emitted.dir.display());

        manifest.push(parsed.manifest_entry(&slug));
        recipes.push(BuiltRecipe {
            slug,
            title: parsed.title,
            source: source.entry().to_path_buf(),
            tags: parsed.tags,
            photos: emitted.photos,
        });
    }

    let tags = generate::write_index(&options.output, &config.site_title, &manifest)?;
    assets::copy_static_assets(&options.static_dir, &options.output)?;

    Ok(BuildReport {
        recipes,
        tags: tags.into_iter().collect(),
        manifest,
    })
}

/// Slug for every source, in order. Fails on an empty slug or a collision.
fn assign_slugs(sources: &[RecipeSource]) -> Result<Vec<String>, BuildError> {
    let mut seen: HashMap<String, &Path> = HashMap::new();
    sources
        .iter()
        .map(|source| -> Result<String, BuildError> {
            let slug = slug_for(source)?;
            if let Some(first) = seen.insert(slug.clone(), source.entry()) {
                return Err(BuildError::SlugCollision {
                    slug,
                    first: first.to_path_buf(),
                    second: source.entry().to_path_buf(),
                });
            }
            Ok(slug)
        })
        .collect()
}

fn slug_for(source: &RecipeSource) -> Result<String, BuildError> {
    let slug = slugify(source.stem());
    if slug.is_empty() {
        return Err(BuildError::EmptySlug {
            entry: source.entry().to_path_buf(),
        });
    }
    Ok(slug)
}

/// Parse every source without writing anything (used by `scan`).
pub fn preview(
    sources: &[RecipeSource],
    config: &SiteConfig,
) -> Result<Vec<BuiltRecipe>, BuildError> {
    sources
        .iter()
        .map(|source| -> Result<BuiltRecipe, BuildError> {
            let text = fs::read_to_string(source.document())?;
            let photos = source.is_package().then_some(&config.photos);
            let parsed = parse_recipe(&text, source.stem(), photos);
            Ok(BuiltRecipe {
                slug: slug_for(source)?,
                title: parsed.title,
                source: source.entry().to_path_buf(),
                tags: parsed.tags,
                photos: source.photos().map_or(0, count_files),
            })
        })
        .collect()
}

fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}
