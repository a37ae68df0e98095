//! Recipe source discovery.
//!
//! Classifies the entries of the recipes directory into recipe sources:
//!
//! ```text
//! recipes/
//! ├── config.toml                     # Site config (optional, not a recipe)
//! ├── Tomato Soup.recipe              # Plain document
//! ├── Banana Bread.recipepackage/     # Package
//! │   ├── Banana Bread.recipe         # Document, named after the package
//! │   └── Photos/                     # Optional photo directory
//! │       └── loaf.webp
//! └── All Tags.recipe                 # Skipped (see `skip` in config)
//! ```
//!
//! Only direct children are considered. Hidden entries, names listed in the
//! config's `skip` list, and anything without a `.recipe` or `.recipepackage`
//! extension are ignored. Sources are returned sorted by file name so the
//! manifest order is stable across runs.

use crate::config::SiteConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Recipe package has no document {expected}: {package}")]
    MissingDocument { package: PathBuf, expected: String },
}

/// A recipe on disk: a bare document or a package bundling photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSource {
    Document {
        path: PathBuf,
        stem: String,
    },
    Package {
        dir: PathBuf,
        document: PathBuf,
        stem: String,
        /// Photo directory, present only if it exists on disk.
        photos: Option<PathBuf>,
    },
}

impl RecipeSource {
    /// File stem the slug and fallback title are derived from.
    pub fn stem(&self) -> &str {
        match self {
            Self::Document { stem, .. } | Self::Package { stem, .. } => stem,
        }
    }

    /// Path of the markdown document.
    pub fn document(&self) -> &Path {
        match self {
            Self::Document { path, .. } => path,
            Self::Package { document, .. } => document,
        }
    }

    /// Filesystem entry in the recipes directory (file or package dir).
    pub fn entry(&self) -> &Path {
        match self {
            Self::Document { path, .. } => path,
            Self::Package { dir, .. } => dir,
        }
    }

    pub fn is_package(&self) -> bool {
        matches!(self, Self::Package { .. })
    }

    pub fn photos(&self) -> Option<&Path> {
        match self {
            Self::Document { .. } => None,
            Self::Package { photos, .. } => photos.as_deref(),
        }
    }
}

const DOCUMENT_EXTENSION: &str = "recipe";
const PACKAGE_EXTENSION: &str = "recipepackage";

/// Enumerate the recipe sources in `root`.
pub fn scan(root: &Path, config: &SiteConfig) -> Result<Vec<RecipeSource>, ScanError> {
    let mut sources = Vec::new();
    for entry in collect_entries(root, &config.skip)? {
        if let Some(source) = classify(&entry, &config.photos.dir)? {
            log::debug!("found {:?}", source);
            sources.push(source);
        }
    }
    Ok(sources)
}

fn collect_entries(root: &Path, skip: &[String]) -> Result<Vec<PathBuf>, ScanError> {
    let mut entries: Vec<PathBuf> = fs::read_dir(root)?
        .map(|e| e.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.retain(|p| {
        let name = p
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        !name.starts_with('.') && !skip.contains(&name)
    });

    entries.sort();
    Ok(entries)
}

/// Classify one directory entry. Returns `None` for non-recipe entries.
fn classify(path: &Path, photos_dir: &str) -> Result<Option<RecipeSource>, ScanError> {
    let Some(ext) = path.extension().map(|e| e.to_string_lossy()) else {
        return Ok(None);
    };
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if ext == DOCUMENT_EXTENSION && path.is_file() {
        return Ok(Some(RecipeSource::Document {
            path: path.to_path_buf(),
            stem,
        }));
    }

    if ext == PACKAGE_EXTENSION && path.is_dir() {
        let expected = format!("{stem}.{DOCUMENT_EXTENSION}");
        let document = path.join(&expected);
        if !document.is_file() {
            return Err(ScanError::MissingDocument {
                package: path.to_path_buf(),
                expected,
            });
        }
        let photos = path.join(photos_dir);
        return Ok(Some(RecipeSource::Package {
            dir: path.to_path_buf(),
            document,
            stem,
            photos: photos.is_dir().then_some(photos),
        }));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn finds_plain_documents() {
        let tmp = TempDir::new().unwrap();
        write_recipe(tmp.path(), "Soup", "# Soup");

        let sources = scan(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].stem(), "Soup");
        assert!(!sources[0].is_package());
        assert!(sources[0].photos().is_none());
    }

    #[test]
    fn finds_packages_with_photos() {
        let tmp = TempDir::new().unwrap();
        let dir = write_package(tmp.path(), "Bread", "# Bread\n![](loaf.webp)", &["loaf.webp"]);

        let sources = scan(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(sources.len(), 1);
        let source = &sources[0];
        assert!(source.is_package());
        assert_eq!(source.stem(), "Bread");
        assert_eq!(source.entry(), dir.as_path());
        assert_eq!(source.document(), dir.join("Bread.recipe").as_path());
        assert_eq!(source.photos(), Some(dir.join("Photos").as_path()));
    }

    #[test]
    fn package_without_photos() {
        let tmp = TempDir::new().unwrap();
        write_package(tmp.path(), "Bread", "# Bread", &[]);

        let sources = scan(tmp.path(), &SiteConfig::default()).unwrap();
        assert!(sources[0].is_package());
        assert!(sources[0].photos().is_none());
    }

    #[test]
    fn package_without_document_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Empty.recipepackage")).unwrap();

        let result = scan(tmp.path(), &SiteConfig::default());
        assert!(matches!(result, Err(ScanError::MissingDocument { .. })));
    }

    #[test]
    fn ignores_unrelated_entries() {
        let tmp = TempDir::new().unwrap();
        write_recipe(tmp.path(), "Soup", "# Soup");
        fs::write(tmp.path().join("notes.md"), "# Notes").unwrap();
        fs::write(tmp.path().join("config.toml"), "").unwrap();
        fs::write(tmp.path().join(".hidden.recipe"), "# Hidden").unwrap();
        fs::create_dir_all(tmp.path().join("drafts")).unwrap();
        // A directory named like a document is not a document
        fs::create_dir_all(tmp.path().join("odd.recipe")).unwrap();

        let sources = scan(tmp.path(), &SiteConfig::default()).unwrap();
        let stems: Vec<&str> = sources.iter().map(|s| s.stem()).collect();
        assert_eq!(stems, vec!["Soup"]);
    }

    #[test]
    fn skip_list_is_honoured() {
        let tmp = TempDir::new().unwrap();
        write_recipe(tmp.path(), "All Tags", "> #a #b");
        write_recipe(tmp.path(), "Soup", "# Soup");

        let sources = scan(tmp.path(), &SiteConfig::default()).unwrap();
        let stems: Vec<&str> = sources.iter().map(|s| s.stem()).collect();
        assert_eq!(stems, vec!["Soup"]);
    }

    #[test]
    fn sources_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        write_recipe(tmp.path(), "Waffles", "# Waffles");
        write_package(tmp.path(), "Bread", "# Bread", &[]);
        write_recipe(tmp.path(), "Curry", "# Curry");

        let sources = scan(tmp.path(), &SiteConfig::default()).unwrap();
        let stems: Vec<&str> = sources.iter().map(|s| s.stem()).collect();
        assert_eq!(stems, vec!["Bread", "Curry", "Waffles"]);
    }

    #[test]
    fn missing_root_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = scan(&tmp.path().join("nope"), &SiteConfig::default());
        assert!(matches!(result, Err(ScanError::Io(_))));
    }
}
