//! Shared test utilities for the recipe-site test suite.
//!
//! Fixture writers build recipe directories inside a `TempDir`, and lookup
//! helpers panic with the available keys on a miss.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_recipe(tmp.path(), "Soup", "# Soup\n> Warm #easy");
//! write_package(tmp.path(), "Bread", "# Bread\n![](loaf.webp)", &["loaf.webp"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::ManifestEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `<root>/<stem>.recipe` and return its path.
pub fn write_recipe(root: &Path, stem: &str, text: &str) -> PathBuf {
    let path = root.join(format!("{stem}.recipe"));
    fs::write(&path, text).unwrap();
    path
}

/// Write `<root>/<stem>.recipepackage/` with its document and, if `photos`
/// is non-empty, a `Photos/` directory holding placeholder files.
pub fn write_package(root: &Path, stem: &str, text: &str, photos: &[&str]) -> PathBuf {
    let dir = root.join(format!("{stem}.recipepackage"));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{stem}.recipe")), text).unwrap();
    if !photos.is_empty() {
        let photo_dir = dir.join("Photos");
        fs::create_dir_all(&photo_dir).unwrap();
        for photo in photos {
            fs::write(photo_dir.join(photo), "fake image").unwrap();
        }
    }
    dir
}

/// Write the two static files the copier expects into `dir`.
pub fn write_static_assets(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("styles.css"), "body { margin: 0; }").unwrap();
    fs::write(dir.join("search.js"), "// search").unwrap();
}

// =========================================================================
// Lookups: panics with a clear message on miss
// =========================================================================

/// Find a manifest entry by title. Panics if not found.
pub fn find_entry<'a>(entries: &'a [ManifestEntry], title: &str) -> &'a ManifestEntry {
    entries
        .iter()
        .find(|e| e.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
            panic!("manifest entry '{title}' not found. Available: {titles:?}")
        })
}

/// Read and parse `recipes.json` from an output directory.
pub fn read_manifest(output: &Path) -> Vec<ManifestEntry> {
    let json = fs::read_to_string(output.join("recipes.json")).unwrap();
    serde_json::from_str(&json).unwrap()
}
