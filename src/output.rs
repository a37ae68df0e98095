//! CLI output formatting.
//!
//! Output is information-first: each recipe leads with its positional index
//! and title, with the source entry and extracted details as indented context
//! lines.
//!
//! ## Scan
//!
//! ```text
//! Recipes
//! 001 Banana Bread
//!     Source: Banana Bread.recipepackage/
//!     Tags: baked, sweet
//!     Photos: 2
//! 002 Tomato Soup
//!     Source: Tomato Soup.recipe
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 Banana Bread → banana-bread/index.html
//! 002 Tomato Soup → tomato-soup/index.html
//!
//! Generated 2 recipes, 3 tags
//! ```
//!
//! Each stage has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::pipeline::{BuildReport, BuiltRecipe};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Display name of a source entry, with a trailing `/` for packages.
fn source_name(recipe: &BuiltRecipe) -> String {
    let name = recipe
        .source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if recipe.source.is_dir() {
        format!("{name}/")
    } else {
        name
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the inventory of discovered recipes.
pub fn format_scan_output(recipes: &[BuiltRecipe]) -> Vec<String> {
    let mut lines = vec!["Recipes".to_string()];

    for (i, recipe) in recipes.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), recipe.title));
        lines.push(format!("    Source: {}", source_name(recipe)));
        if !recipe.tags.is_empty() {
            lines.push(format!("    Tags: {}", recipe.tags.join(", ")));
        }
        if recipe.photos > 0 {
            lines.push(format!("    Photos: {}", recipe.photos));
        }
    }

    if recipes.is_empty() {
        lines.push("    (none)".to_string());
    }
    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(recipes: &[BuiltRecipe]) {
    for line in format_scan_output(recipes) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the pages written by a build.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Home \u{2192} index.html".to_string()];

    for (i, recipe) in report.recipes.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}/index.html",
            format_index(i + 1),
            recipe.title,
            recipe.slug
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        plural(report.recipes.len(), "recipe"),
        plural(report.tags.len(), "tag")
    ));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
