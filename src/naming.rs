//! Slug generation for recipe entry names.
//!
//! Every recipe source (plain document or package) is identified on the site
//! by a slug derived from its file stem. The slug doubles as the name of the
//! recipe's output directory and of the copied document:
//!
//! - `Chicken Soup.recipe` → `chicken-soup/chicken-soup.recipe`
//! - `Mom's Pie.recipepackage/` → `moms-pie/moms-pie.recipe`
//!
//! ## Rules
//!
//! 1. Lowercase the whole name.
//! 2. Drop every character outside `[a-z0-9]`, whitespace and `-`. Punctuation
//!    is removed, not replaced.
//! 3. Trim surrounding whitespace.
//! 4. Collapse each run of whitespace into a single `-`.
//!
//! Slugs are not checked for uniqueness here; the pipeline rejects collisions.

use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid slug regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Derive a URL-safe slug from a file stem.
///
/// - `"Chicken Soup"` → `"chicken-soup"`
/// - `"Mom's Apple Pie!"` → `"moms-apple-pie"`
/// - `"  Tabs\tand  spaces "` → `"tabs-and-spaces"`
/// - `"Crème brûlée"` → `"crme-brle"` (non-ASCII letters are stripped)
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let kept = DISALLOWED.replace_all(&lowered, "");
    WHITESPACE.replace_all(kept.trim(), "-").into_owned()
}
