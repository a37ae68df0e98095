//! Recipe document parsing.
//!
//! A recipe document is a small markdown file:
//!
//! ```text
//! # Tomato Soup
//! > A quick weeknight soup #easy #vegetarian
//! ![](soup.webp)
//! - 1kg tomatoes
//! - 1 onion
//! Simmer for twenty minutes.
//! ```
//!
//! From it we extract:
//!
//! - **Title**: the first `# heading` line, falling back to the file stem.
//! - **Tags**: every `#word` on the first `> ` description line. Tags anywhere
//!   else in the document are ordinary text.
//! - **Body**: the whole document rendered by [`crate::markdown::render`].
//! - **Plain text**: the body with every `<...>` run removed, for search.
//!
//! The plain-text strip is deliberately naive: a literal `<` in a recipe can
//! swallow text up to the next `>`, and a stray `>` leaks through.
//!
//! ## Packages
//!
//! Documents inside a `.recipepackage` reference their photos by bare file
//! name (`![](soup.webp)`), while the photos live in a `Photos/` subdirectory.
//! In package mode those references are rewritten to `Photos/soup.webp`
//! before rendering. References that already carry a path are left alone.

use crate::config::PhotosConfig;
use crate::markdown;
use crate::types::ParsedRecipe;
use regex::Regex;
use std::sync::LazyLock;

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)").expect("valid title regex"));
static DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>\s+(.+)").expect("valid description regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").expect("valid tag regex"));
static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid markup regex"));

/// Parse a recipe document.
///
/// `stem` is the entry's file stem, used as the title when the document has
/// no heading. `photos` is `Some` for package documents and controls image
/// reference rewriting.
pub fn parse_recipe(text: &str, stem: &str, photos: Option<&PhotosConfig>) -> ParsedRecipe {
    let title = extract_title(text).unwrap_or_else(|| stem.to_string());
    let tags = extract_tags(text);

    let html_body = match photos {
        Some(photos) => markdown::render(&rewrite_photo_refs(text, photos)),
        None => markdown::render(text),
    };
    let plain_text = strip_markup(&html_body);

    ParsedRecipe {
        title,
        tags,
        html_body,
        plain_text,
    }
}

/// Trimmed text of the first top-level heading.
pub fn extract_title(text: &str) -> Option<String> {
    TITLE.captures(text).map(|caps| caps[1].trim().to_string())
}

/// `#word` tokens from the first description (`> `) line, in order.
pub fn extract_tags(text: &str) -> Vec<String> {
    let Some(caps) = DESCRIPTION.captures(text) else {
        return Vec::new();
    };
    TAG.captures_iter(&caps[1])
        .map(|tag| tag[1].to_string())
        .collect()
}

/// Point bare image references with the photo extension into the photo dir.
pub fn rewrite_photo_refs(text: &str, photos: &PhotosConfig) -> String {
    let pattern = format!(r"!\[\]\(([^)/]+\.{})\)", regex::escape(&photos.extension));
    let re = Regex::new(&pattern).expect("escaped extension forms a valid pattern");
    let replacement = format!("![]({}/$1)", photos.dir.replace('$', "$$"));
    re.replace_all(text, replacement.as_str()).into_owned()
}

/// Remove every `<...>` run from rendered HTML.
pub fn strip_markup(html: &str) -> String {
    MARKUP.replace_all(html, "").into_owned()
}
