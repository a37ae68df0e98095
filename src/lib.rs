//! # Recipe Site
//!
//! A minimal static site generator for a folder of recipe documents. Each
//! recipe becomes its own page, and a landing page offers full-text search and
//! a tag filter over all of them.
//!
//! # Architecture: One Linear Pass
//!
//! ```text
//! asset build → scan recipes/ → slugs → reset site/ → per recipe: parse, emit
//!             → recipes.json + tags.json + index.html → styles.css, search.js
//! ```
//!
//! There is no intermediate state on disk and nothing is reused between runs:
//! every build deletes the output directory and regenerates it. The only
//! accumulated state (manifest entries, seen slugs) lives in
//! [`pipeline::build`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pipeline`] | Runs the stages in order and owns the accumulated manifest |
//! | [`scan`] | Classifies entries as plain documents or photo packages |
//! | [`naming`] | File stem → URL slug |
//! | [`recipe`] | Title, tags, body, and search text extraction |
//! | [`markdown`] | The constrained markdown subset → HTML |
//! | [`generate`] | Recipe pages, landing page, and manifest via Maud |
//! | [`assets`] | External search asset build and static file copying |
//! | [`config`] | Optional `config.toml` loading, merging, and validation |
//! | [`types`] | Manifest and parsed-recipe types |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## A Tiny Markdown Subset
//!
//! Recipe documents use headings, one description blockquote, bullet lists,
//! bare images and plain lines. [`markdown::render`] handles exactly those in
//! a single forward pass instead of pulling in a CommonMark implementation,
//! which keeps the output byte-for-byte predictable for the search index.
//!
//! ## Slug Collisions Are Fatal
//!
//! Two entries whose names slugify identically would write to the same
//! output directory. The pipeline stops with
//! [`pipeline::BuildError::SlugCollision`] rather than let one recipe
//! silently replace another.

pub mod assets;
pub mod config;
pub mod generate;
pub mod markdown;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod recipe;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
