//! Renderer for the constrained markdown subset used by recipe documents.
//!
//! Recipe documents only ever use a handful of block constructs, so instead
//! of a general CommonMark parser this is a single forward pass over the
//! lines with one piece of state: whether an unordered list is open.
//!
//! | Line                | Output                               |
//! |---------------------|--------------------------------------|
//! | `- item`            | `<li>item</li>` (inside `<ul>`)      |
//! | `> text`            | `<blockquote>text</blockquote>`      |
//! | `![](path)`         | `<img src='path' alt='' />`          |
//! | `# Title`           | `<h1>Title</h1>`                     |
//! | blank               | nothing                              |
//! | anything else       | `<p>line</p>`                        |
//!
//! Rules are tried top to bottom. A list item opens a `<ul>` if none is open;
//! any other line closes it first. Content is emitted literally: there is no
//! inline markup and no escaping, so a document's own HTML passes through.

/// Block-level state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Outside,
    List,
}

/// Render a recipe document to HTML, one output line per emitted element.
pub fn render(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut block = Block::Outside;

    for line in text.lines() {
        if let Some(item) = line.strip_prefix("- ") {
            if block == Block::Outside {
                out.push("<ul>".to_string());
                block = Block::List;
            }
            out.push(format!("<li>{}</li>", item.trim()));
            continue;
        }

        if block == Block::List {
            out.push("</ul>".to_string());
            block = Block::Outside;
        }

        if let Some(quote) = line.strip_prefix('>') {
            out.push(format!("<blockquote>{}</blockquote>", quote.trim()));
        } else if let Some(src) = image_source(line) {
            out.push(format!("<img src='{src}' alt='' />"));
        } else if let Some(heading) = line.strip_prefix("# ") {
            out.push(format!("<h1>{}</h1>", heading.trim()));
        } else if line.trim().is_empty() {
            continue;
        } else {
            out.push(format!("<p>{line}</p>"));
        }
    }

    if block == Block::List {
        out.push("</ul>".to_string());
    }

    out.join("\n")
}

/// Source path of a bare `![](path)` line, or `None` for anything else.
fn image_source(line: &str) -> Option<&str> {
    line.strip_prefix("![](")?.strip_suffix(')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_items_share_one_container() {
        assert_eq!(render("- one\n- two"), "<ul>\n<li>one</li>\n<li>two</li>\n</ul>");
    }

    #[test]
    fn list_item_content_is_trimmed() {
        assert_eq!(render("-   spaced  "), "<ul>\n<li>spaced</li>\n</ul>");
    }

    #[test]
    fn blockquote() {
        assert_eq!(render("> note"), "<blockquote>note</blockquote>");
    }

    #[test]
    fn blockquote_without_space() {
        assert_eq!(render(">tight"), "<blockquote>tight</blockquote>");
    }

    #[test]
    fn image_with_empty_alt() {
        assert_eq!(
            render("![](Photos/pic.webp)"),
            "<img src='Photos/pic.webp' alt='' />"
        );
    }

    #[test]
    fn image_with_alt_text_is_a_paragraph() {
        assert_eq!(render("![dish](pic.webp)"), "<p>![dish](pic.webp)</p>");
    }

    #[test]
    fn heading() {
        assert_eq!(render("# Soup"), "<h1>Soup</h1>");
    }

    #[test]
    fn deeper_headings_are_paragraphs() {
        assert_eq!(render("## Steps"), "<p>## Steps</p>");
    }

    #[test]
    fn blank_lines_are_dropped() {
        assert_eq!(render("first\n\n   \nsecond"), "<p>first</p>\n<p>second</p>");
    }

    #[test]
    fn paragraph_keeps_line_verbatim() {
        assert_eq!(render("  Stir *gently*  "), "<p>  Stir *gently*  </p>");
    }

    #[test]
    fn other_line_closes_list() {
        let html = render("- a\n- b\nServe hot.\n- c");
        assert_eq!(
            html,
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>Serve hot.</p>\n<ul>\n<li>c</li>\n</ul>"
        );
    }

    #[test]
    fn blank_line_closes_list() {
        let html = render("- a\n\n- b");
        assert_eq!(html, "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>");
    }

    #[test]
    fn list_closed_at_end_of_input() {
        assert!(render("# T\n- x").ends_with("</ul>"));
    }

    #[test]
    fn dash_without_space_is_paragraph() {
        assert_eq!(render("-x"), "<p>-x</p>");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn full_document() {
        let doc = "# Soup\n> Warm soup #easy\n\n- broth\n- salt\n\nSimmer.";
        let expected = [
            "<h1>Soup</h1>",
            "<blockquote>Warm soup #easy</blockquote>",
            "<ul>",
            "<li>broth</li>",
            "<li>salt</li>",
            "</ul>",
            "<p>Simmer.</p>",
        ]
        .join("\n");
        assert_eq!(render(doc), expected);
    }
}
