use rustipedia_core::{Document, RankedMatch};

/// Hard ceiling on rendered line width.
const MAX_COLS: usize = 80;

/// Render an article for the terminal: title underlined with `=`, body
/// re-wrapped so no line reaches 80 columns, one blank line between
/// paragraphs (each source line is treated as a paragraph).
pub fn format_article(doc: &Document) -> String {
    let underline = "=".repeat(doc.title.chars().count());
    format!("{}\n{}\n{}", doc.title, underline, wrap_body(&doc.body))
}

fn wrap_body(body: &str) -> String {
    let mut out = String::new();
    for line in body.lines() {
        let mut cols = 0;
        for word in line.split_whitespace() {
            let width = word.chars().count();
            if cols > 0 && cols + 1 + width >= MAX_COLS {
                out.push('\n');
                cols = 0;
            } else if cols > 0 {
                out.push(' ');
                cols += 1;
            }
            out.push_str(word);
            cols += width;
        }
        out.push_str("\n\n");
    }
    out
}

pub fn format_matches(matches: &[RankedMatch<'_>]) -> String {
    let mut out = format!("Top {} Matches:\n\n", matches.len());
    for (i, m) in matches.iter().enumerate() {
        out.push_str(&format!(
            "Match {} with cosine similarity of {:.4}:\n\n{}",
            i + 1,
            m.score,
            format_article(m.document)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_underlined_to_its_width() {
        let doc = Document::new("Cars", "wheels are nice");
        let rendered = format_article(&doc);
        assert!(rendered.starts_with("Cars\n====\n"));
    }

    #[test]
    fn long_paragraphs_wrap_under_eighty_columns() {
        let body = "word ".repeat(100);
        let doc = Document::new("Wrap", body.trim());
        for line in format_article(&doc).lines() {
            assert!(line.chars().count() < MAX_COLS, "line too long: {line}");
        }
    }

    #[test]
    fn source_lines_become_paragraphs() {
        let doc = Document::new("P", "first paragraph\nsecond paragraph");
        let rendered = format_article(&doc);
        assert!(rendered.contains("first paragraph\n\nsecond paragraph\n\n"));
    }
}
