use pulldown_cmark::{html, Options, Parser as MdParser};

/// Renders a CV document to an HTML fragment.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = MdParser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading_and_list() {
        let rendered = render_html("# Experience\n\n- Rust\n- Go\n");
        assert!(rendered.contains("<h1>Experience</h1>"));
        assert!(rendered.contains("<li>Rust</li>"));
    }

    #[test]
    fn test_render_emphasis_and_links() {
        let rendered = render_html("Built **fast** [tools](https://example.com).");
        assert_eq!(
            rendered.trim(),
            "<p>Built <strong>fast</strong> <a href=\"https://example.com\">tools</a>.</p>"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_html(""), "");
    }
}
