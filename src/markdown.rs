//! Markdown Rendering
//!
//! Renders the page's static prose with pulldown-cmark. Raw HTML in the
//! source is dropped so only markdown-generated markup reaches `inner_html`.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = parser.filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markup() {
        let html = parse_markdown("**Bold** lead\n\n- one\n- two\n");
        assert!(html.contains("<strong>Bold</strong>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<li>two</li>"));
    }

    #[test]
    fn test_raw_html_dropped() {
        let html = parse_markdown("Hello <script>alert(1)</script> world\n\n<div>block</div>\n");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<div>"));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn test_strikethrough() {
        assert!(parse_markdown("~~gone~~").contains("<del>gone</del>"));
    }
}
