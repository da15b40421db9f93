//! Markdown to HTML conversion and the styled HTML document template.

use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

/// Convert Markdown to an HTML fragment (fenced code blocks and tables on).
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);
    let mut html_out = String::new();
    html::push_html(&mut html_out, parser);
    html_out
}

/// Remove the `<h1>` that duplicates the document title. The template adds
/// its own title heading, so the converted body must not repeat it.
pub fn strip_title_heading(html: &str, title: &str) -> String {
    let pattern = format!(r"(?is)<h1[^>]*>\s*{}\s*</h1>", regex::escape(title));
    match Regex::new(&pattern) {
        Ok(re) => re.replace(html, "").into_owned(),
        Err(_) => html.to_string(),
    }
}

/// Wrap an HTML body fragment in the styled standalone document used for
/// both the HTML-engine PDF strategy and the plain-HTML fallback artifact.
pub fn styled_html_document(body_html: &str, title: &str) -> String {
    format!(
        r#"<html>
<head>
<meta charset="utf-8">
<style>
    body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 40px; }}
    h1 {{ color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 10px; }}
    h1:first-of-type {{ margin-top: 0; }}
    h2 {{ color: #34495e; margin-top: 30px; }}
    h3 {{ color: #7f8c8d; }}
    pre {{
        background-color: #f8f9fa;
        padding: 15px;
        border-radius: 8px;
        border: 1px solid #dee2e6;
        overflow-x: auto;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        margin: 15px 0;
    }}
    code {{ font-family: 'Courier New', monospace; }}
    p {{ line-height: 1.6; }}
</style>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body_html,
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_fenced_code_blocks() {
        let html = markdown_to_html("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre>"));
        assert!(html.contains("fn main()"));
    }

    #[test]
    fn strips_duplicate_title_heading_case_insensitively() {
        let html = "<h1>My Title</h1>\n<p>Body</p>";
        let stripped = strip_title_heading(html, "my title");
        assert!(!stripped.contains("<h1>"));
        assert!(stripped.contains("<p>Body</p>"));
    }

    #[test]
    fn styled_document_contains_title_and_body() {
        let doc = styled_html_document("<p>hello</p>", "A & B");
        assert!(doc.contains("A &amp; B"));
        assert!(doc.contains("<p>hello</p>"));
        assert!(doc.contains("font-family: Arial"));
    }
}
