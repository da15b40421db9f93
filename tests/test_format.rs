use article_forge::format::{extract_title, format, DEFAULT_TITLE};

#[test]
fn format_without_snippets_only_collapses_whitespace() {
    let content = "# Title\n\n\n\nIntro text.\n\n\nMore text.";
    let formatted = format(content, "");
    assert_eq!(formatted, "# Title\n\nIntro text.\n\nMore text.");
}

#[test]
fn format_is_identity_on_already_clean_content() {
    let content = "# Title\n\nIntro text.";
    assert_eq!(format(content, ""), content);
}

#[test]
fn snippets_are_inserted_immediately_before_conclusion() {
    let content = "# Title\n\nBody.\n\n## Conclusion\n\nWrap-up.";
    let snippet = "## Code Examples\n\n### Example 1\n```python\npass\n```";
    let formatted = format(content, snippet);

    let snippet_pos = formatted.find("## Code Examples").unwrap();
    let conclusion_pos = formatted.find("## Conclusion").unwrap();
    assert!(snippet_pos < conclusion_pos);

    // Immediately before: only blank separation between snippet end and the heading.
    let between = &formatted[snippet_pos + snippet.len()..conclusion_pos];
    assert_eq!(between.trim(), "");
}

#[test]
fn snippets_are_appended_when_no_conclusion_exists() {
    let content = "# Title\n\nBody.";
    let formatted = format(content, "## Code Examples\nExample.");
    assert!(formatted.ends_with("## Code Examples\nExample."));
}

#[test]
fn extract_title_returns_first_h1_text() {
    assert_eq!(extract_title("# Foo\nbody"), "Foo");
}

#[test]
fn extract_title_defaults_when_no_header() {
    assert_eq!(extract_title("no header"), DEFAULT_TITLE);
    assert_eq!(DEFAULT_TITLE, "Technical Article");
}
