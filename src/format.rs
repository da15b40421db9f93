//! Formatter: pure string manipulation, no model calls.
//!
//! Merges generated code snippets into the article body and extracts the
//! article title from the first H1 heading.

use regex::Regex;
use tracing::debug;

/// Title used when the article carries no H1 heading at all.
pub const DEFAULT_TITLE: &str = "Technical Article";

const CONCLUSION_HEADING: &str = "## Conclusion";

/// Format the article content and merge in code snippets if provided.
///
/// Runs of three or more newlines collapse to exactly two. Non-empty
/// snippets are inserted immediately before the `## Conclusion` heading when
/// one exists, otherwise appended at the end.
pub fn format(content: &str, code_snippets: &str) -> String {
    let collapse = Regex::new(r"\n{3,}").expect("static regex");
    let mut formatted = collapse.replace_all(content.trim(), "\n\n").into_owned();

    if !code_snippets.is_empty() {
        let snippets = code_snippets.trim();
        if let Some(idx) = formatted.find(CONCLUSION_HEADING) {
            debug!("Inserting code snippets before conclusion section");
            let before = formatted[..idx].trim_end().to_string();
            let conclusion = &formatted[idx..];
            formatted = format!("{before}\n\n{snippets}\n\n{conclusion}");
        } else {
            debug!("No conclusion section, appending code snippets at the end");
            formatted = format!("{formatted}\n\n{snippets}");
        }
    }

    formatted
}

/// Extract the main title: text of the first line matching `# <text>`.
/// Falls back to [`DEFAULT_TITLE`] when no H1 heading is present.
pub fn extract_title(content: &str) -> String {
    let h1 = Regex::new(r"(?m)^#\s+(.+)$").expect("static regex");
    match h1.captures(content) {
        Some(caps) => caps[1].trim().to_string(),
        None => DEFAULT_TITLE.to_string(),
    }
}

/// Extract all `#`-style headers as `(level, text)` pairs.
pub fn extract_headers(content: &str) -> Vec<(usize, String)> {
    let header = Regex::new(r"^(#{1,6})\s+(.+)$").expect("static regex");
    content
        .lines()
        .filter_map(|line| {
            header
                .captures(line)
                .map(|caps| (caps[1].len(), caps[2].trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_title_finds_first_h1() {
        assert_eq!(extract_title("# Foo\n\nBody text."), "Foo");
    }

    #[test]
    fn extract_title_skips_lower_level_headings() {
        let content = "## Section\n# The Real Title\nText.";
        assert_eq!(extract_title(content), "The Real Title");
    }

    #[test]
    fn extract_title_falls_back_to_default() {
        assert_eq!(extract_title("no header here"), DEFAULT_TITLE);
    }

    #[test]
    fn extract_headers_reports_levels() {
        let content = "# One\ntext\n## Two\n### Three";
        let headers = extract_headers(content);
        assert_eq!(
            headers,
            vec![
                (1, "One".to_string()),
                (2, "Two".to_string()),
                (3, "Three".to_string()),
            ]
        );
    }
}
