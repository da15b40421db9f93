//! Native PDF builder on printpdf, used as the second export strategy.
//!
//! Walks the formatted Markdown line by line: title as a large bold heading,
//! `##`/`###` lines as bold headings, fenced code in Courier, other
//! non-empty lines as normal text, blank lines (outside code) as spacers.
//! Wrapping is width-naive (character count per font class) and pages break
//! on a simple cursor threshold.

use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Point, Pt, TextItem,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;

#[derive(Debug)]
pub enum PdfError {
    EmptyInput,
    Other(String),
}

impl std::fmt::Display for PdfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdfError::EmptyInput => write!(f, "pdf: empty input"),
            PdfError::Other(msg) => write!(f, "pdf: {msg}"),
        }
    }
}

impl std::error::Error for PdfError {}

/// One text line with its font class, after wrapping.
struct Line {
    text: String,
    font: BuiltinFont,
    size: f32,
    space_before: f32,
}

fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn layout(content: &str, title: &str) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let title_lower = title.to_lowercase();

    for part in wrap(title, 40) {
        lines.push(Line {
            text: part,
            font: BuiltinFont::HelveticaBold,
            size: 24.0,
            space_before: 0.0,
        });
    }

    let mut in_code_block = false;
    for raw in content.lines() {
        if raw.starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            // Code lines keep their own whitespace, no re-wrapping.
            lines.push(Line {
                text: raw.to_string(),
                font: BuiltinFont::Courier,
                size: 10.0,
                space_before: 2.0,
            });
        } else if raw.starts_with("# ") && raw.to_lowercase().contains(&title_lower) {
            continue;
        } else if let Some(text) = raw.strip_prefix("## ") {
            for part in wrap(text, 60) {
                lines.push(Line {
                    text: part,
                    font: BuiltinFont::HelveticaBold,
                    size: 16.0,
                    space_before: 10.0,
                });
            }
        } else if let Some(text) = raw.strip_prefix("### ") {
            for part in wrap(text, 70) {
                lines.push(Line {
                    text: part,
                    font: BuiltinFont::HelveticaBold,
                    size: 13.0,
                    space_before: 8.0,
                });
            }
        } else if !raw.trim().is_empty() {
            for part in wrap(raw, 90) {
                lines.push(Line {
                    text: part,
                    font: BuiltinFont::Helvetica,
                    size: 11.0,
                    space_before: 2.0,
                });
            }
        } else {
            // Blank line outside a code block: vertical spacer.
            lines.push(Line {
                text: String::new(),
                font: BuiltinFont::Helvetica,
                size: 11.0,
                space_before: 4.0,
            });
        }
    }

    lines
}

/// Build a complete PDF from formatted Markdown and return its bytes.
pub fn markdown_to_pdf(content: &str, title: &str) -> Result<Vec<u8>, PdfError> {
    if content.trim().is_empty() && title.trim().is_empty() {
        return Err(PdfError::EmptyInput);
    }

    let lines = layout(content, title);

    let mut pages: Vec<PdfPage> = Vec::new();
    let mut ops: Vec<Op> = Vec::new();
    // Cursor runs top-down in millimetres.
    let mut cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;

    for line in &lines {
        let line_height_mm = line.size * 0.42;
        cursor_mm -= line.space_before * 0.35 + line_height_mm;

        if cursor_mm < MARGIN_MM {
            pages.push(PdfPage::new(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                std::mem::take(&mut ops),
            ));
            cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM - line_height_mm;
        }

        if line.text.is_empty() {
            continue;
        }

        ops.push(Op::StartTextSection);
        ops.push(Op::SetTextCursor {
            pos: Point {
                x: Mm(MARGIN_MM).into(),
                y: Mm(cursor_mm).into(),
            },
        });
        ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(line.size),
            font: line.font.clone(),
        });
        ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(line.text.clone())],
            font: line.font.clone(),
        });
        ops.push(Op::EndTextSection);
    }

    pages.push(PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), ops));

    let mut warnings = Vec::new();
    let bytes = PdfDocument::new(title)
        .with_pages(pages)
        .save(&PdfSaveOptions::default(), &mut warnings);
    if bytes.is_empty() {
        return Err(PdfError::Other("empty document produced".to_string()));
    }
    Ok(bytes)
}
