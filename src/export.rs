//! Exporter: writes the final article to DOCX and PDF (HTML fallback).
//!
//! DOCX generation has no fallback; a failure there is fatal to the run.
//! PDF generation walks an ordered list of strategies, first success wins:
//! an external HTML-to-PDF engine, then the native printpdf builder. When
//! every strategy fails, the styled HTML itself is written to disk and its
//! path returned in place of a PDF.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{error, info, warn};

use crate::docx::{markdown_to_docx, DocxError};
use crate::markdown::{markdown_to_html, strip_title_heading, styled_html_document};
use crate::pdf::{markdown_to_pdf, PdfError};

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Docx(DocxError),
    Pdf(PdfError),
    Engine(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "export io error: {e}"),
            ExportError::Docx(e) => write!(f, "docx export failed: {e}"),
            ExportError::Pdf(e) => write!(f, "pdf export failed: {e}"),
            ExportError::Engine(msg) => write!(f, "html-to-pdf engine failed: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<DocxError> for ExportError {
    fn from(e: DocxError) -> Self {
        ExportError::Docx(e)
    }
}

impl From<PdfError> for ExportError {
    fn from(e: PdfError) -> Self {
        ExportError::Pdf(e)
    }
}

/// One ordered attempt at producing a PDF file at the given path.
pub type PdfStrategy = fn(&str, &str, &Path) -> Result<(), ExportError>;

/// Writes export artifacts under a fixed output directory.
pub struct Exporter {
    output_dir: PathBuf,
    strategies: Vec<PdfStrategy>,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_strategies(
            output_dir,
            vec![render_pdf_via_html_engine, render_pdf_natively],
        )
    }

    /// Construct with an explicit strategy chain. Used by tests to force the
    /// HTML fallback deterministically.
    pub fn with_strategies(output_dir: impl Into<PathBuf>, strategies: Vec<PdfStrategy>) -> Self {
        Self {
            output_dir: output_dir.into(),
            strategies,
        }
    }

    /// Export the formatted content, returning `(pdf_path, docx_path)`.
    /// The pdf path ends in `.html` when every PDF strategy failed.
    pub fn export(&self, content: &str, title: &str) -> Result<(PathBuf, PathBuf), ExportError> {
        fs::create_dir_all(&self.output_dir)?;

        let docx_path = self.create_docx(content, title)?;
        let pdf_path = self.create_pdf_with_fallback(content, title)?;

        Ok((pdf_path, docx_path))
    }

    fn create_docx(&self, content: &str, title: &str) -> Result<PathBuf, ExportError> {
        let docx_path = self.artifact_path(title, "docx");
        let bytes = markdown_to_docx(content, title)?;
        fs::write(&docx_path, &bytes)?;
        info!(path = %docx_path.display(), size = bytes.len(), "Wrote DOCX artifact");
        Ok(docx_path)
    }

    fn create_pdf_with_fallback(&self, content: &str, title: &str) -> Result<PathBuf, ExportError> {
        let pdf_path = self.artifact_path(title, "pdf");

        for strategy in &self.strategies {
            match strategy(content, title, &pdf_path) {
                Ok(()) => {
                    info!(path = %pdf_path.display(), "Wrote PDF artifact");
                    return Ok(pdf_path);
                }
                Err(e) => {
                    error!(error = %e, "PDF strategy failed, trying next");
                }
            }
        }

        // Degraded but always-successful fallback: plain styled HTML.
        let html_path = self.artifact_path(title, "html");
        let html = styled_document_for(content, title);
        fs::write(&html_path, html)?;
        warn!(
            path = %html_path.display(),
            "PDF generation failed, created HTML file instead"
        );
        Ok(html_path)
    }

    fn artifact_path(&self, title: &str, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{extension}", sanitize_filename(title)))
    }
}

/// Sanitize a title into a filename: keep alphanumeric, space, hyphen and
/// underscore, trim trailing whitespace, replace spaces with underscores.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim_end()
        .replace(' ', "_")
}

fn styled_document_for(content: &str, title: &str) -> String {
    let body = strip_title_heading(&markdown_to_html(content), title);
    styled_html_document(&body, title)
}

/// Strategy 1: render the styled HTML through `wkhtmltopdf`.
pub fn render_pdf_via_html_engine(
    content: &str,
    title: &str,
    pdf_path: &Path,
) -> Result<(), ExportError> {
    let html = styled_document_for(content, title);

    let mut html_file = tempfile::Builder::new()
        .suffix(".html")
        .tempfile()
        .map_err(ExportError::Io)?;
    html_file.write_all(html.as_bytes())?;

    let status = Command::new("wkhtmltopdf")
        .arg("--quiet")
        .arg(html_file.path())
        .arg(pdf_path)
        .status()
        .map_err(|e| ExportError::Engine(format!("failed to launch wkhtmltopdf: {e}")))?;

    if !status.success() {
        return Err(ExportError::Engine(format!(
            "wkhtmltopdf exited with {status}"
        )));
    }
    if !pdf_path.exists() {
        return Err(ExportError::Engine(
            "wkhtmltopdf produced no output file".to_string(),
        ));
    }
    Ok(())
}

/// Strategy 2: build the PDF natively with printpdf.
pub fn render_pdf_natively(content: &str, title: &str, pdf_path: &Path) -> Result<(), ExportError> {
    let bytes = markdown_to_pdf(content, title)?;
    fs::write(pdf_path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_removes_punctuation_and_replaces_spaces() {
        assert_eq!(sanitize_filename("My: Title!"), "My_Title");
    }

    #[test]
    fn sanitize_keeps_hyphen_and_underscore() {
        assert_eq!(sanitize_filename("a-b_c 1"), "a-b_c_1");
    }

    #[test]
    fn sanitize_trims_trailing_whitespace() {
        assert_eq!(sanitize_filename("Title!! "), "Title");
    }
}
