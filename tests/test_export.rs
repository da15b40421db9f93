use std::fs;
use std::path::Path;

use tempfile::tempdir;

use article_forge::export::{
    render_pdf_natively, sanitize_filename, Exporter, ExportError,
};

const CONTENT: &str = "# Demo Article\n\nFirst paragraph.\n\n## Section\n\nSecond paragraph.\n\n```rust\nfn main() {}\n```\n";

fn failing_strategy(_content: &str, _title: &str, _path: &Path) -> Result<(), ExportError> {
    Err(ExportError::Engine("forced failure".to_string()))
}

#[test]
fn export_writes_docx_and_pdf() {
    let dir = tempdir().unwrap();
    let exporter = Exporter::with_strategies(dir.path(), vec![render_pdf_natively]);

    let (pdf_path, docx_path) = exporter.export(CONTENT, "Demo Article").unwrap();

    assert_eq!(pdf_path, dir.path().join("Demo_Article.pdf"));
    assert_eq!(docx_path, dir.path().join("Demo_Article.docx"));

    let pdf_bytes = fs::read(&pdf_path).unwrap();
    assert_eq!(&pdf_bytes[0..4], b"%PDF", "PDF file missing magic header");

    let docx_bytes = fs::read(&docx_path).unwrap();
    assert_eq!(&docx_bytes[0..2], b"PK", "DOCX file must be a zip archive");
}

#[test]
fn export_falls_back_to_html_when_all_pdf_strategies_fail() {
    let dir = tempdir().unwrap();
    let exporter =
        Exporter::with_strategies(dir.path(), vec![failing_strategy, failing_strategy]);

    let (pdf_path, _docx_path) = exporter.export(CONTENT, "Demo Article").unwrap();

    assert_eq!(
        pdf_path.extension().and_then(|e| e.to_str()),
        Some("html"),
        "fallback artifact must be an .html file"
    );
    let html = fs::read_to_string(&pdf_path).unwrap();
    assert!(html.contains("Demo Article"), "fallback must contain the title");
    assert!(html.contains("First paragraph."), "fallback must contain body text");
    assert!(html.contains("Second paragraph."));
}

#[test]
fn export_creates_the_output_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let exporter = Exporter::with_strategies(&nested, vec![render_pdf_natively]);

    exporter.export(CONTENT, "Demo Article").unwrap();
    assert!(nested.join("Demo_Article.docx").exists());
}

#[test]
fn artifact_names_come_from_the_sanitized_title() {
    let dir = tempdir().unwrap();
    let exporter = Exporter::with_strategies(dir.path(), vec![render_pdf_natively]);

    let (_pdf, docx_path) = exporter.export(CONTENT, "My: Title!").unwrap();
    assert_eq!(docx_path, dir.path().join("My_Title.docx"));
}

#[test]
fn sanitize_examples() {
    assert_eq!(sanitize_filename("My: Title!"), "My_Title");
    assert_eq!(sanitize_filename("Caching"), "Caching");
    assert_eq!(sanitize_filename("path/unsafe\\name"), "pathunsafename");
}
