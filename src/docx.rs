//! DOCX generation.
//!
//! A DOCX file is a ZIP archive of WordprocessingML parts. This module walks
//! the formatted Markdown line by line and emits a minimal but valid package:
//! `[Content_Types].xml`, the package relationships, `docProps/core.xml`
//! (document title and creator), `word/document.xml` and `word/styles.xml`.

use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Creator recorded in the package core properties.
const DOC_CREATOR: &str = "article-forge technical article generator";

#[derive(Debug)]
pub enum DocxError {
    Io(std::io::Error),
    Zip(zip::result::ZipError),
}

impl std::fmt::Display for DocxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocxError::Io(e) => write!(f, "docx io error: {e}"),
            DocxError::Zip(e) => write!(f, "docx zip error: {e}"),
        }
    }
}

impl std::error::Error for DocxError {}

impl From<std::io::Error> for DocxError {
    fn from(e: std::io::Error) -> Self {
        DocxError::Io(e)
    }
}

impl From<zip::result::ZipError> for DocxError {
    fn from(e: zip::result::ZipError) -> Self {
        DocxError::Zip(e)
    }
}

/// Accumulates WordprocessingML body paragraphs, then packages the archive.
pub struct DocxBuilder {
    body: String,
}

impl Default for DocxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self { body: String::new() }
    }

    /// The document's own title heading, rendered with the `Title` style.
    pub fn add_title(&mut self, title: &str) {
        self.push_styled_paragraph("Title", title);
    }

    /// `##`/`###` headings map to the `Heading2`/`Heading3` styles.
    pub fn add_heading(&mut self, level: u8, text: &str) {
        let style = if level <= 2 { "Heading2" } else { "Heading3" };
        self.push_styled_paragraph(style, text.trim());
    }

    pub fn add_paragraph(&mut self, text: &str) {
        self.body.push_str(&format!(
            "<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
            escape(text)
        ));
    }

    /// A fenced code block: an italic lead-in naming the language (when one
    /// was given on the fence), then one shaded monospace paragraph with the
    /// code lines joined by `<w:br/>`.
    pub fn add_code_block(&mut self, language: &str, lines: &[&str]) {
        if lines.is_empty() {
            return;
        }
        if !language.is_empty() {
            self.body.push_str(&format!(
                "<w:p><w:r><w:rPr><w:i/></w:rPr>\
                 <w:t xml:space=\"preserve\">Code example ({}):</w:t></w:r></w:p>",
                escape(language)
            ));
        }

        let mut runs = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                runs.push_str("<w:br/>");
            }
            runs.push_str(&format!(
                "<w:t xml:space=\"preserve\">{}</w:t>",
                escape(*line)
            ));
        }

        self.body.push_str(&format!(
            "<w:p><w:pPr>\
             <w:ind w:left=\"432\" w:right=\"432\"/>\
             <w:spacing w:before=\"120\" w:after=\"120\"/>\
             <w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"F0F0F0\"/>\
             </w:pPr>\
             <w:r><w:rPr>\
             <w:rFonts w:ascii=\"Courier New\" w:hAnsi=\"Courier New\"/>\
             <w:sz w:val=\"20\"/>\
             </w:rPr>{runs}</w:r></w:p>"
        ));
    }

    fn push_styled_paragraph(&mut self, style: &str, text: &str) {
        self.body.push_str(&format!(
            "<w:p><w:pPr><w:pStyle w:val=\"{style}\"/></w:pPr>\
             <w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
            escape(text)
        ));
    }

    /// Package all accumulated paragraphs into DOCX bytes.
    pub fn build(self, title: &str) -> Result<Vec<u8>, DocxError> {
        let document_xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{}\
             <w:sectPr><w:pgSz w:w=\"11906\" w:h=\"16838\"/></w:sectPr>\
             </w:body></w:document>",
            self.body
        );

        let core_xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <cp:coreProperties \
             xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
             xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\
             <dc:title>{}</dc:title>\
             <dc:creator>{}</dc:creator>\
             </cp:coreProperties>",
            escape(title),
            escape(DOC_CREATOR)
        );

        let parts: &[(&str, &str)] = &[
            ("[Content_Types].xml", CONTENT_TYPES_XML),
            ("_rels/.rels", PACKAGE_RELS_XML),
            ("docProps/core.xml", &core_xml),
            ("word/document.xml", &document_xml),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML),
            ("word/styles.xml", STYLES_XML),
        ];

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (path, contents) in parts {
            zip.start_file(*path, options)?;
            zip.write_all(contents.as_bytes())?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Walk formatted Markdown and produce DOCX bytes.
///
/// Fenced code blocks become shaded monospace paragraphs, `##`/`###` lines
/// become headings, the H1 line containing the title is skipped (the title
/// is already the document heading), blank lines outside code blocks are
/// dropped and every other non-empty line becomes a plain paragraph.
pub fn markdown_to_docx(content: &str, title: &str) -> Result<Vec<u8>, DocxError> {
    let mut builder = DocxBuilder::new();
    builder.add_title(title);

    let title_lower = title.to_lowercase();
    let mut in_code_block = false;
    let mut code_language = String::new();
    let mut code_lines: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.starts_with("```") {
            if in_code_block {
                builder.add_code_block(&code_language, &code_lines);
                code_lines.clear();
                code_language.clear();
                in_code_block = false;
            } else {
                in_code_block = true;
                code_language = line[3..].trim().to_string();
            }
        } else if in_code_block {
            code_lines.push(line);
        } else if line.starts_with("# ") && line.to_lowercase().contains(&title_lower) {
            // Skip the title heading, already added above.
            continue;
        } else if let Some(text) = line.strip_prefix("## ") {
            builder.add_heading(2, text);
        } else if let Some(text) = line.strip_prefix("### ") {
            builder.add_heading(3, text);
        } else if !line.trim().is_empty() {
            builder.add_paragraph(line);
        }
    }

    // Unterminated fence at end of input: flush what accumulated.
    if in_code_block {
        builder.add_code_block(&code_language, &code_lines);
    }

    builder.build(title)
}

const CONTENT_TYPES_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
<Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>\
<Override PartName=\"/word/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml\"/>\
<Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\
</Types>";

const PACKAGE_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"word/document.xml\"/>\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties\" Target=\"docProps/core.xml\"/>\
</Relationships>";

const DOCUMENT_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>\
</Relationships>";

const STYLES_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<w:styles xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
<w:style w:type=\"paragraph\" w:styleId=\"Title\">\
<w:name w:val=\"Title\"/>\
<w:rPr><w:b/><w:sz w:val=\"48\"/><w:color w:val=\"2C3E50\"/></w:rPr>\
</w:style>\
<w:style w:type=\"paragraph\" w:styleId=\"Heading2\">\
<w:name w:val=\"heading 2\"/>\
<w:pPr><w:spacing w:before=\"240\" w:after=\"120\"/></w:pPr>\
<w:rPr><w:b/><w:sz w:val=\"32\"/></w:rPr>\
</w:style>\
<w:style w:type=\"paragraph\" w:styleId=\"Heading3\">\
<w:name w:val=\"heading 3\"/>\
<w:pPr><w:spacing w:before=\"200\" w:after=\"100\"/></w:pPr>\
<w:rPr><w:b/><w:sz w:val=\"26\"/></w:rPr>\
</w:style>\
</w:styles>";
