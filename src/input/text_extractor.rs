//! Text extraction from uploaded resume bytes

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use pulldown_cmark::{Event, Parser, Tag};
use regex::Regex;
use std::io::{Cursor, Read};
use std::sync::OnceLock;

/// Uploads shorter than this after cleanup are rejected
pub const MIN_TEXT_CHARS: usize = 50;

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ResumeAnalyzerError::PdfExtraction(format!("Failed to extract text from PDF: {}", e)))
    }
}

/// Reads the paragraphs of `word/document.xml` inside a DOCX archive
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ResumeAnalyzerError::DocxExtraction(format!("Invalid or corrupt DOCX: {}", e)))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| ResumeAnalyzerError::DocxExtraction(format!("Missing document body: {}", e)))?
            .read_to_string(&mut xml)?;

        let paragraphs: Vec<String> = xml
            .split("</w:p>")
            .map(|paragraph| {
                let runs = expand_run_breaks(paragraph);
                decode_xml_entities(&xml_tag_regex().replace_all(&runs, ""))
            })
            .map(|paragraph| paragraph.trim().to_string())
            .filter(|paragraph| !paragraph.is_empty())
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Flattens Markdown to text, keeping list items as `-` bullets
pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let markdown = String::from_utf8_lossy(bytes);
        let mut text = String::new();

        for event in Parser::new(&markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::Start(Tag::Item) => text.push_str("- "),
                Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item | Tag::CodeBlock(_)) => {
                    if !text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                _ => {}
            }
        }

        Ok(text)
    }
}

/// Normalise extracted text: NULs to spaces, collapse runs of blanks, at most one empty line
pub fn clean_text(text: &str) -> String {
    static BLANKS: OnceLock<Regex> = OnceLock::new();
    static NEWLINES: OnceLock<Regex> = OnceLock::new();

    let blanks = BLANKS.get_or_init(|| Regex::new(r"[ \t]+").expect("Invalid blanks regex"));
    let newlines = NEWLINES.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid newline regex"));

    let text = text.replace('\0', " ");
    let text = blanks.replace_all(&text, " ");
    let text = newlines.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Extract and clean resume text, picking the extractor from the file name.
///
/// Files with an unrecognised extension are tried as PDF first, then DOCX.
pub fn extract_resume_text(filename: &str, bytes: &[u8]) -> Result<(String, FileType)> {
    if bytes.is_empty() {
        return Err(ResumeAnalyzerError::EmptyUpload(filename.to_string()));
    }

    let file_type = FileType::from_filename(filename);
    let (raw, detected) = match file_type {
        FileType::Pdf => (PdfExtractor.extract(bytes)?, FileType::Pdf),
        FileType::Docx => (DocxExtractor.extract(bytes)?, FileType::Docx),
        FileType::Text => (PlainTextExtractor.extract(bytes)?, FileType::Text),
        FileType::Markdown => (MarkdownExtractor.extract(bytes)?, FileType::Markdown),
        FileType::Unknown => match PdfExtractor.extract(bytes) {
            Ok(text) => (text, FileType::Pdf),
            Err(pdf_err) => {
                log::debug!("'{}' is not a readable PDF ({}), trying DOCX", filename, pdf_err);
                let text = DocxExtractor.extract(bytes).map_err(|_| {
                    ResumeAnalyzerError::UnsupportedFormat(format!(
                        "'{}' is neither a readable PDF nor DOCX",
                        filename
                    ))
                })?;
                (text, FileType::Docx)
            }
        },
    };

    Ok((clean_text(&raw), detected))
}

/// Reject text too short to analyze
pub fn ensure_min_length(text: &str, required: usize) -> Result<()> {
    let found = text.chars().count();
    if found < required {
        return Err(ResumeAnalyzerError::InsufficientText { found, required });
    }
    Ok(())
}

fn xml_tag_regex() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid XML tag regex"))
}

fn run_break_regex() -> &'static Regex {
    static BREAKS: OnceLock<Regex> = OnceLock::new();
    BREAKS.get_or_init(|| Regex::new(r"<w:(tab|br|cr)\b([^>]*)/>").expect("Invalid DOCX break regex"))
}

/// Run-level `<w:tab/>` becomes a tab and `<w:br/>`/`<w:cr/>` a newline.
/// Tab stop definitions (`w:pos`) and page or column breaks produce nothing.
fn expand_run_breaks(xml: &str) -> std::borrow::Cow<'_, str> {
    run_break_regex().replace_all(xml, |caps: &regex::Captures| {
        let attrs = &caps[2];
        match &caps[1] {
            "tab" if attrs.contains("w:pos=") => "",
            "tab" => "\t",
            "br" if attrs.contains("w:type=\"page\"") || attrs.contains("w:type=\"column\"") => "",
            _ => "\n",
        }
    })
}

fn decode_xml_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const DOCUMENT_XML: &str = r#"<w:document><w:body>
        <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
        <w:p><w:r><w:t>R&amp;D engineer, </w:t></w:r><w:r><w:t>Rust &lt;3</w:t></w:r></w:p>
        <w:p></w:p>
        <w:p><w:r><w:t>EXPERIENCE</w:t></w:r></w:p>
        </w:body></w:document>"#;

    #[test]
    fn test_clean_text() {
        let raw = "  Jane\0Doe \t\t Engineer\n\n\n\n\nSkills   \n";
        assert_eq!(clean_text(raw), "Jane Doe Engineer\n\nSkills");
    }

    #[test]
    fn test_docx_paragraphs() {
        let text = DocxExtractor.extract(&docx_bytes(DOCUMENT_XML)).unwrap();
        assert_eq!(text, "Jane Doe\nR&D engineer, Rust <3\nEXPERIENCE");
    }

    #[test]
    fn test_docx_tabs_and_line_breaks() {
        let xml = r#"<w:document><w:body>
            <w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr>
            <w:r><w:t>Skills</w:t><w:tab/><w:t>React</w:t><w:br/><w:t>- Built APIs</w:t></w:r></w:p>
            <w:p><w:r><w:t>Page one</w:t><w:br w:type="page"/><w:t>continues</w:t><w:cr/><w:t>here</w:t></w:r></w:p>
            </w:body></w:document>"#;

        let text = DocxExtractor.extract(&docx_bytes(xml)).unwrap();
        assert_eq!(text, "Skills\tReact\n- Built APIs\nPage onecontinues\nhere");
    }

    #[test]
    fn test_docx_without_body() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer.start_file("other.txt", options).unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(
            DocxExtractor.extract(&bytes),
            Err(ResumeAnalyzerError::DocxExtraction(_))
        ));
    }

    #[test]
    fn test_markdown_keeps_bullets() {
        let md = b"# Summary\n\nBackend engineer.\n\n## Experience\n\n- Built APIs\n- Cut latency by 30%\n";
        let text = MarkdownExtractor.extract(md).unwrap();

        assert!(text.contains("Summary\n"));
        assert!(text.contains("- Built APIs\n"));
        assert!(text.contains("- Cut latency by 30%"));
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_extract_dispatch() {
        let (text, file_type) = extract_resume_text("resume.txt", b"Plain   resume\n\n\n\ntext").unwrap();
        assert_eq!(file_type, FileType::Text);
        assert_eq!(text, "Plain resume\n\ntext");

        let (text, file_type) = extract_resume_text("cv.docx", &docx_bytes(DOCUMENT_XML)).unwrap();
        assert_eq!(file_type, FileType::Docx);
        assert!(text.starts_with("Jane Doe"));
    }

    #[test]
    fn test_unknown_extension_falls_back_to_docx() {
        let (text, file_type) = extract_resume_text("upload", &docx_bytes(DOCUMENT_XML)).unwrap();
        assert_eq!(file_type, FileType::Docx);
        assert!(text.contains("EXPERIENCE"));
    }

    #[test]
    fn test_unknown_garbage_is_unsupported() {
        let err = extract_resume_text("upload.bin", b"definitely not a document").unwrap_err();
        assert!(matches!(err, ResumeAnalyzerError::UnsupportedFormat(_)));
        assert!(err.is_bad_input());
    }

    #[test]
    fn test_empty_upload() {
        assert!(matches!(
            extract_resume_text("resume.pdf", b""),
            Err(ResumeAnalyzerError::EmptyUpload(_))
        ));
    }

    #[test]
    fn test_min_length() {
        assert!(ensure_min_length(&"x".repeat(50), MIN_TEXT_CHARS).is_ok());
        assert!(matches!(
            ensure_min_length("short", MIN_TEXT_CHARS),
            Err(ResumeAnalyzerError::InsufficientText { found: 5, required: 50 })
        ));
    }
}
