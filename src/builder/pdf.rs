//! PDF rendering of laid-out resume pages with the built-in Helvetica fonts

use crate::builder::layout::{layout_resume, Element, PageGeometry};
use crate::builder::resume::ResumeDocument;
use crate::config::BuilderConfig;
use crate::error::{Result, ResumeAnalyzerError};
use log::debug;
use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};

const DOCUMENT_TITLE: &str = "ATS Resume";
const LAYER_NAME: &str = "Layer 1";
const RULE_THICKNESS_PT: f32 = 0.5;

fn render_error(e: impl std::fmt::Display) -> ResumeAnalyzerError {
    ResumeAnalyzerError::PdfRender(e.to_string())
}

/// Map typography the built-in fonts cannot encode onto plain equivalents
fn font_safe(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '—' | '–' | '‒' | '−' => '-',
            '‘' | '’' | '‚' => '\'',
            '“' | '”' | '„' => '"',
            '•' | '·' => '-',
            '\u{a0}' => ' ',
            c if (c as u32) < 0x100 => c,
            _ => '?',
        })
        .collect()
}

/// Render a resume document to PDF bytes
pub fn render_resume_pdf(doc: &ResumeDocument, config: &BuilderConfig) -> Result<Vec<u8>> {
    let pages = layout_resume(doc, config.paper);
    let geometry = PageGeometry::for_paper(config.paper);
    let (width, height) = (Mm(geometry.width_mm), Mm(geometry.height_mm));

    let (pdf, first_page, first_layer) = PdfDocument::new(DOCUMENT_TITLE, width, height, LAYER_NAME);
    let regular = pdf.add_builtin_font(BuiltinFont::Helvetica).map_err(render_error)?;
    let bold = pdf.add_builtin_font(BuiltinFont::HelveticaBold).map_err(render_error)?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = pdf.add_page(width, height, LAYER_NAME);
            pdf.get_page(page_index).get_layer(layer_index)
        };

        for element in &page.elements {
            match element {
                Element::Text { text, x_mm, y_mm, style } => {
                    let font = if style.bold { &bold } else { &regular };
                    layer.use_text(font_safe(text), style.size, Mm(*x_mm), Mm(*y_mm), font);
                }
                Element::Rule { x1_mm, x2_mm, y_mm } => {
                    layer.set_outline_thickness(RULE_THICKNESS_PT);
                    layer.add_line(Line {
                        points: vec![
                            (Point::new(Mm(*x1_mm), Mm(*y_mm)), false),
                            (Point::new(Mm(*x2_mm), Mm(*y_mm)), false),
                        ],
                        is_closed: false,
                    });
                }
            }
        }
    }

    let bytes = pdf.save_to_bytes().map_err(render_error)?;
    debug!("Rendered resume PDF: {} page(s), {} bytes", pages.len(), bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::resume::ExperienceEntry;
    use crate::config::PaperSize;

    #[test]
    fn test_font_safe() {
        assert_eq!(font_safe("Engineer — Acme"), "Engineer - Acme");
        assert_eq!(font_safe("“café” it’s"), "\"café\" it's");
        assert_eq!(font_safe("日本"), "??");
    }

    #[test]
    fn test_renders_pdf_bytes() {
        let doc = ResumeDocument {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            experience: vec![ExperienceEntry {
                role: "Engineer".to_string(),
                company: "Engines".to_string(),
                bullets: vec!["Wrote the first program".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };

        for paper in [PaperSize::Letter, PaperSize::A4] {
            let bytes = render_resume_pdf(&doc, &BuilderConfig { paper }).unwrap();
            assert!(bytes.starts_with(b"%PDF"));
        }
    }

    #[test]
    fn test_empty_document_still_renders() {
        let bytes = render_resume_pdf(&ResumeDocument::default(), &BuilderConfig { paper: PaperSize::Letter }).unwrap();
        assert!(!bytes.is_empty());
    }
}
