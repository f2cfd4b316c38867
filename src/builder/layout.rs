//! Single-column ATS layout: turns a resume document into positioned lines on pages.
//!
//! Widths are estimated at half an em per character, which is close to the
//! average advance of Helvetica. Positions are in millimetres from the bottom
//! left corner of the page, as PDF expects.

use crate::builder::resume::{clean_items, ResumeDocument};
use crate::config::PaperSize;

pub const PT_TO_MM: f32 = 0.352_778;
const CHAR_WIDTH_EM: f32 = 0.5;
const MARGIN_X_IN: f32 = 0.75;
const MARGIN_Y_IN: f32 = 0.65;
const MM_PER_IN: f32 = 25.4;
const BULLET_INDENT_PT: f32 = 12.0;
const BULLET_PREFIX: &str = "- ";
const DEFAULT_NAME: &str = "Your Name";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub leading: f32,
    pub bold: bool,
}

impl TextStyle {
    pub const NAME: TextStyle = TextStyle { size: 22.0, leading: 24.0, bold: true };
    pub const CONTACT: TextStyle = TextStyle { size: 10.2, leading: 12.0, bold: false };
    pub const HEADING: TextStyle = TextStyle { size: 11.5, leading: 14.0, bold: true };
    pub const SUBHEAD: TextStyle = TextStyle { size: 10.5, leading: 13.5, bold: true };
    pub const BODY: TextStyle = TextStyle { size: 10.2, leading: 13.0, bold: false };
    pub const MUTED: TextStyle = TextStyle { size: 9.8, leading: 12.5, bold: false };
}

/// Flow content before it is broken into lines and pages
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { text: String, style: TextStyle, centered: bool },
    Bullet(String),
    Rule,
    /// Vertical gap in points
    Space(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text { text: String, x_mm: f32, y_mm: f32, style: TextStyle },
    Rule { x1_mm: f32, x2_mm: f32, y_mm: f32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text { text, .. } => Some(text.as_str()),
            Element::Rule { .. } => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_x_mm: f32,
    pub margin_y_mm: f32,
}

impl PageGeometry {
    pub fn for_paper(paper: PaperSize) -> Self {
        let (width_mm, height_mm) = paper.dimensions_mm();
        Self {
            width_mm,
            height_mm,
            margin_x_mm: MARGIN_X_IN * MM_PER_IN,
            margin_y_mm: MARGIN_Y_IN * MM_PER_IN,
        }
    }

    pub fn content_width_mm(&self) -> f32 {
        self.width_mm - 2.0 * self.margin_x_mm
    }
}

/// Estimated rendered width of `text` at `size` points
pub fn text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * CHAR_WIDTH_EM * PT_TO_MM
}

/// Greedy word wrap. Words longer than a line are split across lines.
pub fn wrap_text(text: &str, max_width_mm: f32, size: f32) -> Vec<String> {
    let per_char = size * CHAR_WIDTH_EM * PT_TO_MM;
    let max_chars = ((max_width_mm / per_char + 1e-3).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn paragraph(text: impl Into<String>, style: TextStyle) -> Block {
    Block::Paragraph { text: text.into(), style, centered: false }
}

fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn section(blocks: &mut Vec<Block>, title: &str) {
    blocks.push(Block::Space(8.0));
    blocks.push(paragraph(title.to_uppercase(), TextStyle::HEADING));
    blocks.push(Block::Rule);
    blocks.push(Block::Space(6.0));
}

fn bullets(blocks: &mut Vec<Block>, items: &[String]) {
    blocks.extend(clean_items(items).into_iter().map(|item| Block::Bullet(item.to_string())));
}

/// Resume content as flow blocks, sections in fixed order, empty ones left out
pub fn resume_blocks(doc: &ResumeDocument) -> Vec<Block> {
    let mut blocks = Vec::new();

    let name = doc.name.trim();
    blocks.push(Block::Paragraph {
        text: if name.is_empty() { DEFAULT_NAME.to_string() } else { name.to_string() },
        style: TextStyle::NAME,
        centered: true,
    });
    blocks.push(Block::Space(6.0));

    let contact = doc.contact_parts();
    if contact.is_empty() {
        blocks.push(Block::Space(6.0));
    } else {
        blocks.push(Block::Paragraph {
            text: contact.join(" | "),
            style: TextStyle::CONTACT,
            centered: true,
        });
        blocks.push(Block::Space(10.0));
    }

    let summary = doc.summary.trim();
    if !summary.is_empty() {
        section(&mut blocks, "Summary");
        blocks.push(paragraph(summary, TextStyle::BODY));
        blocks.push(Block::Space(6.0));
    }

    if !clean_items(&doc.activities).is_empty() {
        section(&mut blocks, "Activities / Extracurricular");
        bullets(&mut blocks, &doc.activities);
        blocks.push(Block::Space(6.0));
    }

    let education: Vec<_> = doc.education.iter().filter(|e| !e.is_blank()).collect();
    if !education.is_empty() {
        section(&mut blocks, "Education");
        for entry in education {
            let headline = join_present(&[&entry.school, &entry.location], " — ");
            if !headline.is_empty() {
                blocks.push(paragraph(headline, TextStyle::SUBHEAD));
            }
            if !entry.degree.trim().is_empty() {
                blocks.push(paragraph(entry.degree.trim(), TextStyle::BODY));
            }
            if !entry.dates.trim().is_empty() {
                blocks.push(paragraph(entry.dates.trim(), TextStyle::MUTED));
            }
            blocks.push(Block::Space(6.0));
        }
    }

    let experience: Vec<_> = doc.experience.iter().filter(|e| !e.is_blank()).collect();
    if !experience.is_empty() {
        section(&mut blocks, "Experience / Internships");
        for entry in experience {
            let headline = join_present(&[&entry.role, &entry.company], " — ");
            blocks.push(paragraph(
                if headline.is_empty() { "Experience".to_string() } else { headline },
                TextStyle::SUBHEAD,
            ));
            let meta = join_present(&[&entry.location, &entry.dates], " | ");
            if !meta.is_empty() {
                blocks.push(paragraph(meta, TextStyle::MUTED));
            }
            bullets(&mut blocks, &entry.bullets);
            blocks.push(Block::Space(8.0));
        }
    }

    let projects: Vec<_> = doc.projects.iter().filter(|p| !p.is_blank()).collect();
    if !projects.is_empty() {
        section(&mut blocks, "Projects");
        for project in projects {
            let title = project.title.trim();
            let mut headline = if title.is_empty() { "Project".to_string() } else { title.to_string() };
            if !project.tech.trim().is_empty() {
                headline = format!("{} — {}", headline, project.tech.trim());
            }
            blocks.push(paragraph(headline, TextStyle::SUBHEAD));
            if !project.dates.trim().is_empty() {
                blocks.push(paragraph(project.dates.trim(), TextStyle::MUTED));
            }
            bullets(&mut blocks, &project.bullets);
            blocks.push(Block::Space(8.0));
        }
    }

    let skills = clean_items(&doc.skills_list);
    if !skills.is_empty() {
        section(&mut blocks, "Technical Skills");
        blocks.push(paragraph(skills.join(", "), TextStyle::BODY));
        blocks.push(Block::Space(6.0));
    }

    if !clean_items(&doc.certifications).is_empty() {
        section(&mut blocks, "Certifications");
        bullets(&mut blocks, &doc.certifications);
        blocks.push(Block::Space(6.0));
    }

    blocks
}

struct Cursor {
    pages: Vec<Page>,
    y_mm: f32,
    geometry: PageGeometry,
}

impl Cursor {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            pages: vec![Page::default()],
            y_mm: geometry.height_mm - geometry.margin_y_mm,
            geometry,
        }
    }

    fn top(&self) -> f32 {
        self.geometry.height_mm - self.geometry.margin_y_mm
    }

    fn at_top(&self) -> bool {
        (self.y_mm - self.top()).abs() < f32::EPSILON
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y_mm = self.top();
    }

    fn reserve(&mut self, height_mm: f32) {
        if self.y_mm - height_mm < self.geometry.margin_y_mm && !self.at_top() {
            self.new_page();
        }
    }

    fn push(&mut self, element: Element) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    fn line(&mut self, text: String, x_mm: f32, style: TextStyle) {
        let leading = style.leading * PT_TO_MM;
        self.reserve(leading);
        self.y_mm -= leading;
        self.push(Element::Text { text, x_mm, y_mm: self.y_mm, style });
    }
}

/// Break blocks into lines and distribute them over as many pages as needed
pub fn paginate(blocks: &[Block], geometry: PageGeometry) -> Vec<Page> {
    let mut cursor = Cursor::new(geometry);
    let left = geometry.margin_x_mm;
    let width = geometry.content_width_mm();

    for block in blocks {
        match block {
            Block::Paragraph { text, style, centered } => {
                for line in wrap_text(text, width, style.size) {
                    let x_mm = if *centered {
                        left + ((width - text_width_mm(&line, style.size)) / 2.0).max(0.0)
                    } else {
                        left
                    };
                    cursor.line(line, x_mm, *style);
                }
            }
            Block::Bullet(text) => {
                let style = TextStyle::BODY;
                let indent = BULLET_INDENT_PT * PT_TO_MM;
                let hang = text_width_mm(BULLET_PREFIX, style.size);
                for (i, line) in wrap_text(text, width - indent - hang, style.size).into_iter().enumerate() {
                    if i == 0 {
                        cursor.line(format!("{}{}", BULLET_PREFIX, line), left + indent, style);
                    } else {
                        cursor.line(line, left + indent + hang, style);
                    }
                }
            }
            Block::Rule => {
                let gap = 2.0 * PT_TO_MM;
                cursor.reserve(gap);
                cursor.y_mm -= gap;
                let y_mm = cursor.y_mm;
                cursor.push(Element::Rule { x1_mm: left, x2_mm: left + width, y_mm });
            }
            Block::Space(points) => {
                // gaps never carry over to the top of a fresh page
                if cursor.at_top() {
                    continue;
                }
                let gap = points * PT_TO_MM;
                if cursor.y_mm - gap < geometry.margin_y_mm {
                    cursor.new_page();
                } else {
                    cursor.y_mm -= gap;
                }
            }
        }
    }

    cursor.pages
}

pub fn layout_resume(doc: &ResumeDocument, paper: PaperSize) -> Vec<Page> {
    paginate(&resume_blocks(doc), PageGeometry::for_paper(paper))
}
