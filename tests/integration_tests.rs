//! Integration tests for the resume analyzer

use resume_analyzer::builder::{layout, render_resume_pdf, suggested_pdf_filename, ResumeDocument};
use resume_analyzer::config::{BuilderConfig, Config, OutputFormat, PaperSize};
use resume_analyzer::input::manager::InputManager;
use resume_analyzer::input::FileType;
use resume_analyzer::output::{AnalysisReport, JobSource, ReportGenerator, ReportMetadata};
use resume_analyzer::processing::metrics::Grade;
use resume_analyzer::processing::text_processor::TextProcessor;
use resume_analyzer::{ResumeAnalyzer, ResumeAnalyzerError};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

const FRONTEND_RESUME: &str = "Jane Doe\njane@example.com\n\
    SKILLS\nReact, JavaScript, CSS, HTML\n\
    EXPERIENCE\n- Built a storefront used by 500 shoppers\n- Designed reusable form components\n";

fn analyzer() -> ResumeAnalyzer {
    ResumeAnalyzer::new().unwrap()
}

async fn fixture_text(name: &str) -> String {
    let mut manager = InputManager::new();
    manager
        .extract_text(&Path::new("tests/fixtures").join(name))
        .await
        .unwrap()
        .text
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let extracted = manager.load_resume(path).await.unwrap();
    assert_eq!(extracted.file_type, FileType::Text);
    assert!(extracted.text.contains("John Doe"));
    assert!(extracted.text.contains("Software Engineer"));
    assert!(extracted.text.contains("React"));
    assert!(extracted.text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let extracted = manager.load_resume(path).await.unwrap();
    assert_eq!(extracted.file_type, FileType::Markdown);
    assert!(extracted.text.contains("John Doe"));
    assert!(extracted.text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!extracted.text.contains("**"));
    assert!(!extracted.text.contains("##"));
    assert!(extracted.text.contains("- Built a customer dashboard"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let err = manager.extract_text(path).await.unwrap_err();
    assert!(matches!(err, ResumeAnalyzerError::UnsupportedFormat(_)));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    assert!(manager.extract_text(path).await.is_err());
}

#[test]
fn test_plain_prose_without_job_description() {
    let prose = "I enjoy working with people and learning new things daily ".repeat(6);
    assert_eq!(prose.split_whitespace().count(), 60);

    let result = analyzer().analyze(&prose, "");

    assert_eq!(result.formatting, 6.5);
    assert_eq!(result.content_quality, 6.0);
    assert_eq!(result.match_percent, 0);
    assert_eq!(result.keyword_usage, 6.5);
    assert_eq!(result.grade_label, Grade::from_score(result.overall_score));
}

#[test]
fn test_bulleted_experience_formatting() {
    let mut resume = String::from("EXPERIENCE\n");
    for i in 0..12 {
        resume.push_str(&format!("- Item number {}\n", i));
    }

    let result = analyzer().analyze(&resume, "");
    assert_eq!(result.formatting, 9.0);
}

#[test]
fn test_frontend_resume_recommends_frontend_role() {
    let result = analyzer().analyze(FRONTEND_RESUME, "");
    assert_eq!(result.recommended_roles[0], "Frontend Developer (React)");
}

#[tokio::test]
async fn test_repeated_job_keyword_ranks_first() {
    let resume = fixture_text("sample_resume.txt").await;
    let jd = format!("{}terraform engineer", "kubernetes ".repeat(10));

    let result = analyzer().analyze(&resume, &jd);

    assert!(result.missing_keywords.contains(&"kubernetes".to_string()));
    assert!(result.missing_keywords.contains(&"terraform".to_string()));
    assert!(result.matched_keywords.contains(&"engineer".to_string()));

    let first = &result.skill_priority.add_first;
    let kubernetes = first.iter().position(|k| k == "kubernetes").unwrap();
    let terraform = first.iter().position(|k| k == "terraform").unwrap();
    assert!(kubernetes < terraform);
}

#[tokio::test]
async fn test_keyword_lists_partition_job_keywords() {
    let resume = fixture_text("sample_resume.txt").await;
    let jd = fixture_text("job_description.txt").await;

    let result = analyzer().analyze(&resume, &jd);
    let matched: HashSet<_> = result.matched_keywords.iter().collect();
    let missing: HashSet<_> = result.missing_keywords.iter().collect();

    assert!(matched.is_disjoint(&missing));
    assert!(result.matched_keywords.len() <= 25);
    assert!(result.missing_keywords.len() <= 25);

    let top: HashSet<String> = TextProcessor::new().top_keywords(&jd, 45).into_iter().collect();
    assert!(matched.iter().chain(missing.iter()).all(|k| top.contains(*k)));
    if matched.len() < 25 && missing.len() < 25 {
        assert_eq!(matched.len() + missing.len(), top.len());
    }

    assert!(result.match_percent > 0 && result.match_percent <= 100);
    assert!((0.0..=10.0).contains(&result.overall_score));
    assert!(result.recommended_roles.len() <= 10);
}

#[tokio::test]
async fn test_skill_tiers_are_disjoint() {
    let resume = fixture_text("sample_resume.md").await;
    let jd = fixture_text("job_description.txt").await;

    for job in [jd.as_str(), ""] {
        let priority = analyzer().analyze(&resume, job).skill_priority;
        let mut seen = HashSet::new();
        for skill in priority.add_first.iter().chain(&priority.add_next).chain(&priority.add_later) {
            assert!(seen.insert(skill.clone()), "duplicate skill {}", skill);
        }
    }
}

#[tokio::test]
async fn test_analysis_is_idempotent() {
    let resume = fixture_text("sample_resume.txt").await;
    let jd = fixture_text("job_description.txt").await;
    let analyzer = analyzer();

    let first = serde_json::to_string(&analyzer.analyze(&resume, &jd)).unwrap();
    let second = serde_json::to_string(&analyzer.analyze(&resume, &jd)).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_analyzer_shared_across_threads() {
    let resume = fixture_text("sample_resume.txt").await;
    let jd = fixture_text("job_description.txt").await;
    let analyzer = Arc::new(analyzer());
    let expected = analyzer.analyze(&resume, &jd);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            let (resume, jd) = (resume.clone(), jd.clone());
            std::thread::spawn(move || analyzer.analyze(&resume, &jd))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[tokio::test]
async fn test_report_generation_end_to_end() {
    let mut manager = InputManager::new();
    let resume = manager
        .load_resume(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let jd = manager
        .load_job_description(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();

    let config = Config::default();
    let analysis = ResumeAnalyzer::from_config(&config).unwrap().analyze(&resume.text, &jd);
    let metadata = ReportMetadata::new(
        "tests/fixtures/sample_resume.txt",
        resume.file_type,
        JobSource::File("tests/fixtures/job_description.txt".to_string()),
        &resume.text,
        config.input.preview_chars,
        0,
    );
    let report = AnalysisReport::new(analysis, metadata);
    let generator = ReportGenerator::with_options(false, true, true, true, true);

    let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["analysis"]["ats_checklist"].as_array().unwrap().len(), 6);
    assert!(value["analysis"]["match_percent"].as_u64().unwrap() > 0);

    let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
    assert!(markdown.contains("## Keywords"));

    let html = generator.generate_report(&report, &OutputFormat::Html).unwrap();
    assert!(html.contains("Resume Analysis Report"));

    let console = generator.generate_report(&report, &OutputFormat::Console).unwrap();
    assert!(console.contains("Job Match:"));
}

#[tokio::test]
async fn test_builder_renders_fixture() {
    let document = ResumeDocument::from_file(Path::new("tests/fixtures/sample_resume.json"))
        .await
        .unwrap();
    assert_eq!(suggested_pdf_filename(&document.name), "John_Doe_ATS.pdf");

    let pages = layout::layout_resume(&document, PaperSize::Letter);
    let texts: Vec<&str> = pages.iter().flat_map(|page| page.texts()).collect();
    assert!(texts.contains(&"EXPERIENCE / INTERNSHIPS"));
    assert!(texts.contains(&"Recipe finder — React, Node.js, PostgreSQL"));
    assert!(!texts.iter().any(|t| t.contains("Entry without a header")));
    assert!(!texts.contains(&"CERTIFICATIONS"));

    let bytes = render_resume_pdf(&document, &BuilderConfig { paper: PaperSize::Letter }).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
