//! Output formatters: console, JSON, Markdown and HTML renderings of an analysis report

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, ResumeAnalyzerError};
use crate::output::report::AnalysisReport;
use crate::processing::metrics::Grade;
use crate::processing::recommendations::BulletRewrite;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
    detailed: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that dispatches to the formatter for each output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Analysis Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid #007acc; padding-bottom: 20px; }
        .grade { display: inline-block; padding: 8px 16px; border-radius: 20px; font-weight: bold; color: white; margin-left: 10px; }
        .grade-excellent { background: #28a745; }
        .grade-good { background: #17a2b8; }
        .grade-average { background: #ffc107; color: #000; }
        .grade-needs-work { background: #dc3545; }
        .section { margin: 25px 0; }
        .section h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 10px; }
        .metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 15px; }
        .metric { background: #f8f9fa; padding: 15px; border-radius: 6px; border-left: 4px solid #007acc; }
        .strengths, .improvements { background: #f8f9fa; padding: 15px; border-radius: 6px; }
        .strengths { border-left: 4px solid #28a745; }
        .improvements { border-left: 4px solid #ffc107; }
        .chip { display: inline-block; padding: 2px 10px; margin: 3px; border-radius: 12px; background: #e9ecef; }
        .chip-missing { background: #f8d7da; }
        .chip-matched { background: #d4edda; }
        .pass { color: #28a745; }
        .fail { color: #dc3545; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
        ul { margin: 10px 0; }
        li { margin: 5px 0; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Analysis Report</h1>
            <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        </div>

        <div class="section">
            <h2>Overview</h2>
            <h3>Overall Score: {{ overall_score }}/10 <span class="grade {{ grade_class }}">{{ grade }}</span></h3>
            {% if has_job %}<p><strong>Job match:</strong> {{ match_percent }}%</p>{% endif %}
            <p>{{ executive_summary }}</p>
            <div class="metrics">
                {% for metric in metrics %}
                <div class="metric"><h4>{{ metric.name }}</h4><p><strong>{{ metric.value }}</strong> / 10</p></div>
                {% endfor %}
            </div>
        </div>

        <div class="section">
            <h2>Strengths</h2>
            <div class="strengths"><ul>{% for item in strengths %}<li>{{ item }}</li>{% endfor %}</ul></div>
        </div>

        <div class="section">
            <h2>Improvements</h2>
            <div class="improvements"><ul>{% for item in improvements %}<li>{{ item }}</li>{% endfor %}</ul></div>
        </div>

        {% if has_job %}
        <div class="section">
            <h2>Keywords</h2>
            <h4>Matched</h4>
            <p>{% for k in matched_keywords %}<span class="chip chip-matched">{{ k }}</span>{% endfor %}</p>
            <h4>Missing</h4>
            <p>{% for k in missing_keywords %}<span class="chip chip-missing">{{ k }}</span>{% endfor %}</p>
        </div>
        {% endif %}

        <div class="section">
            <h2>ATS Checklist</h2>
            <ul>
            {% for check in checks %}
                <li>{% if check.passed %}<span class="pass">&#10003;</span> {{ check.label }}{% else %}<span class="fail">&#10007;</span> {{ check.label }} ({{ check.tip }}){% endif %}</li>
            {% endfor %}
            </ul>
        </div>

        <div class="section">
            <h2>Recommended Roles</h2>
            <ol>{% for role in roles %}<li>{{ role }}</li>{% endfor %}</ol>
            <p>{{ role_reason }}</p>
        </div>

        <div class="section">
            <h2>Skills to Add</h2>
            <p><strong>First:</strong> {% for k in add_first %}<span class="chip">{{ k }}</span>{% endfor %}</p>
            <p><strong>Next:</strong> {% for k in add_next %}<span class="chip">{{ k }}</span>{% endfor %}</p>
            <p><strong>Later:</strong> {% for k in add_later %}<span class="chip">{{ k }}</span>{% endfor %}</p>
        </div>

        <div class="section">
            <h2>Learning Plan</h2>
            <ul>{% for step in learning_plan %}<li>{{ step }}</li>{% endfor %}</ul>
            <h3>Project Ideas</h3>
            <ul>{% for idea in project_ideas %}<li>{{ idea }}</li>{% endfor %}</ul>
        </div>

        {% if !bullet_rewrites.is_empty() %}
        <div class="section">
            <h2>Bullet Rewrites</h2>
            <ul>
            {% for rewrite in bullet_rewrites %}
                <li><em>{{ rewrite.original }}</em><br>{{ rewrite.suggestion }}</li>
            {% endfor %}
            </ul>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Generated by resume-analyzer v{{ version }}</strong></p>
            <p><strong>Resume:</strong> {{ resume_file }} ({{ file_type }}) | <strong>Job:</strong> {{ job_source }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    overall_score: String,
    grade: String,
    grade_class: &'static str,
    has_job: bool,
    match_percent: u8,
    executive_summary: String,
    metrics: Vec<HtmlMetric>,
    strengths: Vec<String>,
    improvements: Vec<String>,
    matched_keywords: Vec<String>,
    missing_keywords: Vec<String>,
    checks: Vec<HtmlCheck>,
    roles: Vec<String>,
    role_reason: String,
    add_first: Vec<String>,
    add_next: Vec<String>,
    add_later: Vec<String>,
    learning_plan: Vec<String>,
    project_ideas: Vec<String>,
    bullet_rewrites: Vec<BulletRewrite>,
    version: String,
    resume_file: String,
    file_type: String,
    job_source: String,
}

struct HtmlMetric {
    name: &'static str,
    value: String,
}

struct HtmlCheck {
    label: String,
    passed: bool,
    tip: String,
}

/// Drop Markdown bold markers for renderers that are not Markdown
fn plain(text: &str) -> String {
    text.replace("**", "")
}

fn metric_rows(report: &AnalysisReport) -> [(&'static str, f64); 4] {
    let a = &report.analysis;
    [
        ("Formatting", a.formatting),
        ("Content Quality", a.content_quality),
        ("ATS Compatibility", a.ats_compatibility),
        ("Keyword Usage", a.keyword_usage),
    ]
}

fn format_timestamp(report: &AnalysisReport) -> String {
    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_grade_badge(&self, grade: Grade) -> String {
        let color = match grade {
            Grade::Excellent => Color::Green,
            Grade::Good => Color::BrightGreen,
            Grade::Average => Color::Yellow,
            Grade::NeedsWork => Color::Red,
        };
        let badge = grade.as_str().to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_bar(&self, score: f64) -> String {
        let filled = score.round().clamp(0.0, 10.0) as usize;
        let bar = format!("{}{}", "■".repeat(filled), "□".repeat(10 - filled));
        let color = if score >= 8.0 {
            Color::Green
        } else if score >= 6.0 {
            Color::Yellow
        } else {
            Color::Red
        };
        self.colorize(&bar, color)
    }

    fn push_list(&self, output: &mut String, items: &[String], color: Color) {
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let a = &report.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            format_timestamp(report),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Overview", 2));
        output.push_str(&format!(
            "Overall Score: {:.1}/10 {}\n",
            a.overall_score,
            self.format_grade_badge(a.grade_label)
        ));
        if report.has_job_description() {
            output.push_str(&format!("Job Match: {}%\n", a.match_percent));
        }
        output.push_str(&format!("\n{}\n", self.colorize(&plain(&a.executive_summary), Color::Cyan)));

        output.push_str(&self.format_header("Metrics", 3));
        for (name, score) in metric_rows(report) {
            output.push_str(&format!("  {:<18} {} {:.1}\n", name, self.format_bar(score), score));
        }

        if !a.strengths.is_empty() {
            output.push_str(&self.format_header("Strengths", 3));
            self.push_list(&mut output, &a.strengths, Color::Green);
        }
        if !a.improvements.is_empty() {
            output.push_str(&self.format_header("Improvements", 3));
            self.push_list(&mut output, &a.improvements, Color::Yellow);
        }

        if report.has_job_description() {
            output.push_str(&self.format_header("Keywords", 2));
            output.push_str(&format!(
                "{} {}\n",
                self.colorize("Matched:", Color::Green),
                a.matched_keywords.join(", ")
            ));
            output.push_str(&format!(
                "{} {}\n",
                self.colorize("Missing:", Color::Red),
                a.missing_keywords.join(", ")
            ));
        }
        if !a.suggested_keywords.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                self.colorize("Suggested:", Color::Cyan),
                a.suggested_keywords.join(", ")
            ));
        }

        output.push_str(&self.format_header("ATS Checklist", 2));
        for check in &a.ats_checklist {
            if check.passed {
                output.push_str(&format!("  {} {}\n", self.colorize("[x]", Color::Green), check.label));
            } else {
                output.push_str(&format!(
                    "  {} {} - {}\n",
                    self.colorize("[ ]", Color::Red),
                    check.label,
                    check.tip
                ));
            }
        }

        output.push_str(&self.format_header("Recommended Roles", 2));
        for (i, role) in a.recommended_roles.iter().take(5).enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, role));
        }
        output.push_str(&format!("{}\n", plain(&a.role_reason)));

        let priority = &a.skill_priority;
        if !priority.add_first.is_empty() {
            output.push_str(&self.format_header("Skills to Add", 3));
            output.push_str(&format!("  First: {}\n", priority.add_first.join(", ")));
            if !priority.add_next.is_empty() {
                output.push_str(&format!("  Next:  {}\n", priority.add_next.join(", ")));
            }
            if !priority.add_later.is_empty() {
                output.push_str(&format!("  Later: {}\n", priority.add_later.join(", ")));
            }
        }

        output.push_str(&self.format_header("Learning Plan", 2));
        for (i, step) in a.learning_plan.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, step));
        }

        output.push_str(&self.format_header("Project Ideas", 3));
        self.push_list(&mut output, &a.project_ideas, Color::White);

        if self.detailed {
            output.push_str(&self.format_header("Role Fit Breakdown", 2));
            let hits: Vec<String> = a
                .role_fit_breakdown
                .bucket_hits
                .iter()
                .map(|hit| format!("{} ({})", hit.bucket, hit.hits))
                .collect();
            output.push_str(&format!("Skill buckets: {}\n", if hits.is_empty() { "none".to_string() } else { hits.join(", ") }));
            for score in &a.role_fit_breakdown.role_scores {
                output.push_str(&format!(
                    "  {:<30} score {:>3} (must {}, nice {}, buckets {}, jd {})\n",
                    score.role, score.score, score.must_hits, score.nice_hits, score.bucket_score, score.jd_bonus
                ));
            }

            if !a.bullet_rewrites.is_empty() {
                output.push_str(&self.format_header("Bullet Rewrites", 2));
                for rewrite in &a.bullet_rewrites {
                    output.push_str(&format!("  - {}\n", self.colorize(&rewrite.original, Color::BrightBlack)));
                    output.push_str(&format!("    {}\n", rewrite.suggestion));
                }
            }

            output.push_str(&self.format_header("Resume Preview", 3));
            output.push_str(&report.metadata.resume_preview);
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let a = &report.analysis;
        let grade_class = match a.grade_label {
            Grade::Excellent => "grade-excellent",
            Grade::Good => "grade-good",
            Grade::Average => "grade-average",
            Grade::NeedsWork => "grade-needs-work",
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: format_timestamp(report),
            processing_time: report.metadata.processing_time_ms,
            overall_score: format!("{:.1}", a.overall_score),
            grade: a.grade_label.to_string(),
            grade_class,
            has_job: report.has_job_description(),
            match_percent: a.match_percent,
            executive_summary: plain(&a.executive_summary),
            metrics: metric_rows(report)
                .into_iter()
                .map(|(name, value)| HtmlMetric {
                    name,
                    value: format!("{:.1}", value),
                })
                .collect(),
            strengths: a.strengths.clone(),
            improvements: a.improvements.clone(),
            matched_keywords: a.matched_keywords.clone(),
            missing_keywords: a.missing_keywords.clone(),
            checks: a
                .ats_checklist
                .iter()
                .map(|check| HtmlCheck {
                    label: check.label.clone(),
                    passed: check.passed,
                    tip: check.tip.clone(),
                })
                .collect(),
            roles: a.recommended_roles.iter().take(5).cloned().collect(),
            role_reason: plain(&a.role_reason),
            add_first: a.skill_priority.add_first.clone(),
            add_next: a.skill_priority.add_next.clone(),
            add_later: a.skill_priority.add_later.clone(),
            learning_plan: a.learning_plan.clone(),
            project_ideas: a.project_ideas.clone(),
            bullet_rewrites: a.bullet_rewrites.clone(),
            version: report.metadata.analyzer_version.clone(),
            resume_file: report.metadata.resume_file.clone(),
            file_type: report.metadata.file_type.to_string(),
            job_source: report.metadata.job_source.to_string(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeAnalyzerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, detailed: bool) -> Self {
        Self { include_metadata, detailed }
    }

    fn bullet_list(output: &mut String, items: &[String]) {
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }

    fn code_list(items: &[String]) -> String {
        if items.is_empty() {
            "_none_".to_string()
        } else {
            items.iter().map(|k| format!("`{}`", k)).collect::<Vec<_>>().join(", ")
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let a = &report.analysis;
        let mut output = String::new();

        output.push_str("# Resume Analysis Report\n\n");

        if self.include_metadata {
            let resume_name = Path::new(&report.metadata.resume_file)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.resume_file.clone());
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                format_timestamp(report),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` ({}) | **Job:** {}\n\n",
                resume_name, report.metadata.file_type, report.metadata.job_source
            ));
        }

        output.push_str("## Overview\n\n");
        output.push_str(&format!(
            "**Overall Score:** {:.1}/10 | **Grade:** {}",
            a.overall_score, a.grade_label
        ));
        if report.has_job_description() {
            output.push_str(&format!(" | **Match:** {}%", a.match_percent));
        }
        output.push_str("\n\n");
        output.push_str(&format!("{}\n\n", a.executive_summary));

        output.push_str("| Metric | Score |\n");
        output.push_str("|--------|-------|\n");
        for (name, score) in metric_rows(report) {
            output.push_str(&format!("| {} | {:.1} |\n", name, score));
        }
        output.push('\n');

        output.push_str("### Strengths\n\n");
        Self::bullet_list(&mut output, &a.strengths);
        output.push_str("### Improvements\n\n");
        Self::bullet_list(&mut output, &a.improvements);

        if report.has_job_description() {
            output.push_str("## Keywords\n\n");
            output.push_str(&format!("**Matched:** {}\n\n", Self::code_list(&a.matched_keywords)));
            output.push_str(&format!("**Missing:** {}\n\n", Self::code_list(&a.missing_keywords)));
        }
        output.push_str(&format!("**Suggested:** {}\n\n", Self::code_list(&a.suggested_keywords)));

        output.push_str("## ATS Checklist\n\n");
        for check in &a.ats_checklist {
            if check.passed {
                output.push_str(&format!("- [x] {}\n", check.label));
            } else {
                output.push_str(&format!("- [ ] {} ({})\n", check.label, check.tip));
            }
        }
        output.push('\n');

        output.push_str("## Recommended Roles\n\n");
        for (i, role) in a.recommended_roles.iter().take(5).enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, role));
        }
        output.push_str(&format!("\n{}\n\n", a.role_reason));

        output.push_str("## Skill Priority\n\n");
        output.push_str(&format!("- **Add first:** {}\n", Self::code_list(&a.skill_priority.add_first)));
        output.push_str(&format!("- **Add next:** {}\n", Self::code_list(&a.skill_priority.add_next)));
        output.push_str(&format!("- **Add later:** {}\n\n", Self::code_list(&a.skill_priority.add_later)));

        output.push_str("## Learning Plan\n\n");
        for (i, step) in a.learning_plan.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, step));
        }
        output.push_str("\n### Project Ideas\n\n");
        Self::bullet_list(&mut output, &a.project_ideas);

        if !a.bullet_rewrites.is_empty() {
            output.push_str("## Bullet Rewrites\n\n");
            for rewrite in &a.bullet_rewrites {
                output.push_str(&format!("- *{}*\n  - {}\n", rewrite.original, rewrite.suggestion));
            }
            output.push('\n');
        }

        if self.detailed {
            output.push_str("## Role Fit Breakdown\n\n");
            output.push_str("| Role | Score | Must | Nice | Buckets | JD |\n");
            output.push_str("|------|-------|------|------|---------|----|\n");
            for s in &a.role_fit_breakdown.role_scores {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} |\n",
                    s.role, s.score, s.must_hits, s.nice_hits, s.bucket_score, s.jd_bonus
                ));
            }
            output.push('\n');
        }

        output.push_str("---\n");
        output.push_str(&format!(
            "*Generated by resume-analyzer v{}*\n",
            report.metadata.analyzer_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata, detailed),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(config.color_output, config.detailed, config.pretty_json, true, true)
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        };
        debug_assert_eq!(formatter.supports_format(), *format);
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}
