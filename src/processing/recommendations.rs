//! Skill-gap prioritisation and the advice text built on top of the scores

use crate::processing::metrics::{content_lines, is_bullet, Grade, MetricScorer};
use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const FIRST_TIER: usize = 6;
const NEXT_TIER: usize = 6;
const LATER_TIER: usize = 8;
const TOP_SKILLS_CAP: usize = 12;

const LEARNING_PLAN_CAP: usize = 8;
const PROJECT_IDEAS_CAP: usize = 7;
const BULLET_REWRITES_CAP: usize = 10;
pub const STRENGTHS_CAP: usize = 4;
pub const IMPROVEMENTS_CAP: usize = 5;

pub const ROLE_REASON_RESUME_ONLY: &str =
    "Based on the strongest skill signals found in your resume (buckets + role profile matches).";

const GENERIC_PROJECT_IDEA: &str =
    "Build a project that proves your top missing skills and add measurable results.";

const NUMERIC_REWRITE_TEMPLATE: &str = "Example rewrite: Built/Implemented <feature> using <tech> to achieve <result with number> \
     (e.g., reduced load time by 35%, improved accuracy to 92%, served 5k users).";

/// Canned project pairs, matched by substring against the lowercased role name
const PROJECT_FAMILIES: &[(&[&str], [&str; 2])] = &[
    (
        &["frontend", "react"],
        [
            "Build a React dashboard (routing + charts + filters) and deploy it.",
            "Create a component library (buttons/forms/modals) with accessibility.",
        ],
    ),
    (
        &["backend", "api"],
        [
            "Build a REST API with JWT auth + CRUD + validation + documentation.",
            "Add Redis caching + rate limiting and show performance improvements.",
        ],
    ),
    (
        &["full stack"],
        [
            "Build a full-stack job tracker: React + API + Postgres + auth.",
            "Deploy with Docker + CI/CD (GitHub Actions).",
        ],
    ),
    (
        &["data analyst"],
        [
            "Build a Power BI/Tableau dashboard with SQL queries + KPI metrics.",
            "Automate a report pipeline using Python + pandas + scheduling.",
        ],
    ),
    (
        &["qa", "test"],
        [
            "Add Cypress/Selenium automation suite for a sample web app.",
            "Write API test collection + integrate into CI pipeline.",
        ],
    ),
    (
        &["devops", "cloud"],
        [
            "Dockerize an app + deploy to cloud with CI/CD pipeline.",
            "Set up monitoring + alerts (basic logs + uptime).",
        ],
    ),
    (
        &["embedded"],
        [
            "Write firmware for sensor reading + UART/I2C communication with logs.",
            "Implement RTOS task scheduling demo and measure latency.",
        ],
    ),
    (
        &["iot"],
        [
            "Build IoT sensor project sending data via MQTT to a dashboard.",
            "Use ESP32 + cloud IoT + alerts for threshold events.",
        ],
    ),
    (
        &["rtl", "vlsi"],
        [
            "Design and simulate an RTL block (FIFO/ALU) in Verilog and verify with testbench.",
            "Run FPGA demo (simple pipeline) and document timing results.",
        ],
    ),
    (
        &["network"],
        [
            "Create a small home-lab network setup doc: VLANs + routing + firewall rules.",
            "Wireshark capture analysis report (TCP handshake, retransmits, DNS).",
        ],
    ),
];

/// Missing skills split into three disjoint tiers of decreasing urgency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillPriority {
    #[serde(default)]
    pub add_first: Vec<String>,
    #[serde(default)]
    pub add_next: Vec<String>,
    #[serde(default)]
    pub add_later: Vec<String>,
}

impl SkillPriority {
    /// Slice an already ranked candidate list into 6 / 6 / 8 windows
    pub fn from_ranked(candidates: &[String]) -> Self {
        let mut seen = HashSet::new();
        let unique: Vec<String> = candidates
            .iter()
            .filter(|c| !c.is_empty() && seen.insert(c.as_str()))
            .cloned()
            .collect();

        let window = |start: usize, len: usize| -> Vec<String> {
            unique.iter().skip(start).take(len).cloned().collect()
        };

        Self {
            add_first: window(0, FIRST_TIER),
            add_next: window(FIRST_TIER, NEXT_TIER),
            add_later: window(FIRST_TIER + NEXT_TIER, LATER_TIER),
        }
    }

    /// Rank missing keywords by how often the job description mentions them
    pub fn from_job_description(processor: &TextProcessor, missing: &[String], jd_text: &str) -> Self {
        if missing.is_empty() || jd_text.trim().is_empty() {
            return Self::from_ranked(missing);
        }

        let frequencies: HashMap<String, usize> = processor.token_frequencies(jd_text).into_iter().collect();
        let mut ranked = missing.to_vec();
        // stable: equal counts keep overlap order
        ranked.sort_by(|a, b| {
            let fa = frequencies.get(&a.to_lowercase()).copied().unwrap_or(0);
            let fb = frequencies.get(&b.to_lowercase()).copied().unwrap_or(0);
            fb.cmp(&fa)
        });

        Self::from_ranked(&ranked)
    }

    pub fn top_skills(&self) -> Vec<String> {
        self.add_first
            .iter()
            .chain(self.add_next.iter())
            .take(TOP_SKILLS_CAP)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletRewrite {
    pub original: String,
    pub suggestion: String,
}

pub fn learning_plan(best_role: &str, priority: &SkillPriority, improvements: &[String]) -> Vec<String> {
    let first = head(&priority.add_first, 4);
    let next = head(&priority.add_next, 4);
    let later = head(&priority.add_later, 4);

    let mut plan = vec![format!(
        "Target Role: {} — align your Skills + Projects with this role.",
        best_role
    )];

    if !first.is_empty() {
        plan.push(format!(
            "Week 1–2: Learn {} and add 1 project + 2 bullets proving it.",
            first
        ));
    }
    if !next.is_empty() {
        plan.push(format!(
            "Week 3–4: Add {} and improve ATS keywords across Experience.",
            next
        ));
    }
    if !later.is_empty() {
        plan.push(format!("Later: Explore {} (optional/advanced).", later));
    }

    plan.extend(
        improvements
            .iter()
            .take(2)
            .map(|imp| format!("Resume Upgrade: {}", imp)),
    );
    plan.push("Always: add measurable impact in bullets (%, time saved, users, accuracy, cost).".to_string());

    plan.truncate(LEARNING_PLAN_CAP);
    plan
}

pub fn project_ideas(best_role: &str, priority: &SkillPriority) -> Vec<String> {
    let role_lower = best_role.to_lowercase();

    let mut ideas: Vec<String> = PROJECT_FAMILIES
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| role_lower.contains(*m)))
        .map(|(_, pair)| pair.iter().map(|idea| idea.to_string()).collect())
        .unwrap_or_else(|| vec![GENERIC_PROJECT_IDEA.to_string()]);

    let first = head(&priority.add_first, 4);
    if !first.is_empty() {
        ideas.push(format!("Add these skills into projects: {}.", first));
    }

    ideas.truncate(PROJECT_IDEAS_CAP);
    ideas
}

/// Suggestions for the first bullet lines: elaborate quantified ones, template the rest
pub fn bullet_rewrites(scorer: &MetricScorer, text: &str) -> Vec<BulletRewrite> {
    content_lines(text)
        .into_iter()
        .filter(|line| is_bullet(line))
        .take(BULLET_REWRITES_CAP)
        .map(|line| {
            let original = line
                .trim_start_matches(|c| matches!(c, '-' | '•' | '*' | ' '))
                .trim()
                .to_string();

            let suggestion = if scorer.has_number(&original) {
                format!(
                    "Improve: {} (add more context: tools used + why it mattered + measurable outcome).",
                    original
                )
            } else {
                NUMERIC_REWRITE_TEMPLATE.to_string()
            };

            BulletRewrite { original, suggestion }
        })
        .collect()
}

/// Strengths unlocked by high formatting, content and keyword scores
pub fn strengths_from_metrics(formatting: f64, content: f64, keywords: f64) -> Vec<String> {
    let mut strengths = Vec::new();
    if formatting >= 8.0 {
        strengths.push("ATS-friendly structure with clear headings and spacing.".to_string());
    }
    if content >= 8.0 {
        strengths.push("Good use of action verbs and measurable outcomes.".to_string());
    }
    if keywords >= 8.0 {
        strengths.push("Strong keyword alignment with the job description.".to_string());
    }
    if strengths.is_empty() {
        strengths.push("Your resume is a solid base — with small tweaks it can rank much higher.".to_string());
    }
    strengths.truncate(STRENGTHS_CAP);
    strengths
}

pub fn improvements_from_metrics(formatting: f64, content: f64, keywords: f64, missing: &[String]) -> Vec<String> {
    let mut improvements = Vec::new();
    if keywords < 8.0 && !missing.is_empty() {
        improvements.push("Add missing keywords naturally into Skills + Experience bullets.".to_string());
    }
    if content < 8.0 {
        improvements.push("Use more action verbs + numbers (impact, %, time saved, accuracy, users).".to_string());
    }
    if formatting < 8.0 {
        improvements.push("Use consistent bullet points and section headings (Experience, Skills, Education).".to_string());
    }
    improvements.push("Tailor the top summary to match the role in 2–3 lines.".to_string());
    improvements.truncate(IMPROVEMENTS_CAP);
    improvements
}

pub fn resume_only_strengths() -> Vec<String> {
    vec![
        "Your resume has a clean structure and readable formatting.".to_string(),
        "You can increase impact by adding measurable results in bullets.".to_string(),
    ]
}

pub fn resume_only_improvements() -> Vec<String> {
    vec![
        "Paste a job description to get keyword matching + missing terms + skill priority.".to_string(),
        "Add a 2–3 line summary tailored to your target role.".to_string(),
        "Add 2–3 quantified achievements (%, time saved, users, accuracy, revenue).".to_string(),
    ]
}

pub fn executive_summary_with_jd(
    match_percent: u8,
    grade: Grade,
    strengths: &[String],
    improvements: &[String],
    missing: &[String],
) -> String {
    let strength = strengths
        .first()
        .map(String::as_str)
        .unwrap_or("You have a solid foundation.");
    let next_fix = improvements
        .first()
        .map(String::as_str)
        .unwrap_or("Add more role-specific keywords and measurable achievements.");
    let top_missing = if missing.is_empty() {
        "role-specific keywords".to_string()
    } else {
        head(missing, 7)
    };

    format!(
        "Score: **{}% match** • Grade: **{}**. Strength: {} Next fix: {} Add these skills/keywords naturally: {}.",
        match_percent, grade, strength, next_fix, top_missing
    )
}

pub fn executive_summary_resume_only(grade: Grade, best_role: &str) -> String {
    format!(
        "Resume-only analysis complete. Your grade is **{}**. Best-fit role: **{}**. \
         To improve: add measurable impact + include role keywords in Skills/Experience.",
        grade, best_role
    )
}

pub fn role_reason_with_jd(best_role: &str, match_percent: u8, priority: &SkillPriority) -> String {
    format!(
        "Recommended **{}** because your resume matches key skill buckets and aligns best with the JD keywords \
         (match={}%). Improve fastest by adding: {}.",
        best_role,
        match_percent,
        head(&priority.add_first, 5)
    )
}

fn head(items: &[String], n: usize) -> String {
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
