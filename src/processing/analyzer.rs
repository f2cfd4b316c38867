//! Analysis engine combining metric scoring, keyword matching, role ranking and advice

use crate::config::Config;
use crate::error::Result;
use crate::processing::metrics::{self, AtsCheck, Grade, MetricScorer};
use crate::processing::recommendations::{
    self, BulletRewrite, SkillPriority, IMPROVEMENTS_CAP, ROLE_REASON_RESUME_ONLY, STRENGTHS_CAP,
};
use crate::processing::role_fit::{RoleFitBreakdown, RoleRanker, RoleRanking};
use crate::processing::similarity::{KeywordOverlap, SimilarityEngine};
use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Number of top job description keywords checked against the resume
pub const DEFAULT_KEYWORD_POOL: usize = 45;

const SIMILARITY_WEIGHT: f64 = 0.55;
const OVERLAP_WEIGHT: f64 = 0.45;
const SUGGESTED_FROM_TOP_SKILLS: usize = 8;
const SUGGESTED_FROM_MISSING: usize = 10;
const NO_ROLE: &str = "—";

/// What the resume is being measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobInput<'a> {
    ResumeOnly,
    /// Trimmed, non-empty job description text
    WithJob(&'a str),
}

impl<'a> JobInput<'a> {
    /// Blank text selects the resume-only path
    pub fn from_text(jd_text: &'a str) -> Self {
        let trimmed = jd_text.trim();
        if trimmed.is_empty() {
            JobInput::ResumeOnly
        } else {
            JobInput::WithJob(trimmed)
        }
    }

    pub fn job_text(&self) -> Option<&'a str> {
        match self {
            JobInput::ResumeOnly => None,
            JobInput::WithJob(text) => Some(text),
        }
    }
}

/// Complete, immutable outcome of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_percent: u8,
    pub overall_score: f64,
    pub grade_label: Grade,

    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub suggested_keywords: Vec<String>,

    pub formatting: f64,
    pub content_quality: f64,
    pub ats_compatibility: f64,
    pub keyword_usage: f64,

    pub executive_summary: String,
    #[serde(default)]
    pub ats_checklist: Vec<AtsCheck>,
    #[serde(default)]
    pub recommended_roles: Vec<String>,
    pub role_reason: String,
    #[serde(default)]
    pub role_fit_breakdown: RoleFitBreakdown,

    #[serde(default)]
    pub skill_priority: SkillPriority,
    #[serde(default)]
    pub top_skills_to_add: Vec<String>,
    #[serde(default)]
    pub learning_plan: Vec<String>,
    #[serde(default)]
    pub project_ideas: Vec<String>,
    #[serde(default)]
    pub bullet_rewrites: Vec<BulletRewrite>,
}

impl AnalysisResult {
    pub fn best_role(&self) -> Option<&str> {
        self.recommended_roles.first().map(String::as_str)
    }
}

/// Raw metric scores before rounding
struct Metrics {
    formatting: f64,
    content_quality: f64,
    ats_compatibility: f64,
    keyword_usage: f64,
}

impl Metrics {
    fn overall(&self) -> f64 {
        let sum = self.formatting + self.content_quality + self.ats_compatibility + self.keyword_usage;
        (sum / 4.0).clamp(0.0, 10.0)
    }
}

/// Path-specific pieces of the result
struct PathOutcome {
    match_percent: u8,
    overlap: KeywordOverlap,
    priority: SkillPriority,
    strengths: Vec<String>,
    improvements: Vec<String>,
    suggested_keywords: Vec<String>,
    executive_summary: String,
    role_reason: String,
}

/// Stateless resume analyzer; build once and share freely across threads
pub struct ResumeAnalyzer {
    text_processor: TextProcessor,
    similarity: SimilarityEngine,
    scorer: MetricScorer,
    ranker: RoleRanker,
    keyword_pool: usize,
}

impl ResumeAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            text_processor: TextProcessor::new(),
            similarity: SimilarityEngine::new(),
            scorer: MetricScorer::new()?,
            ranker: RoleRanker::new()?,
            keyword_pool: DEFAULT_KEYWORD_POOL,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new()?.with_keyword_pool(config.analysis.jd_keyword_pool))
    }

    pub fn with_keyword_pool(mut self, keyword_pool: usize) -> Self {
        self.keyword_pool = keyword_pool.max(1);
        self
    }

    /// Analyze a resume; an empty or whitespace job description means resume-only
    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> AnalysisResult {
        self.analyze_input(resume_text, JobInput::from_text(jd_text))
    }

    pub fn analyze_input(&self, resume_text: &str, job: JobInput<'_>) -> AnalysisResult {
        let start_time = Instant::now();

        let ranking = self.ranker.rank(resume_text, job.job_text());
        let best_role = ranking.best_role().unwrap_or(NO_ROLE).to_string();

        let outcome = match job {
            JobInput::ResumeOnly => self.resume_only(resume_text, &best_role),
            JobInput::WithJob(jd_text) => self.with_job(resume_text, jd_text, &best_role),
        };

        let scores = Metrics {
            formatting: self.scorer.formatting(resume_text),
            content_quality: self.scorer.content_quality(resume_text),
            ats_compatibility: metrics::ats_compatibility(resume_text),
            keyword_usage: metrics::keyword_usage(job.job_text().map(|_| outcome.match_percent)),
        };
        let overall = scores.overall();
        let grade = Grade::from_score(overall);

        let outcome = self.finish_outcome(outcome, &scores, grade, &best_role, job);

        log::debug!(
            "Analysis ({}) finished in {:?}: match={}%, overall={:.2}, grade={}, best role={}",
            if job.job_text().is_some() { "resume+jd" } else { "resume-only" },
            start_time.elapsed(),
            outcome.match_percent,
            overall,
            grade,
            best_role
        );

        self.assemble(resume_text, outcome, scores, overall, grade, ranking, &best_role)
    }

    fn resume_only(&self, resume_text: &str, best_role: &str) -> PathOutcome {
        let candidates = self.ranker.missing_for_role(best_role, resume_text);
        let priority = SkillPriority::from_ranked(&candidates);
        let suggested_keywords = priority
            .top_skills()
            .into_iter()
            .take(SUGGESTED_FROM_TOP_SKILLS)
            .collect();

        PathOutcome {
            match_percent: 0,
            overlap: KeywordOverlap {
                matched: Vec::new(),
                missing: Vec::new(),
            },
            priority,
            strengths: recommendations::resume_only_strengths(),
            improvements: recommendations::resume_only_improvements(),
            suggested_keywords,
            executive_summary: String::new(),
            role_reason: ROLE_REASON_RESUME_ONLY.to_string(),
        }
    }

    fn with_job(&self, resume_text: &str, jd_text: &str, best_role: &str) -> PathOutcome {
        let sim = self.similarity.similarity(resume_text, jd_text);
        let overlap = self
            .similarity
            .keyword_overlap(&self.text_processor, resume_text, jd_text, self.keyword_pool);
        let match_percent = match_percent(sim, overlap.ratio());

        log::debug!(
            "Similarity {:.3}, overlap {}/{} keywords",
            sim,
            overlap.matched.len(),
            overlap.matched.len() + overlap.missing.len()
        );

        let priority = SkillPriority::from_job_description(&self.text_processor, &overlap.missing, jd_text);
        let suggested_keywords = overlap
            .missing
            .iter()
            .take(SUGGESTED_FROM_MISSING)
            .cloned()
            .collect();
        let role_reason = recommendations::role_reason_with_jd(best_role, match_percent, &priority);

        PathOutcome {
            match_percent,
            overlap,
            priority,
            strengths: Vec::new(),
            improvements: Vec::new(),
            suggested_keywords,
            executive_summary: String::new(),
            role_reason,
        }
    }

    /// Fill in the text that depends on the final scores
    fn finish_outcome(
        &self,
        mut outcome: PathOutcome,
        scores: &Metrics,
        grade: Grade,
        best_role: &str,
        job: JobInput<'_>,
    ) -> PathOutcome {
        match job {
            JobInput::ResumeOnly => {
                outcome.executive_summary = recommendations::executive_summary_resume_only(grade, best_role);
            }
            JobInput::WithJob(_) => {
                outcome.strengths = recommendations::strengths_from_metrics(
                    scores.formatting,
                    scores.content_quality,
                    scores.keyword_usage,
                );
                outcome.improvements = recommendations::improvements_from_metrics(
                    scores.formatting,
                    scores.content_quality,
                    scores.keyword_usage,
                    &outcome.overlap.missing,
                );
                outcome.executive_summary = recommendations::executive_summary_with_jd(
                    outcome.match_percent,
                    grade,
                    &outcome.strengths,
                    &outcome.improvements,
                    &outcome.overlap.missing,
                );
            }
        }
        outcome
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        &self,
        resume_text: &str,
        outcome: PathOutcome,
        scores: Metrics,
        overall: f64,
        grade: Grade,
        ranking: RoleRanking,
        best_role: &str,
    ) -> AnalysisResult {
        let PathOutcome {
            match_percent,
            overlap,
            priority,
            mut strengths,
            mut improvements,
            suggested_keywords,
            executive_summary,
            role_reason,
        } = outcome;

        strengths.truncate(STRENGTHS_CAP);
        improvements.truncate(IMPROVEMENTS_CAP);

        let learning_plan = recommendations::learning_plan(best_role, &priority, &improvements);
        let project_ideas = recommendations::project_ideas(best_role, &priority);
        let bullet_rewrites = recommendations::bullet_rewrites(&self.scorer, resume_text);

        AnalysisResult {
            match_percent,
            overall_score: metrics::round1(overall),
            grade_label: grade,
            strengths,
            improvements,
            matched_keywords: overlap.matched,
            missing_keywords: overlap.missing,
            suggested_keywords,
            formatting: metrics::round1(scores.formatting),
            content_quality: metrics::round1(scores.content_quality),
            ats_compatibility: metrics::round1(scores.ats_compatibility),
            keyword_usage: metrics::round1(scores.keyword_usage),
            executive_summary,
            ats_checklist: self.scorer.ats_checklist(resume_text),
            recommended_roles: ranking.recommended_roles,
            role_reason,
            role_fit_breakdown: ranking.breakdown,
            top_skills_to_add: priority.top_skills(),
            skill_priority: priority,
            learning_plan,
            project_ideas,
            bullet_rewrites,
        }
    }
}

/// Blend of document similarity and keyword overlap, as a whole percentage
pub fn match_percent(similarity: f64, overlap_ratio: f64) -> u8 {
    let blended = (SIMILARITY_WEIGHT * similarity + OVERLAP_WEIGHT * overlap_ratio) * 100.0;
    blended.round_ties_even().clamp(0.0, 100.0) as u8
}
