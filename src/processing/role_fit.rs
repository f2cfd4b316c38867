//! Role-fit ranking against the static role catalog

use crate::error::Result;
use crate::processing::catalog::{RoleProfile, SkillBucket, ROLE_PROFILES, SKILL_BUCKETS};
use crate::processing::keywords::KeywordSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const RECOMMENDED_ROLES: usize = 10;
const BREAKDOWN_ROLES: usize = 8;

const MUST_WEIGHT: u32 = 6;
const NICE_WEIGHT: u32 = 2;
const JD_MUST_WEIGHT: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleScore {
    pub role: String,
    pub score: u32,
    pub must_hits: u32,
    pub nice_hits: u32,
    pub bucket_score: u32,
    pub jd_bonus: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketHit {
    pub bucket: String,
    pub hits: u32,
}

/// Diagnostic view of how the ranking was reached
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleFitBreakdown {
    #[serde(default)]
    pub bucket_hits: Vec<BucketHit>,
    #[serde(default)]
    pub role_scores: Vec<RoleScore>,
}

#[derive(Debug, Clone)]
pub struct RoleRanking {
    pub recommended_roles: Vec<String>,
    pub breakdown: RoleFitBreakdown,
}

impl RoleRanking {
    pub fn best_role(&self) -> Option<&str> {
        self.recommended_roles.first().map(String::as_str)
    }
}

struct CompiledRole {
    profile: &'static RoleProfile,
    must: KeywordSet,
    nice: KeywordSet,
}

struct CompiledBucket {
    bucket: &'static SkillBucket,
    keywords: KeywordSet,
}

pub struct RoleRanker {
    roles: Vec<CompiledRole>,
    buckets: Vec<CompiledBucket>,
}

impl RoleRanker {
    pub fn new() -> Result<Self> {
        let roles = ROLE_PROFILES
            .iter()
            .map(|profile| {
                Ok(CompiledRole {
                    profile,
                    must: KeywordSet::new(profile.must)?,
                    nice: KeywordSet::new(profile.nice)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let buckets = SKILL_BUCKETS
            .iter()
            .map(|bucket| {
                Ok(CompiledBucket {
                    bucket,
                    keywords: KeywordSet::new(bucket.keywords)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { roles, buckets })
    }

    /// Buckets with at least one keyword present, in catalog order
    pub fn bucket_hits(&self, resume_lower: &str) -> Vec<BucketHit> {
        self.buckets
            .iter()
            .filter_map(|compiled| {
                let hits = compiled.keywords.count_present(resume_lower) as u32;
                (hits > 0).then(|| BucketHit {
                    bucket: compiled.bucket.name.to_string(),
                    hits,
                })
            })
            .collect()
    }

    /// Rank every catalog role against the resume, with a bonus for roles the job description echoes
    pub fn rank(&self, resume_text: &str, jd_text: Option<&str>) -> RoleRanking {
        let resume_lower = resume_text.to_lowercase();
        let jd_lower = jd_text.map(str::to_lowercase);

        let bucket_hits = self.bucket_hits(&resume_lower);

        let mut scores: Vec<RoleScore> = self
            .roles
            .iter()
            .map(|compiled| {
                let must_hits = compiled.must.count_present(&resume_lower) as u32;
                let nice_hits = compiled.nice.count_present(&resume_lower) as u32;

                let bucket_score: u32 = bucket_hits
                    .iter()
                    .filter(|hit| compiled.profile.category_bias.contains(&hit.bucket.as_str()))
                    .map(|hit| hit.hits)
                    .sum();

                let jd_bonus = jd_lower.as_deref().map_or(0, |jd| {
                    JD_MUST_WEIGHT * compiled.must.count_present(jd) as u32
                        + compiled.nice.count_present(jd) as u32
                });

                RoleScore {
                    role: compiled.profile.name.to_string(),
                    score: MUST_WEIGHT * must_hits + NICE_WEIGHT * nice_hits + bucket_score + jd_bonus,
                    must_hits,
                    nice_hits,
                    bucket_score,
                    jd_bonus,
                }
            })
            .collect();

        // stable: ties keep catalog order
        scores.sort_by(|a, b| b.score.cmp(&a.score));

        let recommended_roles = scores
            .iter()
            .take(RECOMMENDED_ROLES)
            .map(|s| s.role.clone())
            .collect();
        scores.truncate(BREAKDOWN_ROLES);

        RoleRanking {
            recommended_roles,
            breakdown: RoleFitBreakdown {
                bucket_hits,
                role_scores: scores,
            },
        }
    }

    /// A role's nice-to-have then must-have keywords that the resume lacks, without duplicates
    pub fn missing_for_role(&self, role_name: &str, resume_text: &str) -> Vec<String> {
        let Some(compiled) = self.roles.iter().find(|r| r.profile.name == role_name) else {
            return Vec::new();
        };

        let resume_lower = resume_text.to_lowercase();
        let mut seen = HashSet::new();

        compiled
            .nice
            .absent(&resume_lower)
            .into_iter()
            .chain(compiled.must.absent(&resume_lower))
            .filter(|keyword| seen.insert(*keyword))
            .map(str::to_string)
            .collect()
    }
}
