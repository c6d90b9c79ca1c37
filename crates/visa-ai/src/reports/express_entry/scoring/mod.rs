//! The three pure assessors and their result shapes.
//!
//! Each assessor is a stateless function over the shared profile record.
//! They are independent of each other and may be invoked concurrently;
//! re-invoking with an identical profile yields an identical result.

mod categories;
mod crs;
mod noc;
mod programs;
pub(crate) mod tables;

pub use categories::{
    assess_category_based_eligibility, AGRICULTURE_CATEGORY, EDUCATION_CATEGORY, FRENCH_CATEGORY,
    HEALTHCARE_CATEGORY, STEM_CATEGORY, TRADE_CATEGORY,
};
pub use crs::calculate_crs_score;
pub use programs::{assess_program_eligibility, CEC_NAME, FSTP_NAME, FSWP_NAME};

use crate::reports::express_entry::domain::ImmigrationProfile;
use crate::reports::express_entry::intake::IncompleteProfile;
use serde::{Deserialize, Serialize};

/// One scored bucket of the CRS breakdown, with per-line justifications so
/// the derivation can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrsBreakdown {
    pub score: u32,
    pub maximum: u32,
    pub reason: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub core_human_capital: CrsBreakdown,
    pub spouse_factors: CrsBreakdown,
    pub skill_transferability: CrsBreakdown,
    pub additional_points: CrsBreakdown,
}

/// Comprehensive Ranking System result. The total is always the exact sum
/// of the four bucket scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrsResult {
    pub crs_score: u32,
    pub score_breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramCheck {
    pub program: String,
    pub is_eligible: bool,
    pub reason: Vec<String>,
}

/// Federal program checks in fixed order: FSWP, CEC, FSTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramEligibilityResult {
    pub eligibility_status: [ProgramCheck; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCheck {
    pub program: String,
    pub is_eligible: bool,
    pub reason: String,
}

/// Category-based checks in fixed order: French, healthcare, STEM, trades,
/// agriculture, education.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEligibilityResult {
    pub category_based_eligibility: [CategoryCheck; 6],
}

/// Unified report merging the three assessor outputs, in the shape the
/// advisory layer persists and serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressEntryReport {
    pub category_based_eligibility: [CategoryCheck; 6],
    pub express_entry_profile: CrsResult,
    pub eligibility_status: [ProgramCheck; 3],
}

impl ExpressEntryReport {
    /// Run all three assessors over one profile and merge their outputs.
    /// There is no dependency order between them.
    pub fn assemble(profile: &ImmigrationProfile) -> Result<Self, IncompleteProfile> {
        let crs = calculate_crs_score(profile)?;
        let programs = assess_program_eligibility(profile);
        let categories = assess_category_based_eligibility(profile);

        Ok(Self {
            category_based_eligibility: categories.category_based_eligibility,
            express_entry_profile: crs,
            eligibility_status: programs.eligibility_status,
        })
    }
}
