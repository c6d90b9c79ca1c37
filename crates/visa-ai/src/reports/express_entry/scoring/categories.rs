use super::noc;
use super::{CategoryCheck, CategoryEligibilityResult};
use crate::reports::express_entry::domain::ImmigrationProfile;
use std::collections::HashSet;

pub const FRENCH_CATEGORY: &str = "French-language proficiency";
pub const HEALTHCARE_CATEGORY: &str = "Healthcare and social services occupations";
pub const STEM_CATEGORY: &str = "Science, Technology, Engineering and Math (STEM) occupations";
pub const TRADE_CATEGORY: &str = "Trade occupations";
pub const AGRICULTURE_CATEGORY: &str = "Agriculture and agri-food occupations";
pub const EDUCATION_CATEGORY: &str = "Education occupations";

const CATEGORY_MIN_MONTHS: u32 = 6;
const FRENCH_MIN_CLB: u8 = 7;

/// Evaluate the six category-based selection streams in their fixed order.
pub fn assess_category_based_eligibility(
    profile: &ImmigrationProfile,
) -> CategoryEligibilityResult {
    CategoryEligibilityResult {
        category_based_eligibility: [
            french_check(profile),
            noc_check(
                profile,
                HEALTHCARE_CATEGORY,
                &noc::HEALTHCARE_SOCIAL_NOC,
                "healthcare or social services",
            ),
            noc_check(profile, STEM_CATEGORY, &noc::STEM_NOC, "STEM"),
            noc_check(profile, TRADE_CATEGORY, &noc::TRADE_NOC, "trade"),
            noc_check(
                profile,
                AGRICULTURE_CATEGORY,
                &noc::AGRI_FOOD_NOC,
                "agriculture or agri-food",
            ),
            noc_check(profile, EDUCATION_CATEGORY, &noc::EDUCATION_NOC, "education"),
        ],
    }
}

/// The checked test is the second test when the primary language is French,
/// and the primary test otherwise.
fn french_check(profile: &ImmigrationProfile) -> CategoryCheck {
    let primary_is_french = profile
        .language_info
        .primary_language
        .eq_ignore_ascii_case("french");

    let channel_clb = if primary_is_french {
        profile
            .language_info
            .second_language_test
            .map(|test| test.clb_score)
    } else {
        Some(profile.language_info.primary_language_test.clb_score)
    };

    let (is_eligible, reason) = match channel_clb {
        Some(clb) if clb >= FRENCH_MIN_CLB => (
            true,
            format!("French test CLB {clb} meets the CLB 7 threshold."),
        ),
        Some(clb) => (
            false,
            format!("Highest CLB on the French channel is {clb}, below 7."),
        ),
        None => (false, "No valid French language test found.".to_string()),
    };

    CategoryCheck {
        program: FRENCH_CATEGORY.to_string(),
        is_eligible,
        reason,
    }
}

/// At least six months in a single role whose NOC code belongs to the set.
fn has_category_experience(profile: &ImmigrationProfile, codes: &HashSet<&'static str>) -> bool {
    profile
        .work_info
        .work_experience_list
        .iter()
        .any(|entry| {
            codes.contains(entry.noc_code.as_str()) && entry.number_of_months >= CATEGORY_MIN_MONTHS
        })
}

fn noc_check(
    profile: &ImmigrationProfile,
    program: &str,
    codes: &HashSet<&'static str>,
    noun: &str,
) -> CategoryCheck {
    let is_eligible = has_category_experience(profile, codes);

    let reason = if is_eligible {
        format!("Has at least 6 months of experience in a targeted {noun} occupation in the last 3 years.")
    } else {
        format!("No six months of continuous experience in the listed {noun} occupations.")
    };

    CategoryCheck {
        program: program.to_string(),
        is_eligible,
        reason,
    }
}
