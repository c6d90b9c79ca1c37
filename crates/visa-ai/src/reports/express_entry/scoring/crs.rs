use super::tables;
use super::{CrsBreakdown, CrsResult, ScoreBreakdown};
use crate::reports::express_entry::domain::{EducationLevel, ImmigrationProfile};
use crate::reports::express_entry::intake::IncompleteProfile;

/// Compute the full Comprehensive Ranking System result for one profile.
///
/// The total is the exact sum of the four bucket scores; no cap is applied
/// beyond each bucket's internal ones. Fails only when the profile carries
/// no education history, which leaves the core education lookup undefined.
pub fn calculate_crs_score(profile: &ImmigrationProfile) -> Result<CrsResult, IncompleteProfile> {
    let education = profile
        .highest_education()
        .ok_or(IncompleteProfile::NoEducationHistory)?;

    let core_human_capital = core_human_capital(profile, education);
    let spouse_factors = spouse_factors(profile);
    let skill_transferability = skill_transferability(profile, education);
    let additional_points = additional_points(profile, education);

    let crs_score = core_human_capital.score
        + spouse_factors.score
        + skill_transferability.score
        + additional_points.score;

    Ok(CrsResult {
        crs_score,
        score_breakdown: ScoreBreakdown {
            core_human_capital,
            spouse_factors,
            skill_transferability,
            additional_points,
        },
    })
}

fn months_to_years(months: u32) -> f64 {
    f64::from(months) / 12.0
}

fn core_human_capital(profile: &ImmigrationProfile, education: EducationLevel) -> CrsBreakdown {
    let with_spouse = profile.has_spouse();
    let spouse_label = if with_spouse {
        "with spouse"
    } else {
        "without spouse"
    };

    let age = profile.basic_info.age;
    let age_points = tables::age_points(age, with_spouse);

    let education_points = tables::education_points(education, with_spouse);

    let primary_clb = profile.primary_clb();
    let first_language_points = tables::first_language_points(primary_clb, with_spouse);

    let second_clb = profile.second_clb();
    let second_language_points = tables::second_language_points(second_clb, with_spouse);

    let canadian_months = profile.canadian_months();
    let work_points = tables::canadian_work_points(canadian_months, with_spouse);

    let reason = vec![
        format!("Age {age} contributes {age_points} points ({spouse_label})"),
        format!(
            "Highest credential ({}) contributes {education_points} points",
            education.label()
        ),
        format!("Primary language CLB {primary_clb} contributes {first_language_points} points"),
        format!("Second language CLB {second_clb} contributes {second_language_points} points"),
        format!(
            "Canadian work experience of {:.1} years contributes {work_points} points",
            months_to_years(canadian_months)
        ),
    ];

    CrsBreakdown {
        score: age_points
            + education_points
            + first_language_points
            + second_language_points
            + work_points,
        maximum: tables::CORE_MAXIMUM,
        reason,
    }
}

fn spouse_factors(profile: &ImmigrationProfile) -> CrsBreakdown {
    let Some(spouse) = profile.married_spouse() else {
        return CrsBreakdown {
            score: 0,
            maximum: tables::SPOUSE_MAXIMUM,
            reason: vec!["No spouse factors applied".to_string()],
        };
    };

    let education_points = tables::SPOUSE_EDUCATION_POINTS[spouse.education_level.rank()];
    let work_points = tables::SPOUSE_CANADIAN_WORK_POINTS;
    let language_points = tables::SPOUSE_LANGUAGE_POINTS;

    CrsBreakdown {
        score: education_points + work_points + language_points,
        maximum: tables::SPOUSE_MAXIMUM,
        reason: vec![
            format!(
                "Spouse education ({}) contributes {education_points} points",
                spouse.education_level.label()
            ),
            format!("Spouse Canadian work experience contributes {work_points} points"),
            format!("Spouse language ability contributes {language_points} points"),
        ],
    }
}

fn skill_transferability(profile: &ImmigrationProfile, education: EducationLevel) -> CrsBreakdown {
    let education_row = education_tier(education);
    let language_column = clb_tier(profile.primary_clb());
    let canadian_column = canadian_experience_tier(profile.canadian_months());
    let foreign_row = foreign_experience_tier(profile.foreign_months());

    let education_with_language = tables::transfer_points(education_row, language_column);
    let education_with_canadian = tables::transfer_points(education_row, canadian_column);
    let foreign_with_language = tables::transfer_points(foreign_row, language_column);
    let foreign_with_canadian = tables::transfer_points(foreign_row, canadian_column);

    let score = (education_with_language + education_with_canadian).min(tables::TRANSFER_PAIR_CAP)
        + (foreign_with_language + foreign_with_canadian).min(tables::TRANSFER_PAIR_CAP);

    CrsBreakdown {
        score,
        maximum: tables::TRANSFER_MAXIMUM,
        reason: vec![
            format!("Education with language proficiency contributes {education_with_language} points"),
            format!("Education with Canadian experience contributes {education_with_canadian} points"),
            format!("Foreign experience with language proficiency contributes {foreign_with_language} points"),
            format!("Foreign experience with Canadian experience contributes {foreign_with_canadian} points"),
        ],
    }
}

fn additional_points(profile: &ImmigrationProfile, education: EducationLevel) -> CrsBreakdown {
    let study_bonus = match education {
        EducationLevel::OneYear | EducationLevel::TwoYear => tables::CANADIAN_STUDY_BONUS_SHORT,
        EducationLevel::Bachelor | EducationLevel::Masters | EducationLevel::Phd => {
            tables::CANADIAN_STUDY_BONUS_DEGREE
        }
        EducationLevel::HighSchool => 0,
    };

    let sibling_bonus = if profile
        .connection_info
        .does_user_have_family_in_canada_who_is_citizen_or_permanent_resident
    {
        tables::SIBLING_IN_CANADA_BONUS
    } else {
        0
    };

    let french_bonus = french_bonus(profile.primary_clb(), profile.second_clb());

    CrsBreakdown {
        score: study_bonus + sibling_bonus + french_bonus,
        maximum: tables::ADDITIONAL_MAXIMUM,
        reason: vec![
            format!("Canadian education contributes {study_bonus} points"),
            format!("Sibling in Canada contributes {sibling_bonus} points"),
            format!("French proficiency contributes {french_bonus} points"),
        ],
    }
}

/// Strong French on the second channel earns the full bonus only alongside a
/// functional first channel.
fn french_bonus(primary_clb: u8, second_clb: u8) -> u32 {
    if second_clb < tables::FRENCH_BONUS_MIN_CLB {
        return 0;
    }
    if primary_clb >= tables::FRENCH_BONUS_OTHER_CHANNEL_MIN_CLB {
        tables::FRENCH_BONUS_WITH_OTHER_LANGUAGE
    } else {
        tables::FRENCH_BONUS_ALONE
    }
}

fn education_tier(level: EducationLevel) -> Option<usize> {
    if level.is_advanced() {
        Some(1)
    } else if level.is_post_secondary() {
        Some(0)
    } else {
        None
    }
}

fn clb_tier(clb: u8) -> Option<usize> {
    if clb >= tables::TRANSFER_CLB_HIGH {
        Some(1)
    } else if clb >= tables::TRANSFER_CLB_LOW {
        Some(0)
    } else {
        None
    }
}

fn canadian_experience_tier(months: u32) -> Option<usize> {
    if months >= tables::TRANSFER_CANADIAN_HIGH_MONTHS {
        Some(1)
    } else if months >= tables::TRANSFER_CANADIAN_LOW_MONTHS {
        Some(0)
    } else {
        None
    }
}

fn foreign_experience_tier(months: u32) -> Option<usize> {
    if months >= tables::TRANSFER_FOREIGN_HIGH_MONTHS {
        Some(1)
    } else if months >= tables::TRANSFER_FOREIGN_LOW_MONTHS {
        Some(0)
    } else {
        None
    }
}
