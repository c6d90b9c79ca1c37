use super::noc::TRADE_GROUP_PREFIXES;
use super::{ProgramCheck, ProgramEligibilityResult};
use crate::reports::express_entry::domain::ImmigrationProfile;

pub const FSWP_NAME: &str = "Federal Skilled Worker Program (FSWP)";
pub const CEC_NAME: &str = "Canadian Experience Class (CEC)";
pub const FSTP_NAME: &str = "Federal Skilled Trades Program (FSTP)";

const FSWP_MIN_MONTHS: u32 = 12;
const FSWP_MIN_CLB: u8 = 7;
const CEC_MIN_MONTHS: u32 = 12;
const CEC_CLB_TEER_0_1: u8 = 7;
const CEC_CLB_TEER_2_3: u8 = 5;
const FSTP_MIN_MONTHS: u32 = 24;
const FSTP_MIN_CLB: u8 = 5;

/// Evaluate the three federal programs in their fixed order. Each check
/// short-circuits: the first unmet condition supplies the reason and later
/// conditions are not consulted.
pub fn assess_program_eligibility(profile: &ImmigrationProfile) -> ProgramEligibilityResult {
    ProgramEligibilityResult {
        eligibility_status: [fswp_check(profile), cec_check(profile), fstp_check(profile)],
    }
}

/// Cumulative months across TEER 0-3 entries, optionally restricted to
/// Canadian positions.
fn skilled_months(profile: &ImmigrationProfile, canada_only: bool) -> u32 {
    profile
        .work_info
        .work_experience_list
        .iter()
        .filter(|entry| entry.is_skilled() && (!canada_only || entry.in_canada()))
        .map(|entry| entry.number_of_months)
        .sum()
}

fn fswp_check(profile: &ImmigrationProfile) -> ProgramCheck {
    let clb = profile.primary_clb();

    let (is_eligible, reason) = if skilled_months(profile, false) < FSWP_MIN_MONTHS {
        (
            false,
            "Less than 12 months of TEER 0-3 work experience in the last 10 years.".to_string(),
        )
    } else if clb < FSWP_MIN_CLB {
        (
            false,
            format!("Language CLB {clb} is below the required minimum of CLB 7."),
        )
    } else {
        (
            true,
            "Has at least 12 months of TEER 0-3 work experience and CLB 7 or higher.".to_string(),
        )
    };

    ProgramCheck {
        program: FSWP_NAME.to_string(),
        is_eligible,
        reason: vec![reason],
    }
}

fn cec_check(profile: &ImmigrationProfile) -> ProgramCheck {
    let clb = profile.primary_clb();

    let (is_eligible, reason) = if skilled_months(profile, true) < CEC_MIN_MONTHS {
        (
            false,
            "Less than 12 months of skilled Canadian (TEER 0-3) work experience in the past 3 years."
                .to_string(),
        )
    } else {
        let teer = minimum_qualifying_teer(profile);
        let required_clb = if teer <= 1 {
            CEC_CLB_TEER_0_1
        } else {
            CEC_CLB_TEER_2_3
        };

        if clb < required_clb {
            (
                false,
                format!(
                    "Canadian experience at TEER {teer} requires CLB {required_clb}, but language CLB is {clb}."
                ),
            )
        } else {
            (
                true,
                format!(
                    "Has at least 12 months of Canadian TEER {teer} experience and CLB {clb} meets the required CLB {required_clb}."
                ),
            )
        }
    };

    ProgramCheck {
        program: CEC_NAME.to_string(),
        is_eligible,
        reason: vec![reason],
    }
}

/// Minimum TEER across Canadian entries holding a full year in role; falls
/// back to the skilled Canadian entries when the qualifying year was accrued
/// over shorter stints.
fn minimum_qualifying_teer(profile: &ImmigrationProfile) -> u8 {
    let entries = &profile.work_info.work_experience_list;

    entries
        .iter()
        .filter(|entry| entry.in_canada() && entry.number_of_months >= CEC_MIN_MONTHS)
        .map(|entry| entry.teer)
        .min()
        .or_else(|| {
            entries
                .iter()
                .filter(|entry| entry.in_canada() && entry.is_skilled())
                .map(|entry| entry.teer)
                .min()
        })
        .unwrap_or(0)
}

/// Cumulative months across TEER 2-3 entries in the eligible trade
/// occupation groups.
fn trade_months(profile: &ImmigrationProfile) -> u32 {
    profile
        .work_info
        .work_experience_list
        .iter()
        .filter(|entry| matches!(entry.teer, 2 | 3) && in_trade_group(&entry.noc_code))
        .map(|entry| entry.number_of_months)
        .sum()
}

fn in_trade_group(noc_code: &str) -> bool {
    TRADE_GROUP_PREFIXES
        .iter()
        .any(|prefix| noc_code.starts_with(prefix))
}

fn fstp_check(profile: &ImmigrationProfile) -> ProgramCheck {
    let clb = profile.primary_clb();

    let (is_eligible, reason) = if trade_months(profile) < FSTP_MIN_MONTHS {
        (
            false,
            "Less than 24 months of TEER 2-3 trade experience in eligible NOC groups in the last 5 years."
                .to_string(),
        )
    } else if clb < FSTP_MIN_CLB {
        (
            false,
            format!("Language CLB {clb} is below the required minimum of CLB 5."),
        )
    } else if !profile.job_offer_info.has_job_offer {
        (
            false,
            "No valid one-year job offer or provincial/federal trade certification.".to_string(),
        )
    } else {
        (
            true,
            "Has 24 months of TEER 2-3 trade experience in eligible NOC groups, CLB 5 or higher, and a job offer."
                .to_string(),
        )
    };

    ProgramCheck {
        program: FSTP_NAME.to_string(),
        is_eligible,
        reason: vec![reason],
    }
}
