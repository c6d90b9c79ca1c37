use super::common::*;
use crate::reports::express_entry::domain::{ImmigrationProfile, LanguageTest};
use crate::reports::express_entry::scoring::{
    assess_program_eligibility, CEC_NAME, FSTP_NAME, FSWP_NAME,
};

fn set_primary_clb(profile: &mut ImmigrationProfile, clb: u8) {
    profile.language_info.primary_language_test = LanguageTest { clb_score: clb };
}

#[test]
fn checks_are_returned_in_fixed_order() {
    let result = assess_program_eligibility(&base_profile());
    let programs: Vec<&str> = result
        .eligibility_status
        .iter()
        .map(|check| check.program.as_str())
        .collect();
    assert_eq!(programs, vec![FSWP_NAME, CEC_NAME, FSTP_NAME]);
}

#[test]
fn fswp_accepts_foreign_skilled_year_with_clb_seven() {
    let mut profile = profile_with_work(vec![work("21232", 3, "India", 12)]);
    set_primary_clb(&mut profile, 7);

    let result = assess_program_eligibility(&profile);
    assert!(result.eligibility_status[0].is_eligible);
}

#[test]
fn fswp_rejects_clb_six_with_language_reason() {
    let mut profile = profile_with_work(vec![work("21232", 3, "India", 12)]);
    set_primary_clb(&mut profile, 6);

    let result = assess_program_eligibility(&profile);
    let fswp = &result.eligibility_status[0];
    assert!(!fswp.is_eligible);
    assert!(fswp.reason[0].contains("below the required minimum of CLB 7"));
}

#[test]
fn fswp_accumulates_months_across_entries() {
    let mut profile = profile_with_work(vec![
        work("21232", 2, "India", 6),
        work("31102", 1, "Germany", 6),
    ]);
    set_primary_clb(&mut profile, 8);

    let result = assess_program_eligibility(&profile);
    assert!(result.eligibility_status[0].is_eligible);
}

#[test]
fn fswp_experience_shortfall_reported_before_language() {
    let mut profile = profile_with_work(vec![work("21232", 2, "India", 11)]);
    set_primary_clb(&mut profile, 4);

    let result = assess_program_eligibility(&profile);
    let fswp = &result.eligibility_status[0];
    assert!(!fswp.is_eligible);
    assert!(fswp.reason[0].contains("Less than 12 months"));
}

#[test]
fn cec_requires_clb_seven_for_teer_one_experience() {
    let mut profile = profile_with_work(vec![work("21232", 1, "Canada", 12)]);

    set_primary_clb(&mut profile, 6);
    let result = assess_program_eligibility(&profile);
    let cec = &result.eligibility_status[1];
    assert!(!cec.is_eligible);
    assert!(cec.reason[0].contains("requires CLB 7"));

    set_primary_clb(&mut profile, 7);
    let result = assess_program_eligibility(&profile);
    assert!(result.eligibility_status[1].is_eligible);
}

#[test]
fn cec_threshold_follows_minimum_teer_across_entries() {
    // A TEER 3 year alone needs only CLB 5; adding a TEER 1 year raises the
    // bar to CLB 7.
    let mut profile = profile_with_work(vec![work("73100", 3, "Canada", 14)]);
    set_primary_clb(&mut profile, 5);
    let result = assess_program_eligibility(&profile);
    assert!(result.eligibility_status[1].is_eligible);

    profile
        .work_info
        .work_experience_list
        .push(work("21232", 1, "Canada", 12));
    let result = assess_program_eligibility(&profile);
    assert!(!result.eligibility_status[1].is_eligible);
}

#[test]
fn cec_accepts_year_accrued_over_short_stints() {
    let mut profile = profile_with_work(vec![
        work("73100", 2, "Canada", 6),
        work("73100", 2, "Canada", 6),
    ]);
    set_primary_clb(&mut profile, 5);

    let result = assess_program_eligibility(&profile);
    assert!(result.eligibility_status[1].is_eligible);
}

#[test]
fn cec_rejects_without_canadian_experience() {
    let result = assess_program_eligibility(&base_profile());
    let cec = &result.eligibility_status[1];
    assert!(!cec.is_eligible);
    assert!(cec.reason[0].contains("skilled Canadian"));
}

#[test]
fn fstp_requires_trade_months_language_and_offer() {
    let mut profile = profile_with_work(vec![work("72400", 3, "India", 24)]);
    set_primary_clb(&mut profile, 5);
    profile.job_offer_info.has_job_offer = true;

    let result = assess_program_eligibility(&profile);
    assert!(result.eligibility_status[2].is_eligible);

    profile.job_offer_info.has_job_offer = false;
    let result = assess_program_eligibility(&profile);
    let fstp = &result.eligibility_status[2];
    assert!(!fstp.is_eligible);
    assert!(fstp.reason[0].contains("job offer"));
}

#[test]
fn fstp_rejects_below_twenty_four_trade_months() {
    let mut profile = profile_with_work(vec![work("72400", 3, "India", 23)]);
    set_primary_clb(&mut profile, 9);
    profile.job_offer_info.has_job_offer = true;

    let result = assess_program_eligibility(&profile);
    let fstp = &result.eligibility_status[2];
    assert!(!fstp.is_eligible);
    assert!(fstp.reason[0].contains("Less than 24 months"));
}

#[test]
fn fstp_ignores_experience_outside_trade_groups() {
    // TEER matches but the NOC prefix is not an eligible trade group.
    let mut profile = profile_with_work(vec![work("31102", 3, "Canada", 36)]);
    set_primary_clb(&mut profile, 9);
    profile.job_offer_info.has_job_offer = true;

    let result = assess_program_eligibility(&profile);
    assert!(!result.eligibility_status[2].is_eligible);
}

#[test]
fn assessment_is_idempotent() {
    let profile = base_profile();
    assert_eq!(
        assess_program_eligibility(&profile),
        assess_program_eligibility(&profile)
    );
}
