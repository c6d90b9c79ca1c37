use super::domain::ImmigrationProfile;

const MAX_AGE: u8 = 125;
const MAX_CLB: u8 = 10;
const MAX_TEER: u8 = 5;

/// Validation errors raised before a profile reaches the scoring engine.
///
/// The engine itself never guesses at missing data; a profile that cannot be
/// scored faithfully is rejected here instead of silently producing zeros.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IncompleteProfile {
    #[error("profile has no education history")]
    NoEducationHistory,
    #[error("age {found} is outside the supported range 0-{MAX_AGE}")]
    AgeOutOfRange { found: u8 },
    #[error("CLB score {found} is outside the supported range 0-{MAX_CLB}")]
    ClbOutOfRange { found: u8 },
    #[error("TEER level {found} is outside the supported range 0-{MAX_TEER}")]
    TeerOutOfRange { found: u8 },
}

/// Stateless gate producing scoring-ready profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileIntake;

impl ProfileIntake {
    pub fn validate(&self, profile: &ImmigrationProfile) -> Result<(), IncompleteProfile> {
        if profile.education_info.education_list.is_empty() {
            return Err(IncompleteProfile::NoEducationHistory);
        }

        let age = profile.basic_info.age;
        if age > MAX_AGE {
            return Err(IncompleteProfile::AgeOutOfRange { found: age });
        }

        let primary_clb = profile.primary_clb();
        if primary_clb > MAX_CLB {
            return Err(IncompleteProfile::ClbOutOfRange { found: primary_clb });
        }
        if let Some(test) = profile.language_info.second_language_test {
            if test.clb_score > MAX_CLB {
                return Err(IncompleteProfile::ClbOutOfRange {
                    found: test.clb_score,
                });
            }
        }

        for entry in &profile.work_info.work_experience_list {
            if entry.teer > MAX_TEER {
                return Err(IncompleteProfile::TeerOutOfRange { found: entry.teer });
            }
        }

        Ok(())
    }
}
