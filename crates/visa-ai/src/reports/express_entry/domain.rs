use serde::{Deserialize, Serialize};

/// Structured Express Entry profile as submitted by the intake form.
///
/// Field names follow the client-facing camelCase wire format. The record is
/// read-only to the scoring engine; every derived quantity lives behind an
/// accessor so the lookup tables stay free of traversal logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmigrationProfile {
    pub basic_info: BasicInfo,
    pub language_info: LanguageInfo,
    pub education_info: EducationInfo,
    #[serde(default)]
    pub spouse_info: Option<SpouseInfo>,
    pub work_info: WorkInfo,
    #[serde(default)]
    pub job_offer_info: JobOfferInfo,
    pub connection_info: ConnectionInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub age: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    /// Language identity of the primary test, used to decide which test
    /// stands in for the French channel during category checks.
    pub primary_language: String,
    pub primary_language_test: LanguageTest,
    #[serde(default)]
    pub second_language_test: Option<LanguageTest>,
}

/// Canadian Language Benchmark equivalency converted from a proficiency
/// test. Zero means "not taken" or below the measurable floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageTest {
    pub clb_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationInfo {
    pub education_list: Vec<EducationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(rename = "type")]
    pub level: EducationLevel,
    pub country: String,
}

/// Credential tiers ranked by level; variant order is the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationLevel {
    HighSchool,
    OneYear,
    TwoYear,
    Bachelor,
    Masters,
    Phd,
}

impl EducationLevel {
    /// Index into the per-tier point tables.
    pub const fn rank(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high school",
            EducationLevel::OneYear => "one-year credential",
            EducationLevel::TwoYear => "two-year credential",
            EducationLevel::Bachelor => "bachelor's degree",
            EducationLevel::Masters => "master's degree",
            EducationLevel::Phd => "doctoral degree",
        }
    }

    /// One-year, two-year, and bachelor credentials.
    pub const fn is_post_secondary(self) -> bool {
        matches!(
            self,
            EducationLevel::OneYear | EducationLevel::TwoYear | EducationLevel::Bachelor
        )
    }

    /// Masters and doctoral credentials.
    pub const fn is_advanced(self) -> bool {
        matches!(self, EducationLevel::Masters | EducationLevel::Phd)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpouseInfo {
    pub marital_status: MaritalStatus,
    /// Spouse language is not captured; scoring assumes CLB 10 throughout.
    pub education_level: EducationLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkInfo {
    pub work_experience_list: Vec<WorkExperience>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub job_title: String,
    pub is_self_employed: bool,
    pub country: String,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub work_permit_type: Option<String>,
    /// Five-digit National Occupational Classification code.
    pub noc_code: String,
    pub is_current_job: bool,
    pub number_of_months: u32,
    /// Training/Education/Experience/Responsibility level, 0 through 5.
    pub teer: u8,
}

impl WorkExperience {
    pub fn in_canada(&self) -> bool {
        self.country.eq_ignore_ascii_case("canada")
    }

    /// TEER 0 through 3, the skilled band shared by the federal programs.
    pub fn is_skilled(&self) -> bool {
        self.teer <= 3
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOfferInfo {
    #[serde(default)]
    pub has_job_offer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub does_user_have_family_in_canada_who_is_citizen_or_permanent_resident: bool,
}

impl ImmigrationProfile {
    /// Spouse scoring paths activate only for a married applicant.
    pub fn has_spouse(&self) -> bool {
        self.spouse_info
            .as_ref()
            .map(|spouse| spouse.marital_status == MaritalStatus::Married)
            .unwrap_or(false)
    }

    pub fn married_spouse(&self) -> Option<&SpouseInfo> {
        self.spouse_info
            .as_ref()
            .filter(|spouse| spouse.marital_status == MaritalStatus::Married)
    }

    pub fn primary_clb(&self) -> u8 {
        self.language_info.primary_language_test.clb_score
    }

    /// CLB of the second official language test; zero when none was taken.
    pub fn second_clb(&self) -> u8 {
        self.language_info
            .second_language_test
            .map(|test| test.clb_score)
            .unwrap_or(0)
    }

    /// Highest credential across the education history. `None` for an empty
    /// list; callers surface that as an incomplete-profile error rather than
    /// defaulting.
    pub fn highest_education(&self) -> Option<EducationLevel> {
        self.education_info
            .education_list
            .iter()
            .map(|entry| entry.level)
            .max()
    }

    /// Total months worked in Canada across all entries.
    pub fn canadian_months(&self) -> u32 {
        self.work_info
            .work_experience_list
            .iter()
            .filter(|entry| entry.in_canada())
            .map(|entry| entry.number_of_months)
            .sum()
    }

    /// Total months worked outside Canada across all entries.
    pub fn foreign_months(&self) -> u32 {
        self.work_info
            .work_experience_list
            .iter()
            .filter(|entry| !entry.in_canada())
            .map(|entry| entry.number_of_months)
            .sum()
    }
}
