//! Express Entry profile intake, scoring, and report assembly.
//!
//! The scoring engine (CRS calculator plus the program and category
//! assessors) is pure and deterministic; intake validation, the report
//! repository, and the HTTP router wrap it into the advisory workflow.

pub mod domain;
pub(crate) mod intake;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    BasicInfo, ConnectionInfo, EducationEntry, EducationInfo, EducationLevel, ImmigrationProfile,
    JobOfferInfo, LanguageInfo, LanguageTest, MaritalStatus, SpouseInfo, WorkExperience, WorkInfo,
};
pub use intake::{IncompleteProfile, ProfileIntake};
pub use repository::{
    ReportId, ReportRecord, ReportRepository, ReportSummaryView, RepositoryError,
};
pub use router::report_router;
pub use scoring::{
    assess_category_based_eligibility, assess_program_eligibility, calculate_crs_score,
    CategoryCheck, CategoryEligibilityResult, CrsBreakdown, CrsResult, ExpressEntryReport,
    ProgramCheck, ProgramEligibilityResult, ScoreBreakdown, AGRICULTURE_CATEGORY, CEC_NAME,
    EDUCATION_CATEGORY, FRENCH_CATEGORY, FSTP_NAME, FSWP_NAME, HEALTHCARE_CATEGORY, STEM_CATEGORY,
    TRADE_CATEGORY,
};
pub use service::{ExpressEntryReportService, ReportServiceError};
