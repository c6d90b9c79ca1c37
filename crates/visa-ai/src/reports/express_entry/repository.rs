use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::ImmigrationProfile;
use super::scoring::ExpressEntryReport;

/// Identifier wrapper for generated reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub String);

/// Repository record pairing the submitted profile with its generated
/// report. Immutable once stored; regenerating produces a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub report_id: ReportId,
    pub profile: ImmigrationProfile,
    pub report: ExpressEntryReport,
    pub generated_at: DateTime<Utc>,
}

impl ReportRecord {
    pub fn summary_view(&self) -> ReportSummaryView {
        ReportSummaryView {
            report_id: self.report_id.clone(),
            crs_score: self.report.express_entry_profile.crs_score,
            eligible_programs: self
                .report
                .eligibility_status
                .iter()
                .filter(|check| check.is_eligible)
                .map(|check| check.program.clone())
                .collect(),
            generated_at: self.generated_at,
        }
    }
}

/// Sanitized representation used by list and status responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummaryView {
    pub report_id: ReportId,
    pub crs_score: u32,
    pub eligible_programs: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError>;
    fn fetch(&self, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<ReportRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
