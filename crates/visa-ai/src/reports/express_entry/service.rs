use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::ImmigrationProfile;
use super::intake::{IncompleteProfile, ProfileIntake};
use super::repository::{ReportId, ReportRecord, ReportRepository, RepositoryError};
use super::scoring::ExpressEntryReport;

/// Service composing intake validation, the scoring engine, and storage.
pub struct ExpressEntryReportService<R> {
    intake: ProfileIntake,
    repository: Arc<R>,
}

static REPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_report_id() -> ReportId {
    let id = REPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReportId(format!("report-{id:06}"))
}

impl<R> ExpressEntryReportService<R>
where
    R: ReportRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            intake: ProfileIntake,
            repository,
        }
    }

    /// Score a submitted profile and persist the resulting report.
    pub fn generate(
        &self,
        profile: ImmigrationProfile,
    ) -> Result<ReportRecord, ReportServiceError> {
        self.intake.validate(&profile)?;
        let report = ExpressEntryReport::assemble(&profile)?;

        let record = ReportRecord {
            report_id: next_report_id(),
            profile,
            report,
            generated_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Score a profile without persisting anything.
    pub fn preview(
        &self,
        profile: &ImmigrationProfile,
    ) -> Result<ExpressEntryReport, ReportServiceError> {
        self.intake.validate(profile)?;
        Ok(ExpressEntryReport::assemble(profile)?)
    }

    /// Fetch a stored report for API responses.
    pub fn get(&self, report_id: &ReportId) -> Result<ReportRecord, ReportServiceError> {
        let record = self
            .repository
            .fetch(report_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Most recently generated reports, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<ReportRecord>, ReportServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the report service.
#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error(transparent)]
    Intake(#[from] IncompleteProfile),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
