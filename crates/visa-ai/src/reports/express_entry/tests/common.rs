use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::reports::express_entry::domain::{
    BasicInfo, ConnectionInfo, EducationEntry, EducationInfo, EducationLevel, ImmigrationProfile,
    JobOfferInfo, LanguageInfo, LanguageTest, MaritalStatus, SpouseInfo, WorkExperience, WorkInfo,
};
use crate::reports::express_entry::repository::{
    ReportId, ReportRecord, ReportRepository, RepositoryError,
};
use crate::reports::express_entry::service::ExpressEntryReportService;

pub(super) fn work(noc_code: &str, teer: u8, country: &str, months: u32) -> WorkExperience {
    WorkExperience {
        job_title: "Worker".to_string(),
        is_self_employed: false,
        country: country.to_string(),
        province: None,
        work_permit_type: None,
        noc_code: noc_code.to_string(),
        is_current_job: false,
        number_of_months: months,
        teer,
    }
}

/// Single 25-year-old, bachelor's from India, CLB 9 primary / CLB 5 second,
/// three years of foreign TEER 2 experience, no job offer, no family ties.
/// CRS for this profile is 483: core 378, transferability 75, additional 30.
pub(super) fn base_profile() -> ImmigrationProfile {
    ImmigrationProfile {
        basic_info: BasicInfo { age: 25 },
        language_info: LanguageInfo {
            primary_language: "English".to_string(),
            primary_language_test: LanguageTest { clb_score: 9 },
            second_language_test: Some(LanguageTest { clb_score: 5 }),
        },
        education_info: EducationInfo {
            education_list: vec![EducationEntry {
                level: EducationLevel::Bachelor,
                country: "India".to_string(),
            }],
        },
        spouse_info: None,
        work_info: WorkInfo {
            work_experience_list: vec![work("21232", 2, "India", 36)],
        },
        job_offer_info: JobOfferInfo {
            has_job_offer: false,
        },
        connection_info: ConnectionInfo {
            does_user_have_family_in_canada_who_is_citizen_or_permanent_resident: false,
        },
    }
}

pub(super) fn married_profile() -> ImmigrationProfile {
    let mut profile = base_profile();
    profile.spouse_info = Some(SpouseInfo {
        marital_status: MaritalStatus::Married,
        education_level: EducationLevel::Bachelor,
    });
    profile
}

pub(super) fn profile_with_work(entries: Vec<WorkExperience>) -> ImmigrationProfile {
    let mut profile = base_profile();
    profile.work_info.work_experience_list = entries;
    profile
}

#[derive(Default, Clone)]
pub(super) struct MemoryReportRepository {
    pub(super) records: Arc<Mutex<HashMap<ReportId, ReportRecord>>>,
}

impl ReportRepository for MemoryReportRepository {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.report_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.report_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ReportRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<ReportRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| {
            (b.generated_at, &b.report_id.0).cmp(&(a.generated_at, &a.report_id.0))
        });
        records.truncate(limit);
        Ok(records)
    }
}

pub(super) struct ConflictReportRepository;

impl ReportRepository for ConflictReportRepository {
    fn insert(&self, _record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ReportRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) fn build_service() -> (
    ExpressEntryReportService<MemoryReportRepository>,
    Arc<MemoryReportRepository>,
) {
    let repository = Arc::new(MemoryReportRepository::default());
    let service = ExpressEntryReportService::new(repository.clone());
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
