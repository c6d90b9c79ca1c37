use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use visa_ai::reports::express_entry::{
    ReportId, ReportRecord, ReportRepository, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryReportRepository {
    records: Arc<Mutex<HashMap<ReportId, ReportRecord>>>,
}

impl ReportRepository for InMemoryReportRepository {
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
        records.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        records.truncate(limit);
        Ok(records)
    }
}
