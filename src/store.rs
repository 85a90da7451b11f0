//! Persistence seam for generated reports.
//!
//! The pipeline itself never persists anything — callers take the returned
//! plan, wrap it in a `SavedReport` scoped to their user identity, and hand
//! it to a `ReportStore`. The backing store is opaque to this crate; the
//! in-memory implementation serves tests and embedding callers.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::models::SavedReport;

/// Opaque keyed document store for generated reports.
pub trait ReportStore {
    fn get(&self, report_id: &Uuid) -> Option<SavedReport>;
    fn put(&self, report: SavedReport);
    /// All reports saved under one user identity, newest first.
    fn list_for_user(&self, user_id: &str) -> Vec<SavedReport>;
}

/// Process-lifetime report store backed by a guarded map.
pub struct InMemoryReportStore {
    reports: Mutex<HashMap<Uuid, SavedReport>>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self {
            reports: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, SavedReport>> {
        match self.reports.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for InMemoryReportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore for InMemoryReportStore {
    fn get(&self, report_id: &Uuid) -> Option<SavedReport> {
        self.lock().get(report_id).cloned()
    }

    fn put(&self, report: SavedReport) {
        self.lock().insert(report.report_id, report);
    }

    fn list_for_user(&self, user_id: &str) -> Vec<SavedReport> {
        let mut reports: Vec<SavedReport> = self
            .lock()
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssessmentInput, Gender, Mobility, RehabPlanOutput, Support};

    fn sample_report(user_id: &str) -> SavedReport {
        let assessment = AssessmentInput {
            job: "engineer".into(),
            symptoms: "back pain".into(),
            age: 35,
            gender: Gender::Male,
            neck_control: Support::Yes,
            trunk_control: Support::Yes,
            standing: Mobility::Yes,
            walking: Mobility::Yes,
            medications: "no".into(),
            fractures: "no".into(),
        };
        let plan = RehabPlanOutput {
            initial_diagnosis: "d".into(),
            prognosis: "p".into(),
            rehab_plan: "r".into(),
            precautions: "pr".into(),
            medications_influence: "m".into(),
            fractures_influence: "f".into(),
            review_appointments: "ra".into(),
        };
        SavedReport::new(user_id, assessment, plan)
    }

    #[test]
    fn put_then_get_round_trips() {
        let store = InMemoryReportStore::new();
        let report = sample_report("user-1");
        let id = report.report_id;

        store.put(report.clone());
        assert_eq!(store.get(&id).unwrap(), report);
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = InMemoryReportStore::new();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn listing_is_scoped_to_the_user() {
        let store = InMemoryReportStore::new();
        store.put(sample_report("alice"));
        store.put(sample_report("alice"));
        store.put(sample_report("bob"));

        assert_eq!(store.list_for_user("alice").len(), 2);
        assert_eq!(store.list_for_user("bob").len(), 1);
        assert!(store.list_for_user("carol").is_empty());
    }

    #[test]
    fn put_same_id_overwrites() {
        let store = InMemoryReportStore::new();
        let mut report = sample_report("alice");
        store.put(report.clone());

        report.plan.prognosis = "updated".into();
        store.put(report.clone());

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&report.report_id).unwrap().plan.prognosis, "updated");
    }
}
