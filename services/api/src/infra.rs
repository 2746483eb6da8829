use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use studio_core::catalog::ServiceCatalog;
use studio_core::quiz::{
    LeadId, LeadNotification, LeadNotifier, LeadRepository, LeadRepositoryError, NotifyError,
    QuizLead,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The standard catalog is immutable; share one instance per process.
pub(crate) fn catalog() -> &'static ServiceCatalog {
    static CATALOG: OnceLock<ServiceCatalog> = OnceLock::new();
    CATALOG.get_or_init(ServiceCatalog::standard)
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    sequence: Arc<AtomicU64>,
    leads: Arc<Mutex<HashMap<LeadId, QuizLead>>>,
}

impl LeadRepository for InMemoryLeadRepository {
    fn next_id(&self) -> LeadId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        LeadId(format!("lead-{id:06}"))
    }

    fn insert(&self, lead: QuizLead) -> Result<QuizLead, LeadRepositoryError> {
        let mut guard = self.leads.lock().expect("lead mutex poisoned");
        if guard.contains_key(&lead.lead_id) {
            return Err(LeadRepositoryError::Conflict);
        }
        guard.insert(lead.lead_id.clone(), lead.clone());
        Ok(lead)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<QuizLead>, LeadRepositoryError> {
        let guard = self.leads.lock().expect("lead mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadNotifier {
    sent: Arc<Mutex<Vec<LeadNotification>>>,
}

impl LeadNotifier for InMemoryLeadNotifier {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError> {
        let mut guard = self.sent.lock().expect("notify mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

impl InMemoryLeadNotifier {
    pub(crate) fn sent(&self) -> Vec<LeadNotification> {
        self.sent.lock().expect("notify mutex poisoned").clone()
    }
}
