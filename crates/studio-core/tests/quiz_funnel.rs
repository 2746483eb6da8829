use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use studio_core::quiz::{
    estimate_range, lead_router, standard_funnel, standard_pricing_model, LeadId, LeadNotification,
    LeadNotifier, LeadRepository, LeadRepositoryError, LeadSubmission, NotifyError, QuizLead,
    QuizLeadService, QuizStep,
};

#[derive(Default)]
struct MemoryRepository {
    sequence: AtomicU64,
    leads: Mutex<HashMap<LeadId, QuizLead>>,
}

impl LeadRepository for MemoryRepository {
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
        Ok(self.leads.lock().expect("lead mutex poisoned").get(id).cloned())
    }
}

#[derive(Default)]
struct MemoryNotifier {
    sent: Mutex<Vec<LeadNotification>>,
}

impl LeadNotifier for MemoryNotifier {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError> {
        self.sent.lock().expect("notify mutex poisoned").push(notification);
        Ok(())
    }
}

fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(step, value)| (step.to_string(), value.to_string()))
        .collect()
}

#[test]
fn funnel_estimates_grow_with_project_ambition() {
    let steps = standard_funnel();
    let model = standard_pricing_model();

    let modest = estimate_range(
        &steps,
        &answers(&[("project_type", "onepage"), ("pages", "small")]),
        &model,
    );
    let ambitious = estimate_range(
        &steps,
        &answers(&[
            ("project_type", "custom"),
            ("pages", "large"),
            ("features", "integrations"),
        ]),
        &model,
    );

    assert!(modest.score < ambitious.score);
    assert!(modest.min <= ambitious.min);
    assert!(modest.max <= ambitious.max);
    for bound in [modest.min, modest.max, ambitious.min, ambitious.max] {
        assert_eq!(bound % 50, 0, "estimates are quoted in steps of 50");
    }
}

#[test]
fn estimates_are_deterministic() {
    let steps = standard_funnel();
    let model = standard_pricing_model();
    let chosen = answers(&[("project_type", "ecommerce"), ("content", "none")]);

    let first = estimate_range(&steps, &chosen, &model);
    let second = estimate_range(&steps, &chosen, &model);
    assert_eq!(first, second);
}

#[test]
fn contact_and_summary_steps_never_affect_the_score() {
    let steps = standard_funnel();
    let model = standard_pricing_model();

    let base = answers(&[("project_type", "vetrina")]);
    let mut noisy = base.clone();
    noisy.insert("contact".to_string(), "anything".to_string());
    noisy.insert("summary".to_string(), "anything".to_string());

    assert_eq!(
        estimate_range(&steps, &base, &model),
        estimate_range(&steps, &noisy, &model)
    );
}

#[test]
fn captured_lead_carries_the_estimate_to_the_notifier() {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = QuizLeadService::new(
        standard_funnel(),
        standard_pricing_model(),
        repository.clone(),
        notifier.clone(),
    );

    let lead = service
        .capture(LeadSubmission {
            name: "Marco Bini".to_string(),
            email: "marco@bini.it".to_string(),
            phone: Some("333 1234567".to_string()),
            company: None,
            answers: answers(&[("project_type", "ecommerce"), ("timeline", "month")]),
        })
        .expect("capture succeeds");

    let stored = repository
        .fetch(&lead.lead_id)
        .expect("repository reachable")
        .expect("lead stored");
    assert_eq!(stored.estimate, lead.estimate);

    let sent = notifier.sent.lock().expect("notify mutex poisoned");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].estimate, lead.estimate);
    assert_eq!(sent[0].contact_email, "marco@bini.it");
}

#[tokio::test]
async fn lead_capture_round_trips_through_the_router() {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    let service = Arc::new(QuizLeadService::new(
        standard_funnel(),
        standard_pricing_model(),
        Arc::new(MemoryRepository::default()),
        Arc::new(MemoryNotifier::default()),
    ));
    let router = lead_router(service);

    let payload = serde_json::json!({
        "name": "Marco Bini",
        "email": "marco@bini.it",
        "answers": { "project_type": "vetrina" }
    });
    let captured = router
        .clone()
        .oneshot(
            Request::post("/api/v1/quiz/leads")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(captured.status(), StatusCode::ACCEPTED);

    let missing = router
        .oneshot(
            Request::get("/api/v1/quiz/leads/lead-unknown")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[test]
fn radio_steps_expose_their_scored_options() {
    let steps = standard_funnel();
    let radio_count = steps
        .iter()
        .filter(|step| matches!(step, QuizStep::Radio { .. }))
        .count();
    assert!(radio_count >= 4, "funnel keeps enough scored screens");

    for step in &steps {
        if let QuizStep::Radio { options, .. } = step {
            assert!(!options.is_empty());
            assert!(options.iter().any(|option| option.score.is_some()));
        }
    }
}
