use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::scoring::{estimate_range, EstimatedRange, PricingModel, QuizStep};

/// Identifier wrapper for captured leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Raw funnel submission: contact details plus the stepId -> value
/// answer map, exactly as posted by the quiz front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

/// Repository record: the submission enriched with the computed
/// estimate and capture timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizLead {
    pub lead_id: LeadId,
    pub submission: LeadSubmission,
    pub estimate: EstimatedRange,
    pub captured_at: DateTime<Utc>,
}

/// Storage abstraction so the intake service can be exercised in
/// isolation; the real implementation lives with the database. Id
/// assignment belongs to the store (a database sequence, a UUID),
/// so ids survive restarts without colliding.
pub trait LeadRepository: Send + Sync {
    fn next_id(&self) -> LeadId;
    fn insert(&self, lead: QuizLead) -> Result<QuizLead, LeadRepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<QuizLead>, LeadRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LeadRepositoryError {
    #[error("lead already exists")]
    Conflict,
    #[error("lead not found")]
    NotFound,
    #[error("lead store unavailable: {0}")]
    Unavailable(String),
}

/// Outbound notification hook (the sales-inbox email adapter).
pub trait LeadNotifier: Send + Sync {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError>;
}

/// Payload handed to the notifier; the core never formats email
/// bodies beyond these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadNotification {
    pub lead_id: LeadId,
    pub contact_email: String,
    pub estimate: EstimatedRange,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Validation failures for a funnel submission.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("lead submission is missing a contact name")]
    MissingName,
    #[error("lead submission email `{0}` is not usable")]
    InvalidEmail(String),
}

/// Error raised by the lead intake service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Repository(#[from] LeadRepositoryError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Service composing the scoring engine, repository, and notifier.
/// Scoring itself stays pure; this type owns the side effects.
pub struct QuizLeadService<R, N> {
    steps: Vec<QuizStep>,
    model: PricingModel,
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> QuizLeadService<R, N>
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    pub fn new(
        steps: Vec<QuizStep>,
        model: PricingModel,
        repository: Arc<R>,
        notifier: Arc<N>,
    ) -> Self {
        Self {
            steps,
            model,
            repository,
            notifier,
        }
    }

    pub fn steps(&self) -> &[QuizStep] {
        &self.steps
    }

    /// Score the answers, persist the lead, and notify sales.
    pub fn capture(&self, submission: LeadSubmission) -> Result<QuizLead, LeadServiceError> {
        validate_submission(&submission)?;

        let estimate = estimate_range(&self.steps, &submission.answers, &self.model);
        let lead = QuizLead {
            lead_id: self.repository.next_id(),
            submission,
            estimate,
            captured_at: Utc::now(),
        };

        let stored = self.repository.insert(lead)?;

        let mut details = BTreeMap::new();
        details.insert("name".to_string(), stored.submission.name.clone());
        if let Some(company) = &stored.submission.company {
            details.insert("company".to_string(), company.clone());
        }
        self.notifier.notify(LeadNotification {
            lead_id: stored.lead_id.clone(),
            contact_email: stored.submission.email.clone(),
            estimate: stored.estimate,
            details,
        })?;

        info!(
            lead_id = %stored.lead_id.0,
            score = stored.estimate.score,
            "quiz lead captured"
        );
        Ok(stored)
    }

    pub fn get(&self, lead_id: &LeadId) -> Result<QuizLead, LeadServiceError> {
        let lead = self
            .repository
            .fetch(lead_id)?
            .ok_or(LeadRepositoryError::NotFound)?;
        Ok(lead)
    }
}

fn validate_submission(submission: &LeadSubmission) -> Result<(), SubmissionError> {
    if submission.name.trim().is_empty() {
        return Err(SubmissionError::MissingName);
    }
    let email = submission.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(SubmissionError::InvalidEmail(submission.email.clone()));
    }
    Ok(())
}
