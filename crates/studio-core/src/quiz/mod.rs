//! Lead-qualification quiz: the scored funnel definition, the pure
//! estimate engine, and the intake service wiring repository and
//! notifier collaborators.

pub mod funnel;
pub mod leads;
mod router;
mod scoring;

pub use funnel::{standard_funnel, standard_pricing_model};
pub use leads::{
    LeadId, LeadNotification, LeadNotifier, LeadRepository, LeadRepositoryError, LeadServiceError,
    LeadSubmission, NotifyError, QuizLead, QuizLeadService, SubmissionError,
};
pub use router::lead_router;
pub use scoring::{
    estimate_range, total_score, ContactField, EstimatedRange, PricingModel, PricingModelError,
    QuizOption, QuizStep,
};
