use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One screen of the lead-qualification funnel. Only radio steps carry
/// scoring; contact and summary screens are presentation-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizStep {
    Radio {
        id: String,
        title: String,
        options: Vec<QuizOption>,
    },
    Contact {
        id: String,
        fields: Vec<ContactField>,
    },
    Summary {
        id: String,
    },
}

impl QuizStep {
    pub fn id(&self) -> &str {
        match self {
            QuizStep::Radio { id, .. } | QuizStep::Contact { id, .. } | QuizStep::Summary { id } => {
                id
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactField {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
}

/// Linear pricing model mapping a quiz score onto an estimate range.
///
/// Nothing in the formula forces `min <= max`; that depends entirely
/// on the configured constants, so [`PricingModel::validate`] exists
/// to catch inverted configurations before they reach a lead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingModel {
    pub base_min: f64,
    pub base_max: f64,
    pub score_multiplier_min: f64,
    pub score_multiplier_max: f64,
    pub cap_min: f64,
    pub cap_max: f64,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PricingModelError {
    #[error("pricing model contains a non-finite constant")]
    NonFinite,
    #[error("pricing model caps are inverted (cap_min {cap_min} > cap_max {cap_max})")]
    InvertedCaps { cap_min: f64, cap_max: f64 },
    #[error("pricing model can produce min > max (base {base_min}/{base_max}, multiplier {multiplier_min}/{multiplier_max})")]
    InvertibleRange {
        base_min: f64,
        base_max: f64,
        multiplier_min: f64,
        multiplier_max: f64,
    },
}

impl PricingModel {
    /// Reports configurations able to produce an inverted range.
    /// Validation never repairs the model; an inverted estimate is a
    /// configuration bug, not something to paper over at runtime.
    pub fn validate(&self) -> Result<(), PricingModelError> {
        let constants = [
            self.base_min,
            self.base_max,
            self.score_multiplier_min,
            self.score_multiplier_max,
            self.cap_min,
            self.cap_max,
        ];
        if constants.iter().any(|value| !value.is_finite()) {
            return Err(PricingModelError::NonFinite);
        }
        if self.cap_min > self.cap_max {
            return Err(PricingModelError::InvertedCaps {
                cap_min: self.cap_min,
                cap_max: self.cap_max,
            });
        }
        if self.base_min > self.base_max || self.score_multiplier_min > self.score_multiplier_max {
            return Err(PricingModelError::InvertibleRange {
                base_min: self.base_min,
                base_max: self.base_max,
                multiplier_min: self.score_multiplier_min,
                multiplier_max: self.score_multiplier_max,
            });
        }
        Ok(())
    }
}

/// Estimate produced for a completed funnel. Both bounds are exact
/// multiples of 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedRange {
    pub min: i64,
    pub max: i64,
    pub score: i32,
}

/// Sum the scores of the chosen radio options. Unanswered steps,
/// unknown option values, and options without a score all count zero;
/// contact and summary steps are skipped.
pub fn total_score(steps: &[QuizStep], answers: &HashMap<String, String>) -> i32 {
    steps
        .iter()
        .filter_map(|step| match step {
            QuizStep::Radio { id, options, .. } => {
                let chosen = answers.get(id)?;
                options
                    .iter()
                    .find(|option| option.value == *chosen)
                    .and_then(|option| option.score)
            }
            QuizStep::Contact { .. } | QuizStep::Summary { .. } => None,
        })
        .sum()
}

fn round_to_50(value: f64) -> i64 {
    (value / 50.0).round() as i64 * 50
}

/// Map the funnel answers through the pricing model. Each raw bound
/// is rounded to a whole amount, clamped against its cap, and then
/// snapped to the 50 step. Pure: the same (steps, answers, model)
/// inputs always produce the same range.
pub fn estimate_range(
    steps: &[QuizStep],
    answers: &HashMap<String, String>,
    model: &PricingModel,
) -> EstimatedRange {
    let score = total_score(steps, answers);
    let score_f = f64::from(score);

    let raw_min = (model.base_min + score_f * model.score_multiplier_min)
        .round()
        .max(model.cap_min);
    let raw_max = (model.base_max + score_f * model.score_multiplier_max)
        .round()
        .min(model.cap_max);

    EstimatedRange {
        min: round_to_50(raw_min),
        max: round_to_50(raw_max),
        score,
    }
}
