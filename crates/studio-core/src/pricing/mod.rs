//! Quote pricing: turns a site-type choice plus a list of service
//! selections into one-time and recurring subtotals, with an explicit
//! policy for selections that no longer resolve against the catalog.

use crate::catalog::{ServiceCatalog, ServiceItem};
use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

/// A catalog item the client chose to include in the quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedService {
    pub service_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SelectedService {
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            quantity: 1,
            custom_price: None,
            notes: None,
        }
    }

    /// Quantity with the floor of 1 applied. UIs adjust quantity
    /// incrementally, but the engine never trusts the floor held.
    pub fn effective_quantity(&self) -> u32 {
        self.quantity.max(1)
    }
}

/// Computed subtotals of a quote. `recurring` collects every amount
/// billed on a cadence; it is never discounted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub total: f64,
    pub recurring: f64,
}

/// How to treat a selection whose id is missing from the catalog.
///
/// `Lenient` reproduces the historical behavior (the selection
/// contributes zero) but makes it a deliberate, testable choice;
/// `Strict` surfaces the first unresolved id to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
    #[default]
    Lenient,
    Strict,
}

/// Per-selection outcome produced by [`itemize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub service_id: String,
    pub amount: f64,
    pub recurring: bool,
    /// False when the lenient policy skipped an unresolvable id.
    pub resolved: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("selection references unknown service id `{service_id}`")]
pub struct UnresolvedReference {
    pub service_id: String,
}

fn sanitized(price: f64) -> f64 {
    if price.is_finite() {
        price
    } else {
        0.0
    }
}

fn line_amount(item: &ServiceItem, selection: &SelectedService) -> f64 {
    let unit_price = sanitized(selection.custom_price.unwrap_or(item.price));
    unit_price * f64::from(selection.effective_quantity())
}

/// Resolve every selection into a [`Contribution`], applying `policy`
/// to ids the catalog does not know. The site type, when present,
/// contributes at quantity 1 with no price override.
pub fn itemize(
    catalog: &ServiceCatalog,
    selected_site_type: Option<&str>,
    selections: &[SelectedService],
    policy: ResolutionPolicy,
) -> Result<Vec<Contribution>, UnresolvedReference> {
    let mut contributions = Vec::with_capacity(selections.len() + 1);

    if let Some(site_type_id) = selected_site_type {
        match catalog.find(site_type_id) {
            Some(item) => contributions.push(Contribution {
                service_id: item.id.clone(),
                amount: sanitized(item.price),
                recurring: item.price_unit.is_recurring(),
                resolved: true,
            }),
            None if policy == ResolutionPolicy::Strict => {
                return Err(UnresolvedReference {
                    service_id: site_type_id.to_string(),
                })
            }
            None => contributions.push(Contribution {
                service_id: site_type_id.to_string(),
                amount: 0.0,
                recurring: false,
                resolved: false,
            }),
        }
    }

    for selection in selections {
        match catalog.find(&selection.service_id) {
            Some(item) => contributions.push(Contribution {
                service_id: item.id.clone(),
                amount: line_amount(item, selection),
                recurring: item.price_unit.is_recurring(),
                resolved: true,
            }),
            None if policy == ResolutionPolicy::Strict => {
                return Err(UnresolvedReference {
                    service_id: selection.service_id.clone(),
                })
            }
            None => contributions.push(Contribution {
                service_id: selection.service_id.clone(),
                amount: 0.0,
                recurring: false,
                resolved: false,
            }),
        }
    }

    Ok(contributions)
}

/// Lenient subtotal computation: unresolved ids contribute zero.
pub fn compute_totals(
    catalog: &ServiceCatalog,
    selected_site_type: Option<&str>,
    selections: &[SelectedService],
) -> QuoteTotals {
    let contributions = itemize(
        catalog,
        selected_site_type,
        selections,
        ResolutionPolicy::Lenient,
    )
    .unwrap_or_default();

    contributions
        .iter()
        .fold(QuoteTotals::default(), |mut totals, contribution| {
            if contribution.recurring {
                totals.recurring += contribution.amount;
            } else {
                totals.total += contribution.amount;
            }
            totals
        })
}

/// Apply a percentage discount to the one-time total. The percent is
/// not clamped; UIs constrain the range, the formula only guards
/// against non-finite input so NaN cannot reach the document.
pub fn compute_discounted_total(total: f64, discount_percent: f64) -> f64 {
    let discount_percent = if discount_percent.is_finite() {
        discount_percent
    } else {
        0.0
    };
    total * (1.0 - discount_percent / 100.0)
}
